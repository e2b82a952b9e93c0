// * Report pipeline: variant definitions, line rendering and the reporter itself.

pub mod render;
pub mod reporter;
pub mod variant;

pub use render::{render, write_report, FieldValue, ReportError, ReportLine};
pub use reporter::{ReporterError, ReporterOptions, TestObjectReporter};
pub use variant::{Field, InitMode, OutputFormat, ReportVariant};
