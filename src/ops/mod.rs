// * Operations: logging setup for the binary and for tests

pub mod telemetry;

pub use telemetry::{init_tracing, init_tracing_pretty, init_tracing_with_level};
