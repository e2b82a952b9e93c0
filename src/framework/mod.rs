// * Minimal uniset-style framework: configuration, object index and timers.

pub mod context;
pub mod errors;
pub mod index;
pub mod timer;
pub mod xml;

// * Numeric identifier of sensors, objects, controllers, services and nodes
pub type ObjectId = i64;

pub use context::Context;
pub use errors::FrameworkError;
pub use index::{IoType, ObjectIndex, ObjectInfo, Section};
pub use timer::PassiveTimer;
pub use xml::{UniXml, XmlNode};
