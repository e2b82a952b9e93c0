use std::path::PathBuf;
use thiserror::Error;

// * Unified Error type for framework initialization.
#[derive(Error, Debug)]
pub enum FrameworkError {
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML in '{path}': {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("<{0}> not found in configuration")]
    MissingNode(String),

    #[error("Section <{0}> has no items")]
    EmptySection(String),

    #[error("Section <{0}> has no 'section' or 'name' property")]
    UnnamedSection(String),

    #[error("Item '{name}' in section <{section}> has no id")]
    MissingId { section: String, name: String },

    #[error("Duplicate id {id}: '{first}' and '{second}'")]
    DuplicateId {
        id: i64,
        first: String,
        second: String,
    },

    #[error("Local node '{0}' not found in <nodes>")]
    UnknownLocalNode(String),
}
