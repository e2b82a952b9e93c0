use thiserror::Error;

// * Errors raised while constructing a process object from the context.
#[derive(Error, Debug)]
pub enum ObjectError {
    #[error("Object '{0}' not found in <objects>")]
    UnknownObject(String),

    #[error("Settings node <{section} name=\"{name}\"> not found in <settings>")]
    SettingsNotFound { section: String, name: String },
}
