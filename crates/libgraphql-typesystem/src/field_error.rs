use crate::Value;
use thiserror::Error;

/// An error produced by a field resolver.
#[derive(Clone, Debug, Error, PartialEq)]
#[error("{message}")]
pub struct FieldError {
    extensions: Option<Value>,
    message: String,
}

impl FieldError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            extensions: None,
            message: message.into(),
        }
    }

    pub fn with_extensions(mut self, extensions: Value) -> Self {
        self.extensions = Some(extensions);
        self
    }

    pub fn extensions(&self) -> Option<&Value> {
        self.extensions.as_ref()
    }

    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}
