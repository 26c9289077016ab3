use std::fmt::{Display, Formatter};

use serde_json::Value;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ObjectErrorCode {
    TypeMismatch,
    SerializationLoss,
}

impl ObjectErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectErrorCode::TypeMismatch => "object/type-mismatch",
            ObjectErrorCode::SerializationLoss => "object/serialization-loss",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ObjectError {
    pub code: ObjectErrorCode,
    message: String,
}

impl ObjectError {
    pub fn new(code: ObjectErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code_str(&self) -> &'static str {
        self.code.as_str()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ObjectError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code_str())
    }
}

impl std::error::Error for ObjectError {}

pub type ObjectResult<T> = Result<T, ObjectError>;

pub fn type_mismatch(message: impl Into<String>) -> ObjectError {
    ObjectError::new(ObjectErrorCode::TypeMismatch, message)
}

pub fn serialization_loss(message: impl Into<String>) -> ObjectError {
    ObjectError::new(ObjectErrorCode::SerializationLoss, message)
}

/// Builds the `TypeMismatch` error raised when `operation` receives something other than a mapping.
pub(crate) fn expected_object(operation: &str, actual: Option<&Value>) -> ObjectError {
    let error = type_mismatch(format!(
        "{operation} expected an object but received {}",
        kind_of(actual)
    ));
    log::debug!("{error}");
    error
}

pub(crate) fn kind_of(value: Option<&Value>) -> &'static str {
    match value {
        None => "undefined",
        Some(Value::Null) => "null",
        Some(Value::Bool(_)) => "boolean",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Array(_)) => "array",
        Some(Value::Object(_)) => "object",
    }
}
