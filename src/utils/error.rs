use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("service '{name}' could not be resolved: {reason}")]
    ResolutionError { name: String, reason: String },

    #[error("invocation of '{method}' failed: {reason}")]
    InvocationError { method: String, reason: String },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, GreeterError>;
