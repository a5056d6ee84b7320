use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl ProjError {
    /// Reject a non-finite coordinate component, naming it in the message.
    pub(crate) fn check_finite(name: &str, value: f64) -> Result<f64, ProjError> {
        if value.is_finite() {
            Ok(value)
        } else {
            Err(ProjError::InvalidInput(format!("{name} must be finite, got {value}")))
        }
    }
}
