//! Error types for the Tati Nails site

use thiserror::Error;

/// A booking field failed its rule.
///
/// Only the first failing field is ever reported. The `Display` text is what
/// the visitor sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Name missing or shorter than two characters after trimming
    #[error("Пожалуйста, введите ваше имя (минимум 2 символа)")]
    Name,

    /// Phone missing or fewer than ten digits
    #[error("Пожалуйста, введите корректный номер телефона")]
    Phone,

    /// Date missing or not a calendar date
    #[error("Пожалуйста, выберите дату записи")]
    Date,
}

impl ValidationError {
    /// Name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::Name => "name",
            ValidationError::Phone => "phone",
            ValidationError::Date => "date",
        }
    }
}

/// The outbound booking request failed before it left the client.
///
/// The endpoint's response is never read, so HTTP status codes never show up
/// here.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Request body could not be encoded
    #[error("Encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// HTTP client failed to send the request
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Endpoint could not be reached (used by non-HTTP transports)
    #[error("Endpoint unreachable: {0}")]
    Unreachable(String),
}

/// Main error type for site operations
#[derive(Error, Debug)]
pub enum SiteError {
    /// Visitor input rejected
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Booking request failed at the transport level
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Site configuration is unusable
    #[error("Config error: {0}")]
    Config(String),
}

/// Result type alias using SiteError
pub type SiteResult<T> = Result<T, SiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display_is_user_message() {
        assert_eq!(
            ValidationError::Phone.to_string(),
            "Пожалуйста, введите корректный номер телефона"
        );
        assert_eq!(ValidationError::Date.field(), "date");
    }

    #[test]
    fn test_error_from_validation() {
        let err: SiteError = ValidationError::Name.into();
        assert!(matches!(err, SiteError::Validation(ValidationError::Name)));
    }

    #[test]
    fn test_error_from_transport() {
        let err: SiteError = TransportError::Unreachable("offline".to_string()).into();
        assert_eq!(
            format!("{}", err),
            "Transport error: Endpoint unreachable: offline"
        );
    }
}
