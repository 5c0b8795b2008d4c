use soap_client::SoapError;
use thiserror::Error;

/// Errors returned by FedEx web service requests
///
/// Service-reported errors (`Failure`, `Service`, `PostalCodeNotFound`,
/// `InvalidPostalCodeFormat`) carry the notification code and message
/// exactly as the service sent them. The remaining variants describe
/// failures before a reply could be interpreted.
#[derive(Debug, Error)]
pub enum FedexError {
    /// The service reported a FAILURE, usually an outage or an
    /// authentication problem unrelated to the request content
    #[error("FedEx failure (code {code}): {message}")]
    Failure { code: String, message: String },

    /// An ERROR notification that no more specific rule matched
    #[error("FedEx error (code {code}): {message}")]
    Service { code: String, message: String },

    /// The postal code does not exist for the given country
    #[error("Postal code not found (code {code}): {message}")]
    PostalCodeNotFound { code: String, message: String },

    /// The postal code is not in a valid format for the given country
    #[error("Invalid postal code format (code {code}): {message}")]
    InvalidPostalCodeFormat { code: String, message: String },

    /// The service rejected the request document with a SOAP fault
    ///
    /// This happens when the payload does not validate against the
    /// service schema, for example missing required or unexpected fields.
    #[error("Schema validation error ({code}): {message}")]
    SchemaValidation { code: String, message: String },

    /// Network communication error
    #[error("Network error: {0}")]
    Network(String),

    /// The reply could not be parsed
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid or incomplete client configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

impl FedexError {
    /// Notification code for service-reported errors
    pub fn code(&self) -> Option<&str> {
        match self {
            FedexError::Failure { code, .. }
            | FedexError::Service { code, .. }
            | FedexError::PostalCodeNotFound { code, .. }
            | FedexError::InvalidPostalCodeFormat { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Notification message for service-reported errors
    pub fn message(&self) -> Option<&str> {
        match self {
            FedexError::Failure { message, .. }
            | FedexError::Service { message, .. }
            | FedexError::PostalCodeNotFound { message, .. }
            | FedexError::InvalidPostalCodeFormat { message, .. } => Some(message),
            _ => None,
        }
    }

    /// True when the error came from a notification in a service reply
    pub fn is_service_error(&self) -> bool {
        self.code().is_some()
    }
}

/// Type alias for results that can return a FedexError
pub type Result<T> = std::result::Result<T, FedexError>;

impl From<SoapError> for FedexError {
    fn from(error: SoapError) -> Self {
        match error {
            SoapError::Network(msg) => FedexError::Network(msg),
            SoapError::Parse(msg) => FedexError::Parse(msg),
            SoapError::Fault { code, message } => FedexError::SchemaValidation { code, message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_soap_error_conversion() {
        let api_error: FedexError = SoapError::Network("connection timeout".to_string()).into();
        assert!(matches!(api_error, FedexError::Network(_)));

        let api_error: FedexError = SoapError::Parse("invalid XML".to_string()).into();
        assert!(matches!(api_error, FedexError::Parse(_)));

        let api_error: FedexError = SoapError::Fault {
            code: "soapenv:Client".to_string(),
            message: "Unexpected element".to_string(),
        }
        .into();
        assert!(matches!(api_error, FedexError::SchemaValidation { .. }));
    }

    #[test]
    fn test_service_error_accessors() {
        let error = FedexError::PostalCodeNotFound {
            code: "4".to_string(),
            message: "Postal Code Not Found".to_string(),
        };
        assert_eq!(error.code(), Some("4"));
        assert_eq!(error.message(), Some("Postal Code Not Found"));
        assert!(error.is_service_error());

        let error = FedexError::Network("unreachable".to_string());
        assert_eq!(error.code(), None);
        assert!(!error.is_service_error());
    }

    #[test]
    fn test_error_display() {
        let err = FedexError::Service {
            code: "1000".to_string(),
            message: "Authentication Failed".to_string(),
        };
        assert_eq!(format!("{}", err), "FedEx error (code 1000): Authentication Failed");

        let err = FedexError::Parse("invalid XML".to_string());
        assert_eq!(format!("{}", err), "Parse error: invalid XML");
    }
}
