//! Mapping reply notifications to typed errors
//!
//! FedEx does not publish a stable error-code taxonomy for these services,
//! so the message text is the only thing that distinguishes one error from
//! another. An [`ErrorClassifier`] holds an ordered list of substring rules;
//! the first rule whose pattern occurs in the message decides the error
//! kind, otherwise the classifier's fallback kind is used.

use tracing::warn;

use crate::error::{FedexError, Result};
use crate::notification::{Notification, Severity};
use crate::reply::ReplyHeader;

/// The kind of error a notification is turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceErrorKind {
    Failure,
    Generic,
    PostalCodeNotFound,
    InvalidPostalCodeFormat,
}

impl ServiceErrorKind {
    pub fn into_error(self, code: String, message: String) -> FedexError {
        match self {
            ServiceErrorKind::Failure => FedexError::Failure { code, message },
            ServiceErrorKind::Generic => FedexError::Service { code, message },
            ServiceErrorKind::PostalCodeNotFound => FedexError::PostalCodeNotFound { code, message },
            ServiceErrorKind::InvalidPostalCodeFormat => {
                FedexError::InvalidPostalCodeFormat { code, message }
            }
        }
    }
}

/// A substring to look for in a notification message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRule {
    pub pattern: &'static str,
    pub kind: ServiceErrorKind,
}

/// Ordered, first-match-wins notification classifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassifier {
    rules: Vec<ErrorRule>,
    fallback: ServiceErrorKind,
}

impl ErrorClassifier {
    /// A classifier with no rules; every notification maps to `fallback`
    pub fn new(fallback: ServiceErrorKind) -> Self {
        Self {
            rules: Vec::new(),
            fallback,
        }
    }

    /// Append a rule; rules are evaluated in insertion order
    pub fn with_rule(mut self, pattern: &'static str, kind: ServiceErrorKind) -> Self {
        self.rules.push(ErrorRule { pattern, kind });
        self
    }

    pub fn rules(&self) -> &[ErrorRule] {
        &self.rules
    }

    pub fn kind_for(&self, message: &str) -> ServiceErrorKind {
        self.rules
            .iter()
            .find(|rule| message.contains(rule.pattern))
            .map(|rule| rule.kind)
            .unwrap_or(self.fallback)
    }

    pub fn classify(&self, notification: &Notification) -> FedexError {
        self.kind_for(&notification.message)
            .into_error(notification.code.clone(), notification.message.clone())
    }

    /// Raise the first notification of `severity` when it is the reply's
    /// highest severity
    ///
    /// Only that first notification is classified. A reply whose highest
    /// severity differs passes regardless of its notifications.
    pub fn check(&self, header: &ReplyHeader, severity: &Severity) -> Result<()> {
        if &header.highest_severity != severity {
            return Ok(());
        }

        match header.notifications.iter().find(|n| &n.severity == severity) {
            Some(notification) => {
                let error = self.classify(notification);
                warn!(
                    severity = %severity,
                    code = %notification.code,
                    message = %notification.message,
                    "service reported an error"
                );
                Err(error)
            }
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> ErrorClassifier {
        ErrorClassifier::new(ServiceErrorKind::Generic)
            .with_rule("Not Found", ServiceErrorKind::PostalCodeNotFound)
            .with_rule("Postal Code", ServiceErrorKind::InvalidPostalCodeFormat)
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let classifier = classifier();
        assert_eq!(
            classifier.kind_for("Postal Code Not Found"),
            ServiceErrorKind::PostalCodeNotFound
        );
        assert_eq!(
            classifier.kind_for("Bad Postal Code"),
            ServiceErrorKind::InvalidPostalCodeFormat
        );
        assert_eq!(classifier.kind_for("Something else"), ServiceErrorKind::Generic);
    }

    #[test]
    fn test_classify_keeps_code_and_message() {
        let notification = Notification::new(Severity::Error, "4", "Postal Code Not Found");
        match classifier().classify(&notification) {
            FedexError::PostalCodeNotFound { code, message } => {
                assert_eq!(code, "4");
                assert_eq!(message, "Postal Code Not Found");
            }
            other => panic!("Expected PostalCodeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_check_only_when_highest_severity_matches() {
        let header = ReplyHeader::new(
            Severity::Warning,
            vec![Notification::new(Severity::Error, "4", "Postal Code Not Found")],
        );
        assert!(classifier().check(&header, &Severity::Error).is_ok());
    }

    #[test]
    fn test_check_without_matching_notification_passes() {
        let header = ReplyHeader::new(
            Severity::Error,
            vec![Notification::new(Severity::Warning, "7", "Postal Code Not Found")],
        );
        assert!(classifier().check(&header, &Severity::Error).is_ok());
    }

    #[test]
    fn test_failure_classifier() {
        let header = ReplyHeader::new(
            Severity::Failure,
            vec![
                Notification::new(Severity::Note, "0", "informational"),
                Notification::new(Severity::Failure, "1000", "Authentication Failed"),
            ],
        );
        let result = ErrorClassifier::new(ServiceErrorKind::Failure).check(&header, &Severity::Failure);
        match result {
            Err(FedexError::Failure { code, .. }) => assert_eq!(code, "1000"),
            other => panic!("Expected Failure, got {:?}", other),
        }
    }
}
