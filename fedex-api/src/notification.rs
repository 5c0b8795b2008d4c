//! Notifications reported in FedEx replies

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::xml::child_text;

/// Severity of a notification or of a whole reply
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    Success,
    Note,
    Warning,
    Error,
    Failure,
    /// A value this crate does not know about, kept verbatim
    Other(String),
}

impl Severity {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "SUCCESS" => Severity::Success,
            "NOTE" => Severity::Note,
            "WARNING" => Severity::Warning,
            "ERROR" => Severity::Error,
            "FAILURE" => Severity::Failure,
            other => Severity::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Severity::Success => "SUCCESS",
            Severity::Note => "NOTE",
            Severity::Warning => "WARNING",
            Severity::Error => "ERROR",
            Severity::Failure => "FAILURE",
            Severity::Other(value) => value,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One diagnostic entry of a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub severity: Severity,
    /// Subsystem that raised the notification (e.g. "pmis")
    pub source: Option<String>,
    pub code: String,
    pub message: String,
    pub localized_message: Option<String>,
}

impl Notification {
    pub fn new(severity: Severity, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity,
            source: None,
            code: code.into(),
            message: message.into(),
            localized_message: None,
        }
    }

    pub(crate) fn from_xml(xml: &Element) -> Self {
        Self {
            severity: child_text(xml, "Severity")
                .map(|s| Severity::parse(&s))
                .unwrap_or_else(|| Severity::Other(String::new())),
            source: child_text(xml, "Source"),
            code: child_text(xml, "Code").unwrap_or_default(),
            message: child_text(xml, "Message").unwrap_or_default(),
            localized_message: child_text(xml, "LocalizedMessage"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_parse() {
        assert_eq!(Severity::parse("SUCCESS"), Severity::Success);
        assert_eq!(Severity::parse("NOTE"), Severity::Note);
        assert_eq!(Severity::parse("WARNING"), Severity::Warning);
        assert_eq!(Severity::parse(" ERROR "), Severity::Error);
        assert_eq!(Severity::parse("FAILURE"), Severity::Failure);
        assert_eq!(Severity::parse("error"), Severity::Other("error".to_string()));
        assert_eq!(Severity::Other("X".to_string()).to_string(), "X");
    }

    #[test]
    fn test_notification_from_xml() {
        let xml = Element::parse(
            r#"<Notifications>
                <Severity>ERROR</Severity>
                <Source>pmis</Source>
                <Code>4</Code>
                <Message>Postal Code Not Found</Message>
            </Notifications>"#
                .as_bytes(),
        )
        .unwrap();

        let notification = Notification::from_xml(&xml);
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.source.as_deref(), Some("pmis"));
        assert_eq!(notification.code, "4");
        assert_eq!(notification.message, "Postal Code Not Found");
        assert_eq!(notification.localized_message, None);
    }
}
