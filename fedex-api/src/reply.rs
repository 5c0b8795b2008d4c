//! Elements common to every FedEx reply

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::error::{FedexError, Result};
use crate::notification::{Notification, Severity};
use crate::version::VersionId;
use crate::xml::{child_elements, child_text};

/// HighestSeverity, Notifications, TransactionDetail and Version of a reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyHeader {
    pub highest_severity: Severity,
    pub notifications: Vec<Notification>,
    pub customer_transaction_id: Option<String>,
    pub version: Option<VersionId>,
}

impl ReplyHeader {
    pub fn new(highest_severity: Severity, notifications: Vec<Notification>) -> Self {
        Self {
            highest_severity,
            notifications,
            customer_transaction_id: None,
            version: None,
        }
    }

    pub fn from_xml(xml: &Element) -> Result<Self> {
        let highest_severity = child_text(xml, "HighestSeverity")
            .map(|s| Severity::parse(&s))
            .ok_or_else(|| FedexError::Parse(format!("Missing HighestSeverity in {}", xml.name)))?;

        let notifications = child_elements(xml, "Notifications")
            .map(Notification::from_xml)
            .collect();

        let customer_transaction_id = xml
            .get_child("TransactionDetail")
            .and_then(|detail| child_text(detail, "CustomerTransactionId"));

        let version = xml.get_child("Version").and_then(VersionId::from_xml);

        Ok(Self {
            highest_severity,
            notifications,
            customer_transaction_id,
            version,
        })
    }
}

/// Typed replies expose their common header to the client lifecycle
pub trait FedexReply {
    fn header(&self) -> &ReplyHeader;
}

impl FedexReply for ReplyHeader {
    fn header(&self) -> &ReplyHeader {
        self
    }
}
