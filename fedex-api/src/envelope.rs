//! Shared request envelope
//!
//! Every FedEx request starts with the same four elements: authentication,
//! client identity, transaction metadata and the service version. The
//! [`RequestEnvelope`] is built from a [`FedexConfig`] by the client before a
//! request's own hooks run, so individual requests can adjust it (for
//! example dropping fields their schema does not declare).

use std::fmt;

use crate::config::FedexConfig;
use crate::version::VersionId;
use crate::xml::{push_container, push_element, push_optional};

/// Per-send options that are not part of the configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Caller supplied identifier echoed back in the reply's TransactionDetail
    pub customer_transaction_id: Option<String>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customer_transaction_id(mut self, id: impl Into<String>) -> Self {
        self.customer_transaction_id = Some(id.into());
        self
    }
}

/// `WebAuthenticationDetail/UserCredential`
#[derive(Clone, PartialEq, Eq)]
pub struct WebAuthenticationDetail {
    pub key: String,
    pub password: String,
}

impl WebAuthenticationDetail {
    fn write_xml(&self, out: &mut String) {
        let mut credential = String::new();
        push_element(&mut credential, "Key", &self.key);
        push_element(&mut credential, "Password", &self.password);

        let mut children = String::new();
        push_container(&mut children, "UserCredential", &credential);
        push_container(out, "WebAuthenticationDetail", &children);
    }
}

impl fmt::Debug for WebAuthenticationDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebAuthenticationDetail")
            .field("key", &self.key)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// `ClientDetail`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDetail {
    pub account_number: Option<String>,
    pub meter_number: Option<String>,
    pub integrator_id: Option<String>,
    pub region: Option<String>,
}

impl ClientDetail {
    fn write_xml(&self, out: &mut String) {
        let mut children = String::new();
        push_optional(&mut children, "AccountNumber", self.account_number.as_deref());
        push_optional(&mut children, "MeterNumber", self.meter_number.as_deref());
        push_optional(&mut children, "IntegratorId", self.integrator_id.as_deref());
        push_optional(&mut children, "Region", self.region.as_deref());
        push_container(out, "ClientDetail", &children);
    }
}

/// `TransactionDetail`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionDetail {
    pub customer_transaction_id: Option<String>,
}

impl TransactionDetail {
    fn write_xml(&self, out: &mut String) {
        if let Some(id) = &self.customer_transaction_id {
            let mut children = String::new();
            push_element(&mut children, "CustomerTransactionId", id);
            push_container(out, "TransactionDetail", &children);
        }
    }
}

/// The fields shared by all requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestEnvelope {
    pub web_authentication_detail: WebAuthenticationDetail,
    pub client_detail: ClientDetail,
    pub transaction_detail: TransactionDetail,
    pub version: VersionId,
}

impl RequestEnvelope {
    pub fn new(config: &FedexConfig, version: VersionId, options: &RequestOptions) -> Self {
        Self {
            web_authentication_detail: WebAuthenticationDetail {
                key: config.key.clone(),
                password: config.password.clone(),
            },
            client_detail: ClientDetail {
                account_number: config.account_number.clone(),
                meter_number: config.meter_number.clone(),
                integrator_id: config.integrator_id.clone(),
                region: config.express_region_code.clone(),
            },
            transaction_detail: TransactionDetail {
                customer_transaction_id: options.customer_transaction_id.clone(),
            },
            version,
        }
    }

    /// Serialize the shared elements in schema order:
    /// WebAuthenticationDetail, ClientDetail, TransactionDetail, Version
    pub fn write_xml(&self, out: &mut String) {
        self.web_authentication_detail.write_xml(out);
        self.client_detail.write_xml(out);
        self.transaction_detail.write_xml(out);
        self.version.write_xml(out);
    }
}
