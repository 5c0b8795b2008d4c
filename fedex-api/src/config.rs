//! Credentials and environment settings for FedEx web services
//!
//! A [`FedexConfig`] is shared by every request sent through a
//! [`FedexClient`](crate::FedexClient). It carries the developer key and
//! password used for `WebAuthenticationDetail`, the account/meter pair used
//! for `ClientDetail`, and the transport settings (server selection,
//! timeouts, proxy).

use std::fmt;
use std::time::Duration;

use soap_client::SoapClientConfig;

use crate::error::{FedexError, Result};

/// Production web service endpoint
pub const PRODUCTION_ENDPOINT: &str = "https://ws.fedex.com:443/web-services";

/// Test (beta) web service endpoint
pub const TEST_ENDPOINT: &str = "https://wsbeta.fedex.com:443/web-services";

/// Configuration for FedEx web service requests
#[derive(Clone, PartialEq, Eq)]
pub struct FedexConfig {
    /// Developer test or production key
    pub key: String,

    /// Password paired with the key
    pub password: String,

    /// FedEx account number
    pub account_number: Option<String>,

    /// Meter number assigned to the account
    pub meter_number: Option<String>,

    /// FedEx Freight account number
    pub freight_account_number: Option<String>,

    /// Integrator ID, only sent to services whose schema declares it
    pub integrator_id: Option<String>,

    /// Express region code (e.g. "US", "CA", "APAC"), sent as ClientDetail/Region
    pub express_region_code: Option<String>,

    /// Send requests to the beta server instead of production
    /// Default: false
    pub use_test_server: bool,

    /// Optional HTTP proxy URL
    pub proxy: Option<String>,

    /// Explicit endpoint URL, overrides `use_test_server`
    pub endpoint: Option<String>,

    /// Connection timeout
    /// Default: 10 seconds
    pub connect_timeout: Duration,

    /// Response read timeout
    /// Default: 30 seconds
    pub read_timeout: Duration,
}

impl FedexConfig {
    /// Create a configuration from a key and password with all other
    /// settings at their defaults
    pub fn new(key: impl Into<String>, password: impl Into<String>) -> Self {
        let transport = SoapClientConfig::default();
        Self {
            key: key.into(),
            password: password.into(),
            account_number: None,
            meter_number: None,
            freight_account_number: None,
            integrator_id: None,
            express_region_code: None,
            use_test_server: false,
            proxy: None,
            endpoint: None,
            connect_timeout: transport.connect_timeout,
            read_timeout: transport.read_timeout,
        }
    }

    /// Load configuration from `FEDEX_*` environment variables
    ///
    /// `FEDEX_KEY` and `FEDEX_PASSWORD` are required. Optional variables:
    /// `FEDEX_ACCOUNT_NUMBER`, `FEDEX_METER_NUMBER`,
    /// `FEDEX_FREIGHT_ACCOUNT_NUMBER`, `FEDEX_INTEGRATOR_ID`,
    /// `FEDEX_EXPRESS_REGION_CODE`, `FEDEX_USE_TEST_SERVER`, `FEDEX_PROXY`,
    /// `FEDEX_ENDPOINT`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &str| {
            lookup(name)
                .filter(|v| !v.is_empty())
                .ok_or_else(|| FedexError::Config(format!("{} environment variable is required", name)))
        };

        let mut config = Self::new(required("FEDEX_KEY")?, required("FEDEX_PASSWORD")?);
        config.account_number = lookup("FEDEX_ACCOUNT_NUMBER");
        config.meter_number = lookup("FEDEX_METER_NUMBER");
        config.freight_account_number = lookup("FEDEX_FREIGHT_ACCOUNT_NUMBER");
        config.integrator_id = lookup("FEDEX_INTEGRATOR_ID");
        config.express_region_code = lookup("FEDEX_EXPRESS_REGION_CODE");
        config.proxy = lookup("FEDEX_PROXY");
        config.endpoint = lookup("FEDEX_ENDPOINT");

        if let Some(flag) = lookup("FEDEX_USE_TEST_SERVER") {
            config.use_test_server = parse_flag(&flag).ok_or_else(|| {
                FedexError::Config(format!("FEDEX_USE_TEST_SERVER has invalid value '{}'", flag))
            })?;
        }

        Ok(config)
    }

    pub fn with_account_number(mut self, account_number: impl Into<String>) -> Self {
        self.account_number = Some(account_number.into());
        self
    }

    pub fn with_meter_number(mut self, meter_number: impl Into<String>) -> Self {
        self.meter_number = Some(meter_number.into());
        self
    }

    pub fn with_freight_account_number(mut self, number: impl Into<String>) -> Self {
        self.freight_account_number = Some(number.into());
        self
    }

    pub fn with_integrator_id(mut self, integrator_id: impl Into<String>) -> Self {
        self.integrator_id = Some(integrator_id.into());
        self
    }

    pub fn with_express_region_code(mut self, region: impl Into<String>) -> Self {
        self.express_region_code = Some(region.into());
        self
    }

    pub fn with_test_server(mut self, use_test_server: bool) -> Self {
        self.use_test_server = use_test_server;
        self
    }

    pub fn with_proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    /// The URL requests are posted to
    pub fn endpoint_url(&self) -> &str {
        match &self.endpoint {
            Some(endpoint) => endpoint,
            None if self.use_test_server => TEST_ENDPOINT,
            None => PRODUCTION_ENDPOINT,
        }
    }

    /// Transport settings derived from this configuration
    pub fn soap_client_config(&self) -> SoapClientConfig {
        SoapClientConfig {
            connect_timeout: self.connect_timeout,
            read_timeout: self.read_timeout,
            proxy: self.proxy.clone(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

impl fmt::Debug for FedexConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FedexConfig")
            .field("key", &self.key)
            .field("password", &"<redacted>")
            .field("account_number", &self.account_number)
            .field("meter_number", &self.meter_number)
            .field("freight_account_number", &self.freight_account_number)
            .field("integrator_id", &self.integrator_id)
            .field("express_region_code", &self.express_region_code)
            .field("use_test_server", &self.use_test_server)
            .field("proxy", &self.proxy)
            .field("endpoint", &self.endpoint)
            .field("connect_timeout", &self.connect_timeout)
            .field("read_timeout", &self.read_timeout)
            .finish()
    }
}
