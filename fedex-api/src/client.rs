use soap_client::SoapClient;
use tracing::debug;

use crate::classify::{ErrorClassifier, ServiceErrorKind};
use crate::config::FedexConfig;
use crate::envelope::{RequestEnvelope, RequestOptions};
use crate::error::Result;
use crate::notification::Severity;
use crate::operation::FedexRequest;
use crate::reply::FedexReply;
use crate::transport::SoapTransport;
use crate::version::VersionId;

/// A client for sending FedEx web service requests
///
/// The client owns the configuration and the transport. Each call to
/// [`send`](FedexClient::send) consumes one request, builds the shared
/// envelope from the configuration, runs the request's hooks, performs the
/// SOAP round trip and checks the reply for service-reported errors.
///
/// ```rust,ignore
/// use fedex_api::{FedexClient, FedexConfig};
/// use fedex_api::operations::package_movement::PostalCodeInquiryRequest;
///
/// let client = FedexClient::new(FedexConfig::from_env()?)?;
/// let reply = client.send(PostalCodeInquiryRequest::for_postal_code("38017", "US"))?;
/// println!("{:?}", reply.express_description);
/// ```
#[derive(Debug, Clone)]
pub struct FedexClient<T = SoapClient> {
    config: FedexConfig,
    transport: T,
}

impl FedexClient<SoapClient> {
    /// Create a client that talks HTTP using the configuration's transport settings
    pub fn new(config: FedexConfig) -> Result<Self> {
        let transport = SoapClient::with_config(&config.soap_client_config())?;
        Ok(Self { config, transport })
    }
}

impl<T: SoapTransport> FedexClient<T> {
    /// Create a client with a custom transport
    pub fn with_transport(config: FedexConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &FedexConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send a request with default options
    pub fn send<R: FedexRequest>(&self, request: R) -> Result<R::Reply> {
        self.send_with_options(request, &RequestOptions::default())
    }

    /// Send a request
    ///
    /// Service FAILURE notifications are raised before the request's own
    /// error check runs.
    pub fn send_with_options<R: FedexRequest>(
        &self,
        mut request: R,
        options: &RequestOptions,
    ) -> Result<R::Reply> {
        let version = request.version();
        let namespace = R::SERVICE.namespace(&version);
        let mut envelope = RequestEnvelope::new(
            &self.config,
            VersionId::new(R::SERVICE.info().service_id, version),
            options,
        );

        request.prepare(&mut envelope);
        let payload = request.assemble(&mut envelope);

        let endpoint = self.config.endpoint_url();
        debug!(
            service = R::SERVICE.name(),
            request = R::REQUEST_ELEMENT,
            wsdl = request.wsdl_name(),
            version = %envelope.version,
            endpoint,
            "sending FedEx request"
        );

        let xml = self.transport.call(
            endpoint,
            &namespace,
            R::REQUEST_ELEMENT,
            R::REPLY_ELEMENT,
            &payload,
        )?;

        let reply = R::parse_reply(&xml)?;
        let header = reply.header();

        for notification in &header.notifications {
            if !matches!(notification.severity, Severity::Error | Severity::Failure) {
                debug!(
                    severity = %notification.severity,
                    code = %notification.code,
                    message = %notification.message,
                    "reply notification"
                );
            }
        }

        ErrorClassifier::new(ServiceErrorKind::Failure).check(header, &Severity::Failure)?;
        request.check_errors(&reply)?;
        request.check_warnings(&reply)?;

        debug!(
            request = R::REQUEST_ELEMENT,
            highest_severity = %header.highest_severity,
            "FedEx request completed"
        );

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = FedexClient::new(FedexConfig::new("key", "secret")).unwrap();
        assert_eq!(client.config().key, "key");
    }

    #[test]
    fn test_client_creation_with_bad_proxy() {
        let config = FedexConfig::new("key", "secret").with_proxy("ftp://proxy.example.com:21");
        assert!(FedexClient::new(config).is_err());
    }
}
