//! Request lifecycle for FedEx web service calls
//!
//! Each request type implements [`FedexRequest`]. The
//! [`FedexClient`](crate::FedexClient) drives the hooks in a fixed order:
//!
//! 1. `prepare` - adjust request state or the shared envelope
//! 2. `assemble` - finalize the envelope and serialize the request body
//! 3. the SOAP round trip, then `parse_reply`
//! 4. the service-wide FAILURE check (done by the client)
//! 5. `check_errors` - request-specific ERROR classification
//! 6. `check_warnings`

use xmltree::Element;

use crate::envelope::RequestEnvelope;
use crate::error::Result;
use crate::reply::FedexReply;
use crate::service::Service;
use crate::version::VersionInfo;

pub trait FedexRequest {
    /// The typed reply produced by this request
    type Reply: FedexReply;

    /// The web service this request belongs to
    const SERVICE: Service;

    /// Name of the request element inside the SOAP body
    const REQUEST_ELEMENT: &'static str;

    /// Name of the reply element inside the SOAP body
    const REPLY_ELEMENT: &'static str;

    /// Service version to bind to
    fn version(&self) -> VersionInfo {
        Self::SERVICE.default_version()
    }

    /// WSDL descriptor this request was written against
    fn wsdl_name(&self) -> &str {
        Self::SERVICE.info().wsdl_name
    }

    /// Populate request objects before assembly
    fn prepare(&mut self, _envelope: &mut RequestEnvelope) {}

    /// Finalize the envelope and serialize the children of the request element
    fn assemble(&self, envelope: &mut RequestEnvelope) -> String;

    /// Build the typed reply from the reply element
    fn parse_reply(xml: &Element) -> Result<Self::Reply>;

    /// Turn request-specific errors reported in the reply into a `FedexError`
    fn check_errors(&self, reply: &Self::Reply) -> Result<()>;

    /// Inspect warnings; nothing is raised by default
    fn check_warnings(&self, _reply: &Self::Reply) -> Result<()> {
        Ok(())
    }

    fn metadata() -> OperationMetadata {
        OperationMetadata {
            service: Self::SERVICE.name(),
            request_element: Self::REQUEST_ELEMENT,
            reply_element: Self::REPLY_ELEMENT,
        }
    }
}

/// Metadata about a request type, useful for logging
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperationMetadata {
    pub service: &'static str,
    pub request_element: &'static str,
    pub reply_element: &'static str,
}
