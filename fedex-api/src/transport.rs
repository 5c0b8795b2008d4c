use soap_client::{SoapClient, SoapError};
use xmltree::Element;

/// The SOAP round trip used by [`FedexClient`](crate::FedexClient)
///
/// The production implementation is [`SoapClient`]. Tests and callers with
/// their own HTTP stack can supply another implementation.
pub trait SoapTransport {
    fn call(
        &self,
        url: &str,
        namespace: &str,
        request_element: &str,
        reply_element: &str,
        payload: &str,
    ) -> Result<Element, SoapError>;
}

impl SoapTransport for SoapClient {
    fn call(
        &self,
        url: &str,
        namespace: &str,
        request_element: &str,
        reply_element: &str,
        payload: &str,
    ) -> Result<Element, SoapError> {
        SoapClient::call(self, url, namespace, request_element, reply_element, payload)
    }
}
