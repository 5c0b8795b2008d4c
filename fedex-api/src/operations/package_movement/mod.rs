//! Package Movement Information Service operations
//!
//! Postal code validation and service commitment lookups.

mod postal_code_inquiry;

pub use postal_code_inquiry::{
    PostalCodeDescription, PostalCodeInquiryReply, PostalCodeInquiryRequest,
    INVALID_POSTAL_CODE_FORMAT, POSTAL_CODE_NOT_FOUND,
};

use crate::client::FedexClient;
use crate::error::Result;
use crate::transport::SoapTransport;

/// Service identifier for the Package Movement Information Service
pub const SERVICE: crate::Service = crate::Service::PackageMovementInformation;

/// Look up a postal code with the default request settings
pub fn postal_code_inquiry<T: SoapTransport>(
    client: &FedexClient<T>,
    postal_code: &str,
    country_code: &str,
) -> Result<PostalCodeInquiryReply> {
    client.send(PostalCodeInquiryRequest::for_postal_code(postal_code, country_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_constant() {
        assert_eq!(SERVICE, crate::Service::PackageMovementInformation);
    }
}
