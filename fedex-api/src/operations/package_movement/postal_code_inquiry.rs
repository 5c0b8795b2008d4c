//! postalCodeInquiry operation for the Package Movement Information Service
//!
//! Validates a postal code for a country and returns the FedEx description
//! of it (service area, location, state or province).

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::classify::{ErrorClassifier, ServiceErrorKind};
use crate::envelope::RequestEnvelope;
use crate::error::Result;
use crate::notification::Severity;
use crate::operation::FedexRequest;
use crate::reply::{FedexReply, ReplyHeader};
use crate::service::Service;
use crate::version::VersionInfo;
use crate::xml::{child_text, push_optional};

/// Message fragment FedEx uses when the postal code is unknown
pub const POSTAL_CODE_NOT_FOUND: &str = "Postal Code Not Found";

/// Message fragment FedEx uses when the postal code is malformed
pub const INVALID_POSTAL_CODE_FORMAT: &str = "Invalid Postal Code Format";

/// A postal code inquiry
///
/// No local validation is performed on the postal or country code; a
/// malformed value is reported by the service in the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostalCodeInquiryRequest {
    /// Postal code to look up
    pub postal_code: Option<String>,

    /// ISO 3166 alpha-2 country code the postal code belongs to
    pub country_code: Option<String>,

    wsdl_name: String,
    version: VersionInfo,
    strict_format_detection: bool,
}

impl PostalCodeInquiryRequest {
    pub fn new(postal_code: Option<String>, country_code: Option<String>) -> Self {
        let service = Self::SERVICE;
        Self {
            postal_code,
            country_code,
            wsdl_name: service.info().wsdl_name.to_string(),
            version: service.default_version(),
            strict_format_detection: false,
        }
    }

    pub fn for_postal_code(postal_code: impl Into<String>, country_code: impl Into<String>) -> Self {
        Self::new(Some(postal_code.into()), Some(country_code.into()))
    }

    pub fn with_wsdl_name(mut self, wsdl_name: impl Into<String>) -> Self {
        self.wsdl_name = wsdl_name.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<VersionInfo>) -> Self {
        self.version = version.into();
        self
    }

    /// Report "Invalid Postal Code Format" messages as
    /// [`FedexError::InvalidPostalCodeFormat`](crate::FedexError::InvalidPostalCodeFormat)
    ///
    /// Disabled by default, in which case those messages surface as the
    /// generic [`FedexError::Service`](crate::FedexError::Service), matching
    /// the behavior existing callers of this inquiry rely on.
    pub fn with_strict_format_detection(mut self, enabled: bool) -> Self {
        self.strict_format_detection = enabled;
        self
    }

    /// The ordered rules used to classify an ERROR notification
    pub fn classifier(&self) -> ErrorClassifier {
        let classifier = ErrorClassifier::new(ServiceErrorKind::Generic)
            .with_rule(POSTAL_CODE_NOT_FOUND, ServiceErrorKind::PostalCodeNotFound);

        if self.strict_format_detection {
            classifier.with_rule(INVALID_POSTAL_CODE_FORMAT, ServiceErrorKind::InvalidPostalCodeFormat)
        } else {
            classifier
        }
    }
}

/// Location details for a postal code
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeDescription {
    pub location_id: Option<String>,
    pub state_or_province_code: Option<String>,
    pub postal_code: Option<String>,
    pub service_area: Option<String>,
    pub country_code: Option<String>,
}

impl PostalCodeDescription {
    fn from_xml(xml: &Element) -> Self {
        Self {
            location_id: child_text(xml, "LocationId"),
            state_or_province_code: child_text(xml, "StateOrProvinceCode"),
            postal_code: child_text(xml, "PostalCode"),
            service_area: child_text(xml, "ServiceArea"),
            country_code: child_text(xml, "CountryCode"),
        }
    }
}

/// Reply of a postal code inquiry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalCodeInquiryReply {
    pub header: ReplyHeader,
    pub express_freight_contractor_delivery_area: Option<String>,
    pub express_description: Option<PostalCodeDescription>,
    pub express_freight_description: Option<PostalCodeDescription>,
}

impl FedexReply for PostalCodeInquiryReply {
    fn header(&self) -> &ReplyHeader {
        &self.header
    }
}

impl FedexRequest for PostalCodeInquiryRequest {
    type Reply = PostalCodeInquiryReply;

    const SERVICE: Service = Service::PackageMovementInformation;
    const REQUEST_ELEMENT: &'static str = "PostalCodeInquiryRequest";
    const REPLY_ELEMENT: &'static str = "PostalCodeInquiryReply";

    fn version(&self) -> VersionInfo {
        self.version.clone()
    }

    fn wsdl_name(&self) -> &str {
        &self.wsdl_name
    }

    fn assemble(&self, envelope: &mut RequestEnvelope) -> String {
        // The postalCodeInquiry schema does not declare ClientDetail/IntegratorId
        // and rejects the whole document when it is present.
        envelope.client_detail.integrator_id = None;

        let mut payload = String::new();
        envelope.write_xml(&mut payload);
        push_optional(&mut payload, "PostalCode", self.postal_code.as_deref());
        push_optional(&mut payload, "CountryCode", self.country_code.as_deref());
        payload
    }

    fn parse_reply(xml: &Element) -> Result<Self::Reply> {
        Ok(PostalCodeInquiryReply {
            header: ReplyHeader::from_xml(xml)?,
            express_freight_contractor_delivery_area: child_text(
                xml,
                "ExpressFreightContractorDeliveryArea",
            ),
            express_description: xml
                .get_child("ExpressDescription")
                .map(PostalCodeDescription::from_xml),
            express_freight_description: xml
                .get_child("ExpressFreightDescription")
                .map(PostalCodeDescription::from_xml),
        })
    }

    fn check_errors(&self, reply: &Self::Reply) -> Result<()> {
        self.classifier().check(&reply.header, &Severity::Error)
    }
}
