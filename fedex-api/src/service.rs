use crate::version::VersionInfo;

/// FedEx web services supported by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    /// Package Movement Information Service - postal code inquiry
    PackageMovementInformation,
}

/// Static description of a web service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceInfo {
    /// ServiceId sent in the `Version` element
    pub service_id: &'static str,

    /// Name of the WSDL describing the default version
    pub wsdl_name: &'static str,

    /// Schema namespace without the trailing `/v{major}`
    pub namespace_base: &'static str,

    /// Default (major, intermediate, minor) version
    pub default_version: (&'static str, &'static str, &'static str),
}

impl Service {
    pub fn name(&self) -> &'static str {
        match self {
            Service::PackageMovementInformation => "PackageMovementInformationService",
        }
    }

    pub fn info(&self) -> ServiceInfo {
        match self {
            Service::PackageMovementInformation => ServiceInfo {
                service_id: "pmis",
                wsdl_name: "PackageMovementInformationService_v4.wsdl",
                namespace_base: "http://fedex.com/ws/packagemovementinformationservice",
                default_version: ("4", "0", "0"),
            },
        }
    }

    /// Schema namespace for a given version, e.g. `.../packagemovementinformationservice/v4`
    pub fn namespace(&self, version: &VersionInfo) -> String {
        format!("{}/v{}", self.info().namespace_base, version.major)
    }

    pub fn default_version(&self) -> VersionInfo {
        self.info().default_version.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pmis_defaults() {
        let service = Service::PackageMovementInformation;
        let info = service.info();
        assert_eq!(info.service_id, "pmis");
        assert_eq!(info.wsdl_name, "PackageMovementInformationService_v4.wsdl");
        assert_eq!(service.default_version(), VersionInfo::new("4", "0", "0"));
    }

    #[test]
    fn test_namespace_follows_major_version() {
        let service = Service::PackageMovementInformation;
        assert_eq!(
            service.namespace(&service.default_version()),
            "http://fedex.com/ws/packagemovementinformationservice/v4"
        );
        assert_eq!(
            service.namespace(&VersionInfo::new("5", "0", "0")),
            "http://fedex.com/ws/packagemovementinformationservice/v5"
        );
    }
}
