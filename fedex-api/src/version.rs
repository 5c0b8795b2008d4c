//! Web service version identifiers

use serde::{Deserialize, Serialize};
use xmltree::Element;

use crate::xml::{child_text, push_container, push_element};

/// The major, intermediate and minor components of a service version
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionInfo {
    pub major: String,
    pub intermediate: String,
    pub minor: String,
}

impl VersionInfo {
    pub fn new(
        major: impl Into<String>,
        intermediate: impl Into<String>,
        minor: impl Into<String>,
    ) -> Self {
        Self {
            major: major.into(),
            intermediate: intermediate.into(),
            minor: minor.into(),
        }
    }
}

impl From<(&str, &str, &str)> for VersionInfo {
    fn from((major, intermediate, minor): (&str, &str, &str)) -> Self {
        Self::new(major, intermediate, minor)
    }
}

/// The `Version` element sent with every request and echoed in replies
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionId {
    pub service_id: String,
    pub major: String,
    pub intermediate: String,
    pub minor: String,
}

impl VersionId {
    pub fn new(service_id: impl Into<String>, version: VersionInfo) -> Self {
        Self {
            service_id: service_id.into(),
            major: version.major,
            intermediate: version.intermediate,
            minor: version.minor,
        }
    }

    pub(crate) fn write_xml(&self, out: &mut String) {
        let mut children = String::new();
        push_element(&mut children, "ServiceId", &self.service_id);
        push_element(&mut children, "Major", &self.major);
        push_element(&mut children, "Intermediate", &self.intermediate);
        push_element(&mut children, "Minor", &self.minor);
        push_container(out, "Version", &children);
    }

    pub(crate) fn from_xml(xml: &Element) -> Option<Self> {
        Some(Self {
            service_id: child_text(xml, "ServiceId")?,
            major: child_text(xml, "Major")?,
            intermediate: child_text(xml, "Intermediate").unwrap_or_else(|| "0".to_string()),
            minor: child_text(xml, "Minor").unwrap_or_else(|| "0".to_string()),
        })
    }
}

impl std::fmt::Display for VersionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}.{}.{}", self.service_id, self.major, self.intermediate, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_id_xml() {
        let version = VersionId::new("pmis", ("4", "0", "0").into());
        let mut out = String::new();
        version.write_xml(&mut out);
        assert_eq!(
            out,
            "<Version><ServiceId>pmis</ServiceId><Major>4</Major><Intermediate>0</Intermediate><Minor>0</Minor></Version>"
        );
        assert_eq!(version.to_string(), "pmis 4.0.0");
    }

    #[test]
    fn test_version_id_from_reply() {
        let xml = Element::parse(
            r#"<Version><ServiceId>pmis</ServiceId><Major>4</Major><Intermediate>0</Intermediate><Minor>0</Minor></Version>"#
                .as_bytes(),
        )
        .unwrap();
        let version = VersionId::from_xml(&xml).unwrap();
        assert_eq!(version, VersionId::new("pmis", VersionInfo::new("4", "0", "0")));

        let partial = Element::parse("<Version><Major>4</Major></Version>".as_bytes()).unwrap();
        assert_eq!(VersionId::from_xml(&partial), None);
    }
}
