//! Recording transport shared by the integration tests

use std::cell::RefCell;

use soap_client::SoapError;
use xmltree::Element;

use fedex_api::SoapTransport;

/// One recorded SOAP call
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub namespace: String,
    pub request_element: String,
    pub reply_element: String,
    pub payload: String,
}

/// Returns a canned reply and records every outgoing call
pub struct MockTransport {
    reply: String,
    fault: Option<(String, String)>,
    pub calls: RefCell<Vec<RecordedCall>>,
}

impl MockTransport {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            fault: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn faulting(code: &str, message: &str) -> Self {
        Self {
            reply: String::new(),
            fault: Some((code.to_string(), message.to_string())),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls.borrow().last().cloned().expect("no call recorded")
    }
}

impl SoapTransport for MockTransport {
    fn call(
        &self,
        url: &str,
        namespace: &str,
        request_element: &str,
        reply_element: &str,
        payload: &str,
    ) -> Result<Element, SoapError> {
        self.calls.borrow_mut().push(RecordedCall {
            url: url.to_string(),
            namespace: namespace.to_string(),
            request_element: request_element.to_string(),
            reply_element: reply_element.to_string(),
            payload: payload.to_string(),
        });

        if let Some((code, message)) = &self.fault {
            return Err(SoapError::Fault {
                code: code.clone(),
                message: message.clone(),
            });
        }

        Element::parse(self.reply.as_bytes()).map_err(|e| SoapError::Parse(e.to_string()))
    }
}

/// Build a PostalCodeInquiryReply document
pub fn reply_xml(highest_severity: &str, notifications: &[(&str, &str, &str)]) -> String {
    let notifications: String = notifications
        .iter()
        .map(|(severity, code, message)| {
            format!(
                "<v4:Notifications><v4:Severity>{}</v4:Severity><v4:Source>pmis</v4:Source><v4:Code>{}</v4:Code><v4:Message>{}</v4:Message></v4:Notifications>",
                severity, code, message
            )
        })
        .collect();

    format!(
        r#"<v4:PostalCodeInquiryReply xmlns:v4="http://fedex.com/ws/packagemovementinformationservice/v4"><v4:HighestSeverity>{}</v4:HighestSeverity>{}<v4:ExpressDescription><v4:LocationId>MEMA</v4:LocationId><v4:PostalCode>38017</v4:PostalCode><v4:CountryCode>US</v4:CountryCode></v4:ExpressDescription></v4:PostalCodeInquiryReply>"#,
        highest_severity, notifications
    )
}
