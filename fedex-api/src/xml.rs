//! Small helpers for writing request payloads and reading reply elements

use quick_xml::escape::escape;
use xmltree::Element;

/// Append `<name>value</name>` with the value escaped
pub(crate) fn push_element(out: &mut String, name: &str, value: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    out.push_str(&escape(value));
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Append `<name>value</name>` only when a value is present
pub(crate) fn push_optional(out: &mut String, name: &str, value: Option<&str>) {
    if let Some(value) = value {
        push_element(out, name, value);
    }
}

/// Wrap already serialized children in `<name>...</name>`
pub(crate) fn push_container(out: &mut String, name: &str, children: &str) {
    out.push('<');
    out.push_str(name);
    out.push('>');
    out.push_str(children);
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Trimmed text of a direct child element
pub(crate) fn child_text(xml: &Element, name: &str) -> Option<String> {
    xml.get_child(name)
        .and_then(|e| e.get_text())
        .map(|t| t.trim().to_string())
}

/// All direct child elements with the given name, in document order
pub(crate) fn child_elements<'a>(xml: &'a Element, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
    xml.children
        .iter()
        .filter_map(|node| node.as_element())
        .filter(move |e| e.name == name)
}
