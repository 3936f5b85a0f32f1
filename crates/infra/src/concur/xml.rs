//! Field extraction for legacy XML responses
//!
//! The v1.x endpoints answer with small flat XML documents. Only a handful of
//! leaf values are ever read, so this is extraction, not parsing: each field
//! is located by element name and missing or empty fields read as `None`.

use regex::Regex;

/// Borrowed XML document with named-field lookup.
#[derive(Debug, Clone, Copy)]
pub struct XmlFields<'a> {
    xml: &'a str,
}

impl<'a> XmlFields<'a> {
    #[must_use]
    pub fn new(xml: &'a str) -> Self {
        Self { xml }
    }

    /// Text of the first `<name>` element, entity-decoded and trimmed.
    ///
    /// Namespace prefixes and attributes on the element are ignored. Only leaf
    /// elements have a value: an element wrapping child elements reads as
    /// `None`.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<String> {
        let name = regex::escape(name);
        let pattern =
            format!(r"(?s)<(?:[\w.-]+:)?{name}(?:\s[^>]*)?>(.*?)</(?:[\w.-]+:)?{name}\s*>");
        let re = Regex::new(&pattern).ok()?;

        re.captures(self.xml)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim())
            .filter(|raw| raw.starts_with("<![CDATA[") || !raw.contains('<'))
            .map(|raw| decode_entities(strip_cdata(raw)))
            .filter(|value| !value.is_empty())
    }

    /// First present field among `names`.
    #[must_use]
    pub fn first_of(&self, names: &[&str]) -> Option<String> {
        names.iter().find_map(|name| self.field(name))
    }
}

fn strip_cdata(value: &str) -> &str {
    value
        .strip_prefix("<![CDATA[")
        .and_then(|v| v.strip_suffix("]]>"))
        .unwrap_or(value)
}

fn decode_entities(value: &str) -> String {
    value
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
        .trim()
        .to_string()
}
