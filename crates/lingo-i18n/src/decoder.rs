//! Decoder registry mapping file extensions to message decoders
//!
//! Every locale file found by the directory scan is decoded into a flat
//! key → text mapping by the first registration that claims its extension.
//! The registry is an explicit value: callers either take
//! [`DecoderRegistry::default`] or hand in their own list, which replaces the
//! defaults entirely.

use crate::catalog::Messages;
use crate::error::{DecodeError, I18nError, I18nResult};
use std::fmt;
use std::sync::Arc;

/// Signature shared by every decoder
pub type DecodeFn = dyn Fn(&[u8]) -> Result<Messages, DecodeError> + Send + Sync;

/// A decode function together with the extensions it handles
#[derive(Clone)]
pub struct DecoderRegistration {
    /// Lowercase extensions without the leading dot
    extensions: Vec<String>,
    decode: Arc<DecodeFn>,
}

impl fmt::Debug for DecoderRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecoderRegistration")
            .field("extensions", &self.extensions)
            .field("decode", &"Fn(&[u8]) -> Result<Messages, DecodeError>")
            .finish()
    }
}

impl DecoderRegistration {
    /// Register a custom decoder for the given extensions
    pub fn new<I, S, F>(extensions: I, decode: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: Fn(&[u8]) -> Result<Messages, DecodeError> + Send + Sync + 'static,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
            decode: Arc::new(decode),
        }
    }

    /// Flat JSON object of strings, for `.json` files
    pub fn json() -> Self {
        Self::new(["json"], decode_json)
    }

    /// Elements carrying a `key` attribute, for `.xml` files
    #[cfg(feature = "xml")]
    pub fn xml() -> Self {
        Self::new(["xml"], decode_xml)
    }

    /// Flat YAML mapping, for `.yaml` and `.yml` files
    pub fn yaml() -> Self {
        Self::new(["yaml", "yml"], decode_yaml)
    }

    /// Flat TOML table of strings, for `.toml` files
    pub fn toml() -> Self {
        Self::new(["toml"], decode_toml)
    }

    /// Extensions this registration claims
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Whether this registration handles `extension` (case-sensitive)
    pub fn handles(&self, extension: &str) -> bool {
        self.extensions.iter().any(|ext| ext == extension)
    }

    /// Run the decoder over raw file contents
    pub fn decode(&self, bytes: &[u8]) -> Result<Messages, DecodeError> {
        (self.decode)(bytes)
    }
}

/// Ordered list of decoder registrations
#[derive(Debug, Clone)]
pub struct DecoderRegistry {
    registrations: Vec<DecoderRegistration>,
}

impl DecoderRegistry {
    /// Build a registry from a custom list, replacing the defaults
    pub fn new(registrations: Vec<DecoderRegistration>) -> Self {
        Self { registrations }
    }

    /// Find the first registration handling `extension`
    pub fn resolve(&self, extension: &str) -> I18nResult<&DecoderRegistration> {
        self.registrations
            .iter()
            .find(|registration| registration.handles(extension))
            .ok_or_else(|| I18nError::NoDecoder {
                extension: extension.to_string(),
            })
    }

    /// Every extension known to the registry, in registration order
    pub fn extensions(&self) -> Vec<&str> {
        self.registrations
            .iter()
            .flat_map(|registration| registration.extensions.iter().map(String::as_str))
            .collect()
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        #[allow(unused_mut)]
        let mut registrations = vec![DecoderRegistration::json()];
        #[cfg(feature = "xml")]
        registrations.push(DecoderRegistration::xml());

        Self::new(registrations)
    }
}

fn decode_json(bytes: &[u8]) -> Result<Messages, DecodeError> {
    Ok(serde_json::from_slice(bytes)?)
}

fn decode_yaml(bytes: &[u8]) -> Result<Messages, DecodeError> {
    Ok(serde_yaml::from_slice(bytes)?)
}

fn decode_toml(bytes: &[u8]) -> Result<Messages, DecodeError> {
    let content = std::str::from_utf8(bytes)?;
    Ok(toml::from_str(content)?)
}

/// Collect `key` attribute → text content for every keyed element.
///
/// Nesting of the keyed elements is irrelevant; only the innermost open keyed
/// element receives text. Text inside a keyed element is kept verbatim,
/// text outside any keyed element is dropped.
#[cfg(feature = "xml")]
fn decode_xml(bytes: &[u8]) -> Result<Messages, DecodeError> {
    use quick_xml::events::Event;
    use quick_xml::Reader;

    let mut reader = Reader::from_reader(bytes);

    let mut messages = Messages::new();
    let mut buf = Vec::new();
    let mut depth = 0usize;
    // (depth of the keyed element, key, collected text)
    let mut open: Vec<(usize, String, String)> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                if let Some(key) = key_attribute(e)? {
                    open.push((depth, key, String::new()));
                }
            }
            Ok(Event::Empty(ref e)) => {
                if let Some(key) = key_attribute(e)? {
                    messages.insert(key, String::new());
                }
            }
            Ok(Event::Text(ref e)) => {
                if let Some((_, _, text)) = open.last_mut() {
                    let unescaped = e
                        .unescape()
                        .map_err(|err| DecodeError::Xml(err.to_string()))?;
                    text.push_str(&unescaped);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some((_, _, text)) = open.last_mut() {
                    text.push_str(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Ok(Event::End(_)) => {
                if matches!(open.last(), Some((opened_at, _, _)) if *opened_at == depth) {
                    if let Some((_, key, text)) = open.pop() {
                        messages.insert(key, text);
                    }
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(DecodeError::Xml(format!(
                    "{err} at position {}",
                    reader.error_position()
                )))
            }
            _ => {}
        }
        buf.clear();
    }

    if !open.is_empty() {
        return Err(DecodeError::Xml("unexpected end of document".to_string()));
    }

    Ok(messages)
}

#[cfg(feature = "xml")]
fn key_attribute(
    element: &quick_xml::events::BytesStart<'_>,
) -> Result<Option<String>, DecodeError> {
    let attribute = element
        .try_get_attribute("key")
        .map_err(|err| DecodeError::Xml(err.to_string()))?;

    attribute
        .map(|attr| {
            attr.unescape_value()
                .map(|value| value.into_owned())
                .map_err(|err| DecodeError::Xml(err.to_string()))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_registry_resolves_json() {
        let registry = DecoderRegistry::default();
        let decoder = registry.resolve("json").unwrap();

        let messages = decoder.decode(br#"{"Hi": "Szia"}"#).unwrap();
        assert_eq!(messages.get("Hi").map(String::as_str), Some("Szia"));
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let registry = DecoderRegistry::default();
        assert!(matches!(
            registry.resolve("JSON"),
            Err(I18nError::NoDecoder { extension }) if extension == "JSON"
        ));
    }

    #[test]
    fn test_custom_list_replaces_defaults() {
        let registry = DecoderRegistry::new(vec![DecoderRegistration::yaml()]);

        assert!(registry.resolve("json").is_err());
        assert!(registry.resolve("yml").is_ok());
        assert_eq!(registry.extensions(), vec!["yaml", "yml"]);
    }

    #[test]
    fn test_first_matching_registration_wins() {
        let registry = DecoderRegistry::new(vec![
            DecoderRegistration::new(["txt"], |_| Ok(Messages::from([("first".into(), "1".into())]))),
            DecoderRegistration::new(["txt"], |_| Ok(Messages::from([("second".into(), "2".into())]))),
        ]);

        let messages = registry.resolve("txt").unwrap().decode(b"").unwrap();
        assert!(messages.contains_key("first"));
        assert!(!messages.contains_key("second"));
    }

    #[test]
    fn test_json_rejects_nested_values() {
        let result = decode_json(br#"{"menu": {"open": "Open"}}"#);
        assert!(matches!(result, Err(DecodeError::Json(_))));
    }

    #[test]
    fn test_yaml_and_toml_decoders() {
        let yaml = decode_yaml(b"Hi: Szia\nBye: Viszlat\n").unwrap();
        assert_eq!(yaml.get("Bye").map(String::as_str), Some("Viszlat"));

        let toml = decode_toml(b"Hi = \"Szia\"\n\"What's up?\" = \"Mizu?\"\n").unwrap();
        assert_eq!(toml.get("What's up?").map(String::as_str), Some("Mizu?"));
    }

    #[test]
    fn test_toml_rejects_invalid_utf8() {
        assert!(matches!(decode_toml(&[0xff, 0xfe]), Err(DecodeError::Utf8(_))));
    }

    #[cfg(feature = "xml")]
    #[test]
    fn test_xml_decodes_keyed_elements() {
        let xml = br#"<?xml version="1.0"?>
<messages>
    <message key="Hi">Szia</message>
    <message key="What's up?">Mizu?</message>
    <message key="amp">Tom &amp; Jerry</message>
    <message key="empty"/>
    <note>ignored</note>
</messages>"#;

        let messages = decode_xml(xml).unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages["Hi"], "Szia");
        assert_eq!(messages["What's up?"], "Mizu?");
        assert_eq!(messages["amp"], "Tom & Jerry");
        assert_eq!(messages["empty"], "");
    }

    #[cfg(feature = "xml")]
    #[test]
    fn test_xml_rejects_mismatched_tags() {
        let result = decode_xml(br#"<messages><message key="Hi">Szia</wrong></messages>"#);
        assert!(matches!(result, Err(DecodeError::Xml(_))));
    }

    #[cfg(feature = "xml")]
    #[test]
    fn test_xml_keeps_whitespace_inside_messages() {
        let xml = br#"<messages>
    <message key="label">Total: </message>
    <message key="mix">Hello <![CDATA[big]]> world</message>
    <message key="padded">  two  spaces  </message>
</messages>"#;

        let registry = DecoderRegistry::default();
        let messages = registry.resolve("xml").unwrap().decode(xml).unwrap();

        assert_eq!(messages["label"], "Total: ");
        assert_eq!(messages["mix"], "Hello big world");
        assert_eq!(messages["padded"], "  two  spaces  ");
        assert_eq!(messages.len(), 3);
    }
}
