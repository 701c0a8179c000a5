//! Multi-language text values.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Language codes the API may attach to a localized value.
///
/// The wire format is an object with a required `default` key plus zero or
/// more of these; anything else is ignored on decode and never emitted on
/// encode.
pub const LANGUAGE_CODES: [&str; 7] = ["cs", "de", "es", "fi", "fr", "sk", "sv"];

/// A string that can be localized in multiple languages.
///
/// `default` is always present; translations exist only for the languages
/// the API actually sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocalizedText {
    /// The default (English) value.
    pub default: String,
    /// Translations keyed by lowercase language code.
    pub translations: BTreeMap<String, String>,
}

impl LocalizedText {
    /// Creates a value with no translations.
    #[must_use]
    pub fn new(default: impl Into<String>) -> Self {
        Self {
            default: default.into(),
            translations: BTreeMap::new(),
        }
    }

    /// Adds a translation (builder style; intended for tests and fixtures).
    #[must_use]
    pub fn with_translation(mut self, code: impl Into<String>, value: impl Into<String>) -> Self {
        self.translations.insert(code.into(), value.into());
        self
    }

    /// Returns the value for a language code, falling back to `default`.
    ///
    /// The lookup is case-insensitive and never fails.
    #[must_use]
    pub fn value_for(&self, language_code: &str) -> &str {
        self.translations
            .get(&language_code.to_ascii_lowercase())
            .map_or(self.default.as_str(), String::as_str)
    }
}

impl fmt::Display for LocalizedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.default)
    }
}

impl From<&str> for LocalizedText {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Wire shape: `default` required, one optional slot per supported code.
/// Unknown keys are ignored, matching the API's habit of adding fields.
#[derive(Deserialize)]
struct WireLocalizedText {
    default: String,
    cs: Option<String>,
    de: Option<String>,
    es: Option<String>,
    fi: Option<String>,
    fr: Option<String>,
    sk: Option<String>,
    sv: Option<String>,
}

impl<'de> Deserialize<'de> for LocalizedText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireLocalizedText::deserialize(deserializer)?;
        let slots = [
            ("cs", wire.cs),
            ("de", wire.de),
            ("es", wire.es),
            ("fi", wire.fi),
            ("fr", wire.fr),
            ("sk", wire.sk),
            ("sv", wire.sv),
        ];

        let mut translations = BTreeMap::new();
        for (code, value) in slots {
            if let Some(value) = value {
                translations.insert(String::from(code), value);
            }
        }

        Ok(Self {
            default: wire.default,
            translations,
        })
    }
}

impl Serialize for LocalizedText {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let supported = self
            .translations
            .iter()
            .filter(|(code, _)| LANGUAGE_CODES.contains(&code.as_str()));

        let mut map = serializer.serialize_map(None)?;
        map.serialize_entry("default", &self.default)?;
        for (code, value) in supported {
            map.serialize_entry(code, value)?;
        }
        map.end()
    }
}

/// Decodes a field that the API serves either as a plain string or as a
/// localized-text object, collapsing the latter to its default value.
///
/// # Errors
///
/// Fails if the value matches neither representation.
pub(crate) fn string_or_localized<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Plain(String),
        Localized(LocalizedText),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Plain(value) => Ok(value),
        Raw::Localized(text) => Ok(text.default),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_value_for_is_case_insensitive() {
        // Arrange
        let text = LocalizedText::new("Hello").with_translation("fr", "Bonjour");

        // Act & Assert
        assert_eq!(text.value_for("FR"), "Bonjour");
        assert_eq!(text.value_for("fr"), "Bonjour");
    }

    #[test]
    fn test_value_for_falls_back_to_default() {
        // Arrange
        let text = LocalizedText::new("Hello")
            .with_translation("fr", "Bonjour")
            .with_translation("es", "Hola");

        // Act & Assert
        assert_eq!(text.value_for("de"), "Hello");
        assert_eq!(text.value_for("en"), "Hello");
        assert_eq!(text.value_for("es"), "Hola");
    }

    #[test]
    fn test_deserialize_collects_present_languages() {
        // Arrange
        let json = r#"{"default":"Canadiens","fr":"Canadiens de Montréal","cs":"Canadiens"}"#;

        // Act
        let text: LocalizedText = serde_json::from_str(json).unwrap();

        // Assert
        assert_eq!(text.default, "Canadiens");
        assert_eq!(text.translations.len(), 2);
        assert_eq!(text.value_for("fr"), "Canadiens de Montréal");
    }

    #[test]
    fn test_deserialize_requires_default() {
        // Arrange & Act
        let result = serde_json::from_str::<LocalizedText>(r#"{"fr":"Bonjour"}"#);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_requires_string_default() {
        // Arrange & Act
        let result = serde_json::from_str::<LocalizedText>(r#"{"default":42}"#);

        // Assert
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        // Arrange & Act
        let text: LocalizedText =
            serde_json::from_str(r#"{"default":"Oilers","xx":"???"}"#).unwrap();

        // Assert
        assert_eq!(text.default, "Oilers");
        assert!(text.translations.is_empty());
    }

    #[test]
    fn test_serialize_emits_only_present_supported_keys() {
        // Arrange
        let text = LocalizedText::new("Hello")
            .with_translation("fr", "Bonjour")
            .with_translation("xx", "nope");

        // Act
        let value = serde_json::to_value(&text).unwrap();

        // Assert
        assert_eq!(
            value,
            serde_json::json!({"default": "Hello", "fr": "Bonjour"})
        );
    }

    #[test]
    fn test_display_renders_default() {
        // Arrange & Act & Assert
        assert_eq!(LocalizedText::new("Test").to_string(), "Test");
    }

    #[derive(Deserialize)]
    struct Named {
        #[serde(deserialize_with = "string_or_localized")]
        name: String,
    }

    #[test]
    fn test_string_or_localized_accepts_both() {
        // Arrange & Act
        let plain: Named = serde_json::from_str(r#"{"name":"A. Matthews"}"#).unwrap();
        let localized: Named =
            serde_json::from_str(r#"{"name":{"default":"A. Matthews","fi":"A. Matthews"}}"#)
                .unwrap();

        // Assert
        assert_eq!(plain.name, "A. Matthews");
        assert_eq!(localized.name, "A. Matthews");
    }
}
