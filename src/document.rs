//! The HAL-style wire envelope for material documents.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::types::MaterialKind;

/// A material document: a `type` tag plus its attribute object.
///
/// This is the exact wire shape of the configuration API:
///
/// ```json
/// { "type": "git", "attributes": { "url": "...", "branch": "master" } }
/// ```
///
/// The attributes object may be entirely absent, in which case it
/// deserializes as [`Value::Null`] and decoding treats it as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The variant tag, e.g. `"git"` or `"dependency"`.
    #[serde(rename = "type")]
    pub type_tag: String,

    /// The schema-specific attribute object.
    #[serde(default)]
    pub attributes: Value,
}

impl Document {
    /// Creates a document for a known kind.
    #[must_use]
    pub fn new(kind: MaterialKind, attributes: Value) -> Self {
        Self {
            type_tag: kind.as_tag().to_string(),
            attributes,
        }
    }

    /// Resolves this document's tag against the variant registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMaterialType`] if the tag is not registered.
    ///
    /// [`Error::UnknownMaterialType`]: crate::error::Error::UnknownMaterialType
    pub fn kind(&self) -> Result<MaterialKind> {
        MaterialKind::from_tag(&self.type_tag)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::Error;

    #[test]
    fn document_parses_from_wire_json() {
        let doc: Document = serde_json::from_value(json!({
            "type": "git",
            "attributes": { "url": "https://example.com/repo.git" }
        }))
        .unwrap();

        assert_eq!(doc.kind().unwrap(), MaterialKind::Git);
        assert_eq!(doc.attributes["url"], "https://example.com/repo.git");
    }

    #[test]
    fn absent_attributes_parse_as_null() {
        let doc: Document = serde_json::from_value(json!({ "type": "package" })).unwrap();
        assert!(doc.attributes.is_null());
    }

    #[test]
    fn missing_type_tag_fails_envelope_parsing() {
        let parsed: std::result::Result<Document, _> =
            serde_json::from_value(json!({ "attributes": {} }));
        assert!(parsed.is_err());
    }

    #[test]
    fn unregistered_tag_fails_resolution() {
        let doc = Document {
            type_tag: "bogus".to_string(),
            attributes: Value::Null,
        };
        assert!(matches!(
            doc.kind().unwrap_err(),
            Error::UnknownMaterialType(tag) if tag == "bogus"
        ));
    }
}
