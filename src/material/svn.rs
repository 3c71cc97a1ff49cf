//! Subversion material schema.
//!
//! Wire attributes: `url`, `destination`, `filter`, `name`, `auto_update`,
//! `check_externals`, `username`, `encrypted_password`.

use serde::{Deserialize, Serialize};

use crate::types::{Ciphertext, Filter, MaterialName};

/// A Subversion repository material.
///
/// `encrypted_password` carries the ciphertext minted upstream by the
/// server's [`SecretCipher`]; it is never decrypted here.
///
/// [`SecretCipher`]: crate::types::SecretCipher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvnMaterial {
    /// The repository URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Checkout destination directory.
    #[serde(default)]
    pub destination: Option<String>,

    /// Ignore filter excluding paths from triggering changes.
    #[serde(default)]
    pub filter: Option<Filter>,

    /// Display name; blank when unnamed.
    #[serde(default)]
    pub name: MaterialName,

    /// Whether the material polls for changes automatically.
    #[serde(default = "crate::material::default_true")]
    pub auto_update: bool,

    /// Whether svn:externals are checked out and polled.
    #[serde(default)]
    pub check_externals: bool,

    /// Username for authenticated repositories.
    #[serde(default)]
    pub username: Option<String>,

    /// Encrypted password, passed through opaquely.
    #[serde(default)]
    pub encrypted_password: Option<Ciphertext>,
}

impl Default for SvnMaterial {
    fn default() -> Self {
        Self {
            url: None,
            destination: None,
            filter: None,
            name: MaterialName::default(),
            auto_update: true,
            check_externals: false,
            username: None,
            encrypted_password: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::material::Material;
    use crate::material::testutil::TestCipher;
    use crate::types::{NoLinks, SecretCipher};

    fn svn_material() -> SvnMaterial {
        SvnMaterial {
            url: Some("url".to_string()),
            destination: Some("svnDir".to_string()),
            filter: Some(Filter::new(["*.doc"])),
            name: "svn-material".into(),
            auto_update: false,
            check_externals: true,
            username: Some("user".to_string()),
            encrypted_password: Some(TestCipher.encrypt("pass")),
        }
    }

    #[test]
    fn fully_populated_material_serializes_every_attribute() {
        let doc = Material::Svn(svn_material()).to_document(&NoLinks);
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "type": "svn",
                "attributes": {
                    "url": "url",
                    "destination": "svnDir",
                    "filter": { "ignore": ["*.doc"] },
                    "name": "svn-material",
                    "auto_update": false,
                    "check_externals": true,
                    "username": "user",
                    "encrypted_password": "AES:pass"
                }
            })
        );
    }

    #[test]
    fn document_round_trips_to_an_equal_material() {
        let material = Material::Svn(svn_material());
        let back = Material::from_document(&material.to_document(&NoLinks)).unwrap();
        assert_eq!(back, material);
    }

    #[test]
    fn empty_attribute_object_decodes_to_construction_defaults() {
        let decoded: SvnMaterial = serde_json::from_value(json!({})).unwrap();
        assert_eq!(decoded, SvnMaterial::default());
        assert!(decoded.auto_update);
        assert!(!decoded.check_externals);
        assert!(decoded.name.is_blank());
    }
}
