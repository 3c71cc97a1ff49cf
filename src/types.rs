//! Core type definitions for material configurations.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

/// The eight supported material kinds.
///
/// This enum is the variant registry: the `type` tag of a wire document
/// resolves to exactly one of these, and every kind has a fixed attribute
/// schema. The set is closed by design, so matches over it are exhaustive
/// and adding a kind is a compile-time event, not a runtime registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaterialKind {
    /// Git repository material.
    Git,
    /// Subversion repository material.
    Svn,
    /// Mercurial repository material.
    Hg,
    /// Team Foundation Server material.
    Tfs,
    /// Perforce material.
    P4,
    /// Upstream pipeline dependency material.
    Dependency,
    /// Package repository material.
    Package,
    /// Plugin-backed SCM material.
    Plugin,
}

impl MaterialKind {
    /// All material kinds, in wire-tag order.
    pub const ALL: &'static [MaterialKind] = &[
        Self::Git,
        Self::Svn,
        Self::Hg,
        Self::Tfs,
        Self::P4,
        Self::Dependency,
        Self::Package,
        Self::Plugin,
    ];

    /// Resolves a wire `type` tag to its material kind.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownMaterialType`] if the tag is not one of the
    /// eight registered kinds.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "git" => Ok(Self::Git),
            "svn" => Ok(Self::Svn),
            "hg" => Ok(Self::Hg),
            "tfs" => Ok(Self::Tfs),
            "p4" => Ok(Self::P4),
            "dependency" => Ok(Self::Dependency),
            "package" => Ok(Self::Package),
            "plugin" => Ok(Self::Plugin),
            other => Err(Error::UnknownMaterialType(other.to_string())),
        }
    }

    /// Returns the wire `type` tag for this kind.
    #[must_use]
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Git => "git",
            Self::Svn => "svn",
            Self::Hg => "hg",
            Self::Tfs => "tfs",
            Self::P4 => "p4",
            Self::Dependency => "dependency",
            Self::Package => "package",
            Self::Plugin => "plugin",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// A material's display name.
///
/// Internally a name is always a string, with the empty string as the
/// "unnamed" sentinel. On the wire an unnamed material serializes its
/// `name` attribute as `null`, never as `""`, and both `null` and an
/// absent key deserialize back to the empty sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MaterialName(String);

impl MaterialName {
    /// Creates a name from any string-like value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the unnamed sentinel.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for MaterialName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for MaterialName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for MaterialName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for MaterialName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_blank() {
            serializer.serialize_none()
        } else {
            serializer.serialize_str(&self.0)
        }
    }
}

impl<'de> Deserialize<'de> for MaterialName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = Option::<String>::deserialize(deserializer)?;
        Ok(Self(name.unwrap_or_default()))
    }
}

/// An encrypted secret, produced upstream by a [`SecretCipher`].
///
/// The mapper never encrypts, decrypts, or validates this value; it is an
/// opaque string carried through the `encrypted_password` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ciphertext(String);

impl Ciphertext {
    /// Wraps an already-encrypted value.
    pub fn new(ciphertext: impl Into<String>) -> Self {
        Self(ciphertext.into())
    }

    /// Returns the ciphertext as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An ignore filter: an ordered list of glob patterns excluding paths
/// from triggering changes.
///
/// Absence of a filter is represented as `Option::<Filter>::None`, which
/// serializes as `null`. A present filter with an empty `ignore` list is
/// distinct from no filter at all.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Glob patterns, in configuration order.
    pub ignore: Vec<String>,
}

impl Filter {
    /// Creates a filter from a list of glob patterns.
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ignore: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the comma-joined display form, e.g. `"doc/**/*,foo/**/*"`.
    #[must_use]
    pub fn for_display(&self) -> String {
        self.ignore.join(",")
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.for_display())
    }
}

/// Encrypts plaintext secrets into the opaque form carried on the wire.
///
/// Implemented outside this crate (the CI server's cipher); callers use it
/// to mint [`Ciphertext`] values before constructing a material. The mapper
/// itself never invokes it.
pub trait SecretCipher {
    /// Encrypts a plaintext secret.
    fn encrypt(&self, plaintext: &str) -> Ciphertext;
}

/// Builds absolute URLs for hyperlink attributes in HAL documents.
///
/// Material documents are attribute-only and embed no hyperlinks, so the
/// mapper threads this collaborator through without calling it; it exists
/// for link-bearing representations layered on top.
pub trait UrlBuilder {
    /// Returns the absolute URL for a server-relative path.
    fn absolute_url(&self, path: &str) -> String;
}

/// A [`UrlBuilder`] for attribute-only documents: returns paths unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLinks;

impl UrlBuilder for NoLinks {
    fn absolute_url(&self, path: &str) -> String {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tag_resolves_to_its_kind() {
        for &kind in MaterialKind::ALL {
            assert_eq!(MaterialKind::from_tag(kind.as_tag()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = MaterialKind::from_tag("bogus").unwrap_err();
        assert!(matches!(err, Error::UnknownMaterialType(tag) if tag == "bogus"));
    }

    #[test]
    fn kind_displays_as_wire_tag() {
        assert_eq!(MaterialKind::Dependency.to_string(), "dependency");
        assert_eq!(MaterialKind::P4.to_string(), "p4");
    }

    #[test]
    fn blank_name_serializes_as_null() {
        let json = serde_json::to_value(MaterialName::default()).unwrap();
        assert!(json.is_null());
    }

    #[test]
    fn named_material_serializes_as_string() {
        let json = serde_json::to_value(MaterialName::new("AwesomeGitMaterial")).unwrap();
        assert_eq!(json, serde_json::json!("AwesomeGitMaterial"));
    }

    #[test]
    fn null_name_deserializes_to_blank_sentinel() {
        let name: MaterialName = serde_json::from_value(serde_json::Value::Null).unwrap();
        assert!(name.is_blank());
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn filter_display_joins_patterns_with_commas() {
        let filter = Filter::new(["doc/**/*", "foo/**/*"]);
        assert_eq!(filter.for_display(), "doc/**/*,foo/**/*");
        assert_eq!(filter.to_string(), "doc/**/*,foo/**/*");
    }

    #[test]
    fn empty_filter_is_distinct_from_none() {
        let empty = Filter::new(Vec::<String>::new());
        assert_eq!(empty.for_display(), "");
        assert_ne!(Some(empty), None::<Filter>);
    }

    #[test]
    fn ciphertext_round_trips_transparently() {
        let secret = Ciphertext::new("AES:deadbeef");
        let json = serde_json::to_value(&secret).unwrap();
        assert_eq!(json, serde_json::json!("AES:deadbeef"));
        let back: Ciphertext = serde_json::from_value(json).unwrap();
        assert_eq!(back, secret);
    }
}
