//! Plugin-backed SCM material schema.
//!
//! Wire attributes: `ref` and `filter`. As with package materials, the
//! name and polling flag stay internal.

use serde::{Deserialize, Serialize};

use crate::types::{Filter, MaterialName};

/// A plugin-backed SCM material, referencing an SCM configuration by id.
///
/// Distinguishing a `null` filter from an empty one is load-bearing here:
/// a document with `filter: null` leaves the record without a filter, while
/// `filter: {"ignore": []}` allocates one with no patterns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PluggableScmMaterial {
    /// Opaque id of the SCM configuration.
    #[serde(default, rename = "ref")]
    pub scm_ref: Option<String>,

    /// Ignore filter excluding paths from triggering changes.
    #[serde(default)]
    pub filter: Option<Filter>,

    /// Display name; not part of the wire schema for this kind.
    #[serde(skip)]
    pub name: MaterialName,

    /// Whether the material polls automatically; not part of the wire
    /// schema for this kind.
    #[serde(skip, default = "crate::material::default_true")]
    pub auto_update: bool,
}

impl PluggableScmMaterial {
    /// Creates a material referencing the given SCM configuration id.
    pub fn new(scm_ref: impl Into<String>) -> Self {
        Self {
            scm_ref: Some(scm_ref.into()),
            ..Self::default()
        }
    }
}

impl Default for PluggableScmMaterial {
    fn default() -> Self {
        Self {
            scm_ref: None,
            filter: None,
            name: MaterialName::default(),
            auto_update: true,
        }
    }
}
