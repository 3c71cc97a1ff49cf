//! Team Foundation Server material schema.
//!
//! Wire attributes: `url`, `destination`, `filter`, `domain`, `username`,
//! `encrypted_password`, `project_path`, `name`, `auto_update`.

use serde::{Deserialize, Serialize};

use crate::types::{Ciphertext, Filter, MaterialName};

/// A TFS material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfsMaterial {
    /// The collection URL.
    #[serde(default)]
    pub url: Option<String>,

    /// Checkout destination directory.
    #[serde(default)]
    pub destination: Option<String>,

    /// Ignore filter excluding paths from triggering changes.
    #[serde(default)]
    pub filter: Option<Filter>,

    /// Authentication domain.
    #[serde(default)]
    pub domain: Option<String>,

    /// Username for the collection.
    #[serde(default)]
    pub username: Option<String>,

    /// Encrypted password, passed through opaquely.
    #[serde(default)]
    pub encrypted_password: Option<Ciphertext>,

    /// Server-side project path to check out.
    #[serde(default)]
    pub project_path: Option<String>,

    /// Display name; blank when unnamed.
    #[serde(default)]
    pub name: MaterialName,

    /// Whether the material polls for changes automatically.
    #[serde(default = "crate::material::default_true")]
    pub auto_update: bool,
}

impl Default for TfsMaterial {
    fn default() -> Self {
        Self {
            url: None,
            destination: None,
            filter: None,
            domain: None,
            username: None,
            encrypted_password: None,
            project_path: None,
            name: MaterialName::default(),
            auto_update: true,
        }
    }
}
