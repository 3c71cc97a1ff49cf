//! Perforce material schema.
//!
//! Wire attributes: `destination`, `filter`, `port`, `username`,
//! `encrypted_password`, `use_tickets`, `view`, `name`, `auto_update`.

use serde::{Deserialize, Serialize};

use crate::types::{Ciphertext, Filter, MaterialName};

/// A Perforce material.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct P4Material {
    /// Checkout destination directory.
    #[serde(default)]
    pub destination: Option<String>,

    /// Ignore filter excluding paths from triggering changes.
    #[serde(default)]
    pub filter: Option<Filter>,

    /// Server and port, e.g. `"host:9876"`.
    #[serde(default)]
    pub port: Option<String>,

    /// Username for the server.
    #[serde(default)]
    pub username: Option<String>,

    /// Encrypted password, passed through opaquely.
    #[serde(default)]
    pub encrypted_password: Option<Ciphertext>,

    /// Whether to authenticate with tickets instead of the password.
    #[serde(default)]
    pub use_tickets: bool,

    /// The client view mapping.
    #[serde(default)]
    pub view: Option<String>,

    /// Display name; blank when unnamed.
    #[serde(default)]
    pub name: MaterialName,

    /// Whether the material polls for changes automatically.
    #[serde(default = "crate::material::default_true")]
    pub auto_update: bool,
}

impl Default for P4Material {
    fn default() -> Self {
        Self {
            destination: None,
            filter: None,
            port: None,
            username: None,
            encrypted_password: None,
            use_tickets: false,
            view: None,
            name: MaterialName::default(),
            auto_update: true,
        }
    }
}
