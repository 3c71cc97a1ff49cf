//! Bidirectional mapping between CI/CD material configurations and their
//! HAL-style JSON documents.
//!
//! A *material* is a configured source of versioned input feeding a
//! pipeline: an SCM repository (git, svn, hg, tfs, p4), an upstream
//! pipeline dependency, a package repository, or a plugin-backed SCM.
//! On the wire each one is a tagged document:
//!
//! ```json
//! { "type": "git", "attributes": { "url": "...", "branch": "master" } }
//! ```
//!
//! ## Modules
//!
//! - [`document`] - The wire envelope
//! - [`error`] - Error types
//! - [`material`] - The material union and per-kind schemas
//! - [`types`] - Registry, name/filter/ciphertext types, collaborator traits
//!
//! ## Example
//!
//! ```
//! use material_repr::{GitMaterial, Material, NoLinks};
//!
//! let material = Material::Git(GitMaterial::new("https://example.com/repo.git"));
//! let doc = material.to_document(&NoLinks);
//! assert_eq!(doc.type_tag, "git");
//! assert_eq!(Material::from_document(&doc).unwrap(), material);
//! ```

pub mod document;
pub mod error;
pub mod material;
pub mod types;

pub use document::Document;
pub use error::{Error, Result};
pub use material::{
    DependencyMaterial, GitMaterial, HgMaterial, Material, P4Material, PackageMaterial,
    PluggableScmMaterial, SvnMaterial, TfsMaterial,
};
pub use types::{
    Ciphertext, Filter, MaterialKind, MaterialName, NoLinks, SecretCipher, UrlBuilder,
};
