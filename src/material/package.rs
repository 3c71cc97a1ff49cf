//! Package repository material schema.
//!
//! Wire attributes: `ref` only. The name and polling flag exist on the
//! record but never travel on the wire for this kind.

use serde::{Deserialize, Serialize};

use crate::types::MaterialName;

/// A package repository material, referencing a package definition by id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageMaterial {
    /// Opaque id of the package definition.
    #[serde(default, rename = "ref")]
    pub package_ref: Option<String>,

    /// Display name; not part of the wire schema for this kind.
    #[serde(skip)]
    pub name: MaterialName,

    /// Whether the material polls automatically; not part of the wire
    /// schema for this kind.
    #[serde(skip, default = "crate::material::default_true")]
    pub auto_update: bool,
}

impl PackageMaterial {
    /// Creates a material referencing the given package id.
    pub fn new(package_ref: impl Into<String>) -> Self {
        Self {
            package_ref: Some(package_ref.into()),
            ..Self::default()
        }
    }
}

impl Default for PackageMaterial {
    fn default() -> Self {
        Self {
            package_ref: None,
            name: MaterialName::default(),
            auto_update: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::material::Material;
    use crate::types::NoLinks;

    #[test]
    fn material_serializes_only_its_reference() {
        let doc = Material::Package(PackageMaterial::new("p-id")).to_document(&NoLinks);
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "type": "package",
                "attributes": { "ref": "p-id" }
            })
        );
    }

    #[test]
    fn document_round_trips_to_an_equal_material() {
        let material = Material::Package(PackageMaterial::new("p-id"));
        let back = Material::from_document(&material.to_document(&NoLinks)).unwrap();
        assert_eq!(back, material);
    }

    #[test]
    fn decoded_material_keeps_internal_defaults() {
        let decoded: PackageMaterial = serde_json::from_value(json!({ "ref": "p-id" })).unwrap();
        assert_eq!(decoded.package_ref.as_deref(), Some("p-id"));
        assert!(decoded.name.is_blank());
        assert!(decoded.auto_update);
    }
}
