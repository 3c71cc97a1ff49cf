//! Upstream pipeline dependency material schema.
//!
//! Wire attributes: `pipeline`, `stage`, `name`, `auto_update`. The `name`
//! attribute is derived from `pipeline` and is not independently settable:
//! serialization emits it as a convenience copy and deserialization ignores
//! whatever the wire carries.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::MaterialName;

/// An upstream-pipeline dependency material.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyMaterial {
    /// The upstream pipeline to depend on.
    pub pipeline: Option<String>,

    /// The stage of the upstream pipeline that feeds this one.
    pub stage: Option<String>,

    /// Whether the material polls for changes automatically.
    pub auto_update: bool,
}

impl DependencyMaterial {
    /// Returns the derived name: always the upstream pipeline, or the blank
    /// sentinel when no pipeline is set.
    #[must_use]
    pub fn name(&self) -> MaterialName {
        self.pipeline
            .clone()
            .map(MaterialName::from)
            .unwrap_or_default()
    }
}

impl Default for DependencyMaterial {
    fn default() -> Self {
        Self {
            pipeline: None,
            stage: None,
            auto_update: true,
        }
    }
}

impl Serialize for DependencyMaterial {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DependencyMaterial", 4)?;
        state.serialize_field("pipeline", &self.pipeline)?;
        state.serialize_field("stage", &self.stage)?;
        state.serialize_field("name", &self.name())?;
        state.serialize_field("auto_update", &self.auto_update)?;
        state.end()
    }
}

impl<'de> Deserialize<'de> for DependencyMaterial {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // A wire `name` is accepted but discarded; the invariant re-derives
        // it from `pipeline`.
        #[derive(Deserialize)]
        struct Wire {
            #[serde(default)]
            pipeline: Option<String>,
            #[serde(default)]
            stage: Option<String>,
            #[serde(default = "crate::material::default_true")]
            auto_update: bool,
        }

        let wire = Wire::deserialize(deserializer)?;
        Ok(Self {
            pipeline: wire.pipeline,
            stage: wire.stage,
            auto_update: wire.auto_update,
        })
    }
}
