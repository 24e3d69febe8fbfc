use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use towerscope_api::TowerResult;

/// What a scope level does with a backing-field access when no implicit
/// receiver of the field's class is in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BackingFieldPolicy {
    /// Emit the candidate without a dispatch receiver and let the outer
    /// resolver decide.
    #[default]
    Forward,
    /// Drop the candidate. The name still counts as found.
    RequireReceiver,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TowerConfig {
    pub backing_field_policy: BackingFieldPolicy,
    /// Consult accessor-derived properties on member levels.
    pub synthetic_properties: bool,
    /// Memoize member-scope construction per receiver type.
    pub cache_member_scopes: bool,
}

impl Default for TowerConfig {
    fn default() -> Self {
        Self {
            backing_field_policy: BackingFieldPolicy::Forward,
            synthetic_properties: true,
            cache_member_scopes: true,
        }
    }
}

impl TowerConfig {
    /// Parses a JSON document; absent fields keep their defaults.
    pub fn from_json_str(json: &str) -> TowerResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(TowerConfig)
    }
}
