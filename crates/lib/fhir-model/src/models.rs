use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A definitions bundle as shipped in `profiles-resources.json`.
///
/// Only the entry list is modeled; everything else in the bundle envelope is
/// ignored during deserialization.
#[derive(Debug, Clone, Deserialize)]
pub struct Bundle {
    #[serde(default)]
    pub entry: Vec<BundleEntry>,
}

/// One bundle entry wrapping a raw resource document.
///
/// The resource is kept as raw JSON; conversion into a typed
/// [`StructureDefinition`] happens at index-build time, where entries that do
/// not convert are dropped.
#[derive(Debug, Clone, Deserialize)]
pub struct BundleEntry {
    #[serde(default)]
    pub resource: Option<Value>,
}

/// A FHIR `StructureDefinition` resource, reduced to the fields the index
/// reads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StructureDefinition {
    #[serde(rename = "resourceType")]
    pub resource_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<Snapshot>,
}

/// The fully-expanded element list of a structure definition.
///
/// Element order is document order, which equals declaration order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Snapshot {
    #[serde(default)]
    pub element: Vec<ElementDefinition>,
}

/// One element definition inside a snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ElementDefinition {
    #[serde(default)]
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Vec::is_empty")]
    pub types: Vec<ElementType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub binding: Option<ElementBinding>,
}

/// A declared type on an element definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementType {
    #[serde(default)]
    pub code: String,
    #[serde(rename = "targetProfile", default, skip_serializing_if = "Vec::is_empty")]
    pub target_profile: Vec<String>,
}

/// Value-set binding metadata on an element definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementBinding {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strength: Option<String>,
    #[serde(rename = "valueSet", default, skip_serializing_if = "Option::is_none")]
    pub value_set: Option<String>,
}

/// Canonical element descriptor exposed by the definition index.
///
/// `max` is either a decimal literal or `"*"` for unbounded. `type_display`
/// joins multiple declared types with `" | "` and renders reference types as
/// `Reference(Target1 | Target2)`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ElementInfo {
    pub path: String,
    pub min: u32,
    pub max: String,
    pub type_display: String,
    pub short: String,
    pub is_backbone: bool,
    pub is_polymorphic: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding_strength: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binding_value_set: Option<String>,
}

impl ElementInfo {
    /// Cardinality rendered as `min..max`.
    #[must_use]
    pub fn cardinality(&self) -> String {
        format!("{}..{}", self.min, self.max)
    }
}
