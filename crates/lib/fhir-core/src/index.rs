//! In-memory index over FHIR R5 StructureDefinitions.
//!
//! Built once from a parsed definitions bundle, then strictly read-only. The
//! daemon completes construction before any query is served, so handles can
//! be shared across request handlers without locking.

use std::collections::HashMap;
use std::{error::Error, fmt};

use fhir_model::schema::{
    KIND_RESOURCE,
    RESOURCE_TYPE_STRUCTURE_DEFINITION,
    TYPE_BACKBONE_ELEMENT,
    is_infrastructure_element,
};
use fhir_model::{Bundle, ElementDefinition, ElementInfo, StructureDefinition};
use serde::{Deserialize, Serialize};

use crate::element::element_info;
use crate::paths::{direct_children, leaf_name};

/// Error type for index queries.
#[derive(Debug)]
pub enum QueryError {
    UnknownResource(String),
    PathNotFound { resource: String, path: String },
    NotExpandable { path: String },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownResource(name) => write!(f, "unknown resource type '{name}'"),
            Self::PathNotFound { resource, path } => {
                write!(f, "path '{path}' not found in {resource}")
            }
            Self::NotExpandable { path } => {
                write!(f, "path '{path}' is not a BackboneElement")
            }
        }
    }
}

impl Error for QueryError {}

/// Top-level view of a resource definition.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ResourceSummary {
    /// Canonical (original-cased) resource name.
    pub name: String,
    /// Short description taken from the root snapshot element.
    pub description: String,
    /// Depth-1 elements in document order, infrastructure elements excluded.
    pub elements: Vec<ElementInfo>,
}

/// Child view of one BackboneElement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackboneExpansion {
    /// Short description of the expanded element.
    pub description: String,
    /// Direct children in document order, infrastructure elements excluded.
    pub children: Vec<ElementInfo>,
}

/// Read-only index over the retained resource definitions.
///
/// Definitions are kept in bundle-entry order; lookups go through a
/// lower-cased name map so resource types match case-insensitively.
#[derive(Debug, Clone)]
pub struct DefinitionIndex {
    entries: Vec<StructureDefinition>,
    by_key: HashMap<String, usize>,
}

impl DefinitionIndex {
    /// Builds the index from a parsed definitions bundle.
    ///
    /// Only `StructureDefinition` entries of kind `resource` with a non-empty
    /// snapshot are retained; all other entries are dropped without error. A
    /// duplicate name replaces the stored definition but keeps its first
    /// position in scan order.
    #[must_use]
    pub fn from_bundle(bundle: Bundle) -> Self {
        let mut entries: Vec<StructureDefinition> = Vec::new();
        let mut by_key: HashMap<String, usize> = HashMap::new();

        for entry in bundle.entry {
            let Some(raw) = entry.resource else {
                continue;
            };
            let Ok(definition) = serde_json::from_value::<StructureDefinition>(raw) else {
                continue;
            };
            if !is_concrete_resource(&definition) {
                continue;
            }
            let key = definition.name.to_lowercase();
            if let Some(&slot) = by_key.get(&key) {
                entries[slot] = definition;
            } else {
                by_key.insert(key, entries.len());
                entries.push(definition);
            }
        }

        Self { entries, by_key }
    }

    /// Number of retained resource definitions.
    #[must_use]
    pub fn resource_count(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns all canonical resource names in lexicographic order.
    #[must_use]
    pub fn list_resources(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .entries
            .iter()
            .map(|definition| definition.name.clone())
            .collect();
        names.sort();
        names
    }

    /// Returns the top-level element view of a resource definition.
    ///
    /// # Errors
    /// Returns [`QueryError::UnknownResource`] if no retained definition
    /// matches `resource_type` case-insensitively.
    pub fn resource_summary(&self, resource_type: &str) -> Result<ResourceSummary, QueryError> {
        let definition = self.get(resource_type)?;
        let elements = snapshot_elements(definition);
        let description = elements
            .first()
            .and_then(|el| el.short.clone())
            .unwrap_or_default();

        let infos = direct_children(elements, &definition.name)
            .into_iter()
            .filter(|el| !is_infrastructure_element(leaf_name(&el.path)))
            .map(element_info)
            .collect();

        Ok(ResourceSummary {
            name: definition.name.clone(),
            description,
            elements: infos,
        })
    }

    /// Expands a BackboneElement to its direct children.
    ///
    /// # Errors
    /// Returns [`QueryError::UnknownResource`] for an unknown resource type,
    /// [`QueryError::PathNotFound`] when no snapshot element bears exactly
    /// `path`, and [`QueryError::NotExpandable`] when the matched element's
    /// declared types do not include `BackboneElement`.
    pub fn backbone_children(
        &self,
        resource_type: &str,
        path: &str,
    ) -> Result<BackboneExpansion, QueryError> {
        let definition = self.get(resource_type)?;
        let elements = snapshot_elements(definition);

        let Some(parent) = elements.iter().find(|el| el.path == path) else {
            return Err(QueryError::PathNotFound {
                resource: definition.name.clone(),
                path: path.to_string(),
            });
        };
        if !parent.types.iter().any(|ty| ty.code == TYPE_BACKBONE_ELEMENT) {
            return Err(QueryError::NotExpandable {
                path: path.to_string(),
            });
        }

        let children = direct_children(elements, path)
            .into_iter()
            .filter(|el| !is_infrastructure_element(leaf_name(&el.path)))
            .map(element_info)
            .collect();

        Ok(BackboneExpansion {
            description: parent.short.clone().unwrap_or_default(),
            children,
        })
    }

    /// Case-insensitive substring search over element short descriptions and
    /// definition texts.
    ///
    /// Scans full snapshots (no infrastructure filter) in bundle-entry order,
    /// then document order, stopping as soon as `limit` matches are
    /// collected. Zero matches yields an empty vector.
    #[must_use]
    pub fn search_elements(&self, keyword: &str, limit: usize) -> Vec<ElementInfo> {
        if limit == 0 {
            return Vec::new();
        }
        let keyword = keyword.to_lowercase();
        let mut results = Vec::new();

        for definition in &self.entries {
            for el in snapshot_elements(definition) {
                if element_matches(el, &keyword) {
                    results.push(element_info(el));
                    if results.len() >= limit {
                        return results;
                    }
                }
            }
        }
        results
    }

    fn get(&self, resource_type: &str) -> Result<&StructureDefinition, QueryError> {
        self.by_key
            .get(&resource_type.to_lowercase())
            .map(|&slot| &self.entries[slot])
            .ok_or_else(|| QueryError::UnknownResource(resource_type.to_string()))
    }
}

fn is_concrete_resource(definition: &StructureDefinition) -> bool {
    definition.resource_type == RESOURCE_TYPE_STRUCTURE_DEFINITION
        && definition.kind.as_deref() == Some(KIND_RESOURCE)
        && definition
            .snapshot
            .as_ref()
            .is_some_and(|snapshot| !snapshot.element.is_empty())
}

fn snapshot_elements(definition: &StructureDefinition) -> &[ElementDefinition] {
    definition
        .snapshot
        .as_ref()
        .map_or(&[], |snapshot| snapshot.element.as_slice())
}

fn element_matches(el: &ElementDefinition, keyword: &str) -> bool {
    let short_hit = el
        .short
        .as_ref()
        .is_some_and(|text| text.to_lowercase().contains(keyword));
    let definition_hit = el
        .definition
        .as_ref()
        .is_some_and(|text| text.to_lowercase().contains(keyword));
    short_hit || definition_hit
}
