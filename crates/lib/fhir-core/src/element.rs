//! Element descriptor derivation.
//!
//! Converts raw snapshot elements into the canonical [`ElementInfo`] records
//! the index hands out.

use fhir_model::schema::{
    POLYMORPHIC_MARKER,
    STRUCTURE_DEFINITION_URL_PREFIX,
    TYPE_BACKBONE_ELEMENT,
    TYPE_REFERENCE,
};
use fhir_model::{ElementDefinition, ElementInfo, ElementType};

/// Builds an [`ElementInfo`] from a raw snapshot element.
///
/// Absent cardinality defaults to `0..0`; absent descriptions default to
/// empty strings.
#[must_use]
pub fn element_info(el: &ElementDefinition) -> ElementInfo {
    let is_backbone = el.types.iter().any(|ty| ty.code == TYPE_BACKBONE_ELEMENT);
    let binding = el.binding.as_ref();

    ElementInfo {
        path: el.path.clone(),
        min: el.min.unwrap_or(0),
        max: el.max.clone().unwrap_or_else(|| "0".to_string()),
        type_display: format_types(&el.types),
        short: el.short.clone().unwrap_or_default(),
        is_backbone,
        is_polymorphic: el.path.contains(POLYMORPHIC_MARKER),
        binding_strength: binding.and_then(|b| b.strength.clone()),
        binding_value_set: binding.and_then(|b| b.value_set.clone()),
    }
}

/// Renders an element's declared types as a display string.
///
/// Multiple types join with `" | "`. Reference types with target profiles
/// render as `Reference(Target1 | Target2)`, stripping the canonical
/// StructureDefinition URL prefix from each target.
#[must_use]
pub fn format_types(types: &[ElementType]) -> String {
    let mut parts = Vec::with_capacity(types.len());
    for ty in types {
        if ty.code == TYPE_REFERENCE && !ty.target_profile.is_empty() {
            let targets: Vec<&str> = ty
                .target_profile
                .iter()
                .map(|url| strip_definition_url(url))
                .collect();
            parts.push(format!("Reference({})", targets.join(" | ")));
        } else {
            parts.push(ty.code.clone());
        }
    }
    parts.join(" | ")
}

fn strip_definition_url(url: &str) -> &str {
    url.strip_prefix(STRUCTURE_DEFINITION_URL_PREFIX).unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use fhir_model::ElementBinding;

    use super::*;

    fn typed(code: &str, targets: &[&str]) -> ElementType {
        ElementType {
            code: code.to_string(),
            target_profile: targets.iter().map(ToString::to_string).collect(),
        }
    }

    #[test]
    fn format_types_strips_reference_targets() {
        let types = vec![typed(
            "Reference",
            &[
                "http://hl7.org/fhir/StructureDefinition/Organization",
                "http://hl7.org/fhir/StructureDefinition/Practitioner",
            ],
        )];
        assert_eq!(format_types(&types), "Reference(Organization | Practitioner)");
    }

    #[test]
    fn format_types_keeps_bare_reference() {
        let types = vec![typed("Reference", &[])];
        assert_eq!(format_types(&types), "Reference");
    }

    #[test]
    fn format_types_joins_choices() {
        let types = vec![typed("boolean", &[]), typed("dateTime", &[])];
        assert_eq!(format_types(&types), "boolean | dateTime");
    }

    #[test]
    fn format_types_empty_when_undeclared() {
        assert_eq!(format_types(&[]), "");
    }

    #[test]
    fn element_info_defaults_and_flags() {
        let el = ElementDefinition {
            path: "Patient.deceased[x]".to_string(),
            min: None,
            max: Some("1".to_string()),
            short: None,
            definition: None,
            types: vec![typed("boolean", &[]), typed("dateTime", &[])],
            binding: None,
        };

        let info = element_info(&el);
        assert_eq!(info.min, 0);
        assert_eq!(info.max, "1");
        assert_eq!(info.short, "");
        assert!(info.is_polymorphic);
        assert!(!info.is_backbone);
        assert_eq!(info.cardinality(), "0..1");
    }

    #[test]
    fn element_info_carries_binding() {
        let el = ElementDefinition {
            path: "Patient.gender".to_string(),
            min: Some(0),
            max: Some("1".to_string()),
            short: Some("male | female | other | unknown".to_string()),
            definition: None,
            types: vec![typed("code", &[])],
            binding: Some(ElementBinding {
                strength: Some("required".to_string()),
                value_set: Some("http://hl7.org/fhir/ValueSet/administrative-gender".to_string()),
            }),
        };

        let info = element_info(&el);
        assert_eq!(info.binding_strength.as_deref(), Some("required"));
        assert_eq!(
            info.binding_value_set.as_deref(),
            Some("http://hl7.org/fhir/ValueSet/administrative-gender")
        );
    }

    #[test]
    fn element_info_marks_backbone() {
        let el = ElementDefinition {
            path: "Patient.contact".to_string(),
            min: Some(0),
            max: Some("*".to_string()),
            short: Some("A contact party for the patient".to_string()),
            definition: None,
            types: vec![typed("BackboneElement", &[])],
            binding: None,
        };

        assert!(element_info(&el).is_backbone);
    }
}
