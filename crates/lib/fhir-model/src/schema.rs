pub const RESOURCE_TYPE_STRUCTURE_DEFINITION: &str = "StructureDefinition";
pub const KIND_RESOURCE: &str = "resource";

pub const TYPE_BACKBONE_ELEMENT: &str = "BackboneElement";
pub const TYPE_REFERENCE: &str = "Reference";

pub const POLYMORPHIC_MARKER: &str = "[x]";
pub const STRUCTURE_DEFINITION_URL_PREFIX: &str = "http://hl7.org/fhir/StructureDefinition/";

/// Element names carried by every resource; excluded from summaries and
/// backbone expansions but still visible to search.
pub const INFRASTRUCTURE_ELEMENT_NAMES: [&str; 8] = [
    "id",
    "extension",
    "modifierExtension",
    "meta",
    "implicitRules",
    "language",
    "text",
    "contained",
];

#[must_use]
pub fn is_infrastructure_element(name: &str) -> bool {
    INFRASTRUCTURE_ELEMENT_NAMES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infrastructure_names_match_exactly() {
        assert!(is_infrastructure_element("modifierExtension"));
        assert!(is_infrastructure_element("id"));
        assert!(!is_infrastructure_element("name"));
        assert!(!is_infrastructure_element("Extension"));
    }
}
