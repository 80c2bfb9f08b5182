//! Dotted-path helpers over flat snapshot element lists.

use fhir_model::ElementDefinition;

/// Returns the elements exactly one dot-level below `parent_path`, in source
/// order.
///
/// Grandchildren are excluded: a child's dot-count must equal the parent's
/// dot-count plus one.
#[must_use]
pub fn direct_children<'a>(
    elements: &'a [ElementDefinition],
    parent_path: &str,
) -> Vec<&'a ElementDefinition> {
    let prefix = format!("{parent_path}.");
    let child_depth = prefix.matches('.').count();
    elements
        .iter()
        .filter(|el| el.path.starts_with(&prefix) && el.path.matches('.').count() == child_depth)
        .collect()
}

/// Returns the final dot-separated segment of a path.
#[must_use]
pub fn leaf_name(path: &str) -> &str {
    path.rsplit('.').next().unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(path: &str) -> ElementDefinition {
        ElementDefinition {
            path: path.to_string(),
            min: None,
            max: None,
            short: None,
            definition: None,
            types: Vec::new(),
            binding: None,
        }
    }

    #[test]
    fn direct_children_skips_grandchildren() {
        let elements = vec![
            element("Patient"),
            element("Patient.name"),
            element("Patient.contact"),
            element("Patient.contact.name"),
            element("Patient.contact.name.family"),
            element("Observation.status"),
        ];

        let children = direct_children(&elements, "Patient");
        let paths: Vec<&str> = children.iter().map(|el| el.path.as_str()).collect();
        assert_eq!(paths, ["Patient.name", "Patient.contact"]);

        let children = direct_children(&elements, "Patient.contact");
        let paths: Vec<&str> = children.iter().map(|el| el.path.as_str()).collect();
        assert_eq!(paths, ["Patient.contact.name"]);
    }

    #[test]
    fn direct_children_requires_dot_boundary() {
        let elements = vec![element("Patient.name"), element("PatientRole.name")];
        let children = direct_children(&elements, "Patient");
        assert_eq!(children.len(), 1);
        assert_eq!(children[0].path, "Patient.name");
    }

    #[test]
    fn leaf_name_takes_last_segment() {
        assert_eq!(leaf_name("Patient.contact.relationship"), "relationship");
        assert_eq!(leaf_name("Patient"), "Patient");
    }
}
