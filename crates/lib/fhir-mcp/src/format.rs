//! Text rendering for tool responses.

use fhir_core::index::{BackboneExpansion, ResourceSummary};
use fhir_core::paths::leaf_name;
use fhir_model::ElementInfo;

const HEADER_SEP: &str = "============================================================";
const SECTION_SEP: &str = "----------------------------------------";

const BACKBONE_HINT: &str = "\u{2192} use get_backbone_element to expand";

/// Formats a single element as a compact text block.
fn element_line(el: &ElementInfo) -> String {
    let leaf = leaf_name(&el.path);
    let mut line = format!("  {leaf} ({}) : {}", el.cardinality(), el.type_display);
    if !el.short.is_empty() {
        line.push_str("\n      ");
        line.push_str(&el.short);
    }
    if let Some(strength) = &el.binding_strength {
        line.push_str("\n      binding: ");
        line.push_str(strength);
        if let Some(value_set) = &el.binding_value_set {
            line.push_str(&format!(" ({value_set})"));
        }
    }
    if el.is_backbone {
        line.push_str("\n      ");
        line.push_str(BACKBONE_HINT);
    }
    line
}

pub(crate) fn resource_summary(summary: &ResourceSummary) -> String {
    let mut lines = vec![
        HEADER_SEP.to_string(),
        format!("  {}", summary.name),
        HEADER_SEP.to_string(),
        String::new(),
        summary.description.clone(),
        String::new(),
        SECTION_SEP.to_string(),
        "  Elements".to_string(),
        SECTION_SEP.to_string(),
        String::new(),
    ];
    for el in &summary.elements {
        lines.push(element_line(el));
        lines.push(String::new());
    }
    lines.join("\n")
}

pub(crate) fn backbone_expansion(
    resource_type: &str,
    path: &str,
    expansion: &BackboneExpansion,
) -> String {
    let mut lines = vec![
        HEADER_SEP.to_string(),
        format!("  {resource_type}  \u{2014}  {path}"),
        HEADER_SEP.to_string(),
        String::new(),
        expansion.description.clone(),
        String::new(),
        SECTION_SEP.to_string(),
        "  Child elements".to_string(),
        SECTION_SEP.to_string(),
        String::new(),
    ];
    for el in &expansion.children {
        lines.push(element_line(el));
        lines.push(String::new());
    }
    lines.join("\n")
}

pub(crate) fn search_results(keyword: &str, results: &[ElementInfo], limit: usize) -> String {
    if results.is_empty() {
        return format!("No elements matched '{keyword}'.");
    }

    let mut lines = vec![
        format!("Search results for '{keyword}' ({} matches):", results.len()),
        String::new(),
    ];
    for el in results {
        let mut line = format!("  {} ({}) : {}", el.path, el.cardinality(), el.type_display);
        if !el.short.is_empty() {
            line.push_str("\n      ");
            line.push_str(&el.short);
        }
        lines.push(line);
        lines.push(String::new());
    }

    if results.len() >= limit {
        lines.push(format!(
            "\n(Results capped at {limit} \u{2014} refine your keyword for more specific results.)"
        ));
    }
    lines.join("\n")
}

pub(crate) fn unknown_resource(resource_type: &str, available: &[String]) -> String {
    format!(
        "Unknown resource type '{resource_type}'.\nAvailable resources ({}):\n{}",
        available.len(),
        available.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(path: &str) -> ElementInfo {
        ElementInfo {
            path: path.to_string(),
            min: 0,
            max: "1".to_string(),
            type_display: "string".to_string(),
            short: String::new(),
            is_backbone: false,
            is_polymorphic: false,
            binding_strength: None,
            binding_value_set: None,
        }
    }

    #[test]
    fn element_line_uses_leaf_name_and_cardinality() {
        let el = info("Patient.contact.name");
        assert_eq!(element_line(&el), "  name (0..1) : string");
    }

    #[test]
    fn element_line_appends_short_binding_and_hint() {
        let el = ElementInfo {
            path: "Patient.contact".to_string(),
            min: 0,
            max: "*".to_string(),
            type_display: "BackboneElement".to_string(),
            short: "A contact party for the patient".to_string(),
            is_backbone: true,
            is_polymorphic: false,
            binding_strength: Some("extensible".to_string()),
            binding_value_set: Some("http://hl7.org/fhir/ValueSet/contactrel".to_string()),
        };

        let line = element_line(&el);
        assert!(line.starts_with("  contact (0..*) : BackboneElement"));
        assert!(line.contains("\n      A contact party for the patient"));
        assert!(line.contains("\n      binding: extensible (http://hl7.org/fhir/ValueSet/contactrel)"));
        assert!(line.contains("use get_backbone_element to expand"));
    }

    #[test]
    fn search_results_reports_empty_matches() {
        assert_eq!(search_results("xyz", &[], 30), "No elements matched 'xyz'.");
    }

    #[test]
    fn search_results_notes_truncation_at_cap() {
        let results = vec![info("Patient.name"), info("Patient.gender")];
        let text = search_results("name", &results, 2);
        assert!(text.contains("2 matches"));
        assert!(text.contains("Results capped at 2"));

        let text = search_results("name", &results, 30);
        assert!(!text.contains("Results capped"));
    }

    #[test]
    fn unknown_resource_lists_available_names() {
        let available = vec!["Observation".to_string(), "Patient".to_string()];
        let text = unknown_resource("Patint", &available);
        assert!(text.starts_with("Unknown resource type 'Patint'."));
        assert!(text.contains("Available resources (2):"));
        assert!(text.ends_with("Observation, Patient"));
    }
}
