//! The report's JSON wire shape: field names and pretty-printed rendering.

use brandlens_core::{validate, BrandPalette, SampledColor};
use serde_json::Value;

fn analyzed() -> Value {
    let colors = [
        SampledColor::new("#123456")
            .with_element("header")
            .with_location("top banner"),
        SampledColor::new("#FFFFFF").with_element("background"),
        SampledColor::new("#EEEEEE").with_element("text"),
    ];
    let report = validate(&colors, &BrandPalette::brand_default());
    serde_json::to_value(&report).expect("report serializes")
}

#[test]
fn top_level_field_names_in_declaration_order() {
    let report = validate(&[], &BrandPalette::brand_default());
    let json = serde_json::to_string(&report).expect("serializes");
    let compliance = json.find("colorCompliance").expect("has colorCompliance");
    let errors = json.find("colorErrors").expect("has colorErrors");
    let issues = json.find("accessibilityIssues").expect("has accessibilityIssues");
    assert!(compliance < errors && errors < issues);
}

#[test]
fn color_error_field_names_and_values() {
    let json = analyzed();
    let error = &json["colorErrors"][0];
    assert_eq!(error["element"], "header");
    assert_eq!(error["expectedColor"], "#54585A");
    assert_eq!(error["actualColor"], "#123456");
    assert_eq!(error["location"], "top banner");
}

#[test]
fn accessibility_issue_field_names_and_values() {
    let json = analyzed();
    let issue = &json["accessibilityIssues"][0];
    assert_eq!(
        issue["combination"],
        "background (#FFFFFF) and text (#EEEEEE)"
    );
    assert_eq!(issue["contrastRatio"], 1.16);
    assert_eq!(issue["requirement"], "WCAG AA 4.5:1");
    assert_eq!(issue["colorblindImpact"][0], "No significant impact detected");
}

#[test]
fn report_roundtrips_through_json() {
    let colors = [
        SampledColor::new("#FF0000"),
        SampledColor::new("#FFFFFF").with_element("background"),
        SampledColor::new("#EEEEEE").with_element("text"),
    ];
    let report = validate(&colors, &BrandPalette::brand_default());
    let json = serde_json::to_string(&report).expect("serializes");
    let parsed: brandlens_core::ValidationReport =
        serde_json::from_str(&json).expect("parses back");
    assert_eq!(report, parsed);
}

#[test]
fn pretty_rendering_starts_with_compliance_flag() {
    let report = validate(&[], &BrandPalette::brand_default());
    let pretty = serde_json::to_string_pretty(&report).expect("serializes");
    assert!(pretty.starts_with("{\n  \"colorCompliance\": true"));
}

#[test]
fn sampled_colors_parse_from_plain_json() {
    let colors: Vec<SampledColor> = serde_json::from_str(
        r##"[
            {"color": "#FF1010", "element": "header", "location": "top banner"},
            {"color": "#FFFFFF", "element": "background"},
            {"color": "#333333"}
        ]"##,
    )
    .expect("input list parses");
    assert_eq!(colors.len(), 3);
    assert_eq!(colors[0].element.as_deref(), Some("header"));
    assert_eq!(colors[2].element, None);
}
