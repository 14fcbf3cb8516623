//! Input and output records for a validation run.
//!
//! The report serializes with the camelCase field names its consumers
//! (the rendered JSON view) expect.

use serde::{Deserialize, Serialize};

/// A color sampled from the uploaded image, optionally tagged with the UI
/// element role it was taken from and a free-text location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SampledColor {
    pub color: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl SampledColor {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
            element: None,
            location: None,
        }
    }

    pub fn with_element(mut self, element: impl Into<String>) -> Self {
        self.element = Some(element.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }
}

/// One unmatched color: what was sampled, and the closest brand color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorError {
    pub element: String,
    pub expected_color: String,
    pub actual_color: String,
    pub location: String,
}

/// One background/text pair below the WCAG AA contrast requirement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityIssue {
    pub combination: String,
    pub contrast_ratio: f64,
    pub requirement: String,
    pub colorblind_impact: Vec<String>,
}

/// Result of one validation run.
///
/// Constructed fresh per invocation and never mutated afterward.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub color_compliance: bool,
    pub color_errors: Vec<ColorError>,
    pub accessibility_issues: Vec<AccessibilityIssue>,
}

impl ValidationReport {
    /// Report for a trivially compliant run: nothing flagged.
    pub fn compliant() -> Self {
        Self {
            color_compliance: true,
            color_errors: Vec::new(),
            accessibility_issues: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampled_color_builder_sets_tags() {
        let sample = SampledColor::new("#FF0000")
            .with_element("background")
            .with_location("center");
        assert_eq!(sample.color, "#FF0000");
        assert_eq!(sample.element.as_deref(), Some("background"));
        assert_eq!(sample.location.as_deref(), Some("center"));
    }

    #[test]
    fn sampled_color_deserializes_without_tags() {
        let sample: SampledColor = serde_json::from_str(r##"{"color":"#123456"}"##).expect("parses");
        assert_eq!(sample.color, "#123456");
        assert_eq!(sample.element, None);
        assert_eq!(sample.location, None);
    }

    #[test]
    fn report_serializes_camel_case() {
        let report = ValidationReport::compliant();
        let json = serde_json::to_string(&report).expect("serializes");
        assert_eq!(
            json,
            r#"{"colorCompliance":true,"colorErrors":[],"accessibilityIssues":[]}"#
        );
    }

    #[test]
    fn compliant_report_is_empty() {
        let report = ValidationReport::compliant();
        assert!(report.color_compliance);
        assert!(report.color_errors.is_empty());
        assert!(report.accessibility_issues.is_empty());
    }
}
