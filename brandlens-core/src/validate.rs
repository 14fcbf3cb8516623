//! The color comparator: brand matching and contrast checks.

use crate::colorblind::colorblind_impact;
use crate::contrast::{contrast_ratio_from_luminance, relative_luminance};
use crate::palette::{BrandColor, BrandPalette};
use crate::report::{AccessibilityIssue, ColorError, SampledColor, ValidationReport};
use crate::rgb::Rgb;

/// Default Euclidean RGB distance below which a sampled color counts as
/// matching a brand color.
pub const DEFAULT_TOLERANCE: f64 = 25.0;

/// Minimum WCAG AA contrast ratio for normal text.
pub const WCAG_AA_CONTRAST: f64 = 4.5;

/// Requirement label attached to every accessibility issue.
pub const WCAG_AA_REQUIREMENT: &str = "WCAG AA 4.5:1";

/// Suggestion used when no brand color candidate exists at all.
const ANY_BRAND_COLOR: &str = "Any brand color";

const UNKNOWN_ELEMENT: &str = "Unknown element";
const NOT_SPECIFIED: &str = "Not specified";

/// Validate sampled colors against the palette with [`DEFAULT_TOLERANCE`].
pub fn validate(colors: &[SampledColor], palette: &BrandPalette) -> ValidationReport {
    validate_with_tolerance(colors, palette, DEFAULT_TOLERANCE)
}

/// Validate sampled colors against the palette.
///
/// A color matches when some brand color lies strictly within `tolerance`
/// in RGB space. Unmatched colors are reported together with the closest
/// brand color found. Every `background`/`text` pair is then checked
/// against the WCAG AA contrast requirement.
///
/// Pure and total: malformed hex strings are infinitely distant (so they
/// never match) and contribute zero luminance to contrast checks; an empty
/// input yields a trivially compliant report. Never panics.
pub fn validate_with_tolerance(
    colors: &[SampledColor],
    palette: &BrandPalette,
    tolerance: f64,
) -> ValidationReport {
    let mut report = ValidationReport::compliant();

    for sample in colors {
        let rgb = Rgb::parse(&sample.color).ok();
        let mut matched = false;
        let mut closest: Option<(f64, &BrandColor)> = None;

        for (_category, brand) in palette.iter() {
            let distance = match rgb {
                Some(rgb) => rgb.distance(brand.rgb),
                None => f64::INFINITY,
            };
            if distance < tolerance {
                matched = true;
            }
            // Strict comparison: ties keep the first candidate in palette
            // declaration order, and an infinite distance never becomes a
            // candidate.
            let best = closest.as_ref().map_or(f64::INFINITY, |(d, _)| *d);
            if distance < best {
                closest = Some((distance, brand));
            }
        }

        if !matched {
            report.color_compliance = false;
            report.color_errors.push(ColorError {
                element: sample
                    .element
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_ELEMENT.to_string()),
                expected_color: closest
                    .map(|(_, brand)| brand.hex())
                    .unwrap_or_else(|| ANY_BRAND_COLOR.to_string()),
                actual_color: sample.color.clone(),
                location: sample
                    .location
                    .clone()
                    .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            });
        }
    }

    for i in 0..colors.len() {
        for j in (i + 1)..colors.len() {
            let (first, second) = (&colors[i], &colors[j]);
            if !is_contrast_pair(first, second) {
                continue;
            }

            let ratio = pair_contrast_ratio(first, second);
            if ratio < WCAG_AA_CONTRAST {
                report.accessibility_issues.push(AccessibilityIssue {
                    combination: format!(
                        "{} ({}) and {} ({})",
                        first.element.as_deref().unwrap_or_default(),
                        first.color,
                        second.element.as_deref().unwrap_or_default(),
                        second.color,
                    ),
                    contrast_ratio: round2(ratio),
                    requirement: WCAG_AA_REQUIREMENT.to_string(),
                    colorblind_impact: colorblind_impact(
                        Rgb::parse(&first.color).ok(),
                        Rgb::parse(&second.color).ok(),
                    ),
                });
            }
        }
    }

    report
}

/// A pair participates in contrast checking when one side is a
/// `background` and the other a `text`, in either orientation. Colors
/// without a role label are excluded.
fn is_contrast_pair(a: &SampledColor, b: &SampledColor) -> bool {
    matches!(
        (a.element.as_deref(), b.element.as_deref()),
        (Some("background"), Some("text")) | (Some("text"), Some("background"))
    )
}

/// Contrast ratio for a pair, with unparseable colors contributing zero
/// luminance rather than failing.
fn pair_contrast_ratio(a: &SampledColor, b: &SampledColor) -> f64 {
    let la = Rgb::parse(&a.color).ok().map_or(0.0, relative_luminance);
    let lb = Rgb::parse(&b.color).ok().map_or(0.0, relative_luminance);
    contrast_ratio_from_luminance(la, lb)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
