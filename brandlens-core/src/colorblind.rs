//! Heuristic color-blindness impact estimate for a color pair.
//!
//! This is a best-effort channel-difference heuristic, not a simulation of
//! color-vision deficiency: it flags pairs where one color carries a strong
//! red/green (or blue/yellow) opponent signal that the other lacks.

use crate::rgb::Rgb;

const DEUTERANOPIA: &str = "Deuteranopia (red-green color blindness)";
const PROTANOPIA: &str = "Protanopia (red-green color blindness)";
const TRITANOPIA: &str = "Tritanopia (blue-yellow color blindness)";
const NO_IMPACT: &str = "No significant impact detected";
const UNKNOWN: &str = "Unknown impact";

/// Estimate which color-vision deficiencies could make this pair hard to
/// tell apart. `first` and `second` keep the pair's scan order; the check
/// is deliberately asymmetric in that order. `None` stands for a color
/// that failed to parse.
pub fn colorblind_impact(first: Option<Rgb>, second: Option<Rgb>) -> Vec<String> {
    let (Some(a), Some(b)) = (first, second) else {
        return vec![UNKNOWN.to_string()];
    };

    let mut impacts = Vec::new();

    if channel_gap(a.r, a.g) > 100 && channel_gap(b.r, b.g) < 50 {
        impacts.push(DEUTERANOPIA.to_string());
        impacts.push(PROTANOPIA.to_string());
    }

    if channel_gap(a.b, a.g) > 100 && channel_gap(b.b, b.g) < 50 {
        impacts.push(TRITANOPIA.to_string());
    }

    if impacts.is_empty() {
        impacts.push(NO_IMPACT.to_string());
    }
    impacts
}

fn channel_gap(x: u8, y: u8) -> i16 {
    (x as i16 - y as i16).abs()
}
