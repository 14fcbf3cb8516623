//! WCAG relative luminance and contrast ratio.
//!
//! Uses the WCAG 2.x linearization breakpoint (0.03928), which differs from
//! the sRGB standard's 0.04045 only for near-black channels.

use crate::rgb::Rgb;

/// Convert an sRGB channel in [0, 1] to its linear value (remove gamma).
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG: `0.2126 R + 0.7152 G + 0.0722 B` over
/// linearized channels. 0.0 is black, 1.0 is white.
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(color.r as f64 / 255.0);
    let g = srgb_to_linear(color.g as f64 / 255.0);
    let b = srgb_to_linear(color.b as f64 / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio between two colors, in [1.0, 21.0].
///
/// Symmetric in its arguments.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    contrast_ratio_from_luminance(relative_luminance(a), relative_luminance(b))
}

/// Contrast ratio from two relative luminance values.
pub fn contrast_ratio_from_luminance(l1: f64, l2: f64) -> f64 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + 0.05) / (darker + 0.05)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb = Rgb::new(255, 255, 255);
    const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[test]
    fn srgb_to_linear_endpoints() {
        assert!((srgb_to_linear(0.0) - 0.0).abs() < 1e-9);
        assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn srgb_to_linear_monotonic_across_breakpoint() {
        let below = srgb_to_linear(0.039);
        let at = srgb_to_linear(0.03928);
        let above = srgb_to_linear(0.040);
        assert!(below < at || (below - at).abs() < 1e-9);
        assert!(at < above);
    }

    #[test]
    fn luminance_of_white_is_one() {
        assert!((relative_luminance(WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_of_black_is_zero() {
        assert!(relative_luminance(BLACK).abs() < 1e-9);
    }

    #[test]
    fn luminance_of_mid_gray() {
        // sRGB 128 linearizes to ~0.2159
        let l = relative_luminance(Rgb::new(128, 128, 128));
        assert!((l - 0.2159).abs() < 0.001);
    }

    #[test]
    fn white_on_black_is_21() {
        assert!((contrast_ratio(WHITE, BLACK) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn contrast_ratio_is_symmetric() {
        let a = Rgb::new(114, 181, 232);
        let b = Rgb::new(84, 88, 90);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn contrast_ratio_of_identical_colors_is_one() {
        assert!((contrast_ratio(WHITE, WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn contrast_ratio_stays_in_wcag_range() {
        let samples = [
            Rgb::new(255, 0, 0),
            Rgb::new(0, 61, 165),
            Rgb::new(255, 182, 18),
            WHITE,
            BLACK,
        ];
        for a in samples {
            for b in samples {
                let ratio = contrast_ratio(a, b);
                assert!(
                    ratio >= 1.0 - 1e-9 && ratio <= 21.0 + 1e-9,
                    "ratio {ratio} out of range"
                );
            }
        }
    }

    #[test]
    fn white_on_near_white_is_low_contrast() {
        let ratio = contrast_ratio(WHITE, Rgb::new(238, 238, 238));
        assert!((ratio - 1.16).abs() < 0.005);
    }
}
