//! Brand color compliance checks.
//!
//! Pure, synchronous color math: Euclidean RGB matching against a brand
//! palette, WCAG relative-luminance/contrast computation, and a heuristic
//! color-blindness impact estimate. No browser types, no I/O.

pub mod colorblind;
pub mod contrast;
pub mod palette;
pub mod report;
pub mod rgb;
pub mod validate;

pub use colorblind::colorblind_impact;
pub use contrast::{contrast_ratio, relative_luminance, srgb_to_linear};
pub use palette::{BrandColor, BrandPalette, PaletteCategory};
pub use report::{AccessibilityIssue, ColorError, SampledColor, ValidationReport};
pub use rgb::{ParseHexError, Rgb};
pub use validate::{
    validate, validate_with_tolerance, DEFAULT_TOLERANCE, WCAG_AA_CONTRAST, WCAG_AA_REQUIREMENT,
};
