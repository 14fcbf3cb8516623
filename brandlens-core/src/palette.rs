//! The brand palette: ordered categories of named reference colors.

use crate::rgb::Rgb;
use serde::{Deserialize, Serialize};

/// A single reference color with its display name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrandColor {
    pub name: String,
    pub rgb: Rgb,
}

impl BrandColor {
    pub fn new(name: &str, rgb: Rgb) -> Self {
        Self {
            name: name.to_string(),
            rgb,
        }
    }

    /// Canonical hex form used in reports and swatch labels.
    pub fn hex(&self) -> String {
        self.rgb.to_hex()
    }
}

/// A named category of brand colors, e.g. `primary`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaletteCategory {
    pub name: String,
    pub colors: Vec<BrandColor>,
}

/// The brand palette, immutable for the lifetime of a comparison run.
///
/// Category and color order is significant: distance ties during matching
/// keep the first candidate encountered in declaration order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BrandPalette {
    pub categories: Vec<PaletteCategory>,
}

impl BrandPalette {
    /// A palette with no reference colors at all.
    pub fn empty() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// The built-in brand palette: primary, secondary, accent.
    pub fn brand_default() -> Self {
        Self {
            categories: vec![
                PaletteCategory {
                    name: "primary".to_string(),
                    colors: vec![
                        BrandColor::new("Primary Red", Rgb::new(0xFF, 0x00, 0x00)),
                        BrandColor::new("Deep Navy", Rgb::new(0x00, 0x3D, 0xA5)),
                    ],
                },
                PaletteCategory {
                    name: "secondary".to_string(),
                    colors: vec![
                        BrandColor::new("Light Blue", Rgb::new(0x72, 0xB5, 0xE8)),
                        BrandColor::new("Gray", Rgb::new(0x54, 0x58, 0x5A)),
                    ],
                },
                PaletteCategory {
                    name: "accent".to_string(),
                    colors: vec![
                        BrandColor::new("Yellow", Rgb::new(0xFF, 0xB6, 0x12)),
                        BrandColor::new("Green", Rgb::new(0x15, 0x8B, 0x45)),
                    ],
                },
            ],
        }
    }

    /// Iterate every brand color in declaration order, with its category
    /// name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BrandColor)> {
        self.categories
            .iter()
            .flat_map(|category| category.colors.iter().map(move |c| (category.name.as_str(), c)))
    }

    /// Total number of reference colors across all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(|c| c.colors.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BrandPalette {
    fn default() -> Self {
        Self::brand_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn brand_default_has_six_colors() {
        assert_eq!(BrandPalette::brand_default().len(), 6);
    }

    #[test]
    fn brand_default_category_order() {
        let palette = BrandPalette::brand_default();
        let names: Vec<_> = palette.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["primary", "secondary", "accent"]);
    }

    #[test]
    fn iter_walks_declaration_order() {
        let palette = BrandPalette::brand_default();
        let hexes: Vec<_> = palette.iter().map(|(_, c)| c.hex()).collect();
        assert_eq!(
            hexes,
            vec!["#FF0000", "#003DA5", "#72B5E8", "#54585A", "#FFB612", "#158B45"]
        );
    }

    #[test]
    fn iter_pairs_colors_with_their_category() {
        let palette = BrandPalette::brand_default();
        let (category, color) = palette.iter().next().expect("palette is non-empty");
        assert_eq!(category, "primary");
        assert_eq!(color.name, "Primary Red");
    }

    #[test]
    fn empty_palette_iterates_nothing() {
        let palette = BrandPalette::empty();
        assert!(palette.is_empty());
        assert_eq!(palette.iter().count(), 0);
    }

    #[test]
    fn palette_serialization_roundtrip() {
        let palette = BrandPalette::brand_default();
        let json = serde_json::to_string(&palette).expect("serializes");
        let parsed: BrandPalette = serde_json::from_str(&json).expect("parses back");
        assert_eq!(palette, parsed);
    }
}
