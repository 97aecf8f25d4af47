use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Brand colours
// ---------------------------------------------------------------------------

/// Fixed display colour for a known category, matching each vendor's brand.
fn brand_color(category: &str) -> Option<Color32> {
    let c = match category {
        "NVIDIA" => Color32::from_rgb(0x76, 0xB9, 0x00),
        "AMD" => Color32::from_rgb(0xED, 0x1C, 0x24),
        "Intel" => Color32::from_rgb(0x00, 0x71, 0xC5),
        "Samsung" => Color32::from_rgb(0x14, 0x28, 0xA0),
        "SK Hynix" => Color32::from_rgb(0xE4, 0x00, 0x2B),
        "Micron" => Color32::from_rgb(0x00, 0xB2, 0xA9),
        "Kioxia" => Color32::from_rgb(0xE6, 0x00, 0x12),
        "Western Digital" => Color32::from_rgb(0x00, 0x5E, 0xB8),
        "Others" => Color32::from_rgb(0x80, 0x80, 0x80),
        _ => return None,
    };
    Some(c)
}

// ---------------------------------------------------------------------------
// Fallback palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues, for
/// categories without a brand colour.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Category → colour mapping for one dataset
// ---------------------------------------------------------------------------

/// Maps a dataset's categories to display colours: brand colour where one
/// exists, evenly spaced fallback hues otherwise.
#[derive(Debug, Clone)]
pub struct CategoryColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl CategoryColors {
    pub fn for_categories(categories: &[&str]) -> Self {
        let unknown: Vec<&str> = categories
            .iter()
            .copied()
            .filter(|c| brand_color(c).is_none())
            .collect();
        let fallback = generate_palette(unknown.len());

        let mut mapping = BTreeMap::new();
        let mut next_fallback = fallback.into_iter();
        for &cat in categories {
            let color = match brand_color(cat) {
                Some(c) => c,
                // `unknown` and the palette are the same length.
                None => next_fallback.next().unwrap_or(Color32::GRAY),
            };
            mapping.insert(cat.to_string(), color);
        }

        CategoryColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a category.
    pub fn color_for(&self, category: &str) -> Color32 {
        self.mapping
            .get(category)
            .copied()
            .unwrap_or(self.default_color)
    }
}
