//! Category icon lookup.
//!
//! The `icon` column is an arbitrary string from the database, so the mapping
//! to a rendered symbol is a closed enum with a defined fallback: every input
//! resolves to a glyph, unknown names included.

use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{
    FaArrowTrendUp, FaChartColumn, FaCode, FaGear, FaPalette, FaPenNib, FaShieldHalved, FaVideo,
};
use dioxus_free_icons::Icon;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryGlyph {
    Code,
    Palette,
    PenTool,
    TrendingUp,
    Video,
    Settings,
    BarChart,
    Shield,
}

impl CategoryGlyph {
    /// Total lookup: unknown or missing names fall back to [`Self::Code`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Code" => Self::Code,
            "Palette" => Self::Palette,
            "PenTool" => Self::PenTool,
            "TrendingUp" => Self::TrendingUp,
            "Video" => Self::Video,
            "Settings" => Self::Settings,
            "BarChart" => Self::BarChart,
            "Shield" => Self::Shield,
            _ => Self::Code,
        }
    }

    pub fn render(self, size: u32) -> Element {
        match self {
            Self::Code => rsx! { Icon { icon: FaCode, width: size, height: size } },
            Self::Palette => rsx! { Icon { icon: FaPalette, width: size, height: size } },
            Self::PenTool => rsx! { Icon { icon: FaPenNib, width: size, height: size } },
            Self::TrendingUp => rsx! { Icon { icon: FaArrowTrendUp, width: size, height: size } },
            Self::Video => rsx! { Icon { icon: FaVideo, width: size, height: size } },
            Self::Settings => rsx! { Icon { icon: FaGear, width: size, height: size } },
            Self::BarChart => rsx! { Icon { icon: FaChartColumn, width: size, height: size } },
            Self::Shield => rsx! { Icon { icon: FaShieldHalved, width: size, height: size } },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_map_to_their_glyph() {
        assert_eq!(CategoryGlyph::from_name("Palette"), CategoryGlyph::Palette);
        assert_eq!(CategoryGlyph::from_name("Shield"), CategoryGlyph::Shield);
        assert_eq!(CategoryGlyph::from_name("BarChart"), CategoryGlyph::BarChart);
    }

    #[test]
    fn anything_else_falls_back_to_code() {
        assert_eq!(CategoryGlyph::from_name(""), CategoryGlyph::Code);
        assert_eq!(CategoryGlyph::from_name("code"), CategoryGlyph::Code);
        assert_eq!(
            CategoryGlyph::from_name("<script>alert(1)</script>"),
            CategoryGlyph::Code
        );
    }
}
