//! Semantic color palettes
//!
//! Both palettes follow the site's Tailwind look: gray surfaces with a teal
//! accent in dark mode, white cards with a blue accent in light mode.

use crate::scheme::ColorScheme;
use folio_core::Color;

/// Semantic color token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub enum ColorToken {
    // Surfaces
    PageBackground,
    NavBackground,
    CardBackground,

    // Text
    Heading,
    TextPrimary,
    TextSecondary,

    // Accent
    Accent,
    AccentHover,

    // Technology chips on project cards
    ChipBackground,
    ChipText,

    // Lines
    Border,
    TimelineRail,
}

impl ColorToken {
    pub const ALL: [ColorToken; 12] = [
        ColorToken::PageBackground,
        ColorToken::NavBackground,
        ColorToken::CardBackground,
        ColorToken::Heading,
        ColorToken::TextPrimary,
        ColorToken::TextSecondary,
        ColorToken::Accent,
        ColorToken::AccentHover,
        ColorToken::ChipBackground,
        ColorToken::ChipText,
        ColorToken::Border,
        ColorToken::TimelineRail,
    ];

    /// CSS variable name (without `--` prefix)
    pub fn css_name(self) -> &'static str {
        match self {
            ColorToken::PageBackground => "page-bg",
            ColorToken::NavBackground => "nav-bg",
            ColorToken::CardBackground => "card-bg",
            ColorToken::Heading => "heading",
            ColorToken::TextPrimary => "text-primary",
            ColorToken::TextSecondary => "text-secondary",
            ColorToken::Accent => "accent",
            ColorToken::AccentHover => "accent-hover",
            ColorToken::ChipBackground => "chip-bg",
            ColorToken::ChipText => "chip-text",
            ColorToken::Border => "border",
            ColorToken::TimelineRail => "timeline-rail",
        }
    }
}

/// Complete set of colors for one scheme
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub scheme: ColorScheme,
    pub page_background: Color,
    pub nav_background: Color,
    pub card_background: Color,
    pub heading: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub accent: Color,
    pub accent_hover: Color,
    pub chip_background: Color,
    pub chip_text: Color,
    pub border: Color,
    pub timeline_rail: Color,
}

impl Palette {
    pub fn for_scheme(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Light => Self::light(),
            ColorScheme::Dark => Self::dark(),
        }
    }

    pub fn light() -> Self {
        Self {
            scheme: ColorScheme::Light,
            page_background: Color::from_hex(0xF3F4F6), // gray-100
            nav_background: Color::WHITE.with_alpha(0.5),
            card_background: Color::WHITE,
            heading: Color::from_hex(0x1F2937),        // gray-800
            text_primary: Color::from_hex(0x4B5563),   // gray-600
            text_secondary: Color::from_hex(0x6B7280), // gray-500
            accent: Color::from_hex(0x2563EB),         // blue-600
            accent_hover: Color::from_hex(0x1D4ED8),   // blue-700
            chip_background: Color::from_hex(0xDBEAFE), // blue-100
            chip_text: Color::from_hex(0x2563EB),
            border: Color::from_hex(0xE5E7EB), // gray-200
            timeline_rail: Color::from_hex(0x2563EB),
        }
    }

    pub fn dark() -> Self {
        Self {
            scheme: ColorScheme::Dark,
            page_background: Color::from_hex(0x111827), // gray-900
            nav_background: Color::from_hex(0x1F2937).with_alpha(0.5),
            card_background: Color::from_hex(0x1F2937), // gray-800
            heading: Color::WHITE,
            text_primary: Color::from_hex(0xD1D5DB),   // gray-300
            text_secondary: Color::from_hex(0x9CA3AF), // gray-400
            accent: Color::from_hex(0x2DD4BF),         // teal-400
            accent_hover: Color::from_hex(0x5EEAD4),   // teal-300
            chip_background: Color::from_hex(0x374151), // gray-700
            chip_text: Color::from_hex(0x2DD4BF),
            border: Color::from_hex(0x374151),
            timeline_rail: Color::from_hex(0x2DD4BF),
        }
    }

    /// Get a color by token key
    pub fn color(&self, token: ColorToken) -> Color {
        match token {
            ColorToken::PageBackground => self.page_background,
            ColorToken::NavBackground => self.nav_background,
            ColorToken::CardBackground => self.card_background,
            ColorToken::Heading => self.heading,
            ColorToken::TextPrimary => self.text_primary,
            ColorToken::TextSecondary => self.text_secondary,
            ColorToken::Accent => self.accent,
            ColorToken::AccentHover => self.accent_hover,
            ColorToken::ChipBackground => self.chip_background,
            ColorToken::ChipText => self.chip_text,
            ColorToken::Border => self.border,
            ColorToken::TimelineRail => self.timeline_rail,
        }
    }

    /// CSS variable map, keyed by [`ColorToken::css_name`]
    pub fn to_css_variables(&self) -> Vec<(&'static str, String)> {
        ColorToken::ALL
            .iter()
            .map(|token| (token.css_name(), self.color(*token).to_hex()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schemes_differ_on_surfaces() {
        let light = Palette::light();
        let dark = Palette::dark();
        for token in [
            ColorToken::PageBackground,
            ColorToken::CardBackground,
            ColorToken::Heading,
            ColorToken::Accent,
        ] {
            assert_ne!(light.color(token), dark.color(token), "{token:?}");
        }
    }

    #[test]
    fn test_css_variables_cover_all_tokens() {
        let vars = Palette::dark().to_css_variables();
        assert_eq!(vars.len(), ColorToken::ALL.len());
        assert!(vars.contains(&("accent", "#2dd4bf".to_string())));
        assert!(vars.contains(&("nav-bg", "rgba(31,41,55,0.5)".to_string())));
    }
}
