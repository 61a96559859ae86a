//! Host configuration: the style-token tables and theme selector.
//!
//! A host rethemes a card by replacing table values here. The dispatch logic
//! in the renderer never hard-codes a presentation value; everything goes
//! through [`crate::style`] lookups against this config.

use serde::{Deserialize, Serialize};

/// Theme selector, passed through to color resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HostConfig {
    pub theme: Theme,
    pub font_sizes: FontSizes,
    pub font_weights: FontWeights,
    pub spacing: SpacingTable,
    pub image_sizes: ImageSizes,
    pub palette: Palette,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_sizes: FontSizes::default(),
            font_weights: FontWeights::default(),
            spacing: SpacingTable::default(),
            image_sizes: ImageSizes::default(),
            palette: Palette::default(),
        }
    }
}

impl HostConfig {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Foreground color table for the active theme.
    pub fn colors(&self) -> &ColorTable {
        match self.theme {
            Theme::Light => &self.palette.light,
            Theme::Dark => &self.palette.dark,
        }
    }
}

/// Font sizes in pixels, one per size token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontSizes {
    pub small: u32,
    pub default: u32,
    pub medium: u32,
    pub large: u32,
    pub extra_large: u32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            small: 12,
            default: 14,
            medium: 17,
            large: 21,
            extra_large: 26,
        }
    }
}

/// Numeric font weights, one per weight token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontWeights {
    pub lighter: u16,
    pub default: u16,
    pub bolder: u16,
}

impl Default for FontWeights {
    fn default() -> Self {
        Self {
            lighter: 200,
            default: 400,
            bolder: 600,
        }
    }
}

/// Leading spacing in pixels, one per spacing token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpacingTable {
    pub small: u32,
    pub default: u32,
    pub medium: u32,
    pub large: u32,
    pub extra_large: u32,
    pub padding: u32,
}

impl Default for SpacingTable {
    fn default() -> Self {
        Self {
            small: 3,
            default: 8,
            medium: 20,
            large: 30,
            extra_large: 40,
            padding: 15,
        }
    }
}

/// Image sizes in pixels, one per image size token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageSizes {
    pub small: u32,
    pub medium: u32,
    pub large: u32,
}

impl Default for ImageSizes {
    fn default() -> Self {
        Self {
            small: 40,
            medium: 80,
            large: 160,
        }
    }
}

/// Per-theme foreground color tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Palette {
    pub light: ColorTable,
    pub dark: ColorTable,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            light: ColorTable::default(),
            dark: ColorTable {
                default: ColorPair::new("#FFFFFF", "#88FFFFFF"),
                dark: ColorPair::new("#C8C8C8", "#88C8C8C8"),
                light: ColorPair::new("#FFFFFF", "#88FFFFFF"),
                accent: ColorPair::new("#4DA1FF", "#884DA1FF"),
                good: ColorPair::new("#5BD45B", "#885BD45B"),
                warning: ColorPair::new("#FFB347", "#88FFB347"),
                attention: ColorPair::new("#FF6B4A", "#88FF6B4A"),
            },
        }
    }
}

/// Foreground colors, one pair (normal, subtle) per color token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColorTable {
    pub default: ColorPair,
    pub dark: ColorPair,
    pub light: ColorPair,
    pub accent: ColorPair,
    pub good: ColorPair,
    pub warning: ColorPair,
    pub attention: ColorPair,
}

impl Default for ColorTable {
    fn default() -> Self {
        // Sample host values, mirroring a typical light theme.
        Self {
            default: ColorPair::new("#333333", "#EE333333"),
            dark: ColorPair::new("#000000", "#EE000000"),
            light: ColorPair::new("#FFFFFF", "#EEFFFFFF"),
            accent: ColorPair::new("#2E89FC", "#882E89FC"),
            good: ColorPair::new("#028A02", "#EE028A02"),
            warning: ColorPair::new("#E69500", "#EEE69500"),
            attention: ColorPair::new("#CC3300", "#EECC3300"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPair {
    pub normal: String,
    pub subtle: String,
}

impl ColorPair {
    pub fn new(normal: impl Into<String>, subtle: impl Into<String>) -> Self {
        Self {
            normal: normal.into(),
            subtle: subtle.into(),
        }
    }
}
