//! Style-token resolution.
//!
//! Pure lookups, one function per token family. An absent or unrecognized
//! token resolves to the family default rather than failing: card documents
//! come from many independent authors and tools, and an unknown token must
//! degrade gracefully instead of breaking the render.

use crate::host_config::HostConfig;
use serde::Serialize;

/// Resolved horizontal alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// Resolved action presentation style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionStyle {
    #[default]
    Default,
    Positive,
    Destructive,
}

pub fn font_size(config: &HostConfig, token: Option<&str>) -> u32 {
    let sizes = &config.font_sizes;
    match token.map(str::to_ascii_lowercase).as_deref() {
        Some("small") => sizes.small,
        Some("medium") => sizes.medium,
        Some("large") => sizes.large,
        Some("extralarge") => sizes.extra_large,
        _ => sizes.default,
    }
}

pub fn font_weight(config: &HostConfig, token: Option<&str>) -> u16 {
    let weights = &config.font_weights;
    match token.map(str::to_ascii_lowercase).as_deref() {
        Some("lighter") => weights.lighter,
        Some("bolder") => weights.bolder,
        _ => weights.default,
    }
}

pub fn foreground_color(config: &HostConfig, token: Option<&str>, is_subtle: bool) -> String {
    let colors = config.colors();
    let pair = match token.map(str::to_ascii_lowercase).as_deref() {
        Some("dark") => &colors.dark,
        Some("light") => &colors.light,
        Some("accent") => &colors.accent,
        Some("good") => &colors.good,
        Some("warning") => &colors.warning,
        Some("attention") => &colors.attention,
        _ => &colors.default,
    };
    if is_subtle {
        pair.subtle.clone()
    } else {
        pair.normal.clone()
    }
}

pub fn spacing(config: &HostConfig, token: Option<&str>) -> u32 {
    let table = &config.spacing;
    match token.map(str::to_ascii_lowercase).as_deref() {
        Some("none") => 0,
        Some("small") => table.small,
        Some("medium") => table.medium,
        Some("large") => table.large,
        Some("extralarge") => table.extra_large,
        Some("padding") => table.padding,
        _ => table.default,
    }
}

pub fn alignment(token: Option<&str>) -> Alignment {
    match token.map(str::to_ascii_lowercase).as_deref() {
        Some("center") => Alignment::Center,
        Some("right") => Alignment::Right,
        _ => Alignment::Left,
    }
}

pub fn image_size(config: &HostConfig, token: Option<&str>) -> Option<u32> {
    let sizes = &config.image_sizes;
    match token.map(str::to_ascii_lowercase).as_deref() {
        Some("small") => Some(sizes.small),
        Some("medium") => Some(sizes.medium),
        Some("large") => Some(sizes.large),
        // "auto" and "stretch" leave sizing to the host layout.
        _ => None,
    }
}

pub fn action_style(token: Option<&str>) -> ActionStyle {
    match token.map(str::to_ascii_lowercase).as_deref() {
        Some("positive") => ActionStyle::Positive,
        Some("destructive") => ActionStyle::Destructive,
        _ => ActionStyle::Default,
    }
}
