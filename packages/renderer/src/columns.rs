//! Column-width resolution.

use cardstock_schema::ColumnWidth;
use serde::Serialize;

/// Resolved sizing behavior for one column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ColumnSize {
    /// Grows to fill remaining space proportionally to its weight.
    Flex { weight: f64 },
    /// Shrinks to fit content, never grows.
    Auto,
    /// Fixed pixel width, no flex.
    Pixels { width: f64 },
}

/// Resolve a column's width specification.
///
/// Resolution order is load-bearing for layout fidelity: "stretch", then
/// "auto", then a pixel-suffixed string, then a bare number, and anything
/// absent or unrecognized falls back to flex weight 1.
pub fn resolve_column_width(spec: Option<&ColumnWidth>) -> ColumnSize {
    match spec {
        Some(ColumnWidth::Keyword(keyword)) => {
            if keyword == "stretch" {
                ColumnSize::Flex { weight: 1.0 }
            } else if keyword == "auto" {
                ColumnSize::Auto
            } else if let Some(number) = keyword.strip_suffix("px") {
                match number.trim().parse::<f64>() {
                    Ok(width) if width.is_finite() && width >= 0.0 => {
                        ColumnSize::Pixels { width }
                    }
                    _ => ColumnSize::Flex { weight: 1.0 },
                }
            } else {
                ColumnSize::Flex { weight: 1.0 }
            }
        }
        Some(ColumnWidth::Number(weight)) => ColumnSize::Flex { weight: *weight },
        None => ColumnSize::Flex { weight: 1.0 },
    }
}
