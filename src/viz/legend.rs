//! Legend: per-series visibility state and the top-right chip layout.

use serde::Serialize;

use super::text::truncate_to_width;
use super::types::{Bounds, HIDDEN_OPACITY, LEGEND_FONT_PX, LEGEND_ITEM_WIDTH};
use crate::viz_style::{Rgba, series_fill};

/// Which series are currently shown. Indexed like the dataset's series.
///
/// Created all-visible when a chart is mounted; only legend clicks toggle it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisibilityState {
    visible: Vec<bool>,
}

impl VisibilityState {
    pub fn new(series_count: usize) -> Self {
        Self {
            visible: vec![true; series_count],
        }
    }

    /// Flip series `idx`. Out-of-range indices are ignored.
    pub fn toggle(&mut self, idx: usize) {
        if let Some(v) = self.visible.get_mut(idx) {
            *v = !*v;
        }
    }

    /// Out-of-range indices read as visible.
    pub fn is_visible(&self, idx: usize) -> bool {
        self.visible.get(idx).copied().unwrap_or(true)
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn hidden_count(&self) -> usize {
        self.visible.iter().filter(|v| !**v).count()
    }
}

// Chip internals (must match the renderer).
const CHIP_HEIGHT: f64 = 16.0;
const SWATCH: f64 = 10.0;
const SWATCH_TO_TEXT: f64 = 6.0;
const CHIP_TRAILING: f64 = 8.0;

/// Geometry of one legend chip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendChip {
    pub series: usize,
    /// Click target covering swatch and label.
    pub bounds: Bounds,
    pub swatch: Bounds,
    pub label: String,
    pub label_x: f64,
    pub label_y: f64,
    pub color: Rgba,
    pub opacity: f64,
}

/// Legend placement: chips laid out left to right from `x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub chips: Vec<LegendChip>,
}

/// Place the legend in the top-right corner without crossing the left padding.
pub fn layout_legend(
    names: &[&str],
    visibility: &VisibilityState,
    total_width: f64,
    padding: f64,
) -> LegendLayout {
    let width = names.len() as f64 * LEGEND_ITEM_WIDTH;
    let x = padding.max(total_width - padding - width);
    let y = (padding * 0.25).max(2.0);

    let text_budget = (LEGEND_ITEM_WIDTH - SWATCH - SWATCH_TO_TEXT - CHIP_TRAILING).max(0.0) as u32;

    let chips = names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let chip_x = x + i as f64 * LEGEND_ITEM_WIDTH;
            let opacity = if visibility.is_visible(i) {
                1.0
            } else {
                HIDDEN_OPACITY
            };
            LegendChip {
                series: i,
                bounds: Bounds::new(chip_x, y, LEGEND_ITEM_WIDTH - CHIP_TRAILING, CHIP_HEIGHT),
                swatch: Bounds::new(chip_x, y + (CHIP_HEIGHT - SWATCH) / 2.0, SWATCH, SWATCH),
                label: truncate_to_width(name, LEGEND_FONT_PX, text_budget),
                label_x: chip_x + SWATCH + SWATCH_TO_TEXT,
                label_y: y + CHIP_HEIGHT / 2.0,
                color: series_fill(i),
                opacity,
            }
        })
        .collect();

    LegendLayout {
        x,
        y,
        width,
        chips,
    }
}
