//! Public types and layout constants for the visualization module.

use serde::Serialize;

/// Width of one bar in the grouped chart.
pub const BAR_WIDTH: f64 = 18.0;
/// Gap between bars of the same category.
pub const INNER_GAP: f64 = 4.0;
/// Gap between neighbouring category groups.
pub const OUTER_GAP: f64 = 18.0;
/// Horizontal slot reserved per legend chip.
pub const LEGEND_ITEM_WIDTH: f64 = 96.0;
/// Number of horizontal gridlines (at 1/4, 2/4, 3/4 and 4/4 of the domain).
pub const GRIDLINES: usize = 4;
/// Opacity applied to bars and chips of hidden series.
pub const HIDDEN_OPACITY: f64 = 0.25;

/// Minimum row height of the ranked chart.
pub const MIN_ROW_HEIGHT: f64 = 22.0;
/// Minimum visible width of a ranked bar, so every row stays hoverable.
pub const MIN_BAR_WIDTH: f64 = 2.0;
/// Maximum thickness of a ranked bar.
pub const MAX_BAR_THICKNESS: f64 = 18.0;
/// Column reserved for row labels left of the ranked bars.
pub const ROW_LABEL_WIDTH: f64 = 120.0;
/// Column reserved for formatted values right of the ranked bars.
pub const ROW_VALUE_WIDTH: f64 = 80.0;

/// Tooltip offset from the pointer, in both axes.
pub const TOOLTIP_OFFSET: f64 = 8.0;

/// Font sizes (px).
pub const TICK_FONT_PX: u32 = 10;
pub const LABEL_FONT_PX: u32 = 11;
pub const LEGEND_FONT_PX: u32 = 11;
pub const TOOLTIP_FONT_PX: u32 = 12;

/// Chart kinds supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Vertical bars, one group per category, one bar per series.
    Grouped,
    /// Horizontal bars, one row per entry, capped at `max_bars`.
    Ranked,
}

/// A point in chart-local or client pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle; `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Half-open containment: left/top edges inclusive, right/bottom exclusive.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// Stable identity of an interactive primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveId {
    /// Grouped chart bar at (category, series).
    Bar { category: usize, series: usize },
    /// Ranked chart row.
    RankedRow(usize),
    /// Legend chip of a series.
    LegendChip(usize),
}

/// Messages a host forwards to a chart instance.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartEvent {
    /// The pointer moved over `target`. `pointer` is in client coordinates and
    /// `container_origin` is the chart's top-left corner in the same coordinates.
    Hover {
        target: PrimitiveId,
        pointer: Point,
        container_origin: Point,
    },
    /// The pointer left the hovered primitive.
    Leave,
    /// `target` was clicked.
    Click { target: PrimitiveId },
}
