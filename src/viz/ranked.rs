//! Scale and layout of the ranked (horizontal) bar chart.

use serde::Serialize;

use super::text::truncate_to_width;
use super::types::{
    LABEL_FONT_PX, MAX_BAR_THICKNESS, MIN_BAR_WIDTH, MIN_ROW_HEIGHT, ROW_LABEL_WIDTH,
    ROW_VALUE_WIDTH,
};
use crate::format::format_currency_full;
use crate::models::{RankedData, RankedOptions, Row};
use crate::viz_style::{RANKED_BAR_FILL, Rgba, TRACK_FILL};

/// Gap between the row label column and the track.
const LABEL_GAP: f64 = 8.0;

/// Geometry of one ranked row: background track, value bar and text anchors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedBar {
    pub index: usize,
    pub label: String,
    pub value: f64,
    /// Centre line of the row.
    pub baseline_y: f64,
    pub track_x: f64,
    pub track_width: f64,
    pub bar_y: f64,
    pub bar_width: f64,
    pub thickness: f64,
    pub label_x: f64,
    pub value_x: f64,
    pub value_label: String,
    pub track_fill: Rgba,
    pub bar_fill: Rgba,
}

/// Complete pixel geometry of a ranked chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedGeometry {
    pub total_width: f64,
    pub total_height: f64,
    pub padding: f64,
    pub domain_max: f64,
    pub row_height: f64,
    pub chart_width: f64,
    pub rows: Vec<RankedBar>,
}

/// The rows a ranked chart shows: the first `max_bars`, in input order.
pub fn visible_rows(data: &RankedData, max_bars: usize) -> &[Row] {
    &data.rows[..data.rows.len().min(max_bars)]
}

/// Lay out the ranked chart.
pub fn layout_ranked(data: &RankedData, options: &RankedOptions) -> RankedGeometry {
    let o = &options.chart;
    let padding = o.padding;
    let rows = visible_rows(data, options.max_bars);
    let row_count = rows.len();

    let max = rows.iter().map(|r| r.value).fold(1.0_f64, f64::max);
    let row_height = MIN_ROW_HEIGHT.max((o.height - padding * 1.6) / row_count.max(1) as f64);
    let total_height = o.height.max(padding * 1.6 + row_count as f64 * row_height);

    let chart_width = (o.width - padding * 2.0 - ROW_LABEL_WIDTH - ROW_VALUE_WIDTH).max(0.0);
    let track_x = padding + ROW_LABEL_WIDTH;
    let thickness = MAX_BAR_THICKNESS.min(row_height * 0.6);
    let top = padding * 0.8;
    let label_budget = (ROW_LABEL_WIDTH - LABEL_GAP).max(0.0) as u32;

    let bars = rows
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let baseline_y = top + i as f64 * row_height + row_height / 2.0;
            RankedBar {
                index: i,
                label: truncate_to_width(&row.label, LABEL_FONT_PX, label_budget),
                value: row.value,
                baseline_y,
                track_x,
                track_width: chart_width,
                bar_y: baseline_y - thickness / 2.0,
                bar_width: MIN_BAR_WIDTH.max(row.value / max * chart_width),
                thickness,
                label_x: padding,
                value_x: track_x + chart_width + LABEL_GAP,
                value_label: format_currency_full(Some(row.value)),
                track_fill: TRACK_FILL,
                bar_fill: RANKED_BAR_FILL,
            }
        })
        .collect();

    log::trace!("ranked layout: {row_count} rows, domain_max={max}, row_height={row_height}");

    RankedGeometry {
        total_width: o.width,
        total_height,
        padding,
        domain_max: max,
        row_height,
        chart_width,
        rows: bars,
    }
}
