//! Scale and layout of the grouped (vertical) bar chart.
//!
//! Pure: the same dataset, visibility and options always produce the same geometry.

use serde::Serialize;

use super::legend::{LegendLayout, VisibilityState, layout_legend};
use super::text::truncate_to_width;
use super::types::{
    BAR_WIDTH, GRIDLINES, HIDDEN_OPACITY, INNER_GAP, LABEL_FONT_PX, OUTER_GAP,
};
use crate::format::format_currency_compact;
use crate::models::{ChartOptions, GroupedData};
use crate::viz_style::{Rgba, series_fill, series_stroke};

/// Headroom kept between the tallest bar and the top of the plot area.
const TOP_HEADROOM: f64 = 4.0;
/// Distance from the baseline to the centre of category labels.
const CATEGORY_LABEL_OFFSET: f64 = 14.0;

/// One horizontal gridline with its compact tick label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gridline {
    pub value: f64,
    pub y: f64,
    pub x1: f64,
    pub x2: f64,
    pub label: String,
}

/// One bar of one series within one category group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub category: usize,
    pub series: usize,
    /// The input value, independent of visibility.
    pub value: f64,
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub opacity: f64,
}

/// All bars of one category plus its axis label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryGroup {
    pub index: usize,
    pub label: String,
    /// Left edge of the group.
    pub x: f64,
    pub label_x: f64,
    pub label_y: f64,
    pub bars: Vec<Bar>,
}

/// Complete pixel geometry of a grouped chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupedGeometry {
    pub total_width: f64,
    pub total_height: f64,
    pub padding: f64,
    pub chart_height: f64,
    pub baseline_y: f64,
    pub domain_max: f64,
    pub group_width: f64,
    pub gridlines: Vec<Gridline>,
    pub groups: Vec<CategoryGroup>,
    pub legend: LegendLayout,
}

impl GroupedGeometry {
    pub fn bar(&self, category: usize, series: usize) -> Option<&Bar> {
        self.groups
            .get(category)
            .and_then(|g| g.bars.get(series))
    }

    pub fn bars(&self) -> impl Iterator<Item = &Bar> {
        self.groups.iter().flat_map(|g| g.bars.iter())
    }
}

/// Values the scale is computed from: hidden series contribute zeros but keep their slot.
pub fn active_values(data: &GroupedData, visibility: &VisibilityState) -> Vec<Vec<f64>> {
    data.series
        .iter()
        .enumerate()
        .map(|(i, s)| {
            if visibility.is_visible(i) {
                s.values.clone()
            } else {
                vec![0.0; s.values.len()]
            }
        })
        .collect()
}

/// Largest active value, floored at 1 so the scale never degenerates.
pub fn domain_max(active: &[Vec<f64>]) -> f64 {
    active
        .iter()
        .flat_map(|vals| vals.iter().copied())
        .fold(1.0_f64, f64::max)
}

/// Lay out the grouped chart.
pub fn layout_grouped(
    data: &GroupedData,
    visibility: &VisibilityState,
    options: &ChartOptions,
) -> GroupedGeometry {
    let padding = options.padding;
    let n_series = data.series.len();
    let n_cat = data.categories.len();

    let active = active_values(data, visibility);
    let max = domain_max(&active);

    let group_width =
        (n_series as f64 * BAR_WIDTH + INNER_GAP * (n_series as f64 - 1.0)).max(0.0);
    let needed_width = padding * 2.0
        + n_cat as f64 * group_width
        + (n_cat as f64 - 1.0).max(0.0) * OUTER_GAP;
    let total_width = options.width.max(needed_width);

    let chart_height = options.height - padding * 1.6;
    let baseline_y = chart_height + padding * 0.2;
    let usable = (chart_height - TOP_HEADROOM).max(0.0);
    let y_of = |v: f64| baseline_y - (v / max * usable).max(0.0);

    let gridlines = (1..=GRIDLINES)
        .map(|i| {
            let value = max * i as f64 / GRIDLINES as f64;
            Gridline {
                value,
                y: y_of(value),
                x1: padding,
                x2: total_width - padding,
                label: format_currency_compact(value),
            }
        })
        .collect();

    let label_budget = (group_width + OUTER_GAP).max(0.0) as u32;
    let groups = data
        .categories
        .iter()
        .enumerate()
        .map(|(ci, category)| {
            let group_x = padding + ci as f64 * (group_width + OUTER_GAP);
            let bars = data
                .series
                .iter()
                .enumerate()
                .map(|(si, series)| {
                    let v = active[si].get(ci).copied().unwrap_or(0.0);
                    let height = (v / max * usable).max(0.0);
                    let visible = visibility.is_visible(si);
                    Bar {
                        category: ci,
                        series: si,
                        value: series.values.get(ci).copied().unwrap_or(0.0),
                        visible,
                        x: group_x + si as f64 * (BAR_WIDTH + INNER_GAP),
                        y: baseline_y - height,
                        width: BAR_WIDTH,
                        height,
                        fill: series_fill(si),
                        stroke: series_stroke(si),
                        opacity: if visible { 1.0 } else { HIDDEN_OPACITY },
                    }
                })
                .collect();
            CategoryGroup {
                index: ci,
                label: truncate_to_width(category, LABEL_FONT_PX, label_budget),
                x: group_x,
                label_x: group_x + group_width / 2.0,
                label_y: baseline_y + CATEGORY_LABEL_OFFSET,
                bars,
            }
        })
        .collect();

    let names: Vec<&str> = data.series.iter().map(|s| s.name.as_str()).collect();
    let legend = layout_legend(&names, visibility, total_width, padding);

    log::trace!(
        "grouped layout: {n_cat} categories x {n_series} series, domain_max={max}, width={total_width}"
    );

    GroupedGeometry {
        total_width,
        total_height: options.height,
        padding,
        chart_height,
        baseline_y,
        domain_max: max,
        group_width,
        gridlines,
        groups,
        legend,
    }
}
