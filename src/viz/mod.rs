//! Visualization: lay out, render and interact with grouped and ranked bar charts.
//!
//! - Grouped vertical bars with a top-right legend; clicking a chip hides/shows a series
//! - Ranked horizontal bars, first `max_bars` rows in input order
//! - Four gridlines with compact k/L/cr tick labels
//! - One tooltip per chart instance, driven by [`ChartEvent::Hover`] / [`ChartEvent::Leave`]
//! - SVG output via plotters (see [`render_svg`] / [`save_svg`])
//!
//! Each chart instance owns its visibility and tooltip state; geometry and scenes are recomputed
//! from that state on demand and never cached.

pub mod grouped;
pub mod legend;
pub mod ranked;
pub mod scene;
pub mod text;
pub mod tooltip;
pub mod types;

pub use grouped::{Bar, GroupedGeometry, layout_grouped};
pub use legend::VisibilityState;
pub use ranked::{RankedBar, RankedGeometry, layout_ranked};
pub use scene::{Primitive, Region, Scene};
pub use tooltip::{HoverSource, Tooltip, TooltipFormat, TooltipState, default_tooltip_format};
pub use types::{Bounds, ChartEvent, ChartKind, Point, PrimitiveId};

// Re-export style module
pub use crate::viz_style as style;

use crate::error::{ChartError, Result};
use crate::models::{ChartOptions, GroupedData, RankedData, RankedOptions};
use crate::viz_plotters_adapter::draw_scene;

use plotters::prelude::IntoDrawingArea;
use plotters_svg::SVGBackend;

use std::path::Path;
use tooltip::PointerEvent;

/// Common surface of both chart kinds, so a host can drive either one.
pub trait Chart {
    /// Canvas size after layout (may exceed the requested size).
    fn size(&self) -> (f64, f64);
    /// Render the current state.
    fn scene(&self) -> Scene;
    /// Apply one interaction message.
    fn handle(&mut self, event: ChartEvent);
    /// Current tooltip, if any.
    fn tooltip(&self) -> Option<&Tooltip>;
}

/// A mounted grouped bar chart.
#[derive(Debug, Clone)]
pub struct GroupedChart {
    data: GroupedData,
    options: ChartOptions,
    visibility: VisibilityState,
    tooltip: TooltipState,
    tooltip_format: TooltipFormat,
}

impl GroupedChart {
    pub fn new(data: GroupedData, options: ChartOptions) -> Self {
        let visibility = VisibilityState::new(data.series.len());
        Self {
            data,
            options,
            visibility,
            tooltip: None,
            tooltip_format: default_tooltip_format,
        }
    }

    /// Replace the tooltip text builder.
    pub fn with_tooltip_format(mut self, format: TooltipFormat) -> Self {
        self.tooltip_format = format;
        self
    }

    pub fn data(&self) -> &GroupedData {
        &self.data
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn visibility(&self) -> &VisibilityState {
        &self.visibility
    }

    pub fn geometry(&self) -> GroupedGeometry {
        layout_grouped(&self.data, &self.visibility, &self.options)
    }

    /// Legend-click path; the only way visibility changes.
    pub fn toggle_series(&mut self, idx: usize) {
        self.visibility.toggle(idx);
        log::debug!(
            "series {idx} toggled, visible={} ({} hidden)",
            self.visibility.is_visible(idx),
            self.visibility.hidden_count()
        );
    }

    fn content_for(&self, id: PrimitiveId) -> Option<String> {
        match id {
            // hidden bars are flat and have no hover area
            PrimitiveId::Bar { series, .. } if !self.visibility.is_visible(series) => None,
            _ => scene::grouped_hover_source(&self.data, id).map(|s| (self.tooltip_format)(&s)),
        }
    }
}

impl Chart for GroupedChart {
    fn size(&self) -> (f64, f64) {
        let g = self.geometry();
        (g.total_width, g.total_height)
    }

    fn scene(&self) -> Scene {
        scene::grouped_scene(
            &self.geometry(),
            &self.data,
            &self.tooltip,
            self.tooltip_format,
        )
    }

    fn handle(&mut self, event: ChartEvent) {
        match event {
            ChartEvent::Click {
                target: PrimitiveId::LegendChip(i),
            } => self.toggle_series(i),
            ChartEvent::Click { .. } => {}
            other => {
                let content = match &other {
                    ChartEvent::Hover { target, .. } => self.content_for(*target),
                    _ => None,
                };
                self.tooltip = apply_pointer(&self.tooltip, other, content);
            }
        }
    }

    fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }
}

/// A mounted ranked (horizontal) bar chart.
#[derive(Debug, Clone)]
pub struct RankedChart {
    data: RankedData,
    options: RankedOptions,
    tooltip: TooltipState,
    tooltip_format: TooltipFormat,
}

impl RankedChart {
    pub fn new(data: RankedData, options: RankedOptions) -> Self {
        Self {
            data,
            options,
            tooltip: None,
            tooltip_format: default_tooltip_format,
        }
    }

    /// Replace the tooltip text builder.
    pub fn with_tooltip_format(mut self, format: TooltipFormat) -> Self {
        self.tooltip_format = format;
        self
    }

    pub fn data(&self) -> &RankedData {
        &self.data
    }

    pub fn options(&self) -> &RankedOptions {
        &self.options
    }

    pub fn geometry(&self) -> RankedGeometry {
        layout_ranked(&self.data, &self.options)
    }

    fn content_for(&self, id: PrimitiveId) -> Option<String> {
        match id {
            // rows past the cap are not on screen
            PrimitiveId::RankedRow(i) if i >= self.options.max_bars => None,
            _ => scene::ranked_hover_source(&self.data, id).map(|s| (self.tooltip_format)(&s)),
        }
    }
}

impl Chart for RankedChart {
    fn size(&self) -> (f64, f64) {
        let g = self.geometry();
        (g.total_width, g.total_height)
    }

    fn scene(&self) -> Scene {
        scene::ranked_scene(
            &self.geometry(),
            &self.data,
            &self.tooltip,
            self.tooltip_format,
        )
    }

    fn handle(&mut self, event: ChartEvent) {
        if let ChartEvent::Click { .. } = event {
            return;
        }
        let content = match &event {
            ChartEvent::Hover { target, .. } => self.content_for(*target),
            _ => None,
        };
        self.tooltip = apply_pointer(&self.tooltip, event, content);
    }

    fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }
}

/// Translate a hover/leave message into a reducer event. Hovering something without tooltip
/// content (a legend chip, an unknown id) behaves like leaving.
fn apply_pointer(state: &TooltipState, event: ChartEvent, content: Option<String>) -> TooltipState {
    let pointer_event = match (event, content) {
        (
            ChartEvent::Hover {
                target,
                pointer,
                container_origin,
            },
            Some(content),
        ) => {
            log::debug!("hover {target:?}");
            PointerEvent::Move {
                client: pointer,
                container_origin,
                content,
            }
        }
        _ => {
            log::debug!("pointer leave");
            PointerEvent::Leave
        }
    };
    tooltip::reduce(state, pointer_event)
}

/// Render a scene into an SVG document held in memory.
pub fn render_svg(scene: &Scene) -> Result<String> {
    let mut buf = String::new();
    {
        let size = (
            scene.width.ceil().max(1.0) as u32,
            scene.height.ceil().max(1.0) as u32,
        );
        let root = SVGBackend::with_string(&mut buf, size).into_drawing_area();
        draw_scene(&root, scene)?;
        root.present()
            .map_err(|e| ChartError::Render(format!("{:?}", e)))?;
    }
    Ok(buf)
}

/// Render a scene and write it as an `.svg` file.
pub fn save_svg<P: AsRef<Path>>(scene: &Scene, out_path: P) -> Result<()> {
    let out_path = out_path.as_ref();
    match out_path.extension().and_then(|s| s.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("svg") => {}
        other => {
            return Err(ChartError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            ));
        }
    }
    let svg = render_svg(scene)?;
    std::fs::write(out_path, svg)?;
    log::info!("wrote chart to {}", out_path.display());
    Ok(())
}

/// Load a dataset file and mount a chart of `kind` on it, with the options the file carries.
pub fn open_chart<P: AsRef<Path>>(kind: ChartKind, path: P) -> Result<Box<dyn Chart>> {
    Ok(match kind {
        ChartKind::Grouped => {
            let (data, options) = crate::storage::load_grouped(path)?;
            Box::new(GroupedChart::new(data, options))
        }
        ChartKind::Ranked => {
            let (data, options) = crate::storage::load_ranked(path)?;
            Box::new(RankedChart::new(data, options))
        }
    })
}

/// Convenience: render a grouped dataset in its initial (all-visible, no tooltip) state.
pub fn render_grouped_svg(data: &GroupedData, options: &ChartOptions) -> Result<String> {
    render_svg(&GroupedChart::new(data.clone(), *options).scene())
}

/// Convenience: render a ranked dataset in its initial state.
pub fn render_ranked_svg(data: &RankedData, options: &RankedOptions) -> Result<String> {
    render_svg(&RankedChart::new(data.clone(), *options).scene())
}
