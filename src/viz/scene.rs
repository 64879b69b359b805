//! Renderer: turns chart geometry into a backend-agnostic `Scene` of styled primitives plus the
//! hover/click regions a host uses for hit testing.
//!
//! Building a scene is deterministic; draw order is the order of `primitives`.

use serde::Serialize;

use super::grouped::GroupedGeometry;
use super::ranked::RankedGeometry;
use super::text::estimate_text_width_px;
use super::tooltip::{HoverSource, TooltipFormat, TooltipState};
use super::types::{
    Bounds, LABEL_FONT_PX, LEGEND_FONT_PX, Point, PrimitiveId, TICK_FONT_PX, TOOLTIP_FONT_PX,
};
use crate::models::{GroupedData, RankedData};
use crate::viz_style::{
    AXIS_LINE, AXIS_TEXT, BACKGROUND, GRID_LINE, LABEL_TEXT, Rgba, TOOLTIP_FILL, TOOLTIP_TEXT,
};

const TOOLTIP_PAD_X: f64 = 6.0;
const TOOLTIP_HEIGHT: f64 = 22.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

/// Which point of the text box sits at the label's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Anchor {
    pub h: HAlign,
    pub v: VAlign,
}

impl Anchor {
    pub const fn new(h: HAlign, v: VAlign) -> Self {
        Self { h, v }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Primitive {
    Rect {
        bounds: Bounds,
        fill: Rgba,
        stroke: Option<Rgba>,
        opacity: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgba,
        width: f64,
    },
    Label {
        at: Point,
        text: String,
        size: u32,
        color: Rgba,
        anchor: Anchor,
        opacity: f64,
    },
}

/// An interactive area. Bars and rows carry their tooltip content; legend chips are click targets.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Region {
    pub id: PrimitiveId,
    pub bounds: Bounds,
    pub content: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub primitives: Vec<Primitive>,
    pub regions: Vec<Region>,
}

impl Scene {
    fn new(width: f64, height: f64) -> Self {
        let mut scene = Self {
            width,
            height,
            primitives: Vec::new(),
            regions: Vec::new(),
        };
        scene.rect(Bounds::new(0.0, 0.0, width, height), BACKGROUND, None, 1.0);
        scene
    }

    /// Topmost non-empty region containing the chart-local point.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<PrimitiveId> {
        self.regions
            .iter()
            .rev()
            .find(|r| !r.bounds.is_empty() && r.bounds.contains(x, y))
            .map(|r| r.id)
    }

    pub fn region(&self, id: PrimitiveId) -> Option<&Region> {
        self.regions.iter().find(|r| r.id == id)
    }

    /// Text of every label, in draw order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    fn rect(&mut self, bounds: Bounds, fill: Rgba, stroke: Option<Rgba>, opacity: f64) {
        self.primitives.push(Primitive::Rect {
            bounds,
            fill,
            stroke,
            opacity,
        });
    }

    fn line(&mut self, from: Point, to: Point, color: Rgba, width: f64) {
        self.primitives.push(Primitive::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn label(
        &mut self,
        at: Point,
        text: impl Into<String>,
        size: u32,
        color: Rgba,
        anchor: Anchor,
        opacity: f64,
    ) {
        self.primitives.push(Primitive::Label {
            at,
            text: text.into(),
            size,
            color,
            anchor,
            opacity,
        });
    }

    /// Tooltip box. Registers no region, so hit testing never lands on it.
    fn tooltip(&mut self, tooltip: &TooltipState) {
        let Some(t) = tooltip else {
            return;
        };
        let w = estimate_text_width_px(&t.content, TOOLTIP_FONT_PX) as f64 + TOOLTIP_PAD_X * 2.0;
        self.rect(
            Bounds::new(t.x, t.y, w, TOOLTIP_HEIGHT),
            TOOLTIP_FILL,
            None,
            0.92,
        );
        self.label(
            Point::new(t.x + TOOLTIP_PAD_X, t.y + TOOLTIP_HEIGHT / 2.0),
            t.content.clone(),
            TOOLTIP_FONT_PX,
            TOOLTIP_TEXT,
            Anchor::new(HAlign::Left, VAlign::Middle),
            1.0,
        );
    }
}

/// Source values behind a grouped-chart primitive, if it is a bar.
pub fn grouped_hover_source(data: &GroupedData, id: PrimitiveId) -> Option<HoverSource<'_>> {
    match id {
        PrimitiveId::Bar { category, series } => {
            let s = data.series.get(series)?;
            Some(HoverSource::Bar {
                series: &s.name,
                category: data.categories.get(category)?,
                value: s.values.get(category).copied().unwrap_or(0.0),
            })
        }
        _ => None,
    }
}

/// Source values behind a ranked-chart primitive, if it is a row.
pub fn ranked_hover_source(data: &RankedData, id: PrimitiveId) -> Option<HoverSource<'_>> {
    match id {
        PrimitiveId::RankedRow(i) => data.rows.get(i).map(|r| HoverSource::Row {
            label: &r.label,
            value: r.value,
        }),
        _ => None,
    }
}

/// Render a grouped chart: gridlines and ticks, bars, category labels, legend, tooltip.
pub fn grouped_scene(
    geo: &GroupedGeometry,
    data: &GroupedData,
    tooltip: &TooltipState,
    format: TooltipFormat,
) -> Scene {
    let mut scene = Scene::new(geo.total_width, geo.total_height);
    let left = geo.padding;
    let right = geo.total_width - geo.padding;

    for g in &geo.gridlines {
        scene.line(Point::new(g.x1, g.y), Point::new(g.x2, g.y), GRID_LINE, 1.0);
        scene.label(
            Point::new(g.x1 + 2.0, g.y - 2.0),
            g.label.clone(),
            TICK_FONT_PX,
            AXIS_TEXT,
            Anchor::new(HAlign::Left, VAlign::Bottom),
            1.0,
        );
    }
    scene.line(
        Point::new(left, geo.baseline_y),
        Point::new(right, geo.baseline_y),
        AXIS_LINE,
        1.0,
    );

    for group in &geo.groups {
        for bar in &group.bars {
            let bounds = Bounds::new(bar.x, bar.y, bar.width, bar.height);
            scene.rect(bounds, bar.fill, Some(bar.stroke), bar.opacity);
            let id = PrimitiveId::Bar {
                category: bar.category,
                series: bar.series,
            };
            scene.regions.push(Region {
                id,
                bounds,
                content: if bar.visible {
                    grouped_hover_source(data, id).map(|s| format(&s))
                } else {
                    None
                },
            });
        }
        scene.label(
            Point::new(group.label_x, group.label_y),
            group.label.clone(),
            LABEL_FONT_PX,
            LABEL_TEXT,
            Anchor::new(HAlign::Center, VAlign::Middle),
            1.0,
        );
    }

    for chip in &geo.legend.chips {
        scene.rect(chip.swatch, chip.color, None, chip.opacity);
        scene.label(
            Point::new(chip.label_x, chip.label_y),
            chip.label.clone(),
            LEGEND_FONT_PX,
            LABEL_TEXT,
            Anchor::new(HAlign::Left, VAlign::Middle),
            chip.opacity,
        );
        scene.regions.push(Region {
            id: PrimitiveId::LegendChip(chip.series),
            bounds: chip.bounds,
            content: None,
        });
    }

    scene.tooltip(tooltip);
    scene
}

/// Render a ranked chart: per row a track, the value bar, the label and the formatted value.
pub fn ranked_scene(
    geo: &RankedGeometry,
    data: &RankedData,
    tooltip: &TooltipState,
    format: TooltipFormat,
) -> Scene {
    let mut scene = Scene::new(geo.total_width, geo.total_height);

    for row in &geo.rows {
        scene.label(
            Point::new(row.label_x, row.baseline_y),
            row.label.clone(),
            LABEL_FONT_PX,
            LABEL_TEXT,
            Anchor::new(HAlign::Left, VAlign::Middle),
            1.0,
        );
        scene.rect(
            Bounds::new(row.track_x, row.bar_y, row.track_width, row.thickness),
            row.track_fill,
            None,
            1.0,
        );
        let bar = Bounds::new(row.track_x, row.bar_y, row.bar_width, row.thickness);
        scene.rect(bar, row.bar_fill, None, 1.0);
        scene.label(
            Point::new(row.value_x, row.baseline_y),
            row.value_label.clone(),
            LABEL_FONT_PX,
            AXIS_TEXT,
            Anchor::new(HAlign::Left, VAlign::Middle),
            1.0,
        );
        let id = PrimitiveId::RankedRow(row.index);
        scene.regions.push(Region {
            id,
            bounds: bar,
            content: ranked_hover_source(data, id).map(|s| format(&s)),
        });
    }

    scene.tooltip(tooltip);
    scene
}
