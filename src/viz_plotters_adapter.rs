//! Adapter drawing a [`Scene`] with the plotters crate.
//!
//! Works on any `DrawingBackend`; the crate ships SVG output (`viz::render_svg`). Scene coordinates
//! are chart-local pixels and are rounded to the backend's integer grid here.
//!
//! Usage example:
//! ```ignore
//!     use plotters::prelude::*;
//!     use plotters_svg::SVGBackend;
//!
//!     let mut buf = String::new();
//!     let root = SVGBackend::with_string(&mut buf, (560, 240)).into_drawing_area();
//!     draw_scene(&root, &chart.scene())?;
//!     root.present()?;
//! ```

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::{ChartError, Result};
use crate::viz::scene::{Anchor, HAlign, Primitive, Scene, VAlign};
use crate::viz::types::Bounds;
use crate::viz_style::Rgba;

/// Plotters color for `c` with its alpha multiplied by `opacity`.
pub fn rgba_color(c: Rgba, opacity: f64) -> RGBAColor {
    RGBAColor(c.r, c.g, c.b, (c.a as f64 / 255.0) * opacity.clamp(0.0, 1.0))
}

/// Filled style for bars, tracks and swatches.
pub fn fill_style(c: Rgba, opacity: f64) -> ShapeStyle {
    rgba_color(c, opacity).filled()
}

/// Stroke style for outlines and gridlines.
pub fn stroke_style(c: Rgba, opacity: f64, width: f64) -> ShapeStyle {
    rgba_color(c, opacity).stroke_width(width.round().max(1.0) as u32)
}

/// Text style with the anchor translated to plotters' `Pos`.
pub fn text_style(size: u32, c: Rgba, opacity: f64, anchor: Anchor) -> TextStyle<'static> {
    let h = match anchor.h {
        HAlign::Left => HPos::Left,
        HAlign::Center => HPos::Center,
        HAlign::Right => HPos::Right,
    };
    let v = match anchor.v {
        VAlign::Top => VPos::Top,
        VAlign::Middle => VPos::Center,
        VAlign::Bottom => VPos::Bottom,
    };
    TextStyle {
        font: FontDesc::new(FontFamily::SansSerif, size as f64, FontStyle::Normal),
        color: rgba_color(c, opacity).to_backend_color(),
        pos: Pos::new(h, v),
    }
}

fn corners(b: &Bounds) -> [(i32, i32); 2] {
    [
        (b.x.round() as i32, b.y.round() as i32),
        ((b.x + b.width).round() as i32, (b.y + b.height).round() as i32),
    ]
}

fn render_err<E: std::fmt::Debug>(e: E) -> ChartError {
    ChartError::Render(format!("{:?}", e))
}

/// Draw every primitive of `scene` onto `area`, in order.
pub fn draw_scene<DB: DrawingBackend>(area: &DrawingArea<DB, Shift>, scene: &Scene) -> Result<()> {
    for primitive in &scene.primitives {
        match primitive {
            Primitive::Rect {
                bounds,
                fill,
                stroke,
                opacity,
            } => {
                if bounds.is_empty() {
                    continue;
                }
                area.draw(&Rectangle::new(corners(bounds), fill_style(*fill, *opacity)))
                    .map_err(render_err)?;
                if let Some(stroke) = stroke {
                    area.draw(&Rectangle::new(
                        corners(bounds),
                        stroke_style(*stroke, *opacity, 1.0),
                    ))
                    .map_err(render_err)?;
                }
            }
            Primitive::Line {
                from,
                to,
                color,
                width,
            } => {
                let path = vec![
                    (from.x.round() as i32, from.y.round() as i32),
                    (to.x.round() as i32, to.y.round() as i32),
                ];
                area.draw(&PathElement::new(path, stroke_style(*color, 1.0, *width)))
                    .map_err(render_err)?;
            }
            Primitive::Label {
                at,
                text,
                size,
                color,
                anchor,
                opacity,
            } => {
                if text.is_empty() {
                    continue;
                }
                area.draw(&Text::new(
                    text.as_str(),
                    (at.x.round() as i32, at.y.round() as i32),
                    text_style(*size, *color, *opacity, *anchor),
                ))
                .map_err(render_err)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opacity_scales_alpha() {
        let c = rgba_color(Rgba::rgb(10, 20, 30), 0.25);
        assert_eq!((c.0, c.1, c.2), (10, 20, 30));
        assert!((c.3 - 0.25).abs() < 1e-9);
    }

    #[test]
    fn corners_round_to_pixels() {
        let b = Bounds::new(10.4, 20.6, 18.0, 0.5);
        assert_eq!(corners(&b), [(10, 21), (28, 21)]);
    }
}
