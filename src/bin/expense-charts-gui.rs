/*!
 * Interactive viewer for expense-charts
 *
 * Hosts one chart instance in a native window and forwards real pointer input to it:
 * - hovering a bar shows its tooltip, leaving it clears the tooltip
 * - clicking a legend chip hides/shows that series
 *
 * Platform support: Windows, macOS, Linux
 */

use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use expense_charts::viz::scene::{Anchor, HAlign, Primitive, VAlign};
use expense_charts::viz::{self, Chart, ChartEvent, ChartKind, Point, PrimitiveId, Scene};
use expense_charts::viz_style::Rgba;
use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Kind {
    Grouped,
    Ranked,
}

impl From<Kind> for ChartKind {
    fn from(k: Kind) -> Self {
        match k {
            Kind::Grouped => ChartKind::Grouped,
            Kind::Ranked => ChartKind::Ranked,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "expense-charts-gui", version, about = "Interactive expense chart viewer")]
struct Cli {
    /// Input dataset (.json or .csv).
    input: PathBuf,
    /// Chart kind.
    #[arg(short, long, value_enum, default_value_t = Kind::Grouped)]
    kind: Kind,
}

fn main() -> Result<()> {
    // Enable logging for better debugging
    env_logger::init();
    let cli = Cli::parse();

    let chart = viz::open_chart(cli.kind.into(), &cli.input)
        .with_context(|| format!("loading {}", cli.input.display()))?;

    let (w, h) = chart.size();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([(w as f32 + 48.0).max(400.0), (h as f32 + 96.0).max(300.0)])
            .with_min_inner_size([300.0, 200.0])
            .with_title("Expense Charts"),
        ..Default::default()
    };

    let title = cli
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    eframe::run_native(
        "Expense Charts",
        options,
        Box::new(|_cc| Ok(Box::new(ViewerApp::new(chart, title)))),
    )
    .map_err(|e| anyhow!("{e}"))
}

/// Viewer state: the hosted chart plus which primitive the pointer is over.
struct ViewerApp {
    chart: Box<dyn Chart>,
    title: String,
    hovered: Option<PrimitiveId>,
}

impl ViewerApp {
    fn new(chart: Box<dyn Chart>, title: String) -> Self {
        Self {
            chart,
            title,
            hovered: None,
        }
    }

    /// Turn this frame's pointer state into chart messages.
    fn forward_pointer(&mut self, response: &egui::Response) {
        let origin = response.rect.min;
        let local = |p: egui::Pos2| ((p.x - origin.x) as f64, (p.y - origin.y) as f64);
        let scene = self.chart.scene();

        let target = response.hover_pos().and_then(|p| {
            let (x, y) = local(p);
            scene.hit_test(x, y).map(|id| (id, p))
        });

        match target {
            Some((id, p)) => self.chart.handle(ChartEvent::Hover {
                target: id,
                pointer: Point::new(p.x as f64, p.y as f64),
                container_origin: Point::new(origin.x as f64, origin.y as f64),
            }),
            None if self.hovered.is_some() => self.chart.handle(ChartEvent::Leave),
            None => {}
        }
        self.hovered = target.map(|(id, _)| id);

        if response.clicked()
            && let Some(p) = response.interact_pointer_pos()
        {
            let (x, y) = local(p);
            if let Some(id) = scene.hit_test(x, y) {
                self.chart.handle(ChartEvent::Click { target: id });
            }
        }
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(self.title.as_str());
            ui.add_space(8.0);

            egui::ScrollArea::both().show(ui, |ui| {
                let (w, h) = self.chart.size();
                let (response, painter) =
                    ui.allocate_painter(egui::vec2(w as f32, h as f32), egui::Sense::click());

                self.forward_pointer(&response);
                paint_scene(&painter, response.rect.min, &self.chart.scene());
            });

            ui.add_space(8.0);
            match self.chart.tooltip() {
                Some(t) => ui.label(t.content.as_str()),
                None => ui.weak("Hover a bar for details; click a legend entry to hide it."),
            };
        });
    }
}

fn color32(c: Rgba, opacity: f64) -> egui::Color32 {
    let a = ((c.a as f64) * opacity.clamp(0.0, 1.0)).round() as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, a)
}

fn align2(anchor: Anchor) -> egui::Align2 {
    let h = match anchor.h {
        HAlign::Left => egui::Align::Min,
        HAlign::Center => egui::Align::Center,
        HAlign::Right => egui::Align::Max,
    };
    let v = match anchor.v {
        VAlign::Top => egui::Align::Min,
        VAlign::Middle => egui::Align::Center,
        VAlign::Bottom => egui::Align::Max,
    };
    egui::Align2([h, v])
}

/// Paint a scene with egui, offset by the allocated rect's origin.
fn paint_scene(painter: &egui::Painter, origin: egui::Pos2, scene: &Scene) {
    let at = |x: f64, y: f64| origin + egui::vec2(x as f32, y as f32);
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
                let rect = egui::Rect::from_min_size(
                    at(bounds.x, bounds.y),
                    egui::vec2(bounds.width as f32, bounds.height as f32),
                );
                painter.rect_filled(rect, 0.0, color32(*fill, *opacity));
                if let Some(stroke) = stroke {
                    painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, color32(*stroke, *opacity)));
                }
            }
            Primitive::Line {
                from,
                to,
                color,
                width,
            } => {
                painter.line_segment(
                    [at(from.x, from.y), at(to.x, to.y)],
                    egui::Stroke::new(*width as f32, color32(*color, 1.0)),
                );
            }
            Primitive::Label {
                at: pos,
                text,
                size,
                color,
                anchor,
                opacity,
            } => {
                painter.text(
                    at(pos.x, pos.y),
                    align2(*anchor),
                    text,
                    egui::FontId::proportional(*size as f32),
                    color32(*color, *opacity),
                );
            }
        }
    }
}
