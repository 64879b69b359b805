//! expense_charts
//!
//! Chart rendering core for grouped and ranked monetary data. Collaborators hand the chart a finite
//! dataset; the chart lays it out, renders it, and reacts to legend clicks and pointer hovers.
//!
//! ### Features
//! - Grouped vertical bar chart with a clickable legend that hides/shows series
//! - Ranked horizontal bar chart capped to the first `max_bars` rows
//! - Lakh/crore currency formatting (`₹1,23,456.78`, `1.5cr`, `2.5L`, `4.2k`)
//! - Per-instance tooltip state driven by explicit hover/leave messages
//! - SVG output through plotters, plus an egui viewer binary
//!
//! ### Example
//! ```no_run
//! use expense_charts::models::{ChartOptions, GroupedData, Series};
//! use expense_charts::viz::{self, Chart, ChartEvent, GroupedChart, PrimitiveId};
//!
//! let data = GroupedData::new(
//!     vec!["Jan".into(), "Feb".into()],
//!     vec![
//!         Series::new("Hotel", vec![100.0, 200.0]),
//!         Series::new("Food", vec![300.0, 50.0]),
//!     ],
//! );
//! let mut chart = GroupedChart::new(data, ChartOptions::default());
//! chart.handle(ChartEvent::Click { target: PrimitiveId::LegendChip(1) });
//! let svg = viz::render_svg(&chart.scene())?;
//! std::fs::write("expenses.svg", svg)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod error;
pub mod format;
pub mod models;
pub mod storage;
pub mod viz;
pub mod viz_plotters_adapter;
pub mod viz_style;

pub use error::ChartError;
pub use format::{format_currency_compact, format_currency_full};
pub use models::{ChartOptions, GroupedData, RankedData, RankedOptions, Row, Series};
