use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use expense_charts::viz::{self, Chart, ChartEvent, ChartKind, GroupedChart, PrimitiveId, RankedChart};
use expense_charts::{format_currency_compact, format_currency_full, storage};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "expense-charts",
    version,
    about = "Render grouped and ranked expense charts to SVG"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a dataset (.json or .csv) to an SVG chart.
    Render(RenderArgs),
    /// Format an amount the way chart labels do.
    Format(FormatArgs),
}

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

#[derive(Args, Debug)]
struct RenderArgs {
    /// Input dataset (.json or .csv).
    input: PathBuf,
    /// Chart kind.
    #[arg(short, long, value_enum, default_value_t = Kind::Grouped)]
    kind: Kind,
    /// Output SVG path.
    #[arg(short, long)]
    out: PathBuf,
    /// Canvas width (overrides the dataset; must be positive).
    #[arg(long)]
    width: Option<f64>,
    /// Canvas height (overrides the dataset; must be positive).
    #[arg(long)]
    height: Option<f64>,
    /// Padding around the plot (overrides the dataset; must not be negative).
    #[arg(long)]
    padding: Option<f64>,
    /// Row cap for ranked charts (overrides the dataset).
    #[arg(long)]
    max_bars: Option<usize>,
    /// Hide a series by name (grouped charts; repeatable). Same as clicking its legend chip.
    #[arg(long = "hide")]
    hide: Vec<String>,
    /// Also write the computed geometry as JSON.
    #[arg(long)]
    geometry: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct FormatArgs {
    /// Amount to format.
    #[arg(allow_negative_numbers = true)]
    amount: f64,
    /// Use the compact k/L/cr form.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Format(args) => {
            if args.compact {
                println!("{}", format_currency_compact(args.amount));
            } else {
                println!("{}", format_currency_full(Some(args.amount)));
            }
            Ok(())
        }
    }
}

fn cmd_render(args: RenderArgs) -> Result<()> {
    let scene = match ChartKind::from(args.kind) {
        ChartKind::Grouped => {
            let (data, options) = storage::load_grouped(&args.input)
                .with_context(|| format!("loading {}", args.input.display()))?;
            let options = options.with_overrides(args.width, args.height, args.padding);

            let mut chart = GroupedChart::new(data, options);
            for name in &args.hide {
                let Some(idx) = chart.data().series_index(name) else {
                    bail!("unknown series for --hide: {name}");
                };
                // a repeated name must not show the series again
                if chart.visibility().is_visible(idx) {
                    chart.handle(ChartEvent::Click {
                        target: PrimitiveId::LegendChip(idx),
                    });
                }
            }
            if let Some(path) = args.geometry.as_ref() {
                storage::save_json(&chart.geometry(), path)?;
                eprintln!("Wrote geometry to {}", path.display());
            }
            chart.scene()
        }
        ChartKind::Ranked => {
            if !args.hide.is_empty() {
                bail!("--hide only applies to grouped charts");
            }
            let (data, mut options) = storage::load_ranked(&args.input)
                .with_context(|| format!("loading {}", args.input.display()))?;
            options.chart = options
                .chart
                .with_overrides(args.width, args.height, args.padding);
            options.max_bars = args.max_bars.unwrap_or(options.max_bars);

            let chart = RankedChart::new(data, options);
            if let Some(path) = args.geometry.as_ref() {
                storage::save_json(&chart.geometry(), path)?;
                eprintln!("Wrote geometry to {}", path.display());
            }
            chart.scene()
        }
    };

    viz::save_svg(&scene, &args.out)?;
    eprintln!(
        "Wrote {}x{} chart to {}",
        scene.width.ceil(),
        scene.height.ceil(),
        args.out.display()
    );
    Ok(())
}
