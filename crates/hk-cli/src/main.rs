//! histkit CLI

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use hk_hist::{
    ColumnTable, FillSpec, Hist1D, Hist2D, HistStore, fill_from_columns, normalize_to_unity,
};
use hk_viz::{AxisOptions, heatmap_artifact, hist_artifact, overlay_artifact, stack_artifact};
use hk_viz_render::theme::BuiltinTheme;

#[derive(Parser)]
#[command(name = "histkit")]
#[command(about = "histkit - histogram filling, normalization, and rendering")]
#[command(version)]
struct Cli {
    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "warn")]
    log_level: tracing::Level,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a CSV of paired standard-normal samples
    Generate {
        /// Output CSV path
        #[arg(short, long)]
        output: PathBuf,

        /// Number of rows
        #[arg(long, default_value = "10000")]
        events: usize,

        /// RNG seed
        #[arg(long, default_value = "42")]
        seed: u64,
    },

    /// Fill the example histograms from a sample CSV and write a histogram store
    Fill {
        /// Input CSV with `x` and `y` columns
        #[arg(short, long)]
        input: PathBuf,

        /// Output store path (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Normalize the 1D histograms to unit area
        #[arg(long)]
        normalize: bool,
    },

    /// Render histograms from a store to an image file
    Render {
        /// Input store path (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Plot kind: hist, overlay, stack, or heatmap
        #[arg(long, default_value = "hist")]
        kind: String,

        /// Histogram names, comma separated. Defaults to the first 1D
        /// histogram (hist, heatmap: first 2D) or all of them (overlay, stack).
        #[arg(long, value_delimiter = ',')]
        names: Vec<String>,

        /// Output name; the format suffix is appended
        #[arg(short, long)]
        output: String,

        /// Image format: svg or png
        #[arg(long, default_value = "svg")]
        format: String,

        /// Built-in theme name (histkit, minimal)
        #[arg(long, default_value = "histkit")]
        theme: String,

        /// X-axis title
        #[arg(long, default_value = "")]
        x_label: String,

        /// Y-axis title
        #[arg(long, default_value = "")]
        y_label: String,

        /// Y-axis title offset multiplier
        #[arg(long, default_value = "1.0")]
        label_offset: f64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    match cli.command {
        Commands::Generate { output, events, seed } => cmd_generate(&output, events, seed),
        Commands::Fill { input, output, normalize } => cmd_fill(&input, &output, normalize),
        Commands::Render {
            input,
            kind,
            names,
            output,
            format,
            theme,
            x_label,
            y_label,
            label_offset,
        } => {
            let axes = AxisOptions::labels(x_label, y_label).with_label_offset(label_offset);
            cmd_render(&input, &kind, &names, &output, &format, &theme, axes)
        }
    }
}

fn cmd_generate(output: &Path, events: usize, seed: u64) -> Result<()> {
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 1.0)?;

    let mut wtr = csv::Writer::from_path(output)
        .with_context(|| format!("cannot create {}", output.display()))?;
    wtr.write_record(["x", "y"])?;
    for _ in 0..events {
        let x: f64 = normal.sample(&mut rng);
        let y: f64 = normal.sample(&mut rng);
        wtr.write_record([format!("{x}"), format!("{y}")])?;
    }
    wtr.flush()?;

    tracing::info!(rows = events, path = %output.display(), "sample table written");
    Ok(())
}

fn cmd_fill(input: &Path, output: &Path, normalize: bool) -> Result<()> {
    tracing::info!(path = %input.display(), "reading sample table");
    let table = ColumnTable::from_path(input)?;

    let specs = vec![
        FillSpec::new(Hist1D::with_bin_width("x", "", -4.0, 4.0, 1.0)?, "x"),
        FillSpec::new(Hist1D::with_bin_width("y", "", 0.0, 4.0, 0.5)?, "y"),
    ];
    let mut hists = fill_from_columns(specs, &table)?;

    let mut matrix = Hist2D::with_bin_width("matrix", "", -4.0, 4.0, 0.5, -4.0, 4.0, 0.5)?;
    let xs = table.column("x")?;
    let ys = table.column("y")?;
    for (&x, &y) in xs.iter().zip(ys.iter()) {
        matrix.fill(x, y);
    }

    if normalize {
        for h in &mut hists {
            normalize_to_unity(h)?;
        }
    }

    let mut store = HistStore::new();
    for h in hists {
        tracing::debug!(name = %h.name, bins = h.n_bins, entries = h.entries, "filled");
        store.insert(h);
    }
    store.insert_2d(matrix);
    store.save(output)?;

    tracing::info!(path = %output.display(), "histogram store written");
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn cmd_render(
    input: &Path,
    kind: &str,
    names: &[String],
    output: &str,
    format: &str,
    theme: &str,
    axes: AxisOptions,
) -> Result<()> {
    let store = HistStore::load(input)?;
    let config = BuiltinTheme::parse(theme).base_config();

    let json = match kind {
        "hist" => {
            let name = match names.first() {
                Some(n) => n.as_str(),
                None => first_name(&store)?,
            };
            serde_json::to_string(&hist_artifact(store.get(name)?, axes))?
        }
        "overlay" => {
            let selected = selected_names(&store, names);
            let hists = selected
                .iter()
                .map(|n| store.get(n))
                .collect::<hk_core::Result<Vec<_>>>()?;
            serde_json::to_string(&overlay_artifact(&hists, axes)?)?
        }
        "stack" => {
            let selected = selected_names(&store, names);
            let mut hists = selected
                .iter()
                .map(|n| store.get(n).map(Hist1D::clone))
                .collect::<hk_core::Result<Vec<_>>>()?;
            serde_json::to_string(&stack_artifact(&mut hists, axes)?)?
        }
        "heatmap" => {
            let h = match names.first() {
                Some(n) => store.get_2d(n)?,
                None => store
                    .histograms_2d
                    .first()
                    .ok_or_else(|| anyhow::anyhow!("store has no 2D histograms"))?,
            };
            serde_json::to_string(&heatmap_artifact(h, axes))?
        }
        other => bail!("unknown plot kind '{other}' (expected hist, overlay, stack, heatmap)"),
    };

    let bytes = hk_viz_render::render_to_bytes(&json, kind, format, &config)?;
    let path = hk_viz_render::output::save_with_extension(&bytes, output, format)?;

    tracing::info!(path = %path.display(), kind, "image written");
    Ok(())
}

fn first_name(store: &HistStore) -> Result<&str> {
    store
        .histograms
        .first()
        .map(|h| h.name.as_str())
        .ok_or_else(|| anyhow::anyhow!("store has no 1D histograms"))
}

fn selected_names(store: &HistStore, names: &[String]) -> Vec<String> {
    if names.is_empty() {
        store.names().iter().map(|n| n.to_string()).collect()
    } else {
        names.to_vec()
    }
}
