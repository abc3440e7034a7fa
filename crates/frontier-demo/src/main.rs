// File: crates/frontier-demo/src/main.rs
// Summary: Render the benchmark chart to a PNG from the command line.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use frontier_core::{
    ChartAdapter, Dataset, FilterKey, RangeShortcut, RenderOptions, VendorId,
};

#[derive(Parser, Debug)]
#[command(name = "frontier-demo", about = "Render the model benchmark chart to a PNG")]
struct Args {
    /// CSV file with model,date,score,vendor rows; defaults to the builtin dataset.
    #[arg(long)]
    data: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = "frontier.png")]
    out: PathBuf,

    /// Vendor filter: all, openai, anthropic, google, alibaba, deepseek, meta, other.
    #[arg(long, default_value = "all")]
    filter: String,

    /// Vendors to hide (repeatable). Toggles against the default hidden set.
    #[arg(long)]
    hide: Vec<String>,

    /// Vendors to show even if hidden by default (repeatable).
    #[arg(long)]
    show: Vec<String>,

    /// X range shortcut: a number of days, or "beginning" for the full extent.
    #[arg(long)]
    range: Option<String>,

    /// Directory with vendor logo PNGs; falls back to initials when absent.
    #[arg(long)]
    logos: Option<PathBuf>,

    #[arg(long, default_value_t = 1024)]
    width: i32,

    #[arg(long, default_value_t = 640)]
    height: i32,

    /// Theme name (dark, light).
    #[arg(long, default_value = "dark")]
    theme: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let dataset = match &args.data {
        Some(path) => Dataset::from_csv_path(path)
            .with_context(|| format!("failed to load dataset from {}", path.display()))?,
        None => Dataset::builtin(),
    };
    tracing::info!(records = dataset.len(), "dataset loaded");

    let mut adapter = ChartAdapter::new(dataset);
    adapter.set_theme(frontier_core::theme::find(&args.theme));

    let filter: FilterKey = args.filter.parse().context("invalid --filter")?;
    adapter.set_filter(filter);

    for name in &args.hide {
        let vendor: VendorId = name.parse().context("invalid --hide vendor")?;
        if !adapter.state().is_hidden(vendor) {
            adapter.toggle_vendor(vendor);
        }
    }
    for name in &args.show {
        let vendor: VendorId = name.parse().context("invalid --show vendor")?;
        if adapter.state().is_hidden(vendor) {
            adapter.toggle_vendor(vendor);
        }
    }

    if let Some(range) = &args.range {
        let shortcut = if range.eq_ignore_ascii_case("beginning") {
            RangeShortcut::Beginning
        } else {
            RangeShortcut::LastDays(range.parse().context("invalid --range")?)
        };
        adapter.apply_range(shortcut);
    }

    if let Some(dir) = &args.logos {
        adapter.load_logos(dir);
        // Headless run: wait for every vendor to report before rendering.
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(2);
        let mut completed = 0;
        while completed < VendorId::ORDER.len() && std::time::Instant::now() < deadline {
            completed += adapter.poll_logos();
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
    }

    let opts = RenderOptions {
        width: args.width,
        height: args.height,
        ..RenderOptions::default()
    };
    adapter.render_to_png(&opts, &args.out)?;

    let summary = adapter.summary();
    println!(
        "wrote {}: top {} ({}) over {} visible models, +{} progress",
        args.out.display(),
        summary.highest_score,
        summary.highest_model,
        summary.visible_count,
        summary.progress_delta,
    );
    Ok(())
}
