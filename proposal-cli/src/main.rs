use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use proposal_core::{EstimateDraft, MarginThresholds, ProposalEstimator};
use proposal_data::{PanelCatalogLoader, default_catalog};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Proposal estimate calculator.
///
/// Reads an estimate draft JSON file, prices it against the panel-type
/// catalog, and prints the computed proposal as JSON on stdout.
#[derive(Debug, Parser)]
#[command(name = "proposal-cli")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the estimate draft JSON file.
    draft: PathBuf,

    /// Panel-type catalog CSV (columns: id,label,price).
    /// Falls back to the bundled standing catalog.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Margin thresholds JSON
    /// (keys: product_min, install_min, project_min).
    #[arg(long)]
    thresholds: Option<PathBuf>,

    /// Print only the flattened pdf_values map.
    #[arg(long, default_value_t = false)]
    pdf_values: bool,

    /// Print compact JSON instead of pretty-printed.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let draft_file = File::open(&cli.draft)
        .with_context(|| format!("cannot open draft file: {}", cli.draft.display()))?;
    let draft: EstimateDraft = serde_json::from_reader(draft_file)
        .with_context(|| format!("invalid draft JSON: {}", cli.draft.display()))?;

    let catalog = match &cli.catalog {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open catalog file: {}", path.display()))?;
            PanelCatalogLoader::parse(file)
                .with_context(|| format!("invalid catalog CSV: {}", path.display()))?
        }
        None => default_catalog(),
    };
    debug!(entries = catalog.len(), "catalog ready");

    let thresholds = match &cli.thresholds {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("cannot open thresholds file: {}", path.display()))?;
            serde_json::from_reader::<_, MarginThresholds>(file)
                .with_context(|| format!("invalid thresholds JSON: {}", path.display()))?
        }
        None => MarginThresholds::default(),
    };

    let estimator = ProposalEstimator::new(&catalog, thresholds);
    let computed = estimator.calculate(&draft);

    info!(
        total = %computed.totals.total_contract_price,
        "estimate computed"
    );

    let rendered = if cli.pdf_values {
        render_json(&computed.pdf_values, cli.compact)?
    } else {
        render_json(&computed, cli.compact)?
    };
    println!("{rendered}");

    Ok(())
}

fn render_json<T: serde::Serialize>(value: &T, compact: bool) -> Result<String> {
    let rendered = if compact {
        serde_json::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    Ok(rendered)
}
