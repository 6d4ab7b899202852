use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use rtmap::canvas::HtmlCanvas;
use rtmap::pipeline::{self, CenterMode, RunOptions};

/// Render radio range-test CSV logs as an interactive HTML map.
#[derive(Parser)]
#[command(name = "rtmap", version, about)]
struct Cli {
    /// Directory to scan for range-test CSV logs.
    #[arg(default_value = ".")]
    dir: PathBuf,

    /// Output HTML file.
    #[arg(short, long, default_value = "rangetest-map.html")]
    output: PathBuf,

    /// Which samples the initial view is centered on.
    #[arg(long, value_enum, default_value = "first")]
    center: CenterArg,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CenterArg {
    /// Mean position of the first source's valid samples.
    First,
    /// Mean position over all valid samples.
    All,
}

impl From<CenterArg> for CenterMode {
    fn from(arg: CenterArg) -> Self {
        match arg {
            CenterArg::First => CenterMode::FirstSource,
            CenterArg::All => CenterMode::AllSources,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let sources = discover_sources(&cli.dir)?;
    if sources.is_empty() {
        bail!("no CSV files found in {}", cli.dir.display());
    }

    let options = RunOptions {
        center_mode: cli.center.into(),
        ..RunOptions::default()
    };
    let mut canvas = HtmlCanvas::new(&cli.output);
    let summary = pipeline::run(&sources, &options, &mut canvas)?;

    for skipped in &summary.skipped {
        log::warn!("skipped source {}", skipped.display());
    }
    println!(
        "Map with {} point layers and {} heat samples written to '{}'.",
        summary.point_layers,
        summary.heat_samples,
        cli.output.display()
    );
    Ok(())
}

/// All `*.csv` files directly inside `dir`, sorted by name so source
/// order (and with it layer order and the view center) is deterministic.
fn discover_sources(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir)
        .with_context(|| format!("scanning {}", dir.display()))?;

    let mut sources: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    sources.sort();
    Ok(sources)
}
