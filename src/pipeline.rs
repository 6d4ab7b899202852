use std::path::{Path, PathBuf};

use crate::canvas::{basemap_catalog, Center, MapCanvas, MapDocument};
use crate::color::ColorScale;
use crate::data::filter::valid_samples;
use crate::data::loader::load_records;
use crate::data::model::{PointLayer, ValidSample};
use crate::error::PipelineError;
use crate::layers::{aggregate_heat, build_point_layer};

// ---------------------------------------------------------------------------
// Run options
// ---------------------------------------------------------------------------

/// Which samples the initial view center is computed from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterMode {
    /// Mean position of the first contributing source's samples.
    #[default]
    FirstSource,
    /// Mean position over every valid sample.
    AllSources,
}

#[derive(Debug, Clone)]
pub struct RunOptions {
    pub center_mode: CenterMode,
    pub color_scale: ColorScale,
    pub zoom: u8,
}

impl Default for RunOptions {
    fn default() -> Self {
        RunOptions {
            center_mode: CenterMode::default(),
            color_scale: ColorScale::default(),
            zoom: 13,
        }
    }
}

/// What the run produced, for diagnostics and tests.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub point_layers: usize,
    pub heat_samples: usize,
    /// Sources that contributed nothing (unreadable or filtered empty).
    pub skipped: Vec<PathBuf>,
}

// ---------------------------------------------------------------------------
// Orchestrator
// ---------------------------------------------------------------------------

/// Drive the full pipeline: load and validate each source in order,
/// build its point layer, aggregate the heat samples across all
/// sources, then hand the composed document to the canvas.
///
/// Partial-failure semantics: an unreadable source or one with no valid
/// samples is logged and skipped, the run continues. Only an empty
/// source list and a canvas failure abort the run.
pub fn run(
    sources: &[PathBuf],
    options: &RunOptions,
    canvas: &mut dyn MapCanvas,
) -> Result<RunSummary, PipelineError> {
    if sources.is_empty() {
        return Err(PipelineError::NoSourcesProvided);
    }

    let mut per_source: Vec<Vec<ValidSample>> = Vec::new();
    let mut point_layers: Vec<PointLayer> = Vec::new();
    let mut skipped: Vec<PathBuf> = Vec::new();

    for source in sources {
        let source_id = source_name(source);
        let records = match load_records(source) {
            Ok(records) => records,
            Err(err) => {
                log::warn!("skipping {source_id}: {err}");
                skipped.push(source.clone());
                continue;
            }
        };

        let samples = valid_samples(&records, &source_id);
        if samples.is_empty() {
            // Not an error: the source simply contributes nothing.
            log::info!("no valid samples in {source_id}, skipping point layer");
            skipped.push(source.clone());
            continue;
        }

        log::info!(
            "{source_id}: {} of {} rows valid",
            samples.len(),
            records.len()
        );
        if let Some(layer) = build_point_layer(&source_id, &samples, &options.color_scale) {
            point_layers.push(layer);
        }
        per_source.push(samples);
    }

    let heat_samples = aggregate_heat(&per_source);
    let (center, zoom) = match view_center(&per_source, options.center_mode) {
        Some(center) => (center, options.zoom),
        None => {
            // Every source was skipped: still compose, at world view.
            log::warn!("no source produced valid samples, writing an empty map");
            (Center { lat: 0.0, lon: 0.0 }, 2)
        }
    };

    let summary = RunSummary {
        point_layers: point_layers.len(),
        heat_samples: heat_samples.len(),
        skipped,
    };

    let doc = MapDocument {
        center,
        zoom,
        basemaps: basemap_catalog(),
        point_layers,
        heat_samples,
    };
    canvas.render(&doc).map_err(PipelineError::MapCanvasFailure)?;

    Ok(summary)
}

/// Display name of a source: its file base name.
fn source_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn view_center(per_source: &[Vec<ValidSample>], mode: CenterMode) -> Option<Center> {
    let samples: Vec<&ValidSample> = match mode {
        CenterMode::FirstSource => per_source.first()?.iter().collect(),
        CenterMode::AllSources => per_source.iter().flatten().collect(),
    };
    if samples.is_empty() {
        return None;
    }
    let n = samples.len() as f64;
    Some(Center {
        lat: samples.iter().map(|s| s.latitude).sum::<f64>() / n,
        lon: samples.iter().map(|s| s.longitude).sum::<f64>() / n,
    })
}
