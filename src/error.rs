use std::path::PathBuf;

use thiserror::Error;

/// Run-level error taxonomy.
///
/// Row-level malformation never surfaces here – the filter absorbs it
/// silently. `SourceUnreadable` is recoverable at source granularity;
/// the orchestrator logs it and moves on. The other two variants abort
/// the run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("no input sources provided")]
    NoSourcesProvided,

    #[error("source {path} could not be read")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("map canvas failed")]
    MapCanvasFailure(#[source] anyhow::Error),
}
