//! Pipeline trait and the concurrent build runner.
//!
//! DESIGN
//! ======
//! Every pipeline declares its output file names up front. `build_all`
//! refuses to start when two pipelines claim the same name, then runs each
//! pipeline on its own blocking task. Outcomes are collected per pipeline in
//! declaration order; one pipeline failing never cancels another.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::error::BuildError;

/// One compilation process turning a class of source asset into output files.
pub trait Pipeline: Send + Sync {
    fn name(&self) -> &'static str;

    /// File names this pipeline writes into the output directory.
    fn outputs(&self) -> Vec<String>;

    /// Build into `out_dir`, returning the written paths.
    ///
    /// # Errors
    ///
    /// Returns the first error that aborted the pipeline.
    fn run(&self, out_dir: &Path) -> Result<Vec<PathBuf>, BuildError>;
}

#[derive(Debug)]
pub struct PipelineOutcome {
    pub name: &'static str,
    pub result: Result<Vec<PathBuf>, BuildError>,
}

impl PipelineOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub outcomes: Vec<PipelineOutcome>,
}

impl BuildReport {
    pub fn succeeded(&self) -> bool {
        self.outcomes.iter().all(PipelineOutcome::is_success)
    }

    pub fn failures(&self) -> impl Iterator<Item = &PipelineOutcome> {
        self.outcomes.iter().filter(|o| !o.is_success())
    }

    pub fn outcome(&self, name: &str) -> Option<&PipelineOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}

/// Reject pipeline sets whose declared outputs overlap.
///
/// # Errors
///
/// Returns [`BuildError::OutputCollision`] naming the first shared file.
pub fn check_outputs(pipelines: &[Arc<dyn Pipeline>]) -> Result<(), BuildError> {
    let mut claimed: HashMap<String, &'static str> = HashMap::new();
    for pipeline in pipelines {
        for file in pipeline.outputs() {
            if let Some(&first) = claimed.get(&file) {
                return Err(BuildError::OutputCollision { file, first, second: pipeline.name() });
            }
            claimed.insert(file, pipeline.name());
        }
    }
    Ok(())
}

/// Run every pipeline concurrently into `out_dir`.
///
/// # Errors
///
/// Fails before running anything if outputs collide or `out_dir` cannot be
/// created. Individual pipeline failures are reported in the returned
/// [`BuildReport`], not as an error.
pub async fn build_all(pipelines: Vec<Arc<dyn Pipeline>>, out_dir: &Path) -> Result<BuildReport, BuildError> {
    check_outputs(&pipelines)?;
    std::fs::create_dir_all(out_dir).map_err(|e| BuildError::io(out_dir, e))?;

    let handles: Vec<_> = pipelines
        .into_iter()
        .map(|pipeline| {
            let name = pipeline.name();
            let out_dir = out_dir.to_path_buf();
            let handle = tokio::task::spawn_blocking(move || run_logged(pipeline.as_ref(), &out_dir));
            (name, handle)
        })
        .collect();

    let mut report = BuildReport::default();
    for (name, handle) in handles {
        let result = match handle.await {
            Ok(result) => result,
            Err(e) => Err(BuildError::Join { name, message: e.to_string() }),
        };
        report.outcomes.push(PipelineOutcome { name, result });
    }
    Ok(report)
}

fn run_logged(pipeline: &dyn Pipeline, out_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
    let name = pipeline.name();
    let started = Instant::now();
    tracing::info!(pipeline = name, out_dir = %out_dir.display(), "pipeline started");

    let result = pipeline.run(out_dir);
    let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    match &result {
        Ok(paths) => tracing::info!(pipeline = name, files = paths.len(), elapsed_ms, "pipeline finished"),
        Err(e) => tracing::error!(pipeline = name, error = %e, elapsed_ms, "pipeline failed"),
    }
    result
}
