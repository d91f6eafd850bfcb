//! # assets
//!
//! Build pipelines for the client's deployable files.
//!
//! Two independent pipelines write into one shared output directory
//! (`public/dist` by default):
//!
//! - the **script** pipeline compiles the `client` crate to WASM and binds it
//!   into `main.bundle.js` + `main.bundle_bg.wasm`;
//! - the **stylesheet** pipeline compiles `client/style/sitestyles.scss`,
//!   post-processes it, and extracts `sitestyles.css`.
//!
//! [`pipeline::build_all`] runs them concurrently. A failure in one does not
//! stop the other.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod script;
pub mod style;
pub mod transform;

use std::sync::Arc;

pub use config::{BuildConfig, Mode, PipelineKind};
pub use error::BuildError;
pub use pipeline::{BuildReport, Pipeline, PipelineOutcome, build_all};

/// The site's pipelines in declaration order, optionally restricted to one.
pub fn site_pipelines(config: &BuildConfig, only: Option<PipelineKind>) -> Vec<Arc<dyn Pipeline>> {
    let mut pipelines: Vec<Arc<dyn Pipeline>> = Vec::new();
    if only.is_none_or(|kind| kind == PipelineKind::Script) {
        pipelines.push(Arc::new(script::ScriptPipeline::new(config)));
    }
    if only.is_none_or(|kind| kind == PipelineKind::Style) {
        pipelines.push(Arc::new(style::StylePipeline::new(config.style_entry(), config.mode)));
    }
    pipelines
}
