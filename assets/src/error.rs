//! Build error taxonomy.

use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("entry not found: {}", .0.display())]
    MissingEntry(PathBuf),
    #[error("output `{file}` is claimed by both the `{first}` and `{second}` pipelines")]
    OutputCollision { file: String, first: &'static str, second: &'static str },
    #[error("io error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to launch `{tool}`: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{tool}` exited with {status}\n{stderr}")]
    Toolchain { tool: String, status: ExitStatus, stderr: String },
    #[error("stylesheet compile failed: {0}")]
    Stylesheet(String),
    #[error("pipeline `{name}` did not finish: {message}")]
    Join { name: &'static str, message: String },
}

impl BuildError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}
