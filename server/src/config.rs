//! Server configuration parsed from environment variables.

use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error("entry document not found: {}", .0.display())]
    MissingDocument(PathBuf),
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding `index.html` and the `dist/` build outputs.
    pub public_dir: PathBuf,
    /// Identity platform client id injected into the entry document.
    pub signin_client_id: Option<String>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `PUBLIC_DIR`: default `<workspace>/public`
    /// - `SIGNIN_CLIENT_ID`: blank or unset disables the widget's client id
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let public_dir = lookup("PUBLIC_DIR").map_or_else(default_public_dir, PathBuf::from);
        let signin_client_id = lookup("SIGNIN_CLIENT_ID")
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty());

        Ok(Self { port, public_dir, signin_client_id })
    }

    pub fn dist_dir(&self) -> PathBuf {
        self.public_dir.join("dist")
    }

    pub fn document_path(&self) -> PathBuf {
        self.public_dir.join("index.html")
    }
}

fn default_public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../public")
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
