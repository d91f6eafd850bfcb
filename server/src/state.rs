//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! entry document is rendered once when the state is loaded and shared as
//! immutable bytes.

use std::sync::Arc;

use axum::body::Bytes;

use crate::config::{ConfigError, ServerConfig};
use crate::document::render_document;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// Rendered `index.html`.
    pub document: Bytes,
}

impl AppState {
    /// Read and render the entry document.
    ///
    /// # Errors
    ///
    /// Returns an error if `index.html` is missing or unreadable.
    pub fn load(config: ServerConfig) -> Result<Self, ConfigError> {
        let path = config.document_path();
        if !path.is_file() {
            return Err(ConfigError::MissingDocument(path));
        }
        let template = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read { path, source })?;
        let document = render_document(&template, config.signin_client_id.as_deref());
        tracing::info!(public_dir = %config.public_dir.display(), "entry document loaded");

        Ok(Self { config: Arc::new(config), document: Bytes::from(document) })
    }
}
