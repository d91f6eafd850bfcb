//! Stylesheet pipeline: Sass entry → compiled CSS → post-processing → one
//! standalone `.css` file named after the entry.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use std::path::{Path, PathBuf};

use crate::config::Mode;
use crate::error::BuildError;
use crate::pipeline::Pipeline;
use crate::transform::{CssTransform, default_transforms};

pub struct StylePipeline {
    entry: PathBuf,
    mode: Mode,
    transforms: Vec<Box<dyn CssTransform>>,
}

impl StylePipeline {
    pub fn new(entry: impl Into<PathBuf>, mode: Mode) -> Self {
        Self { entry: entry.into(), mode, transforms: default_transforms() }
    }

    #[must_use]
    pub fn with_transforms(mut self, transforms: Vec<Box<dyn CssTransform>>) -> Self {
        self.transforms = transforms;
        self
    }

    pub fn entry(&self) -> &Path {
        &self.entry
    }

    /// `<entry stem>.css`, e.g. `sitestyles.scss` → `sitestyles.css`.
    pub fn output_name(&self) -> String {
        let stem = self
            .entry
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("styles");
        format!("{stem}.css")
    }

    /// Compile the entry and run the post-processing chain.
    ///
    /// # Errors
    ///
    /// [`BuildError::MissingEntry`] when the entry does not exist,
    /// [`BuildError::Stylesheet`] on Sass syntax or import errors.
    pub fn compile(&self) -> Result<String, BuildError> {
        if !self.entry.is_file() {
            return Err(BuildError::MissingEntry(self.entry.clone()));
        }

        let style = match self.mode {
            Mode::Development => grass::OutputStyle::Expanded,
            Mode::Production => grass::OutputStyle::Compressed,
        };
        let options = grass::Options::default().style(style);
        let css = grass::from_path(&self.entry, &options).map_err(|e| BuildError::Stylesheet(e.to_string()))?;

        Ok(self.transforms.iter().fold(css, |css, transform| {
            tracing::debug!(transform = transform.name(), "applying css transform");
            transform.apply(css)
        }))
    }
}

impl Pipeline for StylePipeline {
    fn name(&self) -> &'static str {
        "style"
    }

    fn outputs(&self) -> Vec<String> {
        vec![self.output_name()]
    }

    fn run(&self, out_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
        let css = self.compile()?;
        let path = out_dir.join(self.output_name());
        std::fs::write(&path, css).map_err(|e| BuildError::io(&path, e))?;
        Ok(vec![path])
    }
}
