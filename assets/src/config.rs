//! Build configuration.
//!
//! Paths are resolved against the workspace root. Defaults mirror the
//! repository layout: the `client` crate, its `style/` directory, and
//! `public/dist` as the shared output directory.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::path::{Path, PathBuf};

pub const DEFAULT_OUT_DIR: &str = "public/dist";
pub const DEFAULT_CLIENT_PACKAGE: &str = "client";
pub const DEFAULT_BUNDLE_NAME: &str = "main";
pub const DEFAULT_STYLE_ENTRY: &str = "client/style/sitestyles.scss";
pub const WASM_TARGET: &str = "wasm32-unknown-unknown";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    #[default]
    Development,
    Production,
}

impl Mode {
    pub fn from_release(release: bool) -> Self {
        if release { Self::Production } else { Self::Development }
    }

    /// Cargo profile directory name under `target/<triple>/`.
    pub fn profile_dir(self) -> &'static str {
        match self {
            Self::Development => "debug",
            Self::Production => "release",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum PipelineKind {
    Script,
    Style,
}

/// Script pipeline settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptConfig {
    /// Cargo package compiled to WASM.
    pub package: String,
    /// Bundle base name; outputs are `<name>.bundle.js` and `<name>.bundle_bg.wasm`.
    pub bundle_name: String,
    /// Cargo features enabling the browser entry point.
    pub features: Vec<String>,
    pub cargo: PathBuf,
    pub wasm_bindgen: PathBuf,
    /// Cargo target directory; `<root>/target` when unset.
    pub target_dir: Option<PathBuf>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            package: DEFAULT_CLIENT_PACKAGE.to_owned(),
            bundle_name: DEFAULT_BUNDLE_NAME.to_owned(),
            features: vec!["csr".to_owned()],
            cargo: PathBuf::from("cargo"),
            wasm_bindgen: PathBuf::from("wasm-bindgen"),
            target_dir: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    pub root: PathBuf,
    pub out_dir: PathBuf,
    pub mode: Mode,
    pub script: ScriptConfig,
    /// Stylesheet entry, relative to `root` unless absolute.
    pub style_entry: PathBuf,
}

impl BuildConfig {
    /// Defaults for a workspace rooted at `root`.
    pub fn for_root(root: impl Into<PathBuf>, mode: Mode) -> Self {
        let root = root.into();
        Self {
            out_dir: root.join(DEFAULT_OUT_DIR),
            root,
            mode,
            script: ScriptConfig::default(),
            style_entry: PathBuf::from(DEFAULT_STYLE_ENTRY),
        }
    }

    #[must_use]
    pub fn with_out_dir(mut self, out_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = out_dir {
            self.out_dir = resolve(&self.root, &dir);
        }
        self
    }

    pub fn style_entry(&self) -> PathBuf {
        resolve(&self.root, &self.style_entry)
    }

    pub fn target_dir(&self) -> PathBuf {
        self.script
            .target_dir
            .as_deref()
            .map_or_else(|| self.root.join("target"), |dir| resolve(&self.root, dir))
    }
}

fn resolve(root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() { path.to_path_buf() } else { root.join(path) }
}
