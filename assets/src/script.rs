//! Script pipeline: compile the client crate to WASM with cargo, then bind
//! it into a browser-loadable ES module with `wasm-bindgen`.
//!
//! Third-party crates are compiled by cargo as ordinary dependencies; the
//! pipeline only ever names the client package.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::config::{BuildConfig, Mode, ScriptConfig, WASM_TARGET};
use crate::error::BuildError;
use crate::pipeline::Pipeline;

/// Lines of tool stderr kept in a [`BuildError::Toolchain`].
const STDERR_TAIL_LINES: usize = 40;

pub struct ScriptPipeline {
    root: PathBuf,
    mode: Mode,
    target_dir: PathBuf,
    config: ScriptConfig,
}

impl ScriptPipeline {
    pub fn new(build: &BuildConfig) -> Self {
        Self {
            root: build.root.clone(),
            mode: build.mode,
            target_dir: build.target_dir(),
            config: build.script.clone(),
        }
    }

    /// Manifest of the client package under the workspace root.
    pub fn entry(&self) -> PathBuf {
        self.root.join(&self.config.package).join("Cargo.toml")
    }

    pub fn bundle_js(&self) -> String {
        format!("{}.bundle.js", self.config.bundle_name)
    }

    pub fn bundle_wasm(&self) -> String {
        format!("{}.bundle_bg.wasm", self.config.bundle_name)
    }

    pub fn cargo_args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["build", "--package", self.config.package.as_str(), "--lib", "--target", WASM_TARGET]
            .into_iter()
            .map(OsString::from)
            .collect();
        if !self.config.features.is_empty() {
            args.push("--features".into());
            args.push(self.config.features.join(",").into());
        }
        if self.mode == Mode::Production {
            args.push("--release".into());
        }
        args.push("--target-dir".into());
        args.push(self.target_dir.clone().into_os_string());
        args
    }

    /// Raw WASM artifact cargo leaves behind for the client package.
    pub fn wasm_artifact(&self) -> PathBuf {
        self.target_dir
            .join(WASM_TARGET)
            .join(self.mode.profile_dir())
            .join(format!("{}.wasm", self.config.package.replace('-', "_")))
    }

    pub fn wasm_bindgen_args(&self, out_dir: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = ["--target", "web", "--no-typescript", "--out-name"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(format!("{}.bundle", self.config.bundle_name).into());
        args.push("--out-dir".into());
        args.push(out_dir.as_os_str().to_owned());
        if self.mode == Mode::Development {
            args.push("--debug".into());
        }
        args.push(self.wasm_artifact().into_os_string());
        args
    }
}

impl Pipeline for ScriptPipeline {
    fn name(&self) -> &'static str {
        "script"
    }

    fn outputs(&self) -> Vec<String> {
        vec![self.bundle_js(), self.bundle_wasm()]
    }

    fn run(&self, out_dir: &Path) -> Result<Vec<PathBuf>, BuildError> {
        let entry = self.entry();
        if !entry.is_file() {
            return Err(BuildError::MissingEntry(entry));
        }

        run_tool(&self.config.cargo, &self.cargo_args(), &self.root)?;
        run_tool(&self.config.wasm_bindgen, &self.wasm_bindgen_args(out_dir), &self.root)?;

        Ok(self.outputs().into_iter().map(|file| out_dir.join(file)).collect())
    }
}

fn run_tool(program: &Path, args: &[OsString], cwd: &Path) -> Result<(), BuildError> {
    let tool = program.display().to_string();
    tracing::debug!(tool = %tool, ?args, "running build tool");

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|source| BuildError::Spawn { tool: tool.clone(), source })?;

    if output.status.success() {
        return Ok(());
    }
    Err(BuildError::Toolchain {
        tool,
        status: output.status,
        stderr: stderr_tail(&String::from_utf8_lossy(&output.stderr), STDERR_TAIL_LINES),
    })
}

/// Last `max_lines` lines of `stderr`, trimmed.
fn stderr_tail(stderr: &str, max_lines: usize) -> String {
    let lines: Vec<&str> = stderr.trim_end().lines().collect();
    let skip = lines.len().saturating_sub(max_lines);
    lines[skip..].join("\n")
}
