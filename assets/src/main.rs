use std::path::PathBuf;

use assets::{BuildConfig, BuildError, Mode, PipelineKind, build_all, site_pipelines};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Build(#[from] BuildError),
    #[error("{0} pipeline(s) failed")]
    PipelinesFailed(usize),
}

#[derive(Parser, Debug)]
#[command(name = "assets", about = "Build the GO Refund script and stylesheet bundles")]
struct Cli {
    /// Workspace root containing `client/` and `public/`.
    #[arg(long, env = "ASSETS_ROOT", default_value = ".")]
    root: PathBuf,

    /// Output directory, relative to the root unless absolute.
    #[arg(long, env = "ASSETS_OUT_DIR")]
    out_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the pipelines concurrently.
    Build(Selection),
    /// Print the files each pipeline writes.
    Outputs(Selection),
}

#[derive(Args, Debug)]
struct Selection {
    /// Production mode: optimized WASM and compressed CSS.
    #[arg(long)]
    release: bool,

    /// Run a single pipeline.
    #[arg(long, value_enum)]
    only: Option<PipelineKind>,
}

impl Cli {
    fn config(&self, selection: &Selection) -> BuildConfig {
        BuildConfig::for_root(&self.root, Mode::from_release(selection.release)).with_out_dir(self.out_dir.clone())
    }
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match &cli.command {
        Command::Build(selection) => run_build(&cli.config(selection), selection.only).await,
        Command::Outputs(selection) => {
            run_outputs(&cli.config(selection), selection.only);
            Ok(())
        }
    }
}

async fn run_build(config: &BuildConfig, only: Option<PipelineKind>) -> Result<(), CliError> {
    tracing::info!(root = %config.root.display(), mode = ?config.mode, "building assets");
    let report = build_all(site_pipelines(config, only), &config.out_dir).await?;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(paths) => {
                for path in paths {
                    println!("{}: {}", outcome.name, path.display());
                }
            }
            Err(e) => eprintln!("{} failed: {e}", outcome.name),
        }
    }

    let failed = report.failures().count();
    if failed > 0 {
        return Err(CliError::PipelinesFailed(failed));
    }
    Ok(())
}

fn run_outputs(config: &BuildConfig, only: Option<PipelineKind>) {
    for pipeline in site_pipelines(config, only) {
        for file in pipeline.outputs() {
            println!("{}: {}", pipeline.name(), config.out_dir.join(file).display());
        }
    }
}
