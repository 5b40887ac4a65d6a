use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use repogroups::{GroupEditor, UiOptions};

const DEFAULT_GROUPS_DIR: &str = "flux/resources/github/management/repositories";

#[derive(Debug, Parser)]
#[command(
    name = "repogroups",
    version,
    about = "Edit RepositoriesGroup manifests in a terminal form"
)]
struct Cli {
    /// Directory scanned recursively for group manifests
    #[arg(long = "groups-dir", value_name = "DIR", default_value = DEFAULT_GROUPS_DIR)]
    groups_dir: PathBuf,

    /// File receiving the log output; the terminal itself is owned by the UI
    #[arg(long = "log-file", value_name = "PATH", default_value = "repogroups.log")]
    log_file: PathBuf,

    /// Disable logging entirely
    #[arg(long = "no-log")]
    no_log: bool,

    /// Cursor blink interval in milliseconds
    #[arg(
        long = "blink-ms",
        value_name = "MS",
        default_value_t = 500,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    blink_ms: u64,

    /// Hide the key binding help in the status bar
    #[arg(long = "no-help")]
    no_help: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    if !cli.no_log {
        init_logging(&cli.log_file)?;
    }

    let options = UiOptions::default()
        .with_blink_interval(Duration::from_millis(cli.blink_ms))
        .with_help(!cli.no_help);
    tracing::info!(groups_dir = %cli.groups_dir.display(), "starting editor");

    GroupEditor::new(&cli.groups_dir)
        .with_options(options)
        .run()
        .map_err(|err| color_eyre::eyre::eyre!("{err:#}"))
}

fn init_logging(path: &Path) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    Ok(())
}
