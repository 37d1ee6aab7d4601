use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use launch_core::config::DEFAULT_DATASET_PATH;
use launch_core::{ColorKey, DashConfig, Dashboard, Dataset};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "SpaceX launch records dashboard", long_about = None)]
struct Cli {
    /// Launch records CSV to visualize
    #[arg(long, default_value = DEFAULT_DATASET_PATH, value_hint = ValueHint::FilePath)]
    data: PathBuf,

    /// Attribute used to color the scatter chart
    #[arg(long, value_enum, default_value_t = ColorBy::Version)]
    color_by: ColorBy,

    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ColorBy {
    /// Individual booster version
    Version,
    /// Booster version category (v1.0, v1.1, FT, B4, B5)
    Category,
}

impl From<ColorBy> for ColorKey {
    fn from(value: ColorBy) -> Self {
        match value {
            ColorBy::Version => ColorKey::BoosterVersion,
            ColorBy::Category => ColorKey::BoosterCategory,
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err:?}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let config = DashConfig {
        dataset_path: cli.data,
        color_key: cli.color_by.into(),
        ..DashConfig::default()
    };

    let dataset = Dataset::load(&config.dataset_path)
        .with_context(|| format!("failed to load {}", config.dataset_path.display()))?;
    let dashboard = Dashboard::new(dataset, config);
    info!(
        low = dashboard.state().payload.low,
        high = dashboard.state().payload.high,
        "starting dashboard"
    );

    launch_render::run(dashboard).context("dashboard window failed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_path() {
        let cli = Cli::parse_from(["launch-dash"]);
        assert_eq!(cli.data, PathBuf::from("spacex_launch_dash.csv"));
        assert!(matches!(cli.color_by, ColorBy::Version));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from(["launch-dash", "--data", "other.csv", "--color-by", "category", "-v"]);
        assert_eq!(cli.data, PathBuf::from("other.csv"));
        assert_eq!(ColorKey::from(cli.color_by), ColorKey::BoosterCategory);
        assert!(cli.verbose);
    }
}
