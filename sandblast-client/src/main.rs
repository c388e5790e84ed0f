// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! CLI consumer of the shielded sync load model: loads a scenario, evaluates
//! it, and prints the resulting worst-case daily figures.
#![warn(unused_crate_dependencies)]

mod report;
mod settings;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use sandblast_estimator::evaluate;
use sandblast_models::SyncConfig;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Named starting-point scenarios
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Preset {
    /// current protocol, no client-side changes
    Today,
    /// 25 second blocks with Sapling bandwidth lowered
    Proposed,
}

impl Preset {
    fn config(self) -> SyncConfig {
        match self {
            Preset::Today => SyncConfig::today(),
            Preset::Proposed => SyncConfig::proposed(),
        }
    }

    fn label(self) -> &'static str {
        match self {
            Preset::Today => "Today",
            Preset::Proposed => "Proposed",
        }
    }
}

#[derive(Parser)]
#[command(
    name = "sandblast-client",
    version,
    about = "Worst-case shielded sync load estimator"
)]
struct Args {
    /// preset used as the scenario baseline
    #[arg(short, long, value_enum, default_value = "today")]
    preset: Preset,
    /// TOML scenario file merged over the preset
    #[arg(short, long)]
    scenario: Option<PathBuf>,
    /// also evaluate the Today baseline and print both side by side
    #[arg(long)]
    compare: bool,
    /// print the full evaluation as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = settings::load_scenario(args.preset.config(), args.scenario.as_deref())
        .context("could not load scenario")?;
    debug!("loaded scenario: {:?}", config);

    let label = match &args.scenario {
        Some(path) => path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.preset.label().to_string()),
        None => args.preset.label().to_string(),
    };
    let estimate = evaluate(&config).context("scenario evaluation failed")?;

    if args.compare {
        let baseline = evaluate(&SyncConfig::today()).context("baseline evaluation failed")?;
        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "baseline": baseline,
                    "scenario": estimate,
                }))?
            );
        } else {
            println!("{}", report::render_comparison("Today", &baseline, &label, &estimate));
        }
        return Ok(());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        println!("{}", report::render_estimate(&label, &estimate));
    }
    Ok(())
}
