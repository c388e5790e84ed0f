// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::path::Path;

use config::{Config, Environment, File};
use sandblast_models::SyncConfig;

/// Environment variable prefix for scenario field overrides,
/// e.g. `SANDBLAST_LOWER_SAPLING_BANDWIDTH=true`
const ENV_PREFIX: &str = "SANDBLAST";

/// Loads the scenario to evaluate.
///
/// Merge order: preset defaults first, then the optional scenario file, then
/// `SANDBLAST_*` environment overrides. The merged record is validated
/// before it is returned.
pub fn load_scenario(defaults: SyncConfig, path: Option<&Path>) -> anyhow::Result<SyncConfig> {
    let mut builder = Config::builder().add_source(Config::try_from(&defaults)?);
    if let Some(path) = path {
        builder = builder.add_source(File::from(path));
    }
    let scenario: SyncConfig = builder
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()?
        .try_deserialize()?;
    scenario.check()?;
    Ok(scenario)
}
