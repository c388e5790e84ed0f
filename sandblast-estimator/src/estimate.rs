// Copyright (c) 2022 MASSA LABS <info@massa.net>

use sandblast_models::SyncConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::EstimateResult;
use crate::orchard::{derive_orchard, OrchardLoad};
use crate::rollup::{roll_up, RollupSummary};
use crate::sapling::{derive_sapling, SaplingLoad};
use crate::shared::{derive_shared, SharedParams};

/// Complete evaluation of one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadEstimate {
    /// the evaluated scenario
    pub config: SyncConfig,
    /// shared block parameters
    pub shared: SharedParams,
    /// raw Sapling pool load
    pub sapling: SaplingLoad,
    /// raw Orchard pool load
    pub orchard: OrchardLoad,
    /// final cross-pool figures
    pub rollup: RollupSummary,
}

/// Evaluates a scenario end to end: shared parameters, both pool loads, then
/// the cross-pool rollup.
///
/// Every stage is a pure function of its arguments; the whole pipeline is
/// recomputed from scratch on each call, so two scenarios can be evaluated
/// concurrently without coordination.
pub fn evaluate(config: &SyncConfig) -> EstimateResult<LoadEstimate> {
    let shared = derive_shared(config)?;
    let sapling = derive_sapling(config, &shared)?;
    let orchard = derive_orchard(config, &shared)?;
    let rollup = roll_up(config, &shared, &sapling, &orchard)?;
    debug!(
        "scenario evaluated: {:.2} MB/day, {} trial decrypts/day, bandwidth {}-dominated",
        rollup.bandwidth_mb_per_day, rollup.decrypts_per_day, rollup.bandwidth_dominated_by
    );
    Ok(LoadEstimate {
        config: *config,
        shared,
        sapling,
        orchard,
        rollup,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_composes_all_stages() {
        let estimate = evaluate(&SyncConfig::today()).unwrap();
        assert_eq!(estimate.shared.blocks_per_day, 1_152);
        assert_eq!(estimate.sapling.txs_per_block, 64);
        assert_eq!(estimate.orchard.txs_per_block, 19);
        assert_eq!(estimate.rollup.bandwidth_bytes_per_day, 266_704_128);
    }

    #[test]
    fn test_estimate_serializes() {
        let estimate = evaluate(&SyncConfig::proposed()).unwrap();
        let json = serde_json::to_string(&estimate).unwrap();
        let back: LoadEstimate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, estimate);
    }
}
