// Copyright (c) 2022 MASSA LABS <info@massa.net>

use sandblast_models::constants::{
    SAPLING_CAPPED_BLOCK_SPACE_BYTES, SAPLING_COMPACT_OUTPUT_BYTES, SAPLING_COMPACT_TX_BYTES,
    SAPLING_DEFAULT_BLOCK_SPACE_BYTES, SAPLING_OUTPUTS_PER_SPAM_TX, SAPLING_SPAM_TX_BYTES,
};
use sandblast_models::SyncConfig;
use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, EstimateResult};
use crate::shared::SharedParams;

/// Worst-case Sapling pool load for one scenario, before the rollup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaplingLoad {
    /// block bytes available to Sapling spam
    pub usable_block_space: u64,
    /// size of the worst-case Sapling transaction
    pub spam_tx_size: u64,
    /// spam transactions fitting in one block
    pub txs_per_block: u64,
    /// shielded outputs carried per block
    pub outputs_per_block: u64,
    /// compact block bytes per block from Sapling data
    pub bandwidth_per_block: u64,
    /// daily Sapling bytes, header share not included
    pub raw_bandwidth_per_day: u64,
    /// daily Sapling outputs to trial decrypt, multiplier not applied
    pub raw_decrypts_per_day: u64,
}

/// Derives the worst-case Sapling load.
///
/// Sapling works from its own fixed block space, capped when the scenario
/// lowers Sapling bandwidth; a custom block size never reaches this pool.
pub fn derive_sapling(
    config: &SyncConfig,
    shared: &SharedParams,
) -> EstimateResult<SaplingLoad> {
    let usable_block_space = if config.lower_sapling_bandwidth {
        SAPLING_CAPPED_BLOCK_SPACE_BYTES
    } else {
        SAPLING_DEFAULT_BLOCK_SPACE_BYTES
    };

    let spam_tx_size = SAPLING_SPAM_TX_BYTES;
    let txs_per_block = usable_block_space / spam_tx_size;
    let outputs_per_block = txs_per_block * SAPLING_OUTPUTS_PER_SPAM_TX;

    let bandwidth_per_block =
        SAPLING_COMPACT_TX_BYTES * txs_per_block + SAPLING_COMPACT_OUTPUT_BYTES * outputs_per_block;

    let raw_bandwidth_per_day = bandwidth_per_block
        .checked_mul(shared.blocks_per_day)
        .ok_or_else(|| EstimateError::CheckedOperationError("daily Sapling bandwidth".into()))?;
    let raw_decrypts_per_day = outputs_per_block
        .checked_mul(shared.blocks_per_day)
        .ok_or_else(|| EstimateError::CheckedOperationError("daily Sapling decrypts".into()))?;

    Ok(SaplingLoad {
        usable_block_space,
        spam_tx_size,
        txs_per_block,
        outputs_per_block,
        bandwidth_per_block,
        raw_bandwidth_per_day,
        raw_decrypts_per_day,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::derive_shared;

    #[test]
    fn test_default_spam_geometry() {
        let config = SyncConfig::today();
        let shared = derive_shared(&config).unwrap();
        let sapling = derive_sapling(&config, &shared).unwrap();

        assert_eq!(sapling.usable_block_space, 1_998_261);
        assert_eq!(sapling.spam_tx_size, 30_797);
        assert_eq!(sapling.txs_per_block, 64);
        assert_eq!(sapling.outputs_per_block, 2_048);
        // 32 B per tx marker + 112 B per output
        assert_eq!(sapling.bandwidth_per_block, 231_424);
        assert_eq!(sapling.raw_bandwidth_per_day, 266_600_448);
        assert_eq!(sapling.raw_decrypts_per_day, 2_359_296);
    }

    #[test]
    fn test_lowered_bandwidth_cap() {
        let mut config = SyncConfig::today();
        config.lower_sapling_bandwidth = true;
        let shared = derive_shared(&config).unwrap();
        let sapling = derive_sapling(&config, &shared).unwrap();

        assert_eq!(sapling.usable_block_space, 600_000);
        assert_eq!(sapling.txs_per_block, 19);
        assert_eq!(sapling.outputs_per_block, 608);
        assert_eq!(sapling.bandwidth_per_block, 68_704);
    }

    #[test]
    fn test_custom_block_size_does_not_reach_sapling() {
        let config = SyncConfig::today();
        let shared = derive_shared(&config).unwrap();
        let baseline = derive_sapling(&config, &shared).unwrap();

        let mut custom = config;
        custom.use_custom_block_size = true;
        custom.custom_block_size_mb = 1.5;
        let shared = derive_shared(&custom).unwrap();
        let sapling = derive_sapling(&custom, &shared).unwrap();

        assert_eq!(sapling, baseline);
    }
}
