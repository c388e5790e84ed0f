// Copyright (c) 2022 MASSA LABS <info@massa.net>

use sandblast_models::constants::{
    orchard_action_bytes, orchard_flat_bytes, BYTES_PER_MB, COINBASE_RESERVED_BYTES,
    COMPACT_BLOCK_HEADER_BYTES, DEFAULT_BLOCK_INTERVAL_S, DEFAULT_BLOCK_SIZE_BYTES,
    ORCHARD_ACTIONS_PER_NORMAL_TX, SECONDS_PER_DAY,
};
use sandblast_models::SyncConfig;
use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, EstimateResult};

/// Block-level parameters shared by both pool derivations
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharedParams {
    /// usable block bytes after the coinbase reservation (Orchard sizing only)
    pub effective_block_size: u64,
    /// block interval in seconds
    pub block_time_s: f64,
    /// whole blocks produced per day
    pub blocks_per_day: u64,
    /// compact block header bytes downloaded per day
    pub header_bandwidth_per_day: u64,
    /// trial decrypt passes per received output or action
    pub trial_decrypt_multiplier: u64,
    /// size of a normal two-action Orchard transaction
    pub orchard_normal_tx_size: u64,
    /// peak Orchard throughput in normal transactions per second
    pub orchard_tps: f64,
}

/// Derives the shared block parameters from a scenario configuration.
///
/// Fails fast on an invalid configuration; every later derivation consumes
/// the result of this one.
pub fn derive_shared(config: &SyncConfig) -> EstimateResult<SharedParams> {
    config.check()?;

    let effective_block_size = if config.use_custom_block_size {
        // round before truncating so 1.9 MB is exactly 1_900_000 bytes
        let block_size = (config.custom_block_size_mb * BYTES_PER_MB as f64).round() as u64;
        block_size
            .checked_sub(COINBASE_RESERVED_BYTES)
            .ok_or_else(|| {
                EstimateError::CheckedOperationError(
                    "custom block size is smaller than the coinbase reservation".into(),
                )
            })?
    } else {
        DEFAULT_BLOCK_SIZE_BYTES - COINBASE_RESERVED_BYTES
    };

    let block_time_s = if config.use_custom_block_interval {
        config.custom_block_interval_s
    } else {
        DEFAULT_BLOCK_INTERVAL_S
    };
    // a partially elapsed interval contributes no block
    let blocks_per_day = (SECONDS_PER_DAY as f64 / block_time_s).floor() as u64;

    let header_bandwidth_per_day = COMPACT_BLOCK_HEADER_BYTES
        .checked_mul(blocks_per_day)
        .ok_or_else(|| EstimateError::CheckedOperationError("daily header bandwidth".into()))?;

    // base 2: scanning with both the incoming and outgoing viewing keys
    let mut trial_decrypt_multiplier: u64 = 2;
    if config.remove_ivk_sync {
        trial_decrypt_multiplier /= 2;
    }
    if config.include_keystone {
        trial_decrypt_multiplier *= 2;
    }

    let orchard_normal_tx_size = ORCHARD_ACTIONS_PER_NORMAL_TX
        * orchard_action_bytes(config.zip231_memo_bundles)
        + orchard_flat_bytes(config.zip231_memo_bundles);
    let orchard_txs_per_block = effective_block_size / orchard_normal_tx_size;
    let orchard_tps = orchard_txs_per_block as f64 / block_time_s;

    Ok(SharedParams {
        effective_block_size,
        block_time_s,
        blocks_per_day,
        header_bandwidth_per_day,
        trial_decrypt_multiplier,
        orchard_normal_tx_size,
        orchard_tps,
    })
}
