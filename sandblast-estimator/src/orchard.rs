// Copyright (c) 2022 MASSA LABS <info@massa.net>

use sandblast_models::constants::{
    orchard_action_bytes, orchard_compact_action_bytes, orchard_flat_bytes,
    ORCHARD_ACTIONS_PER_SPAM_TX,
};
use sandblast_models::SyncConfig;
use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, EstimateResult};
use crate::shared::SharedParams;

/// Worst-case Orchard pool load for one scenario, before the rollup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrchardLoad {
    /// per-action size, ZIP-231 delta included when enabled
    pub per_action_size: u64,
    /// flat per-transaction overhead, ZIP-231 delta included when enabled
    pub flat_tx_size: u64,
    /// size of the worst-case Orchard transaction
    pub spam_tx_size: u64,
    /// spam transactions fitting in one block
    pub txs_per_block: u64,
    /// actions carried per block
    pub actions_per_block: u64,
    /// compact block bytes per block from Orchard data
    pub bandwidth_per_block: u64,
    /// daily Orchard bytes, header share not included
    pub raw_bandwidth_per_day: u64,
    /// daily Orchard actions to trial decrypt, multiplier not applied
    pub raw_decrypts_per_day: u64,
}

/// Derives the worst-case Orchard load from the shared effective block size.
pub fn derive_orchard(
    config: &SyncConfig,
    shared: &SharedParams,
) -> EstimateResult<OrchardLoad> {
    let per_action_size = orchard_action_bytes(config.zip231_memo_bundles);
    let flat_tx_size = orchard_flat_bytes(config.zip231_memo_bundles);
    let spam_tx_size = ORCHARD_ACTIONS_PER_SPAM_TX * per_action_size + flat_tx_size;

    let txs_per_block = shared.effective_block_size / spam_tx_size;
    let actions_per_block = txs_per_block
        .checked_mul(ORCHARD_ACTIONS_PER_SPAM_TX)
        .ok_or_else(|| EstimateError::CheckedOperationError("Orchard actions per block".into()))?;

    let bandwidth_per_block = orchard_compact_action_bytes(config.zip231_memo_bundles)
        .checked_mul(actions_per_block)
        .ok_or_else(|| {
            EstimateError::CheckedOperationError("Orchard bandwidth per block".into())
        })?;

    let raw_bandwidth_per_day = bandwidth_per_block
        .checked_mul(shared.blocks_per_day)
        .ok_or_else(|| EstimateError::CheckedOperationError("daily Orchard bandwidth".into()))?;
    let raw_decrypts_per_day = actions_per_block
        .checked_mul(shared.blocks_per_day)
        .ok_or_else(|| EstimateError::CheckedOperationError("daily Orchard decrypts".into()))?;

    Ok(OrchardLoad {
        per_action_size,
        flat_tx_size,
        spam_tx_size,
        txs_per_block,
        actions_per_block,
        bandwidth_per_block,
        raw_bandwidth_per_day,
        raw_decrypts_per_day,
    })
}
