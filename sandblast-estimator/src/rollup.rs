// Copyright (c) 2022 MASSA LABS <info@massa.net>

use std::fmt;

use sandblast_models::constants::BYTES_PER_MB;
use sandblast_models::SyncConfig;
use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, EstimateResult};
use crate::orchard::OrchardLoad;
use crate::sapling::SaplingLoad;
use crate::shared::SharedParams;

/// Shielded pool identifier used in dominance reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pool {
    /// the Sapling pool
    Sapling,
    /// the Orchard pool
    Orchard,
}

impl fmt::Display for Pool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pool::Sapling => write!(f, "sapling"),
            Pool::Orchard => write!(f, "orchard"),
        }
    }
}

/// Final daily figures after combining both pool loads
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollupSummary {
    /// daily bandwidth in bytes, header share included
    pub bandwidth_bytes_per_day: u64,
    /// daily bandwidth in megabytes, for presentation
    pub bandwidth_mb_per_day: f64,
    /// daily trial decrypt key exchanges, multiplier applied
    pub decrypts_per_day: u64,
    /// pool contributing the bandwidth maximum, ties going to Sapling
    pub bandwidth_dominated_by: Pool,
    /// pool contributing the decrypt maximum, ties going to Sapling
    pub decrypts_dominated_by: Pool,
}

/// Rolls the two pool loads into the final daily figures.
///
/// The header bandwidth and the trial decrypt multiplier are applied once,
/// after the cross-pool maximum, so neither is counted twice. When the
/// scenario excludes the Sapling attack vector, Sapling's raw values enter
/// the maxima as zero.
pub fn roll_up(
    config: &SyncConfig,
    shared: &SharedParams,
    sapling: &SaplingLoad,
    orchard: &OrchardLoad,
) -> EstimateResult<RollupSummary> {
    let (sapling_bandwidth, sapling_decrypts) = if config.exclude_sapling_attack {
        (0, 0)
    } else {
        (sapling.raw_bandwidth_per_day, sapling.raw_decrypts_per_day)
    };

    let max_bandwidth = sapling_bandwidth.max(orchard.raw_bandwidth_per_day);
    let bandwidth_bytes_per_day = max_bandwidth
        .checked_add(shared.header_bandwidth_per_day)
        .ok_or_else(|| EstimateError::CheckedOperationError("final daily bandwidth".into()))?;
    let bandwidth_mb_per_day = bandwidth_bytes_per_day as f64 / BYTES_PER_MB as f64;

    let max_decrypts = sapling_decrypts.max(orchard.raw_decrypts_per_day);
    let decrypts_per_day = max_decrypts
        .checked_mul(shared.trial_decrypt_multiplier)
        .ok_or_else(|| EstimateError::CheckedOperationError("final daily decrypts".into()))?;

    let bandwidth_dominated_by = if sapling_bandwidth >= orchard.raw_bandwidth_per_day {
        Pool::Sapling
    } else {
        Pool::Orchard
    };
    let decrypts_dominated_by = if sapling_decrypts >= orchard.raw_decrypts_per_day {
        Pool::Sapling
    } else {
        Pool::Orchard
    };

    Ok(RollupSummary {
        bandwidth_bytes_per_day,
        bandwidth_mb_per_day,
        decrypts_per_day,
        bandwidth_dominated_by,
        decrypts_dominated_by,
    })
}
