// Copyright (c) 2022 MASSA LABS <info@massa.net>

use serde::{Deserialize, Serialize};

use crate::constants::{BYTES_PER_MB, DEFAULT_BLOCK_INTERVAL_S, DEFAULT_BLOCK_SIZE_BYTES};
use crate::error::{ModelsError, ModelsResult};

/// Scenario configuration of the shielded sync load model.
///
/// A plain immutable record: toggles describing protocol changes and client
/// behavior, plus the numeric overrides some of them carry. The numeric
/// fields always hold a value so a record stays valid when a toggle is
/// flipped; they only take effect while the matching `use_*` flag is set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// treat the Sapling attack vector as mitigated: its raw loads roll up as zero
    pub exclude_sapling_attack: bool,
    /// scan with the outgoing viewing key only, halving the trial decrypt multiplier
    pub remove_ivk_sync: bool,
    /// add the Keystone key exchange pass, doubling the trial decrypt multiplier
    pub include_keystone: bool,
    /// override the default block interval
    pub use_custom_block_interval: bool,
    /// custom block interval in seconds
    pub custom_block_interval_s: f64,
    /// override the default block size (affects Orchard sizing only)
    pub use_custom_block_size: bool,
    /// custom block size in megabytes
    pub custom_block_size_mb: f64,
    /// cap Sapling usable block space at the lowered fixed budget
    pub lower_sapling_bandwidth: bool,
    /// apply the ZIP-231 memo bundle size deltas to Orchard sizing
    pub zip231_memo_bundles: bool,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            exclude_sapling_attack: false,
            remove_ivk_sync: false,
            include_keystone: false,
            use_custom_block_interval: false,
            custom_block_interval_s: DEFAULT_BLOCK_INTERVAL_S,
            use_custom_block_size: false,
            custom_block_size_mb: DEFAULT_BLOCK_SIZE_BYTES as f64 / BYTES_PER_MB as f64,
            lower_sapling_bandwidth: false,
            zip231_memo_bundles: false,
        }
    }
}

impl SyncConfig {
    /// The "Today" baseline: current protocol, no client-side changes
    pub fn today() -> Self {
        Self::default()
    }

    /// The "Proposed" scenario: 25 second blocks with Sapling bandwidth lowered
    pub fn proposed() -> Self {
        Self {
            use_custom_block_interval: true,
            custom_block_interval_s: 25.0,
            lower_sapling_bandwidth: true,
            ..Self::default()
        }
    }

    /// Checks that every numeric field is strictly positive and finite.
    ///
    /// The derivations divide by the block interval and scale by the block
    /// size, so a zero, negative or non-finite override is rejected here
    /// before any computation runs.
    pub fn check(&self) -> ModelsResult<()> {
        if !(self.custom_block_interval_s.is_finite() && self.custom_block_interval_s > 0.0) {
            return Err(ModelsError::InvalidConfiguration(format!(
                "custom block interval must be strictly positive and finite, got {}",
                self.custom_block_interval_s
            )));
        }
        if !(self.custom_block_size_mb.is_finite() && self.custom_block_size_mb > 0.0) {
            return Err(ModelsError::InvalidConfiguration(format!(
                "custom block size must be strictly positive and finite, got {}",
                self.custom_block_size_mb
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        SyncConfig::today().check().unwrap();
        SyncConfig::proposed().check().unwrap();
    }

    #[test]
    fn test_proposed_preset() {
        let config = SyncConfig::proposed();
        assert!(config.use_custom_block_interval);
        assert_eq!(config.custom_block_interval_s, 25.0);
        assert!(config.lower_sapling_bandwidth);
        assert!(!config.use_custom_block_size);
        assert!(!config.zip231_memo_bundles);
    }

    #[test]
    fn test_check_rejects_non_positive_overrides() {
        let mut config = SyncConfig::today();
        config.custom_block_interval_s = 0.0;
        assert!(config.check().is_err());
        config.custom_block_interval_s = -25.0;
        assert!(config.check().is_err());
        config.custom_block_interval_s = f64::NAN;
        assert!(config.check().is_err());

        let mut config = SyncConfig::today();
        config.custom_block_size_mb = 0.0;
        assert!(config.check().is_err());
        config.custom_block_size_mb = f64::INFINITY;
        assert!(config.check().is_err());
    }

    #[test]
    fn test_partial_scenario_fills_defaults() {
        let config: SyncConfig =
            serde_json::from_str(r#"{"lower_sapling_bandwidth": true}"#).unwrap();
        assert!(config.lower_sapling_bandwidth);
        assert_eq!(config.custom_block_interval_s, DEFAULT_BLOCK_INTERVAL_S);
        assert!(!config.zip231_memo_bundles);
    }
}
