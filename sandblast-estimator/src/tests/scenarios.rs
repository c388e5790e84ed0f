// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Cross-cutting invariants of the whole pipeline, checked over a grid of
//! scenario configurations.

use more_asserts::{assert_ge, assert_gt, assert_lt};
use sandblast_models::SyncConfig;

use crate::{derive_shared, evaluate, Pool};

/// Every combination of the five plain toggles, each once with default block
/// geometry and once with a custom interval and size.
fn scenario_grid() -> Vec<SyncConfig> {
    let mut grid = Vec::new();
    for bits in 0u32..32 {
        let mut config = SyncConfig::today();
        config.exclude_sapling_attack = bits & 1 != 0;
        config.remove_ivk_sync = bits & 2 != 0;
        config.include_keystone = bits & 4 != 0;
        config.lower_sapling_bandwidth = bits & 8 != 0;
        config.zip231_memo_bundles = bits & 16 != 0;
        grid.push(config);

        let mut custom = config;
        custom.use_custom_block_interval = true;
        custom.custom_block_interval_s = 25.0;
        custom.use_custom_block_size = true;
        custom.custom_block_size_mb = 1.5;
        grid.push(custom);
    }
    grid
}

#[test]
fn test_dominant_pool_matches_pre_rollup_maximum() {
    for config in scenario_grid() {
        let estimate = evaluate(&config).unwrap();
        let sapling_bandwidth = if config.exclude_sapling_attack {
            0
        } else {
            estimate.sapling.raw_bandwidth_per_day
        };
        let sapling_decrypts = if config.exclude_sapling_attack {
            0
        } else {
            estimate.sapling.raw_decrypts_per_day
        };

        let dominant_bandwidth = match estimate.rollup.bandwidth_dominated_by {
            Pool::Sapling => sapling_bandwidth,
            Pool::Orchard => estimate.orchard.raw_bandwidth_per_day,
        };
        assert_eq!(
            dominant_bandwidth,
            sapling_bandwidth.max(estimate.orchard.raw_bandwidth_per_day),
            "bandwidth dominance inconsistent for {:?}",
            config
        );

        let dominant_decrypts = match estimate.rollup.decrypts_dominated_by {
            Pool::Sapling => sapling_decrypts,
            Pool::Orchard => estimate.orchard.raw_decrypts_per_day,
        };
        assert_eq!(
            dominant_decrypts,
            sapling_decrypts.max(estimate.orchard.raw_decrypts_per_day),
            "decrypt dominance inconsistent for {:?}",
            config
        );
    }
}

#[test]
fn test_excluding_sapling_depends_on_orchard_only() {
    for mut config in scenario_grid() {
        config.exclude_sapling_attack = true;
        let estimate = evaluate(&config).unwrap();

        assert_eq!(
            estimate.rollup.bandwidth_bytes_per_day,
            estimate.orchard.raw_bandwidth_per_day + estimate.shared.header_bandwidth_per_day
        );
        assert_eq!(
            estimate.rollup.decrypts_per_day,
            estimate.orchard.raw_decrypts_per_day * estimate.shared.trial_decrypt_multiplier
        );
        assert_eq!(estimate.rollup.bandwidth_dominated_by, Pool::Orchard);
    }
}

#[test]
fn test_exclude_sapling_round_trips() {
    for config in scenario_grid() {
        let before = evaluate(&config).unwrap();
        let mut toggled = config;
        toggled.exclude_sapling_attack = !toggled.exclude_sapling_attack;
        toggled.exclude_sapling_attack = !toggled.exclude_sapling_attack;
        assert_eq!(evaluate(&toggled).unwrap(), before);
    }
}

#[test]
fn test_trial_decrypt_multiplier_monotonic() {
    for include_keystone in [false, true] {
        let mut config = SyncConfig::today();
        config.include_keystone = include_keystone;
        let full = derive_shared(&config).unwrap().trial_decrypt_multiplier;
        config.remove_ivk_sync = true;
        let outgoing_only = derive_shared(&config).unwrap().trial_decrypt_multiplier;
        assert_lt!(outgoing_only, full);
        assert_gt!(outgoing_only, 0);
    }
    for remove_ivk_sync in [false, true] {
        let mut config = SyncConfig::today();
        config.remove_ivk_sync = remove_ivk_sync;
        let without_keystone = derive_shared(&config).unwrap().trial_decrypt_multiplier;
        config.include_keystone = true;
        let with_keystone = derive_shared(&config).unwrap().trial_decrypt_multiplier;
        assert_gt!(with_keystone, without_keystone);
    }
}

#[test]
fn test_orchard_monotone_in_block_size_sapling_invariant() {
    let baseline = evaluate(&SyncConfig::today()).unwrap().sapling;
    let mut previous = None;
    for custom_block_size_mb in [1.5, 1.75, 1.9, 2.0, 2.5, 3.0] {
        let mut config = SyncConfig::today();
        config.use_custom_block_size = true;
        config.custom_block_size_mb = custom_block_size_mb;
        let estimate = evaluate(&config).unwrap();

        if let Some((bandwidth, decrypts)) = previous {
            assert_ge!(estimate.orchard.raw_bandwidth_per_day, bandwidth);
            assert_ge!(estimate.orchard.raw_decrypts_per_day, decrypts);
        }
        previous = Some((
            estimate.orchard.raw_bandwidth_per_day,
            estimate.orchard.raw_decrypts_per_day,
        ));

        assert_eq!(estimate.sapling, baseline);
    }
}
