//! Size and timing constants of the shielded sync load model.
//!
//! All sizes are in bytes unless noted otherwise. The per-pool spam caps
//! (32 Sapling outputs, 32 Orchard actions per transaction) are the
//! adversarial maxima considered practical in a single "sandblast"
//! transaction. They are domain constants, not derived values. Future
//! memo-bundle formats adjust the Orchard sizes through additive deltas,
//! which is how ZIP-231 is modeled below.

/// Default maximum block size
pub const DEFAULT_BLOCK_SIZE_BYTES: u64 = 2_000_000;

/// Bytes of every block reserved for the coinbase transaction
pub const COINBASE_RESERVED_BYTES: u64 = 1_739;

/// Default block interval in seconds
pub const DEFAULT_BLOCK_INTERVAL_S: f64 = 75.0;

/// Seconds in a day
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Compact block header size
pub const COMPACT_BLOCK_HEADER_BYTES: u64 = 90;

/// Bytes per megabyte in block size figures
pub const BYTES_PER_MB: u64 = 1_000_000;

/// Block size choices offered to scenario builders, in megabytes
pub const BLOCK_SIZE_OPTIONS_MB: [f64; 4] = [2.0, 1.9, 1.75, 1.5];

/// Block interval choices offered to scenario builders, in seconds
pub const BLOCK_INTERVAL_OPTIONS_S: [f64; 6] = [20.0, 25.0, 27.5, 30.0, 35.0, 37.5];

// Sapling

/// Sapling spend description size
pub const SAPLING_SPEND_BYTES: u64 = 352;

/// Sapling output description size
pub const SAPLING_OUTPUT_BYTES: u64 = 948;

/// Sapling flat per-transaction overhead
pub const SAPLING_TX_OVERHEAD_BYTES: u64 = 109;

/// Maximum outputs in a Sapling sandblast transaction
pub const SAPLING_OUTPUTS_PER_SPAM_TX: u64 = 32;

/// Sapling usable block space when the lowered-bandwidth cap is active
pub const SAPLING_CAPPED_BLOCK_SPACE_BYTES: u64 = 600_000;

/// Sapling usable block space otherwise. Always the default block size minus
/// the coinbase reservation: a custom block size is an Orchard-only protocol
/// parameter and never reaches this pool.
pub const SAPLING_DEFAULT_BLOCK_SPACE_BYTES: u64 =
    DEFAULT_BLOCK_SIZE_BYTES - COINBASE_RESERVED_BYTES;

/// Compact block bytes per Sapling transaction
pub const SAPLING_COMPACT_TX_BYTES: u64 = 32;

/// Compact block bytes per Sapling output
pub const SAPLING_COMPACT_OUTPUT_BYTES: u64 = 112;

/// Sapling sandblast transaction size: one spend, the maximum number of
/// outputs, and the flat overhead
pub const SAPLING_SPAM_TX_BYTES: u64 = SAPLING_SPEND_BYTES
    + SAPLING_OUTPUTS_PER_SPAM_TX * SAPLING_OUTPUT_BYTES
    + SAPLING_TX_OVERHEAD_BYTES;

// Orchard

/// Orchard spend auth signature size
pub const ORCHARD_SPEND_AUTH_SIG_BYTES: u64 = 64;

/// Orchard per-action proof size
pub const ORCHARD_ACTION_PROOF_BYTES: u64 = 2_272;

/// Orchard action description size
pub const ORCHARD_ACTION_DESC_BYTES: u64 = 820;

/// Orchard binding signature size
pub const ORCHARD_BINDING_SIG_BYTES: u64 = 64;

/// Orchard flat proof size
pub const ORCHARD_FLAT_PROOF_BYTES: u64 = 2_720;

/// Maximum actions in an Orchard sandblast transaction
pub const ORCHARD_ACTIONS_PER_SPAM_TX: u64 = 32;

/// Actions in a normal two-party Orchard transaction
pub const ORCHARD_ACTIONS_PER_NORMAL_TX: u64 = 2;

/// Compact block bytes per Orchard action
pub const ORCHARD_COMPACT_ACTION_BYTES: u64 = 148;

// ZIP-231 trades per-action size for a larger flat memo-bundle overhead.

/// ZIP-231 change to the Orchard per-action size
pub const ZIP231_ACTION_DELTA_BYTES: i64 = -464;

/// ZIP-231 change to the Orchard flat per-transaction overhead
pub const ZIP231_FLAT_DELTA_BYTES: i64 = 512;

/// ZIP-231 change to the compact block bytes per Orchard action
pub const ZIP231_COMPACT_ACTION_DELTA_BYTES: i64 = 48;

/// Orchard per-action size: spend auth signature, per-action proof and action
/// description, with the ZIP-231 delta applied when memo bundles are enabled
pub const fn orchard_action_bytes(zip231_memo_bundles: bool) -> u64 {
    let base =
        ORCHARD_SPEND_AUTH_SIG_BYTES + ORCHARD_ACTION_PROOF_BYTES + ORCHARD_ACTION_DESC_BYTES;
    if zip231_memo_bundles {
        (base as i64 + ZIP231_ACTION_DELTA_BYTES) as u64
    } else {
        base
    }
}

/// Orchard flat per-transaction overhead: binding signature and flat proof,
/// with the ZIP-231 delta applied when memo bundles are enabled
pub const fn orchard_flat_bytes(zip231_memo_bundles: bool) -> u64 {
    let base = ORCHARD_BINDING_SIG_BYTES + ORCHARD_FLAT_PROOF_BYTES;
    if zip231_memo_bundles {
        (base as i64 + ZIP231_FLAT_DELTA_BYTES) as u64
    } else {
        base
    }
}

/// Compact block bytes per Orchard action, with the ZIP-231 delta applied
/// when memo bundles are enabled
pub const fn orchard_compact_action_bytes(zip231_memo_bundles: bool) -> u64 {
    if zip231_memo_bundles {
        (ORCHARD_COMPACT_ACTION_BYTES as i64 + ZIP231_COMPACT_ACTION_DELTA_BYTES) as u64
    } else {
        ORCHARD_COMPACT_ACTION_BYTES
    }
}

const _: () = {
    // Check at compile time
    if orchard_action_bytes(true) == 0 || orchard_action_bytes(true) >= orchard_action_bytes(false)
    {
        panic!("ZIP-231 must shrink the per-action size and keep it strictly positive")
    }
    if orchard_flat_bytes(true) <= orchard_flat_bytes(false) {
        panic!("ZIP-231 must grow the flat per-transaction overhead")
    }
};
