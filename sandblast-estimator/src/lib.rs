// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Worst-case ("sandblast") shielded sync load derivations.
//!
//! Everything here is a pure function over immutable value records: shared
//! block parameters are derived first, the two pool derivations consume them
//! independently of each other, and the rollup combines both pool loads into
//! the final daily figures. [`evaluate`] runs the whole pipeline for one
//! scenario.
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod error;
mod estimate;
mod orchard;
mod rollup;
mod sapling;
mod shared;

pub use error::{EstimateError, EstimateResult};
pub use estimate::{evaluate, LoadEstimate};
pub use orchard::{derive_orchard, OrchardLoad};
pub use rollup::{roll_up, Pool, RollupSummary};
pub use sapling::{derive_sapling, SaplingLoad};
pub use shared::{derive_shared, SharedParams};

#[cfg(test)]
mod tests;
