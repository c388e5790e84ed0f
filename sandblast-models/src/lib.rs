// Copyright (c) 2022 MASSA LABS <info@massa.net>

//! Value records and protocol constants for the shielded sync load model
#![warn(missing_docs)]
#![warn(unused_crate_dependencies)]

mod config;
mod error;

/// Protocol geometry constants
pub mod constants;

pub use config::SyncConfig;
pub use error::{ModelsError, ModelsResult};
