// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use thiserror::Error;

/// Result alias for models operations
pub type ModelsResult<T, E = ModelsError> = core::result::Result<T, E>;

/// Models error
#[non_exhaustive]
#[derive(Display, Error, Debug)]
pub enum ModelsError {
    /// invalid configuration: {0}
    InvalidConfiguration(String),
}
