// Copyright (c) 2022 MASSA LABS <info@massa.net>

use displaydoc::Display;
use sandblast_models::ModelsError;
use thiserror::Error;

/// Result alias for estimator operations
pub type EstimateResult<T, E = EstimateError> = core::result::Result<T, E>;

/// Estimator error
#[non_exhaustive]
#[derive(Display, Error, Debug)]
pub enum EstimateError {
    /// models error: {0}
    ModelsError(#[from] ModelsError),
    /// checked operation error: {0}
    CheckedOperationError(String),
}
