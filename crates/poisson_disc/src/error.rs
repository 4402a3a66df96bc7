//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
//! Sampling itself never fails; errors only arise from validating a
//! [`crate::config::SamplerConfig`].
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
