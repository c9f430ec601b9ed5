//! Error types for Easel operations.
//!
//! [`EaselError`] is the only error a caller of this crate sees. Degenerate
//! geometry is reported as [`EaselError::Validation`] before anything is
//! drawn; every failure past that point, from rasterization to the final
//! rename, is an [`EaselError::Io`].

use std::io;

use thiserror::Error;

use easel_core::error::ValidationError;

use crate::export;

/// The main error type for Easel operations.
#[derive(Debug, Error)]
pub enum EaselError {
    #[error("invalid diagram: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl From<export::Error> for EaselError {
    fn from(error: export::Error) -> Self {
        match error {
            export::Error::Render(message) => Self::Io(io::Error::other(message)),
            export::Error::Io(err) => Self::Io(err),
        }
    }
}
