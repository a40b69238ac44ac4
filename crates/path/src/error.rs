use crate::geom::OptionsError;
use thiserror::Error;

/// An error reported by the path context.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ContextError {
    /// A sub-path is required, `move_to` must be called first.
    #[error("Cannot {operation} without a sub-path, call move_to first.")]
    InvalidState { operation: &'static str },
    #[error("Non-finite coordinate ({x}, {y}) passed to {operation}.")]
    NonFiniteCoordinate {
        operation: &'static str,
        x: f64,
        y: f64,
    },
    #[error(transparent)]
    Options(#[from] OptionsError),
}
