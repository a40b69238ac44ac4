use thiserror::Error;

/// A flattening parameter that cannot be used.
///
/// Each variant carries the rejected value.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum OptionsError {
    #[error("Invalid scale {0}, expected a positive finite number.")]
    Scale(f64),
    #[error("Invalid path epsilon {0}, expected a positive finite number.")]
    PathEpsilon(f64),
    #[error("Invalid collinearity epsilon {0}, expected a non-negative number.")]
    Epsilon(f64),
    #[error("Invalid angle epsilon {0}, expected a non-negative number.")]
    AngleEpsilon(f64),
    #[error("Invalid angle tolerance {0}, expected a non-negative number.")]
    AngleTolerance(f64),
    #[error("Invalid cusp limit {0}, expected a non-negative number.")]
    CuspLimit(f64),
}
