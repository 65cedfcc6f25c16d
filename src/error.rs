use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScaleError {
    /// Factor was zero, negative, NaN or infinite.
    #[error("Invalid scale factor {0}: factor must be a finite number greater than zero")]
    InvalidFactor(f64),

    /// Requested serving count failed validation; carries the validation message.
    #[error("Invalid serving size: {0}")]
    InvalidServings(String),

    /// The recipe itself declares a serving count that cannot be scaled from.
    #[error("Recipe declares an unusable serving count: {0}")]
    InvalidRecipeServings(f64),
}
