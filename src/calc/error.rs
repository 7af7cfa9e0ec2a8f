use thiserror::Error;

/// Message shown to the user for any rejected height or weight
pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid (non-negative) input number.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Either input was empty, unparseable, or not strictly positive
    #[error("{}", INVALID_INPUT_MESSAGE)]
    InvalidInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitModeError {
    #[error("Unknown unit mode: '{0}' (expected metric/mkg or imperial/ftlbs)")]
    Unknown(String),
}
