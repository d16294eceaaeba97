use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("failed to parse theme: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("spacing unit must be greater than 0")]
    InvalidSpacingUnit,
    #[error("spacing unit {unit}px exceeds the maximum of {max}px")]
    SpacingUnitTooLarge { unit: u32, max: u32 },
    #[error("color '{token}' must not be empty")]
    EmptyColor { token: &'static str },
}
