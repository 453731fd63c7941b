//! Field rules checked before anything reaches the store.

use super::models::Strength;
use thiserror::Error;

/// Minimum number of characters a power description must hold.
pub const MIN_DESCRIPTION_CHARS: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("description must be at least {min} characters long, got {actual}")]
    DescriptionTooShort { min: usize, actual: usize },

    #[error("strength `{0}` is not one of Strong, Weak, Average")]
    InvalidStrength(String),
}

/// Checks that `description` holds at least [`MIN_DESCRIPTION_CHARS`] characters.
///
/// Characters are counted as Unicode scalar values, so multi-byte text is not
/// favoured over ASCII.
///
/// # Errors
/// Returns [`ValidationError::DescriptionTooShort`] when the description is too short.
pub fn validate_power_description(description: &str) -> Result<(), ValidationError> {
    let actual = description.chars().count();
    if actual < MIN_DESCRIPTION_CHARS {
        return Err(ValidationError::DescriptionTooShort {
            min: MIN_DESCRIPTION_CHARS,
            actual,
        });
    }
    Ok(())
}

/// Parses a raw strength label into a [`Strength`].
///
/// Matching is exact: `"strong"` or `" Strong"` are rejected.
///
/// # Errors
/// Returns [`ValidationError::InvalidStrength`] for any other value.
pub fn validate_strength(value: &str) -> Result<Strength, ValidationError> {
    match value {
        "Strong" => Ok(Strength::Strong),
        "Weak" => Ok(Strength::Weak),
        "Average" => Ok(Strength::Average),
        other => Err(ValidationError::InvalidStrength(other.to_string())),
    }
}
