//! Short code generation.
//!
//! Codes are drawn uniformly from the 62 ASCII alphanumerics, giving
//! 62^6 (about 5.7e10) possible codes. Uniqueness is enforced by the store;
//! see [`crate::application::services::LinkService`] for collision handling.

use crate::domain::entities::link::SHORT_CODE_LENGTH;
use rand::Rng;
use rand::distr::Alphanumeric;

/// Generates a random short code of [`SHORT_CODE_LENGTH`] characters.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SHORT_CODE_LENGTH)
        .map(char::from)
        .collect()
}

/// Returns true if `code` has the shape of a generated short code.
pub fn is_well_formed(code: &str) -> bool {
    code.len() == SHORT_CODE_LENGTH && code.chars().all(|c| c.is_ascii_alphanumeric())
}
