//! Blog password hashing and verification.
//!
//! Blogs are protected by a single shared password. The hash is generated
//! once at blog creation with a deliberately expensive bcrypt work factor
//! and compared on every post submission.

use crate::error::Result;

/// bcrypt work factor for blog passwords.
///
/// Cost 15 makes a single hash take on the order of seconds, which is the
/// point: offline brute force against a leaked hash is impractical.
pub const HASH_COST: u32 = 15;

/// Hash a password at the service's fixed work factor.
pub fn hash(password: &str) -> Result<String> {
    hash_with_cost(password, HASH_COST)
}

/// Hash a password at an explicit work factor.
///
/// Tests use `4` to keep the suite fast; production code
/// goes through [`hash`].
pub fn hash_with_cost(password: &str, cost: u32) -> Result<String> {
    Ok(bcrypt::hash(password, cost)?)
}

/// Check a password against a stored hash.
///
/// A mismatch is an expected control-flow outcome, not an error. A
/// malformed stored hash also verifies as `false` rather than failing the
/// request.
pub fn verify(stored_hash: &str, password: &str) -> bool {
    bcrypt::verify(password, stored_hash).unwrap_or(false)
}
