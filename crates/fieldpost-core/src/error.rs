//! Error types for the Fieldpost domain crate.

use thiserror::Error;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in the domain layer.
#[derive(Error, Debug)]
pub enum Error {
    /// SQLite error from the store.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Password hashing failed (invalid cost or RNG failure).
    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_error_display() {
        let err = Error::Database(rusqlite::Error::QueryReturnedNoRows);
        assert!(err.to_string().starts_with("database error:"));
    }

    #[test]
    fn password_hash_error_display() {
        let err: Error = bcrypt::BcryptError::CostNotAllowed(99).into();
        assert!(err.to_string().starts_with("password hash error:"));
    }

    #[test]
    fn from_rusqlite_error() {
        let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, Error::Database(_)));
    }
}
