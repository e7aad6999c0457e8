//! Record types for the two persisted entities.
//!
//! Both carry the full timestamp triple (`created_at`, `updated_at`,
//! `deleted_at`) even though no route currently updates or deletes rows;
//! queries filter on `deleted_at IS NULL` throughout.

use serde::{Deserialize, Serialize};

/// A password-protected container for an ordered collection of posts.
///
/// The ID is immutable once assigned and the password hash is set once at
/// creation; there is no password-reset path.
#[derive(Debug, Clone)]
pub struct Blog {
    /// Auto-generated row ID.
    pub id: i64,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// bcrypt hash of the blog's shared password (PHC string).
    pub password_hash: String,
}

/// A single markdown-authored entry belonging to one blog.
///
/// `body` holds the HTML fragment produced at write time; markdown is
/// never re-rendered on read. Posts are immutable after creation.
///
/// Serialized as-is into the embed script's JSON payload, so field names
/// here are the public wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    /// Auto-generated row ID.
    pub id: i64,
    /// Owning blog.
    pub blog_id: i64,
    /// Unix timestamp of creation.
    pub created_at: i64,
    /// Unix timestamp of last update.
    pub updated_at: i64,
    /// Pre-rendered, sanitized HTML fragment.
    pub body: String,
}
