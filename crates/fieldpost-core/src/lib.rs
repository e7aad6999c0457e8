//! Core domain logic for Fieldpost, a password-protected embeddable blog.
//!
//! This crate provides:
//! - The `Blog` and `Post` record types
//! - Password hashing and verification (bcrypt)
//! - Markdown-to-HTML conversion with sanitization
//! - The SQLite-backed `Store` and its schema management
//! - Shared error types
//!
//! Everything here is synchronous; the HTTP layer lives in
//! `fieldpost-serve`.

mod error;
pub mod markdown;
pub mod model;
pub mod password;
pub mod schema;
pub mod store;

pub use error::{Error, Result};
pub use model::{Blog, Post};
pub use store::Store;
