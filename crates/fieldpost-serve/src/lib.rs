//! Fieldpost Serve - HTTP server for the embeddable blog service.
//!
//! This crate provides the web-facing half of Fieldpost: anonymous
//! visitors create a password-protected blog, post markdown entries to
//! it, and embed it elsewhere via a small JavaScript snippet.
//!
//! # Architecture
//!
//! - **Routes**: axum handlers for blog creation, post submission, and
//!   the embed script endpoint
//! - **Render**: HTML pages built with maud (compile-time templates) and
//!   the embed script built by explicit JSON-serialize-then-inject
//! - **State**: a shared [`Store`](fieldpost_core::Store) handle plus
//!   configuration, cloned into every handler
//!
//! # Security
//!
//! - Dynamic page content is HTML-escaped by maud
//! - Post bodies are sanitized at write time in `fieldpost-core`
//! - Blog passwords are bcrypt-hashed; verification failures are 403s

pub mod config;
pub mod error;
pub mod render;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::router;
pub use state::AppState;
