//! Core types and logic for graphmark.
//!
//! This crate holds the upstream record model, the HTTP fetch client, and the
//! Markdown formatter producing the detailed and summary views.

pub mod client;
pub mod format;
pub mod record;
