//! Domain logic shared across the ecare backend.
//!
//! This crate is free of I/O: it holds the error taxonomy, shared type
//! aliases, the resource-kind mapping, and the pure helpers (slug
//! generation, pagination arithmetic) the api crate builds on.

pub mod error;
pub mod pagination;
pub mod resource;
pub mod slug;
pub mod types;
