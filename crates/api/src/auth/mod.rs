//! Authentication: JWT generation and validation.
//!
//! Token issuance over HTTP (login, password reset) is handled outside
//! this service; the backend only verifies bearer tokens.

pub mod jwt;
