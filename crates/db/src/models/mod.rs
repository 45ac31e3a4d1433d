//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - `Deserialize` DTOs for writes where the entity takes JSON input
//!   (multipart-backed entities build their write DTOs in the api crate)

pub mod banner;
pub mod contact;
pub mod resource;
pub mod seo_page;
pub mod settings;
