//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. The resource repository
//! additionally takes a [`ecare_core::resource::ResourceKind`] selecting
//! which of the two structurally-identical tables a query targets.

pub mod banner_repo;
pub mod contact_repo;
pub mod resource_repo;
pub mod seo_page_repo;
pub mod settings_repo;

pub use banner_repo::BannerRepo;
pub use contact_repo::ContactRepo;
pub use resource_repo::ResourceRepo;
pub use seo_page_repo::SeoPageRepo;
pub use settings_repo::SettingsRepo;
