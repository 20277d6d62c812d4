//! Domain layer containing business entities and repository contracts.
//!
//! This module has no dependencies on infrastructure or presentation layers.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions implemented by
//!   [`crate::infrastructure::persistence`]

pub mod entities;
pub mod repositories;
