//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation
//! - [`db_error`] - Classification of PostgreSQL constraint violations

pub mod code_generator;
pub mod db_error;
