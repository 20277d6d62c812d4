//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations. Implementations live in
//! `crate::infrastructure::persistence`; mocks are generated with `mockall`
//! for unit tests.

pub mod link_repository;

pub use link_repository::{InsertOutcome, LinkRepository};

#[cfg(test)]
pub use link_repository::MockLinkRepository;
