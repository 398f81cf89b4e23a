//! `stockroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the strongly-typed identifiers shared by every stockroom crate and the
//! domain error model.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{LocationId, MovementId, ProductId};
