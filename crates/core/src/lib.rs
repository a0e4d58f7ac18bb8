//! `kasbuku-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod error;
pub mod id;
pub mod money;
pub mod product;

pub use error::{DomainError, DomainResult};
pub use id::RowId;
pub use money::{format_rupiah, round_rupiah};
pub use product::ProductName;
