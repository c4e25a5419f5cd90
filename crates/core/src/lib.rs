//! `pressroom-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod deep_copy;
pub mod error;
pub mod rated;
pub mod value_object;

pub use deep_copy::DeepCopy;
pub use error::{DomainError, DomainResult};
pub use rated::{Rated, average_rating};
pub use value_object::ValueObject;
