//! Strider Core - Foundational types for the Strider controller
//!
//! This crate provides the types that all other Strider crates depend on:
//! - `Vec3` - Spatial math
//! - Error types and Result alias

mod error;
mod types;

pub use error::{Result, StriderError};
pub use types::Vec3;
