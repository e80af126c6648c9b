//! Core types for the joist layout solver.
//!
//! This crate provides the foundational types used across the other joist
//! crates:
//! - Box and priority value types
//! - Constraint and constraint-set types
//! - Resolved frame geometry
//! - Error types

pub mod boxes;
pub mod constraint;
pub mod errors;
pub mod frame;
pub mod types;

pub use boxes::*;
pub use constraint::*;
pub use errors::*;
pub use frame::*;
pub use types::*;
