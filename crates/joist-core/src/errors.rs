//! Error types for the joist layout solver.

use thiserror::Error;

use crate::constraint::ConstraintId;
use crate::types::{Axis, BoxId};

/// Top-level error type for the joist crates.
#[derive(Debug, Error)]
pub enum JoistError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Compose(#[from] ComposeError),
}

/// Errors in the box/constraint data model, detected during validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("priority {value} is outside the allowed range 0..=1000")]
    InvalidPriority { value: u32 },

    #[error("constraint {constraint:?} references unknown box {anchor:?}")]
    DanglingReference {
        constraint: ConstraintId,
        anchor: BoxId,
    },

    #[error("box {id:?} appears more than once in the pass")]
    DuplicateBox { id: BoxId },
}

/// Errors during constraint resolution.
///
/// All resolution errors are fatal for the pass: no frame is returned for
/// any box.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ResolveError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error("conflicting required constraints: {conflicting:?}")]
    OverconstrainedLayout { conflicting: Vec<ConstraintId> },

    #[error("box {id:?} is unconstrained on the {axis:?} axis")]
    UnderconstrainedLayout { id: BoxId, axis: Axis },
}

/// Errors during tree composition.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposeError {
    #[error("child box {id:?} appears more than once")]
    DuplicateChild { id: BoxId },

    #[error("spacing must be finite and non-negative, got {spacing}")]
    InvalidSpacing { spacing: f64 },
}
