//! Layout-intent composition for joist box trees.
//!
//! This crate expands high-level layout intents into the primitive
//! constraints consumed by the resolver.
//!
//! # Architecture
//!
//! 1. **Distribution**: pure policies mapping a child list and the
//!    available main-axis extent to per-child target extents
//! 2. **Composition**: expansion of targets into required edge and extent
//!    constraints, with cross-axis constraints per alignment
//!
//! # Example
//!
//! ```ignore
//! use joist_compose::{compose, Distribution, LayoutIntent};
//! use joist_solver::resolve;
//!
//! let intent = LayoutIntent::horizontal()
//!     .with_distribution(Distribution::FillEqually)
//!     .with_spacing(8.0);
//! let set = compose(&intent, &children, outer)?;
//! let frames = resolve(&set, &children, outer)?;
//! ```

mod distribute;
mod intent;
mod stack;

pub use distribute::distribute;
pub use intent::{CrossAlignment, Distribution, LayoutIntent};
pub use stack::compose;
