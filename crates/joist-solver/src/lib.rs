//! Priority-layered constraint resolution for joist box layouts.
//!
//! This crate turns a constraint set and a list of boxes into one concrete
//! frame per box.
//!
//! # Architecture
//!
//! 1. **Lowering**: every constraint becomes a linear relation over per-box
//!    origin/extent variables; intrinsic sizes become implicit bounds at
//!    their hugging/compression-resistance priorities
//! 2. **Tier solving**: priority tiers are processed strongest-first;
//!    equalities join a reduced row basis, inequalities become interval
//!    bounds that clamp only when binding
//! 3. **Endgame**: remaining free extents default into their bound
//!    intervals, then frames are extracted in box input order
//!
//! # Example
//!
//! ```ignore
//! use joist_solver::resolve;
//!
//! let frames = resolve(&set, &boxes, Extent::new(320.0, 200.0))?;
//!
//! for (id, frame) in &frames {
//!     println!("{id:?}: {frame:?}");
//! }
//! ```

mod cache;
mod expr;
mod solver;

pub use solver::{resolve, Resolver};
