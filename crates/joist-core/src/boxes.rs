//! Box data model.

use smallvec::SmallVec;

use crate::constraint::ConstraintId;
use crate::types::{Axis, BoxId, Priority};

/// Per-axis priority pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisPriorities {
    pub horizontal: Priority,
    pub vertical: Priority,
}

impl AxisPriorities {
    /// Same priority on both axes.
    pub fn splat(priority: Priority) -> Self {
        Self {
            horizontal: priority,
            vertical: priority,
        }
    }

    /// Get the priority for one axis.
    pub fn along(&self, axis: Axis) -> Priority {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    fn set(&mut self, axis: Axis, priority: Priority) {
        match axis {
            Axis::Horizontal => self.horizontal = priority,
            Axis::Vertical => self.vertical = priority,
        }
    }
}

/// A leaf layout entity: size preferences, priorities, and the explicit
/// constraints it participates in.
///
/// Boxes are pure value data. An intrinsic dimension of `None` means the
/// box has no opinion on that axis and must be sized entirely by
/// constraints. Hugging expresses resistance to growing beyond the
/// intrinsic size, compression resistance to shrinking below it; both
/// default to the conventional 250/750 pair.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutBox {
    pub id: BoxId,
    pub intrinsic_width: Option<f64>,
    pub intrinsic_height: Option<f64>,
    pub hugging: AxisPriorities,
    pub resistance: AxisPriorities,
    /// Explicit constraints this box participates in, in declaration order.
    pub constraints: SmallVec<[ConstraintId; 4]>,
}

impl LayoutBox {
    /// Create a box with no intrinsic size and default priorities.
    pub fn new(id: BoxId) -> Self {
        Self {
            id,
            intrinsic_width: None,
            intrinsic_height: None,
            hugging: AxisPriorities::splat(Priority::DEFAULT_HUGGING),
            resistance: AxisPriorities::splat(Priority::DEFAULT_RESISTANCE),
            constraints: SmallVec::new(),
        }
    }

    /// Set the intrinsic width.
    pub fn with_intrinsic_width(mut self, width: f64) -> Self {
        self.intrinsic_width = Some(width);
        self
    }

    /// Set the intrinsic height.
    pub fn with_intrinsic_height(mut self, height: f64) -> Self {
        self.intrinsic_height = Some(height);
        self
    }

    /// Set both intrinsic dimensions.
    pub fn with_intrinsic_size(self, width: f64, height: f64) -> Self {
        self.with_intrinsic_width(width).with_intrinsic_height(height)
    }

    /// Set the hugging priority on one axis.
    pub fn with_hugging(mut self, axis: Axis, priority: Priority) -> Self {
        self.hugging.set(axis, priority);
        self
    }

    /// Set the compression-resistance priority on one axis.
    pub fn with_resistance(mut self, axis: Axis, priority: Priority) -> Self {
        self.resistance.set(axis, priority);
        self
    }

    /// Record participation in an explicit constraint.
    pub fn add_constraint(&mut self, id: ConstraintId) {
        self.constraints.push(id);
    }

    /// The intrinsic extent along one axis, if any.
    pub fn intrinsic(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::Horizontal => self.intrinsic_width,
            Axis::Vertical => self.intrinsic_height,
        }
    }
}
