//! Constraints and constraint sets.
//!
//! A constraint is a linear relation between two box attributes (or an
//! attribute and a constant), tagged with a priority. Constraint sets are
//! value data assembled before each resolution pass; they hold no solver
//! state.

use crate::boxes::LayoutBox;
use crate::errors::ModelError;
use crate::types::{Axis, BoxId, Priority};

/// Identifier of a constraint within its set.
///
/// Ids are assigned by [`ConstraintSet::add`] in insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintId(pub u32);

/// A box attribute that constraints can reference.
///
/// Each attribute is a linear form over a box's origin and extent on one
/// axis: `right = left + width`, `center_x = left + width / 2`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Attribute {
    Left,
    Right,
    Top,
    Bottom,
    Width,
    Height,
    CenterX,
    CenterY,
}

impl Attribute {
    /// The axis this attribute lives on.
    pub fn axis(self) -> Axis {
        match self {
            Attribute::Left | Attribute::Right | Attribute::Width | Attribute::CenterX => {
                Axis::Horizontal
            }
            Attribute::Top | Attribute::Bottom | Attribute::Height | Attribute::CenterY => {
                Axis::Vertical
            }
        }
    }

    /// The leading-edge attribute for an axis.
    pub fn leading(axis: Axis) -> Attribute {
        match axis {
            Axis::Horizontal => Attribute::Left,
            Axis::Vertical => Attribute::Top,
        }
    }

    /// The trailing-edge attribute for an axis.
    pub fn trailing(axis: Axis) -> Attribute {
        match axis {
            Axis::Horizontal => Attribute::Right,
            Axis::Vertical => Attribute::Bottom,
        }
    }

    /// The extent attribute for an axis.
    pub fn extent(axis: Axis) -> Attribute {
        match axis {
            Axis::Horizontal => Attribute::Width,
            Axis::Vertical => Attribute::Height,
        }
    }

    /// The center attribute for an axis.
    pub fn center(axis: Axis) -> Attribute {
        match axis {
            Axis::Horizontal => Attribute::CenterX,
            Axis::Vertical => Attribute::CenterY,
        }
    }
}

/// What a constraint operand is anchored to.
///
/// `Outer` refers to the reserved outer container of the pass, pinned to
/// `(0, 0, outer.width, outer.height)` during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Anchor {
    /// The outer container of the resolution pass.
    Outer,
    /// An ordinary box.
    Box(BoxId),
}

impl Anchor {
    /// Build an attribute reference on this anchor.
    pub fn attr(self, attribute: Attribute) -> AttrRef {
        AttrRef {
            anchor: self,
            attribute,
        }
    }
}

/// An `(anchor, attribute)` pair used as a constraint operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttrRef {
    pub anchor: Anchor,
    pub attribute: Attribute,
}

/// Right-hand side of a constraint: another attribute or a constant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operand {
    Attr(AttrRef),
    Constant(f64),
}

/// Relation between the two sides of a constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Relation {
    Equal,
    LessOrEqual,
    GreaterOrEqual,
}

/// A single linear layout constraint.
///
/// Reads as `lhs <relation> multiplier * rhs + constant`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Constraint {
    /// Assigned by the owning set; zero until added.
    pub id: ConstraintId,
    pub lhs: AttrRef,
    pub relation: Relation,
    pub rhs: Operand,
    pub multiplier: f64,
    pub constant: f64,
    pub priority: Priority,
}

impl Constraint {
    /// Create a constraint with multiplier 1 and constant 0.
    pub fn new(lhs: AttrRef, relation: Relation, rhs: Operand, priority: Priority) -> Self {
        Self {
            id: ConstraintId(0),
            lhs,
            relation,
            rhs,
            multiplier: 1.0,
            constant: 0.0,
            priority,
        }
    }

    /// Create a required equality `lhs == rhs`.
    pub fn equal(lhs: AttrRef, rhs: Operand) -> Self {
        Self::new(lhs, Relation::Equal, rhs, Priority::REQUIRED)
    }

    /// Set the multiplier applied to the right-hand side.
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }

    /// Set the constant added to the right-hand side.
    pub fn with_constant(mut self, constant: f64) -> Self {
        self.constant = constant;
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Iterate the box ids this constraint references.
    pub fn referenced_boxes(&self) -> impl Iterator<Item = BoxId> {
        let lhs = match self.lhs.anchor {
            Anchor::Box(id) => Some(id),
            Anchor::Outer => None,
        };
        let rhs = match self.rhs {
            Operand::Attr(AttrRef {
                anchor: Anchor::Box(id),
                ..
            }) => Some(id),
            _ => None,
        };
        lhs.into_iter().chain(rhs)
    }
}

/// An ordered collection of constraints.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a constraint, stamping its id. Insertion order is preserved and
    /// used for tie-breaking during resolution.
    pub fn add(&mut self, mut constraint: Constraint) -> ConstraintId {
        let id = ConstraintId(self.constraints.len() as u32);
        constraint.id = id;
        self.constraints.push(constraint);
        id
    }

    /// Look up a constraint by id.
    pub fn get(&self, id: ConstraintId) -> Option<&Constraint> {
        self.constraints.get(id.0 as usize)
    }

    /// Iterate constraints in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Constraint> {
        self.constraints.iter()
    }

    /// Number of constraints in the set.
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Check the set against the boxes participating in a pass.
    ///
    /// Rejects constraints naming a box that is not part of the pass.
    /// Priorities are validated at construction, so only references can be
    /// invalid here.
    pub fn validate(&self, boxes: &[LayoutBox]) -> Result<(), ModelError> {
        for constraint in &self.constraints {
            for id in constraint.referenced_boxes() {
                if !boxes.iter().any(|b| b.id == id) {
                    return Err(ModelError::DanglingReference {
                        constraint: constraint.id,
                        anchor: id,
                    });
                }
            }
        }
        Ok(())
    }
}
