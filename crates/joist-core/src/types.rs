//! Core value types for the joist layout solver.

use crate::errors::ModelError;

/// Unique identifier for a box within one resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxId(pub u64);

impl From<u64> for BoxId {
    fn from(id: u64) -> Self {
        BoxId(id)
    }
}

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Left-to-right
    #[default]
    Horizontal,
    /// Top-to-bottom
    Vertical,
}

impl Axis {
    /// The other axis.
    pub fn cross(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// A width/height pair, used as the outer extent of a resolution pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extent {
    pub width: f64,
    pub height: f64,
}

impl Extent {
    /// Create an extent from width and height.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Get the extent along one axis.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Numeric constraint strength in the range `0..=1000`.
///
/// Higher values strictly dominate lower ones during conflict resolution;
/// 1000 marks a required constraint that must always be satisfiable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u16", into = "u16")
)]
pub struct Priority(u16);

impl Priority {
    /// Required strength; conflicts at this level are fatal.
    pub const REQUIRED: Priority = Priority(1000);
    /// Default resistance to growing beyond intrinsic size.
    pub const DEFAULT_HUGGING: Priority = Priority(250);
    /// Default resistance to shrinking below intrinsic size.
    pub const DEFAULT_RESISTANCE: Priority = Priority(750);

    /// Create a priority, rejecting values outside `0..=1000`.
    pub fn new(value: u16) -> Result<Self, ModelError> {
        if value > Self::REQUIRED.0 {
            return Err(ModelError::InvalidPriority {
                value: value as u32,
            });
        }
        Ok(Self(value))
    }

    /// The raw numeric strength.
    pub fn value(self) -> u16 {
        self.0
    }

    /// Whether this is the required level.
    pub fn is_required(self) -> bool {
        self.0 == Self::REQUIRED.0
    }
}

impl Default for Priority {
    fn default() -> Self {
        Self::REQUIRED
    }
}

impl TryFrom<u16> for Priority {
    type Error = ModelError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Priority::new(value)
    }
}

impl From<Priority> for u16 {
    fn from(priority: Priority) -> u16 {
        priority.0
    }
}
