//! Layout intent configuration.

use joist_core::Axis;

/// Distribution of children along the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Distribution {
    /// Split the available space evenly, ignoring intrinsic sizes; child
    /// hugging only tie-breaks residual pixels
    FillEqually,
    /// Keep intrinsic sizes, shrinking or growing by priority to fill
    #[default]
    Fill,
    /// Weight children by their intrinsic-size ratio
    FillProportionally,
}

/// Alignment of children on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossAlignment {
    /// Pin the leading cross edge (top for horizontal stacks, left for
    /// vertical ones)
    Leading,
    /// Pin the cross-axis center
    Center,
    /// Pin the trailing cross edge
    Trailing,
    /// Stretch to the full cross extent of the container
    #[default]
    FillCross,
}

/// A stack layout intent: one row or column of boxes.
///
/// Composition expands an intent over an ordered child list into primitive
/// constraints; see [`compose`](crate::compose).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutIntent {
    /// Main axis of the stack
    pub axis: Axis,
    /// Distribution of children on the main axis
    pub distribution: Distribution,
    /// Gap between adjacent children
    pub spacing: f64,
    /// Alignment on the cross axis
    pub alignment: CrossAlignment,
}

impl LayoutIntent {
    /// Create a horizontal stack intent.
    pub fn horizontal() -> Self {
        Self {
            axis: Axis::Horizontal,
            ..Default::default()
        }
    }

    /// Create a vertical stack intent.
    pub fn vertical() -> Self {
        Self {
            axis: Axis::Vertical,
            ..Default::default()
        }
    }

    /// Set the distribution.
    pub fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }

    /// Set the gap between children.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the cross-axis alignment.
    pub fn with_alignment(mut self, alignment: CrossAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}
