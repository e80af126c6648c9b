//! Expansion of layout intents into primitive constraints.

use joist_core::{
    Anchor, Attribute, ComposeError, Constraint, ConstraintSet, Extent, LayoutBox, Operand,
};

use crate::distribute::distribute;
use crate::intent::{CrossAlignment, LayoutIntent};

/// Expand a layout intent over an ordered child list into the primitive
/// constraint set consumed by resolution.
///
/// Composition is a pure function of its inputs: the same intent, children
/// and outer extent always produce the same set. Main-axis positions chain
/// from the outer leading edge through the accumulated distribution
/// targets and spacing; cross-axis constraints follow the intent's
/// alignment. Zero children produce an empty set.
pub fn compose(
    intent: &LayoutIntent,
    children: &[LayoutBox],
    outer: Extent,
) -> Result<ConstraintSet, ComposeError> {
    if !intent.spacing.is_finite() || intent.spacing < 0.0 {
        return Err(ComposeError::InvalidSpacing {
            spacing: intent.spacing,
        });
    }
    for (index, child) in children.iter().enumerate() {
        if children[..index].iter().any(|c| c.id == child.id) {
            return Err(ComposeError::DuplicateChild { id: child.id });
        }
    }

    let mut set = ConstraintSet::new();
    if children.is_empty() {
        return Ok(set);
    }

    let main = intent.axis;
    let cross = main.cross();
    let targets = distribute(intent, children, outer.along(main));

    let mut offset = 0.0;
    for (child, &target) in children.iter().zip(&targets) {
        let anchor = Anchor::Box(child.id);

        set.add(
            Constraint::equal(
                anchor.attr(Attribute::leading(main)),
                Operand::Attr(Anchor::Outer.attr(Attribute::leading(main))),
            )
            .with_constant(offset),
        );
        set.add(Constraint::equal(
            anchor.attr(Attribute::extent(main)),
            Operand::Constant(target),
        ));
        offset += target + intent.spacing;

        match intent.alignment {
            CrossAlignment::Leading => {
                set.add(Constraint::equal(
                    anchor.attr(Attribute::leading(cross)),
                    Operand::Attr(Anchor::Outer.attr(Attribute::leading(cross))),
                ));
            }
            CrossAlignment::Center => {
                set.add(Constraint::equal(
                    anchor.attr(Attribute::center(cross)),
                    Operand::Attr(Anchor::Outer.attr(Attribute::center(cross))),
                ));
            }
            CrossAlignment::Trailing => {
                set.add(Constraint::equal(
                    anchor.attr(Attribute::trailing(cross)),
                    Operand::Attr(Anchor::Outer.attr(Attribute::trailing(cross))),
                ));
            }
            CrossAlignment::FillCross => {
                set.add(Constraint::equal(
                    anchor.attr(Attribute::leading(cross)),
                    Operand::Attr(Anchor::Outer.attr(Attribute::leading(cross))),
                ));
                set.add(Constraint::equal(
                    anchor.attr(Attribute::extent(cross)),
                    Operand::Attr(Anchor::Outer.attr(Attribute::extent(cross))),
                ));
            }
        }
    }
    Ok(set)
}
