//! Distribution policies.
//!
//! Each policy is a pure mapping from a child list and the available
//! main-axis extent to per-child target extents. Targets always sum to the
//! content space (the outer extent minus inter-child spacing), so the
//! expanded constraints cannot fight over the main axis.

use joist_core::{Axis, LayoutBox};

use crate::intent::{Distribution, LayoutIntent};

const EPSILON: f64 = 1e-8;

/// Compute per-child main-axis target extents for an intent.
///
/// Deterministic and pure: identical inputs always yield identical
/// targets. Zero children yield an empty list.
pub fn distribute(intent: &LayoutIntent, children: &[LayoutBox], outer_main: f64) -> Vec<f64> {
    if children.is_empty() {
        return Vec::new();
    }
    let spacing_total = intent.spacing * (children.len() - 1) as f64;
    let content = (outer_main - spacing_total).max(0.0);
    match intent.distribution {
        Distribution::FillEqually => fill_equally(children, intent.axis, content),
        Distribution::Fill => fill(children, intent.axis, content),
        Distribution::FillProportionally => fill_proportionally(children, intent.axis, content),
    }
}

/// Even split, ignoring intrinsic sizes. Residual pixels left by the
/// floored base go one per child, lowest hugging first, input order on
/// ties.
fn fill_equally(children: &[LayoutBox], axis: Axis, content: f64) -> Vec<f64> {
    let n = children.len();
    let base = (content / n as f64).floor();
    let mut targets = vec![base; n];

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| (children[i].hugging.along(axis).value(), i));

    let mut residual = content - base * n as f64;
    for &i in &order {
        if residual <= EPSILON {
            break;
        }
        let pixel = residual.min(1.0);
        targets[i] += pixel;
        residual -= pixel;
    }
    targets
}

/// Keep intrinsic extents, then absorb the deficit or surplus by priority.
///
/// A deficit shrinks compression-resistance groups ascending, each
/// proportionally to intrinsic extent and at most to zero before the next
/// group is touched. A surplus grows the lowest-hugging group,
/// proportionally to intrinsic extent (equally when the group's intrinsic
/// sum is zero).
fn fill(children: &[LayoutBox], axis: Axis, content: f64) -> Vec<f64> {
    let n = children.len();
    let mut targets: Vec<f64> = children
        .iter()
        .map(|c| c.intrinsic(axis).unwrap_or(0.0))
        .collect();
    let natural: f64 = targets.iter().sum();

    if natural > content + EPSILON {
        let resistances: Vec<u16> = children
            .iter()
            .map(|c| c.resistance.along(axis).value())
            .collect();
        let mut levels = resistances.clone();
        levels.sort_unstable();
        levels.dedup();

        let mut deficit = natural - content;
        for level in levels {
            if deficit <= EPSILON {
                break;
            }
            let members: Vec<usize> = (0..n).filter(|&i| resistances[i] == level).collect();
            let group_sum: f64 = members.iter().map(|&i| targets[i]).sum();
            if group_sum <= EPSILON {
                continue;
            }
            let shrink = deficit.min(group_sum);
            let mut taken = 0.0;
            for &i in &members {
                let share = shrink * targets[i] / group_sum;
                targets[i] -= share;
                taken += share;
            }
            // Floating-point residue folds into the earliest member.
            if let Some(&first) = members.first() {
                targets[first] = (targets[first] - (shrink - taken)).max(0.0);
            }
            deficit -= shrink;
        }
    } else if natural < content - EPSILON {
        let min_hugging = children
            .iter()
            .map(|c| c.hugging.along(axis).value())
            .min()
            .unwrap_or(0);
        let members: Vec<usize> = (0..n)
            .filter(|&i| children[i].hugging.along(axis).value() == min_hugging)
            .collect();
        let group_sum: f64 = members.iter().map(|&i| targets[i]).sum();

        let surplus = content - natural;
        let mut given = 0.0;
        for &i in &members {
            let share = if group_sum <= EPSILON {
                surplus / members.len() as f64
            } else {
                surplus * targets[i] / group_sum
            };
            targets[i] += share;
            given += share;
        }
        if let Some(&first) = members.first() {
            targets[first] += surplus - given;
        }
    }
    targets
}

/// Weight children by intrinsic-size ratio; equal split when the intrinsic
/// sum is zero.
fn fill_proportionally(children: &[LayoutBox], axis: Axis, content: f64) -> Vec<f64> {
    let weights: Vec<f64> = children
        .iter()
        .map(|c| c.intrinsic(axis).unwrap_or(0.0))
        .collect();
    let total: f64 = weights.iter().sum();
    if total <= EPSILON {
        return vec![content / children.len() as f64; children.len()];
    }
    weights.iter().map(|w| content * w / total).collect()
}
