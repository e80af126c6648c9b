//! Incremental pass cache.
//!
//! The cache keeps the tier partition keyed by a fingerprint of the
//! constraint set, plus the previous pass's inputs and frames. A repeated
//! set reuses the partition; fully repeated inputs return the previous
//! frames directly. The cache belongs to one box tree's resolution context
//! and is not internally synchronized.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use indexmap::IndexMap;
use joist_core::{BoxId, ConstraintSet, Extent, Frame, LayoutBox, Operand};

use crate::solver::TierPartition;

/// Content hash of a constraint set or of a pass's box/extent inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Fingerprint(u64);

fn write_f64<H: Hasher>(state: &mut H, value: f64) {
    state.write_u64(value.to_bits());
}

fn write_opt_f64<H: Hasher>(state: &mut H, value: Option<f64>) {
    match value {
        Some(v) => {
            state.write_u8(1);
            write_f64(state, v);
        }
        None => state.write_u8(0),
    }
}

/// Fingerprint a constraint set's full content.
pub(crate) fn fingerprint_set(set: &ConstraintSet) -> Fingerprint {
    let mut state = DefaultHasher::new();
    state.write_usize(set.len());
    for constraint in set.iter() {
        constraint.id.hash(&mut state);
        constraint.lhs.hash(&mut state);
        constraint.relation.hash(&mut state);
        match constraint.rhs {
            Operand::Attr(attr_ref) => {
                state.write_u8(0);
                attr_ref.hash(&mut state);
            }
            Operand::Constant(value) => {
                state.write_u8(1);
                write_f64(&mut state, value);
            }
        }
        write_f64(&mut state, constraint.multiplier);
        write_f64(&mut state, constraint.constant);
        constraint.priority.hash(&mut state);
    }
    Fingerprint(state.finish())
}

/// Fingerprint the per-pass inputs: boxes (in order) and the outer extent.
pub(crate) fn fingerprint_inputs(boxes: &[LayoutBox], outer: Extent) -> Fingerprint {
    let mut state = DefaultHasher::new();
    write_f64(&mut state, outer.width);
    write_f64(&mut state, outer.height);
    state.write_usize(boxes.len());
    for b in boxes {
        b.id.hash(&mut state);
        write_opt_f64(&mut state, b.intrinsic_width);
        write_opt_f64(&mut state, b.intrinsic_height);
        b.hugging.horizontal.hash(&mut state);
        b.hugging.vertical.hash(&mut state);
        b.resistance.horizontal.hash(&mut state);
        b.resistance.vertical.hash(&mut state);
        state.write_usize(b.constraints.len());
        for id in &b.constraints {
            id.hash(&mut state);
        }
    }
    Fingerprint(state.finish())
}

#[derive(Debug)]
struct CacheEntry {
    set: Fingerprint,
    inputs: Fingerprint,
    partition: TierPartition,
    frames: IndexMap<BoxId, Frame>,
}

/// Cached state from the previous successful pass.
#[derive(Debug, Default)]
pub(crate) struct PassCache {
    entry: Option<CacheEntry>,
}

impl PassCache {
    /// Previous frames, if both the set and the inputs are unchanged.
    pub(crate) fn lookup(
        &self,
        set: Fingerprint,
        inputs: Fingerprint,
    ) -> Option<&IndexMap<BoxId, Frame>> {
        let entry = self.entry.as_ref()?;
        (entry.set == set && entry.inputs == inputs).then_some(&entry.frames)
    }

    /// Take the stored tier partition if the set is unchanged. The entry is
    /// consumed; [`store`](Self::store) rebuilds it after the pass.
    pub(crate) fn take_partition(&mut self, set: Fingerprint) -> Option<TierPartition> {
        if self.entry.as_ref().is_some_and(|entry| entry.set == set) {
            self.entry.take().map(|entry| entry.partition)
        } else {
            None
        }
    }

    /// Record a successful pass.
    pub(crate) fn store(
        &mut self,
        set: Fingerprint,
        inputs: Fingerprint,
        partition: TierPartition,
        frames: IndexMap<BoxId, Frame>,
    ) {
        self.entry = Some(CacheEntry {
            set,
            inputs,
            partition,
            frames,
        });
    }

    /// Drop everything; used after a failed pass.
    pub(crate) fn clear(&mut self) {
        self.entry = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::partition;
    use joist_core::{Anchor, Attribute, Constraint};

    fn width_pin(value: f64) -> ConstraintSet {
        let mut set = ConstraintSet::new();
        set.add(Constraint::equal(
            Anchor::Box(BoxId(1)).attr(Attribute::Width),
            Operand::Constant(value),
        ));
        set
    }

    #[test]
    fn test_set_fingerprint_tracks_content() {
        assert_eq!(fingerprint_set(&width_pin(10.0)), fingerprint_set(&width_pin(10.0)));
        assert_ne!(fingerprint_set(&width_pin(10.0)), fingerprint_set(&width_pin(20.0)));
    }

    #[test]
    fn test_inputs_fingerprint_tracks_intrinsics() {
        let outer = Extent::new(100.0, 100.0);
        let boxes = vec![LayoutBox::new(BoxId(1)).with_intrinsic_width(40.0)];
        let updated = vec![LayoutBox::new(BoxId(1)).with_intrinsic_width(80.0)];

        assert_eq!(
            fingerprint_inputs(&boxes, outer),
            fingerprint_inputs(&boxes.clone(), outer)
        );
        assert_ne!(
            fingerprint_inputs(&boxes, outer),
            fingerprint_inputs(&updated, outer)
        );
        assert_ne!(
            fingerprint_inputs(&boxes, outer),
            fingerprint_inputs(&boxes, Extent::new(100.0, 200.0))
        );
    }

    #[test]
    fn test_partition_survives_input_changes() {
        let set = width_pin(10.0);
        let set_fp = fingerprint_set(&set);
        let inputs_fp = fingerprint_inputs(&[], Extent::new(10.0, 10.0));

        let mut cache = PassCache::default();
        cache.store(set_fp, inputs_fp, partition(&set), IndexMap::new());

        // Different inputs miss the frame cache but keep the partition.
        let other_inputs = fingerprint_inputs(&[], Extent::new(20.0, 10.0));
        assert!(cache.lookup(set_fp, other_inputs).is_none());
        assert!(cache.take_partition(set_fp).is_some());
        assert!(cache.take_partition(set_fp).is_none());
    }

    #[test]
    fn test_changed_set_invalidates_partition() {
        let set = width_pin(10.0);
        let set_fp = fingerprint_set(&set);
        let inputs_fp = fingerprint_inputs(&[], Extent::new(10.0, 10.0));

        let mut cache = PassCache::default();
        cache.store(set_fp, inputs_fp, partition(&set), IndexMap::new());
        assert!(cache.take_partition(fingerprint_set(&width_pin(20.0))).is_none());
    }
}
