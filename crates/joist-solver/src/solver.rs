//! Priority-layered constraint resolution.
//!
//! Resolution lowers every constraint to a linear relation over per-box
//! origin/extent variables, partitions the relations into priority tiers,
//! and processes tiers from strongest to weakest. Within a tier,
//! equalities are committed into a reduced row basis; inequalities become
//! interval bounds on single variables and only clamp when the stronger
//! state leaves them infeasible. A weaker tier can narrow what stronger
//! tiers left open but can never override a committed result.

use std::cmp::Reverse;
use std::collections::BTreeMap;

use indexmap::IndexMap;
use joist_core::{
    Anchor, Attribute, Axis, BoxId, Constraint, ConstraintId, ConstraintSet, Extent, Frame,
    LayoutBox, ModelError, Operand, Priority, Relation, ResolveError,
};

use crate::cache::{fingerprint_inputs, fingerprint_set, PassCache};
use crate::expr::{near_zero, LinExpr, VarId, EPSILON};

/// Where a solver row came from; carried for conflict reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
enum RowSource {
    /// An explicit constraint from the set.
    Constraint(ConstraintId),
    /// An implicit intrinsic-size bound of a box.
    Intrinsic { owner: BoxId, axis: Axis },
    /// The pinned outer container.
    Outer,
    /// Endgame default assignment.
    Default,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VarRole {
    Origin,
    Extent,
}

#[derive(Debug, Clone, Copy)]
struct VarInfo {
    owner: Option<BoxId>,
    axis: Axis,
    role: VarRole,
}

/// The four variables backing one box (or the outer container).
#[derive(Debug, Clone, Copy)]
struct BoxVars {
    x: VarId,
    y: VarId,
    width: VarId,
    height: VarId,
}

/// A constraint lowered to `expr (relation) 0`.
#[derive(Debug, Clone)]
struct Lowered {
    source: RowSource,
    priority: Priority,
    relation: Relation,
    expr: LinExpr,
}

/// Interval bounds accumulated on a single variable.
#[derive(Debug, Clone, Copy, Default)]
struct VarBounds {
    lower: Option<(f64, RowSource, Priority)>,
    upper: Option<(f64, RowSource, Priority)>,
}

/// A committed row: the pivot variable equals `expr` over non-basic
/// variables.
#[derive(Debug, Clone)]
struct BasisRow {
    expr: LinExpr,
    sources: Vec<RowSource>,
}

/// Tier partition of a constraint set: `(priority, constraint indices)`
/// sorted strongest-first. Reusable across passes over the same set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TierPartition {
    tiers: Vec<(u16, Vec<u32>)>,
}

pub(crate) fn partition(set: &ConstraintSet) -> TierPartition {
    let mut grouped: BTreeMap<Reverse<u16>, Vec<u32>> = BTreeMap::new();
    for (index, constraint) in set.iter().enumerate() {
        grouped
            .entry(Reverse(constraint.priority.value()))
            .or_default()
            .push(index as u32);
    }
    TierPartition {
        tiers: grouped
            .into_iter()
            .map(|(Reverse(tier), indices)| (tier, indices))
            .collect(),
    }
}

/// One resolution pass. Holds no state between calls to [`resolve`].
struct Pass {
    vars: Vec<VarInfo>,
    box_vars: IndexMap<BoxId, BoxVars>,
    outer: BoxVars,
    basis: IndexMap<VarId, BasisRow>,
    bounds: Vec<VarBounds>,
    /// Multi-variable inequalities awaiting the endgame.
    pending: Vec<Lowered>,
}

impl Pass {
    fn new(boxes: &[LayoutBox], outer: Extent) -> Result<Self, ResolveError> {
        let mut pass = Pass {
            vars: Vec::with_capacity(4 * (boxes.len() + 1)),
            box_vars: IndexMap::with_capacity(boxes.len()),
            outer: BoxVars {
                x: VarId(0),
                y: VarId(1),
                width: VarId(2),
                height: VarId(3),
            },
            basis: IndexMap::new(),
            bounds: Vec::new(),
            pending: Vec::new(),
        };

        pass.outer = pass.register(None);
        for b in boxes {
            if pass.box_vars.contains_key(&b.id) {
                return Err(ModelError::DuplicateBox { id: b.id }.into());
            }
            let vars = pass.register(Some(b.id));
            pass.box_vars.insert(b.id, vars);
        }

        // The outer container is pinned to (0, 0, width, height).
        let outer_vars = pass.outer;
        pass.commit_value(outer_vars.x, 0.0, vec![RowSource::Outer]);
        pass.commit_value(outer_vars.y, 0.0, vec![RowSource::Outer]);
        pass.commit_value(outer_vars.width, outer.width, vec![RowSource::Outer]);
        pass.commit_value(outer_vars.height, outer.height, vec![RowSource::Outer]);

        Ok(pass)
    }

    fn register(&mut self, owner: Option<BoxId>) -> BoxVars {
        let mut new_var = |axis, role| {
            let id = VarId(self.vars.len());
            self.vars.push(VarInfo { owner, axis, role });
            self.bounds.push(VarBounds::default());
            id
        };
        BoxVars {
            x: new_var(Axis::Horizontal, VarRole::Origin),
            y: new_var(Axis::Vertical, VarRole::Origin),
            width: new_var(Axis::Horizontal, VarRole::Extent),
            height: new_var(Axis::Vertical, VarRole::Extent),
        }
    }

    fn anchor_vars(&self, anchor: Anchor, source: RowSource) -> Result<BoxVars, ResolveError> {
        match anchor {
            Anchor::Outer => Ok(self.outer),
            Anchor::Box(id) => self.box_vars.get(&id).copied().ok_or_else(|| {
                let constraint = match source {
                    RowSource::Constraint(cid) => cid,
                    _ => ConstraintId(0),
                };
                ModelError::DanglingReference {
                    constraint,
                    anchor: id,
                }
                .into()
            }),
        }
    }

    /// Express an attribute as a linear form over its box's variables.
    fn attr_expr(&self, vars: BoxVars, attribute: Attribute) -> LinExpr {
        let mut expr = LinExpr::default();
        match attribute {
            Attribute::Left => expr.add_term(vars.x, 1.0),
            Attribute::Right => {
                expr.add_term(vars.x, 1.0);
                expr.add_term(vars.width, 1.0);
            }
            Attribute::Width => expr.add_term(vars.width, 1.0),
            Attribute::CenterX => {
                expr.add_term(vars.x, 1.0);
                expr.add_term(vars.width, 0.5);
            }
            Attribute::Top => expr.add_term(vars.y, 1.0),
            Attribute::Bottom => {
                expr.add_term(vars.y, 1.0);
                expr.add_term(vars.height, 1.0);
            }
            Attribute::Height => expr.add_term(vars.height, 1.0),
            Attribute::CenterY => {
                expr.add_term(vars.y, 1.0);
                expr.add_term(vars.height, 0.5);
            }
        }
        expr
    }

    /// Lower an explicit constraint to `expr (relation) 0`.
    fn lower(&self, constraint: &Constraint) -> Result<Lowered, ResolveError> {
        let source = RowSource::Constraint(constraint.id);
        let lhs_vars = self.anchor_vars(constraint.lhs.anchor, source)?;
        let mut expr = self.attr_expr(lhs_vars, constraint.lhs.attribute);

        match constraint.rhs {
            Operand::Attr(attr_ref) => {
                let rhs_vars = self.anchor_vars(attr_ref.anchor, source)?;
                let rhs_expr = self.attr_expr(rhs_vars, attr_ref.attribute);
                expr.add_expr(&rhs_expr, -constraint.multiplier);
                expr.constant -= constraint.constant;
            }
            Operand::Constant(value) => {
                expr.constant -= constraint.multiplier * value + constraint.constant;
            }
        }

        Ok(Lowered {
            source,
            priority: constraint.priority,
            relation: constraint.relation,
            expr,
        })
    }

    /// Reduce an expression against the committed basis, collecting the
    /// sources of every row that participated.
    fn reduce(&self, expr: &LinExpr) -> (LinExpr, Vec<RowSource>) {
        let mut out = expr.clone();
        let mut used = Vec::new();
        for (&pivot, row) in &self.basis {
            if out.contains(pivot) {
                out.substitute(pivot, &row.expr);
                for source in &row.sources {
                    if !used.contains(source) {
                        used.push(*source);
                    }
                }
            }
        }
        (out, used)
    }

    /// Commit `pivot = row` and eliminate the pivot everywhere.
    fn commit_row(&mut self, pivot: VarId, row: LinExpr, sources: Vec<RowSource>) {
        for existing in self.basis.values_mut() {
            if existing.expr.contains(pivot) {
                existing.expr.substitute(pivot, &row);
                for source in &sources {
                    if !existing.sources.contains(source) {
                        existing.sources.push(*source);
                    }
                }
            }
        }
        self.basis.insert(pivot, BasisRow { expr: row, sources });
    }

    fn commit_value(&mut self, var: VarId, value: f64, sources: Vec<RowSource>) {
        self.commit_row(var, LinExpr::from_constant(value), sources);
    }

    /// Clamp a candidate value into the variable's bound interval,
    /// reporting the violated side if any.
    fn clamp_to_bounds(&self, var: VarId, natural: f64) -> (f64, Option<RowSource>) {
        let bounds = self.bounds[var.0];
        if let Some((lo, source, _)) = bounds.lower {
            if natural < lo - EPSILON {
                return (lo, Some(source));
            }
        }
        if let Some((hi, source, _)) = bounds.upper {
            if natural > hi + EPSILON {
                return (hi, Some(source));
            }
        }
        (natural, None)
    }

    /// Pick a basic variable for a multi-variable row. Prefer a variable
    /// without interval bounds so the bounds stay enforceable on the
    /// remaining free variables.
    fn choose_pivot(&self, expr: &LinExpr) -> Option<VarId> {
        for (var, _) in expr.terms() {
            let bounds = self.bounds[var.0];
            if bounds.lower.is_none() && bounds.upper.is_none() {
                return Some(var);
            }
        }
        expr.terms().next().map(|(var, _)| var)
    }

    fn conflict(&self, primary: RowSource, others: &[RowSource]) -> ResolveError {
        let mut conflicting = Vec::new();
        for source in std::iter::once(&primary).chain(others) {
            if let RowSource::Constraint(id) = source {
                if !conflicting.contains(id) {
                    conflicting.push(*id);
                }
            }
        }
        ResolveError::OverconstrainedLayout { conflicting }
    }

    fn apply_equality(&mut self, lowered: &Lowered) -> Result<(), ResolveError> {
        let (expr, mut used) = self.reduce(&lowered.expr);

        if expr.is_constant() {
            if near_zero(expr.constant) {
                return Ok(()); // redundant
            }
            if lowered.priority.is_required() {
                return Err(self.conflict(lowered.source, &used));
            }
            return Ok(()); // dominated by stronger tiers
        }

        if let Some((var, coeff)) = expr.single_var() {
            let natural = -expr.constant / coeff;
            let (value, violated) = self.clamp_to_bounds(var, natural);
            if let Some(bound_source) = violated {
                if lowered.priority.is_required() {
                    used.push(bound_source);
                    return Err(self.conflict(lowered.source, &used));
                }
                used.push(bound_source);
            }
            used.push(lowered.source);
            self.commit_value(var, value, used);
            return Ok(());
        }

        let Some(pivot) = self.choose_pivot(&expr) else {
            return Ok(());
        };
        let coeff = expr.coefficient(pivot);
        let mut row = expr;
        row.add_term(pivot, -coeff);
        row.scale(-1.0 / coeff);
        used.push(lowered.source);
        self.commit_row(pivot, row, used);
        Ok(())
    }

    fn apply_inequality(&mut self, lowered: &Lowered) -> Result<(), ResolveError> {
        // Normalize to expr <= 0.
        let mut normalized = lowered.expr.clone();
        if lowered.relation == Relation::GreaterOrEqual {
            normalized.scale(-1.0);
        }

        let (expr, used) = self.reduce(&normalized);
        if expr.is_constant() {
            if expr.constant <= EPSILON {
                return Ok(()); // already satisfied
            }
            if lowered.priority.is_required() {
                return Err(self.conflict(lowered.source, &used));
            }
            return Ok(()); // dominated
        }

        if let Some((var, coeff)) = expr.single_var() {
            let limit = -expr.constant / coeff;
            if coeff > 0.0 {
                self.merge_upper(var, limit, lowered.source, lowered.priority)
            } else {
                self.merge_lower(var, limit, lowered.source, lowered.priority)
            }
        } else {
            self.pending.push(Lowered {
                source: lowered.source,
                priority: lowered.priority,
                relation: Relation::LessOrEqual,
                expr: normalized,
            });
            Ok(())
        }
    }

    fn merge_upper(
        &mut self,
        var: VarId,
        value: f64,
        source: RowSource,
        priority: Priority,
    ) -> Result<(), ResolveError> {
        if let Some((lo, lo_source, lo_priority)) = self.bounds[var.0].lower {
            if value < lo - EPSILON {
                if priority.is_required() && lo_priority.is_required() {
                    return Err(self.conflict(source, &[lo_source]));
                }
                // The weaker bound clamps to the nearest feasible value.
                self.commit_value(var, lo, vec![lo_source, source]);
                return Ok(());
            }
        }
        match self.bounds[var.0].upper {
            Some((hi, _, _)) if value >= hi => {}
            _ => self.bounds[var.0].upper = Some((value, source, priority)),
        }
        Ok(())
    }

    fn merge_lower(
        &mut self,
        var: VarId,
        value: f64,
        source: RowSource,
        priority: Priority,
    ) -> Result<(), ResolveError> {
        if let Some((hi, hi_source, hi_priority)) = self.bounds[var.0].upper {
            if value > hi + EPSILON {
                if priority.is_required() && hi_priority.is_required() {
                    return Err(self.conflict(source, &[hi_source]));
                }
                self.commit_value(var, hi, vec![hi_source, source]);
                return Ok(());
            }
        }
        match self.bounds[var.0].lower {
            Some((lo, _, _)) if value <= lo => {}
            _ => self.bounds[var.0].lower = Some((value, source, priority)),
        }
        Ok(())
    }

    /// Re-reduce pending inequalities until no more resolve to ground
    /// facts or single-variable bounds.
    fn drain_pending(&mut self) -> Result<(), ResolveError> {
        loop {
            let mut progress = false;
            let mut remaining = Vec::new();
            let pending = std::mem::take(&mut self.pending);
            for lowered in pending {
                let (expr, used) = self.reduce(&lowered.expr);
                if expr.is_constant() {
                    if expr.constant > EPSILON && lowered.priority.is_required() {
                        return Err(self.conflict(lowered.source, &used));
                    }
                    progress = true;
                } else if let Some((var, coeff)) = expr.single_var() {
                    let limit = -expr.constant / coeff;
                    if coeff > 0.0 {
                        self.merge_upper(var, limit, lowered.source, lowered.priority)?;
                    } else {
                        self.merge_lower(var, limit, lowered.source, lowered.priority)?;
                    }
                    progress = true;
                } else {
                    remaining.push(lowered);
                }
            }
            self.pending = remaining;
            if !progress || self.pending.is_empty() {
                return Ok(());
            }
        }
    }

    /// Resolve everything the tiers left open.
    fn endgame(&mut self) -> Result<(), ResolveError> {
        self.drain_pending()?;

        // An origin squeezed to a single point by opposing bounds is
        // determined even though no equality named it.
        for index in 0..self.vars.len() {
            let var = VarId(index);
            if self.vars[index].role != VarRole::Origin || self.basis.contains_key(&var) {
                continue;
            }
            let bounds = self.bounds[index];
            if let (Some((lo, lo_source, _)), Some((hi, hi_source, _))) =
                (bounds.lower, bounds.upper)
            {
                if (hi - lo).abs() < EPSILON {
                    self.commit_value(var, lo, vec![lo_source, hi_source]);
                    self.drain_pending()?;
                }
            }
        }

        // Extents that nothing determined default to zero, clamped into
        // whatever interval their bounds left.
        for index in 0..self.vars.len() {
            let var = VarId(index);
            if self.vars[index].role != VarRole::Extent || self.basis.contains_key(&var) {
                continue;
            }
            let (value, violated) = self.clamp_to_bounds(var, 0.0);
            let mut sources = vec![RowSource::Default];
            if let Some(bound_source) = violated {
                sources.push(bound_source);
            }
            self.commit_value(var, value, sources);
            self.drain_pending()?;
        }

        Ok(())
    }

    fn value_of(&self, var: VarId) -> Option<f64> {
        let row = self.basis.get(&var)?;
        row.expr.is_constant().then_some(row.expr.constant)
    }

    fn extract(&self) -> Result<IndexMap<BoxId, Frame>, ResolveError> {
        // After the endgame every extent is basic; anything still free is
        // an origin nothing ever bound.
        for (index, info) in self.vars.iter().enumerate() {
            if !self.basis.contains_key(&VarId(index)) {
                if let Some(owner) = info.owner {
                    return Err(ResolveError::UnderconstrainedLayout {
                        id: owner,
                        axis: info.axis,
                    });
                }
            }
        }

        let mut frames = IndexMap::with_capacity(self.box_vars.len());
        for (&id, vars) in &self.box_vars {
            frames.insert(
                id,
                Frame::new(
                    self.value_of(vars.x).unwrap_or(0.0),
                    self.value_of(vars.y).unwrap_or(0.0),
                    self.value_of(vars.width).unwrap_or(0.0),
                    self.value_of(vars.height).unwrap_or(0.0),
                ),
            );
        }
        Ok(frames)
    }
}

/// Implicit intrinsic-size bounds, grouped by priority tier.
fn intrinsic_tiers(
    pass: &Pass,
    boxes: &[LayoutBox],
) -> BTreeMap<Reverse<u16>, Vec<Lowered>> {
    let mut tiers: BTreeMap<Reverse<u16>, Vec<Lowered>> = BTreeMap::new();
    for b in boxes {
        let Some(&vars) = pass.box_vars.get(&b.id) else {
            continue;
        };
        for axis in [Axis::Horizontal, Axis::Vertical] {
            let Some(size) = b.intrinsic(axis) else {
                continue;
            };
            let extent_var = match axis {
                Axis::Horizontal => vars.width,
                Axis::Vertical => vars.height,
            };
            let mut expr = LinExpr::from_constant(-size);
            expr.add_term(extent_var, 1.0);
            let source = RowSource::Intrinsic { owner: b.id, axis };

            // size >= intrinsic at the compression-resistance tier,
            // size <= intrinsic at the hugging tier.
            tiers
                .entry(Reverse(b.resistance.along(axis).value()))
                .or_default()
                .push(Lowered {
                    source,
                    priority: b.resistance.along(axis),
                    relation: Relation::GreaterOrEqual,
                    expr: expr.clone(),
                });
            tiers
                .entry(Reverse(b.hugging.along(axis).value()))
                .or_default()
                .push(Lowered {
                    source,
                    priority: b.hugging.along(axis),
                    relation: Relation::LessOrEqual,
                    expr,
                });
        }
    }
    tiers
}

pub(crate) fn run_pass(
    set: &ConstraintSet,
    boxes: &[LayoutBox],
    outer: Extent,
    tiers: &TierPartition,
) -> Result<IndexMap<BoxId, Frame>, ResolveError> {
    set.validate(boxes).map_err(ResolveError::Model)?;

    let mut pass = Pass::new(boxes, outer)?;

    let mut lowered = Vec::with_capacity(set.len());
    for constraint in set.iter() {
        lowered.push(pass.lower(constraint)?);
    }
    let implicit = intrinsic_tiers(&pass, boxes);

    // Merge the explicit and implicit tier values, strongest first.
    let mut tier_values: Vec<u16> = tiers.tiers.iter().map(|(value, _)| *value).collect();
    tier_values.extend(implicit.keys().map(|reversed| reversed.0));
    tier_values.sort_unstable_by(|a, b| b.cmp(a));
    tier_values.dedup();

    for tier in tier_values {
        if let Some((_, indices)) = tiers.tiers.iter().find(|(value, _)| *value == tier) {
            // Equalities first, then inequalities, both in input order.
            for &index in indices {
                let entry = &lowered[index as usize];
                if entry.relation == Relation::Equal {
                    pass.apply_equality(entry)?;
                }
            }
            for &index in indices {
                let entry = &lowered[index as usize];
                if entry.relation != Relation::Equal {
                    pass.apply_inequality(entry)?;
                }
            }
        }
        if let Some(entries) = implicit.get(&Reverse(tier)) {
            for entry in entries {
                pass.apply_inequality(entry)?;
            }
        }
        pass.drain_pending()?;
    }

    pass.endgame()?;
    pass.extract()
}

/// Resolve a constraint set against a set of boxes within an outer extent.
///
/// Returns one frame per box, in box input order. Resolution is
/// all-or-nothing: on error no frame is produced for any box.
pub fn resolve(
    set: &ConstraintSet,
    boxes: &[LayoutBox],
    outer: Extent,
) -> Result<IndexMap<BoxId, Frame>, ResolveError> {
    let tiers = partition(set);
    run_pass(set, boxes, outer, &tiers)
}

/// A reusable resolution context.
///
/// A plain resolver is stateless between calls. A caching resolver keeps
/// the tier partition and the previous pass's frames, reusing them when
/// inputs repeat; cached and uncached passes produce identical frames for
/// identical inputs. The cache belongs to one box tree's resolution
/// context and is not internally synchronized.
#[derive(Debug, Default)]
pub struct Resolver {
    cache: Option<PassCache>,
}

impl Resolver {
    /// A resolver without an incremental cache.
    pub fn new() -> Self {
        Self { cache: None }
    }

    /// A resolver that caches the tier partition and last frames.
    pub fn with_cache() -> Self {
        Self {
            cache: Some(PassCache::default()),
        }
    }

    /// Resolve one pass, consulting the cache if enabled.
    pub fn resolve(
        &mut self,
        set: &ConstraintSet,
        boxes: &[LayoutBox],
        outer: Extent,
    ) -> Result<IndexMap<BoxId, Frame>, ResolveError> {
        let Some(cache) = &mut self.cache else {
            return resolve(set, boxes, outer);
        };

        let set_fingerprint = fingerprint_set(set);
        let inputs_fingerprint = fingerprint_inputs(boxes, outer);
        if let Some(frames) = cache.lookup(set_fingerprint, inputs_fingerprint) {
            return Ok(frames.clone());
        }

        let tiers = cache
            .take_partition(set_fingerprint)
            .unwrap_or_else(|| partition(set));
        match run_pass(set, boxes, outer, &tiers) {
            Ok(frames) => {
                cache.store(set_fingerprint, inputs_fingerprint, tiers, frames.clone());
                Ok(frames)
            }
            Err(error) => {
                cache.clear();
                Err(error)
            }
        }
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use joist_core::AxisPriorities;
    use proptest::prelude::*;

    fn arb_boxes() -> impl Strategy<Value = Vec<LayoutBox>> {
        proptest::collection::vec(
            (
                proptest::option::of(0.0f64..200.0),
                proptest::option::of(0.0f64..200.0),
                1u16..1000,
                1u16..1000,
            ),
            1..6,
        )
        .prop_map(|params| {
            params
                .into_iter()
                .enumerate()
                .map(|(index, (width, height, hugging, resistance))| {
                    let mut b = LayoutBox::new(BoxId(index as u64));
                    b.intrinsic_width = width;
                    b.intrinsic_height = height;
                    b.hugging = AxisPriorities::splat(Priority::new(hugging).unwrap());
                    b.resistance = AxisPriorities::splat(Priority::new(resistance).unwrap());
                    b
                })
                .collect()
        })
    }

    /// Two boxes fight over a fixed 100 points; returns the first box's
    /// resolved width for a given compression resistance.
    fn squeezed_width(resistance: u16, rival: u16) -> f64 {
        let a = BoxId(1);
        let b = BoxId(2);
        let boxes = vec![
            LayoutBox::new(a)
                .with_intrinsic_width(80.0)
                .with_intrinsic_height(10.0)
                .with_resistance(Axis::Horizontal, Priority::new(resistance).unwrap()),
            LayoutBox::new(b)
                .with_intrinsic_width(80.0)
                .with_intrinsic_height(10.0)
                .with_resistance(Axis::Horizontal, Priority::new(rival).unwrap()),
        ];
        let mut set = ConstraintSet::new();
        set.add(
            Constraint::equal(
                Anchor::Box(a).attr(Attribute::Width),
                Operand::Attr(Anchor::Box(b).attr(Attribute::Width)),
            )
            .with_multiplier(-1.0)
            .with_constant(100.0),
        );
        for (id, top) in [(a, 0.0), (b, 20.0)] {
            set.add(Constraint::equal(
                Anchor::Box(id).attr(Attribute::Left),
                Operand::Constant(0.0),
            ));
            set.add(Constraint::equal(
                Anchor::Box(id).attr(Attribute::Top),
                Operand::Constant(top),
            ));
        }
        resolve(&set, &boxes, Extent::new(200.0, 100.0)).unwrap()[&a].width
    }

    proptest! {
        #[test]
        fn resolution_is_deterministic(
            boxes in arb_boxes(),
            width in 10.0f64..500.0,
            height in 10.0f64..500.0,
        ) {
            let mut set = ConstraintSet::new();
            for (index, b) in boxes.iter().enumerate() {
                set.add(Constraint::equal(
                    Anchor::Box(b.id).attr(Attribute::Left),
                    Operand::Constant(index as f64 * 10.0),
                ));
                set.add(Constraint::equal(
                    Anchor::Box(b.id).attr(Attribute::Top),
                    Operand::Constant(index as f64 * 10.0),
                ));
            }

            let outer = Extent::new(width, height);
            let first = resolve(&set, &boxes, outer).unwrap();
            let second = resolve(&set, &boxes, outer).unwrap();
            prop_assert_eq!(&first, &second);

            let mut cached = Resolver::with_cache();
            let third = cached.resolve(&set, &boxes, outer).unwrap();
            let fourth = cached.resolve(&set, &boxes, outer).unwrap();
            prop_assert_eq!(&first, &third);
            prop_assert_eq!(&third, &fourth);
        }

        #[test]
        fn raising_resistance_never_shrinks(p in 1u16..999, rival in 1u16..999) {
            prop_assert!(squeezed_width(p + 1, rival) >= squeezed_width(p, rival) - 0.001);
        }
    }
}
