//! Linear expressions over solver variables.
//!
//! An expression is `constant + Σ(coefficient × variable)`. Terms are kept
//! in insertion order so that reductions and pivot choices are
//! deterministic across passes.

use indexmap::IndexMap;

/// Tolerance for floating-point comparisons.
pub(crate) const EPSILON: f64 = 1e-8;

/// Near-zero check for floating point values.
pub(crate) fn near_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

/// Index of a solver variable within the pass registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct VarId(pub usize);

/// A linear expression in the form: constant + Σ(coefficient * variable)
#[derive(Debug, Clone, Default)]
pub(crate) struct LinExpr {
    pub constant: f64,
    terms: IndexMap<VarId, f64>,
}

impl LinExpr {
    /// Create a constant expression.
    pub fn from_constant(value: f64) -> Self {
        Self {
            constant: value,
            terms: IndexMap::new(),
        }
    }

    /// Add a term, pruning coefficients that cancel to zero.
    pub fn add_term(&mut self, var: VarId, coefficient: f64) {
        if near_zero(coefficient) {
            return;
        }
        let entry = self.terms.entry(var).or_insert(0.0);
        *entry += coefficient;
        if near_zero(*entry) {
            self.terms.shift_remove(&var);
        }
    }

    /// Add another expression scaled by a multiplier.
    pub fn add_expr(&mut self, other: &LinExpr, multiplier: f64) {
        self.constant += other.constant * multiplier;
        for (&var, &coeff) in &other.terms {
            self.add_term(var, coeff * multiplier);
        }
    }

    /// Multiply the expression by a scalar.
    pub fn scale(&mut self, scalar: f64) {
        self.constant *= scalar;
        for coeff in self.terms.values_mut() {
            *coeff *= scalar;
        }
    }

    /// Get the coefficient for a variable.
    pub fn coefficient(&self, var: VarId) -> f64 {
        self.terms.get(&var).copied().unwrap_or(0.0)
    }

    /// Check if this expression contains the given variable.
    pub fn contains(&self, var: VarId) -> bool {
        self.terms.contains_key(&var)
    }

    /// Replace a variable with an expression.
    pub fn substitute(&mut self, var: VarId, expr: &LinExpr) {
        if let Some(coeff) = self.terms.shift_remove(&var) {
            self.add_expr(expr, coeff);
        }
    }

    /// Whether the expression has no variable terms left.
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// If exactly one variable remains, return it with its coefficient.
    pub fn single_var(&self) -> Option<(VarId, f64)> {
        if self.terms.len() == 1 {
            self.terms.iter().next().map(|(&v, &c)| (v, c))
        } else {
            None
        }
    }

    /// Iterate the terms in insertion order.
    pub fn terms(&self) -> impl Iterator<Item = (VarId, f64)> + '_ {
        self.terms.iter().map(|(&v, &c)| (v, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_cancel() {
        let mut expr = LinExpr::from_constant(5.0);
        expr.add_term(VarId(0), 2.0);
        expr.add_term(VarId(0), -2.0);
        assert!(expr.is_constant());
        assert!((expr.constant - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_substitute() {
        // x + 2y with y := 3 + z  =>  x + 2z + 6
        let mut expr = LinExpr::default();
        expr.add_term(VarId(0), 1.0);
        expr.add_term(VarId(1), 2.0);

        let mut sub = LinExpr::from_constant(3.0);
        sub.add_term(VarId(2), 1.0);

        expr.substitute(VarId(1), &sub);
        assert!((expr.constant - 6.0).abs() < 0.001);
        assert!((expr.coefficient(VarId(0)) - 1.0).abs() < 0.001);
        assert!((expr.coefficient(VarId(2)) - 2.0).abs() < 0.001);
        assert!(!expr.contains(VarId(1)));
    }

    #[test]
    fn test_single_var() {
        let mut expr = LinExpr::from_constant(-10.0);
        expr.add_term(VarId(3), 2.0);
        let (var, coeff) = expr.single_var().unwrap();
        assert_eq!(var, VarId(3));
        assert!((coeff - 2.0).abs() < 0.001);

        expr.add_term(VarId(4), 1.0);
        assert!(expr.single_var().is_none());
    }
}
