use std::collections::BTreeMap;

use crate::domain::models::Variable;

/// Ordered list of `(variable, coefficient)` contributions.
///
/// Built by explicit composition instead of operators. Anything that converts
/// into a [`Variable`] is accepted, including a
/// [`LazyVariable`](super::LazyVariable), which is resolved on the spot:
///
/// ```
/// use kortools::{create_solver, LinearExpr, SolverId};
///
/// let solver = create_solver(SolverId::Glop, |s| {
///     let x = s.make_num_var(0.0, 1.0, "x");
///     let y = s.make_num_var(0.0, 1.0, "y");
///     // 3x + y
///     let expr = LinearExpr::term(x, 3).add(y);
///     assert_eq!(expr.terms(), &[(x, 3.0), (y, 1.0)]);
/// })
/// .unwrap();
/// assert_eq!(solver.num_variables(), 2);
/// ```
///
/// A variable may appear more than once; its contributions are summed when
/// the expression is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearExpr {
    terms: Vec<(Variable, f64)>,
}

impl LinearExpr {
    pub fn new() -> Self {
        Self::default()
    }

    /// `coefficient * variable`
    pub fn term(variable: impl Into<Variable>, coefficient: impl Into<f64>) -> Self {
        Self {
            terms: vec![(variable.into(), coefficient.into())],
        }
    }

    /// `a + b`
    pub fn sum(a: impl Into<Variable>, b: impl Into<Variable>) -> Self {
        Self {
            terms: vec![(a.into(), 1.0), (b.into(), 1.0)],
        }
    }

    /// Append `variable` with coefficient 1
    pub fn add(self, variable: impl Into<Variable>) -> Self {
        self.add_term(variable, 1.0)
    }

    pub fn add_term(mut self, variable: impl Into<Variable>, coefficient: impl Into<f64>) -> Self {
        self.terms.push((variable.into(), coefficient.into()));
        self
    }

    pub fn terms(&self) -> &[(Variable, f64)] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Per-variable sum of all contributions
    pub fn coefficients(&self) -> BTreeMap<Variable, f64> {
        let mut merged = BTreeMap::new();
        for &(var, coeff) in &self.terms {
            *merged.entry(var).or_insert(0.0) += coeff;
        }
        merged
    }
}

impl FromIterator<(Variable, f64)> for LinearExpr {
    fn from_iter<I: IntoIterator<Item = (Variable, f64)>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for LinearExpr {
    type Item = (Variable, f64);
    type IntoIter = std::vec::IntoIter<(Variable, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

impl<'a> IntoIterator for &'a LinearExpr {
    type Item = &'a (Variable, f64);
    type IntoIter = std::slice::Iter<'a, (Variable, f64)>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars() -> (Variable, Variable) {
        (Variable::new(0), Variable::new(1))
    }

    #[test]
    fn test_term_then_add_keeps_order() {
        let (x, y) = vars();
        let expr = LinearExpr::term(x, 3).add(y);
        assert_eq!(expr.terms(), &[(x, 3.0), (y, 1.0)]);
    }

    #[test]
    fn test_sum_uses_unit_coefficients() {
        let (x, y) = vars();
        assert_eq!(LinearExpr::sum(x, y).terms(), &[(x, 1.0), (y, 1.0)]);
    }

    #[test]
    fn test_duplicates_are_kept_and_merged() {
        let (x, y) = vars();
        let expr = LinearExpr::sum(x, x).add_term(y, 2.5).add_term(x, -0.5);

        assert_eq!(expr.len(), 4);
        let merged = expr.coefficients();
        assert_eq!(merged[&x], 1.5);
        assert_eq!(merged[&y], 2.5);
    }

    #[test]
    fn test_collect_from_pairs() {
        let (x, y) = vars();
        let expr: LinearExpr = [(x, 2.0), (y, 4.0)].into_iter().collect();
        assert_eq!(expr, LinearExpr::term(x, 2.0).add_term(y, 4.0));
        assert!(LinearExpr::new().is_empty());
    }
}
