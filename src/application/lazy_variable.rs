use std::cell::OnceCell;

use super::mp_solver::MpSolver;
use crate::domain::models::{Variable, VariableDef};

/// Variable declaration that only reaches the model when first used.
///
/// Created by [`MpSolver::make_variable`]. The first [`resolve`](Self::resolve)
/// adds one variable named after the label; every later call returns that
/// same variable. A binding that is never resolved leaves the model untouched.
#[derive(Debug)]
pub struct LazyVariable<'a> {
    solver: &'a MpSolver,
    lower_bound: f64,
    upper_bound: f64,
    integer: bool,
    label: String,
    cell: OnceCell<Variable>,
}

impl<'a> LazyVariable<'a> {
    pub(crate) fn new(
        solver: &'a MpSolver,
        lower_bound: f64,
        upper_bound: f64,
        integer: bool,
        label: String,
    ) -> Self {
        Self {
            solver,
            lower_bound,
            upper_bound,
            integer,
            label,
            cell: OnceCell::new(),
        }
    }

    pub fn resolve(&self) -> Variable {
        *self.cell.get_or_init(|| {
            let def = if self.integer {
                VariableDef::integer(self.lower_bound, self.upper_bound, self.label.as_str())
            } else {
                VariableDef::continuous(self.lower_bound, self.upper_bound, self.label.as_str())
            };
            self.solver.add_variable_def(def)
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<&LazyVariable<'_>> for Variable {
    fn from(lazy: &LazyVariable<'_>) -> Self {
        lazy.resolve()
    }
}
