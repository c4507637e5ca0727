use super::mp_solver::MpSolver;
use crate::domain::{
    models::{Constraint, Variable},
    value_objects::OptimizationType,
};

/// Handed to the closure of [`MpSolver::constraint`]
pub struct ConstraintBuilder<'a> {
    solver: &'a MpSolver,
    constraint: Constraint,
}

impl<'a> ConstraintBuilder<'a> {
    pub(crate) fn new(solver: &'a MpSolver, constraint: Constraint) -> Self {
        Self { solver, constraint }
    }

    /// Set the coefficient of `variable` in this constraint, replacing any previous one
    pub fn with_coeff(&self, variable: impl Into<Variable>, coefficient: impl Into<f64>) -> &Self {
        self.solver
            .set_coefficient(self.constraint, variable.into(), coefficient.into());
        self
    }

    pub fn constraint(&self) -> Constraint {
        self.constraint
    }
}

/// Accessor for the objective of one solver
#[derive(Clone, Copy)]
pub struct Objective<'a> {
    solver: &'a MpSolver,
}

impl<'a> Objective<'a> {
    pub(crate) fn new(solver: &'a MpSolver) -> Self {
        Self { solver }
    }

    /// Set the coefficient of `variable`, replacing any previous one
    pub fn set_coefficient(&self, variable: Variable, coefficient: f64) -> &Self {
        self.solver.edit_problem(|problem| {
            problem.objective.coefficients.insert(variable, coefficient);
        });
        self
    }

    /// Add to the coefficient of `variable`
    pub fn add_coefficient(&self, variable: Variable, coefficient: f64) -> &Self {
        self.solver.edit_problem(|problem| {
            *problem
                .objective
                .coefficients
                .entry(variable)
                .or_insert(0.0) += coefficient;
        });
        self
    }

    pub fn coefficient(&self, variable: Variable) -> f64 {
        self.solver.with_problem(|problem| {
            problem
                .objective
                .coefficients
                .get(&variable)
                .copied()
                .unwrap_or(0.0)
        })
    }

    pub fn set_offset(&self, offset: f64) -> &Self {
        self.solver
            .edit_problem(|problem| problem.objective.offset = offset);
        self
    }

    pub fn offset(&self) -> f64 {
        self.solver.with_problem(|problem| problem.objective.offset)
    }

    pub fn set_maximization(&self) -> &Self {
        self.set_optimization_direction(true)
    }

    pub fn set_minimization(&self) -> &Self {
        self.set_optimization_direction(false)
    }

    pub fn set_optimization_direction(&self, maximize: bool) -> &Self {
        let direction = if maximize {
            OptimizationType::Maximize
        } else {
            OptimizationType::Minimize
        };
        self.solver
            .edit_problem(|problem| problem.objective.optimization_type = direction);
        self
    }

    pub fn is_maximization(&self) -> bool {
        self.solver
            .with_problem(|problem| problem.objective.is_maximization())
    }

    /// Drop every coefficient and the offset; the direction is kept
    pub fn clear(&self) -> &Self {
        self.solver.edit_problem(|problem| {
            problem.objective.coefficients.clear();
            problem.objective.offset = 0.0;
        });
        self
    }

    /// Objective value of the last solve, 0 when there is none
    pub fn value(&self) -> f64 {
        self.solver.objective_value()
    }
}
