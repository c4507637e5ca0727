// Domain service interface for solving optimization problems
// Every engine adapter implements it; the solver handle only talks to this trait

use super::models::{OptimizationProblem, Solution, SolverConfig};
use super::value_objects::SolverId;

/// Error types for the solver layer
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Unsupported backend: {0}")]
    UnsupportedBackend(SolverId),

    #[error("Unknown solver identifier: {0}")]
    UnknownSolverId(String),

    #[error("{kind} not found: {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for optimization engines
///
/// The model handed to [`solve`](SolverService::solve) has already been
/// validated and, for linear-only identifiers, relaxed.
pub trait SolverService: Send + Sync {
    /// Solve an optimization problem
    fn solve(&self, problem: &OptimizationProblem, config: &SolverConfig) -> Result<Solution>;

    /// Validate a problem without solving it
    fn validate(&self, problem: &OptimizationProblem) -> Result<()> {
        let mut errors = Vec::new();

        for (i, var) in problem.variables.iter().enumerate() {
            if var.lower_bound.is_nan() || var.upper_bound.is_nan() {
                errors.push(format!("Variable {} '{}' has a NaN bound", i, var.name));
            } else if var.lower_bound > var.upper_bound {
                errors.push(format!(
                    "Variable {} '{}' has lower bound ({}) > upper bound ({})",
                    i, var.name, var.lower_bound, var.upper_bound
                ));
            }
        }

        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.lower_bound.is_nan() || constraint.upper_bound.is_nan() {
                errors.push(format!("Constraint {} '{}' has a NaN bound", i, constraint.name));
            } else if constraint.lower_bound > constraint.upper_bound {
                errors.push(format!(
                    "Constraint {} '{}' has lower bound ({}) > upper bound ({})",
                    i, constraint.name, constraint.lower_bound, constraint.upper_bound
                ));
            }
            if let Some(var) = constraint
                .coefficients
                .keys()
                .find(|var| var.index() >= problem.variables.len())
            {
                errors.push(format!(
                    "Constraint {} '{}' refers to unknown variable {}",
                    i,
                    constraint.name,
                    var.index()
                ));
            }
            if constraint.coefficients.values().any(|c| !c.is_finite()) {
                errors.push(format!(
                    "Constraint {} '{}' has a non-finite coefficient",
                    i, constraint.name
                ));
            }
        }

        let objective = &problem.objective;
        if let Some(var) = objective
            .coefficients
            .keys()
            .find(|var| var.index() >= problem.variables.len())
        {
            errors.push(format!("Objective refers to unknown variable {}", var.index()));
        }
        if objective.coefficients.values().any(|c| !c.is_finite()) || !objective.offset.is_finite()
        {
            errors.push("Objective has a non-finite coefficient or offset".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;

    /// Check if this solver supports mixed-integer programming
    fn supports_mip(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ConstraintDef, Variable, VariableDef};

    struct NullSolver;

    impl SolverService for NullSolver {
        fn solve(&self, _: &OptimizationProblem, _: &SolverConfig) -> Result<Solution> {
            Err(SolverError::ExecutionFailed("not implemented".to_string()))
        }

        fn name(&self) -> &str {
            "null"
        }

        fn supports_mip(&self) -> bool {
            false
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_problem() {
        let mut problem = OptimizationProblem::new();
        let x = problem.add_variable(VariableDef::continuous(0.0, 1.0, "x"));
        let mut row = ConstraintDef::new(0.0, 1.0, "ct");
        row.coefficients.insert(x, 1.0);
        problem.add_constraint(row);
        problem.objective.coefficients.insert(x, 2.0);

        assert!(NullSolver.validate(&problem).is_ok());
    }

    #[test]
    fn test_validate_rejects_unknown_variables() {
        let mut problem = OptimizationProblem::new();
        problem.add_variable(VariableDef::continuous(0.0, 1.0, "x"));
        let mut row = ConstraintDef::new(0.0, 1.0, "ct");
        row.coefficients.insert(Variable::new(3), 1.0);
        problem.add_constraint(row);
        problem.objective.coefficients.insert(Variable::new(1), 1.0);

        let err = NullSolver.validate(&problem).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, SolverError::InvalidProblem(_)));
        assert!(message.contains("Constraint 0 'ct' refers to unknown variable 3"));
        assert!(message.contains("Objective refers to unknown variable 1"));
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        let mut problem = OptimizationProblem::new();
        problem.add_variable(VariableDef::continuous(2.0, 1.0, "x"));

        let err = NullSolver.validate(&problem).unwrap_err();
        assert!(err.to_string().contains("lower bound (2) > upper bound (1)"));
    }
}
