//! Builder-style modelling for linear and mixed-integer programs.
//!
//! Pick a backend by [`SolverId`], declare variables, constraints and an
//! objective on the returned [`MpSolver`], then call [`MpSolver::solve`].
//! All solving happens in the wrapped engines (microlp, COIN-OR CBC, HiGHS,
//! SCIP), each behind a cargo feature of the same name.

// Domain layer: problem model, engine contract, value objects
pub mod domain;

// Application layer: the modelling DSL
pub mod application;

// Infrastructure layer: process-wide runtime
pub mod infrastructure;

// Solver adapters: concrete implementations of SolverService
pub mod solver;

// Re-export commonly used types
pub use domain::{
    Constraint, OptimizationType, ProblemClass, ResultStatus, SolverBackend, SolverConfig,
    SolverError, SolverId, SolverService, SolverStatistics, Variable, VariableType,
};

pub use application::{
    create_solver, create_solver_by_name, ConstraintBuilder, LazyVariable, LinearExpr, MpSolver,
    Objective,
};

pub use solver::SolverFactory;
