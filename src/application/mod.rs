// Application layer: solver handle and the modelling DSL around it

pub mod builders;
pub mod lazy_variable;
pub mod linear_expr;
pub mod mp_solver;

pub use builders::{ConstraintBuilder, Objective};
pub use lazy_variable::LazyVariable;
pub use linear_expr::LinearExpr;
pub use mp_solver::{create_solver, create_solver_by_name, MpSolver};
