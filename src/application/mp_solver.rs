use std::cell::RefCell;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use super::builders::{ConstraintBuilder, Objective};
use super::lazy_variable::LazyVariable;
use super::linear_expr::LinearExpr;
use crate::domain::{
    models::{
        Constraint, ConstraintDef, OptimizationProblem, Solution, SolverConfig, SolverStatistics,
        Variable, VariableDef,
    },
    solver_service::{Result, SolverError, SolverService},
    value_objects::{ProblemClass, ResultStatus, SolverId},
};
use crate::infrastructure;
use crate::solver::SolverFactory;

/// Create a solver for `id` and let `configure` declare the model on it.
///
/// The configuration closure only runs once the backend has been created;
/// an unavailable backend fails with [`SolverError::UnsupportedBackend`]
/// before anything is declared.
///
/// ```
/// use kortools::{create_solver, LinearExpr, ResultStatus, SolverId};
///
/// let solver = create_solver(SolverId::Glop, |s| {
///     let x = s.make_variable(0.0, 1.0, "x");
///     let y = s.make_variable(0.0, 1.0, "y");
///
///     s.constraint("ct", 0.0..=2.0, |ct| {
///         ct.with_coeff(&x, 1.0);
///         ct.with_coeff(&y, 1.0);
///     });
///
///     s.maximize(&LinearExpr::term(&x, 3).add(&y));
/// })
/// .unwrap();
///
/// assert_eq!(solver.solve(), ResultStatus::Optimal);
/// assert!((solver.objective().value() - 4.0).abs() < 1e-6);
/// ```
pub fn create_solver<F>(id: SolverId, configure: F) -> Result<MpSolver>
where
    F: FnOnce(&MpSolver),
{
    let solver = MpSolver::create(id)?;
    configure(&solver);
    Ok(solver)
}

/// Same as [`create_solver`], taking the identifier token as a string
pub fn create_solver_by_name<F>(name: &str, configure: F) -> Result<MpSolver>
where
    F: FnOnce(&MpSolver),
{
    create_solver(SolverId::from_str(name)?, configure)
}

/// One optimization problem bound to one backend.
///
/// Declaration methods take `&self` so that lazy variables and builders can
/// hold on to the solver while the model is being written. The handle is not
/// thread-safe. Any change to the model discards the previous solution.
///
/// Methods taking a [`Variable`] or [`Constraint`] panic when handed a handle
/// created by a different solver with a higher index.
pub struct MpSolver {
    id: SolverId,
    service: Arc<dyn SolverService>,
    problem: RefCell<OptimizationProblem>,
    config: RefCell<SolverConfig>,
    solution: RefCell<Option<Solution>>,
}

impl MpSolver {
    pub fn create(id: SolverId) -> Result<Self> {
        let runtime = infrastructure::initialize();

        let service = id
            .backend()
            .filter(|&backend| runtime.is_available(backend))
            .and_then(SolverFactory::create_from_backend)
            .ok_or(SolverError::UnsupportedBackend(id))?;

        debug!(solver_id = %id, backend = service.name(), "solver created");

        Ok(Self {
            id,
            service,
            problem: RefCell::new(OptimizationProblem::new()),
            config: RefCell::new(SolverConfig::default()),
            solution: RefCell::new(None),
        })
    }

    pub fn solver_id(&self) -> SolverId {
        self.id
    }

    pub fn backend_name(&self) -> &str {
        self.service.name()
    }

    pub(crate) fn with_problem<R>(&self, f: impl FnOnce(&OptimizationProblem) -> R) -> R {
        f(&self.problem.borrow())
    }

    pub(crate) fn edit_problem<R>(&self, f: impl FnOnce(&mut OptimizationProblem) -> R) -> R {
        self.solution.replace(None);
        f(&mut self.problem.borrow_mut())
    }

    pub(crate) fn add_variable_def(&self, def: VariableDef) -> Variable {
        let var = self.edit_problem(|problem| problem.add_variable(def));
        debug!(index = var.index(), name = %self.variable_name(var), "variable created");
        var
    }

    // Variables

    pub fn make_var(&self, lower: f64, upper: f64, integer: bool, name: &str) -> Variable {
        let def = if integer {
            VariableDef::integer(lower, upper, name)
        } else {
            VariableDef::continuous(lower, upper, name)
        };
        self.add_variable_def(def)
    }

    pub fn make_num_var(&self, lower: f64, upper: f64, name: &str) -> Variable {
        self.make_var(lower, upper, false, name)
    }

    pub fn make_int_var(&self, lower: f64, upper: f64, name: &str) -> Variable {
        self.make_var(lower, upper, true, name)
    }

    pub fn make_bool_var(&self, name: &str) -> Variable {
        self.add_variable_def(VariableDef::binary(name))
    }

    /// Declare a continuous variable that is added on first use, named `label`
    pub fn make_variable(&self, lower: f64, upper: f64, label: impl Into<String>) -> LazyVariable<'_> {
        LazyVariable::new(self, lower, upper, false, label.into())
    }

    /// Integer counterpart of [`make_variable`](Self::make_variable)
    pub fn make_int_variable(
        &self,
        lower: f64,
        upper: f64,
        label: impl Into<String>,
    ) -> LazyVariable<'_> {
        LazyVariable::new(self, lower, upper, true, label.into())
    }

    /// First variable named `name`
    pub fn variable(&self, name: &str) -> Result<Variable> {
        self.with_problem(|problem| problem.find_variable(name))
            .ok_or_else(|| SolverError::NotFound {
                kind: "Variable",
                name: name.to_string(),
            })
    }

    pub fn variables(&self) -> Vec<Variable> {
        (0..self.num_variables()).map(Variable::new).collect()
    }

    pub fn num_variables(&self) -> usize {
        self.with_problem(|problem| problem.num_variables())
    }

    pub fn variable_name(&self, var: Variable) -> String {
        self.with_problem(|problem| problem.variables[var.index()].name.clone())
    }

    pub fn variable_bounds(&self, var: Variable) -> (f64, f64) {
        self.with_problem(|problem| {
            let def = &problem.variables[var.index()];
            (def.lower_bound, def.upper_bound)
        })
    }

    pub fn set_variable_bounds(&self, var: Variable, lower: f64, upper: f64) {
        self.edit_problem(|problem| {
            let def = &mut problem.variables[var.index()];
            def.lower_bound = lower;
            def.upper_bound = upper;
        });
    }

    pub fn is_integer(&self, var: Variable) -> bool {
        self.with_problem(|problem| problem.variables[var.index()].is_integer())
    }

    // Constraints

    pub fn make_constraint(&self, lower: f64, upper: f64, name: &str) -> Constraint {
        let ct = self.edit_problem(|problem| problem.add_constraint(ConstraintDef::new(lower, upper, name)));
        debug!(index = ct.index(), name = %self.constraint_name(ct), lower, upper, "constraint created");
        ct
    }

    /// Create constraint `name` over `range` and fill it through a builder
    pub fn constraint<F>(&self, name: &str, range: RangeInclusive<f64>, build: F) -> Constraint
    where
        F: FnOnce(&ConstraintBuilder<'_>),
    {
        let ct = self.make_constraint(*range.start(), *range.end(), name);
        build(&ConstraintBuilder::new(self, ct));
        ct
    }

    /// Create constraint `name` over `range` from an expression.
    /// Repeated variables have their coefficients summed.
    pub fn add_constraint(&self, name: &str, range: RangeInclusive<f64>, expr: &LinearExpr) -> Constraint {
        let ct = self.make_constraint(*range.start(), *range.end(), name);
        self.edit_problem(|problem| {
            let row = &mut problem.constraints[ct.index()].coefficients;
            for &(var, coeff) in expr.terms() {
                *row.entry(var).or_insert(0.0) += coeff;
            }
        });
        ct
    }

    /// Set the coefficient of `var` in `ct`, replacing any previous one
    pub fn set_coefficient(&self, ct: Constraint, var: Variable, coefficient: f64) {
        self.edit_problem(|problem| {
            problem.constraints[ct.index()]
                .coefficients
                .insert(var, coefficient);
        });
    }

    pub fn coefficient(&self, ct: Constraint, var: Variable) -> f64 {
        self.with_problem(|problem| {
            problem.constraints[ct.index()]
                .coefficients
                .get(&var)
                .copied()
                .unwrap_or(0.0)
        })
    }

    /// First constraint named `name`
    pub fn constraint_by_name(&self, name: &str) -> Result<Constraint> {
        self.with_problem(|problem| problem.find_constraint(name))
            .ok_or_else(|| SolverError::NotFound {
                kind: "Constraint",
                name: name.to_string(),
            })
    }

    pub fn constraints(&self) -> Vec<Constraint> {
        (0..self.num_constraints()).map(Constraint::new).collect()
    }

    pub fn num_constraints(&self) -> usize {
        self.with_problem(|problem| problem.num_constraints())
    }

    pub fn constraint_name(&self, ct: Constraint) -> String {
        self.with_problem(|problem| problem.constraints[ct.index()].name.clone())
    }

    pub fn constraint_bounds(&self, ct: Constraint) -> (f64, f64) {
        self.with_problem(|problem| {
            let def = &problem.constraints[ct.index()];
            (def.lower_bound, def.upper_bound)
        })
    }

    // Objective

    pub fn objective(&self) -> Objective<'_> {
        Objective::new(self)
    }

    /// Set the objective coefficients of the variables in `expr` and maximize
    pub fn maximize(&self, expr: &LinearExpr) -> Objective<'_> {
        self.apply_objective(expr, true)
    }

    /// Set the objective coefficients of the variables in `expr` and minimize
    pub fn minimize(&self, expr: &LinearExpr) -> Objective<'_> {
        self.apply_objective(expr, false)
    }

    fn apply_objective(&self, expr: &LinearExpr, maximize: bool) -> Objective<'_> {
        let objective = self.objective();
        // repeated terms are merged first; the merged value replaces the old one
        for (var, coeff) in expr.coefficients() {
            objective.set_coefficient(var, coeff);
        }
        objective.set_optimization_direction(maximize);
        objective
    }

    // Configuration

    pub fn config(&self) -> SolverConfig {
        self.config.borrow().clone()
    }

    pub fn set_config(&self, config: SolverConfig) {
        self.config.replace(config);
    }

    pub fn set_time_limit(&self, limit: Duration) {
        self.config.borrow_mut().time_limit = Some(limit);
    }

    // Solving

    /// Solve the current model. Non-optimal outcomes are reported through
    /// the returned status, never as errors.
    pub fn solve(&self) -> ResultStatus {
        let solution = {
            let problem = self.problem.borrow();
            let config = self.config.borrow();

            info!(
                event = "solve_start",
                solver_id = %self.id,
                backend = self.service.name(),
                variables = problem.num_variables(),
                constraints = problem.num_constraints(),
            );

            self.run(&problem, &config)
        };

        let status = solution.status;
        info!(
            event = "solve_end",
            status = %status,
            wall_time_ms = solution.statistics.wall_time.as_secs_f64() * 1000.0,
            objective = ?solution.objective_value,
            has_solution = solution.is_feasible(),
        );

        self.solution.replace(Some(solution));
        status
    }

    fn run(&self, problem: &OptimizationProblem, config: &SolverConfig) -> Solution {
        if let Err(e) = self.service.validate(problem) {
            warn!(error = %e, "model rejected");
            return Solution::new(ResultStatus::ModelInvalid, e.to_string());
        }

        let linear_only =
            self.id.problem_class() == ProblemClass::Linear || !self.service.supports_mip();
        let relaxed;
        let to_solve = if linear_only && problem.is_mixed_integer() {
            warn!(
                solver_id = %self.id,
                integer_vars = problem.num_integer_variables(),
                "linear backend; integer variables are relaxed to continuous"
            );
            relaxed = problem.relaxed();
            &relaxed
        } else {
            problem
        };

        match self.service.solve(to_solve, config) {
            Ok(solution) => solution,
            Err(e) => {
                error!(error = %e, backend = self.service.name(), "solver failed");
                Solution::new(ResultStatus::Abnormal, e.to_string())
            }
        }
    }

    /// Status of the last solve, `NotSolved` before any
    pub fn result_status(&self) -> ResultStatus {
        self.solution
            .borrow()
            .as_ref()
            .map_or(ResultStatus::NotSolved, |s| s.status)
    }

    /// Value of `var` in the last solution, 0 when there is none
    pub fn value(&self, var: Variable) -> f64 {
        self.solution
            .borrow()
            .as_ref()
            .and_then(|s| s.variable_values.get(var.index()).copied())
            .unwrap_or(0.0)
    }

    /// Row activity of `ct` in the last solution
    pub fn activity(&self, ct: Constraint) -> f64 {
        let solution = self.solution.borrow();
        match solution.as_ref() {
            Some(s) => self.with_problem(|problem| {
                problem.constraints[ct.index()].activity(&s.variable_values)
            }),
            None => 0.0,
        }
    }

    pub fn objective_value(&self) -> f64 {
        self.solution
            .borrow()
            .as_ref()
            .and_then(|s| s.objective_value)
            .unwrap_or(0.0)
    }

    pub fn wall_time(&self) -> Duration {
        self.statistics().map_or(Duration::ZERO, |s| s.wall_time)
    }

    pub fn iterations(&self) -> u64 {
        self.statistics().map_or(0, |s| s.iterations)
    }

    pub fn statistics(&self) -> Option<SolverStatistics> {
        self.solution
            .borrow()
            .as_ref()
            .map(|s| s.statistics.clone())
    }

    /// Message attached to the last solve by the backend
    pub fn solve_message(&self) -> Option<String> {
        self.solution.borrow().as_ref().map(|s| s.message.clone())
    }

    /// Drop every variable, constraint and the objective
    pub fn clear(&self) {
        self.edit_problem(|problem| *problem = OptimizationProblem::new());
    }
}

impl std::fmt::Debug for MpSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MpSolver")
            .field("id", &self.id)
            .field("backend", &self.service.name())
            .field("num_variables", &self.num_variables())
            .field("num_constraints", &self.num_constraints())
            .field("status", &self.result_status())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_unsupported_backend_skips_configuration() {
        let ran = Cell::new(false);
        let result = create_solver(SolverId::CpSat, |_| ran.set(true));

        assert!(matches!(
            result,
            Err(SolverError::UnsupportedBackend(SolverId::CpSat))
        ));
        assert!(!ran.get());
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let result = create_solver_by_name("NOT_A_SOLVER", |_| {});
        assert!(matches!(result, Err(SolverError::UnknownSolverId(_))));
    }

    #[test]
    fn test_every_id_creates_or_fails_by_availability() {
        let runtime = infrastructure::initialize();
        for id in SolverId::ALL {
            let available = id.backend().is_some_and(|b| runtime.is_available(b));
            match MpSolver::create(id) {
                Ok(solver) => {
                    assert!(available, "{id} should not be available");
                    assert_eq!(solver.solver_id(), id);
                }
                Err(SolverError::UnsupportedBackend(failed)) => {
                    assert!(!available, "{id} should be available");
                    assert_eq!(failed, id);
                }
                Err(e) => panic!("unexpected error for {id}: {e}"),
            }
        }
    }

    #[cfg(feature = "microlp")]
    mod with_microlp {
        use super::*;

        fn glop() -> MpSolver {
            MpSolver::create(SolverId::Glop).unwrap()
        }

        #[test]
        fn test_create_by_name_runs_configuration() {
            let solver = create_solver_by_name("glop_linear_programming", |s| {
                s.make_num_var(0.0, 1.0, "x");
            })
            .unwrap();

            assert_eq!(solver.solver_id(), SolverId::GlopLinearProgramming);
            assert_eq!(solver.backend_name(), "microlp");
            assert_eq!(solver.num_variables(), 1);
        }

        #[test]
        fn test_lazy_variable_resolves_once() {
            let solver = glop();
            let x = solver.make_variable(0.0, 1.0, "x");
            assert!(!x.is_resolved());
            assert_eq!(solver.num_variables(), 0);

            let first = x.resolve();
            let second = x.resolve();

            assert_eq!(first, second);
            assert!(x.is_resolved());
            assert_eq!(solver.num_variables(), 1);
            assert_eq!(solver.variable_name(first), "x");
            assert_eq!(solver.variable_bounds(first), (0.0, 1.0));
        }

        #[test]
        fn test_unresolved_lazy_variable_adds_nothing() {
            let solver = glop();
            {
                let _unused = solver.make_variable(0.0, 10.0, "unused");
                let _also_unused = solver.make_int_variable(0.0, 10.0, "unused_int");
            }
            assert_eq!(solver.num_variables(), 0);
            assert!(solver.variable("unused").is_err());
        }

        #[test]
        fn test_lazy_int_variable_is_integer() {
            let solver = glop();
            let n = solver.make_int_variable(0.0, 5.0, "n");
            assert!(solver.is_integer(n.resolve()));
            assert_eq!(n.label(), "n");
        }

        #[test]
        fn test_lookup_returns_created_handle() {
            let solver = glop();
            let x = solver.make_num_var(0.0, 1.0, "x");
            let ct = solver.make_constraint(0.0, 1.0, "ct");

            assert_eq!(solver.variable("x").unwrap(), x);
            assert_eq!(solver.constraint_by_name("ct").unwrap(), ct);
            assert!(matches!(
                solver.variable("y"),
                Err(SolverError::NotFound { kind: "Variable", .. })
            ));
            assert!(matches!(
                solver.constraint_by_name("missing"),
                Err(SolverError::NotFound { kind: "Constraint", .. })
            ));
        }

        #[test]
        fn test_duplicate_names_resolve_to_first() {
            let solver = glop();
            let first = solver.make_num_var(0.0, 1.0, "v");
            let second = solver.make_num_var(0.0, 2.0, "v");

            assert_ne!(first, second);
            assert_eq!(solver.variable("v").unwrap(), first);
        }

        #[test]
        fn test_empty_names_are_generated() {
            let solver = glop();
            let v = solver.make_num_var(0.0, 1.0, "");
            let ct = solver.make_constraint(0.0, 1.0, "");

            assert_eq!(solver.variable_name(v), "auto_v_000000000");
            assert_eq!(solver.constraint_name(ct), "auto_c_000000000");
        }

        #[test]
        fn test_with_coeff_overwrites() {
            let solver = glop();
            let x = solver.make_num_var(0.0, 1.0, "x");
            let ct = solver.constraint("ct", 0.0..=2.0, |ct| {
                ct.with_coeff(x, 1.0).with_coeff(x, 4.0);
            });

            assert_eq!(solver.coefficient(ct, x), 4.0);
            assert_eq!(solver.constraint_bounds(ct), (0.0, 2.0));
        }

        #[test]
        fn test_expression_application_accumulates() {
            let solver = glop();
            let x = solver.make_num_var(0.0, 1.0, "x");
            let y = solver.make_num_var(0.0, 1.0, "y");

            let ct = solver.add_constraint("ct", 0.0..=3.0, &LinearExpr::sum(x, x).add(y));
            let objective = solver.maximize(&LinearExpr::sum(x, x));

            assert_eq!(solver.coefficient(ct, x), 2.0);
            assert_eq!(solver.coefficient(ct, y), 1.0);
            assert_eq!(objective.coefficient(x), 2.0);
            assert!(objective.is_maximization());

            solver.minimize(&LinearExpr::term(y, 5));
            assert!(!solver.objective().is_maximization());
            assert_eq!(solver.objective().coefficient(y), 5.0);
        }

        #[test]
        fn test_reapplied_objective_replaces_coefficients() {
            let solver = glop();
            let x = solver.make_num_var(0.0, 1.0, "x");
            let y = solver.make_num_var(0.0, 1.0, "y");

            solver.maximize(&LinearExpr::term(x, 3).add(y));
            let objective = solver.maximize(&LinearExpr::term(x, 5));

            assert_eq!(objective.coefficient(x), 5.0);
            assert_eq!(objective.coefficient(y), 1.0);

            solver.minimize(&LinearExpr::sum(x, x));
            assert_eq!(solver.objective().coefficient(x), 2.0);
            assert!(!solver.objective().is_maximization());
        }

        #[test]
        fn test_stale_handle_after_clear_is_model_invalid() {
            let solver = glop();
            let x = solver.make_variable(0.0, 1.0, "x");
            x.resolve();

            solver.clear();
            solver.add_constraint("ct", 0.0..=1.0, &LinearExpr::term(&x, 1));

            assert_eq!(solver.num_variables(), 0);
            assert_eq!(solver.solve(), ResultStatus::ModelInvalid);
            assert!(solver.solve_message().unwrap_or_default().contains("unknown variable"));
        }

        #[test]
        fn test_foreign_handle_in_objective_is_model_invalid() {
            let other = glop();
            other.make_num_var(0.0, 1.0, "a");
            let stray = other.make_num_var(0.0, 1.0, "b");

            let solver = glop();
            solver.make_num_var(0.0, 1.0, "x");
            solver.maximize(&LinearExpr::term(stray, 1));

            assert_eq!(solver.solve(), ResultStatus::ModelInvalid);
        }

        #[test]
        fn test_basic_example_is_optimal() {
            let solver = create_solver(SolverId::Glop, |s| {
                let x = s.make_variable(0.0, 1.0, "x");
                let y = s.make_variable(0.0, 1.0, "y");

                s.constraint("ct", 0.0..=2.0, |ct| {
                    ct.with_coeff(&x, 1.0);
                    ct.with_coeff(&y, 1.0);
                });

                s.maximize(&LinearExpr::term(&x, 3).add(&y));
            })
            .unwrap();

            assert_eq!(solver.result_status(), ResultStatus::NotSolved);
            assert_eq!(solver.solve(), ResultStatus::Optimal);

            let x = solver.variable("x").unwrap();
            let y = solver.variable("y").unwrap();
            assert!((solver.objective().value() - 4.0).abs() < 1e-6);
            assert!((solver.value(x) - 1.0).abs() < 1e-6);
            assert!((solver.value(y) - 1.0).abs() < 1e-6);

            let ct = solver.constraint_by_name("ct").unwrap();
            assert!((solver.activity(ct) - 2.0).abs() < 1e-6);
            assert_eq!(solver.statistics().unwrap().num_variables, 2);
            assert_eq!(solver.iterations(), 0);
        }

        #[test]
        fn test_objective_offset_is_included() {
            let solver = glop();
            let x = solver.make_num_var(0.0, 2.0, "x");
            solver
                .objective()
                .set_coefficient(x, 1.0)
                .set_offset(10.0)
                .set_maximization();

            assert_eq!(solver.solve(), ResultStatus::Optimal);
            assert!((solver.objective().value() - 12.0).abs() < 1e-6);
        }

        #[test]
        fn test_infeasible_model_is_a_status() {
            let solver = glop();
            let x = solver.make_num_var(0.0, 1.0, "x");
            solver.add_constraint("too_big", 5.0..=f64::INFINITY, &LinearExpr::term(x, 1));

            assert_eq!(solver.solve(), ResultStatus::Infeasible);
            assert_eq!(solver.objective_value(), 0.0);
        }

        #[test]
        fn test_inverted_bounds_are_model_invalid() {
            let solver = glop();
            solver.make_num_var(2.0, 1.0, "bad");

            assert_eq!(solver.solve(), ResultStatus::ModelInvalid);
            assert!(solver.solve_message().unwrap().contains("bad"));
        }

        #[test]
        fn test_editing_discards_solution() {
            let solver = glop();
            let x = solver.make_num_var(0.0, 1.0, "x");
            solver.maximize(&LinearExpr::term(x, 1));
            assert_eq!(solver.solve(), ResultStatus::Optimal);

            solver.set_variable_bounds(x, 0.0, 3.0);
            assert_eq!(solver.result_status(), ResultStatus::NotSolved);
            assert_eq!(solver.value(x), 0.0);

            assert_eq!(solver.solve(), ResultStatus::Optimal);
            assert!((solver.value(x) - 3.0).abs() < 1e-6);
        }

        #[test]
        fn test_clear_empties_model() {
            let solver = glop();
            let x = solver.make_num_var(0.0, 1.0, "x");
            solver.make_constraint(0.0, 1.0, "ct");
            solver.objective().set_coefficient(x, 1.0);

            solver.clear();

            assert_eq!(solver.num_variables(), 0);
            assert_eq!(solver.num_constraints(), 0);
            assert!(solver.variables().is_empty());
        }

        #[test]
        fn test_config_round_trip() {
            let solver = glop();
            solver.set_config(SolverConfig::default().with_gap_tolerance(0.01));
            solver.set_time_limit(Duration::from_secs(5));

            let config = solver.config();
            assert_eq!(config.gap_tolerance, Some(0.01));
            assert_eq!(config.time_limit, Some(Duration::from_secs(5)));
        }
    }
}
