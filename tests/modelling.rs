#![cfg(feature = "microlp")]

use kortools::{create_solver, LinearExpr, MpSolver, ResultStatus, SolverError, SolverId, Variable};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

const COSTS: [[f64; 4]; 5] = [
    [90.0, 80.0, 75.0, 70.0],
    [35.0, 85.0, 55.0, 65.0],
    [125.0, 95.0, 90.0, 95.0],
    [45.0, 110.0, 95.0, 115.0],
    [50.0, 100.0, 90.0, 100.0],
];

#[test]
fn test_refined_basic_example() {
    let solver = create_solver(SolverId::Glop, |s| {
        let x = s.make_variable(0.0, 1.0, "x");
        let y = s.make_variable(0.0, 1.0, "y");

        s.constraint("ct", 0.0..=2.0, |ct| {
            ct.with_coeff(&x, 1.0);
            ct.with_coeff(&y, 1.0);
        });

        s.maximize(&LinearExpr::term(&x, 3).add(&y));
    })
    .expect("GLOP is available in default builds");

    assert_eq!(solver.num_variables(), 2);
    assert_eq!(solver.num_constraints(), 1);
    assert_eq!(solver.solve(), ResultStatus::Optimal);

    let x = solver.variable("x").unwrap();
    let y = solver.variable("y").unwrap();
    assert!((solver.objective().value() - 4.0).abs() < EPS);
    assert!((solver.value(x) - 1.0).abs() < EPS);
    assert!((solver.value(y) - 1.0).abs() < EPS);
}

#[test]
fn test_assignment_equality_rows_sum_to_one() {
    let solver = MpSolver::create(SolverId::Glop).unwrap();

    let x: Vec<Vec<Variable>> = (0..COSTS.len())
        .map(|_| (0..COSTS[0].len()).map(|_| solver.make_int_var(0.0, 1.0, "")).collect())
        .collect();

    for row in &x {
        solver.add_constraint("", 0.0..=1.0, &row.iter().map(|&v| (v, 1.0)).collect());
    }
    let task_rows: Vec<_> = (0..COSTS[0].len())
        .map(|j| {
            let expr: LinearExpr = x.iter().map(|row| (row[j], 1.0)).collect();
            solver.add_constraint(&format!("task_{j}"), 1.0..=1.0, &expr)
        })
        .collect();

    let objective = solver.objective();
    for (i, row) in x.iter().enumerate() {
        for (j, &var) in row.iter().enumerate() {
            objective.set_coefficient(var, COSTS[i][j]);
        }
    }
    objective.set_minimization();

    assert_eq!(solver.solve(), ResultStatus::Optimal);
    for &ct in &task_rows {
        assert!((solver.activity(ct) - 1.0).abs() < EPS);
    }
    assert!((objective.value() - 265.0).abs() < EPS);
    assert_eq!(solver.constraint_by_name("task_3").unwrap(), task_rows[3]);
}

#[test]
fn test_linear_identifier_relaxes_integers() {
    let solver = create_solver(SolverId::GlopLinearProgramming, |s| {
        let n = s.make_int_variable(0.0, 10.0, "n");
        s.add_constraint("half", f64::NEG_INFINITY..=3.0, &LinearExpr::term(&n, 2));
        s.maximize(&LinearExpr::term(&n, 1));
    })
    .unwrap();

    assert_eq!(solver.solve(), ResultStatus::Optimal);
    let n = solver.variable("n").unwrap();
    assert!((solver.value(n) - 1.5).abs() < EPS);
}

#[test]
fn test_unbounded_model_is_a_status() {
    let solver = MpSolver::create(SolverId::Glop).unwrap();
    let x = solver.make_num_var(0.0, f64::INFINITY, "x");
    solver.maximize(&LinearExpr::term(x, 1));

    assert_eq!(solver.solve(), ResultStatus::Unbounded);
}

#[test]
fn test_commercial_identifiers_are_unsupported() {
    for id in [SolverId::Gurobi, SolverId::CplexLp, SolverId::XpressMip, SolverId::Glpk] {
        let err = create_solver(id, |_| panic!("configuration must not run")).unwrap_err();
        assert!(matches!(err, SolverError::UnsupportedBackend(failed) if failed == id));
        assert_eq!(err.to_string(), format!("Unsupported backend: {id}"));
    }
}

#[test]
fn test_redeclared_objective_solves_with_new_coefficients() {
    let solver = create_solver(SolverId::Glop, |s| {
        let x = s.make_variable(0.0, 1.0, "x");
        let y = s.make_variable(0.0, 1.0, "y");
        s.add_constraint("ct", 0.0..=1.0, &LinearExpr::sum(&x, &y));

        s.maximize(&LinearExpr::term(&x, 3).add_term(&y, 1));
        s.maximize(&LinearExpr::term(&x, 1).add_term(&y, 2));
    })
    .unwrap();

    assert_eq!(solver.solve(), ResultStatus::Optimal);
    let y = solver.variable("y").unwrap();
    assert!((solver.value(y) - 1.0).abs() < EPS);
    assert!((solver.objective().value() - 2.0).abs() < EPS);
}

#[test]
fn test_solve_after_clear_with_stale_variable() {
    let solver = MpSolver::create(SolverId::Glop).unwrap();
    let x = solver.make_num_var(0.0, 1.0, "x");
    solver.clear();
    solver.minimize(&LinearExpr::term(x, 1));

    assert_eq!(solver.solve(), ResultStatus::ModelInvalid);
    assert_eq!(solver.value(x), 0.0);
}

proptest! {
    #[test]
    fn lazy_variable_resolves_to_one_variable(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let (lo, ub) = if a <= b { (a, b) } else { (b, a) };
        let solver = MpSolver::create(SolverId::Glop).unwrap();
        let v = solver.make_variable(lo, ub, "v");

        let first = v.resolve();
        let second = v.resolve();

        prop_assert_eq!(first, second);
        prop_assert_eq!(solver.num_variables(), 1);
        prop_assert_eq!(solver.variable_bounds(first), (lo, ub));
        prop_assert_eq!(solver.variable("v").unwrap(), first);
    }

    #[test]
    fn repeated_terms_accumulate(coeffs in proptest::collection::vec(-100.0f64..100.0, 1..8)) {
        let solver = MpSolver::create(SolverId::Glop).unwrap();
        let x = solver.make_num_var(0.0, 1.0, "x");

        let expr: LinearExpr = coeffs.iter().map(|&c| (x, c)).collect();
        let ct = solver.add_constraint("ct", 0.0..=1.0, &expr);
        solver.minimize(&expr);

        let expected: f64 = coeffs.iter().sum();
        prop_assert!((solver.coefficient(ct, x) - expected).abs() < 1e-9);
        prop_assert!((solver.objective().coefficient(x) - expected).abs() < 1e-9);
    }
}
