// The basic example written with the builder DSL: lazily named variables,
// a constraint closure and an objective expression.

use kortools::{create_solver, LinearExpr, SolverId};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let solver = create_solver(SolverId::Glop, |s| {
        let x = s.make_variable(0.0, 1.0, "x");
        let y = s.make_variable(0.0, 1.0, "y");

        // 0 <= x + y <= 2
        s.constraint("ct", 0.0..=2.0, |ct| {
            ct.with_coeff(&x, 1.0);
            ct.with_coeff(&y, 1.0);
        });

        // 3x + y
        s.maximize(&LinearExpr::term(&x, 3).add(&y));
    });

    let solver = match solver {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let status = solver.solve();
    if !status.has_solution() {
        eprintln!("No solution found: {status}");
        return ExitCode::FAILURE;
    }

    let (Ok(x), Ok(y)) = (solver.variable("x"), solver.variable("y")) else {
        eprintln!("Variables x and y are missing from the model");
        return ExitCode::FAILURE;
    };

    println!("Solution:");
    println!("Number of variables = {}", solver.num_variables());
    println!("Number of constraints = {}", solver.num_constraints());
    println!("Objective value = {}", solver.objective().value());
    println!("x = {}", solver.value(x));
    println!("y = {}", solver.value(y));

    ExitCode::SUCCESS
}
