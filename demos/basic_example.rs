// Minimal linear program using the low-level model calls.
//
//   maximize 3x + y
//   subject to 0 <= x + y <= 2, x in [0, 1], y in [0, 2]

use kortools::{MpSolver, SolverId};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let solver = match MpSolver::create(SolverId::Glop) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("Could not create solver GLOP: {e}");
            return ExitCode::FAILURE;
        }
    };

    let x = solver.make_num_var(0.0, 1.0, "x");
    let y = solver.make_num_var(0.0, 2.0, "y");
    println!("Number of variables = {}", solver.num_variables());

    let ct = solver.make_constraint(0.0, 2.0, "ct");
    solver.set_coefficient(ct, x, 1.0);
    solver.set_coefficient(ct, y, 1.0);
    println!("Number of constraints = {}", solver.num_constraints());

    let objective = solver.objective();
    objective.set_coefficient(x, 3.0);
    objective.set_coefficient(y, 1.0);
    objective.set_maximization();

    let status = solver.solve();
    if !status.has_solution() {
        eprintln!("No solution found: {status}");
        return ExitCode::FAILURE;
    }

    println!("Solution:");
    println!("Objective value = {}", objective.value());
    println!("x = {}", solver.value(x));
    println!("y = {}", solver.value(y));

    ExitCode::SUCCESS
}
