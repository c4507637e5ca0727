// Assignment problem: five workers, four tasks. Each worker takes at most one
// task, each task gets exactly one worker; minimize the total cost.
//
// Usage: cargo run --example assignment_mip -- [SOLVER_ID]
// Defaults to CBC_MIXED_INTEGER_PROGRAMMING when the coin_cbc feature is on,
// GLOP otherwise.

use kortools::infrastructure;
use kortools::{MpSolver, SolverBackend, SolverId, Variable};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const COSTS: [[f64; 4]; 5] = [
    [90.0, 80.0, 75.0, 70.0],
    [35.0, 85.0, 55.0, 65.0],
    [125.0, 95.0, 90.0, 95.0],
    [45.0, 110.0, 95.0, 115.0],
    [50.0, 100.0, 90.0, 100.0],
];

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let runtime = infrastructure::initialize();
    let default_id = if runtime.is_available(SolverBackend::CoinCbc) {
        SolverId::CbcMixedIntegerProgramming
    } else {
        SolverId::Glop
    };

    let name = std::env::args()
        .nth(1)
        .unwrap_or_else(|| default_id.as_str().to_string());
    let solver = match name.parse::<SolverId>().and_then(MpSolver::create) {
        Ok(solver) => solver,
        Err(e) => {
            eprintln!("Could not create solver {name}: {e}");
            eprintln!("Backends in this build: {:?}", runtime.backends());
            return ExitCode::FAILURE;
        }
    };

    let num_workers = COSTS.len();
    let num_tasks = COSTS[0].len();

    // x[i][j] is 1 when worker i is assigned to task j
    let x: Vec<Vec<Variable>> = (0..num_workers)
        .map(|_| (0..num_tasks).map(|_| solver.make_int_var(0.0, 1.0, "")).collect())
        .collect();

    for row in &x {
        let ct = solver.make_constraint(0.0, 1.0, "");
        for &var in row {
            solver.set_coefficient(ct, var, 1.0);
        }
    }
    for j in 0..num_tasks {
        let ct = solver.make_constraint(1.0, 1.0, "");
        for row in &x {
            solver.set_coefficient(ct, row[j], 1.0);
        }
    }

    let objective = solver.objective();
    for (i, row) in x.iter().enumerate() {
        for (j, &var) in row.iter().enumerate() {
            objective.set_coefficient(var, COSTS[i][j]);
        }
    }
    objective.set_minimization();

    let status = solver.solve();
    if !status.has_solution() {
        eprintln!("No solution found.");
        return ExitCode::FAILURE;
    }

    println!("Total cost: {}", objective.value());
    for (i, row) in x.iter().enumerate() {
        for (j, &var) in row.iter().enumerate() {
            // 0-1 test with tolerance for floating point arithmetic
            if solver.value(var) > 0.5 {
                println!("Worker {i} assigned to task {j}.  Cost = {}", COSTS[i][j]);
            }
        }
    }

    ExitCode::SUCCESS
}
