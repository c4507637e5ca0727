// microlp adapter: pure Rust simplex, always available in default builds

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverConfig},
    solver_service::{Result, SolverService},
};
use crate::solver::good_lp_model::{self, LoweredProblem};
use good_lp::solvers::microlp::microlp;
use std::time::Instant;
use tracing::warn;

pub struct MicroLpSolver;

impl MicroLpSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MicroLpSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for MicroLpSolver {
    fn solve(&self, problem: &OptimizationProblem, config: &SolverConfig) -> Result<DomainSolution> {
        if config.time_limit.is_some() || config.gap_tolerance.is_some() {
            warn!("microlp has no time limit or gap options; ignoring them");
        }

        let start_time = Instant::now();
        let LoweredProblem {
            variables,
            objective,
            maximize,
            columns,
            rows,
        } = good_lp_model::lower(problem);
        let unsolved = if maximize {
            variables.maximise(objective)
        } else {
            variables.minimise(objective)
        };

        good_lp_model::solve_model(unsolved.using(microlp), rows, &columns, problem, start_time)
    }

    fn name(&self) -> &str {
        "microlp"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
