use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverConfig},
    solver_service::{Result, SolverService},
};
use crate::solver::good_lp_model::{self, LoweredProblem};
use good_lp::solvers::scip::scip;
use std::time::Instant;
use tracing::warn;

pub struct ScipSolver;

impl ScipSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScipSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for ScipSolver {
    fn solve(&self, problem: &OptimizationProblem, config: &SolverConfig) -> Result<DomainSolution> {
        if config.time_limit.is_some() || config.gap_tolerance.is_some() {
            warn!("SCIP options are not forwarded through good_lp; ignoring them");
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

        good_lp_model::solve_model(unsolved.using(scip), rows, &columns, problem, start_time)
    }

    fn name(&self) -> &str {
        "SCIP"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
