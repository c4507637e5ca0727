use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverConfig},
    solver_service::{Result, SolverService},
    value_objects::ResultStatus,
};
use crate::solver::good_lp_model::{self, LoweredProblem};
use good_lp::solvers::coin_cbc;
use std::time::Instant;
use tracing::debug;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, problem: &OptimizationProblem, config: &SolverConfig) -> Result<DomainSolution> {
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

        let mut lp_model = unsolved.using(coin_cbc::coin_cbc);
        lp_model.set_parameter("logLevel", if config.verbose { "1" } else { "0" });
        if let Some(limit) = config.time_limit {
            debug!(seconds = limit.as_secs_f64(), "setting CBC time limit");
            lp_model.set_parameter("seconds", &limit.as_secs_f64().to_string());
        }
        if let Some(gap) = config.gap_tolerance {
            debug!(gap, "setting CBC relative gap");
            lp_model.set_parameter("ratioGap", &gap.to_string());
        }

        let mut solution = good_lp_model::solve_model(lp_model, rows, &columns, problem, start_time)?;

        // CBC hands back its incumbent when stopped by the clock
        if let Some(limit) = config.time_limit {
            if solution.is_optimal() && solution.statistics.wall_time >= limit {
                solution.status = ResultStatus::Feasible;
                solution.message = "Time limit reached; optimality not proven".to_string();
            }
        }

        Ok(solution)
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
