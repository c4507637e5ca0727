// HiGHS Solver Adapter
// Drives the highs crate directly; HiGHS takes ranged rows natively

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverConfig, SolverStatistics, Variable},
    solver_service::{Result, SolverError, SolverService},
    value_objects::{OptimizationType, ResultStatus},
};
use highs::{HighsModelStatus, RowProblem, Sense};
use std::time::Instant;
use tracing::debug;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &OptimizationProblem, config: &SolverConfig) -> Result<DomainSolution> {
        let start_time = Instant::now();

        // Add variables first, then rows
        let mut pb = RowProblem::default();
        let mut cols = Vec::with_capacity(problem.num_variables());

        for (i, var_def) in problem.variables.iter().enumerate() {
            let obj_coeff = problem
                .objective
                .coefficients
                .get(&Variable::new(i))
                .copied()
                .unwrap_or(0.0);
            let bounds = var_def.lower_bound..=var_def.upper_bound;

            let col = if var_def.is_integer() {
                pb.add_integer_column(obj_coeff, bounds)
            } else {
                pb.add_column(obj_coeff, bounds)
            };
            cols.push(col);
        }

        for constraint in &problem.constraints {
            let terms: Vec<_> = constraint
                .coefficients
                .iter()
                .filter(|(_, &coeff)| coeff != 0.0)
                .map(|(var, &coeff)| (cols[var.index()], coeff))
                .collect();

            pb.add_row(constraint.lower_bound..=constraint.upper_bound, &terms);
        }

        let sense = if problem.objective.optimization_type == OptimizationType::Maximize {
            Sense::Maximise
        } else {
            Sense::Minimise
        };

        let mut model = pb.optimise(sense);
        model.set_option("output_flag", config.verbose);
        if let Some(limit) = config.time_limit {
            debug!(seconds = limit.as_secs_f64(), "setting HiGHS time limit");
            model.set_option("time_limit", limit.as_secs_f64());
        }
        if let Some(gap) = config.gap_tolerance {
            debug!(gap, "setting HiGHS relative gap");
            model.set_option("mip_rel_gap", gap);
        }

        let solved = model.solve();
        let statistics = SolverStatistics::for_problem(problem, start_time.elapsed());

        match solved.status() {
            HighsModelStatus::Optimal | HighsModelStatus::ModelEmpty => {
                let mut variable_values = solved.get_solution().columns().to_vec();
                variable_values.resize(problem.num_variables(), 0.0);
                let objective_value = problem.objective.evaluate(&variable_values);

                Ok(DomainSolution::optimal(objective_value, variable_values)
                    .with_statistics(statistics))
            }
            HighsModelStatus::Infeasible => Ok(DomainSolution::new(
                ResultStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            )
            .with_statistics(statistics)),
            HighsModelStatus::Unbounded | HighsModelStatus::UnboundedOrInfeasible => {
                Ok(DomainSolution::new(
                    ResultStatus::Unbounded,
                    "Problem is unbounded: objective can be improved infinitely",
                )
                .with_statistics(statistics))
            }
            HighsModelStatus::ReachedTimeLimit | HighsModelStatus::ReachedIterationLimit => {
                Ok(DomainSolution::new(
                    ResultStatus::NotSolved,
                    format!("HiGHS stopped early: {:?}", solved.status()),
                )
                .with_statistics(statistics))
            }
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS solver returned status: {:?}",
                status
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }

    fn supports_mip(&self) -> bool {
        true
    }
}
