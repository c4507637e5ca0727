// Translation of a recorded problem into good_lp terms, shared by the
// good_lp-backed engines (CBC, microlp, SCIP)

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{Result, SolverError},
    value_objects::ResultStatus,
};
use good_lp::{
    constraint, variable, Constraint as GoodLpConstraint, Expression, ProblemVariables,
    ResolutionError, Solution as GoodLpSolutionTrait, SolverModel, Variable as GoodLpVariable,
};
use std::time::Instant;

pub(crate) struct LoweredProblem {
    pub variables: ProblemVariables,
    pub objective: Expression,
    pub maximize: bool,
    pub columns: Vec<GoodLpVariable>,
    pub rows: Vec<GoodLpConstraint>,
}

pub(crate) fn lower(problem: &OptimizationProblem) -> LoweredProblem {
    let mut vars = ProblemVariables::new();

    let columns: Vec<GoodLpVariable> = problem
        .variables
        .iter()
        .map(|def| {
            let mut definition = variable()
                .min(def.lower_bound)
                .max(def.upper_bound)
                .name(def.name.clone());
            if def.is_integer() {
                definition = definition.integer();
            }
            vars.add(definition)
        })
        .collect();

    let mut obj_expr: Expression = 0.into();
    for (var, &coeff) in &problem.objective.coefficients {
        if coeff != 0.0 {
            obj_expr += coeff * columns[var.index()];
        }
    }

    let mut rows = Vec::with_capacity(problem.constraints.len());
    for ct in &problem.constraints {
        let mut lhs: Expression = 0.into();
        for (var, &coeff) in &ct.coefficients {
            if coeff != 0.0 {
                lhs += coeff * columns[var.index()];
            }
        }

        // good_lp has no ranged rows; split into one or two one-sided rows
        if ct.lower_bound == ct.upper_bound && ct.lower_bound.is_finite() {
            rows.push(constraint::eq(lhs, ct.lower_bound));
            continue;
        }
        if ct.lower_bound.is_finite() {
            rows.push(constraint::geq(lhs.clone(), ct.lower_bound));
        }
        if ct.upper_bound.is_finite() {
            rows.push(constraint::leq(lhs, ct.upper_bound));
        }
    }

    LoweredProblem {
        variables: vars,
        objective: obj_expr,
        maximize: problem.objective.is_maximization(),
        columns,
        rows,
    }
}

/// Attach the rows, run the engine and map its outcome
pub(crate) fn solve_model<M>(
    mut model: M,
    rows: Vec<GoodLpConstraint>,
    columns: &[GoodLpVariable],
    problem: &OptimizationProblem,
    start_time: Instant,
) -> Result<DomainSolution>
where
    M: SolverModel<Error = ResolutionError>,
{
    for row in rows {
        model = model.with(row);
    }

    let solution_result = model.solve();
    let statistics = SolverStatistics::for_problem(problem, start_time.elapsed());

    match solution_result {
        Ok(sol) => {
            let variable_values: Vec<f64> = columns.iter().map(|&var| sol.value(var)).collect();
            let objective_value = problem.objective.evaluate(&variable_values);

            Ok(DomainSolution::optimal(objective_value, variable_values).with_statistics(statistics))
        }
        Err(ResolutionError::Infeasible) => Ok(DomainSolution::new(
            ResultStatus::Infeasible,
            "Problem is infeasible: no solution satisfies all constraints",
        )
        .with_statistics(statistics)),
        Err(ResolutionError::Unbounded) => Ok(DomainSolution::new(
            ResultStatus::Unbounded,
            "Problem is unbounded: objective can be improved infinitely",
        )
        .with_statistics(statistics)),
        Err(e) => Err(SolverError::ExecutionFailed(format!("{:?}", e))),
    }
}
