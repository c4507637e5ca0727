use std::collections::BTreeMap;
use std::time::Duration;

use super::value_objects::{OptimizationType, ResultStatus, VariableType};

/// Handle to a variable owned by one solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable(usize);

impl Variable {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the variable in its solver, in creation order
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to a constraint owned by one solver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Constraint(usize);

impl Constraint {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Decision variable in an optimization problem
#[derive(Debug, Clone)]
pub struct VariableDef {
    pub variable_type: VariableType,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub name: String,
}

impl VariableDef {
    pub fn continuous(lower: f64, upper: f64, name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Continuous,
            lower_bound: lower,
            upper_bound: upper,
            name: name.into(),
        }
    }

    pub fn integer(lower: f64, upper: f64, name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Integer,
            lower_bound: lower,
            upper_bound: upper,
            name: name.into(),
        }
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self {
            variable_type: VariableType::Binary,
            lower_bound: 0.0,
            upper_bound: 1.0,
            name: name.into(),
        }
    }

    pub fn is_integer(&self) -> bool {
        self.variable_type.is_integer()
    }
}

/// Linear constraint `lower_bound <= sum(coeff * var) <= upper_bound`
#[derive(Debug, Clone)]
pub struct ConstraintDef {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub coefficients: BTreeMap<Variable, f64>,
    pub name: String,
}

impl ConstraintDef {
    pub fn new(lower: f64, upper: f64, name: impl Into<String>) -> Self {
        Self {
            lower_bound: lower,
            upper_bound: upper,
            coefficients: BTreeMap::new(),
            name: name.into(),
        }
    }

    /// Row activity for the given column values
    pub fn activity(&self, values: &[f64]) -> f64 {
        self.coefficients
            .iter()
            .map(|(var, coeff)| coeff * values.get(var.index()).copied().unwrap_or(0.0))
            .sum()
    }
}

/// Objective function to minimize or maximize
#[derive(Debug, Clone, Default)]
pub struct ObjectiveFunction {
    pub optimization_type: OptimizationType,
    pub coefficients: BTreeMap<Variable, f64>,
    pub offset: f64,
}

impl ObjectiveFunction {
    pub fn is_maximization(&self) -> bool {
        self.optimization_type == OptimizationType::Maximize
    }

    /// Objective value for the given column values
    pub fn evaluate(&self, values: &[f64]) -> f64 {
        self.offset
            + self
                .coefficients
                .iter()
                .map(|(var, coeff)| coeff * values.get(var.index()).copied().unwrap_or(0.0))
                .sum::<f64>()
    }
}

/// Configuration for the solver
#[derive(Debug, Clone, Default)]
pub struct SolverConfig {
    pub time_limit: Option<Duration>,
    pub gap_tolerance: Option<f64>,
    pub verbose: bool,
}

impl SolverConfig {
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Relative MIP gap at which the backend may stop
    pub fn with_gap_tolerance(mut self, gap: f64) -> Self {
        self.gap_tolerance = Some(gap);
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

/// Complete optimization problem as recorded by a solver handle
#[derive(Debug, Clone, Default)]
pub struct OptimizationProblem {
    pub objective: ObjectiveFunction,
    pub constraints: Vec<ConstraintDef>,
    pub variables: Vec<VariableDef>,
}

impl OptimizationProblem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_variable(&mut self, mut def: VariableDef) -> Variable {
        let index = self.variables.len();
        if def.name.is_empty() {
            def.name = format!("auto_v_{:09}", index);
        }
        self.variables.push(def);
        Variable::new(index)
    }

    pub fn add_constraint(&mut self, mut def: ConstraintDef) -> Constraint {
        let index = self.constraints.len();
        if def.name.is_empty() {
            def.name = format!("auto_c_{:09}", index);
        }
        self.constraints.push(def);
        Constraint::new(index)
    }

    /// First variable carrying `name`
    pub fn find_variable(&self, name: &str) -> Option<Variable> {
        self.variables
            .iter()
            .position(|v| v.name == name)
            .map(Variable::new)
    }

    /// First constraint carrying `name`
    pub fn find_constraint(&self, name: &str) -> Option<Constraint> {
        self.constraints
            .iter()
            .position(|c| c.name == name)
            .map(Constraint::new)
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn num_integer_variables(&self) -> usize {
        self.variables.iter().filter(|v| v.is_integer()).count()
    }

    pub fn is_mixed_integer(&self) -> bool {
        self.num_integer_variables() > 0
    }

    /// Copy of the problem with every variable made continuous
    pub fn relaxed(&self) -> Self {
        let mut relaxed = self.clone();
        for var in &mut relaxed.variables {
            var.variable_type = VariableType::Continuous;
        }
        relaxed
    }
}

/// Statistics about the solve process
#[derive(Debug, Clone, Default)]
pub struct SolverStatistics {
    /// Simplex iterations; 0 when the backend does not report them
    pub iterations: u64,
    pub wall_time: Duration,
    pub num_variables: u32,
    pub num_constraints: u32,
    pub num_integer_vars: u32,
}

impl SolverStatistics {
    pub fn for_problem(problem: &OptimizationProblem, wall_time: Duration) -> Self {
        Self {
            iterations: 0,
            wall_time,
            num_variables: problem.num_variables() as u32,
            num_constraints: problem.num_constraints() as u32,
            num_integer_vars: problem.num_integer_variables() as u32,
        }
    }
}

/// Solution to an optimization problem
#[derive(Debug, Clone)]
pub struct Solution {
    pub status: ResultStatus,
    pub objective_value: Option<f64>,
    pub variable_values: Vec<f64>,
    pub message: String,
    pub statistics: SolverStatistics,
}

impl Solution {
    pub fn new(status: ResultStatus, message: impl Into<String>) -> Self {
        Self {
            status,
            objective_value: None,
            variable_values: Vec::new(),
            message: message.into(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn optimal(value: f64, variable_values: Vec<f64>) -> Self {
        Self {
            status: ResultStatus::Optimal,
            objective_value: Some(value),
            variable_values,
            message: "Optimal solution found".to_string(),
            statistics: SolverStatistics::default(),
        }
    }

    pub fn with_statistics(mut self, statistics: SolverStatistics) -> Self {
        self.statistics = statistics;
        self
    }

    pub fn is_optimal(&self) -> bool {
        self.status == ResultStatus::Optimal
    }

    pub fn is_feasible(&self) -> bool {
        self.status.has_solution()
    }
}
