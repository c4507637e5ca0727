// Domain value objects representing core modelling concepts

use std::fmt;
use std::str::FromStr;

use super::solver_service::SolverError;

/// Type of decision variable in the optimization problem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableType {
    /// Continuous real number (x ∈ ℝ)
    Continuous,
    /// Integer number (x ∈ ℤ)
    Integer,
    /// Binary variable (x ∈ {0, 1})
    Binary,
}

impl VariableType {
    pub fn is_integer(self) -> bool {
        matches!(self, VariableType::Integer | VariableType::Binary)
    }
}

/// Direction of optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OptimizationType {
    /// Minimize the objective function
    #[default]
    Minimize,
    /// Maximize the objective function
    Maximize,
}

/// Outcome of a solve, as reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultStatus {
    /// Found optimal solution
    Optimal,
    /// Found feasible solution (may not be optimal)
    Feasible,
    /// Problem has no feasible solution
    Infeasible,
    /// Objective can be improved infinitely
    Unbounded,
    /// Backend failed for a reason other than the model itself
    Abnormal,
    /// Model rejected before reaching the backend
    ModelInvalid,
    /// No solve attempted yet, or the backend stopped without a solution
    NotSolved,
}

impl ResultStatus {
    pub fn has_solution(self) -> bool {
        matches!(self, ResultStatus::Optimal | ResultStatus::Feasible)
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultStatus::Optimal => write!(f, "Optimal"),
            ResultStatus::Feasible => write!(f, "Feasible"),
            ResultStatus::Infeasible => write!(f, "Infeasible"),
            ResultStatus::Unbounded => write!(f, "Unbounded"),
            ResultStatus::Abnormal => write!(f, "Abnormal"),
            ResultStatus::ModelInvalid => write!(f, "Model Invalid"),
            ResultStatus::NotSolved => write!(f, "Not Solved"),
        }
    }
}

/// Solver engine a backend identifier resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverBackend {
    /// COIN-OR CBC (through good_lp)
    CoinCbc,
    /// HiGHS (through the highs crate)
    Highs,
    /// microlp, a pure Rust simplex (through good_lp)
    MicroLp,
    /// SCIP (through good_lp)
    Scip,
}

impl SolverBackend {
    pub const ALL: [SolverBackend; 4] = [
        SolverBackend::CoinCbc,
        SolverBackend::Highs,
        SolverBackend::MicroLp,
        SolverBackend::Scip,
    ];
}

impl fmt::Display for SolverBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverBackend::CoinCbc => write!(f, "COIN-OR CBC"),
            SolverBackend::Highs => write!(f, "HiGHS"),
            SolverBackend::MicroLp => write!(f, "microlp"),
            SolverBackend::Scip => write!(f, "SCIP"),
        }
    }
}

/// Problem class an identifier asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemClass {
    /// Continuous relaxation only; integrality is dropped before solving
    Linear,
    MixedInteger,
}

/// Backend identifier accepted by [`create_solver`](crate::create_solver).
///
/// Several tokens are synonyms for the same engine (`GLOP` and
/// `GLOP_LINEAR_PROGRAMMING`, `GUROBI` and `GUROBI_MIP`, ...). Tokens whose
/// engine has no Rust binding are kept so that the vocabulary stays closed;
/// creating a solver with them fails with `UnsupportedBackend`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverId {
    ClpLinearProgramming,
    Clp,
    CbcMixedIntegerProgramming,
    Cbc,
    GlopLinearProgramming,
    Glop,
    BopIntegerProgramming,
    Bop,
    SatIntegerProgramming,
    Sat,
    CpSat,
    ScipMixedIntegerProgramming,
    Scip,
    GurobiLinearProgramming,
    GurobiLp,
    GurobiMixedIntegerProgramming,
    Gurobi,
    GurobiMip,
    CplexLinearProgramming,
    CplexLp,
    CplexMixedIntegerProgramming,
    Cplex,
    CplexMip,
    XpressLinearProgramming,
    XpressLp,
    XpressMixedIntegerProgramming,
    Xpress,
    XpressMip,
    GlpkLinearProgramming,
    GlpkLp,
    GlpkMixedIntegerProgramming,
    Glpk,
    GlpkMip,
    HighsLinearProgramming,
    HighsLp,
    HighsMixedIntegerProgramming,
    Highs,
}

impl SolverId {
    pub const ALL: [SolverId; 37] = [
        SolverId::ClpLinearProgramming,
        SolverId::Clp,
        SolverId::CbcMixedIntegerProgramming,
        SolverId::Cbc,
        SolverId::GlopLinearProgramming,
        SolverId::Glop,
        SolverId::BopIntegerProgramming,
        SolverId::Bop,
        SolverId::SatIntegerProgramming,
        SolverId::Sat,
        SolverId::CpSat,
        SolverId::ScipMixedIntegerProgramming,
        SolverId::Scip,
        SolverId::GurobiLinearProgramming,
        SolverId::GurobiLp,
        SolverId::GurobiMixedIntegerProgramming,
        SolverId::Gurobi,
        SolverId::GurobiMip,
        SolverId::CplexLinearProgramming,
        SolverId::CplexLp,
        SolverId::CplexMixedIntegerProgramming,
        SolverId::Cplex,
        SolverId::CplexMip,
        SolverId::XpressLinearProgramming,
        SolverId::XpressLp,
        SolverId::XpressMixedIntegerProgramming,
        SolverId::Xpress,
        SolverId::XpressMip,
        SolverId::GlpkLinearProgramming,
        SolverId::GlpkLp,
        SolverId::GlpkMixedIntegerProgramming,
        SolverId::Glpk,
        SolverId::GlpkMip,
        SolverId::HighsLinearProgramming,
        SolverId::HighsLp,
        SolverId::HighsMixedIntegerProgramming,
        SolverId::Highs,
    ];

    /// Canonical token for this identifier
    pub fn as_str(self) -> &'static str {
        match self {
            SolverId::ClpLinearProgramming => "CLP_LINEAR_PROGRAMMING",
            SolverId::Clp => "CLP",
            SolverId::CbcMixedIntegerProgramming => "CBC_MIXED_INTEGER_PROGRAMMING",
            SolverId::Cbc => "CBC",
            SolverId::GlopLinearProgramming => "GLOP_LINEAR_PROGRAMMING",
            SolverId::Glop => "GLOP",
            SolverId::BopIntegerProgramming => "BOP_INTEGER_PROGRAMMING",
            SolverId::Bop => "BOP",
            SolverId::SatIntegerProgramming => "SAT_INTEGER_PROGRAMMING",
            SolverId::Sat => "SAT",
            SolverId::CpSat => "CP_SAT",
            SolverId::ScipMixedIntegerProgramming => "SCIP_MIXED_INTEGER_PROGRAMMING",
            SolverId::Scip => "SCIP",
            SolverId::GurobiLinearProgramming => "GUROBI_LINEAR_PROGRAMMING",
            SolverId::GurobiLp => "GUROBI_LP",
            SolverId::GurobiMixedIntegerProgramming => "GUROBI_MIXED_INTEGER_PROGRAMMING",
            SolverId::Gurobi => "GUROBI",
            SolverId::GurobiMip => "GUROBI_MIP",
            SolverId::CplexLinearProgramming => "CPLEX_LINEAR_PROGRAMMING",
            SolverId::CplexLp => "CPLEX_LP",
            SolverId::CplexMixedIntegerProgramming => "CPLEX_MIXED_INTEGER_PROGRAMMING",
            SolverId::Cplex => "CPLEX",
            SolverId::CplexMip => "CPLEX_MIP",
            SolverId::XpressLinearProgramming => "XPRESS_LINEAR_PROGRAMMING",
            SolverId::XpressLp => "XPRESS_LP",
            SolverId::XpressMixedIntegerProgramming => "XPRESS_MIXED_INTEGER_PROGRAMMING",
            SolverId::Xpress => "XPRESS",
            SolverId::XpressMip => "XPRESS_MIP",
            SolverId::GlpkLinearProgramming => "GLPK_LINEAR_PROGRAMMING",
            SolverId::GlpkLp => "GLPK_LP",
            SolverId::GlpkMixedIntegerProgramming => "GLPK_MIXED_INTEGER_PROGRAMMING",
            SolverId::Glpk => "GLPK",
            SolverId::GlpkMip => "GLPK_MIP",
            SolverId::HighsLinearProgramming => "HIGHS_LINEAR_PROGRAMMING",
            SolverId::HighsLp => "HIGHS_LP",
            SolverId::HighsMixedIntegerProgramming => "HIGHS_MIXED_INTEGER_PROGRAMMING",
            SolverId::Highs => "HIGHS",
        }
    }

    /// Engine this identifier is served by, if any Rust binding exists for it
    pub fn backend(self) -> Option<SolverBackend> {
        use SolverId::*;
        match self {
            ClpLinearProgramming | Clp | CbcMixedIntegerProgramming | Cbc => {
                Some(SolverBackend::CoinCbc)
            }
            GlopLinearProgramming | Glop => Some(SolverBackend::MicroLp),
            ScipMixedIntegerProgramming | Scip => Some(SolverBackend::Scip),
            HighsLinearProgramming | HighsLp | HighsMixedIntegerProgramming | Highs => {
                Some(SolverBackend::Highs)
            }
            BopIntegerProgramming | Bop | SatIntegerProgramming | Sat | CpSat
            | GurobiLinearProgramming | GurobiLp | GurobiMixedIntegerProgramming | Gurobi
            | GurobiMip | CplexLinearProgramming | CplexLp | CplexMixedIntegerProgramming
            | Cplex | CplexMip | XpressLinearProgramming | XpressLp
            | XpressMixedIntegerProgramming | Xpress | XpressMip | GlpkLinearProgramming
            | GlpkLp | GlpkMixedIntegerProgramming | Glpk | GlpkMip => None,
        }
    }

    pub fn problem_class(self) -> ProblemClass {
        use SolverId::*;
        match self {
            ClpLinearProgramming | Clp | GlopLinearProgramming | Glop
            | GurobiLinearProgramming | GurobiLp | CplexLinearProgramming | CplexLp
            | XpressLinearProgramming | XpressLp | GlpkLinearProgramming | GlpkLp
            | HighsLinearProgramming | HighsLp => ProblemClass::Linear,
            _ => ProblemClass::MixedInteger,
        }
    }
}

impl fmt::Display for SolverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SolverId {
    type Err = SolverError;

    /// Parse an identifier token (case-insensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim().to_ascii_uppercase();
        SolverId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == token)
            .ok_or_else(|| SolverError::UnknownSolverId(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_id_from_str() {
        assert_eq!("GLOP".parse::<SolverId>().unwrap(), SolverId::Glop);
        assert_eq!("glop".parse::<SolverId>().unwrap(), SolverId::Glop);
        assert_eq!(" Cp_Sat ".parse::<SolverId>().unwrap(), SolverId::CpSat);
        assert_eq!(
            "highs_mixed_integer_programming".parse::<SolverId>().unwrap(),
            SolverId::HighsMixedIntegerProgramming
        );
        assert!(matches!(
            "unknown".parse::<SolverId>(),
            Err(SolverError::UnknownSolverId(name)) if name == "unknown"
        ));
    }

    #[test]
    fn test_every_token_parses_back() {
        for id in SolverId::ALL {
            assert_eq!(id.as_str().parse::<SolverId>().unwrap(), id);
            assert_eq!(id.to_string(), id.as_str());
        }
    }

    #[test]
    fn test_synonyms_share_backend() {
        assert_eq!(SolverId::Glop.backend(), SolverId::GlopLinearProgramming.backend());
        assert_eq!(SolverId::Cbc.backend(), SolverId::Clp.backend());
        assert_eq!(SolverId::Scip.backend(), Some(SolverBackend::Scip));
        assert_eq!(SolverId::HighsLp.backend(), Some(SolverBackend::Highs));
        assert_eq!(SolverId::GurobiMip.backend(), None);
        assert_eq!(SolverId::CpSat.backend(), None);
    }

    #[test]
    fn test_problem_class() {
        assert_eq!(SolverId::Glop.problem_class(), ProblemClass::Linear);
        assert_eq!(SolverId::Clp.problem_class(), ProblemClass::Linear);
        assert_eq!(SolverId::HighsLp.problem_class(), ProblemClass::Linear);
        assert_eq!(SolverId::Cbc.problem_class(), ProblemClass::MixedInteger);
        assert_eq!(SolverId::Highs.problem_class(), ProblemClass::MixedInteger);
        assert_eq!(SolverId::Bop.problem_class(), ProblemClass::MixedInteger);
    }

    #[test]
    fn test_result_status_has_solution() {
        assert!(ResultStatus::Optimal.has_solution());
        assert!(ResultStatus::Feasible.has_solution());
        assert!(!ResultStatus::Infeasible.has_solution());
        assert!(!ResultStatus::NotSolved.has_solution());
        assert_eq!(ResultStatus::ModelInvalid.to_string(), "Model Invalid");
    }
}
