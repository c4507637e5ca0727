use crate::domain::{solver_service::SolverService, value_objects::SolverBackend};
use std::sync::Arc;

#[cfg(feature = "coin_cbc")]
use crate::solver::CoinCbcSolver;
#[cfg(feature = "highs")]
use crate::solver::HighsSolver;
#[cfg(feature = "microlp")]
use crate::solver::MicroLpSolver;
#[cfg(feature = "scip")]
use crate::solver::ScipSolver;

/// Factory for creating engine adapters
pub struct SolverFactory;

impl SolverFactory {
    /// Create the adapter for `backend`, or `None` when it is not compiled in
    pub fn create_from_backend(backend: SolverBackend) -> Option<Arc<dyn SolverService>> {
        match backend {
            #[cfg(feature = "coin_cbc")]
            SolverBackend::CoinCbc => Some(Arc::new(CoinCbcSolver::new())),
            #[cfg(feature = "highs")]
            SolverBackend::Highs => Some(Arc::new(HighsSolver::new())),
            #[cfg(feature = "microlp")]
            SolverBackend::MicroLp => Some(Arc::new(MicroLpSolver::new())),
            #[cfg(feature = "scip")]
            SolverBackend::Scip => Some(Arc::new(ScipSolver::new())),
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }

    /// Whether the cargo feature for `backend` is enabled in this build
    pub fn is_compiled(backend: SolverBackend) -> bool {
        match backend {
            SolverBackend::CoinCbc => cfg!(feature = "coin_cbc"),
            SolverBackend::Highs => cfg!(feature = "highs"),
            SolverBackend::MicroLp => cfg!(feature = "microlp"),
            SolverBackend::Scip => cfg!(feature = "scip"),
        }
    }
}
