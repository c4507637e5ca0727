// Infrastructure: process-wide solver runtime
// Initialized at most once, before the first solver handle is created

use std::sync::OnceLock;
use tracing::info;

use crate::domain::value_objects::SolverBackend;
use crate::solver::SolverFactory;

static RUNTIME: OnceLock<Runtime> = OnceLock::new();

/// Engines available to this process
#[derive(Debug)]
pub struct Runtime {
    backends: Vec<SolverBackend>,
}

impl Runtime {
    fn load() -> Self {
        let backends: Vec<SolverBackend> = SolverBackend::ALL
            .into_iter()
            .filter(|&backend| SolverFactory::is_compiled(backend))
            .collect();

        info!(
            event = "runtime_init",
            backends = ?backends,
            "solver runtime initialized"
        );

        Self { backends }
    }

    pub fn backends(&self) -> &[SolverBackend] {
        &self.backends
    }

    pub fn is_available(&self, backend: SolverBackend) -> bool {
        self.backends.contains(&backend)
    }
}

/// Initialize the runtime if needed and return it. Idempotent.
pub fn initialize() -> &'static Runtime {
    RUNTIME.get_or_init(Runtime::load)
}
