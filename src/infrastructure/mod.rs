// Infrastructure: process-wide concerns

pub mod runtime;

pub use runtime::{initialize, Runtime};
