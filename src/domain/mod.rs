// Domain module: problem model, engine contract and value objects

pub mod models;
pub mod solver_service;
pub mod value_objects;

pub use models::*;
pub use solver_service::*;
pub use value_objects::*;
