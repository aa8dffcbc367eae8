//! RDS database instances.

mod api;
mod engine;

pub use api::{DbInstance, DeleteOptions, RdsApi};
pub use engine::{RdsEngine, ENGINE_NAME, STATUS_DELETING};
