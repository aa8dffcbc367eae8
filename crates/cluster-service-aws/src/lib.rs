//! cluster-service-aws
//!
//! Tag-driven teardown of AWS resources left behind by a cluster.
//!
//! Public API:
//! - `AwsClient` — runs each registered `ActionEngine` in order and
//!   concatenates their report items, failing fast on the first error
//! - `RdsEngine` — deletes RDS instances tagged with the cluster id
//! - `config::load_sdk_config()` — build an `SdkConfig` from region/profile

pub mod client;
pub mod config;
pub mod engine;
pub mod error;
pub mod rds;

pub use crate::client::AwsClient;
pub use crate::config::{load_sdk_config, SessionConfig};
pub use crate::engine::ActionEngine;
pub use crate::error::{ClientError, EngineError, ProviderError};
pub use crate::rds::{DbInstance, DeleteOptions, RdsApi, RdsEngine};
