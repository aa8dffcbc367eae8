//! cluster-service-core
//!
//! Provider-neutral types for tearing down the cloud resources left behind by
//! a cluster. No AWS SDK dependency — this is the shared vocabulary of the
//! cluster-service workspace.
//!
//! Public API:
//! - `Report` / `ReportItem` — the ordered, per-resource outcome of a teardown
//! - `tags` — the tag matcher used to decide which resources belong to a cluster
//! - `Client` — the library entry point implemented by each provider

pub mod client;
pub mod error;
pub mod models;
pub mod tags;

pub use crate::client::{BoxFuture, Client};
pub use crate::error::CoreError;
pub use crate::models::report::{Action, ActionStatus, Report, ReportItem};
pub use crate::tags::{TagSet, TAG_KEY_CLUSTER_ID};
