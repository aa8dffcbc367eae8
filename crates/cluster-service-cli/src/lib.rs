//! cluster-service-cli
//!
//! Argument parsing and report rendering for the `cluster-service` binary.

pub mod cli;
pub mod output;
