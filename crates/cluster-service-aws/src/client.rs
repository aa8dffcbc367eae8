use aws_config::SdkConfig;
use cluster_service_core::{BoxFuture, Client, Report, TagSet};

use crate::engine::ActionEngine;
use crate::error::ClientError;
use crate::rds::RdsEngine;

/// Deletes a cluster's AWS resources by running each engine in turn.
///
/// Engines run in registration order and their items are appended to one
/// report. The first engine error aborts the call: later engines never run
/// and the report built so far is dropped.
pub struct AwsClient {
    engines: Vec<Box<dyn ActionEngine>>,
}

impl AwsClient {
    pub fn new(engines: Vec<Box<dyn ActionEngine>>) -> Self {
        Self { engines }
    }

    /// The default engine set for an account.
    pub fn from_sdk_config(config: &SdkConfig) -> Self {
        Self::new(vec![Box::new(RdsEngine::from_sdk_config(config))])
    }

    /// Engine names in the order they run.
    pub fn engine_names(&self) -> impl Iterator<Item = &str> {
        self.engines.iter().map(|e| e.name())
    }

    pub async fn delete_resources_for_cluster(
        &self,
        cluster_id: &str,
        tags: &TagSet,
        dry_run: bool,
    ) -> Result<Report, ClientError> {
        tracing::debug!(cluster_id, dry_run, "deleting resources for cluster");
        let mut report = Report::new();

        for engine in &self.engines {
            let engine_name = engine.name();
            tracing::debug!(cluster_id, engine = engine_name, "running engine");

            let items = engine
                .delete_resources_for_cluster(cluster_id, tags, dry_run)
                .await
                .map_err(|source| ClientError::Engine {
                    engine: engine_name.to_string(),
                    cluster_id: cluster_id.to_string(),
                    source,
                })?;

            tracing::debug!(
                cluster_id,
                engine = engine_name,
                items = items.len(),
                "engine finished"
            );
            report.extend(items);
        }

        Ok(report)
    }
}

impl Client for AwsClient {
    type Error = ClientError;

    fn delete_resources_for_cluster<'a>(
        &'a self,
        cluster_id: &'a str,
        tags: &'a TagSet,
        dry_run: bool,
    ) -> BoxFuture<'a, Result<Report, ClientError>> {
        Box::pin(AwsClient::delete_resources_for_cluster(
            self, cluster_id, tags, dry_run,
        ))
    }
}
