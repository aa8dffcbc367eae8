use aws_config::SdkConfig;
use cluster_service_core::tags;
use cluster_service_core::{ActionStatus, BoxFuture, ReportItem, TagSet};
use tracing::Instrument;

use super::api::{DbInstance, DeleteOptions, RdsApi};
use crate::engine::ActionEngine;
use crate::error::EngineError;

pub const ENGINE_NAME: &str = "AWS RDS Engine";

/// RDS rejects a delete for an instance that is already being deleted.
pub const STATUS_DELETING: &str = "deleting";

/// Deletes RDS instances tagged for a cluster.
pub struct RdsEngine<A = aws_sdk_rds::Client> {
    api: A,
    delete_options: DeleteOptions,
}

impl RdsEngine<aws_sdk_rds::Client> {
    pub fn from_sdk_config(config: &SdkConfig) -> Self {
        Self::new(aws_sdk_rds::Client::new(config))
    }
}

impl<A: RdsApi> RdsEngine<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            delete_options: DeleteOptions::default(),
        }
    }

    pub fn with_delete_options(mut self, options: DeleteOptions) -> Self {
        self.delete_options = options;
        self
    }

    /// List every instance and keep the ones tagged for the cluster, in
    /// discovery order. Any tag lookup failure aborts the whole filter.
    async fn matching_instances(
        &self,
        cluster_id: &str,
        extra_tags: &TagSet,
    ) -> Result<Vec<DbInstance>, EngineError> {
        let instances =
            self.api
                .list_db_instances()
                .await
                .map_err(|source| EngineError::Discovery {
                    cluster_id: cluster_id.to_string(),
                    source,
                })?;

        let mut matched = Vec::new();
        for db in instances {
            tracing::debug!(db = %db.identifier, "checking database tags");
            let db_tags =
                self.api
                    .list_tags(&db.arn)
                    .await
                    .map_err(|source| EngineError::TagLookup {
                        cluster_id: cluster_id.to_string(),
                        resource_id: db.identifier.clone(),
                        source,
                    })?;

            if !tags::matches_cluster(cluster_id, extra_tags, &db_tags) {
                tracing::debug!(db = %db.identifier, "tags did not match, ignoring database");
                continue;
            }
            matched.push(db);
        }

        tracing::debug!(count = matched.len(), "filtering complete");
        Ok(matched)
    }

    /// Clear deletion protection if set, then delete. Returns early when RDS
    /// is already deleting the instance.
    async fn delete_instance(&self, cluster_id: &str, db: DbInstance) -> Result<(), EngineError> {
        if db.status == STATUS_DELETING {
            tracing::debug!(db = %db.identifier, "deletion already in progress");
            return Ok(());
        }

        let mut identifier = db.identifier;
        if db.deletion_protection {
            tracing::debug!(db = %identifier, "removing deletion protection");
            let modified = self
                .api
                .disable_deletion_protection(&identifier)
                .await
                .map_err(|source| EngineError::Remediation {
                    cluster_id: cluster_id.to_string(),
                    resource_id: identifier.clone(),
                    source,
                })?;
            if let Some(modified) = modified.filter(|m| !m.identifier.is_empty()) {
                identifier = modified.identifier;
            }
        }

        self.api
            .delete_db_instance(&identifier, self.delete_options)
            .await
            .map_err(|source| EngineError::Deletion {
                cluster_id: cluster_id.to_string(),
                resource_id: identifier.clone(),
                source,
            })?;

        tracing::info!(db = %identifier, "RDS instance deletion requested");
        Ok(())
    }
}

impl<A: RdsApi> ActionEngine for RdsEngine<A> {
    fn name(&self) -> &str {
        ENGINE_NAME
    }

    fn delete_resources_for_cluster<'a>(
        &'a self,
        cluster_id: &'a str,
        tags: &'a TagSet,
        dry_run: bool,
    ) -> BoxFuture<'a, Result<Vec<ReportItem>, EngineError>> {
        let span = tracing::debug_span!("rds", engine = ENGINE_NAME, cluster_id, dry_run);
        Box::pin(
            async move {
                tracing::debug!("deleting RDS instances for cluster");
                let candidates = self.matching_instances(cluster_id, tags).await?;

                let mut items = Vec::with_capacity(candidates.len());
                for db in candidates {
                    let mut item = ReportItem::delete(&db.arn, &db.identifier);

                    if dry_run {
                        tracing::debug!(db = %db.identifier, "dry run, skipping deletion");
                        item.action_status = ActionStatus::DryRun;
                        items.push(item);
                        continue;
                    }

                    item.action_status = ActionStatus::InProgress;
                    items.push(item);
                    self.delete_instance(cluster_id, db).await?;
                }

                Ok(items)
            }
            .instrument(span),
        )
    }
}
