use std::sync::Arc;

use aws_sdk_rds::Client;
use cluster_service_core::tags::{tag_set_from_pairs, TagSet};
use cluster_service_core::BoxFuture;

use crate::error::ProviderError;

/// The parts of an RDS instance the engine looks at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbInstance {
    pub identifier: String,
    pub arn: String,
    /// Lifecycle status as reported by RDS (e.g. "available", "deleting").
    pub status: String,
    pub deletion_protection: bool,
}

impl From<&aws_sdk_rds::types::DbInstance> for DbInstance {
    fn from(db: &aws_sdk_rds::types::DbInstance) -> Self {
        Self {
            identifier: db.db_instance_identifier().unwrap_or_default().to_string(),
            arn: db.db_instance_arn().unwrap_or_default().to_string(),
            status: db.db_instance_status().unwrap_or_default().to_string(),
            deletion_protection: db.deletion_protection().unwrap_or(false),
        }
    }
}

/// Options for `DeleteDBInstance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOptions {
    pub skip_final_snapshot: bool,
    pub delete_automated_backups: bool,
}

impl Default for DeleteOptions {
    /// Teardown defaults: no final snapshot, automated backups go too.
    fn default() -> Self {
        Self {
            skip_final_snapshot: true,
            delete_automated_backups: true,
        }
    }
}

/// RDS operations the engine needs. Implemented for the SDK client and for
/// test doubles.
pub trait RdsApi: Send + Sync {
    /// Every instance visible to the caller, across all pages.
    fn list_db_instances(&self) -> BoxFuture<'_, Result<Vec<DbInstance>, ProviderError>>;

    fn list_tags<'a>(&'a self, arn: &'a str) -> BoxFuture<'a, Result<TagSet, ProviderError>>;

    /// Returns the modified instance when RDS includes it in the response.
    fn disable_deletion_protection<'a>(
        &'a self,
        identifier: &'a str,
    ) -> BoxFuture<'a, Result<Option<DbInstance>, ProviderError>>;

    fn delete_db_instance<'a>(
        &'a self,
        identifier: &'a str,
        options: DeleteOptions,
    ) -> BoxFuture<'a, Result<(), ProviderError>>;
}

impl RdsApi for Client {
    fn list_db_instances(&self) -> BoxFuture<'_, Result<Vec<DbInstance>, ProviderError>> {
        Box::pin(async move {
            let mut instances = Vec::new();
            let mut marker = None;
            loop {
                let resp = self
                    .describe_db_instances()
                    .set_marker(marker.take())
                    .send()
                    .await
                    .map_err(|e| ProviderError::from_sdk("rds:DescribeDBInstances", &e))?;

                instances.extend(resp.db_instances().iter().map(DbInstance::from));

                match resp.marker() {
                    Some(next) if !next.is_empty() => marker = Some(next.to_string()),
                    _ => break,
                }
            }
            Ok(instances)
        })
    }

    fn list_tags<'a>(&'a self, arn: &'a str) -> BoxFuture<'a, Result<TagSet, ProviderError>> {
        Box::pin(async move {
            let resp = self
                .list_tags_for_resource()
                .resource_name(arn)
                .send()
                .await
                .map_err(|e| ProviderError::from_sdk("rds:ListTagsForResource", &e))?;

            Ok(tag_set_from_pairs(
                resp.tag_list().iter().map(|t| (t.key(), t.value())),
            ))
        })
    }

    fn disable_deletion_protection<'a>(
        &'a self,
        identifier: &'a str,
    ) -> BoxFuture<'a, Result<Option<DbInstance>, ProviderError>> {
        Box::pin(async move {
            let resp = self
                .modify_db_instance()
                .db_instance_identifier(identifier)
                .deletion_protection(false)
                .send()
                .await
                .map_err(|e| ProviderError::from_sdk("rds:ModifyDBInstance", &e))?;

            Ok(resp.db_instance().map(DbInstance::from))
        })
    }

    fn delete_db_instance<'a>(
        &'a self,
        identifier: &'a str,
        options: DeleteOptions,
    ) -> BoxFuture<'a, Result<(), ProviderError>> {
        Box::pin(async move {
            Client::delete_db_instance(self)
                .db_instance_identifier(identifier)
                .skip_final_snapshot(options.skip_final_snapshot)
                .delete_automated_backups(options.delete_automated_backups)
                .send()
                .await
                .map_err(|e| ProviderError::from_sdk("rds:DeleteDBInstance", &e))?;
            Ok(())
        })
    }
}

impl<T: RdsApi + ?Sized> RdsApi for Arc<T> {
    fn list_db_instances(&self) -> BoxFuture<'_, Result<Vec<DbInstance>, ProviderError>> {
        (**self).list_db_instances()
    }

    fn list_tags<'a>(&'a self, arn: &'a str) -> BoxFuture<'a, Result<TagSet, ProviderError>> {
        (**self).list_tags(arn)
    }

    fn disable_deletion_protection<'a>(
        &'a self,
        identifier: &'a str,
    ) -> BoxFuture<'a, Result<Option<DbInstance>, ProviderError>> {
        (**self).disable_deletion_protection(identifier)
    }

    fn delete_db_instance<'a>(
        &'a self,
        identifier: &'a str,
        options: DeleteOptions,
    ) -> BoxFuture<'a, Result<(), ProviderError>> {
        (**self).delete_db_instance(identifier, options)
    }
}
