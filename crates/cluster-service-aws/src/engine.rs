use cluster_service_core::{BoxFuture, ReportItem, TagSet};

use crate::error::EngineError;

/// One impl per AWS resource kind.
///
/// Each engine discovers every resource of its kind, keeps the ones tagged
/// for the cluster, and deletes them (or only reports them on a dry run).
///
/// Methods return boxed futures for dyn compatibility.
pub trait ActionEngine: Send + Sync {
    /// Human-readable engine name, used as error and log context.
    fn name(&self) -> &str;

    /// Process every resource of this kind owned by `cluster_id` that also
    /// carries all of `tags`. Returns one item per candidate, in discovery
    /// order, or the first error with no items.
    fn delete_resources_for_cluster<'a>(
        &'a self,
        cluster_id: &'a str,
        tags: &'a TagSet,
        dry_run: bool,
    ) -> BoxFuture<'a, Result<Vec<ReportItem>, EngineError>>;
}
