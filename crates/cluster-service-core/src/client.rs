use std::future::Future;
use std::pin::Pin;

use crate::models::report::Report;
use crate::tags::TagSet;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Entry point implemented once per cloud provider.
///
/// Methods return boxed futures for dyn compatibility.
pub trait Client: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Delete (or, with `dry_run`, only report) every resource tagged with
    /// `cluster_id` that also carries all of `tags`.
    ///
    /// Returns the full report, or the first error with no report at all.
    fn delete_resources_for_cluster<'a>(
        &'a self,
        cluster_id: &'a str,
        tags: &'a TagSet,
        dry_run: bool,
    ) -> BoxFuture<'a, Result<Report, Self::Error>>;
}
