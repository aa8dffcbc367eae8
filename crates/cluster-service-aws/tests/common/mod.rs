#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

use cluster_service_aws::{
    ActionEngine, DbInstance, DeleteOptions, EngineError, ProviderError, RdsApi,
};
use cluster_service_core::{BoxFuture, ReportItem, TagSet};

/// A provider call observed by [`FakeRds`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    ListTags(String),
    DisableProtection(String),
    Delete(String, DeleteOptions),
}

impl Call {
    pub fn is_mutating(&self) -> bool {
        matches!(self, Call::DisableProtection(_) | Call::Delete(..))
    }
}

/// In-memory RDS that records every call.
#[derive(Default)]
pub struct FakeRds {
    instances: Vec<DbInstance>,
    tags: HashMap<String, TagSet>,
    fail_list: bool,
    fail_tags: HashSet<String>,
    fail_modify: HashSet<String>,
    fail_delete: HashSet<String>,
    calls: Mutex<Vec<Call>>,
}

impl FakeRds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_db(mut self, db: DbInstance, tags: &[(&str, &str)]) -> Self {
        self.tags.insert(db.arn.clone(), tag_set(tags));
        self.instances.push(db);
        self
    }

    pub fn failing_list(mut self) -> Self {
        self.fail_list = true;
        self
    }

    pub fn failing_tags(mut self, identifier: &str) -> Self {
        self.fail_tags.insert(arn(identifier));
        self
    }

    pub fn failing_modify(mut self, identifier: &str) -> Self {
        self.fail_modify.insert(identifier.to_string());
        self
    }

    pub fn failing_delete(mut self, identifier: &str) -> Self {
        self.fail_delete.insert(identifier.to_string());
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn mutating_calls(&self) -> Vec<Call> {
        self.calls().into_iter().filter(Call::is_mutating).collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

impl RdsApi for FakeRds {
    fn list_db_instances(&self) -> BoxFuture<'_, Result<Vec<DbInstance>, ProviderError>> {
        Box::pin(async move {
            self.record(Call::List);
            if self.fail_list {
                return Err(ProviderError::with_code("AccessDenied", "not authorized"));
            }
            Ok(self.instances.clone())
        })
    }

    fn list_tags<'a>(&'a self, arn: &'a str) -> BoxFuture<'a, Result<TagSet, ProviderError>> {
        Box::pin(async move {
            self.record(Call::ListTags(arn.to_string()));
            if self.fail_tags.contains(arn) {
                return Err(ProviderError::new("tag lookup failed"));
            }
            Ok(self.tags.get(arn).cloned().unwrap_or_default())
        })
    }

    fn disable_deletion_protection<'a>(
        &'a self,
        identifier: &'a str,
    ) -> BoxFuture<'a, Result<Option<DbInstance>, ProviderError>> {
        Box::pin(async move {
            self.record(Call::DisableProtection(identifier.to_string()));
            if self.fail_modify.contains(identifier) {
                return Err(ProviderError::new("modify failed"));
            }
            Ok(self
                .instances
                .iter()
                .find(|db| db.identifier == identifier)
                .map(|db| DbInstance {
                    deletion_protection: false,
                    ..db.clone()
                }))
        })
    }

    fn delete_db_instance<'a>(
        &'a self,
        identifier: &'a str,
        options: DeleteOptions,
    ) -> BoxFuture<'a, Result<(), ProviderError>> {
        Box::pin(async move {
            self.record(Call::Delete(identifier.to_string(), options));
            if self.fail_delete.contains(identifier) {
                return Err(ProviderError::with_code(
                    "InvalidDBInstanceState",
                    "instance is not in a deletable state",
                ));
            }
            Ok(())
        })
    }
}

/// Engine double that returns canned items or an error, and logs each run.
pub struct FakeEngine {
    name: String,
    result: Result<Vec<ReportItem>, ()>,
    runs: Arc<Mutex<Vec<String>>>,
}

impl FakeEngine {
    pub fn ok(name: &str, items: Vec<ReportItem>, runs: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name: name.to_string(),
            result: Ok(items),
            runs: Arc::clone(runs),
        }
    }

    pub fn failing(name: &str, runs: &Arc<Mutex<Vec<String>>>) -> Self {
        Self {
            name: name.to_string(),
            result: Err(()),
            runs: Arc::clone(runs),
        }
    }
}

impl ActionEngine for FakeEngine {
    fn name(&self) -> &str {
        &self.name
    }

    fn delete_resources_for_cluster<'a>(
        &'a self,
        cluster_id: &'a str,
        _tags: &'a TagSet,
        _dry_run: bool,
    ) -> BoxFuture<'a, Result<Vec<ReportItem>, EngineError>> {
        Box::pin(async move {
            self.runs.lock().unwrap().push(self.name.clone());
            match &self.result {
                Ok(items) => Ok(items.clone()),
                Err(()) => Err(EngineError::Discovery {
                    cluster_id: cluster_id.to_string(),
                    source: ProviderError::new("listing failed"),
                }),
            }
        })
    }
}

pub fn arn(identifier: &str) -> String {
    format!("arn:aws:rds:eu-west-1:123456789012:db:{identifier}")
}

pub fn db(identifier: &str, status: &str, deletion_protection: bool) -> DbInstance {
    DbInstance {
        identifier: identifier.to_string(),
        arn: arn(identifier),
        status: status.to_string(),
        deletion_protection,
    }
}

pub fn tag_set(pairs: &[(&str, &str)]) -> TagSet {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Shared in-memory sink for captured log output.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl std::io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for LogBuffer {
    type Writer = LogBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
