use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The action taken (or planned) against a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of an [`Action`] on a single resource.
///
/// Items start at `Empty`. A dry run moves them straight to `DryRun`; a real
/// run moves them to `InProgress` once the provider has accepted (or is
/// already processing) the deletion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionStatus {
    #[serde(rename = "")]
    Empty,
    #[serde(rename = "in progress")]
    InProgress,
    #[serde(rename = "dry run")]
    DryRun,
    #[serde(rename = "skipped")]
    Skipped,
    #[serde(rename = "complete")]
    Complete,
}

impl ActionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "",
            Self::InProgress => "in progress",
            Self::DryRun => "dry run",
            Self::Skipped => "skipped",
            Self::Complete => "complete",
        }
    }
}

impl std::fmt::Display for ActionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome for one resource that matched the cluster's tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportItem {
    /// Globally unique identifier of the resource (an ARN on AWS).
    pub id: String,
    /// Human-readable identifier.
    pub name: String,
    pub action: Action,
    pub action_status: ActionStatus,
}

impl ReportItem {
    /// A fresh delete candidate, before any transition has been recorded.
    pub fn delete(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            action: Action::Delete,
            action_status: ActionStatus::Empty,
        }
    }
}

/// Ordered outcome of a teardown: engine registration order, then discovery
/// order within each engine. Items are never deduplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub items: Vec<ReportItem>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReportItem> {
        self.items.iter()
    }

    /// Number of items per status, for summaries.
    pub fn count_by_status(&self) -> BTreeMap<ActionStatus, usize> {
        let mut counts = BTreeMap::new();
        for item in &self.items {
            *counts.entry(item.action_status).or_insert(0) += 1;
        }
        counts
    }

    pub fn to_json_pretty(&self) -> Result<String, crate::error::CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Extend<ReportItem> for Report {
    fn extend<I: IntoIterator<Item = ReportItem>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl FromIterator<ReportItem> for Report {
    fn from_iter<I: IntoIterator<Item = ReportItem>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for Report {
    type Item = ReportItem;
    type IntoIter = std::vec::IntoIter<ReportItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a ReportItem;
    type IntoIter = std::slice::Iter<'a, ReportItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
