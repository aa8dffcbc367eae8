//! Tag matching.
//!
//! Pure functions — no provider SDK dependency. A resource belongs to a
//! cluster when it carries the cluster-identity tag with the cluster's id, and
//! every extra tag the caller asked for.

use std::collections::HashMap;

use crate::error::CoreError;

/// Tag key whose value identifies the cluster that owns a resource.
pub const TAG_KEY_CLUSTER_ID: &str = "integreatly.org/clusterID";

/// Tag key to tag value. Keys are unique.
pub type TagSet = HashMap<String, String>;

/// True iff `tags` has `key` with exactly `value`. Case-sensitive; an absent
/// key never matches.
pub fn matches(key: &str, value: &str, tags: &TagSet) -> bool {
    tags.get(key).is_some_and(|v| v == value)
}

/// True iff every entry of `required` matches. An empty `required` matches
/// any tag set.
pub fn matches_all(required: &TagSet, tags: &TagSet) -> bool {
    required.iter().all(|(k, v)| matches(k, v, tags))
}

/// True iff `tags` carries the identity tag for `cluster_id` and satisfies
/// every extra tag.
pub fn matches_cluster(cluster_id: &str, extra: &TagSet, tags: &TagSet) -> bool {
    matches(TAG_KEY_CLUSTER_ID, cluster_id, tags) && matches_all(extra, tags)
}

/// Collect provider tag pairs into a [`TagSet`].
///
/// Pairs without a key are dropped; a missing value becomes the empty string.
/// When a key repeats, the last pair wins.
pub fn tag_set_from_pairs<I, K, V>(pairs: I) -> TagSet
where
    I: IntoIterator<Item = (Option<K>, Option<V>)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .filter_map(|(k, v)| Some((k?.into(), v.map(Into::into).unwrap_or_default())))
        .collect()
}

/// Parse a `KEY=VALUE` argument. The value may be empty or contain `=`.
pub fn parse_tag(raw: &str) -> Result<(String, String), CoreError> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| CoreError::InvalidTag(raw.to_string()))?;
    if key.is_empty() {
        return Err(CoreError::EmptyTagKey(raw.to_string()));
    }
    Ok((key.to_string(), value.to_string()))
}
