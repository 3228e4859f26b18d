use crate::domain::model::RepositoryRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Repository names that always sort first, in this order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriorityList(pub Vec<String>);

impl PriorityList {
    pub fn position(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|n| n == name)
    }
}

impl Default for PriorityList {
    fn default() -> Self {
        Self(
            ["mysite", "fetchquesttracker", "swedishprivacyaudit"]
                .into_iter()
                .map(String::from)
                .collect(),
        )
    }
}

/// A record is shown iff it publishes a site, is not archived and is not the
/// portfolio's own repository.
pub fn qualifies(record: &RepositoryRecord, self_repository: &str) -> bool {
    record.has_pages && !record.archived && record.name != self_repository
}

fn by_priority(a: &RepositoryRecord, b: &RepositoryRecord, priority: &PriorityList) -> Ordering {
    match (priority.position(&a.name), priority.position(&b.name)) {
        (Some(ai), Some(bi)) => ai.cmp(&bi),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn by_featured(a: &RepositoryRecord, b: &RepositoryRecord) -> Ordering {
    // featured first: true must compare as smaller
    b.is_featured().cmp(&a.is_featured())
}

fn by_recency(a: &RepositoryRecord, b: &RepositoryRecord) -> Ordering {
    b.updated_at.cmp(&a.updated_at)
}

/// Priority list, then the `featured` topic, then most recently updated.
pub fn compare(a: &RepositoryRecord, b: &RepositoryRecord, priority: &PriorityList) -> Ordering {
    by_priority(a, b, priority)
        .then_with(|| by_featured(a, b))
        .then_with(|| by_recency(a, b))
}

/// Filters and ranks the listing in one pass.
pub fn select_and_rank(
    records: Vec<RepositoryRecord>,
    self_repository: &str,
    priority: &PriorityList,
) -> Vec<RepositoryRecord> {
    let mut selected: Vec<RepositoryRecord> = records
        .into_iter()
        .filter(|r| qualifies(r, self_repository))
        .collect();
    selected.sort_by(|a, b| compare(a, b, priority));
    selected
}
