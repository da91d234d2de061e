pub mod actions;
pub mod metrics;
pub mod slug;
pub mod store;

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub use metrics::{compute_metrics, Insight, Metrics};
pub use slug::CourseId;
pub use store::ProgressStore;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    NotStarted,
    Started,
    Completed,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::Started => "started",
            Self::Completed => "completed",
        }
    }
}

impl Display for CourseStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let display = match self {
            Self::NotStarted => "Not started",
            Self::Started => "Started",
            Self::Completed => "Completed",
        };
        write!(f, "{display}")
    }
}

/// On-disk form of a tracked status. Not-started courses are never stored.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
enum StoredStatus {
    Started,
    Completed,
}

impl From<StoredStatus> for CourseStatus {
    fn from(value: StoredStatus) -> Self {
        match value {
            StoredStatus::Started => CourseStatus::Started,
            StoredStatus::Completed => CourseStatus::Completed,
        }
    }
}

/// Tracked courses and their status. A missing key means not started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressRecord {
    entries: BTreeMap<CourseId, CourseStatus>,
}

impl ProgressRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self, id: &CourseId) -> CourseStatus {
        self.entries
            .get(id)
            .copied()
            .unwrap_or(CourseStatus::NotStarted)
    }

    pub fn set(&mut self, id: CourseId, status: CourseStatus) {
        match status {
            CourseStatus::NotStarted => {
                self.entries.remove(&id);
            }
            tracked => {
                self.entries.insert(id, tracked);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CourseId, CourseStatus)> {
        self.entries.iter().map(|(id, status)| (id, *status))
    }

    pub fn count(&self, status: CourseStatus) -> usize {
        self.entries.values().filter(|s| **s == status).count()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        let stored: BTreeMap<&str, StoredStatus> = self
            .entries
            .iter()
            .filter_map(|(id, status)| {
                let stored = match status {
                    CourseStatus::Started => StoredStatus::Started,
                    CourseStatus::Completed => StoredStatus::Completed,
                    CourseStatus::NotStarted => return None,
                };
                Some((id.as_str(), stored))
            })
            .collect();
        serde_json::to_string(&stored)
    }

    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let stored: BTreeMap<String, StoredStatus> = serde_json::from_str(raw)?;
        let entries = stored
            .into_iter()
            .map(|(id, status)| (CourseId::from_title(&id), CourseStatus::from(status)))
            .collect();
        Ok(Self { entries })
    }
}

/// One row of a course-list redraw.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CourseProgress {
    pub id: CourseId,
    pub title: String,
    pub status: CourseStatus,
}
