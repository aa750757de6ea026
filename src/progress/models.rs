//! Persisted progress records
//!
//! Field names serialize in camelCase to stay readable by the web client
//! that shares the same storage keys.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fraction of a video that counts as watched
pub const VIDEO_COMPLETION_RATIO: f64 = 0.9;

/// Maximum length of the recently-viewed list
pub const RECENTLY_VIEWED_LIMIT: usize = 10;

/// Progress through one syllabus topic
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicProgressRecord {
    pub topic_id: String,
    /// 0..=100
    pub progress: u8,
    pub last_accessed: DateTime<Utc>,
    pub completed: bool,
}

/// Playback position in one lecture video
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoProgressRecord {
    pub video_id: String,
    pub timestamp_seconds: f64,
    pub duration_seconds: f64,
    pub completed: bool,
    pub last_watched: DateTime<Utc>,
}

impl VideoProgressRecord {
    /// Whether a position counts as having finished the video
    pub fn is_watched(timestamp_seconds: f64, duration_seconds: f64) -> bool {
        duration_seconds > 0.0 && timestamp_seconds >= duration_seconds * VIDEO_COMPLETION_RATIO
    }

    /// Watched percentage, 0..=100
    pub fn percent(&self) -> f64 {
        if self.duration_seconds <= 0.0 {
            return 0.0;
        }
        (self.timestamp_seconds / self.duration_seconds * 100.0).clamp(0.0, 100.0)
    }
}

/// Set of completed topic ids for one exam.
///
/// Crosses the JSON boundary as an array; duplicates in stored data
/// collapse on read and never get written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct CompletedTopicSet(BTreeSet<String>);

impl CompletedTopicSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, topic_id: &str) -> bool {
        self.0.contains(topic_id)
    }

    /// Returns true if the topic was not already present
    pub fn insert(&mut self, topic_id: &str) -> bool {
        self.0.insert(topic_id.to_string())
    }

    /// Returns true if the topic was present
    pub fn remove(&mut self, topic_id: &str) -> bool {
        self.0.remove(topic_id)
    }

    /// Insert or remove depending on `completed`
    pub fn set(&mut self, topic_id: &str, completed: bool) {
        if completed {
            self.insert(topic_id);
        } else {
            self.remove(topic_id);
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for CompletedTopicSet {
    fn from(ids: Vec<String>) -> Self {
        Self(ids.into_iter().collect())
    }
}

impl From<CompletedTopicSet> for Vec<String> {
    fn from(set: CompletedTopicSet) -> Self {
        set.0.into_iter().collect()
    }
}

/// Kind of resource a bookmark points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Video,
    Pdf,
    Test,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Video => "video",
            Self::Pdf => "pdf",
            Self::Test => "test",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "video" => Some(Self::Video),
            "pdf" => Some(Self::Pdf),
            "test" => Some(Self::Test),
            _ => None,
        }
    }
}

/// A saved study resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bookmark {
    pub id: String,
    pub exam_id: String,
    pub topic_id: String,
    pub topic_name: String,
    pub subject_name: String,
    pub resource_id: String,
    pub resource_type: ResourceType,
    pub resource_title: String,
    pub created_at: DateTime<Utc>,
}

/// Caller-supplied bookmark fields; the store assigns `id` and `created_at`
#[derive(Debug, Clone, PartialEq)]
pub struct NewBookmark {
    pub exam_id: String,
    pub topic_id: String,
    pub topic_name: String,
    pub subject_name: String,
    pub resource_id: String,
    pub resource_type: ResourceType,
    pub resource_title: String,
}

impl NewBookmark {
    /// Id derived from the identifying fields plus the creation time in ms
    pub fn bookmark_id(&self, created_ms: i64) -> String {
        format!(
            "{}-{}-{}-{}",
            self.exam_id, self.topic_id, self.resource_id, created_ms
        )
    }
}

/// One entry of the global recently-viewed list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentlyViewedEntry {
    pub topic_id: String,
    pub topic_name: String,
    pub subject_name: String,
    pub exam_id: String,
    pub viewed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_set_dedups_on_read() {
        let set: CompletedTopicSet = serde_json::from_str(r#"["a","b","a"]"#).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["a","b"]"#);
    }

    #[test]
    fn test_completed_set_toggle() {
        let mut set = CompletedTopicSet::new();
        set.set("t1", true);
        set.set("t1", true);
        assert_eq!(set.len(), 1);
        set.set("t1", false);
        assert!(set.is_empty());
    }

    #[test]
    fn test_video_completion_threshold() {
        assert!(!VideoProgressRecord::is_watched(89.0, 100.0));
        assert!(VideoProgressRecord::is_watched(90.0, 100.0));
        assert!(!VideoProgressRecord::is_watched(10.0, 0.0));
    }

    #[test]
    fn test_bookmark_serializes_camel_case() {
        let bookmark = Bookmark {
            id: "upsc-t1-r1-1".to_string(),
            exam_id: "upsc".to_string(),
            topic_id: "t1".to_string(),
            topic_name: "Constitution".to_string(),
            subject_name: "Polity".to_string(),
            resource_id: "r1".to_string(),
            resource_type: ResourceType::Pdf,
            resource_title: "Preamble notes".to_string(),
            created_at: DateTime::from_timestamp(0, 0).unwrap(),
        };
        let json = serde_json::to_value(&bookmark).unwrap();
        assert_eq!(json["examId"], "upsc");
        assert_eq!(json["resourceType"], "pdf");
    }
}
