//! Per-exam topic progress, completed-topic sets and video positions

use std::collections::BTreeMap;

use super::models::{CompletedTopicSet, TopicProgressRecord, VideoProgressRecord};
use super::{keys, KeyValueStore, ProgressStore};

/// exam id -> item id -> record
pub(crate) type ExamMap<T> = BTreeMap<String, BTreeMap<String, T>>;

impl<S: KeyValueStore> ProgressStore<S> {
    // ========================================
    // TOPIC PROGRESS
    // ========================================

    pub(crate) fn all_topic_progress(&self) -> ExamMap<TopicProgressRecord> {
        self.read_json(keys::TOPIC_PROGRESS, ExamMap::new())
    }

    /// Every topic record for one exam
    pub fn exam_topic_progress(&self, exam_id: &str) -> BTreeMap<String, TopicProgressRecord> {
        self.all_topic_progress()
            .remove(exam_id)
            .unwrap_or_default()
    }

    pub fn topic_progress(&self, exam_id: &str, topic_id: &str) -> Option<TopicProgressRecord> {
        self.exam_topic_progress(exam_id).remove(topic_id)
    }

    /// Record reading progress on a topic (clamped to 0..=100).
    ///
    /// A completed topic stays completed only at 100; dropping below that
    /// also takes it out of the completed set, in the same batch.
    pub fn update_topic_progress(&mut self, exam_id: &str, topic_id: &str, progress: u8) -> bool {
        let progress = progress.min(100);
        let mut topics = self.all_topic_progress();
        let mut completed = self.all_completed_topics();

        let was_completed = completed
            .get(exam_id)
            .is_some_and(|set| set.contains(topic_id));
        let still_completed = was_completed && progress == 100;

        topics.entry(exam_id.to_string()).or_default().insert(
            topic_id.to_string(),
            TopicProgressRecord {
                topic_id: topic_id.to_string(),
                progress,
                last_accessed: self.clock.now(),
                completed: still_completed,
            },
        );

        if !(was_completed && !still_completed) {
            return self.write_json(keys::TOPIC_PROGRESS, &topics);
        }

        if let Some(set) = completed.get_mut(exam_id) {
            set.remove(topic_id);
        }
        let (Some(completed_payload), Some(topics_payload)) = (
            Self::encode(keys::COMPLETED_TOPICS, &completed),
            Self::encode(keys::TOPIC_PROGRESS, &topics),
        ) else {
            return false;
        };
        self.write_batch(&[
            (keys::COMPLETED_TOPICS, completed_payload),
            (keys::TOPIC_PROGRESS, topics_payload),
        ])
    }

    /// Mean progress over `topic_ids`, counting unseen topics as 0
    pub fn average_progress(&self, exam_id: &str, topic_ids: &[&str]) -> f64 {
        if topic_ids.is_empty() {
            return 0.0;
        }
        let records = self.exam_topic_progress(exam_id);
        let total: u32 = topic_ids
            .iter()
            .map(|id| records.get(*id).map_or(0, |r| r.progress as u32))
            .sum();
        total as f64 / topic_ids.len() as f64
    }

    // ========================================
    // COMPLETED TOPICS
    // ========================================

    pub(crate) fn all_completed_topics(&self) -> BTreeMap<String, CompletedTopicSet> {
        self.read_json(keys::COMPLETED_TOPICS, BTreeMap::new())
    }

    pub fn completed_topics(&self, exam_id: &str) -> CompletedTopicSet {
        self.all_completed_topics()
            .remove(exam_id)
            .unwrap_or_default()
    }

    pub fn is_topic_completed(&self, exam_id: &str, topic_id: &str) -> bool {
        self.completed_topics(exam_id).contains(topic_id)
    }

    /// Mark a topic completed (progress 100) or not completed (progress 0).
    ///
    /// The completed set and the topic record are written together; if
    /// either write fails neither change is kept and this returns false.
    pub fn toggle_topic_completion(
        &mut self,
        exam_id: &str,
        topic_id: &str,
        completed: bool,
    ) -> bool {
        let mut sets = self.all_completed_topics();
        sets.entry(exam_id.to_string())
            .or_default()
            .set(topic_id, completed);

        let mut topics = self.all_topic_progress();
        topics.entry(exam_id.to_string()).or_default().insert(
            topic_id.to_string(),
            TopicProgressRecord {
                topic_id: topic_id.to_string(),
                progress: if completed { 100 } else { 0 },
                last_accessed: self.clock.now(),
                completed,
            },
        );

        let (Some(sets_payload), Some(topics_payload)) = (
            Self::encode(keys::COMPLETED_TOPICS, &sets),
            Self::encode(keys::TOPIC_PROGRESS, &topics),
        ) else {
            return false;
        };

        let ok = self.write_batch(&[
            (keys::COMPLETED_TOPICS, sets_payload),
            (keys::TOPIC_PROGRESS, topics_payload),
        ]);
        if ok {
            tracing::debug!(
                "Topic '{}' in exam '{}' marked {}",
                topic_id,
                exam_id,
                if completed { "completed" } else { "not completed" }
            );
        }
        ok
    }

    // ========================================
    // VIDEO PROGRESS
    // ========================================

    pub(crate) fn all_video_progress(&self) -> ExamMap<VideoProgressRecord> {
        self.read_json(keys::VIDEO_PROGRESS, ExamMap::new())
    }

    pub fn exam_video_progress(&self, exam_id: &str) -> BTreeMap<String, VideoProgressRecord> {
        self.all_video_progress()
            .remove(exam_id)
            .unwrap_or_default()
    }

    pub fn video_progress(&self, exam_id: &str, video_id: &str) -> Option<VideoProgressRecord> {
        self.exam_video_progress(exam_id).remove(video_id)
    }

    /// Save a playback position. `timestamp <= duration` is up to the caller.
    pub fn save_video_progress(
        &mut self,
        exam_id: &str,
        video_id: &str,
        timestamp_seconds: f64,
        duration_seconds: f64,
    ) -> bool {
        let mut videos = self.all_video_progress();
        videos.entry(exam_id.to_string()).or_default().insert(
            video_id.to_string(),
            VideoProgressRecord {
                video_id: video_id.to_string(),
                timestamp_seconds,
                duration_seconds,
                completed: VideoProgressRecord::is_watched(timestamp_seconds, duration_seconds),
                last_watched: self.clock.now(),
            },
        );
        self.write_json(keys::VIDEO_PROGRESS, &videos)
    }
}
