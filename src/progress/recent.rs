//! Global recently-viewed topics list

use super::models::{RecentlyViewedEntry, RECENTLY_VIEWED_LIMIT};
use super::{keys, KeyValueStore, ProgressStore};

impl<S: KeyValueStore> ProgressStore<S> {
    /// Most recent first, at most [`RECENTLY_VIEWED_LIMIT`] entries
    pub fn recently_viewed(&self) -> Vec<RecentlyViewedEntry> {
        self.read_json(keys::RECENTLY_VIEWED, Vec::new())
    }

    /// Move a topic to the front of the list, dropping any older entry for
    /// the same exam and topic, then trim to the limit.
    pub fn save_recently_viewed(
        &mut self,
        exam_id: &str,
        topic_id: &str,
        topic_name: &str,
        subject_name: &str,
    ) -> bool {
        let mut entries = self.recently_viewed();
        entries.retain(|e| !(e.exam_id == exam_id && e.topic_id == topic_id));
        entries.insert(
            0,
            RecentlyViewedEntry {
                topic_id: topic_id.to_string(),
                topic_name: topic_name.to_string(),
                subject_name: subject_name.to_string(),
                exam_id: exam_id.to_string(),
                viewed_at: self.clock.now(),
            },
        );
        entries.truncate(RECENTLY_VIEWED_LIMIT);
        self.write_json(keys::RECENTLY_VIEWED, &entries)
    }
}
