//! Study progress persistence
//!
//! Five record families live under fixed keys in an injected
//! [`KeyValueStore`]: topic progress, video progress and completed topics
//! (namespaced per exam), plus the global bookmark and recently-viewed lists.
//! The streak counters share the same store under their own key.
//!
//! Failures never reach the caller:
//! - a missing or corrupt payload reads as the supplied default
//! - a failed write is logged and kept in a session overlay, so the rest of
//!   the session keeps seeing the value even though it never hit storage
//!
//! # Usage
//!
//! ```ignore
//! let mut progress = ProgressStore::new(FileStore::open(&path)?);
//! progress.toggle_topic_completion("upsc", "polity-constitution", true);
//! let done = progress.completed_topics("upsc");
//! ```

mod bookmarks;
mod models;
mod recent;
mod storage;
mod topics;

pub use models::{
    Bookmark, CompletedTopicSet, NewBookmark, RecentlyViewedEntry, ResourceType,
    TopicProgressRecord, VideoProgressRecord, RECENTLY_VIEWED_LIMIT, VIDEO_COMPLETION_RATIO,
};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::clock::{Clock, SystemClock};
use crate::streak::{StreakChange, StreakState};

/// Storage keys, one per record family
pub mod keys {
    pub const TOPIC_PROGRESS: &str = "syllabus_topic_progress";
    pub const VIDEO_PROGRESS: &str = "syllabus_video_progress";
    pub const COMPLETED_TOPICS: &str = "syllabus_completed_topics";
    pub const BOOKMARKS: &str = "syllabus_bookmarks";
    pub const RECENTLY_VIEWED: &str = "syllabus_recently_viewed";
    pub const STREAK: &str = "quiz_streak_data";

    /// The syllabus families cleared by `clear_all_syllabus_data`
    pub const SYLLABUS: [&str; 5] = [
        TOPIC_PROGRESS,
        VIDEO_PROGRESS,
        COMPLETED_TOPICS,
        BOOKMARKS,
        RECENTLY_VIEWED,
    ];
}

/// Namespaced progress records over a key-value backend
pub struct ProgressStore<S: KeyValueStore> {
    store: S,
    clock: Box<dyn Clock>,
    /// Writes that failed to persist: key -> payload (`None` = pending removal)
    overlay: HashMap<String, Option<String>>,
}

impl<S: KeyValueStore> ProgressStore<S> {
    /// Create a store stamped by the system clock
    pub fn new(store: S) -> Self {
        Self::with_clock(store, Box::new(SystemClock))
    }

    pub fn with_clock(store: S, clock: Box<dyn Clock>) -> Self {
        Self {
            store,
            clock,
            overlay: HashMap::new(),
        }
    }

    /// Borrow the backend
    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the backend
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn into_backend(self) -> S {
        self.store
    }

    /// Keys whose latest value only exists in this session
    pub fn unpersisted_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.overlay.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    // ========================================
    // RAW READ / WRITE
    // ========================================

    fn read_raw(&self, key: &str) -> Option<String> {
        if let Some(pending) = self.overlay.get(key) {
            return pending.clone();
        }
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Failed to read '{}' from progress storage: {}", key, e);
                None
            }
        }
    }

    /// Decode the payload under `key`, or `default` when absent or corrupt
    pub(crate) fn read_json<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(raw) = self.read_raw(key) else {
            return default;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!("Discarding corrupt data under '{}': {}", key, e);
                default
            }
        }
    }

    /// Persist `value` under `key`. Returns false if it only reached the overlay.
    pub(crate) fn write_json<T: Serialize>(&mut self, key: &str, value: &T) -> bool {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to serialize '{}': {}", key, e);
                return false;
            }
        };

        match self.store.set(key, &payload) {
            Ok(()) => {
                self.overlay.remove(key);
                true
            }
            Err(e) => {
                tracing::error!(
                    "Failed to persist '{}', keeping it for this session only: {}",
                    key,
                    e
                );
                self.overlay.insert(key.to_string(), Some(payload));
                false
            }
        }
    }

    fn remove_key(&mut self, key: &str) -> bool {
        match self.store.remove(key) {
            Ok(()) => {
                self.overlay.remove(key);
                true
            }
            Err(e) => {
                tracing::error!("Failed to remove '{}' from progress storage: {}", key, e);
                self.overlay.insert(key.to_string(), None);
                false
            }
        }
    }

    /// Apply several writes as one unit.
    ///
    /// Writes go out in order. If one fails, the ones already applied are
    /// restored to their previous payloads and nothing lands in the overlay,
    /// so a failed batch leaves no visible trace.
    pub(crate) fn write_batch(&mut self, writes: &[(&str, String)]) -> bool {
        let mut applied: Vec<(&str, Option<String>)> = Vec::with_capacity(writes.len());

        for (key, payload) in writes {
            let previous = match self.store.get(key) {
                Ok(previous) => previous,
                Err(e) => {
                    tracing::error!("Failed to snapshot '{}' before batch write: {}", key, e);
                    self.rollback(&applied);
                    return false;
                }
            };

            if let Err(e) = self.store.set(key, payload) {
                tracing::error!("Batch write to '{}' failed, rolling back: {}", key, e);
                self.rollback(&applied);
                return false;
            }
            applied.push((*key, previous));
        }

        for (key, _) in writes {
            self.overlay.remove(*key);
        }
        true
    }

    fn rollback(&mut self, applied: &[(&str, Option<String>)]) {
        for (key, previous) in applied.iter().rev() {
            let restored = match previous {
                Some(payload) => self.store.set(key, payload),
                None => self.store.remove(key),
            };
            if let Err(e) = restored {
                tracing::error!("Rollback of '{}' failed, storage may be inconsistent: {}", key, e);
            }
        }
    }

    /// Serialize for a batch, logging failures
    pub(crate) fn encode<T: Serialize>(key: &str, value: &T) -> Option<String> {
        serde_json::to_string(value)
            .map_err(|e| tracing::error!("Failed to serialize '{}': {}", key, e))
            .ok()
    }

    // ========================================
    // CLEARING
    // ========================================

    /// Remove one exam's slices from every syllabus family.
    ///
    /// Returns false if any family failed to persist.
    pub fn clear_exam_data(&mut self, exam_id: &str) -> bool {
        let mut ok = true;

        // Completed ids and their topic records go out together
        let mut completed = self.all_completed_topics();
        let mut topics = self.all_topic_progress();
        let completed_changed = completed.remove(exam_id).is_some();
        let topics_changed = topics.remove(exam_id).is_some();
        if completed_changed {
            ok &= match (
                Self::encode(keys::COMPLETED_TOPICS, &completed),
                Self::encode(keys::TOPIC_PROGRESS, &topics),
            ) {
                (Some(completed_payload), Some(topics_payload)) => self.write_batch(&[
                    (keys::COMPLETED_TOPICS, completed_payload),
                    (keys::TOPIC_PROGRESS, topics_payload),
                ]),
                _ => false,
            };
        } else if topics_changed {
            ok &= self.write_json(keys::TOPIC_PROGRESS, &topics);
        }

        let mut videos = self.all_video_progress();
        if videos.remove(exam_id).is_some() {
            ok &= self.write_json(keys::VIDEO_PROGRESS, &videos);
        }

        let mut bookmarks = self.bookmarks();
        let before = bookmarks.len();
        bookmarks.retain(|b| b.exam_id != exam_id);
        if bookmarks.len() != before {
            ok &= self.write_json(keys::BOOKMARKS, &bookmarks);
        }

        let mut recent = self.recently_viewed();
        let before = recent.len();
        recent.retain(|r| r.exam_id != exam_id);
        if recent.len() != before {
            ok &= self.write_json(keys::RECENTLY_VIEWED, &recent);
        }

        tracing::info!("Cleared syllabus data for exam '{}'", exam_id);
        ok
    }

    /// Remove every syllabus family for every exam. Streak counters are kept.
    pub fn clear_all_syllabus_data(&mut self) -> bool {
        let mut ok = true;
        for key in keys::SYLLABUS {
            ok &= self.remove_key(key);
        }
        tracing::info!("Cleared all syllabus data");
        ok
    }

    // ========================================
    // STREAK COUNTERS
    // ========================================

    /// Current streak counters; all zero on first read
    pub fn streak_state(&self) -> StreakState {
        let mut state: StreakState = self.read_json(keys::STREAK, StreakState::default());
        if state.normalize() {
            tracing::warn!(
                "Stored streak had longest < current, repaired to {}",
                state.longest_streak
            );
        }
        state
    }

    pub fn save_streak_state(&mut self, state: &StreakState) -> bool {
        self.write_json(keys::STREAK, state)
    }

    /// Count a completed quiz today and persist the new counters
    pub fn record_quiz_completion(&mut self, points: u32) -> (StreakState, StreakChange) {
        let mut state = self.streak_state();
        let change = state.record_completion(self.clock.today(), points);
        self.save_streak_state(&state);
        tracing::debug!(
            "Recorded quiz completion (+{} points): {:?}, streak {}",
            points,
            change,
            state.current_streak
        );
        (state, change)
    }
}
