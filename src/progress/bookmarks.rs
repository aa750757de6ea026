//! Bookmarked study resources

use super::models::{Bookmark, NewBookmark};
use super::{keys, KeyValueStore, ProgressStore};

impl<S: KeyValueStore> ProgressStore<S> {
    /// All bookmarks across exams, oldest first
    pub fn bookmarks(&self) -> Vec<Bookmark> {
        self.read_json(keys::BOOKMARKS, Vec::new())
    }

    pub fn exam_bookmarks(&self, exam_id: &str) -> Vec<Bookmark> {
        self.bookmarks()
            .into_iter()
            .filter(|b| b.exam_id == exam_id)
            .collect()
    }

    pub fn is_bookmarked(&self, exam_id: &str, resource_id: &str) -> bool {
        self.bookmarks()
            .iter()
            .any(|b| b.exam_id == exam_id && b.resource_id == resource_id)
    }

    /// Bookmark the resource, or remove the bookmark if it already exists.
    ///
    /// Returns whether the resource is bookmarked afterwards.
    pub fn toggle_bookmark(&mut self, new: NewBookmark) -> bool {
        let mut bookmarks = self.bookmarks();
        let before = bookmarks.len();
        bookmarks.retain(|b| !(b.exam_id == new.exam_id && b.resource_id == new.resource_id));

        let bookmarked = if bookmarks.len() == before {
            let created_at = self.clock.now();
            let mut created_ms = created_at.timestamp_millis();
            let mut id = new.bookmark_id(created_ms);
            // Ids are plain concatenations, so distinct fields can collide within a millisecond
            while bookmarks.iter().any(|b| b.id == id) {
                created_ms += 1;
                id = new.bookmark_id(created_ms);
            }

            bookmarks.push(Bookmark {
                id,
                exam_id: new.exam_id,
                topic_id: new.topic_id,
                topic_name: new.topic_name,
                subject_name: new.subject_name,
                resource_id: new.resource_id,
                resource_type: new.resource_type,
                resource_title: new.resource_title,
                created_at,
            });
            true
        } else {
            false
        };

        self.write_json(keys::BOOKMARKS, &bookmarks);
        bookmarked
    }

    /// Remove a bookmark by id. Returns false if no such bookmark existed.
    pub fn remove_bookmark(&mut self, bookmark_id: &str) -> bool {
        let mut bookmarks = self.bookmarks();
        let before = bookmarks.len();
        bookmarks.retain(|b| b.id != bookmark_id);
        if bookmarks.len() == before {
            return false;
        }
        self.write_json(keys::BOOKMARKS, &bookmarks);
        true
    }
}

#[cfg(test)]
mod tests {
    use crate::clock::SteppingClock;
    use crate::progress::{MemoryStore, NewBookmark, ProgressStore, ResourceType};
    use chrono::{Duration, TimeZone, Utc};
    use std::collections::HashSet;

    fn store(step: Duration) -> ProgressStore<MemoryStore> {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
        ProgressStore::with_clock(MemoryStore::new(), Box::new(SteppingClock::new(start, step)))
    }

    fn pdf(exam: &str, resource: &str) -> NewBookmark {
        NewBookmark {
            exam_id: exam.to_string(),
            topic_id: "polity-constitution".to_string(),
            topic_name: "Constitution".to_string(),
            subject_name: "Polity".to_string(),
            resource_id: resource.to_string(),
            resource_type: ResourceType::Pdf,
            resource_title: "Preamble notes".to_string(),
        }
    }

    #[test]
    fn test_toggle_bookmark_twice_removes_it() {
        let mut progress = store(Duration::seconds(1));
        assert!(progress.toggle_bookmark(pdf("upsc", "r1")));
        assert!(progress.is_bookmarked("upsc", "r1"));

        assert!(!progress.toggle_bookmark(pdf("upsc", "r1")));
        assert!(!progress.is_bookmarked("upsc", "r1"));
        assert!(progress.bookmarks().is_empty());
    }

    #[test]
    fn test_bookmark_scoped_by_exam() {
        let mut progress = store(Duration::seconds(1));
        progress.toggle_bookmark(pdf("upsc", "r1"));
        assert!(!progress.is_bookmarked("ssc", "r1"));
        progress.toggle_bookmark(pdf("ssc", "r1"));
        assert_eq!(progress.exam_bookmarks("upsc").len(), 1);
        assert_eq!(progress.bookmarks().len(), 2);
    }

    #[test]
    fn test_bookmark_ids_unique_with_frozen_clock() {
        let mut progress = store(Duration::zero());
        progress.toggle_bookmark(pdf("upsc", "r1"));
        assert_eq!(
            progress.bookmarks()[0].id,
            "upsc-polity-constitution-r1-1735722000000"
        );

        // Different fields that concatenate to the same id in the same millisecond
        let mut first = pdf("a-b", "r");
        first.topic_id = "c".to_string();
        let mut second = pdf("a", "r");
        second.topic_id = "b-c".to_string();
        assert!(progress.toggle_bookmark(first));
        assert!(progress.toggle_bookmark(second));

        let ids: HashSet<String> = progress.bookmarks().into_iter().map(|b| b.id).collect();
        assert_eq!(ids.len(), 3);
        assert!(ids.contains("a-b-c-r-1735722000001"));
    }

    #[test]
    fn test_remove_bookmark_by_id() {
        let mut progress = store(Duration::seconds(1));
        progress.toggle_bookmark(pdf("upsc", "r1"));
        let id = progress.bookmarks()[0].id.clone();
        assert!(progress.remove_bookmark(&id));
        assert!(!progress.remove_bookmark(&id));
        assert!(!progress.is_bookmarked("upsc", "r1"));
    }
}
