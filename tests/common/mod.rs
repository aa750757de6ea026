//! Shared test utilities for progress store integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;

use prepdeck::clock::SteppingClock;
use prepdeck::progress::{FileStore, NewBookmark, ProgressStore, ResourceType};

/// A temp directory holding a progress file path
pub fn create_test_dir() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("progress.json");
    (temp_dir, path)
}

/// Open a file-backed store whose clock starts at 2025-01-01 09:00 UTC and
/// advances one second per read
pub fn open_store(path: &Path) -> ProgressStore<FileStore> {
    let store = FileStore::open(path).expect("Failed to open progress file");
    let start = Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap();
    ProgressStore::with_clock(store, Box::new(SteppingClock::new(start, Duration::seconds(1))))
}

pub fn video_bookmark(exam: &str, topic: &str, resource: &str) -> NewBookmark {
    NewBookmark {
        exam_id: exam.to_string(),
        topic_id: topic.to_string(),
        topic_name: topic.to_string(),
        subject_name: "Polity".to_string(),
        resource_id: resource.to_string(),
        resource_type: ResourceType::Video,
        resource_title: format!("Lecture {}", resource),
    }
}
