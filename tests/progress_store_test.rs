//! Integration tests for the file-backed progress store

mod common;

use std::collections::HashSet;

use common::{create_test_dir, open_store, video_bookmark};
use prepdeck::progress::{keys, KeyValueStore, RECENTLY_VIEWED_LIMIT};

#[test]
fn test_progress_survives_reopen() {
    let (_dir, path) = create_test_dir();

    {
        let mut progress = open_store(&path);
        assert!(progress.toggle_topic_completion("upsc", "polity-constitution", true));
        assert!(progress.update_topic_progress("upsc", "economy-banking", 40));
        assert!(progress.save_video_progress("upsc", "v1", 120.0, 600.0));
        assert!(progress.toggle_bookmark(video_bookmark("upsc", "polity-constitution", "v1")));
        assert!(progress.save_recently_viewed("upsc", "economy-banking", "Banking", "Economy"));
        progress.record_quiz_completion(20);
    }

    let progress = open_store(&path);
    assert!(progress.is_topic_completed("upsc", "polity-constitution"));
    assert_eq!(progress.topic_progress("upsc", "economy-banking").unwrap().progress, 40);
    assert!(!progress.video_progress("upsc", "v1").unwrap().completed);
    assert!(progress.is_bookmarked("upsc", "v1"));
    assert_eq!(progress.recently_viewed()[0].topic_id, "economy-banking");

    let streak = progress.streak_state();
    assert_eq!(streak.total_quizzes, 1);
    assert_eq!(streak.total_points, 20);
    assert_eq!(streak.current_streak, 1);
}

#[test]
fn test_corrupt_file_reads_as_empty() {
    let (_dir, path) = create_test_dir();
    std::fs::write(&path, "{ not json").unwrap();

    let mut progress = open_store(&path);
    assert!(progress.completed_topics("upsc").is_empty());
    assert!(progress.toggle_topic_completion("upsc", "t1", true));

    let reopened = open_store(&path);
    assert!(reopened.is_topic_completed("upsc", "t1"));
}

#[test]
fn test_corrupt_record_reads_as_default() {
    let (_dir, path) = create_test_dir();
    {
        let mut progress = open_store(&path);
        progress
            .backend_mut()
            .set(keys::BOOKMARKS, "[{\"id\": 3}]")
            .unwrap();
        progress.toggle_topic_completion("upsc", "t1", true);
    }

    let progress = open_store(&path);
    assert!(progress.bookmarks().is_empty());
    assert!(progress.is_topic_completed("upsc", "t1"));
}

#[test]
fn test_completed_topics_always_at_100() {
    let (_dir, path) = create_test_dir();
    let mut progress = open_store(&path);

    progress.toggle_topic_completion("upsc", "a", true);
    progress.update_topic_progress("upsc", "b", 100);
    progress.toggle_topic_completion("upsc", "c", true);
    progress.update_topic_progress("upsc", "c", 70);
    progress.toggle_topic_completion("upsc", "b", true);
    progress.toggle_topic_completion("upsc", "a", false);
    progress.update_topic_progress("upsc", "b", 100);

    let completed = progress.completed_topics("upsc");
    assert_eq!(completed.iter().collect::<Vec<_>>(), vec!["b"]);
    for topic in completed.iter() {
        let record = progress.topic_progress("upsc", topic).unwrap();
        assert_eq!(record.progress, 100);
        assert!(record.completed);
    }
}

#[test]
fn test_recently_viewed_invariants() {
    let (_dir, path) = create_test_dir();
    let mut progress = open_store(&path);

    for i in 0..25 {
        let topic = format!("t{}", i % 12);
        let exam = if i % 2 == 0 { "upsc" } else { "ssc" };
        progress.save_recently_viewed(exam, &topic, "Topic", "Subject");
    }

    let entries = progress.recently_viewed();
    assert!(entries.len() <= RECENTLY_VIEWED_LIMIT);
    let unique: HashSet<_> = entries.iter().map(|e| (&e.exam_id, &e.topic_id)).collect();
    assert_eq!(unique.len(), entries.len());
    assert!(entries.windows(2).all(|w| w[0].viewed_at > w[1].viewed_at));
}

#[test]
fn test_clear_exam_keeps_other_exams() {
    let (_dir, path) = create_test_dir();
    let mut progress = open_store(&path);

    for exam in ["upsc", "ssc"] {
        progress.toggle_topic_completion(exam, "t1", true);
        progress.update_topic_progress(exam, "t2", 35);
        progress.save_video_progress(exam, "v1", 200.0, 600.0);
        progress.toggle_bookmark(video_bookmark(exam, "t1", "v1"));
    }
    progress.save_recently_viewed("upsc", "t1", "Topic", "Subject");
    progress.save_recently_viewed("ssc", "t2", "Topic", "Subject");

    assert!(progress.clear_exam_data("upsc"));
    assert!(progress.completed_topics("upsc").is_empty());
    assert!(progress.exam_topic_progress("upsc").is_empty());
    assert!(progress.exam_video_progress("upsc").is_empty());
    assert!(progress.exam_bookmarks("upsc").is_empty());
    assert!(progress.recently_viewed().iter().all(|r| r.exam_id == "ssc"));

    assert!(progress.is_topic_completed("ssc", "t1"));
    assert_eq!(progress.exam_topic_progress("ssc").len(), 2);
    assert_eq!(progress.topic_progress("ssc", "t2").unwrap().progress, 35);
    assert!(progress.video_progress("ssc", "v1").is_some());
    assert!(progress.is_bookmarked("ssc", "v1"));
    assert_eq!(progress.recently_viewed().len(), 1);

    // Cleared state is what lands on disk
    let reopened = open_store(&path);
    assert!(reopened.exam_topic_progress("upsc").is_empty());
    assert!(reopened.exam_video_progress("upsc").is_empty());
    assert_eq!(reopened.exam_video_progress("ssc").len(), 1);
}

#[test]
fn test_clear_all_keeps_streak() {
    let (_dir, path) = create_test_dir();
    {
        let mut progress = open_store(&path);
        progress.toggle_topic_completion("upsc", "t1", true);
        progress.record_quiz_completion(10);
        assert!(progress.clear_all_syllabus_data());
    }

    let progress = open_store(&path);
    assert!(progress.completed_topics("upsc").is_empty());
    assert!(progress.backend().get(keys::TOPIC_PROGRESS).unwrap().is_none());
    assert_eq!(progress.streak_state().total_quizzes, 1);
}
