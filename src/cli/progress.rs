//! Progress, completion and clear command implementations

use anyhow::{bail, Result};

use prepdeck::config::Config;

use super::open_progress;

/// Show everything recorded for one exam
pub fn progress_command(config: &Config, exam: &str) -> Result<()> {
    let progress = open_progress(config)?;

    let topics = progress.exam_topic_progress(exam);
    let completed = progress.completed_topics(exam);
    let videos = progress.exam_video_progress(exam);
    let bookmarks = progress.exam_bookmarks(exam);

    if topics.is_empty() && videos.is_empty() && bookmarks.is_empty() {
        println!("No progress recorded for '{}'.", exam);
        return Ok(());
    }

    let ids: Vec<&str> = topics.keys().map(String::as_str).collect();
    println!(
        "Exam '{}': {} topics, {} completed, {:.0}% average\n",
        exam,
        topics.len(),
        completed.len(),
        progress.average_progress(exam, &ids)
    );

    for record in topics.values() {
        let marker = if completed.contains(&record.topic_id) { "x" } else { " " };
        println!(
            "  [{}] {:<32} {:>3}%  last opened {}",
            marker,
            record.topic_id,
            record.progress,
            record.last_accessed.format("%Y-%m-%d %H:%M")
        );
    }

    if !videos.is_empty() {
        println!("\nVideos:");
        for video in videos.values() {
            println!(
                "  {:<34} {:>5.1}%{}",
                video.video_id,
                video.percent(),
                if video.completed { "  watched" } else { "" }
            );
        }
    }

    if !bookmarks.is_empty() {
        println!("\nBookmarks:");
        for b in &bookmarks {
            println!(
                "  {} [{}] {} ({})",
                b.id,
                b.resource_type.as_str(),
                b.resource_title,
                b.topic_name
            );
        }
    }

    let recent: Vec<_> = progress
        .recently_viewed()
        .into_iter()
        .filter(|r| r.exam_id == exam)
        .collect();
    if !recent.is_empty() {
        println!("\nRecently viewed:");
        for r in recent {
            println!("  {} / {}", r.subject_name, r.topic_name);
        }
    }

    Ok(())
}

/// Mark a topic completed or not completed
pub fn complete_command(config: &Config, exam: &str, topic: &str, completed: bool) -> Result<()> {
    let mut progress = open_progress(config)?;

    if !progress.toggle_topic_completion(exam, topic, completed) {
        bail!("Failed to save completion for '{}' in '{}'", topic, exam);
    }

    println!(
        "'{}' marked {} ({} completed in '{}')",
        topic,
        if completed { "completed" } else { "not completed" },
        progress.completed_topics(exam).len(),
        exam
    );
    Ok(())
}

/// Clear one exam's syllabus data, or every exam's
pub fn clear_command(config: &Config, exam: Option<&str>, all: bool) -> Result<()> {
    let mut progress = open_progress(config)?;

    let ok = match (exam, all) {
        (Some(exam), false) => progress.clear_exam_data(exam),
        (None, true) => progress.clear_all_syllabus_data(),
        _ => bail!("Specify an exam or --all"),
    };

    if !ok {
        bail!("Some records could not be cleared: {:?}", progress.unpersisted_keys());
    }

    match exam {
        Some(exam) => println!("Cleared syllabus data for '{}'.", exam),
        None => println!("Cleared syllabus data for all exams. Streak data was kept."),
    }
    Ok(())
}
