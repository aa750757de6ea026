//! Bookmark command implementation

use anyhow::{Context, Result};

use prepdeck::config::Config;
use prepdeck::progress::{NewBookmark, ResourceType};

use super::open_progress;

/// Toggle a bookmark on a resource
pub fn bookmark_command(
    config: &Config,
    exam: &str,
    topic: &str,
    resource: &str,
    kind: &str,
    title: &str,
    subject: &str,
) -> Result<()> {
    let resource_type = ResourceType::from_str(kind)
        .with_context(|| format!("Unknown resource kind '{}', expected video, pdf or test", kind))?;

    let mut progress = open_progress(config)?;
    let bookmarked = progress.toggle_bookmark(NewBookmark {
        exam_id: exam.to_string(),
        topic_id: topic.to_string(),
        topic_name: topic.to_string(),
        subject_name: subject.to_string(),
        resource_id: resource.to_string(),
        resource_type,
        resource_title: if title.is_empty() { resource.to_string() } else { title.to_string() },
    });

    if !progress.unpersisted_keys().is_empty() {
        tracing::warn!("Bookmark change was not saved to disk");
    }

    if bookmarked {
        println!("Bookmarked {} '{}'", resource_type.as_str(), resource);
    } else {
        println!("Removed bookmark on '{}'", resource);
    }
    Ok(())
}
