//! Streak and quiz-recording command implementations

use anyhow::{bail, Result};

use prepdeck::clock::{Clock, SystemClock};
use prepdeck::config::Config;
use prepdeck::streak::{Badge, Milestone, StreakChange, StreakSummary};

use super::open_progress;

/// Show the streak panel: counters, next milestone and badges
pub fn streak_command(config: &Config) -> Result<()> {
    let progress = open_progress(config)?;
    let stored = progress.streak_state();
    let state = stored.as_of(SystemClock.today());
    let summary = StreakSummary::from_state(&state);

    let lapsed = stored.current_streak > 0 && state.current_streak == 0;
    println!(
        "Current streak: {} days{}",
        state.current_streak,
        if lapsed { " (lapsed, practise today to start a new one)" } else { "" }
    );
    println!("Longest streak: {} days", state.longest_streak);
    println!("Quizzes: {}   Points: {}", state.total_quizzes, state.total_points);

    match summary.next_milestone {
        Some(next) => println!(
            "\nNext milestone: {} days ({:.0}%, {} to go) - {}",
            next.days,
            summary.progress_to_next,
            Milestone::days_remaining(&state).unwrap_or(0),
            next.reward
        ),
        None => println!("\nEvery milestone reached."),
    }
    for m in &summary.earned_milestones {
        println!("  [x] {} days - {}", m.days, m.description);
    }

    println!(
        "\nBadges ({}/{}):",
        summary.unlocked_badges.len(),
        Badge::total_count()
    );
    for badge in &summary.unlocked_badges {
        println!("  {} {} - {}", badge.icon, badge.name, badge.description);
    }
    for badge in &summary.locked_badges {
        println!(
            "  .. {} [{}] {:.0}%",
            badge.name,
            badge.category.label(),
            badge.progress(&state) * 100.0
        );
    }

    Ok(())
}

/// Count a finished quiz towards today's streak
pub fn record_quiz_command(config: &Config, points: u32) -> Result<()> {
    let mut progress = open_progress(config)?;
    let (before, _) = Badge::partition(&progress.streak_state());

    let (state, change) = progress.record_quiz_completion(points);
    if !progress.unpersisted_keys().is_empty() {
        bail!("Failed to save streak data");
    }

    match change {
        StreakChange::Started => println!("Streak started: 1 day"),
        StreakChange::Extended => println!("Streak extended: {} days", state.current_streak),
        StreakChange::Unchanged => {
            println!("Already practised today: {} days", state.current_streak)
        }
        StreakChange::OutOfOrder => println!("Quiz counted; streak unchanged"),
    }

    let (unlocked, _) = Badge::partition(&state);
    for badge in unlocked.iter().filter(|b| !before.iter().any(|p| p.id == b.id)) {
        println!("Badge unlocked: {} {}", badge.icon, badge.name);
    }
    Ok(())
}
