//! Full corpus assembly

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::archetypes::ARCHETYPES;
use super::quiz::QuizInstance;
use crate::clock::Clock;

/// Longest span, in days, generated on either side of "today"
pub const MAX_WINDOW_DAYS: u32 = 3660;

/// Generation window around "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleWindow {
    /// Days of history before today
    #[serde(default = "default_days_before")]
    pub days_before: u32,
    /// Days scheduled after today
    #[serde(default = "default_days_after")]
    pub days_after: u32,
}

fn default_days_before() -> u32 {
    180
}

fn default_days_after() -> u32 {
    184
}

impl Default for ScheduleWindow {
    fn default() -> Self {
        Self {
            days_before: default_days_before(),
            days_after: default_days_after(),
        }
    }
}

impl ScheduleWindow {
    /// Inclusive (start, end) around `today`.
    ///
    /// Each side is capped at [`MAX_WINDOW_DAYS`], and at the calendar
    /// limits chrono can represent.
    pub fn bounds(&self, today: NaiveDate) -> (NaiveDate, NaiveDate) {
        let before = Duration::days(self.days_before.min(MAX_WINDOW_DAYS) as i64);
        let after = Duration::days(self.days_after.min(MAX_WINDOW_DAYS) as i64);
        (
            today.checked_sub_signed(before).unwrap_or(NaiveDate::MIN),
            today.checked_add_signed(after).unwrap_or(NaiveDate::MAX),
        )
    }

    /// Whether both sides are within [`MAX_WINDOW_DAYS`]
    pub fn is_within_limit(&self) -> bool {
        self.days_before <= MAX_WINDOW_DAYS && self.days_after <= MAX_WINDOW_DAYS
    }
}

/// Run every archetype over `[start, end]` and sort by scheduled date.
///
/// The sort is stable, so instances on the same day keep archetype emission
/// order and their slot order within it.
pub fn build_range(start: NaiveDate, end: NaiveDate) -> Vec<QuizInstance> {
    let mut corpus: Vec<QuizInstance> = ARCHETYPES
        .iter()
        .flat_map(|archetype| archetype.build(start, end))
        .collect();
    corpus.sort_by_key(|quiz| quiz.scheduled_date);
    corpus
}

/// Build the whole corpus for the window anchored on `today`
pub fn generate_full_corpus(today: NaiveDate, window: ScheduleWindow) -> Vec<QuizInstance> {
    let (start, end) = window.bounds(today);
    let corpus = build_range(start, end);
    tracing::info!(
        "Generated corpus of {} quizzes for {}..={} (anchored on {})",
        corpus.len(),
        start,
        end,
        today
    );
    corpus
}

/// Build the corpus anchored on the clock's current day
pub fn generate_corpus_now(clock: &dyn Clock, window: ScheduleWindow) -> Vec<QuizInstance> {
    generate_full_corpus(clock.today(), window)
}
