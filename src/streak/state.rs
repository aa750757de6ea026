//! Streak counter record
//!
//! Tracks consecutive practice days plus lifetime quiz and point totals.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Persisted streak counters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakState {
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub total_quizzes: u32,
    #[serde(default)]
    pub total_points: u32,
    /// Day of the last counted completion
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_activity_date: Option<NaiveDate>,
}

/// What a recorded completion did to the streak
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakChange {
    /// First completion, or first after a gap
    Started,
    /// Completion on the day after the last one
    Extended,
    /// Already counted today
    Unchanged,
    /// Completion dated before the last counted day; only totals moved
    OutOfOrder,
}

impl StreakState {
    pub fn new(
        current_streak: u32,
        longest_streak: u32,
        total_quizzes: u32,
        total_points: u32,
    ) -> Self {
        Self {
            current_streak,
            longest_streak,
            total_quizzes,
            total_points,
            last_activity_date: None,
        }
    }

    /// Restore `longest_streak >= current_streak`. Returns true if a repair was needed.
    pub fn normalize(&mut self) -> bool {
        if self.longest_streak < self.current_streak {
            self.longest_streak = self.current_streak;
            true
        } else {
            false
        }
    }

    /// Whether the streak is still alive on `today` (activity today or yesterday)
    pub fn is_active(&self, today: NaiveDate) -> bool {
        self.last_activity_date
            .is_some_and(|last| (today - last).num_days() <= 1 && last <= today)
    }

    /// Streak length as of `today`: zero once a full day has been missed
    pub fn effective_streak(&self, today: NaiveDate) -> u32 {
        if self.is_active(today) {
            self.current_streak
        } else {
            0
        }
    }

    /// Copy of the counters with `current_streak` replaced by the effective
    /// streak on `today`
    pub fn as_of(&self, today: NaiveDate) -> Self {
        Self {
            current_streak: self.effective_streak(today),
            ..self.clone()
        }
    }

    /// Count a completed quiz on `day` worth `points`
    pub fn record_completion(&mut self, day: NaiveDate, points: u32) -> StreakChange {
        self.total_quizzes = self.total_quizzes.saturating_add(1);
        self.total_points = self.total_points.saturating_add(points);

        let change = match self.last_activity_date {
            Some(last) if day == last => StreakChange::Unchanged,
            Some(last) if day < last => StreakChange::OutOfOrder,
            Some(last) if (day - last).num_days() == 1 && self.current_streak > 0 => {
                self.current_streak += 1;
                StreakChange::Extended
            }
            _ => {
                self.current_streak = 1;
                StreakChange::Started
            }
        };

        if change != StreakChange::OutOfOrder {
            self.last_activity_date = Some(day);
        }
        self.longest_streak = self.longest_streak.max(self.current_streak);
        change
    }
}
