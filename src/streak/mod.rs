//! Streaks, milestones and badges
//!
//! Everything here is derived from a [`StreakState`] snapshot. Only the
//! counters themselves are persisted (by the progress store); milestones and
//! badges are recomputed each time they are shown.

mod badges;
mod milestones;
mod state;

pub use badges::{Badge, BadgeCategory, BadgeId, Requirement, BADGES};
pub use milestones::{Milestone, MILESTONES};
pub use state::{StreakChange, StreakState};

/// Everything a streak panel needs, derived in one pass
#[derive(Debug, Clone)]
pub struct StreakSummary {
    pub state: StreakState,
    pub next_milestone: Option<&'static Milestone>,
    /// 0..=100
    pub progress_to_next: f64,
    pub earned_milestones: Vec<&'static Milestone>,
    pub unlocked_badges: Vec<&'static Badge>,
    pub locked_badges: Vec<&'static Badge>,
}

impl StreakSummary {
    pub fn from_state(state: &StreakState) -> Self {
        let (unlocked_badges, locked_badges) = Badge::partition(state);
        Self {
            state: state.clone(),
            next_milestone: Milestone::next_for(state),
            progress_to_next: Milestone::progress_to_next(state),
            earned_milestones: Milestone::earned(state),
            unlocked_badges,
            locked_badges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_for_week_streak() {
        let state = StreakState::new(7, 10, 5, 50);
        let summary = StreakSummary::from_state(&state);

        assert_eq!(summary.next_milestone.map(|m| m.days), Some(14));
        assert!((summary.progress_to_next - 50.0).abs() < f64::EPSILON);
        assert!(summary.unlocked_badges.iter().any(|b| b.id == BadgeId::Streak7));
        assert!(summary.locked_badges.iter().any(|b| b.id == BadgeId::Streak14));
        assert_eq!(
            summary.earned_milestones.iter().map(|m| m.days).collect::<Vec<_>>(),
            vec![3, 7]
        );
    }

    #[test]
    fn test_summary_of_lapsed_streak() {
        let mut state = StreakState::default();
        for day in 1..=5 {
            let date = chrono::NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
            state.record_completion(date, 0);
        }

        let today = chrono::NaiveDate::from_ymd_opt(2025, 3, 20).unwrap();
        let summary = StreakSummary::from_state(&state.as_of(today));
        assert_eq!(summary.state.current_streak, 0);
        assert_eq!(summary.next_milestone.map(|m| m.days), Some(3));
        assert_eq!(summary.progress_to_next, 0.0);
        assert_eq!(Milestone::days_remaining(&summary.state), Some(3));
        assert_eq!(
            summary.earned_milestones.iter().map(|m| m.days).collect::<Vec<_>>(),
            vec![3]
        );
    }
}
