//! Streak milestone table
//!
//! Two views read this table: "next milestone" keys off the current
//! streak, "earned" keys off the longest streak.

use super::state::StreakState;

/// Milestone definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub days: u32,
    pub reward: &'static str,
    pub description: &'static str,
}

/// All milestones (must be sorted by days)
pub static MILESTONES: &[Milestone] = &[
    Milestone {
        days: 3,
        reward: "+25 bonus points",
        description: "Three days in a row",
    },
    Milestone {
        days: 7,
        reward: "+75 bonus points",
        description: "A full week of practice",
    },
    Milestone {
        days: 14,
        reward: "+150 bonus points",
        description: "Two weeks without a break",
    },
    Milestone {
        days: 30,
        reward: "Free sectional test unlock",
        description: "A month of daily practice",
    },
    Milestone {
        days: 60,
        reward: "Free full mock test unlock",
        description: "Two months of consistency",
    },
    Milestone {
        days: 100,
        reward: "Centurion profile frame",
        description: "One hundred straight days",
    },
    Milestone {
        days: 365,
        reward: "Year-long champion title",
        description: "Practised every day for a year",
    },
];

impl Milestone {
    /// First milestone the current streak has not reached yet
    pub fn next_for(state: &StreakState) -> Option<&'static Milestone> {
        MILESTONES.iter().find(|m| state.current_streak < m.days)
    }

    /// Progress percentage towards the next milestone, 0..=100.
    /// Saturates at 100 once every milestone is behind.
    pub fn progress_to_next(state: &StreakState) -> f64 {
        match Self::next_for(state) {
            Some(next) => (state.current_streak as f64 / next.days as f64 * 100.0).min(100.0),
            None => 100.0,
        }
    }

    /// Milestones permanently earned by the longest streak
    pub fn earned(state: &StreakState) -> Vec<&'static Milestone> {
        MILESTONES
            .iter()
            .filter(|m| state.longest_streak >= m.days)
            .collect()
    }

    /// Days still needed to hit the next milestone
    pub fn days_remaining(state: &StreakState) -> Option<u32> {
        Self::next_for(state).map(|m| m.days - state.current_streak)
    }
}
