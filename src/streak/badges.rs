//! Badge definitions and unlock predicates
//!
//! Unlock status is never stored. It is recomputed from the current
//! [`StreakState`] on every read, and streak badges key off the longest
//! streak so breaking a streak cannot revoke one.

use super::state::StreakState;

/// Unique identifier for each badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BadgeId {
    // Quiz count badges
    FirstQuiz,
    Quizzes10,
    Quizzes50,
    Quizzes100,
    Quizzes500,

    // Streak badges
    Streak3,
    Streak7,
    Streak14,
    Streak30,
    Streak100,

    // Point badges
    Points100,
    Points500,
    Points1000,
    Points5000,
}

impl BadgeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstQuiz => "first_quiz",
            Self::Quizzes10 => "quizzes_10",
            Self::Quizzes50 => "quizzes_50",
            Self::Quizzes100 => "quizzes_100",
            Self::Quizzes500 => "quizzes_500",
            Self::Streak3 => "streak_3",
            Self::Streak7 => "streak_7",
            Self::Streak14 => "streak_14",
            Self::Streak30 => "streak_30",
            Self::Streak100 => "streak_100",
            Self::Points100 => "points_100",
            Self::Points500 => "points_500",
            Self::Points1000 => "points_1000",
            Self::Points5000 => "points_5000",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        BADGES.iter().map(|b| b.id).find(|id| id.as_str() == s)
    }
}

/// Badge category for grouping in UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgeCategory {
    Quizzes,
    Streak,
    Points,
}

impl BadgeCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Quizzes => "Quizzes",
            Self::Streak => "Streaks",
            Self::Points => "Points",
        }
    }
}

/// Unlock predicate over streak counters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    LongestStreak(u32),
    TotalQuizzes(u32),
    TotalPoints(u32),
}

impl Requirement {
    pub fn is_met(&self, state: &StreakState) -> bool {
        self.current(state) >= self.target()
    }

    pub fn target(&self) -> u32 {
        match *self {
            Self::LongestStreak(n) | Self::TotalQuizzes(n) | Self::TotalPoints(n) => n,
        }
    }

    /// The counter this requirement reads
    pub fn current(&self, state: &StreakState) -> u32 {
        match self {
            Self::LongestStreak(_) => state.longest_streak,
            Self::TotalQuizzes(_) => state.total_quizzes,
            Self::TotalPoints(_) => state.total_points,
        }
    }
}

/// Badge definition with all metadata
#[derive(Debug, Clone)]
pub struct Badge {
    pub id: BadgeId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub category: BadgeCategory,
    pub requirement: Requirement,
}

/// All badge definitions
pub static BADGES: &[Badge] = &[
    // === QUIZZES ===
    Badge {
        id: BadgeId::FirstQuiz,
        name: "First Attempt",
        description: "Complete your first quiz",
        icon: "🎯",
        category: BadgeCategory::Quizzes,
        requirement: Requirement::TotalQuizzes(1),
    },
    Badge {
        id: BadgeId::Quizzes10,
        name: "Warming Up",
        description: "Complete 10 quizzes",
        icon: "📝",
        category: BadgeCategory::Quizzes,
        requirement: Requirement::TotalQuizzes(10),
    },
    Badge {
        id: BadgeId::Quizzes50,
        name: "Quiz Enthusiast",
        description: "Complete 50 quizzes",
        icon: "📚",
        category: BadgeCategory::Quizzes,
        requirement: Requirement::TotalQuizzes(50),
    },
    Badge {
        id: BadgeId::Quizzes100,
        name: "Century",
        description: "Complete 100 quizzes",
        icon: "💯",
        category: BadgeCategory::Quizzes,
        requirement: Requirement::TotalQuizzes(100),
    },
    Badge {
        id: BadgeId::Quizzes500,
        name: "Quiz Veteran",
        description: "Complete 500 quizzes",
        icon: "🏅",
        category: BadgeCategory::Quizzes,
        requirement: Requirement::TotalQuizzes(500),
    },
    // === STREAK ===
    Badge {
        id: BadgeId::Streak3,
        name: "On Fire",
        description: "Reach a 3-day streak",
        icon: "🔥",
        category: BadgeCategory::Streak,
        requirement: Requirement::LongestStreak(3),
    },
    Badge {
        id: BadgeId::Streak7,
        name: "Week Warrior",
        description: "Reach a 7-day streak",
        icon: "📅",
        category: BadgeCategory::Streak,
        requirement: Requirement::LongestStreak(7),
    },
    Badge {
        id: BadgeId::Streak14,
        name: "Fortnight Focus",
        description: "Reach a 14-day streak",
        icon: "⚡",
        category: BadgeCategory::Streak,
        requirement: Requirement::LongestStreak(14),
    },
    Badge {
        id: BadgeId::Streak30,
        name: "Monthly Master",
        description: "Reach a 30-day streak",
        icon: "👑",
        category: BadgeCategory::Streak,
        requirement: Requirement::LongestStreak(30),
    },
    Badge {
        id: BadgeId::Streak100,
        name: "Unstoppable",
        description: "Reach a 100-day streak",
        icon: "🏆",
        category: BadgeCategory::Streak,
        requirement: Requirement::LongestStreak(100),
    },
    // === POINTS ===
    Badge {
        id: BadgeId::Points100,
        name: "Point Collector",
        description: "Earn 100 points",
        icon: "🪙",
        category: BadgeCategory::Points,
        requirement: Requirement::TotalPoints(100),
    },
    Badge {
        id: BadgeId::Points500,
        name: "High Scorer",
        description: "Earn 500 points",
        icon: "💰",
        category: BadgeCategory::Points,
        requirement: Requirement::TotalPoints(500),
    },
    Badge {
        id: BadgeId::Points1000,
        name: "Top Performer",
        description: "Earn 1,000 points",
        icon: "💎",
        category: BadgeCategory::Points,
        requirement: Requirement::TotalPoints(1000),
    },
    Badge {
        id: BadgeId::Points5000,
        name: "Topper",
        description: "Earn 5,000 points",
        icon: "🌟",
        category: BadgeCategory::Points,
        requirement: Requirement::TotalPoints(5000),
    },
];

impl Badge {
    /// Get badge definition by ID
    pub fn get(id: BadgeId) -> &'static Badge {
        BADGES
            .iter()
            .find(|b| b.id == id)
            .expect("All badges should be defined")
    }

    pub fn is_unlocked(&self, state: &StreakState) -> bool {
        self.requirement.is_met(state)
    }

    /// Progress towards unlocking, 0.0 - 1.0
    pub fn progress(&self, state: &StreakState) -> f32 {
        let target = self.requirement.target();
        if target == 0 {
            return 1.0;
        }
        (self.requirement.current(state) as f32 / target as f32).min(1.0)
    }

    /// Split all badges into (unlocked, locked), each in table order
    pub fn partition(state: &StreakState) -> (Vec<&'static Badge>, Vec<&'static Badge>) {
        BADGES.iter().partition(|b| b.is_unlocked(state))
    }

    pub fn total_count() -> usize {
        BADGES.len()
    }
}
