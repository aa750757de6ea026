//! Quiz instance model
//!
//! Instances are generated, never stored, so the id carries everything
//! needed to trace one back to its archetype and day.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::dates::{day_key, parse_day_key};

/// The seven quiz archetypes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuizType {
    DailyMixed,
    RapidFire,
    SpeedChallenge,
    MiniTest,
    Sectional,
    FullPrelims,
    FullMains,
}

impl QuizType {
    /// All archetypes in corpus emission order
    pub fn all() -> &'static [QuizType] {
        &[
            Self::DailyMixed,
            Self::RapidFire,
            Self::SpeedChallenge,
            Self::MiniTest,
            Self::Sectional,
            Self::FullPrelims,
            Self::FullMains,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DailyMixed => "daily-mixed",
            Self::RapidFire => "rapid-fire",
            Self::SpeedChallenge => "speed-challenge",
            Self::MiniTest => "mini-test",
            Self::Sectional => "sectional",
            Self::FullPrelims => "full-prelims",
            Self::FullMains => "full-mains",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.as_str() == s)
    }

    /// Prefix used in instance ids
    pub fn id_prefix(&self) -> &'static str {
        match self {
            Self::DailyMixed => "daily",
            Self::RapidFire => "rapid",
            Self::SpeedChallenge => "speed",
            Self::MiniTest => "mini",
            Self::Sectional => "sectional",
            Self::FullPrelims => "prelims",
            Self::FullMains => "mains",
        }
    }

    pub fn from_id_prefix(prefix: &str) -> Option<Self> {
        Self::all().iter().copied().find(|t| t.id_prefix() == prefix)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::DailyMixed => "Daily Quiz",
            Self::RapidFire => "Rapid Fire",
            Self::SpeedChallenge => "Speed Challenge",
            Self::MiniTest => "Mini Test",
            Self::Sectional => "Sectional Test",
            Self::FullPrelims => "Full Prelims Mock",
            Self::FullMains => "Full Mains Mock",
        }
    }
}

impl fmt::Display for QuizType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Three-way rotation: 0 -> Easy, 1 -> Medium, 2 -> Hard
    pub fn cycle(position: i64) -> Self {
        match position.rem_euclid(3) {
            0 => Self::Easy,
            1 => Self::Medium,
            _ => Self::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExamLevel {
    Prelims,
    Mains,
}

/// Parsed form of a quiz instance id: `{prefix}-{YYYY-MM-DD}-{index}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuizId {
    pub quiz_type: QuizType,
    pub date: NaiveDate,
    pub index: u32,
}

impl QuizId {
    pub fn new(quiz_type: QuizType, date: NaiveDate, index: u32) -> Self {
        Self {
            quiz_type,
            date,
            index,
        }
    }

    /// Parse an id string. Returns `None` for anything the builders would not emit.
    pub fn parse(id: &str) -> Option<Self> {
        let (prefix, rest) = id.split_once('-')?;
        let quiz_type = QuizType::from_id_prefix(prefix)?;
        let (date, index) = rest.rsplit_once('-')?;
        let date = parse_day_key(date)?;
        let index = index.parse().ok()?;
        Some(Self::new(quiz_type, date, index))
    }
}

impl fmt::Display for QuizId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.quiz_type.id_prefix(),
            day_key(self.date),
            self.index
        )
    }
}

/// One scheduled quiz
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizInstance {
    pub id: String,
    #[serde(rename = "type")]
    pub quiz_type: QuizType,
    pub title: String,
    pub description: String,
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    pub question_count: u32,
    pub duration_minutes: u32,
    pub difficulty: Difficulty,
    pub scheduled_date: NaiveDate,
    pub exam_level: ExamLevel,
    pub is_locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_new: Option<bool>,
    pub total_users: u32,
}

impl QuizInstance {
    /// Parsed id, if well-formed
    pub fn parsed_id(&self) -> Option<QuizId> {
        QuizId::parse(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiz_id_roundtrip() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        for quiz_type in QuizType::all() {
            let id = QuizId::new(*quiz_type, date, 3);
            let text = id.to_string();
            assert_eq!(QuizId::parse(&text), Some(id), "{text}");
        }
        assert_eq!(
            QuizId::new(QuizType::DailyMixed, date, 0).to_string(),
            "daily-2025-01-01-0"
        );
    }

    #[test]
    fn test_quiz_id_rejects_garbage() {
        assert_eq!(QuizId::parse("daily-2025-01-01"), None);
        assert_eq!(QuizId::parse("weekly-2025-01-01-0"), None);
        assert_eq!(QuizId::parse("daily-2025-13-01-0"), None);
        assert_eq!(QuizId::parse("daily-2025-01-01-x"), None);
    }

    #[test]
    fn test_difficulty_cycle() {
        assert_eq!(Difficulty::cycle(0), Difficulty::Easy);
        assert_eq!(Difficulty::cycle(1), Difficulty::Medium);
        assert_eq!(Difficulty::cycle(2), Difficulty::Hard);
        assert_eq!(Difficulty::cycle(3), Difficulty::Easy);
        assert_eq!(Difficulty::cycle(-1), Difficulty::Hard);
    }

    #[test]
    fn test_quiz_type_serde_names() {
        let json = serde_json::to_string(&QuizType::SpeedChallenge).unwrap();
        assert_eq!(json, "\"speed-challenge\"");
        for quiz_type in QuizType::all() {
            assert_eq!(QuizType::from_str(quiz_type.as_str()), Some(*quiz_type));
        }
    }
}
