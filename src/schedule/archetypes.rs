//! Archetype builders
//!
//! Every archetype is a row in [`ARCHETYPES`]. A builder walks the requested
//! day range and emits `fan_out` instances per day. All variation is keyed
//! by the absolute day index plus the slot within the day, so a day's quizzes
//! come out the same regardless of which range they were generated in.

use chrono::NaiveDate;

use super::catalog::{subject_at, topic_at};
use super::dates::{day_index, days_inclusive, span_days};
use super::quiz::{Difficulty, ExamLevel, QuizId, QuizInstance, QuizType};
use super::seeded::seeded_range;

/// How an archetype picks difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DifficultyPolicy {
    /// `(day_index + slot) mod 3`
    Cycle,
    Fixed(Difficulty),
}

/// How an archetype picks its subject
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectPolicy {
    Fixed(&'static str),
    /// Rotate through the catalogue by `day_index + slot`
    Rotate,
    /// Rotate subject, then pick a topic inside it
    RotateWithTopic,
}

/// Archetype definition with all generation parameters
#[derive(Debug, Clone)]
pub struct Archetype {
    pub quiz_type: QuizType,
    /// Instances per day
    pub fan_out: u32,
    pub question_count: u32,
    pub duration_minutes: u32,
    pub difficulty: DifficultyPolicy,
    pub subject: SubjectPolicy,
    pub exam_level: ExamLevel,
    pub is_locked: bool,
    pub is_new: Option<bool>,
    /// Simulated popularity: `users_base + seeded * users_spread`
    pub users_base: u32,
    pub users_spread: u32,
}

/// All archetype definitions, in corpus emission order
pub static ARCHETYPES: &[Archetype] = &[
    Archetype {
        quiz_type: QuizType::DailyMixed,
        fan_out: 4,
        question_count: 10,
        duration_minutes: 15,
        difficulty: DifficultyPolicy::Cycle,
        subject: SubjectPolicy::Fixed("Mixed"),
        exam_level: ExamLevel::Prelims,
        is_locked: false,
        is_new: None,
        users_base: 1000,
        users_spread: 4000,
    },
    Archetype {
        quiz_type: QuizType::RapidFire,
        fan_out: 3,
        question_count: 5,
        duration_minutes: 5,
        difficulty: DifficultyPolicy::Cycle,
        subject: SubjectPolicy::Rotate,
        exam_level: ExamLevel::Prelims,
        is_locked: false,
        is_new: Some(true),
        users_base: 500,
        users_spread: 2000,
    },
    Archetype {
        quiz_type: QuizType::SpeedChallenge,
        fan_out: 2,
        question_count: 20,
        duration_minutes: 10,
        difficulty: DifficultyPolicy::Fixed(Difficulty::Hard),
        subject: SubjectPolicy::Rotate,
        exam_level: ExamLevel::Prelims,
        is_locked: false,
        is_new: Some(true),
        users_base: 300,
        users_spread: 1500,
    },
    Archetype {
        quiz_type: QuizType::MiniTest,
        fan_out: 2,
        question_count: 25,
        duration_minutes: 30,
        difficulty: DifficultyPolicy::Cycle,
        subject: SubjectPolicy::RotateWithTopic,
        exam_level: ExamLevel::Prelims,
        is_locked: false,
        is_new: None,
        users_base: 800,
        users_spread: 2500,
    },
    Archetype {
        quiz_type: QuizType::Sectional,
        fan_out: 2,
        question_count: 50,
        duration_minutes: 60,
        difficulty: DifficultyPolicy::Fixed(Difficulty::Medium),
        subject: SubjectPolicy::Rotate,
        exam_level: ExamLevel::Prelims,
        is_locked: false,
        is_new: None,
        users_base: 600,
        users_spread: 2000,
    },
    Archetype {
        quiz_type: QuizType::FullPrelims,
        fan_out: 1,
        question_count: 100,
        duration_minutes: 120,
        difficulty: DifficultyPolicy::Fixed(Difficulty::Hard),
        subject: SubjectPolicy::Fixed("General Studies"),
        exam_level: ExamLevel::Prelims,
        is_locked: false,
        is_new: None,
        users_base: 2000,
        users_spread: 8000,
    },
    Archetype {
        quiz_type: QuizType::FullMains,
        fan_out: 1,
        question_count: 20,
        duration_minutes: 180,
        difficulty: DifficultyPolicy::Fixed(Difficulty::Hard),
        subject: SubjectPolicy::Fixed("General Studies"),
        exam_level: ExamLevel::Mains,
        is_locked: true,
        is_new: None,
        users_base: 800,
        users_spread: 3000,
    },
];

impl Archetype {
    /// Get archetype definition by quiz type
    pub fn get(quiz_type: QuizType) -> &'static Archetype {
        ARCHETYPES
            .iter()
            .find(|a| a.quiz_type == quiz_type)
            .expect("All quiz types should have an archetype")
    }

    /// Generate every instance from `start` to `end` inclusive.
    ///
    /// An inverted range gives an empty list.
    pub fn build(&self, start: NaiveDate, end: NaiveDate) -> Vec<QuizInstance> {
        let mut instances = Vec::with_capacity(span_days(start, end) * self.fan_out as usize);

        for date in days_inclusive(start, end) {
            for slot in 0..self.fan_out {
                instances.push(self.instance(date, slot));
            }
        }

        tracing::debug!(
            "Built {} {} instances for {}..={}",
            instances.len(),
            self.quiz_type,
            start,
            end
        );
        instances
    }

    /// Generate the instance for one day and slot
    pub fn instance(&self, date: NaiveDate, slot: u32) -> QuizInstance {
        let position = day_index(date) + slot as i64;

        let difficulty = match self.difficulty {
            DifficultyPolicy::Cycle => Difficulty::cycle(position),
            DifficultyPolicy::Fixed(difficulty) => difficulty,
        };

        let (subject, topic) = match self.subject {
            SubjectPolicy::Fixed(name) => (name, None),
            SubjectPolicy::Rotate => (subject_at(position).name, None),
            SubjectPolicy::RotateWithTopic => {
                let subject = subject_at(position);
                (subject.name, Some(topic_at(subject, position)))
            }
        };

        let (title, description) = self.describe(slot, subject, topic, difficulty);

        QuizInstance {
            id: QuizId::new(self.quiz_type, date, slot).to_string(),
            quiz_type: self.quiz_type,
            title,
            description,
            subject: subject.to_string(),
            topic: topic.map(str::to_string),
            question_count: self.question_count,
            duration_minutes: self.duration_minutes,
            difficulty,
            scheduled_date: date,
            exam_level: self.exam_level,
            is_locked: self.is_locked,
            is_new: self.is_new,
            total_users: seeded_range(position, self.users_base, self.users_spread),
        }
    }

    fn describe(
        &self,
        slot: u32,
        subject: &str,
        topic: Option<&str>,
        difficulty: Difficulty,
    ) -> (String, String) {
        let q = self.question_count;
        let mins = self.duration_minutes;
        match self.quiz_type {
            QuizType::DailyMixed => (
                format!("Daily Mixed Quiz #{}", slot + 1),
                format!("{q} questions across all subjects, {difficulty:?} level"),
            ),
            QuizType::RapidFire => (
                format!("Rapid Fire: {subject}"),
                format!("{q} quick-fire {subject} questions in {mins} minutes"),
            ),
            QuizType::SpeedChallenge => (
                format!("Speed Challenge: {subject}"),
                format!("Beat the clock: {q} {subject} questions in {mins} minutes"),
            ),
            QuizType::MiniTest => {
                let topic = topic.unwrap_or(subject);
                (
                    format!("Mini Test: {topic}"),
                    format!("{q} questions on {subject} - {topic}, {mins} minutes"),
                )
            }
            QuizType::Sectional => (
                format!("{subject} Sectional Test"),
                format!("Full-length {subject} section: {q} questions, {mins} minutes"),
            ),
            QuizType::FullPrelims => (
                "Full Prelims Mock Test".to_string(),
                format!("Complete GS Paper I simulation with {q} questions in {mins} minutes"),
            ),
            QuizType::FullMains => (
                "Full Mains Mock Test".to_string(),
                format!("Descriptive answer writing: {q} questions in {mins} minutes"),
            ),
        }
    }
}

/// Run a single archetype over an inclusive range
pub fn build(quiz_type: QuizType, start: NaiveDate, end: NaiveDate) -> Vec<QuizInstance> {
    Archetype::get(quiz_type).build(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_every_quiz_type_has_one_archetype() {
        assert_eq!(ARCHETYPES.len(), QuizType::all().len());
        for quiz_type in QuizType::all() {
            assert_eq!(Archetype::get(*quiz_type).quiz_type, *quiz_type);
        }
    }

    #[test]
    fn test_single_day_daily_mixed_ids() {
        let day = date(2025, 1, 1);
        let quizzes = build(QuizType::DailyMixed, day, day);
        let ids: Vec<&str> = quizzes.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "daily-2025-01-01-0",
                "daily-2025-01-01-1",
                "daily-2025-01-01-2",
                "daily-2025-01-01-3",
            ]
        );
    }

    #[test]
    fn test_fan_out_times_days() {
        let start = date(2025, 2, 25);
        let end = date(2025, 3, 6);
        for archetype in ARCHETYPES {
            let quizzes = archetype.build(start, end);
            assert_eq!(
                quizzes.len(),
                archetype.fan_out as usize * 10,
                "{}",
                archetype.quiz_type
            );
        }
    }

    #[test]
    fn test_inverted_range_is_empty() {
        for archetype in ARCHETYPES {
            assert!(archetype.build(date(2025, 1, 2), date(2025, 1, 1)).is_empty());
        }
    }

    #[test]
    fn test_rapid_fire_subjects_distinct_per_day() {
        let quizzes = build(QuizType::RapidFire, date(2025, 1, 1), date(2025, 1, 31));
        for day in quizzes.chunks(3) {
            let subjects: HashSet<&str> = day.iter().map(|q| q.subject.as_str()).collect();
            assert_eq!(subjects.len(), 3);
        }
    }

    #[test]
    fn test_cyclic_difficulty_rotates() {
        let day = date(2025, 1, 1);
        let position = day_index(day);
        let quizzes = build(QuizType::DailyMixed, day, day);
        for (slot, quiz) in quizzes.iter().enumerate() {
            assert_eq!(quiz.difficulty, Difficulty::cycle(position + slot as i64));
        }
        // Three consecutive slots cover every difficulty
        let seen: HashSet<Difficulty> = quizzes[..3].iter().map(|q| q.difficulty).collect();
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn test_fixed_difficulty_archetypes() {
        let quizzes = build(QuizType::SpeedChallenge, date(2025, 1, 1), date(2025, 1, 10));
        assert!(quizzes.iter().all(|q| q.difficulty == Difficulty::Hard));
        let quizzes = build(QuizType::Sectional, date(2025, 1, 1), date(2025, 1, 10));
        assert!(quizzes.iter().all(|q| q.difficulty == Difficulty::Medium));
    }

    #[test]
    fn test_mini_test_has_topic_from_subject() {
        let quizzes = build(QuizType::MiniTest, date(2025, 1, 1), date(2025, 1, 5));
        for quiz in quizzes {
            let topic = quiz.topic.as_deref().expect("mini tests carry a topic");
            let subject = super::super::catalog::SUBJECTS
                .iter()
                .find(|s| s.name == quiz.subject)
                .unwrap();
            assert!(subject.topics.contains(&topic));
        }
    }

    #[test]
    fn test_full_mains_locked_and_mains_level() {
        let quizzes = build(QuizType::FullMains, date(2025, 1, 1), date(2025, 1, 3));
        assert!(quizzes.iter().all(|q| q.is_locked && q.exam_level == ExamLevel::Mains));
    }

    #[test]
    fn test_instances_independent_of_range_start() {
        let wide = build(QuizType::MiniTest, date(2024, 12, 1), date(2025, 1, 31));
        let narrow = build(QuizType::MiniTest, date(2025, 1, 10), date(2025, 1, 10));
        let from_wide: Vec<_> = wide
            .into_iter()
            .filter(|q| q.scheduled_date == date(2025, 1, 10))
            .collect();
        assert_eq!(from_wide, narrow);
    }
}
