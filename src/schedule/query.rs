//! Read-only slicing of a generated corpus for calendar and list views

use std::collections::HashMap;

use chrono::NaiveDate;

use super::dates::parse_day_key;
use super::quiz::{QuizInstance, QuizType};

/// Query interface over a borrowed corpus
#[derive(Debug, Clone, Copy)]
pub struct ScheduleQuery<'a> {
    corpus: &'a [QuizInstance],
}

impl<'a> ScheduleQuery<'a> {
    pub fn new(corpus: &'a [QuizInstance]) -> Self {
        Self { corpus }
    }

    /// All instances of one archetype
    pub fn by_type(&self, quiz_type: QuizType) -> Vec<&'a QuizInstance> {
        self.corpus
            .iter()
            .filter(|q| q.quiz_type == quiz_type)
            .collect()
    }

    /// All instances scheduled on `date`
    pub fn by_date(&self, date: NaiveDate) -> Vec<&'a QuizInstance> {
        self.corpus
            .iter()
            .filter(|q| q.scheduled_date == date)
            .collect()
    }

    /// Same as [`by_date`](Self::by_date) for a "YYYY-MM-DD" key.
    /// Anything that is not a day key matches nothing.
    pub fn by_date_str(&self, day: &str) -> Vec<&'a QuizInstance> {
        match parse_day_key(day) {
            Some(date) => self.by_date(date),
            None => {
                tracing::debug!("Ignoring malformed day key in schedule query: {:?}", day);
                Vec::new()
            }
        }
    }

    /// Instances on `date`, optionally narrowed to one archetype
    pub fn by_date_and_type(
        &self,
        date: NaiveDate,
        quiz_type: Option<QuizType>,
    ) -> Vec<&'a QuizInstance> {
        self.corpus
            .iter()
            .filter(|q| q.scheduled_date == date)
            .filter(|q| quiz_type.is_none_or(|t| q.quiz_type == t))
            .collect()
    }

    pub fn by_id(&self, id: &str) -> Option<&'a QuizInstance> {
        self.corpus.iter().find(|q| q.id == id)
    }

    /// Instances scheduled between `start` and `end` inclusive
    pub fn in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&'a QuizInstance> {
        self.corpus
            .iter()
            .filter(|q| q.scheduled_date >= start && q.scheduled_date <= end)
            .collect()
    }

    /// Per-archetype counts for one day (calendar cell badges)
    pub fn counts_by_type(&self, date: NaiveDate) -> HashMap<QuizType, usize> {
        let mut counts = HashMap::new();
        for quiz in self.by_date(date) {
            *counts.entry(quiz.quiz_type).or_insert(0) += 1;
        }
        counts
    }
}
