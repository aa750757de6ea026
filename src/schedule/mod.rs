//! Practice schedule generation
//!
//! Materializes a year of quiz instances across seven archetypes from pure
//! arithmetic over the calendar. Nothing here is persisted: the corpus is
//! rebuilt each session and comes out identical for the same days.
//!
//! # Usage
//!
//! ```ignore
//! let corpus = generate_full_corpus(today, ScheduleWindow::default());
//! let todays = ScheduleQuery::new(&corpus).by_date(today);
//! ```

mod archetypes;
mod catalog;
mod corpus;
mod dates;
mod query;
mod quiz;
mod seeded;

pub use archetypes::{build, Archetype, DifficultyPolicy, SubjectPolicy, ARCHETYPES};
pub use catalog::{subject_at, topic_at, Subject, SUBJECTS};
pub use corpus::{
    build_range, generate_corpus_now, generate_full_corpus, ScheduleWindow, MAX_WINDOW_DAYS,
};
pub use dates::{day_index, day_key, days_inclusive, parse_day_key, span_days};
pub use query::ScheduleQuery;
pub use quiz::{Difficulty, ExamLevel, QuizId, QuizInstance, QuizType};
pub use seeded::{seeded_random, seeded_range};
