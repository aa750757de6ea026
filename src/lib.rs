//! Prepdeck - exam practice schedules and study progress
//!
//! Prepdeck generates a deterministic calendar of practice quizzes around a
//! reference day and keeps a learner's study state in a pluggable key-value
//! store.
//!
//! ## Building blocks
//!
//! 1. **Schedule**: seven quiz archetypes expand a date range into
//!    reproducible [`schedule::QuizInstance`]s. The same day always yields
//!    the same ids, difficulties, subjects and popularity figures.
//!
//! 2. **Progress**: [`progress::ProgressStore`] records topic and video
//!    progress, completed topics, bookmarks and recently viewed topics.
//!    Corrupt data reads as empty, failed writes are logged and kept for the
//!    session.
//!
//! 3. **Streaks**: [`streak::StreakState`] counters drive milestones and
//!    badges.

mod atomic;
pub mod clock;
pub mod config;
pub mod error;
pub mod progress;
pub mod schedule;
pub mod streak;

pub use error::StoreError;
