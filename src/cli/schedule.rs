//! Schedule command implementation

use anyhow::{bail, Context, Result};

use prepdeck::clock::{Clock, SystemClock};
use prepdeck::config::Config;
use prepdeck::schedule::{day_key, generate_full_corpus, parse_day_key, QuizType, ScheduleQuery};

/// Show the quizzes scheduled on one day
pub fn schedule_command(
    config: &Config,
    date: Option<&str>,
    quiz_type: Option<&str>,
    counts: bool,
) -> Result<()> {
    let today = SystemClock.today();
    let day = match date {
        Some(text) => parse_day_key(text)
            .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", text))?,
        None => today,
    };

    let quiz_type = match quiz_type {
        Some(name) => match QuizType::from_str(name) {
            Some(t) => Some(t),
            None => {
                let known: Vec<_> = QuizType::all().iter().map(|t| t.as_str()).collect();
                bail!("Unknown quiz type '{}'. Known types: {}", name, known.join(", "));
            }
        },
        None => None,
    };

    let (start, end) = config.schedule.bounds(today);
    if day < start || day > end {
        println!(
            "{} is outside the schedule window ({} to {}).",
            day_key(day),
            day_key(start),
            day_key(end)
        );
        return Ok(());
    }

    let corpus = generate_full_corpus(today, config.schedule);
    let query = ScheduleQuery::new(&corpus);

    if counts {
        let per_type = query.counts_by_type(day);
        println!("Quizzes on {}:\n", day_key(day));
        for t in QuizType::all() {
            if quiz_type.is_none_or(|wanted| wanted == *t) {
                println!("  {:<18} {}", t.label(), per_type.get(t).copied().unwrap_or(0));
            }
        }
        return Ok(());
    }

    let quizzes = query.by_date_and_type(day, quiz_type);
    if quizzes.is_empty() {
        println!("No quizzes scheduled on {}.", day_key(day));
        return Ok(());
    }

    println!("Quizzes on {} ({}):\n", day_key(day), quizzes.len());
    for quiz in quizzes {
        let mut flags = Vec::new();
        if quiz.is_locked {
            flags.push("locked");
        }
        if quiz.is_new == Some(true) {
            flags.push("new");
        }

        println!("  {} [{}] {}", quiz.id, quiz.quiz_type.label(), quiz.title);
        println!(
            "    {} | {} questions | {} min | {:?} | {} taking",
            quiz.subject,
            quiz.question_count,
            quiz.duration_minutes,
            quiz.difficulty,
            quiz.total_users
        );
        if !flags.is_empty() {
            println!("    {}", flags.join(", "));
        }
        println!();
    }

    Ok(())
}
