use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use prepdeck::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "prepdeck")]
#[command(about = "Exam practice schedules, study progress and streaks")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.prepdeck/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List scheduled quizzes for a day
    Schedule {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(long)]
        date: Option<String>,

        /// Only show this quiz type (e.g. daily-mixed, full-prelims)
        #[arg(long = "type")]
        quiz_type: Option<String>,

        /// Show the number of quizzes per type instead of the list
        #[arg(long)]
        counts: bool,
    },

    /// Show topic progress, completed topics and recent activity for an exam
    Progress {
        /// Exam identifier
        exam: String,
    },

    /// Mark a topic completed (or not completed with --undo)
    Complete {
        exam: String,
        topic: String,

        /// Mark the topic not completed instead
        #[arg(long)]
        undo: bool,
    },

    /// Toggle a bookmark on a study resource
    Bookmark {
        exam: String,
        topic: String,
        resource: String,

        /// Resource kind: video, pdf or test
        #[arg(long, default_value = "pdf")]
        kind: String,

        /// Display title of the resource
        #[arg(long, default_value = "")]
        title: String,

        /// Subject the topic belongs to
        #[arg(long, default_value = "")]
        subject: String,
    },

    /// Show the streak, milestones and badges
    Streak,

    /// Record a completed quiz for today
    RecordQuiz {
        /// Points earned
        #[arg(long, default_value_t = 0)]
        points: u32,
    },

    /// Clear syllabus data for one exam, or for all exams with --all
    Clear {
        exam: Option<String>,

        #[arg(long, conflicts_with = "exam")]
        all: bool,
    },

    /// Write a default ~/.prepdeck/config.toml
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.unwrap_or_else(Config::global_config_path);

    // Init must work even when the existing config is broken
    if let Commands::Init { force } = cli.command {
        init_logging(cli.verbose, "info");
        return cli::init::init_command(&config_path, force);
    }

    let config = Config::load_or_default(&config_path)?;
    init_logging(cli.verbose, &config.log.level);

    match cli.command {
        Commands::Schedule {
            date,
            quiz_type,
            counts,
        } => {
            cli::schedule::schedule_command(&config, date.as_deref(), quiz_type.as_deref(), counts)?
        }
        Commands::Progress { exam } => cli::progress::progress_command(&config, &exam)?,
        Commands::Complete { exam, topic, undo } => {
            cli::progress::complete_command(&config, &exam, &topic, !undo)?
        }
        Commands::Bookmark {
            exam,
            topic,
            resource,
            kind,
            title,
            subject,
        } => cli::bookmark::bookmark_command(
            &config, &exam, &topic, &resource, &kind, &title, &subject,
        )?,
        Commands::Streak => cli::streak::streak_command(&config)?,
        Commands::RecordQuiz { points } => cli::streak::record_quiz_command(&config, points)?,
        Commands::Clear { exam, all } => {
            cli::progress::clear_command(&config, exam.as_deref(), all)?
        }
        Commands::Init { .. } => unreachable!("handled above"),
    }

    Ok(())
}

fn init_logging(verbose: bool, default_level: &str) {
    let log_level = if verbose { "debug" } else { default_level };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
