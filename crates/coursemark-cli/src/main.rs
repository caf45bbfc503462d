//! Coursemark CLI - batch front-end for the course document pipeline.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use coursemark_config::Config;
use coursemark_engine::export::{AnswerKey, CourseMeta, render_seed, to_json};
use coursemark_engine::{io, parse_course, reorganize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "coursemark")]
#[command(version)]
#[command(about = "Course markdown to outline, seed-data and reorganization tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse the course document and emit the JSON outline snapshot
    Outline {
        /// Course markdown file (falls back to the config file's course_path)
        course: Option<PathBuf>,

        /// Write output to FILE instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Generate the SQL seed script for the course persistence schema
    Seed {
        /// Course markdown file (falls back to the config file's course_path)
        course: Option<PathBuf>,

        /// Write output to FILE instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML answer key file; without one no option is marked correct
        #[arg(long)]
        answer_key: Option<PathBuf>,

        /// Title for the seed script's course row
        #[arg(long, default_value = "Untitled Course")]
        title: String,

        /// Course description
        #[arg(long, default_value = "")]
        description: String,

        /// Course instructor
        #[arg(long, default_value = "")]
        instructor: String,

        /// Course category
        #[arg(long, default_value = "Programming")]
        category: String,

        /// Course difficulty level
        #[arg(long, default_value = "Beginner")]
        level: String,

        /// Course language
        #[arg(long, default_value = "English")]
        language: String,
    },
    /// Move each phase's quiz section to the end of its chapter
    Reorganize {
        /// Course markdown file (falls back to the config file's course_path)
        course: Option<PathBuf>,

        /// Write output to FILE instead of stdout
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Rewrite the course file itself
        #[arg(long)]
        in_place: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "coursemark=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::load().context("failed to load config file")?;

    match cli.command {
        Commands::Outline { course, output } => {
            let course = require_course(course, config.as_ref())?;
            let text = read_course(&course)?;
            let lines: Vec<&str> = text.lines().collect();

            let outline = parse_course(&lines);
            let json = to_json(&outline).context("failed to serialize outline")?;

            let output = output.or_else(|| artifact_path(config.as_ref(), "outline.json"));
            emit(output.as_deref(), &json)
        }
        Commands::Seed {
            course,
            output,
            answer_key,
            title,
            description,
            instructor,
            category,
            level,
            language,
        } => {
            let course = require_course(course, config.as_ref())?;
            let text = read_course(&course)?;
            let lines: Vec<&str> = text.lines().collect();

            let key = load_answer_key(answer_key, config.as_ref())?;
            let meta = CourseMeta {
                title,
                description,
                instructor,
                category,
                level,
                language,
            };

            let outline = parse_course(&lines);
            let seed = render_seed(&outline, &lines, &meta, &key);

            let output = output.or_else(|| artifact_path(config.as_ref(), "seed.sql"));
            emit(output.as_deref(), &seed)
        }
        Commands::Reorganize {
            course,
            output,
            in_place,
        } => {
            let course = require_course(course, config.as_ref())?;
            let text = read_course(&course)?;
            let lines: Vec<&str> = text.lines().collect();

            let mut moved = reorganize::move_quizzes_to_chapter_end(&lines).join("\n");
            moved.push('\n');

            let output = if in_place { Some(course) } else { output };
            emit(output.as_deref(), &moved)
        }
    }
}

fn require_course(explicit: Option<PathBuf>, config: Option<&Config>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    if let Some(config) = config {
        return Ok(config.course_path.clone());
    }
    bail!(
        "no course file given and no config file found; pass a course path or create {}",
        Config::config_path().display()
    )
}

fn read_course(path: &Path) -> Result<String> {
    io::read_course(path).with_context(|| format!("failed to read course file {}", path.display()))
}

fn artifact_path(config: Option<&Config>, file_name: &str) -> Option<PathBuf> {
    config
        .and_then(|c| c.output_dir.as_ref())
        .map(|dir| dir.join(file_name))
}

fn load_answer_key(explicit: Option<PathBuf>, config: Option<&Config>) -> Result<AnswerKey> {
    let path = explicit.or_else(|| config.and_then(|c| c.answer_key_path.clone()));
    let Some(path) = path else {
        return Ok(AnswerKey::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read answer key {}", path.display()))?;
    AnswerKey::from_toml_str(&text)
        .with_context(|| format!("failed to parse answer key {}", path.display()))
}

fn emit(output: Option<&Path>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            io::write_artifact(path, content)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "artifact written");
        }
        None => print!("{content}"),
    }
    Ok(())
}
