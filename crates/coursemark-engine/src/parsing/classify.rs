use std::sync::OnceLock;

use regex::Regex;

use crate::models::outline::OptionLetter;

use super::fence::CodeFence;

/// Classification of a single raw line, with captured header fields.
///
/// Question and option lines are classified by shape alone; whether they
/// actually belong to a quiz is decided by the builder, so that an
/// option-shaped line outside any quiz can still fall back to plain
/// lesson content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    PhaseHeader { number: u32, title: String },
    LessonHeader { number: u32, title: String },
    QuizHeader { title: String },
    QuestionLine { number: u32, text: String },
    OptionLine { letter: OptionLetter, text: String },
    /// A fence delimiter line; flips the classifier's fence flag.
    FenceMarker,
    /// Any line between two fence markers, opaque to the grammar.
    Fenced,
    /// A non-blank line with no structural meaning of its own.
    Content,
    /// Blank lines and heading-marker lines that fail their pattern.
    Skip,
}

fn phase_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^# PHASE (\d+): (.+)$").expect("invalid phase header regex"))
}

fn lesson_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^## 💡 Lesson (\d+): (.+)$").expect("invalid lesson header regex")
    })
}

fn quiz_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^## 🎯 Quiz .*: (.+)$").expect("invalid quiz header regex"))
}

fn question_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^\*\*Question (\d+):\*\* (.+)$").expect("invalid question regex")
    })
}

fn option_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([A-D])\)\s+(.+)$").expect("invalid option regex"))
}

/// Labels raw lines one at a time, tracking only the fence flag.
///
/// Fence markers take priority over every other rule so that header
/// literals inside example code blocks are never misread as structure.
pub struct CourseLineClassifier {
    in_fence: bool,
}

impl CourseLineClassifier {
    pub fn new() -> Self {
        Self { in_fence: false }
    }

    pub fn in_fence(&self) -> bool {
        self.in_fence
    }

    pub fn classify(&mut self, line: &str) -> LineClass {
        if CodeFence::is_marker(line) {
            self.in_fence = !self.in_fence;
            return LineClass::FenceMarker;
        }
        if self.in_fence {
            return LineClass::Fenced;
        }

        let stripped = line.trim();
        if stripped.is_empty() {
            return LineClass::Skip;
        }

        if let Some(c) = phase_re().captures(line) {
            return match c[1].parse() {
                Ok(number) => LineClass::PhaseHeader {
                    number,
                    title: c[2].trim().to_string(),
                },
                Err(_) => LineClass::Skip,
            };
        }
        if let Some(c) = lesson_re().captures(line) {
            return match c[1].parse() {
                Ok(number) => LineClass::LessonHeader {
                    number,
                    title: c[2].trim().to_string(),
                },
                Err(_) => LineClass::Skip,
            };
        }
        if let Some(c) = quiz_re().captures(line) {
            return LineClass::QuizHeader {
                title: c[1].trim().to_string(),
            };
        }
        if line.starts_with('#') {
            // Heading marker that matches none of the course patterns,
            // including malformed phase/lesson/quiz headers.
            return LineClass::Skip;
        }

        if let Some(c) = question_re().captures(line) {
            return match c[1].parse() {
                Ok(number) => LineClass::QuestionLine {
                    number,
                    text: c[2].trim().to_string(),
                },
                Err(_) => LineClass::Skip,
            };
        }
        if let Some(c) = option_re().captures(stripped)
            && let Some(letter) = c[1].chars().next().and_then(OptionLetter::from_char)
        {
            return LineClass::OptionLine {
                letter,
                text: c[2].trim().to_string(),
            };
        }

        LineClass::Content
    }
}

impl Default for CourseLineClassifier {
    fn default() -> Self {
        Self::new()
    }
}
