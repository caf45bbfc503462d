use serde::{Deserialize, Serialize};

/// The complete parsed course tree, phases in source appearance order.
///
/// Serializes transparently as the phase array; downstream exporters and
/// the JSON snapshot depend on this shape, so field names and nesting are
/// part of the public contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Outline {
    pub phases: Vec<Phase>,
}

/// Top-level chapter grouping lessons and an optional quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub number: u32,
    pub title: String,
    pub lessons: Vec<Lesson>,
    pub quiz: Option<Quiz>,
}

impl Phase {
    /// Whether the phase carries anything worth keeping in the outline.
    ///
    /// A phase with neither lessons nor a quiz binding is dropped by the
    /// builder. A quiz with zero questions still counts as material.
    pub fn has_material(&self) -> bool {
        !self.lessons.is_empty() || self.quiz.is_some()
    }
}

/// A titled content unit within a phase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub number: u32,
    pub title: String,
    /// Line index of the lesson header; body content begins on the
    /// following line.
    pub content_start: usize,
    /// Raw content lines between this header and the next header of any
    /// kind.
    pub content: Vec<String>,
}

/// A titled assessment unit within a phase. At most one per phase; a
/// later quiz header replaces an earlier binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub title: String,
    pub content_start: usize,
    pub questions: Vec<Question>,
}

/// A single quiz prompt with its answer choices in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub number: u32,
    pub text: String,
    pub options: Vec<AnswerOption>,
}

/// One selectable answer choice for a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub letter: OptionLetter,
    pub text: String,
}

/// Option marker letter as it appears in the document (`A)` .. `D)`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }
}
