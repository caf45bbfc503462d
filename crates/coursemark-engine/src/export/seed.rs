//! SQL seed-script emission: pure string templating over the parsed
//! outline for a course/section/lesson/quiz/question/option schema.

use std::collections::HashMap;

use serde::Deserialize;
use tracing::warn;

use crate::models::outline::{OptionLetter, Outline};
use crate::summary;

const LESSON_BASE_MINUTES: usize = 15;
const LESSON_STEP_MINUTES: usize = 5;
const QUIZ_PASSING_SCORE: u32 = 70;
const QUIZ_TIME_LIMIT_MINUTES: u32 = 20;
const QUESTION_POINTS: u32 = 10;

/// Course-level metadata for the generated script. None of this can be
/// derived from the document itself; callers supply it.
#[derive(Debug, Clone)]
pub struct CourseMeta {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: String,
    pub level: String,
    pub language: String,
}

impl CourseMeta {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            instructor: String::new(),
            category: "Programming".to_string(),
            level: "Beginner".to_string(),
            language: "English".to_string(),
        }
    }
}

/// Ground-truth answers keyed by phase and question number.
///
/// The course document carries no answer data, so correctness must be
/// supplied externally. TOML shape:
///
/// ```toml
/// [phases.1]
/// 1 = "B"
/// 2 = "D"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerKey {
    #[serde(default)]
    phases: HashMap<String, HashMap<String, OptionLetter>>,
}

#[derive(Debug, thiserror::Error)]
pub enum AnswerKeyError {
    #[error("Failed to parse answer key: {0}")]
    Parse(#[from] toml::de::Error),
}

impl AnswerKey {
    pub fn from_toml_str(s: &str) -> Result<Self, AnswerKeyError> {
        Ok(toml::from_str(s)?)
    }

    pub fn correct_letter(&self, phase: u32, question: u32) -> Option<OptionLetter> {
        self.phases
            .get(&phase.to_string())?
            .get(&question.to_string())
            .copied()
    }
}

/// Render the outline as a deterministic SQL seed script.
///
/// Ids are sequential integers in traversal order, so re-running on the
/// same input yields a byte-identical script. Questions with no answer
/// key entry get no `is_correct = TRUE` row; the gap is flagged with an
/// SQL comment and a warning instead of a guessed answer.
pub fn render_seed(outline: &Outline, lines: &[&str], meta: &CourseMeta, key: &AnswerKey) -> String {
    let mut out = String::new();
    let mut lesson_id = 0usize;
    let mut quiz_id = 0usize;
    let mut question_id = 0usize;
    let mut option_id = 0usize;

    out.push_str("-- Course seed data generated from the parsed course outline.\n");
    out.push_str(&format!(
        "INSERT INTO courses (id, title, description, instructor, category, level, language, published)\n\
         VALUES (1, '{}', '{}', '{}', '{}', '{}', '{}', TRUE);\n",
        sql_text(&meta.title),
        sql_text(&meta.description),
        sql_text(&meta.instructor),
        sql_text(&meta.category),
        sql_text(&meta.level),
        sql_text(&meta.language),
    ));

    for (section_idx, phase) in outline.phases.iter().enumerate() {
        let section_id = section_idx + 1;
        out.push_str(&format!("\n-- Phase {}: {}\n", phase.number, phase.title));
        out.push_str(&format!(
            "INSERT INTO course_sections (id, course_id, title, position, description)\n\
             VALUES ({section_id}, 1, '{}', {}, '{}');\n",
            sql_text(&phase.title),
            phase.number,
            sql_text(&format!("{} - lessons and examples", phase.title)),
        ));

        for (idx, lesson) in phase.lessons.iter().enumerate() {
            lesson_id += 1;
            let synopsis = summary::summarize_lesson(lines, lesson.content_start);
            out.push_str(&format!(
                "INSERT INTO lessons (id, section_id, title, content, position, duration_minutes)\n\
                 VALUES ({lesson_id}, {section_id}, '{}', '{}', {}, {});\n",
                sql_text(&lesson.title),
                sql_text(&synopsis),
                idx + 1,
                LESSON_BASE_MINUTES + idx * LESSON_STEP_MINUTES,
            ));
        }

        let Some(quiz) = phase.quiz.as_ref().filter(|q| !q.questions.is_empty()) else {
            continue;
        };
        quiz_id += 1;
        out.push_str(&format!(
            "INSERT INTO quizzes (id, section_id, title, description, passing_score, time_limit_minutes)\n\
             VALUES ({quiz_id}, {section_id}, '{}', '{}', {QUIZ_PASSING_SCORE}, {QUIZ_TIME_LIMIT_MINUTES});\n",
            sql_text(&quiz.title),
            sql_text(&format!("Test your understanding of {}", phase.title)),
        ));

        for (q_idx, question) in quiz.questions.iter().enumerate() {
            question_id += 1;
            out.push_str(&format!(
                "INSERT INTO quiz_questions (id, quiz_id, question, position, points)\n\
                 VALUES ({question_id}, {quiz_id}, '{}', {}, {QUESTION_POINTS});\n",
                sql_text(&question.text),
                q_idx + 1,
            ));

            let correct = key.correct_letter(phase.number, question.number);
            if correct.is_none() && !question.options.is_empty() {
                warn!(
                    phase = phase.number,
                    question = question.number,
                    "no answer key entry; no option marked correct"
                );
                out.push_str(&format!(
                    "-- no answer key entry for phase {} question {}; no option marked correct\n",
                    phase.number, question.number,
                ));
            }
            if let Some(letter) = correct
                && !question.options.iter().any(|o| o.letter == letter)
            {
                warn!(
                    phase = phase.number,
                    question = question.number,
                    letter = letter.as_str(),
                    "answer key letter matches none of the question's options"
                );
            }

            for (o_idx, option) in question.options.iter().enumerate() {
                option_id += 1;
                let is_correct = correct == Some(option.letter);
                out.push_str(&format!(
                    "INSERT INTO quiz_options (id, question_id, text, position, is_correct)\n\
                     VALUES ({option_id}, {question_id}, '{}', {}, {});\n",
                    sql_text(&option.text),
                    o_idx + 1,
                    if is_correct { "TRUE" } else { "FALSE" },
                ));
            }
        }
    }

    out
}

/// Collapse whitespace runs and escape single quotes for SQL literals.
fn sql_text(s: &str) -> String {
    let collapsed = s.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::parse_course;
    use crate::tests::{SAMPLE_COURSE, doc_lines};
    use pretty_assertions::assert_eq;

    fn sample_seed(key: &AnswerKey) -> String {
        let lines = doc_lines(SAMPLE_COURSE);
        let outline = parse_course(&lines);
        let meta = CourseMeta::new("OpenEdge 4GL Comprehensive Course");
        render_seed(&outline, &lines, &meta, key)
    }

    #[test]
    fn escapes_quotes_and_collapses_whitespace() {
        assert_eq!(sql_text("it's  a   test"), "it''s a test");
    }

    #[test]
    fn without_answer_key_nothing_is_marked_correct() {
        let seed = sample_seed(&AnswerKey::default());
        // Only the course row carries TRUE; no option row is marked correct.
        assert_eq!(seed.matches(", TRUE);").count(), 1);
        // The gap is flagged explicitly instead of guessing an answer.
        assert!(seed.contains("no answer key entry for phase 1 question 1"));
    }

    #[test]
    fn answer_key_marks_exactly_the_keyed_option() {
        let key = AnswerKey::from_toml_str("[phases.1]\n1 = \"B\"\n").unwrap();
        let seed = sample_seed(&key);

        // Course row plus exactly one correct option row.
        assert_eq!(seed.matches(", TRUE);").count(), 2);
        assert!(!seed.contains("no answer key entry for phase 1 question 1"));
    }

    #[test]
    fn answer_key_lookup() {
        let key = AnswerKey::from_toml_str("[phases.2]\n3 = \"D\"\n").unwrap();
        assert_eq!(key.correct_letter(2, 3), Some(OptionLetter::D));
        assert_eq!(key.correct_letter(2, 4), None);
        assert_eq!(key.correct_letter(1, 3), None);
    }

    #[test]
    fn sequential_ids_and_positions() {
        let seed = sample_seed(&AnswerKey::default());
        assert!(seed.contains("INSERT INTO course_sections (id, course_id, title, position, description)\nVALUES (1, 1,"));
        assert!(seed.contains("VALUES (1, 1, 'Variables and Display'"));
    }

    #[test]
    fn output_is_deterministic() {
        let key = AnswerKey::from_toml_str("[phases.1]\n1 = \"A\"\n").unwrap();
        assert_eq!(sample_seed(&key), sample_seed(&key));
    }

    #[test]
    fn quiz_without_questions_is_not_emitted() {
        let lines = vec![
            "# PHASE 1: Basics",
            "## 💡 Lesson 1: Intro",
            "Some prose.",
            "## 🎯 Quiz 1: Empty",
        ];
        let outline = parse_course(&lines);
        let seed = render_seed(
            &outline,
            &lines,
            &CourseMeta::new("Test"),
            &AnswerKey::default(),
        );
        assert!(!seed.contains("INSERT INTO quizzes"));
        assert!(seed.contains("INSERT INTO lessons"));
    }
}
