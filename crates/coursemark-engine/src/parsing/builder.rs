use tracing::debug;

use crate::models::outline::{AnswerOption, Lesson, Outline, Phase, Question, Quiz};

use super::classify::LineClass;

/// Where content-bearing lines are currently routed.
///
/// Lesson and quiz accumulation are mutually exclusive within a phase:
/// whichever header came last wins and deactivates the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    None,
    Lesson,
    Quiz,
}

/// Consumes classified lines left to right and assembles the outline.
///
/// Holds the current phase and the active accumulation target; a phase is
/// appended to the output when the next phase header arrives or input
/// ends, and only if it retains material.
pub struct OutlineBuilder {
    out: Vec<Phase>,
    current: Option<Phase>,
    target: Target,
    orphan_lines: usize,
}

impl OutlineBuilder {
    pub fn new() -> Self {
        Self {
            out: vec![],
            current: None,
            target: Target::None,
            orphan_lines: 0,
        }
    }

    pub fn push(&mut self, offset: usize, class: LineClass, raw: &str) {
        match class {
            LineClass::PhaseHeader { number, title } => {
                self.flush_phase();
                self.current = Some(Phase {
                    number,
                    title,
                    lessons: vec![],
                    quiz: None,
                });
                self.target = Target::None;
            }
            LineClass::LessonHeader { number, title } => {
                if let Some(phase) = self.current.as_mut() {
                    phase.lessons.push(Lesson {
                        number,
                        title,
                        content_start: offset,
                        content: vec![],
                    });
                    self.target = Target::Lesson;
                }
            }
            LineClass::QuizHeader { title } => {
                if let Some(phase) = self.current.as_mut() {
                    // A later quiz header replaces the binding, it does
                    // not merge.
                    phase.quiz = Some(Quiz {
                        title,
                        content_start: offset,
                        questions: vec![],
                    });
                    self.target = Target::Quiz;
                }
            }
            LineClass::QuestionLine { number, text } => {
                if self.target == Target::Quiz {
                    if let Some(quiz) = self.current_quiz() {
                        quiz.questions.push(Question {
                            number,
                            text,
                            options: vec![],
                        });
                    }
                } else {
                    self.accumulate(raw);
                }
            }
            LineClass::OptionLine { letter, text } => {
                if self.target == Target::Quiz {
                    match self.current_quiz().and_then(|q| q.questions.last_mut()) {
                        Some(question) => question.options.push(AnswerOption { letter, text }),
                        None => {
                            debug!(
                                letter = letter.as_str(),
                                offset, "option line with no preceding question, dropped"
                            );
                        }
                    }
                } else {
                    self.accumulate(raw);
                }
            }
            LineClass::Content => self.accumulate(raw),
            LineClass::FenceMarker | LineClass::Fenced | LineClass::Skip => {}
        }
    }

    pub fn finish(mut self) -> Outline {
        self.flush_phase();
        if self.orphan_lines > 0 {
            debug!(
                lines = self.orphan_lines,
                "content lines with no active lesson were dropped"
            );
        }
        Outline { phases: self.out }
    }

    fn accumulate(&mut self, raw: &str) {
        if self.target == Target::Lesson
            && let Some(lesson) = self.current.as_mut().and_then(|p| p.lessons.last_mut())
        {
            lesson.content.push(raw.to_string());
        } else {
            self.orphan_lines += 1;
        }
    }

    fn current_quiz(&mut self) -> Option<&mut Quiz> {
        self.current.as_mut().and_then(|p| p.quiz.as_mut())
    }

    fn flush_phase(&mut self) {
        if let Some(phase) = self.current.take() {
            if phase.has_material() {
                self.out.push(phase);
            } else {
                debug!(
                    number = phase.number,
                    "phase with no lessons or quiz, dropped"
                );
            }
        }
        self.target = Target::None;
    }
}

impl Default for OutlineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::outline::OptionLetter;
    use pretty_assertions::assert_eq;

    fn build(lines: &[&str]) -> Outline {
        crate::parsing::parse_course(lines)
    }

    #[test]
    fn lesson_content_stops_at_quiz_header() {
        let outline = build(&[
            "# PHASE 1: Basics",
            "## 💡 Lesson 1: Intro",
            "Lesson text.",
            "## 🎯 Quiz 1: Check",
            "Quiz preamble is not lesson content.",
        ]);
        assert_eq!(outline.phases[0].lessons[0].content, vec!["Lesson text."]);
    }

    #[test]
    fn question_after_new_lesson_header_becomes_content() {
        // The lesson header deactivates the quiz, so a question-shaped
        // line afterwards is plain lesson content.
        let outline = build(&[
            "# PHASE 1: Basics",
            "## 🎯 Quiz 1: Check",
            "**Question 1:** Real question?",
            "## 💡 Lesson 1: After the quiz",
            "**Question 2:** Not a question anymore",
        ]);
        let phase = &outline.phases[0];
        assert_eq!(phase.quiz.as_ref().unwrap().questions.len(), 1);
        assert_eq!(
            phase.lessons[0].content,
            vec!["**Question 2:** Not a question anymore"]
        );
    }

    #[test]
    fn option_outside_quiz_is_lesson_content() {
        let outline = build(&[
            "# PHASE 1: Basics",
            "## 💡 Lesson 1: Intro",
            "A) looks like an option but is prose",
        ]);
        assert_eq!(
            outline.phases[0].lessons[0].content,
            vec!["A) looks like an option but is prose"]
        );
    }

    #[test]
    fn option_attaches_to_most_recent_question() {
        let outline = build(&[
            "# PHASE 1: Basics",
            "## 🎯 Quiz 1: Check",
            "**Question 1:** First?",
            "A) one",
            "**Question 2:** Second?",
            "B) two",
        ]);
        let questions = &outline.phases[0].quiz.as_ref().unwrap().questions;
        assert_eq!(questions[0].options.len(), 1);
        assert_eq!(questions[1].options.len(), 1);
        assert_eq!(questions[1].options[0].letter, OptionLetter::B);
    }

    #[test]
    fn second_quiz_header_replaces_the_first() {
        let outline = build(&[
            "# PHASE 1: Basics",
            "## 🎯 Quiz 1: First",
            "**Question 1:** Lost?",
            "## 🎯 Quiz 1 again: Second",
            "**Question 1:** Kept?",
        ]);
        let quiz = outline.phases[0].quiz.as_ref().unwrap();
        assert_eq!(quiz.title, "Second");
        assert_eq!(quiz.questions.len(), 1);
        assert_eq!(quiz.questions[0].text, "Kept?");
    }

    #[test]
    fn headers_without_a_phase_are_ignored() {
        let outline = build(&[
            "## 💡 Lesson 1: Orphan lesson",
            "## 🎯 Quiz 1: Orphan quiz",
            "**Question 1:** Orphan?",
            "A) nope",
        ]);
        assert_eq!(outline.phases.len(), 0);
    }
}
