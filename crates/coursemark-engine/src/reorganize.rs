//! Companion document transform: move each phase's quiz section to the
//! end of its chapter. A line-range cut/paste over the same markdown
//! grammar as the parser, not a data extraction.

use crate::parsing::fence::CodeFence;

/// How far above the next phase header to look for a `---` separator
/// when choosing the reinsertion point.
const SEPARATOR_LOOKBACK: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// `# PHASE ` chapter boundary.
    PhaseHeader,
    /// `## 🎯` quiz section start.
    QuizHeader,
    /// Any other `## ` heading; ends a quiz section.
    SubHeading,
    Other,
}

fn mark_lines(lines: &[&str]) -> Vec<Mark> {
    let mut marks = Vec::with_capacity(lines.len());
    let mut in_fence = false;
    for line in lines {
        if CodeFence::is_marker(line) {
            in_fence = !in_fence;
            marks.push(Mark::Other);
            continue;
        }
        if in_fence {
            marks.push(Mark::Other);
        } else if line.starts_with("# PHASE ") {
            marks.push(Mark::PhaseHeader);
        } else if line.starts_with("## 🎯") {
            marks.push(Mark::QuizHeader);
        } else if line.starts_with("## ") {
            marks.push(Mark::SubHeading);
        } else {
            marks.push(Mark::Other);
        }
    }
    marks
}

/// Rewrite the document so each phase's quiz section sits at the end of
/// its chapter, reinserted before the `---` separator that precedes the
/// next phase header when one is close enough. Phases without a quiz,
/// and content inside code fences, pass through untouched.
pub fn move_quizzes_to_chapter_end(lines: &[&str]) -> Vec<String> {
    let marks = mark_lines(lines);

    let mut phase_starts: Vec<usize> = marks
        .iter()
        .enumerate()
        .filter(|(_, m)| **m == Mark::PhaseHeader)
        .map(|(i, _)| i)
        .collect();

    let first = phase_starts.first().copied().unwrap_or(lines.len());
    let mut out: Vec<String> = lines[..first].iter().map(|s| s.to_string()).collect();

    phase_starts.push(lines.len());
    for w in phase_starts.windows(2) {
        let (start, end) = (w[0], w[1]);

        let Some(quiz_start) = (start..end).find(|&i| marks[i] == Mark::QuizHeader) else {
            out.extend(lines[start..end].iter().map(|s| s.to_string()));
            continue;
        };
        let quiz_end = (quiz_start + 1..end)
            .find(|&i| marks[i] == Mark::SubHeading)
            .unwrap_or(end);

        let mut body: Vec<&str> = lines[start..quiz_start].to_vec();
        body.extend_from_slice(&lines[quiz_end..end]);
        let quiz = &lines[quiz_start..quiz_end];

        let mut insert_at = body.len();
        let lookback = body.len().saturating_sub(SEPARATOR_LOOKBACK);
        for i in (lookback..body.len()).rev() {
            if body[i].trim() == "---" {
                insert_at = i;
                break;
            }
        }

        out.extend(body[..insert_at].iter().map(|s| s.to_string()));
        out.extend(quiz.iter().map(|s| s.to_string()));
        out.extend(body[insert_at..].iter().map(|s| s.to_string()));
    }

    out
}
