//! Short human-readable lesson synopses.
//!
//! Decoupled from the outline builder's single pass: a pure lookup over
//! the immutable line slice, safe to call per lesson in any order.

use crate::parsing::fence::CodeFence;

/// How far past the lesson header the scan may look.
pub const SUMMARY_WINDOW: usize = 100;
/// How many content lines go into a synopsis.
pub const SUMMARY_MAX_LINES: usize = 5;
/// Returned when the window holds no qualifying content.
pub const FALLBACK_SUMMARY: &str = "No overview available for this lesson.";

/// Build a synopsis for the lesson whose header sits at `content_start`.
///
/// Scans forward from the line after the header, hard-stopping at the
/// next heading of any level, skipping fenced code and blank lines, and
/// joins up to [`SUMMARY_MAX_LINES`] stripped lines with single spaces.
pub fn summarize_lesson(lines: &[&str], content_start: usize) -> String {
    let mut picked: Vec<&str> = Vec::new();
    let mut in_fence = false;

    let from = (content_start + 1).min(lines.len());
    let to = (content_start + 1 + SUMMARY_WINDOW).min(lines.len());

    for line in &lines[from..to] {
        if CodeFence::is_marker(line) {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if line.starts_with('#') {
            break;
        }
        let stripped = line.trim();
        if stripped.is_empty() {
            continue;
        }
        picked.push(stripped);
        if picked.len() == SUMMARY_MAX_LINES {
            break;
        }
    }

    if picked.is_empty() {
        FALLBACK_SUMMARY.to_string()
    } else {
        picked.join(" ")
    }
}
