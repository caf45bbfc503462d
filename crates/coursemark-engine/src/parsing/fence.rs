/// Fenced code block delimiters.
///
/// The course grammar treats any fence marker line as a toggle: every line
/// between two markers is opaque and must never be read as structure, even
/// when it looks exactly like a header.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Whether the stripped line opens or closes a fenced block.
    pub fn is_marker(line: &str) -> bool {
        let t = line.trim_start();
        t.starts_with(Self::BACKTICKS) || t.starts_with(Self::TILDES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_backtick_fence() {
        assert!(CodeFence::is_marker("```rust"));
    }

    #[test]
    fn detect_tilde_fence() {
        assert!(CodeFence::is_marker("~~~"));
    }

    #[test]
    fn detect_indented_fence() {
        assert!(CodeFence::is_marker("   ```"));
    }

    #[test]
    fn no_fence() {
        assert!(!CodeFence::is_marker("hello"));
        assert!(!CodeFence::is_marker("`inline code`"));
    }
}
