//! Shared fixtures for the engine's unit tests.

/// A small but representative course document: two retained phases, a
/// fenced code block hiding a fake phase header, a quiz with options,
/// and a trailing phase with no material at all.
pub const SAMPLE_COURSE: &str = r#"# OpenEdge 4GL Interactive Course

# PHASE 1: Language Basics

## 💡 Lesson 1: Variables and Display

Variables hold typed values.
Use DISPLAY to print them.

```abl
# PHASE 99: Inside a fence
DEFINE VARIABLE cname AS CHARACTER NO-UNDO.
```

## 💡 Lesson 2: Assignments

ASSIGN sets one or more fields in a single statement.

## 🎯 Quiz 1: Language Basics Check

**Question 1:** What does DISPLAY do?
A) Prints a value to the screen
B) Deletes a record
C) Compiles the program
D) Nothing at all

**Question 2:** Which statement assigns values?
A) ASSIGN
B) DISPLAY

---

# PHASE 2: Control Flow

## 💡 Lesson 3: Conditionals

IF and CASE branch on values.

# PHASE 3: Placeholder
"#;

/// Split a document into its ordered line slice, the form the parser and
/// summarizer operate on.
pub fn doc_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}
