pub mod builder;
pub mod classify;
pub mod fence;

use builder::OutlineBuilder;
use classify::CourseLineClassifier;

use crate::models::outline::Outline;

/// Parse a full course document, given as its ordered lines, into the
/// outline tree. Single forward pass, no backtracking.
pub fn parse_course(lines: &[&str]) -> Outline {
    let mut classifier = CourseLineClassifier::new();
    let mut builder = OutlineBuilder::new();

    for (offset, line) in lines.iter().enumerate() {
        let class = classifier.classify(line);
        builder.push(offset, class, line);
    }

    builder.finish()
}
