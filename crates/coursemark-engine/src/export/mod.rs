//! Downstream consumers of the outline's public shape: the JSON snapshot
//! writer and the SQL seed-script emitter. No validation happens here;
//! retention filtering already happened in the builder.

pub mod json;
pub mod seed;

pub use json::to_json;
pub use seed::{AnswerKey, AnswerKeyError, CourseMeta, render_seed};
