pub mod export;
pub mod io;
pub mod models;
pub mod parsing;
pub mod reorganize;
pub mod summary;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use models::outline::*;
pub use parsing::parse_course;
