mod staged;

pub use staged::{GitStaged, StagedFiles};

#[cfg(test)]
#[path = "staged_tests.rs"]
mod tests;
