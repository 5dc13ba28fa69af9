mod registry;

pub use registry::{Language, LanguageRegistry};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
