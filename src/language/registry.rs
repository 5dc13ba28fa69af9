use std::collections::HashMap;
use std::path::Path;

use crate::analyzer::{Dialect, Extractor, FunctionUnit, extract_ecmascript, extract_python};

/// A supported source language. Each variant is one extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Tsx,
}

impl Language {
    /// Every language in registration order.
    pub const ALL: [Self; 4] = [Self::Python, Self::JavaScript, Self::TypeScript, Self::Tsx];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Python => "Python",
            Self::JavaScript => "JavaScript",
            Self::TypeScript => "TypeScript",
            Self::Tsx => "TSX",
        }
    }

    /// Key used for this language in the `languages` config list.
    #[must_use]
    pub const fn config_key(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::TypeScript | Self::Tsx => "typescript",
        }
    }

    /// File suffixes handled by this language, including the leading dot.
    #[must_use]
    pub const fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Python => &[".py", ".pyi"],
            Self::JavaScript => &[".js", ".jsx", ".mjs", ".cjs"],
            Self::TypeScript => &[".ts", ".mts", ".cts"],
            Self::Tsx => &[".tsx"],
        }
    }

    /// Whether `key` names a language this crate can analyze.
    #[must_use]
    pub fn is_known_key(key: &str) -> bool {
        Self::ALL
            .iter()
            .any(|lang| lang.config_key().eq_ignore_ascii_case(key))
    }
}

impl Extractor for Language {
    fn extract(&self, source: &str) -> Vec<FunctionUnit> {
        match self {
            Self::Python => extract_python(source),
            Self::JavaScript => extract_ecmascript(source, Dialect::JavaScript),
            Self::TypeScript => extract_ecmascript(source, Dialect::TypeScript),
            Self::Tsx => extract_ecmascript(source, Dialect::Tsx),
        }
    }
}

/// Ordered registry mapping file suffixes to extractors.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<&'static str, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
        }
    }

    /// Register a language. Suffixes already claimed by an earlier
    /// registration keep resolving to that earlier language.
    pub fn register(&mut self, language: Language) {
        let idx = self.languages.len();
        for &ext in language.extensions() {
            self.extension_map.entry(ext).or_insert(idx);
        }
        self.languages.push(language);
    }

    /// Look up the extractor for a suffix such as `".py"` (case-sensitive).
    #[must_use]
    pub fn get_extractor(&self, extension: &str) -> Option<Language> {
        self.extension_map
            .get(extension)
            .map(|&idx| self.languages[idx])
    }

    /// Look up the extractor for a path by its final suffix.
    #[must_use]
    pub fn for_path(&self, path: &Path) -> Option<Language> {
        let ext = path.extension()?.to_str()?;
        self.get_extractor(&format!(".{ext}"))
    }

    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    /// Build a registry restricted to the languages named by config keys.
    ///
    /// Registration order follows [`Language::ALL`], not the key order.
    /// Unknown keys are logged and ignored.
    #[must_use]
    pub fn with_config_keys<'a, I>(keys: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keys: Vec<&str> = keys.into_iter().collect();
        for key in keys.iter().filter(|key| !Language::is_known_key(key)) {
            tracing::warn!("No analyzer for configured language '{key}', ignoring");
        }

        let mut registry = Self::new();
        for language in Language::ALL {
            if keys
                .iter()
                .any(|key| language.config_key().eq_ignore_ascii_case(key))
            {
                registry.register(language);
            }
        }
        registry
    }
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for language in Language::ALL {
            registry.register(language);
        }
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
