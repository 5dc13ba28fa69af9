use super::*;

#[test]
fn registry_contains_builtin_languages() {
    let registry = LanguageRegistry::default();

    assert!(registry.get_extractor(".py").is_some());
    assert!(registry.get_extractor(".js").is_some());
    assert!(registry.get_extractor(".ts").is_some());
    assert!(registry.get_extractor(".tsx").is_some());
}

#[test]
fn registry_returns_none_for_unknown_extension() {
    let registry = LanguageRegistry::default();
    assert!(registry.get_extractor(".xyz").is_none());
    assert!(registry.get_extractor(".java").is_none());
}
