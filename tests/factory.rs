// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

use commitfeed::config::Provider;
use commitfeed::error::Error;
use commitfeed::services::ai::{create_provider, provider_for_name, PostGenerator};

// ─── Name resolution ─────────────────────────────────────────────────────────

#[test]
fn known_names_resolve() {
    assert_eq!(Provider::from_name("huggingface").unwrap(), Provider::HuggingFace);
    assert_eq!(Provider::from_name("openai").unwrap(), Provider::OpenAi);
    assert_eq!(Provider::from_name("gemini").unwrap(), Provider::Gemini);
    assert_eq!(Provider::from_name("deepseek").unwrap(), Provider::DeepSeek);
}

#[test]
fn empty_and_default_select_huggingface() {
    assert_eq!(Provider::from_name("").unwrap(), Provider::HuggingFace);
    assert_eq!(Provider::from_name("default").unwrap(), Provider::HuggingFace);
}

#[test]
fn unknown_name_is_reported_verbatim() {
    let err = Provider::from_name("bogus").unwrap_err();
    match err {
        Error::UnknownProvider { name } => assert_eq!(name, "bogus"),
        other => panic!("expected UnknownProvider, got: {other:?}"),
    }
}

#[test]
fn name_match_is_case_sensitive() {
    assert!(Provider::from_name("DeepSeek").is_err());
    assert!(Provider::from_name("OpenAI").is_err());
    assert!(Provider::from_name("Default").is_err());
}

// ─── Dispatch ────────────────────────────────────────────────────────────────

#[test]
fn factory_dispatches_to_the_named_variant() {
    assert_eq!(provider_for_name("deepseek", "k").unwrap().name(), "deepseek");
    assert_eq!(provider_for_name("openai", "k").unwrap().name(), "openai");
    assert_eq!(provider_for_name("gemini", "k").unwrap().name(), "gemini");
    assert_eq!(
        provider_for_name("huggingface", "k").unwrap().name(),
        "huggingface"
    );
}

#[test]
fn factory_falls_back_to_the_default_variant() {
    assert_eq!(provider_for_name("", "k").unwrap().name(), "huggingface");
    assert_eq!(provider_for_name("default", "k").unwrap().name(), "huggingface");
}

#[test]
fn factory_rejects_unknown_names() {
    let err = provider_for_name("bogus", "k").unwrap_err();
    assert!(
        matches!(err, Error::UnknownProvider { ref name } if name == "bogus"),
        "expected UnknownProvider naming 'bogus', got: {err:?}"
    );
}

#[test]
fn enum_dispatch_matches_display_names() {
    for provider in [
        Provider::HuggingFace,
        Provider::OpenAi,
        Provider::Gemini,
        Provider::DeepSeek,
    ] {
        let built = create_provider(provider, "k");
        assert_eq!(built.name(), provider.to_string());
    }
}
