// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

mod helpers;

use commitfeed::services::ai::parser::parse_response;
use helpers::platforms;

// ─── Label matching ──────────────────────────────────────────────────────────

#[test]
fn labeled_lines_are_split_per_platform() {
    let raw = "LinkedIn: Shipped caching layer\nTwitter: 🚀 New caching layer!";
    let posts = parse_response(raw, &platforms(&["linkedin", "twitter"]));

    assert_eq!(posts.get("linkedin"), Some("Shipped caching layer"));
    assert_eq!(posts.get("twitter"), Some("🚀 New caching layer!"));
}

#[test]
fn label_match_is_case_insensitive() {
    let raw = "LINKEDIN: shouting edition\ntwitter: lowercase edition";
    let posts = parse_response(raw, &platforms(&["linkedin", "twitter"]));

    assert_eq!(posts.get("linkedin"), Some("shouting edition"));
    assert_eq!(posts.get("twitter"), Some("lowercase edition"));
}

#[test]
fn remainder_is_trimmed() {
    let raw = "LinkedIn:    padded post   ";
    let posts = parse_response(raw, &platforms(&["linkedin"]));

    assert_eq!(posts.get("linkedin"), Some("padded post"));
}

#[test]
fn last_matching_line_wins() {
    let raw = "LinkedIn: first draft\nLinkedIn: final draft";
    let posts = parse_response(raw, &platforms(&["linkedin"]));

    assert_eq!(posts.get("linkedin"), Some("final draft"));
}

#[test]
fn dotted_label_matches_devto() {
    let raw = "Dev.to: A short blog teaser";
    let posts = parse_response(raw, &platforms(&["devto"]));

    assert_eq!(posts.get("devto"), Some("A short blog teaser"));
}

#[test]
fn unknown_platform_matches_its_own_name() {
    let raw = "Bluesky: hello fediverse-adjacent world";
    let posts = parse_response(raw, &platforms(&["bluesky"]));

    assert_eq!(posts.get("bluesky"), Some("hello fediverse-adjacent world"));
}

// ─── Fallback policy ─────────────────────────────────────────────────────────

#[test]
fn unmatched_platform_falls_back_to_entire_raw_text() {
    let raw = "The model ignored the format instruction entirely.";
    let posts = parse_response(raw, &platforms(&["linkedin", "twitter"]));

    assert_eq!(posts.get("linkedin"), Some(raw));
    assert_eq!(posts.get("twitter"), Some(raw));
}

#[test]
fn partial_match_falls_back_only_for_the_missing_platform() {
    let raw = "Twitter: short and sweet";
    let posts = parse_response(raw, &platforms(&["linkedin", "twitter"]));

    assert_eq!(posts.get("twitter"), Some("short and sweet"));
    assert_eq!(posts.get("linkedin"), Some(raw));
}

#[test]
fn empty_raw_text_maps_every_platform_to_empty() {
    let posts = parse_response("", &platforms(&["linkedin", "twitter"]));

    assert_eq!(posts.get("linkedin"), Some(""));
    assert_eq!(posts.get("twitter"), Some(""));
}

// ─── Totality ────────────────────────────────────────────────────────────────

#[test]
fn every_requested_platform_gets_an_entry() {
    let raw = "LinkedIn: something";
    let requested = platforms(&["linkedin", "twitter", "mastodon", "bluesky"]);
    let posts = parse_response(raw, &requested);

    assert_eq!(posts.len(), requested.len());
    for platform in &requested {
        assert!(posts.contains(platform), "missing entry for {platform}");
    }
}

#[test]
fn no_platforms_requested_yields_no_entries() {
    let posts = parse_response("LinkedIn: something", &[]);
    assert!(posts.is_empty());
}

proptest::proptest! {
    /// Totality over arbitrary model output: entries exist for every
    /// requested platform no matter what the model produced.
    #[test]
    fn parser_is_total_over_any_input(raw in proptest::prelude::any::<String>()) {
        let requested = vec!["linkedin".to_string(), "bluesky".to_string()];
        let posts = parse_response(&raw, &requested);

        proptest::prop_assert!(posts.contains("linkedin"));
        proptest::prop_assert!(posts.contains("bluesky"));
    }

    /// The fallback is the raw text, byte for byte, whenever no line
    /// carries the platform's label.
    #[test]
    fn fallback_preserves_raw_text_exactly(raw in "[a-z ]{0,80}") {
        // The charset has no ':', so no line can carry a label prefix
        let requested = vec!["platform9".to_string()];
        let posts = parse_response(&raw, &requested);

        proptest::prop_assert_eq!(posts.get("platform9"), Some(raw.as_str()));
    }
}
