// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

/// Platforms used when the caller (or config) requests none.
pub const DEFAULT_PLATFORMS: &[&str] = &["linkedin", "twitter"];

/// Canonical label for a platform id, as it appears in `<Label>: <post>`
/// output lines. Unknown ids are kept verbatim so a platform we have no
/// guidance for still round-trips through the prompt and the parser.
pub fn display_label(id: &str) -> String {
    match id.to_ascii_lowercase().as_str() {
        "linkedin" => "LinkedIn".to_string(),
        "twitter" => "Twitter".to_string(),
        "x" => "X".to_string(),
        "mastodon" => "Mastodon".to_string(),
        "devto" | "dev.to" => "Dev.to".to_string(),
        "reddit" => "Reddit".to_string(),
        _ => id.to_string(),
    }
}

/// Resolve the effective platform list for one generation request.
/// An empty request falls back to [`DEFAULT_PLATFORMS`]; the same resolved
/// list must feed both the prompt builder and the response parser.
pub fn effective(platforms: &[String]) -> Vec<String> {
    if platforms.is_empty() {
        DEFAULT_PLATFORMS.iter().map(|p| p.to_string()).collect()
    } else {
        platforms.to_vec()
    }
}
