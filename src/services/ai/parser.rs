// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

use crate::domain::platform::display_label;
use crate::domain::GeneratedPosts;

/// Extract per-platform posts from free-form model output.
///
/// Total over any input: every requested platform gets an entry. A platform
/// whose `<Label>:` line is missing falls back to the entire raw text, a
/// documented degradation rather than an error. Model output is untrusted
/// text; this is best-effort by design and must never fail.
pub fn parse_response(raw: &str, platforms: &[String]) -> GeneratedPosts {
    let mut posts = GeneratedPosts::new();

    for platform in platforms {
        let prefix = format!("{}:", display_label(platform));

        let mut matched = None;
        for line in raw.lines() {
            let Some(head) = line.get(..prefix.len()) else {
                continue;
            };
            if head.eq_ignore_ascii_case(&prefix) {
                // Last matching line wins
                matched = Some(line[prefix.len()..].trim().to_string());
            }
        }

        posts.insert(platform.as_str(), matched.unwrap_or_else(|| raw.to_string()));
    }

    posts
}
