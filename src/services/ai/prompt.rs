// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

use crate::domain::platform::{self, display_label};
use crate::domain::CommitRecord;

const PREAMBLE: &str = "You are a skilled technical copywriter who creates engaging, \
platform-appropriate posts for developers and tech audiences.

Your task is to generate short, high-quality social media posts based on the following \
Git commit messages.
Each commit represents a meaningful code change, bug fix, or feature update.
";

/// Build the instruction text for one generation request.
///
/// Pure: identical inputs yield byte-identical output. The remote model is
/// non-deterministic; the prompt must not be, or golden tests become useless.
pub fn build_prompt(
    commits: &[CommitRecord],
    platforms: &[String],
    project_context: &str,
) -> String {
    let platforms = platform::effective(platforms);

    let mut prompt = String::new();
    prompt.push_str(PREAMBLE);

    if !project_context.is_empty() {
        prompt.push_str("\n--- Project Context ---\n");
        prompt.push_str(project_context);
        prompt.push('\n');
    }

    prompt.push_str("\n--- Commit Messages ---\n");
    for commit in commits {
        prompt.push_str("- ");
        prompt.push_str(&commit.message);
        prompt.push('\n');
    }

    prompt.push_str("\n--- Platform Guidelines ---\n");
    for platform in &platforms {
        prompt.push_str(&guidance_for(platform));
        prompt.push('\n');
    }

    prompt.push_str("\nFormat your response EXACTLY like this (one line per platform):\n");
    for platform in &platforms {
        let label = display_label(platform);
        prompt.push_str(&format!("{label}: <{label} post>\n"));
    }

    prompt.push_str("\nBe creative but accurate. Focus on clarity, developer value, and readability.\n");

    prompt
}

/// Style guidance per platform. Unknown ids keep their name verbatim so the
/// model still produces a line the parser can pick up.
fn guidance_for(platform: &str) -> String {
    match platform.to_ascii_lowercase().as_str() {
        "linkedin" => "• LinkedIn: Write a friendly and professional summary (2-4 sentences). \
            Explain what changed and why it matters to developers or users."
            .to_string(),
        "twitter" | "x" => "• Twitter/X: Write a short, catchy summary under 280 characters. \
            Include emojis or hashtags if natural."
            .to_string(),
        "mastodon" => "• Mastodon: Write an open-source community-style update with clear tone \
            and hashtags if relevant."
            .to_string(),
        "devto" | "dev.to" => "• Dev.to: Write a short blog teaser — 2-3 sentences that \
            introduce the update and invite readers to learn more."
            .to_string(),
        "reddit" => "• Reddit: Write a conversational summary that would fit in a \
            /r/programming post, no emojis."
            .to_string(),
        _ => format!(
            "• {platform}: Write a concise summary highlighting the main purpose and value of the change."
        ),
    }
}
