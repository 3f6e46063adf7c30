// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

use chrono::DateTime;

use commitfeed::domain::CommitRecord;

/// Create a CommitRecord with a fixed timestamp for deterministic tests
#[allow(dead_code)]
pub fn make_commit(hash: &str, message: &str) -> CommitRecord {
    CommitRecord {
        hash: hash.to_string(),
        author: "Jane Doe".to_string(),
        timestamp: DateTime::parse_from_str("2026-01-15 10:30:00 +0000", "%Y-%m-%d %H:%M:%S %z")
            .unwrap(),
        message: message.to_string(),
    }
}

#[allow(dead_code)]
pub fn sample_commits() -> Vec<CommitRecord> {
    vec![
        make_commit("a1b2c3d", "add caching layer to API"),
        make_commit("e4f5a6b", "fix flaky websocket reconnect"),
    ]
}

#[allow(dead_code)]
pub fn platforms(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|p| p.to_string()).collect()
}
