// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use std::process::Command;

use chrono::DateTime;

use crate::domain::CommitRecord;
use crate::error::{Error, Result};

const LOG_FORMAT: &str = "%h|%an|%ad|%s";

const README_CANDIDATES: &[&str] = &[
    "README.md",
    "README.txt",
    "README",
    "readme.md",
    "readme.txt",
    "readme",
];

#[derive(Debug)]
pub struct GitService {
    work_dir: PathBuf,
}

impl GitService {
    /// Check that the git binary is reachable at all.
    pub fn ensure_installed() -> Result<()> {
        match Command::new("git").arg("--version").output() {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(Error::GitNotInstalled),
            Err(e) => Err(e.into()),
        }
    }

    pub fn discover() -> Result<Self> {
        Self::discover_at(".")
    }

    pub fn discover_at(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let repo = gix::discover(path).map_err(|_| Error::NotAGitRepo)?;

        let work_dir = repo
            .work_dir()
            .ok_or_else(|| Error::Git("Bare repository not supported".into()))?
            .to_path_buf();

        Ok(Self { work_dir })
    }

    /// Read commits most-recent-first, either for a range expression or
    /// the last `limit` commits.
    pub fn commits(&self, range: Option<&str>, limit: Option<usize>) -> Result<Vec<CommitRecord>> {
        let mut args: Vec<String> = vec![
            "log".into(),
            format!("--pretty=format:{LOG_FORMAT}"),
            "--date=iso".into(),
        ];

        if let Some(range) = range.filter(|r| !r.is_empty()) {
            args.push(range.to_string());
        } else if let Some(limit) = limit.filter(|n| *n > 0) {
            args.push(format!("-n{limit}"));
        }

        let output = Command::new("git")
            .args(&args)
            .current_dir(&self.work_dir)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::Git(stderr.trim().to_string()));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().filter_map(parse_log_line).collect())
    }

    /// Short project description for prompt context, taken from the first
    /// meaningful lines of a README-like file. `None` when nothing usable
    /// exists; generation proceeds without context in that case.
    pub fn project_description(&self) -> Option<String> {
        for candidate in README_CANDIDATES {
            let path = self.work_dir.join(candidate);
            let Ok(content) = std::fs::read_to_string(&path) else {
                continue;
            };

            let mut description = String::new();
            for (i, line) in content.lines().enumerate() {
                let mut line = line.trim();
                if line.is_empty() {
                    continue;
                }
                // Skip markdown headers and quote markers
                line = line.trim_start_matches('#').trim();
                line = line.trim_start_matches('>').trim();
                if line.is_empty() {
                    continue;
                }

                description.push_str(line);
                description.push(' ');

                // First 3-4 meaningful lines are enough context
                if i >= 3 && description.len() > 200 {
                    break;
                }
            }

            let description = description.trim().to_string();
            if !description.is_empty() {
                return Some(description);
            }
        }

        None
    }
}

/// Parse one `%h|%an|%ad|%s` log line. Malformed lines are skipped rather
/// than failing the whole enumeration.
pub fn parse_log_line(line: &str) -> Option<CommitRecord> {
    let mut parts = line.splitn(4, '|');
    let hash = parts.next()?.trim();
    let author = parts.next()?.trim();
    let date = parts.next()?.trim();
    let message = parts.next()?.trim();

    let timestamp = DateTime::parse_from_str(date, "%Y-%m-%d %H:%M:%S %z").ok()?;

    Some(CommitRecord {
        hash: hash.to_string(),
        author: author.to_string(),
        timestamp,
        message: message.to_string(),
    })
}
