// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

use std::io::IsTerminal;
use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::domain::platform::display_label;
use crate::error::{Error, Result};
use crate::services::ai::{self, PostGenerator};
use crate::services::git::GitService;

pub struct App {
    cli: Cli,
    config: Config,
}

impl App {
    pub fn new(cli: Cli) -> Result<Self> {
        // First run: offer the interactive setup before loading anything.
        // Non-interactive invocations (scripts, hooks, CI) just get defaults.
        let wants_generation = matches!(cli.command, Some(Commands::Generate { .. }) | None);
        let config_missing = Config::config_path().is_none_or(|p| !p.exists());
        let is_interactive = std::io::stdout().is_terminal() && std::io::stdin().is_terminal();

        if wants_generation && config_missing && is_interactive {
            eprintln!(
                "{} No config found, launching first-time setup...\n",
                style("info:").cyan()
            );
            Config::run_setup_wizard()?;
        }

        let config = Config::load(&cli)?;
        debug!(
            provider = %config.provider,
            platforms = ?config.default_platforms,
            "config loaded"
        );

        Ok(Self { cli, config })
    }

    pub async fn run(&self) -> Result<()> {
        match self.cli.command {
            Some(Commands::Init) => {
                let path = Config::create_default()?;
                println!("Created config: {}", path.display());
                Ok(())
            }
            Some(Commands::Config) => {
                println!("Provider: {}", self.config.provider);
                println!(
                    "API key: {}",
                    if self.config.api_key.is_some() {
                        "configured"
                    } else {
                        "not set"
                    }
                );
                println!(
                    "Default platforms: {}",
                    self.config.default_platforms.join(", ")
                );
                Ok(())
            }
            Some(Commands::Generate {
                ref range,
                limit,
                ref platforms,
                post,
            }) => {
                self.generate(range, limit, platforms.clone(), post).await
            }
            None => self.generate("HEAD~2..HEAD", None, Vec::new(), false).await,
        }
    }

    async fn generate(
        &self,
        range: &str,
        limit: Option<usize>,
        platforms: Vec<String>,
        post: bool,
    ) -> Result<()> {
        GitService::ensure_installed()?;
        let git = GitService::discover()?;

        let platforms = if platforms.is_empty() {
            self.config.default_platforms.clone()
        } else {
            platforms
        };

        eprintln!(
            "{} Using AI provider: {}",
            style("info:").cyan(),
            self.config.provider
        );
        eprintln!(
            "{} Target platforms: {}\n",
            style("info:").cyan(),
            platforms.join(", ")
        );

        let described_range = match limit {
            Some(n) => format!("the last {n} commits"),
            None => range.to_string(),
        };
        let commits = if limit.is_some() {
            git.commits(None, limit)?
        } else {
            git.commits(Some(range), None)?
        };
        if commits.is_empty() {
            return Err(Error::NoCommitsFound {
                range: described_range,
            });
        }
        debug!(count = commits.len(), "commits read");

        let project_context = git.project_description().unwrap_or_default();

        let api_key = self.config.api_key.clone().unwrap_or_default();
        let provider = ai::create_provider(self.config.provider, &api_key);

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}").unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message(format!("Generating posts with {}...", provider.name()));
        spinner.enable_steady_tick(Duration::from_millis(100));

        let result = provider
            .generate_posts(&commits, &platforms, &project_context)
            .await;
        spinner.finish_and_clear();
        let posts = result?;

        eprintln!("{} Generated posts:\n", style("✓").green().bold());
        for platform in &platforms {
            let Some(text) = posts.get(platform) else {
                continue;
            };
            println!("{}", style(format!("{}:", display_label(platform))).bold());
            println!("{text}\n");
        }

        if post {
            eprintln!("{} Posting to selected platforms...", style("info:").cyan());
            // Publishing integrations are not wired up yet
            for platform in &platforms {
                eprintln!(
                    "{} Skipped {}: publishing is not implemented yet",
                    style("warning:").yellow().bold(),
                    display_label(platform)
                );
            }
        } else {
            eprintln!(
                "{} Preview only (not posted). Use --post to share automatically.",
                style("info:").cyan()
            );
        }

        Ok(())
    }
}
