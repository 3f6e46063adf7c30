// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "commitfeed")]
#[command(version)]
#[command(about = "Generate AI-powered social media posts from your Git commits", long_about = None)]
pub struct Cli {
    /// AI provider (huggingface, openai, gemini, deepseek)
    #[arg(short = 'P', long, env = "COMMITFEED_PROVIDER", global = true)]
    pub provider: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Generate social media posts from recent commits
    Generate {
        /// Git commit range to summarize (e.g. HEAD~5..HEAD)
        #[arg(short, long, default_value = "HEAD~2..HEAD")]
        range: String,

        /// Take the last N commits instead of a range
        #[arg(short = 'n', long, conflicts_with = "range")]
        limit: Option<usize>,

        /// Comma-separated target platforms (e.g. linkedin,twitter)
        #[arg(short = 't', long, value_delimiter = ',')]
        platforms: Vec<String>,

        /// Publish generated posts to the selected platforms
        #[arg(short, long)]
        post: bool,
    },
    /// Initialize config file
    Init,
    /// Show current configuration
    Config,
}
