// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

// miette's Diagnostic derive generates code that triggers this false positive
#![allow(unused_assignments)]

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum Error {
    #[error("Git is not installed on this system")]
    #[diagnostic(
        code(commitfeed::git::not_installed),
        help("Install Git and make sure it is on your PATH")
    )]
    GitNotInstalled,

    #[error("Not a git repository")]
    #[diagnostic(
        code(commitfeed::git::not_repo),
        help("Run this command inside a git repository")
    )]
    NotAGitRepo,

    #[error("No commits found for '{range}'")]
    #[diagnostic(
        code(commitfeed::git::empty_range),
        help("Try a wider range, e.g. --range HEAD~10..HEAD")
    )]
    NoCommitsFound { range: String },

    #[error("Unknown AI provider: {name}")]
    #[diagnostic(
        code(commitfeed::provider::unknown),
        help("Valid providers: huggingface, openai, gemini, deepseek")
    )]
    UnknownProvider { name: String },

    #[error("Provider '{provider}' request failed")]
    #[diagnostic(
        code(commitfeed::provider::transport),
        help("Check your network connection and try again")
    )]
    ProviderTransport {
        provider: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Provider '{provider}' returned HTTP {status}: {body}")]
    #[diagnostic(
        code(commitfeed::provider::api),
        help("Check your API key and account quota for this provider")
    )]
    ProviderApi {
        provider: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Provider '{provider}' returned no usable completion")]
    #[diagnostic(code(commitfeed::provider::empty_response))]
    ProviderEmptyResponse { provider: String },

    #[error("Configuration error: {0}")]
    #[diagnostic(code(commitfeed::config::error))]
    Config(String),

    #[error("Git error: {0}")]
    #[diagnostic(code(commitfeed::git::error))]
    Git(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Dialog error: {0}")]
    Dialog(String),
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Error::Dialog(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
