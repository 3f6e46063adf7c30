// SPDX-FileCopyrightText: 2026 Aaron Will Djaba <aaronwilldjaba@outlook.com>
//
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::PathBuf;

use console::style;
use dialoguer::{Input, Select};
use directories::ProjectDirs;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::cli::Cli;
use crate::domain::platform;
use crate::error::{Error, Result};

/// The enumerated provider-name set. `HuggingFace` doubles as the explicit
/// default member so factory dispatch stays an exhaustive match.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    #[default]
    HuggingFace,
    OpenAi,
    Gemini,
    DeepSeek,
}

impl Provider {
    /// Resolve a configured name. Matching is exact and case-sensitive;
    /// the empty string and the literal "default" select HuggingFace.
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "huggingface" | "default" | "" => Ok(Self::HuggingFace),
            "openai" => Ok(Self::OpenAi),
            "gemini" => Ok(Self::Gemini),
            "deepseek" => Ok(Self::DeepSeek),
            _ => Err(Error::UnknownProvider { name: name.into() }),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HuggingFace => write!(f, "huggingface"),
            Self::OpenAi => write!(f, "openai"),
            Self::Gemini => write!(f, "gemini"),
            Self::DeepSeek => write!(f, "deepseek"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub provider: Provider,

    #[serde(default)]
    pub api_key: Option<String>,

    /// Platforms used when `--platforms` is not given
    #[serde(default = "default_platforms")]
    pub default_platforms: Vec<String>,
}

fn default_platforms() -> Vec<String> {
    platform::DEFAULT_PLATFORMS
        .iter()
        .map(|p| p.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provider: Provider::default(),
            api_key: None,
            default_platforms: default_platforms(),
        }
    }
}

impl Config {
    /// Load with priority: CLI > ENV > user config > project config > defaults
    pub fn load(cli: &Cli) -> Result<Self> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        // Project-level config (.commitfeed.toml in repo root)
        if let Ok(cwd) = std::env::current_dir() {
            let project_config = cwd.join(".commitfeed.toml");
            if project_config.exists() {
                figment = figment.merge(Toml::file(&project_config));
            }
        }

        // User-level config
        if let Some(path) = Self::config_path() {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
            }
        }

        // Environment variables (COMMITFEED_PROVIDER, COMMITFEED_API_KEY, ...)
        figment = figment.merge(Env::prefixed("COMMITFEED_"));

        let mut config: Config = figment
            .extract()
            .map_err(|e| Error::Config(e.to_string()))?;

        config.apply_cli(cli)?;

        // Provider-specific API key fallback, resolved exactly once here so
        // the provider constructors never consult the environment themselves.
        if config.api_key.is_none() {
            config.api_key = match config.provider {
                Provider::HuggingFace => std::env::var("HF_TOKEN").ok(),
                Provider::OpenAi => std::env::var("OPENAI_API_KEY").ok(),
                Provider::Gemini => std::env::var("GEMINI_API_KEY").ok(),
                Provider::DeepSeek => std::env::var("DEEPSEEK_API_KEY").ok(),
            };
        }

        config.normalize();
        Ok(config)
    }

    pub fn config_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "commitfeed").map(|dirs| dirs.config_dir().to_path_buf())
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    fn apply_cli(&mut self, cli: &Cli) -> Result<()> {
        if let Some(ref name) = cli.provider {
            self.provider = Provider::from_name(name)?;
        }
        Ok(())
    }

    /// An empty platform list is never useful downstream; fall back to the
    /// canonical pair instead of erroring.
    fn normalize(&mut self) {
        if self.default_platforms.is_empty() {
            self.default_platforms = default_platforms();
        }
    }

    /// Create default config file with secure permissions
    pub fn create_default() -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content = r#"# CommitFeed Configuration

# AI provider: huggingface, openai, gemini, deepseek
provider = "huggingface"

# API key for the selected provider. Can also come from HF_TOKEN,
# OPENAI_API_KEY, GEMINI_API_KEY or DEEPSEEK_API_KEY.
# api_key = ""

# Platforms used when --platforms is not given
default_platforms = ["linkedin", "twitter"]
"#;

        fs::write(&path, content)?;
        Self::restrict_permissions(&path)?;

        Ok(path)
    }

    /// Interactive first-run setup. Asks for a provider and an API key,
    /// then persists the result to the user config file.
    pub fn run_setup_wizard() -> Result<Self> {
        println!(
            "{}",
            style("Welcome to CommitFeed!").bold().green()
        );
        println!("Let's set up your AI provider to generate social posts from your git commits.\n");

        let choices = [
            "huggingface (free default)",
            "gemini",
            "openai",
            "deepseek",
        ];
        let selection = Select::new()
            .with_prompt("Choose an AI provider")
            .items(&choices)
            .default(0)
            .interact()?;

        let provider = match selection {
            1 => Provider::Gemini,
            2 => Provider::OpenAi,
            3 => Provider::DeepSeek,
            _ => Provider::HuggingFace,
        };

        let api_key: String = Input::new()
            .with_prompt("Enter your API key (leave empty to skip)")
            .allow_empty(true)
            .interact_text()?;

        if provider != Provider::HuggingFace && api_key.is_empty() {
            println!(
                "\n{} You chose {provider} but didn't provide an API key.",
                style("warning:").yellow().bold()
            );
            let url = match provider {
                Provider::Gemini => "https://aistudio.google.com/app/apikey",
                Provider::OpenAi => "https://platform.openai.com/account/api-keys",
                Provider::DeepSeek => "https://platform.deepseek.com/",
                Provider::HuggingFace => unreachable!(),
            };
            println!("Get your key at: {url}");
            println!("You can add it later with `commitfeed init` or the config file.");
        }

        let config = Config {
            provider,
            api_key: (!api_key.is_empty()).then_some(api_key),
            default_platforms: default_platforms(),
        };
        let path = config.save()?;

        println!("\n{} Configuration saved to {}", style("✓").green(), path.display());
        println!("Run `commitfeed generate` to create your first social post.\n");

        Ok(config)
    }

    fn save(&self) -> Result<PathBuf> {
        let Some(dir) = Self::config_dir() else {
            return Err(Error::Config("Cannot determine config directory".into()));
        };

        fs::create_dir_all(&dir)?;

        let path = dir.join("config.toml");
        let content =
            toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))?;
        fs::write(&path, content)?;
        Self::restrict_permissions(&path)?;

        Ok(path)
    }

    fn restrict_permissions(path: &std::path::Path) -> Result<()> {
        // API keys live in this file; keep it owner-only (0600)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(path)?.permissions();
            perms.set_mode(0o600);
            fs::set_permissions(path, perms)?;
        }
        Ok(())
    }
}
