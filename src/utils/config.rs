//! Environment-driven configuration.
//!
//! Required credentials missing at startup are a fatal
//! [`AppError::Configuration`]; the process refuses to start rather
//! than run degraded.

use crate::types::{AppError, Result};
use crate::workflow::DEFAULT_BLOCKED_DOMAINS;
use serde::Deserialize;
use std::env;

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Summarizer capability settings.
    pub summarizer: SummarizerConfig,
    /// Search capability settings.
    pub search: SearchConfig,
    /// Workflow loop settings.
    pub workflow: WorkflowConfig,
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

/// Summarizer capability settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SummarizerConfig {
    /// API key for the OpenAI-compatible endpoint. Required.
    pub api_key: String,
    /// API base URL, up to but not including `/chat/completions`.
    pub api_base: String,
    /// Model identifier.
    pub model: String,
}

/// Search capability settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    /// Tavily API key. Required.
    pub api_key: String,
    /// Result cap per search call.
    pub max_results: usize,
}

/// Workflow loop settings.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkflowConfig {
    /// Maximum research passes before a run fails.
    pub max_passes: u8,
    /// Host domains the quality gate rejects.
    pub blocked_domains: Vec<String>,
}

impl Config {
    /// Load configuration from the environment (and `.env` if present).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            server: ServerConfig {
                host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: parse_var("PORT", 8000)?,
            },
            summarizer: SummarizerConfig {
                api_key: required_var("SUMMARIZER_API_KEY")?,
                api_base: env::var("SUMMARIZER_API_BASE")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                model: env::var("SUMMARIZER_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            },
            search: SearchConfig {
                api_key: required_var("TAVILY_API_KEY")?,
                max_results: parse_var("SEARCH_MAX_RESULTS", 5)?,
            },
            workflow: WorkflowConfig {
                max_passes: parse_var("MAX_RESEARCH_PASSES", 3)?,
                blocked_domains: env::var("BLOCKED_DOMAINS")
                    .map(|raw| parse_blocked_domains(&raw))
                    .unwrap_or_else(|_| {
                        DEFAULT_BLOCKED_DOMAINS.iter().map(|d| d.to_string()).collect()
                    }),
            },
        })
    }
}

fn required_var(name: &str) -> Result<String> {
    env::var(name)
        .map_err(|_| AppError::Configuration(format!("missing required environment variable {}", name)))
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| AppError::Configuration(format!("invalid value for {}: {}", name, raw))),
        Err(_) => Ok(default),
    }
}

fn parse_blocked_domains(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .collect()
}
