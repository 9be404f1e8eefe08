use anyhow::{anyhow, Context, Result};

use crate::llm_client::{LlmSettings, Provider};

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub project_name: String,
    pub allowed_origins: Vec<String>,
    pub llm: LlmSettings,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let provider: Provider = optional_env("LLM_PROVIDER")
            .unwrap_or_else(|| "ollama".to_string())
            .parse()
            .map_err(|e: String| anyhow!(e))?;
        let llm = LlmSettings::resolve(
            provider,
            optional_env("LLM_API_KEY"),
            optional_env("LLM_BASE_URL"),
            optional_env("LLM_MODEL"),
            parse_env("LLM_TIMEOUT_SECS", 120)?,
            parse_env("LLM_MAX_RETRIES", 3)?,
        )
        .map_err(|e| anyhow!(e))?;

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            db_max_connections: parse_env("DB_MAX_CONNECTIONS", 10)?,
            project_name: optional_env("PROJECT_NAME")
                .unwrap_or_else(|| "Resume Matcher".to_string()),
            allowed_origins: parse_origins(
                &optional_env("ALLOWED_ORIGINS")
                    .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            llm,
            port: parse_env("PORT", 8080)?,
            rust_log: optional_env("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_env(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value '{raw}'")),
        None => Ok(default),
    }
}

/// Comma-separated origin list; blanks dropped.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
impl Config {
    pub fn for_tests() -> Self {
        Config {
            database_url: "postgres://localhost/jobscan_test".to_string(),
            db_max_connections: 1,
            project_name: "Resume Matcher".to_string(),
            allowed_origins: parse_origins(DEFAULT_ALLOWED_ORIGINS),
            llm: LlmSettings::resolve(Provider::Ollama, None, None, None, 5, 1)
                .expect("ollama settings need no key"),
            port: 0,
            rust_log: "debug".to_string(),
        }
    }
}
