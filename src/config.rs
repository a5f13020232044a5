//! Runtime configuration loaded from the environment

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{HrError, Result};

pub const DEFAULT_CHAT_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_CHAT_MODEL: &str = "meta-llama/llama-4-scout-17b-16e-instruct";
pub const DEFAULT_CHAT_TEMPERATURE: f32 = 0.3;
pub const DEFAULT_CHAT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CHAT_LANGUAGE: &str = "Russian";

/// Settings for the external chat-completion provider
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Bearer token (env: GROQ_API_KEY). Chat is disabled when absent.
    pub api_key: Option<String>,
    pub api_url: String,
    pub model: String,
    pub temperature: f32,
    pub timeout: Duration,
    /// Language the assistant is told to answer in
    pub language: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_CHAT_API_URL.to_string(),
            model: DEFAULT_CHAT_MODEL.to_string(),
            temperature: DEFAULT_CHAT_TEMPERATURE,
            timeout: Duration::from_secs(DEFAULT_CHAT_TIMEOUT_SECS),
            language: DEFAULT_CHAT_LANGUAGE.to_string(),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file
    pub database_path: PathBuf,
    pub http_host: String,
    pub http_port: u16,
    /// Directory served under /static
    pub static_dir: PathBuf,
    pub chat: ChatConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from("hrdesk.db"),
            http_host: "127.0.0.1".to_string(),
            http_port: 8000,
            static_dir: PathBuf::from("static"),
            chat: ChatConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` first to pick up a `.env` file.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Database location alone, for commands that never start the server or the chat client.
    pub fn database_path_from_env() -> PathBuf {
        Self::database_path_from_lookup(|name| std::env::var(name).ok())
    }

    pub fn database_path_from_lookup<F>(lookup: F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup("DATABASE_PATH")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| Config::default().database_path)
    }

    /// Build a config from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let chat = ChatConfig {
            api_key: var("GROQ_API_KEY"),
            api_url: var("CHAT_API_URL").unwrap_or(defaults.chat.api_url),
            model: var("CHAT_MODEL").unwrap_or(defaults.chat.model),
            temperature: parse_var(&var, "CHAT_TEMPERATURE")?
                .unwrap_or(defaults.chat.temperature),
            timeout: parse_var::<u64, _>(&var, "CHAT_TIMEOUT_SECS")?
                .map(Duration::from_secs)
                .unwrap_or(defaults.chat.timeout),
            language: var("CHAT_LANGUAGE").unwrap_or(defaults.chat.language),
        };

        Ok(Self {
            database_path: Self::database_path_from_lookup(&lookup),
            http_host: var("HTTP_HOST").unwrap_or(defaults.http_host),
            http_port: parse_var(&var, "HTTP_PORT")?.unwrap_or(defaults.http_port),
            static_dir: var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            chat,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }
}

fn parse_var<T, F>(var: &F, name: &str) -> Result<Option<T>>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match var(name) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| HrError::Config(format!("{name} has an invalid value: '{raw}'"))),
        None => Ok(None),
    }
}
