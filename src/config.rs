//! Process configuration read once at startup.

use anyhow::{Context, Result};

const API_KEY_VAR: &str = "TMDB_API_KEY";
const LANGUAGE_VAR: &str = "TMDB_LANG";
const DEFAULT_LANGUAGE: &str = "en-US";

#[derive(Clone, Debug)]
pub struct Config {
    pub api_key: String,
    pub language: String,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// The API key is required: there is no built-in fallback key, so a
    /// missing or empty `TMDB_API_KEY` fails startup with an explicit error.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(API_KEY_VAR)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .with_context(|| {
                format!("{API_KEY_VAR} is not set; export a TMDB API key to use bazer-rs")
            })?;

        let language = std::env::var(LANGUAGE_VAR)
            .ok()
            .filter(|lang| !lang.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        Ok(Self { api_key, language })
    }
}
