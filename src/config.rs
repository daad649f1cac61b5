use anyhow::{Context, Result};

use crate::i18n::Language;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the readings backend, trailing slash tolerated.
    pub api_base_url: String,
    pub email: String,
    pub password: String,
    /// UI language tag (`en` or `ua`)
    pub language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_base_url: optional("BP_API_BASE_URL", "http://127.0.0.1:5001"),
            email: required("BP_EMAIL")?,
            password: required("BP_PASSWORD")?,
            language: {
                let tag = optional("BP_LANGUAGE", "en");
                Language::from_tag(&tag)
                    .with_context(|| format!("unsupported language tag: {tag}"))?
            },
        })
    }
}

fn required(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("missing required env var: {key}"))
}

fn optional(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
