use std::{fs, path::Path, time::Duration};

use anyhow::Context;
use client_core::DEFAULT_SENT_RESET_DELAY;
use serde::Deserialize;
use url::Url;

pub const DEFAULT_CONFIG_FILE: &str = "studio.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub database_url: String,
    pub contact_endpoint: String,
    pub sent_reset_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            database_url: "sqlite://./data/studio.db".into(),
            contact_endpoint: "https://contact.example.com/api/contact".into(),
            sent_reset_secs: DEFAULT_SENT_RESET_DELAY.as_secs(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    database_url: Option<String>,
    contact_endpoint: Option<String>,
    sent_reset_secs: Option<u64>,
}

impl Settings {
    pub fn contact_endpoint_url(&self) -> anyhow::Result<Url> {
        Url::parse(&self.contact_endpoint)
            .with_context(|| format!("invalid contact endpoint '{}'", self.contact_endpoint))
    }

    pub fn sent_reset_delay(&self) -> Duration {
        Duration::from_secs(self.sent_reset_secs)
    }

    fn apply_file(&mut self, raw: &str) -> anyhow::Result<()> {
        let file_cfg: FileSettings = toml::from_str(raw).context("malformed settings file")?;
        if let Some(v) = file_cfg.database_url {
            self.database_url = v;
        }
        if let Some(v) = file_cfg.contact_endpoint {
            self.contact_endpoint = v;
        }
        if let Some(v) = file_cfg.sent_reset_secs {
            self.sent_reset_secs = v;
        }
        Ok(())
    }

    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("APP__DATABASE_URL") {
            self.database_url = v;
        }
        if let Some(v) = var("APP__CONTACT_ENDPOINT") {
            self.contact_endpoint = v;
        }
        if let Some(v) = var("APP__SENT_RESET_SECS") {
            match v.parse::<u64>() {
                Ok(parsed) => self.sent_reset_secs = parsed,
                Err(error) => {
                    tracing::warn!(value = %v, %error, "ignoring APP__SENT_RESET_SECS");
                }
            }
        }
    }
}

/// Defaults, then the settings file if present, then `APP__*` variables.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => settings
            .apply_file(&raw)
            .with_context(|| format!("failed to load '{}'", path.display()))?,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no settings file; using defaults");
        }
        Err(error) => {
            return Err(error).with_context(|| format!("failed to read '{}'", path.display()))
        }
    }

    settings.apply_env(|name| std::env::var(name).ok());
    Ok(settings)
}
