//! Slider host configuration and its loading order.

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use slider_core::CarouselConfig;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::logging::DEFAULT_LOG_FILTER;

/// Environment variable naming a TOML or JSON config file.
pub const CONFIG_PATH_ENV: &str = "SLIDER_CONFIG_PATH";
/// Environment variable carrying the whole config as inline JSON.
pub const CONFIG_JSON_ENV: &str = "SLIDER_CONFIG_JSON";
/// Override for `carousel.page_size`.
pub const PAGE_SIZE_ENV: &str = "SLIDER_PAGE_SIZE";
/// Override for `carousel.settle_timeout_ms`. An empty value or `off`
/// disables the timeout.
pub const SETTLE_TIMEOUT_ENV: &str = "SLIDER_SETTLE_TIMEOUT_MS";

/// Source that produced the slider configuration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    /// Built-in defaults; no file or env config was found.
    #[default]
    Default,
    /// File named by `$SLIDER_CONFIG_PATH`.
    EnvPath(PathBuf),
    /// JSON from `$SLIDER_CONFIG_JSON`.
    EnvInline,
    /// Default file discovered in the working directory.
    File(PathBuf),
}

/// Top-level settings for a host embedding sliders.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SliderConfig {
    /// Paging and transition settings applied to every slider.
    pub carousel: CarouselConfig,
    /// `tracing_subscriber` filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            carousel: CarouselConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SliderConfig {
    /// Resolve the host's slider settings.
    ///
    /// The first source present wins: a file named by `$SLIDER_CONFIG_PATH`,
    /// inline JSON in `$SLIDER_CONFIG_JSON`, then `slider.toml` or
    /// `config/slider.toml` relative to the working directory. With none of
    /// them the built-in defaults apply. The per-field variables
    /// `$SLIDER_PAGE_SIZE` and `$SLIDER_SETTLE_TIMEOUT_MS` override whatever
    /// was loaded, and the merged config must pass [`Self::validate`].
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        let (mut config, source) = Self::load_base_from_env()?;
        config.apply_env_overrides()?;
        config.validate()?;
        tracing::info!(
            ?source,
            page_size = config.carousel.page_size,
            settle_timeout_ms = ?config.carousel.settle_timeout_ms,
            "loaded slider config"
        );
        Ok((config, source))
    }

    fn load_base_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        if let Ok(path_str) = env::var(CONFIG_PATH_ENV)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::EnvPath(path)));
        }

        if let Ok(raw) = env::var(CONFIG_JSON_ENV)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_ENV}"))?;
            return Ok((parsed, ConfigSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file() {
            let config = Self::load_from_file(&path)?;
            return Ok((config, ConfigSource::File(path)));
        }

        Ok((Self::default(), ConfigSource::Default))
    }

    /// Read a TOML or JSON file, picking the format by extension.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path).with_context(|| {
            format!("failed to read slider config from {}", path.display())
        })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid slider config {}", path.display())
            }),
            Some("toml") => toml::from_str(&contents).map_err(|err| {
                anyhow!("invalid slider config {}: {}", path.display(), err)
            }),
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse contents of unknown format, TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(
                    "failed to parse slider config {origin}: \
                     toml error: {toml_err}; json error: {json_err}"
                )
            })
        })
    }

    /// Parse a JSON config.
    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw)
            .map_err(|err| anyhow!("invalid slider config json: {err}"))
    }

    /// Reject values the sliders cannot run with.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.carousel.validate()?;
        if self.log_filter.trim().is_empty() {
            return Err(anyhow!("log_filter must not be empty"));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Ok(raw) = env::var(PAGE_SIZE_ENV) {
            self.carousel.page_size = raw.trim().parse().with_context(|| {
                format!(
                    "{PAGE_SIZE_ENV} must be a positive integer, got {raw:?}"
                )
            })?;
        }

        if let Ok(raw) = env::var(SETTLE_TIMEOUT_ENV) {
            let raw = raw.trim();
            self.carousel.settle_timeout_ms =
                if raw.is_empty() || raw.eq_ignore_ascii_case("off") {
                    None
                } else {
                    Some(raw.parse().with_context(|| {
                        format!(
                            "{SETTLE_TIMEOUT_ENV} must be milliseconds \
                             or `off`, got {raw:?}"
                        )
                    })?)
                };
        }

        Ok(())
    }

    fn find_default_file() -> Option<PathBuf> {
        const CANDIDATES: &[&str] = &["slider.toml", "config/slider.toml"];

        CANDIDATES
            .iter()
            .map(Path::new)
            .find(|path| path.exists())
            .map(|path| path.to_path_buf())
    }
}
