//! Site configuration module.
//!
//! Handles loading and validating `config.toml` from the content root. The
//! configuration is a single immutable object constructed once at startup
//! and passed by reference into every component — no ambient global state.
//!
//! ## Config File
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! url = "https://coolone.ru"
//! avatar = "/img/avatar.jpg"
//!
//! # Supported languages, in navigation order. The content tree must have
//! # one directory per tag (content/en/, content/ru/).
//! languages = ["en", "ru"]
//!
//! # Which language lives at the site root.
//! default_language = "en"
//!
//! # When false (default), the default language gets no path prefix:
//! # /projects/...  and  /ru/projects/...
//! # When true, every language is prefixed: /en/projects/..., /ru/projects/...
//! prefix_default_language = false
//!
//! [title]
//! en = "Nikolai Trukhin"
//! ru = "Николай Трухин"
//!
//! [subtitle]
//! en = "iOS developer"
//! ru = "iOS разработчик"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::language::Language;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// A string with one value per supported language.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Localized {
    pub en: String,
    pub ru: String,
}

impl Localized {
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Russian => &self.ru,
        }
    }

    fn new(en: &str, ru: &str) -> Self {
        Self {
            en: en.to_string(),
            ru: ru.to_string(),
        }
    }
}

/// Site configuration loaded from `config.toml`.
///
/// All fields have defaults matching the deployed site. User config files
/// need only specify the values they want to override.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Canonical site URL.
    pub url: String,
    /// Path of the avatar image, used in the header and as favicon.
    pub avatar: String,
    /// Supported languages, in navigation order.
    pub languages: Vec<Language>,
    /// The language served at the site root.
    pub default_language: Language,
    /// Whether the default language also gets a `/{tag}` path prefix.
    pub prefix_default_language: bool,
    /// Site title, shown in the header logo column.
    pub title: Localized,
    /// Site subtitle, shown under the title.
    pub subtitle: Localized,
    /// Site description, used in page metadata.
    pub description: Localized,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            url: "https://coolone.ru".to_string(),
            avatar: "/img/avatar.jpg".to_string(),
            languages: vec![Language::English, Language::Russian],
            default_language: Language::English,
            prefix_default_language: false,
            title: Localized::new("Nikolai Trukhin", "Николай Трухин"),
            subtitle: Localized::new("iOS developer", "iOS разработчик"),
            description: Localized::new(
                "Here is all the information about projects, events, books, and more",
                "Здесь собрана информация о проектах, мероприятиях, книгах и не только",
            ),
        }
    }
}

impl SiteConfig {
    /// Validate config values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.is_empty() {
            return Err(ConfigError::Validation(
                "languages must not be empty".into(),
            ));
        }
        let mut seen = self.languages.clone();
        seen.sort();
        seen.dedup();
        if seen.len() != self.languages.len() {
            return Err(ConfigError::Validation(
                "languages must not contain duplicates".into(),
            ));
        }
        if !self.languages.contains(&self.default_language) {
            return Err(ConfigError::Validation(format!(
                "default_language \"{}\" is not in the languages list",
                self.default_language.tag()
            )));
        }
        Ok(())
    }

    /// Path prefix for a language: `""` or `"/{tag}"`.
    ///
    /// The default language gets no prefix unless `prefix_default_language`
    /// is set — the rule is explicit config, not inferred.
    pub fn path_prefix(&self, language: Language) -> String {
        if language == self.default_language && !self.prefix_default_language {
            String::new()
        } else {
            format!("/{}", language.tag())
        }
    }

    /// Prefix a site-absolute path (`"/projects"`) for a language.
    pub fn prefixed(&self, language: Language, path: &str) -> String {
        let prefix = self.path_prefix(language);
        if prefix.is_empty() {
            path.to_string()
        } else {
            format!("{prefix}{path}")
        }
    }
}

/// Load `config.toml` from the content root, falling back to defaults.
pub fn load_config(root: &Path) -> Result<SiteConfig, ConfigError> {
    let config_path = root.join("config.toml");
    let config = if config_path.exists() {
        let content = fs::read_to_string(&config_path)?;
        toml::from_str(&content)?
    } else {
        SiteConfig::default()
    };
    config.validate()?;
    Ok(config)
}

/// A fully documented stock `config.toml`, printed by `gen-config`.
pub fn stock_config_toml() -> &'static str {
    r#"# polyfolio site configuration
# All options are optional - defaults shown below.

# Canonical site URL.
url = "https://coolone.ru"

# Avatar image path, used in the header and as favicon.
avatar = "/img/avatar.jpg"

# Supported languages, in navigation order.
languages = ["en", "ru"]

# Which language lives at the site root (no path prefix).
default_language = "en"

# Set to true to prefix the default language as well (/en/..., /ru/...).
prefix_default_language = false

# Site title, shown in the header.
[title]
en = "Nikolai Trukhin"
ru = "Николай Трухин"

# Site subtitle, shown under the title.
[subtitle]
en = "iOS developer"
ru = "iOS разработчик"

# Site description, used in page metadata.
[description]
en = "Here is all the information about projects, events, books, and more"
ru = "Здесь собрана информация о проектах, мероприятиях, книгах и не только"
"#
}
