//! Languages and localized UI strings.
//!
//! The site is bilingual (English/Russian). Every piece of fixed UI text —
//! pagination labels, the footer attribution, the "present" marker for
//! ongoing jobs — lives in one [`Strings`] table per language, looked up
//! through [`strings`]. Adding a language means adding an enum variant and
//! one table entry; scattering per-language ternaries through the renderers
//! is exactly what this module exists to prevent.
//!
//! ## Failure semantics
//!
//! [`Language::from_tag`] is the only fallible entry point. An unknown tag
//! is a content-layout error (a stray directory under `content/`, or a typo
//! in `config.toml`) and is reported loudly — there is no silent fallback
//! to English.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
#[error("unsupported language tag: {0:?} (expected one of: en, ru)")]
pub struct UnknownLanguage(pub String);

/// A supported site language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "ru")]
    Russian,
}

impl Language {
    /// Parse a content-directory or config tag (`"en"` / `"ru"`).
    pub fn from_tag(tag: &str) -> Result<Language, UnknownLanguage> {
        match tag {
            "en" => Ok(Language::English),
            "ru" => Ok(Language::Russian),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }

    /// The URL/directory tag for this language.
    pub fn tag(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
        }
    }

    /// POSIX locale identifier, used for date formatting.
    pub fn locale(self) -> &'static str {
        match self {
            Language::English => "en_US",
            Language::Russian => "ru_RU",
        }
    }
}

/// Fixed UI strings for one language.
///
/// One row of the localization table. All fields are `'static` — the table
/// is compiled in, not loaded from disk.
#[derive(Debug, Clone, Copy)]
pub struct Strings {
    /// Pagination: link to the previous listing page.
    pub back: &'static str,
    /// Pagination: link to the next listing page.
    pub next: &'static str,
    /// Pagination: "Page" label, rendered as "{page} {n}".
    pub page: &'static str,
    /// Heading above the item listing.
    pub latest_posts: &'static str,
    /// Title of the synthetic `/items/{n}` pages.
    pub all_posts_title: &'static str,
    /// Description of the synthetic `/items/{n}` pages.
    pub all_posts_description: &'static str,
    /// Footer attribution, rendered before the generator link.
    pub generated_with: &'static str,
    /// Footer RSS feed link label.
    pub rss_feed: &'static str,
    /// Date-range suffix for career items without an end date.
    pub present: &'static str,
    /// Label before marketplace icons on project cards.
    pub available_on: &'static str,
}

const ENGLISH: Strings = Strings {
    back: "Back",
    next: "Next",
    page: "Page",
    latest_posts: "Latest posts",
    all_posts_title: "All posts",
    all_posts_description: "List of all posts",
    generated_with: "Generated with",
    rss_feed: "RSS feed",
    present: "now",
    available_on: "Available on",
};

const RUSSIAN: Strings = Strings {
    back: "Назад",
    next: "Вперед",
    page: "Страница",
    latest_posts: "Последние посты",
    all_posts_title: "Все посты",
    all_posts_description: "Список всех постов",
    generated_with: "Сгенерировано с помощью",
    rss_feed: "RSS лента",
    present: "по настоящее время",
    available_on: "Доступно на",
};

/// Look up the UI string table for a language.
///
/// Total over the [`Language`] enum — once a tag has parsed, every lookup
/// succeeds.
pub fn strings(language: Language) -> &'static Strings {
    match language {
        Language::English => &ENGLISH,
        Language::Russian => &RUSSIAN,
    }
}

/// Format a date in the locale's short style.
///
/// `15.01.2020` for Russian, `01/15/2020` for English — the same date never
/// renders identically across the two locales.
pub fn short_date(date: &NaiveDateTime, language: Language) -> String {
    let fmt = match language {
        Language::English => "%m/%d/%Y",
        Language::Russian => "%d.%m.%Y",
    };
    date.format(fmt).to_string()
}
