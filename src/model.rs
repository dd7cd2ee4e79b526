//! Content model: items, sections, and per-section metadata.
//!
//! Every content entry is an [`Item`] belonging to exactly one [`Section`].
//! Section-specific data is a [`SectionMetadata`] sum type — one variant per
//! section — so the "exactly one metadata shape per item" rule is enforced
//! by construction rather than by five optional fields and runtime checks.
//! An item's section is *derived* from its metadata variant
//! ([`Item::section`]); the two cannot drift apart.
//!
//! ## Image naming convention
//!
//! `logo` and `single_image` store only a file extension (e.g. `".png"`).
//! The actual resource lives next to the item's output directory and is
//! resolved by name convention: `/{item-path}/{name}{ext}` for the full
//! image and `/{item-path}/{name}_400x400{ext}` for the preview variant
//! (see [`Item::image_src`]).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::language::Language;

/// Front-matter date format: `2020-01-15 10:00`.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Suffix inserted before the extension for preview-sized images.
pub const PREVIEW_SUFFIX: &str = "_400x400";

/// The five fixed content categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Projects,
    Books,
    Events,
    Career,
    Achievements,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Projects,
        Section::Books,
        Section::Events,
        Section::Career,
        Section::Achievements,
    ];

    /// URL/directory slug for this section.
    pub fn slug(self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::Books => "books",
            Section::Events => "events",
            Section::Career => "career",
            Section::Achievements => "achievements",
        }
    }

    /// Parse a content-directory name into a section.
    pub fn from_slug(slug: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|s| s.slug() == slug)
    }

    /// Canonical path of the section listing page, without language prefix.
    pub fn path(self) -> String {
        format!("/{}", self.slug())
    }

    /// Localized section title.
    pub fn title(self, language: Language) -> &'static str {
        match language {
            Language::Russian => match self {
                Section::Projects => "Проекты",
                Section::Books => "Книги",
                Section::Events => "Мероприятия",
                Section::Career => "Карьера",
                Section::Achievements => "Достижения",
            },
            Language::English => match self {
                Section::Projects => "Projects",
                Section::Books => "Books",
                Section::Events => "Events",
                Section::Career => "Career",
                Section::Achievements => "Achievements",
            },
        }
    }
}

/// Platform a project ships on. Rendered as an icon row on project cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Ios,
    Android,
    Web,
    Desktop,
}

impl Platform {
    pub fn icon(self) -> &'static str {
        match self {
            Platform::Ios => "/img/platforms/ios.png",
            Platform::Android => "/img/platforms/android.png",
            Platform::Web => "/img/platforms/web.png",
            Platform::Desktop => "/img/platforms/desktop.png",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    App,
    Game,
    Library,
    Website,
}

impl ProjectType {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (ProjectType::App, Language::English) => "App",
            (ProjectType::App, Language::Russian) => "Приложение",
            (ProjectType::Game, Language::English) => "Game",
            (ProjectType::Game, Language::Russian) => "Игра",
            (ProjectType::Library, Language::English) => "Library",
            (ProjectType::Library, Language::Russian) => "Библиотека",
            (ProjectType::Website, Language::English) => "Website",
            (ProjectType::Website, Language::Russian) => "Сайт",
        }
    }
}

/// Store a project is published on. Rendered as a linked icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Marketplace {
    AppStore,
    GooglePlay,
    Github,
}

impl Marketplace {
    pub fn icon(self) -> &'static str {
        match self {
            Marketplace::AppStore => "/img/marketplaces/app_store.png",
            Marketplace::GooglePlay => "/img/marketplaces/google_play.png",
            Marketplace::Github => "/img/marketplaces/github.png",
        }
    }
}

/// A marketplace the project is available on, with its listing URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketplaceLink {
    pub store: Marketplace,
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Internship,
}

impl EmploymentType {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (EmploymentType::FullTime, Language::English) => "full-time",
            (EmploymentType::FullTime, Language::Russian) => "полная занятость",
            (EmploymentType::PartTime, Language::English) => "part-time",
            (EmploymentType::PartTime, Language::Russian) => "частичная занятость",
            (EmploymentType::Contract, Language::English) => "contract",
            (EmploymentType::Contract, Language::Russian) => "контракт",
            (EmploymentType::Internship, Language::English) => "internship",
            (EmploymentType::Internship, Language::Russian) => "стажировка",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AchievementType {
    Award,
    Certificate,
    Competition,
}

impl AchievementType {
    pub fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (AchievementType::Award, Language::English) => "Award",
            (AchievementType::Award, Language::Russian) => "Награда",
            (AchievementType::Certificate, Language::English) => "Certificate",
            (AchievementType::Certificate, Language::Russian) => "Сертификат",
            (AchievementType::Competition, Language::English) => "Competition",
            (AchievementType::Competition, Language::Russian) => "Соревнование",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectMetadata {
    pub platforms: Vec<Platform>,
    pub kind: ProjectType,
    #[serde(default)]
    pub marketplaces: Vec<MarketplaceLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BookMetadata {
    pub author: String,
    #[serde(default)]
    pub organisation: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventMetadata {
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CareerMetadata {
    pub position: String,
    pub employment: EmploymentType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AchievementMetadata {
    pub kind: AchievementType,
}

/// Section-specific metadata. Exactly one variant per section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionMetadata {
    Project(ProjectMetadata),
    Book(BookMetadata),
    Event(EventMetadata),
    Career(CareerMetadata),
    Achievement(AchievementMetadata),
}

impl SectionMetadata {
    /// The section this metadata shape belongs to.
    pub fn section(&self) -> Section {
        match self {
            SectionMetadata::Project(_) => Section::Projects,
            SectionMetadata::Book(_) => Section::Books,
            SectionMetadata::Event(_) => Section::Events,
            SectionMetadata::Career(_) => Section::Career,
            SectionMetadata::Achievement(_) => Section::Achievements,
        }
    }
}

/// Metadata shared by all sections plus the section-specific variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemMetadata {
    /// Logo image extension (e.g. `".png"`), resolved by naming convention.
    #[serde(default)]
    pub logo: Option<String>,
    /// Single showcase image extension, rendered responsively twice.
    #[serde(default)]
    pub single_image: Option<String>,
    /// Video identifiers (embedded by the theme, not by this crate).
    #[serde(default)]
    pub videos: Vec<String>,
    /// Raw end date in [`DATE_FORMAT`]. Unparseable values count as absent.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Associates translations of the same logical item across languages.
    #[serde(default)]
    pub alternate_link_identifier: Option<String>,
    pub section: SectionMetadata,
}

impl ItemMetadata {
    /// Parse the raw end-date string.
    ///
    /// A malformed date is treated as "no end date", never an error — career
    /// items then fall back to the localized "present" marker.
    pub fn parsed_end_date(&self) -> Option<NaiveDateTime> {
        self.end_date
            .as_deref()
            .and_then(|raw| NaiveDateTime::parse_from_str(raw, DATE_FORMAT).ok())
    }
}

/// One content entry, loaded for one language. Immutable after the scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    /// Path relative to the language root, e.g. `projects/super-app`.
    pub path: String,
    pub date: NaiveDateTime,
    pub language: Language,
    pub tags: Vec<String>,
    /// Raw markdown body; rendered to HTML by the node renderer.
    pub description: String,
    pub metadata: ItemMetadata,
}

impl Item {
    /// The section this item belongs to, derived from its metadata variant.
    pub fn section(&self) -> Section {
        self.metadata.section.section()
    }

    /// Resolve a conventionally named image resource for this item.
    ///
    /// `preview` selects the `{name}_400x400{ext}` variant.
    pub fn image_src(&self, name: &str, ext: &str, preview: bool) -> String {
        let suffix = if preview { PREVIEW_SUFFIX } else { "" };
        format!("/{}/{}{}{}", self.path, name, suffix, ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{book_item, career_item};

    #[test]
    fn section_slug_round_trips() {
        for section in Section::ALL {
            assert_eq!(Section::from_slug(section.slug()), Some(section));
        }
    }

    #[test]
    fn section_from_unknown_slug_is_none() {
        assert_eq!(Section::from_slug("blog"), None);
        assert_eq!(Section::from_slug(""), None);
    }

    #[test]
    fn section_titles_are_localized() {
        assert_eq!(Section::Projects.title(Language::English), "Projects");
        assert_eq!(Section::Projects.title(Language::Russian), "Проекты");
    }

    #[test]
    fn metadata_variant_determines_section() {
        let item = book_item(Language::English, "some-book", "2021-03-01 00:00");
        assert_eq!(item.section(), Section::Books);
        assert_eq!(item.metadata.section.section(), Section::Books);
    }

    #[test]
    fn parsed_end_date_accepts_exact_format() {
        let mut item = career_item(Language::English, "acme", "2019-05-01 09:00", None);
        item.metadata.end_date = Some("2021-06-30 18:00".to_string());
        let end = item.metadata.parsed_end_date().unwrap();
        assert_eq!(end.format("%Y-%m-%d").to_string(), "2021-06-30");
    }

    #[test]
    fn parsed_end_date_treats_garbage_as_absent() {
        let mut item = career_item(Language::English, "acme", "2019-05-01 09:00", None);
        for bad in ["not a date", "2021-06-30", "30.06.2021 18:00", ""] {
            item.metadata.end_date = Some(bad.to_string());
            assert!(item.metadata.parsed_end_date().is_none(), "parsed {bad:?}");
        }
    }

    #[test]
    fn image_src_preview_inserts_size_suffix() {
        let item = book_item(Language::English, "some-book", "2021-03-01 00:00");
        assert_eq!(
            item.image_src("cover", ".jpg", true),
            "/books/some-book/cover_400x400.jpg"
        );
        assert_eq!(
            item.image_src("cover", ".jpg", false),
            "/books/some-book/cover.jpg"
        );
    }
}
