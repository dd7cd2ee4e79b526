//! Content scanning and manifest generation.
//!
//! Stage 1 of the build pipeline. Walks the content tree and produces a
//! [`Manifest`] of typed items that the generate stage consumes. The
//! manifest serializes to JSON so a build can be inspected halfway through.
//!
//! ## Directory Structure
//!
//! ```text
//! content/                         # Content root
//! ├── config.toml                  # Site configuration (optional)
//! ├── en/                          # One directory per configured language
//! │   ├── projects/
//! │   │   ├── super-app.md
//! │   │   └── tiny-lib.md
//! │   ├── books/
//! │   │   └── my-first-book.md
//! │   └── career/
//! │       └── acme.md
//! └── ru/
//!     ├── projects/
//!     │   └── super-app.md         # Translation: same slug, ru front matter
//!     └── ...
//! ```
//!
//! ## Item Files
//!
//! Each `.md` file is TOML front matter between `+++` fences, followed by a
//! markdown body:
//!
//! ```text
//! +++
//! title = "Super App"
//! date = "2020-01-15 10:00"
//! tags = ["swift", "ios"]
//! logo = ".png"
//! single_image = ".jpg"
//!
//! [project]
//! platforms = ["ios"]
//! kind = "app"
//! marketplaces = [{ store = "app_store", url = "https://apps.apple.com/x" }]
//! +++
//!
//! The app that does the thing.
//! ```
//!
//! ## Validation
//!
//! The scanner enforces these rules:
//! - Every root directory must be a configured language tag
//! - Every section directory must be one of the five fixed sections
//! - The front matter's metadata table must match the section directory
//!   (a `[book]` table inside `projects/` is an error, not a silent skip)
//! - `date` must parse as `yyyy-MM-dd HH:mm`

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::{self, SiteConfig};
use crate::language::Language;
use crate::model::{
    AchievementMetadata, BookMetadata, CareerMetadata, EventMetadata, Item, ItemMetadata,
    ProjectMetadata, Section, SectionMetadata, DATE_FORMAT,
};

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Front matter TOML error in {path}: {source}")]
    FrontMatter {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Missing +++ front matter fences in {0}")]
    MissingFrontMatter(PathBuf),
    #[error("Unexpected directory {0} in content root (not a configured language)")]
    UnknownLanguage(PathBuf),
    #[error("Unknown section directory {0}")]
    UnknownSection(PathBuf),
    #[error("Metadata in {path} does not match section \"{section}\": expected exactly one [{section_key}] table")]
    MetadataMismatch {
        path: PathBuf,
        section: &'static str,
        section_key: &'static str,
    },
    #[error("Bad date {value:?} in {path} (expected yyyy-MM-dd HH:mm)")]
    BadDate { path: PathBuf, value: String },
}

/// Manifest output from the scan stage.
#[derive(Debug, Serialize, Deserialize)]
pub struct Manifest {
    pub items: Vec<Item>,
    pub config: SiteConfig,
}

impl Manifest {
    /// All items for one language, sorted descending by publication date.
    pub fn items_for(&self, language: Language) -> Vec<&Item> {
        let mut items: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.language == language)
            .collect();
        items.sort_by(|a, b| b.date.cmp(&a.date));
        items
    }
}

/// Front matter of one item file.
///
/// Exactly one of the five section tables must be present, and it must
/// match the section directory the file lives in.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FrontMatter {
    title: String,
    date: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    logo: Option<String>,
    #[serde(default)]
    single_image: Option<String>,
    #[serde(default)]
    videos: Vec<String>,
    #[serde(default)]
    end_date: Option<String>,
    #[serde(default)]
    alternate_link_identifier: Option<String>,
    #[serde(default)]
    project: Option<ProjectMetadata>,
    #[serde(default)]
    book: Option<BookMetadata>,
    #[serde(default)]
    event: Option<EventMetadata>,
    #[serde(default)]
    career: Option<CareerMetadata>,
    #[serde(default)]
    achievement: Option<AchievementMetadata>,
}

impl FrontMatter {
    /// Extract the section metadata variant, checking it matches `section`
    /// and that no other section table is populated.
    fn section_metadata(
        mut self,
        section: Section,
        path: &Path,
    ) -> Result<(Self, SectionMetadata), ScanError> {
        let mismatch = || ScanError::MetadataMismatch {
            path: path.to_path_buf(),
            section: section.slug(),
            section_key: section_key(section),
        };

        let populated = [
            self.project.is_some(),
            self.book.is_some(),
            self.event.is_some(),
            self.career.is_some(),
            self.achievement.is_some(),
        ]
        .iter()
        .filter(|p| **p)
        .count();
        if populated != 1 {
            return Err(mismatch());
        }

        let metadata = match section {
            Section::Projects => self.project.take().map(SectionMetadata::Project),
            Section::Books => self.book.take().map(SectionMetadata::Book),
            Section::Events => self.event.take().map(SectionMetadata::Event),
            Section::Career => self.career.take().map(SectionMetadata::Career),
            Section::Achievements => self.achievement.take().map(SectionMetadata::Achievement),
        };
        match metadata {
            Some(metadata) => Ok((self, metadata)),
            None => Err(mismatch()),
        }
    }
}

fn section_key(section: Section) -> &'static str {
    match section {
        Section::Projects => "project",
        Section::Books => "book",
        Section::Events => "event",
        Section::Career => "career",
        Section::Achievements => "achievement",
    }
}

/// Scan the content root into a manifest.
pub fn scan(root: &Path) -> Result<Manifest, ScanError> {
    let config = config::load_config(root)?;
    let mut items = Vec::new();

    // Every directory in the root must be a configured language.
    for entry in fs::read_dir(root)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        let language = Language::from_tag(&name)
            .map_err(|_| ScanError::UnknownLanguage(path.clone()))?;
        if !config.languages.contains(&language) {
            return Err(ScanError::UnknownLanguage(path));
        }
        scan_language(&path, language, &mut items)?;
    }

    Ok(Manifest { items, config })
}

fn scan_language(
    language_dir: &Path,
    language: Language,
    items: &mut Vec<Item>,
) -> Result<(), ScanError> {
    for entry in fs::read_dir(language_dir)? {
        let entry = entry?;
        let section_dir = entry.path();
        if !section_dir.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        if name.starts_with('.') {
            continue;
        }
        let section = Section::from_slug(&name)
            .ok_or_else(|| ScanError::UnknownSection(section_dir.clone()))?;

        let mut files: Vec<PathBuf> = fs::read_dir(&section_dir)?
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.extension().is_some_and(|ext| ext == "md"))
            .collect();
        files.sort();

        for file in files {
            items.push(parse_item(&file, language, section)?);
        }
    }
    Ok(())
}

/// Parse one markdown file into an [`Item`].
fn parse_item(path: &Path, language: Language, section: Section) -> Result<Item, ScanError> {
    let content = fs::read_to_string(path)?;
    let (raw_front, body) = split_front_matter(&content)
        .ok_or_else(|| ScanError::MissingFrontMatter(path.to_path_buf()))?;

    let front: FrontMatter = toml::from_str(raw_front).map_err(|source| ScanError::FrontMatter {
        path: path.to_path_buf(),
        source,
    })?;

    let date = chrono::NaiveDateTime::parse_from_str(&front.date, DATE_FORMAT).map_err(|_| {
        ScanError::BadDate {
            path: path.to_path_buf(),
            value: front.date.clone(),
        }
    })?;

    let slug = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let (front, section_metadata) = front.section_metadata(section, path)?;

    Ok(Item {
        title: front.title,
        path: format!("{}/{}", section.slug(), slug),
        date,
        language,
        tags: front.tags,
        description: body.trim().to_string(),
        metadata: ItemMetadata {
            logo: front.logo,
            single_image: front.single_image,
            videos: front.videos,
            end_date: front.end_date,
            alternate_link_identifier: front.alternate_link_identifier,
            section: section_metadata,
        },
    })
}

/// Split `+++`-fenced TOML front matter from the markdown body.
///
/// Returns `None` when the fences are missing or unterminated.
fn split_front_matter(content: &str) -> Option<(&str, &str)> {
    let rest = content.strip_prefix("+++")?;
    let rest = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n"))?;
    let end = rest.find("\n+++")?;
    let front = &rest[..end];
    let body = rest[end + 4..].trim_start_matches(['\r', '\n']);
    Some((front, body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{setup_content, write_item, ACHIEVEMENT_MD, BOOK_MD, PROJECT_MD};
    use crate::model::Platform;

    #[test]
    fn split_front_matter_basic() {
        let (front, body) = split_front_matter("+++\na = 1\n+++\n\nBody here\n").unwrap();
        assert_eq!(front, "a = 1");
        assert_eq!(body, "Body here\n");
    }

    #[test]
    fn split_front_matter_missing_fence() {
        assert!(split_front_matter("a = 1\n").is_none());
        assert!(split_front_matter("+++\na = 1\n").is_none());
    }

    #[test]
    fn scans_items_per_language() {
        let tmp = setup_content();
        let manifest = scan(tmp.path()).unwrap();

        let en = manifest.items_for(Language::English);
        let ru = manifest.items_for(Language::Russian);
        assert_eq!(en.len(), 3);
        assert_eq!(ru.len(), 1);
        // Every item carries its own language; lists are never merged.
        assert!(en.iter().all(|i| i.language == Language::English));
        assert!(ru.iter().all(|i| i.language == Language::Russian));
    }

    #[test]
    fn items_are_sorted_descending_by_date() {
        let tmp = setup_content();
        let manifest = scan(tmp.path()).unwrap();
        let en = manifest.items_for(Language::English);
        for pair in en.windows(2) {
            assert!(pair[0].date >= pair[1].date);
        }
    }

    #[test]
    fn project_metadata_parses() {
        let tmp = setup_content();
        let manifest = scan(tmp.path()).unwrap();
        let en = manifest.items_for(Language::English);
        let project = en.iter().find(|i| i.path == "projects/super-app").unwrap();

        assert_eq!(project.section(), Section::Projects);
        assert_eq!(project.title, "Super App");
        assert_eq!(project.tags, vec!["swift", "ios"]);
        match &project.metadata.section {
            SectionMetadata::Project(p) => {
                assert_eq!(p.platforms, vec![Platform::Ios]);
                assert_eq!(p.marketplaces.len(), 1);
            }
            other => panic!("wrong variant: {other:?}"),
        }
    }

    #[test]
    fn metadata_table_must_match_section_directory() {
        let tmp = setup_content();
        // A [book] table inside projects/ is a hard error.
        write_item(tmp.path(), "en", "projects", "misfiled", BOOK_MD);
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::MetadataMismatch { .. })
        ));
    }

    #[test]
    fn two_metadata_tables_are_rejected() {
        let tmp = setup_content();
        let both = concat!(
            "+++\n",
            "title = \"Both\"\n",
            "date = \"2020-01-01 00:00\"\n",
            "[project]\n",
            "platforms = [\"ios\"]\n",
            "kind = \"app\"\n",
            "[book]\n",
            "author = \"Someone\"\n",
            "+++\n",
            "Body\n",
        );
        write_item(tmp.path(), "en", "projects", "both", both);
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::MetadataMismatch { .. })
        ));
    }

    #[test]
    fn unknown_language_directory_fails() {
        let tmp = setup_content();
        std::fs::create_dir_all(tmp.path().join("de/projects")).unwrap();
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn unknown_section_directory_fails() {
        let tmp = setup_content();
        std::fs::create_dir_all(tmp.path().join("en/blog")).unwrap();
        assert!(matches!(scan(tmp.path()), Err(ScanError::UnknownSection(_))));
    }

    #[test]
    fn bad_publication_date_fails() {
        let tmp = setup_content();
        let bad = ACHIEVEMENT_MD.replace("2021-11-20 12:00", "20.11.2021");
        write_item(tmp.path(), "en", "achievements", "bad-date", &bad);
        assert!(matches!(scan(tmp.path()), Err(ScanError::BadDate { .. })));
    }

    #[test]
    fn missing_front_matter_fails() {
        let tmp = setup_content();
        write_item(tmp.path(), "en", "books", "bare", "Just a body, no fences\n");
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::MissingFrontMatter(_))
        ));
    }

    #[test]
    fn unknown_front_matter_key_fails() {
        let tmp = setup_content();
        let typo = PROJECT_MD.replace("single_image", "single_imagee");
        write_item(tmp.path(), "en", "projects", "typo", &typo);
        assert!(matches!(
            scan(tmp.path()),
            Err(ScanError::FrontMatter { .. })
        ));
    }

    #[test]
    fn empty_content_root_yields_empty_manifest() {
        let tmp = tempfile::TempDir::new().unwrap();
        let manifest = scan(tmp.path()).unwrap();
        assert!(manifest.items.is_empty());
        assert!(manifest.items_for(Language::English).is_empty());
    }

    #[test]
    fn manifest_serializes_round_trip() {
        let tmp = setup_content();
        let manifest = scan(tmp.path()).unwrap();
        let json = serde_json::to_string_pretty(&manifest).unwrap();
        let back: Manifest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.items.len(), manifest.items.len());
    }
}
