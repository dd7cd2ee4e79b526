//! Shared test utilities for the polyfolio test suite.
//!
//! Provides item builders for renderer/pagination tests and a content-tree
//! fixture writer for scan/generate tests. Tests get an isolated temp copy
//! they can mutate without affecting other tests.

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use chrono::NaiveDateTime;

use crate::config::SiteConfig;
use crate::language::Language;
use crate::model::{
    AchievementMetadata, AchievementType, BookMetadata, CareerMetadata, EmploymentType,
    EventMetadata, Item, ItemMetadata, Platform, ProjectMetadata, ProjectType, SectionMetadata,
    DATE_FORMAT,
};

// =========================================================================
// Item builders
// =========================================================================

pub fn test_config() -> SiteConfig {
    SiteConfig::default()
}

fn parse_date(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, DATE_FORMAT).unwrap()
}

fn base_item(
    language: Language,
    path: &str,
    title: &str,
    date: &str,
    section: SectionMetadata,
) -> Item {
    Item {
        title: title.to_string(),
        path: path.to_string(),
        date: parse_date(date),
        language,
        tags: Vec::new(),
        description: String::new(),
        metadata: ItemMetadata {
            logo: None,
            single_image: None,
            videos: Vec::new(),
            end_date: None,
            alternate_link_identifier: None,
            section,
        },
    }
}

pub fn project_item(language: Language, slug: &str, date: &str) -> Item {
    base_item(
        language,
        &format!("projects/{slug}"),
        "Super App",
        date,
        SectionMetadata::Project(ProjectMetadata {
            platforms: vec![Platform::Ios],
            kind: ProjectType::App,
            marketplaces: Vec::new(),
        }),
    )
}

pub fn book_item(language: Language, slug: &str, date: &str) -> Item {
    base_item(
        language,
        &format!("books/{slug}"),
        "Some Book",
        date,
        SectionMetadata::Book(BookMetadata {
            author: "Jane Author".to_string(),
            organisation: None,
        }),
    )
}

pub fn event_item(language: Language, slug: &str, date: &str) -> Item {
    base_item(
        language,
        &format!("events/{slug}"),
        "Mobile Meetup",
        date,
        SectionMetadata::Event(EventMetadata {
            location: Some("Moscow".to_string()),
        }),
    )
}

pub fn career_item(language: Language, slug: &str, date: &str, end_date: Option<&str>) -> Item {
    let mut item = base_item(
        language,
        &format!("career/{slug}"),
        "Acme Corp",
        date,
        SectionMetadata::Career(CareerMetadata {
            position: "iOS Developer".to_string(),
            employment: EmploymentType::FullTime,
        }),
    );
    item.metadata.end_date = end_date.map(String::from);
    item
}

pub fn achievement_item(language: Language, slug: &str, date: &str) -> Item {
    base_item(
        language,
        &format!("achievements/{slug}"),
        "Best App Award",
        date,
        SectionMetadata::Achievement(AchievementMetadata {
            kind: AchievementType::Award,
        }),
    )
}

/// `n` book items with distinct dates, already sorted descending.
pub fn book_items(language: Language, n: usize) -> Vec<Item> {
    (0..n)
        .map(|i| {
            book_item(
                language,
                &format!("book-{i}"),
                &format!("2021-03-01 {:02}:{:02}", 23 - (i / 60) % 24, 59 - i % 60),
            )
        })
        .collect()
}

// =========================================================================
// Content-tree fixtures
// =========================================================================

pub const PROJECT_MD: &str = r#"+++
title = "Super App"
date = "2020-01-15 10:00"
tags = ["swift", "ios"]
logo = ".png"
single_image = ".jpg"

[project]
platforms = ["ios"]
kind = "app"
marketplaces = [{ store = "app_store", url = "https://apps.apple.com/x" }]
+++

The app that does **the thing**.
"#;

pub const BOOK_MD: &str = r#"+++
title = "My First Book"
date = "2021-03-01 00:00"
tags = ["writing"]

[book]
author = "Jane Author"
+++

A short book.
"#;

pub const CAREER_MD: &str = r#"+++
title = "Acme Corp"
date = "2019-05-01 09:00"

[career]
position = "iOS Developer"
employment = "full_time"
+++

Building apps at Acme.
"#;

pub const ACHIEVEMENT_MD: &str = r#"+++
title = "Best App Award"
date = "2021-11-20 12:00"

[achievement]
kind = "award"
+++

Won the thing.
"#;

pub const RU_PROJECT_MD: &str = r#"+++
title = "Супер Приложение"
date = "2020-01-15 10:00"
tags = ["swift", "ios"]
alternate_link_identifier = "super-app"

[project]
platforms = ["ios"]
kind = "app"
+++

Приложение, которое делает **всё**.
"#;

/// Write one item file into `{root}/{lang}/{section}/{slug}.md`.
pub fn write_item(root: &Path, lang: &str, section: &str, slug: &str, content: &str) {
    let dir = root.join(lang).join(section);
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(format!("{slug}.md")), content).unwrap();
}

/// Build a small bilingual content tree in a temp directory.
///
/// English: one project, one book, one career entry. Russian: the project's
/// translation. Default config (no `config.toml`).
pub fn setup_content() -> TempDir {
    let tmp = TempDir::new().unwrap();
    write_item(tmp.path(), "en", "projects", "super-app", PROJECT_MD);
    write_item(tmp.path(), "en", "books", "my-first-book", BOOK_MD);
    write_item(tmp.path(), "en", "career", "acme", CAREER_MD);
    write_item(tmp.path(), "ru", "projects", "super-app", RU_PROJECT_MD);
    tmp
}
