//! Synthetic "all posts" listing pages.
//!
//! Splits a language's date-sorted item list into fixed windows of
//! [`PAGE_SIZE`] items and synthesizes one [`Page`] per window at
//! `/items/{n}` (1-based). Each page carries a localized title and
//! description and a pre-rendered body; the last window sets
//! [`Page::last_page`], which suppresses the "Next" navigation link.
//!
//! Pages are appended to a [`PageRegistry`] — an append-only collection
//! mutated strictly sequentially, once per language. Languages are never
//! merged: the builder runs independently per language over that
//! language's items only.

use maud::Markup;

use crate::config::SiteConfig;
use crate::language::{strings, Language};
use crate::model::Item;
use crate::render;

/// Items per listing page.
pub const PAGE_SIZE: usize = 10;

/// A synthesized listing page. Not persisted beyond the render pass.
pub struct Page {
    /// Canonical path without language prefix, e.g. `/items/2`.
    pub path: String,
    pub title: String,
    pub description: String,
    pub language: Language,
    /// 1-based window index.
    pub index: usize,
    /// True only for the final window of a language.
    pub last_page: bool,
    /// Pre-rendered page body.
    pub body: Markup,
}

/// Append-only collection of synthesized pages.
#[derive(Default)]
pub struct PageRegistry {
    pages: Vec<Page>,
}

impl PageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }
}

/// Build the listing pages for one language.
///
/// `items` must already be sorted descending by publication date (the
/// manifest guarantees this). An empty item set synthesizes zero pages.
pub fn build_listing_pages(
    config: &SiteConfig,
    items: &[&Item],
    language: Language,
    registry: &mut PageRegistry,
) {
    let s = strings(language);
    let chunk_count = items.len().div_ceil(PAGE_SIZE);
    for (i, window) in items.chunks(PAGE_SIZE).enumerate() {
        let index = i + 1;
        let last_page = index == chunk_count;
        registry.add(Page {
            path: format!("/items/{index}"),
            title: s.all_posts_title.to_string(),
            description: s.all_posts_description.to_string(),
            language,
            index,
            last_page,
            body: render::items_page_content(config, window, language, index, last_page),
        });
    }
}
