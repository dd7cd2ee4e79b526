//! HTML site generation.
//!
//! Stage 2 of the build pipeline. Takes the scan [`Manifest`] and writes
//! the final static site, one pass per configured language.
//!
//! ## Generated Pages
//!
//! Per language, under its path prefix (default language at the root):
//!
//! - **Home page** (`/index.html`): latest posts plus a link into the
//!   full listing
//! - **Section pages** (`/{section}/index.html`): all items of one section
//! - **Item pages** (`/{section}/{slug}/index.html`): one item, full size
//! - **Listing pages** (`/items/{n}/index.html`): the paginated
//!   "all posts" windows from [`crate::pagination`]
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html                   # en home (default language, no prefix)
//! ├── projects/
//! │   ├── index.html
//! │   └── super-app/index.html
//! ├── items/
//! │   ├── 1/index.html
//! │   └── 2/index.html
//! └── ru/
//!     ├── index.html
//!     ├── projects/...
//!     └── items/1/index.html
//! ```
//!
//! The build is a single deterministic pass: no retries, no concurrency.
//! Any collaborator failure (IO, malformed content) aborts the run.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use maud::Markup;

use crate::config::SiteConfig;
use crate::language::Language;
use crate::model::Section;
use crate::pagination::{self, PageRegistry};
use crate::render;
use crate::scan::Manifest;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// What one language pass produced, for CLI reporting.
#[derive(Debug)]
pub struct LanguagePass {
    pub language: Language,
    /// Output directory of this language, relative to the site root.
    pub prefix: String,
    pub items: usize,
    pub listing_pages: usize,
}

/// Per-language counts for the whole run.
#[derive(Debug)]
pub struct GenerateSummary {
    pub passes: Vec<LanguagePass>,
}

/// Generate the full site from a manifest.
pub fn generate(manifest: &Manifest, output_dir: &Path) -> Result<GenerateSummary, GenerateError> {
    let config = &manifest.config;
    let mut passes = Vec::new();

    for &language in &config.languages {
        let items = manifest.items_for(language);
        let prefix = config.path_prefix(language);
        let language_root = match prefix.as_str() {
            "" => output_dir.to_path_buf(),
            tagged => output_dir.join(tagged.trim_start_matches('/')),
        };

        // Home page.
        let body = render::index_page_content(config, &items, language);
        write_document(
            config,
            language,
            &language_root.join("index.html"),
            config.title.get(language),
            config.description.get(language),
            None,
            body,
        )?;

        // Section pages and item pages.
        for section in Section::ALL {
            let section_items: Vec<_> = items
                .iter()
                .copied()
                .filter(|item| item.section() == section)
                .collect();
            let body = render::section_page_content(config, section, &section_items, language);
            write_document(
                config,
                language,
                &language_root.join(section.slug()).join("index.html"),
                section.title(language),
                config.description.get(language),
                Some(section),
                body,
            )?;

            for item in section_items {
                let body = render::item_page_content(config, item);
                write_document(
                    config,
                    language,
                    &language_root.join(&item.path).join("index.html"),
                    &item.title,
                    config.description.get(language),
                    Some(section),
                    body,
                )?;
            }
        }

        // Synthetic listing pages.
        let mut registry = PageRegistry::new();
        pagination::build_listing_pages(config, &items, language, &mut registry);
        for page in registry.pages() {
            let path = listing_page_path(&language_root, page.index);
            write_document(
                config,
                language,
                &path,
                &page.title,
                &page.description,
                None,
                page.body.clone(),
            )?;
        }

        passes.push(LanguagePass {
            language,
            prefix,
            items: items.len(),
            listing_pages: registry.pages().len(),
        });
    }

    Ok(GenerateSummary { passes })
}

fn listing_page_path(language_root: &Path, index: usize) -> PathBuf {
    language_root
        .join("items")
        .join(index.to_string())
        .join("index.html")
}

/// Wrap a body in the site shell and write it to disk.
fn write_document(
    config: &SiteConfig,
    language: Language,
    path: &Path,
    title: &str,
    description: &str,
    selected: Option<Section>,
    body: Markup,
) -> Result<(), GenerateError> {
    let content = maud::html! {
        (render::site_header(config, language, selected))
        main {
            (body)
        }
        (render::site_footer(config, language))
    };
    let document = render::base_document(config, language, title, description, content);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, document.into_string())?;
    Ok(())
}
