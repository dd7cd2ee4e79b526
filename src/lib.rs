//! # polyfolio
//!
//! A multi-language static site generator for personal portfolios. Content
//! items — projects, books, events, career entries, achievements — are
//! markdown files with TOML front matter, organized per language and
//! section; the output is a bilingual static HTML site.
//!
//! # Architecture: Two-Stage Pipeline
//!
//! ```text
//! 1. Scan      content/  →  Manifest       (filesystem → typed items)
//! 2. Generate  Manifest  →  dist/          (final HTML site, per language)
//! ```
//!
//! The manifest serializes to JSON (`polyfolio scan`) so a build can be
//! inspected halfway through, and the generate stage's inner renderers are
//! pure functions from items to markup — unit tests exercise pagination and
//! rendering without touching the filesystem.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks the content tree, parses front matter, produces the manifest |
//! | [`generate`] | Stage 2 — renders the site shell and writes every page, one pass per language |
//! | [`config`] | `config.toml` loading and validation; the one immutable config object |
//! | [`language`] | `Language` enum, localized UI string tables, date formatting |
//! | [`model`] | `Item`, `Section`, and the per-section metadata sum type |
//! | [`pagination`] | Splits the date-sorted item list into `/items/{n}` pages |
//! | [`render`] | Pure maud renderers: item cards, subheaders, page shell, listing bodies |
//! | [`output`] | CLI output formatting — pure `format_*` functions plus print wrappers |
//!
//! # Design Decisions
//!
//! ## Metadata as a Sum Type
//!
//! Each of the five sections carries its own metadata shape. Those shapes
//! live in one [`model::SectionMetadata`] enum rather than five optional
//! fields: an item cannot carry book metadata in the projects section, the
//! subheader dispatch is exhaustive, and adding a section without handling
//! its rendering is a compile error.
//!
//! ## One String Table per Language
//!
//! Every localized UI string lives in [`language::strings`]. Renderers never
//! branch on language themselves; they look up the table. Adding a language
//! is an enum variant plus one table entry.
//!
//! ## Explicit Default-Language Prefix Rule
//!
//! Whether the default language gets a `/{tag}` path prefix is a config
//! option (`prefix_default_language`), not an inference. The deployed site
//! serves the default language at the root and everything else under its
//! prefix; flipping one flag prefixes everything.
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/), a compile-time
//! HTML macro system. Malformed HTML is a build error, template variables
//! are Rust expressions, and all interpolation is auto-escaped — the only
//! `PreEscaped` content is pulldown-cmark output.

pub mod config;
pub mod generate;
pub mod language;
pub mod model;
pub mod output;
pub mod pagination;
pub mod render;
pub mod scan;

#[cfg(test)]
pub(crate) mod test_helpers;
