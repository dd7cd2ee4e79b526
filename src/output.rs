//! CLI output formatting.
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! ## Scan
//!
//! ```text
//! en: 12 items
//!     projects: 5
//!     books: 2
//!     career: 3
//!     achievements: 2
//! ru: 11 items
//!     ...
//! ```
//!
//! ## Generate
//!
//! ```text
//! en → /           12 items, 2 listing pages
//! ru → /ru         11 items, 2 listing pages
//! ```

use crate::generate::GenerateSummary;
use crate::model::Section;
use crate::scan::Manifest;

pub fn format_scan_output(manifest: &Manifest) -> Vec<String> {
    let mut lines = Vec::new();
    for &language in &manifest.config.languages {
        let items = manifest.items_for(language);
        lines.push(format!("{}: {} items", language.tag(), items.len()));
        for section in Section::ALL {
            let count = items.iter().filter(|i| i.section() == section).count();
            if count > 0 {
                lines.push(format!("    {}: {}", section.slug(), count));
            }
        }
    }
    lines
}

pub fn print_scan_output(manifest: &Manifest) {
    for line in format_scan_output(manifest) {
        println!("{line}");
    }
}

pub fn format_generate_output(summary: &GenerateSummary) -> Vec<String> {
    summary
        .passes
        .iter()
        .map(|pass| {
            let prefix = if pass.prefix.is_empty() {
                "/"
            } else {
                pass.prefix.as_str()
            };
            format!(
                "{} → {:<8} {} items, {} listing pages",
                pass.language.tag(),
                prefix,
                pass.items,
                pass.listing_pages
            )
        })
        .collect()
}

pub fn print_generate_output(summary: &GenerateSummary) {
    for line in format_generate_output(summary) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate::{GenerateSummary, LanguagePass};
    use crate::language::Language;
    use crate::scan;
    use crate::test_helpers::setup_content;

    #[test]
    fn scan_output_lists_languages_and_sections() {
        let tmp = setup_content();
        let manifest = scan::scan(tmp.path()).unwrap();
        let lines = format_scan_output(&manifest);

        assert!(lines.contains(&"en: 3 items".to_string()));
        assert!(lines.contains(&"ru: 1 items".to_string()));
        assert!(lines.contains(&"    projects: 1".to_string()));
        // Empty sections are not listed.
        assert!(!lines.iter().any(|l| l.contains("events")));
    }

    #[test]
    fn generate_output_shows_prefix_per_language() {
        let summary = GenerateSummary {
            passes: vec![
                LanguagePass {
                    language: Language::English,
                    prefix: String::new(),
                    items: 12,
                    listing_pages: 2,
                },
                LanguagePass {
                    language: Language::Russian,
                    prefix: "/ru".to_string(),
                    items: 11,
                    listing_pages: 2,
                },
            ],
        };
        let lines = format_generate_output(&summary);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("en → /"));
        assert!(lines[0].contains("12 items"));
        assert!(lines[1].starts_with("ru → /ru"));
        assert!(lines[1].contains("2 listing pages"));
    }
}
