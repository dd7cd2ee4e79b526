//! HTML node rendering.
//!
//! Pure functions from items and site context to [maud](https://maud.lambda.xyz/)
//! markup — no I/O, no state. The generate stage composes these into full
//! documents and writes them out.
//!
//! ## Components
//!
//! - **Page shell**: [`base_document`], [`site_header`], [`site_footer`] —
//!   avatar, localized title/subtitle, section navigation with the active
//!   section marked `selected`, attribution + RSS footer.
//! - **Item card**: [`item_card`] — logo + title link + section-specific
//!   subheader, markdown description, a responsive single image rendered
//!   twice (shown/hidden by breakpoint classes over the same resource),
//!   tag list and formatted date range.
//! - **Subheader dispatch**: a closed five-way match on the item's
//!   metadata variant. Adding a section means adding a metadata variant
//!   *and* a match arm here; the compiler keeps the two in lock-step.
//! - **Listing page content**: [`items_page_content`] — the body of the
//!   synthetic `/items/{n}` pages, with Back/Page/Next navigation.
//!
//! All functions are total over well-formed items. Missing optional
//! metadata (no logo, no event location) silently omits that fragment.

use maud::{html, Markup, PreEscaped, DOCTYPE};
use pulldown_cmark::{html as md_html, Parser};

use crate::config::SiteConfig;
use crate::language::{short_date, strings, Language};
use crate::model::{Item, Section, SectionMetadata};

/// Convert a markdown string to an HTML string.
///
/// Thin wrapper over pulldown-cmark; the markdown engine is a collaborator,
/// not something this crate reimplements.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}

/// Renders the base HTML document structure.
pub fn base_document(
    config: &SiteConfig,
    language: Language,
    title: &str,
    description: &str,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(language.tag()) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(description);
                title { (title) }
                link rel="stylesheet" href="/styles.css";
                link rel="icon" href=(config.avatar);
            }
            body {
                (content)
            }
        }
    }
}

/// Renders the site-wide header: avatar, title column, section navigation.
///
/// The active section link gets the `selected` class.
pub fn site_header(
    config: &SiteConfig,
    language: Language,
    selected: Option<Section>,
) -> Markup {
    html! {
        header {
            div.wrapper {
                img.logo src=(config.avatar) alt=(config.title.get(language));
                div.logo-column {
                    a href=(config.prefixed(language, "/")) {
                        p.logo-title { (config.title.get(language)) }
                        p.logo-subtitle { (config.subtitle.get(language)) }
                    }
                }
                div.header-right {
                    @for section in Section::ALL {
                        a class=[(selected == Some(section)).then_some("selected")]
                            href=(config.prefixed(language, &section.path())) {
                            (section.title(language))
                        }
                    }
                }
            }
        }
    }
}

/// Renders the site-wide footer: attribution and RSS link.
pub fn site_footer(config: &SiteConfig, language: Language) -> Markup {
    let s = strings(language);
    html! {
        footer {
            p {
                (s.generated_with) " "
                a href="https://github.com/coolone-ru/polyfolio" { "polyfolio" }
            }
            p {
                a href=(config.prefixed(language, "/feed.rss")) { (s.rss_feed) }
            }
        }
    }
}

/// The formatted date range shown on an item card footer.
///
/// Start date in the locale's short style; `" — "` plus the end date when
/// it parses; otherwise, for career items only, the localized "present"
/// marker.
pub fn date_range(item: &Item) -> String {
    let mut out = short_date(&item.date, item.language);
    if let Some(end) = item.metadata.parsed_end_date() {
        out.push_str(" — ");
        out.push_str(&short_date(&end, item.language));
    } else if item.section() == Section::Career {
        out.push_str(" — ");
        out.push_str(strings(item.language).present);
    }
    out
}

/// Renders a `ul` of item cards.
pub fn item_list(config: &SiteConfig, items: &[&Item], show_section: bool) -> Markup {
    html! {
        ul.item-list {
            @for item in items {
                (item_card(config, item, show_section))
            }
        }
    }
}

/// Renders one item as a card: header, description, responsive single
/// image, footer.
pub fn item_card(config: &SiteConfig, item: &Item, show_section: bool) -> Markup {
    html! {
        li {
            article {
                div.row."justify-content-center" {
                    div.col {
                        (item_header(config, item, show_section))
                        div.item-description {
                            (PreEscaped(markdown_to_html(&item.description)))
                        }
                        (single_image(item, false))
                        (item_footer(config, item))
                    }
                    div."col-sm-auto" {
                        div."ml-sm-3"."ml-0" {
                            (single_image(item, true))
                        }
                    }
                }
            }
        }
    }
}

/// The single showcase image, rendered at one of the two breakpoints.
///
/// The card emits this twice over the same underlying resource: once shown
/// only on small screens, once only on large ones. Items without a
/// `single_image` extension render nothing.
fn single_image(item: &Item, hide_on_small: bool) -> Markup {
    let display = if hide_on_small {
        "d-none d-sm-block"
    } else {
        "d-block d-sm-none"
    };
    html! {
        @if let Some(ext) = &item.metadata.single_image {
            div class={ "my-3 my-sm-0 " (display) } {
                img.item-single-image src=(item.image_src("cover", ext, true)) alt="";
            }
        }
    }
}

/// Card header: logo image plus title link and subheader.
fn item_header(config: &SiteConfig, item: &Item, show_section: bool) -> Markup {
    let href = config.prefixed(item.language, &format!("/{}", item.path));
    html! {
        div.row {
            div."col-auto" {
                @if let Some(ext) = &item.metadata.logo {
                    img.item-logo src=(item.image_src("logo", ext, true)) alt="";
                }
            }
            div."col-md" {
                h1 {
                    a href=(href) { (item.title) }
                }
                (subheader(config, item, show_section))
            }
        }
    }
}

/// Section-specific subheader content. Closed five-way dispatch on the
/// metadata variant.
pub fn subheader(config: &SiteConfig, item: &Item, show_section: bool) -> Markup {
    let language = item.language;
    let section = item.section();
    html! {
        div {
            @if show_section {
                h4 {
                    a href=(config.prefixed(language, &section.path())) {
                        (section.title(language))
                    }
                }
            }
            (subheader_details(item))
        }
    }
}

fn subheader_details(item: &Item) -> Markup {
    let language = item.language;
    match &item.metadata.section {
        SectionMetadata::Project(project) => html! {
            div.row."mt-1" {
                @for platform in &project.platforms {
                    div."col-auto" {
                        img.icon src=(platform.icon()) alt="icon";
                    }
                }
                div.col {
                    h4 { (project.kind.label(language)) }
                }
            }
            @if !project.marketplaces.is_empty() {
                div.row."mt-1" {
                    div."col-auto" {
                        h4 { (strings(language).available_on) }
                    }
                    @for link in &project.marketplaces {
                        div."col-auto" {
                            a href=(link.url) {
                                img.icon src=(link.store.icon()) alt="icon";
                            }
                        }
                    }
                }
            }
        },
        SectionMetadata::Book(book) => html! {
            h4 { (book.author) }
        },
        SectionMetadata::Event(event) => html! {
            @if let Some(location) = &event.location {
                h4 { (location) }
            }
        },
        SectionMetadata::Career(career) => html! {
            h4 { (career.position) ", " (career.employment.label(language)) }
        },
        SectionMetadata::Achievement(achievement) => html! {
            h4 { (achievement.kind.label(language)) }
        },
    }
}

/// Card footer: tag list on the left, date range on the right.
fn item_footer(config: &SiteConfig, item: &Item) -> Markup {
    html! {
        div.row {
            div.col {
                (tag_list(config, item))
            }
            div."col-auto" {
                span.item-date { (date_range(item)) }
            }
        }
    }
}

fn tag_list(config: &SiteConfig, item: &Item) -> Markup {
    html! {
        ul.tag-list {
            @for tag in &item.tags {
                li {
                    a href=(config.prefixed(item.language, &format!("/tags/{}", tag_slug(tag)))) {
                        (tag)
                    }
                }
            }
        }
    }
}

fn tag_slug(tag: &str) -> String {
    tag.to_lowercase().replace(' ', "-")
}

/// Pagination navigation row: Back / "Page {n}" / Next.
///
/// Page 1 suppresses the Back link; the last page suppresses Next.
fn pagination_nav(
    config: &SiteConfig,
    language: Language,
    page_index: usize,
    last_page: bool,
) -> Markup {
    let s = strings(language);
    html! {
        div style="margin: 10px" {
            table {
                tr {
                    th.pagination-prev {
                        @if page_index > 1 {
                            a href=(config.prefixed(language, &format!("/items/{}", page_index - 1))) {
                                (s.back)
                            }
                        }
                    }
                    th.pagination-title {
                        h4 { (s.page) " " (page_index) }
                    }
                    th.pagination-next {
                        @if !last_page {
                            a href=(config.prefixed(language, &format!("/items/{}", page_index + 1))) {
                                (s.next)
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Body of one synthetic `/items/{n}` listing page.
pub fn items_page_content(
    config: &SiteConfig,
    items: &[&Item],
    language: Language,
    page_index: usize,
    last_page: bool,
) -> Markup {
    html! {
        div {
            h1 { (strings(language).latest_posts) }
            (pagination_nav(config, language, page_index, last_page))
            (item_list(config, items, true))
            (pagination_nav(config, language, page_index, last_page))
        }
    }
}

/// Body of the home page: latest posts plus a link into the full listing.
pub fn index_page_content(config: &SiteConfig, items: &[&Item], language: Language) -> Markup {
    let s = strings(language);
    let window = &items[..items.len().min(crate::pagination::PAGE_SIZE)];
    html! {
        div {
            h1 { (s.latest_posts) }
            (item_list(config, window, true))
            @if !items.is_empty() {
                p {
                    a href=(config.prefixed(language, "/items/1")) { (s.all_posts_title) }
                }
            }
        }
    }
}

/// Body of one section listing page.
pub fn section_page_content(
    config: &SiteConfig,
    section: Section,
    items: &[&Item],
    language: Language,
) -> Markup {
    html! {
        div {
            h1 { (section.title(language)) }
            (item_list(config, items, false))
        }
    }
}

/// Body of an individual item page.
pub fn item_page_content(config: &SiteConfig, item: &Item) -> Markup {
    html! {
        article {
            (item_header(config, item, true))
            div.item-description {
                (PreEscaped(markdown_to_html(&item.description)))
            }
            @if let Some(ext) = &item.metadata.single_image {
                img.item-single-image src=(item.image_src("cover", ext, false)) alt=(item.title);
            }
            (item_footer(config, item))
        }
    }
}
