//! Server-side HTML for listing, unauthorized and error pages.
//!
//! The listing page posts every control back to its own URL; the command
//! dispatcher in `commands` turns the POST into a redirect. Every dynamic
//! value is escaped by maud.

use axum::http::StatusCode;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use newsdesk_core::{Article, Listing, display_pages};

use crate::Preferences;

/// Embedded stylesheet shared by every page, light and dark themes.
pub const STYLESHEET: &str = include_str!("listing.css");

/// Everything the listing page shows.
pub struct IndexPage<'a> {
    pub site_title: &'a str,
    pub listing: &'a Listing,
    pub articles: &'a [Article],
    pub page: i64,
    /// True page count; the page caps its controls with [`display_pages`].
    pub pages: u64,
    pub categories: &'a [String],
    pub countries: &'a [String],
    pub preferences: &'a Preferences,
}

/// Only plain web links are emitted as `href`s.
fn is_web_url(url: &str) -> bool {
    ["http://", "https://"]
        .iter()
        .any(|scheme| url.get(..scheme.len()).is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme)))
}

fn document(title: &str, theme: &str, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                style { (PreEscaped(STYLESHEET)) }
            }
            body class=(format!("theme-{theme}")) { (body) }
        }
    }
}

pub fn render_index(view: &IndexPage<'_>) -> Markup {
    let here = view.listing.url(view.page);
    let theme = view.preferences.theme.as_str();
    let toggled = if theme == "dark" { "light" } else { "dark" };

    let body = html! {
        header {
            h1 { (view.site_title) }
            form method="post" action=(here) {
                input type="search" name="search_query" placeholder="Search headlines"
                    value=(view.listing.query().unwrap_or(""));
                button type="submit" { "Search" }
            }
            form method="post" action=(here) {
                select name="country" {
                    @if view.preferences.country.is_none() {
                        option value="" selected { "Country" }
                    }
                    @for code in view.countries {
                        option value=(code)
                            selected[view.preferences.country.as_deref() == Some(code.as_str())] {
                            (code.to_uppercase())
                        }
                    }
                }
                button type="submit" { "Apply" }
            }
            form method="post" action=(here) {
                button type="submit" name="theme" value=(toggled) { (toggled) " theme" }
            }
        }
        nav {
            @for category in view.categories {
                @let active = (view.listing.active_category() == category.as_str()).then_some("active");
                a href=(Listing::category(category.clone()).url(1)) class=[active] {
                    (category)
                }
            }
        }
        main {
            @if view.articles.is_empty() {
                p.empty { "No articles found." }
            } @else {
                ol.articles {
                    @for article in view.articles {
                        li {
                            @if is_web_url(&article.url) {
                                a href=(article.url) target="_blank" rel="noopener noreferrer" {
                                    (article.title)
                                }
                            } @else {
                                span { (article.title) }
                            }
                        }
                    }
                }
            }
            (render_pagination(view, &here))
        }
    };

    let title = match view.listing {
        Listing::Category(name) => format!("{} · {name}", view.site_title),
        Listing::Search(query) => format!("{} · search: {query}", view.site_title),
    };
    document(&title, theme, body)
}

fn render_pagination(view: &IndexPage<'_>, here: &str) -> Markup {
    let shown = display_pages(view.pages);
    let current = u64::try_from(view.page).ok();
    let has_next = current.is_some_and(|p| p < shown);
    html! {
        @if shown > 0 {
            div.pagination {
                @if view.page > 1 {
                    form method="post" action=(here) {
                        button type="submit" name="previous_page" value=(view.page) { "« Previous" }
                    }
                }
                @for n in 1..=shown {
                    @if current == Some(n) {
                        span.current { (n) }
                    } @else {
                        a href=(view.listing.url(i64::try_from(n).unwrap_or(i64::MAX))) { (n) }
                    }
                }
                @if has_next {
                    form method="post" action=(here) {
                        button type="submit" name="next_page" value=(view.page) { "Next »" }
                    }
                }
            }
        }
    }
}

pub fn render_unauthorized(site_title: &str) -> Markup {
    let body = html! {
        main {
            h1 { (site_title) }
            p { "The news service rejected this server's credentials (401 Unauthorized)." }
            p { "Check the configured API key and restart the server." }
        }
    };
    document(&format!("{site_title} · unauthorized"), "light", body)
}

pub fn render_error(status: StatusCode, message: &str) -> Markup {
    let code = status.to_string();
    let body = html! {
        main {
            h1 { (code) }
            p { (message) }
            p { a href="/" { "Back to headlines" } }
        }
    };
    document(&code, "light", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<String> {
        vec!["general".into(), "science".into()]
    }

    fn render_articles(articles: &[Article], listing: &Listing, page: i64, pages: u64, prefs: &Preferences) -> String {
        let cats = categories();
        let countries = vec!["us".to_owned(), "fr".to_owned()];
        render_index(&IndexPage {
            site_title: "Newsdesk",
            listing,
            articles,
            page,
            pages,
            categories: &cats,
            countries: &countries,
            preferences: prefs,
        })
        .into_string()
    }

    fn render(listing: &Listing, page: i64, pages: u64, prefs: &Preferences) -> String {
        let articles = vec![Article { title: "Rust <1.0> & friends".into(), url: "https://n.test/a?b=1&c=2".into() }];
        render_articles(&articles, listing, page, pages, prefs)
    }

    #[test]
    fn test_article_fields_are_escaped() {
        let html = render(&Listing::category("science"), 1, 1, &Preferences::default());
        assert!(html.contains("Rust &lt;1.0&gt; &amp; friends"));
        assert!(html.contains("href=\"https://n.test/a?b=1&amp;c=2\""));
    }

    #[test]
    fn test_script_url_rendered_as_plain_text() {
        let articles = vec![
            Article { title: "Sneaky".into(), url: "javascript:alert(document.cookie)".into() },
            Article { title: "Upper".into(), url: "HTTPS://n.test/upper".into() },
        ];
        let html = render_articles(&articles, &Listing::category("science"), 1, 1, &Preferences::default());
        assert!(!html.contains("javascript:"));
        assert!(html.contains("<span>Sneaky</span>"));
        assert!(html.contains("href=\"HTTPS://n.test/upper\""));
    }

    #[test]
    fn test_web_url_schemes() {
        assert!(is_web_url("http://a.test"));
        assert!(is_web_url("https://a.test"));
        assert!(!is_web_url("data:text/html,hi"));
        assert!(!is_web_url(" javascript:x"));
        assert!(!is_web_url(""));
    }

    #[test]
    fn test_page_links_capped_at_twelve() {
        let html = render(&Listing::category("science"), 1, 40, &Preferences::default());
        assert!(html.contains("/category/science?page=12"));
        assert!(!html.contains("/category/science?page=13"));
    }

    #[test]
    fn test_first_page_has_no_previous_button() {
        let html = render(&Listing::category("science"), 1, 3, &Preferences::default());
        assert!(!html.contains("previous_page"));
        assert!(html.contains("name=\"next_page\" value=\"1\""));
    }

    #[test]
    fn test_last_page_has_no_next_button() {
        let html = render(&Listing::search("rust"), 3, 3, &Preferences::default());
        assert!(html.contains("name=\"previous_page\" value=\"3\""));
        assert!(!html.contains("next_page"));
        assert!(html.contains("<span class=\"current\">3</span>"));
    }

    #[test]
    fn test_active_category_and_country_selected() {
        let prefs = Preferences { country: Some("fr".into()), theme: "dark".into() };
        let html = render(&Listing::category("science"), 1, 1, &prefs);
        assert!(html.contains("<a href=\"/category/science?page=1\" class=\"active\">science</a>"));
        assert!(html.contains("<option value=\"fr\" selected>FR</option>"));
        assert!(html.contains("<body class=\"theme-dark\">"));
        assert!(html.contains("name=\"theme\" value=\"light\""));
    }

    #[test]
    fn test_search_query_prefilled() {
        let html = render(&Listing::search("rust \"lang\""), 1, 1, &Preferences::default());
        assert!(html.contains("value=\"rust &quot;lang&quot;\""));
    }

    #[test]
    fn test_no_results_message() {
        let html = render_articles(&[], &Listing::category("general"), 1, 0, &Preferences::default());
        assert!(html.contains("No articles found."));
        assert!(!html.contains("class=\"pagination\""));
    }

    #[test]
    fn test_error_page_shows_status() {
        let html = render_error(StatusCode::BAD_GATEWAY, "down").into_string();
        assert!(html.contains("502 Bad Gateway"));
        assert!(html.contains("<p>down</p>"));
    }
}
