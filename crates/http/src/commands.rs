//! POST handling for listing pages.
//!
//! A submitted form is matched against [`RULES`] in order and the first rule
//! that yields a [`Command`] wins. Every outcome is a redirect, so reloading a
//! page never resubmits the form.

use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use newsdesk_core::Listing;

use crate::Preferences;
use crate::preferences::{COUNTRY_COOKIE, THEME_COOKIE, preference_cookie};
use crate::query_types::SubmitForm;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    SetCountry(String),
    SetTheme(String),
    NextPage(i64),
    PreviousPage(i64),
}

/// A named predicate over the submitted form.
pub struct Rule {
    pub name: &'static str,
    pub select: fn(&SubmitForm, &Preferences) -> Option<Command>,
}

/// Priority order of form commands.
pub const RULES: [Rule; 5] = [
    Rule { name: "search", select: select_search },
    Rule { name: "country", select: select_country },
    Rule { name: "theme", select: select_theme },
    Rule { name: "next_page", select: select_next_page },
    Rule { name: "previous_page", select: select_previous_page },
];

fn select_search(form: &SubmitForm, _: &Preferences) -> Option<Command> {
    form.search_query.as_ref().filter(|q| !q.is_empty()).cloned().map(Command::Search)
}

fn select_country(form: &SubmitForm, prefs: &Preferences) -> Option<Command> {
    form.country
        .as_ref()
        .filter(|c| prefs.country.as_ref() != Some(*c))
        .cloned()
        .map(Command::SetCountry)
}

fn select_theme(form: &SubmitForm, _: &Preferences) -> Option<Command> {
    form.theme.clone().map(Command::SetTheme)
}

fn select_next_page(form: &SubmitForm, _: &Preferences) -> Option<Command> {
    parse_page_field(form.next_page.as_deref()).map(Command::NextPage)
}

fn select_previous_page(form: &SubmitForm, _: &Preferences) -> Option<Command> {
    parse_page_field(form.previous_page.as_deref()).map(Command::PreviousPage)
}

fn parse_page_field(value: Option<&str>) -> Option<i64> {
    value.and_then(|v| v.trim().parse().ok())
}

/// First matching command and the name of the rule that produced it.
pub fn select(form: &SubmitForm, prefs: &Preferences) -> Option<(&'static str, Command)> {
    RULES.iter().find_map(|rule| (rule.select)(form, prefs).map(|cmd| (rule.name, cmd)))
}

/// Where a POST ends up, plus the cookie it sets on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub location: String,
    pub cookie: Option<(&'static str, String)>,
}

impl Outcome {
    fn redirect(location: String) -> Self {
        Self { location, cookie: None }
    }

    pub fn into_response(self, jar: CookieJar) -> Response {
        let jar = match self.cookie {
            Some((name, value)) => jar.add(preference_cookie(name, value)),
            None => jar,
        };
        (jar, Redirect::to(&self.location)).into_response()
    }
}

impl Command {
    pub fn outcome(self, listing: &Listing, page: i64) -> Outcome {
        match self {
            Self::Search(query) => Outcome::redirect(Listing::search(query).url(1)),
            Self::SetCountry(country) => Outcome {
                location: listing.preference_target().url(1),
                cookie: Some((COUNTRY_COOKIE, country)),
            },
            Self::SetTheme(theme) => Outcome {
                location: listing.preference_target().url(page),
                cookie: Some((THEME_COOKIE, theme)),
            },
            Self::NextPage(current) => Outcome::redirect(listing.url(current.saturating_add(1))),
            Self::PreviousPage(current) => {
                Outcome::redirect(listing.url(current.saturating_sub(1)))
            },
        }
    }
}

/// Resolve a submitted form on `listing` at `page`.
///
/// With no matching rule the client is sent back to the page it posted from.
pub fn resolve(form: &SubmitForm, prefs: &Preferences, listing: &Listing, page: i64) -> Outcome {
    match select(form, prefs) {
        Some((rule, command)) => {
            tracing::debug!(rule, ?command, "form command selected");
            command.outcome(listing, page)
        },
        None => Outcome::redirect(listing.url(page)),
    }
}
