//! Request/query types (Deserialize)

use serde::Deserialize;

/// `?page=` on listing routes.
///
/// Built from the raw query pairs so that a repeated or non-integer value
/// falls back instead of rejecting the request.
#[derive(Debug, Default)]
pub struct PageQuery {
    pub page: Option<String>,
}

impl PageQuery {
    /// The first `page` pair wins; repeats are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { page: pairs.into_iter().find_map(|(key, value)| (key == "page").then_some(value)) }
    }

    pub fn page(&self) -> i64 {
        self.page.as_deref().and_then(|p| p.trim().parse().ok()).unwrap_or(1)
    }
}

/// Fields a listing page can POST. At most one of them acts; see `commands`.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitForm {
    pub search_query: Option<String>,
    pub country: Option<String>,
    pub theme: Option<String>,
    pub next_page: Option<String>,
    pub previous_page: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: Option<&str>) -> PageQuery {
        PageQuery { page: page.map(str::to_owned) }
    }

    #[test]
    fn test_page_defaults_to_one() {
        assert_eq!(query(None).page(), 1);
    }

    #[test]
    fn test_page_parses_negative() {
        assert_eq!(query(Some("-2")).page(), -2);
    }

    #[test]
    fn test_first_page_pair_wins() {
        let pairs = vec![
            ("sort".to_owned(), "new".to_owned()),
            ("page".to_owned(), "2".to_owned()),
            ("page".to_owned(), "3".to_owned()),
        ];
        assert_eq!(PageQuery::from_pairs(pairs).page(), 2);
        assert_eq!(PageQuery::from_pairs(Vec::new()).page(), 1);
    }

    #[test]
    fn test_non_integer_page_is_one() {
        assert_eq!(query(Some("abc")).page(), 1);
        assert_eq!(query(Some("2.5")).page(), 1);
        assert_eq!(query(Some("")).page(), 1);
    }
}
