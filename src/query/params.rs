//! Typed query parameters and endpoint URLs.
//!
//! Query strings are produced by serializing [`QueryParams`] with
//! `serde_html_form`, so parameter order is fixed by field order
//! (`name_like`, `_limit`, `_page`) and values are percent-encoded.

use crate::domain::{Filter, Result, PAGE_SIZE};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// The two read queries the plugin issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum QueryKind {
    /// A single page of cards.
    Cards,
    /// All matches, counted to derive the page list.
    PageCount,
}

impl QueryKind {
    pub const ALL: [Self; 2] = [Self::Cards, Self::PageCount];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::PageCount => "page_count",
        }
    }
}

impl fmt::Display for QueryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QueryKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "cards" => Ok(Self::Cards),
            "page_count" => Ok(Self::PageCount),
            other => Err(format!("unknown query kind '{other}'")),
        }
    }
}

/// Query-string parameters understood by the endpoint.
///
/// Absent parameters are omitted from the query string entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,

    #[serde(rename = "_limit", skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    #[serde(rename = "_page", skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl QueryParams {
    /// Parameters for the given query kind under `filter`.
    #[must_use]
    pub fn for_kind(kind: QueryKind, filter: &Filter) -> Self {
        match kind {
            QueryKind::Cards => Self::cards(filter),
            QueryKind::PageCount => Self::page_count(filter),
        }
    }

    /// Page slice: `name_like` iff a term is set, `_limit` always, `_page` iff positive.
    #[must_use]
    pub fn cards(filter: &Filter) -> Self {
        Self {
            name_like: Self::name_param(filter),
            limit: Some(PAGE_SIZE),
            page: (filter.page > 0).then_some(filter.page),
        }
    }

    /// Full match set: only `name_like`, and only if a term is set.
    #[must_use]
    pub fn page_count(filter: &Filter) -> Self {
        Self {
            name_like: Self::name_param(filter),
            limit: None,
            page: None,
        }
    }

    fn name_param(filter: &Filter) -> Option<String> {
        (!filter.is_unfiltered()).then(|| filter.name.clone())
    }

    /// Encodes the parameters as an `application/x-www-form-urlencoded` string.
    ///
    /// # Errors
    ///
    /// Returns [`CardSearchError::Query`](crate::domain::CardSearchError::Query)
    /// if serialization fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardsearch::domain::Filter;
    /// use cardsearch::query::QueryParams;
    ///
    /// let filter = Filter { name: "cyber".to_string(), page: 1 };
    /// let query = QueryParams::cards(&filter).to_query_string()?;
    /// assert_eq!(query, "name_like=cyber&_limit=4&_page=1");
    /// # Ok::<(), cardsearch::CardSearchError>(())
    /// ```
    pub fn to_query_string(&self) -> Result<String> {
        Ok(serde_html_form::to_string(self)?)
    }
}

/// Base URL plus collection path of the card endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base_url: String,
    collection: String,
}

impl Endpoint {
    /// Creates an endpoint, trimming stray slashes at the join point.
    #[must_use]
    pub fn new(base_url: &str, collection: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            collection: collection.trim_matches('/').to_string(),
        }
    }

    /// `<base>/<collection>` without a query string.
    #[must_use]
    pub fn collection_url(&self) -> String {
        format!("{}/{}", self.base_url, self.collection)
    }

    /// Full request URL; the `?` is left out when there are no parameters.
    ///
    /// # Errors
    ///
    /// Propagates query serialization failures.
    pub fn url(&self, params: &QueryParams) -> Result<String> {
        let query = params.to_query_string()?;
        if query.is_empty() {
            Ok(self.collection_url())
        } else {
            Ok(format!("{}?{query}", self.collection_url()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(name: &str, page: u32) -> Filter {
        Filter {
            name: name.to_string(),
            page,
        }
    }

    #[test]
    fn initial_cards_query_has_no_name() {
        let query = QueryParams::cards(&Filter::default()).to_query_string().unwrap();
        assert_eq!(query, "_limit=4&_page=1");
    }

    #[test]
    fn cards_query_with_name_and_page() {
        let query = QueryParams::cards(&filter("cyber", 3)).to_query_string().unwrap();
        assert_eq!(query, "name_like=cyber&_limit=4&_page=3");
    }

    #[test]
    fn page_zero_is_left_out() {
        let query = QueryParams::cards(&filter("", 0)).to_query_string().unwrap();
        assert_eq!(query, "_limit=4");
    }

    #[test]
    fn page_count_query_carries_only_the_name() {
        assert_eq!(
            QueryParams::page_count(&filter("", 5)).to_query_string().unwrap(),
            ""
        );
        assert_eq!(
            QueryParams::page_count(&filter("blue-eyes", 5)).to_query_string().unwrap(),
            "name_like=blue-eyes"
        );
    }

    #[test]
    fn names_are_percent_encoded() {
        let query = QueryParams::page_count(&filter("a&b=c", 1)).to_query_string().unwrap();
        assert_eq!(query, "name_like=a%26b%3Dc");
    }

    #[test]
    fn endpoint_urls() {
        let endpoint = Endpoint::new("http://localhost:3004/", "/data");
        assert_eq!(endpoint.collection_url(), "http://localhost:3004/data");
        assert_eq!(
            endpoint.url(&QueryParams::page_count(&Filter::default())).unwrap(),
            "http://localhost:3004/data"
        );
        assert_eq!(
            endpoint.url(&QueryParams::cards(&Filter::default())).unwrap(),
            "http://localhost:3004/data?_limit=4&_page=1"
        );
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in QueryKind::ALL {
            assert_eq!(kind.as_str().parse::<QueryKind>(), Ok(kind));
        }
        assert!("cardz".parse::<QueryKind>().is_err());
    }
}
