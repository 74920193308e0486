//! Outgoing request descriptions.

use crate::domain::{Filter, Result};
use crate::query::{Endpoint, QueryKind, QueryParams, RequestTicket, RequestTracker};

/// A GET request the plugin runtime should issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub ticket: RequestTicket,
    pub url: String,
}

impl FetchRequest {
    /// Builds the request for one query kind, issuing a fresh ticket.
    ///
    /// # Errors
    ///
    /// Propagates query serialization failures.
    pub fn build(
        kind: QueryKind,
        filter: &Filter,
        endpoint: &Endpoint,
        tracker: &mut RequestTracker,
    ) -> Result<Self> {
        let url = endpoint.url(&QueryParams::for_kind(kind, filter))?;
        let ticket = tracker.issue(kind);
        tracing::debug!(kind = %kind, seq = ticket.seq, url = %url, "request planned");
        Ok(Self { ticket, url })
    }

    /// Builds both queries for the current filter: the page first, then the count.
    ///
    /// # Errors
    ///
    /// Propagates query serialization failures.
    pub fn for_filter(
        filter: &Filter,
        endpoint: &Endpoint,
        tracker: &mut RequestTracker,
    ) -> Result<Vec<Self>> {
        QueryKind::ALL
            .into_iter()
            .map(|kind| Self::build(kind, filter, endpoint, tracker))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_queries_are_planned_with_fresh_tickets() {
        let endpoint = Endpoint::new("http://localhost:3004", "data");
        let mut tracker = RequestTracker::default();
        let filter = Filter {
            name: "dark".to_string(),
            page: 2,
        };

        let requests = FetchRequest::for_filter(&filter, &endpoint, &mut tracker).unwrap();

        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].ticket.kind, QueryKind::Cards);
        assert_eq!(
            requests[0].url,
            "http://localhost:3004/data?name_like=dark&_limit=4&_page=2"
        );
        assert_eq!(requests[1].ticket.kind, QueryKind::PageCount);
        assert_eq!(requests[1].url, "http://localhost:3004/data?name_like=dark");

        let again = FetchRequest::for_filter(&filter, &endpoint, &mut tracker).unwrap();
        assert_eq!(again[0].ticket.seq, 2);
        assert_eq!(again[1].ticket.seq, 2);
    }
}
