//! Response validation and decoding.
//!
//! A response only counts as successful when the status is 2xx and the body
//! is a JSON array. Anything else is a Fetch-Failure, reported as a
//! [`CardSearchError`] for the handler to swallow.

use crate::domain::{Card, CardSearchError, Result};
use crate::query::RequestTicket;
use serde::de::IgnoredAny;
use std::collections::BTreeMap;

/// A resolved request as delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    pub ticket: RequestTicket,
    pub status: u16,
    pub body: Vec<u8>,
}

impl FetchResponse {
    /// Pairs a host result with the ticket found in its context.
    ///
    /// # Errors
    ///
    /// Returns [`CardSearchError::Context`] when the context carries no ticket.
    pub fn from_host(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Result<Self> {
        let ticket = RequestTicket::from_context(context)?;
        Ok(Self { ticket, status, body })
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self.status, 200..=299)
    }

    fn ensure_success(&self) -> Result<()> {
        if self.is_success() {
            Ok(())
        } else {
            Err(CardSearchError::Http {
                status: self.status,
            })
        }
    }

    /// Decodes a page of cards.
    ///
    /// # Errors
    ///
    /// [`CardSearchError::Http`] for non-2xx statuses,
    /// [`CardSearchError::Decode`] when the body is not an array of cards.
    pub fn decode_cards(&self) -> Result<Vec<Card>> {
        self.ensure_success()?;
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Counts the records in the body without decoding them.
    ///
    /// # Errors
    ///
    /// [`CardSearchError::Http`] for non-2xx statuses,
    /// [`CardSearchError::Decode`] when the body is not a JSON array.
    pub fn decode_count(&self) -> Result<usize> {
        self.ensure_success()?;
        let records: Vec<IgnoredAny> = serde_json::from_slice(&self.body)?;
        Ok(records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::QueryKind;

    fn response(kind: QueryKind, status: u16, body: &str) -> FetchResponse {
        FetchResponse {
            ticket: RequestTicket { kind, seq: 1 },
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn decodes_card_page() {
        let body = r#"[
            {"name": "Cyber Dragon", "desc": "Machine", "card_images": [{"image_url_small": "s1"}]},
            {"name": "Cyber Twin Dragon", "desc": "Fusion", "card_images": []}
        ]"#;
        let cards = response(QueryKind::Cards, 200, body).decode_cards().unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].name, "Cyber Dragon");
        assert_eq!(cards[1].thumbnail_url(), None);
    }

    #[test]
    fn counts_records_of_any_shape() {
        let count = response(QueryKind::PageCount, 200, r#"[{"name": "a"}, {"x": 1}, 3]"#)
            .decode_count()
            .unwrap();
        assert_eq!(count, 3);
    }

    #[test]
    fn non_success_status_is_a_fetch_failure() {
        let err = response(QueryKind::Cards, 404, "[]").decode_cards().unwrap_err();
        assert!(matches!(err, CardSearchError::Http { status: 404 }));
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn malformed_body_is_a_fetch_failure() {
        let err = response(QueryKind::PageCount, 200, r#"{"data": []}"#)
            .decode_count()
            .unwrap_err();
        assert!(matches!(err, CardSearchError::Decode(_)));
        assert!(err.is_fetch_failure());
    }

    #[test]
    fn ticket_is_read_from_context() {
        let ticket = RequestTicket {
            kind: QueryKind::Cards,
            seq: 4,
        };
        let parsed = FetchResponse::from_host(200, b"[]".to_vec(), &ticket.to_context()).unwrap();
        assert_eq!(parsed.ticket, ticket);
        assert!(FetchResponse::from_host(200, vec![], &BTreeMap::new()).is_err());
    }
}
