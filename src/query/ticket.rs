//! Request sequencing.
//!
//! Every issued request gets a [`RequestTicket`] with a per-kind sequence
//! number that only grows. Overlapping requests are never cancelled, so
//! responses can resolve out of order; the [`RequestTracker`] together with a
//! [`StalePolicy`] decides whether a resolved response may still be applied.

use crate::domain::{CardSearchError, Result};
use crate::query::QueryKind;
use std::collections::BTreeMap;
use std::str::FromStr;

const CONTEXT_KIND: &str = "kind";
const CONTEXT_SEQ: &str = "seq";

/// Identifies one issued request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestTicket {
    pub kind: QueryKind,
    pub seq: u64,
}

impl RequestTicket {
    /// Encodes the ticket into a host request context map.
    #[must_use]
    pub fn to_context(self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (CONTEXT_KIND.to_string(), self.kind.as_str().to_string()),
            (CONTEXT_SEQ.to_string(), self.seq.to_string()),
        ])
    }

    /// Recovers a ticket from the context map echoed back with a result.
    ///
    /// # Errors
    ///
    /// Returns [`CardSearchError::Context`] if either key is missing or malformed.
    pub fn from_context(context: &BTreeMap<String, String>) -> Result<Self> {
        let kind = context
            .get(CONTEXT_KIND)
            .ok_or_else(|| CardSearchError::Context("missing query kind".to_string()))?
            .parse::<QueryKind>()
            .map_err(CardSearchError::Context)?;
        let seq = context
            .get(CONTEXT_SEQ)
            .ok_or_else(|| CardSearchError::Context("missing sequence number".to_string()))?
            .parse::<u64>()
            .map_err(|e| CardSearchError::Context(format!("invalid sequence number: {e}")))?;
        Ok(Self { kind, seq })
    }
}

/// What to do with a response whose request has since been superseded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StalePolicy {
    /// Drop it; only the newest request of each kind may update state.
    #[default]
    Discard,
    /// Apply it anyway; whichever response resolves last wins.
    Accept,
}

impl FromStr for StalePolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "discard" => Ok(Self::Discard),
            "accept" => Ok(Self::Accept),
            other => Err(format!("unknown stale response policy '{other}'")),
        }
    }
}

/// Hands out tickets and remembers the newest one per query kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestTracker {
    latest: BTreeMap<QueryKind, u64>,
}

impl RequestTracker {
    /// Issues the next ticket for `kind`. Sequence numbers start at 1.
    pub fn issue(&mut self, kind: QueryKind) -> RequestTicket {
        let seq = self.latest.entry(kind).or_insert(0);
        *seq += 1;
        RequestTicket { kind, seq: *seq }
    }

    /// Sequence number of the newest ticket issued for `kind` (0 if none).
    #[must_use]
    pub fn latest(&self, kind: QueryKind) -> u64 {
        self.latest.get(&kind).copied().unwrap_or(0)
    }

    /// Returns `true` if no newer request of the same kind has been issued.
    #[must_use]
    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        ticket.seq >= self.latest(ticket.kind)
    }

    /// Decides whether a resolved response may be applied under `policy`.
    ///
    /// Tickets that were never issued by this tracker are always rejected.
    #[must_use]
    pub fn admits(&self, ticket: RequestTicket, policy: StalePolicy) -> bool {
        if ticket.seq == 0 || ticket.seq > self.latest(ticket.kind) {
            return false;
        }
        match policy {
            StalePolicy::Discard => self.is_current(ticket),
            StalePolicy::Accept => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_numbers_grow_per_kind() {
        let mut tracker = RequestTracker::default();
        assert_eq!(tracker.issue(QueryKind::Cards).seq, 1);
        assert_eq!(tracker.issue(QueryKind::Cards).seq, 2);
        assert_eq!(tracker.issue(QueryKind::PageCount).seq, 1);
        assert_eq!(tracker.latest(QueryKind::Cards), 2);
    }

    #[test]
    fn superseded_tickets_are_discarded_by_default() {
        let mut tracker = RequestTracker::default();
        let old = tracker.issue(QueryKind::Cards);
        let new = tracker.issue(QueryKind::Cards);
        let count = tracker.issue(QueryKind::PageCount);

        assert!(!tracker.admits(old, StalePolicy::Discard));
        assert!(tracker.admits(new, StalePolicy::Discard));
        assert!(tracker.admits(count, StalePolicy::Discard));
        assert!(tracker.admits(old, StalePolicy::Accept));
    }

    #[test]
    fn unknown_tickets_are_rejected() {
        let tracker = RequestTracker::default();
        let forged = RequestTicket {
            kind: QueryKind::Cards,
            seq: 5,
        };
        assert!(!tracker.admits(forged, StalePolicy::Accept));
    }

    #[test]
    fn context_round_trip() {
        let ticket = RequestTicket {
            kind: QueryKind::PageCount,
            seq: 17,
        };
        assert_eq!(RequestTicket::from_context(&ticket.to_context()).unwrap(), ticket);
    }

    #[test]
    fn malformed_context_is_an_error() {
        let missing = BTreeMap::new();
        assert!(matches!(
            RequestTicket::from_context(&missing),
            Err(CardSearchError::Context(_))
        ));

        let bad_seq = BTreeMap::from([
            ("kind".to_string(), "cards".to_string()),
            ("seq".to_string(), "x".to_string()),
        ]);
        assert!(RequestTicket::from_context(&bad_seq).is_err());
    }

    #[test]
    fn policy_parsing() {
        assert_eq!(" Accept ".parse::<StalePolicy>(), Ok(StalePolicy::Accept));
        assert_eq!("discard".parse::<StalePolicy>(), Ok(StalePolicy::Discard));
        assert!("newest".parse::<StalePolicy>().is_err());
    }
}
