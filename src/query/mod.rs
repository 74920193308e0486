//! Query execution layer: building, tagging and decoding the two read queries.
//!
//! The plugin issues exactly two kinds of request against one endpoint:
//!
//! - [`QueryKind::Cards`]: one page of cards (`_limit`/`_page` bounded)
//! - [`QueryKind::PageCount`]: every match, only used for its length
//!
//! Requests are described as plain data ([`FetchRequest`]) so the event
//! handler stays free of host calls; `main.rs` turns them into
//! `web_request` invocations. Each request carries a [`RequestTicket`] that
//! round-trips through the host's request context, which lets the
//! [`RequestTracker`] recognise responses overtaken by a newer request.
//!
//! # Modules
//!
//! - [`params`]: Typed query parameters and endpoint URL construction
//! - [`request`]: Outgoing request descriptions
//! - [`response`]: Response validation and decoding
//! - [`ticket`]: Request sequencing and stale response policy

pub mod params;
pub mod request;
pub mod response;
pub mod ticket;

pub use params::{Endpoint, QueryKind, QueryParams};
pub use request::FetchRequest;
pub use response::FetchResponse;
pub use ticket::{RequestTicket, RequestTracker, StalePolicy};
