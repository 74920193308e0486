//! Domain layer for the card search plugin.
//!
//! Holds the types the rest of the crate reasons about, independent of the
//! Zellij host APIs: the user-controlled [`Filter`], the [`Card`] records the
//! backend returns, the [`PageList`] derived from result counts, and the
//! crate-wide error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`card`]: Card and card image records decoded from the backend
//! - [`filter`]: Search term and page number with their acceptance rules
//! - [`pagination`]: Page size constant and page list derivation
//!
//! # Examples
//!
//! ```
//! use cardsearch::domain::{Filter, PageList};
//!
//! let mut filter = Filter::default();
//! assert!(!filter.propose_name("cy"));
//! assert!(filter.propose_name("cyber"));
//! assert_eq!(PageList::from_total(10).pages(), &[1, 2, 3]);
//! ```

pub mod card;
pub mod error;
pub mod filter;
pub mod pagination;

pub use card::{Card, CardImage};
pub use error::{CardSearchError, Result};
pub use filter::Filter;
pub use pagination::{PageList, PAGE_SIZE};
