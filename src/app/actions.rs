//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls host APIs itself. It returns a `Vec<Action>`
//! which `main.rs` executes in order, so every state transition can be tested
//! without a running Zellij.

use crate::query::FetchRequest;

/// Commands the plugin runtime executes after an event was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    CloseFocus,

    /// Issues a GET request; the ticket travels in the request context and
    /// comes back with the `WebRequestResult`.
    Fetch(FetchRequest),
}

impl Action {
    /// The request carried by a [`Action::Fetch`], if this is one.
    #[must_use]
    pub const fn as_fetch(&self) -> Option<&FetchRequest> {
        match self {
            Self::Fetch(request) => Some(request),
            Self::CloseFocus => None,
        }
    }
}
