//! Application layer coordinating state, events, and actions.
//!
//! This layer sits between the plugin shim (`main.rs`) and the domain, query
//! and UI layers. Data flows in one direction:
//!
//! ```text
//! Key / Mouse / WebRequestResult → Event → handle_event → AppState mutation
//!                                                       ↘ Vec<Action> → web_request / hide_self
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transition coordinator
//! - [`modes`]: Focus and presentation state types
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::{Focus, Presentation};
pub use state::AppState;
