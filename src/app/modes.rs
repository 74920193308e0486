//! Focus and presentation state types.
//!
//! The widget has two interactive parts, the search field and the page strip,
//! and keyboard input is routed to whichever one has focus. Mouse clicks on
//! page markers work regardless of focus.
//!
//! Presentation is derived, not stored: an empty card list shows the
//! placeholder, anything else shows the grid.

/// Which part of the widget receives keyboard input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    /// Typing edits the search field; every edit proposes a new search term.
    #[default]
    SearchField,

    /// Arrow keys and digits pick page markers.
    PageStrip,
}

/// What the body of the widget currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presentation {
    /// No cards: a single "not found" placeholder, no grid, no page strip.
    Empty,

    /// Cards available: grid plus page strip.
    Populated,
}
