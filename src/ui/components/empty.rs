//! Placeholder component renderer.
//!
//! Stands in for the "not found" image: the image's alt text, centered and
//! linked to the image URL, with the URL itself dimmed underneath.

use crate::app::state::truncate;
use crate::ui::helpers::{hyperlink, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the placeholder starting at `row`.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let message = format!("[ {} ]", empty.message);
    let msg_len = message.chars().count();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(msg_padding));
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", hyperlink(&empty.image_url, &message));
    print!("{}", Theme::reset());

    let url = truncate(&empty.image_url, cols);
    let url_len = url.chars().count();
    let url_padding = (cols.saturating_sub(url_len)) / 2;

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(url_padding));
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{url}");
    print!("{}", Theme::reset());

    row + 3
}
