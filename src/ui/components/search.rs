//! Search field component renderer.
//!
//! Draws the "Card name" text field as a bordered box. The border switches to
//! the focus color while the field receives keyboard input, and a dim hint
//! line below the box explains held-back input.

use crate::app::state::truncate;
use crate::ui::helpers::{padding_for, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on left and right).
const SEARCH_BOX_MARGIN: usize = 5;

/// Renders the search box at `row` and returns the next free row.
///
/// Always takes four rows: three for the box and one for the hint, blank
/// when there is nothing to say.
///
/// ```text
/// [margin] ┌ Card name ──────┐
/// [margin] │ cy▏             │
/// [margin] └─────────────────┘
/// [margin]   Type at least 3 characters to search
/// ```
pub fn render_search_bar(row: usize, search: &SearchBarInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let border = if search.focused {
        &theme.colors.search_bar_focus
    } else {
        &theme.colors.search_bar_border
    };

    let label = format!(" {} ", search.label);
    position_cursor(row, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("┌{label}{}┐", "─".repeat(inner_width.saturating_sub(label.chars().count())));
    print!("{}", Theme::reset());

    let cursor = if search.focused { "▏" } else { "" };
    let field_text = truncate(&format!(" {}{cursor}", search.query), inner_width);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{field_text}");
    print!("{}", padding_for(&field_text, inner_width));
    print!("{}", Theme::fg(border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN));
    print!("{}", Theme::fg(border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    position_cursor(row + 3, 1);
    print!("{}", " ".repeat(SEARCH_BOX_MARGIN + 2));
    if let Some(hint) = &search.hint {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{}", truncate(hint, inner_width));
        print!("{}", Theme::reset());
    }

    row + 4
}
