//! Composable UI component renderers.
//!
//! Each component draws one part of the pane starting at a given row and
//! returns the next free row, so layouts read top to bottom.
//!
//! # Components
//!
//! - [`header`]: Title bar with the current page
//! - [`search`]: "Card name" text field with its pending-input hint
//! - [`table`]: Card grid (Name, Description, Picture)
//! - [`pages`]: Page marker strip
//! - [`empty`]: "Not found" placeholder
//! - [`footer`]: Keybinding hints for the focused part
//!
//! # Layout Modes
//!
//! - [`render_placeholder_mode`]: Header + `SearchBar` + Placeholder + Footer
//! - [`render_grid_mode`]: Header + `SearchBar` + Table + Page strip + Footer

mod empty;
mod footer;
mod header;
mod pages;
mod search;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, GridView, ScreenLayout, UIViewModel};

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use pages::render_page_strip;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Header, border and search field; shared by both modes.
fn render_top(vm: &UIViewModel, theme: &Theme, cols: usize) -> usize {
    let mut current_row = 2; // row 1 stays blank

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_search_bar(current_row, &vm.search_bar, theme, cols)
}

/// Border and footer pinned to the last two rows.
fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_row = rows.saturating_sub(1).max(1);
    render_border(footer_row.saturating_sub(1).max(1), &theme.colors.border, cols);
    render_footer(footer_row, &vm.footer, theme, cols);
}

/// Renders the layout used when there are no cards.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 4 lines]
/// [Placeholder]
/// [Border]
/// [Footer]
/// ```
pub fn render_placeholder_mode(
    vm: &UIViewModel,
    empty: &EmptyState,
    theme: &Theme,
    cols: usize,
    rows: usize,
) -> ScreenLayout {
    let current_row = render_top(vm, theme, cols);
    render_empty_state(current_row + 1, empty, theme, cols);
    render_bottom(vm, theme, cols, rows);

    ScreenLayout::default()
}

/// Renders the layout used when cards are present.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Search Bar - 4 lines]
/// [Table Headers]
/// [Table Rows]
/// [blank line]
/// [Page strip]
/// [Border]
/// [Footer]
/// ```
///
/// Returns where the page markers were drawn so clicks can be resolved.
pub fn render_grid_mode(
    vm: &UIViewModel,
    grid: &GridView,
    theme: &Theme,
    cols: usize,
    rows: usize,
) -> ScreenLayout {
    let mut current_row = render_top(vm, theme, cols);
    current_row = render_table_headers(current_row, theme, cols);
    current_row = render_table_rows(current_row, &grid.rows, theme, cols);

    let strip_row = current_row + 1;
    let spans = render_page_strip(strip_row, &grid.page_strip, theme, cols);
    render_bottom(vm, theme, cols, rows);

    ScreenLayout {
        page_strip: Some((strip_row, spans)),
    }
}
