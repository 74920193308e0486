//! Title bar.

use crate::ui::helpers::render_centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row` and returns the next free row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let background = theme.colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();
    let style = format!("{}{}{background}", Theme::bold(), Theme::fg(&theme.colors.header_fg));

    render_centered_line(row, &header.title, &style, cols);
    row + 1
}
