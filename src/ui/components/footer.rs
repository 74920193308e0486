//! Keybinding hints for whichever part of the widget has focus.

use crate::ui::helpers::render_centered_line;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    render_centered_line(row, &footer.keybindings, &Theme::fg(&theme.colors.text_dim), cols);
    row + 1
}
