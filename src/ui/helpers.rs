//! Shared rendering utilities.
//!
//! Low-level helpers used by several components: cursor positioning, match
//! highlighting and terminal hyperlinks. Everything writes straight to stdout,
//! which the Zellij host captures as the pane contents.

use crate::app::state::truncate;
use crate::ui::theme::Theme;

/// Moves the cursor to a 1-indexed `(row, col)` cell.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Prints `text` with the given character ranges highlighted.
///
/// Ranges are `(start, end)` character indices with exclusive end, sorted and
/// non-overlapping. After each highlighted section the `restore` sequence is
/// re-applied so the surrounding text keeps its style.
pub fn render_highlighted_text(text: &str, ranges: &[(usize, usize)], theme: &Theme, restore: &str) {
    if ranges.is_empty() {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        let normal_section: String = chars[current_pos..start].iter().collect();
        print!("{normal_section}");

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{restore}");

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}

/// Wraps `label` in an OSC 8 hyperlink to `url`.
///
/// Terminals without hyperlink support show the label only.
#[must_use]
pub fn hyperlink(url: &str, label: &str) -> String {
    format!("\u{1b}]8;;{url}\u{1b}\\{label}\u{1b}]8;;\u{1b}\\")
}

/// Fills `row` with `text` centered in `style`, cut to fit `cols`.
pub fn render_centered_line(row: usize, text: &str, style: &str, cols: usize) {
    let text = truncate(text, cols);
    let left = (cols - text.chars().count()) / 2;

    position_cursor(row, 1);
    print!("{style}{}{text}{}{}", " ".repeat(left), padding_for(&text, cols - left), Theme::reset());
}

/// Blank columns needed to pad `text` to `width` characters.
#[must_use]
pub fn padding_for(text: &str, width: usize) -> String {
    " ".repeat(width.saturating_sub(text.chars().count()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hyperlink_wraps_label() {
        assert_eq!(
            hyperlink("https://img/a.jpg", "Cyber Dragon"),
            "\u{1b}]8;;https://img/a.jpg\u{1b}\\Cyber Dragon\u{1b}]8;;\u{1b}\\"
        );
    }

    #[test]
    fn padding_counts_characters() {
        assert_eq!(padding_for("ab", 5), "   ");
        assert_eq!(padding_for("青眼", 3), " ");
        assert_eq!(padding_for("toolong", 3), "");
    }
}
