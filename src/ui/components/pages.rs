//! Page strip renderer.
//!
//! One marker per visible page, laid out by [`PageStripInfo::spans`] so that
//! mouse clicks resolve against exactly what was drawn. The current page is
//! bold in the active color, every other marker gray.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{MarkerSpan, PageStripInfo, OVERFLOW_INDICATOR_WIDTH};

/// Renders the strip at `row` and returns the spans of the drawn markers.
pub fn render_page_strip(row: usize, strip: &PageStripInfo, theme: &Theme, cols: usize) -> Vec<MarkerSpan> {
    let spans = strip.spans(cols);

    if let (true, Some(first)) = (strip.more_before, spans.first()) {
        position_cursor(row, first.start_col.saturating_sub(OVERFLOW_INDICATOR_WIDTH).max(1));
        print!("{}", Theme::fg(&theme.colors.page_inactive_fg));
        print!("‹");
        print!("{}", Theme::reset());
    }

    for (marker, span) in strip.markers.iter().zip(&spans) {
        position_cursor(row, span.start_col);
        if marker.is_current {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.page_active_fg));
            if strip.focused {
                print!("{}", Theme::underline());
            }
        } else {
            print!("{}", Theme::fg(&theme.colors.page_inactive_fg));
        }
        print!("{}", marker.label());
        print!("{}", Theme::reset());
    }

    if let (true, Some(last)) = (strip.more_after, spans.last()) {
        position_cursor(row, last.end_col + 1);
        print!("{}", Theme::fg(&theme.colors.page_inactive_fg));
        print!("›");
        print!("{}", Theme::reset());
    }

    spans
}
