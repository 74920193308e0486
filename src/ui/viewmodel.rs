//! View model types representing renderable UI state.
//!
//! View models are computed from `AppState` by `AppState::compute_viewmodel`
//! and consumed by the renderer. They hold display-ready data only: truncated
//! text, highlight ranges, which page marker is current. Computing the same
//! state twice yields equal view models.

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,
    pub search_bar: SearchBarInfo,
    pub body: Body,
    pub footer: FooterInfo,
}

/// Either the placeholder or the grid, never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Body {
    Placeholder(EmptyState),
    Grid(GridView),
}

impl Body {
    #[must_use]
    pub const fn grid(&self) -> Option<&GridView> {
        match self {
            Self::Grid(grid) => Some(grid),
            Self::Placeholder(_) => None,
        }
    }
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Keybinding help text for the focused part of the widget.
    pub keybindings: String,
}

/// The "Card name" text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub label: String,

    /// Raw field contents, which may differ from the applied search term.
    pub query: String,

    pub focused: bool,

    /// Set when the field holds 1-2 characters that were not applied.
    pub hint: Option<String>,
}

/// Shown instead of the grid when there are no cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    /// Alt text of the placeholder image.
    pub message: String,

    /// URL of the placeholder image.
    pub image_url: String,
}

/// Card grid plus page selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridView {
    pub rows: Vec<GridRow>,
    pub page_strip: PageStripInfo,
}

/// One card as a grid row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridRow {
    pub name: String,
    pub desc: String,
    pub picture: PictureCell,

    /// Character ranges of `name` matching the search term, `(start, end)` exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// The custom-rendered picture column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureCell {
    /// Small artwork of the first image, if the card has one.
    pub url: Option<String>,

    /// Alt text; the card name.
    pub alt: String,
}

/// Horizontal strip of page markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStripInfo {
    /// Markers that fit the pane width, in ascending page order.
    pub markers: Vec<PageMarker>,

    /// Pages exist before the first visible marker.
    pub more_before: bool,

    /// Pages exist after the last visible marker.
    pub more_after: bool,

    pub focused: bool,
}

/// A single selectable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMarker {
    pub page: u32,
    pub is_current: bool,
}

impl PageMarker {
    #[must_use]
    pub fn label(self) -> String {
        self.page.to_string()
    }
}

/// Columns occupied by one rendered page marker (1-indexed, inclusive start, exclusive end).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerSpan {
    pub page: u32,
    pub start_col: usize,
    pub end_col: usize,
}

/// Blank columns between adjacent page markers.
pub const MARKER_GAP: usize = 3;

/// Width of the "more pages" indicators drawn at either end of the strip.
pub const OVERFLOW_INDICATOR_WIDTH: usize = 2;

impl PageStripInfo {
    /// Horizontal positions of the visible markers, centered in `cols` columns.
    ///
    /// Used both to draw the strip and to map mouse clicks back to pages.
    #[must_use]
    pub fn spans(&self, cols: usize) -> Vec<MarkerSpan> {
        let indicators = usize::from(self.more_before) + usize::from(self.more_after);
        let width = strip_width(self.markers.iter().map(|m| m.label().len()))
            + indicators * OVERFLOW_INDICATOR_WIDTH;
        let mut col = (cols.saturating_sub(width)) / 2 + 1;
        if self.more_before {
            col += OVERFLOW_INDICATOR_WIDTH;
        }

        self.markers
            .iter()
            .map(|marker| {
                let len = marker.label().len();
                let span = MarkerSpan {
                    page: marker.page,
                    start_col: col,
                    end_col: col + len,
                };
                col += len + MARKER_GAP;
                span
            })
            .collect()
    }
}

/// Total columns taken by markers of the given label widths.
#[must_use]
pub fn strip_width(label_widths: impl Iterator<Item = usize>) -> usize {
    let mut count: usize = 0;
    let mut total = 0;
    for width in label_widths {
        total += width;
        count += 1;
    }
    total + MARKER_GAP * count.saturating_sub(1)
}

/// What a rendered frame looks like, as far as mouse input cares.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Row of the page strip (1-indexed) and its marker spans, when drawn.
    pub page_strip: Option<(usize, Vec<MarkerSpan>)>,
}

impl ScreenLayout {
    /// Page whose marker covers the given 1-indexed cell.
    #[must_use]
    pub fn page_at(&self, row: usize, col: usize) -> Option<u32> {
        let (strip_row, spans) = self.page_strip.as_ref()?;
        if *strip_row != row {
            return None;
        }
        spans
            .iter()
            .find(|span| (span.start_col..span.end_col).contains(&col))
            .map(|span| span.page)
    }

    /// Like [`Self::page_at`], for a click position reported by the host.
    ///
    /// The host counts lines and columns from 0, the layout from 1. Negative
    /// lines (above the pane) never hit a marker.
    #[must_use]
    pub fn page_at_host(&self, line: isize, col: usize) -> Option<u32> {
        let row = usize::try_from(line).ok()?.checked_add(1)?;
        self.page_at(row, col.checked_add(1)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(pages: &[u32], current: u32) -> PageStripInfo {
        PageStripInfo {
            markers: pages
                .iter()
                .map(|&page| PageMarker {
                    page,
                    is_current: page == current,
                })
                .collect(),
            more_before: false,
            more_after: false,
            focused: false,
        }
    }

    #[test]
    fn spans_are_centered_and_gapped() {
        // "1   2   10" is 10 columns wide, centered in 20 -> starts at column 6
        let spans = strip(&[1, 2, 10], 1).spans(20);
        assert_eq!(
            spans,
            vec![
                MarkerSpan { page: 1, start_col: 6, end_col: 7 },
                MarkerSpan { page: 2, start_col: 10, end_col: 11 },
                MarkerSpan { page: 10, start_col: 14, end_col: 16 },
            ]
        );
    }

    #[test]
    fn clicks_map_to_markers_on_the_strip_row_only() {
        let layout = ScreenLayout {
            page_strip: Some((12, strip(&[1, 2, 10], 1).spans(20))),
        };
        assert_eq!(layout.page_at(12, 10), Some(2));
        assert_eq!(layout.page_at(12, 15), Some(10));
        assert_eq!(layout.page_at(12, 8), None);
        assert_eq!(layout.page_at(11, 10), None);
        assert_eq!(ScreenLayout::default().page_at(12, 10), None);
    }

    #[test]
    fn host_click_positions_are_zero_based() {
        // markers at columns 6, 10 and 14-15 on row 12
        let layout = ScreenLayout {
            page_strip: Some((12, strip(&[1, 2, 10], 1).spans(20))),
        };
        assert_eq!(layout.page_at_host(11, 9), Some(2));
        assert_eq!(layout.page_at_host(11, 5), Some(1));
        assert_eq!(layout.page_at_host(11, 6), None);
        assert_eq!(layout.page_at_host(12, 9), None);
        assert_eq!(layout.page_at_host(-1, 9), None);
    }

    #[test]
    fn strip_width_counts_gaps_between_markers() {
        assert_eq!(strip_width([].into_iter()), 0);
        assert_eq!(strip_width([1].into_iter()), 1);
        assert_eq!(strip_width([1, 1, 2].into_iter()), 10);
    }
}
