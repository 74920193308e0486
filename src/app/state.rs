//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the single owner of everything the widget
//! knows: the search [`Filter`], the raw contents of the search field, the
//! last accepted card page and page list, and the request tracker used to
//! recognise stale responses. It is mutated only by the event handler.
//!
//! # View Model Computation
//!
//! `compute_viewmodel` is a pure function of the state and the pane size. It
//! chooses between placeholder and grid, truncates text to the column
//! layout, computes fuzzy match highlights for card names and windows the
//! page strip around the current page when it does not fit.
//!
//! # Example
//!
//! ```
//! use cardsearch::app::AppState;
//! use cardsearch::query::Endpoint;
//! use cardsearch::ui::{Body, Theme};
//!
//! let state = AppState::new(Endpoint::new("http://localhost:3004", "data"), Theme::default());
//! let viewmodel = state.compute_viewmodel(24, 80);
//! assert!(matches!(viewmodel.body, Body::Placeholder(_)));
//! ```

use super::modes::{Focus, Presentation};
use crate::app::Action;
use crate::domain::{Card, Filter, PageList, Result};
use crate::query::{Endpoint, FetchRequest, RequestTracker, StalePolicy};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    strip_width, Body, EmptyState, FooterInfo, GridRow, GridView, HeaderInfo, PageMarker,
    PageStripInfo, PictureCell, SearchBarInfo, UIViewModel, MARKER_GAP, OVERFLOW_INDICATOR_WIDTH,
};
use fuzzy_matcher::skim::SkimMatcherV2;

/// Placeholder image shown when a search has no results.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str =
    "https://www.crossduelmeta.com/_app/immutable/assets/missing-card-22b35a89.webp";

/// Width of the grid's name column, in characters.
pub const NAME_COLUMN_WIDTH: usize = 28;

/// Width of the grid's picture column, in characters.
pub const PICTURE_COLUMN_WIDTH: usize = 28;

/// Blank columns between grid columns.
pub const COLUMN_GAP: usize = 2;

/// Central application state container.
///
/// Holds the filter, the raw search field, the last accepted results and the
/// bookkeeping needed to issue and admit requests. Mutated only by
/// [`handle_event`](crate::app::handle_event); view models are computed on
/// demand from a snapshot.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Applied search term and page; the input of every query.
    pub filter: Filter,

    /// Raw search field contents. Only copied into `filter.name` when the
    /// length rule allows it.
    pub search_input: String,

    /// Part of the widget receiving keyboard input.
    pub focus: Focus,

    /// Cards of the last accepted page response, in endpoint order.
    pub cards: Vec<Card>,

    /// Selectable pages, from the last accepted count response.
    pub pages: PageList,

    /// Sequence numbers of issued requests.
    pub tracker: RequestTracker,

    /// Whether superseded responses are dropped or applied.
    pub stale_policy: StalePolicy,

    /// Where queries are sent.
    pub endpoint: Endpoint,

    /// Image shown when there are no cards.
    pub placeholder_image: String,

    /// Set once the host allows web requests. Until then filter changes are
    /// recorded but no request is issued.
    pub ready: bool,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial state: empty filter on page 1, no cards, default page list.
    ///
    /// The state starts not ready, so no request is planned until the host
    /// grants web access.
    ///
    /// # Parameters
    ///
    /// * `endpoint` - Where both queries are sent
    /// * `theme` - Color scheme for UI rendering
    ///
    /// # Returns
    ///
    /// A new `AppState` using the default stale-response policy and placeholder image.
    #[must_use]
    pub fn new(endpoint: Endpoint, theme: Theme) -> Self {
        Self {
            filter: Filter::default(),
            search_input: String::new(),
            focus: Focus::default(),
            cards: Vec::new(),
            pages: PageList::default(),
            tracker: RequestTracker::default(),
            stale_policy: StalePolicy::default(),
            endpoint,
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            ready: false,
            theme,
        }
    }

    /// Derived presentation state.
    ///
    /// [`Presentation::Empty`] whenever the last accepted card page has no
    /// entries, regardless of the page list.
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        if self.cards.is_empty() {
            Presentation::Empty
        } else {
            Presentation::Populated
        }
    }

    /// Plans both queries for the current filter.
    ///
    /// Each query gets a fresh ticket from `tracker`, which makes every
    /// earlier in-flight request of the same kind stale.
    ///
    /// # Returns
    ///
    /// Two [`Action::Fetch`] actions (cards first, then the count), or none
    /// while the plugin is not ready.
    ///
    /// # Errors
    ///
    /// Propagates query serialization failures.
    pub fn refresh(&mut self) -> Result<Vec<Action>> {
        if !self.ready {
            tracing::debug!("web access not granted yet, deferring queries");
            return Ok(vec![]);
        }
        let requests = FetchRequest::for_filter(&self.filter, &self.endpoint, &mut self.tracker)?;
        Ok(requests.into_iter().map(Action::Fetch).collect())
    }

    /// Re-reads the search field and proposes it as the search term.
    ///
    /// One or two characters are held back and leave the applied term alone.
    ///
    /// # Returns
    ///
    /// `true` if the applied term changed, which means the queries must be re-issued.
    pub fn sync_search_input(&mut self) -> bool {
        self.filter.propose_name(&self.search_input)
    }

    /// Replaces the held cards wholesale.
    ///
    /// # Parameters
    ///
    /// * `cards` - Decoded cards of an admitted page response, in endpoint order
    ///
    /// # Returns
    ///
    /// `true` if the new list differs from the held one and the UI should re-render.
    pub fn apply_cards(&mut self, cards: Vec<Card>) -> bool {
        if self.cards == cards {
            return false;
        }
        self.cards = cards;
        true
    }

    /// Recomputes the page list from a total match count.
    ///
    /// The current page is left as it is, even if it is no longer listed.
    ///
    /// # Parameters
    ///
    /// * `total` - Number of records matching the current name
    ///
    /// # Returns
    ///
    /// `true` if the page list changed.
    pub fn apply_total(&mut self, total: usize) -> bool {
        let pages = PageList::from_total(total);
        if self.pages == pages {
            return false;
        }
        self.pages = pages;
        true
    }

    /// Computes a renderable UI view model from current state and pane dimensions.
    ///
    /// Pure: equal states and sizes give equal view models.
    ///
    /// # Parameters
    ///
    /// * `_rows` - Pane height; the grid holds at most one page, so it never scrolls
    /// * `cols` - Pane width, used for column truncation and page strip windowing
    ///
    /// # Returns
    ///
    /// A [`UIViewModel`] with either the placeholder or the grid as its body.
    #[must_use]
    pub fn compute_viewmodel(&self, _rows: usize, cols: usize) -> UIViewModel {
        let body = match self.presentation() {
            Presentation::Empty => Body::Placeholder(EmptyState {
                message: "Not found".to_string(),
                image_url: self.placeholder_image.clone(),
            }),
            Presentation::Populated => Body::Grid(self.compute_grid(cols)),
        };

        UIViewModel {
            header: self.compute_header(),
            search_bar: self.compute_search_bar(),
            body,
            footer: self.compute_footer(),
        }
    }

    fn compute_grid(&self, cols: usize) -> GridView {
        let matcher = if self.filter.is_unfiltered() {
            None
        } else {
            Some(SkimMatcherV2::default())
        };
        let desc_width = cols.saturating_sub(NAME_COLUMN_WIDTH + PICTURE_COLUMN_WIDTH + 2 * COLUMN_GAP);

        let rows = self
            .cards
            .iter()
            .map(|card| self.compute_grid_row(card, desc_width, matcher.as_ref()))
            .collect();

        GridView {
            rows,
            page_strip: self.compute_page_strip(cols),
        }
    }

    /// Builds one grid row.
    ///
    /// Highlight ranges are computed on the full name and then clipped to the
    /// part left visible after truncation.
    fn compute_grid_row(&self, card: &Card, desc_width: usize, matcher: Option<&SkimMatcherV2>) -> GridRow {
        let name = truncate(&card.name, NAME_COLUMN_WIDTH);
        let visible = if name == card.name {
            name.chars().count()
        } else {
            NAME_COLUMN_WIDTH.saturating_sub(3)
        };

        let highlight_ranges = matcher
            .map(|m| self.compute_highlight_ranges(&card.name, m))
            .unwrap_or_default()
            .into_iter()
            .filter(|&(start, _)| start < visible)
            .map(|(start, end)| (start, end.min(visible)))
            .collect();

        let flattened: String = card.desc.split_whitespace().collect::<Vec<_>>().join(" ");

        GridRow {
            name,
            desc: truncate(&flattened, desc_width),
            picture: PictureCell {
                url: card.thumbnail_url().map(str::to_string),
                alt: card.name.clone(),
            },
            highlight_ranges,
        }
    }

    /// Character ranges of `text` matched by the search term, with consecutive
    /// indices coalesced.
    fn compute_highlight_ranges(&self, text: &str, matcher: &SkimMatcherV2) -> Vec<(usize, usize)> {
        use fuzzy_matcher::FuzzyMatcher;

        let Some((_score, indices)) = matcher.fuzzy_indices(text, &self.filter.name) else {
            return vec![];
        };

        let mut ranges: Vec<(usize, usize)> = Vec::new();
        for idx in indices {
            match ranges.last_mut() {
                Some((_, end)) if *end == idx => *end = idx + 1,
                _ => ranges.push((idx, idx + 1)),
            }
        }
        ranges
    }

    /// Markers around the current page that fit in `cols`, with overflow flags.
    fn compute_page_strip(&self, cols: usize) -> PageStripInfo {
        let pages = self.pages.pages();
        let budget = cols.saturating_sub(2 * OVERFLOW_INDICATOR_WIDTH + 2);
        let (start, end) = visible_page_window(pages, self.filter.page, budget);

        PageStripInfo {
            markers: pages[start..end]
                .iter()
                .map(|&page| PageMarker {
                    page,
                    is_current: page == self.filter.page,
                })
                .collect(),
            more_before: start > 0,
            more_after: end < pages.len(),
            focused: self.focus == Focus::PageStrip,
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let title = match self.pages.last() {
            Some(last) if self.presentation() == Presentation::Populated => {
                format!(" Card Search  page {} of {last} ", self.filter.page)
            }
            _ => " Card Search ".to_string(),
        };
        HeaderInfo { title }
    }

    fn compute_search_bar(&self) -> SearchBarInfo {
        let hint = (!Filter::accepts_name(&self.search_input))
            .then(|| "Type at least 3 characters to search".to_string());

        SearchBarInfo {
            label: "Card name".to_string(),
            query: self.search_input.clone(),
            focused: self.focus == Focus::SearchField,
            hint,
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match self.focus {
            Focus::SearchField => "Type to search  Tab: pages  Click a page number to jump",
            Focus::PageStrip => {
                "h/l or Left/Right: page  1-9: jump  Home/End: first/last  /: search  q: quit"
            }
        };
        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Truncates `text` to `width` characters, marking the cut with `...`.
#[must_use]
pub fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Index range of `pages` to show in `budget` columns, grown outwards from
/// the current page (or the nearest page to it).
fn visible_page_window(pages: &[u32], current: u32, budget: usize) -> (usize, usize) {
    let label_len = |page: u32| page.to_string().len();

    if pages.is_empty() {
        return (0, 0);
    }
    if strip_width(pages.iter().map(|&p| label_len(p))) <= budget {
        return (0, pages.len());
    }

    let anchor = pages.partition_point(|&p| p < current).min(pages.len() - 1);
    let (mut start, mut end) = (anchor, anchor + 1);
    let mut width = label_len(pages[anchor]);

    loop {
        let mut grew = false;
        if end < pages.len() {
            let candidate = width + MARKER_GAP + label_len(pages[end]);
            if candidate <= budget {
                width = candidate;
                end += 1;
                grew = true;
            }
        }
        if start > 0 {
            let candidate = width + MARKER_GAP + label_len(pages[start - 1]);
            if candidate <= budget {
                width = candidate;
                start -= 1;
                grew = true;
            }
        }
        if !grew {
            break;
        }
    }

    (start, end)
}
