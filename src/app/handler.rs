//! Event handling and state transition logic.
//!
//! [`handle_event`] is the only place where [`AppState`] changes. Every call
//! returns whether the UI should re-render and the actions the plugin runtime
//! must execute, so the whole pipeline (input, filter change, queries,
//! responses) can be driven from tests without a host.
//!
//! # Event Types
//!
//! - **Lifecycle**: `Start`, `PermissionDenied`, `CloseFocus`
//! - **Search field**: `Char`, `Backspace`, `ClearSearch`
//! - **Page strip**: `SelectPage`, `PreviousPage`, `NextPage`, `FirstPage`, `LastPage`
//! - **Focus**: `FocusSearchField`, `FocusPageStrip`
//! - **Network**: `FetchResolved`
//!
//! # Example
//!
//! ```
//! use cardsearch::app::{handle_event, Action, AppState, Event};
//! use cardsearch::query::Endpoint;
//! use cardsearch::ui::Theme;
//!
//! let mut state = AppState::new(Endpoint::new("http://localhost:3004", "data"), Theme::default());
//! let (_render, actions) = handle_event(&mut state, &Event::Start)?;
//! assert_eq!(actions.len(), 2);
//! assert!(matches!(actions[0], Action::Fetch(_)));
//! # Ok::<(), cardsearch::CardSearchError>(())
//! ```

use crate::app::modes::Focus;
use crate::app::{Action, AppState};
use crate::domain::error::Result;
use crate::query::{FetchResponse, QueryKind};

/// Events triggered by user input, host lifecycle or resolved requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Web access was granted; the initial queries may be issued.
    Start,
    /// Web access was refused; nothing will ever be fetched.
    PermissionDenied,
    /// Hides the plugin pane.
    CloseFocus,

    /// Appends a character to the search field.
    Char(char),
    /// Removes the last character from the search field.
    Backspace,
    /// Empties the search field.
    ClearSearch,

    /// Moves keyboard focus to the search field.
    FocusSearchField,
    /// Moves keyboard focus to the page strip.
    FocusPageStrip,

    /// Selects a page directly (marker click or digit key).
    SelectPage(u32),
    /// Selects the page before the current one, if listed.
    PreviousPage,
    /// Selects the page after the current one, if listed.
    NextPage,
    /// Selects the first listed page.
    FirstPage,
    /// Selects the last listed page.
    LastPage,

    /// A request issued earlier has resolved.
    FetchResolved(FetchResponse),
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Filter changes re-issue both queries; edits that leave the filter as it
/// was only re-render. Resolved responses are checked against the request
/// tracker first and dropped when stale under the state's policy.
///
/// # Parameters
///
/// * `state` - Mutable application state
/// * `event` - Event to process
///
/// # Returns
///
/// `(should_render, actions)`. Actions are executed in order by the runtime.
///
/// # Errors
///
/// Returns errors from query construction. Fetch failures are not errors:
/// they leave the state untouched and are only traced.
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::Start => {
            tracing::debug!(filter = ?state.filter, "web access granted, issuing initial queries");
            state.ready = true;
            Ok((true, state.refresh()?))
        }
        Event::PermissionDenied => {
            tracing::warn!("web access denied, no results will be loaded");
            state.ready = false;
            Ok((false, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::Char(c) => {
            if state.focus != Focus::SearchField {
                return Ok((false, vec![]));
            }
            state.search_input.push(*c);
            tracing::trace!(input = %state.search_input, char = %c, "search field edited");
            on_search_edited(state)
        }
        Event::Backspace => {
            if state.focus != Focus::SearchField || state.search_input.pop().is_none() {
                return Ok((false, vec![]));
            }
            on_search_edited(state)
        }
        Event::ClearSearch => {
            if state.search_input.is_empty() {
                return Ok((false, vec![]));
            }
            state.search_input.clear();
            on_search_edited(state)
        }
        Event::FocusSearchField => {
            let changed = state.focus != Focus::SearchField;
            state.focus = Focus::SearchField;
            Ok((changed, vec![]))
        }
        Event::FocusPageStrip => {
            let changed = state.focus != Focus::PageStrip;
            state.focus = Focus::PageStrip;
            Ok((changed, vec![]))
        }
        Event::SelectPage(page) => select_page(state, Some(*page)),
        Event::PreviousPage => {
            let target = state.pages.previous(state.filter.page);
            select_page(state, target)
        }
        Event::NextPage => {
            let target = state.pages.next(state.filter.page);
            select_page(state, target)
        }
        Event::FirstPage => {
            let target = state.pages.first();
            select_page(state, target)
        }
        Event::LastPage => {
            let target = state.pages.last();
            select_page(state, target)
        }
        Event::FetchResolved(response) => Ok((apply_response(state, response), vec![])),
    }
}

/// Proposes the search field contents as the new term and re-queries on change.
///
/// The field itself always re-renders, even when the term is held back.
fn on_search_edited(state: &mut AppState) -> Result<(bool, Vec<Action>)> {
    if state.sync_search_input() {
        tracing::debug!(name = %state.filter.name, "search term applied");
        Ok((true, state.refresh()?))
    } else {
        Ok((true, vec![]))
    }
}

/// Moves to `page` when there is one and it differs from the current page.
///
/// `None` comes from navigation past either end of the page list and is a no-op.
fn select_page(state: &mut AppState, page: Option<u32>) -> Result<(bool, Vec<Action>)> {
    let Some(page) = page else {
        return Ok((false, vec![]));
    };
    if !state.filter.set_page(page) {
        tracing::debug!(page, "page unchanged");
        return Ok((false, vec![]));
    }
    tracing::debug!(page, "page selected");
    Ok((true, state.refresh()?))
}

/// Applies a resolved response. Returns `true` if anything visible changed.
///
/// Non-2xx statuses and undecodable bodies leave the state untouched; they
/// are recorded at debug level and never surfaced to the user.
fn apply_response(state: &mut AppState, response: &FetchResponse) -> bool {
    let ticket = response.ticket;
    let _span = tracing::debug_span!(
        "apply_response",
        kind = %ticket.kind,
        seq = ticket.seq,
        status = response.status
    )
    .entered();

    if !state.tracker.admits(ticket, state.stale_policy) {
        tracing::debug!(
            latest = state.tracker.latest(ticket.kind),
            policy = ?state.stale_policy,
            "discarding superseded response"
        );
        return false;
    }

    let outcome = match ticket.kind {
        QueryKind::Cards => response.decode_cards().map(|cards| {
            tracing::debug!(card_count = cards.len(), "card page resolved");
            state.apply_cards(cards)
        }),
        QueryKind::PageCount => response.decode_count().map(|total| {
            tracing::debug!(total, "match count resolved");
            state.apply_total(total)
        }),
    };

    outcome.unwrap_or_else(|e| {
        tracing::debug!(error = %e, "fetch failed, keeping previous results");
        false
    })
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::Start => "Start",
        Event::PermissionDenied => "PermissionDenied",
        Event::CloseFocus => "CloseFocus",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::ClearSearch => "ClearSearch",
        Event::FocusSearchField => "FocusSearchField",
        Event::FocusPageStrip => "FocusPageStrip",
        Event::SelectPage(_) => "SelectPage",
        Event::PreviousPage => "PreviousPage",
        Event::NextPage => "NextPage",
        Event::FirstPage => "FirstPage",
        Event::LastPage => "LastPage",
        Event::FetchResolved(_) => "FetchResolved",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::modes::Presentation;
    use crate::query::{Endpoint, FetchRequest, RequestTicket, StalePolicy};
    use crate::ui::Theme;

    fn ready_state() -> AppState {
        let mut state = AppState::new(Endpoint::new("http://localhost:3004", "data"), Theme::default());
        handle_event(&mut state, &Event::Start).unwrap();
        state
    }

    fn fetches(actions: &[Action]) -> Vec<&FetchRequest> {
        actions.iter().filter_map(Action::as_fetch).collect()
    }

    fn resolved(ticket: RequestTicket, body: &str) -> Event {
        Event::FetchResolved(FetchResponse {
            ticket,
            status: 200,
            body: body.as_bytes().to_vec(),
        })
    }

    fn cards_body(names: &[&str]) -> String {
        let cards: Vec<String> = names
            .iter()
            .map(|n| format!(r#"{{"name":"{n}","desc":"","card_images":[{{"image_url_small":"s"}}]}}"#))
            .collect();
        format!("[{}]", cards.join(","))
    }

    fn type_text(state: &mut AppState, text: &str) -> Vec<Action> {
        let mut actions = vec![];
        for c in text.chars() {
            actions.extend(handle_event(state, &Event::Char(c)).unwrap().1);
        }
        actions
    }

    #[test]
    fn nothing_is_fetched_before_start() {
        let mut state = AppState::new(Endpoint::new("http://h", "data"), Theme::default());
        let actions = type_text(&mut state, "cyber");
        assert!(actions.is_empty());
        assert_eq!(state.filter.name, "cyber");

        let (_, actions) = handle_event(&mut state, &Event::Start).unwrap();
        assert_eq!(fetches(&actions)[0].url, "http://h/data?name_like=cyber&_limit=4&_page=1");
    }

    #[test]
    fn short_input_does_not_fetch() {
        let mut state = ready_state();
        let actions = type_text(&mut state, "cy");
        assert!(actions.is_empty());
        assert_eq!(state.filter.name, "");
    }

    #[test]
    fn third_character_fetches_and_each_further_one_again() {
        let mut state = ready_state();
        let actions = type_text(&mut state, "cyb");
        assert_eq!(fetches(&actions).len(), 2);
        let actions = type_text(&mut state, "e");
        assert_eq!(fetches(&actions)[0].url, "http://localhost:3004/data?name_like=cybe&_limit=4&_page=1");
    }

    #[test]
    fn backspacing_to_two_chars_keeps_previous_term_and_clearing_resets_it() {
        let mut state = ready_state();
        type_text(&mut state, "cyb");
        let (render, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.filter.name, "cyb");

        handle_event(&mut state, &Event::Backspace).unwrap();
        let (_, actions) = handle_event(&mut state, &Event::Backspace).unwrap();
        assert_eq!(state.filter.name, "");
        assert_eq!(fetches(&actions)[1].url, "http://localhost:3004/data");
    }

    #[test]
    fn chars_are_ignored_while_page_strip_has_focus() {
        let mut state = ready_state();
        handle_event(&mut state, &Event::FocusPageStrip).unwrap();
        let (render, actions) = handle_event(&mut state, &Event::Char('x')).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert!(state.search_input.is_empty());
    }

    #[test]
    fn selecting_a_page_refetches_with_current_name() {
        let mut state = ready_state();
        type_text(&mut state, "dark");
        let (render, actions) = handle_event(&mut state, &Event::SelectPage(3)).unwrap();
        assert!(render);
        assert_eq!(state.filter.page, 3);
        assert_eq!(
            fetches(&actions)[0].url,
            "http://localhost:3004/data?name_like=dark&_limit=4&_page=3"
        );
        assert_eq!(fetches(&actions)[1].url, "http://localhost:3004/data?name_like=dark");
    }

    #[test]
    fn reselecting_the_current_page_does_nothing() {
        let mut state = ready_state();
        let (render, actions) = handle_event(&mut state, &Event::SelectPage(1)).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
    }

    #[test]
    fn relative_page_moves_stay_inside_the_page_list() {
        let mut state = ready_state();
        state.apply_total(8);
        assert!(handle_event(&mut state, &Event::PreviousPage).unwrap().1.is_empty());
        handle_event(&mut state, &Event::NextPage).unwrap();
        assert_eq!(state.filter.page, 2);
        assert!(handle_event(&mut state, &Event::NextPage).unwrap().1.is_empty());
        handle_event(&mut state, &Event::FirstPage).unwrap();
        assert_eq!(state.filter.page, 1);
        handle_event(&mut state, &Event::LastPage).unwrap();
        assert_eq!(state.filter.page, 2);
    }

    #[test]
    fn responses_populate_and_empty_the_grid() {
        let mut state = ready_state();
        let cards = state.tracker.issue(QueryKind::Cards);
        let count = state.tracker.issue(QueryKind::PageCount);

        let (render, _) = handle_event(&mut state, &resolved(cards, &cards_body(&["A", "B"]))).unwrap();
        assert!(render);
        assert_eq!(state.presentation(), Presentation::Populated);

        handle_event(&mut state, &resolved(count, "[1,2,3,4,5,6,7,8,9,10]")).unwrap();
        assert_eq!(state.pages.pages(), &[1, 2, 3]);

        let cards = state.tracker.issue(QueryKind::Cards);
        handle_event(&mut state, &resolved(cards, "[]")).unwrap();
        assert_eq!(state.presentation(), Presentation::Empty);
    }

    #[test]
    fn failed_fetch_leaves_state_unchanged() {
        let mut state = ready_state();
        let ticket = state.tracker.issue(QueryKind::Cards);
        handle_event(&mut state, &resolved(ticket, &cards_body(&["Kept"]))).unwrap();

        let ticket = state.tracker.issue(QueryKind::Cards);
        let failure = Event::FetchResolved(FetchResponse {
            ticket,
            status: 500,
            body: b"[]".to_vec(),
        });
        let (render, actions) = handle_event(&mut state, &failure).unwrap();
        assert!(!render);
        assert!(actions.is_empty());
        assert_eq!(state.cards[0].name, "Kept");

        let ticket = state.tracker.issue(QueryKind::PageCount);
        let (render, _) = handle_event(&mut state, &resolved(ticket, "not json")).unwrap();
        assert!(!render);
        assert_eq!(state.pages.len(), 10);
    }

    #[test]
    fn stale_responses_are_discarded_by_default() {
        let mut state = ready_state();
        let old = state.tracker.issue(QueryKind::Cards);
        let new = state.tracker.issue(QueryKind::Cards);

        handle_event(&mut state, &resolved(new, &cards_body(&["New"]))).unwrap();
        let (render, _) = handle_event(&mut state, &resolved(old, &cards_body(&["Old"]))).unwrap();

        assert!(!render);
        assert_eq!(state.cards[0].name, "New");
    }

    #[test]
    fn last_response_wins_when_stale_responses_are_accepted() {
        let mut state = ready_state();
        state.stale_policy = StalePolicy::Accept;
        let old = state.tracker.issue(QueryKind::Cards);
        let new = state.tracker.issue(QueryKind::Cards);

        handle_event(&mut state, &resolved(new, &cards_body(&["New"]))).unwrap();
        handle_event(&mut state, &resolved(old, &cards_body(&["Old"]))).unwrap();

        assert_eq!(state.cards[0].name, "Old");
    }

    #[test]
    fn focus_changes_render_once() {
        let mut state = ready_state();
        assert!(handle_event(&mut state, &Event::FocusPageStrip).unwrap().0);
        assert!(!handle_event(&mut state, &Event::FocusPageStrip).unwrap().0);
        assert!(handle_event(&mut state, &Event::FocusSearchField).unwrap().0);
    }

    #[test]
    fn close_focus_emits_action() {
        let mut state = ready_state();
        let (_, actions) = handle_event(&mut state, &Event::CloseFocus).unwrap();
        assert_eq!(actions, vec![Action::CloseFocus]);
    }
}
