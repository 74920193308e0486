//! Zellij plugin shim for cardsearch.
//!
//! Translates host events into [`cardsearch::Event`]s, runs them through
//! [`handle_event`], and carries out the returned actions with host calls.
//! This is the only place that talks to the Zellij API, so everything in the
//! library can be tested without a plugin runtime.

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use cardsearch::app::AppState;
use cardsearch::query::FetchResponse;
use cardsearch::ui::ScreenLayout;
use cardsearch::{handle_event, Action, Config, Event, Focus};

register_plugin!(State);

struct State {
    app: AppState,

    /// Where the last frame put the clickable page markers.
    layout: ScreenLayout,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: cardsearch::initialize(&Config::default()),
            layout: ScreenLayout::default(),
        }
    }
}

impl ZellijPlugin for State {
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        cardsearch::observability::init_tracing(&config);

        let _guard = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(base_url = %config.base_url, collection = %config.collection, stale_policy = ?config.stale_policy, "parsed configuration");
        self.app = cardsearch::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Mouse,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for web access");
    }

    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span = tracing::debug_span!("plugin_update_event", otel.name = %format!("plugin_update::{event_name}"), event_type = %event_name);
        let _guard = span.entered();

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Mouse(mouse) => match self.map_mouse_event(mouse) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match FetchResponse::from_host(status, body, &context) {
                    Ok(response) => Event::FetchResolved(response),
                    Err(e) => {
                        tracing::debug!(error = %e, status, "ignoring web request result without a ticket");
                        return false;
                    }
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => match status {
                PermissionStatus::Granted => Event::Start,
                PermissionStatus::Denied => Event::PermissionDenied,
            },
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(action_count = actions.len(), should_render, "event handled");
                for action in &actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        self.layout = cardsearch::ui::render(&self.app, rows, cols);
    }
}

impl State {
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Mouse(..) => "Mouse".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => format!("WebRequestResult({status})"),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => "PermissionRequestResult".to_string(),
            _ => "Other".to_string(),
        }
    }

    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, focus = ?self.app.focus, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('c') => Some(Event::CloseFocus),
                BareKey::Char('u') => Some(Event::ClearSearch),
                _ => None,
            };
        }

        match self.app.focus {
            Focus::SearchField => Some(match key.bare_key {
                BareKey::Tab | BareKey::Down | BareKey::Esc => Event::FocusPageStrip,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            }),
            Focus::PageStrip => Some(match key.bare_key {
                BareKey::Left | BareKey::Char('h') => Event::PreviousPage,
                BareKey::Right | BareKey::Char('l') => Event::NextPage,
                BareKey::Home => Event::FirstPage,
                BareKey::End => Event::LastPage,
                BareKey::Char(c @ '1'..='9') => Event::SelectPage(self.app.pages.page_for_digit(c)?),
                BareKey::Tab | BareKey::Up | BareKey::Char('/') => Event::FocusSearchField,
                BareKey::Esc | BareKey::Char('q') => Event::CloseFocus,
                _ => return None,
            }),
        }
    }

    fn map_mouse_event(&self, mouse: Mouse) -> Option<Event> {
        let Mouse::LeftClick(line, col) = mouse else {
            return None;
        };
        let page = self.layout.page_at_host(line, col)?;
        tracing::debug!(line, col, page, "page marker clicked");
        Some(Event::SelectPage(page))
    }

    fn execute_action(action: &Action) {
        let _span = tracing::debug_span!("execute_action", action = ?action).entered();

        match action {
            Action::Fetch(request) => {
                tracing::debug!(kind = %request.ticket.kind, seq = request.ticket.seq, url = %request.url, "issuing web request");
                let mut headers = BTreeMap::new();
                headers.insert("Accept".to_string(), "application/json".to_string());
                web_request(&request.url, HttpVerb::Get, headers, vec![], request.ticket.to_context());
            }
            Action::CloseFocus => hide_self(),
        }
    }
}
