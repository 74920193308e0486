//! Cardsearch: a Zellij plugin for searching a card database by name.
//!
//! The pane holds a "Card name" text field, a grid of matching cards four at a
//! time, and a strip of page numbers. Typing filters by name once at least
//! three characters are entered; clicking or picking a page number loads that
//! page. Data comes from a JSON REST endpoint in the style of `json-server`.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← host calls only
//! └─────────────────────────────────────────────────────┘
//!                        │  Event ↓   ↑ Action
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - Event handling, filter changes                   │
//! │  - Stale response filtering                         │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                      │
//! ┌───────────────────────┐      ┌───────────────────────┐
//! │ Query Layer (query/)  │      │ UI Layer (ui/)        │
//! │ - URLs and tickets    │      │ - Components, themes  │
//! │ - Response decoding   │      │ - Click hit testing   │
//! └───────────────────────┘      └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Filter, Card, PageList, errors                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/cardsearch.wasm" {
//!         base_url "http://localhost:3004"
//!         collection "data"
//!         stale_responses "discard"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```
//! use cardsearch::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_, actions) = handle_event(&mut state, &Event::Start)?;
//!
//! let urls: Vec<_> = actions.iter().filter_map(Action::as_fetch).map(|r| r.url.as_str()).collect();
//! assert_eq!(urls, ["http://localhost:3004/data?_limit=4&_page=1", "http://localhost:3004/data"]);
//! # Ok::<(), cardsearch::CardSearchError>(())
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod query;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, Focus, Presentation};
pub use domain::{CardSearchError, Result};
pub use query::{Endpoint, StalePolicy};
pub use ui::Theme;

use app::state::DEFAULT_PLACEHOLDER_IMAGE;
use std::collections::BTreeMap;

/// Default REST endpoint.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3004";

/// Default collection queried under the base URL.
pub const DEFAULT_COLLECTION: &str = "data";

/// Plugin configuration.
///
/// Parsed from the plugin block of a Zellij layout. Missing or invalid values
/// fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Scheme and authority of the REST API, without a trailing slash.
    pub base_url: String,

    pub collection: String,

    /// What to do with a response that arrives after a newer request of the same kind.
    pub stale_policy: StalePolicy,

    /// Built-in theme name. Ignored when `theme_file` loads.
    pub theme_name: Option<String>,

    /// Custom theme TOML; `~` maps to the sandbox's `/host`.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive, e.g. `info` or `cardsearch=debug`.
    pub trace_level: String,

    /// Image linked from the "Not found" placeholder.
    pub placeholder_image: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            stale_policy: StalePolicy::default(),
            theme_name: None,
            theme_file: None,
            trace_level: "info".to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's plugin configuration map.
    ///
    /// | key               | default                  |
    /// |-------------------|--------------------------|
    /// | `base_url`        | `http://localhost:3004`  |
    /// | `collection`      | `data`                   |
    /// | `stale_responses` | `discard` (or `accept`)  |
    /// | `theme`           | `catppuccin-mocha`       |
    /// | `theme_file`      | none                     |
    /// | `trace_level`     | `info`                   |
    /// | `placeholder_image` | built-in "missing card" image |
    ///
    /// ```
    /// use cardsearch::{Config, StalePolicy};
    /// use std::collections::BTreeMap;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("base_url".to_string(), "https://cards.example/api/".to_string());
    /// map.insert("stale_responses".to_string(), "accept".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.base_url, "https://cards.example/api");
    /// assert_eq!(config.stale_policy, StalePolicy::Accept);
    /// assert_eq!(config.collection, "data");
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let non_blank = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(str::to_string)
        };

        let base_url = non_blank("base_url")
            .and_then(|url| or_default(parse_base_url(&url), "base_url"))
            .unwrap_or(defaults.base_url);

        let stale_policy = non_blank("stale_responses")
            .and_then(|value| or_default(parse_stale_policy(&value), "stale_responses"))
            .unwrap_or(defaults.stale_policy);

        Self {
            base_url,
            collection: non_blank("collection").unwrap_or(defaults.collection),
            stale_policy,
            theme_name: non_blank("theme"),
            theme_file: non_blank("theme_file"),
            trace_level: non_blank("trace_level").unwrap_or(defaults.trace_level),
            placeholder_image: non_blank("placeholder_image").unwrap_or(defaults.placeholder_image),
        }
    }

    fn load_theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            match Theme::from_file(&path) {
                Ok(theme) => return theme,
                Err(e) => {
                    tracing::debug!(theme_file = %path, error = %e, "failed to load theme from file");
                }
            }
        }

        self.theme_name.as_deref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::debug!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Accepts `http://` and `https://` URLs, without trailing slashes.
///
/// # Errors
///
/// Returns [`CardSearchError::Config`] for any other scheme or an empty host.
fn parse_base_url(value: &str) -> Result<String> {
    let url = value.trim_end_matches('/');
    let host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| CardSearchError::Config(format!("base_url '{value}' is not an http(s) URL")))?;
    if host.is_empty() {
        return Err(CardSearchError::Config(format!("base_url '{value}' has no host")));
    }
    Ok(url.to_string())
}

/// # Errors
///
/// Returns [`CardSearchError::Config`] unless the value is `discard` or `accept`.
fn parse_stale_policy(value: &str) -> Result<StalePolicy> {
    value.parse::<StalePolicy>().map_err(CardSearchError::Config)
}

/// Logs a rejected value so the caller can fall back to the default.
fn or_default<T>(parsed: Result<T>, key: &str) -> Option<T> {
    parsed
        .map_err(|e| tracing::warn!(key, error = %e, "invalid configuration value, using default"))
        .ok()
}

/// Builds the initial application state from configuration.
///
/// No request is planned yet; the first queries go out on [`Event::Start`].
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(base_url = %config.base_url, collection = %config.collection, "initializing cardsearch plugin");

    let mut state = AppState::new(Endpoint::new(&config.base_url, &config.collection), config.load_theme());
    state.stale_policy = config.stale_policy;
    state.placeholder_image.clone_from(&config.placeholder_image);
    state
}
