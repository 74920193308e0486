//! Sandbox path handling.

use std::path::PathBuf;

/// File that finished spans are appended to, inside [`get_data_dir`].
pub const SPAN_FILE_NAME: &str = "cardsearch-spans.jsonl";

/// Directory holding the plugin's trace files.
///
/// `/host` usually resolves to the user's home directory, so on the host this
/// is `~/.local/share/zellij/cardsearch`.
///
/// ```
/// use cardsearch::infrastructure::get_data_dir;
///
/// assert_eq!(get_data_dir().to_str(), Some("/host/.local/share/zellij/cardsearch"));
/// ```
#[must_use]
pub fn get_data_dir() -> PathBuf {
    PathBuf::from("/host/.local/share/zellij").join("cardsearch")
}

/// Rewrites a leading `~` to the sandbox's `/host` mount.
///
/// ```
/// use cardsearch::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/themes/dark.toml"), "/host/themes/dark.toml");
/// assert_eq!(expand_tilde("~"), "/host");
/// assert_eq!(expand_tilde("/etc/theme.toml"), "/etc/theme.toml");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    match path.strip_prefix('~') {
        Some("") => "/host".to_string(),
        Some(rest) if rest.starts_with('/') => format!("/host{rest}"),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tilde_is_only_expanded_as_a_home_prefix() {
        assert_eq!(expand_tilde("~user/theme.toml"), "~user/theme.toml");
        assert_eq!(expand_tilde("themes/~/x"), "themes/~/x");
        assert_eq!(expand_tilde("~/a"), "/host/a");
    }

    #[test]
    fn span_file_lives_in_data_dir() {
        let path = get_data_dir().join(SPAN_FILE_NAME);
        assert!(path.ends_with("cardsearch/cardsearch-spans.jsonl"));
    }
}
