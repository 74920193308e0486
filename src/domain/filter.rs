//! The user-controlled search filter.
//!
//! A [`Filter`] is the `(name, page)` pair that drives every query. Both fields
//! are only mutated through [`Filter::propose_name`] and [`Filter::set_page`],
//! which enforce the acceptance rules and report whether the value actually
//! changed. A change is what triggers a new pair of queries.

/// Shortest non-empty search term that is forwarded to the backend.
///
/// Partial input of one or two characters is held back so that typing does
/// not fire a query per keystroke.
pub const MIN_NAME_LEN: usize = 3;

/// Search term and current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filter {
    /// Substring the backend matches card names against. Empty means no filter.
    pub name: String,

    /// One-based page number.
    pub page: u32,
}

impl Default for Filter {
    fn default() -> Self {
        Self {
            name: String::new(),
            page: 1,
        }
    }
}

impl Filter {
    /// Returns `true` if `candidate` would be accepted as a search term.
    ///
    /// Length is measured in characters, not bytes.
    #[must_use]
    pub fn accepts_name(candidate: &str) -> bool {
        let len = candidate.chars().count();
        len == 0 || len >= MIN_NAME_LEN
    }

    /// Proposes a new search term.
    ///
    /// The term is stored iff it is empty or at least [`MIN_NAME_LEN`]
    /// characters long. Returns `true` only when the stored value changed.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardsearch::domain::Filter;
    ///
    /// let mut filter = Filter::default();
    /// assert!(!filter.propose_name("cy"));
    /// assert_eq!(filter.name, "");
    /// assert!(filter.propose_name("cyber"));
    /// assert!(!filter.propose_name("cyber"));
    /// assert!(filter.propose_name(""));
    /// ```
    pub fn propose_name(&mut self, candidate: &str) -> bool {
        if !Self::accepts_name(candidate) {
            tracing::trace!(candidate_len = candidate.len(), "search term held back");
            return false;
        }
        if self.name == candidate {
            return false;
        }
        self.name = candidate.to_string();
        true
    }

    /// Selects a page.
    ///
    /// Any positive page is accepted; `0` is ignored. Returns `true` only when
    /// the page changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        if page == 0 || self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    /// Returns `true` if no search term is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        self.name.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_without_name() {
        let filter = Filter::default();
        assert_eq!(filter.name, "");
        assert_eq!(filter.page, 1);
        assert!(filter.is_unfiltered());
    }

    #[test]
    fn name_updated_only_for_empty_or_three_plus_chars() {
        let cases = [
            ("", true),
            ("a", false),
            ("ab", false),
            ("abc", true),
            ("dark magician", true),
        ];

        for (candidate, accepted) in cases {
            let mut filter = Filter {
                name: "previous".to_string(),
                page: 1,
            };
            let changed = filter.propose_name(candidate);
            assert_eq!(changed, accepted, "candidate {candidate:?}");
            if accepted {
                assert_eq!(filter.name, candidate);
            } else {
                assert_eq!(filter.name, "previous");
            }
        }
    }

    #[test]
    fn name_length_counts_characters() {
        // two characters, six bytes
        assert!(!Filter::accepts_name("龍王"));
        assert!(Filter::accepts_name("青眼の"));
    }

    #[test]
    fn same_name_is_not_a_change() {
        let mut filter = Filter::default();
        assert!(!filter.propose_name(""));
        assert!(filter.propose_name("kuriboh"));
        assert!(!filter.propose_name("kuriboh"));
    }

    #[test]
    fn page_becomes_exactly_the_clicked_value() {
        let mut filter = Filter::default();
        for page in [3, 1, 42, 7] {
            filter.set_page(page);
            assert_eq!(filter.page, page);
        }
    }

    #[test]
    fn zero_and_unchanged_pages_are_ignored() {
        let mut filter = Filter::default();
        assert!(!filter.set_page(0));
        assert_eq!(filter.page, 1);
        assert!(!filter.set_page(1));
        assert!(filter.set_page(2));
    }
}
