//! Page size and page list derivation.

/// Number of cards requested per page.
pub const PAGE_SIZE: u32 = 4;

/// Length of the page list shown before any count has resolved.
pub const DEFAULT_PAGE_COUNT: u32 = 10;

/// Ordered list of selectable pages `1..=K`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageList {
    pages: Vec<u32>,
}

impl Default for PageList {
    /// Returns the fallback list `1..=10`.
    fn default() -> Self {
        Self::with_count(DEFAULT_PAGE_COUNT)
    }
}

impl PageList {
    /// Builds the list `1..=count`.
    #[must_use]
    pub fn with_count(count: u32) -> Self {
        Self {
            pages: (1..=count).collect(),
        }
    }

    /// Derives the page list from the total number of matching records.
    ///
    /// `K = round(total / PAGE_SIZE)`, rounding halves up. Note that this is
    /// rounding, not ceiling: 5 matches yield a single page.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardsearch::domain::PageList;
    ///
    /// assert_eq!(PageList::from_total(0).pages(), &[] as &[u32]);
    /// assert_eq!(PageList::from_total(2).pages(), &[1]);
    /// assert_eq!(PageList::from_total(6).pages(), &[1, 2]);
    /// ```
    #[must_use]
    pub fn from_total(total: usize) -> Self {
        let size = PAGE_SIZE as usize;
        let count = (total + size / 2) / size;
        Self::with_count(u32::try_from(count).unwrap_or(u32::MAX))
    }

    /// The selectable pages in ascending order.
    #[must_use]
    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    #[must_use]
    pub fn contains(&self, page: u32) -> bool {
        page >= 1 && (page as usize) <= self.pages.len()
    }

    #[must_use]
    pub fn first(&self) -> Option<u32> {
        self.pages.first().copied()
    }

    #[must_use]
    pub fn last(&self) -> Option<u32> {
        self.pages.last().copied()
    }

    /// Page before `page` in the list, if any.
    #[must_use]
    pub fn previous(&self, page: u32) -> Option<u32> {
        let candidate = page.checked_sub(1)?;
        self.contains(candidate).then_some(candidate)
    }

    /// Page picked by a digit key `1`-`9`, if that page is in the list.
    ///
    /// ```
    /// use cardsearch::domain::PageList;
    ///
    /// let list = PageList::with_count(3);
    /// assert_eq!(list.page_for_digit('2'), Some(2));
    /// assert_eq!(list.page_for_digit('7'), None);
    /// ```
    #[must_use]
    pub fn page_for_digit(&self, key: char) -> Option<u32> {
        let page = key.to_digit(10).filter(|&d| d >= 1)?;
        self.contains(page).then_some(page)
    }

    /// Page after `page` in the list, if any.
    #[must_use]
    pub fn next(&self, page: u32) -> Option<u32> {
        let candidate = page.checked_add(1)?;
        self.contains(candidate).then_some(candidate)
    }
}
