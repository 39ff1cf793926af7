//! Pagination over a filtered country list

/// Number of cards per grid page
pub const PAGE_SIZE: usize = 20;

/// Pages within this distance of the current page get their own button
const WINDOW_RADIUS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub current_page: usize,
    pub page_size: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self {
            current_page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

impl PageState {
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Number of pages needed for `len` items
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size.max(1))
    }

    /// Clamp `page` into `[1, total_pages]`
    pub fn clamp(&self, page: usize, len: usize) -> usize {
        page.clamp(1, self.total_pages(len).max(1))
    }
}

/// One entry of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageButton {
    Previous { target: usize, disabled: bool },
    Number { page: usize, active: bool },
    Ellipsis,
    Next { target: usize, disabled: bool },
}

impl PageButton {
    /// Page this button navigates to, if it is clickable
    pub fn target(&self) -> Option<usize> {
        match *self {
            PageButton::Previous { target, disabled } | PageButton::Next { target, disabled } => {
                (!disabled).then_some(target)
            }
            PageButton::Number { page, .. } => Some(page),
            PageButton::Ellipsis => None,
        }
    }
}

/// A page of results plus its button model
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub buttons: Vec<PageButton>,
    pub current_page: usize,
    pub total_pages: usize,
}

/// Slice `filtered` for the requested page.
///
/// An out-of-range page is clamped to the nearest valid page.
pub fn paginate<T: Clone>(filtered: &[T], state: &PageState) -> Page<T> {
    if filtered.is_empty() {
        return Page {
            items: Vec::new(),
            buttons: Vec::new(),
            current_page: 1,
            total_pages: 0,
        };
    }

    let total_pages = state.total_pages(filtered.len());
    let current_page = state.clamp(state.current_page, filtered.len());
    let start = (current_page - 1) * state.page_size;
    let end = (start + state.page_size).min(filtered.len());

    Page {
        items: filtered[start..end].to_vec(),
        buttons: page_buttons(current_page, total_pages),
        current_page,
        total_pages,
    }
}

/// Button model for a pagination bar; empty when there is a single page
pub fn page_buttons(current_page: usize, total_pages: usize) -> Vec<PageButton> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let mut buttons = vec![PageButton::Previous {
        target: current_page.saturating_sub(1).max(1),
        disabled: current_page == 1,
    }];

    let low = current_page.saturating_sub(WINDOW_RADIUS);
    let high = current_page + WINDOW_RADIUS;
    for page in 1..=total_pages {
        let visible = page == 1 || page == total_pages || (low..=high).contains(&page);
        if visible {
            buttons.push(PageButton::Number {
                page,
                active: page == current_page,
            });
        } else if buttons.last() != Some(&PageButton::Ellipsis) {
            buttons.push(PageButton::Ellipsis);
        }
    }

    buttons.push(PageButton::Next {
        target: (current_page + 1).min(total_pages),
        disabled: current_page == total_pages,
    });
    buttons
}
