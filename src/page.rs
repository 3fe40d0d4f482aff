//! Page-shell behaviors modeled as plain state.
//!
//! The project site carries four small widgets around the chat window: a
//! scroll-to-top button, an accordion, an info modal and a filterable card
//! grid. Each is a one-step state machine; keeping them here as pure types
//! lets their contracts be tested without any rendering layer.

use serde::{Deserialize, Serialize};

/// Scroll offset (in display units) past which the scroll-to-top control
/// becomes visible.
pub(crate) const SCROLL_SHOW_THRESHOLD: u32 = 200;

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ScrollToTop;

impl ScrollToTop {
    /// Visible only when the page is scrolled strictly past the threshold.
    pub(crate) fn visible(self, offset: u32) -> bool {
        offset > SCROLL_SHOW_THRESHOLD
    }

    /// Activating the control resets the scroll offset.
    pub(crate) fn activate(self) -> u32 {
        0
    }
}

/// Accordion with a fixed number of independently collapsible panels.
#[derive(Debug, Clone)]
pub(crate) struct Accordion {
    expanded: Vec<bool>,
}

impl Accordion {
    /// All panels start collapsed.
    pub(crate) fn new(panels: usize) -> Self {
        Accordion {
            expanded: vec![false; panels],
        }
    }

    /// Flip panel `index` and report its resulting state. Unknown indexes
    /// are ignored (the shell may carry fewer panels than toggles).
    pub(crate) fn toggle(&mut self, index: usize) -> bool {
        match self.expanded.get_mut(index) {
            Some(state) => {
                *state = !*state;
                *state
            }
            None => false,
        }
    }

    pub(crate) fn is_expanded(&self, index: usize) -> bool {
        self.expanded.get(index).copied().unwrap_or(false)
    }
}

/// What a modal-layer click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClickTarget {
    Backdrop,
    Content,
}

#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Modal {
    open: bool,
}

impl Modal {
    pub(crate) fn open(&mut self) {
        self.open = true;
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
    }

    /// A click on the backdrop closes the modal; clicks inside the content
    /// area leave it open.
    pub(crate) fn backdrop_click(&mut self, target: ClickTarget) {
        if target == ClickTarget::Backdrop {
            self.open = false;
        }
    }

    pub(crate) fn is_open(self) -> bool {
        self.open
    }
}

/// One dashboard card, tagged with the sensor category it reports on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Card {
    pub(crate) name: String,
    pub(crate) category: String,
}

impl Card {
    pub(crate) fn new(name: &str, category: &str) -> Self {
        Card {
            name: name.to_string(),
            category: category.to_string(),
        }
    }
}

/// The dashboard's built-in sensor cards.
pub(crate) fn default_cards() -> Vec<Card> {
    vec![
        Card::new("Cloud Camera", "camera"),
        Card::new("Temperature", "temperature"),
        Card::new("Humidity", "humidity"),
        Card::new("Precipitation", "raindrop"),
    ]
}

/// Visibility mask for `cards` under `filter`: a card shows when its category
/// contains the filter text case-insensitively, or when the filter is empty.
pub(crate) fn filter_cards(cards: &[Card], filter: &str) -> Vec<bool> {
    let needle = filter.to_lowercase();
    cards
        .iter()
        .map(|card| needle.is_empty() || card.category.to_lowercase().contains(&needle))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── scroll-to-top ───────────────────────────────────────────────

    #[test]
    fn scroll_button_hidden_at_threshold() {
        let button = ScrollToTop;
        assert!(!button.visible(0));
        assert!(!button.visible(SCROLL_SHOW_THRESHOLD));
        assert!(button.visible(SCROLL_SHOW_THRESHOLD + 1));
    }

    #[test]
    fn scroll_activation_resets_offset() {
        assert_eq!(ScrollToTop.activate(), 0);
    }

    // ── accordion ───────────────────────────────────────────────────

    #[test]
    fn accordion_toggle_flips_state() {
        let mut acc = Accordion::new(3);
        assert!(!acc.is_expanded(1));
        assert!(acc.toggle(1));
        assert!(acc.is_expanded(1));
        assert!(!acc.toggle(1));
        assert!(!acc.is_expanded(1));
    }

    #[test]
    fn accordion_panels_are_independent() {
        let mut acc = Accordion::new(2);
        acc.toggle(0);
        assert!(acc.is_expanded(0));
        assert!(!acc.is_expanded(1));
    }

    #[test]
    fn accordion_out_of_range_is_noop() {
        let mut acc = Accordion::new(1);
        assert!(!acc.toggle(9));
        assert!(!acc.is_expanded(9));
    }

    // ── modal ───────────────────────────────────────────────────────

    #[test]
    fn modal_open_close() {
        let mut modal = Modal::default();
        assert!(!modal.is_open());
        modal.open();
        assert!(modal.is_open());
        modal.close();
        assert!(!modal.is_open());
    }

    #[test]
    fn backdrop_click_closes_content_click_does_not() {
        let mut modal = Modal::default();
        modal.open();
        modal.backdrop_click(ClickTarget::Content);
        assert!(modal.is_open());
        modal.backdrop_click(ClickTarget::Backdrop);
        assert!(!modal.is_open());
    }

    // ── card filter ─────────────────────────────────────────────────

    #[test]
    fn empty_filter_shows_all_cards() {
        let cards = default_cards();
        assert!(filter_cards(&cards, "").iter().all(|v| *v));
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let cards = default_cards();
        let mask = filter_cards(&cards, "TEMP");
        let visible: Vec<&str> = cards
            .iter()
            .zip(&mask)
            .filter(|(_, v)| **v)
            .map(|(c, _)| c.name.as_str())
            .collect();
        assert_eq!(visible, vec!["Temperature"]);
    }

    #[test]
    fn filter_without_match_hides_everything() {
        let cards = default_cards();
        assert!(filter_cards(&cards, "barometer").iter().all(|v| !*v));
    }
}
