//! Combobox selection state machine.
//!
//! The machine owns the input text, the last applied result set, the
//! highlight cursor, the committed selection and an optional error message.
//! [`ComboboxState`] is derived from those fields rather than stored, so it
//! cannot drift from what is rendered.

use tracing::debug;

use crate::customer::{Customer, SearchResult};
use crate::error::FetchError;
use crate::latest::{LatestRequestGate, RequestTicket};

/// Resource path every search targets, regardless of where the widget is
/// embedded.
pub const SEARCH_PATH: &str = "/resources/customers";

/// Visible state of the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComboboxState {
    /// Menu closed, nothing selected.
    Closed,
    /// Menu open but nothing to show: no search resolved yet, or the last
    /// one matched nobody.
    OpenEmpty,
    /// Menu open over a non-empty list.
    OpenWithResults,
    /// Menu closed with a committed selection.
    Selected,
}

/// Search the caller must perform on the widget's behalf.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    ticket: RequestTicket,
    query: String,
}

impl SearchRequest {
    /// Ticket to hand back to [`Combobox::resolve`].
    #[must_use]
    pub fn ticket(&self) -> RequestTicket {
        self.ticket
    }

    /// Text sent as the `query` parameter.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Resource path, always [`SEARCH_PATH`].
    #[must_use]
    pub fn path(&self) -> &'static str {
        SEARCH_PATH
    }
}

/// Outcome of feeding a response to [`Combobox::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The response belonged to the latest request and now drives the list.
    Applied {
        /// Number of customers now listed.
        count: usize,
    },
    /// A newer request was issued after this one; the response was dropped.
    Stale,
}

/// Callbacks fired when the widget's observable state changes.
///
/// Every method defaults to a no-op. Hooks fire only on an actual change:
/// re-opening an open menu or re-selecting the selected customer is silent.
pub trait ComboboxHooks {
    /// Input text changed, by typing or by a selection filling it in.
    fn on_input_change(&mut self, _text: &str) {}

    /// Selection committed (`Some`) or cleared (`None`).
    fn on_item_selected(&mut self, _customer: Option<&Customer>) {}

    /// Menu opened (`true`) or closed (`false`).
    fn on_open_state_change(&mut self, _open: bool) {}
}

/// Hooks that ignore every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl ComboboxHooks for NoHooks {}

/// Customer search combobox.
#[derive(Debug, Default)]
pub struct Combobox<H = NoHooks> {
    input: String,
    open: bool,
    results: Vec<Customer>,
    highlighted: Option<usize>,
    selected: Option<Customer>,
    error: Option<String>,
    gate: LatestRequestGate,
    in_flight: Option<RequestTicket>,
    hooks: H,
}

impl Combobox<NoHooks> {
    /// Closed widget with no selection and no hooks.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<H: ComboboxHooks> Combobox<H> {
    /// Closed widget reporting changes to `hooks`.
    pub fn with_hooks(hooks: H) -> Self {
        Self {
            input: String::new(),
            open: false,
            results: Vec::new(),
            highlighted: None,
            selected: None,
            error: None,
            gate: LatestRequestGate::new(),
            in_flight: None,
            hooks,
        }
    }

    /// Derived visible state.
    #[must_use]
    pub fn state(&self) -> ComboboxState {
        match (self.open, self.results.is_empty(), self.selected.is_some()) {
            (true, true, _) => ComboboxState::OpenEmpty,
            (true, false, _) => ComboboxState::OpenWithResults,
            (false, _, true) => ComboboxState::Selected,
            (false, _, false) => ComboboxState::Closed,
        }
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the menu is open, regardless of whether it has rows.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the menu should be drawn: open and non-empty.
    #[must_use]
    pub fn display_menu(&self) -> bool {
        self.open && !self.results.is_empty()
    }

    /// Whether the latest search is still outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Customers from the last applied search, in endpoint order.
    #[must_use]
    pub fn results(&self) -> &[Customer] {
        &self.results
    }

    /// Index of the highlighted row.
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// Committed selection.
    #[must_use]
    pub fn selected(&self) -> Option<&Customer> {
        self.selected.as_ref()
    }

    /// Value of the hidden `customerId` field: the selected id, or empty.
    #[must_use]
    pub fn hidden_value(&self) -> &str {
        self.selected.as_ref().map_or("", Customer::id)
    }

    /// Inline error message, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Installed hooks.
    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// React to the user editing the input.
    ///
    /// Empty text only updates the input and asks for nothing. Any other
    /// text, whitespace included, is sent as typed: it opens the menu, drops the highlight and returns a request whose
    /// ticket supersedes every earlier one. Identical consecutive inputs are
    /// not deduplicated.
    pub fn input_changed(&mut self, text: &str) -> Option<SearchRequest> {
        self.set_input(text);
        if text.is_empty() {
            return None;
        }
        self.set_open(true);
        self.highlighted = None;
        let ticket = self.gate.issue();
        self.in_flight = Some(ticket);
        debug!(%ticket, query_len = text.chars().count(), "customer search issued");
        Some(SearchRequest {
            ticket,
            query: text.to_owned(),
        })
    }

    /// Apply the outcome of the search tagged with `ticket`.
    ///
    /// Outcomes for superseded or already settled tickets are dropped. A
    /// failed search is shown as an empty list.
    pub fn resolve(
        &mut self,
        ticket: RequestTicket,
        outcome: Result<SearchResult, FetchError>,
    ) -> Resolution {
        if self.gate.is_stale(ticket) || self.in_flight != Some(ticket) {
            debug!(%ticket, "stale customer search discarded");
            return Resolution::Stale;
        }
        self.in_flight = None;
        self.results = match outcome {
            Ok(result) => result.customers,
            Err(error) => {
                debug!(%ticket, %error, "customer search failed; showing no results");
                Vec::new()
            }
        };
        self.highlighted = None;
        let count = self.results.len();
        debug!(%ticket, count, "customer search applied");
        Resolution::Applied { count }
    }

    /// Open the menu, showing the last applied results.
    pub fn open(&mut self) {
        self.set_open(true);
    }

    /// Close the menu without selecting (blur, escape). The selection is
    /// left as it was.
    pub fn close(&mut self) {
        self.highlighted = None;
        self.set_open(false);
    }

    /// Move the highlight down, wrapping to the first row.
    pub fn highlight_next(&mut self) -> Option<usize> {
        let len = self.navigable_len()?;
        let next = self.highlighted.map_or(0, |index| (index + 1) % len);
        self.highlighted = Some(next);
        self.highlighted
    }

    /// Move the highlight up, wrapping to the last row.
    pub fn highlight_previous(&mut self) -> Option<usize> {
        let len = self.navigable_len()?;
        let previous = match self.highlighted {
            None | Some(0) => len - 1,
            Some(index) => index - 1,
        };
        self.highlighted = Some(previous);
        self.highlighted
    }

    /// Highlight row `index` (pointer hover). Out-of-range indices are
    /// ignored.
    pub fn highlight(&mut self, index: usize) -> bool {
        match self.navigable_len() {
            Some(len) if index < len => {
                self.highlighted = Some(index);
                true
            }
            _ => false,
        }
    }

    /// Commit the highlighted row (keyboard confirm).
    pub fn select_highlighted(&mut self) -> Option<&Customer> {
        let index = self.highlighted?;
        self.select(index)
    }

    /// Commit row `index`: remember the customer, fill the input with its
    /// name and close the menu. No search is issued for the filled-in text.
    pub fn select(&mut self, index: usize) -> Option<&Customer> {
        if !self.display_menu() {
            return None;
        }
        let customer = self.results.get(index)?.clone();
        let changed = self.selected.as_ref() != Some(&customer);
        self.set_input(customer.display_text());
        self.close();
        if changed {
            self.hooks.on_item_selected(Some(&customer));
        }
        self.selected = Some(customer);
        self.selected.as_ref()
    }

    /// Forget the committed selection; the hidden value becomes empty.
    pub fn clear_selection(&mut self) {
        if self.selected.take().is_some() {
            self.hooks.on_item_selected(None);
        }
    }

    /// Show or clear an inline error message. Blank messages clear it. The
    /// state machine is unaffected.
    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error.filter(|message| !message.trim().is_empty());
    }

    fn navigable_len(&self) -> Option<usize> {
        self.display_menu().then_some(self.results.len())
    }

    fn set_input(&mut self, text: &str) {
        if self.input != text {
            text.clone_into(&mut self.input);
            self.hooks.on_input_change(text);
        }
    }

    fn set_open(&mut self, open: bool) {
        if self.open != open {
            self.open = open;
            self.hooks.on_open_state_change(open);
        }
    }
}
