//! Headless customer search combobox.
//!
//! The widget collects keystrokes, asks the customer search endpoint for
//! matches without navigating, shows the matches as a selectable list and
//! commits the chosen customer's id to a hidden `customerId` form field.
//!
//! # Overview
//!
//! - [`Combobox`]: the selection state machine. Every search it asks for
//!   carries a [`RequestTicket`]; responses for superseded tickets are
//!   discarded so a slow, older response never replaces newer results.
//! - [`LatestRequestGate`]: the latest-request-wins utility behind that rule.
//! - [`HttpCustomerSearchClient`]: `reqwest` client for
//!   `GET /resources/customers`.
//! - [`Fetcher`]: spawns searches onto the runtime and hands resolutions
//!   back in arrival order.
//! - [`render_html`]: markup for the current state.
//!
//! # Example
//!
//! ```
//! use customer_combobox::{Combobox, ComboboxState, Customer, SearchResult};
//!
//! let mut combobox = Combobox::new();
//! let request = combobox.input_changed("jo").expect("non-empty input searches");
//! combobox.resolve(
//!     request.ticket(),
//!     Ok(SearchResult::new(vec![Customer::new("1", "John Doe", "john@x.com")])),
//! );
//! assert_eq!(combobox.state(), ComboboxState::OpenWithResults);
//!
//! combobox.highlight_next();
//! combobox.select_highlighted();
//! assert_eq!(combobox.hidden_value(), "1");
//! assert_eq!(combobox.state(), ComboboxState::Selected);
//! ```

mod client;
mod combobox;
mod customer;
mod error;
mod fetcher;
mod latest;
mod render;

pub use client::{CustomerSearchClient, HttpCustomerSearchClient};
pub use combobox::{
    Combobox, ComboboxHooks, ComboboxState, NoHooks, Resolution, SEARCH_PATH, SearchRequest,
};
pub use customer::{Customer, SearchResult};
pub use error::{ClientConfigError, FetchError};
pub use fetcher::{Fetcher, FetchResolution};
pub use latest::{LatestRequestGate, RequestTicket};
pub use render::{
    ComboboxView, ERROR_ID, HIDDEN_INPUT_NAME, INPUT_ID, LISTBOX_ID, OptionRow, escape_html,
    render_html,
};
