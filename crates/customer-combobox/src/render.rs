//! View model and HTML markup for the combobox.
//!
//! [`ComboboxView`] is a plain snapshot of what must be shown; UI bindings
//! can consume it directly or use [`render_html`] for server-rendered pages.

use std::fmt;

use crate::combobox::{Combobox, ComboboxHooks};

/// Name of the hidden form field carrying the selected customer id.
pub const HIDDEN_INPUT_NAME: &str = "customerId";
/// DOM id of the text input.
pub const INPUT_ID: &str = "customer-input";
/// DOM id of the option list.
pub const LISTBOX_ID: &str = "customer-listbox";
/// DOM id of the inline error message.
pub const ERROR_ID: &str = "customer-error";

const LABEL_ID: &str = "customer-label";
const LABEL_TEXT: &str = "Customer";

/// One rendered option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    /// DOM id, referenced by `aria-activedescendant`.
    pub dom_id: String,
    /// Customer id the row commits.
    pub customer_id: String,
    /// `"{name} ({email})"`.
    pub label: String,
    /// Whether the keyboard/pointer cursor is on this row.
    pub highlighted: bool,
}

/// Snapshot of everything the widget displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComboboxView {
    /// Text input value.
    pub input_value: String,
    /// Hidden `customerId` value; empty without a selection.
    pub hidden_value: String,
    /// Whether the option list is shown.
    pub expanded: bool,
    /// DOM id of the highlighted row.
    pub active_descendant: Option<String>,
    /// Rows, empty whenever the list is hidden.
    pub rows: Vec<OptionRow>,
    /// Inline error message.
    pub error: Option<String>,
    /// Whether a search is outstanding.
    pub busy: bool,
}

fn option_dom_id(index: usize) -> String {
    format!("customer-option-{index}")
}

impl ComboboxView {
    /// Capture the current state of `combobox`.
    pub fn from_combobox<H: ComboboxHooks>(combobox: &Combobox<H>) -> Self {
        let expanded = combobox.display_menu();
        let rows = if expanded {
            combobox
                .results()
                .iter()
                .enumerate()
                .map(|(index, customer)| OptionRow {
                    dom_id: option_dom_id(index),
                    customer_id: customer.id().to_owned(),
                    label: customer.label(),
                    highlighted: combobox.highlighted() == Some(index),
                })
                .collect()
        } else {
            Vec::new()
        };
        Self {
            input_value: combobox.input().to_owned(),
            hidden_value: combobox.hidden_value().to_owned(),
            expanded,
            active_descendant: combobox
                .highlighted()
                .filter(|_| expanded)
                .map(option_dom_id),
            rows,
            error: combobox.error().map(str::to_owned),
            busy: combobox.is_loading(),
        }
    }

    /// Render the widget markup.
    #[must_use]
    pub fn to_html(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ComboboxView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#"<div class="customer-combobox">"#)?;
        write!(
            f,
            r#"<input name="{HIDDEN_INPUT_NAME}" type="hidden" value="{}">"#,
            escape_html(&self.hidden_value)
        )?;
        write!(
            f,
            r#"<div class="customer-combobox__label"><label id="{LABEL_ID}" for="{INPUT_ID}">{LABEL_TEXT}</label>"#
        )?;
        if let Some(error) = &self.error {
            write!(f, r#"<em id="{ERROR_ID}">{}</em>"#, escape_html(error))?;
        }
        f.write_str("</div>")?;

        write!(
            f,
            r#"<input id="{INPUT_ID}" type="text" role="combobox" autocomplete="off" aria-autocomplete="list" aria-controls="{LISTBOX_ID}" aria-labelledby="{LABEL_ID}" aria-expanded="{}" aria-busy="{}""#,
            self.expanded, self.busy
        )?;
        if let Some(active) = &self.active_descendant {
            write!(f, r#" aria-activedescendant="{active}""#)?;
        }
        if self.error.is_some() {
            write!(f, r#" aria-invalid="true" aria-errormessage="{ERROR_ID}""#)?;
        }
        write!(f, r#" value="{}">"#, escape_html(&self.input_value))?;

        write!(
            f,
            r#"<ul id="{LISTBOX_ID}" role="listbox" aria-labelledby="{LABEL_ID}""#
        )?;
        if !self.expanded {
            f.write_str(" hidden")?;
        }
        f.write_str(">")?;
        for row in &self.rows {
            write!(
                f,
                r#"<li id="{}" role="option" aria-selected="{}" data-customer-id="{}">{}</li>"#,
                row.dom_id,
                row.highlighted,
                escape_html(&row.customer_id),
                escape_html(&row.label)
            )?;
        }
        f.write_str("</ul></div>")
    }
}

/// Render `combobox` as HTML.
///
/// # Examples
/// ```
/// use customer_combobox::{Combobox, render_html};
///
/// let html = render_html(&Combobox::new());
/// assert!(html.contains(r#"<input name="customerId" type="hidden" value="">"#));
/// assert!(html.contains(" hidden>"));
/// ```
pub fn render_html<H: ComboboxHooks>(combobox: &Combobox<H>) -> String {
    ComboboxView::from_combobox(combobox).to_html()
}

/// Escape text for HTML content and double- or single-quoted attributes.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
