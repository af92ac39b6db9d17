//! Customer records as returned by the search endpoint.

use serde::{Deserialize, Serialize};

/// Customer row shown in the list.
///
/// `id` is opaque and only ever echoed back through the hidden form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    id: String,
    name: String,
    email: String,
}

impl Customer {
    /// Build a customer record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
        }
    }

    /// Opaque identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Contact email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Row label, `"{name} ({email})"`.
    ///
    /// ```
    /// use customer_combobox::Customer;
    ///
    /// let customer = Customer::new("1", "John Doe", "john@x.com");
    /// assert_eq!(customer.label(), "John Doe (john@x.com)");
    /// ```
    #[must_use]
    pub fn label(&self) -> String {
        format!("{} ({})", self.name, self.email)
    }

    /// Text placed in the input once this customer is selected.
    #[must_use]
    pub fn display_text(&self) -> &str {
        &self.name
    }
}

/// Ordered matches for one query. The order is the endpoint's and is never
/// changed here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matches in ranking order.
    pub customers: Vec<Customer>,
}

impl SearchResult {
    /// Wrap an ordered list of matches.
    #[must_use]
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    /// Whether no customer matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
