//! Latest-request-wins gate.
//!
//! Each outgoing search takes a ticket with a strictly increasing sequence
//! number. Only the most recently issued ticket is accepted when responses
//! come back, whatever order they arrive in.

use std::fmt;

/// Sequence tag carried by one search request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

impl RequestTicket {
    /// Sequence number; the first ticket issued by a gate is 1.
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues tickets and decides which response may be applied.
///
/// # Examples
/// ```
/// use customer_combobox::LatestRequestGate;
///
/// let mut gate = LatestRequestGate::new();
/// let first = gate.issue();
/// let second = gate.issue();
/// assert!(gate.is_stale(first));
/// assert!(gate.accepts(second));
/// ```
#[derive(Debug, Default)]
pub struct LatestRequestGate {
    latest: u64,
}

impl LatestRequestGate {
    /// Gate that has issued nothing yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next ticket, superseding every earlier one.
    pub fn issue(&mut self) -> RequestTicket {
        self.latest += 1;
        RequestTicket(self.latest)
    }

    /// Most recently issued ticket, if any.
    #[must_use]
    pub fn latest(&self) -> Option<RequestTicket> {
        (self.latest > 0).then_some(RequestTicket(self.latest))
    }

    /// Whether a response for `ticket` may be applied.
    #[must_use]
    pub fn accepts(&self, ticket: RequestTicket) -> bool {
        self.latest > 0 && ticket.0 == self.latest
    }

    /// Whether `ticket` has been superseded (or was never issued here).
    #[must_use]
    pub fn is_stale(&self, ticket: RequestTicket) -> bool {
        !self.accepts(ticket)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn first_ticket_is_one() {
        let mut gate = LatestRequestGate::new();
        assert_eq!(gate.latest(), None);
        assert_eq!(gate.issue().sequence(), 1);
    }

    #[rstest]
    fn sequence_strictly_increases() {
        let mut gate = LatestRequestGate::new();
        let tickets: Vec<_> = (0..5).map(|_| gate.issue()).collect();
        assert!(tickets.windows(2).all(|pair| matches!(pair, [a, b] if a < b)));
        assert_eq!(gate.latest(), tickets.last().copied());
    }

    #[rstest]
    fn only_latest_ticket_is_accepted() {
        let mut gate = LatestRequestGate::new();
        let a = gate.issue();
        let ab = gate.issue();
        let abc = gate.issue();

        assert!(gate.accepts(abc));
        assert!(gate.is_stale(ab));
        assert!(gate.is_stale(a));
    }

    #[rstest]
    fn foreign_ticket_is_stale() {
        let mut other = LatestRequestGate::new();
        let foreign = other.issue();

        let gate = LatestRequestGate::new();
        assert!(gate.is_stale(foreign));
    }

    #[rstest]
    fn displays_sequence() {
        let mut gate = LatestRequestGate::new();
        assert_eq!(gate.issue().to_string(), "#1");
    }
}
