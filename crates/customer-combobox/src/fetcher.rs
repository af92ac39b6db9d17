//! Non-blocking search submission.
//!
//! [`Fetcher::submit`] spawns each search onto the Tokio runtime and
//! returns at once, so the caller's event loop stays responsive. Finished
//! searches come back through an unbounded channel in arrival order; the
//! [`Combobox`] drops the ones that were superseded. Superseded requests
//! are left to complete rather than cancelled.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use crate::client::CustomerSearchClient;
use crate::combobox::{Combobox, ComboboxHooks, Resolution, SearchRequest};
use crate::customer::SearchResult;
use crate::error::FetchError;
use crate::latest::RequestTicket;

/// A finished search, tagged with the ticket of its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResolution {
    /// Ticket of the request that produced `outcome`.
    pub ticket: RequestTicket,
    /// Search outcome.
    pub outcome: Result<SearchResult, FetchError>,
}

/// Runs searches in the background and reports them as they finish.
pub struct Fetcher<C> {
    client: Arc<C>,
    tx: mpsc::UnboundedSender<FetchResolution>,
    rx: mpsc::UnboundedReceiver<FetchResolution>,
}

impl<C> Fetcher<C>
where
    C: CustomerSearchClient + 'static,
{
    /// Fetcher issuing searches through `client`.
    pub fn new(client: C) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            client: Arc::new(client),
            tx,
            rx,
        }
    }

    /// Start `request` without waiting for it.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn submit(&self, request: SearchRequest) {
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let ticket = request.ticket();
            let outcome = client.search(&request).await;
            if tx.send(FetchResolution { ticket, outcome }).is_err() {
                debug!(%ticket, "fetcher dropped before search finished");
            }
        });
    }

    /// Wait for the next search to finish.
    ///
    /// Pending forever while nothing is in flight, since the fetcher keeps
    /// its own sender alive.
    pub async fn next_resolution(&mut self) -> Option<FetchResolution> {
        self.rx.recv().await
    }

    /// Wait for the next search and feed it to `combobox`.
    pub async fn resolve_next<H: ComboboxHooks>(
        &mut self,
        combobox: &mut Combobox<H>,
    ) -> Option<Resolution> {
        let FetchResolution { ticket, outcome } = self.next_resolution().await?;
        Some(combobox.resolve(ticket, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use async_trait::async_trait;
    use rstest::rstest;

    use crate::{ComboboxState, Customer};

    /// Answers after a per-query delay with one customer named after the
    /// query, or fails for `"boom"`.
    struct DelayedClient;

    fn delay_for(query: &str) -> Duration {
        match query {
            "a" => Duration::from_millis(30),
            "ab" => Duration::from_millis(80),
            _ => Duration::from_millis(10),
        }
    }

    #[async_trait]
    impl CustomerSearchClient for DelayedClient {
        async fn search(&self, request: &SearchRequest) -> Result<SearchResult, FetchError> {
            tokio::time::sleep(delay_for(request.query())).await;
            if request.query() == "boom" {
                return Err(FetchError::Unavailable { status: 503 });
            }
            Ok(SearchResult::new(vec![Customer::new(
                request.query(),
                request.query(),
                "q@x.com",
            )]))
        }
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn slow_superseded_response_never_overwrites_newer_one() {
        let mut fetcher = Fetcher::new(DelayedClient);
        let mut combobox = Combobox::new();

        for text in ["a", "ab", "abc"] {
            let request = combobox.input_changed(text).expect("request");
            fetcher.submit(request);
        }

        let mut resolutions = Vec::new();
        for _ in 0..3 {
            resolutions.push(fetcher.resolve_next(&mut combobox).await.expect("resolution"));
        }

        // "abc" finishes first, then "a", then the slow "ab".
        assert_eq!(
            resolutions,
            [
                Resolution::Applied { count: 1 },
                Resolution::Stale,
                Resolution::Stale
            ]
        );
        let ids: Vec<_> = combobox.results().iter().map(Customer::id).collect();
        assert_eq!(ids, ["abc"]);
        assert!(!combobox.is_loading());
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn submit_does_not_block_the_caller() {
        let fetcher = Fetcher::new(DelayedClient);
        let mut combobox = Combobox::new();
        let request = combobox.input_changed("ab").expect("request");

        fetcher.submit(request);

        assert!(combobox.is_loading());
        assert_eq!(combobox.state(), ComboboxState::OpenEmpty);
    }

    #[rstest]
    #[tokio::test(start_paused = true)]
    async fn failures_are_delivered_and_applied_as_empty() {
        let mut fetcher = Fetcher::new(DelayedClient);
        let mut combobox = Combobox::new();
        let request = combobox.input_changed("boom").expect("request");
        let ticket = request.ticket();
        fetcher.submit(request);

        let resolution = fetcher.next_resolution().await.expect("resolution");
        assert_eq!(resolution.ticket, ticket);
        assert_eq!(
            resolution.outcome,
            Err(FetchError::Unavailable { status: 503 })
        );
        assert_eq!(
            combobox.resolve(resolution.ticket, resolution.outcome),
            Resolution::Applied { count: 0 }
        );
        assert!(!combobox.display_menu());
    }
}
