//! Background fetch execution.
//!
//! The event loop never awaits. It hands [`FetchRequest`]s to a [`Fetcher`]
//! and drains finished [`FetchOutcome`]s on each tick; whether an outcome is
//! still wanted is decided by the state layer, not here.

use crate::api::GithubClient;
use crate::model::{FetchOutcome, FetchRequest};
use std::sync::{mpsc, Arc};
use tokio::runtime::Runtime;
use tracing::{debug, warn};

/// Executes fetches off the UI thread.
pub trait Fetcher {
    /// Start `request`. Never blocks.
    fn dispatch(&mut self, request: FetchRequest);

    /// Outcomes finished since the last call, in completion order.
    fn drain(&mut self) -> Vec<FetchOutcome>;
}

/// [`Fetcher`] backed by a tokio runtime and a [`GithubClient`].
///
/// Each request runs as its own task, so responses may complete in any order.
pub struct HttpFetcher {
    runtime: Runtime,
    client: Arc<GithubClient>,
    tx: mpsc::Sender<FetchOutcome>,
    rx: mpsc::Receiver<FetchOutcome>,
}

impl HttpFetcher {
    /// Start the background runtime that runs requests through `client`.
    ///
    /// Fails only when the runtime cannot spawn its worker threads.
    pub fn new(client: GithubClient) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("ghscout-fetch")
            .enable_all()
            .build()?;
        let (tx, rx) = mpsc::channel();

        Ok(Self {
            runtime,
            client: Arc::new(client),
            tx,
            rx,
        })
    }
}

impl Fetcher for HttpFetcher {
    fn dispatch(&mut self, request: FetchRequest) {
        debug!(request = request.request_id().get(), "Dispatching fetch");
        let client = Arc::clone(&self.client);
        let tx = self.tx.clone();

        self.runtime.spawn(async move {
            let outcome = run_request(&client, request).await;
            if tx.send(outcome).is_err() {
                // receiver gone: the app is shutting down
                debug!("Dropping fetch outcome after shutdown");
            }
        });
    }

    fn drain(&mut self) -> Vec<FetchOutcome> {
        self.rx.try_iter().collect()
    }
}

/// Perform one request and pair the result with the ticket it was issued for.
pub async fn run_request(client: &GithubClient, request: FetchRequest) -> FetchOutcome {
    match request {
        FetchRequest::SearchUsers(ticket) => {
            let result = client.search_users(&ticket.query).await;
            if let Err(err) = &result {
                warn!(query = %ticket.query, error = %err, "User search failed");
            }
            FetchOutcome::Users { ticket, result }
        }
        FetchRequest::UserRepositories(ticket) => {
            let result = client.user_repositories(&ticket.username).await;
            if let Err(err) = &result {
                warn!(username = %ticket.username, error = %err, "Repository fetch failed");
            }
            FetchOutcome::Repositories { ticket, result }
        }
    }
}
