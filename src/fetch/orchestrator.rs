use std::sync::Arc;
use std::time::Instant;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::api::{FetchError, PhotoSearch, SearchPage, SearchQuery};
use crate::fetch::pacing::LoadingPacer;

/// Identity of one search request.
///
/// Stamped on the request when the gallery issues it and echoed back in the
/// outcome. The gallery only applies an outcome whose tag equals the tag it is
/// currently waiting for.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestTag {
    /// Bumped on every committed search.
    pub generation: u64,
    pub query: String,
    pub page: u32,
}

impl RequestTag {
    pub fn search_query(&self) -> SearchQuery {
        SearchQuery::new(self.query.clone(), self.page)
    }
}

/// Result of one tagged fetch.
#[derive(Debug)]
pub enum FetchOutcome {
    Succeeded { tag: RequestTag, page: SearchPage },
    Failed { tag: RequestTag, error: FetchError },
}

impl FetchOutcome {
    pub fn tag(&self) -> &RequestTag {
        match self {
            FetchOutcome::Succeeded { tag, .. } | FetchOutcome::Failed { tag, .. } => tag,
        }
    }
}

/// Runs tagged searches on a tokio runtime and reports each outcome once.
pub struct FetchOrchestrator<C> {
    client: Arc<C>,
    pacer: LoadingPacer,
    runtime: Handle,
}

impl<C: PhotoSearch> FetchOrchestrator<C> {
    pub fn new(client: Arc<C>, pacer: LoadingPacer, runtime: Handle) -> Self {
        Self {
            client,
            pacer,
            runtime,
        }
    }

    /// Spawn the request for `tag`; `on_done` receives the outcome.
    pub fn run_search<F>(&self, tag: RequestTag, on_done: F) -> JoinHandle<()>
    where
        F: FnOnce(FetchOutcome) + Send + 'static,
    {
        let client = Arc::clone(&self.client);
        let pacer = self.pacer;
        self.runtime.spawn(async move {
            let outcome = execute(client.as_ref(), &pacer, tag).await;
            on_done(outcome);
        })
    }
}

/// Perform one tagged search.
///
/// Only successes are paced; a failure clears the indicator right away.
pub async fn execute<C: PhotoSearch>(
    client: &C,
    pacer: &LoadingPacer,
    tag: RequestTag,
) -> FetchOutcome {
    let started = Instant::now();
    tracing::info!(
        generation = tag.generation,
        query = %tag.query,
        page = tag.page,
        "Fetching photos"
    );

    match client.search(&tag.search_query()).await {
        Ok(page) => {
            pacer.hold(started).await;
            tracing::info!(
                generation = tag.generation,
                page = tag.page,
                results = page.results.len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "Fetch completed"
            );
            FetchOutcome::Succeeded { tag, page }
        }
        Err(error) => {
            tracing::warn!(
                generation = tag.generation,
                page = tag.page,
                kind = error.kind(),
                error = %error,
                "Fetch failed"
            );
            FetchOutcome::Failed { tag, error }
        }
    }
}
