//! Read-only access to the case study content API.
//!
//! One unparameterized `GET` per `Collection`. Nothing is cached: every page
//! mount asks again. Pages load through `ContentSource`, implemented by
//! `ContentClient` over the network. Failures are `ContentFetchFailed`;
//! `fetch_or_default` reports them and hands back the empty value so the
//! caller renders an empty section.

mod error;

pub use error::ContentFetchFailed;

use common::content::Collection;
use futures_util::future::{FutureExt, LocalBoxFuture};
use gloo_console::error;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

use crate::config;

/// Where pages read their collections from.
pub trait ContentSource: Clone + 'static {
    fn fetch<T: DeserializeOwned + 'static>(
        &self,
        collection: Collection,
    ) -> LocalBoxFuture<'_, Result<T, ContentFetchFailed>>;

    /// Whether the page that owns this source has been torn down.
    fn is_cancelled(&self) -> bool;

    /// Surfaces a failed request to the developer. Never shown to visitors.
    fn report(&self, failure: &ContentFetchFailed);

    /// Fetches `collection`, falling back to `T::default()` on any failure.
    ///
    /// The failure is reported unless the page that asked is already gone.
    fn fetch_or_default<T: DeserializeOwned + Default + 'static>(
        &self,
        collection: Collection,
    ) -> LocalBoxFuture<'_, T> {
        async move {
            match self.fetch::<T>(collection).await {
                Ok(content) => content,
                Err(failure) => {
                    if !self.is_cancelled() {
                        self.report(&failure);
                    }
                    T::default()
                }
            }
        }
        .boxed_local()
    }
}

#[derive(Debug, Clone)]
pub struct ContentClient {
    api_base: String,
    /// Abort signal of the page mount this client works for, if any.
    signal: Option<AbortSignal>,
}

impl ContentClient {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            signal: None,
        }
    }

    /// A client for the API origin configured at build time.
    pub fn from_env() -> Self {
        Self::new(config::api_base())
    }

    /// Ties every request of this client to `signal`.
    pub fn bound_to(mut self, signal: Option<AbortSignal>) -> Self {
        self.signal = signal;
        self
    }

    pub fn url(&self, collection: Collection) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), collection.path())
    }

    async fn get<T: DeserializeOwned>(&self, collection: Collection) -> Result<T, ContentFetchFailed> {
        let fail = |reason: String| ContentFetchFailed { collection, reason };

        let response = Request::get(&self.url(collection))
            .abort_signal(self.signal.as_ref())
            .send()
            .await
            .map_err(|e| fail(e.to_string()))?;

        if !response.ok() {
            return Err(fail(format!(
                "HTTP {} {}",
                response.status(),
                response.status_text()
            )));
        }

        response.json::<T>().await.map_err(|e| fail(e.to_string()))
    }
}

impl ContentSource for ContentClient {
    fn fetch<T: DeserializeOwned + 'static>(
        &self,
        collection: Collection,
    ) -> LocalBoxFuture<'_, Result<T, ContentFetchFailed>> {
        self.get(collection).boxed_local()
    }

    fn is_cancelled(&self) -> bool {
        self.signal.as_ref().is_some_and(AbortSignal::aborted)
    }

    fn report(&self, failure: &ContentFetchFailed) {
        error!(failure.to_string());
    }
}
