//! Async view loading.
//!
//! ARCHITECTURE
//! ============
//! Routes never reference page components directly. They ask a
//! [`ViewLoader`] for a [`ViewModule`] and render whatever [`LoadState`] the
//! load is in. Loads are independent: there is no ordering between concurrent
//! requests and no cancellation. A failed load is reported once and not
//! retried; the next navigation starts a fresh load.

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;

use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use futures::lock::Mutex as AsyncMutex;
use leptos::prelude::AnyView;

use super::views::ViewName;
use crate::pages;

/// Why a view module could not be produced.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModuleLoadError {
    #[error("failed to fetch chunk `{chunk}`: {reason}")]
    Network { chunk: &'static str, reason: String },
    #[error("chunk `{chunk}` does not exist")]
    MissingChunk { chunk: &'static str },
}

/// A loaded view, ready to render.
#[derive(Clone, Copy)]
pub struct ViewModule {
    pub name: ViewName,
    pub chunk: &'static str,
    pub render: fn() -> AnyView,
}

impl ViewModule {
    /// Module for a view compiled into this bundle.
    #[must_use]
    pub fn bundled(name: ViewName) -> Self {
        let render: fn() -> AnyView = match name {
            ViewName::Login => pages::login::render,
            ViewName::Dashboard => pages::dashboard::render,
            ViewName::Article => pages::article::render,
        };
        Self { name, chunk: name.chunk(), render }
    }
}

impl PartialEq for ViewModule {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.chunk == other.chunk
    }
}

impl fmt::Debug for ViewModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewModule").field("name", &self.name).field("chunk", &self.chunk).finish()
    }
}

/// Outcome of a view load as seen by the render tree.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded(ViewModule),
    Failed(ModuleLoadError),
}

impl From<Option<Result<ViewModule, ModuleLoadError>>> for LoadState {
    fn from(value: Option<Result<ViewModule, ModuleLoadError>>) -> Self {
        match value {
            None => Self::Loading,
            Some(Ok(module)) => Self::Loaded(module),
            Some(Err(err)) => Self::Failed(err),
        }
    }
}

/// Produces view modules on demand.
#[async_trait(?Send)]
pub trait ViewLoader: Send + Sync {
    /// # Errors
    ///
    /// Returns a [`ModuleLoadError`] when the view's chunk cannot be fetched.
    async fn load(&self, name: ViewName) -> Result<ViewModule, ModuleLoadError>;
}

/// Shared loader handle provided to the render tree.
pub type SharedLoader = Arc<dyn ViewLoader>;

/// Every view is compiled into the main bundle; loads always resolve.
#[derive(Clone, Copy, Debug, Default)]
pub struct BundledLoader;

#[async_trait(?Send)]
impl ViewLoader for BundledLoader {
    async fn load(&self, name: ViewName) -> Result<ViewModule, ModuleLoadError> {
        Ok(ViewModule::bundled(name))
    }
}

/// Future returned by a chunk fetch.
pub type ChunkFuture = Pin<Box<dyn Future<Output = Result<(), ModuleLoadError>>>>;

/// Loader for split bundles: fetches the view's chunk before handing out the
/// module. Each chunk has one gate; a load holds it while fetching, so views
/// sharing a chunk fetch it once even when their loads overlap. Failures are
/// not remembered; the next load to pass the gate fetches again.
pub struct ChunkLoader<F> {
    fetch: F,
    gates: Mutex<HashMap<&'static str, Arc<AsyncMutex<bool>>>>,
}

impl<F> ChunkLoader<F>
where
    F: Fn(&'static str) -> ChunkFuture + Send + Sync,
{
    pub fn new(fetch: F) -> Self {
        Self { fetch, gates: Mutex::new(HashMap::new()) }
    }

    /// Whether `chunk` has been fetched. A fetch still in flight counts as not fetched.
    #[must_use]
    pub fn is_fetched(&self, chunk: &str) -> bool {
        let gate = self.gates.lock().ok().and_then(|gates| gates.get(chunk).cloned());
        gate.and_then(|gate| gate.try_lock().map(|fetched| *fetched)).unwrap_or(false)
    }

    fn gate(&self, chunk: &'static str) -> Arc<AsyncMutex<bool>> {
        match self.gates.lock() {
            Ok(mut gates) => Arc::clone(gates.entry(chunk).or_default()),
            Err(poisoned) => Arc::clone(poisoned.into_inner().entry(chunk).or_default()),
        }
    }
}

#[async_trait(?Send)]
impl<F> ViewLoader for ChunkLoader<F>
where
    F: Fn(&'static str) -> ChunkFuture + Send + Sync,
{
    async fn load(&self, name: ViewName) -> Result<ViewModule, ModuleLoadError> {
        let chunk = name.chunk();
        let gate = self.gate(chunk);
        let mut fetched = gate.lock().await;
        if !*fetched {
            (self.fetch)(chunk).await?;
            *fetched = true;
        }
        Ok(ViewModule::bundled(name))
    }
}

#[cfg(any(test, feature = "csr"))]
fn chunk_url(chunk: &str) -> String {
    format!("/pkg/chunks/{chunk}.wasm")
}

/// Fetch a split chunk over HTTP.
#[cfg(feature = "csr")]
pub fn http_chunk_fetch(chunk: &'static str) -> ChunkFuture {
    Box::pin(async move {
        let resp = gloo_net::http::Request::get(&chunk_url(chunk))
            .send()
            .await
            .map_err(|e| ModuleLoadError::Network { chunk, reason: e.to_string() })?;
        match resp.status() {
            404 => Err(ModuleLoadError::MissingChunk { chunk }),
            _ if resp.ok() => Ok(()),
            status => Err(ModuleLoadError::Network { chunk, reason: format!("status {status}") }),
        }
    })
}
