//! App-wide UI services installed once before mount.
//!
//! DESIGN
//! ======
//! Each plugin is installed by an explicit call that returns a disposable
//! handle. Installation records the context values the plugin wants to
//! expose; `App` replays those provisions inside its own reactive owner, so
//! nothing depends on module load order.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod loading;
pub mod loading_bar;
pub mod message;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

pub use loading::LoadingPlugin;
pub use loading_bar::LoadingBarPlugin;
pub use message::MessagePlugin;

/// Deferred `provide_context` call recorded at install time.
pub type Provision = Arc<dyn Fn() + Send + Sync>;

/// Collects the context values installed plugins expose to the render tree.
#[derive(Clone, Default)]
pub struct PluginContext {
    provisions: Vec<Provision>,
}

impl PluginContext {
    /// Expose `value` to every component under `App`.
    pub fn provide<T>(&mut self, value: T)
    where
        T: Clone + Send + Sync + 'static,
    {
        self.provisions.push(Arc::new(move || provide_context(value.clone())));
    }

    /// Run every recorded provision in the current reactive owner.
    pub fn apply(&self) {
        for provision in &self.provisions {
            provision();
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.provisions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.provisions.is_empty()
    }
}

/// An installable UI service.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn install(&self, ctx: &mut PluginContext) -> PluginHandle;
}

/// Disposable result of installing one plugin.
pub struct PluginHandle {
    name: &'static str,
    teardown: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl PluginHandle {
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name, teardown: None }
    }

    #[must_use]
    pub fn on_dispose(mut self, teardown: impl FnOnce() + Send + Sync + 'static) -> Self {
        self.teardown = Some(Box::new(teardown));
        self
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the teardown. Returns `false` if it already ran.
    pub fn dispose(&mut self) -> bool {
        match self.teardown.take() {
            Some(teardown) => {
                teardown();
                true
            }
            None => false,
        }
    }
}

impl fmt::Debug for PluginHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginHandle")
            .field("name", &self.name)
            .field("live", &self.teardown.is_some())
            .finish()
    }
}

/// Ordered set of plugins, installed at most once.
#[derive(Default)]
pub struct PluginSet {
    plugins: Vec<Arc<dyn Plugin>>,
    handles: Vec<PluginHandle>,
    context: PluginContext,
    installed: bool,
}

impl PluginSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The message, loading and loading-bar services.
    #[must_use]
    pub fn standard() -> Self {
        Self::new().with(MessagePlugin).with(LoadingPlugin).with(LoadingBarPlugin)
    }

    /// Add a plugin. A plugin whose name is already present is ignored.
    #[must_use]
    pub fn with(mut self, plugin: impl Plugin + 'static) -> Self {
        if !self.plugins.iter().any(|p| p.name() == plugin.name()) {
            self.plugins.push(Arc::new(plugin));
        }
        self
    }

    /// Install every plugin in insertion order. Returns how many were
    /// installed by this call; repeated calls install nothing.
    pub fn install_all(&mut self) -> usize {
        if self.installed {
            return 0;
        }
        for plugin in &self.plugins {
            log::debug!("installing plugin {}", plugin.name());
            self.handles.push(plugin.install(&mut self.context));
        }
        self.installed = true;
        self.handles.len()
    }

    #[must_use]
    pub fn is_installed(&self) -> bool {
        self.installed
    }

    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    #[must_use]
    pub fn handles(&self) -> &[PluginHandle] {
        &self.handles
    }

    /// Provisions recorded by installed plugins.
    #[must_use]
    pub fn context(&self) -> PluginContext {
        self.context.clone()
    }

    /// Dispose every handle in reverse install order. Returns how many
    /// teardowns ran.
    pub fn dispose_all(&mut self) -> usize {
        self.handles.iter_mut().rev().filter_map(|h| h.dispose().then_some(())).count()
    }
}

impl fmt::Debug for PluginSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginSet")
            .field("plugins", &self.names())
            .field("installed", &self.installed)
            .finish()
    }
}

/// Milliseconds since the Unix epoch on the browser clock.
#[cfg(feature = "csr")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(not(feature = "csr"))]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
