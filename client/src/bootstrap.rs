//! Application start-up: build the root, install plugins, mount.
//!
//! SYSTEM CONTEXT
//! ==============
//! The crate entry point calls [`Bootstrap::standard`] and mounts it on
//! [`APP_ANCHOR`]. Mounting goes through a [`MountHost`] so the same sequence
//! runs against the browser DOM or an in-memory host.
//!
//! A second mount on the same anchor fails with
//! [`MountError::AnchorConsumed`]; it never renders twice.

#[cfg(test)]
#[path = "bootstrap_test.rs"]
mod bootstrap_test;

use std::collections::HashSet;

use leptos::prelude::AnyView;

use crate::app::AppRoot;
use crate::components;
use crate::plugins::{Plugin, PluginSet};
use crate::registry::{ComponentProps, ComponentRegistry};
use crate::router::{self, SharedLoader};

/// Selector of the element the app mounts into.
pub const APP_ANCHOR: &str = "#app";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
    #[error("mount anchor `{0}` not found in the document")]
    AnchorMissing(String),
    #[error("mount anchor `{0}` already hosts an app")]
    AnchorConsumed(String),
    #[error("dom error: {0}")]
    Dom(String),
}

/// Somewhere an [`AppRoot`] can be rendered.
pub trait MountHost {
    type Mounted;

    /// # Errors
    ///
    /// Returns [`MountError::AnchorMissing`] when `selector` matches nothing and
    /// [`MountError::AnchorConsumed`] when it already hosts an app.
    fn mount(&mut self, selector: &str, root: AppRoot) -> Result<Self::Mounted, MountError>;
}

/// Assembles the registry, plugins and view loader for one app root.
pub struct Bootstrap {
    registry: ComponentRegistry,
    plugins: PluginSet,
    loader: SharedLoader,
}

impl Default for Bootstrap {
    fn default() -> Self {
        Self::new()
    }
}

impl Bootstrap {
    /// Empty registry, no plugins, default loader.
    #[must_use]
    pub fn new() -> Self {
        Self { registry: ComponentRegistry::new(), plugins: PluginSet::new(), loader: router::default_loader() }
    }

    /// The five shared components and the message, loading and loading-bar plugins.
    #[must_use]
    pub fn standard() -> Self {
        Self { registry: components::standard_registry(), plugins: PluginSet::standard(), ..Self::new() }
    }

    #[must_use]
    pub fn register<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(ComponentProps) -> AnyView + Send + Sync + 'static,
    {
        self.registry.register(name, factory);
        self
    }

    #[must_use]
    pub fn with_plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins = self.plugins.with(plugin);
        self
    }

    #[must_use]
    pub fn with_loader(mut self, loader: SharedLoader) -> Self {
        self.loader = loader;
        self
    }

    #[must_use]
    pub fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    #[must_use]
    pub fn plugins(&self) -> &PluginSet {
        &self.plugins
    }

    /// Install plugins (once), then mount the root on `selector`.
    ///
    /// # Errors
    ///
    /// Propagates the host's [`MountError`]. Plugins stay installed, so a
    /// retry against another anchor does not reinstall them.
    pub fn mount<H: MountHost>(&mut self, host: &mut H, selector: &str) -> Result<H::Mounted, MountError> {
        let installed = self.plugins.install_all();
        if installed > 0 {
            log::debug!("installed {installed} plugins");
        }
        let root = AppRoot {
            registry: self.registry.clone(),
            loader: self.loader.clone(),
            plugins: self.plugins.context(),
        };
        let mounted = host.mount(selector, root)?;
        log::info!("admin client mounted on {selector} with {} components", self.registry.len());
        Ok(mounted)
    }

    /// Dispose every installed plugin. Returns how many teardowns ran.
    pub fn shutdown(&mut self) -> usize {
        self.plugins.dispose_all()
    }
}

/// Host without a DOM: tracks which anchors exist and which are taken, and
/// hands the root back to the caller.
#[derive(Debug, Default)]
pub struct MemoryHost {
    anchors: HashSet<String>,
    consumed: HashSet<String>,
}

impl MemoryHost {
    #[must_use]
    pub fn with_anchor(selector: &str) -> Self {
        let mut host = Self::default();
        host.anchors.insert(selector.to_owned());
        host
    }

    #[must_use]
    pub fn is_consumed(&self, selector: &str) -> bool {
        self.consumed.contains(selector)
    }
}

impl MountHost for MemoryHost {
    type Mounted = AppRoot;

    fn mount(&mut self, selector: &str, root: AppRoot) -> Result<AppRoot, MountError> {
        if !self.anchors.contains(selector) {
            return Err(MountError::AnchorMissing(selector.to_owned()));
        }
        if !self.consumed.insert(selector.to_owned()) {
            return Err(MountError::AnchorConsumed(selector.to_owned()));
        }
        Ok(root)
    }
}

/// Marker attribute set on an anchor once it hosts an app.
#[cfg(feature = "csr")]
const MOUNTED_ATTR: &str = "data-admin-mounted";

/// The browser document.
#[cfg(feature = "csr")]
#[derive(Debug, Default)]
pub struct DomHost;

#[cfg(feature = "csr")]
impl MountHost for DomHost {
    type Mounted = ();

    fn mount(&mut self, selector: &str, root: AppRoot) -> Result<(), MountError> {
        use leptos::prelude::*;
        use wasm_bindgen::JsCast as _;

        use crate::app::App;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| MountError::Dom("no document".to_owned()))?;
        let element = document
            .query_selector(selector)
            .map_err(|e| MountError::Dom(format!("{e:?}")))?
            .ok_or_else(|| MountError::AnchorMissing(selector.to_owned()))?;
        if element.has_attribute(MOUNTED_ATTR) {
            return Err(MountError::AnchorConsumed(selector.to_owned()));
        }
        let element: web_sys::HtmlElement = element
            .dyn_into()
            .map_err(|_| MountError::Dom(format!("`{selector}` is not an HTML element")))?;
        element.set_attribute(MOUNTED_ATTR, "").map_err(|e| MountError::Dom(format!("{e:?}")))?;

        let handle = leptos::mount::mount_to(element, move || view! { <App root=root/> });
        // The app lives for the lifetime of the page.
        std::mem::forget(handle);
        Ok(())
    }
}
