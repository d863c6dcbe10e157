//! Root application component.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::plugins::PluginContext;
use crate::plugins::loading::LoadingHost;
use crate::plugins::loading_bar::LoadingBarHost;
use crate::plugins::message::MessageHost;
use crate::registry::ComponentRegistry;
use crate::router::{AppRouter, SharedLoader};

pub const NORMALIZE_STYLESHEET: &str = "https://cdnjs.cloudflare.com/ajax/libs/normalize/8.0.1/normalize.min.css";
pub const ICONS_STYLESHEET: &str = "https://cdnjs.cloudflare.com/ajax/libs/ionicons/2.0.1/css/ionicons.min.css";
pub const APP_STYLESHEET: &str = "/pkg/admin.css";

/// Everything the render root needs, assembled by `Bootstrap`.
#[derive(Clone)]
pub struct AppRoot {
    pub registry: ComponentRegistry,
    pub loader: SharedLoader,
    pub plugins: PluginContext,
}

impl std::fmt::Debug for AppRoot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppRoot")
            .field("registry", &self.registry)
            .field("plugins", &self.plugins.len())
            .finish_non_exhaustive()
    }
}

/// Root application component.
///
/// Provides the registry, the view loader and every plugin service to the
/// tree, then attaches the router.
#[component]
pub fn App(root: AppRoot) -> impl IntoView {
    provide_meta_context();

    let AppRoot { registry, loader, plugins } = root;
    provide_context(registry);
    provide_context(loader);
    plugins.apply();

    view! {
        <Stylesheet id="normalize" href=NORMALIZE_STYLESHEET/>
        <Stylesheet id="ionicons" href=ICONS_STYLESHEET/>
        <Stylesheet id="admin" href=APP_STYLESHEET/>
        <Title text="Admin"/>

        <LoadingBarHost/>
        <AppRouter/>
        <MessageHost/>
        <LoadingHost/>
    }
}
