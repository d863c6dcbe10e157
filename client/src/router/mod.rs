//! Route table, view loading, and the routed outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! `views` names the closed set of routes, `loader` turns a name into a view
//! module asynchronously, and `lazy_view` renders a route through the loader
//! in context.

pub mod lazy_view;
pub mod loader;
pub mod views;

use std::sync::Arc;

use leptos::prelude::*;
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

pub use lazy_view::LazyView;
pub use loader::{BundledLoader, ChunkLoader, LoadState, ModuleLoadError, SharedLoader, ViewLoader, ViewModule};
pub use views::{ROUTE_TABLE, ViewName};

/// Loader used when the bootstrap is not given one.
///
/// Builds with `ADMIN_SPLIT_CHUNKS` set fetch each view's chunk before
/// rendering it; otherwise every view ships in the main bundle.
#[must_use]
pub fn default_loader() -> SharedLoader {
    #[cfg(feature = "csr")]
    if option_env!("ADMIN_SPLIT_CHUNKS").is_some() {
        return Arc::new(ChunkLoader::new(loader::http_chunk_fetch));
    }
    Arc::new(BundledLoader)
}

/// Router attached to the app root.
#[component]
pub fn AppRouter() -> impl IntoView {
    view! {
        <Router>
            <main class="ta-app">
                <Routes fallback=|| view! { <p class="ta-not-found">"Page not found."</p> }>
                    <Route
                        path=StaticSegment(ViewName::Login.segment())
                        view=|| view! { <LazyView name=ViewName::Login/> }
                    />
                    <Route
                        path=StaticSegment(ViewName::Dashboard.segment())
                        view=|| view! { <LazyView name=ViewName::Dashboard/> }
                    />
                    <Route
                        path=StaticSegment(ViewName::Article.segment())
                        view=|| view! { <LazyView name=ViewName::Article/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
