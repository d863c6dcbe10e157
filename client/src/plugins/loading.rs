//! Full-screen loading overlay with nested show/hide.

#[cfg(test)]
#[path = "loading_test.rs"]
mod loading_test;

use leptos::prelude::*;

use super::{Plugin, PluginContext, PluginHandle};

/// Overlay stays visible until every `show` has a matching `hide`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadingOverlay {
    depth: u32,
    text: Option<String>,
}

impl LoadingOverlay {
    pub fn show(&mut self, text: Option<String>) {
        self.depth = self.depth.saturating_add(1);
        if text.is_some() {
            self.text = text;
        }
    }

    /// Never underflows; extra calls are ignored.
    pub fn hide(&mut self) {
        self.depth = self.depth.saturating_sub(1);
        if self.depth == 0 {
            self.text = None;
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.depth > 0
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    #[must_use]
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LoadingPlugin;

impl Plugin for LoadingPlugin {
    fn name(&self) -> &'static str {
        "loading"
    }

    fn install(&self, ctx: &mut PluginContext) -> PluginHandle {
        let overlay = RwSignal::new(LoadingOverlay::default());
        ctx.provide(overlay);
        PluginHandle::new(self.name()).on_dispose(move || overlay.dispose())
    }
}

#[component]
pub fn LoadingHost() -> impl IntoView {
    let Some(overlay) = use_context::<RwSignal<LoadingOverlay>>() else {
        return ().into_any();
    };
    view! {
        <Show when=move || overlay.with(LoadingOverlay::is_visible)>
            <div class="ta-loading" role="status">
                <i class="ion-load-c ta-loading__spinner"></i>
                <span class="ta-loading__text">
                    {move || overlay.with(|o| o.text().unwrap_or("Loading...").to_owned())}
                </span>
            </div>
        </Show>
    }
    .into_any()
}
