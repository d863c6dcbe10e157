//! Top-of-page progress bar driven by route loads.
//!
//! `Idle -> Running -> Finished | Failed`, and `start` may restart from any
//! state. Each `start` hands out a ticket; progress and completion calls
//! carrying an older ticket are ignored, so a late result from a superseded
//! navigation cannot move the bar of the current one.

#[cfg(test)]
#[path = "loading_bar_test.rs"]
mod loading_bar_test;

use leptos::prelude::*;

use super::{Plugin, PluginContext, PluginHandle};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BarStatus {
    #[default]
    Idle,
    Running,
    Finished,
    Failed,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadingBar {
    status: BarStatus,
    percent: u8,
    generation: u64,
}

/// Identifies one `start` of the bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarTicket(u64);

impl LoadingBar {
    /// Begin a new run, superseding any earlier one.
    pub fn start(&mut self) -> BarTicket {
        self.generation = self.generation.wrapping_add(1);
        self.status = BarStatus::Running;
        self.percent = 0;
        BarTicket(self.generation)
    }

    fn owns(&self, ticket: BarTicket) -> bool {
        self.status == BarStatus::Running && ticket.0 == self.generation
    }

    /// Set progress while running, clamped to 0..=100.
    pub fn update(&mut self, ticket: BarTicket, percent: u8) {
        if self.owns(ticket) {
            self.percent = percent.min(100);
        }
    }

    pub fn finish(&mut self, ticket: BarTicket) {
        if self.owns(ticket) {
            self.status = BarStatus::Finished;
            self.percent = 100;
        }
    }

    pub fn error(&mut self, ticket: BarTicket) {
        if self.owns(ticket) {
            self.status = BarStatus::Failed;
            self.percent = 100;
        }
    }

    /// Back to idle. The generation keeps counting so old tickets stay stale.
    pub fn reset(&mut self) {
        self.status = BarStatus::Idle;
        self.percent = 0;
    }

    /// Hide the bar once `ticket`'s run has completed. A running bar, or one
    /// restarted since, is left alone.
    pub fn settle(&mut self, ticket: BarTicket) {
        if ticket.0 == self.generation && self.status != BarStatus::Running {
            self.reset();
        }
    }

    #[must_use]
    pub fn status(&self) -> BarStatus {
        self.status
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.status != BarStatus::Idle
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct LoadingBarPlugin;

impl Plugin for LoadingBarPlugin {
    fn name(&self) -> &'static str {
        "loadingbar"
    }

    fn install(&self, ctx: &mut PluginContext) -> PluginHandle {
        let bar = RwSignal::new(LoadingBar::default());
        ctx.provide(bar);
        PluginHandle::new(self.name()).on_dispose(move || bar.dispose())
    }
}

#[component]
pub fn LoadingBarHost() -> impl IntoView {
    let Some(bar) = use_context::<RwSignal<LoadingBar>>() else {
        return ().into_any();
    };
    view! {
        <div
            class="ta-loading-bar"
            class:ta-loading-bar--failed=move || bar.with(|b| b.status() == BarStatus::Failed)
            style:display=move || if bar.with(LoadingBar::is_visible) { "block" } else { "none" }
            style:width=move || format!("{}%", bar.with(LoadingBar::percent))
        ></div>
    }
    .into_any()
}
