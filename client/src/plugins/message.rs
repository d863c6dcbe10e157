//! Transient toast messages.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::*;

use super::{Plugin, PluginContext, PluginHandle};

/// Most messages kept on screen; the oldest is dropped past this.
pub const MAX_MESSAGES: usize = 5;
/// Default lifetime of a message.
pub const DEFAULT_DURATION_MS: u64 = 3_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageKind {
    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "information-circled",
            Self::Success => "checkmark-circled",
            Self::Warning => "alert-circled",
            Self::Error => "close-circled",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "ta-message--info",
            Self::Success => "ta-message--success",
            Self::Warning => "ta-message--warning",
            Self::Error => "ta-message--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub id: u64,
    pub kind: MessageKind,
    pub text: String,
    /// `None` keeps the message until dismissed.
    pub expires_at: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MessageQueue {
    next_id: u64,
    items: VecDeque<Message>,
}

impl MessageQueue {
    /// Queue a message. `duration_ms` of `None` keeps it until dismissed.
    pub fn push(&mut self, kind: MessageKind, text: impl Into<String>, now_ms: u64, duration_ms: Option<u64>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push_back(Message {
            id,
            kind,
            text: text.into(),
            expires_at: duration_ms.map(|d| now_ms.saturating_add(d)),
        });
        while self.items.len() > MAX_MESSAGES {
            self.items.pop_front();
        }
        id
    }

    pub fn info(&mut self, text: impl Into<String>) -> u64 {
        self.push(MessageKind::Info, text, super::now_ms(), Some(DEFAULT_DURATION_MS))
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.push(MessageKind::Success, text, super::now_ms(), Some(DEFAULT_DURATION_MS))
    }

    pub fn warning(&mut self, text: impl Into<String>) -> u64 {
        self.push(MessageKind::Warning, text, super::now_ms(), Some(DEFAULT_DURATION_MS))
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.push(MessageKind::Error, text, super::now_ms(), Some(DEFAULT_DURATION_MS))
    }

    /// Remove a message by id. Returns whether it was present.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|m| m.id != id);
        self.items.len() != before
    }

    /// Drop every message whose deadline is at or before `now_ms`.
    pub fn expire(&mut self, now_ms: u64) -> usize {
        let before = self.items.len();
        self.items.retain(|m| m.expires_at.is_none_or(|at| at > now_ms));
        before - self.items.len()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Installs a `RwSignal<MessageQueue>` into the app context.
#[derive(Clone, Copy, Debug, Default)]
pub struct MessagePlugin;

impl Plugin for MessagePlugin {
    fn name(&self) -> &'static str {
        "message"
    }

    fn install(&self, ctx: &mut PluginContext) -> PluginHandle {
        let queue = RwSignal::new(MessageQueue::default());
        ctx.provide(queue);
        PluginHandle::new(self.name()).on_dispose(move || queue.dispose())
    }
}

static LIVE_TICKERS: AtomicUsize = AtomicUsize::new(0);

/// Periodic expiry sweep for one `MessageHost`. Stops when dropped.
pub(crate) struct ExpiryTicker {
    #[cfg(feature = "csr")]
    _interval: gloo_timers::callback::Interval,
}

impl ExpiryTicker {
    #[cfg(feature = "csr")]
    const PERIOD_MS: u32 = 500;

    #[cfg_attr(not(feature = "csr"), allow(unused_variables))]
    fn start(queue: RwSignal<MessageQueue>) -> Self {
        LIVE_TICKERS.fetch_add(1, Ordering::SeqCst);
        Self {
            #[cfg(feature = "csr")]
            _interval: gloo_timers::callback::Interval::new(Self::PERIOD_MS, move || {
                if queue.with_untracked(|q| !q.is_empty()) {
                    queue.update(|q| {
                        q.expire(super::now_ms());
                    });
                }
            }),
        }
    }
}

impl Drop for ExpiryTicker {
    fn drop(&mut self) {
        LIVE_TICKERS.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Tickers currently running.
#[cfg(test)]
pub(crate) fn live_tickers() -> usize {
    LIVE_TICKERS.load(Ordering::SeqCst)
}

/// Renders the queued messages and expires them on a timer that lives as
/// long as the host.
#[component]
pub fn MessageHost() -> impl IntoView {
    let Some(queue) = use_context::<RwSignal<MessageQueue>>() else {
        return ().into_any();
    };

    let ticker = StoredValue::new_local(ExpiryTicker::start(queue));
    on_cleanup(move || ticker.dispose());

    view! {
        <div class="ta-message-host">
            <For each=move || queue.with(|q| q.iter().cloned().collect::<Vec<_>>()) key=|m| m.id let:message>
                <div class=format!("ta-message {}", message.kind.class())>
                    <i class=format!("ion-{}", message.kind.icon())></i>
                    <span class="ta-message__text">{message.text.clone()}</span>
                    <button
                        class="ta-message__close"
                        aria-label="Dismiss"
                        on:click=move |_| {
                            queue.update(|q| {
                                q.dismiss(message.id);
                            });
                        }
                    >
                        "×"
                    </button>
                </div>
            </For>
        </div>
    }
    .into_any()
}
