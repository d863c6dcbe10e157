//! Route outlet that renders a view through the context loader.

use leptos::prelude::*;

use super::loader::{LoadState, SharedLoader};
use super::views::ViewName;
use crate::plugins::loading_bar::LoadingBar;

#[cfg(feature = "csr")]
const BAR_SETTLE_MS: u32 = 400;

/// Load `name` and render its loading, loaded or failed state.
///
/// Progress is mirrored on the loading bar when that plugin is installed.
#[component]
pub fn LazyView(name: ViewName) -> impl IntoView {
    let loader = expect_context::<SharedLoader>();
    let bar = use_context::<RwSignal<LoadingBar>>();

    let module = LocalResource::new(move || {
        let loader = loader.clone();
        async move {
            let ticket = bar.and_then(|bar| bar.try_update(LoadingBar::start));
            let result = loader.load(name).await;
            if let Err(e) = &result {
                log::error!("view {name} failed to load: {e}");
            }
            if let (Some(bar), Some(ticket)) = (bar, ticket) {
                bar.update(|b| if result.is_ok() { b.finish(ticket) } else { b.error(ticket) });
                #[cfg(feature = "csr")]
                gloo_timers::callback::Timeout::new(BAR_SETTLE_MS, move || bar.update(|b| b.settle(ticket)))
                    .forget();
            }
            result
        }
    });

    view! {
        <Suspense fallback=move || view! { <p class="ta-view-loading">"Loading..."</p> }>
            {move || match LoadState::from(module.get()) {
                LoadState::Loading => view! { <p class="ta-view-loading">"Loading..."</p> }.into_any(),
                LoadState::Loaded(module) => (module.render)(),
                LoadState::Failed(err) => view! {
                    <div class="ta-view-error" role="alert">
                        <p>{format!("Could not load {name}.")}</p>
                        <p class="ta-view-error__detail">{err.to_string()}</p>
                    </div>
                }
                .into_any(),
            }}
        </Suspense>
    }
}
