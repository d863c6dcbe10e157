//! Icon glyph from the ionicons font.

use leptos::prelude::*;

/// `name` is the ionicons glyph without its prefix, e.g. `"ios-home"`.
#[component]
pub fn TaIcon(#[prop(into)] name: String, #[prop(into, optional)] size: MaybeProp<String>) -> impl IntoView {
    view! {
        <i
            class=format!("ta-icon ion-{name}")
            style:font-size=move || size.get().map(|s| if s.chars().all(|c| c.is_ascii_digit()) { format!("{s}px") } else { s })
            aria-hidden="true"
        ></i>
    }
}
