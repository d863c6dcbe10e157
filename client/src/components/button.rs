//! Button with variant styling and an optional leading icon.

use leptos::prelude::*;

use super::icon::TaIcon;

#[component]
pub fn TaButton(
    /// `default`, `primary`, `ghost`, `text` or `error`.
    #[prop(optional, into)]
    kind: Option<String>,
    /// The HTML `type` attribute.
    #[prop(optional, into)]
    html_type: Option<String>,
    #[prop(into, optional)] icon: MaybeProp<String>,
    #[prop(into, optional)] disabled: MaybeProp<bool>,
    #[prop(optional)] on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let class = format!("ta-btn ta-btn--{}", kind.as_deref().unwrap_or("default"));
    view! {
        <button
            class=class
            type=html_type.unwrap_or_else(|| "button".to_owned())
            disabled=move || disabled.get().unwrap_or(false)
            on:click=move |ev| {
                if let Some(on_click) = on_click {
                    on_click.run(ev);
                }
            }
        >
            {move || icon.get().map(|name| view! { <TaIcon name=name/> })}
            <span>{children()}</span>
        </button>
    }
}
