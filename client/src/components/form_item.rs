//! Labelled form row with an error slot.

use leptos::prelude::*;

#[component]
pub fn TaFormItem(
    #[prop(into)] label: String,
    #[prop(into, optional)] error: MaybeProp<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ta-form-item" class:ta-form-item--error=move || error.get().is_some()>
            <label class="ta-form-item__label">{label}</label>
            <div class="ta-form-item__content">
                {children()}
                <Show when=move || error.get().is_some()>
                    <p class="ta-form-item__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
            </div>
        </div>
    }
}
