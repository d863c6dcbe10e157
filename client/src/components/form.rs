//! Form wrapper that swallows native submission.

use leptos::prelude::*;

#[component]
pub fn TaForm(#[prop(optional)] on_submit: Option<Callback<()>>, children: Children) -> impl IntoView {
    view! {
        <form
            class="ta-form"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                if let Some(on_submit) = on_submit {
                    on_submit.run(());
                }
            }
        >
            {children()}
        </form>
    }
}
