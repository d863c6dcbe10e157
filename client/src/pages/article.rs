//! Article page.
//!
//! The page chrome is resolved by name through the component registry, so an
//! app can swap in its own `TaContainer` without touching this page.

#[cfg(test)]
#[path = "article_test.rs"]
mod article_test;

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::components::TaButton;
use crate::registry::Registered;

pub(crate) const TITLE: &str = "Articles";

fn container_attrs() -> BTreeMap<String, String> {
    BTreeMap::from([("title".to_owned(), TITLE.to_owned())])
}

pub fn render() -> AnyView {
    view! { <ArticlePage/> }.into_any()
}

#[component]
pub fn ArticlePage() -> impl IntoView {
    view! {
        <Registered name="TaContainer" attrs=container_attrs()>
            <div class="article-page__toolbar">
                <TaButton kind="primary" icon="plus" disabled=true>
                    "New article"
                </TaButton>
            </div>
            <p class="article-page__empty">"No articles yet."</p>
        </Registered>
    }
}
