//! Page chrome: header with navigation and a content area.
//!
//! DESIGN
//! ======
//! Navigation entries come from the route table so a new view shows up here
//! without touching this component.

use leptos::prelude::*;

use super::icon::TaIcon;
use crate::router::views::{ROUTE_TABLE, ViewName};

fn nav_icon(view: ViewName) -> &'static str {
    match view {
        ViewName::Login => "log-in",
        ViewName::Dashboard => "speedometer",
        ViewName::Article => "document-text",
    }
}

#[component]
pub fn TaContainer(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="ta-container">
            <header class="ta-container__header">
                <h1 class="ta-container__title">{title}</h1>
                <nav class="ta-container__nav">
                    {ROUTE_TABLE
                        .into_iter()
                        .filter(|view| *view != ViewName::Login)
                        .map(|view| {
                            view! {
                                <a class="ta-container__link" href=view.href()>
                                    <TaIcon name=nav_icon(view)/>
                                    <span>{view.as_str()}</span>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>
            <section class="ta-container__body">{children()}</section>
        </div>
    }
}
