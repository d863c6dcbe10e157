//! Dashboard page: landing view with shortcuts to the other routes.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use crate::components::{TaContainer, TaIcon};
use crate::router::views::{ROUTE_TABLE, ViewName};

/// Routes offered as dashboard shortcuts: everything but the dashboard itself
/// and the login screen.
pub(crate) fn shortcut_views() -> Vec<ViewName> {
    ROUTE_TABLE
        .into_iter()
        .filter(|view| !matches!(view, ViewName::Dashboard | ViewName::Login))
        .collect()
}

pub fn render() -> AnyView {
    view! { <DashboardPage/> }.into_any()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <TaContainer title="Dashboard">
            <div class="dashboard-page__cards">
                {shortcut_views()
                    .into_iter()
                    .map(|view| {
                        view! {
                            <a class="dashboard-page__card" href=view.href()>
                                <TaIcon name="ios-arrow-forward" size="20"/>
                                <span>{view.as_str()}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </div>
        </TaContainer>
    }
}
