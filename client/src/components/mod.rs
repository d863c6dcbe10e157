//! Shared UI components and their registry entries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages use these components directly. [`standard_registry`] also exposes
//! them by name so markup rendered through `Registered` can reach them.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod button;
pub mod container;
pub mod form;
pub mod form_item;
pub mod icon;

use leptos::prelude::*;

pub use button::TaButton;
pub use container::TaContainer;
pub use form::TaForm;
pub use form_item::TaFormItem;
pub use icon::TaIcon;

use crate::registry::{ComponentProps, ComponentRegistry};

/// Names registered by [`standard_registry`].
pub const STANDARD_COMPONENTS: [&str; 5] = ["TaIcon", "TaButton", "TaForm", "TaFormItem", "TaContainer"];

fn children_of(props: &ComponentProps) -> Option<AnyView> {
    props.children.as_ref().map(|children| children())
}

/// Registry holding the five shared components.
#[must_use]
pub fn standard_registry() -> ComponentRegistry {
    let mut registry = ComponentRegistry::new();
    registry.register("TaIcon", |props: ComponentProps| {
        view! { <TaIcon name=props.attr_or("type", "help") size=props.attr("size").map(str::to_owned)/> }.into_any()
    });
    registry.register("TaButton", |props: ComponentProps| {
        let inner = children_of(&props);
        view! {
            <TaButton
                kind=props.attr_or("kind", "default")
                html_type=props.attr_or("html-type", "button")
                icon=props.attr("icon").map(str::to_owned)
                disabled=props.flag("disabled")
            >
                {inner}
            </TaButton>
        }
        .into_any()
    });
    registry.register("TaForm", |props: ComponentProps| {
        let inner = children_of(&props);
        view! { <TaForm>{inner}</TaForm> }.into_any()
    });
    registry.register("TaFormItem", |props: ComponentProps| {
        let inner = children_of(&props);
        view! {
            <TaFormItem label=props.attr_or("label", "") error=props.attr("error").map(str::to_owned)>
                {inner}
            </TaFormItem>
        }
        .into_any()
    });
    registry.register("TaContainer", |props: ComponentProps| {
        let inner = children_of(&props);
        view! { <TaContainer title=props.attr_or("title", "")>{inner}</TaContainer> }.into_any()
    });
    registry
}
