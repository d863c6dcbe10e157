//! Explicit component registry passed to the render root.
//!
//! DESIGN
//! ======
//! There is no process-wide registry. `Bootstrap` builds one map, hands it to
//! `App`, and `App` provides it through Leptos context. Markup that refers to a
//! component by name goes through [`Registered`], which resolves against that
//! map at render time.

#[cfg(test)]
#[path = "registry_test.rs"]
mod registry_test;

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

/// Render function stored for a registered component.
pub type ComponentFactory = Arc<dyn Fn(ComponentProps) -> AnyView + Send + Sync>;

/// Props handed to a registered component: string attributes plus children.
#[derive(Clone, Default)]
pub struct ComponentProps {
    pub attrs: BTreeMap<String, String>,
    pub children: Option<ChildrenFn>,
}

impl ComponentProps {
    #[must_use]
    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attrs.get(key).map(String::as_str)
    }

    /// Attribute value or `default` when unset.
    #[must_use]
    pub fn attr_or(&self, key: &str, default: &str) -> String {
        self.attr(key).unwrap_or(default).to_owned()
    }

    #[must_use]
    pub fn flag(&self, key: &str) -> bool {
        self.attr(key).is_some_and(|value| value.is_empty() || value == "true" || value == key)
    }
}

impl fmt::Debug for ComponentProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentProps")
            .field("attrs", &self.attrs)
            .field("children", &self.children.is_some())
            .finish()
    }
}

/// One named entry in the registry.
#[derive(Clone)]
pub struct Registration {
    pub name: String,
    pub factory: ComponentFactory,
}

impl Registration {
    /// Whether both registrations point at the same factory.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.factory, &other.factory)
    }

    pub fn render(&self, props: ComponentProps) -> AnyView {
        (self.factory)(props)
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration").field("name", &self.name).finish_non_exhaustive()
    }
}

/// Name → component map consulted when rendering markup by name.
#[derive(Clone, Default)]
pub struct ComponentRegistry {
    entries: Arc<HashMap<String, Registration>>,
}

impl ComponentRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `factory` under `name`. The last registration for a name wins;
    /// the one it replaced is returned.
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> Option<Registration>
    where
        F: Fn(ComponentProps) -> AnyView + Send + Sync + 'static,
    {
        let name = name.into();
        let registration = Registration { name: name.clone(), factory: Arc::new(factory) };
        Arc::make_mut(&mut self.entries).insert(name, registration)
    }

    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<&Registration> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Registered names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry").field("names", &self.names()).finish()
    }
}

/// Render the component registered under `name` in the context registry.
#[component]
pub fn Registered(
    #[prop(into)] name: String,
    #[prop(optional)] attrs: BTreeMap<String, String>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let registration = use_context::<ComponentRegistry>().and_then(|registry| registry.resolve(&name).cloned());
    match registration {
        Some(registration) => registration.render(ComponentProps { attrs, children }),
        None => {
            log::warn!("no component registered as `{name}`");
            view! { <span class="ta-unregistered">{format!("<{name}>")}</span> }.into_any()
        }
    }
}
