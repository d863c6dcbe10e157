use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use leptos::prelude::IntoAny;

use super::*;
use crate::components::STANDARD_COMPONENTS;
use crate::plugins::{PluginContext, PluginHandle};
use crate::router::BundledLoader;

struct CountingPlugin(Arc<AtomicUsize>);

impl Plugin for CountingPlugin {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn install(&self, _ctx: &mut PluginContext) -> PluginHandle {
        self.0.fetch_add(1, Ordering::SeqCst);
        PluginHandle::new("counting")
    }
}

#[test]
fn standard_bootstrap_registers_components_and_plugins() {
    let bootstrap = Bootstrap::standard();
    assert_eq!(bootstrap.registry().names().len(), STANDARD_COMPONENTS.len());
    for name in STANDARD_COMPONENTS {
        assert!(bootstrap.registry().contains(name), "{name} missing");
    }
    assert_eq!(bootstrap.plugins().names(), vec!["message", "loading", "loadingbar"]);
}

#[test]
fn mount_hands_registry_and_plugin_provisions_to_root() {
    let mut host = MemoryHost::with_anchor(APP_ANCHOR);
    let mut bootstrap = Bootstrap::standard();
    let root = bootstrap.mount(&mut host, APP_ANCHOR).unwrap();

    assert!(host.is_consumed(APP_ANCHOR));
    assert!(bootstrap.plugins().is_installed());
    assert_eq!(root.plugins.len(), 3);
    for name in STANDARD_COMPONENTS {
        let expected = bootstrap.registry().resolve(name).unwrap();
        assert!(root.registry.resolve(name).unwrap().same_as(expected));
    }
}

#[test]
fn second_bootstrap_on_same_anchor_fails_loudly() {
    let mut host = MemoryHost::with_anchor(APP_ANCHOR);
    Bootstrap::standard().mount(&mut host, APP_ANCHOR).unwrap();

    let err = Bootstrap::standard().mount(&mut host, APP_ANCHOR).unwrap_err();
    assert_eq!(err, MountError::AnchorConsumed("#app".to_owned()));
    assert_eq!(err.to_string(), "mount anchor `#app` already hosts an app");
}

#[test]
fn missing_anchor_is_reported() {
    let mut host = MemoryHost::default();
    let err = Bootstrap::standard().mount(&mut host, APP_ANCHOR).unwrap_err();
    assert_eq!(err, MountError::AnchorMissing("#app".to_owned()));
}

#[test]
fn plugins_install_before_mount_and_only_once() {
    let installs = Arc::new(AtomicUsize::new(0));
    let mut bootstrap = Bootstrap::new().with_plugin(CountingPlugin(Arc::clone(&installs)));

    let mut empty = MemoryHost::default();
    assert!(bootstrap.mount(&mut empty, APP_ANCHOR).is_err());
    assert_eq!(installs.load(Ordering::SeqCst), 1);

    let mut host = MemoryHost::with_anchor(APP_ANCHOR);
    bootstrap.mount(&mut host, APP_ANCHOR).unwrap();
    assert_eq!(installs.load(Ordering::SeqCst), 1);
}

#[test]
fn custom_registration_overrides_standard_component() {
    let bootstrap = Bootstrap::standard();
    let standard_button = bootstrap.registry().resolve("TaButton").cloned().unwrap();
    let bootstrap = bootstrap.register("TaButton", |_props| "custom".into_any());
    assert!(!bootstrap.registry().resolve("TaButton").unwrap().same_as(&standard_button));
    assert_eq!(bootstrap.registry().len(), STANDARD_COMPONENTS.len());
}

#[test]
fn custom_loader_reaches_the_root() {
    let loader: SharedLoader = Arc::new(BundledLoader);
    let mut bootstrap = Bootstrap::new().with_loader(Arc::clone(&loader));
    let mut host = MemoryHost::with_anchor(APP_ANCHOR);
    let root = bootstrap.mount(&mut host, APP_ANCHOR).unwrap();
    assert!(Arc::ptr_eq(&root.loader, &loader));
}

#[test]
fn shutdown_disposes_installed_plugins_once() {
    let mut host = MemoryHost::with_anchor(APP_ANCHOR);
    let mut bootstrap = Bootstrap::standard();
    bootstrap.mount(&mut host, APP_ANCHOR).unwrap();
    assert_eq!(bootstrap.shutdown(), 3);
    assert_eq!(bootstrap.shutdown(), 0);
}
