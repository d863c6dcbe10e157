use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

struct Counting {
    name: &'static str,
    installs: Arc<AtomicUsize>,
    disposals: Arc<AtomicUsize>,
}

impl Plugin for Counting {
    fn name(&self) -> &'static str {
        self.name
    }

    fn install(&self, ctx: &mut PluginContext) -> PluginHandle {
        self.installs.fetch_add(1, Ordering::SeqCst);
        ctx.provide(self.name);
        let disposals = Arc::clone(&self.disposals);
        PluginHandle::new(self.name).on_dispose(move || {
            disposals.fetch_add(1, Ordering::SeqCst);
        })
    }
}

fn counting(name: &'static str) -> (Counting, Arc<AtomicUsize>, Arc<AtomicUsize>) {
    let installs = Arc::new(AtomicUsize::new(0));
    let disposals = Arc::new(AtomicUsize::new(0));
    (Counting { name, installs: Arc::clone(&installs), disposals: Arc::clone(&disposals) }, installs, disposals)
}

#[test]
fn install_all_is_idempotent() {
    let (plugin, installs, _) = counting("sample");
    let mut set = PluginSet::new().with(plugin);
    assert!(!set.is_installed());
    assert_eq!(set.install_all(), 1);
    assert_eq!(set.install_all(), 0);
    assert_eq!(installs.load(Ordering::SeqCst), 1);
    assert!(set.is_installed());
    assert_eq!(set.handles().len(), 1);
}

#[test]
fn duplicate_plugin_names_are_ignored() {
    let (first, first_installs, _) = counting("same");
    let (second, second_installs, _) = counting("same");
    let mut set = PluginSet::new().with(first).with(second);
    assert_eq!(set.names(), vec!["same"]);
    set.install_all();
    assert_eq!(first_installs.load(Ordering::SeqCst), 1);
    assert_eq!(second_installs.load(Ordering::SeqCst), 0);
}

#[test]
fn dispose_runs_each_teardown_once() {
    let (a, _, a_disposals) = counting("a");
    let (b, _, b_disposals) = counting("b");
    let mut set = PluginSet::new().with(a).with(b);
    set.install_all();
    assert_eq!(set.dispose_all(), 2);
    assert_eq!(set.dispose_all(), 0);
    assert_eq!(a_disposals.load(Ordering::SeqCst), 1);
    assert_eq!(b_disposals.load(Ordering::SeqCst), 1);
}

#[test]
fn handle_dispose_reports_first_call_only() {
    let mut handle = PluginHandle::new("x").on_dispose(|| {});
    assert!(handle.dispose());
    assert!(!handle.dispose());
    assert_eq!(handle.name(), "x");
}

#[test]
fn install_records_provisions() {
    let (plugin, _, _) = counting("sample");
    let mut set = PluginSet::new().with(plugin);
    assert!(set.context().is_empty());
    set.install_all();
    assert_eq!(set.context().len(), 1);
}

#[test]
fn standard_set_installs_message_loading_and_loadingbar() {
    let mut set = PluginSet::standard();
    assert_eq!(set.names(), vec!["message", "loading", "loadingbar"]);
    assert_eq!(set.install_all(), 3);
    assert_eq!(set.context().len(), 3);
    assert_eq!(set.dispose_all(), 3);
}
