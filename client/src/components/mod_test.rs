use super::*;

#[test]
fn standard_registry_registers_the_five_components() {
    let registry = standard_registry();
    assert_eq!(registry.len(), STANDARD_COMPONENTS.len());
    for name in STANDARD_COMPONENTS {
        assert_eq!(registry.resolve(name).map(|r| r.name.as_str()), Some(name));
    }
}

#[test]
fn standard_registrations_are_distinct() {
    let registry = standard_registry();
    let regs: Vec<_> = STANDARD_COMPONENTS.iter().filter_map(|n| registry.resolve(n)).collect();
    for (i, a) in regs.iter().enumerate() {
        for b in &regs[i + 1..] {
            assert!(!a.same_as(b));
        }
    }
}

#[test]
fn each_call_builds_an_independent_registry() {
    let mut first = standard_registry();
    let second = standard_registry();
    first.register("TaButton", |_props| ().into_any());
    assert!(!first.resolve("TaButton").unwrap().same_as(second.resolve("TaButton").unwrap()));
}
