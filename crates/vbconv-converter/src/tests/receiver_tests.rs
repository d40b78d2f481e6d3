use super::*;

#[test]
fn guard_pops_on_drop() {
    let stack = ImplicitReceiverStack::new();
    assert_eq!(stack.top(), None);
    {
        let _outer = stack.push("withBlock");
        {
            let _inner = stack.push("withBlock1");
            assert_eq!(stack.top().as_deref(), Some("withBlock1"));
            assert_eq!(stack.depth(), 2);
        }
        assert_eq!(stack.top().as_deref(), Some("withBlock"));
    }
    assert_eq!(stack.depth(), 0);
}

#[test]
fn guard_pops_on_early_return() {
    fn fails(stack: &Rc<ImplicitReceiverStack>) -> ConversionResult<()> {
        let _guard = stack.push("withBlock");
        Err(ConversionError::unimplemented("GoToStatement"))
    }

    let stack = ImplicitReceiverStack::new();
    assert!(fails(&stack).is_err());
    assert_eq!(stack.depth(), 0);
}

#[test]
fn unique_name_skips_active_and_reserved() {
    let stack = ImplicitReceiverStack::new();
    let empty = FxHashSet::default();
    assert_eq!(stack.unique_name("withBlock", &empty).unwrap(), "withBlock");

    let _guard = stack.push("withBlock");
    let reserved: FxHashSet<String> = ["withBlock1".to_string()].into_iter().collect();
    assert_eq!(
        stack.unique_name("withBlock", &reserved).unwrap(),
        "withBlock2"
    );
}

#[test]
fn unique_name_is_case_sensitive() {
    let stack = ImplicitReceiverStack::new();
    let reserved: FxHashSet<String> = ["WithBlock".to_string()].into_iter().collect();
    assert_eq!(stack.unique_name("withBlock", &reserved).unwrap(), "withBlock");
}
