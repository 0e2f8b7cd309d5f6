use pretty_assertions::assert_eq;

use super::*;

#[test]
fn unassigned_reads_are_null() {
    let env = MemoryStack::new();
    assert_eq!(env.get("x"), Value::Null);
    assert_eq!(env.lookup("x"), None);
}

#[test]
fn lookup_prefers_innermost_frame() {
    let mut env = MemoryStack::new();
    env.insert("x", Value::Int(1));
    env.push(Memory::new("inner"));
    env.insert("x", Value::Int(2));
    assert_eq!(env.get("x"), Value::Int(2));

    let inner = env.pop();
    assert_eq!(inner.map(|m| m.name().to_string()), Some("inner".to_string()));
    assert_eq!(env.get("x"), Value::Int(1));
}

#[test]
fn set_overwrites_where_found() {
    let mut env = MemoryStack::new();
    env.insert("x", Value::Int(1));
    env.push(Memory::new("inner"));
    env.set("x", Value::Int(5));
    env.set("y", Value::Int(7));

    let inner = env.pop();
    assert_eq!(inner.as_ref().map(Memory::len), Some(1));
    assert_eq!(env.get("x"), Value::Int(5));
    assert_eq!(env.get("y"), Value::Null);
}

#[test]
fn global_frame_is_never_popped() {
    let mut env = MemoryStack::new();
    assert!(env.pop().is_none());
    assert_eq!(env.depth(), 1);
    assert_eq!(env.global().name(), "global");
}

#[test]
fn get_mut_edits_in_place() {
    let mut env = MemoryStack::new();
    env.insert("s", Value::string("a"));
    if let Some(Value::Str(s)) = env.get_mut("s") {
        s.push('b');
    }
    assert_eq!(env.get("s"), Value::string("ab"));
    assert!(env.get_mut("missing").is_none());
}
