//! Behavioral laws over randomly generated documents.
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use fastrand::Rng;
use json_tree::{Map, Number, Pointer, Value, codec, escape_token, unescape_token};

const SEED: u64 = 0x6a73_6f6e;
const CASES: usize = 1000;

// ------------------------------ Generators -------------------------------- //

fn key(rng: &mut Rng) -> String {
    const ALPHABET: &[char] = &['a', 'b', 'c', '~', '/', '0', '1', '-', ' ', 'é'];
    (0..rng.usize(0..5)).map(|_| ALPHABET[rng.usize(..ALPHABET.len())]).collect()
}

/// Only shapes that survive a text round trip: `Int`, `UInt` above
/// `i64::MAX`, finite `Double`.
fn leaf(rng: &mut Rng) -> Value {
    match rng.u8(0..6) {
        0 => Value::Null,
        1 => Value::Bool(rng.bool()),
        2 => Value::Number(Number::Int(rng.i64(..))),
        3 => Value::Number(Number::UInt(rng.u64(i64::MAX as u64 + 1..))),
        4 => Value::Number(Number::Double(rng.f64() * 1e6 - 5e5)),
        _ => Value::String(key(rng)),
    }
}

fn tree(rng: &mut Rng, depth: u32) -> Value {
    if depth == 0 {
        return leaf(rng);
    }
    match rng.u8(0..4) {
        0 => Value::Array((0..rng.usize(0..4)).map(|_| tree(rng, depth - 1)).collect()),
        1 => {
            let mut map = Map::new();
            for _ in 0..rng.usize(0..4) {
                map.insert(key(rng), tree(rng, depth - 1));
            }
            Value::Object(map)
        }
        _ => leaf(rng),
    }
}

/// Rebuild `value` from scratch with every object's insertion order shuffled.
fn reshuffled(rng: &mut Rng, value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.iter().map(|v| reshuffled(rng, v)).collect()),
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            rng.shuffle(&mut entries);
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), reshuffled(rng, v)))
                    .collect(),
            )
        }
        other => other.clone(),
    }
}

/// Change exactly one node so the result is structurally distinct.
fn perturb(rng: &mut Rng, value: &mut Value) {
    match value {
        Value::Null => *value = Value::Bool(false),
        Value::Bool(b) => *b = !*b,
        Value::Number(Number::Int(n)) => *value = Value::Number(Number::Int64(*n)),
        Value::Number(n) => *value = Value::Number(Number::Double(n.to_f64() + 1.0)),
        Value::String(s) => s.push('!'),
        Value::Array(items) if items.is_empty() => items.push(Value::Null),
        Value::Array(items) => {
            let i = rng.usize(..items.len());
            perturb(rng, &mut items[i]);
        }
        Value::Object(map) if map.is_empty() => {
            map.insert(String::new(), Value::Null);
        }
        Value::Object(map) => {
            let i = rng.usize(..map.len());
            if let Some((_, child)) = map.get_index_mut(i) {
                perturb(rng, child);
            }
        }
    }
}

/// Pointers to every node in `value`, root included.
fn pointers(value: &Value) -> Vec<Pointer> {
    fn walk(value: &Value, prefix: &str, out: &mut Vec<Pointer>) {
        out.push(Pointer::new(prefix));
        match value {
            Value::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    walk(item, &format!("{prefix}/{i}"), out);
                }
            }
            Value::Object(map) => {
                for (k, item) in map {
                    walk(item, &format!("{prefix}/{}", escape_token(k)), out);
                }
            }
            _ => {}
        }
    }
    let mut out = Vec::new();
    walk(value, "", &mut out);
    out
}

fn hash_of(value: &Value) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// -------------------------------- Laws ------------------------------------ //

#[test]
fn encode_decode_round_trip() {
    let mut rng = Rng::with_seed(SEED);
    for _ in 0..CASES {
        let value = tree(&mut rng, 4);
        let text = codec::to_string(&value).unwrap();
        assert_eq!(codec::from_str(&text).unwrap(), value, "{text}");
    }
}

#[test]
fn assigning_the_read_value_is_identity() {
    let mut rng = Rng::with_seed(SEED ^ 1);
    for _ in 0..CASES / 10 {
        let value = tree(&mut rng, 4);
        for pointer in pointers(&value) {
            let found = value.pointer(&pointer).cloned();
            assert!(found.is_some(), "{pointer}");
            assert_eq!(value.clone().with_pointer(&pointer, found), value, "{pointer}");
        }
    }
}

#[test]
fn assign_then_read_returns_the_value() {
    let mut rng = Rng::with_seed(SEED ^ 2);
    for _ in 0..CASES / 10 {
        let value = tree(&mut rng, 3);
        for pointer in pointers(&value) {
            let replacement = tree(&mut rng, 2);
            let written = value.clone().with_pointer(&pointer, Some(replacement.clone()));
            assert_eq!(written.pointer(&pointer), Some(&replacement), "{pointer}");
        }
    }
}

#[test]
fn delete_is_idempotent() {
    let mut rng = Rng::with_seed(SEED ^ 3);
    for _ in 0..CASES / 10 {
        let value = tree(&mut rng, 4);
        for pointer in pointers(&value) {
            let once = value.clone().with_pointer(&pointer, None);
            let twice = once.clone().with_pointer(&pointer, None);
            assert_eq!(once, twice, "{pointer}");
        }
    }
}

#[test]
fn equal_trees_hash_equal() {
    let mut rng = Rng::with_seed(SEED ^ 4);
    for _ in 0..CASES {
        let a = tree(&mut rng, 4);
        let b = reshuffled(&mut rng, &a);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }
}

#[test]
fn distinct_trees_are_not_equal() {
    let mut rng = Rng::with_seed(SEED ^ 5);
    for _ in 0..CASES {
        let a = tree(&mut rng, 4);
        let mut b = reshuffled(&mut rng, &a);
        perturb(&mut rng, &mut b);
        assert_ne!(a, b);
    }
}

#[test]
fn escaping_laws() {
    assert_eq!(unescape_token("~01"), "~1");
    assert_eq!(unescape_token("~10"), "/0");
    let mut rng = Rng::with_seed(SEED ^ 6);
    for _ in 0..CASES {
        let token = key(&mut rng);
        assert_eq!(unescape_token(&escape_token(&token)), token);
        let pointer = Pointer::new(&format!("/{}", escape_token(&token)));
        assert_eq!(pointer.last_token(), token);
        assert_eq!(pointer.to_string().parse::<Pointer>().unwrap(), pointer);
    }
}

#[test]
fn leading_zero_tokens_are_object_keys() {
    let doc = codec::from_str(r#"[10, 11]"#).unwrap();
    assert_eq!(doc.pointer(&Pointer::new("/01")), None);
    assert_eq!(doc.pointer(&Pointer::new("/1")), Some(&Value::from(11)));

    let written = Value::Null.with_pointer(&Pointer::new("/01"), Some(true.into()));
    assert_eq!(written, codec::from_str(r#"{"01": true}"#).unwrap());
}

#[test]
fn append_then_read_last_element() {
    let mut rng = Rng::with_seed(SEED ^ 7);
    for _ in 0..CASES / 10 {
        let len = rng.usize(0..5);
        let mut doc = Value::Array((0..len).map(|_| leaf(&mut rng)).collect());
        let item = leaf(&mut rng);
        doc.set_pointer(&Pointer::new("/-"), Some(item.clone()));
        assert_eq!(doc.pointer(&Pointer::new(&format!("/{len}"))), Some(&item));
        assert_eq!(doc.pointer(&Pointer::new("/-")), None);
    }
}

#[test]
fn assignment_scaffolds_missing_containers() {
    let doc = Value::object().with_pointer(&Pointer::new("/test1/0"), Some("value".into()));
    assert_eq!(doc, codec::from_str(r#"{"test1": ["value"]}"#).unwrap());
}

#[test]
fn delete_below_a_scalar_is_a_no_op() {
    let mut rng = Rng::with_seed(SEED ^ 8);
    for _ in 0..CASES / 10 {
        let scalar = leaf(&mut rng);
        let pointer = Pointer::new(&format!("/{}", escape_token(&key(&mut rng))));
        assert_eq!(scalar.clone().with_pointer(&pointer, None), scalar);
    }
}
