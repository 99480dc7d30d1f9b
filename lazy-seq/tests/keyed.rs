//! Keyed pipelines: pairs in, pairs out, insertion order preserved.

use lazy_seq::{lazy, KeyedSequence, ObjectSequence, Sequence};

#[test]
fn assign_merges_with_the_overlay_winning() {
    let merged = ObjectSequence::from_pairs(vec![("foo", "bar")])
        .assign(ObjectSequence::from_pairs(vec![("foo", "baz"), ("qux", "quux")]));
    let object = merged.to_object();
    assert_eq!(object.get("foo"), Some("baz"));
    assert_eq!(object.get("qux"), Some("quux"));
    assert_eq!(object.size(), 2);
}

#[test]
fn keyed_sequences_flow_through_base_operators() {
    let loud = ObjectSequence::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)])
        .filter(|(_, value), _| value % 2 == 1)
        .map(|(key, value), _| (key.to_uppercase(), value * 10))
        .to_object();
    assert_eq!(loud.get("A"), Some(10));
    assert_eq!(loud.get("B"), None);
    assert_eq!(loud.get("C"), Some(30));
}

#[test]
fn object_round_trip_keeps_order() {
    let pairs = vec![
        ("z".to_owned(), 1),
        ("a".to_owned(), 2),
        ("m".to_owned(), 3),
    ];
    assert_eq!(ObjectSequence::new(pairs.clone()).to_vec(), pairs);
}

#[test]
fn maps_dispatch_to_keyed_sequences() {
    let mut map = std::collections::BTreeMap::new();
    map.insert("two".to_owned(), 2);
    map.insert("one".to_owned(), 1);
    let object = lazy(map);
    assert_eq!(object.get("one"), Some(1));
    assert_eq!(object.keys().to_vec(), vec!["one", "two"]);
}

#[test]
fn invert_then_lookup() {
    let by_number = ObjectSequence::from_pairs(vec![("one", 1), ("two", 2)]).invert();
    assert_eq!(by_number.get("1"), Some("one".to_owned()));
    assert_eq!(by_number.get("3"), None);
}

#[test]
fn pick_keys_then_values() {
    let chosen = ObjectSequence::from_pairs(vec![("a", 1), ("b", 2), ("c", 3)])
        .pick(&["b", "c"])
        .values()
        .to_vec();
    assert_eq!(chosen, vec![2, 3]);
}

#[test]
fn group_and_count_reach_the_pairs_form() {
    let words = vec!["apple", "banana", "avocado", "blueberry", "cherry"];
    let counted = lazy(words)
        .count_by(|word| word.chars().next().map(String::from).unwrap_or_default())
        .to_object();
    assert_eq!(counted.get("a"), Some(2));
    assert_eq!(counted.get("b"), Some(2));
    assert_eq!(counted.get("c"), Some(1));
}
