//! Scenario tests for the Lanai Trie.

use crate::data_structures::{LanaiTrie, LanaiTrieConfig};
use std::collections::HashSet;
use test_case::test_case;

const FIXTURE_KEYS: [&str; 8] = [
    "foosball",
    "football",
    "bmerica",
    "ked",
    "kedlock",
    "frosty",
    "bfrza",
    "foo/bart/baz.go",
];

fn fixture() -> LanaiTrie<usize> {
    let trie = LanaiTrie::new();
    for (i, key) in FIXTURE_KEYS.iter().enumerate() {
        trie.add(key, i);
    }
    trie
}

fn set(keys: Vec<String>) -> HashSet<String> {
    keys.into_iter().collect()
}

fn expected(keys: &[&str]) -> HashSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[test]
fn test_remove_keeps_siblings() {
    let trie = LanaiTrie::new();
    trie.add("football", 1);
    trie.add("foostar", 2);
    trie.add("foosball", 3);

    assert!(trie.remove("foosball"));

    assert_eq!(set(trie.keys()), expected(&["football", "foostar"]));
    assert_eq!(set(trie.fuzzy_search("foo")), expected(&["football", "foostar"]));
    assert_eq!(trie.get("foostar"), Some(2));
    assert!(!trie.contains("foosball"));
}

#[test]
fn test_prefix_search_shared_branch() {
    let trie = LanaiTrie::new();
    for key in ["bar", "foosball", "football", "foreboding", "forbidden"] {
        trie.add(key, ());
    }

    assert_eq!(
        set(trie.prefix_search("fo")),
        expected(&["foosball", "football", "foreboding", "forbidden"])
    );
    assert!(trie.prefix_search("abc").is_empty());
}

#[test]
fn test_fuzzy_search_orders_by_length() {
    let trie = LanaiTrie::new();
    trie.add("bfrza", ());
    trie.add("foo/bart/baz.go", ());

    assert_eq!(trie.fuzzy_search("fz"), vec!["bfrza", "foo/bart/baz.go"]);
}

#[test]
fn test_prefix_search_non_ascii() {
    let trie = LanaiTrie::new();
    for key in ["苹果 沂水县", "苹果", "大蒜", "大豆"] {
        trie.add(key, ());
    }

    assert_eq!(set(trie.prefix_search("苹")), expected(&["苹果 沂水县", "苹果"]));
    assert_eq!(trie.prefix_search("大蒜"), vec!["大蒜"]);
    assert_eq!(trie.fuzzy_search("果县"), vec!["苹果 沂水县"]);
}

#[test]
fn test_empty_trie_queries() {
    let trie: LanaiTrie<()> = LanaiTrie::new();

    assert!(trie.keys().is_empty());
    assert!(trie.prefix_search("").is_empty());
    assert!(trie.fuzzy_search("").is_empty());
    assert!(!trie.has_prefix(""));
    assert!(trie.is_empty());
}

#[test_case("fsb", 1; "skips letters")]
#[test_case("footbal", 1; "prefix of one key")]
#[test_case("football", 1; "whole key")]
#[test_case("fs", 2; "two across branches")]
#[test_case("oos", 1; "repeated letter")]
#[test_case("kl", 1; "shared stem")]
#[test_case("ft", 3; "three keys")]
#[test_case("fy", 1; "last letter")]
#[test_case("fz", 2; "across separators")]
#[test_case("a", 5; "single letter")]
#[test_case("zz", 0; "no match")]
fn test_fuzzy_search_counts(pattern: &str, count: usize) {
    let results = fixture().fuzzy_search(pattern);
    assert_eq!(results.len(), count, "pattern {pattern:?} gave {results:?}");
}

#[test_case("fo", 3)]
#[test_case("foosbal", 1)]
#[test_case("ked", 2)]
#[test_case("b", 2)]
#[test_case("", 8)]
#[test_case("abc", 0)]
#[test_case("footballs", 0)]
fn test_prefix_search_counts(prefix: &str, count: usize) {
    assert_eq!(fixture().prefix_search(prefix).len(), count);
}

#[test]
fn test_find_reports_presence() {
    let trie = fixture();

    assert_eq!(trie.find("ked"), (Some(3), true));
    assert_eq!(trie.find("ke"), (None, false));
    assert_eq!(trie.find("kedlocks"), (None, false));
    assert!(trie.has_prefix("ke"));
    assert!(!trie.has_prefix("kx"));
}

#[test]
fn test_remove_prefix_key_keeps_longer_key() {
    let trie = fixture();

    assert!(trie.remove("ked"));
    assert!(!trie.contains("ked"));
    assert!(trie.has_prefix("ked"));
    assert_eq!(trie.get("kedlock"), Some(4));

    assert!(trie.remove("kedlock"));
    assert!(!trie.has_prefix("k"));
    assert_eq!(trie.len(), FIXTURE_KEYS.len() - 2);
}

#[test]
fn test_remove_longer_key_keeps_prefix_key() {
    let trie = fixture();

    assert!(trie.remove("kedlock"));
    assert_eq!(trie.prefix_search("ked"), vec!["ked"]);
    assert_eq!(trie.fuzzy_search("kl"), Vec::<String>::new());
}

#[test]
fn test_remove_absent_is_noop() {
    let trie = fixture();
    let before = set(trie.keys());

    assert!(!trie.remove("foo"));
    assert!(!trie.remove("footballer"));
    assert!(!trie.remove(""));

    assert_eq!(set(trie.keys()), before);
    assert_eq!(trie.len(), FIXTURE_KEYS.len());
}

#[test]
fn test_reinsert_after_full_removal() {
    let trie = LanaiTrie::new();
    trie.add("solo", 1);
    assert!(trie.remove("solo"));
    assert!(trie.is_empty());
    assert!(!trie.has_prefix(""));

    trie.add("again", 2);
    assert_eq!(trie.keys(), vec!["again"]);
    assert_eq!(trie.fuzzy_search("gn"), vec!["again"]);
}

#[test]
fn test_empty_key_is_stored() {
    let trie = LanaiTrie::new();
    trie.add("", 0);
    trie.add("a", 1);

    assert_eq!(trie.get(""), Some(0));
    assert_eq!(trie.len(), 2);
    assert_eq!(set(trie.prefix_search("")), expected(&["", "a"]));
    assert_eq!(trie.fuzzy_search(""), vec!["", "a"]);

    assert!(trie.remove(""));
    assert_eq!(trie.keys(), vec!["a"]);
}

#[test]
fn test_duplicate_add_overwrites() {
    let trie = LanaiTrie::new();
    let first = trie.add("key", 1);
    let second = trie.add("key", 2);

    assert_eq!(first, second);
    assert_eq!(trie.len(), 1);
    assert_eq!(trie.payload(&first), Some(2));
    assert_eq!(trie.keys(), vec!["key"]);
}

#[test]
fn test_handle_stops_resolving_after_remove() {
    let trie = LanaiTrie::new();
    let handle = trie.add("gone", 1);
    assert_eq!(trie.payload(&handle), Some(1));

    trie.remove("gone");
    trie.add("gone", 2);
    assert_eq!(trie.payload(&handle), None);
}

#[test]
fn test_clear_resets() {
    let trie = fixture();
    let handle = trie.add("extra", 99);

    trie.clear();

    assert!(trie.is_empty());
    assert!(trie.keys().is_empty());
    assert_eq!(trie.payload(&handle), None);

    trie.add("fresh", 1);
    assert_eq!(trie.keys(), vec!["fresh"]);
}

#[test]
fn test_case_insensitive_config() {
    let trie = LanaiTrie::with_config(LanaiTrieConfig::default().with_case_sensitive(false));
    trie.add("FooBar", 1);

    assert!(trie.contains("foobar"));
    assert!(trie.contains("FOOBAR"));
    assert_eq!(trie.prefix_search("FOO"), vec!["foobar"]);
    assert_eq!(trie.fuzzy_search("FB"), vec!["foobar"]);
    assert!(trie.remove("fOoBaR"));
}

#[test]
fn test_prefix_entries_carry_payloads() {
    let trie = fixture();
    let mut entries = trie.prefix_entries("ked");
    entries.sort();

    assert_eq!(
        entries,
        vec![("ked".to_string(), 3), ("kedlock".to_string(), 4)]
    );
}

#[test]
fn test_with_payload_borrows() {
    let trie = LanaiTrie::new();
    trie.add("vec", vec![1, 2, 3]);

    assert_eq!(trie.with_payload("vec", |v| v.len()), Some(3));
    assert_eq!(trie.with_payload("nope", |v| v.len()), None);
}

#[test]
fn test_fuzzy_ties_are_lexicographic() {
    let trie = LanaiTrie::new();
    for key in ["cab", "abc", "bca", "ab"] {
        trie.add(key, ());
    }

    assert_eq!(trie.fuzzy_search("a"), vec!["ab", "abc", "bca", "cab"]);
}
