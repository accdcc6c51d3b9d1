use crate::domain::model::Topic;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::io::Write;

// HASHMAPS
// ========
// Key-value pairs backed by a hash table.
// - Keys must implement Eq + Hash
// - Lookups return Option: "missing" and "present with default value" never blur
// - Iteration order is arbitrary, so every listing below is sorted before printing

pub struct MapsLesson;

impl Lesson for MapsLesson {
    fn topic(&self) -> Topic {
        Topic::Maps
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        map_basics(out)?;
        map_operations(out)?;
        map_iteration(out)?;
        complex_value_types(out)?;
        pattern_grouping(out)?;
        pattern_counting(out)?;
        pattern_sets(out)?;
        pattern_memoization(out)?;
        map_gotchas(out)?;
        Ok(())
    }
}

/// Sorted rendering for deterministic output; HashMap iteration order is arbitrary.
fn fmt_map<K: Ord + Debug, V: Debug>(map: &HashMap<K, V>) -> String {
    let mut entries: Vec<_> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    let body = entries
        .iter()
        .map(|(k, v)| format!("{:?}: {:?}", k, v))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

fn fmt_set<T: Ord + Debug>(set: &HashSet<T>) -> String {
    let mut items: Vec<_> = set.iter().collect();
    items.sort();
    let body = items
        .iter()
        .map(|item| format!("{:?}", item))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{}}}", body)
}

fn map_basics(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== MAP BASICS ===")?;

    let map1: HashMap<String, i32> = HashMap::new();
    writeln!(
        out,
        "HashMap::new(): {}, len={}, is_empty={}",
        fmt_map(&map1),
        map1.len(),
        map1.is_empty()
    )?;

    let map2 = HashMap::from([("apple", 5), ("banana", 3), ("orange", 7)]);
    writeln!(out, "HashMap::from(pairs): {}", fmt_map(&map2))?;

    // Capacity hint avoids rehashing while the map fills up
    let map3: HashMap<String, i32> = HashMap::with_capacity(100);
    writeln!(
        out,
        "HashMap::with_capacity(100): {}, len={}",
        fmt_map(&map3),
        map3.len()
    )?;

    Ok(())
}

fn map_operations(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== MAP OPERATIONS ===")?;

    let mut scores = HashMap::new();

    scores.insert("alice", 95);
    scores.insert("bob", 87);
    scores.insert("charlie", 92);
    writeln!(out, "After inserts: {}", fmt_map(&scores))?;

    // insert on an existing key replaces and returns the old value
    let previous = scores.insert("alice", 98);
    writeln!(
        out,
        "After update: {} (insert returned {:?})",
        fmt_map(&scores),
        previous
    )?;

    let alice_score = scores.get("alice");
    writeln!(out, "scores.get(\"alice\"): {:?}", alice_score)?;

    let missing = scores.get("david");
    writeln!(out, "scores.get(\"david\"): {:?} (no zero-value guessing)", missing)?;

    let with_default = scores.get("david").copied().unwrap_or(0);
    writeln!(out, "Defaulted read: {}", with_default)?;

    if let Some(score) = scores.get("alice") {
        writeln!(out, "alice exists with score: {}", score)?;
    }

    let removed = scores.remove("bob");
    writeln!(
        out,
        "After remove(\"bob\"): {} (removed {:?})",
        fmt_map(&scores),
        removed
    )?;

    // Removing a missing key is a no-op that returns None
    let removed = scores.remove("nonexistent");
    writeln!(out, "remove(\"nonexistent\"): {:?}", removed)?;

    writeln!(out, "Number of entries: {}", scores.len())?;

    Ok(())
}

fn map_iteration(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== MAP ITERATION ===")?;

    let ages = HashMap::from([("alice", 30), ("bob", 25), ("charlie", 35), ("diana", 28)]);

    // HashMap iteration order is ARBITRARY and changes between runs.
    // Collect and sort when the output needs to be stable.
    let mut entries: Vec<_> = ages.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    writeln!(out, "Iterate over key-value pairs (sorted for stable output):")?;
    for (name, age) in &entries {
        writeln!(out, "  {} is {} years old", name, age)?;
    }

    let mut names: Vec<_> = ages.keys().collect();
    names.sort();
    writeln!(out, "\nKeys only: {:?}", names)?;

    writeln!(
        out,
        "\nNote: a bare `for (k, v) in &ages` visits entries in arbitrary order;"
    )?;
    writeln!(out, "use a BTreeMap when you need ordered iteration for free")?;

    Ok(())
}

fn complex_value_types(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== MAPS WITH COMPLEX TYPES ===")?;

    #[derive(Debug)]
    struct CityRecord {
        age: u32,
        city: &'static str,
    }

    let people = HashMap::from([
        ("alice", CityRecord { age: 30, city: "NYC" }),
        ("bob", CityRecord { age: 25, city: "LA" }),
    ]);
    writeln!(out, "Struct values: {}", fmt_map(&people))?;

    let grades = HashMap::from([("alice", vec![95, 87, 92]), ("bob", vec![88, 91, 85])]);
    writeln!(out, "Vec values: {}", fmt_map(&grades))?;

    let matrix: HashMap<&str, HashMap<&str, i32>> = HashMap::from([
        ("row1", HashMap::from([("col1", 1), ("col2", 2)])),
        ("row2", HashMap::from([("col1", 3), ("col2", 4)])),
    ]);
    let mut rows: Vec<_> = matrix.iter().collect();
    rows.sort_by(|a, b| a.0.cmp(b.0));
    writeln!(out, "Nested maps:")?;
    for (row, columns) in rows {
        writeln!(out, "  {:?}: {}", row, fmt_map(columns))?;
    }

    if let Some(value) = matrix.get("row1").and_then(|row| row.get("col2")) {
        writeln!(out, "matrix[row1][col2] = {}", value)?;
    }

    let counts = HashMap::from([(1, "one"), (2, "two"), (3, "three")]);
    writeln!(out, "Integer keys: {}", fmt_map(&counts))?;

    Ok(())
}

fn pattern_grouping(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== PATTERN: GROUPING ===")?;

    let words = ["apple", "apricot", "banana", "blueberry", "cherry", "coconut"];

    // entry() fetches-or-creates in one lookup
    let mut grouped: HashMap<char, Vec<&str>> = HashMap::new();
    for word in words {
        let first_letter = word.chars().next().unwrap_or('?');
        grouped.entry(first_letter).or_default().push(word);
    }

    writeln!(out, "Words grouped by first letter:")?;
    let mut letters: Vec<_> = grouped.iter().collect();
    letters.sort_by(|a, b| a.0.cmp(b.0));
    for (letter, word_list) in letters {
        writeln!(out, "  {}: {:?}", letter, word_list)?;
    }

    Ok(())
}

fn pattern_counting(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== PATTERN: COUNTING ===")?;

    let text = ["apple", "banana", "apple", "cherry", "banana", "apple"];

    let mut counts: HashMap<&str, i32> = HashMap::new();
    for word in text {
        *counts.entry(word).or_insert(0) += 1;
    }

    writeln!(out, "Word counts: {}", fmt_map(&counts))?;

    Ok(())
}

fn pattern_sets(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== PATTERN: SETS ===")?;

    // HashSet is a real type; no map-of-unit-values workaround needed
    let mut set = HashSet::new();
    writeln!(out, "insert(\"apple\"): {}", set.insert("apple"))?;
    writeln!(out, "insert(\"banana\"): {}", set.insert("banana"))?;
    writeln!(out, "insert(\"apple\") again: {} (already present)", set.insert("apple"))?;
    writeln!(out, "Set contents: {}", fmt_set(&set))?;

    if set.contains("apple") {
        writeln!(out, "'apple' is in the set")?;
    }

    let set_a: HashSet<&str> = HashSet::from(["a", "b", "c"]);
    let set_b: HashSet<&str> = HashSet::from(["b", "c", "d"]);

    let mut union: Vec<&str> = set_a.union(&set_b).copied().collect();
    union.sort();
    writeln!(out, "\nUnion of {{a, b, c}} and {{b, c, d}}: {:?}", union)?;

    let mut intersection: Vec<&str> = set_a.intersection(&set_b).copied().collect();
    intersection.sort();
    writeln!(out, "Intersection: {:?}", intersection)?;

    Ok(())
}

fn fib_memoized(n: u64, cache: &mut HashMap<u64, u64>, out: &mut dyn Write) -> Result<u64> {
    if let Some(&hit) = cache.get(&n) {
        writeln!(out, "  Cache hit for fib({})", n)?;
        return Ok(hit);
    }

    if n <= 1 {
        return Ok(n);
    }

    let result = fib_memoized(n - 1, cache, out)? + fib_memoized(n - 2, cache, out)?;
    cache.insert(n, result);
    Ok(result)
}

fn pattern_memoization(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== PATTERN: CACHING/MEMOIZATION ===")?;

    let mut cache = HashMap::new();

    writeln!(out, "Computing fib(10) with a HashMap cache:")?;
    let result = fib_memoized(10, &mut cache, out)?;
    writeln!(out, "Result: {}", result)?;
    writeln!(out, "Cache contents: {}", fmt_map(&cache))?;

    Ok(())
}

fn map_gotchas(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== COMMON GOTCHAS ===")?;

    writeln!(out, "\nGotcha 1: There is no nil map to trip over")?;
    writeln!(
        out,
        "A HashMap exists as soon as it is constructed; 'absent map' is Option<HashMap>"
    )?;
    let maybe_scores: Option<HashMap<&str, i32>> = None;
    writeln!(out, "Optional map: {:?}", maybe_scores)?;

    writeln!(out, "\nGotcha 2: Indexing panics on a missing key")?;
    let scores = HashMap::from([("alice", 0)]);
    writeln!(
        out,
        "scores[\"missing\"] would panic; scores.get(\"missing\") = {:?}",
        scores.get("missing")
    )?;

    // The Option return already distinguishes "present with value 0" from
    // "absent"; no separate existence check required.
    writeln!(out, "\nGotcha 3: Zero values never masquerade as missing keys")?;
    writeln!(out, "scores.get(\"alice\") = {:?} (present, value 0)", scores.get("alice"))?;
    writeln!(out, "scores.get(\"bob\") = {:?} (absent)", scores.get("bob"))?;

    writeln!(out, "\nGotcha 4: Updating a value in place uses get_mut or entry")?;
    #[derive(Debug, Clone, Copy)]
    struct Point {
        x: i32,
        y: i32,
    }
    let mut points = HashMap::from([("origin", Point { x: 0, y: 0 })]);
    if let Some(point) = points.get_mut("origin") {
        point.x = 10;
    }
    writeln!(out, "Modified in place: {}", fmt_map(&points))?;
    writeln!(
        out,
        "(inserting while iterating over the same map is a compile error, not a data race)"
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lesson() -> String {
        let mut buf = Vec::new();
        MapsLesson.run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_is_deterministic() {
        // HashMap iteration order varies; the lesson must sort every listing
        assert_eq!(run_lesson(), run_lesson());
    }

    #[test]
    fn test_all_sections_are_printed() {
        let output = run_lesson();
        for header in [
            "=== MAP BASICS ===",
            "=== MAP OPERATIONS ===",
            "=== MAP ITERATION ===",
            "=== MAPS WITH COMPLEX TYPES ===",
            "=== PATTERN: GROUPING ===",
            "=== PATTERN: COUNTING ===",
            "=== PATTERN: SETS ===",
            "=== PATTERN: CACHING/MEMOIZATION ===",
            "=== COMMON GOTCHAS ===",
        ] {
            assert!(output.contains(header), "missing section: {}", header);
        }
    }

    #[test]
    fn test_counting_pattern_output() {
        let output = run_lesson();
        assert!(output.contains(r#"{"apple": 3, "banana": 2, "cherry": 1}"#));
    }

    #[test]
    fn test_memoized_fib_result() {
        let output = run_lesson();
        assert!(output.contains("Result: 55"));
        assert!(output.contains("Cache hit for fib("));
    }

    #[test]
    fn test_set_operations_output() {
        let output = run_lesson();
        assert!(output.contains(r#"["a", "b", "c", "d"]"#));
        assert!(output.contains(r#"["b", "c"]"#));
    }

    #[test]
    fn test_fmt_map_sorts_keys() {
        let map = HashMap::from([("b", 2), ("a", 1), ("c", 3)]);
        assert_eq!(fmt_map(&map), r#"{"a": 1, "b": 2, "c": 3}"#);
    }
}
