use crate::domain::model::Topic;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use std::collections::HashMap;
use std::io::Write;

// CONSTRUCTING VALUES
// ===================
// Construction is explicit; nothing springs into existence zeroed.
// The moving parts are:
// - Default for "start from zero values"
// - Box::new for explicit heap placement
// - with_capacity for pre-sized collections (capacity, never length)
// - Option<T> instead of nil

pub struct AllocationLesson;

impl Lesson for AllocationLesson {
    fn topic(&self) -> Topic {
        Topic::ConstructingValues
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        default_values(out)?;
        box_basics(out)?;
        collection_construction(out)?;
        construction_guidance(out)?;
        practical_examples(out)?;
        common_mistakes(out)?;
        Ok(())
    }
}

fn default_values(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== DEFAULT VALUES ===")?;

    // The Default trait is the opt-in version of zero values
    writeln!(out, "i32::default(): {}", i32::default())?;
    writeln!(out, "bool::default(): {}", bool::default())?;
    writeln!(out, "String::default(): {:?}", String::default())?;
    writeln!(out, "Option::<i32>::default(): {:?}", Option::<i32>::default())?;

    #[derive(Debug, Default)]
    struct Settings {
        host: String,
        port: u16,
        debug: bool,
    }

    let settings = Settings::default();
    writeln!(out, "Derived struct default: {:?}", settings)?;
    writeln!(
        out,
        "Partial override: {:?}",
        Settings { port: 8080, ..Default::default() }
    )?;

    Ok(())
}

fn box_basics(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== BOX: EXPLICIT HEAP PLACEMENT ===")?;

    let boxed = Box::new(42);
    writeln!(out, "Box::new(42): {} (lives on the heap)", boxed)?;

    let doubled = *boxed * 2;
    writeln!(out, "Dereferenced with *: {}", doubled)?;

    // Recursive types need an indirection to have a known size
    #[derive(Debug)]
    enum IntList {
        Cons(i32, Box<IntList>),
        Nil,
    }
    use IntList::{Cons, Nil};

    let list = Cons(1, Box::new(Cons(2, Box::new(Cons(3, Box::new(Nil))))));
    writeln!(out, "Recursive type via Box: {:?}", list)?;

    writeln!(
        out,
        "Plain values already live on the stack; Box is for recursion, trait objects,"
    )?;
    writeln!(out, "and moving large values without copying them")?;

    Ok(())
}

fn collection_construction(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== COLLECTION CONSTRUCTION ===")?;

    writeln!(out, "\nVectors:")?;
    let v1: Vec<i32> = Vec::new();
    writeln!(out, "Vec::new(): {:?}, len={}, capacity={}", v1, v1.len(), v1.capacity())?;

    let v2 = vec![1, 2, 3];
    writeln!(out, "vec![1, 2, 3]: {:?}, len={}", v2, v2.len())?;

    let v3 = vec![0; 5];
    writeln!(out, "vec![0; 5]: {:?} (repeated element)", v3)?;

    let v4: Vec<i32> = Vec::with_capacity(10);
    writeln!(
        out,
        "Vec::with_capacity(10): {:?}, len={}, capacity={}",
        v4,
        v4.len(),
        v4.capacity()
    )?;

    writeln!(out, "\nStrings:")?;
    writeln!(out, "String::new(): {:?}", String::new())?;
    writeln!(out, "String::from(\"hello\"): {:?}", String::from("hello"))?;
    writeln!(out, "\"hello\".to_string(): {:?}", "hello".to_string())?;

    writeln!(out, "\nMaps:")?;
    let m1: HashMap<String, i32> = HashMap::new();
    writeln!(out, "HashMap::new(): len={} (usable immediately)", m1.len())?;

    let mut m2: HashMap<&str, i32> = HashMap::with_capacity(100);
    m2.insert("key", 42);
    writeln!(out, "with_capacity(100) then insert: len={}", m2.len())?;

    Ok(())
}

fn construction_guidance(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== WHEN TO USE WHAT ===")?;

    writeln!(out, "\nStart from a literal when you know the contents:")?;
    writeln!(out, "  vec![..], HashMap::from([..]), Struct {{ .. }}")?;

    writeln!(out, "\nStart empty when you are about to fill it:")?;
    writeln!(out, "  Vec::new() / HashMap::new(), or with_capacity when the size is known")?;

    writeln!(out, "\nReach for Box only when placement matters:")?;
    writeln!(out, "  recursive types, trait objects, very large values")?;

    writeln!(out, "\nModel absence with Option<T>:")?;
    writeln!(out, "  there is no nil; a missing value is a type, not a trap")?;

    Ok(())
}

fn practical_examples(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== PRACTICAL EXAMPLES ===")?;

    // Collecting is the usual way values come into existence
    let squares: Vec<i32> = (1..=5).map(|n| n * n).collect();
    writeln!(out, "Collected squares: {:?}", squares)?;

    let pairs: HashMap<i32, i32> = (1..=3).map(|n| (n, n * 10)).collect();
    let mut sorted: Vec<_> = pairs.iter().collect();
    sorted.sort();
    writeln!(out, "Collected map (sorted): {:?}", sorted)?;

    let sentence: String = ["construct", "then", "use"].join(" ");
    writeln!(out, "Joined string: {:?}", sentence)?;

    let buffer = vec![0u8; 8];
    writeln!(out, "Zeroed buffer: {:?}", buffer)?;

    Ok(())
}

fn common_mistakes(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== COMMON MISTAKES ===")?;

    writeln!(out, "\nMistake 1: Expecting with_capacity to set the length")?;
    let v: Vec<i32> = Vec::with_capacity(5);
    writeln!(out, "with_capacity(5): len={} - v[0] would panic", v.len())?;
    writeln!(out, "v.get(0): {:?}", v.get(0))?;
    writeln!(out, "Use vec![0; 5] when you need 5 addressable zeros")?;

    writeln!(out, "\nMistake 2: Forgetting mut")?;
    writeln!(out, "let v = Vec::new(); v.push(1) does not compile;")?;
    writeln!(out, "mutation is opted into at the binding: let mut v = Vec::new()")?;

    writeln!(out, "\nMistake 3: Boxing values that could stay on the stack")?;
    let plain = 42;
    writeln!(out, "A plain `let x = {}` needs no allocation at all", plain)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lesson() -> String {
        let mut buf = Vec::new();
        AllocationLesson.run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(run_lesson(), run_lesson());
    }

    #[test]
    fn test_all_sections_are_printed() {
        let output = run_lesson();
        for header in [
            "=== DEFAULT VALUES ===",
            "=== BOX: EXPLICIT HEAP PLACEMENT ===",
            "=== COLLECTION CONSTRUCTION ===",
            "=== WHEN TO USE WHAT ===",
            "=== PRACTICAL EXAMPLES ===",
            "=== COMMON MISTAKES ===",
        ] {
            assert!(output.contains(header), "missing section: {}", header);
        }
    }

    #[test]
    fn test_collected_values_in_output() {
        let output = run_lesson();
        assert!(output.contains("[1, 4, 9, 16, 25]"));
        assert!(output.contains("Recursive type via Box"));
        assert!(output.contains("v.get(0): None"));
    }
}
