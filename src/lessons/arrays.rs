use crate::domain::model::Topic;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use std::io::Write;

// ARRAYS vs VECTORS
// =================
// Arrays: fixed-size [T; N], size is part of the type, Copy when T is Copy
// Vectors: growable, heap-backed, owned (assignment moves, clone copies)

pub struct ArraysLesson;

impl Lesson for ArraysLesson {
    fn topic(&self) -> Topic {
        Topic::ArraysAndVectors
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        array_basics(out)?;
        vector_basics(out)?;
        slice_operations(out)?;
        capacity_and_growth(out)?;
        pattern_filter(out)?;
        pattern_map(out)?;
        pattern_reduce(out)?;
        borrowing_gotchas(out)?;
        Ok(())
    }
}

fn array_basics(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== ARRAY BASICS ===")?;

    // Arrays have a fixed size that is part of their type
    let arr1 = [0i32; 5];
    writeln!(out, "Zeroed array [0; 5]: {:?}", arr1)?;

    let arr2 = [1, 2, 3, 4, 5];
    writeln!(out, "Array literal: {:?}", arr2)?;

    // The compiler counts the elements
    let arr3 = [10, 20, 30];
    writeln!(out, "Inferred length: {:?} (length: {})", arr3, arr3.len())?;

    writeln!(
        out,
        "First element: {}, Last element: {}",
        arr2[0],
        arr2[arr2.len() - 1]
    )?;

    // Arrays of Copy elements are Copy: assignment duplicates the whole array
    let mut arr4 = arr2;
    arr4[0] = 999;
    writeln!(out, "Original: {:?}, Copy: {:?} (independent)", arr2, arr4)?;

    Ok(())
}

fn vector_basics(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== VECTOR BASICS ===")?;

    let v1: Vec<i32> = Vec::new();
    writeln!(
        out,
        "Vec::new(): {:?}, len={}, is_empty={}",
        v1,
        v1.len(),
        v1.is_empty()
    )?;

    let v2 = vec![1, 2, 3, 4, 5];
    writeln!(out, "vec! literal: {:?}, len={}", v2, v2.len())?;

    // with_capacity reserves space up front: length stays 0
    let mut v3: Vec<i32> = Vec::with_capacity(10);
    writeln!(
        out,
        "Vec::with_capacity(10): {:?}, len={}, capacity={}",
        v3,
        v3.len(),
        v3.capacity()
    )?;

    v3.push(100);
    v3.push(101);
    v3.push(102);
    writeln!(
        out,
        "After three pushes: {:?}, len={}, capacity={}",
        v3,
        v3.len(),
        v3.capacity()
    )?;

    // Assignment MOVES a Vec; clone() makes an independent copy.
    // There is no shared backing storage to be surprised by.
    let mut v4 = v2.clone();
    v4[0] = 999;
    writeln!(out, "Original: {:?}, Clone: {:?} (independent)", v2, v4)?;
    writeln!(
        out,
        "(a plain `let v5 = v2;` would MOVE v2 - using it afterwards is a compile error)"
    )?;

    Ok(())
}

fn slice_operations(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== SLICES AND COMMON OPERATIONS ===")?;

    let mut v = vec![10, 20, 30, 40, 50];

    // Range indexing borrows a slice: start inclusive, end exclusive
    writeln!(out, "Original: {:?}", v)?;
    writeln!(out, "&v[1..3]: {:?} (elements at index 1, 2)", &v[1..3])?;
    writeln!(out, "&v[..3]: {:?} (from start to index 3)", &v[..3])?;
    writeln!(out, "&v[2..]: {:?} (from index 2 to end)", &v[2..])?;
    writeln!(out, "&v[..]: {:?} (the whole vector as a slice)", &v[..])?;

    v.push(60);
    writeln!(out, "After push(60): {:?}, len={}", v, v.len())?;

    v.extend([70, 80, 90]);
    writeln!(out, "After extend([70, 80, 90]): {:?}", v)?;

    let more = vec![100, 110];
    v.extend_from_slice(&more);
    writeln!(out, "After extend_from_slice(&more): {:?}", v)?;

    // copy_from_slice copies between equal-length slices
    let source = [1, 2, 3, 4, 5];
    let mut dest = [0; 3];
    dest.copy_from_slice(&source[..3]);
    writeln!(out, "Copied {} elements: dest={:?}", dest.len(), dest)?;

    let removed = v.remove(2);
    writeln!(out, "After remove(2): {:?} (removed {})", v, removed)?;

    v.insert(1, 15);
    writeln!(out, "After insert(1, 15): {:?}", v)?;

    Ok(())
}

fn capacity_and_growth(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== CAPACITY & GROWTH ===")?;

    let mut v = Vec::new();
    writeln!(out, "Initial: len={}, capacity={}", v.len(), v.capacity())?;

    // Capacity grows in jumps; each jump is a reallocation
    for i in 0..10 {
        v.push(i);
        writeln!(
            out,
            "After push({}): len={}, capacity={}",
            i,
            v.len(),
            v.capacity()
        )?;
    }

    writeln!(out, "\nPre-allocated vector:")?;
    let mut optimized = Vec::with_capacity(10);
    for i in 0..10 {
        optimized.push(i);
        writeln!(
            out,
            "After push({}): len={}, capacity={} (no reallocation)",
            i,
            optimized.len(),
            optimized.capacity()
        )?;
    }

    Ok(())
}

fn pattern_filter(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== PATTERN: FILTERING ===")?;

    let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];

    let evens: Vec<i32> = numbers.iter().copied().filter(|n| n % 2 == 0).collect();
    writeln!(out, "Original: {:?}", numbers)?;
    writeln!(out, "Even numbers: {:?}", evens)?;

    // retain filters in place, reusing the allocation
    let mut in_place = numbers.clone();
    in_place.retain(|&n| n > 5);
    writeln!(out, "Numbers > 5 (retain, in place): {:?}", in_place)?;

    Ok(())
}

fn pattern_map(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== PATTERN: MAPPING ===")?;

    let numbers = vec![1, 2, 3, 4, 5];

    let doubled: Vec<i32> = numbers.iter().map(|n| n * 2).collect();
    writeln!(out, "Original: {:?}", numbers)?;
    writeln!(out, "Doubled: {:?}", doubled)?;

    let labels: Vec<String> = numbers.iter().map(|n| format!("number-{}", n)).collect();
    writeln!(out, "As strings: {:?}", labels)?;

    Ok(())
}

fn pattern_reduce(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== PATTERN: REDUCING ===")?;

    let numbers = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
    writeln!(out, "Numbers: {:?}", numbers)?;

    let sum: i32 = numbers.iter().sum();
    writeln!(out, "Sum: {}", sum)?;

    let max = numbers.iter().copied().max().unwrap_or(0);
    writeln!(out, "Maximum: {}", max)?;

    let count = numbers.iter().filter(|&&n| n > 5).count();
    writeln!(out, "Count of numbers > 5: {}", count)?;

    // fold is the general form every reduction desugars to
    let sum_of_squares = numbers.iter().fold(0, |acc, n| acc + n * n);
    writeln!(out, "Sum of squares via fold: {}", sum_of_squares)?;

    Ok(())
}

fn borrowing_gotchas(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== COMMON GOTCHAS ===")?;

    // In many languages a sub-slice silently shares backing storage with its
    // parent and appending to one mutates the other. Rust's borrow rules make
    // that aliasing a compile error; copy out when you need independence.
    writeln!(out, "\nGotcha 1: A slice borrows its vector")?;
    let mut original = vec![1, 2, 3, 4, 5];
    let mut sub = original[..2].to_vec();
    writeln!(out, "Original: {:?}, Sub (to_vec copy): {:?}", original, sub)?;

    sub.push(999);
    writeln!(out, "After push to sub:")?;
    writeln!(out, "Original: {:?} (UNCHANGED)", original)?;
    writeln!(out, "Sub: {:?}", sub)?;
    writeln!(
        out,
        "(holding `&original[..2]` while pushing to original would not compile)"
    )?;

    // A shared borrow must end before the vector can change
    writeln!(out, "\nGotcha 2: Borrows have scopes")?;
    {
        let first = &original[0];
        writeln!(out, "Borrowed first element: {}", first)?;
    }
    original.push(6);
    writeln!(out, "After the borrow ends, push works: {:?}", original)?;

    writeln!(out, "\nGotcha 3: Indexing panics, get() returns Option")?;
    match original.get(100) {
        Some(value) => writeln!(out, "original[100] = {}", value)?,
        None => writeln!(out, "original.get(100) = None (original[100] would panic)")?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lesson() -> String {
        let mut buf = Vec::new();
        ArraysLesson.run(&mut buf).unwrap();
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
            "=== ARRAY BASICS ===",
            "=== VECTOR BASICS ===",
            "=== SLICES AND COMMON OPERATIONS ===",
            "=== CAPACITY & GROWTH ===",
            "=== PATTERN: FILTERING ===",
            "=== PATTERN: MAPPING ===",
            "=== PATTERN: REDUCING ===",
            "=== COMMON GOTCHAS ===",
        ] {
            assert!(output.contains(header), "missing section: {}", header);
        }
    }

    #[test]
    fn test_reductions_are_correct_in_output() {
        let output = run_lesson();
        assert!(output.contains("Sum: 55"));
        assert!(output.contains("Maximum: 10"));
        assert!(output.contains("Count of numbers > 5: 5"));
        assert!(output.contains("Even numbers: [2, 4, 6, 8, 10]"));
    }
}
