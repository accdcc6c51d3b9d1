use crate::utils::error::Result;
use std::cell::RefCell;
use std::fmt;
use std::io::Write;

// FUNCTIONS
// =========
// Multiple returns are tuples, fallible returns are Result, cleanup is Drop.

#[derive(Debug)]
struct DivisionByZero;

impl fmt::Display for DivisionByZero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "division by zero")
    }
}

fn add_and_subtract(a: i32, b: i32) -> (i32, i32) {
    (a + b, a - b)
}

fn rectangle(width: f64, height: f64) -> (f64, f64) {
    let area = width * height;
    let perimeter = 2.0 * (width + height);
    (area, perimeter)
}

fn analyze_number(n: u32) -> (bool, Vec<u32>) {
    if n <= 1 {
        return (false, Vec::new());
    }

    let is_prime = (2..n).take_while(|i| i * i <= n).all(|i| n % i != 0);
    let factors = (1..=n).filter(|i| n % i == 0).collect();

    (is_prime, factors)
}

fn divide(dividend: i32, divisor: i32) -> std::result::Result<(i32, i32), DivisionByZero> {
    if divisor == 0 {
        return Err(DivisionByZero);
    }
    Ok((dividend / divisor, dividend % divisor))
}

/// Counts per character class, returned as one named struct.
#[derive(Debug, Default, PartialEq)]
struct CharCounts {
    uppercase: usize,
    lowercase: usize,
    digits: usize,
}

fn analyze_string(s: &str) -> CharCounts {
    let mut counts = CharCounts::default();
    for ch in s.chars() {
        if ch.is_ascii_uppercase() {
            counts.uppercase += 1;
        } else if ch.is_ascii_lowercase() {
            counts.lowercase += 1;
        } else if ch.is_ascii_digit() {
            counts.digits += 1;
        }
    }
    counts
}

fn split_words(s: &str) -> (Vec<&str>, usize) {
    let words: Vec<&str> = s.split_whitespace().collect();
    let count = words.len();
    (words, count)
}

/// Runs the whole functions walkthrough against the sink.
pub fn run(out: &mut dyn Write) -> Result<()> {
    tuple_returns(out)?;
    result_returns(out)?;
    named_result_structs(out)?;
    drop_guards(out)?;
    panic_recovery(out)?;
    Ok(())
}

fn tuple_returns(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n1. MULTIPLE RETURNS AS TUPLES:")?;

    let (sum, diff) = add_and_subtract(10, 5);
    writeln!(out, "Sum: {}, Difference: {}", sum, diff)?;

    let (area, perimeter) = rectangle(4.0, 6.0);
    writeln!(out, "Rectangle - Area: {:.2}, Perimeter: {:.2}", area, perimeter)?;

    let (is_prime, factors) = analyze_number(17);
    writeln!(out, "Number 17 - Prime: {}, Factors: {:?}", is_prime, factors)?;

    // _ discards the parts you do not need
    let (_, perimeter_only) = rectangle(3.0, 8.0);
    writeln!(out, "Perimeter only: {:.2}", perimeter_only)?;

    Ok(())
}

fn result_returns(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n2. FALLIBLE RETURNS AS RESULT:")?;

    match divide(17, 5) {
        Ok((quotient, remainder)) => {
            writeln!(out, "17 / 5 = {} remainder {}", quotient, remainder)?
        }
        Err(e) => writeln!(out, "Error: {}", e)?,
    };

    match divide(17, 0) {
        Ok((quotient, remainder)) => {
            writeln!(out, "17 / 0 = {} remainder {}", quotient, remainder)?
        }
        Err(e) => writeln!(out, "17 / 0 -> Error: {}", e)?,
    };

    // ? propagates the error to the caller instead of matching on it
    writeln!(
        out,
        "Inside a Result-returning function, `let (q, r) = divide(a, b)?;` forwards"
    )?;
    writeln!(out, "the error case in one character")?;

    Ok(())
}

fn named_result_structs(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n3. NAMED RESULTS AS STRUCTS:")?;

    let counts = analyze_string("Hello123");
    writeln!(out, "String \"Hello123\": {:?}", counts)?;

    let (words, count) = split_words("Rust is expressive");
    writeln!(out, "Words: {:?}, Count: {}", words, count)?;

    let (words, count) = split_words("");
    writeln!(out, "Empty input: {:?}, Count: {}", words, count)?;

    Ok(())
}

fn drop_guards(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n4. DROP GUARDS: CLEANUP AT SCOPE EXIT:")?;

    // Drop runs at scope exit, last-created first
    let log = RefCell::new(Vec::new());

    struct Guard<'a> {
        name: &'static str,
        log: &'a RefCell<Vec<String>>,
    }

    impl Drop for Guard<'_> {
        fn drop(&mut self) {
            self.log.borrow_mut().push(format!("dropped: {}", self.name));
        }
    }

    {
        let _first = Guard { name: "first (dropped last)", log: &log };
        let _second = Guard { name: "second", log: &log };
        let _third = Guard { name: "third (dropped first)", log: &log };
        log.borrow_mut().push("scope ending".to_string());
    }

    for line in log.borrow().iter() {
        writeln!(out, "  {}", line)?;
    }

    writeln!(out, "Files, locks, and sockets release the same way: when the owner drops")?;

    // A guard captures its data at construction time
    let message = "original message".to_string();
    struct Echo<'a> {
        message: String,
        log: &'a RefCell<Vec<String>>,
    }
    impl Drop for Echo<'_> {
        fn drop(&mut self) {
            self.log
                .borrow_mut()
                .push(format!("guard saw: {}", self.message));
        }
    }

    let late_log = RefCell::new(Vec::new());
    {
        let _echo = Echo { message: message.clone(), log: &late_log };
        // reassigning `message` here would not change what the guard prints
    }
    for line in late_log.borrow().iter() {
        writeln!(out, "  {}", line)?;
    }

    Ok(())
}

fn panic_recovery(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n5. PANIC RECOVERY:")?;

    writeln!(out, "About to run a panicking closure...")?;

    // Silence the default hook so the demo output stays clean
    let previous_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(|_| {}));
    let outcome = std::panic::catch_unwind(|| {
        panic!("something went wrong");
    });
    std::panic::set_hook(previous_hook);

    match outcome {
        Ok(()) => writeln!(out, "No panic occurred")?,
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .copied()
                .unwrap_or("unknown panic");
            writeln!(out, "Recovered from panic: {}", message)?;
        }
    }

    writeln!(out, "Program continues after recovery")?;
    writeln!(out, "(catch_unwind is for process edges like thread pools, not control flow)")?;

    Ok(())
}
