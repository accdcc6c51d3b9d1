use crate::utils::error::Result;
use std::fmt;
use std::io::Write;

// std::fmt DEEP DIVE
// ==================
// Display for people, Debug for programmers, format specs for layout.
// Everything here is checked at compile time: a bad argument count or a
// type without the required trait is a build error, not mangled output.

struct Temperature(f64);

impl fmt::Display for Temperature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Temperature({:.1}°C)", self.0)
        } else {
            write!(f, "{:.1}°C", self.0)
        }
    }
}

struct Sensor {
    id: u32,
    reading: f64,
}

impl fmt::Debug for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sensor")
            .field("id", &self.id)
            .field("reading", &self.reading)
            .finish()
    }
}

#[derive(Debug)]
struct Person {
    name: String,
    age: u32,
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (age {})", self.name, self.age)
    }
}

/// Runs the whole formatting walkthrough against the sink.
pub fn run(out: &mut dyn Write) -> Result<()> {
    basic_printing(out)?;
    display_and_debug(out)?;
    integer_formats(out)?;
    float_formats(out)?;
    width_and_alignment(out)?;
    sign_and_alternate_flags(out)?;
    custom_implementations(out)?;
    formatting_collections(out)?;
    parsing_values(out)?;
    writing_to_buffers(out)?;
    positional_and_named_args(out)?;
    compile_time_safety(out)?;
    Ok(())
}

fn basic_printing(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n1. BASIC PRINTING:")?;

    // print!/println! go to stdout, eprintln! to stderr, format! to a String
    write!(out, "Hello, ")?;
    writeln!(out, "Rust!")?;

    let name = "Alice";
    let age = 30;
    let active = true;
    writeln!(out, "Name: {}, Age: {}, Active: {}", name, age, active)?;

    let line = format!("format! returns a String: {} is {}", name, age);
    writeln!(out, "{}", line)?;

    Ok(())
}

fn display_and_debug(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n2. DISPLAY vs DEBUG:")?;

    let person = Person { name: "Bob".to_string(), age: 25 };

    writeln!(out, "{{}} (Display): {}", person)?;
    writeln!(out, "{{:?}} (Debug): {:?}", person)?;
    writeln!(out, "{{:#?}} (pretty Debug):\n{:#?}", person)?;

    Ok(())
}

fn integer_formats(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n3. INTEGER FORMATS:")?;

    let num = 255;
    writeln!(out, "{{}} (decimal): {}", num)?;
    writeln!(out, "{{:b}} (binary): {:b}", num)?;
    writeln!(out, "{{:o}} (octal): {:o}", num)?;
    writeln!(out, "{{:x}} (hex): {:x}", num)?;
    writeln!(out, "{{:X}} (HEX): {:X}", num)?;
    writeln!(out, "{{:#x}} (hex with prefix): {:#x}", num)?;
    writeln!(out, "{{:#b}} (binary with prefix): {:#b}", num)?;

    let scalar = 0x1F980;
    writeln!(
        out,
        "char::from_u32(0x{:X}): {}",
        scalar,
        char::from_u32(scalar).unwrap_or('?')
    )?;

    Ok(())
}

fn float_formats(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n4. FLOAT FORMATS:")?;

    let pi = 3.14159;
    writeln!(out, "{{}} (shortest round-trip): {}", pi)?;
    writeln!(out, "{{:.2}} (precision): {:.2}", pi)?;
    writeln!(out, "{{:e}} (scientific): {:e}", pi)?;
    writeln!(out, "{{:.3e}} (scientific, 3 digits): {:.3e}", pi)?;

    Ok(())
}

fn width_and_alignment(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n5. WIDTH AND ALIGNMENT:")?;

    writeln!(out, "|{:10}|{:10}|{:10.2}|", "hello", 42, 3.14159)?;
    writeln!(out, "|{:<10}|{:<10}|{:<10.2}| (left)", "hello", 42, 3.14159)?;
    writeln!(out, "|{:>10}|{:>10}|{:>10.2}| (right)", "hello", 42, 3.14159)?;
    writeln!(out, "|{:^10}|{:^10}|{:^10.2}| (center)", "hello", 42, 3.14159)?;
    writeln!(out, "{:08} (zero padding)", 42)?;
    writeln!(out, "{:*^12} (custom fill)", "mid")?;

    Ok(())
}

fn sign_and_alternate_flags(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n6. FLAGS:")?;

    writeln!(out, "Default: {}", 42)?;
    writeln!(out, "Plus flag {{:+}}: {:+}", 42)?;
    writeln!(out, "Alternate {{:#o}}, {{:#x}}: {:#o}, {:#x}", 42, 42)?;
    writeln!(out, "Left-aligned in 10 {{:<10}}: {:<10}|", 42)?;
    writeln!(out, "Zero-filled 10 {{:010}}: {:010}", 42)?;

    Ok(())
}

fn custom_implementations(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n7. CUSTOM TRAIT IMPLEMENTATIONS:")?;

    let temp = Temperature(23.5);
    writeln!(out, "Display: {}", temp)?;
    writeln!(out, "Alternate form {{:#}}: {:#}", temp)?;

    // f.alternate() inside the impl is how {:#} changes the rendering

    let sensor = Sensor { id: 7, reading: 21.25 };
    writeln!(out, "Hand-written Debug via debug_struct: {:?}", sensor)?;

    Ok(())
}

fn formatting_collections(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n8. COLLECTIONS:")?;

    let numbers = vec![1, 2, 3, 4];
    writeln!(out, "Vec: {:?}", numbers)?;

    let people = vec![
        Person { name: "A".to_string(), age: 1 },
        Person { name: "B".to_string(), age: 2 },
    ];
    writeln!(out, "Vec of structs: {:?}", people)?;

    let pair = ("answer", 42);
    writeln!(out, "Tuple: {:?}", pair)?;

    // BTreeMap keeps keys ordered, so its Debug output is stable
    let fruit: std::collections::BTreeMap<&str, i32> =
        [("apple", 5), ("banana", 3)].into_iter().collect();
    writeln!(out, "BTreeMap: {:?}", fruit)?;

    writeln!(out, "Nested pretty Debug:\n{:#?}", ("outer", vec![1, 2]))?;

    Ok(())
}

fn parsing_values(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n9. PARSING TEXT BACK OUT:")?;

    let parsed = "42".parse::<i32>();
    writeln!(out, "\"42\".parse::<i32>(): {:?}", parsed)?;

    let failed = "fourty-two".parse::<i32>();
    writeln!(out, "\"fourty-two\".parse::<i32>(): {:?}", failed)?;

    // Scanning formatted text back out is split + parse, with Option/Result
    // making every step fallible in the type system
    let input = "Alice 25 3.14";
    let mut parts = input.split_whitespace();
    let name = parts.next().unwrap_or("");
    let age: u32 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0);
    let score: f64 = parts.next().and_then(|s| s.parse().ok()).unwrap_or(0.0);
    writeln!(
        out,
        "Scanned from {:?}: name={}, age={}, score={:.2}",
        input, name, age, score
    )?;

    Ok(())
}

fn writing_to_buffers(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n10. WRITING TO BUFFERS:")?;

    // fmt::Write targets Strings
    let mut text = String::new();
    {
        use std::fmt::Write as _;
        write!(text, "Formatted into a String: {} scored {:.1}", "Bob", 87.5)
            .map_err(|_| std::io::Error::other("string formatting failed"))?;
    }
    writeln!(out, "{} ({} bytes)", text, text.len())?;

    // io::Write targets byte sinks like files, sockets, and Vec<u8>
    let mut bytes: Vec<u8> = Vec::new();
    write!(bytes, "Formatted into a Vec<u8>: {:>6}", 42)?;
    writeln!(out, "{}", String::from_utf8_lossy(&bytes))?;

    Ok(())
}

fn positional_and_named_args(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n11. POSITIONAL AND NAMED ARGUMENTS:")?;

    writeln!(out, "Reordering: {1} {0} {2}", "world", "hello", "again")?;
    writeln!(out, "Reusing: {0} and {0} again", "once")?;

    let name = "Ada";
    writeln!(out, "Inline capture: {name}")?;
    writeln!(out, "Named argument: {who}", who = "Grace")?;

    let width = 8;
    let prec = 3;
    writeln!(out, "Dynamic width/precision: {:width$.prec$}", 3.14159)?;
    writeln!(out, "Width from positional arg: {:1$}", "x", 6)?;

    Ok(())
}

fn compile_time_safety(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n12. COMPILE-TIME SAFETY:")?;

    writeln!(out, "Too few arguments, too many arguments, or a type missing the")?;
    writeln!(out, "required trait all fail the BUILD; there is no runtime analog of")?;
    writeln!(out, "mangled verb output")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_tour() -> String {
        let mut buf = Vec::new();
        run(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_output_is_deterministic() {
        assert_eq!(run_tour(), run_tour());
    }

    #[test]
    fn test_integer_formats() {
        let output = run_tour();
        assert!(output.contains("(binary): 11111111"));
        assert!(output.contains("(octal): 377"));
        assert!(output.contains("(hex): ff"));
        assert!(output.contains("(HEX): FF"));
        assert!(output.contains("(hex with prefix): 0xff"));
    }

    #[test]
    fn test_alternate_flag_dispatch() {
        assert_eq!(format!("{}", Temperature(23.5)), "23.5°C");
        assert_eq!(format!("{:#}", Temperature(23.5)), "Temperature(23.5°C)");
    }

    #[test]
    fn test_manual_debug_impl() {
        let sensor = Sensor { id: 7, reading: 21.25 };
        assert_eq!(format!("{:?}", sensor), "Sensor { id: 7, reading: 21.25 }");
    }

    #[test]
    fn test_width_and_alignment_rows() {
        let output = run_tour();
        assert!(output.contains("|hello     |"));
        assert!(output.contains("|     hello|"));
        assert!(output.contains("00000042"));
        assert!(output.contains("****mid*****"));
    }

    #[test]
    fn test_scanned_values() {
        let output = run_tour();
        assert!(output.contains("name=Alice, age=25, score=3.14"));
    }
}
