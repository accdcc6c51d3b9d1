use crate::domain::model::Topic;
use crate::domain::ports::Lesson;
use crate::utils::error::Result;
use serde::Serialize;
use std::fmt;
use std::io::Write;

// STRUCTS
// =======
// Typed collections of named fields.
// - Behavior lives in impl blocks, shared behavior in traits
// - Owned values by default; borrowing and Box control where they live
// - No inheritance: composition with named fields plus delegation

#[derive(Debug, Clone, Default, PartialEq)]
struct Person {
    name: String,
    age: u32,
    city: String,
}

impl Person {
    fn new(name: &str, age: u32) -> Self {
        Self {
            name: name.to_string(),
            age,
            city: "Unknown".to_string(),
        }
    }

    /// Constructor with validation; invalid input never becomes a Person.
    fn validated(name: &str, age: u32) -> Option<Self> {
        if name.is_empty() || age > 130 {
            return None;
        }
        Some(Self::new(name, age))
    }
}

#[derive(Debug, Clone)]
struct Employee {
    person: Person,
    employee_id: u32,
    department: String,
}

impl Employee {
    // Delegation replaces field promotion
    fn name(&self) -> &str {
        &self.person.name
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Point {
    x: i32,
    y: i32,
}

impl Point {
    fn origin() -> Self {
        Self { x: 0, y: 0 }
    }

    // Shared receiver: reads a copy of nothing, borrows the value
    fn distance_squared(&self) -> i32 {
        self.x * self.x + self.y * self.y
    }

    // Exclusive receiver: can modify the original
    fn scale(&mut self, factor: i32) {
        self.x *= factor;
        self.y *= factor;
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Serialize)]
struct User {
    #[serde(rename = "id")]
    user_id: u64,
    name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    email: String,
    #[serde(skip_serializing)]
    password: String,
    created_at: String,
}

pub struct StructsLesson;

impl Lesson for StructsLesson {
    fn topic(&self) -> Topic {
        Topic::Structs
    }

    fn run(&self, out: &mut dyn Write) -> Result<()> {
        struct_basics(out)?;
        ownership_and_boxes(out)?;
        struct_comparison(out)?;
        composition(out)?;
        struct_methods(out)?;
        display_implementations(out)?;
        serde_attributes(out)?;
        pattern_constructor(out)?;
        pattern_builder(out)?;
        struct_gotchas(out)?;
        Ok(())
    }
}

fn struct_basics(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== STRUCT BASICS ===")?;

    // Default gives every field its default value
    let p1 = Person::default();
    writeln!(out, "Default value: {:?}", p1)?;

    let p2 = Person {
        name: "Alice".to_string(),
        age: 30,
        city: "NYC".to_string(),
    };
    writeln!(out, "Struct literal: {:?}", p2)?;

    // Field init shorthand when a local has the field's name
    let name = "Bob".to_string();
    let p3 = Person { name, age: 25, city: "LA".to_string() };
    writeln!(out, "Field init shorthand: {:?}", p3)?;

    // Struct update syntax fills the rest from another value
    let p4 = Person {
        name: "Charlie".to_string(),
        ..p2.clone()
    };
    writeln!(out, "Struct update syntax: {:?}", p4)?;

    writeln!(out, "\nAccessing fields:")?;
    writeln!(out, "  name: {}", p2.name)?;
    writeln!(out, "  age: {}", p2.age)?;

    let mut p5 = p2.clone();
    p5.age = 31;
    writeln!(out, "After modification: {:?}", p5)?;

    Ok(())
}

fn ownership_and_boxes(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== OWNERSHIP, BORROWS, AND BOXES ===")?;

    let mut p1 = Person::new("Alice", 30);
    writeln!(out, "Original: {:?}", p1)?;

    // A mutable borrow modifies the value in place
    let borrowed = &mut p1;
    borrowed.age = 31;
    writeln!(out, "After modification via &mut: {:?}", p1)?;

    // Box moves the value to the heap; field access auto-dereferences
    let mut boxed = Box::new(Person::new("Bob", 25));
    boxed.age = 26;
    writeln!(out, "Boxed person: {:?} (fields reachable through the Box)", boxed)?;

    writeln!(
        out,
        "(assigning a Person moves it; the previous binding becomes unusable at compile time)"
    )?;

    Ok(())
}

fn struct_comparison(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== STRUCT COMPARISON ===")?;

    let p1 = Person { name: "Alice".to_string(), age: 30, city: "NYC".to_string() };
    let p2 = Person { name: "Alice".to_string(), age: 30, city: "NYC".to_string() };
    let p3 = Person { name: "Bob".to_string(), age: 25, city: "LA".to_string() };

    // == comes from the PartialEq derive, not from the language
    writeln!(out, "p1 == p2: {}", p1 == p2)?;
    writeln!(out, "p1 == p3: {}", p1 == p3)?;

    #[derive(Debug, PartialEq)]
    struct WithHobbies {
        name: String,
        hobbies: Vec<String>,
    }

    let h1 = WithHobbies { name: "Alice".to_string(), hobbies: vec!["reading".to_string()] };
    let h2 = WithHobbies { name: "Alice".to_string(), hobbies: vec!["reading".to_string()] };
    writeln!(
        out,
        "Structs with Vec fields compare fine once derived: {}",
        h1 == h2
    )?;

    Ok(())
}

fn composition(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== COMPOSITION ===")?;

    let emp = Employee {
        person: Person {
            name: "Alice".to_string(),
            age: 30,
            city: "NYC".to_string(),
        },
        employee_id: 12345,
        department: "Engineering".to_string(),
    };

    writeln!(out, "Employee: {:?}", emp)?;

    // There is no field promotion; the path is explicit
    writeln!(out, "Name (via person field): {}", emp.person.name)?;
    writeln!(out, "Name (via delegation method): {}", emp.name())?;
    writeln!(out, "EmployeeID: {}", emp.employee_id)?;
    writeln!(out, "Department: {}", emp.department)?;

    // The inner value can be borrowed out on its own
    describe_person(out, &emp.person)?;

    Ok(())
}

fn describe_person(out: &mut dyn Write, person: &Person) -> Result<()> {
    writeln!(out, "  Person: {}, {} years old", person.name, person.age)?;
    Ok(())
}

fn struct_methods(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== METHODS AND RECEIVERS ===")?;

    let mut p = Point { x: 3, y: 4 };
    writeln!(out, "Point: {:?}", p)?;

    writeln!(out, "Squared distance from origin: {}", p.distance_squared())?;

    // &mut self methods need a mutable binding
    p.scale(2);
    writeln!(out, "After scaling by 2: {:?}", p)?;

    let origin = Point::origin();
    writeln!(out, "Associated function Point::origin(): {:?}", origin)?;

    Ok(())
}

fn display_implementations(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== DISPLAY: PRINTABLE STRUCTS ===")?;

    let p = Point { x: 3, y: 4 };
    writeln!(out, "With {{}} (Display impl): {}", p)?;
    writeln!(out, "With {{:?}} (Debug derive): {:?}", p)?;
    writeln!(out, "to_string() comes free with Display: {}", p.to_string())?;

    Ok(())
}

fn serde_attributes(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== SERDE FIELD ATTRIBUTES ===")?;

    let user = User {
        user_id: 1,
        name: "Alice".to_string(),
        email: String::new(),
        password: "secret123".to_string(),
        created_at: "2024-01-01".to_string(),
    };

    writeln!(out, "User struct: {:?}", user)?;
    let json = serde_json::to_string_pretty(&user)?;
    writeln!(out, "As JSON:\n{}", json)?;
    writeln!(out, "  - #[serde(rename = \"id\")] maps the field to a JSON key")?;
    writeln!(out, "  - #[serde(skip_serializing)] keeps the password out entirely")?;
    writeln!(out, "  - #[serde(skip_serializing_if = ...)] omits the empty email")?;

    Ok(())
}

fn pattern_constructor(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== PATTERN: CONSTRUCTOR FUNCTIONS ===")?;

    let p1 = Person::new("Alice", 30);
    writeln!(out, "Created with Person::new: {:?}", p1)?;

    // Option makes the failure case impossible to ignore
    let p2 = Person::validated("", 200);
    writeln!(out, "Invalid input: {:?}", p2)?;

    let p3 = Person::validated("Bob", 25);
    writeln!(out, "Valid input: {:?}", p3)?;

    Ok(())
}

fn pattern_builder(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== PATTERN: BUILDER ===")?;

    #[derive(Debug)]
    struct ServerConfig {
        host: String,
        port: u16,
        timeout_secs: u64,
        debug: bool,
    }

    struct ServerConfigBuilder {
        host: String,
        port: u16,
        timeout_secs: u64,
        debug: bool,
    }

    impl ServerConfigBuilder {
        fn new() -> Self {
            Self {
                host: "localhost".to_string(),
                port: 8080,
                timeout_secs: 30,
                debug: false,
            }
        }

        fn host(mut self, host: &str) -> Self {
            self.host = host.to_string();
            self
        }

        fn port(mut self, port: u16) -> Self {
            self.port = port;
            self
        }

        fn debug(mut self, debug: bool) -> Self {
            self.debug = debug;
            self
        }

        fn build(self) -> ServerConfig {
            ServerConfig {
                host: self.host,
                port: self.port,
                timeout_secs: self.timeout_secs,
                debug: self.debug,
            }
        }
    }

    let config = ServerConfigBuilder::new()
        .host("example.com")
        .port(9090)
        .debug(true)
        .build();

    writeln!(out, "Built config: {:?}", config)?;

    Ok(())
}

fn struct_gotchas(out: &mut dyn Write) -> Result<()> {
    writeln!(out, "\n=== COMMON GOTCHAS ===")?;

    writeln!(out, "\nGotcha 1: Assignment moves non-Copy structs")?;
    let p1 = Person::new("Alice", 30);
    let p2 = p1.clone();
    writeln!(out, "Original: {:?}", p1)?;
    writeln!(out, "Clone: {:?} (without clone(), p1 would be moved out)", p2)?;

    writeln!(out, "\nGotcha 2: Small all-Copy structs can derive Copy")?;
    let point1 = Point { x: 1, y: 1 };
    let mut point2 = point1;
    point2.scale(2);
    writeln!(out, "point1: {:?} still usable, point2: {:?}", point1, point2)?;

    writeln!(out, "\nGotcha 3: Default values are not always valid values")?;
    let blank = Person::default();
    writeln!(out, "Default Person: {:?}", blank)?;
    writeln!(out, "An empty name and age 0 may not be valid business values;")?;
    writeln!(out, "use constructor functions for validation and defaults")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lesson() -> String {
        let mut buf = Vec::new();
        StructsLesson.run(&mut buf).unwrap();
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
            "=== STRUCT BASICS ===",
            "=== OWNERSHIP, BORROWS, AND BOXES ===",
            "=== STRUCT COMPARISON ===",
            "=== COMPOSITION ===",
            "=== METHODS AND RECEIVERS ===",
            "=== DISPLAY: PRINTABLE STRUCTS ===",
            "=== SERDE FIELD ATTRIBUTES ===",
            "=== PATTERN: CONSTRUCTOR FUNCTIONS ===",
            "=== PATTERN: BUILDER ===",
            "=== COMMON GOTCHAS ===",
        ] {
            assert!(output.contains(header), "missing section: {}", header);
        }
    }

    #[test]
    fn test_serde_attributes_shape_the_json() {
        let output = run_lesson();
        assert!(output.contains(r#""id": 1"#));
        assert!(!output.contains(r#""password""#), "password must not be serialized");
        assert!(!output.contains(r#""email""#), "empty email must be omitted");
    }

    #[test]
    fn test_validated_constructor() {
        assert!(Person::validated("", 30).is_none());
        assert!(Person::validated("Zoe", 300).is_none());
        let person = Person::validated("Zoe", 30).unwrap();
        assert_eq!(person.city, "Unknown");
    }

    #[test]
    fn test_point_methods() {
        let mut p = Point { x: 3, y: 4 };
        assert_eq!(p.distance_squared(), 25);
        p.scale(2);
        assert_eq!(p, Point { x: 6, y: 8 });
        assert_eq!(format!("{}", p), "Point(6, 8)");
    }
}
