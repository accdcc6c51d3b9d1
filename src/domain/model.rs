use serde::{Deserialize, Serialize};

/// The four lesson topics offered by the interactive menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topic {
    ArraysAndVectors,
    Maps,
    Structs,
    ConstructingValues,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::ArraysAndVectors,
        Topic::Maps,
        Topic::Structs,
        Topic::ConstructingValues,
    ];

    /// Menu label, in the order the menu lists them.
    pub fn label(&self) -> &'static str {
        match self {
            Topic::ArraysAndVectors => "Arrays & Vectors",
            Topic::Maps => "HashMaps",
            Topic::Structs => "Structs",
            Topic::ConstructingValues => "Constructing Values",
        }
    }

    /// Banner line printed above the lesson.
    pub fn banner(&self) -> &'static str {
        match self {
            Topic::ArraysAndVectors => "ARRAYS AND VECTORS IN RUST",
            Topic::Maps => "HASHMAPS IN RUST",
            Topic::Structs => "STRUCTS IN RUST",
            Topic::ConstructingValues => "CONSTRUCTING VALUES IN RUST",
        }
    }

    /// Stable name used by `--topic` and the TOML `topics.enabled` list.
    pub fn slug(&self) -> &'static str {
        match self {
            Topic::ArraysAndVectors => "arrays",
            Topic::Maps => "maps",
            Topic::Structs => "structs",
            Topic::ConstructingValues => "constructing",
        }
    }

    pub fn from_slug(name: &str) -> Option<Topic> {
        Topic::ALL.iter().copied().find(|t| t.slug() == name)
    }
}

/// What one trimmed line of menu input asks for.
///
/// The menu contract is plain string equality against six literal tokens;
/// anything else is invalid input and maps to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Run(Topic),
    RunAll,
    Exit,
}

impl MenuCommand {
    pub fn parse(input: &str) -> Option<MenuCommand> {
        match input {
            "1" => Some(MenuCommand::Run(Topic::ArraysAndVectors)),
            "2" => Some(MenuCommand::Run(Topic::Maps)),
            "3" => Some(MenuCommand::Run(Topic::Structs)),
            "4" => Some(MenuCommand::Run(Topic::ConstructingValues)),
            "5" => Some(MenuCommand::RunAll),
            "0" => Some(MenuCommand::Exit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_token_maps_to_its_command() {
        assert_eq!(
            MenuCommand::parse("1"),
            Some(MenuCommand::Run(Topic::ArraysAndVectors))
        );
        assert_eq!(MenuCommand::parse("2"), Some(MenuCommand::Run(Topic::Maps)));
        assert_eq!(
            MenuCommand::parse("3"),
            Some(MenuCommand::Run(Topic::Structs))
        );
        assert_eq!(
            MenuCommand::parse("4"),
            Some(MenuCommand::Run(Topic::ConstructingValues))
        );
        assert_eq!(MenuCommand::parse("5"), Some(MenuCommand::RunAll));
        assert_eq!(MenuCommand::parse("0"), Some(MenuCommand::Exit));
    }

    #[test]
    fn test_everything_else_is_invalid() {
        for input in ["", "6", "-1", "01", "1 ", "one", "exit", "q", "1.0"] {
            assert_eq!(MenuCommand::parse(input), None, "input: {:?}", input);
        }
    }

    #[test]
    fn test_slug_round_trip() {
        for topic in Topic::ALL {
            assert_eq!(Topic::from_slug(topic.slug()), Some(topic));
        }
        assert_eq!(Topic::from_slug("slices"), None);
    }
}
