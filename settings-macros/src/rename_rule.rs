use heck::{ToKebabCase, ToLowerCamelCase, ToShoutySnakeCase, ToSnakeCase, ToUpperCamelCase};

/// Naming convention applied to every field by `#[settings(rename_all = "...")]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenameRule {
    /// `PascalCase`
    PascalCase,
    /// `camelCase`
    CamelCase,
    /// `snake_case`
    SnakeCase,
    /// `kebab-case`
    KebabCase,
    /// `SCREAMING_SNAKE_CASE`
    ScreamingSnakeCase,
    /// `lowercase`
    Lowercase,
    /// `UPPERCASE`
    Uppercase,
}

impl RenameRule {
    pub fn parse(rule: &str) -> Option<Self> {
        Some(match rule {
            "PascalCase" => RenameRule::PascalCase,
            "camelCase" => RenameRule::CamelCase,
            "snake_case" => RenameRule::SnakeCase,
            "kebab-case" => RenameRule::KebabCase,
            "SCREAMING_SNAKE_CASE" => RenameRule::ScreamingSnakeCase,
            "lowercase" => RenameRule::Lowercase,
            "UPPERCASE" => RenameRule::Uppercase,
            _ => return None,
        })
    }

    pub fn apply(self, input: &str) -> String {
        match self {
            RenameRule::PascalCase => input.to_upper_camel_case(),
            RenameRule::CamelCase => input.to_lower_camel_case(),
            RenameRule::SnakeCase => input.to_snake_case(),
            RenameRule::KebabCase => input.to_kebab_case(),
            RenameRule::ScreamingSnakeCase => input.to_shouty_snake_case(),
            RenameRule::Lowercase => input.to_lowercase(),
            RenameRule::Uppercase => input.to_uppercase(),
        }
    }
}
