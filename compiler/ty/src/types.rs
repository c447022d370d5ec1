use std::fmt::{Display, Formatter};

/// Type tags of the language. `Void` (`rien`) is only legal as a return type.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Type {
    Int,
    Void,
}

impl Type {
    /// Maps a source keyword to its type tag.
    pub fn from_keyword(word: &str) -> Option<Type> {
        match word {
            "entier" => Some(Type::Int),
            "rien" => Some(Type::Void),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Type::Int => "entier",
            Type::Void => "rien",
        }
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_round_trip() {
        assert_eq!(Type::from_keyword("entier"), Some(Type::Int));
        assert_eq!(Type::from_keyword("rien"), Some(Type::Void));
        assert_eq!(Type::from_keyword("flottant"), None);
        assert_eq!(Type::Int.to_string(), "entier");
        assert_eq!(Type::Void.to_string(), "rien");
    }
}
