use crate::Flag;
use serde::{Deserialize, Serialize};

/// Flag value object holding its description and glyph verbatim.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SimpleFlag {
    description: String,
    emoji: String,
}

impl SimpleFlag {
    pub fn new<D, E>(description: D, emoji: E) -> Self
    where
        D: Into<String>,
        E: Into<String>,
    {
        Self {
            description: description.into(),
            emoji: emoji.into(),
        }
    }
}

impl Flag for SimpleFlag {
    fn description(&self) -> &str {
        &self.description
    }

    fn emoji(&self) -> &str {
        &self.emoji
    }
}

impl From<&dyn Flag> for SimpleFlag {
    fn from(flag: &dyn Flag) -> Self {
        Self::new(flag.description(), flag.emoji())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_return_stored_values() {
        let flag = SimpleFlag::new("Blue cross on white", "🇫🇮");

        assert_eq!(flag.description(), "Blue cross on white");
        assert_eq!(flag.emoji(), "🇫🇮");
    }

    #[test]
    fn test_snapshot_from_trait_object() {
        let boxed: Box<dyn Flag> = Box::new(SimpleFlag::new("Red disc on white", "🇯🇵"));
        let copy = SimpleFlag::from(boxed.as_ref());

        assert_eq!(copy, SimpleFlag::new("Red disc on white", "🇯🇵"));
    }
}
