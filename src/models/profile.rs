use crate::{Anthem, Capital, CountryFactory, Flag, SimpleAnthem, SimpleCapital, SimpleFlag};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One matched family of symbols taken from a single factory.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CountryProfile {
    pub flag: SimpleFlag,
    pub anthem: SimpleAnthem,
    pub capital: SimpleCapital,
}

impl CountryProfile {
    pub fn from_factory(factory: &dyn CountryFactory) -> Self {
        let flag = factory.create_flag();
        let anthem = factory.create_anthem();
        let capital = factory.create_capital();

        Self {
            flag: SimpleFlag::from(flag.as_ref()),
            anthem: SimpleAnthem::from(anthem.as_ref()),
            capital: SimpleCapital::from(capital.as_ref()),
        }
    }
}

impl fmt::Display for CountryProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Country symbols:")?;
        writeln!(f, "Flag: {} {}", self.flag.description(), self.flag.emoji())?;
        writeln!(f, "Anthem: {}", self.anthem.title())?;
        write!(
            f,
            "Capital: {} (population ≈ {} people)",
            self.capital.name(),
            group_thousands(self.capital.population())
        )
    }
}

/// Formats `12680000` as `12 680 000`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factories::RussiaFactory;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1 000");
        assert_eq!(group_thousands(12_680_000), "12 680 000");
    }

    #[test]
    fn test_display_lines() {
        let profile = CountryProfile::from_factory(&RussiaFactory);
        let rendered = profile.to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "Country symbols:");
        assert!(lines[1].starts_with("Flag: "));
        assert!(lines[1].ends_with("🇷🇺"));
        assert_eq!(lines[2], "Anthem: State Anthem of the Russian Federation");
        assert_eq!(lines[3], "Capital: Moscow (population ≈ 12 680 000 people)");
    }
}
