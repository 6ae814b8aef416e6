//! Debate stances

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed rhetorical position held by one persona for a whole debate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stance {
    For,
    Against,
}

impl Stance {
    /// The stance that speaks after this one
    pub fn opponent(self) -> Stance {
        match self {
            Stance::For => Stance::Against,
            Stance::Against => Stance::For,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stance::For => "FOR",
            Stance::Against => "AGAINST",
        }
    }

    /// Preposition used in the opening directive ("in favor of" / "against")
    pub fn preposition(self) -> &'static str {
        match self {
            Stance::For => "in favor of",
            Stance::Against => "against",
        }
    }
}

impl fmt::Display for Stance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Stance::For.opponent(), Stance::Against);
        assert_eq!(Stance::Against.opponent(), Stance::For);
        assert_eq!(Stance::For.opponent().opponent(), Stance::For);
    }

    #[test]
    fn test_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Stance::Against).unwrap(), "\"AGAINST\"");
        assert_eq!(Stance::For.to_string(), "FOR");
    }
}
