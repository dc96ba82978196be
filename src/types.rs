//! Type-safe wrapper for propositional variable names.
//!
//! A [`Var`] is a validated identifier: a lowercase ASCII letter optionally
//! followed by ASCII digits (`p`, `q`, `x12`). The names `p` and `q` double as
//! template placeholders, see [`Var::P`] and [`Var::Q`].
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::Error;

/// A propositional variable.
///
/// Cheap to clone: the name is reference-counted.
///
/// # Invariants
///
/// - The name is non-empty
/// - The first character is in `a..=z`, the rest are ASCII digits
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Var(Arc<str>);

impl Var {
    /// Name of the first template placeholder.
    pub const P: &'static str = "p";
    /// Name of the second template placeholder.
    pub const Q: &'static str = "q";

    /// Creates a new variable with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid variable name.
    /// Use [`str::parse`] for a fallible version.
    pub fn new(name: &str) -> Self {
        assert!(Self::is_valid_name(name), "Invalid variable name '{}'", name);
        Var(name.into())
    }

    /// The first placeholder variable, `p`.
    pub fn p() -> Self {
        Var(Self::P.into())
    }

    /// The second placeholder variable, `q`.
    pub fn q() -> Self {
        Var(Self::Q.into())
    }

    /// Checks whether `name` is a valid variable name.
    pub fn is_valid_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_ascii_lowercase() => chars.all(|c| c.is_ascii_digit()),
            _ => false,
        }
    }

    /// Returns the variable name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Checks if this is one of the reserved placeholders `p` or `q`.
    pub fn is_placeholder(&self) -> bool {
        self.name() == Self::P || self.name() == Self::Q
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Var {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid_name(s) {
            Ok(Var(s.into()))
        } else {
            Err(Error::InvalidVariable(s.to_string()))
        }
    }
}

impl AsRef<str> for Var {
    fn as_ref(&self) -> &str {
        self.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_var_creation() {
        let x = Var::new("x");
        let x12 = Var::new("x12");
        assert_eq!(x.name(), "x");
        assert_eq!(x12.name(), "x12");
        assert!(x < x12);
    }

    #[test]
    #[should_panic(expected = "Invalid variable name")]
    fn test_var_uppercase_panics() {
        Var::new("X");
    }

    #[test]
    fn test_valid_names() {
        assert!(Var::is_valid_name("p"));
        assert!(Var::is_valid_name("z0"));
        assert!(Var::is_valid_name("a123"));
        assert!(!Var::is_valid_name(""));
        assert!(!Var::is_valid_name("T"));
        assert!(!Var::is_valid_name("1p"));
        assert!(!Var::is_valid_name("pq"));
        assert!(!Var::is_valid_name("p1a"));
    }

    #[test]
    fn test_var_from_str() {
        assert_eq!("q7".parse::<Var>(), Ok(Var::new("q7")));
        assert_eq!("Q".parse::<Var>(), Err(Error::InvalidVariable("Q".to_string())));
    }

    #[test]
    fn test_placeholders() {
        assert!(Var::p().is_placeholder());
        assert!(Var::q().is_placeholder());
        assert!(!Var::new("r").is_placeholder());
        assert!(!Var::new("p1").is_placeholder());
    }
}
