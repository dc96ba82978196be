//! Operator bases.
//!
//! A [`Basis`] is a set of symbols (constants and operators). Formulas are
//! *in* a basis when every symbol they use belongs to it; variables are
//! always allowed.

use std::collections::BTreeSet;
use std::fmt;

use crate::formula::Formula;
use crate::operator::Symbol;

#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Basis(BTreeSet<Symbol>);

impl Basis {
    pub fn from_symbols(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self(symbols.into_iter().collect())
    }

    /// Every recognized symbol.
    pub fn full() -> Self {
        Self::from_symbols(Symbol::ALL)
    }

    /// `{~, &, |}`
    pub fn not_and_or() -> Self {
        Self::from_symbols([Symbol::NOT, Symbol::AND, Symbol::OR])
    }

    /// `{~, &}`
    pub fn not_and() -> Self {
        Self::from_symbols([Symbol::NOT, Symbol::AND])
    }

    /// `{-&}`
    pub fn nand() -> Self {
        Self::from_symbols([Symbol::NAND])
    }

    /// `{->, ~}`
    pub fn implies_not() -> Self {
        Self::from_symbols([Symbol::IMPLIES, Symbol::NOT])
    }

    /// `{->, F}`
    pub fn implies_false() -> Self {
        Self::from_symbols([Symbol::IMPLIES, Symbol::FALSE])
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.0.contains(&symbol)
    }

    pub fn union(&self, other: &Basis) -> Basis {
        Basis(self.0.union(&other.0).copied().collect())
    }

    pub fn symbols(&self) -> impl Iterator<Item = Symbol> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks that `formula` uses no symbol outside this basis.
    pub fn admits(&self, formula: &Formula) -> bool {
        self.violations(formula).is_empty()
    }

    /// Symbols used by `formula` that are not in this basis.
    pub fn violations(&self, formula: &Formula) -> BTreeSet<Symbol> {
        formula.operators().into_iter().filter(|s| !self.contains(*s)).collect()
    }
}

impl FromIterator<Symbol> for Basis {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Self::from_symbols(iter)
    }
}

impl fmt::Display for Basis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, symbol) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "}}")
    }
}
