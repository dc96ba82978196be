//! The closed set of operator and constant symbols.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::Error;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum UnaryOp {
    Not,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum BinaryOp {
    And,
    Or,
    Xor,
    Implies,
    Iff,
    Nor,
    Nand,
}

/// A symbol that can label a non-variable node: a truth constant or an operator.
///
/// This is the key type of template mappings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Symbol {
    Const(bool),
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 1] = [UnaryOp::Not];

    pub const fn as_str(self) -> &'static str {
        match self {
            UnaryOp::Not => "~",
        }
    }

    pub fn apply(self, a: bool) -> bool {
        match self {
            UnaryOp::Not => !a,
        }
    }
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 7] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Xor,
        BinaryOp::Implies,
        BinaryOp::Iff,
        BinaryOp::Nor,
        BinaryOp::Nand,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "+",
            BinaryOp::Implies => "->",
            BinaryOp::Iff => "<->",
            BinaryOp::Nor => "-|",
            BinaryOp::Nand => "-&",
        }
    }

    pub fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BinaryOp::And => a && b,
            BinaryOp::Or => a || b,
            BinaryOp::Xor => a ^ b,
            BinaryOp::Implies => !a || b,
            BinaryOp::Iff => a == b,
            BinaryOp::Nor => !(a || b),
            BinaryOp::Nand => !(a && b),
        }
    }
}

// Constants
impl Symbol {
    pub const TRUE: Symbol = Symbol::Const(true);
    pub const FALSE: Symbol = Symbol::Const(false);
    pub const NOT: Symbol = Symbol::Unary(UnaryOp::Not);
    pub const AND: Symbol = Symbol::Binary(BinaryOp::And);
    pub const OR: Symbol = Symbol::Binary(BinaryOp::Or);
    pub const XOR: Symbol = Symbol::Binary(BinaryOp::Xor);
    pub const IMPLIES: Symbol = Symbol::Binary(BinaryOp::Implies);
    pub const IFF: Symbol = Symbol::Binary(BinaryOp::Iff);
    pub const NOR: Symbol = Symbol::Binary(BinaryOp::Nor);
    pub const NAND: Symbol = Symbol::Binary(BinaryOp::Nand);

    /// Every recognized symbol.
    pub const ALL: [Symbol; 10] = [
        Symbol::TRUE,
        Symbol::FALSE,
        Symbol::NOT,
        Symbol::AND,
        Symbol::OR,
        Symbol::XOR,
        Symbol::IMPLIES,
        Symbol::IFF,
        Symbol::NOR,
        Symbol::NAND,
    ];
}

// Getters
impl Symbol {
    pub const fn as_str(self) -> &'static str {
        match self {
            Symbol::Const(true) => "T",
            Symbol::Const(false) => "F",
            Symbol::Unary(op) => op.as_str(),
            Symbol::Binary(op) => op.as_str(),
        }
    }

    pub const fn arity(self) -> usize {
        match self {
            Symbol::Const(_) => 0,
            Symbol::Unary(_) => 1,
            Symbol::Binary(_) => 2,
        }
    }

    pub const fn is_constant(self) -> bool {
        matches!(self, Symbol::Const(_))
    }
}

impl From<UnaryOp> for Symbol {
    fn from(op: UnaryOp) -> Self {
        Symbol::Unary(op)
    }
}

impl From<BinaryOp> for Symbol {
    fn from(op: BinaryOp) -> Self {
        Symbol::Binary(op)
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Symbol::ALL
            .into_iter()
            .find(|symbol| symbol.as_str() == s)
            .ok_or_else(|| Error::UnsupportedOperator(s.to_string()))
    }
}

impl Display for UnaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Symbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
