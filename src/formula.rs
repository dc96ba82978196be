//! Formula AST.
//!
//! A [`Formula`] is a cheap handle to an immutable [`Node`]. Nodes are never
//! mutated after construction, so subtrees are freely shared between formulas
//! (and between a template instantiation and the tree it is spliced into).

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::Error;
use crate::operator::{BinaryOp, Symbol, UnaryOp};
use crate::types::Var;

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Node {
    Var(Var),
    Const(bool),
    Unary(UnaryOp, Formula),
    Binary(BinaryOp, Formula, Formula),
}

/// An immutable propositional formula.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Formula(Arc<Node>);

// Constructors
impl Formula {
    pub fn from_node(node: Node) -> Self {
        Formula(Arc::new(node))
    }

    /// Variable leaf.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid variable name.
    pub fn var(name: &str) -> Self {
        Self::from_var(Var::new(name))
    }

    pub fn from_var(var: Var) -> Self {
        Self::from_node(Node::Var(var))
    }

    pub fn constant(value: bool) -> Self {
        Self::from_node(Node::Const(value))
    }

    pub fn tt() -> Self {
        Self::constant(true)
    }

    pub fn ff() -> Self {
        Self::constant(false)
    }

    pub fn unary(op: UnaryOp, child: Formula) -> Self {
        Self::from_node(Node::Unary(op, child))
    }

    pub fn binary(op: BinaryOp, lhs: Formula, rhs: Formula) -> Self {
        Self::from_node(Node::Binary(op, lhs, rhs))
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(child: Formula) -> Self {
        Self::unary(UnaryOp::Not, child)
    }

    pub fn and(lhs: Formula, rhs: Formula) -> Self {
        Self::binary(BinaryOp::And, lhs, rhs)
    }

    pub fn or(lhs: Formula, rhs: Formula) -> Self {
        Self::binary(BinaryOp::Or, lhs, rhs)
    }

    pub fn xor(lhs: Formula, rhs: Formula) -> Self {
        Self::binary(BinaryOp::Xor, lhs, rhs)
    }

    pub fn implies(lhs: Formula, rhs: Formula) -> Self {
        Self::binary(BinaryOp::Implies, lhs, rhs)
    }

    pub fn iff(lhs: Formula, rhs: Formula) -> Self {
        Self::binary(BinaryOp::Iff, lhs, rhs)
    }

    pub fn nor(lhs: Formula, rhs: Formula) -> Self {
        Self::binary(BinaryOp::Nor, lhs, rhs)
    }

    pub fn nand(lhs: Formula, rhs: Formula) -> Self {
        Self::binary(BinaryOp::Nand, lhs, rhs)
    }

    /// Parses a formula from its fully-parenthesized textual notation.
    ///
    /// See [`crate::parser`] for the grammar.
    pub fn parse(text: &str) -> Result<Self, Error> {
        crate::parser::parse(text)
    }
}

// Getters
impl Formula {
    pub fn node(&self) -> &Node {
        &self.0
    }

    /// Root symbol, or `None` for a variable leaf.
    pub fn root(&self) -> Option<Symbol> {
        match self.node() {
            Node::Var(_) => None,
            Node::Const(value) => Some(Symbol::Const(*value)),
            Node::Unary(op, _) => Some(Symbol::Unary(*op)),
            Node::Binary(op, _, _) => Some(Symbol::Binary(*op)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node(), Node::Var(_) | Node::Const(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self.node(), Node::Var(_))
    }

    pub fn is_constant(&self) -> bool {
        matches!(self.node(), Node::Const(_))
    }

    pub fn as_var(&self) -> Option<&Var> {
        match self.node() {
            Node::Var(var) => Some(var),
            _ => None,
        }
    }

    /// Operands of the root, left to right. Empty for leaves.
    pub fn operands(&self) -> Vec<&Formula> {
        match self.node() {
            Node::Var(_) | Node::Const(_) => vec![],
            Node::Unary(_, a) => vec![a],
            Node::Binary(_, a, b) => vec![a, b],
        }
    }

    /// The only operand of a unary node, or the left operand of a binary node.
    pub fn first(&self) -> Option<&Formula> {
        match self.node() {
            Node::Unary(_, a) | Node::Binary(_, a, _) => Some(a),
            _ => None,
        }
    }

    /// The right operand of a binary node.
    pub fn second(&self) -> Option<&Formula> {
        match self.node() {
            Node::Binary(_, _, b) => Some(b),
            _ => None,
        }
    }

    /// Checks whether both handles point to the very same node.
    pub fn ptr_eq(&self, other: &Formula) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Arc::as_ptr(&self.0) as usize
    }
}

// Structure
impl Formula {
    /// Rebuilds the root over new operands, keeping its own symbol.
    ///
    /// Leaves are returned as is (sharing the node).
    pub fn map_operands<F>(&self, mut f: F) -> Formula
    where
        F: FnMut(&Formula) -> Formula,
    {
        match self.node() {
            Node::Var(_) | Node::Const(_) => self.clone(),
            Node::Unary(op, a) => Formula::unary(*op, f(a)),
            Node::Binary(op, a, b) => {
                let a = f(a);
                let b = f(b);
                Formula::binary(*op, a, b)
            }
        }
    }

    /// All variables occurring in the formula.
    pub fn variables(&self) -> BTreeSet<Var> {
        let mut vars = BTreeSet::new();
        self.visit(&mut |f: &Formula| {
            if let Node::Var(var) = f.node() {
                vars.insert(var.clone());
            }
        });
        vars
    }

    /// All constants and operators occurring in the formula.
    pub fn operators(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        self.visit(&mut |f: &Formula| {
            if let Some(symbol) = f.root() {
                symbols.insert(symbol);
            }
        });
        symbols
    }

    /// Number of nodes in the tree (shared subtrees counted at each occurrence).
    pub fn size(&self) -> usize {
        1 + self.operands().into_iter().map(Formula::size).sum::<usize>()
    }

    /// Depth of the tree (0 for leaves).
    pub fn depth(&self) -> usize {
        match self.node() {
            Node::Var(_) | Node::Const(_) => 0,
            Node::Unary(_, a) => 1 + a.depth(),
            Node::Binary(_, a, b) => 1 + a.depth().max(b.depth()),
        }
    }

    /// Pre-order traversal.
    pub fn visit<F>(&self, f: &mut F)
    where
        F: FnMut(&Formula),
    {
        f(self);
        for operand in self.operands() {
            operand.visit(f);
        }
    }
}

impl From<Var> for Formula {
    fn from(var: Var) -> Self {
        Formula::from_var(var)
    }
}

impl From<bool> for Formula {
    fn from(value: bool) -> Self {
        Formula::constant(value)
    }
}

impl FromStr for Formula {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.node() {
            Node::Var(var) => write!(f, "{}", var),
            Node::Const(value) => write!(f, "{}", Symbol::Const(*value)),
            Node::Unary(op, a) => write!(f, "{}{}", op, a),
            Node::Binary(op, a, b) => write!(f, "({}{}{})", a, op, b),
        }
    }
}

impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Formula({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p() -> Formula {
        Formula::var("p")
    }

    fn q() -> Formula {
        Formula::var("q")
    }

    #[test]
    fn test_display() {
        let f = Formula::implies(Formula::not(p()), Formula::or(q(), Formula::ff()));
        assert_eq!(f.to_string(), "(~p->(q|F))");
        let g = Formula::not(Formula::not(Formula::nand(p(), Formula::tt())));
        assert_eq!(g.to_string(), "~~(p-&T)");
    }

    #[test]
    fn test_root_and_operands() {
        let f = Formula::xor(p(), Formula::not(q()));
        assert_eq!(f.root(), Some(Symbol::XOR));
        assert_eq!(f.operands().len(), 2);
        assert_eq!(f.first(), Some(&p()));
        assert_eq!(f.second().and_then(Formula::root), Some(Symbol::NOT));

        assert_eq!(p().root(), None);
        assert!(p().is_leaf());
        assert!(p().is_variable());
        assert_eq!(Formula::tt().root(), Some(Symbol::TRUE));
        assert!(Formula::tt().is_constant());
        assert!(Formula::tt().operands().is_empty());
        assert_eq!(Formula::not(p()).second(), None);
    }

    #[test]
    fn test_structural_equality() {
        let a = Formula::and(p(), q());
        let b = Formula::and(p(), q());
        let c = Formula::and(q(), p());
        assert_eq!(a, b);
        assert!(!a.ptr_eq(&b));
        assert_ne!(a, c);
    }

    #[test]
    fn test_variables_and_operators() {
        let f = Formula::iff(Formula::var("x1"), Formula::and(p(), Formula::not(Formula::var("x1"))));
        let vars: Vec<String> = f.variables().iter().map(|v| v.to_string()).collect();
        assert_eq!(vars, vec!["p", "x1"]);
        let ops: Vec<Symbol> = f.operators().into_iter().collect();
        assert_eq!(ops, vec![Symbol::NOT, Symbol::AND, Symbol::IFF]);

        let g = Formula::or(Formula::tt(), Formula::ff());
        assert!(g.variables().is_empty());
        assert!(g.operators().contains(&Symbol::TRUE));
        assert!(g.operators().contains(&Symbol::FALSE));
    }

    #[test]
    fn test_size_and_depth() {
        let f = Formula::and(Formula::not(p()), q());
        assert_eq!(f.size(), 4);
        assert_eq!(f.depth(), 2);
        assert_eq!(p().size(), 1);
        assert_eq!(p().depth(), 0);
    }

    #[test]
    fn test_map_operands_keeps_root() {
        let f = Formula::nor(p(), q());
        let g = f.map_operands(|x| Formula::not(x.clone()));
        assert_eq!(g.to_string(), "(~p-|~q)");
        let leaf = p();
        assert!(leaf.map_operands(|x| Formula::not(x.clone())).ptr_eq(&leaf));
    }
}
