//! Template substitution engine.
//!
//! Two rewriting primitives over formula trees:
//!
//! - [`substitute_variables`] replaces variable leaves by formulas.
//! - [`substitute_operators`] replaces every node labelled by a mapped
//!   [`Symbol`] with an instantiation of that symbol's template, binding the
//!   placeholders `p` and `q` to the node's (already rewritten) operands.
//!
//! Operator substitution is a single bottom-up pass: operands are rewritten
//! first, then the node itself. A spliced-in template body is *not* scanned
//! again, so templates must already be written in the target basis.
//!
//! ```
//! use basis_rs::formula::Formula;
//! use basis_rs::operator::Symbol;
//! use basis_rs::substitution::{substitute_operators, Templates};
//!
//! let mut templates = Templates::new();
//! templates.insert(Symbol::IMPLIES, Formula::parse("(~p|q)").unwrap());
//!
//! let f = Formula::parse("((x->y)->z)").unwrap();
//! let g = substitute_operators(&f, &templates);
//! assert_eq!(g.to_string(), "(~(~x|y)|z)");
//! ```

use std::collections::{BTreeSet, HashMap};

use log::{debug, trace};

use crate::basis::Basis;
use crate::error::{Error, Result};
use crate::formula::{Formula, Node};
use crate::operator::Symbol;
use crate::types::Var;

/// Replaces every listed variable leaf by its formula.
///
/// Unlisted variables, constants and operators are kept. Replacement formulas
/// are shared, not copied, and are not themselves substituted into.
pub fn substitute_variables(formula: &Formula, substitution: &HashMap<Var, Formula>) -> Formula {
    match formula.node() {
        Node::Var(var) => match substitution.get(var) {
            Some(replacement) => replacement.clone(),
            None => formula.clone(),
        },
        _ => formula.map_operands(|operand| substitute_variables(operand, substitution)),
    }
}

/// Symbol-to-template mapping.
///
/// A template for a binary symbol is a formula over the placeholders `p` and
/// `q`; for the unary symbol only `p` is bound; a constant's template is used
/// verbatim.
#[derive(Debug, Clone, Default)]
pub struct Templates {
    map: HashMap<Symbol, Formula>,
}

impl Templates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds templates from `(symbol, template)` text pairs.
    ///
    /// Fails with [`Error::UnsupportedOperator`] on unknown symbol text, with
    /// [`Error::Syntax`] on malformed template text and with
    /// [`Error::DuplicateTemplate`] if a symbol is listed twice.
    pub fn parse(pairs: &[(&str, &str)]) -> Result<Self> {
        let mut templates = Self::new();
        for &(symbol, template) in pairs {
            let symbol: Symbol = symbol.parse()?;
            if templates.insert(symbol, Formula::parse(template)?).is_some() {
                return Err(Error::DuplicateTemplate(symbol.to_string()));
            }
        }
        Ok(templates)
    }

    /// Inserts a template, returning the previous one for this symbol, if any.
    pub fn insert(&mut self, symbol: Symbol, template: Formula) -> Option<Formula> {
        self.map.insert(symbol, template)
    }

    pub fn get(&self, symbol: Symbol) -> Option<&Formula> {
        self.map.get(&symbol)
    }

    pub fn contains(&self, symbol: Symbol) -> bool {
        self.map.contains_key(&symbol)
    }

    /// Mapped symbols, in a stable order.
    pub fn symbols(&self) -> BTreeSet<Symbol> {
        self.map.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Formula)> {
        self.map.iter().map(|(&symbol, template)| (symbol, template))
    }

    /// Instantiates the template of `symbol` with `p` and `q` bound to `operands`.
    fn instantiate(&self, symbol: Symbol, operands: &[Formula]) -> Option<Formula> {
        let template = self.get(symbol)?;
        if operands.is_empty() {
            return Some(template.clone());
        }
        let mut bindings = HashMap::with_capacity(operands.len());
        for (placeholder, operand) in [Var::p(), Var::q()].into_iter().zip(operands) {
            bindings.insert(placeholder, operand.clone());
        }
        Some(substitute_variables(template, &bindings))
    }
}

impl FromIterator<(Symbol, Formula)> for Templates {
    fn from_iter<I: IntoIterator<Item = (Symbol, Formula)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

/// Performs one bottom-up template substitution pass.
///
/// Every node whose symbol is a key of `templates` is replaced by the
/// template instantiated over the node's rewritten operands. Nodes with
/// unmapped symbols are rebuilt over their rewritten operands. Variables are
/// returned as is.
pub fn substitute_operators(formula: &Formula, templates: &Templates) -> Formula {
    trace!("substitute_operators({})", formula);
    let Some(symbol) = formula.root() else {
        return formula.clone();
    };
    let operands: Vec<Formula> = formula
        .operands()
        .into_iter()
        .map(|operand| substitute_operators(operand, templates))
        .collect();
    match templates.instantiate(symbol, &operands) {
        Some(result) => {
            debug!("substitute: '{}' node rewritten into {}", symbol, result);
            result
        }
        None => rebuild(formula, operands),
    }
}

fn rebuild(formula: &Formula, operands: Vec<Formula>) -> Formula {
    let mut operands = operands.into_iter();
    formula.map_operands(|old| operands.next().unwrap_or_else(|| old.clone()))
}

/// A substitution pass with total coverage.
///
/// Every symbol met in the input must either have a template or belong to
/// `keep`; anything else fails with [`Error::UnsupportedOperator`] instead of
/// silently passing through.
#[derive(Debug, Clone)]
pub struct Rewrite {
    pub templates: Templates,
    pub keep: Basis,
}

impl Rewrite {
    pub fn new(templates: Templates, keep: Basis) -> Self {
        Self { templates, keep }
    }

    /// Symbols this rewrite accepts in its input.
    pub fn domain(&self) -> Basis {
        self.keep.union(&self.templates.symbols().into_iter().collect())
    }

    pub fn apply(&self, formula: &Formula) -> Result<Formula> {
        self.check(formula)?;
        Ok(substitute_operators(formula, &self.templates))
    }

    fn check(&self, formula: &Formula) -> Result<()> {
        let domain = self.domain();
        match formula.operators().into_iter().find(|symbol| !domain.contains(*symbol)) {
            Some(symbol) => Err(Error::UnsupportedOperator(symbol.to_string())),
            None => Ok(()),
        }
    }
}
