//! Truth-table semantics.
//!
//! Exhaustive evaluation over all assignments of a formula's variables. This
//! is what the rewriting pipeline is checked against: every conversion must
//! keep the truth table unchanged.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::{Error, Result};
use crate::formula::{Formula, Node};
use crate::types::Var;

/// An assignment of truth values to variables.
pub type Model = BTreeMap<Var, bool>;

/// Evaluates `formula` in `model`.
///
/// Fails with [`Error::InvalidVariable`] if the formula mentions a variable
/// the model does not assign.
pub fn evaluate(formula: &Formula, model: &Model) -> Result<bool> {
    match formula.node() {
        Node::Var(var) => model
            .get(var)
            .copied()
            .ok_or_else(|| Error::InvalidVariable(var.to_string())),
        Node::Const(value) => Ok(*value),
        Node::Unary(op, a) => Ok(op.apply(evaluate(a, model)?)),
        Node::Binary(op, a, b) => Ok(op.apply(evaluate(a, model)?, evaluate(b, model)?)),
    }
}

/// All models over `vars`, all-false first, the first variable being the
/// most significant.
///
/// # Panics
///
/// Panics if there are more than 63 variables.
pub fn all_models(vars: &[Var]) -> impl Iterator<Item = Model> + '_ {
    let n = vars.len();
    assert!(n < 64, "Too many variables for a truth table: {}", n);
    (0..1u64 << n).map(move |row| {
        vars.iter()
            .enumerate()
            .map(|(i, var)| (var.clone(), (row >> (n - 1 - i)) & 1 == 1))
            .collect()
    })
}

/// Values of `formula` in every model over `vars`, in [`all_models`] order.
pub fn truth_values(formula: &Formula, vars: &[Var]) -> Result<Vec<bool>> {
    all_models(vars).map(|model| evaluate(formula, &model)).collect()
}

/// Checks that `lhs` and `rhs` agree on every assignment of their variables.
pub fn is_equivalent(lhs: &Formula, rhs: &Formula) -> bool {
    let vars: Vec<Var> = lhs.variables().union(&rhs.variables()).cloned().collect();
    let equivalent = all_models(&vars).all(|model| evaluate(lhs, &model) == evaluate(rhs, &model));
    equivalent
}

pub fn is_tautology(formula: &Formula) -> bool {
    TruthTable::new(formula).values.iter().all(|&v| v)
}

pub fn is_contradiction(formula: &Formula) -> bool {
    TruthTable::new(formula).values.iter().all(|&v| !v)
}

pub fn is_satisfiable(formula: &Formula) -> bool {
    !is_contradiction(formula)
}

/// Truth table of a formula over its own (sorted) variables.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TruthTable {
    pub formula: Formula,
    pub vars: Vec<Var>,
    pub values: Vec<bool>,
}

impl TruthTable {
    pub fn new(formula: &Formula) -> Self {
        let vars: Vec<Var> = formula.variables().into_iter().collect();
        let values = all_models(&vars)
            .map(|model| evaluate(formula, &model).unwrap_or_else(|e| unreachable!("{}", e)))
            .collect();
        Self {
            formula: formula.clone(),
            vars,
            values,
        }
    }

    /// Models in which the formula is true.
    pub fn models(&self) -> Vec<Model> {
        all_models(&self.vars)
            .zip(&self.values)
            .filter(|(_, &value)| value)
            .map(|(model, _)| model)
            .collect()
    }

    pub fn variables(&self) -> BTreeSet<Var> {
        self.vars.iter().cloned().collect()
    }
}

impl fmt::Display for TruthTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formula = self.formula.to_string();
        let headers: Vec<&str> = self.vars.iter().map(Var::name).chain([formula.as_str()]).collect();

        write!(f, "|")?;
        for header in &headers {
            write!(f, " {} |", header)?;
        }
        writeln!(f)?;
        write!(f, "|")?;
        for header in &headers {
            write!(f, "{}|", "-".repeat(header.len() + 2))?;
        }
        writeln!(f)?;

        for (model, value) in all_models(&self.vars).zip(&self.values) {
            write!(f, "|")?;
            let cells = model.values().copied().chain([*value]);
            for (header, cell) in headers.iter().zip(cells) {
                let cell = if cell { "T" } else { "F" };
                write!(f, " {:<width$} |", cell, width = header.len())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
