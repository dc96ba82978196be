//! Formula to DOT (Graphviz) conversion.
//!
//! Renders the syntax tree of a formula top-down:
//! - **Variables** and **constants** are leaves at the bottom (sink rank)
//! - **Operators** are labelled with their symbol
//! - **Edges** go from an operator to its operands; the left operand of a
//!   binary node is drawn with a solid edge, the right one dashed
//!
//! With [`DotConfig::share_nodes`] enabled (default), a subtree shared between
//! several parents (the same node in memory, as produced by template
//! instantiation) is drawn once, so the output is a DAG.
//!
//! # Examples
//!
//! ```
//! use basis_rs::dot::to_dot;
//! use basis_rs::formula::Formula;
//!
//! let f = Formula::parse("((p-&q)-&(p-&q))").unwrap();
//! let dot = to_dot(&f).unwrap();
//! assert!(dot.starts_with("digraph {"));
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;

use crate::formula::{Formula, Node};

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for operator nodes (default: "circle")
    pub operator_shape: &'static str,
    /// Shape for variable leaves (default: "plaintext")
    pub variable_shape: &'static str,
    /// Shape for constant leaves (default: "square")
    pub constant_shape: &'static str,
    /// Style for edges to the first operand (default: "solid")
    pub left_edge_style: &'static str,
    /// Style for edges to the second operand (default: "dashed")
    pub right_edge_style: &'static str,
    /// Whether to draw physically shared subtrees once (default: true)
    pub share_nodes: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            operator_shape: "circle",
            variable_shape: "plaintext",
            constant_shape: "square",
            left_edge_style: "solid",
            right_edge_style: "dashed",
            share_nodes: true,
        }
    }
}

/// Converts a formula to DOT format with the default configuration.
pub fn to_dot(formula: &Formula) -> Result<String, std::fmt::Error> {
    to_dot_with_config(formula, &DotConfig::default())
}

/// Converts a formula to DOT format with custom configuration.
pub fn to_dot_with_config(formula: &Formula, config: &DotConfig) -> Result<String, std::fmt::Error> {
    let mut writer = DotWriter {
        config,
        out: String::new(),
        ids: HashMap::new(),
        leaves: Vec::new(),
        next_id: 0,
    };
    writeln!(writer.out, "digraph {{")?;
    writeln!(writer.out, "node [shape={}];", config.operator_shape)?;
    writer.write_node(formula)?;

    // Leaves at the bottom
    writeln!(writer.out, "{{ rank=sink; {} }}", writer.leaves.join("; "))?;
    writeln!(writer.out, "}}")?;
    Ok(writer.out)
}

struct DotWriter<'a> {
    config: &'a DotConfig,
    out: String,
    /// Node address -> DOT id, for shared subtrees.
    ids: HashMap<usize, usize>,
    leaves: Vec<String>,
    next_id: usize,
}

impl DotWriter<'_> {
    /// Emits `formula` and its descendants, returning its DOT id.
    fn write_node(&mut self, formula: &Formula) -> Result<usize, std::fmt::Error> {
        if self.config.share_nodes {
            if let Some(&id) = self.ids.get(&formula.addr()) {
                return Ok(id);
            }
        }
        let id = self.next_id;
        self.next_id += 1;
        if self.config.share_nodes {
            self.ids.insert(formula.addr(), id);
        }

        match formula.node() {
            Node::Var(var) => {
                writeln!(self.out, "n{} [shape={}, label=\"{}\"];", id, self.config.variable_shape, var)?;
                self.leaves.push(format!("n{}", id));
            }
            Node::Const(_) => {
                writeln!(self.out, "n{} [shape={}, label=\"{}\"];", id, self.config.constant_shape, formula)?;
                self.leaves.push(format!("n{}", id));
            }
            Node::Unary(op, a) => {
                writeln!(self.out, "n{} [label=\"{}\"];", id, op)?;
                let a = self.write_node(a)?;
                writeln!(self.out, "n{} -> n{} [style={}];", id, a, self.config.left_edge_style)?;
            }
            Node::Binary(op, a, b) => {
                writeln!(self.out, "n{} [label=\"{}\"];", id, op)?;
                let a = self.write_node(a)?;
                let b = self.write_node(b)?;
                writeln!(self.out, "n{} -> n{} [style={}];", id, a, self.config.left_edge_style)?;
                writeln!(self.out, "n{} -> n{} [style={}];", id, b, self.config.right_edge_style)?;
            }
        }
        Ok(id)
    }
}
