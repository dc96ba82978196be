//! # basis-rs: Functionally complete operator bases, constructively
//!
//! **`basis-rs`** parses propositional formulas and rewrites them, purely
//! syntactically, into equivalent formulas over a restricted set of operators.
//! Each conversion is a constructive proof that its target basis is
//! functionally complete: {¬,∧,∨}, {¬,∧}, {NAND}, {→,¬} and {→,F}.
//!
//! ## Notation
//!
//! Formulas are written fully parenthesized:
//!
//! | Text | Meaning |
//! |------|---------|
//! | `p`, `q7` | variables |
//! | `T`, `F` | true, false |
//! | `~φ` | not |
//! | `(φ&ψ)`, `(φ\|ψ)` | and, or |
//! | `(φ->ψ)`, `(φ<->ψ)` | implies, iff |
//! | `(φ+ψ)` | xor |
//! | `(φ-&ψ)`, `(φ-\|ψ)` | nand, nor |
//!
//! ## Basic Usage
//!
//! ```rust
//! use basis_rs::formula::Formula;
//! use basis_rs::pipeline::{to_nand, to_not_and_or};
//! use basis_rs::semantics::is_equivalent;
//!
//! let f = Formula::parse("(p+q)").unwrap();
//!
//! let g = to_not_and_or(&f).unwrap();
//! assert_eq!(g.to_string(), "((p|q)&~(p&q))");
//!
//! let h = to_nand(&f).unwrap();
//! assert!(is_equivalent(&f, &h));
//! ```
//!
//! ## Core Components
//!
//! - **[`formula`]**: The immutable [`Formula`][crate::formula::Formula] tree. Subtrees are shared, never mutated.
//! - **[`substitution`]**: The template substitution engine: one bottom-up pass replacing operators by templates over `p` and `q`.
//! - **[`pipeline`]**: The five chained basis reductions.
//! - **[`semantics`]**: Truth tables and equivalence checking.
//! - **[`dot`]**: Utilities for visualizing formulas using Graphviz.

pub mod basis;
pub mod dot;
pub mod error;
pub mod formula;
pub mod operator;
pub mod parser;
pub mod pipeline;
pub mod semantics;
pub mod substitution;
pub mod types;
