//! Basis-reduction pipeline.
//!
//! Five conversions, each narrowing the operator set by one substitution pass
//! over the output of the previous one:
//!
//! ```text
//! full --to_not_and_or--> {~,&,|} --to_not_and--> {~,&} --to_nand--> {-&}
//!      --to_implies_not--> {->,~} --to_implies_false--> {->,F}
//! ```
//!
//! Every stage's templates are written in the stage's target basis and its
//! input is already in the previous stage's basis, so a single bottom-up pass
//! lands inside the target basis. All conversions preserve the truth table of
//! their input.
//!
//! The `to_*` functions always run the whole chain up to their stage, so a
//! formula that is already in some basis still goes through every earlier
//! stage:
//!
//! ```
//! use basis_rs::formula::Formula;
//! use basis_rs::pipeline::{to_implies_false, Stage};
//!
//! let f = Formula::parse("~p").unwrap();
//! // ~p --nand--> (p-&p) --implies-not--> (p->~p) --implies-false--> (p->(p->F))
//! assert_eq!(to_implies_false(&f).unwrap().to_string(), "(p->(p->F))");
//!
//! // A single pass of the last stage alone:
//! let g = Stage::ImpliesFalse.rewrite().unwrap().apply(&f).unwrap();
//! assert_eq!(g.to_string(), "(p->F)");
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;

use crate::basis::Basis;
use crate::error::Result;
use crate::formula::Formula;
use crate::substitution::{Rewrite, Templates};

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Stage {
    NotAndOr,
    NotAnd,
    Nand,
    ImpliesNot,
    ImpliesFalse,
}

impl Stage {
    pub const ALL: [Stage; 5] = [
        Stage::NotAndOr,
        Stage::NotAnd,
        Stage::Nand,
        Stage::ImpliesNot,
        Stage::ImpliesFalse,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Stage::NotAndOr => "not-and-or",
            Stage::NotAnd => "not-and",
            Stage::Nand => "nand",
            Stage::ImpliesNot => "implies-not",
            Stage::ImpliesFalse => "implies-false",
        }
    }

    /// The stage whose output this stage consumes.
    pub const fn previous(self) -> Option<Stage> {
        match self {
            Stage::NotAndOr => None,
            Stage::NotAnd => Some(Stage::NotAndOr),
            Stage::Nand => Some(Stage::NotAnd),
            Stage::ImpliesNot => Some(Stage::Nand),
            Stage::ImpliesFalse => Some(Stage::ImpliesNot),
        }
    }

    /// Symbols allowed in this stage's output.
    pub fn target_basis(self) -> Basis {
        match self {
            Stage::NotAndOr => Basis::not_and_or(),
            Stage::NotAnd => Basis::not_and(),
            Stage::Nand => Basis::nand(),
            Stage::ImpliesNot => Basis::implies_not(),
            Stage::ImpliesFalse => Basis::implies_false(),
        }
    }

    /// Symbols this stage's substitution pass accepts.
    pub fn source_basis(self) -> Basis {
        match self.previous() {
            Some(previous) => previous.target_basis(),
            None => Basis::full(),
        }
    }

    /// Templates of this stage's substitution pass, written over `p` and `q`.
    pub fn templates(self) -> Result<Templates> {
        let pairs: &[(&str, &str)] = match self {
            Stage::NotAndOr => &[
                ("+", "((p|q)&~(p&q))"),
                ("->", "(~p|q)"),
                ("<->", "((p&q)|(~p&~q))"),
                ("-|", "~(p|q)"),
                ("-&", "~(p&q)"),
                ("T", "(p|~p)"),
                ("F", "(p&~p)"),
            ],
            Stage::NotAnd => &[("|", "~(~p&~q)")],
            Stage::Nand => &[("~", "(p-&p)"), ("&", "((p-&q)-&(p-&q))")],
            Stage::ImpliesNot => &[("-&", "(p->~q)")],
            Stage::ImpliesFalse => &[("~", "(p->F)")],
        };
        Templates::parse(pairs)
    }

    /// The checked substitution pass of this stage alone.
    pub fn rewrite(self) -> Result<Rewrite> {
        let templates = self.templates()?;
        let keep = self.target_basis();
        Ok(Rewrite::new(templates, keep))
    }

    /// Converts `formula` into this stage's target basis, running all
    /// previous stages first.
    pub fn apply(self, formula: &Formula) -> Result<Formula> {
        let input = match self.previous() {
            Some(previous) => previous.apply(formula)?,
            None => formula.clone(),
        };
        let output = self.rewrite()?.apply(&input)?;
        debug!(
            "{}: size {} -> {}, depth {} -> {}",
            self,
            input.size(),
            output.size(),
            input.depth(),
            output.depth()
        );
        Ok(output)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Stage::ALL
            .into_iter()
            .find(|stage| stage.name() == s)
            .ok_or_else(|| format!("Unknown stage '{}'", s))
    }
}

/// Converts to an equivalent formula over `{~, &, |}` only.
pub fn to_not_and_or(formula: &Formula) -> Result<Formula> {
    Stage::NotAndOr.apply(formula)
}

/// Converts to an equivalent formula over `{~, &}` only.
pub fn to_not_and(formula: &Formula) -> Result<Formula> {
    Stage::NotAnd.apply(formula)
}

/// Converts to an equivalent formula over `{-&}` (NAND) only.
pub fn to_nand(formula: &Formula) -> Result<Formula> {
    Stage::Nand.apply(formula)
}

/// Converts to an equivalent formula over `{->, ~}` only.
pub fn to_implies_not(formula: &Formula) -> Result<Formula> {
    Stage::ImpliesNot.apply(formula)
}

/// Converts to an equivalent formula over `{->, F}` only.
pub fn to_implies_false(formula: &Formula) -> Result<Formula> {
    Stage::ImpliesFalse.apply(formula)
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::error::Error;
    use crate::semantics::is_equivalent;

    fn parse(text: &str) -> Formula {
        Formula::parse(text).unwrap()
    }

    #[test]
    fn test_to_not_and_or_xor() {
        let f = to_not_and_or(&parse("(p+q)")).unwrap();
        assert_eq!(f, parse("((p|q)&~(p&q))"));
    }

    #[test]
    fn test_to_not_and_or_constants() {
        let f = to_not_and_or(&parse("(T->F)")).unwrap();
        assert_eq!(f.to_string(), "(~(p|~p)|(p&~p))");
    }

    #[test]
    fn test_to_not_and() {
        let f = to_not_and(&parse("(p|q)")).unwrap();
        assert_eq!(f, parse("~(~p&~q)"));
    }

    #[test]
    fn test_to_nand() {
        assert_eq!(to_nand(&parse("~p")).unwrap(), parse("(p-&p)"));
        assert_eq!(to_nand(&parse("(p&q)")).unwrap(), parse("((p-&q)-&(p-&q))"));
    }

    #[test]
    fn test_to_implies_not() {
        let f = to_implies_not(&parse("(p-&q)")).unwrap();
        assert_eq!(f.to_string(), "(((p->~q)->~(p->~q))->~((p->~q)->~(p->~q)))");
    }

    #[test]
    fn test_to_implies_false() {
        let f = to_implies_false(&parse("~p")).unwrap();
        assert_eq!(f, parse("(p->(p->F))"));
    }

    #[test]
    fn test_single_pass_of_each_stage() {
        let cases = [
            (Stage::NotAndOr, "(p+q)", "((p|q)&~(p&q))"),
            (Stage::NotAnd, "(p|q)", "~(~p&~q)"),
            (Stage::Nand, "~p", "(p-&p)"),
            (Stage::ImpliesNot, "(p-&q)", "(p->~q)"),
            (Stage::ImpliesFalse, "~p", "(p->F)"),
        ];
        for (stage, input, expected) in cases {
            let output = stage.rewrite().unwrap().apply(&parse(input)).unwrap();
            assert_eq!(output, parse(expected), "{}", stage);
        }
    }

    #[test]
    fn test_iff_through_every_stage() {
        let f = parse("(p<->q)");
        for stage in Stage::ALL {
            let g = stage.apply(&f).unwrap();
            assert!(stage.target_basis().admits(&g), "{}: {}", stage, g);
            assert!(is_equivalent(&f, &g), "{}: {}", stage, g);
        }
    }

    #[test]
    fn test_templates_written_in_target_basis() {
        for stage in Stage::ALL {
            let templates = stage.templates().unwrap();
            assert!(!templates.is_empty());
            for (symbol, template) in templates.iter() {
                assert!(stage.source_basis().contains(symbol));
                assert!(!stage.target_basis().contains(symbol));
                assert!(
                    stage.target_basis().admits(template),
                    "{}: template of '{}' is {}",
                    stage,
                    symbol,
                    template
                );
            }
        }
    }

    #[test]
    fn test_single_stage_rewrite_rejects_foreign_operator() {
        let rewrite = Stage::NotAnd.rewrite().unwrap();
        let err = rewrite.apply(&parse("(p->q)")).unwrap_err();
        assert_eq!(err, Error::UnsupportedOperator("->".to_string()));
    }

    #[test]
    fn test_stage_names() {
        for stage in Stage::ALL {
            assert_eq!(stage.to_string().parse::<Stage>(), Ok(stage));
        }
        assert!("cnf".parse::<Stage>().is_err());
    }
}
