//! Converts a formula into restricted operator bases.
//!
//! ```bash
//! cargo run --example convert -- "(p<->q)" --all --check
//! cargo run --example convert -- "(p+q)" --stage nand --dot > xor.dot
//! ```

use basis_rs::dot::to_dot;
use basis_rs::formula::Formula;
use basis_rs::pipeline::Stage;
use basis_rs::semantics::{is_equivalent, TruthTable};
use clap::Parser;
use color_eyre::eyre::eyre;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Formula in fully-parenthesized notation, e.g. "((p->q)&~r)"
    formula: String,

    /// Target stage: not-and-or, not-and, nand, implies-not, implies-false
    #[arg(short, long, default_value = "implies-false", conflicts_with = "all")]
    stage: Stage,

    /// Run every stage and print each result
    #[arg(long)]
    all: bool,

    /// Verify that every result has the same truth table as the input
    #[arg(long)]
    check: bool,

    /// Print the truth table of the input
    #[arg(long)]
    table: bool,

    /// Print the result as a Graphviz DOT graph instead of text
    #[arg(long)]
    dot: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: simplelog::LevelFilter,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Cli::parse();

    simplelog::TermLogger::init(
        args.log_level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let formula = Formula::parse(&args.formula)?;
    log::info!("input = {} (size {}, depth {})", formula, formula.size(), formula.depth());

    if args.table {
        print!("{}", TruthTable::new(&formula));
    }

    let stages: Vec<Stage> = if args.all {
        Stage::ALL.to_vec()
    } else {
        vec![args.stage]
    };

    for stage in stages {
        let result = stage.apply(&formula)?;
        log::info!("{} {}: size {}", stage, stage.target_basis(), result.size());

        if args.check && !is_equivalent(&formula, &result) {
            return Err(eyre!("{} changed the truth table: {}", stage, result));
        }

        if args.dot {
            print!("{}", to_dot(&result)?);
        } else {
            println!("{:>13} = {}", stage, result);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::error::ErrorKind;

    #[test]
    fn test_stage_and_all_conflict() {
        let err = Cli::try_parse_from(["convert", "(p+q)", "--stage", "nand", "--all"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_stage_defaults_to_implies_false() {
        let cli = Cli::try_parse_from(["convert", "(p+q)"]).unwrap();
        assert_eq!(cli.stage, Stage::ImpliesFalse);
        assert!(!cli.all);

        let cli = Cli::try_parse_from(["convert", "(p+q)", "--all"]).unwrap();
        assert!(cli.all);
    }
}
