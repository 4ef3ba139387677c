use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use sparse_coo::{Operation, OutputFormat, ParseOptions, Session, SessionConfig, Validation};

#[derive(Parser)]
#[command(author, version, long_about = None)]
#[command(about = "Add, subtract or multiply two sparse matrix files")]
struct Cli {
    /// First operand (rows=/cols= text format)
    matrix_a: PathBuf,

    /// Second operand (rows=/cols= text format)
    matrix_b: PathBuf,

    /// Existing directory receiving result files
    result_dir: PathBuf,

    /// Run one operation instead of the interactive menu
    #[arg(long, value_enum)]
    op: Option<OpArg>,

    /// Reject out-of-bounds and duplicate entries
    #[arg(long)]
    strict: bool,

    /// Keep zero-valued entry lines instead of dropping them
    #[arg(long)]
    keep_zeros: bool,

    /// Do not re-sort operands into row-major order
    #[arg(long)]
    no_sort: bool,

    /// Write results as JSON
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum OpArg {
    Add,
    Sub,
    Mul,
}

impl From<OpArg> for Operation {
    fn from(op: OpArg) -> Self {
        match op {
            OpArg::Add => Operation::Addition,
            OpArg::Sub => Operation::Subtraction,
            OpArg::Mul => Operation::Multiplication,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let validation = if cli.strict {
        Validation::Strict
    } else {
        Validation::Permissive
    };
    let parse_options = ParseOptions::default()
        .with_validation(validation)
        .with_skip_zero_values(!cli.keep_zeros);
    let output_format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let config = SessionConfig::new(&cli.result_dir)
        .with_sort_inputs(!cli.no_sort)
        .with_parse_options(parse_options)
        .with_output_format(output_format);

    config.check_result_dir().context("Invalid result directory")?;
    let session = Session::load(&cli.matrix_a, &cli.matrix_b, config).context("Error loading matrices")?;

    match cli.op {
        Some(op) => {
            let op = Operation::from(op);
            let path = session.run(op).with_context(|| format!("{op} failed"))?;
            println!("The {op} result is saved in {}", path.display());
        }
        None => {
            let stdin = io::stdin();
            session
                .run_interactive(stdin.lock(), io::stdout())
                .context("interactive session failed")?;
        }
    }

    Ok(())
}
