use std::fs::read_to_string;

use anyhow::{Context, Result};
use clap::{Args, Parser as ClapParser};
use itertools::Itertools;
use thiserror::Error;

use parser::Parser;
use symbols::SymbolTable;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = "Runs the petitc front end")]
struct CLI {
    /// Path to source file
    path: String,

    #[command(flatten)]
    output_options: OutputOptions,
}

/// What to print beyond the tree itself
#[derive(Args, Debug)]
#[group(required = false, multiple = true)]
struct OutputOptions {
    /// Also print the symbol table, sorted by name
    #[arg(long)]
    symbols: bool,
}

pub fn main() -> Result<()> {
    let args = CLI::parse();

    run_driver(&args.path, &args.output_options)
}

fn run_driver(path: &str, options: &OutputOptions) -> Result<()> {
    let source =
        read_to_string(path).with_context(|| format!("unable to read source file: {}", path))?;

    let mut parser = Parser::new(&source);

    let program = match parser.parse() {
        Ok(program) => program,
        Err(err) => {
            eprintln!("error: {}", err);
            eprintln!("unparsed input:{}", parser.remainder());
            return Err(CompileErr::Parser(path.to_string()).into());
        }
    };

    println!("{}", program);

    if options.symbols {
        print_symbols(parser.symbols());
    }

    // the grammar reads a single function, anything after it is ignored
    if !parser.remainder().trim().is_empty() {
        eprintln!("warning: trailing input after the first function is ignored");
    }

    Ok(())
}

fn print_symbols(table: &SymbolTable) {
    println!("symbols:");

    for symbol in table.symbols.values().sorted_by_key(|s| s.var.name.clone()) {
        println!("    {} ({:?})", symbol.var, symbol.kind);
    }
}

#[derive(Error, Debug)]
enum CompileErr {
    #[error("could not parse {0}")]
    Parser(String),
}
