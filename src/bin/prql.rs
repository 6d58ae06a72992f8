//! Thin command-line wrapper around the PRQL front end. Reads a query from
//! a file or stdin and prints its token stream, one token per line.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use prql::tokenizer::tokenize;

#[derive(Parser, Debug)]
#[command(name = "prql", about = "Tokenize a PRQL query", version)]
struct Args {
    /// Path to a PRQL source file; reads stdin when omitted.
    file: Option<PathBuf>,
}

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("failed to set tracing subscriber");
        return ExitCode::FAILURE;
    }

    let args = Args::parse();
    let source = match read_source(args.file.as_deref()) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    };

    for (index, token) in tokenize(&source).iter().enumerate() {
        println!("[{index}] {token}");
    }

    ExitCode::SUCCESS
}

fn read_source(file: Option<&std::path::Path>) -> io::Result<String> {
    match file {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}
