use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use thiserror::Error;

use brics::{
    build_program, disassemble, execute, generate_c, optimize, parse_relex,
    settings::{get_default_optimisations, EofBehaviour},
    tape::RingTape,
    tokenize, ExecuteCallbackResult, ExecutionError, ParseError, ProgramInfo, RelexError,
    RelexTable, TapeAddr,
};
use clap::{Parser, Subcommand};

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Cannot parse relex file {}: {source}", .path.display())]
    RelexError { path: PathBuf, source: RelexError },
    #[error("Cannot parse program file {}: {source}", .path.display())]
    ParserError { path: PathBuf, source: ParseError },
    #[error("Execution error: {0}")]
    ExecutionError(#[from] ExecutionError),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Subcommand)]
enum Command {
    /// Execute the program
    Run,
    /// Output the program in human readable form
    Disassemble {
        /// Output disassembly as a JSON object
        #[arg(short, long, default_value_t = false)]
        json: bool,
    },
    /// Compile the program to C
    Compile,
}

/// A Brainfuck interpreter, disassembler and transpiler.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input Brainfuck source file
    input_file: PathBuf,

    #[command(subcommand)]
    command: Command,

    /// A .brelex file with relex definitions (default: standard Brainfuck)
    #[arg(short = 'x', long, value_name = "FILE")]
    relex: Option<PathBuf>,

    /// Strip comment headers before continuing
    #[arg(short, long, default_value_t = false)]
    optimise: bool,

    /// What `,` does at end of input
    #[arg(long, value_enum, default_value_t = EofBehaviour::Zero)]
    eof: EofBehaviour,

    /// Log every executed instruction (very verbose)
    #[arg(long, default_value_t = false)]
    trace: bool,

    /// Enable debug output for the pipeline
    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn load_relex(path: &Path) -> Result<RelexTable, ProgramError> {
    let text = std::fs::read_to_string(path)?;
    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    parse_relex(&name, &text).map_err(|source| ProgramError::RelexError {
        path: path.to_owned(),
        source,
    })
}

fn main() -> Result<(), ProgramError> {
    let args = Args::parse();

    let default_level = match (args.trace, args.debug) {
        (true, _) => "trace",
        (false, true) => "debug",
        (false, false) => "warn",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let relex = match args.relex {
        Some(ref path) => load_relex(path)?,
        None => RelexTable::standard(),
    };

    let buf = std::fs::read(&args.input_file)?;
    let mut tokens = tokenize(&buf, &relex);
    if args.optimise {
        tokens = optimize(tokens, get_default_optimisations().as_slice());
    }
    let program = build_program(tokens).map_err(|source| ProgramError::ParserError {
        path: args.input_file.clone(),
        source,
    })?;

    let info = ProgramInfo {
        filename: args.input_file.display().to_string(),
        optimised: args.optimise,
        relex: relex.name().to_owned(),
    };

    let trace = args.trace;
    match args.command {
        Command::Run => {
            let mut tape = RingTape::new();
            let mut tape_ptr = TapeAddr::default();
            execute(
                &program,
                &mut tape,
                &mut tape_ptr,
                &mut io::stdin().lock(),
                &mut io::stdout().lock(),
                args.eof,
                &mut |data, _, tp| {
                    if trace {
                        log::trace!("{:>6} {:<10} ptr={}", data.index, data.instruction, tp);
                    }
                    ExecuteCallbackResult::Continue
                },
            )?;
        }
        Command::Disassemble { json } => {
            let report = disassemble(&program, &info);
            let mut out = io::stdout().lock();
            if json {
                writeln!(out, "{}", report.to_json()?)?;
            } else {
                write!(out, "{report}")?;
            }
        }
        Command::Compile => {
            print!("{}", generate_c(&program, &info, args.eof));
        }
    }

    Ok(())
}
