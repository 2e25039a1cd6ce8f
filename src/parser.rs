use thiserror::Error;

use crate::instruction::Instruction;
use crate::optimizers::eliminate_noops;
use crate::program::{LoopTable, Program};
use crate::relex::RelexTable;

/// Lexemes in a source file
#[derive(Debug, PartialEq, Clone, Copy)]
pub(crate) enum Lexeme {
    /// A recognised instruction token
    Instr(Instruction),
    /// A byte that does not start any token
    NoOp(u8),
}

/// Splits source code into lexemes using the given relex.
pub(crate) fn lexer<'a>(
    source_code: &'a [u8],
    table: &'a RelexTable,
) -> Box<dyn Iterator<Item = Lexeme> + 'a> {
    if table.is_standard() {
        return Box::new(source_code.iter().map(|c| {
            match Instruction::from_char(*c as char) {
                Some(instr) => Lexeme::Instr(instr),
                None => Lexeme::NoOp(*c),
            }
        }));
    }
    let mut pos = 0;
    Box::new(std::iter::from_fn(move || {
        let rest = source_code.get(pos..).filter(|r| !r.is_empty())?;
        match table.longest_match(rest) {
            Some((instr, len)) => {
                pos += len;
                Some(Lexeme::Instr(instr))
            }
            None => {
                pos += 1;
                Some(Lexeme::NoOp(rest[0]))
            }
        }
    }))
}

/// Convert source code to a stream of instructions. Text that does not form
/// a token of `table` is discarded.
pub fn tokenize(source_code: &[u8], table: &RelexTable) -> Vec<Instruction> {
    let tokens = eliminate_noops(lexer(source_code, table));
    log::debug!(
        "Tokenized {} bytes into {} instructions using relex {}",
        source_code.len(),
        tokens.len(),
        table.name()
    );
    tokens
}

/// Errors during parsing
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParseError {
    /// A `[` without a matching `]`.
    #[error("Unmatched [ instruction at index {index}")]
    UnmatchedOpen { index: usize },
    /// A `]` without a matching `[`.
    #[error("Unmatched ] instruction at index {index}")]
    UnmatchedClose { index: usize },
}

impl ParseError {
    /// Instruction index of the offending bracket.
    pub fn index(&self) -> usize {
        match self {
            ParseError::UnmatchedOpen { index } | ParseError::UnmatchedClose { index } => *index,
        }
    }
}

/// Validate loops and compute the loop index table.
pub fn build_program(tokens: Vec<Instruction>) -> Result<Program, ParseError> {
    // Indices of currently open loops.
    let mut open: Vec<usize> = vec![];
    let mut loops = LoopTable::with_len(tokens.len());

    for (idx, instr) in tokens.iter().enumerate() {
        match instr {
            Instruction::BeginLoop => open.push(idx),
            Instruction::EndLoop => match open.pop() {
                Some(left) => loops.insert(left, idx),
                None => return Err(ParseError::UnmatchedClose { index: idx }),
            },
            _ => (),
        }
    }
    if let Some(&index) = open.first() {
        return Err(ParseError::UnmatchedOpen { index });
    }
    log::debug!(
        "Built program with {} instructions and {} loops",
        tokens.len(),
        loops.len()
    );
    Ok(Program {
        instructions: tokens,
        loops,
    })
}

/// Parse source code into a program
pub fn parse_source(source_code: &[u8], table: &RelexTable) -> Result<Program, ParseError> {
    build_program(tokenize(source_code, table))
}
