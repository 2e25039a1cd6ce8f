//! Relex tables: bijective substitutions for the eight instructions.

use std::collections::HashMap;

use thiserror::Error;

use crate::instruction::{format_char_list, Instruction};

/// Name reported for the identity relex.
pub const STANDARD_NAME: &str = "[standard]";

/// Errors building or loading a relex
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash)]
pub enum RelexError {
    /// Not every instruction has a substitute. Missing instructions are
    /// listed in canonical order.
    #[error("Relex definition is inexhaustive, missing instruction(s): {}", format_char_list(.missing))]
    Inexhaustive { missing: Vec<Instruction> },
    /// Two instructions share a substitute token.
    #[error("Relex definition is ambiguous, '{token}' is used for both '{}' and '{}'", .first.to_char(), .second.to_char())]
    Ambiguous {
        token: String,
        first: Instruction,
        second: Instruction,
    },
    /// A line in a relex file could not be understood.
    #[error("Line {line}: {message}")]
    MalformedLine { line: usize, message: String },
}

/// A validated relex: every instruction maps to a distinct, non-empty token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelexTable {
    name: String,
    /// Indexed by `Instruction::slot`
    tokens: [String; 8],
    /// Reverse map, longest token first (this is the matching order of the
    /// lexer).
    by_length: Vec<(Vec<u8>, Instruction)>,
    standard: bool,
}

impl RelexTable {
    /// Validate a mapping and build a table from it.
    pub fn new(name: &str, mapping: HashMap<Instruction, String>) -> Result<Self, RelexError> {
        let missing: Vec<Instruction> = Instruction::ALL
            .into_iter()
            .filter(|i| !mapping.contains_key(i))
            .collect();
        if !missing.is_empty() {
            return Err(RelexError::Inexhaustive { missing });
        }

        // Walk in canonical order so the reported pair does not depend on
        // hash map iteration order.
        let mut seen: HashMap<&str, Instruction> = HashMap::new();
        for instr in Instruction::ALL {
            let token = mapping[&instr].as_str();
            if let Some(first) = seen.insert(token, instr) {
                return Err(RelexError::Ambiguous {
                    token: token.to_owned(),
                    first,
                    second: instr,
                });
            }
        }

        let mut tokens: [String; 8] = Default::default();
        for (instr, token) in mapping {
            tokens[instr.slot()] = token;
        }
        let table = Self::from_tokens(name, tokens, false);
        log::debug!("Built relex {:?}: {:?}", table.name, table.tokens);
        Ok(table)
    }

    /// The identity relex. Always valid, so it skips validation.
    pub fn standard() -> Self {
        let mut tokens: [String; 8] = Default::default();
        for instr in Instruction::ALL {
            tokens[instr.slot()] = instr.to_char().to_string();
        }
        Self::from_tokens(STANDARD_NAME, tokens, true)
    }

    fn from_tokens(name: &str, tokens: [String; 8], standard: bool) -> Self {
        let mut by_length: Vec<(Vec<u8>, Instruction)> = Instruction::ALL
            .into_iter()
            .map(|i| (tokens[i.slot()].as_bytes().to_vec(), i))
            .collect();
        // Stable sort, ties keep canonical order (ties cannot match the same
        // input anyway, tokens are distinct).
        by_length.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self {
            name: name.to_owned(),
            tokens,
            by_length,
            standard,
        }
    }

    /// Name of this relex, `[standard]` for the identity relex.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Is this the identity relex?
    pub fn is_standard(&self) -> bool {
        self.standard
    }

    /// Substitute token for an instruction.
    pub fn token(&self, instr: Instruction) -> &str {
        &self.tokens[instr.slot()]
    }

    /// Find the longest token that `source` starts with.
    pub(crate) fn longest_match(&self, source: &[u8]) -> Option<(Instruction, usize)> {
        self.by_length
            .iter()
            .find(|(tok, _)| !tok.is_empty() && source.starts_with(tok))
            .map(|(tok, instr)| (*instr, tok.len()))
    }
}

impl Default for RelexTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Parse a relex definition file.
///
/// Format: one `<canonical char> <substitute>` per line. Blank lines and
/// lines starting with `#` are ignored. The substitute is everything after
/// the first space, trimmed, and may itself contain spaces.
pub fn parse_relex(name: &str, text: &str) -> Result<RelexTable, RelexError> {
    let mut mapping: HashMap<Instruction, String> = HashMap::new();

    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (key, value) = line.split_once(' ').unwrap_or((line, ""));
        let value = value.trim();
        if value.is_empty() {
            return Err(RelexError::MalformedLine {
                line: line_no,
                message: format!("Missing relex value: '{line}'"),
            });
        }
        let mut key_chars = key.chars();
        let instr = match (key_chars.next(), key_chars.next()) {
            (Some(c), None) => Instruction::from_char(c),
            _ => None,
        };
        let Some(instr) = instr else {
            return Err(RelexError::MalformedLine {
                line: line_no,
                message: format!("Attempted to map to unknown instruction key: '{line}'"),
            });
        };
        if mapping.insert(instr, value.to_owned()).is_some() {
            return Err(RelexError::MalformedLine {
                line: line_no,
                message: format!("Instruction '{}' is defined more than once", instr.to_char()),
            });
        }
    }

    RelexTable::new(name, mapping)
}
