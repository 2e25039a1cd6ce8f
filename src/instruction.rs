//! The eight Brainfuck instructions.

use std::fmt::Display;

use serde::Serialize;

/// A Brainfuck instruction.
///
/// The variant names double as the symbolic names used by the disassembler
/// (both the report and the JSON document).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum Instruction {
    /// `>`
    MoveRight,
    /// `<`
    MoveLeft,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `.`
    Output,
    /// `,`
    Input,
    /// `[`
    BeginLoop,
    /// `]`
    EndLoop,
}

impl Instruction {
    /// All instructions, ordered by their canonical character.
    pub const ALL: [Instruction; 8] = [
        Instruction::Add,
        Instruction::Input,
        Instruction::Subtract,
        Instruction::Output,
        Instruction::MoveLeft,
        Instruction::MoveRight,
        Instruction::BeginLoop,
        Instruction::EndLoop,
    ];

    /// Look up the instruction for a canonical Brainfuck character.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '>' => Some(Self::MoveRight),
            '<' => Some(Self::MoveLeft),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '.' => Some(Self::Output),
            ',' => Some(Self::Input),
            '[' => Some(Self::BeginLoop),
            ']' => Some(Self::EndLoop),
            _ => None,
        }
    }

    /// The canonical Brainfuck character.
    pub fn to_char(self) -> char {
        match self {
            Self::MoveRight => '>',
            Self::MoveLeft => '<',
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Output => '.',
            Self::Input => ',',
            Self::BeginLoop => '[',
            Self::EndLoop => ']',
        }
    }

    /// Symbolic name, as shown in disassembly.
    pub fn name(self) -> &'static str {
        match self {
            Self::MoveRight => "MoveRight",
            Self::MoveLeft => "MoveLeft",
            Self::Add => "Add",
            Self::Subtract => "Subtract",
            Self::Output => "Output",
            Self::Input => "Input",
            Self::BeginLoop => "BeginLoop",
            Self::EndLoop => "EndLoop",
        }
    }

    /// Position in a table indexed by instruction.
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Format a list of instructions as `'+', ',', ...` (canonical characters).
pub(crate) fn format_char_list(instrs: &[Instruction]) -> String {
    instrs
        .iter()
        .map(|i| format!("'{}'", i.to_char()))
        .collect::<Vec<_>>()
        .join(", ")
}
