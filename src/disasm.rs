//! Disassembly of a program into a report or a JSON document.

use std::fmt::Display;

use serde::Serialize;

use crate::instruction::Instruction;
use crate::program::{Program, ProgramInfo};

/// One instruction in the disassembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InstructionEntry {
    pub index: usize,
    pub instruction: Instruction,
}

/// One matched loop in the disassembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoopEntry {
    pub left: usize,
    pub right: usize,
}

/// Disassembled program.
///
/// `Display` renders the human readable report, `Serialize` the structured
/// document. Both are views over the same data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Disassembly {
    pub filename: String,
    pub optimised: bool,
    pub relex: String,
    pub instruction: Vec<InstructionEntry>,
    pub loop_indices: Vec<LoopEntry>,
}

/// Disassemble a program.
pub fn disassemble(program: &Program, info: &ProgramInfo) -> Disassembly {
    Disassembly {
        filename: info.filename.clone(),
        optimised: info.optimised,
        relex: info.relex.clone(),
        instruction: program
            .instructions()
            .iter()
            .enumerate()
            .map(|(index, &instruction)| InstructionEntry { index, instruction })
            .collect(),
        loop_indices: program
            .loops()
            .pairs()
            .map(|(left, right)| LoopEntry { left, right })
            .collect(),
    }
}

impl Disassembly {
    /// Render as a pretty printed JSON document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Number of decimal digits needed for `n`.
fn digits(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}

impl Display for Disassembly {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "== Disassembly for {} ==", self.filename)?;
        writeln!(f)?;
        writeln!(f, "Optimised:  {}", self.optimised)?;
        writeln!(f, "Relex:      {}", self.relex)?;
        writeln!(f)?;

        writeln!(f, "Instructions:")?;
        let width = digits(self.instruction.len());
        let mut depth = 0usize;
        for entry in &self.instruction {
            if entry.instruction == Instruction::EndLoop {
                depth = depth.saturating_sub(1);
            }
            writeln!(
                f,
                "    {:>width$}  {}{}",
                entry.index,
                "  ".repeat(depth),
                entry.instruction
            )?;
            if entry.instruction == Instruction::BeginLoop {
                depth += 1;
            }
        }

        writeln!(f)?;
        writeln!(f, "Loop Indices:")?;
        if self.loop_indices.is_empty() {
            writeln!(f, "    (none)")?;
        } else {
            let lwidth = digits(self.loop_indices.iter().map(|e| e.left).max().unwrap_or(0));
            for entry in &self.loop_indices {
                writeln!(f, "    {:>lwidth$} ⋄ {}", entry.left, entry.right)?;
            }
        }
        Ok(())
    }
}
