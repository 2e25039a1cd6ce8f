//! Fuzzing helper types

use std::collections::VecDeque;

use brics::Instruction;

#[derive(Debug, arbitrary::Arbitrary)]
pub struct FuzzInputProgram {
    pub code: Vec<Instruction>,
    pub input: VecDeque<u8>,
}

#[derive(Debug, arbitrary::Arbitrary)]
pub struct FuzzInputRelex {
    /// Substitute tokens, in canonical instruction order
    pub tokens: [String; 8],
    pub code: Vec<Instruction>,
}
