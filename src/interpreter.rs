use std::io::Read;
use std::io::Write;

use thiserror::Error;

use crate::instruction::Instruction;
use crate::program::Program;
use crate::settings::EofBehaviour;
use crate::tape::Tape;
use crate::TapeAddr;

/// Error type for execution
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// Io error during program execution.
    #[error("Unexpected IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// Aborted by callback
    #[error("Callback aborted execution")]
    Aborted,
}

impl PartialEq for ExecutionError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::IoError(l0), Self::IoError(r0)) => l0.kind() == r0.kind(),
            _ => core::mem::discriminant(self) == core::mem::discriminant(other),
        }
    }
}

/// Data sent to execution callback, before each instruction executes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecuteCallbackData {
    /// Program index of the instruction
    pub index: usize,
    pub instruction: Instruction,
}

/// Reply type for callback
pub enum ExecuteCallbackResult {
    /// Continue execution
    Continue,
    /// Abort execution
    Abort,
}

/// Fetch-execute interpreter.
///
/// Runs until the instruction pointer moves past the last instruction (or
/// input runs out under [`EofBehaviour::Halt`]).
pub fn execute<TapeT: Tape, F>(
    program: &Program,
    tape: &mut TapeT,
    tape_ptr: &mut TapeAddr,
    input: &mut impl Read,
    output: &mut impl Write,
    eof: EofBehaviour,
    callback: &mut F,
) -> Result<(), ExecutionError>
where
    F: FnMut(ExecuteCallbackData, &TapeT, &TapeAddr) -> ExecuteCallbackResult,
{
    let code = program.instructions();
    let loops = program.loops();
    let tape_len = tape.len();
    let mut ip = 0;

    while let Some(&instr) = code.get(ip) {
        let data = ExecuteCallbackData {
            index: ip,
            instruction: instr,
        };
        match callback(data, tape, tape_ptr) {
            ExecuteCallbackResult::Continue => (),
            ExecuteCallbackResult::Abort => return Err(ExecutionError::Aborted),
        }
        match instr {
            Instruction::MoveRight => *tape_ptr = tape_ptr.right(tape_len),
            Instruction::MoveLeft => *tape_ptr = tape_ptr.left(tape_len),
            Instruction::Add => tape.modify(*tape_ptr, 1.into()),
            Instruction::Subtract => tape.modify(*tape_ptr, 255.into()),
            Instruction::Output => {
                let tmp: [u8; 1] = [tape.get(*tape_ptr).into()];
                output.write_all(&tmp)?;
            }
            Instruction::Input => {
                let mut tmp: [u8; 1] = [0; 1];
                // We may need to flush output here if there wasn't a newline.
                output.flush()?;
                if input.read(&mut tmp)? == 0 {
                    match eof {
                        EofBehaviour::Zero => tape.set(*tape_ptr, 0.into()),
                        EofBehaviour::Unchanged => (),
                        EofBehaviour::Halt => break,
                    }
                } else {
                    tape.set(*tape_ptr, tmp[0].into());
                }
            }
            Instruction::BeginLoop => {
                if tape.get(*tape_ptr).is_zero() {
                    ip = jump_target(loops.partner(ip), ip);
                }
            }
            Instruction::EndLoop => {
                if !tape.get(*tape_ptr).is_zero() {
                    ip = jump_target(loops.partner(ip), ip);
                }
            }
        }
        ip += 1;
    }
    output.flush()?;
    Ok(())
}

/// Every loop instruction of a built program has a partner.
fn jump_target(partner: Option<usize>, ip: usize) -> usize {
    match partner {
        Some(target) => target,
        None => unreachable!("loop instruction {ip} has no partner"),
    }
}
