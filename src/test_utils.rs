use crate::{
    program::Program, settings::EofBehaviour, tape::RingTape, ExecuteCallbackResult,
    ExecutionError, TapeAddr,
};

/// Maximum number of instructions `test_execute` runs before aborting.
pub const STEP_LIMIT: usize = 10_000_000;

#[derive(Debug, PartialEq)]
pub struct ExecutionState {
    pub result: Option<Result<(), ExecutionError>>,
    pub tape: RingTape,
    pub tape_ptr: TapeAddr,
    pub output: Vec<u8>,
}

impl Default for ExecutionState {
    fn default() -> Self {
        Self {
            result: None,
            tape: Default::default(),
            tape_ptr: Default::default(),
            output: Default::default(),
        }
    }
}

/// Run a program with a step limit, capturing output.
pub fn test_execute(
    program: &Program,
    input: &mut impl std::io::Read,
    eof: EofBehaviour,
    step_limit: usize,
) -> ExecutionState {
    let mut instr_count = 0;
    let mut exec = ExecutionState::default();
    exec.result = Some(crate::execute(
        program,
        &mut exec.tape,
        &mut exec.tape_ptr,
        input,
        &mut exec.output,
        eof,
        &mut |_, _, _| {
            instr_count += 1;
            if instr_count > step_limit {
                ExecuteCallbackResult::Abort
            } else {
                ExecuteCallbackResult::Continue
            }
        },
    ));

    exec
}
