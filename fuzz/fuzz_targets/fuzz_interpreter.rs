#![no_main]

use brics::settings::EofBehaviour;
use brics::test_utils::test_execute;
use brics::{build_program, generate_c, ExecutionError, ProgramInfo};
use brics_fuzz::FuzzInputProgram;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzInputProgram| {
    let Ok(program) = build_program(data.code) else {
        return;
    };
    let mut input = data.input;

    let exec = test_execute(&program, &mut input, EofBehaviour::Zero, 500);
    match exec.result {
        Some(Ok(_)) | None => (),
        Some(Err(err)) => match err {
            ExecutionError::IoError(_) => (),
            ExecutionError::Aborted => (),
        },
    }

    // Lowering is total for any valid program
    let info = ProgramInfo {
        filename: "fuzz.b".to_owned(),
        optimised: false,
        relex: "[standard]".to_owned(),
    };
    let c = generate_c(&program, &info, EofBehaviour::Zero);
    assert_eq!(c.matches("while").count(), program.loops().len());
});
