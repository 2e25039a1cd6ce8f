//! Relexed programs, loaded from the relex definitions in tests/relexes.

use std::{collections::VecDeque, env, path::PathBuf};

use brics::{
    disassemble, parse_relex, parse_source,
    settings::EofBehaviour,
    test_utils::{test_execute, STEP_LIMIT},
    tokenize, Instruction, ProgramInfo, RelexError, RelexTable,
};

fn test_file(dir: &str, name: &str) -> PathBuf {
    let mut path: PathBuf = env::var("CARGO_MANIFEST_DIR").unwrap().into();
    path.push("tests");
    path.push(dir);
    path.push(name);
    path
}

fn load_relex(name: &str) -> Result<RelexTable, RelexError> {
    let text = std::fs::read_to_string(test_file("relexes", &format!("{name}.brelex"))).unwrap();
    parse_relex(name, &text)
}

/// Rewrite a standard program in the given relex.
fn translate(src: &[u8], table: &RelexTable, sep: &str) -> String {
    tokenize(src, &RelexTable::standard())
        .into_iter()
        .map(|i| table.token(i))
        .collect::<Vec<_>>()
        .join(sep)
}

#[test]
fn test_ook_hello_world() {
    let ook = load_relex("ook").unwrap();
    assert_eq!(ook.name(), "ook");

    let hello = std::fs::read(test_file("regressions", "hello.b")).unwrap();
    let ook_src = translate(&hello, &ook, "\n");
    let program = parse_source(ook_src.as_bytes(), &ook).unwrap();
    assert_eq!(program, parse_source(&hello, &RelexTable::standard()).unwrap());

    let mut input = VecDeque::<u8>::new();
    let exec = test_execute(&program, &mut input, EofBehaviour::Zero, STEP_LIMIT);
    assert_eq!(exec.result, Some(Ok(())));
    assert_eq!(exec.output, b"Hello World!\n");
}

#[test]
fn test_ook_disassembly_names_relex() {
    let ook = load_relex("ook").unwrap();
    let program = parse_source(b"Ook. Ook. Ook! Ook? Ook! Ook! Ook? Ook!", &ook).unwrap();
    assert_eq!(
        program.instructions(),
        &[
            Instruction::Add,
            Instruction::BeginLoop,
            Instruction::Subtract,
            Instruction::EndLoop
        ]
    );
    let info = ProgramInfo {
        filename: "count.ook".to_owned(),
        optimised: false,
        relex: ook.name().to_owned(),
    };
    let report = disassemble(&program, &info);
    assert_eq!(report.relex, "ook");
    assert!(report.to_string().contains("Relex:      ook\n"));
}

#[test]
fn test_half_relex() {
    let err = load_relex("half").unwrap_err();
    assert_eq!(
        err,
        RelexError::Inexhaustive {
            missing: vec![
                Instruction::Input,
                Instruction::Subtract,
                Instruction::MoveRight,
                Instruction::EndLoop
            ]
        }
    );
    assert!(err.to_string().ends_with("',', '-', '>', ']'"));
}

#[test]
fn test_bad_key() {
    assert!(matches!(
        load_relex("bad_key"),
        Err(RelexError::MalformedLine { line: 2, .. })
    ));
}
