//! Compiled C and the interpreter must produce identical output.
//!
//! Needs a C compiler (`cc`, or `$CC`). The test is skipped when none can be
//! started.

use std::{
    collections::VecDeque,
    env,
    error::Error,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use brics::{
    generate_c, parse_source,
    settings::EofBehaviour,
    test_utils::{test_execute, STEP_LIMIT},
    ProgramInfo, RelexTable,
};

fn regression(name: &str) -> PathBuf {
    let mut path: PathBuf = env::var("CARGO_MANIFEST_DIR").unwrap().into();
    path.push("tests");
    path.push("regressions");
    path.push(name);
    path
}

/// Compile `c_src` and run it on `input`. `None` if no C compiler is available.
fn compile_and_run(
    c_src: &str,
    name: &str,
    input: &[u8],
) -> Result<Option<Vec<u8>>, Box<dyn Error>> {
    let dir = env::temp_dir().join(format!("brics-compile-diff-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let c_file = dir.join(format!("{name}.c"));
    let binary = dir.join(name);
    std::fs::write(&c_file, c_src)?;

    let cc = env::var("CC").unwrap_or_else(|_| "cc".to_owned());
    let status = match Command::new(cc)
        .arg("-std=c99")
        .arg("-o")
        .arg(&binary)
        .arg(&c_file)
        .status()
    {
        Ok(status) => status,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(err.into()),
    };
    assert!(status.success(), "C compiler failed on {}", c_file.display());

    Ok(Some(run_binary(&binary, input)?))
}

fn run_binary(binary: &Path, input: &[u8]) -> Result<Vec<u8>, Box<dyn Error>> {
    let mut child = Command::new(binary)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(input)?;
    }
    let output = child.wait_with_output()?;
    assert!(output.status.success());
    Ok(output.stdout)
}

fn check(name: &str, input: &[u8], eof: EofBehaviour) {
    let src = std::fs::read(regression(&format!("{name}.b"))).unwrap();
    let program = parse_source(&src, &RelexTable::standard()).unwrap();
    let info = ProgramInfo {
        filename: format!("{name}.b"),
        optimised: false,
        relex: RelexTable::standard().name().to_owned(),
    };

    let mut interp_input: VecDeque<u8> = input.iter().copied().collect();
    let exec = test_execute(&program, &mut interp_input, eof, STEP_LIMIT);
    assert_eq!(exec.result, Some(Ok(())));

    let c_src = generate_c(&program, &info, eof);
    // Tests run in parallel, keep build artifacts apart.
    let artifact = format!("{name}-{eof:?}");
    match compile_and_run(&c_src, &artifact, input).unwrap() {
        Some(compiled) => assert_eq!(compiled, exec.output, "{name}"),
        None => eprintln!("No C compiler found, skipping {name}"),
    }
}

#[test]
fn test_hello_world() {
    check("hello", b"", EofBehaviour::Zero);
}

#[test]
fn test_multi_loop_io() {
    check("add_four", b"Hello, compiler!", EofBehaviour::Zero);
}

#[test]
fn test_halt_on_eof() {
    check("add_four", b"xyz", EofBehaviour::Halt);
}

#[test]
fn test_wrapping() {
    check("wrap", b"", EofBehaviour::Unchanged);
}
