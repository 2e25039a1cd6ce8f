//! Code generation

use std::iter::repeat;

use crate::{
    instruction::Instruction,
    program::{Program, ProgramInfo},
    settings::EofBehaviour,
    types::TAPE_SIZE,
};

/// Generate C code
///
/// Loops map directly onto `while` loops, so the result has the same shape
/// as the source program. Pointer movement wraps around the tape and end of
/// input follows `eof`, matching the interpreter.
pub fn generate_c(program: &Program, info: &ProgramInfo, eof: EofBehaviour) -> String {
    let mut s: String = "/*\n * Code auto-generated with brics.\n".into();
    s += format!(" *   Source file: {}\n", comment_safe(&info.filename)).as_str();
    s += format!(" *   Optimised:   {}\n", info.optimised).as_str();
    s += format!(" *   Relex:       {}\n", comment_safe(&info.relex)).as_str();
    s += " */\n";
    s += "#include <stdint.h>\n#include <stdio.h>\n\n";
    s += format!("#define TAPE_SIZE {TAPE_SIZE}\n\n").as_str();
    s += "static uint8_t tape[TAPE_SIZE] = { 0 };\nstatic size_t ptr = 0;\n\n";
    s += "int main(void) {\n";

    let mut depth = 1;
    for (idx, instr) in program.instructions().iter().enumerate() {
        if *instr == Instruction::EndLoop {
            depth -= 1;
        }
        if matches!(instr, Instruction::BeginLoop | Instruction::EndLoop) {
            debug_assert!(program.loops().partner(idx).is_some());
        }
        s += indent(depth).as_str();
        s += c_statement(*instr, eof);
        s += "\n";
        if *instr == Instruction::BeginLoop {
            depth += 1;
        }
    }

    s += "  return 0;\n}\n";
    s
}

/// C statement for a single instruction.
fn c_statement(instr: Instruction, eof: EofBehaviour) -> &'static str {
    match instr {
        Instruction::MoveRight => "ptr = (ptr + 1) % TAPE_SIZE;",
        Instruction::MoveLeft => "ptr = (ptr + TAPE_SIZE - 1) % TAPE_SIZE;",
        Instruction::Add => "tape[ptr]++;",
        Instruction::Subtract => "tape[ptr]--;",
        Instruction::Output => "putchar(tape[ptr]);",
        Instruction::Input => match eof {
            EofBehaviour::Zero => {
                "{ fflush(stdout); int c = getchar(); tape[ptr] = c == EOF ? 0 : (uint8_t)c; }"
            }
            EofBehaviour::Unchanged => {
                "{ fflush(stdout); int c = getchar(); if (c != EOF) tape[ptr] = (uint8_t)c; }"
            }
            EofBehaviour::Halt => {
                "{ fflush(stdout); int c = getchar(); if (c == EOF) return 0; tape[ptr] = (uint8_t)c; }"
            }
        },
        Instruction::BeginLoop => "while (tape[ptr]) {",
        Instruction::EndLoop => "}",
    }
}

/// Make text safe to embed in a C block comment.
fn comment_safe(text: &str) -> String {
    text.replace("*/", "*\\/")
}

/// Compute the indentation string for a given indentation level.
fn indent(i: usize) -> String {
    String::from_iter(repeat("  ").take(i))
}

#[cfg(test)]
mod tests {
    use super::{comment_safe, generate_c, indent};
    use crate::parse_source;
    use crate::program::ProgramInfo;
    use crate::relex::RelexTable;
    use crate::settings::EofBehaviour;

    fn info() -> ProgramInfo {
        ProgramInfo {
            filename: "loop.b".to_owned(),
            optimised: true,
            relex: "[standard]".to_owned(),
        }
    }

    #[test]
    fn test_indent() {
        assert_eq!(indent(2), "    ");
        assert_eq!(indent(0), "");
    }

    #[test]
    fn test_comment_safe() {
        assert_eq!(comment_safe("evil*/name.b"), "evil*\\/name.b");
        assert_eq!(comment_safe("plain.b"), "plain.b");
    }

    #[test]
    fn test_generate_c() {
        let program = parse_source(b"+[->+<].", &RelexTable::standard()).unwrap();
        let c = generate_c(&program, &info(), EofBehaviour::Zero);
        assert!(c.starts_with("/*\n * Code auto-generated with brics.\n"));
        assert!(c.contains(" *   Source file: loop.b\n"));
        assert!(c.contains(" *   Optimised:   true\n"));
        assert!(c.contains("#define TAPE_SIZE 30000\n"));
        let body = "\
int main(void) {
  tape[ptr]++;
  while (tape[ptr]) {
    tape[ptr]--;
    ptr = (ptr + 1) % TAPE_SIZE;
    tape[ptr]++;
    ptr = (ptr + TAPE_SIZE - 1) % TAPE_SIZE;
  }
  putchar(tape[ptr]);
  return 0;
}
";
        assert!(c.ends_with(body), "{c}");
    }

    #[test]
    fn test_generate_c_input() {
        let program = parse_source(b",", &RelexTable::standard()).unwrap();
        let zero = generate_c(&program, &info(), EofBehaviour::Zero);
        assert!(zero.contains("tape[ptr] = c == EOF ? 0 : (uint8_t)c;"));
        let unchanged = generate_c(&program, &info(), EofBehaviour::Unchanged);
        assert!(unchanged.contains("if (c != EOF) tape[ptr] = (uint8_t)c;"));
        let halt = generate_c(&program, &info(), EofBehaviour::Halt);
        assert!(halt.contains("if (c == EOF) return 0;"));
    }

    #[test]
    fn test_braces_balance() {
        let program = parse_source(b"[[]][[[-]]]>[<]", &RelexTable::standard()).unwrap();
        let c = generate_c(&program, &info(), EofBehaviour::Zero);
        assert_eq!(c.matches('{').count(), c.matches('}').count());
    }
}
