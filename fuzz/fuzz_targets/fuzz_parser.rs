#![no_main]

use libfuzzer_sys::fuzz_target;

use brics::{parse_source, ParseError, RelexTable};

fn check_loop_balance(data: &[u8]) -> Option<ParseError> {
    let brackets = data
        .iter()
        .filter(|v| matches!(v, b'[' | b']'))
        .enumerate();
    let mut open = vec![];
    for (index, b) in brackets {
        if *b == b'[' {
            open.push(index);
        } else if open.pop().is_none() {
            return Some(ParseError::UnmatchedClose { index });
        }
    }
    open.first().map(|&index| ParseError::UnmatchedOpen { index })
}

/// Indices in `check_loop_balance` count brackets only, map a parse error
/// onto the same numbering.
fn bracket_index(data: &[u8], err: ParseError) -> ParseError {
    let instrs: Vec<u8> = data
        .iter()
        .copied()
        .filter(|c| b"<>+-.,[]".contains(c))
        .collect();
    let index = instrs[..err.index()]
        .iter()
        .filter(|c| matches!(c, b'[' | b']'))
        .count();
    match err {
        ParseError::UnmatchedOpen { .. } => ParseError::UnmatchedOpen { index },
        ParseError::UnmatchedClose { .. } => ParseError::UnmatchedClose { index },
    }
}

fuzz_target!(|data: &[u8]| {
    match parse_source(data, &RelexTable::standard()) {
        Ok(program) => {
            assert_eq!(check_loop_balance(data), None);
            for (left, right) in program.loops().pairs() {
                assert!(left < right);
                assert_eq!(program.loops().partner(right), Some(left));
            }
        }
        Err(e) => {
            assert_eq!(check_loop_balance(data), Some(bracket_index(data, e)));
        }
    }
});
