#![no_main]

use std::collections::HashMap;

use brics::{tokenize, Instruction, RelexError, RelexTable};
use brics_fuzz::FuzzInputRelex;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: FuzzInputRelex| {
    let mapping: HashMap<Instruction, String> =
        Instruction::ALL.into_iter().zip(data.tokens).collect();
    let table = match RelexTable::new("fuzz", mapping) {
        Ok(table) => table,
        Err(RelexError::Ambiguous { .. }) => return,
        Err(err) => panic!("unexpected error {err:?}"),
    };
    // Round trips are only guaranteed when no token is a prefix of another
    // and none is empty.
    let tokens: Vec<&str> = Instruction::ALL.iter().map(|i| table.token(*i)).collect();
    let prefix_free = tokens.iter().all(|a| {
        !a.is_empty() && tokens.iter().all(|b| a == b || !b.starts_with(a))
    });
    if !prefix_free {
        return;
    }
    let text: Vec<&str> = data.code.iter().map(|i| table.token(*i)).collect();
    assert_eq!(tokenize(text.concat().as_bytes(), &table), data.code);
});
