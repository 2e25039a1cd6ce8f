use crate::{instruction::Instruction, parser::Lexeme, settings::OptimisationPass};

/// Run optimisation passes over a token stream.
pub fn optimize(mut tokens: Vec<Instruction>, passes: &[OptimisationPass]) -> Vec<Instruction> {
    for pass in passes {
        let before = tokens.len();
        match pass {
            OptimisationPass::StripCommentHeader => {
                let start = comment_header_len(&tokens);
                tokens.drain(..start);
            }
        }
        log::debug!("{pass:?}: {} -> {} instructions", before, tokens.len());
    }
    tokens
}

/// Drop everything that is not an instruction. Always applied, as part of
/// tokenizing.
pub(crate) fn eliminate_noops(lexemes: impl Iterator<Item = Lexeme>) -> Vec<Instruction> {
    lexemes
        .filter_map(|l| match l {
            Lexeme::Instr(instr) => Some(instr),
            Lexeme::NoOp(_) => None,
        })
        .collect()
}

/// Length of the comment header at the start of `tokens`.
///
/// The header is the longest run of complete loops at the very start of the
/// program. The first cell is zero when the program starts, so these loops
/// can never execute. An unmatched leading `[` ends the header; the program
/// builder reports it.
fn comment_header_len(tokens: &[Instruction]) -> usize {
    let mut start = 0;
    while let Some(Instruction::BeginLoop) = tokens.get(start) {
        match matching_end(&tokens[start..]) {
            Some(end) => start += end + 1,
            None => break,
        }
    }
    start
}

/// Index of the `]` closing the `[` at index 0.
fn matching_end(tokens: &[Instruction]) -> Option<usize> {
    let mut depth = 0usize;
    for (idx, instr) in tokens.iter().enumerate() {
        match instr {
            Instruction::BeginLoop => depth += 1,
            Instruction::EndLoop => {
                depth -= 1;
                if depth == 0 {
                    return Some(idx);
                }
            }
            _ => (),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::{comment_header_len, optimize};
    use crate::relex::RelexTable;
    use crate::settings::{get_default_optimisations, OptimisationPass};
    use crate::tokenize;

    fn strip(src: &[u8]) -> Vec<u8> {
        let tokens = tokenize(src, &RelexTable::standard());
        optimize(tokens, &[OptimisationPass::StripCommentHeader])
            .into_iter()
            .map(|i| i.to_char() as u8)
            .collect()
    }

    #[test]
    fn test_strip_comment_header() {
        assert_eq!(strip(b"[This is a comment.]+."), b"+.");
        assert_eq!(strip(b"[a [nested] comment][another one]+[-]."), b"+[-].");
        assert_eq!(strip(b"+[comment? no, a loop]"), b"+[,]");
        assert_eq!(strip(b"[only a header]"), b"");
        assert_eq!(strip(b""), b"");
    }

    #[test]
    fn test_unmatched_header_is_kept() {
        assert_eq!(strip(b"[[]+"), b"[[]+");
        assert_eq!(strip(b"[]]+"), b"]+");
    }

    #[test]
    fn test_no_passes() {
        let tokens = tokenize(b"[-]+", &RelexTable::standard());
        assert_eq!(optimize(tokens.clone(), &[]), tokens);
        assert_eq!(optimize(tokens, &get_default_optimisations()).len(), 1);
    }

    #[test]
    fn test_header_len() {
        let tokens = tokenize(b"[][[]]>", &RelexTable::standard());
        assert_eq!(comment_header_len(&tokens), 6);
    }
}
