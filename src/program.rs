//! The validated program representation shared by all back ends.

use crate::instruction::Instruction;

/// Matching loop indices.
///
/// Stored as a side table next to the instruction stream: for every loop
/// instruction the index of its partner, `None` for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoopTable {
    partner: Vec<Option<usize>>,
}

impl LoopTable {
    pub(crate) fn with_len(len: usize) -> Self {
        Self {
            partner: vec![None; len],
        }
    }

    pub(crate) fn insert(&mut self, left: usize, right: usize) {
        self.partner[left] = Some(right);
        self.partner[right] = Some(left);
    }

    /// Index of the matching bracket for the loop instruction at `idx`.
    pub fn partner(&self, idx: usize) -> Option<usize> {
        self.partner.get(idx).copied().flatten()
    }

    /// Matched `(left, right)` pairs, ordered by left index.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.partner
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| match p {
                Some(right) if *right > idx => Some((idx, *right)),
                _ => None,
            })
    }

    /// Number of loops.
    pub fn len(&self) -> usize {
        self.pairs().count()
    }

    pub fn is_empty(&self) -> bool {
        self.partner.iter().all(Option::is_none)
    }
}

/// A parsed program with balanced loops. Built by
/// [`build_program`](crate::build_program), immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub(crate) instructions: Vec<Instruction>,
    pub(crate) loops: LoopTable,
}

impl Program {
    /// The instruction stream. Indices are program indices.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// The loop index table.
    pub fn loops(&self) -> &LoopTable {
        &self.loops
    }

    pub fn len(&self) -> usize {
        self.instructions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Where a program came from. Used for headers in disassembly and
/// generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramInfo {
    pub filename: String,
    pub optimised: bool,
    pub relex: String,
}

#[cfg(test)]
mod tests {
    use super::LoopTable;

    #[test]
    fn test_loop_table() {
        let mut table = LoopTable::with_len(6);
        assert!(table.is_empty());
        table.insert(3, 4);
        table.insert(0, 5);
        assert_eq!(table.pairs().collect::<Vec<_>>(), vec![(0, 5), (3, 4)]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.partner(5), Some(0));
        assert_eq!(table.partner(3), Some(4));
        assert_eq!(table.partner(1), None);
        assert_eq!(table.partner(100), None);
    }
}
