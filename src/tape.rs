//! Implementations of the BF tape

use crate::{types::TAPE_SIZE, BfNum, TapeAddr};

/// A trait implementing a tape for the BF program memory
pub trait Tape {
    /// Number of cells. Pointer movement wraps at this length.
    fn len(&self) -> usize;
    fn get(&self, addr: TapeAddr) -> BfNum;
    fn set(&mut self, addr: TapeAddr, value: BfNum);
    fn modify(&mut self, addr: TapeAddr, diff: BfNum);

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fixed size, zero initialised tape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingTape {
    data: Box<[BfNum]>,
}

impl RingTape {
    pub fn new() -> Self {
        Self {
            data: vec![BfNum::default(); TAPE_SIZE].into_boxed_slice(),
        }
    }

    /// Contents of the tape, for inspection.
    pub fn cells(&self) -> &[BfNum] {
        &self.data
    }
}

impl Default for RingTape {
    fn default() -> Self {
        Self::new()
    }
}

impl Tape for RingTape {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn get(&self, addr: TapeAddr) -> BfNum {
        self.data[usize::from(addr) % self.data.len()]
    }

    fn set(&mut self, addr: TapeAddr, value: BfNum) {
        let len = self.data.len();
        self.data[usize::from(addr) % len] = value;
    }

    fn modify(&mut self, addr: TapeAddr, diff: BfNum) {
        let len = self.data.len();
        self.data[usize::from(addr) % len] += diff;
    }
}
