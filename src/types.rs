//! Fundamental data types used throughout brics

use std::{
    fmt::Display,
    num::Wrapping,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// Number of cells on the tape. Shared by the interpreter and the C backend.
pub const TAPE_SIZE: usize = 30_000;

/// Newtype for the tape pointer.
///
/// The tape is a ring: moving right from the last cell lands on cell 0 and
/// moving left from cell 0 lands on the last cell.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct TapeAddr(usize);

impl TapeAddr {
    pub fn new(val: usize) -> Self {
        Self(val)
    }

    /// One cell to the right, wrapping at `len`.
    pub fn right(self, len: usize) -> Self {
        Self((self.0 + 1) % len)
    }

    /// One cell to the left, wrapping at `len`.
    pub fn left(self, len: usize) -> Self {
        Self((self.0 + len - 1) % len)
    }
}

impl From<usize> for TapeAddr {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

impl From<TapeAddr> for usize {
    fn from(value: TapeAddr) -> Self {
        value.0
    }
}

impl Display for TapeAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A BF number (u8 with wrapping semantics).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct BfNum(Wrapping<u8>);

impl BfNum {
    pub fn is_zero(&self) -> bool {
        self.0 .0 == 0
    }
}

impl Add for BfNum {
    type Output = BfNum;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for BfNum {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for BfNum {
    type Output = BfNum;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for BfNum {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl From<i32> for BfNum {
    fn from(value: i32) -> Self {
        Self(Wrapping::<u8>(value.rem_euclid(256) as u8))
    }
}

impl From<u8> for BfNum {
    fn from(value: u8) -> Self {
        Self(Wrapping::<u8>(value))
    }
}

impl From<BfNum> for u8 {
    fn from(value: BfNum) -> Self {
        value.0 .0
    }
}

impl Display for BfNum {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
