//! Four-state logic domain and the IEEE 1364-2005 truth tables.
//!
//! Everything downstream (packed storage, the operator library) resolves
//! individual bit combinations exclusively through the tables in this module,
//! so their contents *are* the semantics of the engine. The positive tables
//! are transcribed from the standard; every inverse table (`NAND`, `NOR`,
//! `XNOR`, `CASE_NEQ`) is derived from its positive counterpart through
//! [`NOT`] at compile time, so the pairs cannot drift apart.

use LogicValue::{HighZ, One, Unknown, Zero};

/// One four-state bit: `0`, `1`, `x` (indeterminate) or `z` (undriven).
///
/// The discriminants double as truth-table indices and as the 2-bit packed
/// encoding used by [`crate::BitVector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum LogicValue {
    Zero = 0,
    One = 1,
    Unknown = 2,
    HighZ = 3,
}

impl LogicValue {
    /// Decodes a 2-bit packed encoding. Values above 3 are a storage-layer
    /// contract violation and must not reach this function.
    pub(crate) const fn from_encoding(bits: u8) -> Self {
        match bits & 0b11 {
            0 => Zero,
            1 => One,
            2 => Unknown,
            _ => HighZ,
        }
    }

    /// The character used for this state in bitstrings and literals.
    pub const fn to_char(self) -> char {
        match self {
            Zero => '0',
            One => '1',
            Unknown => 'x',
            HighZ => 'z',
        }
    }

    /// Parses one bitstring character, case-insensitively.
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '0' => Some(Zero),
            '1' => Some(One),
            'x' | 'X' => Some(Unknown),
            'z' | 'Z' => Some(HighZ),
            _ => None,
        }
    }

    /// `true` for the two don't-care states `x` and `z`.
    ///
    /// Both encodings have the high bit of their 2-bit pattern set, which is
    /// what the word-at-a-time scan in the packed storage relies on.
    pub const fn is_unknown(self) -> bool {
        (self as u8) & 0b10 != 0
    }
}

pub type UnaryTable = [LogicValue; 4];
pub type BinaryTable = [[LogicValue; 4]; 4];
/// Indexed by carry-in first, then the two operand bits.
pub type TernaryTable = [BinaryTable; 4];

/// Looks up a 1-input table.
pub const fn eval1(lut: &UnaryTable, a: LogicValue) -> LogicValue {
    lut[a as usize]
}

/// Looks up a 2-input table.
pub const fn eval2(lut: &BinaryTable, a: LogicValue, b: LogicValue) -> LogicValue {
    lut[a as usize][b as usize]
}

/// Looks up a 3-input table: `lut[c][a][b]`.
pub const fn eval3(lut: &TernaryTable, c: LogicValue, a: LogicValue, b: LogicValue) -> LogicValue {
    lut[c as usize][a as usize][b as usize]
}

const fn invert_unary(lut: UnaryTable) -> UnaryTable {
    let mut out = [Zero; 4];
    let mut i = 0;
    while i < 4 {
        out[i] = eval1(&NOT, lut[i]);
        i += 1;
    }
    out
}

const fn invert_binary(lut: BinaryTable) -> BinaryTable {
    let mut out = [[Zero; 4]; 4];
    let mut i = 0;
    while i < 4 {
        out[i] = invert_unary(lut[i]);
        i += 1;
    }
    out
}

// ─────────────────────────────────────────────────────────
//  1-input tables
// ─────────────────────────────────────────────────────────

pub const BUF: UnaryTable = [Zero, One, Unknown, Unknown];
pub const NOT: UnaryTable = [One, Zero, Unknown, Unknown];

// ─────────────────────────────────────────────────────────
//  2-input tables, row = a, column = b
// ─────────────────────────────────────────────────────────

pub const AND: BinaryTable = [
    [Zero, Zero, Zero, Zero],
    [Zero, One, Unknown, Unknown],
    [Zero, Unknown, Unknown, Unknown],
    [Zero, Unknown, Unknown, Unknown],
];
pub const NAND: BinaryTable = invert_binary(AND);

pub const OR: BinaryTable = [
    [Zero, One, Unknown, Unknown],
    [One, One, One, One],
    [Unknown, One, Unknown, Unknown],
    [Unknown, One, Unknown, Unknown],
];
pub const NOR: BinaryTable = invert_binary(OR);

pub const XOR: BinaryTable = [
    [Zero, One, Unknown, Unknown],
    [One, Zero, Unknown, Unknown],
    [Unknown, Unknown, Unknown, Unknown],
    [Unknown, Unknown, Unknown, Unknown],
];
pub const XNOR: BinaryTable = invert_binary(XOR);

/// Case equality compares `x` and `z` literally instead of degrading.
pub const CASE_EQ: BinaryTable = [
    [One, Zero, Zero, Zero],
    [Zero, One, Zero, Zero],
    [Zero, Zero, One, Zero],
    [Zero, Zero, Zero, One],
];
pub const CASE_NEQ: BinaryTable = invert_binary(CASE_EQ);

/// Single-bit `a < b`. Any don't-care operand makes the order indeterminate.
pub const LT: BinaryTable = [
    [Zero, One, Unknown, Unknown],
    [Zero, Zero, Unknown, Unknown],
    [Unknown, Unknown, Unknown, Unknown],
    [Unknown, Unknown, Unknown, Unknown],
];

/// Single-bit `a > b`.
pub const GT: BinaryTable = [
    [Zero, Zero, Unknown, Unknown],
    [One, Zero, Unknown, Unknown],
    [Unknown, Unknown, Unknown, Unknown],
    [Unknown, Unknown, Unknown, Unknown],
];

/// Branch-merge table for a ternary with an indeterminate condition
/// (IEEE 1364-2005 table 5-21): agreeing branch bits survive, disagreeing
/// bits become `x`.
pub const TERNARY: BinaryTable = [
    [Zero, Unknown, Unknown, Unknown],
    [Unknown, One, Unknown, Unknown],
    [Unknown, Unknown, Unknown, Unknown],
    [Unknown, Unknown, Unknown, Unknown],
];

/// Degrades every combination to `x`.
pub const UNK: BinaryTable = [[Unknown; 4]; 4];

// ─────────────────────────────────────────────────────────
//  3-input tables for ripple addition, indexed by carry-in
// ─────────────────────────────────────────────────────────

/// `SUM[carry][a][b]`: with a known carry the sum bit is `a xor b` or its
/// inverse; an indeterminate carry poisons the bit.
pub const SUM: TernaryTable = [XOR, XNOR, UNK, UNK];

/// `CARRY[carry][a][b]`: carry-out is `a and b` (carry-in 0), `a or b`
/// (carry-in 1), and with an indeterminate carry-in it is still decided
/// whenever the operand bits agree.
pub const CARRY: TernaryTable = [AND, OR, TERNARY, TERNARY];
