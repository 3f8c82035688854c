//! Four-state (`0`/`1`/`x`/`z`) arbitrary-width bit-vector arithmetic for
//! evaluating Verilog constant expressions and sized literals during
//! elaboration.
//!
//! The engine reproduces the IEEE 1364-2005 numeric semantics bit for bit:
//! truth-table-driven primitive logic, packed bit storage, literal
//! parsing/formatting, and operator algorithms (ripple-carry add/subtract,
//! shift-and-add multiply, restoring divide, two's-complement negation,
//! magnitude comparison, ternary resolution) that never rely on native
//! machine-integer overflow behavior.
//!
//! Text flows one direction: literal → [`VNumber`] (via `FromStr`) →
//! operators ([`ops`], or token-dispatched through [`apply_unary`] /
//! [`apply_binary`] / [`apply_ternary`]) → result → canonical literal
//! (via `Display`).

mod bits;
mod error;
mod eval;
mod literal;
pub mod logic;
mod number;
pub mod ops;

pub use bits::BitVector;
pub use error::NumberError;
pub use eval::{BinaryOp, UnaryOp, apply_binary, apply_ternary, apply_unary};
pub use logic::LogicValue;
pub use number::VNumber;
pub use ops::is_true;

#[cfg(test)]
mod engine_tests;
