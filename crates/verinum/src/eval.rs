//! The textual operator surface consumed by external drivers.
//!
//! Operator tokens map 1:1 onto the entries of [`crate::ops`]; parsing an
//! unrecognized token is fatal ([`NumberError::UnsupportedOperator`]).
//! Nothing here touches process arguments or I/O — the driver tokenizes,
//! this module dispatches.

use std::fmt;
use std::str::FromStr;

use crate::error::NumberError;
use crate::number::VNumber;
use crate::ops;

/// A unary operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    BitwiseNot,
    Negate,
    Identity,
    ReduceAnd,
    ReduceOr,
    ReduceXor,
    ReduceNand,
    ReduceNor,
    ReduceXnor,
    LogicalNot,
}

impl FromStr for UnaryOp {
    type Err = NumberError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "~" => Ok(Self::BitwiseNot),
            "-" => Ok(Self::Negate),
            "+" => Ok(Self::Identity),
            "&" => Ok(Self::ReduceAnd),
            "|" => Ok(Self::ReduceOr),
            "^" => Ok(Self::ReduceXor),
            "~&" => Ok(Self::ReduceNand),
            "~|" => Ok(Self::ReduceNor),
            "~^" | "^~" => Ok(Self::ReduceXnor),
            "!" => Ok(Self::LogicalNot),
            _ => Err(NumberError::UnsupportedOperator {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::BitwiseNot => "~",
            Self::Negate => "-",
            Self::Identity => "+",
            Self::ReduceAnd => "&",
            Self::ReduceOr => "|",
            Self::ReduceXor => "^",
            Self::ReduceNand => "~&",
            Self::ReduceNor => "~|",
            Self::ReduceXnor => "~^",
            Self::LogicalNot => "!",
        };
        write!(f, "{}", token)
    }
}

/// A binary operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseNand,
    BitwiseNor,
    BitwiseXnor,
    CaseEqual,
    CaseNotEqual,
    ShiftLeft,
    ArithShiftLeft,
    ShiftRight,
    ArithShiftRight,
    LogicalAnd,
    LogicalOr,
    LessThan,
    GreaterThan,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
    Add,
    Subtract,
    Multiply,
    Power,
    Divide,
    Modulo,
}

impl FromStr for BinaryOp {
    type Err = NumberError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "&" => Ok(Self::BitwiseAnd),
            "|" => Ok(Self::BitwiseOr),
            "^" => Ok(Self::BitwiseXor),
            "~&" => Ok(Self::BitwiseNand),
            "~|" => Ok(Self::BitwiseNor),
            "~^" | "^~" => Ok(Self::BitwiseXnor),
            "===" => Ok(Self::CaseEqual),
            "!==" => Ok(Self::CaseNotEqual),
            "<<" => Ok(Self::ShiftLeft),
            "<<<" => Ok(Self::ArithShiftLeft),
            ">>" => Ok(Self::ShiftRight),
            ">>>" => Ok(Self::ArithShiftRight),
            "&&" => Ok(Self::LogicalAnd),
            "||" => Ok(Self::LogicalOr),
            "<" => Ok(Self::LessThan),
            ">" => Ok(Self::GreaterThan),
            "<=" => Ok(Self::LessEqual),
            ">=" => Ok(Self::GreaterEqual),
            "==" => Ok(Self::Equal),
            "!=" => Ok(Self::NotEqual),
            "+" => Ok(Self::Add),
            "-" => Ok(Self::Subtract),
            "*" => Ok(Self::Multiply),
            "**" => Ok(Self::Power),
            "/" => Ok(Self::Divide),
            "%" => Ok(Self::Modulo),
            _ => Err(NumberError::UnsupportedOperator {
                token: token.to_string(),
            }),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = match self {
            Self::BitwiseAnd => "&",
            Self::BitwiseOr => "|",
            Self::BitwiseXor => "^",
            Self::BitwiseNand => "~&",
            Self::BitwiseNor => "~|",
            Self::BitwiseXnor => "~^",
            Self::CaseEqual => "===",
            Self::CaseNotEqual => "!==",
            Self::ShiftLeft => "<<",
            Self::ArithShiftLeft => "<<<",
            Self::ShiftRight => ">>",
            Self::ArithShiftRight => ">>>",
            Self::LogicalAnd => "&&",
            Self::LogicalOr => "||",
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Power => "**",
            Self::Divide => "/",
            Self::Modulo => "%",
        };
        write!(f, "{}", token)
    }
}

/// Evaluates a unary operator. Unary operators never fail: don't-care
/// operands are domain values.
pub fn apply_unary(op: UnaryOp, a: &VNumber) -> VNumber {
    match op {
        UnaryOp::BitwiseNot => ops::bitwise_not(a),
        UnaryOp::Negate => ops::negate(a),
        UnaryOp::Identity => ops::identity(a),
        UnaryOp::ReduceAnd => ops::reduce_and(a),
        UnaryOp::ReduceOr => ops::reduce_or(a),
        UnaryOp::ReduceXor => ops::reduce_xor(a),
        UnaryOp::ReduceNand => ops::reduce_nand(a),
        UnaryOp::ReduceNor => ops::reduce_nor(a),
        UnaryOp::ReduceXnor => ops::reduce_xnor(a),
        UnaryOp::LogicalNot => ops::logical_not(a),
    }
}

/// Evaluates a binary operator. Only the shifts can fail, and only on a
/// shift-amount operand outside the native integer window.
pub fn apply_binary(op: BinaryOp, a: &VNumber, b: &VNumber) -> Result<VNumber, NumberError> {
    Ok(match op {
        BinaryOp::BitwiseAnd => ops::bitwise_and(a, b),
        BinaryOp::BitwiseOr => ops::bitwise_or(a, b),
        BinaryOp::BitwiseXor => ops::bitwise_xor(a, b),
        BinaryOp::BitwiseNand => ops::bitwise_nand(a, b),
        BinaryOp::BitwiseNor => ops::bitwise_nor(a, b),
        BinaryOp::BitwiseXnor => ops::bitwise_xnor(a, b),
        BinaryOp::CaseEqual => ops::case_equal(a, b),
        BinaryOp::CaseNotEqual => ops::case_not_equal(a, b),
        BinaryOp::ShiftLeft => ops::shift_left(a, b)?,
        BinaryOp::ArithShiftLeft => ops::arith_shift_left(a, b)?,
        BinaryOp::ShiftRight => ops::shift_right(a, b)?,
        BinaryOp::ArithShiftRight => ops::arith_shift_right(a, b)?,
        BinaryOp::LogicalAnd => ops::logical_and(a, b),
        BinaryOp::LogicalOr => ops::logical_or(a, b),
        BinaryOp::LessThan => ops::less_than(a, b),
        BinaryOp::GreaterThan => ops::greater_than(a, b),
        BinaryOp::LessEqual => ops::less_equal(a, b),
        BinaryOp::GreaterEqual => ops::greater_equal(a, b),
        BinaryOp::Equal => ops::equal(a, b),
        BinaryOp::NotEqual => ops::not_equal(a, b),
        BinaryOp::Add => ops::add(a, b),
        BinaryOp::Subtract => ops::subtract(a, b),
        BinaryOp::Multiply => ops::multiply(a, b),
        BinaryOp::Power => ops::power(a, b),
        BinaryOp::Divide => ops::divide(a, b),
        BinaryOp::Modulo => ops::modulo(a, b),
    })
}

/// Evaluates `cond ? when_true : when_false`.
pub fn apply_ternary(cond: &VNumber, when_true: &VNumber, when_false: &VNumber) -> VNumber {
    ops::ternary(cond, when_true, when_false)
}
