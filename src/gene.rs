//! # Gene Codec
//!
//! A gene is a fixed-width block of bits read as an unsigned big-endian
//! integer code. Codes `0..=9` are digits, codes `10..=13` are the operators
//! `+ - * /`, every other code is unassigned. With the default width of four
//! bits this gives the familiar table:
//!
//! | bits   | symbol | bits   | symbol |
//! |--------|--------|--------|--------|
//! | `0000` | `0`    | `1010` | `+`    |
//! | ...    | ...    | `1011` | `-`    |
//! | `1001` | `9`    | `1100` | `*`    |
//! |        |        | `1101` | `/`    |
//!
//! `1110` and `1111` decode to nothing and are skipped by
//! [`decode_next_gene`].

use std::fmt;

/// Default number of bits per gene.
pub const GENE_SIZE: usize = 4;

/// Smallest gene width able to address every symbol code.
pub const MIN_GENE_SIZE: usize = 4;

/// Largest gene width a code can be read into.
pub const MAX_GENE_SIZE: usize = 32;

/// A binary arithmetic operator. All operators share one precedence and
/// associate to the left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Applies the operator to two reals.
    ///
    /// Division follows IEEE semantics, so dividing by zero yields an
    /// infinity or NaN instead of panicking.
    ///
    /// ```rust
    /// use genexpr::gene::Operator;
    ///
    /// assert_eq!(Operator::Div.apply(9.0, 2.0), 4.5);
    /// assert!(Operator::Div.apply(5.0, 0.0).is_infinite());
    /// ```
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Operator::Add => lhs + rhs,
            Operator::Sub => lhs - rhs,
            Operator::Mul => lhs * rhs,
            Operator::Div => lhs / rhs,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A decoded token of an expression.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbol {
    Number(u8),
    Operator(Operator),
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Number(n) => write!(f, "{}", n),
            Symbol::Operator(op) => write!(f, "{}", op),
        }
    }
}

/// Maps gene codes to the values of one symbol class.
pub trait GeneTable {
    type Value;

    /// Returns the value assigned to `code`, if any.
    fn lookup(&self, code: u32) -> Option<Self::Value>;
}

/// The ten digit genes.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumberGenes;

impl GeneTable for NumberGenes {
    type Value = u8;

    fn lookup(&self, code: u32) -> Option<u8> {
        match code {
            0..=9 => Some(code as u8),
            _ => None,
        }
    }
}

/// The four operator genes.
#[derive(Clone, Copy, Debug, Default)]
pub struct OperatorGenes;

impl GeneTable for OperatorGenes {
    type Value = Operator;

    fn lookup(&self, code: u32) -> Option<Operator> {
        match code {
            10 => Some(Operator::Add),
            11 => Some(Operator::Sub),
            12 => Some(Operator::Mul),
            13 => Some(Operator::Div),
            _ => None,
        }
    }
}

/// Reads a block of bits as a big-endian integer.
pub fn gene_code(bits: &[bool]) -> u32 {
    bits.iter()
        .fold(0u32, |code, &bit| (code << 1) | u32::from(bit))
}

/// Finds the next gene in `bits` that `table` assigns a value to.
///
/// Scanning moves in whole-gene steps: a block that does not match is
/// discarded and the following block is tried. Returns the matched value and
/// the bits after it, or `None` once fewer than `gene_size` bits are left.
///
/// ```rust
/// use genexpr::gene::{decode_next_gene, NumberGenes};
///
/// // 1111 is unassigned and is skipped over
/// let bits = [true, true, true, true, false, true, true, true];
/// let (digit, rest) = decode_next_gene(&bits, 4, &NumberGenes).unwrap();
/// assert_eq!(digit, 7);
/// assert!(rest.is_empty());
/// ```
pub fn decode_next_gene<'a, T: GeneTable>(
    bits: &'a [bool],
    gene_size: usize,
    table: &T,
) -> Option<(T::Value, &'a [bool])> {
    if gene_size == 0 {
        return None;
    }

    let mut pos = 0;
    while pos + gene_size <= bits.len() {
        let end = pos + gene_size;
        if let Some(value) = table.lookup(gene_code(&bits[pos..end])) {
            return Some((value, &bits[end..]));
        }
        pos = end;
    }

    None
}
