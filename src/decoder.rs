//! # Chromosome Decoder
//!
//! Walks a chromosome gene by gene, alternating between the number and
//! operator tables, and folds the tokens it finds with a [`Combine`]
//! strategy. The traversal is the same whether the caller wants a numeric
//! value ([`NumericCombine`]), a display string ([`TextCombine`]) or the raw
//! token stream ([`SymbolCombine`]).
//!
//! Decoding never fails part-way: unassigned genes are skipped, and once the
//! bits run out the accumulator built so far is returned. A trailing operator
//! with no number after it is dropped. Only a chromosome with no number gene
//! at all decodes to `None`.
//!
//! ```rust
//! use genexpr::chromosome::Chromosome;
//! use genexpr::decoder::{render_text, render_value};
//! use genexpr::gene::GENE_SIZE;
//!
//! let chromosome: Chromosome = "0010 1100 0100 1010 0010".parse().unwrap();
//! assert_eq!(render_value(&chromosome, GENE_SIZE), Some(10.0));
//! assert_eq!(render_text(&chromosome, GENE_SIZE).as_deref(), Some("2 * 4 + 2"));
//! ```

use crate::{
    chromosome::Chromosome,
    gene::{decode_next_gene, NumberGenes, Operator, OperatorGenes, Symbol},
};

/// Accumulation strategy used by [`decode`].
pub trait Combine {
    type Output;

    /// Starts the accumulator from the leading number.
    fn seed(&self, number: u8) -> Self::Output;

    /// Folds one `operator operand` pair into the accumulator.
    fn combine(&self, acc: Self::Output, operator: Operator, operand: u8) -> Self::Output;
}

/// Evaluates left to right with real-number arithmetic.
#[derive(Clone, Copy, Debug, Default)]
pub struct NumericCombine;

impl Combine for NumericCombine {
    type Output = f64;

    fn seed(&self, number: u8) -> f64 {
        f64::from(number)
    }

    fn combine(&self, acc: f64, operator: Operator, operand: u8) -> f64 {
        operator.apply(acc, f64::from(operand))
    }
}

/// Renders an unparenthesized, left-associative expression such as `2 * 4 + 2`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextCombine;

impl Combine for TextCombine {
    type Output = String;

    fn seed(&self, number: u8) -> String {
        number.to_string()
    }

    fn combine(&self, acc: String, operator: Operator, operand: u8) -> String {
        format!("{} {} {}", acc, operator, operand)
    }
}

/// Collects the decoded tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct SymbolCombine;

impl Combine for SymbolCombine {
    type Output = Vec<Symbol>;

    fn seed(&self, number: u8) -> Vec<Symbol> {
        vec![Symbol::Number(number)]
    }

    fn combine(&self, mut acc: Vec<Symbol>, operator: Operator, operand: u8) -> Vec<Symbol> {
        acc.push(Symbol::Operator(operator));
        acc.push(Symbol::Number(operand));
        acc
    }
}

/// Decodes `chromosome` with genes of `gene_size` bits, folding with `strategy`.
///
/// Returns `None` if the chromosome contains no number gene.
pub fn decode<C: Combine>(
    chromosome: &Chromosome,
    gene_size: usize,
    strategy: &C,
) -> Option<C::Output> {
    let (first, mut rest) = decode_next_gene(chromosome.bits(), gene_size, &NumberGenes)?;
    let mut acc = strategy.seed(first);

    while !rest.is_empty() {
        let Some((operator, after_operator)) = decode_next_gene(rest, gene_size, &OperatorGenes)
        else {
            break;
        };
        let Some((operand, after_operand)) =
            decode_next_gene(after_operator, gene_size, &NumberGenes)
        else {
            break;
        };

        acc = strategy.combine(acc, operator, operand);
        rest = after_operand;
    }

    Some(acc)
}

/// Numeric value of a chromosome made of `gene_size`-bit genes.
///
/// Pass the gene size the chromosome was evolved with; the same bits read
/// at another width are a different expression. Division by zero is not
/// trapped here; the result is then infinite or NaN.
pub fn render_value(chromosome: &Chromosome, gene_size: usize) -> Option<f64> {
    decode(chromosome, gene_size, &NumericCombine)
}

/// Display string of a chromosome made of `gene_size`-bit genes.
pub fn render_text(chromosome: &Chromosome, gene_size: usize) -> Option<String> {
    decode(chromosome, gene_size, &TextCombine)
}

/// Token stream of a chromosome made of `gene_size`-bit genes.
pub fn decode_symbols(chromosome: &Chromosome, gene_size: usize) -> Option<Vec<Symbol>> {
    decode(chromosome, gene_size, &SymbolCombine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gene::GENE_SIZE;

    fn chromosome(s: &str) -> Chromosome {
        s.parse().unwrap()
    }

    #[test]
    fn test_full_expression() {
        let c = chromosome("0110 1010 0101 1100 0011");
        assert_eq!(render_value(&c, GENE_SIZE), Some(33.0));
        assert_eq!(render_text(&c, GENE_SIZE).as_deref(), Some("6 + 5 * 3"));
    }

    #[test]
    fn test_left_associative_division() {
        let c = chromosome("1001 1101 0010 1011 0001");
        assert_eq!(render_value(&c, GENE_SIZE), Some(3.5));
        assert_eq!(render_text(&c, GENE_SIZE).as_deref(), Some("9 / 2 - 1"));
    }

    #[test]
    fn test_single_number() {
        let c = chromosome("0111 1111 1110 0011 0001");
        // No operator is ever found after the 7, so the 3 and 1 are consumed
        // while scanning for one.
        assert_eq!(render_value(&c, GENE_SIZE), Some(7.0));
        assert_eq!(render_text(&c, GENE_SIZE).as_deref(), Some("7"));
    }

    #[test]
    fn test_dangling_operator_is_dropped() {
        let c = chromosome("0100 1010 0011 1100 1111");
        assert_eq!(render_value(&c, GENE_SIZE), Some(7.0));
        assert_eq!(render_text(&c, GENE_SIZE).as_deref(), Some("4 + 3"));
    }

    #[test]
    fn test_empty_decode() {
        let c = chromosome("1010 1011 1111 1110 1101");
        assert_eq!(render_value(&c, GENE_SIZE), None);
        assert_eq!(render_text(&c, GENE_SIZE), None);
        assert_eq!(render_value(&Chromosome::from_bits(Vec::new()), GENE_SIZE), None);
    }

    #[test]
    fn test_leading_zero_is_a_number() {
        let c = chromosome("0000 1010 0101 1110 1110");
        assert_eq!(render_value(&c, GENE_SIZE), Some(5.0));
        assert_eq!(render_text(&c, GENE_SIZE).as_deref(), Some("0 + 5"));
    }

    #[test]
    fn test_division_by_zero_is_not_an_error() {
        let c = chromosome("0101 1101 0000 1110 1110");
        let value = render_value(&c, GENE_SIZE).unwrap();
        assert!(value.is_infinite());
        assert_eq!(render_text(&c, GENE_SIZE).as_deref(), Some("5 / 0"));
    }

    #[test]
    fn test_symbols_match_text() {
        let c = chromosome("0010 1100 0100 1010 0010");
        let symbols = decode_symbols(&c, GENE_SIZE).unwrap();
        let joined = symbols
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
            .join(" ");

        assert_eq!(
            symbols,
            vec![
                Symbol::Number(2),
                Symbol::Operator(Operator::Mul),
                Symbol::Number(4),
                Symbol::Operator(Operator::Add),
                Symbol::Number(2),
            ]
        );
        assert_eq!(Some(joined), render_text(&c, GENE_SIZE));
    }

    #[test]
    fn test_wider_genes() {
        // 5-bit genes: 00011 = 3, 01100 = '*', 00011 = 3
        let c = chromosome("00011 01100 00011");
        assert_eq!(render_value(&c, 5), Some(9.0));
        assert_eq!(render_text(&c, 5).as_deref(), Some("3 * 3"));

        // Read as 4-bit genes the same bits are 1 - 0 plus three spare bits
        assert_eq!(render_value(&c, GENE_SIZE), Some(1.0));
    }
}
