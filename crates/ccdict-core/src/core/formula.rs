use std::collections::BTreeMap;
use thiserror::Error;

/// Histogram of element symbols (uppercased) to atom counts.
pub type ElementCounts = BTreeMap<String, u32>;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum FormulaError {
    #[error("Formula token '{0}' has no element symbol")]
    MissingSymbol(String),
    #[error("Count in formula token '{0}' is out of range")]
    CountOverflow(String),
}

/// Converts a dictionary-style formula such as `"C16 H10 O2"` into element counts.
///
/// Tokens are separated by whitespace. The letters of a token form the element
/// symbol and its digits the count; a token without digits counts as one. A
/// symbol appearing in several tokens accumulates.
pub fn parse_formula(formula: &str) -> Result<ElementCounts, FormulaError> {
    let mut counts = ElementCounts::new();
    for token in formula.split_whitespace() {
        let symbol: String = token
            .chars()
            .filter(char::is_ascii_alphabetic)
            .map(|c| c.to_ascii_uppercase())
            .collect();
        if symbol.is_empty() {
            return Err(FormulaError::MissingSymbol(token.to_string()));
        }

        let digits: String = token.chars().filter(char::is_ascii_digit).collect();
        let count = if digits.is_empty() {
            1
        } else {
            digits
                .parse::<u32>()
                .map_err(|_| FormulaError::CountOverflow(token.to_string()))?
        };

        *counts.entry(symbol).or_insert(0) += count;
    }
    Ok(counts)
}

/// Uppercases the symbols of a hand-written element signature.
pub fn normalize_counts<'a, I>(counts: I) -> ElementCounts
where
    I: IntoIterator<Item = (&'a str, u32)>,
{
    let mut normalized = ElementCounts::new();
    for (symbol, count) in counts {
        *normalized.entry(symbol.trim().to_ascii_uppercase()).or_insert(0) += count;
    }
    normalized
}
