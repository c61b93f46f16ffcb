//! Input data: generation, text parsing, and text export
//!
//! Arrays come from one of two places: a generator (uniform random over a
//! bounded range, or pre-sorted ascending/descending) or a user-supplied
//! text file with one integer per line. Parsing is all-or-nothing — a
//! single bad token rejects the whole file so the caller never adopts a
//! partial array.

use std::fs;
use std::path::Path;

use rand::Rng;

use crate::error::VizError;

/// Initial ordering of generated data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataOrder {
    Random,
    Ascending,
    Descending,
}

impl std::str::FromStr for DataOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(DataOrder::Random),
            "asc" | "ascending" => Ok(DataOrder::Ascending),
            "desc" | "descending" => Ok(DataOrder::Descending),
            other => Err(format!(
                "unknown order '{}' (expected random, asc, or desc)",
                other
            )),
        }
    }
}

/// Generate `count` elements in the requested order. Random values are
/// uniform over `1..=max`; sorted orders are the values `1..=count`.
pub fn generate<R: Rng>(rng: &mut R, count: usize, order: DataOrder, max: i64) -> Vec<i64> {
    match order {
        DataOrder::Random => (0..count).map(|_| rng.gen_range(1..=max.max(1))).collect(),
        DataOrder::Ascending => (1..=count as i64).collect(),
        DataOrder::Descending => (1..=count as i64).rev().collect(),
    }
}

/// Parse newline-delimited integers. Blank lines are skipped; any other
/// non-integer token is a recoverable error naming the offending line.
pub fn parse_text(text: &str) -> Result<Vec<i64>, VizError> {
    let mut values = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let token = line.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<i64>() {
            Ok(value) => values.push(value),
            Err(_) => {
                return Err(VizError::NonIntegerToken {
                    line: idx + 1,
                    token: token.to_string(),
                });
            }
        }
    }
    if values.is_empty() {
        return Err(VizError::EmptyInput);
    }
    Ok(values)
}

/// Load an array from a file of one integer per line.
pub fn load_file(path: &Path) -> Result<Vec<i64>, VizError> {
    let text = fs::read_to_string(path)?;
    parse_text(&text)
}

/// Write an array as newline-delimited text (the downloadable artifact
/// format: same shape the loader accepts).
pub fn save_file(path: &Path, values: &[i64]) -> Result<(), VizError> {
    let mut text = String::with_capacity(values.len() * 4);
    for value in values {
        text.push_str(&value.to_string());
        text.push('\n');
    }
    fs::write(path, text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_parse_valid_lines() {
        let values = parse_text("3\n-1\n\n42\n").unwrap();
        assert_eq!(values, vec![3, -1, 42]);
    }

    #[test]
    fn test_parse_reports_offending_line() {
        let err = parse_text("1\n2\nbanana\n4").unwrap_err();
        match err {
            VizError::NonIntegerToken { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "banana");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_empty_input() {
        assert!(matches!(parse_text("\n\n"), Err(VizError::EmptyInput)));
    }

    #[test]
    fn test_generate_orders() {
        let mut rng = SmallRng::seed_from_u64(7);

        let asc = generate(&mut rng, 5, DataOrder::Ascending, 1000);
        assert_eq!(asc, vec![1, 2, 3, 4, 5]);

        let desc = generate(&mut rng, 5, DataOrder::Descending, 1000);
        assert_eq!(desc, vec![5, 4, 3, 2, 1]);

        let random = generate(&mut rng, 100, DataOrder::Random, 50);
        assert_eq!(random.len(), 100);
        assert!(random.iter().all(|&v| (1..=50).contains(&v)));
    }
}
