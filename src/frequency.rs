use std::collections::HashMap;

use crate::alphabet::{ALPHABET, ALPHABET_LEN};

/// Occurrence count of every character seen in a text.
pub type FrequencyMap = HashMap<char, usize>;

pub fn count_symbols(text: &str) -> FrequencyMap {
    let mut counts = FrequencyMap::new();
    for c in text.chars() {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Relative frequency of each alphabet symbol, index-aligned to [`ALPHABET`].
///
/// Entries sum to 1 whenever the source text holds at least one alphabet
/// symbol; a text without any yields the zero vector.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyVector([f64; ALPHABET_LEN]);

impl FrequencyVector {
    pub fn from_counts(counts: &FrequencyMap) -> Self {
        let mut raw = [0.0_f64; ALPHABET_LEN];
        let mut total = 0usize;
        for (idx, symbol) in ALPHABET.iter().enumerate() {
            let n = counts.get(symbol).copied().unwrap_or(0);
            raw[idx] = n as f64;
            total += n;
        }
        if total > 0 {
            let total = total as f64;
            for hz in raw.iter_mut() {
                *hz /= total;
            }
        }
        FrequencyVector(raw)
    }

    pub fn of_text(text: &str) -> Self {
        Self::from_counts(&count_symbols(text))
    }

    /// Euclidean distance between two distributions.
    pub fn distance(&self, other: &FrequencyVector) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(a, b)| (a - b).powi(2))
            .sum::<f64>()
            .sqrt()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&hz| hz == 0.0)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}
