//! Key recovery for texts encrypted under an unknown key.
//!
//! Both strategies walk the whole key space from 0 upwards, so whenever
//! several keys qualify the lowest one is reported.

use serde::Serialize;
use tracing::debug;

use crate::cipher::{decrypt, Key};
use crate::frequency::FrequencyVector;

/// A key recovered by substring search together with the plaintext it yields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recovery {
    pub key: Key,
    pub plaintext: String,
}

/// Distance between the sample distribution and one candidate decryption.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Attempt {
    pub key: Key,
    pub distance: f64,
}

/// Outcome of frequency analysis: the winning attempt and its plaintext.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub best: Attempt,
    pub plaintext: String,
}

/// Try every key and return the first whose decryption contains `sample`.
///
/// Returns `None` when no sample is supplied, the sample is empty, or no key
/// produces a match.
pub fn brute_force(ciphertext: &str, sample: Option<&str>) -> Option<Recovery> {
    let sample = sample.filter(|s| !s.is_empty())?;
    Key::all().find_map(|key| {
        let plaintext = decrypt(ciphertext, key);
        plaintext
            .contains(sample)
            .then(|| Recovery { key, plaintext })
    })
}

/// Distance from `sample`'s symbol distribution for every key, in key order.
pub fn rank_keys(ciphertext: &str, sample: &str) -> Vec<Attempt> {
    let expected = FrequencyVector::of_text(sample);
    Key::all()
        .map(|key| {
            let observed = FrequencyVector::of_text(&decrypt(ciphertext, key));
            let distance = expected.distance(&observed);
            debug!(key = key.value(), distance, "scored candidate key");
            Attempt { key, distance }
        })
        .collect()
}

/// Guess the key whose decryption is statistically closest to `sample`.
pub fn guess_key(ciphertext: &str, sample: &str) -> Attempt {
    rank_keys(ciphertext, sample).into_iter().fold(
        Attempt {
            key: Key::default(),
            distance: f64::INFINITY,
        },
        |best, attempt| {
            if attempt.distance < best.distance {
                attempt
            } else {
                best
            }
        },
    )
}

pub fn statistical_analysis(ciphertext: &str, sample: &str) -> Analysis {
    let best = guess_key(ciphertext, sample);
    Analysis {
        best,
        plaintext: decrypt(ciphertext, best.key),
    }
}
