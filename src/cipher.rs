use serde::Serialize;
use std::fmt;

use crate::alphabet::{shift_char, ALPHABET_LEN};
use crate::errors::{CipherError, Result};

/// A shift amount, guaranteed to lie in `[0, ALPHABET_LEN)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Key(usize);

impl Key {
    pub const MAX: usize = ALPHABET_LEN - 1;

    pub fn new(value: i64) -> Result<Self> {
        if value < 0 || value > Self::MAX as i64 {
            return Err(CipherError::InvalidKey {
                key: value,
                max: Self::MAX,
            });
        }
        Ok(Key(value as usize))
    }

    /// Every candidate key, lowest first.
    pub fn all() -> impl Iterator<Item = Key> {
        (0..ALPHABET_LEN).map(Key)
    }

    pub fn value(self) -> usize {
        self.0
    }

    /// The key that undoes this one when used for encryption.
    pub fn inverse(self) -> Key {
        Key((ALPHABET_LEN - self.0) % ALPHABET_LEN)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn shift_text(text: &str, shift: i64) -> String {
    text.chars().map(|c| shift_char(c, shift)).collect()
}

pub fn encrypt(plaintext: &str, key: Key) -> String {
    shift_text(plaintext, key.0 as i64)
}

pub fn decrypt(ciphertext: &str, key: Key) -> String {
    shift_text(ciphertext, -(key.0 as i64))
}
