use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Number of symbols in [`ALPHABET`].
pub const ALPHABET_LEN: usize = 40;

/// The closed alphabet every shift is computed over. Order matters: a key of
/// `k` moves each symbol `k` positions to the right, wrapping at the end.
#[rustfmt::skip]
pub const ALPHABET: [char; ALPHABET_LEN] = [
    'а', 'б', 'в', 'г', 'д', 'е', 'ж', 'з', 'и', 'к',
    'л', 'м', 'н', 'о', 'п', 'р', 'с', 'т', 'у', 'ф',
    'х', 'ц', 'ч', 'ш', 'щ', 'ъ', 'ы', 'ь', 'э', 'я',
    '.', ',', '«', '»', '"', '\'', ':', '!', '?', ' ',
];

static SYMBOL_INDEX: Lazy<HashMap<char, usize>> = Lazy::new(|| {
    ALPHABET
        .iter()
        .enumerate()
        .map(|(idx, &symbol)| (symbol, idx))
        .collect()
});

/// Position of `symbol` in the alphabet, or `None` for anything outside it.
pub fn index_of(symbol: char) -> Option<usize> {
    SYMBOL_INDEX.get(&symbol).copied()
}

pub fn contains(symbol: char) -> bool {
    SYMBOL_INDEX.contains_key(&symbol)
}

/// Shift a single character by `shift` positions.
///
/// Characters outside the alphabet (digits, uppercase, newlines, Latin, ...)
/// pass through untouched. Negative shifts move left.
pub fn shift_char(c: char, shift: i64) -> char {
    match index_of(c) {
        Some(idx) => {
            let wrapped = (idx as i64 + shift).rem_euclid(ALPHABET_LEN as i64);
            ALPHABET[wrapped as usize]
        }
        None => c,
    }
}
