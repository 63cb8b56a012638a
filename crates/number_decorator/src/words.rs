/// Largest number with a spelling in [`WORDS`].
pub const MAX_WORD: i64 = 10;

/// English spelling of each number from 0 to [`MAX_WORD`], indexed by the number.
pub static WORDS: [&str; MAX_WORD as usize + 1] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

/// Spells out `n` in English.
/// Returns an empty string when `n` is outside `0..=MAX_WORD`.
#[must_use]
pub fn render_word(n: i64) -> &'static str {
    usize::try_from(n)
        .ok()
        .and_then(|i| WORDS.get(i))
        .copied()
        .unwrap_or("")
}
