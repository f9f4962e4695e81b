//! Whitespace tokenization and word-frequency counting.

use crate::types::WordFrequencies;

/// Characters removed from every token before counting.
pub const PUNCTUATION: &str = ".,;:!?()[]{}\"'-";

/// Remove every character of `chars` from anywhere in `word`.
pub fn strip_chars(word: &str, chars: &str) -> String {
    word.chars().filter(|c| !chars.contains(*c)).collect()
}

/// Remove [`PUNCTUATION`] characters from anywhere in `word` (not just the ends).
pub fn strip_punctuation(word: &str) -> String {
    strip_chars(word, PUNCTUATION)
}

/// Number of whitespace-separated tokens; 0 for blank text.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sum of [`count_words`] over each line.
pub fn count_words_in_lines<I, S>(lines: I) -> usize
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines.into_iter().map(|line| count_words(line.as_ref())).sum()
}

/// Word frequencies using the default [`PUNCTUATION`] set.
pub fn get_word_frequencies(text: &str) -> WordFrequencies {
    get_word_frequencies_with(text, PUNCTUATION)
}

/// Word frequencies, stripping `punctuation` from each token.
///
/// Tokens that are empty after stripping are dropped. Keys keep their case and appear in
/// first-occurrence order.
pub fn get_word_frequencies_with(text: &str, punctuation: &str) -> WordFrequencies {
    let mut frequencies = WordFrequencies::new();
    for token in text.split_whitespace() {
        let word = strip_chars(token, punctuation);
        if !word.is_empty() {
            frequencies.increment(word);
        }
    }
    frequencies
}
