//! Pure algorithms behind the three reports.
//!
//! - [`statistics`]: count / mean / median / mode / population variance and standard deviation
//! - [`conversion`]: integer to binary and hexadecimal strings
//! - [`words`]: whitespace tokenization, punctuation stripping and word frequencies
//!
//! ## Example
//!
//! ```rust
//! use report_tools::processing::{conversion, statistics, words};
//!
//! let data = [1.0, 2.0, 2.0, 3.0];
//! assert_eq!(statistics::median(&data), 2.0);
//! assert_eq!(statistics::mode(&data), Some(2.0));
//!
//! assert_eq!(conversion::decimal_to_hexadecimal(-255), "-FF");
//!
//! let freq = words::get_word_frequencies("to be, or not to be");
//! assert_eq!(freq.get("be"), 2);
//! ```

pub mod conversion;
pub mod statistics;
pub mod words;

pub use conversion::{decimal_to_binary, decimal_to_hexadecimal};
pub use statistics::describe;
pub use words::{count_words, count_words_in_lines, get_word_frequencies, strip_punctuation};
