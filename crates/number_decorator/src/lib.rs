//! Decorates integer functions into functions from numeric strings to English words.
//!
//! ```
//! use number_decorator::{decorate, inner::double};
//!
//! let spelled = decorate(double);
//! assert_eq!(spelled("2"), "four");
//! assert_eq!(spelled("6"), ""); // Twelve has no spelling.
//! assert_eq!(spelled("two"), ""); // Not a number.
//! ```

/// The decorator combinator and its owning form.
pub mod decorator;

/// Example inner functions.
pub mod inner;

/// Parsing numeric tokens into integers.
pub mod parse;

/// Traits for generic processing
pub mod traits;

/// Spelling small integers as English words.
pub mod words;

pub use decorator::{decorate, Decorator};
pub use parse::{parse_number, ParseError};
pub use words::render_word;
