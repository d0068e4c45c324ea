//! Transliterates text into Sherman circular-script patterns.
//!
//! Text is split into letters and digraphs (longest match first), and each
//! token is looked up in a 4x8 grid of base shapes and modifiers. Tokens the
//! table lacks resolve to [`Pattern::DEFAULT`].
//!
//! ```
//! let out = sherman::describe_patterns("Thy");
//! assert_eq!(
//!     out,
//!     "Token 'th': base=edge_circle, modifier=none\n\
//!      Token 'y': base=edge_circle, modifier=two_dots"
//! );
//! ```

pub mod config;
pub mod describe;
pub mod error;
pub mod input;
pub mod pattern;
pub mod table;

#[cfg(test)]
mod proptests;

pub use config::Config;
pub use describe::{describe, render, Format};
pub use error::{Result, ShermanError};
pub use pattern::{BaseShape, Modifier, Pattern, Symbol, Token};
pub use table::TokenTable;

/// Tokens of `text` against the built-in grid.
pub fn tokenize(text: &str) -> Vec<Token> {
    TokenTable::builtin().tokenize(text)
}

/// Built-in pattern for a token, or the default pattern.
pub fn pattern_for_token(token: &str) -> Pattern {
    TokenTable::builtin().lookup(token)
}

pub fn generate_patterns(text: &str) -> Vec<Pattern> {
    TokenTable::builtin().generate_patterns(text)
}

pub fn translate(text: &str) -> Vec<Symbol> {
    TokenTable::builtin().translate(text)
}

/// Human readable description, one line per token.
pub fn describe_patterns(text: &str) -> String {
    describe(&translate(text))
}
