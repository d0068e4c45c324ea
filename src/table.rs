use std::collections::HashMap;
use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::error::{Result, ShermanError};
use crate::pattern::{Pattern, Symbol, Token};

/// The Sherman grid: (token, row, column).
const GRID: [(&str, usize, usize); 32] = [
    // deep divot
    ("b", 0, 0),
    ("a", 0, 1),
    ("ch", 0, 2),
    ("d", 0, 3),
    ("nd", 0, 4),
    ("f", 0, 5),
    ("h", 0, 6),
    ("g", 0, 7),
    // inner circle
    ("j", 1, 0),
    ("ph", 1, 1),
    ("k", 1, 2),
    ("l", 1, 3),
    ("c", 1, 4),
    ("m", 1, 5),
    ("p", 1, 6),
    ("n", 1, 7),
    // shallow divot
    ("t", 2, 0),
    ("wh", 2, 1),
    ("sh", 2, 2),
    ("r", 2, 3),
    ("nt", 2, 4),
    ("s", 2, 5),
    ("w", 2, 6),
    ("v", 2, 7),
    // edge circle
    ("th", 3, 0),
    ("gh", 3, 1),
    ("y", 3, 2),
    ("z", 3, 3),
    ("q", 3, 4),
    ("ng", 3, 5),
    ("x", 3, 6),
    ("qu", 3, 7),
];

lazy_static! {
    static ref BUILTIN: TokenTable =
        TokenTable::from_entries(GRID).expect("built-in grid is a valid table");
}

/// Immutable mapping from tokens to patterns.
///
/// Holds the compiled matcher used for tokenizing, so a table is built once
/// and then only read.
#[derive(Debug, Clone)]
pub struct TokenTable {
    entries: HashMap<String, Pattern>,
    matcher: Regex,
}

impl TokenTable {
    /// The process-wide Sherman grid.
    pub fn builtin() -> &'static TokenTable {
        &BUILTIN
    }

    /// Builds a table from `(token, row, column)` triples.
    ///
    /// Tokens are lowercased. Each must be one or two characters, unique, and
    /// point inside the 4x8 grid.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, usize, usize)>,
        S: AsRef<str>,
    {
        let mut map = HashMap::new();
        for (token, row, column) in entries {
            let token = token.as_ref().to_lowercase();
            let len = token.chars().count();
            if len == 0 || len > 2 {
                return Err(ShermanError::InvalidToken(token));
            }
            if row >= 4 {
                return Err(ShermanError::RowOutOfRange { token, row });
            }
            let pattern = Pattern::at(row, column)
                .ok_or_else(|| ShermanError::ColumnOutOfRange {
                    token: token.clone(),
                    column,
                })?;
            if map.contains_key(&token) {
                return Err(ShermanError::DuplicateToken(token));
            }
            map.insert(token, pattern);
        }
        if map.is_empty() {
            return Err(ShermanError::EmptyTable);
        }

        let matcher = compile_matcher(map.keys())?;
        debug!("built token table with {} entries", map.len());
        Ok(TokenTable {
            entries: map,
            matcher,
        })
    }

    /// Parses `token,row,column` lines. Blank lines and `#` comments are skipped.
    pub fn parse(source: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for (idx, line) in source.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parts: Vec<&str> = line.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(ShermanError::TableLine {
                    line: line_no,
                    message: format!("expected 3 fields, found {}", parts.len()),
                });
            }
            let row = parse_index(parts[1], "row", line_no)?;
            let column = parse_index(parts[2], "column", line_no)?;
            entries.push((parts[0].to_string(), row, column));
        }
        Self::from_entries(entries)
    }

    /// Reads and parses a table file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| ShermanError::io(path, e))?;
        let table = Self::parse(&source)?;
        debug!("loaded table from {}", path.display());
        Ok(table)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, token: &str) -> Option<Pattern> {
        self.entries.get(token).copied()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.entries.contains_key(token)
    }

    /// Entries ordered by row, then column.
    pub fn entries(&self) -> Vec<(&str, Pattern)> {
        let mut out: Vec<(&str, Pattern)> = self
            .entries
            .iter()
            .map(|(token, pattern)| (token.as_str(), *pattern))
            .collect();
        out.sort_by_key(|(token, p)| (p.base_shape.row(), p.modifier.column(), *token));
        out
    }

    /// Splits text into tokens, preferring digraphs over single letters.
    ///
    /// Characters that start no token are dropped.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let lowered = text.to_lowercase();
        self.matcher
            .find_iter(&lowered)
            .map(|m| Token::new(m.as_str()))
            .collect()
    }

    /// The pattern for `token`, or `Pattern::DEFAULT` when the table lacks it.
    pub fn lookup(&self, token: &str) -> Pattern {
        self.get(token).unwrap_or_default()
    }

    pub fn generate_patterns(&self, text: &str) -> Vec<Pattern> {
        self.tokenize(text)
            .iter()
            .map(|token| self.lookup(token.as_str()))
            .collect()
    }

    pub fn translate(&self, text: &str) -> Vec<Symbol> {
        self.tokenize(text)
            .into_iter()
            .map(|token| {
                let pattern = self.lookup(token.as_str());
                Symbol { token, pattern }
            })
            .collect()
    }
}

/// Alternation of every key, longest first. Leftmost-first matching then picks
/// a digraph over its leading letter at the same position.
fn compile_matcher<'a>(keys: impl Iterator<Item = &'a String>) -> Result<Regex> {
    let mut keys: Vec<&String> = keys.collect();
    keys.sort_by(|a, b| {
        b.chars()
            .count()
            .cmp(&a.chars().count())
            .then_with(|| a.cmp(b))
    });
    let alternation = keys
        .iter()
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");
    Ok(Regex::new(&alternation)?)
}

fn parse_index(field: &str, what: &str, line: usize) -> Result<usize> {
    field.parse().map_err(|_| ShermanError::TableLine {
        line,
        message: format!("{} {:?} is not a number", what, field),
    })
}
