use std::fmt;

use serde::Serialize;

/// The four base circles, one per row of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseShape {
    DeepDivot,
    InnerCircle,
    ShallowDivot,
    EdgeCircle,
}

impl BaseShape {
    /// Row order.
    pub const ALL: [BaseShape; 4] = [
        BaseShape::DeepDivot,
        BaseShape::InnerCircle,
        BaseShape::ShallowDivot,
        BaseShape::EdgeCircle,
    ];

    pub fn from_row(row: usize) -> Option<Self> {
        Self::ALL.get(row).copied()
    }

    pub fn row(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            BaseShape::DeepDivot => "deep_divot",
            BaseShape::InnerCircle => "inner_circle",
            BaseShape::ShallowDivot => "shallow_divot",
            BaseShape::EdgeCircle => "edge_circle",
        }
    }
}

impl fmt::Display for BaseShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dot and line decorations, one per column of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    None,
    OneDot,
    TwoDots,
    ThreeDots,
    FourDots,
    ThreeLines,
    TwoLines,
    OneLine,
}

impl Modifier {
    /// Column order.
    pub const ALL: [Modifier; 8] = [
        Modifier::None,
        Modifier::OneDot,
        Modifier::TwoDots,
        Modifier::ThreeDots,
        Modifier::FourDots,
        Modifier::ThreeLines,
        Modifier::TwoLines,
        Modifier::OneLine,
    ];

    pub fn from_column(column: usize) -> Option<Self> {
        Self::ALL.get(column).copied()
    }

    pub fn column(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Modifier::None => "none",
            Modifier::OneDot => "one_dot",
            Modifier::TwoDots => "two_dots",
            Modifier::ThreeDots => "three_dots",
            Modifier::FourDots => "four_dots",
            Modifier::ThreeLines => "three_lines",
            Modifier::TwoLines => "two_lines",
            Modifier::OneLine => "one_line",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A base shape with its modifier.
///
/// `Pattern::default()` is the fallback for tokens a table does not know:
/// the first row and the first column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pattern {
    pub base_shape: BaseShape,
    pub modifier: Modifier,
}

impl Pattern {
    pub const DEFAULT: Pattern = Pattern {
        base_shape: BaseShape::DeepDivot,
        modifier: Modifier::None,
    };

    pub fn new(base_shape: BaseShape, modifier: Modifier) -> Self {
        Pattern {
            base_shape,
            modifier,
        }
    }

    /// Grid cell lookup; `None` when either index is off the grid.
    pub fn at(row: usize, column: usize) -> Option<Self> {
        Some(Pattern::new(
            BaseShape::from_row(row)?,
            Modifier::from_column(column)?,
        ))
    }
}

impl Default for Pattern {
    fn default() -> Self {
        Pattern::DEFAULT
    }
}

/// A recognized letter or digraph, always lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub(crate) fn new(text: impl Into<String>) -> Self {
        Token(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Token {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Token {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A token together with the pattern it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub token: Token,
    #[serde(flatten)]
    pub pattern: Pattern,
}
