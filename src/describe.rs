use clap::ValueEnum;

use crate::error::Result;
use crate::pattern::Symbol;

/// Output layout for a translated text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// `Token 'th': base=edge_circle, modifier=none`
    #[default]
    Text,
    /// One JSON object per token.
    Json,
}

/// One line per symbol, in order, repeats kept. No trailing newline.
pub fn describe(symbols: &[Symbol]) -> String {
    symbols
        .iter()
        .map(describe_symbol)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn describe_symbol(symbol: &Symbol) -> String {
    format!(
        "Token '{}': base={}, modifier={}",
        symbol.token, symbol.pattern.base_shape, symbol.pattern.modifier
    )
}

/// Renders `symbols` in the requested format.
pub fn render(symbols: &[Symbol], format: Format) -> Result<String> {
    match format {
        Format::Text => Ok(describe(symbols)),
        Format::Json => {
            let lines = symbols
                .iter()
                .map(serde_json::to_string)
                .collect::<std::result::Result<Vec<_>, _>>()?;
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::TokenTable;

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(describe(&[]), "");
        assert_eq!(render(&[], Format::Json).unwrap(), "");
    }

    #[test]
    fn one_line_per_token_with_repeats() {
        let symbols = TokenTable::builtin().translate("baba");
        let text = describe(&symbols);
        assert_eq!(text.lines().count(), 4);
        assert_eq!(
            text,
            "Token 'b': base=deep_divot, modifier=none\n\
             Token 'a': base=deep_divot, modifier=one_dot\n\
             Token 'b': base=deep_divot, modifier=none\n\
             Token 'a': base=deep_divot, modifier=one_dot"
        );
    }

    #[test]
    fn json_lines() {
        let symbols = TokenTable::builtin().translate("Qu!");
        let out = render(&symbols, Format::Json).unwrap();
        assert_eq!(
            out,
            r#"{"token":"qu","base_shape":"edge_circle","modifier":"one_line"}"#
        );
    }
}
