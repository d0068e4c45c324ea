use std::borrow::Cow;
use std::path::PathBuf;

use encoding_rs::{Encoding, UTF_8};

use crate::describe::Format;
use crate::error::Result;
use crate::table::TokenTable;

/// Settings assembled by the CLI from flags and environment.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Custom table file; the built-in grid when `None`.
    pub table: Option<PathBuf>,

    /// Encoding for files read with `--file`.
    pub encoding: &'static Encoding,

    pub format: Format,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: None,
            encoding: UTF_8,
            format: Format::Text,
        }
    }
}

impl Config {
    /// The table to translate with. Loads the custom table from disk on each call.
    pub fn table(&self) -> Result<Cow<'static, TokenTable>> {
        match &self.table {
            Some(path) => Ok(Cow::Owned(TokenTable::load(path)?)),
            None => Ok(Cow::Borrowed(TokenTable::builtin())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn defaults_use_builtin_grid() {
        let config = Config::default();
        assert_eq!(config.encoding, UTF_8);
        assert_eq!(config.format, Format::Text);
        assert_eq!(config.table().unwrap().len(), 32);
    }

    #[test]
    fn custom_table_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("table.csv");
        fs::write(&path, "a,0,1\nth,3,0\n").unwrap();

        let config = Config {
            table: Some(path),
            ..Config::default()
        };
        let table = config.table().unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.contains("th"));
    }

    #[test]
    fn missing_table_file_fails() {
        let config = Config {
            table: Some(PathBuf::from("/nonexistent/sherman/table.csv")),
            ..Config::default()
        };
        assert!(config.table().is_err());
    }
}
