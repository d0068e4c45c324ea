use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use glob::glob;
use log::{debug, warn};

use crate::error::{Result, ShermanError};

/// Resolves a WHATWG encoding label such as `utf-8`, `latin1` or `shift_jis`.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| ShermanError::UnknownEncoding(label.to_string()))
}

/// Expands each pattern with `glob`, keeping pattern order.
///
/// Only regular files are kept. A pattern left with no files is an error;
/// directories and unreadable entries are skipped.
pub fn expand_inputs<S: AsRef<str>>(patterns: &[S]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for pattern in patterns {
        let pattern = pattern.as_ref();
        let before = paths.len();
        for entry in glob(pattern)? {
            match entry {
                Ok(path) if path.is_file() => paths.push(path),
                Ok(path) => debug!("skipping {}: not a regular file", path.display()),
                Err(e) => warn!("skipping {}: {}", e.path().display(), e.error()),
            }
        }
        if paths.len() == before {
            return Err(ShermanError::NoMatches(pattern.to_string()));
        }
        debug!("{} matched {} file(s)", pattern, paths.len() - before);
    }
    Ok(paths)
}

/// Reads a file and decodes it. A byte order mark overrides `encoding`.
pub fn read_text(path: &Path, encoding: &'static Encoding) -> Result<String> {
    let file = File::open(path).map_err(|e| ShermanError::io(path, e))?;
    let mut reader = BufReader::new(file);
    let mut buffer = Vec::new();
    reader
        .read_to_end(&mut buffer)
        .map_err(|e| ShermanError::io(path, e))?;

    let (decoded, used, had_errors) = encoding.decode(&buffer);
    if had_errors {
        warn!(
            "{}: malformed {} sequences replaced",
            path.display(),
            used.name()
        );
    }
    Ok(decoded.into_owned())
}
