use std::fs;
use std::num::ParseFloatError;
use std::path::{Path, PathBuf};

use thiserror::Error;

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Ways a single segment file can fail to load.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: no first line to read", path.display())]
    Empty { path: PathBuf },

    #[error("{}: token {index} ({token:?}) is not a float", path.display())]
    BadToken {
        path: PathBuf,
        index: usize,
        token: String,
        source: ParseFloatError,
    },
}

// ---------------------------------------------------------------------------
// Segment file reader
// ---------------------------------------------------------------------------

/// Read the sample sequence from one segment file.
///
/// Segment layout: one meaningful line of floats separated by a single
/// space each (`0.5 1.2 -0.3`). Only the first line is read; surrounding
/// whitespace is stripped before splitting. The separator is exactly one
/// `' '` — a tab or a doubled space leaves a token that fails the float
/// parse.
pub fn read_samples(path: &Path) -> Result<Vec<f64>, LoadError> {
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let line = text.lines().next().ok_or_else(|| LoadError::Empty {
        path: path.to_path_buf(),
    })?;

    line.trim()
        .split(' ')
        .enumerate()
        .map(|(index, token)| {
            token.parse::<f64>().map_err(|source| LoadError::BadToken {
                path: path.to_path_buf(),
                index,
                token: token.to_string(),
                source,
            })
        })
        .collect()
}
