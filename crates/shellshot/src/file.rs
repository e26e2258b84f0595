// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Whole-file reads for comparing file contents.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::expect::Expectation;
use crate::Error;

/// How file bytes are decoded into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Strict UTF-8. Invalid bytes are an error.
    #[default]
    Utf8,
    /// UTF-8 with invalid sequences replaced by U+FFFD.
    Utf8Lossy,
    /// ISO-8859-1: every byte maps to the code point of the same value.
    Latin1,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Utf8Lossy => "utf-8 (lossy)",
            Encoding::Latin1 => "latin1",
        })
    }
}

/// Read the whole file at `path` and decode it.
pub fn read_to_string(path: impl AsRef<Path>, encoding: Encoding) -> Result<String, Error> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::ReadFailed {
        path: path.to_path_buf(),
        source: Arc::new(source),
    })?;

    match encoding {
        Encoding::Utf8 => String::from_utf8(bytes).map_err(|_| Error::Decode {
            path: path.to_path_buf(),
            encoding,
        }),
        Encoding::Utf8Lossy => Ok(String::from_utf8_lossy(&bytes).into_owned()),
        Encoding::Latin1 => Ok(bytes.iter().map(|&b| char::from(b)).collect()),
    }
}

/// Read a file and wrap its text for comparison.
pub fn expect_file(
    path: impl AsRef<Path>,
    encoding: Encoding,
) -> Result<Expectation<String>, Error> {
    read_to_string(path, encoding).map(Expectation::new)
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
