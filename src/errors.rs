// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Thomas Junier

use std::{error, fmt, io, path::PathBuf};

#[derive(Debug)]
pub enum EdaError {
    Io(io::Error),
    MissingDirectory(PathBuf),
    InvalidFormat(String),
}

// These allow conversion to EdaError, required for run() to return Result<()> and for '?' to
// work.

impl From<io::Error> for EdaError {
    fn from(e: io::Error) -> Self {
        EdaError::Io(e)
    }
}

impl From<String> for EdaError {
    fn from(s: String) -> Self {
        EdaError::InvalidFormat(s)
    }
}

// csv wraps I/O failures in its own error type; unwrap those so that a missing term file is
// reported the same way as a missing FastA file.
impl From<csv::Error> for EdaError {
    fn from(e: csv::Error) -> Self {
        if e.is_io_error() {
            match e.into_kind() {
                csv::ErrorKind::Io(io_err) => EdaError::Io(io_err),
                other => EdaError::InvalidFormat(format!("{:?}", other)),
            }
        } else {
            EdaError::InvalidFormat(e.to_string())
        }
    }
}

impl fmt::Display for EdaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EdaError::Io(e) => write!(f, "I/O error: {}", e),
            EdaError::MissingDirectory(path) => {
                write!(f, "Directory {} does not exist.", path.display())
            }
            EdaError::InvalidFormat(msg) => write!(f, "Format error: {}", msg),
        }
    }
}

impl error::Error for EdaError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            EdaError::Io(e) => Some(e),
            _ => None,
        }
    }
}
