use std::{io, path::PathBuf};

use nitro_common::{Eip2718Error, HeaderInfoError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixtureError {
    /// Decoded header info differs from the sample it was packed from
    #[error("Header info roundtrip mismatch for {name}")]
    HeaderRoundTrip { name: String },

    /// Packed header could not be read back
    #[error("Header info decode failed for {name}: {source}")]
    HeaderDecode {
        name: String,
        #[source]
        source: HeaderInfoError,
    },

    /// Fixture file serialization or parsing failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem operation failed on `path`
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// First problem found while checking a fixture file, tagged with the vector name
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Field is not valid hex
    #[error("{name}: invalid hex in {field}: {source}")]
    Hex {
        name: String,
        field: &'static str,
        #[source]
        source: hex::FromHexError,
    },

    /// Field does not parse as its expected type
    #[error("{name}: invalid {field} value '{value}'")]
    Parse {
        name: String,
        field: &'static str,
        value: String,
    },

    /// Raw bytes are not a valid envelope
    #[error("{name}: decode failed: {source}")]
    Decode {
        name: String,
        #[source]
        source: Eip2718Error,
    },

    /// extra_data or mix_hash has the wrong length
    #[error("{name}: header info decode failed: {source}")]
    HeaderDecode {
        name: String,
        #[source]
        source: HeaderInfoError,
    },

    /// Bytes left over after decoding raw
    #[error("{name}: {remaining} trailing bytes after decode")]
    TrailingBytes { name: String, remaining: usize },

    /// Decoded value differs from the recorded expectation
    #[error("{name}: {field} mismatch, expected {expected}, got {actual}")]
    Mismatch {
        name: String,
        field: &'static str,
        expected: String,
        actual: String,
    },
}
