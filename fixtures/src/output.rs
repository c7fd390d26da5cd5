use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::FixtureError, generate_header_fixtures, generate_receipt_fixtures,
    generate_tx_fixtures, HeaderFixtureFile, ReceiptFixtureFile, TxFixtureFile,
};

/// Writes `value` as 2-space indented JSON with a single trailing newline,
/// creating missing parent directories
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), FixtureError> {
    let mut json = serde_json::to_string_pretty(value)?;
    if !json.ends_with('\n') {
        json.push('\n');
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| FixtureError::Io {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    fs::write(path, json).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let data = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&data)?)
}

/// Where each fixture collection goes, receipts and headers are opt-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixturePaths {
    pub tx_out: PathBuf,
    pub receipt_out: Option<PathBuf>,
    pub header_out: Option<PathBuf>,
}

impl FixturePaths {
    pub fn new(tx_out: impl Into<PathBuf>) -> Self {
        Self {
            tx_out: tx_out.into(),
            receipt_out: None,
            header_out: None,
        }
    }

    /// Generates and writes every requested collection.
    ///
    /// Headers are checked before anything is written, so a failed header
    /// roundtrip leaves no files behind from this run.
    pub fn write_all(&self) -> Result<(), FixtureError> {
        let headers = match &self.header_out {
            Some(_) => Some(HeaderFixtureFile {
                vectors: generate_header_fixtures()?,
            }),
            None => None,
        };

        let txs = TxFixtureFile {
            vectors: generate_tx_fixtures(),
        };
        write_json(&self.tx_out, &txs)?;
        info!(
            "Wrote {} tx vectors to {}",
            txs.vectors.len(),
            self.tx_out.display()
        );

        if let Some(path) = &self.receipt_out {
            let receipts = ReceiptFixtureFile {
                vectors: generate_receipt_fixtures(),
            };
            write_json(path, &receipts)?;
            info!(
                "Wrote {} receipt vectors to {}",
                receipts.vectors.len(),
                path.display()
            );
        }

        if let (Some(path), Some(headers)) = (&self.header_out, headers) {
            write_json(path, &headers)?;
            info!(
                "Wrote {} header vectors to {}",
                headers.vectors.len(),
                path.display()
            );
        }

        Ok(())
    }
}
