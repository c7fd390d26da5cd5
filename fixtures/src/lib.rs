//! Fixture generator for Arbitrum Nitro wire formats.
//!
//! Builds a fixed set of transactions, receipts and header infos, encodes
//! them through [`nitro_common`] and records what a decoder is expected to
//! read back. The resulting JSON files feed decoder test suites written
//! against the same formats.

pub mod cli;
pub mod error;
pub mod header;
pub mod output;
pub mod receipt;
pub mod samples;
pub mod transaction;
pub mod verify;

mod encoding;

pub use error::{FixtureError, VerifyError};
pub use header::{generate_header_fixtures, HeaderExpect, HeaderFixture, HeaderFixtureFile};
pub use output::{read_json, write_json, FixturePaths};
pub use receipt::{
    generate_receipt_fixtures, ReceiptAccessorFixture, ReceiptFixture, ReceiptFixtureFile,
};
pub use transaction::{generate_tx_fixtures, AccessorFixture, TxFixture, TxFixtureFile};
