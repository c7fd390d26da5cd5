//! Arbitrum Nitro consensus types.
//!
//! Transaction bodies and their EIP-2718 envelope, receipt envelope, and the
//! header info that Nitro packs into `extra_data` / `mix_hash`. Encoding,
//! hashing and bloom construction are delegated to the alloy crates.

pub mod error;
pub mod header;
pub mod receipt;
pub mod transaction;

pub use error::HeaderInfoError;
pub use header::ArbHeaderInfo;
pub use receipt::ArbReceiptEnvelope;
pub use transaction::{
    ArbTransaction, ArbTxEnvelope, ArbTxType, TxContract, TxDeposit, TxInternal, TxRetry,
    TxSubmitRetryable, TxUnsigned,
};

// Re-exported so downstream crates decode with the same trait versions
pub use alloy_eips::eip2718::{Decodable2718, Eip2718Error, Encodable2718, Typed2718};
