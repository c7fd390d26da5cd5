use alloy_primitives::U256;
use thiserror::Error;

use crate::header::{ARB_HEADER_EXTRA_DATA_LEN, ARB_HEADER_MIX_HASH_LEN, ARB_HEADER_PACKED_LEN};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeaderInfoError {
    /// extra_data is not exactly 32 bytes
    #[error("Invalid extra_data length: got {got}, expected {ARB_HEADER_EXTRA_DATA_LEN}")]
    InvalidExtraDataLength { got: usize },

    /// mix_hash is not exactly 32 bytes
    #[error("Invalid mix_hash length: got {got}, expected {ARB_HEADER_MIX_HASH_LEN}")]
    InvalidMixHashLength { got: usize },

    /// Packed form is not 56 bytes
    #[error("Invalid packed header info length: got {got}, expected {ARB_HEADER_PACKED_LEN}")]
    InvalidPackedLength { got: usize },

    /// Base fee absent or zero
    #[error("Header has no base fee, not a Nitro header")]
    MissingBaseFee,

    /// Difficulty other than 1
    #[error("Header difficulty must be 1, got {0}")]
    InvalidDifficulty(U256),

    /// Header info with a zero ArbOS format version where a Nitro parent is required
    #[error("Header has arbos_format_version 0, not an Arbitrum header")]
    NotArbitrum,
}
