//! Nitro block metadata carried in standard header fields.
//!
//! Nitro reuses two Ethereum header fields instead of extending the header:
//! - `extra_data` holds the send root (exactly 32 bytes)
//! - `mix_hash` holds, big-endian, the send count in bytes `0..8`, the L1
//!   block number in `8..16` and the ArbOS format version in `16..24`
//!
//! A header is only read as a Nitro header when it also has a non-zero base
//! fee and a difficulty of exactly 1.

use alloy_consensus::Header;
use alloy_primitives::{Bytes, B256, U256};
use serde::{Deserialize, Serialize};

use crate::error::HeaderInfoError;

pub const ARB_HEADER_EXTRA_DATA_LEN: usize = 32;
pub const ARB_HEADER_MIX_HASH_LEN: usize = 32;
/// Bytes of `mix_hash` that carry metadata, the rest is zero
pub const ARB_HEADER_MIX_HASH_INFO_LEN: usize = 8 + 8 + 8;
/// `extra_data || mix_hash[..24]`
pub const ARB_HEADER_PACKED_LEN: usize = ARB_HEADER_EXTRA_DATA_LEN + ARB_HEADER_MIX_HASH_INFO_LEN;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArbHeaderInfo {
    /// Merkle root of the outbox send accumulator
    pub send_root: B256,
    pub send_count: u64,
    /// L1 block number ArbOS observed for this L2 block
    pub l1_block_number: u64,
    pub arbos_format_version: u64,
}

impl ArbHeaderInfo {
    pub const fn is_arbitrum(&self) -> bool {
        self.arbos_format_version > 0
    }

    pub fn encode_extra_data(&self) -> Bytes {
        Bytes::copy_from_slice(self.send_root.as_slice())
    }

    pub fn encode_mix_hash(&self) -> B256 {
        let mut out = [0u8; ARB_HEADER_MIX_HASH_LEN];
        out[..8].copy_from_slice(&self.send_count.to_be_bytes());
        out[8..16].copy_from_slice(&self.l1_block_number.to_be_bytes());
        out[16..24].copy_from_slice(&self.arbos_format_version.to_be_bytes());
        B256::from(out)
    }

    /// Writes this info into `extra_data` and `mix_hash`, other fields are untouched
    pub fn update_header(&self, header: &mut Header) {
        header.extra_data = self.encode_extra_data();
        header.mix_hash = self.encode_mix_hash();
    }

    /// Decodes the raw field bytes, without the base fee and difficulty checks
    pub fn decode_header_parts(
        extra_data: &[u8],
        mix_hash: &[u8],
    ) -> Result<Self, HeaderInfoError> {
        if extra_data.len() != ARB_HEADER_EXTRA_DATA_LEN {
            return Err(HeaderInfoError::InvalidExtraDataLength {
                got: extra_data.len(),
            });
        }
        if mix_hash.len() != ARB_HEADER_MIX_HASH_LEN {
            return Err(HeaderInfoError::InvalidMixHashLength {
                got: mix_hash.len(),
            });
        }

        Ok(Self {
            send_root: B256::from_slice(extra_data),
            send_count: read_u64(&mix_hash[..8]),
            l1_block_number: read_u64(&mix_hash[8..16]),
            arbos_format_version: read_u64(&mix_hash[16..24]),
        })
    }

    pub fn decode_header(header: &Header) -> Result<Self, HeaderInfoError> {
        match header.base_fee_per_gas {
            None | Some(0) => return Err(HeaderInfoError::MissingBaseFee),
            Some(_) => {}
        }
        if header.difficulty != U256::from(1) {
            return Err(HeaderInfoError::InvalidDifficulty(header.difficulty));
        }

        Self::decode_header_parts(header.extra_data.as_ref(), header.mix_hash.as_slice())
    }

    pub fn encode_packed(&self) -> Bytes {
        let mut out = Vec::with_capacity(ARB_HEADER_PACKED_LEN);
        out.extend_from_slice(self.send_root.as_slice());
        out.extend_from_slice(&self.encode_mix_hash()[..ARB_HEADER_MIX_HASH_INFO_LEN]);
        out.into()
    }

    pub fn decode_packed(packed: &[u8]) -> Result<Self, HeaderInfoError> {
        if packed.len() != ARB_HEADER_PACKED_LEN {
            return Err(HeaderInfoError::InvalidPackedLength { got: packed.len() });
        }

        let mut mix_hash = [0u8; ARB_HEADER_MIX_HASH_LEN];
        mix_hash[..ARB_HEADER_MIX_HASH_INFO_LEN]
            .copy_from_slice(&packed[ARB_HEADER_EXTRA_DATA_LEN..]);
        Self::decode_header_parts(&packed[..ARB_HEADER_EXTRA_DATA_LEN], &mix_hash)
    }

    /// L1 block number of a parent header, which must be a Nitro header
    pub fn parent_l1_block_number(header: &Header) -> Result<u64, HeaderInfoError> {
        let info = Self::decode_header(header)?;
        if !info.is_arbitrum() {
            return Err(HeaderInfoError::NotArbitrum);
        }
        Ok(info.l1_block_number)
    }
}

fn read_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf.copy_from_slice(bytes);
    u64::from_be_bytes(buf)
}
