use alloy_consensus::Header;
use alloy_primitives::{B256, U256};
use log::debug;
use nitro_common::ArbHeaderInfo;
use serde::{Deserialize, Serialize};

use crate::{
    encoding::{hex_bytes, hex_hash},
    error::FixtureError,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderFixtureFile {
    pub vectors: Vec<HeaderFixture>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderFixture {
    pub name: String,
    pub extra_data: String,
    pub mix_hash: String,
    pub expect: HeaderExpect,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderExpect {
    pub send_root: String,
    pub send_count: u64,
    pub l1_block_number: u64,
    pub arbos_format_version: u64,
}

impl From<&ArbHeaderInfo> for HeaderExpect {
    fn from(info: &ArbHeaderInfo) -> Self {
        Self {
            send_root: hex_hash(info.send_root),
            send_count: info.send_count,
            l1_block_number: info.l1_block_number,
            arbos_format_version: info.arbos_format_version,
        }
    }
}

pub fn sample_header_infos() -> Vec<(&'static str, ArbHeaderInfo)> {
    vec![
        (
            "header_basic",
            ArbHeaderInfo {
                send_root: B256::repeat_byte(0x11),
                send_count: 42,
                l1_block_number: 99_001,
                arbos_format_version: 32,
            },
        ),
        (
            "header_non_arbitrum",
            ArbHeaderInfo {
                send_root: B256::repeat_byte(0xaa),
                send_count: 1,
                l1_block_number: 8_888_888,
                arbos_format_version: 0,
            },
        ),
        (
            "header_large_values",
            ArbHeaderInfo {
                send_root: B256::repeat_byte(0xff),
                send_count: u64::MAX,
                l1_block_number: u64::MAX - 1,
                arbos_format_version: 50,
            },
        ),
    ]
}

/// Header shell Nitro accepts for decoding: base fee set, difficulty 1
fn nitro_header() -> Header {
    Header {
        base_fee_per_gas: Some(1),
        difficulty: U256::from(1),
        ..Default::default()
    }
}

/// Packs every sample into a header and fails unless it decodes back unchanged
pub fn generate_header_fixtures() -> Result<Vec<HeaderFixture>, FixtureError> {
    sample_header_infos()
        .into_iter()
        .map(|(name, info)| header_fixture(name, &info, nitro_header()))
        .collect()
}

/// Packs `info` into `header` and checks it decodes back unchanged
fn header_fixture(
    name: &str,
    info: &ArbHeaderInfo,
    mut header: Header,
) -> Result<HeaderFixture, FixtureError> {
    info.update_header(&mut header);

    let decoded =
        ArbHeaderInfo::decode_header(&header).map_err(|source| FixtureError::HeaderDecode {
            name: name.to_string(),
            source,
        })?;
    if decoded != *info {
        return Err(FixtureError::HeaderRoundTrip {
            name: name.to_string(),
        });
    }
    debug!("{name}: header info roundtrip ok (arbitrum: {})", info.is_arbitrum());

    Ok(HeaderFixture {
        name: name.to_string(),
        extra_data: hex_bytes(&header.extra_data),
        mix_hash: hex_hash(header.mix_hash),
        expect: info.into(),
    })
}
