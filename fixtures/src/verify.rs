//! Re-decodes fixture files through `nitro_common` and checks every recorded
//! expectation, the same way a downstream decoder suite consumes them.

use std::fmt;

use alloy_primitives::{B256, U256};
use nitro_common::{
    ArbHeaderInfo, ArbReceiptEnvelope, ArbTransaction, ArbTxEnvelope, Decodable2718,
    Encodable2718, Typed2718,
};

use crate::{
    encoding::{checksum, hex_bytes, hex_hash, hex_quantity, hex_type},
    error::VerifyError,
    HeaderExpect, HeaderFixture, HeaderFixtureFile, ReceiptFixture, ReceiptFixtureFile,
    TxFixture, TxFixtureFile,
};

/// Returns the number of vectors checked
pub fn verify_tx_fixtures(file: &TxFixtureFile) -> Result<usize, VerifyError> {
    for fixture in &file.vectors {
        verify_tx(fixture)?;
    }
    Ok(file.vectors.len())
}

pub fn verify_receipt_fixtures(file: &ReceiptFixtureFile) -> Result<usize, VerifyError> {
    for fixture in &file.vectors {
        verify_receipt(fixture)?;
    }
    Ok(file.vectors.len())
}

pub fn verify_header_fixtures(file: &HeaderFixtureFile) -> Result<usize, VerifyError> {
    for fixture in &file.vectors {
        verify_header(fixture)?;
    }
    Ok(file.vectors.len())
}

fn verify_tx(fixture: &TxFixture) -> Result<(), VerifyError> {
    let name = fixture.name.as_str();
    let raw = parse_hex(name, "raw", &fixture.raw)?;
    let tx_type = parse_type(name, "tx_type", &fixture.tx_type)?;
    let hash = parse_hash(name, "hash", &fixture.hash)?;

    let mut buf = raw.as_slice();
    let tx = ArbTxEnvelope::decode_2718(&mut buf).map_err(|source| VerifyError::Decode {
        name: name.to_string(),
        source,
    })?;
    ensure_consumed(name, buf)?;

    check(name, "tx_type", hex_type(tx_type), hex_type(tx.ty()))?;
    check(name, "raw", hex_bytes(&raw), hex_bytes(&tx.encoded_2718()))?;
    check(name, "hash", hash, tx.tx_hash())?;

    let expect = &fixture.expect;
    let value = parse_quantity(name, "value", &expect.value)?;
    check(name, "from", expect.from.clone(), checksum(tx.sender()))?;
    check(name, "to", expect.to.clone(), tx.to().map(checksum))?;
    check(name, "nonce", expect.nonce, tx.nonce())?;
    check(name, "gas_limit", expect.gas_limit, tx.gas_limit())?;
    check(name, "value", hex_quantity(value), hex_quantity(tx.value()))?;

    let input = parse_hex(name, "input", &expect.input)?;
    check(name, "input", hex_bytes(&input), hex_bytes(&tx.input()))
}

fn verify_receipt(fixture: &ReceiptFixture) -> Result<(), VerifyError> {
    let name = fixture.name.as_str();
    let raw = parse_hex(name, "raw", &fixture.raw)?;
    let receipt_type = parse_type(name, "receipt_type", &fixture.receipt_type)?;

    let mut buf = raw.as_slice();
    let receipt =
        ArbReceiptEnvelope::decode_2718(&mut buf).map_err(|source| VerifyError::Decode {
            name: name.to_string(),
            source,
        })?;
    ensure_consumed(name, buf)?;

    check(name, "receipt_type", hex_type(receipt_type), hex_type(receipt.ty()))?;
    check(name, "raw", hex_bytes(&raw), hex_bytes(&receipt.encoded_2718()))?;

    let expect = &fixture.expect;
    check(name, "status", expect.status, receipt.status())?;
    check(
        name,
        "cumulative_gas_used",
        expect.cumulative_gas_used,
        receipt.cumulative_gas_used(),
    )?;
    check(name, "gas_used_for_l1", expect.gas_used_for_l1, receipt.gas_used_for_l1())?;
    check(name, "logs_len", expect.logs_len, receipt.logs().len())
}

fn verify_header(fixture: &HeaderFixture) -> Result<(), VerifyError> {
    let name = fixture.name.as_str();
    let extra_data = parse_hex(name, "extra_data", &fixture.extra_data)?;
    let mix_hash = parse_hex(name, "mix_hash", &fixture.mix_hash)?;

    let info = ArbHeaderInfo::decode_header_parts(&extra_data, &mix_hash).map_err(|source| {
        VerifyError::HeaderDecode {
            name: name.to_string(),
            source,
        }
    })?;

    let expect = &fixture.expect;
    let actual = HeaderExpect::from(&info);
    let send_root = parse_hash(name, "send_root", &expect.send_root)?;
    check(name, "send_root", hex_hash(send_root), actual.send_root)?;
    check(name, "send_count", expect.send_count, actual.send_count)?;
    check(name, "l1_block_number", expect.l1_block_number, actual.l1_block_number)?;
    check(
        name,
        "arbos_format_version",
        expect.arbos_format_version,
        actual.arbos_format_version,
    )?;

    // the unused tail of mix_hash must stay zero
    check(name, "extra_data", hex_bytes(&extra_data), hex_bytes(&info.encode_extra_data()))?;
    check(name, "mix_hash", hex_bytes(&mix_hash), hex_hash(info.encode_mix_hash()))
}

fn check<T: PartialEq + fmt::Debug>(
    name: &str,
    field: &'static str,
    expected: T,
    actual: T,
) -> Result<(), VerifyError> {
    if expected == actual {
        return Ok(());
    }
    Err(VerifyError::Mismatch {
        name: name.to_string(),
        field,
        expected: format!("{expected:?}"),
        actual: format!("{actual:?}"),
    })
}

fn ensure_consumed(name: &str, buf: &[u8]) -> Result<(), VerifyError> {
    if buf.is_empty() {
        return Ok(());
    }
    Err(VerifyError::TrailingBytes {
        name: name.to_string(),
        remaining: buf.len(),
    })
}

fn parse_hex(name: &str, field: &'static str, value: &str) -> Result<Vec<u8>, VerifyError> {
    hex::decode(value.strip_prefix("0x").unwrap_or(value)).map_err(|source| VerifyError::Hex {
        name: name.to_string(),
        field,
        source,
    })
}

fn parse_error(name: &str, field: &'static str, value: &str) -> VerifyError {
    VerifyError::Parse {
        name: name.to_string(),
        field,
        value: value.to_string(),
    }
}

fn parse_type(name: &str, field: &'static str, value: &str) -> Result<u8, VerifyError> {
    let digits = value.strip_prefix("0x").unwrap_or(value);
    u8::from_str_radix(digits, 16).map_err(|_| parse_error(name, field, value))
}

fn parse_hash(name: &str, field: &'static str, value: &str) -> Result<B256, VerifyError> {
    value.parse().map_err(|_| parse_error(name, field, value))
}

fn parse_quantity(name: &str, field: &'static str, value: &str) -> Result<U256, VerifyError> {
    let digits = value
        .strip_prefix("0x")
        .ok_or_else(|| parse_error(name, field, value))?;
    U256::from_str_radix(digits, 16).map_err(|_| parse_error(name, field, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{generate_header_fixtures, generate_receipt_fixtures, generate_tx_fixtures};

    fn tx_file() -> TxFixtureFile {
        TxFixtureFile {
            vectors: generate_tx_fixtures(),
        }
    }

    fn mismatch_field(err: VerifyError) -> &'static str {
        match err {
            VerifyError::Mismatch { field, .. } => field,
            other => panic!("expected mismatch, got {other}"),
        }
    }

    #[test]
    fn test_generated_fixtures_verify() {
        assert_eq!(verify_tx_fixtures(&tx_file()).unwrap(), 6);

        let receipts = ReceiptFixtureFile {
            vectors: generate_receipt_fixtures(),
        };
        assert_eq!(verify_receipt_fixtures(&receipts).unwrap(), 8);

        let headers = HeaderFixtureFile {
            vectors: generate_header_fixtures().unwrap(),
        };
        assert_eq!(verify_header_fixtures(&headers).unwrap(), 3);
    }

    #[test]
    fn test_tampered_tx_expectations() {
        let mut file = tx_file();
        file.vectors[0].hash = format!("0x{}", "00".repeat(32));
        assert_eq!(mismatch_field(verify_tx_fixtures(&file).unwrap_err()), "hash");

        let mut file = tx_file();
        file.vectors[1].expect.nonce = 9;
        assert_eq!(mismatch_field(verify_tx_fixtures(&file).unwrap_err()), "nonce");

        let mut file = tx_file();
        file.vectors[4].expect.to = None;
        assert_eq!(mismatch_field(verify_tx_fixtures(&file).unwrap_err()), "to");

        let mut file = tx_file();
        file.vectors[2].tx_type = "0x65".to_string();
        assert_eq!(mismatch_field(verify_tx_fixtures(&file).unwrap_err()), "tx_type");
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut file = tx_file();
        file.vectors[5].raw.push_str("00");
        let err = verify_tx_fixtures(&file).unwrap_err();
        assert!(matches!(err, VerifyError::TrailingBytes { remaining: 1, .. }));
    }

    #[test]
    fn test_bad_hex_and_values() {
        let mut file = tx_file();
        file.vectors[0].raw = "0xzz".to_string();
        let err = verify_tx_fixtures(&file).unwrap_err();
        assert!(matches!(err, VerifyError::Hex { field: "raw", .. }));

        let mut file = tx_file();
        file.vectors[0].expect.value = "100".to_string();
        let err = verify_tx_fixtures(&file).unwrap_err();
        assert!(matches!(err, VerifyError::Parse { field: "value", .. }));
    }

    #[test]
    fn test_receipt_mismatch() {
        let mut file = ReceiptFixtureFile {
            vectors: generate_receipt_fixtures(),
        };
        file.vectors[1].expect.logs_len = 0;
        assert_eq!(
            mismatch_field(verify_receipt_fixtures(&file).unwrap_err()),
            "logs_len"
        );
    }

    #[test]
    fn test_header_mix_hash_tail_must_be_zero() {
        let mut file = HeaderFixtureFile {
            vectors: generate_header_fixtures().unwrap(),
        };
        let mix_hash = &mut file.vectors[0].mix_hash;
        let last = mix_hash.len() - 2;
        mix_hash.replace_range(last.., "01");
        assert_eq!(
            mismatch_field(verify_header_fixtures(&file).unwrap_err()),
            "mix_hash"
        );

        let mut file = HeaderFixtureFile {
            vectors: generate_header_fixtures().unwrap(),
        };
        file.vectors[0].extra_data = "0x1111".to_string();
        let err = verify_header_fixtures(&file).unwrap_err();
        assert!(matches!(err, VerifyError::HeaderDecode { .. }));
    }
}
