use alloy_primitives::{bytes, Log};
use log::debug;
use nitro_common::{ArbReceiptEnvelope, ArbTxType, Encodable2718, Typed2718};
use serde::{Deserialize, Serialize};

use crate::{
    encoding::{hex_bytes, hex_type},
    samples::{ADDR1, LOG_TOPIC},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptFixtureFile {
    pub vectors: Vec<ReceiptFixture>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptFixture {
    pub name: String,
    pub receipt_type: String,
    pub raw: String,
    pub expect: ReceiptAccessorFixture,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptAccessorFixture {
    pub status: bool,
    pub cumulative_gas_used: u64,
    pub gas_used_for_l1: u64,
    pub logs_len: usize,
}

fn sample_logs() -> Vec<Log> {
    vec![Log::new_unchecked(
        ADDR1,
        vec![LOG_TOPIC],
        bytes!("deadbeef"),
    )]
}

/// Receipts across type tags, both statuses, with and without logs
pub fn sample_receipts() -> Vec<(&'static str, ArbReceiptEnvelope)> {
    let samples = [
        ("legacy_success", ArbTxType::Legacy, true, 21_000, false),
        ("eip1559_failed", ArbTxType::Eip1559, false, 42_000, true),
        ("deposit_success", ArbTxType::Deposit, true, 63_000, false),
        ("unsigned_success", ArbTxType::Unsigned, true, 84_000, false),
        ("contract_failed", ArbTxType::Contract, false, 105_000, false),
        ("retry_success", ArbTxType::Retry, true, 126_000, true),
        ("submit_retryable_success", ArbTxType::SubmitRetryable, true, 147_000, false),
        ("internal_success", ArbTxType::Internal, true, 168_000, false),
    ];

    samples
        .into_iter()
        .map(|(name, tx_type, status, cumulative_gas_used, with_logs)| {
            let logs = if with_logs { sample_logs() } else { Vec::new() };
            let receipt = ArbReceiptEnvelope::new(tx_type, status, cumulative_gas_used, logs);
            (name, receipt)
        })
        .collect()
}

pub fn generate_receipt_fixtures() -> Vec<ReceiptFixture> {
    sample_receipts()
        .into_iter()
        .map(|(name, receipt)| receipt_fixture(name, &receipt))
        .collect()
}

fn receipt_fixture(name: &str, receipt: &ArbReceiptEnvelope) -> ReceiptFixture {
    let raw = receipt.encoded_2718();
    debug!("{name}: type {} ({} bytes)", receipt.tx_type(), raw.len());

    ReceiptFixture {
        name: name.to_string(),
        receipt_type: hex_type(receipt.ty()),
        raw: hex_bytes(&raw),
        expect: ReceiptAccessorFixture {
            status: receipt.status(),
            cumulative_gas_used: receipt.cumulative_gas_used(),
            gas_used_for_l1: receipt.gas_used_for_l1(),
            logs_len: receipt.logs().len(),
        },
    }
}
