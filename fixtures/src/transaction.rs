use alloy_primitives::{bytes, TxKind, U256};
use log::debug;
use nitro_common::{
    ArbTransaction, ArbTxEnvelope, Encodable2718, TxContract, TxDeposit, TxInternal, TxRetry,
    TxSubmitRetryable, TxUnsigned, Typed2718,
};
use serde::{Deserialize, Serialize};

use crate::{
    encoding::{checksum, hex_bytes, hex_hash, hex_quantity, hex_type},
    samples::*,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxFixtureFile {
    pub vectors: Vec<TxFixture>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxFixture {
    pub name: String,
    pub tx_type: String,
    pub raw: String,
    pub hash: String,
    pub expect: AccessorFixture,
}

/// What the transaction accessors return after decoding `raw`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessorFixture {
    pub from: String,
    pub to: Option<String>,
    pub nonce: u64,
    pub gas_limit: u64,
    pub value: String,
    pub input: String,
}

/// One sample per Nitro transaction type
pub fn sample_transactions() -> Vec<(&'static str, ArbTxEnvelope)> {
    let unsigned = TxUnsigned {
        chain_id: chain_id(),
        from: ADDR1,
        nonce: 7,
        gas_fee_cap: U256::from(12345u64),
        gas_limit: 21000,
        to: TxKind::Call(ADDR2),
        value: U256::from(100u64),
        input: bytes!("deadbeef"),
    };

    let contract = TxContract {
        chain_id: chain_id(),
        request_id: REQUEST_ID_1,
        from: ADDR1,
        gas_fee_cap: U256::from(12345u64),
        gas_limit: 50000,
        to: TxKind::Call(ADDR2),
        value: U256::from(1u64),
        input: bytes!("abcdef"),
    };

    let retry = TxRetry {
        chain_id: chain_id(),
        nonce: 3,
        from: ADDR1,
        gas_fee_cap: U256::from(555u64),
        gas_limit: 80000,
        to: TxKind::Call(ADDR2),
        value: U256::from(5u64),
        input: bytes!("0102"),
        ticket_id: REQUEST_ID_2,
        refund_to: ADDR3,
        max_refund: U256::from(1000u64),
        submission_fee_refund: U256::from(2000u64),
    };

    let submit = TxSubmitRetryable {
        chain_id: chain_id(),
        request_id: REQUEST_ID_1,
        from: ADDR1,
        l1_base_fee: U256::from(100u64),
        deposit_value: U256::from(200u64),
        gas_fee_cap: U256::from(300u64),
        gas_limit: 400000,
        retry_to: TxKind::Call(ADDR2),
        retry_value: U256::from(50u64),
        beneficiary: ADDR4,
        max_submission_fee: U256::from(600u64),
        fee_refund_address: ADDR5,
        retry_data: bytes!("01020304"),
    };

    let deposit = TxDeposit {
        chain_id: chain_id(),
        l1_request_id: REQUEST_ID_3,
        from: ADDR1,
        to: ADDR2,
        value: U256::from(123u64),
    };

    let internal = TxInternal::new(chain_id(), bytes!("1122334455"));

    vec![
        ("unsigned_call", unsigned.into()),
        ("contract_call", contract.into()),
        ("retry_call", retry.into()),
        ("submit_retryable", submit.into()),
        ("deposit", deposit.into()),
        ("internal", internal.into()),
    ]
}

pub fn generate_tx_fixtures() -> Vec<TxFixture> {
    sample_transactions()
        .into_iter()
        .map(|(name, tx)| tx_fixture(name, &tx))
        .collect()
}

fn tx_fixture(name: &str, tx: &ArbTxEnvelope) -> TxFixture {
    let raw = tx.encoded_2718();
    let hash = tx.tx_hash();
    debug!("{name}: type {} hash {hash} ({} bytes)", tx.tx_type(), raw.len());

    TxFixture {
        name: name.to_string(),
        tx_type: hex_type(tx.ty()),
        raw: hex_bytes(&raw),
        hash: hex_hash(hash),
        expect: AccessorFixture {
            from: checksum(tx.sender()),
            to: tx.to().map(checksum),
            nonce: tx.nonce(),
            gas_limit: tx.gas_limit(),
            value: hex_quantity(tx.value()),
            input: hex_bytes(&tx.input()),
        },
    }
}
