use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};
use serde::{Deserialize, Serialize};

use super::{ArbTransaction, ArbTxType};

/// Redeem attempt of a retryable ticket (`0x68`)
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxRetry {
    pub chain_id: U256,
    pub nonce: u64,
    pub from: Address,
    pub gas_fee_cap: U256,
    pub gas_limit: u64,
    pub to: TxKind,
    pub value: U256,
    pub input: Bytes,
    pub ticket_id: B256,
    pub refund_to: Address,
    pub max_refund: U256,
    pub submission_fee_refund: U256,
}

impl ArbTransaction for TxRetry {
    fn tx_type(&self) -> ArbTxType {
        ArbTxType::Retry
    }

    fn chain_id(&self) -> U256 {
        self.chain_id
    }

    fn sender(&self) -> Address {
        self.from
    }

    fn kind(&self) -> TxKind {
        self.to
    }

    fn nonce(&self) -> u64 {
        self.nonce
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn input(&self) -> Bytes {
        self.input.clone()
    }
}
