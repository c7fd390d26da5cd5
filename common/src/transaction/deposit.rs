use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};
use serde::{Deserialize, Serialize};

use super::{ArbTransaction, ArbTxType};

/// ETH deposit from L1 (`0x64`)
///
/// Moves value only: no calldata, no gas and a zero nonce.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxDeposit {
    pub chain_id: U256,
    pub l1_request_id: B256,
    pub from: Address,
    pub to: Address,
    pub value: U256,
}

impl ArbTransaction for TxDeposit {
    fn tx_type(&self) -> ArbTxType {
        ArbTxType::Deposit
    }

    fn chain_id(&self) -> U256 {
        self.chain_id
    }

    fn sender(&self) -> Address {
        self.from
    }

    fn kind(&self) -> TxKind {
        TxKind::Call(self.to)
    }

    fn nonce(&self) -> u64 {
        0
    }

    fn gas_limit(&self) -> u64 {
        0
    }

    fn value(&self) -> U256 {
        self.value
    }

    fn input(&self) -> Bytes {
        Bytes::new()
    }
}
