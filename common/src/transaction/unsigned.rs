use alloy_primitives::{Address, Bytes, TxKind, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};
use serde::{Deserialize, Serialize};

use super::{ArbTransaction, ArbTxType};

/// User transaction sent through the delayed inbox without a signature (`0x65`)
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxUnsigned {
    pub chain_id: U256,
    pub from: Address,
    pub nonce: u64,
    pub gas_fee_cap: U256,
    pub gas_limit: u64,
    pub to: TxKind,
    pub value: U256,
    pub input: Bytes,
}

impl ArbTransaction for TxUnsigned {
    fn tx_type(&self) -> ArbTxType {
        ArbTxType::Unsigned
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
