use alloy_primitives::{Address, Bytes, TxKind, B256, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};
use serde::{Deserialize, Serialize};

use super::{ArbTransaction, ArbTxType};

/// Contract call issued from L1 on behalf of an aliased sender (`0x66`)
///
/// Nitro reports a zero nonce for it, the request id takes that role.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxContract {
    pub chain_id: U256,
    pub request_id: B256,
    pub from: Address,
    pub gas_fee_cap: U256,
    pub gas_limit: u64,
    pub to: TxKind,
    pub value: U256,
    pub input: Bytes,
}

impl ArbTransaction for TxContract {
    fn tx_type(&self) -> ArbTxType {
        ArbTxType::Contract
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
        0
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
