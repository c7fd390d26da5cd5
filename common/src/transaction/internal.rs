use alloy_primitives::{address, Address, Bytes, TxKind, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};
use serde::{Deserialize, Serialize};

use super::{ArbTransaction, ArbTxType};

/// ArbOS system transaction (`0x6a`)
///
/// `data` is ABI calldata for the ArbOS acts (`startBlock`,
/// `batchPostingReport`, ...). Sender and recipient are both ArbOS.
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxInternal {
    pub chain_id: U256,
    pub data: Bytes,
}

impl TxInternal {
    pub const ARBOS_ADDRESS: Address = address!("00000000000000000000000000000000000a4b05");

    pub fn new(chain_id: U256, data: Bytes) -> Self {
        Self { chain_id, data }
    }
}

impl ArbTransaction for TxInternal {
    fn tx_type(&self) -> ArbTxType {
        ArbTxType::Internal
    }

    fn chain_id(&self) -> U256 {
        self.chain_id
    }

    fn sender(&self) -> Address {
        Self::ARBOS_ADDRESS
    }

    fn kind(&self) -> TxKind {
        TxKind::Call(Self::ARBOS_ADDRESS)
    }

    fn nonce(&self) -> u64 {
        0
    }

    fn gas_limit(&self) -> u64 {
        0
    }

    fn value(&self) -> U256 {
        U256::ZERO
    }

    fn input(&self) -> Bytes {
        self.data.clone()
    }
}
