use alloy_consensus::{Eip658Value, Receipt, ReceiptWithBloom};
use alloy_eips::eip2718::{Decodable2718, Eip2718Result, Encodable2718, Typed2718};
use alloy_primitives::{logs_bloom, Bloom, Log};
use alloy_rlp::{BufMut, Decodable, Encodable};

use crate::transaction::ArbTxType;

/// Receipt of any transaction type Nitro executes
///
/// The consensus encoding is the Ethereum one: `rlp([status,
/// cumulative_gas_used, bloom, logs])`, prefixed by the type byte unless the
/// receipt is legacy. `gas_used_for_l1` is Nitro bookkeeping that never goes
/// on the wire, a decoded receipt always reports 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbReceiptEnvelope {
    tx_type: ArbTxType,
    inner: ReceiptWithBloom<Receipt<Log>>,
    gas_used_for_l1: u64,
}

impl ArbReceiptEnvelope {
    /// Builds a receipt and derives its bloom from `logs`
    pub fn new(tx_type: ArbTxType, status: bool, cumulative_gas_used: u64, logs: Vec<Log>) -> Self {
        let logs_bloom = logs_bloom(logs.iter());
        let receipt = Receipt {
            status: Eip658Value::Eip658(status),
            cumulative_gas_used,
            logs,
        };

        Self {
            tx_type,
            inner: ReceiptWithBloom { receipt, logs_bloom },
            gas_used_for_l1: 0,
        }
    }

    pub fn with_gas_used_for_l1(mut self, gas_used_for_l1: u64) -> Self {
        self.gas_used_for_l1 = gas_used_for_l1;
        self
    }

    pub fn tx_type(&self) -> ArbTxType {
        self.tx_type
    }

    pub fn status(&self) -> bool {
        self.inner.receipt.status.coerce_status()
    }

    pub fn cumulative_gas_used(&self) -> u64 {
        self.inner.receipt.cumulative_gas_used
    }

    pub fn gas_used_for_l1(&self) -> u64 {
        self.gas_used_for_l1
    }

    pub fn logs(&self) -> &[Log] {
        &self.inner.receipt.logs
    }

    pub fn bloom(&self) -> Bloom {
        self.inner.logs_bloom
    }
}

impl Typed2718 for ArbReceiptEnvelope {
    fn ty(&self) -> u8 {
        self.tx_type.into()
    }
}

impl Encodable2718 for ArbReceiptEnvelope {
    fn encode_2718_len(&self) -> usize {
        let prefix = if self.tx_type.is_legacy() { 0 } else { 1 };
        prefix + self.inner.length()
    }

    fn encode_2718(&self, out: &mut dyn BufMut) {
        if !self.tx_type.is_legacy() {
            out.put_u8(self.ty());
        }
        self.inner.encode(out);
    }
}

impl Decodable2718 for ArbReceiptEnvelope {
    fn typed_decode(ty: u8, buf: &mut &[u8]) -> Eip2718Result<Self> {
        let tx_type = ArbTxType::try_from(ty)?;
        let inner = ReceiptWithBloom::decode(buf)?;
        Ok(Self {
            tx_type,
            inner,
            gas_used_for_l1: 0,
        })
    }

    fn fallback_decode(buf: &mut &[u8]) -> Eip2718Result<Self> {
        let inner = ReceiptWithBloom::decode(buf)?;
        Ok(Self {
            tx_type: ArbTxType::Legacy,
            inner,
            gas_used_for_l1: 0,
        })
    }
}
