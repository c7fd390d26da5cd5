mod contract;
mod deposit;
mod internal;
mod retry;
mod submit_retryable;
mod unsigned;

pub use contract::TxContract;
pub use deposit::TxDeposit;
pub use internal::TxInternal;
pub use retry::TxRetry;
pub use submit_retryable::TxSubmitRetryable;
pub use unsigned::TxUnsigned;

use alloy_eips::eip2718::{
    Decodable2718, Eip2718Error, Eip2718Result, Encodable2718, Typed2718,
};
use alloy_primitives::{keccak256, Address, Bytes, TxHash, TxKind, U256};
use alloy_rlp::{BufMut, Decodable, Encodable};
use core::fmt;

/// EIP-2718 type tags known to Nitro
///
/// The Ethereum tags only show up on receipts here, the transaction
/// envelope carries the Nitro specific bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum ArbTxType {
    Legacy = 0x00,
    Eip2930 = 0x01,
    Eip1559 = 0x02,
    Eip4844 = 0x03,
    Eip7702 = 0x04,
    Deposit = 0x64,
    Unsigned = 0x65,
    Contract = 0x66,
    Retry = 0x68,
    SubmitRetryable = 0x69,
    Internal = 0x6a,
}

impl ArbTxType {
    pub const fn is_legacy(&self) -> bool {
        matches!(self, ArbTxType::Legacy)
    }

    /// Nitro specific types, everything at or above `0x64`
    pub const fn is_arbitrum(&self) -> bool {
        (*self as u8) >= ArbTxType::Deposit as u8
    }
}

impl TryFrom<u8> for ArbTxType {
    type Error = Eip2718Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let ty = match value {
            0x00 => ArbTxType::Legacy,
            0x01 => ArbTxType::Eip2930,
            0x02 => ArbTxType::Eip1559,
            0x03 => ArbTxType::Eip4844,
            0x04 => ArbTxType::Eip7702,
            0x64 => ArbTxType::Deposit,
            0x65 => ArbTxType::Unsigned,
            0x66 => ArbTxType::Contract,
            0x68 => ArbTxType::Retry,
            0x69 => ArbTxType::SubmitRetryable,
            0x6a => ArbTxType::Internal,
            _ => return Err(Eip2718Error::UnexpectedType(value)),
        };
        Ok(ty)
    }
}

impl From<ArbTxType> for u8 {
    fn from(ty: ArbTxType) -> Self {
        ty as u8
    }
}

impl fmt::Display for ArbTxType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ArbTxType::Legacy => write!(f, "Legacy"),
            ArbTxType::Eip2930 => write!(f, "EIP-2930"),
            ArbTxType::Eip1559 => write!(f, "EIP-1559"),
            ArbTxType::Eip4844 => write!(f, "EIP-4844"),
            ArbTxType::Eip7702 => write!(f, "EIP-7702"),
            ArbTxType::Deposit => write!(f, "Deposit"),
            ArbTxType::Unsigned => write!(f, "Unsigned"),
            ArbTxType::Contract => write!(f, "Contract"),
            ArbTxType::Retry => write!(f, "Retry"),
            ArbTxType::SubmitRetryable => write!(f, "SubmitRetryable"),
            ArbTxType::Internal => write!(f, "Internal"),
        }
    }
}

/// Decoded accessors shared by every Nitro transaction body
///
/// Values follow what Nitro reports for each type, which is not always the
/// raw field (a submit-retryable reports the precompile as recipient and its
/// ABI calldata as input).
pub trait ArbTransaction {
    fn tx_type(&self) -> ArbTxType;

    fn chain_id(&self) -> U256;

    /// Sender, taken from the body since Nitro system transactions are unsigned
    fn sender(&self) -> Address;

    fn kind(&self) -> TxKind;

    fn to(&self) -> Option<Address> {
        match self.kind() {
            TxKind::Call(to) => Some(to),
            TxKind::Create => None,
        }
    }

    fn nonce(&self) -> u64;

    fn gas_limit(&self) -> u64;

    fn value(&self) -> U256;

    fn input(&self) -> Bytes;
}

/// EIP-2718 envelope over the Nitro transaction bodies
///
/// Wire format is `type || rlp([fields...])`, the hash is the keccak256 of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArbTxEnvelope {
    Deposit(TxDeposit),
    Unsigned(TxUnsigned),
    Contract(TxContract),
    Retry(TxRetry),
    SubmitRetryable(TxSubmitRetryable),
    Internal(TxInternal),
}

impl ArbTxEnvelope {
    fn as_tx(&self) -> &dyn ArbTransaction {
        match self {
            ArbTxEnvelope::Deposit(tx) => tx,
            ArbTxEnvelope::Unsigned(tx) => tx,
            ArbTxEnvelope::Contract(tx) => tx,
            ArbTxEnvelope::Retry(tx) => tx,
            ArbTxEnvelope::SubmitRetryable(tx) => tx,
            ArbTxEnvelope::Internal(tx) => tx,
        }
    }

    fn as_encodable(&self) -> &dyn Encodable {
        match self {
            ArbTxEnvelope::Deposit(tx) => tx,
            ArbTxEnvelope::Unsigned(tx) => tx,
            ArbTxEnvelope::Contract(tx) => tx,
            ArbTxEnvelope::Retry(tx) => tx,
            ArbTxEnvelope::SubmitRetryable(tx) => tx,
            ArbTxEnvelope::Internal(tx) => tx,
        }
    }

    pub fn tx_hash(&self) -> TxHash {
        keccak256(self.encoded_2718())
    }
}

impl ArbTransaction for ArbTxEnvelope {
    fn tx_type(&self) -> ArbTxType {
        self.as_tx().tx_type()
    }

    fn chain_id(&self) -> U256 {
        self.as_tx().chain_id()
    }

    fn sender(&self) -> Address {
        self.as_tx().sender()
    }

    fn kind(&self) -> TxKind {
        self.as_tx().kind()
    }

    fn nonce(&self) -> u64 {
        self.as_tx().nonce()
    }

    fn gas_limit(&self) -> u64 {
        self.as_tx().gas_limit()
    }

    fn value(&self) -> U256 {
        self.as_tx().value()
    }

    fn input(&self) -> Bytes {
        self.as_tx().input()
    }
}

impl Typed2718 for ArbTxEnvelope {
    fn ty(&self) -> u8 {
        self.tx_type().into()
    }
}

impl Encodable2718 for ArbTxEnvelope {
    fn encode_2718_len(&self) -> usize {
        1 + self.as_encodable().length()
    }

    fn encode_2718(&self, out: &mut dyn BufMut) {
        out.put_u8(self.ty());
        self.as_encodable().encode(out);
    }
}

impl Decodable2718 for ArbTxEnvelope {
    fn typed_decode(ty: u8, buf: &mut &[u8]) -> Eip2718Result<Self> {
        let tx = match ArbTxType::try_from(ty)? {
            ArbTxType::Deposit => ArbTxEnvelope::Deposit(TxDeposit::decode(buf)?),
            ArbTxType::Unsigned => ArbTxEnvelope::Unsigned(TxUnsigned::decode(buf)?),
            ArbTxType::Contract => ArbTxEnvelope::Contract(TxContract::decode(buf)?),
            ArbTxType::Retry => ArbTxEnvelope::Retry(TxRetry::decode(buf)?),
            ArbTxType::SubmitRetryable => {
                ArbTxEnvelope::SubmitRetryable(TxSubmitRetryable::decode(buf)?)
            }
            ArbTxType::Internal => ArbTxEnvelope::Internal(TxInternal::decode(buf)?),
            // signed Ethereum transactions are out of scope for this envelope
            _ => return Err(Eip2718Error::UnexpectedType(ty)),
        };
        Ok(tx)
    }

    fn fallback_decode(_buf: &mut &[u8]) -> Eip2718Result<Self> {
        Err(Eip2718Error::UnexpectedType(ArbTxType::Legacy.into()))
    }
}

impl From<TxDeposit> for ArbTxEnvelope {
    fn from(tx: TxDeposit) -> Self {
        ArbTxEnvelope::Deposit(tx)
    }
}

impl From<TxUnsigned> for ArbTxEnvelope {
    fn from(tx: TxUnsigned) -> Self {
        ArbTxEnvelope::Unsigned(tx)
    }
}

impl From<TxContract> for ArbTxEnvelope {
    fn from(tx: TxContract) -> Self {
        ArbTxEnvelope::Contract(tx)
    }
}

impl From<TxRetry> for ArbTxEnvelope {
    fn from(tx: TxRetry) -> Self {
        ArbTxEnvelope::Retry(tx)
    }
}

impl From<TxSubmitRetryable> for ArbTxEnvelope {
    fn from(tx: TxSubmitRetryable) -> Self {
        ArbTxEnvelope::SubmitRetryable(tx)
    }
}

impl From<TxInternal> for ArbTxEnvelope {
    fn from(tx: TxInternal) -> Self {
        ArbTxEnvelope::Internal(tx)
    }
}
