use alloy_primitives::{address, Address, Bytes, TxKind, B256, U256};
use alloy_rlp::{RlpDecodable, RlpEncodable};
use alloy_sol_types::{sol, SolCall};
use serde::{Deserialize, Serialize};

use super::{ArbTransaction, ArbTxType};

sol! {
    function submitRetryable(
        bytes32 requestId,
        uint256 l1BaseFee,
        uint256 deposit,
        uint256 callvalue,
        uint256 gasFeeCap,
        uint64 gasLimit,
        uint256 maxSubmissionFee,
        address feeRefundAddress,
        address beneficiary,
        address retryTo,
        bytes retryData
    );
}

/// Creation of a retryable ticket from L1 (`0x69`)
///
/// The body is what gets RLP encoded. What Nitro reports as the executed
/// call is a `submitRetryable` invocation of the ArbRetryableTx precompile,
/// see [`TxSubmitRetryable::calldata`].
#[derive(Debug, Clone, PartialEq, Eq, RlpEncodable, RlpDecodable, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxSubmitRetryable {
    pub chain_id: U256,
    pub request_id: B256,
    pub from: Address,
    pub l1_base_fee: U256,
    pub deposit_value: U256,
    pub gas_fee_cap: U256,
    pub gas_limit: u64,
    pub retry_to: TxKind,
    pub retry_value: U256,
    pub beneficiary: Address,
    pub max_submission_fee: U256,
    pub fee_refund_address: Address,
    pub retry_data: Bytes,
}

impl TxSubmitRetryable {
    /// ArbRetryableTx precompile, recipient of every submit-retryable
    pub const ARB_RETRYABLE_TX_ADDRESS: Address =
        address!("000000000000000000000000000000000000006e");

    /// ABI encoded `submitRetryable` call with the selector prepended
    ///
    /// A contract creation ticket encodes the zero address as `retryTo`.
    pub fn calldata(&self) -> Bytes {
        let retry_to = match self.retry_to {
            TxKind::Call(to) => to,
            TxKind::Create => Address::ZERO,
        };

        submitRetryableCall {
            requestId: self.request_id,
            l1BaseFee: self.l1_base_fee,
            deposit: self.deposit_value,
            callvalue: self.retry_value,
            gasFeeCap: self.gas_fee_cap,
            gasLimit: self.gas_limit,
            maxSubmissionFee: self.max_submission_fee,
            feeRefundAddress: self.fee_refund_address,
            beneficiary: self.beneficiary,
            retryTo: retry_to,
            retryData: self.retry_data.clone(),
        }
        .abi_encode()
        .into()
    }
}

impl ArbTransaction for TxSubmitRetryable {
    fn tx_type(&self) -> ArbTxType {
        ArbTxType::SubmitRetryable
    }

    fn chain_id(&self) -> U256 {
        self.chain_id
    }

    fn sender(&self) -> Address {
        self.from
    }

    fn kind(&self) -> TxKind {
        TxKind::Call(Self::ARB_RETRYABLE_TX_ADDRESS)
    }

    fn nonce(&self) -> u64 {
        0
    }

    fn gas_limit(&self) -> u64 {
        self.gas_limit
    }

    fn value(&self) -> U256 {
        U256::ZERO
    }

    fn input(&self) -> Bytes {
        self.calldata()
    }
}
