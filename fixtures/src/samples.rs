//! Literal inputs shared by the fixture builders.
//!
//! Changing anything here changes the emitted fixtures, downstream suites
//! pin them byte for byte.

use alloy_primitives::{address, Address, B256, U256};

pub const CHAIN_ID: u64 = 42161;

pub const ADDR1: Address = address!("1111111111111111111111111111111111111111");
pub const ADDR2: Address = address!("2222222222222222222222222222222222222222");
pub const ADDR3: Address = address!("3333333333333333333333333333333333333333");
pub const ADDR4: Address = address!("4444444444444444444444444444444444444444");
pub const ADDR5: Address = address!("5555555555555555555555555555555555555555");

pub const REQUEST_ID_1: B256 = B256::repeat_byte(0xaa);
pub const REQUEST_ID_2: B256 = B256::repeat_byte(0xbb);
pub const REQUEST_ID_3: B256 = B256::repeat_byte(0xcc);

/// Topic of the single log attached to some receipts
pub const LOG_TOPIC: B256 = B256::repeat_byte(0xaa);

pub fn chain_id() -> U256 {
    U256::from(CHAIN_ID)
}
