// String forms used in the fixture files

use alloy_primitives::{Address, B256, U256};

/// `0x` followed by lowercase hex, `0x` alone for empty input
pub(crate) fn hex_bytes(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Two digit type tag, `0x00` for legacy
pub(crate) fn hex_type(ty: u8) -> String {
    format!("0x{ty:02x}")
}

/// Minimal hex quantity, `0x0` for zero
pub(crate) fn hex_quantity(value: U256) -> String {
    format!("{value:#x}")
}

pub(crate) fn hex_hash(hash: B256) -> String {
    format!("{hash:#x}")
}

/// EIP-55 mixed case
pub(crate) fn checksum(address: Address) -> String {
    address.to_checksum(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy_primitives::address;

    #[test]
    fn test_formats() {
        assert_eq!(hex_bytes(&[]), "0x");
        assert_eq!(hex_bytes(&[0xde, 0xad]), "0xdead");
        assert_eq!(hex_type(0), "0x00");
        assert_eq!(hex_type(0x6a), "0x6a");
        assert_eq!(hex_quantity(U256::ZERO), "0x0");
        assert_eq!(hex_quantity(U256::from(100u64)), "0x64");
        assert_eq!(
            hex_hash(B256::repeat_byte(0xab)),
            format!("0x{}", "ab".repeat(32))
        );
        assert_eq!(
            checksum(address!("1111111111111111111111111111111111111111")),
            "0x1111111111111111111111111111111111111111"
        );

        let arbos = address!("00000000000000000000000000000000000a4b05");
        let rendered = checksum(arbos);
        assert_eq!(rendered.to_lowercase(), "0x00000000000000000000000000000000000a4b05");
        assert_eq!(Address::parse_checksummed(&rendered, None).unwrap(), arbos);
    }
}
