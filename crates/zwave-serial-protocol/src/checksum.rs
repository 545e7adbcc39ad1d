//! Serial API frame checksum.
//!
//! The checksum is `0xFF` XOR-ed with the length byte, direction byte,
//! function code and every payload byte.

/// Compute the checksum over `bytes` (length byte through last payload byte).
pub fn compute(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0xFF, |acc, &b| acc ^ b)
}

/// Returns true if `declared` matches the checksum of `bytes`.
pub fn validate(bytes: &[u8], declared: u8) -> bool {
    compute(bytes) == declared
}
