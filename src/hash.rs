//! 32-bit FNV-1a string hash.
//!
//! Hashes UTF-16 code units rather than UTF-8 bytes so that seeds derived
//! here agree with generators that operate on UTF-16 strings.

const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// Hash `text` to a 32-bit value. Pure; the empty string hashes to the
/// offset basis.
pub fn fnv1a32(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}
