//! The geohash base32 alphabet and its inverse lookup table.

/// Symbols indexed by their 5-bit value. `a`, `i`, `l` and `o` are excluded.
pub const BASE32: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Bit masks for one symbol, most significant first.
pub const BITS: [u8; 5] = [16, 8, 4, 2, 1];

const INVALID: u8 = 0xff;

const DECODE_TABLE: [u8; 128] = {
    let mut table = [INVALID; 128];
    let mut i = 0;
    while i < BASE32.len() {
        table[BASE32[i] as usize] = i as u8;
        i += 1;
    }
    table
};

/// Symbol for a 5-bit value. Only the low five bits are used.
#[inline]
pub fn symbol(value: u8) -> char {
    BASE32[(value & 0x1f) as usize] as char
}

/// 5-bit value of a symbol, or `None` if it is not part of the alphabet.
#[inline]
pub fn value_of(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DECODE_TABLE[c as usize] {
        INVALID => None,
        value => Some(value),
    }
}
