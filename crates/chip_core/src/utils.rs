/// Splits an instruction word into its four nibbles, most significant first
#[inline(always)]
pub fn nibbles(word: u16) -> (u8, u8, u8, u8) {
    (
        (word >> 12) as u8,
        (word >> 8 & 0xF) as u8,
        (word >> 4 & 0xF) as u8,
        (word & 0xF) as u8,
    )
}

#[inline(always)]
pub fn u16_from_two(a: u8, b: u8) -> u16 {
    (a as u16) << 8 | b as u16
}

/// low byte of an instruction word (`kk`)
#[inline(always)]
pub fn low_byte(word: u16) -> u8 {
    (word & 0xFF) as u8
}

/// low 12 bits of an instruction word (`nnn`)
#[inline(always)]
pub fn low_addr(word: u16) -> u16 {
    word & 0x0FFF
}

/// hundreds, tens, ones
pub fn bcd(val: u8) -> [u8; 3] {
    [val / 100, val / 10 % 10, val % 10]
}
