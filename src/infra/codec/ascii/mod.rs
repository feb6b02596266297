//! Character-class checks and digit conversions for fixed-width ASCII fields.
//!
//! Each field of the command grammar is validated per character: a hex field
//! accepts `0-9A-Fa-f`, a decimal field accepts `0-9`. Nothing else passes.

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// True when `field` is non-empty and every byte is a hex digit (either case).
#[inline]
pub fn is_hex_field(field: &[u8]) -> bool {
    !field.is_empty() && field.iter().all(u8::is_ascii_hexdigit)
}

/// True when `field` is non-empty and every byte is a decimal digit.
#[inline]
pub fn is_decimal_field(field: &[u8]) -> bool {
    !field.is_empty() && field.iter().all(u8::is_ascii_digit)
}

/// Copy `src` into `dst`, uppercasing ASCII letters. Lengths must match.
#[inline]
pub fn upper_into(dst: &mut [u8], src: &[u8]) {
    dst.copy_from_slice(src);
    dst.make_ascii_uppercase();
}

/// Value of a hex field of at most 8 digits. `None` on any non-hex byte.
pub fn hex_value(field: &[u8]) -> Option<u32> {
    if !is_hex_field(field) || field.len() > 8 {
        return None;
    }
    // u32::from_str_radix would also take a leading '+', hence the manual fold.
    field
        .iter()
        .try_fold(0u32, |acc, &c| Some((acc << 4) | u32::from(nibble(c)?)))
}

/// Value of a single decimal digit.
#[inline]
pub fn decimal_value(digit: u8) -> Option<u8> {
    digit.is_ascii_digit().then(|| digit - b'0')
}

#[inline]
fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Uppercase hex text of `value`, most significant digit first, filling `out`.
pub fn write_hex_upper(value: u32, out: &mut [u8]) {
    let width = out.len();
    for (i, slot) in out.iter_mut().enumerate() {
        let shift = 4 * (width - 1 - i);
        *slot = if shift < 32 {
            HEX_UPPER[((value >> shift) & 0xF) as usize]
        } else {
            b'0'
        };
    }
}
