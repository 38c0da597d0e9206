/*!
The declet-encoded coefficient (`spec.md` §4.4).

Unlike the densely-packed-decimal declets used by IEEE754 decimal
interchange formats, a `decimalInfinite` declet is the coefficient's digits
taken three at a time and written out as a plain 10-bit natural binary
number in `0..=999` — no DPD bit-shuffling. The coefficient is first padded
on the right with zero digits up to a multiple of three (this never changes
`DecimalValue::adjusted_exponent`, only `digit_count`), then, for negative
values, ten's-complemented as a single multi-digit number so that more
negative coefficients sort before less negative ones.
*/

use crate::codec::bitstream::BitCursor;
use crate::Error;

/// The smallest multiple of 3, at least 3, that is `>= unaligned_len`.
fn aligned_len(unaligned_len: usize) -> usize {
    let padded = match unaligned_len % 3 {
        0 => unaligned_len,
        r => unaligned_len + (3 - r),
    };

    padded.max(3)
}

/// Ten's-complement a fixed-width decimal digit string in place.
fn tens_complement(digits: &mut [u8]) {
    for d in digits.iter_mut() {
        *d = 9 - *d;
    }

    let mut carry = 1u8;

    for d in digits.iter_mut().rev() {
        let sum = *d + carry;

        if sum == 10 {
            *d = 0;
            carry = 1;
        } else {
            *d = sum;
            carry = 0;
        }
    }
}

/**
Write the declet-encoded coefficient for `digits` (most significant first,
non-empty, `digits.len() <= P`).

`P` bounds the scratch buffer used to hold the coefficient while it's padded
and, for negative values, complemented — it must be the same `P` the caller's
[`crate::DecimalValue`] uses.
*/
pub fn encode<const P: usize>(
    cursor: &mut BitCursor,
    out: &mut [u8],
    is_negative: bool,
    digits: &[u8],
) {
    debug_assert!(!digits.is_empty() && digits.len() <= P);

    let len = aligned_len(digits.len());
    let mut buf = [0u8; P];
    buf[..digits.len()].copy_from_slice(digits);

    if is_negative {
        tens_complement(&mut buf[..len]);
    }

    for declet in buf[..len].chunks_exact(3) {
        let value = 100 * declet[0] as u64 + 10 * declet[1] as u64 + declet[2] as u64;
        cursor.pack_uint(out, value, 10);
    }
}

/**
Read a declet-encoded coefficient, returning the recovered digits
(most significant first) and how many of them are significant.

Fails with [`crate::ErrorKind::InvalidDeclet`] if a 10-bit group decodes to
a value outside `0..=999` or the input ends mid-declet, with
[`crate::ErrorKind::MantissaTooLong`] if the encoded coefficient has more
digits than `P`, and with [`crate::ErrorKind::NonCanonicalMantissa`] if the
recovered most significant digit is zero (the codec's own special-byte path,
`codec::special`, owns the value zero, so a zero-leading coefficient reaching
this point can never be the unique canonical encoding of the value it
represents) or if the least-significant declet is zero (a whole trailing
declet of zero digits means the same value could have encoded with one fewer
declet).
*/
pub fn decode<const P: usize>(
    cursor: &mut BitCursor,
    input: &[u8],
    is_negative: bool,
) -> Result<([u8; P], usize), Error> {
    let declet_count = cursor.bits_remaining(input.len()) / 10;

    if declet_count == 0 {
        return Err(Error::invalid_declet(0));
    }

    let len = declet_count * 3;

    if len > P {
        return Err(Error::mantissa_too_long(len, P));
    }

    let mut digits = [0u8; P];

    for i in 0..declet_count {
        if cursor.bits_remaining(input.len()) < 10 {
            return Err(Error::invalid_declet(0));
        }

        let value = cursor.unpack_uint(input, 10);

        if value > 999 {
            return Err(Error::invalid_declet(value as u16));
        }

        let base = i * 3;
        digits[base] = (value / 100) as u8;
        digits[base + 1] = ((value / 10) % 10) as u8;
        digits[base + 2] = (value % 10) as u8;
    }

    if is_negative {
        tens_complement(&mut digits[..len]);
    }

    if digits[0] == 0 {
        return Err(Error::non_canonical_mantissa(
            "the most significant digit of a multi-digit coefficient must not be zero",
        ));
    }

    let last_declet = 100 * digits[len - 3] as u32 + 10 * digits[len - 2] as u32 + digits[len - 1] as u32;

    if last_declet == 0 {
        return Err(Error::non_canonical_mantissa(
            "the least-significant declet of a coefficient must not be zero",
        ));
    }

    Ok((digits, len))
}
