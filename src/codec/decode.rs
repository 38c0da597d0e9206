/*!
The top-level decoder (`spec.md` §4.6).

Reverses [`crate::codec::encode::encode`], failing closed: any byte pattern
that isn't the unique canonical encoding of some value is rejected rather
than silently accepted. `input` must be exactly the bytes
[`crate::codec::encode::encode`] returned — not a larger, zero-padded
buffer, since a gamma-coded field has no external length prefix and relies
on the buffer ending exactly where the value does.
*/

use crate::codec::bitstream::BitCursor;
use crate::codec::{exponent, mantissa, special};
use crate::config::CodecConfig;
use crate::decimal::{Classification, DecimalValue, Sign};
use crate::Error;

/**
Decode a `decimalInfinite` byte string into a [`DecimalValue`].

Fails with [`crate::ErrorKind::InvalidHeader`] if `input` is empty, if a
single byte isn't one of the five canonical special-value bytes
(`codec::special`), or if a multi-byte header doesn't carry a recognized
sign field or encodes a value that could also have been written as a
shorter, canonical one. Fails with the error `codec::exponent::decode` or
`codec::mantissa::decode` returns if either of those lower layers rejects
the input.
*/
pub fn decode<const P: usize>(config: &CodecConfig, input: &[u8]) -> Result<DecimalValue<P>, Error> {
    if input.is_empty() {
        return Err(Error::invalid_header(0, "input must not be empty"));
    }

    if input.len() == 1 {
        return match special::classify(input[0]) {
            Some(special::Special::NegInfinity) => Ok(DecimalValue::infinity(Sign::Negative)),
            Some(special::Special::PosInfinity) => Ok(DecimalValue::infinity(Sign::NonNegative)),
            Some(special::Special::NegZero) => Ok(DecimalValue::zero(Sign::Negative)),
            Some(special::Special::PosZero) => Ok(DecimalValue::zero(Sign::NonNegative)),
            Some(special::Special::Nan) => Ok(DecimalValue::nan(Sign::NonNegative)),
            None => Err(Error::invalid_header(
                input[0],
                "a single-byte value must be one of the five canonical special forms",
            )),
        };
    }

    let mut cursor = BitCursor::new();
    let header = cursor.unpack(input, 4);
    let sign_bits = header >> 2;

    if sign_bits != 0b00 && sign_bits != 0b10 {
        return Err(Error::invalid_header(
            input[0],
            "a multi-byte value's sign field must be `00` or `10`",
        ));
    }

    let sign = if sign_bits == 0b10 {
        Sign::NonNegative
    } else {
        Sign::Negative
    };
    let t = (header & 0b0001) != 0;

    let magnitude = exponent::decode(&mut cursor, input, t, config.max_exponent_bits())?;

    // adj == 0 is, by convention, always written on the "adjusted exponent
    // is non-negative" branch (spec.md §4.5) — the other branch can also
    // decode a zero magnitude, which would be a second, non-canonical
    // encoding of the same value.
    let adj_is_non_negative = sign.is_negative() == !t;

    if magnitude == 0 && !adj_is_non_negative {
        return Err(Error::invalid_header(
            input[0],
            "a zero-magnitude adjusted exponent must use the non-negative branch",
        ));
    }

    let adj: i64 = if adj_is_non_negative {
        magnitude as i64
    } else {
        -(magnitude as i64)
    };

    let (digits, len) = mantissa::decode::<P>(&mut cursor, input, sign.is_negative())?;
    let exponent = adj - len as i64 + 1;

    Ok(DecimalValue::from_raw_parts(
        sign,
        Classification::Finite,
        digits,
        len,
        exponent,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> CodecConfig {
        CodecConfig::new(9, 20).unwrap()
    }

    #[test]
    fn rejects_empty_input() {
        let cfg = cfg();
        assert!(decode::<9>(&cfg, &[]).is_err());
    }

    #[test]
    fn rejects_unrecognized_single_byte() {
        let cfg = cfg();
        assert!(decode::<9>(&cfg, &[0x20]).is_err());
        assert!(decode::<9>(&cfg, &[0xFF]).is_err());
    }

    #[test]
    fn rejects_bad_sign_field() {
        let cfg = cfg();
        // top two bits `01` is not a valid sign field.
        assert!(decode::<9>(&cfg, &[0b0100_0000, 0x00]).is_err());
    }

    // spec.md §8, "scenario from repository test suite".
    #[test]
    fn decodes_repository_test_suite_scenario() {
        let cfg = cfg();
        let value: DecimalValue<9> = decode(&cfg, &[0x0F, 0x84]).unwrap();

        assert!(value.is_sign_negative());
        assert_eq!(&[1, 0, 0], value.digits());
        assert_eq!(0, value.adjusted_exponent());
    }

    #[test]
    fn rejects_non_canonical_zero_magnitude_on_negative_branch() {
        let cfg = cfg();

        // Hand-assemble a header that picks the "adjusted exponent is
        // negative" branch (sign non-negative, T = 0) but whose gamma field
        // still decodes to magnitude 0 — a second, non-canonical spelling of
        // the same adjusted exponent the "non-negative" branch already owns.
        let mut buf = [0u8; 8];
        let mut cursor = BitCursor::new();
        cursor.pack(&mut buf, 0b1000, 4);
        exponent::encode(&mut cursor, &mut buf, 0, false);
        mantissa::encode::<9>(&mut cursor, &mut buf, false, &[1]);
        let len = cursor.bytes_used();

        assert!(decode::<9>(&cfg, &buf[..len]).is_err());
    }
}
