/*!
The top-level encoder (`spec.md` §4.6).

Composes the three lower layers — [`crate::codec::special`],
[`crate::codec::exponent`], and [`crate::codec::mantissa`] — over a single
[`BitCursor`] to produce the final byte string for a [`DecimalValue`].
*/

use crate::codec::bitstream::BitCursor;
use crate::codec::{exponent, mantissa, special};
use crate::config::CodecConfig;
use crate::decimal::{Classification, DecimalValue, Sign};
use crate::Error;

/**
The largest number of bytes [`encode`] can ever produce for a value bounded
by `config`.

Worst case: a 4-bit header, a gamma-coded exponent field whose unary run
reaches the configured maximum width (`2 * max_exponent_bits` bits), and a
fully-populated mantissa (`10` bits per declet). One spare byte covers the
rounding up to a whole number of bytes.
*/
pub fn max_len(config: &CodecConfig) -> usize {
    let bits = 4 + 2 * config.max_exponent_bits() as usize + 10 * config.max_declets();
    (bits + 7) / 8 + 1
}

/**
Write the encoding of `value` into `out`, returning how many leading bytes
of `out` were written.

`out` must be at least [`max_len`] bytes long. Callers should pass only the
returned prefix (`&out[..len]`) on to [`crate::codec::decode::decode`] or
into storage — any trailing bytes in `out` beyond the returned length are
unused scratch space, not padding that's safe to include.

Fails with [`crate::ErrorKind::ExponentOutOfRange`] if `value`'s adjusted
exponent needs a wider unary prefix than `config`'s configured
`max_exponent_bits` allows — `spec.md` §6 calls for `encode` to fail rather
than write past the buffer `max_len` sized for that same limit.
*/
pub fn encode<const P: usize>(
    config: &CodecConfig,
    value: &DecimalValue<P>,
    out: &mut [u8],
) -> Result<usize, Error> {
    debug_assert!(out.len() >= max_len(config));

    match value.classification() {
        Classification::Infinite => {
            out[0] = if value.is_sign_negative() {
                special::NEG_INFINITY
            } else {
                special::POS_INFINITY
            };
            Ok(1)
        }
        Classification::Nan => {
            out[0] = special::NAN;
            Ok(1)
        }
        Classification::Finite if value.is_zero() => {
            out[0] = if value.is_sign_negative() {
                special::NEG_ZERO
            } else {
                special::POS_ZERO
            };
            Ok(1)
        }
        Classification::Finite => {
            let is_negative = value.is_sign_negative();
            let adj = value.adjusted_exponent();
            let adj_is_non_negative = adj >= 0;
            let adj_magnitude = adj.unsigned_abs();

            if !exponent::fits(adj_magnitude, config.max_exponent_bits()) {
                return Err(Error::exponent_out_of_range(
                    "the value's adjusted exponent needs more unary-prefix bits than this codec is configured for",
                ));
            }

            // T = 1 exactly when the sign and the adjusted exponent's sign
            // agree in the same direction (spec.md §4.5).
            let t = is_negative != adj_is_non_negative;

            let sign_bits: u8 = if is_negative { 0b00 } else { 0b10 };
            let header = (sign_bits << 2) | if t { 0b0001 } else { 0b0000 };

            let mut cursor = BitCursor::new();
            cursor.pack(out, header, 4);

            exponent::encode(&mut cursor, out, adj_magnitude, t);
            mantissa::encode::<P>(&mut cursor, out, is_negative, value.digits());

            Ok(cursor.bytes_used())
        }
    }
}
