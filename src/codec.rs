/*!
The `decimalInfinite` wire format (`spec.md` §4).

```text
byte 0                byte 1 ...
+----+---+---+--------+-----------------------+
| SS | P | T | gamma-coded |E| ... |  declets  |
+----+---+---+--------+-----------------------+
  ^    ^   ^    ^                     ^
  |    |   |    |                     `- codec::mantissa (10 bits/digit group)
  |    |   |    `- codec::exponent (2*N bits, N depends on the value)
  |    |   `- T: exponent-sign indicator, also the gamma field's own first bit
  |    `- pad, always 0
  `- sign: `00` negative, `10` non-negative
```

A single byte on its own is one of the five special forms in
[`special`] instead of a header. [`encode::encode`]/[`decode::decode`] are
the entry points; [`bitstream::BitCursor`] is the shared bit-packing layer
underneath all of it.
*/

pub mod bitstream;
pub mod decode;
pub mod encode;
pub mod exponent;
pub mod mantissa;
pub mod special;

#[cfg(feature = "std")]
pub mod debug;

pub use decode::decode;
pub use encode::{encode, max_len};
