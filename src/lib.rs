/*!
An order-preserving binary codec for arbitrary-precision decimal numbers.

This library converts [`DecimalValue`]s — a sign, a classification
(finite/infinite/NaN), an arbitrary-precision coefficient, and an exponent —
into byte strings with one property a general-purpose decimal interchange
format doesn't give you for free: comparing two encodings byte-by-byte gives
the same answer as comparing the numbers they represent. That makes the
encoding usable directly as a key in anything that sorts keys
lexicographically, without decoding first.

# Why not just use an existing decimal bitstring format?

IEEE754 decimal interchange formats (as implemented by, say, `decstr`) are
built for a fixed storage width and aren't comparison-friendly: two
differently-signed or differently-scaled encodings of the same bit width
don't sort the way their values do. This format trades that general-purpose
interchange goal for one narrower one — total, lexicographic order — at the
cost of a variable-length encoding and no interop with any existing decimal
standard (`spec.md` §1 Non-goals).

# What this library does not do

It doesn't parse decimal text, and it doesn't implement decimal arithmetic.
Both are out of scope (`spec.md` §1 Non-goals) — callers construct
[`DecimalValue`]s directly from a sign, digits, and an exponent, typically
produced by a decimal arithmetic engine that already exists elsewhere in the
caller's system.

# Layout

- [`DecimalValue`]: the value type the codec reads and writes.
- [`CodecConfig`]: construction-time precision and exponent-width limits.
- [`codec::encode`]/[`codec::decode`]: the entry points for converting
  between [`DecimalValue`] and bytes.
- [`Error`]/[`ErrorKind`]: what can go wrong decoding an untrusted byte
  string.
*/

#![cfg_attr(not(any(feature = "std", test)), no_std)]

extern crate core;

/*
If you're exploring the source, start at `codec`: its module doc lays out
the wire format byte-by-byte, and `codec::encode`/`codec::decode` are the
two functions that tie the rest of the crate together.

- `decimal`: the `DecimalValue` type itself — sign, classification, digits,
  exponent, and the total ordering every encoded byte string must preserve.
- `config`: the precision and exponent-width limits a codec is built with.
- `codec::bitstream`: the bit-level cursor every other `codec` submodule
  packs and unpacks through.
- `codec::exponent`, `codec::mantissa`, `codec::special`: the three pieces
  of the wire format, each encodable and decodable on its own.
- `error`: what `decode` can reject and why.
*/

pub mod codec;
mod config;
mod decimal;
mod error;

pub use crate::config::CodecConfig;
pub use crate::decimal::{Classification, DecimalValue, Sign};
pub use crate::error::{Error, ErrorKind};
