/*!
Human-readable renderings of an encoded byte string (`spec.md` §6).

Only built with the `std` feature — these are diagnostic helpers for logs
and test failures, not part of the wire format itself.
*/

#![cfg(feature = "std")]

use std::fmt::Write;
use std::string::String;

/// Render `bytes` as underscore-separated 8-bit binary groups, e.g. `"00001111_10000100"`.
pub fn to_bits(bytes: &[u8]) -> String {
    let mut s = String::new();

    for b in bytes {
        if !s.is_empty() {
            s.push('_');
        }

        write!(&mut s, "{:>08b}", b).expect("writing to a `String` is infallible");
    }

    s
}

/// Render `bytes` as space-separated uppercase hex pairs, e.g. `"0F 84"`.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut s = String::new();

    for b in bytes {
        if !s.is_empty() {
            s.push(' ');
        }

        write!(&mut s, "{:02X}", b).expect("writing to a `String` is infallible");
    }

    s
}
