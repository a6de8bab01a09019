// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # parapet_util
//!
//! Small helpers for working with published test vectors. Test-support
//! only: panics are acceptable here, the inputs are compile-time-known
//! strings.

#![warn(missing_docs)]

/// Decode a hex string into bytes
///
/// Accepts upper- and lowercase digits.
///
/// # Panics
///
/// Panics on odd-length input or non-hex characters.
pub fn hex_to_bytes(hex: &str) -> Vec<u8> {
    assert!(
        hex.len() % 2 == 0,
        "hex string must have even length, got {}",
        hex.len()
    );

    hex.as_bytes()
        .chunks_exact(2)
        .map(|pair| (hex_val(pair[0]) << 4) | hex_val(pair[1]))
        .collect()
}

fn hex_val(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => panic!("invalid hex character: {:?}", c as char),
    }
}
