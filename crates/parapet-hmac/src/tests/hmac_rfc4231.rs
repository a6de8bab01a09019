// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

// HMAC-SHA256 tests against the RFC 4231 vectors
//
// Reference:
// [1] RFC 4231: Identifiers and Test Vectors for HMAC-SHA-224, HMAC-SHA-256,
//     HMAC-SHA-384, and HMAC-SHA-512
//     https://datatracker.ietf.org/doc/html/rfc4231#section-4

use parapet_util::hex_to_bytes;

use crate::{HmacSha256State, hmac_sha256};

/// Runs a vector through both the one-shot wrapper and the streaming state
fn check(key: &[u8], msg: &[u8], mac_hex: &str) {
    let expected = hex_to_bytes(mac_hex);

    let mut mac = [0u8; 32];
    hmac_sha256(key, msg, &mut mac);
    assert_eq!(&mac[..], &expected[..], "one-shot MAC mismatch");

    let mut state = HmacSha256State::new(key);
    state.update(msg);
    let mut streamed = [0u8; 32];
    state.finish(&mut streamed);
    assert_eq!(streamed, mac, "streaming MAC mismatch");
}

#[test]
fn test_rfc4231_case_1() {
    check(
        &[0x0b; 20],
        b"Hi There",
        "b0344c61d8db38535ca8afceaf0bf12b881dc200c9833da726e9376c2e32cff7",
    );
}

#[test]
fn test_rfc4231_case_2() {
    check(
        b"Jefe",
        b"what do ya want for nothing?",
        "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843",
    );
}

#[test]
fn test_rfc4231_case_3() {
    check(
        &[0xaa; 20],
        &[0xdd; 50],
        "773ea91e36800e46854db8ebd09181a72959098b3ef8c122d9635514ced565fe",
    );
}

#[test]
fn test_rfc4231_case_4() {
    check(
        &hex_to_bytes("0102030405060708090a0b0c0d0e0f10111213141516171819"),
        &[0xcd; 50],
        "82558a389a443c0ea4cc819899f2083a85f0faa3e578f8077a2e3ff46729665b",
    );
}

#[test]
fn test_rfc4231_case_5_truncated() {
    // Case 5 publishes only the leftmost 128 bits
    let mut mac = [0u8; 32];
    hmac_sha256(&[0x0c; 20], b"Test With Truncation", &mut mac);

    let expected = hex_to_bytes("a3b6167473100ee06e0c796c2955552b");
    assert_eq!(&mac[..16], &expected[..]);
}

#[test]
fn test_rfc4231_case_6() {
    // 131-byte key, above the block size: the key gets hashed first
    check(
        &[0xaa; 131],
        b"Test Using Larger Than Block-Size Key - Hash Key First",
        "60e431591ee0b67f0d8a26aacbf5b77f8e0bc6213728c5140546040f0ee37f54",
    );
}

#[test]
fn test_rfc4231_case_7() {
    check(
        &[0xaa; 131],
        b"This is a test using a larger than block-size key and a larger than \
block-size data. The key needs to be hashed before being used by the HMAC \
algorithm.",
        "9b09ffa71b942fcb27635fbcd5b0e944bfdc63644f0713938a7f51535c3a35e2",
    );
}
