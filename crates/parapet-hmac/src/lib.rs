// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # parapet_hmac
//!
//! Constant-space HMAC-SHA256 with in-place key rotation and secure memory
//! handling.
//!
//! The entire working set is one 64-byte key block plus one SHA-256
//! streaming state: no allocation, no growth with message or key length.
//! Pads are applied by XOR-toggling the key block in place, and the
//! key-rotation transform used by HMAC-DRBG key updates derives its new key
//! inside the same block. Every secret-bearing state is zeroized on drop.
//!
//! ## Core Types
//!
//! - [`HmacSha256State`]: streaming HMAC for keys of any length
//! - [`RekeyHmacSha256State`]: HMAC keyed with exactly one digest,
//!   unlocking [`finish_to_key`](RekeyHmacSha256State::finish_to_key)
//! - [`Sha256State`]: the underlying SHA-256 engine
//!
//! ## Example
//!
//! ```rust
//! use parapet_hmac::{HmacSha256State, hmac_sha256, hmac_sha256_verify};
//!
//! // One-shot
//! let mut mac = [0u8; 32];
//! hmac_sha256(b"key", b"message", &mut mac);
//! assert!(hmac_sha256_verify(b"key", b"message", &mac).is_ok());
//!
//! // Streaming, chunked arbitrarily
//! let mut state = HmacSha256State::new(b"key");
//! state.update(b"mess");
//! state.update(b"age");
//! let mut streamed = [0u8; 32];
//! state.finish(&mut streamed);
//! assert_eq!(mac, streamed);
//! ```
//!
//! ## Key rotation
//!
//! ```rust
//! use parapet_hmac::RekeyHmacSha256State;
//!
//! let mut state = RekeyHmacSha256State::new(&[0x0b; 32]);
//! state.update(b"rotation input");
//! state.finish_to_key(); // K = HMAC(K, "rotation input"), no extra buffer
//!
//! let mut mac = [0u8; 32];
//! state.update(b"data under the new key");
//! state.finish(&mut mac);
//! ```
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - RFC 4231: HMAC-SHA Identifiers and Test Vectors
//!   <https://datatracker.ietf.org/doc/html/rfc4231>
//! - RFC 6234: US Secure Hash Algorithms (SHA and SHA-based HMAC and HKDF)
//!   <https://datatracker.ietf.org/doc/html/rfc6234>
//! - NIST SP 800-90A: Recommendation for Random Number Generation Using
//!   Deterministic Random Bit Generators (the consumer of the key-rotation
//!   transform)

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod hmac;
mod sha256;

pub use consts::{BLOCK_LEN, HASH_LEN};
pub use error::MacError;
pub use hmac::{HmacSha256State, RekeyHmacSha256State, hmac_sha256, hmac_sha256_verify};
pub use sha256::Sha256State;
