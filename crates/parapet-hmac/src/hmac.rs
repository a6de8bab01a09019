// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 implementation per RFC 2104
//!
//! Constant-space construction: one 64-byte key block and one embedded
//! [`Sha256State`], nothing else. The pads are applied by XOR-toggling the
//! key block in place (XOR is self-inverse, so toggling twice restores the
//! unpadded key), and the key-rotation transform of
//! [`RekeyHmacSha256State::finish_to_key`] derives a fresh key inside the
//! same block.

use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::consts::{BLOCK_LEN, HASH_LEN};
use crate::error::MacError;
use crate::sha256::Sha256State;

/// Inner pad byte per RFC 2104
const IPAD: u8 = 0x36;

/// Outer pad byte per RFC 2104
const OPAD: u8 = 0x5c;

/// HMAC-SHA256 streaming state
///
/// Holds the key block K' (the key, zero-extended to the block size) and
/// the engine accumulating the inner hash. Outside of an operation the key
/// block always holds the unpadded key; pads exist only transiently while
/// a toggle pair is open. The state is zeroized on drop.
///
/// A key of any length is accepted; keys longer than the block size are
/// replaced by their SHA-256 digest per RFC 2104.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct HmacSha256State {
    /// Key block K', kept as two digest-sized halves. The halves matter
    /// only to the key-collapse transform; every other operation views the
    /// block flattened.
    key: [[u8; HASH_LEN]; 2],

    /// Engine accumulating the inner hash
    sha: Sha256State,
}

impl HmacSha256State {
    /// Create a state keyed with `key`, ready for
    /// [`update`](HmacSha256State::update) calls
    pub fn new(key: &[u8]) -> Self {
        let mut state = Self {
            key: [[0u8; HASH_LEN]; 2],
            sha: Sha256State::new(),
        };

        if key.len() > BLOCK_LEN {
            // K' = SHA-256(key), zero-extended; the digest fills the lower
            // half and the upper half is already zero
            state.sha.update(key);
            let [lo, _] = &mut state.key;
            state.sha.finalize(lo);
        } else {
            state.key.as_flattened_mut()[..key.len()].copy_from_slice(key);
        }

        state.reinit();
        state
    }

    /// XOR every byte of the key block with `pad`
    ///
    /// Self-inverse: a second toggle with the same pad restores the block.
    fn toggle_pad(&mut self, pad: u8) {
        for b in self.key.as_flattened_mut() {
            *b ^= pad;
        }
    }

    /// Restart the inner hash from the currently stored key
    ///
    /// Feeds K' XOR ipad into a freshly reset engine and restores the key
    /// block. Afterwards the state accepts
    /// [`update`](HmacSha256State::update) calls again, as if newly
    /// created with the same key.
    pub fn reinit(&mut self) {
        self.toggle_pad(IPAD);

        self.sha.reset();
        self.sha.update(self.key.as_flattened());

        self.toggle_pad(IPAD);
    }

    /// Stream message bytes
    ///
    /// Callable any number of times in any chunking; splits are not
    /// observable in the MAC.
    pub fn update(&mut self, data: &[u8]) {
        self.sha.update(data);
    }

    /// Finalize and output the MAC
    ///
    /// Computes SHA-256(K' XOR opad || inner hash), using `out` as scratch
    /// for the inner digest. The key block is restored, but the engine is
    /// consumed: this does NOT reinitialize, so feeding more data without
    /// an explicit [`reinit`](HmacSha256State::reinit) first is a contract
    /// violation and yields garbage.
    pub fn finish(&mut self, out: &mut [u8; HASH_LEN]) {
        // Inner hash lands in out
        self.sha.finalize(out);

        self.toggle_pad(OPAD);

        self.sha.reset();
        self.sha.update(self.key.as_flattened());
        self.sha.update(&out[..]);
        self.sha.finalize(out);

        self.toggle_pad(OPAD);
    }

    /// Collapse the running MAC into a fresh key, in place
    ///
    /// Requires that the logical key is exactly [`HASH_LEN`] bytes, i.e.
    /// the upper half of the key block is zero. That invariant is enforced
    /// by [`RekeyHmacSha256State`], the only caller. The step order is
    /// load-bearing: each step consumes the byte layout the previous one
    /// left behind.
    pub(crate) fn finish_to_key(&mut self) {
        // Outer-pad the whole block. Lower half: key XOR opad. Upper half
        // was zero, so it now holds plain opad bytes.
        self.toggle_pad(OPAD);

        let Self { key, sha } = self;
        let [lo, hi] = key;

        // The inner hash lands in the upper half, overwriting the opad
        // bytes there
        sha.finalize(hi);

        sha.reset();

        // First half of the outer-padded key
        sha.update(&lo[..]);

        // Second half of the outer-padded key is plain opad by
        // construction; rebuild it over the lower half and feed it
        *lo = [OPAD; HASH_LEN];
        sha.update(&lo[..]);

        // Inner hash, completing opad_key || inner_digest
        sha.update(&hi[..]);

        // The new key lands in the lower half
        sha.finalize(lo);

        // Restore "key || zero padding" for the new key
        hi.zeroize();

        // Stream under the new key
        self.reinit();
    }

    /// Key block accessor for buffer-hygiene tests
    #[cfg(test)]
    pub(crate) fn key_block(&self) -> &[u8] {
        self.key.as_flattened()
    }
}

/// HMAC-SHA256 state with a digest-sized key, supporting in-place key
/// rotation
///
/// The constructor only accepts a `[u8; 32]` key, so the key block is
/// always "key || zero padding", the precondition
/// [`finish_to_key`](RekeyHmacSha256State::finish_to_key) relies on, made
/// unrepresentable to violate; the transform itself preserves it. This is
/// the shape the key-update step of HMAC-DRBG (NIST SP 800-90A) needs:
/// K is always one digest wide, and rotating it must not allocate.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct RekeyHmacSha256State {
    hmac: HmacSha256State,
}

impl RekeyHmacSha256State {
    /// Create a state keyed with a digest-sized key
    pub fn new(key: &[u8; HASH_LEN]) -> Self {
        Self {
            hmac: HmacSha256State::new(key),
        }
    }

    /// Restart the inner hash from the current key
    pub fn reinit(&mut self) {
        self.hmac.reinit();
    }

    /// Stream message bytes
    pub fn update(&mut self, data: &[u8]) {
        self.hmac.update(data);
    }

    /// Finalize and output the MAC
    ///
    /// Same contract as [`HmacSha256State::finish`]: no implicit
    /// reinitialization.
    pub fn finish(&mut self, out: &mut [u8; HASH_LEN]) {
        self.hmac.finish(out);
    }

    /// Replace the key with HMAC(key, streamed bytes), in place
    ///
    /// Equivalent to finishing the MAC over everything streamed since the
    /// last (re)initialization and rekeying with the result, but computed
    /// inside the existing key block with no extra buffer. Afterwards the
    /// state streams under the new key; no explicit
    /// [`reinit`](RekeyHmacSha256State::reinit) is needed.
    pub fn finish_to_key(&mut self) {
        self.hmac.finish_to_key();
    }

    /// Key block accessor for buffer-hygiene tests
    #[cfg(test)]
    pub(crate) fn key_block(&self) -> &[u8] {
        self.hmac.key_block()
    }
}

/// One-shot HMAC-SHA256 per RFC 2104
///
/// # Arguments
/// * `key` - HMAC key (arbitrary length)
/// * `message` - Input message (arbitrary length)
/// * `out` - Output MAC (32 bytes)
pub fn hmac_sha256(key: &[u8], message: &[u8], out: &mut [u8; HASH_LEN]) {
    let mut state = HmacSha256State::new(key);
    state.update(message);
    state.finish(out);
}

/// One-shot HMAC-SHA256 verification
///
/// Computes the MAC of `(key, message)` and compares it with `tag` in
/// constant time. `tag` may be a left-truncated MAC; its length must be
/// in `1..=32` bytes. The computed MAC is scrubbed before returning.
pub fn hmac_sha256_verify(key: &[u8], message: &[u8], tag: &[u8]) -> Result<(), MacError> {
    if tag.is_empty() || tag.len() > HASH_LEN {
        return Err(MacError::TagLength);
    }

    let mut computed = [0u8; HASH_LEN];
    hmac_sha256(key, message, &mut computed);

    let matches: bool = computed[..tag.len()].ct_eq(tag).into();
    computed.zeroize();

    if matches { Ok(()) } else { Err(MacError::Verify) }
}
