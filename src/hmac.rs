//! HMAC (RFC 2104) over any [`HashFunction`].
//!
//! The key is hashed down when it is longer than the block, zero-padded on the right otherwise,
//! and XORed with `0x36`/`0x5C` repeated to the block length. Both padded keys are absorbed up
//! front, so cloning an [`Hmac`] reuses the keyed state without re-processing the key.

use core::fmt;

use constant_time_eq::constant_time_eq;
use zeroize::Zeroize;

use crate::error::Error;
use crate::macros::with_sha3;
use crate::sha3::Sha3Variant;
use crate::{HashFunction, MAX_BLOCK_LEN, MAX_OUTPUT_LEN};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5C;

/// An incremental HMAC instance keyed at construction.
#[derive(Clone)]
pub struct Hmac<H: HashFunction> {
    inner: H,
    outer: H,
}

impl<H: HashFunction> Hmac<H> {
    pub fn new(key: &[u8]) -> Self {
        debug_assert!(H::BLOCK_LEN <= MAX_BLOCK_LEN && H::OUTPUT_LEN <= MAX_OUTPUT_LEN);

        let mut block = [0u8; MAX_BLOCK_LEN];
        let key_block = &mut block[..H::BLOCK_LEN];
        if key.len() > H::BLOCK_LEN {
            H::digest_into(key, &mut key_block[..H::OUTPUT_LEN]);
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        for b in key_block.iter_mut() {
            *b ^= IPAD;
        }
        let mut inner = H::default();
        inner.update(key_block);

        for b in key_block.iter_mut() {
            *b ^= IPAD ^ OPAD;
        }
        let mut outer = H::default();
        outer.update(key_block);

        block.zeroize();
        Hmac { inner, outer }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Writes the tag into `out`, which must be exactly `H::OUTPUT_LEN` bytes long.
    pub fn finalize_into(self, out: &mut [u8]) {
        let Hmac { inner, mut outer } = self;

        let mut inner_hash = [0u8; MAX_OUTPUT_LEN];
        inner.finalize_into(&mut inner_hash[..H::OUTPUT_LEN]);
        outer.update(&inner_hash[..H::OUTPUT_LEN]);
        outer.finalize_into(out);
        inner_hash.zeroize();
    }

    /// Checks `tag` against the computed tag in constant time.
    #[must_use]
    pub fn verify(self, tag: &[u8]) -> bool {
        let mut expected = [0u8; MAX_OUTPUT_LEN];
        self.finalize_into(&mut expected[..H::OUTPUT_LEN]);
        let ok = constant_time_eq(&expected[..H::OUTPUT_LEN], tag);
        expected.zeroize();
        ok
    }

    /// Computes `HMAC(key, message)` in one shot.
    pub fn mac_into(key: &[u8], message: &[u8], out: &mut [u8]) {
        let mut mac = Self::new(key);
        mac.update(message);
        mac.finalize_into(out);
    }
}

impl<H: HashFunction> fmt::Debug for Hmac<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hmac").finish_non_exhaustive()
    }
}

/// Writes `HMAC-SHA3(key, message)` into `out`.
///
/// Returns [`Error::BufferLength`] unless `out` is exactly `variant.output_len()` bytes long.
pub fn hmac_sha3_into(
    variant: Sha3Variant,
    message: &[u8],
    key: &[u8],
    out: &mut [u8],
) -> Result<(), Error> {
    if out.len() != variant.output_len() {
        return Err(Error::BufferLength {
            expected: variant.output_len(),
            actual: out.len(),
        });
    }

    with_sha3!(variant, |H| Hmac::<H>::mac_into(key, message, out));
    Ok(())
}

/// Returns `HMAC-SHA3(key, message)`.
#[cfg(feature = "std")]
pub fn hmac_sha3(variant: Sha3Variant, message: &[u8], key: &[u8]) -> Vec<u8> {
    let mut out = vec![0u8; variant.output_len()];
    with_sha3!(variant, |H| Hmac::<H>::mac_into(key, message, &mut out));
    out
}

/// Checks `tag` against `HMAC-SHA3(key, message)` in constant time.
#[must_use]
pub fn hmac_sha3_verify(variant: Sha3Variant, message: &[u8], key: &[u8], tag: &[u8]) -> bool {
    with_sha3!(variant, |H| {
        let mut mac = Hmac::<H>::new(key);
        mac.update(message);
        mac.verify(tag)
    })
}
