//! Natively implemented Keccak/SHA-3 and the constructions built on it, plus RC4.
//!
//! The crate is organized leaves-first:
//!
//! 1. [`keccak`] holds the Keccak-p\[1600\] permutation.
//! 2. [`sponge`] wraps any [`Permutation`] in a padded absorb/squeeze sponge.
//! 3. [`sha3`] defines SHA3-224/256/384/512 and SHAKE128/256 on top of the sponge, plus the
//!    [`Sha3Variant`] selector.
//! 4. [`hmac`], [`hkdf`], and [`pbkdf2`] are keyed constructions over any [`HashFunction`].
//! 5. [`rc4`] is an independent stream cipher.
//!
//! Every operation is a pure function of its inputs. Working state lives on the stack of a single
//! call and is wiped before it is released.
//!
//! ```
//! use nativecrypt::{hkdf_sha3, Sha3Variant};
//!
//! let okm = hkdf_sha3(Sha3Variant::Sha3_256, b"input key", 42, b"context", b"salt").unwrap();
//! assert_eq!(okm.len(), 42);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

use zeroize::Zeroize;

mod macros;

pub mod error;
pub mod hkdf;
pub mod hmac;
pub mod keccak;
pub mod pbkdf2;
pub mod rc4;
pub mod sha3;
pub mod sponge;

mod fuzzing;

pub use crate::error::Error;
pub use crate::hkdf::hkdf_sha3_into;
pub use crate::hmac::{hmac_sha3_into, hmac_sha3_verify};
pub use crate::pbkdf2::pbkdf2_sha3_into;
pub use crate::rc4::rc4_transform_mut;
pub use crate::sha3::Sha3Variant;

#[cfg(feature = "std")]
pub use crate::hkdf::hkdf_sha3;
#[cfg(feature = "std")]
pub use crate::hmac::hmac_sha3;
#[cfg(feature = "std")]
pub use crate::pbkdf2::pbkdf2_sha3;
#[cfg(feature = "std")]
pub use crate::rc4::rc4_transform;
#[cfg(feature = "std")]
pub use crate::sha3::sha3_digest;

/// The largest block length of any [`HashFunction`] in this crate (SHA3-224's rate).
pub const MAX_BLOCK_LEN: usize = 144;

/// The largest output length of any [`HashFunction`] in this crate (SHA3-512).
pub const MAX_OUTPUT_LEN: usize = 64;

/// A fixed-width cryptographic permutation operating on a byte-addressable state.
pub trait Permutation<const WIDTH: usize>: Default + Zeroize {
    /// Returns an immutable pointer to the permutation's state.
    fn state(&self) -> &[u8; WIDTH];

    /// Returns a mutable pointer to the permutation's state.
    fn state_mut(&mut self) -> &mut [u8; WIDTH];

    /// Permutes the permutation's state.
    fn permute(&mut self);

    /// Adds the given byte to the permutation's state at the given offset.
    #[inline(always)]
    fn add_byte(&mut self, byte: u8, offset: usize) {
        self.state_mut()[offset] ^= byte;
    }

    /// Adds the given bytes to the permutation's state, starting at the given offset.
    #[inline(always)]
    fn add_bytes(&mut self, bytes: &[u8], offset: usize) {
        for (st_byte, byte) in self.state_mut()[offset..].iter_mut().zip(bytes) {
            *st_byte ^= byte;
        }
    }

    /// Fills the given mutable slice with bytes from the permutation's state, starting at the
    /// given offset.
    #[inline(always)]
    fn extract_bytes(&self, out: &mut [u8], offset: usize) {
        out.copy_from_slice(&self.state()[offset..offset + out.len()]);
    }
}

/// An incremental hash function with a fixed output length, usable as the PRF of [`hmac::Hmac`].
pub trait HashFunction: Clone + Default {
    /// The number of bytes the function absorbs per compression (HMAC's `B`).
    const BLOCK_LEN: usize;

    /// The number of bytes of output (HMAC's `L`).
    const OUTPUT_LEN: usize;

    /// Absorbs more input.
    fn update(&mut self, data: &[u8]);

    /// Writes the digest of everything absorbed so far into `out`.
    ///
    /// `out` must be exactly [`Self::OUTPUT_LEN`] bytes long.
    fn finalize_into(self, out: &mut [u8]);

    /// Hashes `data` in one shot.
    fn digest_into(data: &[u8], out: &mut [u8]) {
        let mut h = Self::default();
        h.update(data);
        h.finalize_into(out);
    }
}
