//! HKDF (RFC 5869) over HMAC with any [`HashFunction`].

use zeroize::Zeroize;

use crate::error::Error;
use crate::hmac::Hmac;
use crate::macros::with_sha3;
use crate::sha3::Sha3Variant;
use crate::{HashFunction, MAX_OUTPUT_LEN};

/// The largest number of expand blocks; the block counter is a single byte.
pub const MAX_BLOCKS: usize = 255;

/// A pseudorandom key produced by the extract step, ready to be expanded.
#[derive(Clone)]
pub struct Hkdf<H: HashFunction> {
    prk: [u8; MAX_OUTPUT_LEN],
    prf: Hmac<H>,
}

impl<H: HashFunction> Hkdf<H> {
    /// The longest output [`Hkdf::expand`] produces: `255 * H::OUTPUT_LEN` bytes.
    pub const MAX_OKM_LEN: usize = MAX_BLOCKS * H::OUTPUT_LEN;

    /// Computes `PRK = HMAC(salt, ikm)`.
    ///
    /// An empty salt is replaced with `H::OUTPUT_LEN` zero bytes.
    pub fn extract(salt: &[u8], ikm: &[u8]) -> Self {
        let zeros = [0u8; MAX_OUTPUT_LEN];
        let salt = if salt.is_empty() {
            &zeros[..H::OUTPUT_LEN]
        } else {
            salt
        };

        let mut prk = [0u8; MAX_OUTPUT_LEN];
        Hmac::<H>::mac_into(salt, ikm, &mut prk[..H::OUTPUT_LEN]);
        let prf = Hmac::new(&prk[..H::OUTPUT_LEN]);
        Hkdf { prk, prf }
    }

    /// The pseudorandom key.
    pub fn prk(&self) -> &[u8] {
        &self.prk[..H::OUTPUT_LEN]
    }

    /// Fills `okm` with `T(1) || T(2) || ...`, where `T(i) = HMAC(PRK, T(i-1) || info || i)` and
    /// `T(0)` is empty.
    ///
    /// Returns [`Error::OutputTooLong`] if `okm` is longer than [`Self::MAX_OKM_LEN`].
    pub fn expand(&self, info: &[u8], okm: &mut [u8]) -> Result<(), Error> {
        if okm.len() > Self::MAX_OKM_LEN {
            return Err(Error::OutputTooLong {
                requested: okm.len(),
                max: Self::MAX_OKM_LEN,
            });
        }

        self.fill(info, okm);
        Ok(())
    }

    // Callers keep `okm.len()` at or below `MAX_OKM_LEN`, so the counter never wraps.
    fn fill(&self, info: &[u8], okm: &mut [u8]) {
        let mut t = [0u8; MAX_OUTPUT_LEN];
        let mut t_len = 0;
        for (i, block) in okm.chunks_mut(H::OUTPUT_LEN).enumerate() {
            let mut mac = self.prf.clone();
            mac.update(&t[..t_len]);
            mac.update(info);
            mac.update(&[i as u8 + 1]);
            mac.finalize_into(&mut t[..H::OUTPUT_LEN]);
            t_len = H::OUTPUT_LEN;

            block.copy_from_slice(&t[..block.len()]);
        }
        t.zeroize();
    }
}

impl<H: HashFunction> Drop for Hkdf<H> {
    fn drop(&mut self) {
        self.prk.zeroize();
    }
}

/// Derives `okm.len()` bytes with HKDF-SHA3.
///
/// Unlike [`hkdf_sha3`], the output length is the buffer length; an empty buffer is left as is.
pub fn hkdf_sha3_into(
    variant: Sha3Variant,
    ikm: &[u8],
    info: &[u8],
    salt: &[u8],
    okm: &mut [u8],
) -> Result<(), Error> {
    check_params(variant, ikm, okm.len())?;
    if okm.is_empty() {
        return Ok(());
    }

    derive(variant, ikm, info, salt, okm);
    Ok(())
}

/// Derives `length` bytes with HKDF-SHA3. A `length` of 0 means `variant.output_len()`.
///
/// Returns [`Error::EmptyInput`] if `ikm` is empty and [`Error::OutputTooLong`] if `length`
/// exceeds `255 * variant.output_len()`.
#[cfg(feature = "std")]
pub fn hkdf_sha3(
    variant: Sha3Variant,
    ikm: &[u8],
    length: usize,
    info: &[u8],
    salt: &[u8],
) -> Result<Vec<u8>, Error> {
    let length = if length == 0 { variant.output_len() } else { length };
    check_params(variant, ikm, length)?;

    let mut okm = vec![0u8; length];
    derive(variant, ikm, info, salt, &mut okm);
    Ok(okm)
}

// Runs after `check_params`.
fn derive(variant: Sha3Variant, ikm: &[u8], info: &[u8], salt: &[u8], okm: &mut [u8]) {
    with_sha3!(variant, |H| Hkdf::<H>::extract(salt, ikm).fill(info, okm))
}

fn check_params(variant: Sha3Variant, ikm: &[u8], length: usize) -> Result<(), Error> {
    if ikm.is_empty() {
        return Err(Error::EmptyInput("input keying material"));
    }

    let max = MAX_BLOCKS * variant.output_len();
    if length > max {
        return Err(Error::OutputTooLong {
            requested: length,
            max,
        });
    }

    Ok(())
}
