//! PBKDF2 (RFC 8018, section 5.2) with HMAC over any [`HashFunction`] as the PRF.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use crate::error::Error;
use crate::hmac::Hmac;
use crate::macros::with_sha3;
use crate::sha3::Sha3Variant;
use crate::{HashFunction, MAX_OUTPUT_LEN};

/// Fills `out` with PBKDF2-HMAC-`H` of `password` and `salt`.
///
/// Block `i` (counting from 1) is `U_1 ^ U_2 ^ ... ^ U_c`, where `U_1 = HMAC(password, salt ||
/// BE32(i))` and `U_j = HMAC(password, U_{j-1})`.
///
/// Returns [`Error::ZeroIterations`] if `iterations` is zero and [`Error::OutputTooLong`] if more
/// than `(2^32 - 1) * H::OUTPUT_LEN` bytes are requested.
pub fn pbkdf2<H: HashFunction>(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), Error> {
    check_params(H::OUTPUT_LEN, iterations, out.len())?;
    derive::<H>(password, salt, iterations, out);
    Ok(())
}

// Runs after `check_params`, so the 32-bit block index never wraps.
fn derive<H: HashFunction>(password: &[u8], salt: &[u8], iterations: u32, out: &mut [u8]) {
    let prf = Hmac::<H>::new(password);
    let mut u = [0u8; MAX_OUTPUT_LEN];
    let mut acc = [0u8; MAX_OUTPUT_LEN];
    let u = &mut u[..H::OUTPUT_LEN];
    let acc = &mut acc[..H::OUTPUT_LEN];

    for (i, block) in out.chunks_mut(H::OUTPUT_LEN).enumerate() {
        let mut index = [0u8; 4];
        BigEndian::write_u32(&mut index, i as u32 + 1);

        let mut mac = prf.clone();
        mac.update(salt);
        mac.update(&index);
        mac.finalize_into(u);
        acc.copy_from_slice(u);

        for _ in 1..iterations {
            let mut mac = prf.clone();
            mac.update(u);
            mac.finalize_into(u);
            for (a, b) in acc.iter_mut().zip(u.iter()) {
                *a ^= b;
            }
        }

        block.copy_from_slice(&acc[..block.len()]);
    }

    u.zeroize();
    acc.zeroize();
}

/// Fills `out` with PBKDF2-HMAC-SHA3 of `password` and `salt`.
pub fn pbkdf2_sha3_into(
    variant: Sha3Variant,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), Error> {
    with_sha3!(variant, |H| pbkdf2::<H>(password, salt, iterations, out))
}

/// Derives `length` bytes with PBKDF2-HMAC-SHA3. A `length` of 0 means `variant.output_len()`.
#[cfg(feature = "std")]
pub fn pbkdf2_sha3(
    variant: Sha3Variant,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    length: usize,
) -> Result<Vec<u8>, Error> {
    let length = if length == 0 { variant.output_len() } else { length };
    check_params(variant.output_len(), iterations, length)?;

    let mut out = vec![0u8; length];
    with_sha3!(variant, |H| derive::<H>(password, salt, iterations, &mut out));
    Ok(out)
}

fn check_params(hash_len: usize, iterations: u32, length: usize) -> Result<(), Error> {
    if iterations == 0 {
        return Err(Error::ZeroIterations);
    }

    let max = (u32::MAX as u64).saturating_mul(hash_len as u64);
    if length as u64 > max {
        return Err(Error::OutputTooLong {
            requested: length,
            max: usize::try_from(max).unwrap_or(usize::MAX),
        });
    }

    Ok(())
}
