#![cfg(all(test, feature = "std"))]

use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::select;

use crate::hkdf::hkdf_sha3;
use crate::hmac::hmac_sha3;
use crate::keccak::keccak_f1600;
use crate::pbkdf2::pbkdf2_sha3;
use crate::rc4::{rc4_transform, Rc4};
use crate::sha3::{sha3_digest, Sha3_256, Sha3Variant, Shake128, Shake256};

/// Runs `$body` with `$d` bound to the RustCrypto hasher matching the variant.
macro_rules! with_reference {
    ($variant:expr, |$d:ident| $body:expr) => {
        match $variant {
            Sha3Variant::Sha3_224 => {
                type $d = ::sha3::Sha3_224;
                $body
            }
            Sha3Variant::Sha3_256 => {
                type $d = ::sha3::Sha3_256;
                $body
            }
            Sha3Variant::Sha3_384 => {
                type $d = ::sha3::Sha3_384;
                $body
            }
            Sha3Variant::Sha3_512 => {
                type $d = ::sha3::Sha3_512;
                $body
            }
        }
    };
}

fn reference_digest(variant: Sha3Variant, data: &[u8]) -> Vec<u8> {
    use ::sha3::Digest;

    with_reference!(variant, |D| D::digest(data).to_vec())
}

fn reference_hmac(variant: Sha3Variant, message: &[u8], key: &[u8]) -> Vec<u8> {
    use ::hmac::{Hmac, Mac};

    with_reference!(variant, |D| {
        let mut mac = <Hmac<D> as Mac>::new_from_slice(key).unwrap();
        Mac::update(&mut mac, message);
        mac.finalize().into_bytes().to_vec()
    })
}

fn reference_hkdf(
    variant: Sha3Variant,
    ikm: &[u8],
    len: usize,
    info: &[u8],
    salt: &[u8],
) -> Vec<u8> {
    let mut okm = vec![0u8; len];
    with_reference!(variant, |D| ::hkdf::Hkdf::<D>::new(Some(salt), ikm)
        .expand(info, &mut okm)
        .unwrap());
    okm
}

fn reference_pbkdf2(
    variant: Sha3Variant,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    len: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; len];
    with_reference!(variant, |D| ::pbkdf2::pbkdf2::<::hmac::Hmac<D>>(
        password, salt, iterations, &mut out
    ));
    out
}

fn reference_shake(rate: usize, data: &[u8], n: usize) -> Vec<u8> {
    use ::sha3::digest::{ExtendableOutput, Update, XofReader};

    let mut out = vec![0u8; n];
    if rate == 168 {
        let mut h = ::sha3::Shake128::default();
        Update::update(&mut h, data);
        h.finalize_xof().read(&mut out);
    } else {
        let mut h = ::sha3::Shake256::default();
        Update::update(&mut h, data);
        h.finalize_xof().read(&mut out);
    }
    out
}

/// An arbitrary SHA-3 variant.
fn arb_variant() -> impl Strategy<Value = Sha3Variant> {
    select(Sha3Variant::ALL.to_vec())
}

/// An arbitrary byte string with length 0..400, long enough to span several blocks of any rate.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 0..400)
}

proptest! {
    /// The permutation must agree with the `keccak` crate on arbitrary states.
    #[test]
    fn permutation_matches_reference(lanes in any::<[u64; 25]>()) {
        let mut ours = lanes;
        let mut theirs = lanes;
        keccak_f1600(&mut ours);
        ::keccak::f1600(&mut theirs);
        prop_assert_eq!(ours, theirs);
    }

    /// Digests must agree with the `sha3` crate for every variant.
    #[test]
    fn digest_matches_reference(variant in arb_variant(), data in arb_data()) {
        prop_assert_eq!(sha3_digest(variant, &data), reference_digest(variant, &data));
    }

    /// Splitting the input into chunks must not change the digest.
    #[test]
    fn streaming_matches_one_shot(data in arb_data(), chunk in 1usize..200) {
        let mut h = Sha3_256::new();
        for piece in data.chunks(chunk) {
            h.update(piece);
        }
        prop_assert_eq!(h.finalize(), Sha3_256::digest(&data));
    }

    /// SHAKE output of any length must agree with the `sha3` crate.
    #[test]
    fn shake_matches_reference(data in arb_data(), n in 1usize..600) {
        let mut out = vec![0u8; n];
        Shake128::hash_into(&data, &mut out);
        prop_assert_eq!(&out, &reference_shake(168, &data, n));

        Shake256::hash_into(&data, &mut out);
        prop_assert_eq!(&out, &reference_shake(136, &data, n));
    }

    /// HMAC must agree with the `hmac` crate, including keys longer than the block.
    #[test]
    fn hmac_matches_reference(
        variant in arb_variant(),
        key in vec(any::<u8>(), 0..300),
        message in arb_data(),
    ) {
        prop_assert_eq!(
            hmac_sha3(variant, &message, &key),
            reference_hmac(variant, &message, &key)
        );
    }

    /// Flipping any bit of the key or message must change the tag.
    #[test]
    fn hmac_detects_mutation(
        variant in arb_variant(),
        key in vec(any::<u8>(), 1..200),
        message in vec(any::<u8>(), 1..200),
        idx in any::<prop::sample::Index>(),
        bit in 0u8..8,
    ) {
        let tag = hmac_sha3(variant, &message, &key);

        let mut m = message.clone();
        let at = idx.index(m.len());
        m[at] ^= 1 << bit;
        prop_assert_ne!(&tag, &hmac_sha3(variant, &m, &key));

        let mut k = key.clone();
        let at = idx.index(k.len());
        k[at] ^= 1 << bit;
        prop_assert_ne!(&tag, &hmac_sha3(variant, &message, &k));
    }

    /// HKDF must agree with the `hkdf` crate.
    #[test]
    fn hkdf_matches_reference(
        variant in arb_variant(),
        ikm in vec(any::<u8>(), 1..100),
        salt in vec(any::<u8>(), 0..200),
        info in vec(any::<u8>(), 0..100),
        len in 1usize..1000,
    ) {
        prop_assert_eq!(
            hkdf_sha3(variant, &ikm, len, &info, &salt).unwrap(),
            reference_hkdf(variant, &ikm, len, &info, &salt)
        );
    }

    /// A shorter HKDF output must be a prefix of a longer one.
    #[test]
    fn hkdf_prefix_consistency(
        variant in arb_variant(),
        ikm in vec(any::<u8>(), 1..64),
        info in vec(any::<u8>(), 0..64),
        a in 1usize..1000,
        b in 1usize..1000,
    ) {
        let (short, long) = if a <= b { (a, b) } else { (b, a) };
        let long_okm = hkdf_sha3(variant, &ikm, long, &info, b"salt").unwrap();
        let short_okm = hkdf_sha3(variant, &ikm, short, &info, b"salt").unwrap();
        prop_assert_eq!(&long_okm[..short], &short_okm[..]);
    }

    /// PBKDF2 must agree with the `pbkdf2` crate.
    #[test]
    fn pbkdf2_matches_reference(
        variant in arb_variant(),
        password in vec(any::<u8>(), 0..200),
        salt in vec(any::<u8>(), 0..64),
        iterations in 1u32..8,
        len in 1usize..300,
    ) {
        prop_assert_eq!(
            pbkdf2_sha3(variant, &password, &salt, iterations, len).unwrap(),
            reference_pbkdf2(variant, &password, &salt, iterations, len)
        );
    }

    /// Applying RC4 twice under the same key must restore the input.
    #[test]
    fn rc4_involution(key in vec(any::<u8>(), 0..300), data in arb_data()) {
        let ciphertext = rc4_transform(&key, &data);
        prop_assert_eq!(ciphertext.len(), data.len());
        prop_assert_eq!(rc4_transform(&key, &ciphertext), data);
    }

    /// A key shorter than 16 bytes must behave exactly like its zero-padded form.
    #[test]
    fn rc4_short_key_padding(key in vec(any::<u8>(), 0..16), data in arb_data()) {
        let mut padded = key.clone();
        padded.resize(16, 0);
        prop_assert_eq!(rc4_transform(&key, &data), rc4_transform(&padded, &data));
    }

    /// Keystream chunking must not change the output.
    #[test]
    fn rc4_streaming(key in vec(any::<u8>(), 1..64), data in arb_data(), chunk in 1usize..50) {
        let mut rc4 = Rc4::new(&key);
        let mut streamed = data.clone();
        for piece in streamed.chunks_mut(chunk) {
            rc4.apply_keystream(piece);
        }
        prop_assert_eq!(streamed, rc4_transform(&key, &data));
    }
}
