//! SHA-3 and SHAKE (FIPS 202) over the Keccak-f\[1600\] sponge.
//!
//! For an output of `d` bits the capacity is `2d` and the rate is `1600 - 2d`, so SHA3-224
//! absorbs 144-byte blocks and SHA3-512 absorbs 72-byte blocks.

use core::fmt;

use crate::error::Error;
use crate::keccak::{KeccakF1600, WIDTH};
use crate::macros::with_sha3;
use crate::sponge::Sponge;
use crate::HashFunction;

const SHA3_SUFFIX: u8 = 0x06;
const SHAKE_SUFFIX: u8 = 0x1F;

/// SHA3-224.
pub type Sha3_224 = Sha3<{ (1600 - 2 * 224) / 8 }, { 224 / 8 }>;

/// SHA3-256.
pub type Sha3_256 = Sha3<{ (1600 - 2 * 256) / 8 }, { 256 / 8 }>;

/// SHA3-384.
pub type Sha3_384 = Sha3<{ (1600 - 2 * 384) / 8 }, { 384 / 8 }>;

/// SHA3-512.
pub type Sha3_512 = Sha3<{ (1600 - 2 * 512) / 8 }, { 512 / 8 }>;

/// SHAKE128, with 256 bits of capacity.
pub type Shake128 = Shake<{ (1600 - 256) / 8 }>;

/// SHAKE256, with 512 bits of capacity.
pub type Shake256 = Shake<{ (1600 - 512) / 8 }>;

/// An incremental SHA-3 hasher with a `RATE`-byte block and an `OUTPUT_LEN`-byte digest.
#[derive(Clone, Debug)]
pub struct Sha3<const RATE: usize, const OUTPUT_LEN: usize> {
    sponge: Sponge<KeccakF1600, WIDTH, RATE>,
}

impl<const RATE: usize, const OUTPUT_LEN: usize> Default for Sha3<RATE, OUTPUT_LEN> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const RATE: usize, const OUTPUT_LEN: usize> Sha3<RATE, OUTPUT_LEN> {
    pub fn new() -> Self {
        debug_assert_eq!(RATE, WIDTH - 2 * OUTPUT_LEN);
        Sha3 {
            sponge: Sponge::new(),
        }
    }

    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    /// Writes the digest into `out`, which must be exactly `OUTPUT_LEN` bytes long.
    pub fn finalize_into(mut self, out: &mut [u8]) {
        assert_eq!(out.len(), OUTPUT_LEN, "SHA-3 output buffer has the wrong length");
        self.sponge.pad(SHA3_SUFFIX);
        self.sponge.squeeze_mut(out);
    }

    pub fn finalize(self) -> [u8; OUTPUT_LEN] {
        let mut out = [0u8; OUTPUT_LEN];
        self.finalize_into(&mut out);
        out
    }

    /// Hashes `data` in one shot.
    pub fn digest(data: &[u8]) -> [u8; OUTPUT_LEN] {
        let mut h = Self::new();
        h.update(data);
        h.finalize()
    }
}

impl<const RATE: usize, const OUTPUT_LEN: usize> HashFunction for Sha3<RATE, OUTPUT_LEN> {
    const BLOCK_LEN: usize = RATE;
    const OUTPUT_LEN: usize = OUTPUT_LEN;

    #[inline]
    fn update(&mut self, data: &[u8]) {
        Sha3::update(self, data);
    }

    #[inline]
    fn finalize_into(self, out: &mut [u8]) {
        Sha3::finalize_into(self, out);
    }
}

/// An incremental SHAKE extendable-output function with a `RATE`-byte block.
#[derive(Clone, Debug)]
pub struct Shake<const RATE: usize> {
    sponge: Sponge<KeccakF1600, WIDTH, RATE>,
}

impl<const RATE: usize> Default for Shake<RATE> {
    fn default() -> Self {
        Shake {
            sponge: Sponge::new(),
        }
    }
}

impl<const RATE: usize> Shake<RATE> {
    pub fn update(&mut self, data: &[u8]) {
        self.sponge.absorb(data);
    }

    /// Closes the input and returns a reader over the unbounded output stream.
    pub fn finalize_xof(mut self) -> ShakeReader<RATE> {
        self.sponge.pad(SHAKE_SUFFIX);
        ShakeReader {
            sponge: self.sponge,
        }
    }

    /// Hashes `data` in one shot, filling `out`.
    pub fn hash_into(data: &[u8], out: &mut [u8]) {
        let mut xof = Self::default();
        xof.update(data);
        xof.finalize_xof().read(out);
    }
}

/// The squeezing half of a [`Shake`] instance.
#[derive(Clone, Debug)]
pub struct ShakeReader<const RATE: usize> {
    sponge: Sponge<KeccakF1600, WIDTH, RATE>,
}

impl<const RATE: usize> ShakeReader<RATE> {
    /// Fills `out` with the next bytes of output.
    pub fn read(&mut self, out: &mut [u8]) {
        self.sponge.squeeze_mut(out);
    }

    /// Returns the next `n` bytes of output.
    #[cfg(feature = "std")]
    pub fn squeeze(&mut self, n: usize) -> Vec<u8> {
        self.sponge.squeeze(n)
    }
}

/// One of the four fixed-output SHA-3 functions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sha3Variant {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl Sha3Variant {
    /// All variants, shortest output first.
    pub const ALL: [Sha3Variant; 4] = [
        Sha3Variant::Sha3_224,
        Sha3Variant::Sha3_256,
        Sha3Variant::Sha3_384,
        Sha3Variant::Sha3_512,
    ];

    /// Selects a variant by its output width in bits.
    pub const fn from_bits(bits: u16) -> Result<Self, Error> {
        match bits {
            224 => Ok(Sha3Variant::Sha3_224),
            256 => Ok(Sha3Variant::Sha3_256),
            384 => Ok(Sha3Variant::Sha3_384),
            512 => Ok(Sha3Variant::Sha3_512),
            _ => Err(Error::UnknownVariant(bits)),
        }
    }

    /// The output width in bits.
    pub const fn bits(self) -> u16 {
        match self {
            Sha3Variant::Sha3_224 => 224,
            Sha3Variant::Sha3_256 => 256,
            Sha3Variant::Sha3_384 => 384,
            Sha3Variant::Sha3_512 => 512,
        }
    }

    /// The digest length in bytes.
    pub const fn output_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// The rate in bytes, which is also the HMAC block length.
    pub const fn block_len(self) -> usize {
        WIDTH - 2 * self.output_len()
    }

    /// Writes the digest of `message` into `out`.
    ///
    /// Returns [`Error::BufferLength`] unless `out` is exactly [`Self::output_len`] bytes long.
    pub fn digest_into(self, message: &[u8], out: &mut [u8]) -> Result<(), Error> {
        if out.len() != self.output_len() {
            return Err(Error::BufferLength {
                expected: self.output_len(),
                actual: out.len(),
            });
        }

        with_sha3!(self, |H| H::digest_into(message, out));
        Ok(())
    }

    /// Returns the digest of `message`.
    #[cfg(feature = "std")]
    pub fn digest(self, message: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; self.output_len()];
        with_sha3!(self, |H| H::digest_into(message, &mut out));
        out
    }

    /// Returns the digest of `message` as lowercase hex.
    #[cfg(feature = "std")]
    pub fn hex_digest(self, message: &[u8]) -> String {
        hex::encode(self.digest(message))
    }
}

impl TryFrom<u16> for Sha3Variant {
    type Error = Error;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Sha3Variant::from_bits(bits)
    }
}

impl fmt::Display for Sha3Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SHA3-{}", self.bits())
    }
}

/// Returns the SHA-3 digest of `message` for the given variant.
#[cfg(feature = "std")]
pub fn sha3_digest(variant: Sha3Variant, message: &[u8]) -> Vec<u8> {
    variant.digest(message)
}

#[cfg(test)]
mod tests {
    use hex_literal::hex;

    use super::*;

    const NIST_448: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

    #[test]
    fn sha3_224_kat() {
        assert_eq!(
            Sha3_224::digest(b""),
            hex!("6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7")
        );
        assert_eq!(
            Sha3_224::digest(b"abc"),
            hex!("e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf")
        );
        assert_eq!(
            Sha3_224::digest(NIST_448),
            hex!("8a24108b154ada21c9fd5574494479ba5c7e7ab76ef264ead0fcce33")
        );
    }

    #[test]
    fn sha3_256_kat() {
        assert_eq!(
            Sha3_256::digest(b""),
            hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a")
        );
        assert_eq!(
            Sha3_256::digest(b"abc"),
            hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532")
        );
        assert_eq!(
            Sha3_256::digest(NIST_448),
            hex!("41c0dba2a9d6240849100376a8235e2c82e1b9998a999e21db32dd97496d3376")
        );
    }

    #[test]
    fn sha3_384_kat() {
        assert_eq!(
            Sha3_384::digest(b""),
            hex!(
                "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2a"
                "c3713831264adb47fb6bd1e058d5f004"
            )
        );
        assert_eq!(
            Sha3_384::digest(b"abc"),
            hex!(
                "ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b2"
                "98d88cea927ac7f539f1edf228376d25"
            )
        );
        assert_eq!(
            Sha3_384::digest(NIST_448),
            hex!(
                "991c665755eb3a4b6bbdfb75c78a492e8c56a22c5c4d7e429bfdbc32b9d4ad5a"
                "a04a1f076e62fea19eef51acd0657c22"
            )
        );
    }

    #[test]
    fn sha3_512_kat() {
        assert_eq!(
            Sha3_512::digest(b""),
            hex!(
                "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6"
                "15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"
            )
        );
        assert_eq!(
            Sha3_512::digest(b"abc"),
            hex!(
                "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e"
                "10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"
            )
        );
        assert_eq!(
            Sha3_512::digest(NIST_448),
            hex!(
                "04a371e84ecfb5b8b77cb48610fca8182dd457ce6f326a0fd3d7ec2f1e91636d"
                "ee691fbe0c985302ba1b0d8dc78c086346b533b49c030d99a27daf1139d6e75e"
            )
        );
    }

    #[test]
    fn sha3_256_million_a() {
        let mut h = Sha3_256::new();
        let block = [b'a'; 1000];
        for _ in 0..1000 {
            h.update(&block);
        }
        assert_eq!(
            h.finalize(),
            hex!("5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1")
        );
    }

    #[test]
    fn shake_kat() {
        let mut out = [0u8; 32];
        Shake128::hash_into(b"", &mut out);
        assert_eq!(out, hex!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"));

        let mut out = [0u8; 64];
        Shake256::hash_into(b"", &mut out);
        assert_eq!(
            out,
            hex!(
                "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"
                "d75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be"
            )
        );
    }

    #[test]
    fn shake128_squeezes_past_one_block() {
        // 200 bytes of output needs a second permutation at the 168-byte rate.
        let mut out = [0u8; 200];
        Shake128::hash_into(b"abc", &mut out);
        assert_eq!(
            out,
            hex!(
                "5881092dd818bf5cf8a3ddb793fbcba74097d5c526a6d35f97b83351940f2cc8"
                "44c50af32acd3f2cdd066568706f509bc1bdde58295dae3f891a9a0fca578378"
                "9a41f8611214ce612394df286a62d1a2252aa94db9c538956c717dc2bed4f232"
                "a0294c857c730aa16067ac1062f1201fb0d377cfb9cde4c63599b27f3462bba4"
                "a0ed296c801f9ff7f57302bb3076ee145f97a32ae68e76ab66c48d51675bd49a"
                "cc29082f5647584e6aa01b3f5af057805f973ff8ecb8b226ac32ada6f01c1fcd"
                "4818cb006aa5b4cd"
            )
        );
    }

    #[test]
    fn variant_sizes() {
        let sizes = Sha3Variant::ALL.map(|v| (v.bits(), v.block_len(), v.output_len()));
        assert_eq!(sizes, [(224, 144, 28), (256, 136, 32), (384, 104, 48), (512, 72, 64)]);

        for v in Sha3Variant::ALL {
            assert_eq!(v.block_len() * 8 + 2 * v.bits() as usize, 1600);
            assert_eq!(Sha3Variant::try_from(v.bits()), Ok(v));
        }
    }

    #[test]
    fn unknown_variant_is_rejected() {
        assert_eq!(Sha3Variant::from_bits(160), Err(Error::UnknownVariant(160)));
        assert_eq!(Sha3Variant::try_from(0), Err(Error::UnknownVariant(0)));
    }

    #[test]
    fn digest_into_checks_buffer() {
        let mut out = [0u8; 31];
        assert_eq!(
            Sha3Variant::Sha3_256.digest_into(b"abc", &mut out),
            Err(Error::BufferLength {
                expected: 32,
                actual: 31
            })
        );

        let mut out = [0u8; 48];
        Sha3Variant::Sha3_384.digest_into(b"abc", &mut out).unwrap();
        assert_eq!(out, Sha3_384::digest(b"abc"));
    }

    #[test]
    #[cfg(feature = "std")]
    fn hex_digest_is_lowercase() {
        assert_eq!(
            Sha3Variant::Sha3_256.hex_digest(b""),
            "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"
        );
        assert_eq!(Sha3Variant::Sha3_512.to_string(), "SHA3-512");
        assert_eq!(sha3_digest(Sha3Variant::Sha3_224, b"abc"), Sha3_224::digest(b"abc").to_vec());
    }
}
