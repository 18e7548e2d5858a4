//! The Keccak-p\[1600\] permutation family from FIPS 202, section 3.
//!
//! The state is 25 little-endian 64-bit lanes, indexed `x + 5 * y`. Each round applies θ, ρ, π,
//! χ, and ι in that order. Keccak-p\[1600, R\] runs the *last* `R` of the 24 Keccak-f\[1600\]
//! rounds, so `R = 24` is the SHA-3 permutation and `R = 12` is the one KangarooTwelve uses.

use zeroize::Zeroize;

use crate::macros::{bytes_to_lanes, lanes_to_bytes};
use crate::Permutation;

/// The number of rounds in Keccak-f\[1600\].
pub const MAX_ROUNDS: usize = 24;

/// The width of the Keccak-p\[1600\] state, in bytes.
pub const WIDTH: usize = 1600 / 8;

/// The Keccak-f\[1600\] permutation used by SHA-3 and SHAKE.
pub type KeccakF1600 = KeccakP<MAX_ROUNDS>;

#[allow(clippy::unreadable_literal)]
const RC: [u64; MAX_ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

// ρ offsets in π-walk order: the t-th lane visited rotates by (t+1)(t+2)/2 mod 64.
const RHO: [u32; 24] = [
    1, 3, 6, 10, 15, 21, 28, 36, 45, 55, 2, 14, 27, 41, 56, 8, 25, 43, 62, 18, 39, 61, 20, 44,
];

// π destinations of the walk starting at lane 1; (x, y) moves to (y, 2x + 3y).
const PI: [usize; 24] = [
    10, 7, 11, 17, 18, 3, 5, 16, 8, 21, 24, 4, 15, 23, 19, 13, 12, 2, 20, 14, 22, 9, 6, 1,
];

/// Applies Keccak-f\[1600\] (all 24 rounds) to `lanes` in place.
#[inline]
pub fn keccak_f1600(lanes: &mut [u64; 25]) {
    keccak_p1600::<MAX_ROUNDS>(lanes);
}

/// Applies Keccak-p\[1600, R\] to `lanes` in place.
///
/// `R` must be at most [`MAX_ROUNDS`].
#[inline]
pub fn keccak_p1600<const R: usize>(lanes: &mut [u64; 25]) {
    debug_assert!(R <= MAX_ROUNDS, "Keccak-p[1600] has at most 24 rounds");

    for &rc in &RC[MAX_ROUNDS - R..] {
        theta(lanes);
        rho_pi(lanes);
        chi(lanes);

        // ι
        lanes[0] ^= rc;
    }
}

/// θ: XOR every lane with the parities of the two neighbouring columns.
#[inline(always)]
#[allow(clippy::needless_range_loop)]
fn theta(lanes: &mut [u64; 25]) {
    let mut c = [0u64; 5];
    for x in 0..5 {
        c[x] = lanes[x] ^ lanes[x + 5] ^ lanes[x + 10] ^ lanes[x + 15] ^ lanes[x + 20];
    }

    for x in 0..5 {
        let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
        for y in (0..25).step_by(5) {
            lanes[x + y] ^= d;
        }
    }
}

/// ρ and π fused: walk the 24 non-origin lanes along π's cycle, rotating each as it moves.
#[inline(always)]
fn rho_pi(lanes: &mut [u64; 25]) {
    let mut carry = lanes[1];
    for (&dst, &r) in PI.iter().zip(RHO.iter()) {
        let next = lanes[dst];
        lanes[dst] = carry.rotate_left(r);
        carry = next;
    }
}

/// χ: the only non-linear step, applied to each row of five lanes.
#[inline(always)]
fn chi(lanes: &mut [u64; 25]) {
    for row in lanes.chunks_exact_mut(5) {
        let b = [row[0], row[1], row[2], row[3], row[4]];
        for (x, lane) in row.iter_mut().enumerate() {
            *lane = b[x] ^ (!b[(x + 1) % 5] & b[(x + 2) % 5]);
        }
    }
}

/// The Keccak-p\[1600, R\] permutation over a byte-addressable state.
#[derive(Clone, Debug)]
#[repr(align(8))]
pub struct KeccakP<const R: usize>([u8; WIDTH]);

impl<const R: usize> Default for KeccakP<R> {
    fn default() -> Self {
        KeccakP([0u8; WIDTH])
    }
}

impl<const R: usize> AsRef<[u8; WIDTH]> for KeccakP<R> {
    fn as_ref(&self) -> &[u8; WIDTH] {
        &self.0
    }
}

impl<const R: usize> Zeroize for KeccakP<R> {
    fn zeroize(&mut self) {
        self.0.zeroize()
    }
}

impl<const R: usize> Permutation<WIDTH> for KeccakP<R> {
    #[inline(always)]
    fn state(&self) -> &[u8; WIDTH] {
        &self.0
    }

    #[inline(always)]
    fn state_mut(&mut self) -> &mut [u8; WIDTH] {
        &mut self.0
    }

    #[inline(always)]
    fn permute(&mut self) {
        let mut lanes = [0u64; 25];
        bytes_to_lanes!(u64, self.0, lanes);
        keccak_p1600::<R>(&mut lanes);
        lanes_to_bytes!(u64, lanes, self.0);
        lanes.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use byteorder::{ByteOrder, LittleEndian};

    use super::*;

    // KeccakF-1600-IntermediateValues.txt, permutation of the all-zero state.
    const ZERO_ONCE: [u64; 25] = [
        0xF1258F7940E1DDE7,
        0x84D5CCF933C0478A,
        0xD598261EA65AA9EE,
        0xBD1547306F80494D,
        0x8B284E056253D057,
        0xFF97A42D7F8E6FD4,
        0x90FEE5A0A44647C4,
        0x8C5BDA0CD6192E76,
        0xAD30A6F71B19059C,
        0x30935AB7D08FFC64,
        0xEB5AA93F2317D635,
        0xA9A6E6260D712103,
        0x81A57C16DBCF555F,
        0x43B831CD0347C826,
        0x01F22F1A11A5569F,
        0x05E5635A21D9AE61,
        0x64BEFEF28CC970F2,
        0x613670957BC46611,
        0xB87C5A554FD00ECB,
        0x8C3EE88A1CCF32C8,
        0x940C7922AE3A2614,
        0x1841F924A2C509E4,
        0x16F53526E70465C2,
        0x75F644E97F30A13B,
        0xEAF1FF7B5CECA249,
    ];

    // The same file, permutation applied a second time.
    const ZERO_TWICE: [u64; 25] = [
        0x2D5C954DF96ECB3C,
        0x6A332CD07057B56D,
        0x093D8D1270D76B6C,
        0x8A20D9B25569D094,
        0x4F9C4F99E5E7F156,
        0xF957B9A2DA65FB38,
        0x85773DAE1275AF0D,
        0xFAF4F247C3D810F7,
        0x1F1B9EE6F79A8759,
        0xE4FECC0FEE98B425,
        0x68CE61B6B9CE68A1,
        0xDEEA66C4BA8F974F,
        0x33C43D836EAFB1F5,
        0xE00654042719DBD9,
        0x7CF8A9F009831265,
        0xFD5449A6BF174743,
        0x97DDAD33D8994B40,
        0x48EAD5FC5D0BE774,
        0xE3B8C8EE55B7B03C,
        0x91A0226E649E42E9,
        0x900E3129E7BADD7B,
        0x202A9EC5FAA3CCE8,
        0x5B3402464E1C3DB6,
        0x609F4E62A44C1059,
        0x20D06CD26A8FBF5C,
    ];

    #[test]
    fn keccak_f1600_kat() {
        let mut lanes = [0u64; 25];
        keccak_f1600(&mut lanes);
        assert_eq!(lanes, ZERO_ONCE);

        keccak_f1600(&mut lanes);
        assert_eq!(lanes, ZERO_TWICE);
    }

    #[test]
    fn keccak_p1600_12_kat() {
        // last 12 rounds, as in KangarooTwelve
        let mut lanes = [0u64; 25];
        keccak_p1600::<12>(&mut lanes);
        assert_eq!(
            lanes,
            [
                0x8e5e5438b9a78617,
                0xd9cd6a50f259d01e,
                0x87b8e7c652a91f35,
                0x1093e067cde4e0c5,
                0xb033ab90f2d95a45,
                0xe0a72f72a8dd1a45,
                0xc53780aa14672f9c,
                0x3edd47f50051071d,
                0xb3a31d310c178acc,
                0x79b586a59257aaa0,
                0xbc4a7c3db3b1f99b,
                0x68874063e68a6793,
                0x5c6c03332e0e2566,
                0x9caa1202b9f030da,
                0x5f3b9a782bcf7a9f,
                0xe536c1e061ae7923,
                0x6de9b618b73c87ec,
                0x2abed1f170918ac2,
                0x6aabbd53daed24b7,
                0xbfc1416a2c2ee15a,
                0xc6cfe036b90952af,
                0x45503617dc7060d7,
                0x625611b2c29f7ae4,
                0xd43671db2c30647a,
                0xcffd0d76222ca01c,
            ]
        );
    }

    #[test]
    fn zero_rounds_is_identity() {
        let mut lanes = ZERO_ONCE;
        keccak_p1600::<0>(&mut lanes);
        assert_eq!(lanes, ZERO_ONCE);
    }

    #[test]
    fn byte_state_is_little_endian_lanes() {
        let mut state = KeccakF1600::default();
        state.permute();

        let mut lanes = [0u64; 25];
        LittleEndian::read_u64_into(state.state(), &mut lanes);
        assert_eq!(lanes, ZERO_ONCE);
        assert_eq!(state.state()[0], 0xE7);
    }

    #[test]
    fn add_and_extract_at_offset() {
        let mut state = KeccakF1600::default();
        state.add_bytes(&[1, 2, 3], 10);
        state.add_byte(0xFF, 11);

        let mut out = [0u8; 4];
        state.extract_bytes(&mut out, 9);
        assert_eq!(out, [0, 1, 2 ^ 0xFF, 3]);

        state.zeroize();
        assert_eq!(state.state(), &[0u8; WIDTH]);
    }
}
