//! A sponge over any [`Permutation`], with multi-rate padding and a caller-chosen domain suffix.

use core::mem;

use crate::Permutation;

/// A sponge with a `RATE`-byte outer part and a `WIDTH - RATE`-byte capacity.
///
/// Input may be absorbed in any chunking. [`Sponge::pad`] closes the input with the domain suffix
/// and the final `0x80` pad bit, after which the sponge only squeezes.
#[derive(Clone, Debug)]
pub struct Sponge<P, const WIDTH: usize, const RATE: usize>
where
    P: Permutation<WIDTH>,
{
    state: P,
    pos: usize,
    squeezing: bool,
}

impl<P, const WIDTH: usize, const RATE: usize> Default for Sponge<P, WIDTH, RATE>
where
    P: Permutation<WIDTH>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, const WIDTH: usize, const RATE: usize> Sponge<P, WIDTH, RATE>
where
    P: Permutation<WIDTH>,
{
    /// Creates a sponge with an all-zero state.
    pub fn new() -> Self {
        debug_assert!(0 < RATE && RATE < WIDTH);

        Sponge {
            state: P::default(),
            pos: 0,
            squeezing: false,
        }
    }

    /// XORs `bin` into the rate, permuting each time a full block has been absorbed.
    ///
    /// # Panics
    ///
    /// Panics if the sponge has already been padded.
    pub fn absorb(&mut self, mut bin: &[u8]) {
        assert!(!self.squeezing, "cannot absorb into a padded sponge");

        while !bin.is_empty() {
            let n = (RATE - self.pos).min(bin.len());
            let (block, rest) = bin.split_at(n);
            self.state.add_bytes(block, self.pos);
            self.pos += n;
            if self.pos == RATE {
                self.state.permute();
                self.pos = 0;
            }
            bin = rest;
        }
    }

    /// Terminates the input with `suffix` right after the last absorbed byte and `0x80` in the
    /// last byte of the rate, then permutes. When both land on the same byte they are combined.
    ///
    /// `suffix` carries the domain bits followed by the first pad bit, e.g. `0x06` for SHA-3 and
    /// `0x1F` for SHAKE.
    ///
    /// # Panics
    ///
    /// Panics if the sponge has already been padded.
    pub fn pad(&mut self, suffix: u8) {
        assert!(!self.squeezing, "sponge is already padded");

        self.state.add_byte(suffix, self.pos);
        self.state.add_byte(0x80, RATE - 1);
        self.state.permute();
        self.pos = 0;
        self.squeezing = true;
    }

    /// Fills `out` from the rate, permuting whenever the rate runs dry.
    ///
    /// Successive calls continue the same output stream.
    ///
    /// # Panics
    ///
    /// Panics if the sponge has not been padded.
    pub fn squeeze_mut(&mut self, mut out: &mut [u8]) {
        assert!(self.squeezing, "sponge must be padded before squeezing");

        while !out.is_empty() {
            if self.pos == RATE {
                self.state.permute();
                self.pos = 0;
            }
            let n = (RATE - self.pos).min(out.len());
            let (block, rest) = mem::take(&mut out).split_at_mut(n);
            self.state.extract_bytes(block, self.pos);
            self.pos += n;
            out = rest;
        }
    }

    /// Returns `n` squeezed bytes.
    #[cfg(feature = "std")]
    pub fn squeeze(&mut self, n: usize) -> Vec<u8> {
        let mut b = vec![0u8; n];
        self.squeeze_mut(&mut b);
        b
    }
}

impl<P, const WIDTH: usize, const RATE: usize> Drop for Sponge<P, WIDTH, RATE>
where
    P: Permutation<WIDTH>,
{
    fn drop(&mut self) {
        self.state.zeroize();
    }
}
