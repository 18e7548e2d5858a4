//! The RC4 stream cipher.
//!
//! Keys shorter than [`MIN_KEY_LEN`] bytes are zero-padded on the right before key scheduling,
//! which is what OpenSSL's RC4 does with short keys. Ciphertexts therefore interoperate with
//! OpenSSL-backed RC4, but differ from textbook RC4 for keys under 16 bytes.
//!
//! Encryption and decryption are the same operation:
//!
//! ```
//! use nativecrypt::rc4::rc4_transform;
//!
//! let ciphertext = rc4_transform(b"Key", b"Plaintext");
//! assert_eq!(rc4_transform(b"Key", &ciphertext), b"Plaintext");
//! ```
//!
//! Only byte strings are accepted:
//!
//! ```compile_fail
//! use nativecrypt::rc4::rc4_transform_mut;
//!
//! let key: &[u16] = &[1, 2, 3];
//! let mut data = *b"data";
//! rc4_transform_mut(key, &mut data);
//! ```

use core::fmt;

use zeroize::Zeroize;

/// Keys shorter than this many bytes are zero-padded to it.
pub const MIN_KEY_LEN: usize = 16;

/// An RC4 keystream generator.
#[derive(Clone)]
pub struct Rc4 {
    state: [u8; 256],
    i: u8,
    j: u8,
}

impl Rc4 {
    /// Runs the key-scheduling algorithm over `key`.
    ///
    /// Only the first 256 bytes of a longer key affect the table.
    pub fn new(key: &[u8]) -> Self {
        let mut rc4 = Rc4 {
            state: [0; 256],
            i: 0,
            j: 0,
        };

        if key.len() < MIN_KEY_LEN {
            let mut padded = [0u8; MIN_KEY_LEN];
            padded[..key.len()].copy_from_slice(key);
            rc4.ksa(&padded);
            padded.zeroize();
        } else {
            rc4.ksa(key);
        }

        rc4
    }

    fn ksa(&mut self, key: &[u8]) {
        for (i, x) in self.state.iter_mut().enumerate() {
            *x = i as u8;
        }

        let mut j = 0u8;
        for (i, k) in (0..256).zip(key.iter().cycle()) {
            j = j.wrapping_add(self.state[i]).wrapping_add(*k);
            self.state.swap(i, j.into());
        }
    }

    /// Advances the generator and returns the next keystream byte.
    #[inline]
    pub fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        self.j = self.j.wrapping_add(self.state[usize::from(self.i)]);
        self.state.swap(self.i.into(), self.j.into());

        let k = self.state[usize::from(self.i)].wrapping_add(self.state[usize::from(self.j)]);
        self.state[usize::from(k)]
    }

    /// XORs the keystream into `data` in place.
    pub fn apply_keystream(&mut self, data: &mut [u8]) {
        for b in data.iter_mut() {
            *b ^= self.next_byte();
        }
    }
}

impl Zeroize for Rc4 {
    fn zeroize(&mut self) {
        self.state.zeroize();
        self.i.zeroize();
        self.j.zeroize();
    }
}

impl Drop for Rc4 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl fmt::Debug for Rc4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rc4").finish_non_exhaustive()
    }
}

/// Encrypts or decrypts `data` in place under `key`.
pub fn rc4_transform_mut(key: &[u8], data: &mut [u8]) {
    Rc4::new(key).apply_keystream(data);
}

/// Returns `data` encrypted (or decrypted) under `key`. The output is as long as the input.
#[cfg(feature = "std")]
pub fn rc4_transform(key: &[u8], data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    rc4_transform_mut(key, &mut out);
    out
}
