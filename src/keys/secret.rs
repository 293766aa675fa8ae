// Copyright 2019 Stichting Organism
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Ed25519 secret key generation, clamping and expansion.

use crate::errors::CosiError;
use core::fmt::Debug;
use curve25519_dalek::scalar::{clamp_integer, Scalar};
use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha512};
use subtle::{Choice, ConstantTimeEq};
use zeroize::Zeroize;

/// The length of an ed25519 `SecretKey`, in bytes.
pub const SECRET_KEY_LENGTH: usize = 32;

/// An Ed25519 secret key: a 32-byte seed.
///
/// The seed itself never multiplies a point. Every operation first
/// expands it through SHA-512 and clamps the low half of the digest into
/// the actual signing scalar, as the standard Ed25519 construction
/// requires.
#[derive(Clone)]
pub struct SecretKey(pub(crate) [u8; SECRET_KEY_LENGTH]);

impl Debug for SecretKey {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "SecretKey: {:?}", &self.0)
    }
}

impl Eq for SecretKey {}
impl PartialEq for SecretKey {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).unwrap_u8() == 1u8
    }
}
impl ConstantTimeEq for SecretKey {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl Zeroize for SecretKey {
    fn zeroize(&mut self) {
        self.0.zeroize()
    }
}

/// Overwrite secret key material with null bytes when it goes out of scope.
impl Drop for SecretKey {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl SecretKey {
    const DESCRIPTION: &'static str = "An ed25519 secret key as 32 bytes.";

    /// Generate a `SecretKey` from a `csprng`.
    ///
    /// The fresh seed is clamped: the low three bits of the first byte
    /// are cleared, the high bit of the last byte is cleared and its
    /// second-highest bit is set. Generated keys therefore always carry
    /// the standard bit pattern.
    ///
    /// # Example
    ///
    /// ```
    /// use ed25519_cosi::SecretKey;
    /// use rand::rngs::OsRng;
    ///
    /// let secret_key: SecretKey = SecretKey::generate(&mut OsRng).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// `EntropyFailure` if the CSPRNG cannot supply 32 bytes. There is no
    /// internal retry and no fallback source.
    pub fn generate<T>(csprng: &mut T) -> Result<SecretKey, CosiError>
    where
        T: CryptoRng + RngCore,
    {
        let mut bytes = [0u8; SECRET_KEY_LENGTH];
        csprng
            .try_fill_bytes(&mut bytes)
            .map_err(|_| CosiError::EntropyFailure)?;
        Ok(SecretKey(clamp_integer(bytes)))
    }

    /// Construct a `SecretKey` from a slice of bytes.
    ///
    /// # Warning
    ///
    /// The bytes are trusted as-is: no re-clamping is applied and
    /// unclamped seeds are not rejected. This preserves the original
    /// protocol's contract, and is harmless for signing because the
    /// scalar actually used is clamped during SHA-512 expansion.
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is a `SecretKey`, or `InvalidLength`
    /// if the slice is not exactly 32 bytes.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<SecretKey, CosiError> {
        if bytes.len() != SECRET_KEY_LENGTH {
            return Err(CosiError::InvalidLength {
                name: "secret key",
                expected: SECRET_KEY_LENGTH,
                got: bytes.len(),
            });
        }
        let mut seed = [0u8; SECRET_KEY_LENGTH];
        seed.copy_from_slice(bytes);
        Ok(SecretKey(seed))
    }

    /// Convert this secret key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SECRET_KEY_LENGTH] {
        self.0
    }

    /// View this secret key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; SECRET_KEY_LENGTH] {
        &self.0
    }

    /// Expand the seed into its signing scalar and nonce prefix.
    ///
    /// `SHA-512(seed)` is split in half: the low 32 bytes are clamped and
    /// reduced into the scalar, the high 32 bytes become the prefix used
    /// to derive deterministic nonces.
    pub(crate) fn expand(&self) -> (Scalar, [u8; 32]) {
        let digest = Sha512::digest(&self.0);
        let mut lower = [0u8; 32];
        let mut upper = [0u8; 32];
        lower.copy_from_slice(&digest[..32]);
        upper.copy_from_slice(&digest[32..]);
        let scalar = Scalar::from_bytes_mod_order(clamp_integer(lower));
        lower.zeroize();
        (scalar, upper)
    }
}

serde_boilerplate!(SecretKey);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn generated_secret_is_clamped() {
        for _ in 0..64 {
            let sk = SecretKey::generate(&mut OsRng).unwrap();
            let bytes = sk.to_bytes();
            assert_eq!(bytes[0] & 7, 0);
            assert_eq!(bytes[31] & 128, 0);
            assert_eq!(bytes[31] & 64, 64);
        }
    }

    #[test]
    fn from_bytes_rejects_bad_lengths() {
        for len in &[0usize, 31, 33, 63, 65] {
            let bytes = vec![1u8; *len];
            assert_eq!(
                SecretKey::from_bytes(&bytes),
                Err(CosiError::InvalidLength {
                    name: "secret key",
                    expected: SECRET_KEY_LENGTH,
                    got: *len,
                })
            );
        }
    }

    #[test]
    fn from_bytes_trusts_unclamped_seeds() {
        // All-ones is not a clamped seed; the caller contract accepts it.
        let sk = SecretKey::from_bytes(&[0xffu8; 32]).unwrap();
        assert_eq!(sk.to_bytes(), [0xffu8; 32]);
    }

    #[test]
    fn entropy_failure_surfaces() {
        struct BrokenRng;
        impl RngCore for BrokenRng {
            fn next_u32(&mut self) -> u32 {
                0
            }
            fn next_u64(&mut self) -> u64 {
                0
            }
            fn fill_bytes(&mut self, _dest: &mut [u8]) {}
            fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
                Err(rand_core::Error::new("entropy source exhausted"))
            }
        }
        impl CryptoRng for BrokenRng {}

        assert_eq!(
            SecretKey::generate(&mut BrokenRng),
            Err(CosiError::EntropyFailure)
        );
    }
}
