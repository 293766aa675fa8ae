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

//! A Rust implementation of Ed25519 signing and verification.

use crate::errors::CosiError;
use crate::keys::{PublicKey, SecretKey};
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use curve25519_dalek::scalar::Scalar;
use sha2::{Digest, Sha512};
use std::fmt::Debug;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// The length of an ed25519 `Signature`, in bytes.
pub const SIGNATURE_LENGTH: usize = 64;

/// An Ed25519 signature.
///
/// # Note
///
/// These signatures are "detached"—that is, they do **not** include a
/// copy of the message which has been signed.
#[allow(non_snake_case)]
#[derive(Copy, Eq, PartialEq)]
pub struct Signature {
    /// `R` is the commitment point: the nonce scalar `r` multiplied by
    /// the distinguished basepoint, in compressed form.
    pub(crate) R: CompressedEdwardsY,

    /// `s` is the scalar half, formed by s = r + ka where
    /// k = SHA-512(R ‖ A ‖ message) mod L.
    ///
    /// Held in wire form: the verifier decides whether the encoding is a
    /// canonical scalar.
    pub(crate) s: [u8; 32],
}

impl Clone for Signature {
    fn clone(&self) -> Self {
        *self
    }
}

impl Debug for Signature {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "Signature( R: {:?}, s: {:?} )", &self.R, &self.s)
    }
}

/// The shared challenge: SHA-512(R ‖ A ‖ message) reduced mod the group
/// order. Identical for single-party signatures and COSI partials, with
/// `R` and `A` standing for the shared commitment and aggregate key in
/// the multi-party case.
#[allow(non_snake_case)]
pub(crate) fn challenge(
    R: &CompressedEdwardsY,
    public: &CompressedEdwardsY,
    message: &[u8],
) -> Scalar {
    let mut h = Sha512::new();
    h.update(R.as_bytes());
    h.update(public.as_bytes());
    h.update(message);

    let mut wide = [0u8; 64];
    wide.copy_from_slice(&h.finalize());
    Scalar::from_bytes_mod_order_wide(&wide)
}

impl Signature {
    const DESCRIPTION: &'static str =
        "An ed25519 signature, 64 bytes: the commitment point R followed by the scalar s.";

    /// Sign a message with this `SecretKey`.
    ///
    /// The public key is re-derived internally; callers supply only the
    /// secret seed and the message. The nonce is derived
    /// deterministically from the seed's SHA-512 prefix and the message,
    /// per the standard Ed25519 construction, so identical inputs always
    /// produce identical signatures.
    ///
    /// # Example
    ///
    /// ```
    /// use ed25519_cosi::{Keypair, Signature};
    /// use rand::rngs::OsRng;
    ///
    /// let keypair: Keypair = Keypair::generate(&mut OsRng).unwrap();
    /// let message: &[u8] = b"All I want is to pet all of the dogs.";
    ///
    /// let sig: Signature = Signature::sign(&keypair.secret, message).unwrap();
    /// assert!(sig.verify(&keypair.public, message).unwrap());
    /// ```
    ///
    /// # Errors
    ///
    /// `EmptyInput` if `message` is empty.
    #[allow(non_snake_case)]
    pub fn sign(secret_key: &SecretKey, message: &[u8]) -> Result<Signature, CosiError> {
        if message.is_empty() {
            return Err(CosiError::EmptyInput);
        }

        let (a, prefix) = secret_key.expand();
        let A = EdwardsPoint::mul_base(&a).compress();

        // r = SHA-512(prefix || message) mod L
        let mut h = Sha512::new();
        h.update(&prefix);
        h.update(message);
        let mut wide = [0u8; 64];
        wide.copy_from_slice(&h.finalize());
        let mut r = Scalar::from_bytes_mod_order_wide(&wide);
        wide.zeroize();

        let R = EdwardsPoint::mul_base(&r).compress();

        // s = r + SHA-512(R || A || message) * a
        let c = challenge(&R, &A, message);
        let s = r + c * a;

        r.zeroize();

        Ok(Signature { R, s: s.to_bytes() })
    }

    /// Verify a signature on a message with a public key.
    ///
    /// # Returns
    ///
    /// `Ok(true)` iff the signature is a valid Ed25519 signature of
    /// `message` under `public_key`. A malformed public point, a
    /// non-canonical scalar half, or a plain mismatch all yield
    /// `Ok(false)`—cryptographic rejection is a normal boolean outcome,
    /// not a call failure. The comparison of the recomputed commitment
    /// against `R` is constant-time.
    ///
    /// # Errors
    ///
    /// `EmptyInput` if `message` is empty.
    #[allow(non_snake_case)]
    pub fn verify(&self, public_key: &PublicKey, message: &[u8]) -> Result<bool, CosiError> {
        if message.is_empty() {
            return Err(CosiError::EmptyInput);
        }

        let A = match public_key.decompress() {
            Some(point) => point,
            None => return Ok(false),
        };
        let s = match Option::<Scalar>::from(Scalar::from_canonical_bytes(self.s)) {
            Some(scalar) => scalar,
            None => return Ok(false),
        };

        // R' = -kA + sB; the signature holds iff R' encodes to R.
        let k = challenge(&self.R, public_key.as_compressed(), message);
        let R_check = EdwardsPoint::vartime_double_scalar_mul_basepoint(&-k, &A, &s);

        Ok(bool::from(
            R_check.compress().as_bytes()[..].ct_eq(&self.R.as_bytes()[..]),
        ))
    }

    /// Construct a `Signature` from a slice of bytes.
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is a `Signature`, or `InvalidLength`
    /// if the slice is not exactly 64 bytes.
    #[allow(non_snake_case)]
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<Signature, CosiError> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(CosiError::InvalidLength {
                name: "signature",
                expected: SIGNATURE_LENGTH,
                got: bytes.len(),
            });
        }
        let mut R = [0u8; 32];
        let mut s = [0u8; 32];
        R.copy_from_slice(&bytes[..32]);
        s.copy_from_slice(&bytes[32..]);

        Ok(Signature {
            R: CompressedEdwardsY(R),
            s,
        })
    }

    /// Convert this signature to bytes: `R` then `s`.
    #[inline]
    pub fn to_bytes(&self) -> [u8; SIGNATURE_LENGTH] {
        let mut bytes = [0u8; SIGNATURE_LENGTH];
        bytes[..32].copy_from_slice(self.R.as_bytes());
        bytes[32..].copy_from_slice(&self.s);
        bytes
    }
}

serde_boilerplate!(Signature);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Keypair;
    use rand::rngs::OsRng;

    #[test]
    fn rfc8032_known_answer() {
        // Test vector 2 from RFC 8032 §7.1: a one-byte message.
        let seed = hex::decode("4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb")
            .unwrap();
        let public =
            hex::decode("3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c")
                .unwrap();
        let expected = hex::decode(
            "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da\
             085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
        )
        .unwrap();
        let message = [0x72u8];

        let sk = SecretKey::from_bytes(&seed).unwrap();
        let pk = PublicKey::from_bytes(&public).unwrap();

        let sig = Signature::sign(&sk, &message).unwrap();
        assert_eq!(sig.to_bytes()[..], expected[..]);
        assert!(sig.verify(&pk, &message).unwrap());
    }

    #[test]
    fn sign_is_deterministic() {
        let keypair = Keypair::generate(&mut OsRng).unwrap();
        let message = b"the same bytes in, the same bytes out";

        let one = Signature::sign(&keypair.secret, message).unwrap();
        let two = Signature::sign(&keypair.secret, message).unwrap();
        assert_eq!(one.to_bytes()[..], two.to_bytes()[..]);
    }

    #[test]
    fn round_trip() {
        let keypair = Keypair::generate(&mut OsRng).unwrap();
        let message = b"test message";

        let sig = keypair.sign(message).unwrap();
        assert!(keypair.verify(&sig, message).unwrap());
    }

    #[test]
    fn tampered_message_fails() {
        let keypair = Keypair::generate(&mut OsRng).unwrap();
        let message = b"untampered".to_vec();
        let sig = keypair.sign(&message).unwrap();

        for byte in 0..message.len() {
            for bit in 0..8 {
                let mut tampered = message.clone();
                tampered[byte] ^= 1 << bit;
                assert!(!sig.verify(&keypair.public, &tampered).unwrap());
            }
        }
    }

    #[test]
    fn tampered_signature_fails() {
        let keypair = Keypair::generate(&mut OsRng).unwrap();
        let message = b"untampered";
        let sig_bytes = keypair.sign(message).unwrap().to_bytes();

        for byte in 0..SIGNATURE_LENGTH {
            let mut tampered = sig_bytes;
            tampered[byte] ^= 0x04;
            let sig = Signature::from_bytes(&tampered).unwrap();
            assert!(!sig.verify(&keypair.public, message).unwrap());
        }
    }

    #[test]
    fn tampered_public_key_fails() {
        // A flipped bit either lands off the curve (malformed point) or
        // on the wrong key; both must come back as a clean false.
        let keypair = Keypair::generate(&mut OsRng).unwrap();
        let message = b"untampered";
        let sig = keypair.sign(message).unwrap();

        for byte in 0..32 {
            let mut tampered = keypair.public.to_bytes();
            tampered[byte] ^= 0x10;
            let pk = PublicKey::from_bytes(&tampered).unwrap();
            assert!(!sig.verify(&pk, message).unwrap());
        }
    }

    #[test]
    fn non_canonical_scalar_rejected() {
        let keypair = Keypair::generate(&mut OsRng).unwrap();
        let message = b"canonical scalars only";
        let mut bytes = keypair.sign(message).unwrap().to_bytes();

        // Replace s with the group order L, the smallest non-canonical value.
        let order = hex::decode("edd3f55c1a631258d69cf7a2def9de1400000000000000000000000000000010")
            .unwrap();
        bytes[32..].copy_from_slice(&order);

        let sig = Signature::from_bytes(&bytes).unwrap();
        assert!(!sig.verify(&keypair.public, message).unwrap());
    }

    #[test]
    fn empty_message_is_an_error() {
        let keypair = Keypair::generate(&mut OsRng).unwrap();
        let sig = keypair.sign(b"x").unwrap();

        assert_eq!(
            Signature::sign(&keypair.secret, b"").unwrap_err(),
            CosiError::EmptyInput
        );
        assert_eq!(
            sig.verify(&keypair.public, b"").unwrap_err(),
            CosiError::EmptyInput
        );
    }

    #[test]
    fn signature_length_is_checked() {
        for len in &[0usize, 31, 33, 63, 65] {
            let bytes = vec![0u8; *len];
            assert_eq!(
                Signature::from_bytes(&bytes),
                Err(CosiError::InvalidLength {
                    name: "signature",
                    expected: SIGNATURE_LENGTH,
                    got: *len,
                })
            );
        }
    }
}
