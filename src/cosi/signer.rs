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

//! One cosigner's side of a COSI round: nonce commitment and the partial
//! signature contribution.

use crate::errors::CosiError;
use crate::keys::{PublicKey, SecretKey};
use crate::signature::challenge;
use curve25519_dalek::scalar::Scalar;
use rand_core::{CryptoRng, RngCore};
use std::fmt::Debug;
use zeroize::Zeroize;

/// The length of a COSI `PartialSignature`, in bytes.
pub const PARTIAL_SIGNATURE_LENGTH: usize = 32;

/// One cosigner's scalar contribution to a collective signature.
///
/// Meaningful only in combination with the other participants'
/// contributions, under the same shared commitment and aggregate public
/// key that produced it.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PartialSignature(pub(crate) [u8; PARTIAL_SIGNATURE_LENGTH]);

impl Debug for PartialSignature {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "PartialSignature( {:?} )", &self.0)
    }
}

impl PartialSignature {
    const DESCRIPTION: &'static str = "A COSI partial signature as 32 bytes, a scalar.";

    /// Construct a `PartialSignature` from a slice of bytes.
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is a `PartialSignature`, or
    /// `InvalidLength` if the slice is not exactly 32 bytes.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<PartialSignature, CosiError> {
        if bytes.len() != PARTIAL_SIGNATURE_LENGTH {
            return Err(CosiError::InvalidLength {
                name: "COSI signature",
                expected: PARTIAL_SIGNATURE_LENGTH,
                got: bytes.len(),
            });
        }
        let mut scalar = [0u8; PARTIAL_SIGNATURE_LENGTH];
        scalar.copy_from_slice(bytes);
        Ok(PartialSignature(scalar))
    }

    /// Convert this partial signature to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PARTIAL_SIGNATURE_LENGTH] {
        self.0
    }

    /// View this partial signature as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PARTIAL_SIGNATURE_LENGTH] {
        &self.0
    }

    /// Reduce the wire form into a scalar mod the group order.
    pub(crate) fn to_scalar(&self) -> Scalar {
        Scalar::from_bytes_mod_order(self.0)
    }
}

serde_boilerplate!(PartialSignature);

/// Draw a fresh nonce seed and its commitment point `R_i`.
///
/// The commitment is what this participant contributes to the group's
/// shared commitment; the nonce seed stays local and feeds [`sign`]. A
/// nonce must never be used for two different commitments—reuse hands an
/// observer the secret key, as with every Schnorr-family scheme.
///
/// # Errors
///
/// `EntropyFailure` if the CSPRNG cannot supply nonce material.
pub fn commit<T>(csprng: &mut T) -> Result<(SecretKey, PublicKey), CosiError>
where
    T: CryptoRng + RngCore,
{
    let nonce = SecretKey::generate(csprng)?;
    let commitment = PublicKey::from_secret(&nonce);
    Ok((nonce, commitment))
}

/// Produce this participant's partial signature contribution.
///
/// Computes `r + SHA-512(R ‖ A ‖ message) * a mod L`, where `a` and `r`
/// are the expanded secret and nonce scalars, `R` is the group's shared
/// commitment and `A` the aggregate public key.
///
/// # Precondition (protocol, not checked here)
///
/// `global_commitment` must equal the sum of every participant's nonce
/// commitment, and `global_pubkey` the sum of every participant's public
/// key, agreed out-of-band before any partial is produced. A violation
/// cannot be detected locally; it yields a partial that will not combine
/// into a valid signature.
#[allow(non_snake_case)]
pub fn sign(
    secret_key: &SecretKey,
    message: &[u8],
    nonce: &SecretKey,
    global_commitment: &PublicKey,
    global_pubkey: &PublicKey,
) -> PartialSignature {
    let (mut a, _) = secret_key.expand();
    let (mut r, _) = nonce.expand();

    let c = challenge(
        global_commitment.as_compressed(),
        global_pubkey.as_compressed(),
        message,
    );
    let s = r + c * a;

    a.zeroize();
    r.zeroize();

    PartialSignature(s.to_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn partial_length_is_checked() {
        for len in &[0usize, 31, 33, 63, 65] {
            let bytes = vec![0u8; *len];
            assert_eq!(
                PartialSignature::from_bytes(&bytes),
                Err(CosiError::InvalidLength {
                    name: "COSI signature",
                    expected: PARTIAL_SIGNATURE_LENGTH,
                    got: *len,
                })
            );
        }
    }

    #[test]
    fn commitment_matches_nonce_public_key() {
        let (nonce, commitment) = commit(&mut OsRng).unwrap();
        assert_eq!(commitment, PublicKey::from_secret(&nonce));
    }

    #[test]
    fn partial_depends_on_commitment() {
        // The same signer under two different shared commitments must
        // contribute two different partials.
        let signer = SecretKey::generate(&mut OsRng).unwrap();
        let (nonce, _) = commit(&mut OsRng).unwrap();
        let (_, commitment_a) = commit(&mut OsRng).unwrap();
        let (_, commitment_b) = commit(&mut OsRng).unwrap();
        let aggregate = PublicKey::from_secret(&signer);

        let one = sign(&signer, b"payload", &nonce, &commitment_a, &aggregate);
        let two = sign(&signer, b"payload", &nonce, &commitment_b, &aggregate);
        assert_ne!(one, two);
    }
}
