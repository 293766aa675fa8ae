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

//! Ed25519 keypair generation.

use crate::errors::CosiError;
use crate::keys::{PublicKey, SecretKey, PUBLIC_KEY_LENGTH, SECRET_KEY_LENGTH};
use crate::signature::Signature;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroize;

/// The length of an ed25519 `Keypair`, in bytes.
pub const KEYPAIR_LENGTH: usize = SECRET_KEY_LENGTH + PUBLIC_KEY_LENGTH;

/// An Ed25519 keypair.
#[derive(Debug, Clone)]
pub struct Keypair {
    /// The secret half of this keypair.
    pub secret: SecretKey,
    /// The public half of this keypair.
    pub public: PublicKey,
}

impl From<SecretKey> for Keypair {
    fn from(secret: SecretKey) -> Keypair {
        let public = PublicKey::from_secret(&secret);
        Keypair { secret, public }
    }
}

impl Zeroize for Keypair {
    fn zeroize(&mut self) {
        self.secret.zeroize();
    }
}

impl Keypair {
    const DESCRIPTION: &'static str =
        "An ed25519 keypair, 64 bytes: the secret seed followed by the public key.";

    /// Generate an ed25519 keypair.
    ///
    /// # Example
    ///
    /// ```
    /// use ed25519_cosi::Keypair;
    /// use rand::rngs::OsRng;
    ///
    /// let keypair: Keypair = Keypair::generate(&mut OsRng).unwrap();
    /// ```
    ///
    /// # Errors
    ///
    /// `EntropyFailure` if the CSPRNG cannot supply seed material.
    pub fn generate<R>(csprng: &mut R) -> Result<Keypair, CosiError>
    where
        R: CryptoRng + RngCore,
    {
        let secret = SecretKey::generate(csprng)?;
        let public = PublicKey::from_secret(&secret);
        Ok(Keypair { secret, public })
    }

    /// Sign a message with this keypair's secret key.
    pub fn sign(&self, message: &[u8]) -> Result<Signature, CosiError> {
        Signature::sign(&self.secret, message)
    }

    /// Verify a signature on a message with this keypair's public key.
    pub fn verify(&self, signature: &Signature, message: &[u8]) -> Result<bool, CosiError> {
        signature.verify(&self.public, message)
    }

    /// Convert this keypair to bytes.
    ///
    /// # Returns
    ///
    /// An array of bytes, `[u8; KEYPAIR_LENGTH]`. The first
    /// `SECRET_KEY_LENGTH` bytes are the `SecretKey`, the next
    /// `PUBLIC_KEY_LENGTH` bytes are the `PublicKey`.
    pub fn to_bytes(&self) -> [u8; KEYPAIR_LENGTH] {
        let mut bytes: [u8; KEYPAIR_LENGTH] = [0u8; KEYPAIR_LENGTH];

        bytes[..SECRET_KEY_LENGTH].copy_from_slice(self.secret.as_bytes());
        bytes[SECRET_KEY_LENGTH..].copy_from_slice(self.public.as_bytes());
        bytes
    }

    /// Construct a `Keypair` from the bytes of a `SecretKey` and
    /// `PublicKey`, as obtained from [`Keypair::to_bytes`].
    ///
    /// # Warning
    ///
    /// No validation is done that the halves correspond; mismatched
    /// halves produce a keypair that signs under one key and is checked
    /// against another.
    pub fn from_bytes(bytes: &[u8]) -> Result<Keypair, CosiError> {
        if bytes.len() != KEYPAIR_LENGTH {
            return Err(CosiError::InvalidLength {
                name: "keypair",
                expected: KEYPAIR_LENGTH,
                got: bytes.len(),
            });
        }
        let secret = SecretKey::from_bytes(&bytes[..SECRET_KEY_LENGTH])?;
        let public = PublicKey::from_bytes(&bytes[SECRET_KEY_LENGTH..])?;

        Ok(Keypair { secret, public })
    }
}

serde_boilerplate!(Keypair);

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn keypair_bytes_round_trip() {
        let keypair = Keypair::generate(&mut OsRng).unwrap();
        let restored = Keypair::from_bytes(&keypair.to_bytes()).unwrap();

        assert_eq!(keypair.secret, restored.secret);
        assert_eq!(keypair.public, restored.public);
    }

    #[test]
    fn derived_half_matches_secret() {
        let keypair = Keypair::generate(&mut OsRng).unwrap();
        assert_eq!(keypair.public, PublicKey::from_secret(&keypair.secret));
    }
}
