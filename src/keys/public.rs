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

//! Ed25519 public key derivation.

use crate::errors::CosiError;
use crate::keys::SecretKey;
use curve25519_dalek::edwards::{CompressedEdwardsY, EdwardsPoint};
use std::fmt::Debug;

/// The length of an ed25519 `PublicKey`, in bytes.
pub const PUBLIC_KEY_LENGTH: usize = 32;

/// An Ed25519 public key: a compressed Edwards point.
///
/// The key is held in its 32-byte wire form. Decompression to a curve
/// point happens inside the operation that needs the point, so a
/// malformed encoding surfaces where the original protocol surfaces it:
/// as a `false` verification result, or as an `AggregationError` during
/// key combination.
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct PublicKey(pub(crate) CompressedEdwardsY);

impl Debug for PublicKey {
    fn fmt(&self, f: &mut ::core::fmt::Formatter) -> ::core::fmt::Result {
        write!(f, "PublicKey( CompressedEdwardsY( {:?} ))", self.0)
    }
}

impl PublicKey {
    const DESCRIPTION: &'static str = "An ed25519 public key as 32 bytes.";

    /// Derive the `PublicKey` corresponding to a `SecretKey`.
    ///
    /// Multiplies the base point by the expanded secret scalar.
    /// Deterministic: the same secret always yields the same point.
    pub fn from_secret(secret: &SecretKey) -> PublicKey {
        let (scalar, _prefix) = secret.expand();
        PublicKey(EdwardsPoint::mul_base(&scalar).compress())
    }

    /// Wrap an already decompressed point.
    pub(crate) fn from_point(point: EdwardsPoint) -> PublicKey {
        PublicKey(point.compress())
    }

    /// Access the compressed Edwards form.
    pub(crate) fn as_compressed(&self) -> &CompressedEdwardsY {
        &self.0
    }

    /// Decode the wire form into a curve point, if the encoding is valid.
    pub(crate) fn decompress(&self) -> Option<EdwardsPoint> {
        self.0.decompress()
    }

    /// Construct a `PublicKey` from a slice of bytes.
    ///
    /// Only the length is checked here; whether the bytes encode a valid
    /// curve point is established by the operation that consumes the key.
    ///
    /// # Returns
    ///
    /// A `Result` whose okay value is a `PublicKey`, or `InvalidLength`
    /// if the slice is not exactly 32 bytes.
    #[inline]
    pub fn from_bytes(bytes: &[u8]) -> Result<PublicKey, CosiError> {
        if bytes.len() != PUBLIC_KEY_LENGTH {
            return Err(CosiError::InvalidLength {
                name: "public key",
                expected: PUBLIC_KEY_LENGTH,
                got: bytes.len(),
            });
        }
        let mut compressed = [0u8; PUBLIC_KEY_LENGTH];
        compressed.copy_from_slice(bytes);
        Ok(PublicKey(CompressedEdwardsY(compressed)))
    }

    /// Convert this public key to a byte array.
    #[inline]
    pub fn to_bytes(&self) -> [u8; PUBLIC_KEY_LENGTH] {
        self.0.to_bytes()
    }

    /// View this public key as a byte array.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_LENGTH] {
        self.0.as_bytes()
    }
}

serde_boilerplate!(PublicKey);
