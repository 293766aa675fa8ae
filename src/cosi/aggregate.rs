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

//! The aggregator's side of a COSI round: folding cosigner keys into one
//! verification key and partial signatures into one final signature.

use crate::cosi::{PartialSignature, MAX_COSIGNERS};
use crate::errors::CosiError;
use crate::keys::PublicKey;
use crate::signature::Signature;
use curve25519_dalek::edwards::EdwardsPoint;
use curve25519_dalek::scalar::Scalar;
use curve25519_dalek::traits::Identity;

/// Combine cosigner public keys into the aggregate public key.
///
/// Computes the Edwards point sum of the supplied keys, in the order
/// given. The result is the key against which the combined signature of
/// the group verifies.
///
/// # Errors
///
/// `TooManyParticipants` if more than [`MAX_COSIGNERS`] keys are
/// supplied—checked before any point arithmetic. `AggregationError` if
/// any key fails to decode as a curve point; keys are decoded in order,
/// so the failing position is reproducible.
pub fn combine_public_keys(public_keys: &[PublicKey]) -> Result<PublicKey, CosiError> {
    if public_keys.len() > MAX_COSIGNERS {
        return Err(CosiError::TooManyParticipants {
            got: public_keys.len(),
        });
    }

    let mut sum = EdwardsPoint::identity();
    for public_key in public_keys {
        sum += public_key.decompress().ok_or(CosiError::AggregationError)?;
    }

    Ok(PublicKey::from_point(sum))
}

/// Combine partial signatures into the final 64-byte signature.
///
/// Sums the partial scalars mod the group order and emits
/// `global_commitment ‖ sum`. Pure arithmetic composition: no check is
/// made (none is possible here) that the partials were produced under
/// consistent nonces, the same shared commitment, or the same aggregate
/// key—that guarantee belongs to the signing round and its coordination
/// channel.
///
/// # Errors
///
/// `TooManyParticipants` if more than [`MAX_COSIGNERS`] partials are
/// supplied.
#[allow(non_snake_case)]
pub fn combine_signatures(
    global_commitment: &PublicKey,
    signatures: &[PartialSignature],
) -> Result<Signature, CosiError> {
    if signatures.len() > MAX_COSIGNERS {
        return Err(CosiError::TooManyParticipants {
            got: signatures.len(),
        });
    }

    let mut s = Scalar::ZERO;
    for partial in signatures {
        s += partial.to_scalar();
    }

    Ok(Signature {
        R: *global_commitment.as_compressed(),
        s: s.to_bytes(),
    })
}
