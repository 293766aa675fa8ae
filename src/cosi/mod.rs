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

//! COSI collective signing.
//!
//! A fixed group of up to [`MAX_COSIGNERS`] cosigners jointly produces a
//! single 64-byte Ed25519 signature that verifies against the sum of
//! their public keys. No participant learns anyone else's secret
//! material; each contributes only a nonce commitment and a 32-byte
//! partial scalar.
//!
//! A round proceeds through fixed stages, with an external channel
//! carrying data between participants:
//!
//! 1. **Keys collected** — everyone's public key is gathered and folded
//!    into the aggregate key with [`combine_public_keys`].
//! 2. **Commitments shared** — each participant draws a nonce with
//!    [`commit`] and publishes the commitment point; the shared
//!    commitment is the sum of all of them (again
//!    [`combine_public_keys`]).
//! 3. **Partials produced** — each participant calls [`sign`] with its
//!    secret, its nonce, the shared commitment and the aggregate key.
//! 4. **Combined** — the aggregator folds the partials with
//!    [`combine_signatures`] into the final signature, which verifies
//!    like any single-party signature.
//!
//! There is no rollback. A failure at any stage restarts the round from
//! scratch, and nonces must never cross a restart: signing twice with
//! one nonce under two different commitments reveals the secret key, as
//! in every Schnorr-family scheme.
//!
//! # Example
//!
//! ```
//! use ed25519_cosi::cosi;
//! use ed25519_cosi::Keypair;
//! use rand::rngs::OsRng;
//!
//! let message = b"statement the group signs off on";
//!
//! let signers: Vec<Keypair> = (0..3)
//!     .map(|_| Keypair::generate(&mut OsRng).unwrap())
//!     .collect();
//! let public_keys: Vec<_> = signers.iter().map(|kp| kp.public).collect();
//! let aggregate = cosi::combine_public_keys(&public_keys).unwrap();
//!
//! // Each signer draws a nonce; commitments travel over the wire.
//! let nonces: Vec<_> = signers
//!     .iter()
//!     .map(|_| cosi::commit(&mut OsRng).unwrap())
//!     .collect();
//! let commitments: Vec<_> = nonces.iter().map(|(_, point)| *point).collect();
//! let shared_commitment = cosi::combine_public_keys(&commitments).unwrap();
//!
//! let partials: Vec<_> = signers
//!     .iter()
//!     .zip(&nonces)
//!     .map(|(signer, (nonce, _))| {
//!         cosi::sign(&signer.secret, message, nonce, &shared_commitment, &aggregate)
//!     })
//!     .collect();
//!
//! let signature = cosi::combine_signatures(&shared_commitment, &partials).unwrap();
//! assert!(signature.verify(&aggregate, message).unwrap());
//! ```

mod aggregate;
pub use aggregate::{combine_public_keys, combine_signatures};

mod signer;
pub use signer::{commit, sign, PartialSignature, PARTIAL_SIGNATURE_LENGTH};

/// The protocol bound on cosigners in one round.
///
/// Part of the wire-compatible protocol, not a tuning knob: peers reject
/// groups above this size, so implementations must too.
pub const MAX_COSIGNERS: usize = 15;
