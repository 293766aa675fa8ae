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

//! Errors which may occur while parsing keys and signatures from wire
//! formats, or while running a COSI cosigning round.

use thiserror::Error;

/// Represents an error in key handling, signing, or COSI aggregation.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum CosiError {
    /// A fixed-size byte argument had the wrong length. Raised when a
    /// typed value is constructed from raw bytes, before any
    /// cryptographic computation happens.
    #[error("Invalid length of {name}: expected {expected} bytes, got {got}")]
    InvalidLength {
        /// Which argument failed the check.
        name: &'static str,
        /// The required length in bytes.
        expected: usize,
        /// The length actually supplied.
        got: usize,
    },

    /// A message required to be non-empty was empty.
    #[error("Empty data to sign or verify")]
    EmptyInput,

    /// A cosigner collection exceeded the protocol bound of
    /// [`MAX_COSIGNERS`](crate::cosi::MAX_COSIGNERS) participants.
    #[error("Can't combine more than 15 cosigners, got {got}")]
    TooManyParticipants {
        /// The number of entries actually supplied.
        got: usize,
    },

    /// Point decoding or summation failed while combining public keys.
    #[error("Error combining public keys")]
    AggregationError,

    /// The CSPRNG could not supply key material. Fatal; never retried
    /// internally.
    #[error("Entropy source failed to produce key material")]
    EntropyFailure,
}

/// Convert `CosiError` into `::serde::de::Error` aka `SerdeError`
///
/// We should do this with `From` but right now the orphan rules prohibit
/// `impl From<CosiError> for E where E: ::serde::de::Error`.
pub(crate) fn serde_error_from_cosi_error<E>(err: CosiError) -> E
where
    E: ::serde::de::Error,
{
    E::custom(err)
}
