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

//
// Ed25519 with COSI collective signing
//

//! Ed25519 signatures, plus the COSI cosigning scheme in which a group
//! of up to fifteen participants jointly produces one compact signature
//! verifiable against the sum of their public keys.
//!
//! Single-party signing follows the standard Ed25519 construction
//! (SHA-512 key expansion, deterministic nonces), so signatures
//! interoperate with any conforming verifier. The multi-party flow lives
//! in the [`cosi`] module; its nonce/commitment exchange is assumed to
//! happen over an external channel.
//!
//! Secret material is zeroized on drop and compared in constant time.
//! Randomness is always injected by the caller as a `rand_core` CSPRNG;
//! there is no hidden global source.

#[macro_use]
mod ser;

mod errors;
pub use errors::CosiError;

pub mod keys;
pub use crate::keys::*;

pub mod signature;
pub use crate::signature::{Signature, SIGNATURE_LENGTH};

pub mod cosi;
