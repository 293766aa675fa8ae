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

//! Serde Support

macro_rules! serde_boilerplate { ($t:ty) => {
    impl ::serde::Serialize for $t {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error> where S: ::serde::Serializer {
            serializer.serialize_bytes(&self.to_bytes()[..])
        }
    }

    impl<'d> ::serde::Deserialize<'d> for $t {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error> where D: ::serde::Deserializer<'d> {
            struct MyVisitor;

            impl<'d> ::serde::de::Visitor<'d> for MyVisitor {
                type Value = $t;

                fn expecting(&self, formatter: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    formatter.write_str(Self::Value::DESCRIPTION)
                }

                fn visit_bytes<E>(self, bytes: &[u8]) -> Result<$t, E> where E: ::serde::de::Error {
                    Self::Value::from_bytes(bytes).map_err(crate::errors::serde_error_from_cosi_error)
                }
            }
            deserializer.deserialize_bytes(MyVisitor)
        }
    }
} } // macro_rules! serde_boilerplate

#[cfg(test)]
mod tests {
    use crate::cosi::PartialSignature;
    use crate::keys::{Keypair, PublicKey, SecretKey};
    use crate::signature::Signature;
    use rand::rngs::OsRng;

    #[test]
    fn secret_key_round_trip() {
        let sk = SecretKey::generate(&mut OsRng).unwrap();
        let bytes = bincode::serialize(&sk).unwrap();
        let restored: SecretKey = bincode::deserialize(&bytes).unwrap();
        assert_eq!(sk, restored);
    }

    #[test]
    fn public_key_round_trip() {
        let pk = Keypair::generate(&mut OsRng).unwrap().public;
        let bytes = bincode::serialize(&pk).unwrap();
        let restored: PublicKey = bincode::deserialize(&bytes).unwrap();
        assert_eq!(pk, restored);
    }

    #[test]
    fn signature_round_trip() {
        let keypair = Keypair::generate(&mut OsRng).unwrap();
        let sig = keypair.sign(b"serialize me").unwrap();
        let bytes = bincode::serialize(&sig).unwrap();
        let restored: Signature = bincode::deserialize(&bytes).unwrap();
        assert_eq!(sig, restored);
    }

    #[test]
    fn partial_signature_round_trip() {
        let partial = PartialSignature::from_bytes(&[5u8; 32]).unwrap();
        let bytes = bincode::serialize(&partial).unwrap();
        let restored: PartialSignature = bincode::deserialize(&bytes).unwrap();
        assert_eq!(partial, restored);
    }

    #[test]
    fn truncated_input_is_rejected() {
        let pk = Keypair::generate(&mut OsRng).unwrap().public;
        let mut bytes = bincode::serialize(&pk).unwrap();
        bytes.truncate(bytes.len() - 1);
        assert!(bincode::deserialize::<PublicKey>(&bytes).is_err());
    }
}
