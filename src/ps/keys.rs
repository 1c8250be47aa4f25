// Copyright 2023 Fondazione LINKS

// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at

//     http://www.apache.org/licenses/LICENSE-2.0

// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::attribute::Attribute;
use crate::{errors::Error, utils::util::ps_utils::calculate_random_scalars};
use bls12_381_plus::{G1Projective, G2Projective, Scalar};
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PSPublicKey {
    pub g: G1Projective,
    pub g_tilde: G2Projective,
    pub X_tilde: G2Projective,
    pub Y: Vec<G1Projective>,
    pub Y_tilde: Vec<G2Projective>,
    /// Attribute names, the position of a name is its slot index. Empty when
    /// the key was generated from a bare attribute count.
    pub attribute_names: Vec<String>,
}

impl PSPublicKey {
    /// Number of attribute slots (L)
    pub fn len(&self) -> usize {
        self.Y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.Y.is_empty()
    }

    pub fn attribute_index(&self, name: &str) -> Option<usize> {
        self.attribute_names.iter().position(|n| n == name)
    }

    /// Builds the attribute stored in the slot registered under `name`.
    pub fn attribute(&self, name: &str, value: impl AsRef<[u8]>) -> Result<Attribute, Error> {
        let index = self
            .attribute_index(name)
            .ok_or_else(|| Error::UnknownAttribute(name.to_owned()))?;
        Ok(Attribute::new(index, name, value))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(|e| Error::SerializationError(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let pk: Self = serde_json::from_slice(bytes)
            .map_err(|e| Error::DeserializationError(e.to_string()))?;
        pk.check()?;
        Ok(pk)
    }

    pub fn encode(&self) -> Result<String, Error> {
        Ok(hex::encode(self.to_bytes()?))
    }

    fn check(&self) -> Result<(), Error> {
        if self.Y.is_empty() || self.Y.len() != self.Y_tilde.len() {
            return Err(Error::DeserializationError(
                "len(Y) != len(Y_tilde) or L == 0".to_owned(),
            ));
        }
        if !self.attribute_names.is_empty() && self.attribute_names.len() != self.Y.len() {
            return Err(Error::DeserializationError(
                "len(attribute_names) != L".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PSSecretKey {
    pub x: Scalar,
    pub X: G1Projective,
    pub y: Vec<Scalar>,
}

impl PSSecretKey {
    /// Number of attribute slots (L)
    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        serde_json::to_vec(self).map_err(|e| Error::SerializationError(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let sk: Self = serde_json::from_slice(bytes)
            .map_err(|e| Error::DeserializationError(e.to_string()))?;
        if sk.y.is_empty() {
            return Err(Error::DeserializationError("L == 0".to_owned()));
        }
        Ok(sk)
    }

    pub fn encode(&self) -> Result<String, Error> {
        Ok(hex::encode(self.to_bytes()?))
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct KeyPair {
    pub(crate) public: PSPublicKey,
    pub(crate) private: PSSecretKey,
}

impl KeyPair {
    /// # Description
    /// Generates an issuer key pair over `attribute_count` slots.
    ///
    /// # Inputs:
    /// * `attribute_count` (REQUIRED), the length L of every signed vector.
    ///
    /// # Output:
    /// a [`KeyPair`] or [`Error::InvalidInput`] if L == 0.
    ///
    pub fn generate(attribute_count: usize) -> Result<Self, Error> {
        if attribute_count == 0 {
            return Err(Error::InvalidInput("L == 0".to_owned()));
        }

        let (private, public) = key_gen(attribute_count);
        Ok(Self { public, private })
    }

    /// Generates a key pair with one slot per name, the slot index being the
    /// position of the name in `attribute_names`.
    pub fn generate_with_names<T: AsRef<str>>(attribute_names: &[T]) -> Result<Self, Error> {
        let names: Vec<String> = attribute_names.iter().map(|n| n.as_ref().to_owned()).collect();

        if let Some(pos) = (1..names.len()).find(|&i| names[..i].contains(&names[i])) {
            return Err(Error::KeyGenError(format!(
                "duplicate attribute name {}",
                names[pos]
            )));
        }

        let mut keypair = Self::generate(names.len())?;
        keypair.public.attribute_names = names;
        Ok(keypair)
    }

    pub fn public_key(&self) -> &PSPublicKey {
        &self.public
    }

    pub fn private_key(&self) -> &PSSecretKey {
        &self.private
    }

    /// Returns the couple `(sk, pk)`.
    pub fn into_parts(self) -> (PSSecretKey, PSPublicKey) {
        (self.private, self.public)
    }
}

fn key_gen(L: usize) -> (PSSecretKey, PSPublicKey) {
    let g = G1Projective::GENERATOR;
    let g_tilde = G2Projective::GENERATOR;

    let x = calculate_random_scalars(1)[0];
    let y = calculate_random_scalars(L);

    let X = g * x;
    let X_tilde = g_tilde * x;
    let Y: Vec<G1Projective> = y.iter().map(|y_i| g * y_i).collect();
    let Y_tilde: Vec<G2Projective> = y.iter().map(|y_i| g_tilde * y_i).collect();

    (
        PSSecretKey { x, X, y },
        PSPublicKey {
            g,
            g_tilde,
            X_tilde,
            Y,
            Y_tilde,
            attribute_names: Vec::new(),
        },
    )
}
