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

use super::{
    attribute::{attribute_indexes, check_indexes, Attribute},
    ciphersuites::PsCiphersuite,
    keys::PSPublicKey,
    zkp::{self, parse_indexed_proof, PSZKProof},
};
use crate::{
    errors::Error,
    utils::util::{
        i2osp_u32,
        ps_utils::{g1_to_bytes, get_random, parse_g1_projective, ScalarExt},
    },
};
use bls12_381_plus::{G1Affine, G1Projective, Scalar};
use serde::{Deserialize, Serialize};

/// The holder's issue request: a Pedersen commitment to its hidden attributes
/// and a proof of knowledge of the opening.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PSIssueRequest {
    pub commitment: G1Projective,
    /// Slots committed to, in the order of the proof responses `1..`
    pub indexes: Vec<usize>,
    pub proof: PSZKProof,
}

/// Blinding scalar `t` of an issue request. It stays with the holder until
/// the blind signature is unblinded and is never sent.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct BlindFactor(pub(crate) Scalar);

impl BlindFactor {
    pub fn random() -> Self {
        Self(get_random())
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes_be()
    }

    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, Error> {
        Ok(Self(Scalar::from_bytes_be(bytes)?))
    }
}

impl PSIssueRequest {
    /// # Description
    /// Prepares an issue request over the holder's hidden attributes
    /// (e.g. long-term secret key, username).
    ///
    /// # Inputs:
    /// * `pk` (REQUIRED), the issuer public key.
    /// * `user_attributes` (REQUIRED), the hidden attributes, each bound to its slot. May be empty.
    ///
    /// # Output:
    /// ([`PSIssueRequest`], [`BlindFactor`]), a tuple (**`request`**, **`t`**) or [`Error`].
    ///
    pub fn create<CS: PsCiphersuite>(pk: &PSPublicKey, user_attributes: &[Attribute]) -> Result<(Self, BlindFactor), Error> {
        let indexes = attribute_indexes(user_attributes);
        check_indexes(&indexes, pk.len())?;

        let t = BlindFactor::random();

        let mut generators: Vec<G1Projective> = vec![pk.g];
        let mut secrets: Vec<Scalar> = vec![t.0];
        for attribute in user_attributes {
            generators.push(pk.Y[attribute.index]);
            secrets.push(attribute.to_scalar::<CS>());
        }

        // C = g^t * Y_i1^m_i1 * ... * Y_ik^m_ik
        let commitment = generators
            .iter()
            .zip(&secrets)
            .fold(G1Projective::IDENTITY, |acc, (g, a)| acc + g * a);

        let proof = zkp::generate::<CS, G1Projective>(&generators, &secrets, &commitment, None)?;

        Ok((Self { commitment, indexes, proof }, t))
    }

    /// # Description
    /// Issuer-side validation of the request. The generators are derived from
    /// the public key, never taken from the request.
    ///
    /// # Output:
    /// the commitment, or [`Error::InvalidCommitmentProof`].
    ///
    pub fn validate<CS: PsCiphersuite>(&self, pk: &PSPublicKey) -> Result<G1Projective, Error> {
        if check_indexes(&self.indexes, pk.len()).is_err() {
            log::debug!("issue request refers to invalid slots {:?}", self.indexes);
            return Err(Error::InvalidCommitmentProof);
        }

        let generators: Vec<G1Projective> = core::iter::once(pk.g)
            .chain(self.indexes.iter().map(|&i| pk.Y[i]))
            .collect();

        if zkp::verify::<CS, G1Projective>(&self.commitment, &generators, &self.proof, None) {
            Ok(self.commitment)
        } else {
            log::debug!("commitment proof rejected");
            Err(Error::InvalidCommitmentProof)
        }
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = Vec::new();
        bytes.extend_from_slice(&g1_to_bytes(&self.commitment));
        bytes.extend_from_slice(&i2osp_u32(self.indexes.len()));
        self.indexes
            .iter()
            .for_each(|&i| bytes.extend_from_slice(&i2osp_u32(i)));
        bytes.extend_from_slice(&self.proof.to_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (commitment, indexes, proof) = parse_indexed_proof(bytes, G1Affine::COMPRESSED_BYTES)?;
        let commitment = parse_g1_projective(commitment)?;

        Ok(Self { commitment, indexes, proof })
    }
}
