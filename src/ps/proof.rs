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
    credential::PSAnonymousCredential,
    keys::PSPublicKey,
    zkp::{self, parse_indexed_proof, PSZKProof},
};
use crate::{
    errors::Error,
    utils::util::{
        i2osp_u32,
        ps_utils::{g1_to_bytes, parse_g1_projective},
    },
};
use bls12_381_plus::{pairing, G1Projective, G2Projective, Gt, Scalar};
use elliptic_curve::group::Curve;
use serde::{Deserialize, Serialize};

/// Showing of an anonymized credential: the randomized signature, the slots
/// kept hidden and a proof of knowledge of their values and of `t`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PSDisclosureProof {
    pub sigma_1: G1Projective,
    pub sigma_2: G1Projective,
    pub hidden_indexes: Vec<usize>,
    pub proof: PSZKProof,
}

impl PSDisclosureProof {
    /// # Description
    /// Proves possession of `credential` while keeping `hidden_attributes` secret.
    /// The attributes not listed here are the ones the verifier will be shown.
    ///
    /// # Inputs:
    /// * `pk` (REQUIRED), the issuer public key.
    /// * `credential` (REQUIRED), an anonymized credential.
    /// * `hidden_attributes` (REQUIRED), the attributes to keep hidden. May be empty.
    /// * `message` (REQUIRED), application message bound into the challenge (e.g. a location or a nonce).
    ///
    /// # Output:
    /// a [`PSDisclosureProof`] or [`Error`].
    ///
    pub fn create<CS: PsCiphersuite>(
        pk: &PSPublicKey,
        credential: &PSAnonymousCredential,
        hidden_attributes: &[Attribute],
        message: &[u8],
    ) -> Result<Self, Error> {
        if bool::from(credential.sigma_1.is_identity()) {
            return Err(Error::G1IdentityError);
        }

        let hidden_indexes = attribute_indexes(hidden_attributes);
        check_indexes(&hidden_indexes, pk.len())?;

        let generators = disclosure_generators(pk, &credential.sigma_1, &hidden_indexes);

        let mut secrets: Vec<Scalar> = vec![credential.t];
        secrets.extend(hidden_attributes.iter().map(|a| a.to_scalar::<CS>()));

        // C = e(sigma_1, g_tilde)^t * e(sigma_1, Y_tilde_i1)^m_i1 * ...
        let commitment = generators
            .iter()
            .zip(&secrets)
            .fold(Gt::IDENTITY, |acc, (g, a)| acc + *g * *a);

        let proof = zkp::generate::<CS, Gt>(&generators, &secrets, &commitment, Some(message))?;

        Ok(Self {
            sigma_1: credential.sigma_1,
            sigma_2: credential.sigma_2,
            hidden_indexes,
            proof,
        })
    }

    /// # Description
    /// Checks the showing against the attributes the holder disclosed.
    ///
    /// # Inputs:
    /// * `pk` (REQUIRED), the issuer public key.
    /// * `disclosed_attributes` (REQUIRED), the attributes shown to the verifier. May be empty.
    /// * `message` (REQUIRED), the application message the proof must be bound to.
    ///
    /// # Output:
    /// `true` iff the holder owns a signature over the hidden and disclosed
    /// attributes together, `false` otherwise.
    ///
    pub fn verify<CS: PsCiphersuite>(&self, pk: &PSPublicKey, disclosed_attributes: &[Attribute], message: &[u8]) -> bool {
        if bool::from(self.sigma_1.is_identity()) {
            log::debug!("disclosure proof over Identity_G1");
            return false;
        }

        let mut indexes = self.hidden_indexes.clone();
        indexes.extend(attribute_indexes(disclosed_attributes));
        if let Err(e) = check_indexes(&indexes, pk.len()) {
            log::debug!("disclosure proof rejected: {}", e);
            return false;
        }

        let generators = disclosure_generators(pk, &self.sigma_1, &self.hidden_indexes);

        // X_tilde * Y_tilde_j1^m_j1 * ... over the disclosed slots
        let A: G2Projective = disclosed_attributes
            .iter()
            .fold(pk.X_tilde, |acc, a| acc + pk.Y_tilde[a.index] * a.to_scalar::<CS>());

        // C = e(sigma_2, g_tilde) / e(sigma_1, A)
        let sigma_1 = self.sigma_1.to_affine();
        let commitment = pairing(&self.sigma_2.to_affine(), &pk.g_tilde.to_affine()) - pairing(&sigma_1, &A.to_affine());

        let valid = zkp::verify::<CS, Gt>(&commitment, &generators, &self.proof, Some(message));
        if !valid {
            log::debug!("disclosure proof rejected");
        }
        valid
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = Vec::new();
        bytes.extend_from_slice(&g1_to_bytes(&self.sigma_1));
        bytes.extend_from_slice(&g1_to_bytes(&self.sigma_2));
        bytes.extend_from_slice(&i2osp_u32(self.hidden_indexes.len()));
        self.hidden_indexes
            .iter()
            .for_each(|&i| bytes.extend_from_slice(&i2osp_u32(i)));
        bytes.extend_from_slice(&self.proof.to_bytes());
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let (head, hidden_indexes, proof) = parse_indexed_proof(bytes, 96)?;

        Ok(Self {
            sigma_1: parse_g1_projective(&head[0..48])?,
            sigma_2: parse_g1_projective(&head[48..96])?,
            hidden_indexes,
            proof,
        })
    }
}

/// `[e(sigma_1, g_tilde)] + [e(sigma_1, Y_tilde_i) for i in hidden]`
fn disclosure_generators(pk: &PSPublicKey, sigma_1: &G1Projective, hidden_indexes: &[usize]) -> Vec<Gt> {
    let sigma_1 = sigma_1.to_affine();

    core::iter::once(&pk.g_tilde)
        .chain(hidden_indexes.iter().map(|&i| &pk.Y_tilde[i]))
        .map(|g| pairing(&sigma_1, &g.to_affine()))
        .collect()
}
