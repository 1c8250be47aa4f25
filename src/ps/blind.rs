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
    commitment::{BlindFactor, PSIssueRequest},
    keys::{PSPublicKey, PSSecretKey},
    signature::PSSignature,
};
use crate::{
    errors::Error,
    utils::util::ps_utils::{g1_to_bytes, get_random, parse_g1_projective},
};
use bls12_381_plus::G1Projective;
use serde::{Deserialize, Serialize};

/// Signature over a committed vector, still blinded by the holder's `t`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PSBlindSignature {
    pub sigma_1: G1Projective,
    pub sigma_2: G1Projective,
}

impl PSBlindSignature {
    pub const BYTES: usize = 96;

    /// # Description
    /// Issuer side of the issuance protocol. The commitment proof is checked
    /// first, then the issuer attributes are added to the commitment and signed.
    ///
    /// # Inputs:
    /// * `sk` (REQUIRED), the issuer secret key.
    /// * `pk` (REQUIRED), the issuer public key.
    /// * `request` (REQUIRED), the holder's [`PSIssueRequest`].
    /// * `issuer_attributes` (REQUIRED), the attributes chosen by the issuer. May be empty.
    ///
    /// # Output:
    /// a [`PSBlindSignature`] or [`Error`]:
    /// * [`Error::InvalidCommitmentProof`] if the request does not verify,
    /// * [`Error::AttributeIndexCollision`] if an issuer attribute targets a hidden slot,
    /// * [`Error::AttributeIndexOutOfRange`] or [`Error::InvalidInput`] for malformed issuer attributes.
    ///
    pub fn sign_issue_request<CS: PsCiphersuite>(
        sk: &PSSecretKey,
        pk: &PSPublicKey,
        request: &PSIssueRequest,
        issuer_attributes: &[Attribute],
    ) -> Result<Self, Error> {
        if sk.len() != pk.len() {
            return Err(Error::BlindSignError("len(sk.y) != len(pk.Y)".to_owned()));
        }

        let commitment = request.validate::<CS>(pk)?;

        let issuer_indexes = attribute_indexes(issuer_attributes);
        check_indexes(&issuer_indexes, pk.len())?;
        if let Some(&i) = issuer_indexes.iter().find(|i| request.indexes.contains(i)) {
            return Err(Error::AttributeIndexCollision(i));
        }

        // (X * C * Y_j1^m_j1 * ... * Y_jl^m_jl)^u
        let product = issuer_attributes
            .iter()
            .fold(sk.X + commitment, |acc, a| acc + pk.Y[a.index] * a.to_scalar::<CS>());

        let u = get_random();
        log::debug!(
            "signing issue request over {} hidden and {} issuer attributes",
            request.indexes.len(),
            issuer_attributes.len()
        );

        Ok(Self {
            sigma_1: pk.g * u,
            sigma_2: product * u,
        })
    }

    /// # Description
    /// Removes the blinding factor: `(sigma_1', sigma_2' / sigma_1'^t)`.
    ///
    /// # Output:
    /// a [`PSSignature`] over the full attribute vector, or [`Error::G1IdentityError`].
    ///
    pub fn obtain_credential(&self, t: &BlindFactor) -> Result<PSSignature, Error> {
        if bool::from(self.sigma_1.is_identity()) {
            return Err(Error::G1IdentityError);
        }

        Ok(PSSignature {
            sigma_1: self.sigma_1,
            sigma_2: self.sigma_2 - self.sigma_1 * t.0,
        })
    }

    pub fn to_bytes(&self) -> [u8; Self::BYTES] {
        let mut bytes = [0u8; Self::BYTES];
        bytes[0..48].copy_from_slice(&g1_to_bytes(&self.sigma_1));
        bytes[48..96].copy_from_slice(&g1_to_bytes(&self.sigma_2));
        bytes
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, Error> {
        if data.len() != Self::BYTES {
            return Err(Error::DeserializationError(format!(
                "blind signature length {} != {}",
                data.len(),
                Self::BYTES
            )));
        }

        Ok(Self {
            sigma_1: parse_g1_projective(&data[0..48])?,
            sigma_2: parse_g1_projective(&data[48..96])?,
        })
    }
}
