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
    ciphersuites::PsCiphersuite,
    credential::PSAnonymousCredential,
    keys::{PSPublicKey, PSSecretKey},
};
use crate::{
    errors::Error,
    utils::{
        message::PSMessage,
        util::ps_utils::{g1_to_bytes, get_random, parse_g1_projective, random_g1_generator},
    },
};
use bls12_381_plus::{multi_miller_loop, G1Projective, G2Prepared, G2Projective, Gt};
use elliptic_curve::group::Curve;
use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PSSignature {
    pub sigma_1: G1Projective,
    pub sigma_2: G1Projective,
}

impl PSSignature {
    pub const BYTES: usize = 96;

    /// # Description
    /// Signs a vector of exactly L messages with the issuer secret key.
    ///
    /// # Inputs:
    /// * `sk` (REQUIRED), the issuer secret key.
    /// * `messages` (REQUIRED), a vector of L octet strings.
    ///
    /// # Output:
    /// a [`PSSignature`] or [`Error::InvalidInput`] if the vector is empty or its length is not L.
    ///
    pub fn sign<CS: PsCiphersuite>(sk: &PSSecretKey, messages: &[Vec<u8>]) -> Result<Self, Error> {
        check_messages_len(messages.len(), sk.len())?;
        let message_scalars = PSMessage::messages_to_scalar::<CS>(messages);

        core_sign(sk, &message_scalars)
    }

    /// # Description
    /// Checks `e(sigma_1, X_tilde * prod Y_tilde_i^m_i) == e(sigma_2, g_tilde)`.
    ///
    /// # Output:
    /// `Ok(true)` for a valid signature, `Ok(false)` otherwise; [`Error::InvalidInput`]
    /// if the vector is empty or its length is not L.
    ///
    pub fn verify<CS: PsCiphersuite>(&self, pk: &PSPublicKey, messages: &[Vec<u8>]) -> Result<bool, Error> {
        check_messages_len(messages.len(), pk.len())?;
        let message_scalars = PSMessage::messages_to_scalar::<CS>(messages);

        Ok(core_verify(pk, self, &message_scalars))
    }

    /// Re-randomizes the signature so that showings cannot be linked to each
    /// other or to issuance.
    pub fn anonymize(&self) -> PSAnonymousCredential {
        let r = get_random();
        let t = get_random();

        PSAnonymousCredential::new(
            self.sigma_1 * r,
            (self.sigma_2 + self.sigma_1 * t) * r,
            t,
        )
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
                "signature length {} != {}",
                data.len(),
                Self::BYTES
            )));
        }
        let sigma_1 = parse_g1_projective(&data[0..48])?;
        let sigma_2 = parse_g1_projective(&data[48..96])?;

        Ok(Self { sigma_1, sigma_2 })
    }
}

fn check_messages_len(len: usize, L: usize) -> Result<(), Error> {
    if len == 0 {
        return Err(Error::InvalidInput("the message vector is empty".to_owned()));
    }
    if len != L {
        return Err(Error::InvalidInput(format!(
            "the message vector has length {}, expected {}",
            len, L
        )));
    }
    Ok(())
}

fn core_sign(sk: &PSSecretKey, messages: &[PSMessage]) -> Result<PSSignature, Error> {
    if sk.y.len() != messages.len() {
        return Err(Error::SignatureGenerationError("len(y) != len(messages)".to_owned()));
    }

    let h = random_g1_generator();

    // e = x + y_1 * m_1 + ... + y_L * m_L
    let e = sk
        .y
        .iter()
        .zip(messages)
        .fold(sk.x, |acc, (y_i, m_i)| acc + y_i * m_i.value);

    Ok(PSSignature {
        sigma_1: h,
        sigma_2: h * e,
    })
}

fn core_verify(pk: &PSPublicKey, signature: &PSSignature, messages: &[PSMessage]) -> bool {
    if bool::from(signature.sigma_1.is_identity()) {
        return false;
    }
    if pk.Y_tilde.len() != messages.len() {
        return false;
    }

    // A = X_tilde + Y_tilde_1 * m_1 + ... + Y_tilde_L * m_L
    let A: G2Projective = pk
        .Y_tilde
        .iter()
        .zip(messages)
        .fold(pk.X_tilde, |acc, (Y_i, m_i)| acc + Y_i * m_i.value);

    let term1 = (
        &signature.sigma_1.to_affine(),
        &G2Prepared::from(A.to_affine()),
    );
    let term2 = (
        &signature.sigma_2.to_affine(),
        &G2Prepared::from(-pk.g_tilde.to_affine()),
    );

    multi_miller_loop(&[term1, term2]).final_exponentiation() == Gt::IDENTITY
}
