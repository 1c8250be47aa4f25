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

//! Schnorr proof of knowledge of a discrete-log representation, made
//! non-interactive with the Fiat-Shamir heuristic.
//!
//! Notation, in multiplicative form:
//! - generators `g_0, ..., g_k` (`g_0` is always the blinding generator)
//! - secrets `a_0, ..., a_k` with `com = g_0^a_0 * ... * g_k^a_k`
//! - `R = g_0^r_0 * ... * g_k^r_k` for fresh randoms `r_i`
//! - `c = H(g_0 || ... || g_k || com || R || message)`
//! - `s_i = r_i - c * a_i`
//!
//! The verifier recomputes `R' = com^c * g_0^s_0 * ... * g_k^s_k` and accepts
//! iff `c == H(g_0 || ... || g_k || com || R' || message)`.

use super::ciphersuites::PsCiphersuite;
use crate::{
    errors::Error,
    utils::util::{
        os2ip_u32,
        ps_utils::{calculate_random_scalars, hash_to_scalar, parse_scalar, ScalarExt},
    },
};
use bls12_381_plus::{G1Projective, Gt, Scalar};
use core::ops::{Add, Mul};
use elliptic_curve::group::Curve;
use serde::{Deserialize, Serialize};

/// Group element a proof can be computed over.
pub trait ProofElement: Copy + PartialEq + Add<Output = Self> + Mul<Scalar, Output = Self> {
    fn identity() -> Self;
    fn to_transcript_bytes(&self) -> Vec<u8>;
}

impl ProofElement for G1Projective {
    fn identity() -> Self {
        G1Projective::IDENTITY
    }

    fn to_transcript_bytes(&self) -> Vec<u8> {
        self.to_affine().to_compressed().to_vec()
    }
}

impl ProofElement for Gt {
    fn identity() -> Self {
        Gt::IDENTITY
    }

    fn to_transcript_bytes(&self) -> Vec<u8> {
        self.to_bytes().as_ref().to_vec()
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PSZKProof {
    pub challenge: Scalar,
    /// One response per generator, index 0 belongs to the blinding generator
    pub responses: Vec<Scalar>,
}

impl PSZKProof {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes: Vec<u8> = Vec::new();
        bytes.extend_from_slice(&self.challenge.to_bytes_be());
        self.responses
            .iter()
            .for_each(|s| bytes.extend_from_slice(&s.to_bytes_be()));
        bytes
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        if bytes.len() < 32 || bytes.len() % 32 != 0 {
            return Err(Error::DeserializationError("invalid proof length".to_owned()));
        }

        let challenge = parse_scalar(&bytes[0..32])?;
        let responses = bytes[32..]
            .chunks_exact(32)
            .map(parse_scalar)
            .collect::<Result<Vec<Scalar>, Error>>()?;

        Ok(Self { challenge, responses })
    }
}

/// Splits `head || n || index_1 .. index_n || proof` into its parts, checking
/// that the proof has one response per index plus the blinding one.
pub(crate) fn parse_indexed_proof(bytes: &[u8], head_len: usize) -> Result<(&[u8], Vec<usize>, PSZKProof), Error> {
    let truncated = || Error::DeserializationError("truncated input".to_owned());

    let head = bytes.get(..head_len).ok_or_else(truncated)?;
    let (n, mut offset) = os2ip_u32(bytes, head_len).ok_or_else(truncated)?;

    let mut indexes = Vec::new();
    for _ in 0..n {
        let (index, next) = os2ip_u32(bytes, offset).ok_or_else(truncated)?;
        indexes.push(index);
        offset = next;
    }

    let proof = PSZKProof::from_bytes(&bytes[offset..])?;
    if proof.responses.len() != indexes.len() + 1 {
        return Err(Error::DeserializationError(
            "number of responses does not match the indexes".to_owned(),
        ));
    }

    Ok((head, indexes, proof))
}

fn multi_exp<G: ProofElement>(generators: &[G], scalars: &[Scalar]) -> G {
    generators
        .iter()
        .zip(scalars)
        .fold(G::identity(), |acc, (g, s)| acc + *g * *s)
}

/// Draws one fresh random per generator and returns `(randoms, R)`.
pub fn commit<G: ProofElement>(generators: &[G]) -> (Vec<Scalar>, G) {
    let randoms = calculate_random_scalars(generators.len());
    let R = multi_exp(generators, &randoms);
    (randoms, R)
}

pub fn challenge<CS, G>(generators: &[G], com: &G, R: &G, message: Option<&[u8]>) -> Scalar
where
    CS: PsCiphersuite,
    G: ProofElement,
{
    let mut c_octs: Vec<u8> = Vec::new();
    generators
        .iter()
        .for_each(|g| c_octs.extend_from_slice(&g.to_transcript_bytes()));
    c_octs.extend_from_slice(&com.to_transcript_bytes());
    c_octs.extend_from_slice(&R.to_transcript_bytes());
    if let Some(message) = message {
        c_octs.extend_from_slice(message);
    }

    hash_to_scalar::<CS>(&c_octs, CS::CHALLENGE_DST)
}

pub fn respond(randoms: &[Scalar], c: Scalar, secrets: &[Scalar]) -> Vec<Scalar> {
    randoms
        .iter()
        .zip(secrets)
        .map(|(r, a)| r - c * a)
        .collect()
}

/// # Description
/// Proves knowledge of `secrets` opening `com` against `generators`.
///
/// # Inputs:
/// * `generators` (REQUIRED), at least one element, the first being the blinding generator.
/// * `secrets` (REQUIRED), as many scalars as generators.
/// * `com` (REQUIRED), the commitment `sum(generators[i] * secrets[i])`.
/// * `message` (OPTIONAL), octets bound into the challenge.
///
/// # Output:
/// a [`PSZKProof`] or [`Error::InvalidInput`].
///
pub fn generate<CS, G>(generators: &[G], secrets: &[Scalar], com: &G, message: Option<&[u8]>) -> Result<PSZKProof, Error>
where
    CS: PsCiphersuite,
    G: ProofElement,
{
    if generators.is_empty() {
        return Err(Error::InvalidInput("no generators".to_owned()));
    }
    if generators.len() != secrets.len() {
        return Err(Error::InvalidInput(format!(
            "{} generators for {} secrets",
            generators.len(),
            secrets.len()
        )));
    }

    let (randoms, R) = commit(generators);
    let c = challenge::<CS, G>(generators, com, &R, message);
    let responses = respond(&randoms, c, secrets);

    Ok(PSZKProof { challenge: c, responses })
}

pub fn verify<CS, G>(com: &G, generators: &[G], proof: &PSZKProof, message: Option<&[u8]>) -> bool
where
    CS: PsCiphersuite,
    G: ProofElement,
{
    if generators.is_empty() || proof.responses.len() != generators.len() {
        return false;
    }

    let R_prime = *com * proof.challenge + multi_exp(generators, &proof.responses);
    let c_prime = challenge::<CS, G>(generators, com, &R_prime, message);

    c_prime == proof.challenge
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ps::{attribute::Attribute, ciphersuites::{Bls12381Sha256, Bls12381Sha3_256}, keys::KeyPair},
        utils::util::ps_utils::get_random,
    };
    use bls12_381_plus::{pairing, G2Projective};

    // C = g^t * Y_0^m_0 * Y_1^m_1 * Y_2^m_2
    fn pedersen_statement() -> (Vec<G1Projective>, Vec<Scalar>, G1Projective) {
        let pk = KeyPair::generate(5).unwrap().into_parts().1;
        let attributes = [
            Attribute::new(0, "key0", "value0"),
            Attribute::new(1, "key1", "value1"),
            Attribute::new(2, "key2", "value2"),
        ];

        let t = get_random();
        let mut generators = vec![pk.g];
        let mut secrets = vec![t];
        for attribute in &attributes {
            generators.push(pk.Y[attribute.index]);
            secrets.push(attribute.to_scalar::<Bls12381Sha256>());
        }
        let com = multi_exp(&generators, &secrets);
        (generators, secrets, com)
    }

    #[test]
    fn step_by_step_proof_verifies() {
        let (generators, secrets, com) = pedersen_statement();
        let (randoms, R) = commit(&generators);
        let c = challenge::<Bls12381Sha256, _>(&generators, &com, &R, None);
        let responses = respond(&randoms, c, &secrets);
        let proof = PSZKProof { challenge: c, responses };
        assert!(verify::<Bls12381Sha256, _>(&com, &generators, &proof, None));
    }

    #[test]
    fn proof_with_and_without_message() {
        let (generators, secrets, com) = pedersen_statement();

        let proof = generate::<Bls12381Sha256, _>(&generators, &secrets, &com, None).unwrap();
        assert!(verify::<Bls12381Sha256, _>(&com, &generators, &proof, None));
        assert!(!verify::<Bls12381Sha256, _>(&com, &generators, &proof, Some(b"hello ATOPET!")));

        let proof = generate::<Bls12381Sha256, _>(&generators, &secrets, &com, Some(b"hello world")).unwrap();
        assert!(verify::<Bls12381Sha256, _>(&com, &generators, &proof, Some(b"hello world")));
        assert!(!verify::<Bls12381Sha256, _>(&com, &generators, &proof, Some(b"hello ATOPET!")));
        assert!(!verify::<Bls12381Sha256, _>(&com, &generators, &proof, None));
        assert!(!verify::<Bls12381Sha3_256, _>(&com, &generators, &proof, Some(b"hello world")));
    }

    #[test]
    fn tampered_proof_is_rejected() {
        let (generators, secrets, com) = pedersen_statement();
        let proof = generate::<Bls12381Sha256, _>(&generators, &secrets, &com, None).unwrap();

        let mut bad_challenge = proof.clone();
        bad_challenge.challenge += Scalar::from(1u64);
        assert!(!verify::<Bls12381Sha256, _>(&com, &generators, &bad_challenge, None));

        let mut bad_response = proof.clone();
        bad_response.responses[0] = get_random();
        assert!(!verify::<Bls12381Sha256, _>(&com, &generators, &bad_response, None));

        let mut extra = proof.clone();
        extra.responses.push(get_random());
        assert!(!verify::<Bls12381Sha256, _>(&com, &generators, &extra, None));

        let mut reordered = generators.clone();
        reordered.swap(1, 2);
        assert!(!verify::<Bls12381Sha256, _>(&com, &reordered, &proof, None));

        let other_com = com + generators[1];
        assert!(!verify::<Bls12381Sha256, _>(&other_com, &generators, &proof, None));
    }

    #[test]
    fn wrong_secrets_do_not_verify() {
        let (generators, mut secrets, com) = pedersen_statement();
        secrets[2] = get_random();
        let proof = generate::<Bls12381Sha256, _>(&generators, &secrets, &com, None).unwrap();
        assert!(!verify::<Bls12381Sha256, _>(&com, &generators, &proof, None));
    }

    #[test]
    fn invalid_statement_shapes() {
        let (generators, secrets, com) = pedersen_statement();
        assert!(matches!(
            generate::<Bls12381Sha256, G1Projective>(&[], &[], &com, None),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            generate::<Bls12381Sha256, _>(&generators, &secrets[1..], &com, None),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn proof_over_gt() {
        let base = pairing(&G1Projective::GENERATOR.to_affine(), &G2Projective::GENERATOR.to_affine());
        let generators = vec![base * get_random(), base * get_random()];
        let secrets = vec![get_random(), get_random()];
        let com = multi_exp(&generators, &secrets);

        let proof = generate::<Bls12381Sha256, _>(&generators, &secrets, &com, Some(b"46.5197,6.6323")).unwrap();
        assert!(verify::<Bls12381Sha256, _>(&com, &generators, &proof, Some(b"46.5197,6.6323")));
        assert!(!verify::<Bls12381Sha256, _>(&com, &generators, &proof, Some(b"46.5197,6.6324")));
    }

    #[test]
    fn proof_bytes_round_trip() {
        let (generators, secrets, com) = pedersen_statement();
        let proof = generate::<Bls12381Sha256, _>(&generators, &secrets, &com, None).unwrap();

        let bytes = proof.to_bytes();
        assert_eq!(bytes.len(), 32 * 5);
        assert_eq!(PSZKProof::from_bytes(&bytes).unwrap(), proof);
        assert!(PSZKProof::from_bytes(&bytes[..bytes.len() - 1]).is_err());
        assert!(PSZKProof::from_bytes(&[]).is_err());
    }
}
