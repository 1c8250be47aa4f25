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

use crate::ps::{
    attribute::Attribute,
    ciphersuites::{Bls12381Sha256, Bls12381Sha3_256, PsCiphersuite},
    keys::{KeyPair, PSPublicKey},
    proof::PSDisclosureProof,
    signature::PSSignature,
};

const SUBSCRIPTIONS: [&str; 3] = ["restaurant", "bar", "dojo"];
const USERNAME: &str = "username";
const SECRET_KEY: &str = "secret_key";
const LOCATION: &[u8] = b"46.52345 6.57890";

macro_rules! protocol_tests {
    ( $( $t:ident: { $( ($n:ident, $f:ident), )+ },)+ ) => { $($(
        #[test] fn $n() { $f::<$t>(); }
    )+)+ }
}

protocol_tests! {
    Bls12381Sha256: {
        (anonymized_signature_sha256, anonymized_signature_discloses),
    },
    Bls12381Sha3_256: {
        (anonymized_signature_sha3_256, anonymized_signature_discloses),
    },
}

fn registry() -> KeyPair {
    let names: Vec<&str> = SUBSCRIPTIONS
        .iter()
        .copied()
        .chain([USERNAME, SECRET_KEY])
        .collect();
    KeyPair::generate_with_names(&names).unwrap()
}

/// Subscriptions as the issuer sets them, "true" for the ones bought
fn subscriptions(pk: &PSPublicKey, bought: &[&str]) -> Vec<Attribute> {
    SUBSCRIPTIONS
        .iter()
        .map(|&name| {
            let value = if bought.contains(&name) { "true" } else { "false" };
            pk.attribute(name, value).unwrap()
        })
        .collect()
}

fn anonymized_signature_discloses<CS: PsCiphersuite>() {
    let (sk, pk) = registry().into_parts();

    let mut attributes = subscriptions(&pk, &["restaurant", "dojo"]);
    attributes.push(pk.attribute(USERNAME, "alice").unwrap());
    attributes.push(pk.attribute(SECRET_KEY, "0x1234").unwrap());

    let messages: Vec<Vec<u8>> = attributes.iter().map(|a| a.to_bytes().to_vec()).collect();
    let signature = PSSignature::sign::<CS>(&sk, &messages).unwrap();
    assert!(signature.verify::<CS>(&pk, &messages).unwrap());

    let credential = signature.anonymize();
    let (disclosed, hidden) = attributes.split_at(SUBSCRIPTIONS.len());
    let proof = PSDisclosureProof::create::<CS>(&pk, &credential, hidden, LOCATION).unwrap();

    assert!(proof.verify::<CS>(&pk, disclosed, LOCATION));
    assert!(!proof.verify::<CS>(&pk, disclosed, b"46.52345 6.57891"));

    // bar was not bought
    let mut claimed = disclosed.to_vec();
    claimed[1] = pk.attribute("bar", "true").unwrap();
    assert!(!proof.verify::<CS>(&pk, &claimed, LOCATION));
}

#[cfg(feature = "ps_blind")]
mod issuance {
    use super::*;
    use crate::{
        errors::Error,
        ps::{blind::PSBlindSignature, commitment::PSIssueRequest},
    };

    protocol_tests! {
        Bls12381Sha256: {
            (credential_lifecycle_sha256, credential_lifecycle),
            (issuance_failures_sha256, issuance_failures),
        },
        Bls12381Sha3_256: {
            (credential_lifecycle_sha3_256, credential_lifecycle),
            (issuance_failures_sha3_256, issuance_failures),
        },
    }

    fn credential_lifecycle<CS: PsCiphersuite>() {
        let (sk, pk) = registry().into_parts();

        // holder
        let hidden = vec![
            pk.attribute(USERNAME, "bob").unwrap(),
            pk.attribute(SECRET_KEY, "bob's secret").unwrap(),
        ];
        let (request, t) = PSIssueRequest::create::<CS>(&pk, &hidden).unwrap();

        // issuer
        let issued = subscriptions(&pk, &["bar"]);
        let blind_signature = PSBlindSignature::sign_issue_request::<CS>(&sk, &pk, &request, &issued).unwrap();

        // holder
        let signature = blind_signature.obtain_credential(&t).unwrap();
        let mut full: Vec<Attribute> = issued.iter().chain(&hidden).cloned().collect();
        full.sort_by_key(|a| a.index);
        let messages: Vec<Vec<u8>> = full.iter().map(|a| a.value.clone()).collect();
        assert!(signature.verify::<CS>(&pk, &messages).unwrap());

        // two showings of the same credential
        let first = PSDisclosureProof::create::<CS>(&pk, &signature.anonymize(), &hidden, LOCATION).unwrap();
        let second = PSDisclosureProof::create::<CS>(&pk, &signature.anonymize(), &hidden, LOCATION).unwrap();
        assert_ne!(first.sigma_1, second.sigma_1);
        assert_ne!(first.sigma_1, signature.sigma_1);

        for proof in [&first, &second] {
            let decoded = PSDisclosureProof::from_bytes(&proof.to_bytes()).unwrap();
            assert!(decoded.verify::<CS>(&pk, &issued, LOCATION));
        }

        let mut forged = issued.clone();
        forged[0] = pk.attribute("restaurant", "true").unwrap();
        assert!(!first.verify::<CS>(&pk, &forged, LOCATION));

        // disclosing the username too
        let proof = PSDisclosureProof::create::<CS>(&pk, &signature.anonymize(), &hidden[1..], LOCATION).unwrap();
        let mut disclosed = issued.clone();
        disclosed.push(hidden[0].clone());
        assert!(proof.verify::<CS>(&pk, &disclosed, LOCATION));
        assert!(!proof.verify::<CS>(&pk, &issued, LOCATION));
    }

    fn issuance_failures<CS: PsCiphersuite>() {
        let (sk, pk) = registry().into_parts();
        let hidden = vec![pk.attribute(SECRET_KEY, "carol's secret").unwrap()];
        let (request, _) = PSIssueRequest::create::<CS>(&pk, &hidden).unwrap();

        let mut issued = subscriptions(&pk, &[]);
        issued.push(pk.attribute(SECRET_KEY, "issuer chosen").unwrap());
        assert_eq!(
            PSBlindSignature::sign_issue_request::<CS>(&sk, &pk, &request, &issued),
            Err(Error::AttributeIndexCollision(4))
        );

        // a request computed for another key
        let (_, other_pk) = registry().into_parts();
        let (foreign, _) = PSIssueRequest::create::<CS>(&other_pk, &hidden).unwrap();
        assert_eq!(
            PSBlindSignature::sign_issue_request::<CS>(&sk, &pk, &foreign, &issued[..3]),
            Err(Error::InvalidCommitmentProof)
        );

        assert_eq!(
            pk.attribute("gym", "true"),
            Err(Error::UnknownAttribute("gym".to_owned()))
        );
    }
}
