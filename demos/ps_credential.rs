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

#[cfg(feature = "ps_blind")]
mod ps_example {
    use ps_credentials::{
        errors::Error,
        ps::{
            attribute::Attribute,
            blind::PSBlindSignature,
            ciphersuites::PsCiphersuite,
            commitment::PSIssueRequest,
            keys::KeyPair,
            proof::PSDisclosureProof,
        },
    };

    const SUBSCRIPTIONS: [&str; 3] = ["restaurant", "bar", "dojo"];

    pub(crate) fn ps_main<CS: PsCiphersuite>() -> Result<(), Error> {
        log::info!("Ciphersuite ID: {}", String::from_utf8_lossy(CS::ID));

        log::info!("Keypair Generation");
        let names: Vec<&str> = SUBSCRIPTIONS.iter().copied().chain(["username", "secret_key"]).collect();
        let issuer_keypair = KeyPair::generate_with_names(&names)?;
        let issuer_sk = issuer_keypair.private_key();
        let issuer_pk = issuer_keypair.public_key();
        log::info!("PK: {}", issuer_pk.encode()?);

        // Holder
        log::info!("Computing pedersen commitment on the hidden attributes");
        let hidden = vec![
            issuer_pk.attribute("username", "alice")?,
            issuer_pk.attribute("secret_key", hex::encode(rand::random::<[u8; 32]>()))?,
        ];
        let (request, t) = PSIssueRequest::create::<CS>(issuer_pk, &hidden)?;
        log::info!("Issue request: {}", hex::encode(request.to_bytes()));

        // Issuer
        log::info!("Verification of the Zero-Knowledge proof and computation of a blind signature");
        let subscriptions: Vec<Attribute> = SUBSCRIPTIONS
            .iter()
            .map(|&name| issuer_pk.attribute(name, if name == "bar" { "false" } else { "true" }))
            .collect::<Result<_, _>>()?;
        let blind_signature = PSBlindSignature::sign_issue_request::<CS>(issuer_sk, issuer_pk, &request, &subscriptions)?;
        log::info!("Blind signature: {}", hex::encode(blind_signature.to_bytes()));

        // Holder
        log::info!("Signature unblinding and verification...");
        let signature = blind_signature.obtain_credential(&t)?;
        let mut messages: Vec<Vec<u8>> = vec![Vec::new(); issuer_pk.len()];
        for attribute in subscriptions.iter().chain(&hidden) {
            messages[attribute.index] = attribute.value.clone();
        }
        assert!(signature.verify::<CS>(issuer_pk, &messages)?, "Unblinded Signature NOT VALID!");
        log::info!("Signature is VALID!");

        let location = b"46.52345 6.57890";
        log::info!("Computation of a disclosure proof at {}", String::from_utf8_lossy(location));
        let proof = PSDisclosureProof::create::<CS>(issuer_pk, &signature.anonymize(), &hidden, location)?;
        log::info!("Disclosure proof: {}", hex::encode(proof.to_bytes()));

        // Verifier
        log::info!("Disclosure proof verification...");
        let disclosure_proof_verification = proof.verify::<CS>(issuer_pk, &subscriptions, location);
        assert!(disclosure_proof_verification, "Disclosure proof NOT VALID!");
        log::info!("Disclosure proof is VALID!");

        let mut claimed = subscriptions.clone();
        claimed[1] = issuer_pk.attribute("bar", "true")?;
        assert!(!proof.verify::<CS>(issuer_pk, &claimed, location));
        log::info!("Claiming an unpaid subscription is rejected");

        Ok(())
    }
}

#[cfg(feature = "ps_blind")]
fn main() {
    use crate::ps_example::ps_main;
    use ps_credentials::ps::ciphersuites::{Bls12381Sha256, Bls12381Sha3_256};
    use std::env;

    dotenvy::dotenv().ok();
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        println!(
            "Usage: {} <cipher_suite>
                Ciphersuites:
                    - BLS12-381-SHA-256
                    - BLS12-381-SHA3-256",
            args[0]
        );
        return;
    }

    let cipher_suite = &args[1];

    let result = match cipher_suite.as_str() {
        "BLS12-381-SHA-256" => {
            log::info!("Ciphersuite: BLS12-381-SHA-256");
            ps_main::<Bls12381Sha256>()
        }
        "BLS12-381-SHA3-256" => {
            log::info!("Ciphersuite: BLS12-381-SHA3-256");
            ps_main::<Bls12381Sha3_256>()
        }
        _ => {
            println!("Unknown cipher suite: {}", cipher_suite);
            return;
        }
    };

    if let Err(e) = result {
        log::error!("{}", e);
    }
}

#[cfg(not(feature = "ps_blind"))]
fn main() {}
