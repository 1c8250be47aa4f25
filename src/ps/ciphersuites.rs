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

use digest::Digest;
use sha2::Sha256;
use sha3::Sha3_256;

pub trait PsCiphersuite: Eq + 'static {
    const ID: &'static [u8];
    /// DST used when mapping messages and attribute values to scalars
    const MESSAGE_DST: &'static [u8];
    /// DST used for the Fiat-Shamir challenge of every proof
    const CHALLENGE_DST: &'static [u8];
    type HashAlg: Digest;
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bls12381Sha256;
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Bls12381Sha3_256;

impl PsCiphersuite for Bls12381Sha256 {
    const ID: &'static [u8] = b"PS_BLS12381_SHA-256_";
    const MESSAGE_DST: &'static [u8] = b"PS_BLS12381_SHA-256_MAP_MSG_TO_SCALAR_";
    const CHALLENGE_DST: &'static [u8] = b"PS_BLS12381_SHA-256_CHALLENGE_";
    type HashAlg = Sha256;
}

impl PsCiphersuite for Bls12381Sha3_256 {
    const ID: &'static [u8] = b"PS_BLS12381_SHA3-256_";
    const MESSAGE_DST: &'static [u8] = b"PS_BLS12381_SHA3-256_MAP_MSG_TO_SCALAR_";
    const CHALLENGE_DST: &'static [u8] = b"PS_BLS12381_SHA3-256_CHALLENGE_";
    type HashAlg = Sha3_256;
}
