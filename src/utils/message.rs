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

use crate::{ps::ciphersuites::PsCiphersuite, utils::util::ps_utils::hash_to_scalar};
use bls12_381_plus::Scalar;
use serde::{Deserialize, Serialize};

/// A message (or attribute value) mapped into the scalar field of BLS12-381
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PSMessage {
    pub value: Scalar,
}

impl PSMessage {
    /// # Description
    /// Maps an arbitrary octet string to a scalar mod p, hashing it with the
    /// ciphersuite hash under [`PsCiphersuite::MESSAGE_DST`].
    pub fn map_message_to_scalar_as_hash<CS: PsCiphersuite>(data: &[u8]) -> Self {
        Self {
            value: hash_to_scalar::<CS>(data, CS::MESSAGE_DST),
        }
    }

    pub fn messages_to_scalar<CS: PsCiphersuite>(messages: &[Vec<u8>]) -> Vec<Self> {
        messages
            .iter()
            .map(|m| Self::map_message_to_scalar_as_hash::<CS>(m))
            .collect()
    }
}
