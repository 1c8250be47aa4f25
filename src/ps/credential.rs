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

use bls12_381_plus::{G1Projective, Scalar};
use serde::{Deserialize, Serialize};

/// A re-randomized signature `(sigma_1^r, (sigma_2 * sigma_1^t)^r)` together
/// with `t`, which the holder needs to open the disclosure commitment.
///
/// `t` is secret, only the two group elements travel inside a disclosure proof.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PSAnonymousCredential {
    pub sigma_1: G1Projective,
    pub sigma_2: G1Projective,
    pub(crate) t: Scalar,
}

impl PSAnonymousCredential {
    pub(crate) fn new(sigma_1: G1Projective, sigma_2: G1Projective, t: Scalar) -> Self {
        Self { sigma_1, sigma_2, t }
    }
}
