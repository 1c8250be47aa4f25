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

use super::ciphersuites::PsCiphersuite;
use crate::{errors::Error, utils::message::PSMessage};
use bls12_381_plus::Scalar;
use serde::{Deserialize, Serialize};

/// An attribute bound to slot `index` of the signed vector.
///
/// Only the index takes part in the algebra, the name is metadata. Slots that
/// are not set are simply left out of an attribute list.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Attribute {
    pub index: usize,
    pub name: String,
    pub value: Vec<u8>,
}

impl Attribute {
    pub fn new(index: usize, name: impl Into<String>, value: impl AsRef<[u8]>) -> Self {
        Self {
            index,
            name: name.into(),
            value: value.as_ref().to_vec(),
        }
    }

    /// Octets that are hashed into the attribute scalar
    pub fn to_bytes(&self) -> &[u8] {
        &self.value
    }

    pub fn to_scalar<CS: PsCiphersuite>(&self) -> Scalar {
        PSMessage::map_message_to_scalar_as_hash::<CS>(&self.value).value
    }
}

/// Checks that every index is in `[0, L)` and appears at most once.
pub(crate) fn check_indexes(indexes: &[usize], L: usize) -> Result<(), Error> {
    for (pos, &i) in indexes.iter().enumerate() {
        if i >= L {
            return Err(Error::AttributeIndexOutOfRange(i));
        }
        if indexes[..pos].contains(&i) {
            return Err(Error::InvalidInput(format!("duplicate attribute index {}", i)));
        }
    }
    Ok(())
}

pub(crate) fn attribute_indexes(attributes: &[Attribute]) -> Vec<usize> {
    attributes.iter().map(|a| a.index).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ps::ciphersuites::Bls12381Sha256;

    #[test]
    fn scalar_depends_on_value_only() {
        let a = Attribute::new(0, "restaurant", "true");
        let b = Attribute::new(3, "bar", "true");
        assert_eq!(a.to_bytes(), b"true");
        assert_eq!(a.to_scalar::<Bls12381Sha256>(), b.to_scalar::<Bls12381Sha256>());
        assert_ne!(
            a.to_scalar::<Bls12381Sha256>(),
            Attribute::new(0, "restaurant", "false").to_scalar::<Bls12381Sha256>()
        );
    }

    #[test]
    fn index_checks() {
        assert!(check_indexes(&[], 0).is_ok());
        assert!(check_indexes(&[2, 0, 1], 3).is_ok());
        assert_eq!(check_indexes(&[0, 3], 3), Err(Error::AttributeIndexOutOfRange(3)));
        assert!(matches!(check_indexes(&[1, 1], 3), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn serde_round_trip() {
        let attribute = Attribute::new(1, "key", "value");
        let json = serde_json::to_string(&attribute).unwrap();
        let decoded: Attribute = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, attribute);
    }
}
