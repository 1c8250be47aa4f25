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

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Error during keypair generation: {0}")]
    KeyGenError(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Error during computation of a Signature: {0}")]
    SignatureGenerationError(String),
    #[error("Error during computation of a Blind Signature: {0}")]
    BlindSignError(String),
    /// Raised by the issuer when the proof attached to an issue request does not verify
    #[error("Invalid commitment proof")]
    InvalidCommitmentProof,
    #[error("Attribute index {0} is used by both the holder and the issuer")]
    AttributeIndexCollision(usize),
    #[error("Attribute index {0} is out of range")]
    AttributeIndexOutOfRange(usize),
    #[error("Unknown attribute: {0}")]
    UnknownAttribute(String),
    #[error(" sigma_1 == Identity_G1")]
    G1IdentityError,
    #[error("Error during serialization: {0}")]
    SerializationError(String),
    #[error("Error during deserialization: {0}")]
    DeserializationError(String),
}
