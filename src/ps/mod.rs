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

//! The [Pointcheval-Sanders Signature Scheme](https://eprint.iacr.org/2015/525) signs a vector of
//! messages with a signature made of two G1 elements, which can be re-randomized by anyone holding it.
//! On top of the scheme this module builds an attribute-based anonymous credential protocol:
//! - **Blind Issuance**: the holder commits to its hidden attributes (e.g. a secret key) and proves
//!                       knowledge of the opening. The issuer adds its own attributes and signs the
//!                       commitment without ever seeing the hidden values.
//! - **Anonymization**: a credential is re-randomized before every showing, so that two showings of
//!                      the same credential cannot be linked to each other or to the issuance.
//! - **Selective Disclosure**: the holder reveals a subset of its attributes and proves, in zero knowledge,
//!                             possession of a signature over the hidden and disclosed attributes together.
//!                             An application message (e.g. a location or a nonce) is bound into the proof.
//! # Usage
//! To use the PS Signature Scheme, enable the `ps` feature in the `Cargo.toml` file, and `ps_blind` for the issuance protocol
//! ```toml
//! ps-credentials = { version = "0.1", default-features = false, features = ["ps", "ps_blind"] }
//! ```

/// Module for attributes
pub mod attribute;
#[cfg(feature = "ps_blind")]
/// Module for blind signatures
pub mod blind;
/// Module for ciphersuites
pub mod ciphersuites;
#[cfg(feature = "ps_blind")]
/// Module for issue requests
pub mod commitment;
/// Module for anonymized credentials
pub mod credential;
/// Module for keys
pub mod keys;
/// Module for disclosure proofs
pub mod proof;
/// Module for signatures
pub mod signature;
/// Module for zero-knowledge proofs of knowledge
pub mod zkp;

#[cfg(test)]
mod tests;
