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

/// Big-endian u32 length/index prefix used by the byte encodings
pub fn i2osp_u32(value: usize) -> [u8; 4] {
    (value as u32).to_be_bytes()
}

/// Reads a big-endian u32 at `offset`, returning the value and the next offset
pub fn os2ip_u32(bytes: &[u8], offset: usize) -> Option<(usize, usize)> {
    let chunk: [u8; 4] = bytes.get(offset..offset + 4)?.try_into().ok()?;
    Some((u32::from_be_bytes(chunk) as usize, offset + 4))
}

#[cfg(feature = "ps")]
pub mod ps_utils {
    use crate::{errors::Error, ps::ciphersuites::PsCiphersuite};
    use bls12_381_plus::{G1Affine, G1Projective, Scalar};
    use digest::Digest;
    use elliptic_curve::group::Curve;
    use ff::Field;
    use group::Group;

    /// # Description
    /// Hashes `msg_octets` under the domain separation tag `dst` with the
    /// ciphersuite hash and reduces the big-endian digest modulo the group order.
    ///
    /// # Inputs:
    /// * `msg_octets` (REQUIRED), an octet string.
    /// * `dst` (REQUIRED), domain separation tag, prepended to the hash input.
    ///
    /// # Output:
    /// a [`Scalar`].
    ///
    pub fn hash_to_scalar<CS: PsCiphersuite>(msg_octets: &[u8], dst: &[u8]) -> Scalar {
        let digest = CS::HashAlg::new()
            .chain_update(dst)
            .chain_update(msg_octets)
            .finalize();

        let mut okm = [0u8; 48];
        let len = digest.len().min(okm.len());
        okm[48 - len..].copy_from_slice(&digest[..len]);

        Scalar::from_okm(&okm)
    }

    /// Uniformly random non-zero scalar from the thread CSPRNG
    pub fn get_random() -> Scalar {
        let mut rng = rand::thread_rng();
        loop {
            let r = Scalar::random(&mut rng);
            if !bool::from(r.is_zero()) {
                return r;
            }
        }
    }

    pub fn calculate_random_scalars(count: usize) -> Vec<Scalar> {
        (0..count).map(|_| get_random()).collect()
    }

    /// Random generator of G1. The identity is rejected and redrawn.
    pub fn random_g1_generator() -> G1Projective {
        let mut rng = rand::thread_rng();
        loop {
            let h = G1Projective::random(&mut rng);
            if !bool::from(h.is_identity()) {
                return h;
            }
            log::warn!("drew Identity_G1 as generator, retrying");
        }
    }

    pub fn parse_g1_projective(slice: &[u8]) -> Result<G1Projective, Error> {
        let bytes: [u8; G1Affine::COMPRESSED_BYTES] = slice
            .try_into()
            .map_err(|_| Error::DeserializationError("invalid G1 point length".to_owned()))?;
        let point = Option::<G1Affine>::from(G1Affine::from_compressed(&bytes))
            .ok_or_else(|| Error::DeserializationError("invalid G1 point".to_owned()))?;
        Ok(G1Projective::from(point))
    }

    pub fn g1_to_bytes(p: &G1Projective) -> [u8; G1Affine::COMPRESSED_BYTES] {
        p.to_affine().to_compressed()
    }

    pub trait ScalarExt: Sized {
        fn to_bytes_be(&self) -> [u8; 32];
        fn from_bytes_be(bytes: &[u8; 32]) -> Result<Self, Error>;
    }

    impl ScalarExt for Scalar {
        fn to_bytes_be(&self) -> [u8; 32] {
            self.to_be_bytes()
        }

        fn from_bytes_be(bytes: &[u8; 32]) -> Result<Self, Error> {
            Option::<Scalar>::from(Scalar::from_be_bytes(bytes))
                .ok_or_else(|| Error::DeserializationError("non canonical scalar".to_owned()))
        }
    }

    pub fn parse_scalar(slice: &[u8]) -> Result<Scalar, Error> {
        let bytes: [u8; 32] = slice
            .try_into()
            .map_err(|_| Error::DeserializationError("invalid scalar length".to_owned()))?;
        Scalar::from_bytes_be(&bytes)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn u32_prefix() {
        let bytes = [&i2osp_u32(7)[..], &i2osp_u32(300)[..]].concat();
        assert_eq!(os2ip_u32(&bytes, 0), Some((7, 4)));
        assert_eq!(os2ip_u32(&bytes, 4), Some((300, 8)));
        assert_eq!(os2ip_u32(&bytes, 6), None);
    }
}
