//! DSA behind the generic [`Signature`] trait
//!
//! [`DsaSha1`] is SHA1withDSA over the published 1024-bit FIPS 186
//! parameters, for callers written against `fipsdsa_api::Signature`.

use std::sync::Arc;

use rand::{CryptoRng, RngCore};

use fipsdsa_api::{Error as ApiError, Result as ApiResult, Signature as SignatureTrait};

use super::der::DsaSignature;
use super::engine::{DsaVariant, SignatureEngine};
use super::keys::{KeyPair, KeyPairGenerator, SigningKey, VerifyingKey};
use super::params::DomainParameters;
use super::seed::{NonceHistory, SeedMaterial};

/// SHA1withDSA over the 1024-bit FIPS 186 domain parameters
pub struct DsaSha1;

impl SignatureTrait for DsaSha1 {
    type PublicKey = VerifyingKey;
    type SecretKey = SigningKey;
    type SignatureData = DsaSignature;
    type KeyPair = KeyPair;

    fn name() -> &'static str {
        DsaVariant::Sha1WithDsa.name()
    }

    fn keypair<R: CryptoRng + RngCore>(rng: &mut R) -> ApiResult<Self::KeyPair> {
        let params = Arc::new(DomainParameters::fips_1024()?);
        Ok(KeyPairGenerator::new(params).generate(rng)?)
    }

    fn public_key(keypair: &Self::KeyPair) -> Self::PublicKey {
        keypair.verifying_key().clone()
    }

    fn secret_key(keypair: &Self::KeyPair) -> Self::SecretKey {
        keypair.signing_key().clone()
    }

    fn sign(message: &[u8], secret_key: &Self::SecretKey) -> ApiResult<Self::SignatureData> {
        let mut engine = SignatureEngine::new(DsaVariant::Sha1WithDsa);
        engine.init_sign(secret_key)?;
        engine.update(message)?;
        Ok(engine.sign_to_signature(&SeedMaterial::FreshRandom, &mut NonceHistory::new())?)
    }

    fn verify(
        message: &[u8],
        signature: &Self::SignatureData,
        public_key: &Self::PublicKey,
    ) -> ApiResult<()> {
        let mut engine = SignatureEngine::new(DsaVariant::Sha1WithDsa);
        engine.init_verify(public_key)?;
        engine.update(message)?;
        if engine.verify_signature(signature)? {
            Ok(())
        } else {
            Err(ApiError::InvalidSignature {
                context: "SHA1withDSA verify",
                message: "signature does not match".into(),
            })
        }
    }
}
