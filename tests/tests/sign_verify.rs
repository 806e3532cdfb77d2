//! End-to-end signing and verification through the engine and the facade

use fipsdsa_api::Error as ApiError;
use fipsdsa_sign::{
    DsaSignature, DsaVariant, Error, NonceHistory, SeedMaterial, SignatureEngine,
};
use fipsdsa_tests::{init_tracing, key_pair, rng};
use num_bigint::BigUint;

const APP_SEED: [u8; 20] = [0x5a; 20];

#[test]
fn test_sign_verify_round_trip() {
    init_tracing();
    let pair = key_pair(1);
    let mut signer = SignatureEngine::with_rng(DsaVariant::Sha1WithDsa, rng(1));
    signer.init_sign(pair.signing_key()).unwrap();
    signer.update(b"Hello, DSA").unwrap();
    let der = signer.sign().unwrap();

    let mut verifier = SignatureEngine::new(DsaVariant::Sha1WithDsa);
    verifier.init_verify(pair.verifying_key()).unwrap();
    verifier.update(b"Hello, DSA").unwrap();
    assert!(verifier.verify(&der).unwrap());

    verifier.update(b"Hello, DSB").unwrap();
    assert!(!verifier.verify(&der).unwrap());
}

#[test]
fn test_nonces_are_fresh() {
    let pair = key_pair(2);
    let mut signer = SignatureEngine::with_rng(DsaVariant::Sha1WithDsa, rng(2));
    signer.init_sign(pair.signing_key()).unwrap();

    let mut rs = Vec::new();
    for _ in 0..8 {
        signer.update(b"same message").unwrap();
        let sig = signer
            .sign_to_signature(&SeedMaterial::FreshRandom, &mut NonceHistory::new())
            .unwrap();
        rs.push(sig.r().clone());
    }
    rs.sort();
    rs.dedup();
    assert_eq!(rs.len(), 8);
}

#[test]
fn test_components_equal_to_q_are_rejected() {
    let pair = key_pair(3);
    let q = pair.params().q().clone();
    let one = BigUint::from(1u32);

    for sig in [
        DsaSignature::new(q.clone(), one.clone()),
        DsaSignature::new(one.clone(), q.clone()),
    ] {
        let mut verifier = SignatureEngine::new(DsaVariant::Sha1WithDsa);
        verifier.init_verify(pair.verifying_key()).unwrap();
        verifier.update(b"m").unwrap();
        assert!(matches!(
            verifier.verify(&sig.to_der()),
            Err(Error::InvalidSignature(_))
        ));

        let api = fipsdsa::verify(pair.verifying_key(), b"m", &sig).unwrap_err();
        assert!(matches!(api, ApiError::InvalidSignature { .. }));
    }
}

#[test]
fn test_raw_mode_digest_lengths() {
    let pair = key_pair(4);
    let mut signer = SignatureEngine::with_rng(DsaVariant::RawDsa, rng(4));
    signer.init_sign(pair.signing_key()).unwrap();

    for len in [19usize, 21] {
        signer.update(&vec![0xab; len]).unwrap();
        assert_eq!(
            signer.sign(),
            Err(Error::InvalidDigestLength {
                expected: 20,
                actual: len
            })
        );
    }

    signer.update(&[0xab; 20]).unwrap();
    let der = signer.sign().unwrap();

    let mut verifier = SignatureEngine::new(DsaVariant::RawDsa);
    verifier.init_verify(pair.verifying_key()).unwrap();
    verifier.update(&[0xab; 20]).unwrap();
    assert!(verifier.verify(&der).unwrap());

    let api: ApiError = Error::InvalidDigestLength {
        expected: 20,
        actual: 19,
    }
    .into();
    assert!(matches!(api, ApiError::InvalidDigestLength { actual: 19, .. }));
}

#[test]
fn test_application_seed_reuse_falls_back() {
    init_tracing();
    let pair = key_pair(5);
    let seed = SeedMaterial::application(&APP_SEED).unwrap();
    let mut history = NonceHistory::new();
    let mut signer = SignatureEngine::with_rng(DsaVariant::Sha1WithDsa, rng(5));
    signer.init_sign(pair.signing_key()).unwrap();

    signer.update(b"one").unwrap();
    let first = signer.sign_to_signature(&seed, &mut history).unwrap();
    signer.update(b"two").unwrap();
    let second = signer.sign_to_signature(&seed, &mut history).unwrap();
    assert_ne!(first.r(), second.r());

    // Without the history the seed pins the nonce, and so r
    signer.update(b"three").unwrap();
    let third = signer
        .sign_to_signature(&seed, &mut NonceHistory::new())
        .unwrap();
    assert_eq!(first.r(), third.r());
}

#[test]
fn test_application_seed_length() {
    assert!(SeedMaterial::application(&[0u8; 19]).is_err());
    assert!(SeedMaterial::application(&[0u8; 21]).is_err());
    assert!(SeedMaterial::application(&[0u8; 20]).is_ok());
}

#[test]
fn test_facade_matches_engine() {
    let pair = key_pair(6);
    let sig = fipsdsa::sign(pair.signing_key(), b"facade", &mut rng(6)).unwrap();

    let mut verifier = SignatureEngine::new(DsaVariant::Sha1WithDsa);
    verifier.init_verify(pair.verifying_key()).unwrap();
    verifier.update(b"facade").unwrap();
    assert!(verifier.verify(&sig.to_der()).unwrap());
}
