//! Property tests for the DER codec and for sign/verify

use fipsdsa_sign::{DsaSignature, DsaVariant, SignatureEngine};
use fipsdsa_tests::{key_pair, rng};
use num_bigint::BigUint;
use proptest::prelude::*;

proptest! {
    #[test]
    fn der_round_trip(
        r in prop::collection::vec(any::<u8>(), 0..=160),
        s in prop::collection::vec(any::<u8>(), 0..=160),
    ) {
        let sig = DsaSignature::new(BigUint::from_bytes_be(&r), BigUint::from_bytes_be(&s));
        let der = sig.to_der();
        prop_assert_eq!(der[0], 0x30);
        prop_assert_eq!(DsaSignature::from_der(&der).unwrap(), sig);
    }

    #[test]
    fn der_trailing_byte_rejected(
        r in prop::collection::vec(any::<u8>(), 1..=32),
        extra in any::<u8>(),
    ) {
        let sig = DsaSignature::new(BigUint::from_bytes_be(&r), BigUint::from(1u32));
        let mut der = sig.to_der();
        der.push(extra);
        prop_assert!(DsaSignature::from_der(&der).is_err());
    }

    #[test]
    fn der_decoder_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..=64)) {
        let _ = DsaSignature::from_der(&bytes);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn signatures_verify_only_their_message(
        msg in prop::collection::vec(any::<u8>(), 0..=300),
        flip in any::<prop::sample::Index>(),
    ) {
        let pair = key_pair(9);
        let mut signer = SignatureEngine::with_rng(DsaVariant::Sha1WithDsa, rng(9));
        signer.init_sign(pair.signing_key()).unwrap();
        signer.update(&msg).unwrap();
        let der = signer.sign().unwrap();

        let mut verifier = SignatureEngine::new(DsaVariant::Sha1WithDsa);
        verifier.init_verify(pair.verifying_key()).unwrap();
        verifier.update(&msg).unwrap();
        prop_assert!(verifier.verify(&der).unwrap());

        if !msg.is_empty() {
            let mut tampered = msg.clone();
            let i = flip.index(tampered.len());
            tampered[i] ^= 0x01;
            verifier.update(&tampered).unwrap();
            prop_assert!(!verifier.verify(&der).unwrap());
        }
    }
}
