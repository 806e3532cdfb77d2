//! Parameter generation and the shared parameter cache

use std::sync::Arc;
use std::thread;

use fipsdsa_params::traditional::dsa::{DSA_1024, DSA_CERTAINTY_LEGACY};
use fipsdsa_sign::{
    DomainParameters, GeneratorConfig, KeyPairGenerator, ParameterCache, ParameterGenerator,
};
use fipsdsa_tests::{init_tracing, rng};
use num_bigint::BigUint;

#[test]
fn test_generate_1024_is_valid() {
    init_tracing();
    let params = ParameterGenerator::new(1024)
        .unwrap()
        .generate(&mut rng(1024))
        .unwrap();

    assert_eq!(params.prime_bits(), 1024);
    assert_eq!(params.subprime_bits(), 160);
    params.validate(DSA_CERTAINTY_LEGACY).unwrap();

    let one = BigUint::from(1u32);
    assert_eq!((params.p() - &one) % params.q(), BigUint::from(0u32));
    assert_eq!(params.g().modpow(params.q(), params.p()), one);
}

#[test]
fn test_published_parameters_validate() {
    let cache = ParameterCache::new();
    for bits in [512, 768, 1024] {
        cache.get(bits).unwrap().validate(DSA_CERTAINTY_LEGACY).unwrap();
    }
    assert_eq!(
        *cache.get(1024).unwrap(),
        DomainParameters::from_well_known(&DSA_1024).unwrap()
    );
}

#[test]
fn test_cache_returns_same_instance() {
    let cache = ParameterCache::new();
    let a = fipsdsa::generate_parameters(&cache, 512, &mut rng(1)).unwrap();
    let b = fipsdsa::generate_parameters(&cache, 512, &mut rng(2)).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let generator = KeyPairGenerator::for_key_size(&cache, 512, &mut rng(3)).unwrap();
    assert!(Arc::ptr_eq(generator.params(), &a));
}

#[test]
fn test_cache_concurrent_generation() {
    init_tracing();
    let cache = Arc::new(ParameterCache::empty(GeneratorConfig::default()));

    let handles: Vec<_> = (0..4u64)
        .map(|i| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || cache.get_or_generate(576, &mut rng(100 + i)).unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // Whoever inserted first, everyone now sees the cached entry
    let cached = cache.get(576).unwrap();
    assert_eq!(cached.prime_bits(), 576);
    let shared = results.iter().filter(|p| Arc::ptr_eq(p, &cached)).count();
    assert!(shared >= 1);
    for params in &results {
        assert_eq!(params.prime_bits(), 576);
    }

    let again = cache.get_or_generate(576, &mut rng(200)).unwrap();
    assert!(Arc::ptr_eq(&again, &cached));
}

#[test]
fn test_cache_dh_pairs() {
    let cache = ParameterCache::new();
    let dsa = cache.get(768).unwrap();
    let dh = cache.get_or_generate_dh(768, &mut rng(4)).unwrap();
    assert_eq!(dh.p(), dsa.p());
    assert_eq!(dh.g(), dsa.g());
}

#[test]
fn test_seed_cap_is_reported() {
    let generator = ParameterGenerator::new(512)
        .unwrap()
        .with_config(GeneratorConfig::default().with_max_seed_attempts(Some(0)));
    let err = generator.generate(&mut rng(5)).unwrap_err();
    let api: fipsdsa_api::Error = err.into();
    assert!(matches!(
        api,
        fipsdsa_api::Error::ParameterGenerationExhausted {
            prime_bits: 512,
            attempts: 0
        }
    ));
}
