use super::*;
use fipsdsa_params::traditional::dsa::{DSA_1024, DSA_KEYGEN_IV, DSA_NONCE_IV};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const SEED: SeedWords = [0x01234567, 0x89abcdef, 0xfedcba98, 0x76543210, 0x0f1e2d3c];

fn q1024() -> BigUint {
    BigUint::parse_bytes(DSA_1024.q.as_bytes(), 16).unwrap()
}

#[test]
fn test_g_function_known_answers() {
    assert_eq!(
        g_function(&SEED, &DSA_KEYGEN_IV),
        [0x68d5b859, 0x0df0a697, 0x4573e013, 0x9bd5ca4f, 0xfab44e74]
    );
    assert_eq!(
        g_function(&SEED, &DSA_NONCE_IV),
        [0xfc833826, 0x16731340, 0x389e64e9, 0x548c6a83, 0x4c617295]
    );
}

#[test]
fn test_g_function_is_deterministic() {
    let a = g_function(&SEED, &DSA_NONCE_IV);
    let b = g_function(&SEED, &DSA_NONCE_IV);
    assert_eq!(a, b);

    let mut other = SEED;
    other[4] ^= 1;
    assert_ne!(g_function(&other, &DSA_NONCE_IV), a);
}

#[test]
fn test_expand_mod_q() {
    let q = q1024();
    assert_eq!(
        expand_mod_q(&SEED, &DSA_KEYGEN_IV, &q),
        BigUint::parse_bytes(b"68d5b8590df0a6974573e0139bd5ca4ffab44e74", 16).unwrap()
    );
    // This nonce output exceeds q and wraps
    assert_eq!(
        expand_mod_q(&SEED, &DSA_NONCE_IV, &q),
        BigUint::parse_bytes(b"6522e79701500773860bab66b1a0e6775c0955a0", 16).unwrap()
    );
}

#[test]
fn test_application_seed_parsing() {
    let bytes: Vec<u8> = (1..=20).collect();
    let seed = SeedMaterial::application(&bytes).unwrap();
    assert_eq!(
        seed.words(),
        Some([0x01020304, 0x05060708, 0x090a0b0c, 0x0d0e0f10, 0x11121314])
    );
    assert!(SeedMaterial::FreshRandom.words().is_none());
    assert!(matches!(
        SeedMaterial::application(&bytes[..19]),
        Err(Error::InvalidParameter(_))
    ));
    assert_eq!(format!("{:?}", seed), "ApplicationSeed(..)");
}

#[test]
fn test_nonce_history() {
    let mut history = NonceHistory::new();
    assert!(history.is_empty());
    assert!(!history.is_repeat(&SEED));

    history.record(SEED);
    assert!(history.is_repeat(&SEED));
    assert!(!history.is_repeat(&[0; 5]));

    history.clear();
    assert!(history.is_empty());
}

#[test]
fn test_derive_secret_paths() {
    let q = q1024();
    let mut rng = ChaCha20Rng::seed_from_u64(7);

    let (x, words) = derive_secret(&q, &DSA_KEYGEN_IV, Some(SEED), &mut rng, "test");
    assert_eq!(words, Some(SEED));
    assert_eq!(x, expand_mod_q(&SEED, &DSA_KEYGEN_IV, &q));

    let (k, words) = derive_secret(&q, &DSA_NONCE_IV, None, &mut rng, "test");
    let words = words.unwrap();
    assert_ne!(words, SEED);
    assert!(!k.is_zero() && k < q);
    assert_eq!(k, expand_mod_q(&words, &DSA_NONCE_IV, &q));
}

#[test]
fn test_wide_subprime_secret_in_range() {
    // 224-bit prime: 2^224 - 2^96 + 1
    let q = (BigUint::one() << 224usize) - (BigUint::one() << 96usize) + BigUint::one();
    let mut rng = ChaCha20Rng::seed_from_u64(11);
    for _ in 0..32 {
        let (k, words) = derive_secret(&q, &DSA_NONCE_IV, Some(SEED), &mut rng, "test");
        assert!(words.is_none());
        assert!(!k.is_zero() && k < q);
    }
}
