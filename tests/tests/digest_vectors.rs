//! FIPS 180 digest vectors through the streaming and one-shot interfaces

use fipsdsa_algorithms::{DigestAlgorithm, EngineStatus, HashFunction, Sha1, Sha224, Sha256};
use fipsdsa_api::Hasher;
use fipsdsa_tests::unhex;

const ABC: &[u8] = b"abc";
const TWO_BLOCK: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

struct Vector {
    alg: DigestAlgorithm,
    msg: &'static [u8],
    hex: &'static str,
}

const VECTORS: &[Vector] = &[
    Vector {
        alg: DigestAlgorithm::Sha1,
        msg: b"",
        hex: "da39a3ee5e6b4b0d3255bfef95601890afd80709",
    },
    Vector {
        alg: DigestAlgorithm::Sha1,
        msg: ABC,
        hex: "a9993e364706816aba3e25717850c26c9cd0d89d",
    },
    Vector {
        alg: DigestAlgorithm::Sha1,
        msg: TWO_BLOCK,
        hex: "84983e441c3bd26ebaae4aa1f95129e5e54670f1",
    },
    Vector {
        alg: DigestAlgorithm::Sha224,
        msg: ABC,
        hex: "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7",
    },
    Vector {
        alg: DigestAlgorithm::Sha224,
        msg: TWO_BLOCK,
        hex: "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525",
    },
    Vector {
        alg: DigestAlgorithm::Sha256,
        msg: b"",
        hex: "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
    },
    Vector {
        alg: DigestAlgorithm::Sha256,
        msg: ABC,
        hex: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
    },
    Vector {
        alg: DigestAlgorithm::Sha256,
        msg: TWO_BLOCK,
        hex: "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1",
    },
];

#[test]
fn test_one_shot_vectors() {
    for v in VECTORS {
        assert_eq!(v.alg.digest(v.msg), unhex(v.hex), "{} {:?}", v.alg, v.msg);
        assert_eq!(fipsdsa::digest_by_name(v.alg.name(), v.msg).unwrap(), unhex(v.hex));
    }
}

#[test]
fn test_byte_at_a_time_vectors() {
    for v in VECTORS {
        let mut hasher = v.alg.new_hasher();
        for b in v.msg {
            hasher.update(&[*b]);
        }
        assert_eq!(hasher.digest(), unhex(v.hex));
    }
}

#[test]
fn test_million_a() {
    let chunk = [b'a'; 1000];
    let expected = [
        (DigestAlgorithm::Sha1, "34aa973cd4c4daa4f61eeb2bdbad27316534016f"),
        (
            DigestAlgorithm::Sha256,
            "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0",
        ),
    ];
    for (alg, hex) in expected {
        let mut hasher = alg.new_hasher();
        for _ in 0..1000 {
            hasher.update(&chunk);
        }
        assert_eq!(hasher.digest(), unhex(hex));
    }
}

#[test]
fn test_resume_after_digest_starts_fresh() {
    let mut hasher = Sha256::new();
    Hasher::update(&mut hasher, b"stale");
    let _ = Hasher::digest(&mut hasher);
    assert_eq!(hasher.status(), EngineStatus::Finalized);

    Hasher::update(&mut hasher, ABC);
    assert_eq!(
        Hasher::digest(&mut hasher),
        unhex("ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad")
    );
}

#[test]
fn test_typed_digests() {
    let sha1 = <Sha1 as HashFunction>::digest(ABC).unwrap();
    assert_eq!(sha1.to_hex(), "a9993e364706816aba3e25717850c26c9cd0d89d");
    let sha224 = <Sha224 as HashFunction>::digest(b"").unwrap();
    assert_eq!(
        sha224.to_hex(),
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
    );
}
