use super::*;

#[test]
fn test_sha256_empty() {
    // NIST test vector: Empty string
    let expected = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

    let hash = Sha256::digest(&[]).unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sha256_abc() {
    // NIST test vector: "abc"
    let expected = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

    let hash = Sha256::digest(b"abc").unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sha256_long() {
    // NIST test vector: "abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq"
    let expected = "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1";

    let hash = Sha256::digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sha256_million_a() {
    let mut hasher = Sha256::new();
    let chunk = [b'a'; 1000];
    for _ in 0..1000 {
        hasher.update(&chunk).unwrap();
    }
    let hash = hasher.finalize().unwrap();
    assert_eq!(
        hex::encode(hash.as_ref()),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

#[test]
fn test_sha224_empty() {
    // NIST test vector: Empty string
    let expected = "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f";

    let hash = Sha224::digest(&[]).unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sha224_abc() {
    // NIST test vector: "abc"
    let expected = "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7";

    let hash = Sha224::digest(b"abc").unwrap();
    assert_eq!(hash.len(), 28);
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sha224_long() {
    let expected = "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525";

    let hash = Sha224::digest(b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq").unwrap();
    assert_eq!(hex::encode(hash.as_ref()), expected);
}

#[test]
fn test_sha256_incremental_matches_one_shot() {
    let data: Vec<u8> = (0..=255u8).cycle().take(1000).collect();
    let one_shot = Sha256::digest(&data).unwrap();

    // Split points straddle block boundaries and the 56-byte length offset
    for split in [1, 55, 56, 63, 64, 65, 119, 120, 999] {
        let mut hasher = Sha256::new();
        hasher.update(&data[..split]).unwrap();
        hasher.update(&data[split..]).unwrap();
        assert_eq!(hasher.finalize().unwrap(), one_shot, "split at {}", split);
    }
}

#[test]
fn test_padding_boundaries() {
    // Message lengths around the point where padding spills into a second block
    let vectors = [
        (55usize, "9f4390f8d30c2dd92ec9f095b65e2b9ae9b0a925a5258e241c9f1e910f734318"),
        (56, "b35439a4ac6f0948b6d6f9e3c6af0f5f590ce20f1bde7090ef7970686ec6738a"),
        (64, "ffe054fe7ae0cb6dc65c3af9b61d5209f439851db43d0ba5997337df154668eb"),
    ];
    for (len, expected) in vectors {
        let data = vec![b'a'; len];
        let hash = Sha256::digest(&data).unwrap();
        assert_eq!(hex::encode(hash.as_ref()), expected, "length {}", len);
    }
}
