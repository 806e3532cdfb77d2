//! Constants for the Digital Signature Algorithm (FIPS 186)

/// Smallest legacy prime modulus length in bits
pub const DSA_MIN_PRIME_BITS: usize = 512;

/// Largest legacy prime modulus length in bits
pub const DSA_MAX_LEGACY_PRIME_BITS: usize = 1024;

/// Legacy prime modulus lengths must be a multiple of this step
pub const DSA_PRIME_BITS_STEP: usize = 64;

/// Subprime length paired with every legacy modulus
pub const DSA_LEGACY_SUBPRIME_BITS: usize = 160;

/// DSA with 1024-bit modulus and 160-bit subgroup
pub const DSA_1024_160: (usize, usize) = (1024, 160);

/// DSA with 2048-bit modulus and 224-bit subgroup (default for 2048)
pub const DSA_2048_224: (usize, usize) = (2048, 224);

/// DSA with 2048-bit modulus and 256-bit subgroup
pub const DSA_2048_256: (usize, usize) = (2048, 256);

/// Primality certainty for moduli up to 1024 bits
pub const DSA_CERTAINTY_LEGACY: u32 = 80;

/// Primality certainty for 2048-bit moduli
pub const DSA_CERTAINTY_2048: u32 = 112;

/// Default cap on outer seed redraws during parameter generation
pub const DSA_DEFAULT_MAX_SEED_ATTEMPTS: u64 = 100_000;

/// Digest size accepted by raw DSA, in bytes
pub const DSA_RAW_DIGEST_SIZE: usize = 20;

/// Number of 32-bit words in a G-function seed
pub const DSA_SEED_WORDS: usize = 5;

/// Byte length of an application-supplied seed
pub const DSA_SEED_BYTES: usize = DSA_SEED_WORDS * 4;

/// Number of random bits beyond `N` drawn for wide-subprime secrets
pub const DSA_EXTRA_RANDOM_BITS: usize = 64;

/// G-function IV used when deriving private keys
pub const DSA_KEYGEN_IV: [u32; 5] = [0x67452301, 0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0];

/// G-function IV used when deriving per-signature nonces
pub const DSA_NONCE_IV: [u32; 5] = [0xEFCDAB89, 0x98BADCFE, 0x10325476, 0xC3D2E1F0, 0x67452301];

/// Hex encoded well-known domain parameters for one modulus size
#[derive(Debug, Clone, Copy)]
pub struct WellKnownDsaParams {
    /// Modulus length in bits
    pub prime_bits: usize,
    /// Prime modulus `p`
    pub p: &'static str,
    /// Subprime `q`
    pub q: &'static str,
    /// Generator `g`
    pub g: &'static str,
}

/// 512-bit FIPS 186 domain parameters
pub const DSA_512: WellKnownDsaParams = WellKnownDsaParams {
    prime_bits: 512,
    p: "fca682ce8e12caba26efccf7110e526db078b05edecbcd1eb4a208f3ae1617ae\
        01f35b91a47e6df63413c5e12ed0899bcd132acd50d99151bdc43ee737592e17",
    q: "962eddcc369cba8ebb260ee6b6a126d9346e38c5",
    g: "678471b27a9cf44ee91a49c5147db1a9aaf244f05a434d6486931d2d14271b9e\
        35030b71fd73da179069b32e2935630e1c2062354d0da20a6c416e50be794ca4",
};

/// 768-bit FIPS 186 domain parameters
pub const DSA_768: WellKnownDsaParams = WellKnownDsaParams {
    prime_bits: 768,
    p: "e9e642599d355f37c97ffd3567120b8e25c9cd43e927b3a9670fbec5d8901419\
        22d2c3b3ad2480093799869d1e846aab49fab0ad26d2ce6a22219d470bce7d77\
        7d4a21fbe9c270b57f607002f3cef8393694cf45ee3688c11a8c56ab127a3daf",
    q: "9cdbd84c9f1ac2f38d0f80f42ab952e7338bf511",
    g: "30470ad5a005fb14ce2d9dcd87e38bc7d1b1c5facbaecbe95f190aa7a31d23c4\
        dbbcbe06174544401a5b2c020965d8c2bd2171d3668445771f74ba084d2029d8\
        3c1c158547f3a9f1a2715be23d51ae4d3e5a1f6a7064f316933a346d3f529252",
};

/// 1024-bit FIPS 186 domain parameters
pub const DSA_1024: WellKnownDsaParams = WellKnownDsaParams {
    prime_bits: 1024,
    p: "fd7f53811d75122952df4a9c2eece4e7f611b7523cef4400c31e3f80b6512669\
        455d402251fb593d8d58fabfc5f5ba30f6cb9b556cd7813b801d346ff26660b7\
        6b9950a5a49f9fe8047b1022c24fbba9d7feb7c61bf83b57e7c6a8a6150f04fb\
        83f6d3c51ec3023554135a169132f675f3ae2b61d72aeff22203199dd14801c7",
    q: "9760508f15230bccb292b982a2eb840bf0581cf5",
    g: "f7e1a085d69b3ddecbbcab5c36b857b97994afbbfa3aea82f9574c0b3d078267\
        5159578ebad4594fe67107108180b449167123e84c281613b7cf09328cc8a6e1\
        3c167a8b547c8d28e0a3ae1e2bb3a675916ea37f0bfa213562f1fb627a01243b\
        cca4f1bea8519089a883dfe15ae59f06928b665e807b552564014c3bfecf492a",
};

/// All well-known parameter sets, smallest first
pub const WELL_KNOWN_DSA_PARAMS: [WellKnownDsaParams; 3] = [DSA_512, DSA_768, DSA_1024];
