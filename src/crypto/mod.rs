//! Cryptographic primitives
//!
//! This module provides the digest algorithms, the streaming digester,
//! and secp256k1 key management used for address derivation and
//! transaction signing.

pub mod digest;
pub mod digester;
pub mod key;

pub use digest::{
    digest, ripemd160_digest, sha256_digest, sha256_ripemd160_digest, sha256_sha256_digest,
    DigestAlgorithm, RIPEMD160_DIGEST_LENGTH, SHA256_DIGEST_LENGTH,
};
pub use digester::Digester;
pub use key::{
    EcKey, COMPRESSED_POINT_LENGTH, PRIVATE_SCALAR_LENGTH, UNCOMPRESSED_POINT_LENGTH,
};
