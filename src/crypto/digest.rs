//! One-shot digest algorithms
//!
//! Single-pass SHA-256 and RIPEMD-160 plus the two composed double-hash
//! variants used by Bitcoin-style wallets: SHA-256(SHA-256(x)) for
//! checksums and transaction ids, RIPEMD-160(SHA-256(x)) for key hashes.

use ring::digest::{Context, SHA256};
use ripemd::{Digest as RipemdDigest, Ripemd160};

/// Length in bytes of a SHA-256 digest
pub const SHA256_DIGEST_LENGTH: usize = 32;

/// Length in bytes of a RIPEMD-160 digest
pub const RIPEMD160_DIGEST_LENGTH: usize = 20;

/// Digest algorithms supported by the wallet primitives.
///
/// The composed variants apply the second primitive to the full output
/// of the first, so their digest length is the second primitive's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    /// Single-pass SHA-256
    Sha256,
    /// Single-pass RIPEMD-160
    RipeMd160,
    /// SHA-256(SHA-256(x))
    Sha256Sha256,
    /// RIPEMD-160(SHA-256(x))
    Sha256RipeMd160,
}

impl DigestAlgorithm {
    /// Length in bytes of this algorithm's output digest
    pub fn digest_length(&self) -> usize {
        match self {
            DigestAlgorithm::Sha256 | DigestAlgorithm::Sha256Sha256 => SHA256_DIGEST_LENGTH,
            DigestAlgorithm::RipeMd160 | DigestAlgorithm::Sha256RipeMd160 => {
                RIPEMD160_DIGEST_LENGTH
            }
        }
    }

    /// Human-readable algorithm name
    pub fn name(&self) -> &'static str {
        match self {
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::RipeMd160 => "RIPEMD-160",
            DigestAlgorithm::Sha256Sha256 => "SHA-256-SHA-256",
            DigestAlgorithm::Sha256RipeMd160 => "SHA-256-RIPEMD-160",
        }
    }
}

impl std::fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute the digest of `data` under the given algorithm
pub fn digest(algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Sha256 => sha256_digest(data),
        DigestAlgorithm::RipeMd160 => ripemd160_digest(data),
        DigestAlgorithm::Sha256Sha256 => sha256_sha256_digest(data),
        DigestAlgorithm::Sha256RipeMd160 => sha256_ripemd160_digest(data),
    }
}

/// Compute the SHA-256 digest of `data`
pub fn sha256_digest(data: &[u8]) -> Vec<u8> {
    let mut context = Context::new(&SHA256);
    context.update(data);
    let digest = context.finish();
    digest.as_ref().to_vec()
}

/// Compute the RIPEMD-160 digest of `data`
pub fn ripemd160_digest(data: &[u8]) -> Vec<u8> {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().to_vec()
}

/// Compute SHA-256(SHA-256(`data`))
///
/// The intermediate 32-byte digest is fed to the second pass as-is.
pub fn sha256_sha256_digest(data: &[u8]) -> Vec<u8> {
    let first = sha256_digest(data);
    sha256_digest(&first)
}

/// Compute RIPEMD-160(SHA-256(`data`))
pub fn sha256_ripemd160_digest(data: &[u8]) -> Vec<u8> {
    let first = sha256_digest(data);
    ripemd160_digest(&first)
}
