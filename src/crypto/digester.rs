//! Streaming digester
//!
//! Incremental hashing over a SHA-256 stream. Finalizing never consumes
//! the running state, so a digester can be finalized mid-stream and then
//! keep accepting updates; composed algorithms apply their second pass to
//! the 32-byte intermediate at finalize time.

use ring::digest::{Context, SHA256};

use crate::crypto::digest::{ripemd160_digest, sha256_digest, DigestAlgorithm};
use crate::error::{Result, WalletError};

/// Incremental digest computation.
///
/// The streaming primitive is always SHA-256; `Sha256Sha256` and
/// `Sha256RipeMd160` stream into SHA-256 and run the second primitive as
/// a one-shot pass when finalizing. `RipeMd160` has no streaming backend
/// and is rejected at construction.
///
/// `finalize` works on a copy of the running context, which makes it
/// idempotent: calling it twice without an intervening `update` returns
/// the same digest, and updates may continue afterwards.
pub struct Digester {
    algorithm: DigestAlgorithm,
    byte_count: usize,
    context: Context,
}

impl Digester {
    /// Create a digester for the given algorithm.
    ///
    /// Fails with `Unsupported` for algorithms without a streaming
    /// primitive (RIPEMD-160).
    pub fn new(algorithm: DigestAlgorithm) -> Result<Digester> {
        match algorithm {
            DigestAlgorithm::Sha256
            | DigestAlgorithm::Sha256Sha256
            | DigestAlgorithm::Sha256RipeMd160 => Ok(Digester {
                algorithm,
                byte_count: 0,
                context: Context::new(&SHA256),
            }),
            DigestAlgorithm::RipeMd160 => {
                log::error!("No streaming primitive for {algorithm}");
                Err(WalletError::Unsupported(format!(
                    "streaming digest not available for {algorithm}"
                )))
            }
        }
    }

    /// The algorithm this digester was created for
    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }

    /// Length in bytes of the final digest
    pub fn digest_length(&self) -> usize {
        self.algorithm.digest_length()
    }

    /// Number of bytes digested since construction or the last reset
    pub fn count(&self) -> usize {
        self.byte_count
    }

    /// Append `data` to the running hash.
    ///
    /// A zero-length update is a no-op.
    pub fn update(&mut self, data: &[u8]) {
        if data.is_empty() {
            return;
        }
        self.context.update(data);
        self.byte_count += data.len();
    }

    /// Append a single byte to the running hash
    pub fn update_byte(&mut self, datum: u8) {
        self.update(&[datum]);
    }

    /// Produce the digest of everything written so far.
    ///
    /// The running state is untouched: repeated calls without intervening
    /// updates return identical digests, and `update` continues the
    /// stream afterwards.
    pub fn finalize(&self) -> Vec<u8> {
        // finish() consumes the context, so hash a copy and keep ours.
        let intermediate = self.context.clone().finish();
        match self.algorithm {
            DigestAlgorithm::Sha256 => intermediate.as_ref().to_vec(),
            DigestAlgorithm::Sha256Sha256 => sha256_digest(intermediate.as_ref()),
            DigestAlgorithm::Sha256RipeMd160 => ripemd160_digest(intermediate.as_ref()),
            // Rejected at construction.
            DigestAlgorithm::RipeMd160 => Vec::new(),
        }
    }

    /// Discard all state and start an empty stream
    pub fn reset(&mut self) {
        self.context = Context::new(&SHA256);
        self.byte_count = 0;
    }
}
