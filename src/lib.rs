//! # Wallet Primitives - Bitcoin-Style Wallet Cryptography
//!
//! The cryptographic core of a Bitcoin-style wallet: everything between
//! raw key material and the address string a user can copy.
//!
//! ## What This Library Provides
//! - **Digest Engine**: one-shot SHA-256, RIPEMD-160, and the composed
//!   double-hash variants (SHA-256-SHA-256 checksums, SHA-256-RIPEMD-160
//!   key hashes)
//! - **Streaming Digester**: incremental hashing with non-destructive,
//!   idempotent finalization
//! - **EC Key Management**: secp256k1 key generation, four load/serialize
//!   encodings, and double-SHA-256 ECDSA signing and verification
//! - **Base58 Codec**: arbitrary-precision encoding with leading-zero
//!   preservation and a truncating decode for buffer sizing
//! - **PKH Addresses**: network byte + key hash + checksum derivation,
//!   with raw and Base58 parsing and validation
//!
//! ## How The Code Is Organized
//! - `crypto/`: digest algorithms, the streaming digester, secp256k1 keys
//! - `encode/`: the Base58 codec
//! - `wallet/`: pay-to-key-hash address derivation and validation
//! - `error/`: the error type shared by every fallible operation
//!
//! ## Key Design Decisions
//! - One key type with an optional private scalar instead of a
//!   public/private type hierarchy; private-only operations fail cleanly
//!   on public-only keys
//! - Finalizing a digester hashes a copy of the running state, so
//!   checksum computation never destroys an in-progress stream
//! - All failures are `Result`s or `bool`s plus a `log` line; nothing in
//!   the public interface panics
//! - The Base58 codec is implemented on `num-bigint` rather than a
//!   codec crate so decode can report the full length while truncating

pub mod crypto;
pub mod encode;
pub mod error;
pub mod wallet;

// Re-export commonly used types for convenience
pub use crypto::{
    digest, ripemd160_digest, sha256_digest, sha256_ripemd160_digest, sha256_sha256_digest,
    DigestAlgorithm, Digester, EcKey,
};
pub use encode::{base58_decode, base58_decode_into, base58_encode, is_base58_string};
pub use error::{Result, WalletError};
pub use wallet::{
    NetworkId, PkhAddress, MAIN_NETWORK, NAMECOIN_NETWORK, RAW_PKH_ADDRESS_LENGTH, TEST_NETWORK,
};
