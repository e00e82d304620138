//! Error handling for the wallet primitives
//!
//! This module provides the error types for all digest, key, encoding,
//! and address operations.

use std::fmt;

/// Result type alias for wallet primitive operations
pub type Result<T> = std::result::Result<T, WalletError>;

/// Error types for wallet primitive operations
#[derive(Debug, Clone)]
pub enum WalletError {
    /// Underlying cryptographic library failures
    Crypto(String),
    /// Key parsing, loading, or serialization errors
    Key(String),
    /// Signature generation errors
    Signature(String),
    /// Text encoding/decoding errors
    Encoding(String),
    /// Invalid address format or checksum
    InvalidAddress(String),
    /// Unsupported algorithm or operation
    Unsupported(String),
}

impl fmt::Display for WalletError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WalletError::Crypto(msg) => write!(f, "Cryptographic error: {msg}"),
            WalletError::Key(msg) => write!(f, "Key error: {msg}"),
            WalletError::Signature(msg) => write!(f, "Signature error: {msg}"),
            WalletError::Encoding(msg) => write!(f, "Encoding error: {msg}"),
            WalletError::InvalidAddress(msg) => write!(f, "Invalid address: {msg}"),
            WalletError::Unsupported(msg) => write!(f, "Unsupported: {msg}"),
        }
    }
}

impl std::error::Error for WalletError {}
