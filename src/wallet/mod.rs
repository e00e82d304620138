//! Wallet address derivation
//!
//! This module turns public keys into checksum-protected, Base58-encoded
//! pay-to-key-hash addresses and validates addresses on the way back in.

pub mod address;

pub use address::{
    PkhAddress, ADDRESS_CHECKSUM_LENGTH, KEY_HASH_LENGTH, MAIN_NETWORK, NAMECOIN_NETWORK,
    NetworkId, RAW_PKH_ADDRESS_LENGTH, TEST_NETWORK,
};
