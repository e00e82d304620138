//! Pay-to-key-hash addresses
//!
//! A P2PKH address is 25 raw bytes:
//!   network ID (1 byte)
//!   key hash   (20 bytes) = RIPEMD-160(SHA-256(public point))
//!   checksum   (4 bytes)  = first 4 bytes of
//!                             SHA-256(SHA-256(network ID || key hash))
//! and travels as a Base58 string.

use crate::crypto::digest::{sha256_ripemd160_digest, sha256_sha256_digest, DigestAlgorithm};
use crate::crypto::digester::Digester;
use crate::crypto::key::EcKey;
use crate::encode::base58::{base58_decode, base58_encode, is_base58_string};
use crate::error::{Result, WalletError};

/// Network identifier byte; extensible by value
pub type NetworkId = u8;

/// Main Bitcoin network
pub const MAIN_NETWORK: NetworkId = 0x00;
/// Test network
pub const TEST_NETWORK: NetworkId = 0x6f;
/// Namecoin network
pub const NAMECOIN_NETWORK: NetworkId = 0x34;

/// Length in bytes of the public key hash
pub const KEY_HASH_LENGTH: usize = 20;

/// Length in bytes of the address checksum
pub const ADDRESS_CHECKSUM_LENGTH: usize = 4;

/// Length in bytes of a raw serialized address
pub const RAW_PKH_ADDRESS_LENGTH: usize = 1 + KEY_HASH_LENGTH + ADDRESS_CHECKSUM_LENGTH;

const CHECKSUM_OFFSET: usize = 1 + KEY_HASH_LENGTH;

/// First 4 bytes of SHA-256(SHA-256(network ID || key hash))
fn calculate_checksum(network_id: NetworkId, key_hash: &[u8]) -> Result<Vec<u8>> {
    debug_assert_eq!(key_hash.len(), KEY_HASH_LENGTH);
    let mut digester = Digester::new(DigestAlgorithm::Sha256Sha256)?;
    digester.update_byte(network_id);
    digester.update(key_hash);
    let digest = digester.finalize();
    Ok(digest[..ADDRESS_CHECKSUM_LENGTH].to_vec())
}

/// A pay-to-key-hash address.
///
/// Constructed from a public key (forward derivation) or parsed from raw
/// or Base58 bytes (reverse validation). The default value is "unset"
/// (no key hash yet) and refuses to serialize.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PkhAddress {
    network_id: NetworkId,
    key_hash: Vec<u8>,
}

impl Default for PkhAddress {
    fn default() -> Self {
        PkhAddress {
            network_id: MAIN_NETWORK,
            key_hash: Vec::new(),
        }
    }
}

impl PkhAddress {
    /// Check a raw 25-byte address: exact length and matching checksum
    pub fn is_valid_address(address: &[u8]) -> bool {
        if address.len() != RAW_PKH_ADDRESS_LENGTH {
            log::debug!(
                "Invalid address length: expected = {RAW_PKH_ADDRESS_LENGTH}, actual = {}",
                address.len()
            );
            return false;
        }
        let checksum = sha256_sha256_digest(&address[..CHECKSUM_OFFSET]);
        if checksum[..ADDRESS_CHECKSUM_LENGTH] != address[CHECKSUM_OFFSET..] {
            log::debug!("Bad checksum");
            return false;
        }
        true
    }

    /// Check a Base58 address string
    pub fn is_valid_address_base58(address: &str) -> bool {
        if address.is_empty() {
            log::debug!("Base58 address is empty");
            return false;
        }
        if !is_base58_string(address) {
            log::debug!("Address is not base58 encoded");
            return false;
        }
        match base58_decode(address) {
            Ok(raw) => Self::is_valid_address(&raw),
            Err(_) => false,
        }
    }

    /// Derive the address of `public_key` on the given network.
    ///
    /// The key hash covers the SEC1 point serialization, compressed or
    /// not per `compress`.
    pub fn from_public_key(
        network_id: NetworkId,
        public_key: &EcKey,
        compress: bool,
    ) -> PkhAddress {
        let serialized_key = public_key.to_point(compress);
        PkhAddress {
            network_id,
            key_hash: sha256_ripemd160_digest(&serialized_key),
        }
    }

    /// Parse a raw 25-byte address, validating length and checksum
    pub fn from_raw(address_raw: &[u8]) -> Result<PkhAddress> {
        if !Self::is_valid_address(address_raw) {
            log::error!("Invalid address");
            return Err(WalletError::InvalidAddress(
                "length or checksum mismatch".to_string(),
            ));
        }
        Ok(PkhAddress {
            network_id: address_raw[0],
            key_hash: address_raw[1..CHECKSUM_OFFSET].to_vec(),
        })
    }

    /// Parse a Base58 address string
    pub fn from_base58(address_b58: &str) -> Result<PkhAddress> {
        if address_b58.is_empty() {
            log::debug!("Base58 address is empty");
            return Err(WalletError::InvalidAddress(
                "base58 address is empty".to_string(),
            ));
        }
        if !is_base58_string(address_b58) {
            log::debug!("Address is not base58 encoded");
            return Err(WalletError::InvalidAddress(
                "address is not base58 encoded".to_string(),
            ));
        }
        Self::from_raw(&base58_decode(address_b58)?)
    }

    /// Whether this address carries a key hash
    pub fn is_set(&self) -> bool {
        !self.key_hash.is_empty()
    }

    /// The network identifier byte
    pub fn network_id(&self) -> NetworkId {
        self.network_id
    }

    /// The 20-byte public key hash
    pub fn key_hash(&self) -> &[u8] {
        &self.key_hash
    }

    /// Serialize to the raw 25-byte form
    pub fn serialize(&self) -> Result<Vec<u8>> {
        if !self.is_set() {
            return Err(WalletError::InvalidAddress("address is unset".to_string()));
        }
        let mut address = Vec::with_capacity(RAW_PKH_ADDRESS_LENGTH);
        address.push(self.network_id);
        address.extend_from_slice(&self.key_hash);
        let checksum = calculate_checksum(self.network_id, &self.key_hash)?;
        address.extend_from_slice(&checksum);
        Ok(address)
    }

    /// Serialize to the Base58 text form
    pub fn serialize_base58(&self) -> Result<String> {
        Ok(base58_encode(&self.serialize()?))
    }

    /// The 4-byte checksum over network ID and key hash
    pub fn generate_checksum(&self) -> Result<Vec<u8>> {
        if !self.is_set() {
            return Err(WalletError::InvalidAddress("address is unset".to_string()));
        }
        calculate_checksum(self.network_id, &self.key_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bitcoin.it's example address; the key is compressed.
    const SAMPLE_SCALAR_HEX: &str =
        "18e14a7b6a307f426a94f8114701e7c8e774e7f9a47e2c2035db29a206321725";
    const SAMPLE_KEY_HASH_HEX: &str = "f54a5851e9372b87810a8e60cdd2e7cfd80b6e31";
    const SAMPLE_CHECKSUM_HEX: &str = "c7f18fe8";
    const SAMPLE_ADDRESS_HEX: &str = "00f54a5851e9372b87810a8e60cdd2e7cfd80b6e31c7f18fe8";
    const SAMPLE_ADDRESS_BASE58: &str = "1PMycacnJaSqwwJqjawXBErnLsZ7RkXUAs";

    fn sample_private_key() -> EcKey {
        let scalar = hex::decode(SAMPLE_SCALAR_HEX).unwrap();
        EcKey::from_scalar(&scalar).unwrap()
    }

    #[test]
    fn test_is_valid_address() {
        let good_address = hex::decode(SAMPLE_ADDRESS_HEX).unwrap();
        assert!(PkhAddress::is_valid_address(&good_address));

        // Bad length.
        let mut bad_address = good_address.clone();
        bad_address.push(0xff);
        assert!(!PkhAddress::is_valid_address(&bad_address));
        bad_address.pop();
        bad_address.pop();
        assert!(!PkhAddress::is_valid_address(&bad_address));
        assert!(!PkhAddress::is_valid_address(b""));

        // Bad checksum.
        let mut bad_address = good_address;
        bad_address[RAW_PKH_ADDRESS_LENGTH / 2] ^= 0x5e;
        assert!(!PkhAddress::is_valid_address(&bad_address));
    }

    #[test]
    fn test_every_single_byte_flip_is_invalid() {
        let good_address = hex::decode(SAMPLE_ADDRESS_HEX).unwrap();
        for index in 0..good_address.len() {
            for bit in 0..8 {
                let mut corrupted = good_address.clone();
                corrupted[index] ^= 1 << bit;
                assert!(
                    !PkhAddress::is_valid_address(&corrupted),
                    "index = {index}, bit = {bit}"
                );
            }
        }
    }

    #[test]
    fn test_is_valid_address_base58() {
        assert!(PkhAddress::is_valid_address_base58(SAMPLE_ADDRESS_BASE58));
        assert!(!PkhAddress::is_valid_address_base58(""));
        assert!(!PkhAddress::is_valid_address_base58("not base58!"));
        // Valid base58, not a valid address.
        assert!(!PkhAddress::is_valid_address_base58("JxF12TrwUP45BMd"));
    }

    #[test]
    fn test_known_address_from_public_key() {
        let private_key = sample_private_key();
        let address = PkhAddress::from_public_key(MAIN_NETWORK, &private_key, true);

        assert!(address.is_set());
        assert_eq!(address.network_id(), MAIN_NETWORK);
        assert_eq!(hex::encode(address.key_hash()), SAMPLE_KEY_HASH_HEX);
        assert_eq!(
            hex::encode(address.generate_checksum().unwrap()),
            SAMPLE_CHECKSUM_HEX
        );
        assert_eq!(
            hex::encode(address.serialize().unwrap()),
            SAMPLE_ADDRESS_HEX
        );
        assert_eq!(address.serialize_base58().unwrap(), SAMPLE_ADDRESS_BASE58);
    }

    #[test]
    fn test_parse_raw_address() {
        let address_raw = hex::decode(SAMPLE_ADDRESS_HEX).unwrap();
        let address = PkhAddress::from_raw(&address_raw).unwrap();

        assert!(address.is_set());
        assert_eq!(address.network_id(), MAIN_NETWORK);
        assert_eq!(hex::encode(address.key_hash()), SAMPLE_KEY_HASH_HEX);
        assert_eq!(address.serialize().unwrap(), address_raw);
        assert_eq!(address.serialize_base58().unwrap(), SAMPLE_ADDRESS_BASE58);
    }

    #[test]
    fn test_parse_base58_address() {
        let address = PkhAddress::from_base58(SAMPLE_ADDRESS_BASE58).unwrap();

        assert!(address.is_set());
        assert_eq!(address.network_id(), MAIN_NETWORK);
        assert_eq!(hex::encode(address.key_hash()), SAMPLE_KEY_HASH_HEX);
        assert_eq!(
            hex::encode(address.generate_checksum().unwrap()),
            SAMPLE_CHECKSUM_HEX
        );
        assert_eq!(address.serialize_base58().unwrap(), SAMPLE_ADDRESS_BASE58);
    }

    #[test]
    fn test_parse_rejects_corrupted_input() {
        assert!(PkhAddress::from_base58("").is_err());
        assert!(PkhAddress::from_base58("JxFI2TrwUP45BMd").is_err());
        assert!(PkhAddress::from_base58("JxF12TrwUP45BMd").is_err());

        let mut address_raw = hex::decode(SAMPLE_ADDRESS_HEX).unwrap();
        address_raw[3] ^= 0x01;
        assert!(PkhAddress::from_raw(&address_raw).is_err());
    }

    #[test]
    fn test_default_address_is_unset() {
        let address = PkhAddress::default();
        assert!(!address.is_set());
        assert!(address.serialize().is_err());
        assert!(address.serialize_base58().is_err());
        assert!(address.generate_checksum().is_err());
    }

    #[test]
    fn test_other_networks_round_trip() {
        let private_key = sample_private_key();
        for network_id in [TEST_NETWORK, NAMECOIN_NETWORK, 0x1e] {
            let address = PkhAddress::from_public_key(network_id, &private_key, true);
            let b58 = address.serialize_base58().unwrap();
            assert!(PkhAddress::is_valid_address_base58(&b58));

            let parsed = PkhAddress::from_base58(&b58).unwrap();
            assert_eq!(parsed.network_id(), network_id);
            assert_eq!(parsed, address);
        }
    }

    #[test]
    fn test_compressed_and_uncompressed_hashes_differ() {
        let private_key = sample_private_key();
        let compressed = PkhAddress::from_public_key(MAIN_NETWORK, &private_key, true);
        let uncompressed = PkhAddress::from_public_key(MAIN_NETWORK, &private_key, false);
        assert_ne!(compressed.key_hash(), uncompressed.key_hash());
        assert_eq!(uncompressed.key_hash().len(), KEY_HASH_LENGTH);
    }
}
