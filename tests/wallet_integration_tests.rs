//! Wallet primitives integration tests
//!
//! Exercises the full pipeline: key generation, address derivation,
//! Base58 round trips, validation, and signing, the way higher-level
//! wallet code strings these pieces together.

use wallet_primitives::crypto::{
    sha256_ripemd160_digest, DigestAlgorithm, Digester, EcKey,
};
use wallet_primitives::encode::{base58_decode, base58_decode_into, base58_encode};
use wallet_primitives::wallet::{PkhAddress, MAIN_NETWORK, RAW_PKH_ADDRESS_LENGTH, TEST_NETWORK};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_generated_key_to_address_pipeline() {
    init_logging();
    let key = EcKey::generate().unwrap();
    let address = PkhAddress::from_public_key(MAIN_NETWORK, &key, true);

    // The key hash must cover the compressed point serialization.
    assert_eq!(
        address.key_hash(),
        sha256_ripemd160_digest(&key.to_point(true)).as_slice()
    );

    let b58 = address.serialize_base58().unwrap();
    assert!(PkhAddress::is_valid_address_base58(&b58));
    // Mainnet addresses keep their leading zero byte as a '1'.
    assert!(b58.starts_with('1'));

    let parsed = PkhAddress::from_base58(&b58).unwrap();
    assert_eq!(parsed, address);
    assert_eq!(parsed.serialize().unwrap().len(), RAW_PKH_ADDRESS_LENGTH);
}

#[test]
fn test_signature_round_trip_through_serialized_keys() {
    let key = EcKey::generate().unwrap();
    let message = b"transfer 50 coins to the test address";
    let signature = key.generate_signature(message).unwrap();

    // A verifier that only ever saw the public half must accept it.
    let public_info = key.to_public_key_info().unwrap();
    let verifier = EcKey::from_public_key_info(&public_info).unwrap();
    assert!(verifier.verify_signature(message, &signature));
    assert!(!verifier.verify_signature(b"transfer 51 coins to the test address", &signature));

    // And a signer reloaded from private key info must produce
    // signatures the original accepts.
    let private_info = key.to_private_key_info().unwrap();
    let signer = EcKey::from_private_key_info(&private_info).unwrap();
    let signature = signer.generate_signature(message).unwrap();
    assert!(key.verify_signature(message, &signature));
}

#[test]
fn test_address_survives_base58_transport() {
    let key = EcKey::generate().unwrap();
    for network_id in [MAIN_NETWORK, TEST_NETWORK] {
        let address = PkhAddress::from_public_key(network_id, &key, false);
        let raw = address.serialize().unwrap();

        let b58 = base58_encode(&raw);
        assert_eq!(base58_decode(&b58).unwrap(), raw);

        let parsed = PkhAddress::from_base58(&b58).unwrap();
        assert_eq!(parsed.network_id(), network_id);
        assert_eq!(parsed.key_hash(), address.key_hash());
    }
}

#[test]
fn test_corrupted_address_text_is_rejected() {
    init_logging();
    let key = EcKey::generate().unwrap();
    let b58 = PkhAddress::from_public_key(MAIN_NETWORK, &key, true)
        .serialize_base58()
        .unwrap();

    // Any single-character substitution must fail validation.
    for index in 0..b58.len() {
        let mut corrupted: Vec<u8> = b58.as_bytes().to_vec();
        corrupted[index] = if corrupted[index] == b'2' { b'3' } else { b'2' };
        let corrupted = String::from_utf8(corrupted).unwrap();
        assert!(
            !PkhAddress::is_valid_address_base58(&corrupted),
            "index = {index}"
        );
    }
}

#[test]
fn test_buffer_sizing_with_truncating_decode() {
    let key = EcKey::generate().unwrap();
    let b58 = PkhAddress::from_public_key(MAIN_NETWORK, &key, true)
        .serialize_base58()
        .unwrap();

    // Probe with an empty buffer, then decode for real.
    let mut probe: [u8; 0] = [];
    let needed = base58_decode_into(&b58, &mut probe).unwrap();
    assert_eq!(needed, RAW_PKH_ADDRESS_LENGTH);

    let mut buffer = vec![0u8; needed];
    let written = base58_decode_into(&b58, &mut buffer).unwrap();
    assert_eq!(written, needed);
    assert!(PkhAddress::is_valid_address(&buffer));
}

#[test]
fn test_streaming_checksum_matches_one_shot() {
    let key = EcKey::generate().unwrap();
    let address = PkhAddress::from_public_key(MAIN_NETWORK, &key, true);
    let raw = address.serialize().unwrap();

    // Recompute the checksum by streaming the 21-byte prefix.
    let mut digester = Digester::new(DigestAlgorithm::Sha256Sha256).unwrap();
    digester.update(&raw[..RAW_PKH_ADDRESS_LENGTH - 4]);
    let digest = digester.finalize();

    assert_eq!(&digest[..4], &raw[RAW_PKH_ADDRESS_LENGTH - 4..]);
    assert_eq!(&digest[..4], address.generate_checksum().unwrap().as_slice());
}
