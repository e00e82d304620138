//! secp256k1 key management
//!
//! A single key type carries the public point and, when the key was
//! generated or loaded from private material, the private scalar.
//! Private-only operations fail on public-only keys instead of using a
//! separate type. Signing and verification hash the message with
//! SHA-256(SHA-256(x)) and exchange DER-encoded ECDSA-Sig-Value bytes.

use k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use k256::ecdsa::{Signature, SigningKey, VerifyingKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::pkcs8::spki::{AlgorithmIdentifierRef, SubjectPublicKeyInfoRef};
use k256::pkcs8::{
    DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey, ObjectIdentifier,
    PrivateKeyInfo,
};
use rand::rngs::OsRng;
use rand::RngCore;
use zeroize::Zeroizing;

use crate::crypto::digest::sha256_sha256_digest;
use crate::error::{Result, WalletError};

/// Length in bytes of a raw private scalar
pub const PRIVATE_SCALAR_LENGTH: usize = 32;

/// Length in bytes of a compressed public point
pub const COMPRESSED_POINT_LENGTH: usize = 33;

/// Length in bytes of an uncompressed public point
pub const UNCOMPRESSED_POINT_LENGTH: usize = 65;

/// id-ecPublicKey, the algorithm identifier of every elliptic-curve key
/// info structure
const EC_PUBLIC_KEY_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// Named-curve identifier of secp256k1
const SECP256K1_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.132.0.10");

/// A secp256k1 key.
///
/// Always holds a valid public point; holds the private scalar only when
/// generated or loaded from private material (`is_private`). Keys loaded
/// from any encoding are fully validated before construction succeeds.
#[derive(Clone, Debug)]
pub struct EcKey {
    verifying_key: VerifyingKey,
    signing_key: Option<SigningKey>,
}

/// Reject key-info structures that are not elliptic-curve keys on
/// secp256k1.
fn check_ec_algorithm(algorithm: &AlgorithmIdentifierRef<'_>) -> Result<()> {
    if algorithm.oid != EC_PUBLIC_KEY_OID {
        log::error!("Key info is not an elliptic-curve key: oid = {}", algorithm.oid);
        return Err(WalletError::Key(format!(
            "not an elliptic-curve key: algorithm = {}",
            algorithm.oid
        )));
    }
    let curve = algorithm.parameters_oid().map_err(|e| {
        log::error!("Failed to read the named-curve identifier: {e}");
        WalletError::Key(format!("missing named-curve identifier: {e}"))
    })?;
    if curve != SECP256K1_OID {
        log::error!("Key info is not a secp256k1 key: curve = {curve}");
        return Err(WalletError::Key(format!("unsupported curve: {curve}")));
    }
    Ok(())
}

impl EcKey {
    /// Generate a fresh private key from the OS entropy source
    pub fn generate() -> Result<EcKey> {
        let mut scalar = Zeroizing::new([0u8; PRIVATE_SCALAR_LENGTH]);
        OsRng.try_fill_bytes(&mut scalar[..]).map_err(|e| {
            log::error!("Failed to draw key material from the OS RNG: {e}");
            WalletError::Crypto(format!("entropy source failure: {e}"))
        })?;
        let signing_key =
            SigningKey::from_bytes(k256::FieldBytes::from_slice(&scalar[..])).map_err(|e| {
                log::error!("Generated scalar was rejected: {e}");
                WalletError::Crypto(format!("failed to generate key: {e}"))
            })?;
        let verifying_key = *signing_key.verifying_key();
        Ok(EcKey {
            verifying_key,
            signing_key: Some(signing_key),
        })
    }

    /// Load a public key from a DER SubjectPublicKeyInfo structure.
    ///
    /// The structure must identify an elliptic-curve key on secp256k1;
    /// any other algorithm or named curve is rejected.
    pub fn from_public_key_info(key_info: &[u8]) -> Result<EcKey> {
        if key_info.is_empty() {
            log::error!("SubjectPublicKeyInfo is empty");
            return Err(WalletError::Key("public key info is empty".to_string()));
        }
        let spki = SubjectPublicKeyInfoRef::try_from(key_info).map_err(|e| {
            log::error!("Failed to decode SubjectPublicKeyInfo: {e}");
            WalletError::Key(format!("malformed public key info: {e}"))
        })?;
        check_ec_algorithm(&spki.algorithm)?;
        let verifying_key = VerifyingKey::from_public_key_der(key_info).map_err(|e| {
            log::error!("Failed to load public key from SubjectPublicKeyInfo: {e}");
            WalletError::Key(format!("invalid public key: {e}"))
        })?;
        Ok(EcKey {
            verifying_key,
            signing_key: None,
        })
    }

    /// Load a private key from a DER PKCS#8 PrivateKeyInfo structure.
    ///
    /// Algorithm and curve are checked as in `from_public_key_info`; the
    /// public point is derived from the embedded material and validated.
    pub fn from_private_key_info(key_info: &[u8]) -> Result<EcKey> {
        if key_info.is_empty() {
            log::error!("PrivateKeyInfo is empty");
            return Err(WalletError::Key("private key info is empty".to_string()));
        }
        let info = PrivateKeyInfo::try_from(key_info).map_err(|e| {
            log::error!("Failed to decode PrivateKeyInfo: {e}");
            WalletError::Key(format!("malformed private key info: {e}"))
        })?;
        check_ec_algorithm(&info.algorithm)?;
        let signing_key = SigningKey::from_pkcs8_der(key_info).map_err(|e| {
            log::error!("Failed to load private key from PrivateKeyInfo: {e}");
            WalletError::Key(format!("invalid private key: {e}"))
        })?;
        let verifying_key = *signing_key.verifying_key();
        Ok(EcKey {
            verifying_key,
            signing_key: Some(signing_key),
        })
    }

    /// Load a public key from a SEC1-encoded curve point (33-byte
    /// compressed or 65-byte uncompressed)
    pub fn from_point(point: &[u8]) -> Result<EcKey> {
        if point.is_empty() {
            log::error!("Encoded curve point is empty");
            return Err(WalletError::Key("curve point is empty".to_string()));
        }
        let verifying_key = VerifyingKey::from_sec1_bytes(point).map_err(|e| {
            log::error!("Failed to load the curve point: {e}");
            WalletError::Key(format!("invalid curve point: {e}"))
        })?;
        Ok(EcKey {
            verifying_key,
            signing_key: None,
        })
    }

    /// Load a private key from a raw 32-byte big-endian scalar.
    ///
    /// The public point is recomputed as scalar x generator.
    pub fn from_scalar(scalar: &[u8]) -> Result<EcKey> {
        if scalar.is_empty() {
            log::error!("Encoded scalar is empty");
            return Err(WalletError::Key("scalar is empty".to_string()));
        }
        if scalar.len() != PRIVATE_SCALAR_LENGTH {
            log::error!("Bad scalar length: {}", scalar.len());
            return Err(WalletError::Key(format!(
                "expected a {PRIVATE_SCALAR_LENGTH}-byte scalar, got {}",
                scalar.len()
            )));
        }
        let signing_key =
            SigningKey::from_bytes(k256::FieldBytes::from_slice(scalar)).map_err(|e| {
                log::error!("Failed to load the scalar: {e}");
                WalletError::Key(format!("invalid scalar: {e}"))
            })?;
        let verifying_key = *signing_key.verifying_key();
        Ok(EcKey {
            verifying_key,
            signing_key: Some(signing_key),
        })
    }

    /// Whether this key carries the private scalar
    pub fn is_private(&self) -> bool {
        self.signing_key.is_some()
    }

    fn signing_key(&self) -> Result<&SigningKey> {
        match &self.signing_key {
            Some(key) => Ok(key),
            None => {
                log::error!("Operation requires a private key");
                Err(WalletError::Key(
                    "key does not carry a private scalar".to_string(),
                ))
            }
        }
    }

    /// Serialize the public half as a DER SubjectPublicKeyInfo structure
    pub fn to_public_key_info(&self) -> Result<Vec<u8>> {
        let document = self.verifying_key.to_public_key_der().map_err(|e| {
            log::error!("Failed to serialize SubjectPublicKeyInfo: {e}");
            WalletError::Key(format!("failed to serialize public key info: {e}"))
        })?;
        Ok(document.into_vec())
    }

    /// Serialize as a DER PKCS#8 PrivateKeyInfo structure.
    ///
    /// Requires a private key.
    pub fn to_private_key_info(&self) -> Result<Vec<u8>> {
        let signing_key = self.signing_key()?;
        let document = signing_key.to_pkcs8_der().map_err(|e| {
            log::error!("Failed to serialize PrivateKeyInfo: {e}");
            WalletError::Key(format!("failed to serialize private key info: {e}"))
        })?;
        Ok(document.as_bytes().to_vec())
    }

    /// Serialize the public point in SEC1 form, compressed (33 bytes) or
    /// uncompressed (65 bytes)
    pub fn to_point(&self, compress: bool) -> Vec<u8> {
        self.verifying_key
            .to_encoded_point(compress)
            .as_bytes()
            .to_vec()
    }

    /// Serialize the raw 32-byte private scalar.
    ///
    /// Requires a private key.
    pub fn to_scalar(&self) -> Result<Vec<u8>> {
        let signing_key = self.signing_key()?;
        Ok(signing_key.to_bytes().as_slice().to_vec())
    }

    /// Verify a DER-encoded ECDSA signature over `message`.
    ///
    /// The message is hashed with SHA-256(SHA-256(x)) before
    /// verification. Returns false for empty messages, malformed
    /// signatures, and verification failures.
    pub fn verify_signature(&self, message: &[u8], signature: &[u8]) -> bool {
        if message.is_empty() {
            log::error!("Provided message is empty");
            return false;
        }
        if signature.is_empty() {
            log::error!("Signature is empty");
            return false;
        }
        let signature = match Signature::from_der(signature) {
            Ok(signature) => signature,
            Err(e) => {
                log::debug!("Malformed signature: {e}");
                return false;
            }
        };
        let digest = sha256_sha256_digest(message);
        self.verifying_key.verify_prehash(&digest, &signature).is_ok()
    }

    /// Sign `message` and return a DER-encoded ECDSA-Sig-Value.
    ///
    /// The message is hashed with SHA-256(SHA-256(x)); nonces are
    /// deterministic (RFC 6979). Requires a private key.
    pub fn generate_signature(&self, message: &[u8]) -> Result<Vec<u8>> {
        let signing_key = self.signing_key()?;
        if message.is_empty() {
            log::error!("Provided message is empty");
            return Err(WalletError::Signature("message is empty".to_string()));
        }
        let digest = sha256_sha256_digest(message);
        let signature: Signature = signing_key.sign_prehash(&digest).map_err(|e| {
            log::error!("Failed to generate signature: {e}");
            WalletError::Signature(format!("signing failed: {e}"))
        })?;
        Ok(signature.to_der().as_bytes().to_vec())
    }
}
