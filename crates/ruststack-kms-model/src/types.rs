//! Shared KMS types: algorithm/spec enums and descriptor structs.
//!
//! All types follow the KMS JSON wire format (`awsJson1_1`) with `PascalCase`
//! field names. Enum variants use idiomatic Rust `PascalCase` naming and map
//! to the wire spelling via `as_str`.
//!
//! Enums that callers supply in requests (key specs, algorithms, store
//! types) carry an `Unknown(String)` variant with hand-written serde, so an
//! invalid value can be rejected with a `ValidationException` instead of a
//! deserialization error. Enums only ever emitted by the service use plain
//! serde derives.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::blob::Blob;
use crate::timestamp::Timestamp;

// ---------------------------------------------------------------------------
// Key specs and usage
// ---------------------------------------------------------------------------

/// The cryptographic configuration of a KMS key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeySpec {
    /// Symmetric AES-256-GCM encryption key (the default).
    #[default]
    SymmetricDefault,
    /// 2048-bit RSA key pair.
    Rsa2048,
    /// 3072-bit RSA key pair.
    Rsa3072,
    /// 4096-bit RSA key pair.
    Rsa4096,
    /// NIST P-256 elliptic curve key pair.
    EccNistP256,
    /// NIST P-384 elliptic curve key pair.
    EccNistP384,
    /// NIST P-521 elliptic curve key pair.
    EccNistP521,
    /// secp256k1 elliptic curve key pair.
    EccSecgP256K1,
    /// SM2 key pair (China regions).
    Sm2,
    /// 224-bit HMAC key.
    Hmac224,
    /// 256-bit HMAC key.
    Hmac256,
    /// 384-bit HMAC key.
    Hmac384,
    /// 512-bit HMAC key.
    Hmac512,
    /// An unknown key spec received from the client.
    Unknown(String),
}

impl KeySpec {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SymmetricDefault => "SYMMETRIC_DEFAULT",
            Self::Rsa2048 => "RSA_2048",
            Self::Rsa3072 => "RSA_3072",
            Self::Rsa4096 => "RSA_4096",
            Self::EccNistP256 => "ECC_NIST_P256",
            Self::EccNistP384 => "ECC_NIST_P384",
            Self::EccNistP521 => "ECC_NIST_P521",
            Self::EccSecgP256K1 => "ECC_SECG_P256K1",
            Self::Sm2 => "SM2",
            Self::Hmac224 => "HMAC_224",
            Self::Hmac256 => "HMAC_256",
            Self::Hmac384 => "HMAC_384",
            Self::Hmac512 => "HMAC_512",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for KeySpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KeySpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "SYMMETRIC_DEFAULT" => Self::SymmetricDefault,
            "RSA_2048" => Self::Rsa2048,
            "RSA_3072" => Self::Rsa3072,
            "RSA_4096" => Self::Rsa4096,
            "ECC_NIST_P256" => Self::EccNistP256,
            "ECC_NIST_P384" => Self::EccNistP384,
            "ECC_NIST_P521" => Self::EccNistP521,
            "ECC_SECG_P256K1" => Self::EccSecgP256K1,
            "SM2" => Self::Sm2,
            "HMAC_224" => Self::Hmac224,
            "HMAC_256" => Self::Hmac256,
            "HMAC_384" => Self::Hmac384,
            "HMAC_512" => Self::Hmac512,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a KMS key may be used for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeyUsageType {
    /// Signing and signature verification (asymmetric keys).
    SignVerify,
    /// Encryption and decryption (the default).
    #[default]
    EncryptDecrypt,
    /// HMAC generation and verification.
    GenerateVerifyMac,
    /// Shared-secret derivation via key agreement.
    KeyAgreement,
    /// An unknown usage value received from the client.
    Unknown(String),
}

impl KeyUsageType {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SignVerify => "SIGN_VERIFY",
            Self::EncryptDecrypt => "ENCRYPT_DECRYPT",
            Self::GenerateVerifyMac => "GENERATE_VERIFY_MAC",
            Self::KeyAgreement => "KEY_AGREEMENT",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for KeyUsageType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KeyUsageType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "SIGN_VERIFY" => Self::SignVerify,
            "ENCRYPT_DECRYPT" => Self::EncryptDecrypt,
            "GENERATE_VERIFY_MAC" => Self::GenerateVerifyMac,
            "KEY_AGREEMENT" => Self::KeyAgreement,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for KeyUsageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the key material of a KMS key originates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OriginType {
    /// Key material generated by KMS (the default).
    #[default]
    AwsKms,
    /// Key material imported by the caller.
    External,
    /// Key material created in an associated CloudHSM cluster.
    AwsCloudHsm,
    /// Key material held in an external key store.
    ExternalKeyStore,
    /// An unknown origin value received from the client.
    Unknown(String),
}

impl OriginType {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AwsKms => "AWS_KMS",
            Self::External => "EXTERNAL",
            Self::AwsCloudHsm => "AWS_CLOUDHSM",
            Self::ExternalKeyStore => "EXTERNAL_KEY_STORE",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for OriginType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for OriginType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "AWS_KMS" => Self::AwsKms,
            "EXTERNAL" => Self::External,
            "AWS_CLOUDHSM" => Self::AwsCloudHsm,
            "EXTERNAL_KEY_STORE" => Self::ExternalKeyStore,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for OriginType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current state of a KMS key.
///
/// Unlike most KMS enums, key states use `PascalCase` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyState {
    /// The key is being created.
    Creating,
    /// The key is enabled and usable.
    Enabled,
    /// The key is disabled.
    Disabled,
    /// The key is scheduled for deletion.
    PendingDeletion,
    /// The key is awaiting imported key material.
    PendingImport,
    /// The replica key is scheduled for deletion.
    PendingReplicaDeletion,
    /// The key's backing store is unreachable.
    Unavailable,
    /// The primary region of the key is being changed.
    Updating,
}

impl KeyState {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creating => "Creating",
            Self::Enabled => "Enabled",
            Self::Disabled => "Disabled",
            Self::PendingDeletion => "PendingDeletion",
            Self::PendingImport => "PendingImport",
            Self::PendingReplicaDeletion => "PendingReplicaDeletion",
            Self::Unavailable => "Unavailable",
            Self::Updating => "Updating",
        }
    }
}

impl fmt::Display for KeyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who manages a KMS key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyManagerType {
    /// An AWS-managed key.
    #[serde(rename = "AWS")]
    Aws,
    /// A customer-managed key.
    #[serde(rename = "CUSTOMER")]
    Customer,
}

impl KeyManagerType {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aws => "AWS",
            Self::Customer => "CUSTOMER",
        }
    }
}

impl fmt::Display for KeyManagerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Algorithm enums
// ---------------------------------------------------------------------------

/// Encryption algorithms usable with Encrypt/Decrypt/ReEncrypt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum EncryptionAlgorithmSpec {
    /// AES-256-GCM for symmetric keys (the default).
    #[default]
    SymmetricDefault,
    /// RSAES-OAEP with SHA-1.
    RsaesOaepSha1,
    /// RSAES-OAEP with SHA-256.
    RsaesOaepSha256,
    /// SM2PKE (China regions).
    Sm2Pke,
    /// An unknown algorithm value received from the client.
    Unknown(String),
}

impl EncryptionAlgorithmSpec {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::SymmetricDefault => "SYMMETRIC_DEFAULT",
            Self::RsaesOaepSha1 => "RSAES_OAEP_SHA_1",
            Self::RsaesOaepSha256 => "RSAES_OAEP_SHA_256",
            Self::Sm2Pke => "SM2PKE",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for EncryptionAlgorithmSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for EncryptionAlgorithmSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "SYMMETRIC_DEFAULT" => Self::SymmetricDefault,
            "RSAES_OAEP_SHA_1" => Self::RsaesOaepSha1,
            "RSAES_OAEP_SHA_256" => Self::RsaesOaepSha256,
            "SM2PKE" => Self::Sm2Pke,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for EncryptionAlgorithmSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Signing algorithms usable with Sign/Verify.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SigningAlgorithmSpec {
    /// RSASSA-PSS with SHA-256.
    RsassaPssSha256,
    /// RSASSA-PSS with SHA-384.
    RsassaPssSha384,
    /// RSASSA-PSS with SHA-512.
    RsassaPssSha512,
    /// RSASSA-PKCS1-v1_5 with SHA-256.
    RsassaPkcs1V15Sha256,
    /// RSASSA-PKCS1-v1_5 with SHA-384.
    RsassaPkcs1V15Sha384,
    /// RSASSA-PKCS1-v1_5 with SHA-512.
    RsassaPkcs1V15Sha512,
    /// ECDSA with SHA-256.
    EcdsaSha256,
    /// ECDSA with SHA-384.
    EcdsaSha384,
    /// ECDSA with SHA-512.
    EcdsaSha512,
    /// SM2DSA (China regions).
    Sm2Dsa,
    /// An unknown algorithm value received from the client.
    Unknown(String),
}

impl SigningAlgorithmSpec {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::RsassaPssSha256 => "RSASSA_PSS_SHA_256",
            Self::RsassaPssSha384 => "RSASSA_PSS_SHA_384",
            Self::RsassaPssSha512 => "RSASSA_PSS_SHA_512",
            Self::RsassaPkcs1V15Sha256 => "RSASSA_PKCS1_V1_5_SHA_256",
            Self::RsassaPkcs1V15Sha384 => "RSASSA_PKCS1_V1_5_SHA_384",
            Self::RsassaPkcs1V15Sha512 => "RSASSA_PKCS1_V1_5_SHA_512",
            Self::EcdsaSha256 => "ECDSA_SHA_256",
            Self::EcdsaSha384 => "ECDSA_SHA_384",
            Self::EcdsaSha512 => "ECDSA_SHA_512",
            Self::Sm2Dsa => "SM2DSA",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for SigningAlgorithmSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SigningAlgorithmSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "RSASSA_PSS_SHA_256" => Self::RsassaPssSha256,
            "RSASSA_PSS_SHA_384" => Self::RsassaPssSha384,
            "RSASSA_PSS_SHA_512" => Self::RsassaPssSha512,
            "RSASSA_PKCS1_V1_5_SHA_256" => Self::RsassaPkcs1V15Sha256,
            "RSASSA_PKCS1_V1_5_SHA_384" => Self::RsassaPkcs1V15Sha384,
            "RSASSA_PKCS1_V1_5_SHA_512" => Self::RsassaPkcs1V15Sha512,
            "ECDSA_SHA_256" => Self::EcdsaSha256,
            "ECDSA_SHA_384" => Self::EcdsaSha384,
            "ECDSA_SHA_512" => Self::EcdsaSha512,
            "SM2DSA" => Self::Sm2Dsa,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for SigningAlgorithmSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HMAC algorithms usable with GenerateMac/VerifyMac.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum MacAlgorithmSpec {
    /// HMAC with SHA-224.
    HmacSha224,
    /// HMAC with SHA-256.
    HmacSha256,
    /// HMAC with SHA-384.
    HmacSha384,
    /// HMAC with SHA-512.
    HmacSha512,
    /// An unknown algorithm value received from the client.
    Unknown(String),
}

impl MacAlgorithmSpec {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::HmacSha224 => "HMAC_SHA_224",
            Self::HmacSha256 => "HMAC_SHA_256",
            Self::HmacSha384 => "HMAC_SHA_384",
            Self::HmacSha512 => "HMAC_SHA_512",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for MacAlgorithmSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MacAlgorithmSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "HMAC_SHA_224" => Self::HmacSha224,
            "HMAC_SHA_256" => Self::HmacSha256,
            "HMAC_SHA_384" => Self::HmacSha384,
            "HMAC_SHA_512" => Self::HmacSha512,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for MacAlgorithmSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Key agreement algorithms usable with DeriveSharedSecret.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeyAgreementAlgorithmSpec {
    /// Elliptic Curve Diffie-Hellman.
    Ecdh,
    /// An unknown algorithm value received from the client.
    Unknown(String),
}

impl KeyAgreementAlgorithmSpec {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ecdh => "ECDH",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for KeyAgreementAlgorithmSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KeyAgreementAlgorithmSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "ECDH" => Self::Ecdh,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for KeyAgreementAlgorithmSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a message passed to Sign/Verify is raw or a precomputed digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum MessageType {
    /// The full message; KMS hashes it (the default).
    #[default]
    Raw,
    /// A precomputed digest of the message.
    Digest,
    /// An unknown message type received from the client.
    Unknown(String),
}

impl MessageType {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Raw => "RAW",
            Self::Digest => "DIGEST",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for MessageType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for MessageType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "RAW" => Self::Raw,
            "DIGEST" => Self::Digest,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Length of a symmetric data key requested from GenerateDataKey.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DataKeySpec {
    /// 256-bit AES key (the default).
    #[default]
    Aes256,
    /// 128-bit AES key.
    Aes128,
    /// An unknown spec value received from the client.
    Unknown(String),
}

impl DataKeySpec {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Aes256 => "AES_256",
            Self::Aes128 => "AES_128",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for DataKeySpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DataKeySpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "AES_256" => Self::Aes256,
            "AES_128" => Self::Aes128,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for DataKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asymmetric key pair type requested from GenerateDataKeyPair.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DataKeyPairSpec {
    /// 2048-bit RSA key pair.
    Rsa2048,
    /// 3072-bit RSA key pair.
    Rsa3072,
    /// 4096-bit RSA key pair.
    Rsa4096,
    /// NIST P-256 elliptic curve key pair.
    EccNistP256,
    /// NIST P-384 elliptic curve key pair.
    EccNistP384,
    /// NIST P-521 elliptic curve key pair.
    EccNistP521,
    /// secp256k1 elliptic curve key pair.
    EccSecgP256K1,
    /// SM2 key pair (China regions).
    Sm2,
    /// An unknown spec value received from the client.
    Unknown(String),
}

impl DataKeyPairSpec {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rsa2048 => "RSA_2048",
            Self::Rsa3072 => "RSA_3072",
            Self::Rsa4096 => "RSA_4096",
            Self::EccNistP256 => "ECC_NIST_P256",
            Self::EccNistP384 => "ECC_NIST_P384",
            Self::EccNistP521 => "ECC_NIST_P521",
            Self::EccSecgP256K1 => "ECC_SECG_P256K1",
            Self::Sm2 => "SM2",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for DataKeyPairSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DataKeyPairSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "RSA_2048" => Self::Rsa2048,
            "RSA_3072" => Self::Rsa3072,
            "RSA_4096" => Self::Rsa4096,
            "ECC_NIST_P256" => Self::EccNistP256,
            "ECC_NIST_P384" => Self::EccNistP384,
            "ECC_NIST_P521" => Self::EccNistP521,
            "ECC_SECG_P256K1" => Self::EccSecgP256K1,
            "SM2" => Self::Sm2,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for DataKeyPairSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Key material import
// ---------------------------------------------------------------------------

/// Wrapping algorithm for importing key material.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlgorithmSpec {
    /// RSAES-PKCS1-v1_5 wrapping (deprecated by the service).
    RsaesPkcs1V15,
    /// RSAES-OAEP with SHA-1.
    RsaesOaepSha1,
    /// RSAES-OAEP with SHA-256.
    RsaesOaepSha256,
    /// Two-step RSA + AES key wrap with SHA-1.
    RsaAesKeyWrapSha1,
    /// Two-step RSA + AES key wrap with SHA-256.
    RsaAesKeyWrapSha256,
    /// SM2PKE wrapping (China regions).
    Sm2Pke,
    /// An unknown algorithm value received from the client.
    Unknown(String),
}

impl AlgorithmSpec {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::RsaesPkcs1V15 => "RSAES_PKCS1_V1_5",
            Self::RsaesOaepSha1 => "RSAES_OAEP_SHA_1",
            Self::RsaesOaepSha256 => "RSAES_OAEP_SHA_256",
            Self::RsaAesKeyWrapSha1 => "RSA_AES_KEY_WRAP_SHA_1",
            Self::RsaAesKeyWrapSha256 => "RSA_AES_KEY_WRAP_SHA_256",
            Self::Sm2Pke => "SM2PKE",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for AlgorithmSpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AlgorithmSpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "RSAES_PKCS1_V1_5" => Self::RsaesPkcs1V15,
            "RSAES_OAEP_SHA_1" => Self::RsaesOaepSha1,
            "RSAES_OAEP_SHA_256" => Self::RsaesOaepSha256,
            "RSA_AES_KEY_WRAP_SHA_1" => Self::RsaAesKeyWrapSha1,
            "RSA_AES_KEY_WRAP_SHA_256" => Self::RsaAesKeyWrapSha256,
            "SM2PKE" => Self::Sm2Pke,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for AlgorithmSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spec of the wrapping key returned by GetParametersForImport.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum WrappingKeySpec {
    /// 2048-bit RSA wrapping key.
    Rsa2048,
    /// 3072-bit RSA wrapping key.
    Rsa3072,
    /// 4096-bit RSA wrapping key.
    Rsa4096,
    /// SM2 wrapping key (China regions).
    Sm2,
    /// An unknown spec value received from the client.
    Unknown(String),
}

impl WrappingKeySpec {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rsa2048 => "RSA_2048",
            Self::Rsa3072 => "RSA_3072",
            Self::Rsa4096 => "RSA_4096",
            Self::Sm2 => "SM2",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for WrappingKeySpec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WrappingKeySpec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "RSA_2048" => Self::Rsa2048,
            "RSA_3072" => Self::Rsa3072,
            "RSA_4096" => Self::Rsa4096,
            "SM2" => Self::Sm2,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for WrappingKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether imported key material expires.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExpirationModelType {
    /// The key material expires at `ValidTo` (the default).
    #[default]
    #[serde(rename = "KEY_MATERIAL_EXPIRES")]
    KeyMaterialExpires,
    /// The key material never expires.
    #[serde(rename = "KEY_MATERIAL_DOES_NOT_EXPIRE")]
    KeyMaterialDoesNotExpire,
}

impl ExpirationModelType {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::KeyMaterialExpires => "KEY_MATERIAL_EXPIRES",
            Self::KeyMaterialDoesNotExpire => "KEY_MATERIAL_DOES_NOT_EXPIRE",
        }
    }
}

impl fmt::Display for ExpirationModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Grants
// ---------------------------------------------------------------------------

/// Operations a grant may permit.
///
/// Wire values are the `PascalCase` operation names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GrantOperation {
    /// Permit Decrypt.
    Decrypt,
    /// Permit Encrypt.
    Encrypt,
    /// Permit GenerateDataKey.
    GenerateDataKey,
    /// Permit GenerateDataKeyWithoutPlaintext.
    GenerateDataKeyWithoutPlaintext,
    /// Permit GenerateDataKeyPair.
    GenerateDataKeyPair,
    /// Permit GenerateDataKeyPairWithoutPlaintext.
    GenerateDataKeyPairWithoutPlaintext,
    /// Permit ReEncrypt when the key is the source.
    ReEncryptFrom,
    /// Permit ReEncrypt when the key is the destination.
    ReEncryptTo,
    /// Permit Sign.
    Sign,
    /// Permit Verify.
    Verify,
    /// Permit GetPublicKey.
    GetPublicKey,
    /// Permit CreateGrant.
    CreateGrant,
    /// Permit RetireGrant.
    RetireGrant,
    /// Permit DescribeKey.
    DescribeKey,
    /// Permit GenerateMac.
    GenerateMac,
    /// Permit VerifyMac.
    VerifyMac,
    /// Permit DeriveSharedSecret.
    DeriveSharedSecret,
    /// An unknown operation value received from the client.
    Unknown(String),
}

impl GrantOperation {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Decrypt => "Decrypt",
            Self::Encrypt => "Encrypt",
            Self::GenerateDataKey => "GenerateDataKey",
            Self::GenerateDataKeyWithoutPlaintext => "GenerateDataKeyWithoutPlaintext",
            Self::GenerateDataKeyPair => "GenerateDataKeyPair",
            Self::GenerateDataKeyPairWithoutPlaintext => "GenerateDataKeyPairWithoutPlaintext",
            Self::ReEncryptFrom => "ReEncryptFrom",
            Self::ReEncryptTo => "ReEncryptTo",
            Self::Sign => "Sign",
            Self::Verify => "Verify",
            Self::GetPublicKey => "GetPublicKey",
            Self::CreateGrant => "CreateGrant",
            Self::RetireGrant => "RetireGrant",
            Self::DescribeKey => "DescribeKey",
            Self::GenerateMac => "GenerateMac",
            Self::VerifyMac => "VerifyMac",
            Self::DeriveSharedSecret => "DeriveSharedSecret",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for GrantOperation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for GrantOperation {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "Decrypt" => Self::Decrypt,
            "Encrypt" => Self::Encrypt,
            "GenerateDataKey" => Self::GenerateDataKey,
            "GenerateDataKeyWithoutPlaintext" => Self::GenerateDataKeyWithoutPlaintext,
            "GenerateDataKeyPair" => Self::GenerateDataKeyPair,
            "GenerateDataKeyPairWithoutPlaintext" => Self::GenerateDataKeyPairWithoutPlaintext,
            "ReEncryptFrom" => Self::ReEncryptFrom,
            "ReEncryptTo" => Self::ReEncryptTo,
            "Sign" => Self::Sign,
            "Verify" => Self::Verify,
            "GetPublicKey" => Self::GetPublicKey,
            "CreateGrant" => Self::CreateGrant,
            "RetireGrant" => Self::RetireGrant,
            "DescribeKey" => Self::DescribeKey,
            "GenerateMac" => Self::GenerateMac,
            "VerifyMac" => Self::VerifyMac,
            "DeriveSharedSecret" => Self::DeriveSharedSecret,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for GrantOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Custom key stores
// ---------------------------------------------------------------------------

/// Backing store kind of a custom key store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CustomKeyStoreType {
    /// Backed by an associated CloudHSM cluster (the default).
    #[default]
    AwsCloudHsm,
    /// Backed by an external key manager behind an XKS proxy.
    ExternalKeyStore,
    /// An unknown type value received from the client.
    Unknown(String),
}

impl CustomKeyStoreType {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AwsCloudHsm => "AWS_CLOUDHSM",
            Self::ExternalKeyStore => "EXTERNAL_KEY_STORE",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for CustomKeyStoreType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CustomKeyStoreType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "AWS_CLOUDHSM" => Self::AwsCloudHsm,
            "EXTERNAL_KEY_STORE" => Self::ExternalKeyStore,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for CustomKeyStoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How KMS reaches an external key store proxy.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum XksProxyConnectivityType {
    /// Over the public internet (the default).
    #[default]
    PublicEndpoint,
    /// Through a VPC endpoint service.
    VpcEndpointService,
    /// An unknown connectivity value received from the client.
    Unknown(String),
}

impl XksProxyConnectivityType {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::PublicEndpoint => "PUBLIC_ENDPOINT",
            Self::VpcEndpointService => "VPC_ENDPOINT_SERVICE",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for XksProxyConnectivityType {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for XksProxyConnectivityType {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "PUBLIC_ENDPOINT" => Self::PublicEndpoint,
            "VPC_ENDPOINT_SERVICE" => Self::VpcEndpointService,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for XksProxyConnectivityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Connection state of a custom key store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionStateType {
    /// Connected to the backing store.
    #[serde(rename = "CONNECTED")]
    Connected,
    /// A connection attempt is in progress.
    #[serde(rename = "CONNECTING")]
    Connecting,
    /// The last connection attempt failed.
    #[serde(rename = "FAILED")]
    Failed,
    /// Not connected.
    #[serde(rename = "DISCONNECTED")]
    Disconnected,
    /// A disconnect is in progress.
    #[serde(rename = "DISCONNECTING")]
    Disconnecting,
}

impl ConnectionStateType {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Connected => "CONNECTED",
            Self::Connecting => "CONNECTING",
            Self::Failed => "FAILED",
            Self::Disconnected => "DISCONNECTED",
            Self::Disconnecting => "DISCONNECTING",
        }
    }
}

impl fmt::Display for ConnectionStateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why the last custom key store connection attempt failed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionErrorCodeType {
    /// The `kmsuser` credentials were rejected by the cluster.
    #[serde(rename = "INVALID_CREDENTIALS")]
    InvalidCredentials,
    /// The CloudHSM cluster no longer exists.
    #[serde(rename = "CLUSTER_NOT_FOUND")]
    ClusterNotFound,
    /// Network errors prevented the connection.
    #[serde(rename = "NETWORK_ERRORS")]
    NetworkErrors,
    /// An internal error occurred.
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
    /// The cluster has too few active HSMs.
    #[serde(rename = "INSUFFICIENT_CLOUDHSM_HSMS")]
    InsufficientCloudHsmHsms,
    /// The `kmsuser` account is locked out.
    #[serde(rename = "USER_LOCKED_OUT")]
    UserLockedOut,
    /// The `kmsuser` account does not exist.
    #[serde(rename = "USER_NOT_FOUND")]
    UserNotFound,
    /// The `kmsuser` account is logged in elsewhere.
    #[serde(rename = "USER_LOGGED_IN")]
    UserLoggedIn,
    /// The configured subnet no longer exists.
    #[serde(rename = "SUBNET_NOT_FOUND")]
    SubnetNotFound,
    /// The subnet has no free IP addresses.
    #[serde(rename = "INSUFFICIENT_FREE_ADDRESSES_IN_SUBNET")]
    InsufficientFreeAddressesInSubnet,
    /// The XKS proxy denied access.
    #[serde(rename = "XKS_PROXY_ACCESS_DENIED")]
    XksProxyAccessDenied,
    /// The XKS proxy endpoint is unreachable.
    #[serde(rename = "XKS_PROXY_NOT_REACHABLE")]
    XksProxyNotReachable,
    /// The VPC endpoint service was not found.
    #[serde(rename = "XKS_VPC_ENDPOINT_SERVICE_NOT_FOUND")]
    XksVpcEndpointServiceNotFound,
    /// The XKS proxy returned an invalid response.
    #[serde(rename = "XKS_PROXY_INVALID_RESPONSE")]
    XksProxyInvalidResponse,
    /// The XKS proxy configuration is invalid.
    #[serde(rename = "XKS_PROXY_INVALID_CONFIGURATION")]
    XksProxyInvalidConfiguration,
    /// The VPC endpoint service configuration is invalid.
    #[serde(rename = "XKS_VPC_ENDPOINT_SERVICE_INVALID_CONFIGURATION")]
    XksVpcEndpointServiceInvalidConfiguration,
    /// The XKS proxy timed out.
    #[serde(rename = "XKS_PROXY_TIMED_OUT")]
    XksProxyTimedOut,
    /// The XKS proxy TLS configuration is invalid.
    #[serde(rename = "XKS_PROXY_INVALID_TLS_CONFIGURATION")]
    XksProxyInvalidTlsConfiguration,
}

impl ConnectionErrorCodeType {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::ClusterNotFound => "CLUSTER_NOT_FOUND",
            Self::NetworkErrors => "NETWORK_ERRORS",
            Self::InternalError => "INTERNAL_ERROR",
            Self::InsufficientCloudHsmHsms => "INSUFFICIENT_CLOUDHSM_HSMS",
            Self::UserLockedOut => "USER_LOCKED_OUT",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserLoggedIn => "USER_LOGGED_IN",
            Self::SubnetNotFound => "SUBNET_NOT_FOUND",
            Self::InsufficientFreeAddressesInSubnet => "INSUFFICIENT_FREE_ADDRESSES_IN_SUBNET",
            Self::XksProxyAccessDenied => "XKS_PROXY_ACCESS_DENIED",
            Self::XksProxyNotReachable => "XKS_PROXY_NOT_REACHABLE",
            Self::XksVpcEndpointServiceNotFound => "XKS_VPC_ENDPOINT_SERVICE_NOT_FOUND",
            Self::XksProxyInvalidResponse => "XKS_PROXY_INVALID_RESPONSE",
            Self::XksProxyInvalidConfiguration => "XKS_PROXY_INVALID_CONFIGURATION",
            Self::XksVpcEndpointServiceInvalidConfiguration => {
                "XKS_VPC_ENDPOINT_SERVICE_INVALID_CONFIGURATION"
            }
            Self::XksProxyTimedOut => "XKS_PROXY_TIMED_OUT",
            Self::XksProxyInvalidTlsConfiguration => "XKS_PROXY_INVALID_TLS_CONFIGURATION",
        }
    }
}

impl fmt::Display for ConnectionErrorCodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a recipient attestation document's data key is protected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum KeyEncryptionMechanism {
    /// RSAES-OAEP with SHA-256 (the only supported mechanism).
    #[default]
    RsaesOaepSha256,
    /// An unknown mechanism value received from the client.
    Unknown(String),
}

impl KeyEncryptionMechanism {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::RsaesOaepSha256 => "RSAES_OAEP_SHA_256",
            Self::Unknown(s) => s.as_str(),
        }
    }
}

impl Serialize for KeyEncryptionMechanism {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for KeyEncryptionMechanism {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(match s.as_str() {
            "RSAES_OAEP_SHA_256" => Self::RsaesOaepSha256,
            _ => Self::Unknown(s),
        })
    }
}

impl fmt::Display for KeyEncryptionMechanism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Multi-region and rotation
// ---------------------------------------------------------------------------

/// Whether a multi-region key is the primary or a replica.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MultiRegionKeyType {
    /// The primary key.
    #[serde(rename = "PRIMARY")]
    Primary,
    /// A replica key.
    #[serde(rename = "REPLICA")]
    Replica,
}

impl MultiRegionKeyType {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => "PRIMARY",
            Self::Replica => "REPLICA",
        }
    }
}

impl fmt::Display for MultiRegionKeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a rotation was scheduled or requested on demand.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RotationType {
    /// Scheduled automatic rotation.
    #[serde(rename = "AUTOMATIC")]
    Automatic,
    /// On-demand rotation.
    #[serde(rename = "ON_DEMAND")]
    OnDemand,
}

impl RotationType {
    /// Returns the KMS wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automatic => "AUTOMATIC",
            Self::OnDemand => "ON_DEMAND",
        }
    }
}

impl fmt::Display for RotationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Descriptor structs
// ---------------------------------------------------------------------------

/// A key/value tag on a KMS key.
///
/// Tag keys and values may each be 1--128 / 0--256 characters and must not
/// begin with `aws:`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Tag {
    /// The tag key.
    pub tag_key: String,
    /// The tag value.
    pub tag_value: String,
}

/// Metadata describing a KMS key.
///
/// Returned by `CreateKey`, `DescribeKey`, and `ReplicateKey`. This is a
/// read-only snapshot; the service is the only writer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyMetadata {
    /// The AWS account that owns the key.
    #[serde(rename = "AWSAccountId", skip_serializing_if = "Option::is_none")]
    pub aws_account_id: Option<String>,

    /// The globally unique identifier for the key.
    pub key_id: String,

    /// The Amazon Resource Name of the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    /// When the key was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,

    /// Whether the key is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// The description of the key (0--8192 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The cryptographic operations the key supports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<KeyUsageType>,

    /// The current state of the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_state: Option<KeyState>,

    /// When the key will be deleted, if deletion is pending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_date: Option<Timestamp>,

    /// When imported key material expires, if applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<Timestamp>,

    /// The source of the key material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginType>,

    /// The custom key store holding the key, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_id: Option<String>,

    /// The CloudHSM cluster backing the key, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_hsm_cluster_id: Option<String>,

    /// Whether imported key material expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_model: Option<ExpirationModelType>,

    /// Whether the key is AWS-managed or customer-managed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_manager: Option<KeyManagerType>,

    /// The cryptographic configuration of the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<KeySpec>,

    /// Encryption algorithms the key supports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub encryption_algorithms: Vec<EncryptionAlgorithmSpec>,

    /// Signing algorithms the key supports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signing_algorithms: Vec<SigningAlgorithmSpec>,

    /// Key agreement algorithms the key supports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_agreement_algorithms: Vec<KeyAgreementAlgorithmSpec>,

    /// MAC algorithms the key supports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub mac_algorithms: Vec<MacAlgorithmSpec>,

    /// Whether this is a multi-region key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_region: Option<bool>,

    /// Primary/replica topology for a multi-region key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_region_configuration: Option<MultiRegionConfiguration>,

    /// Remaining waiting period for a replica pending deletion.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_deletion_window_in_days: Option<i32>,

    /// The external key backing this key, for external key store keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_key_configuration: Option<XksKeyConfigurationType>,
}

/// Primary/replica topology of a multi-region key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiRegionConfiguration {
    /// Whether this key is the primary or a replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_region_key_type: Option<MultiRegionKeyType>,

    /// The primary key descriptor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<MultiRegionKey>,

    /// Replica key descriptors.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replica_keys: Vec<MultiRegionKey>,
}

/// ARN and region of one key in a multi-region key set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MultiRegionKey {
    /// The key ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arn: Option<String>,

    /// The region holding the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

/// The external key association of an external key store key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XksKeyConfigurationType {
    /// The id of the external key on the XKS proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Grant constraints limiting the encryption contexts a grant permits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GrantConstraints {
    /// The request's encryption context must contain these pairs.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub encryption_context_subset: HashMap<String, String>,

    /// The request's encryption context must equal these pairs exactly.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub encryption_context_equals: HashMap<String, String>,
}

/// One grant in a `ListGrants` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GrantListEntry {
    /// The key the grant applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The unique grant id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,

    /// The friendly name, if one was assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// When the grant was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,

    /// The principal that receives the grant's permissions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grantee_principal: Option<String>,

    /// The principal that can retire the grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retiring_principal: Option<String>,

    /// The account under which the grant was issued.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuing_account: Option<String>,

    /// The operations the grant permits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<GrantOperation>,

    /// Encryption context constraints on the grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<GrantConstraints>,
}

/// One alias in a `ListAliases` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AliasListEntry {
    /// The alias name (always begins with `alias/`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_name: Option<String>,

    /// The alias ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alias_arn: Option<String>,

    /// The key the alias points to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_key_id: Option<String>,

    /// When the alias was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,

    /// When the alias was last moved to a different key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<Timestamp>,
}

/// One key in a `ListKeys` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyListEntry {
    /// The key id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The key ARN.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_arn: Option<String>,
}

/// One completed rotation in a `ListKeyRotations` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RotationsListEntry {
    /// The rotated key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// When the rotation completed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_date: Option<Timestamp>,

    /// Whether the rotation was automatic or on-demand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_type: Option<RotationType>,
}

/// One custom key store in a `DescribeCustomKeyStores` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomKeyStoresListEntry {
    /// The unique id of the custom key store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_id: Option<String>,

    /// The user-chosen name of the custom key store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_name: Option<String>,

    /// The associated CloudHSM cluster, for CloudHSM key stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_hsm_cluster_id: Option<String>,

    /// The trust anchor certificate of the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_anchor_certificate: Option<String>,

    /// Whether the key store is connected to its backing store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_state: Option<ConnectionStateType>,

    /// Why the last connection attempt failed, if it failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_error_code: Option<ConnectionErrorCodeType>,

    /// When the key store was created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<Timestamp>,

    /// Whether the store is CloudHSM-backed or external.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_type: Option<CustomKeyStoreType>,

    /// XKS proxy settings, for external key stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_proxy_configuration: Option<XksProxyConfigurationType>,
}

/// XKS proxy settings reported for an external key store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XksProxyConfigurationType {
    /// How KMS reaches the proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connectivity: Option<XksProxyConnectivityType>,

    /// The access key id part of the proxy credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_key_id: Option<String>,

    /// The proxy endpoint URI (must begin with `https://`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_endpoint: Option<String>,

    /// The proxy base path (must match `/.../kms/xks/v1`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri_path: Option<String>,

    /// The VPC endpoint service name, for VPC connectivity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vpc_endpoint_service_name: Option<String>,
}

/// SigV4 credential KMS uses to authenticate to an XKS proxy.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct XksProxyAuthenticationCredentialType {
    /// The access key id (20--30 uppercase letters and digits).
    pub access_key_id: String,

    /// The secret access key (43--64 characters).
    pub raw_secret_access_key: String,
}

// The secret must not leak through Debug output.
impl fmt::Debug for XksProxyAuthenticationCredentialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XksProxyAuthenticationCredentialType")
            .field("access_key_id", &self.access_key_id)
            .field("raw_secret_access_key", &"<redacted>")
            .finish()
    }
}

/// Nitro enclave recipient of plaintext outputs.
///
/// When present on Decrypt/GenerateDataKey-style requests, the plaintext is
/// returned encrypted to the enclave's public key instead of in the clear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RecipientInfo {
    /// How the response data key is protected for the enclave.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_encryption_algorithm: Option<KeyEncryptionMechanism>,

    /// The signed attestation document of the enclave.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attestation_document: Option<Blob>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_key_spec_wire_strings() {
        assert_eq!(
            serde_json::to_string(&KeySpec::SymmetricDefault).unwrap(),
            r#""SYMMETRIC_DEFAULT""#
        );
        assert_eq!(
            serde_json::to_string(&KeySpec::EccSecgP256K1).unwrap(),
            r#""ECC_SECG_P256K1""#
        );
        assert_eq!(
            serde_json::to_string(&KeySpec::Hmac512).unwrap(),
            r#""HMAC_512""#
        );
    }

    #[test]
    fn test_should_preserve_unknown_key_spec() {
        let spec: KeySpec = serde_json::from_str(r#""PQC_MLDSA_65""#).unwrap();
        assert_eq!(spec, KeySpec::Unknown("PQC_MLDSA_65".to_owned()));
        assert_eq!(serde_json::to_string(&spec).unwrap(), r#""PQC_MLDSA_65""#);
    }

    #[test]
    fn test_should_match_display_and_serde_for_signing_algorithms() {
        let algs = [
            (SigningAlgorithmSpec::RsassaPssSha256, "RSASSA_PSS_SHA_256"),
            (
                SigningAlgorithmSpec::RsassaPkcs1V15Sha512,
                "RSASSA_PKCS1_V1_5_SHA_512",
            ),
            (SigningAlgorithmSpec::EcdsaSha256, "ECDSA_SHA_256"),
            (SigningAlgorithmSpec::Sm2Dsa, "SM2DSA"),
        ];
        for (alg, wire) in algs {
            assert_eq!(alg.to_string(), wire);
            assert_eq!(serde_json::to_string(&alg).unwrap(), format!("{wire:?}"));
        }
    }

    #[test]
    fn test_should_serialize_key_state_pascal_case() {
        assert_eq!(
            serde_json::to_string(&KeyState::PendingDeletion).unwrap(),
            r#""PendingDeletion""#
        );
        let state: KeyState = serde_json::from_str(r#""Enabled""#).unwrap();
        assert_eq!(state, KeyState::Enabled);
    }

    #[test]
    fn test_should_roundtrip_grant_operation_names() {
        let op: GrantOperation = serde_json::from_str(r#""ReEncryptFrom""#).unwrap();
        assert_eq!(op, GrantOperation::ReEncryptFrom);
        assert_eq!(serde_json::to_string(&op).unwrap(), r#""ReEncryptFrom""#);
    }

    #[test]
    fn test_should_default_enums_to_service_defaults() {
        assert_eq!(KeyUsageType::default(), KeyUsageType::EncryptDecrypt);
        assert_eq!(KeySpec::default(), KeySpec::SymmetricDefault);
        assert_eq!(MessageType::default(), MessageType::Raw);
        assert_eq!(DataKeySpec::default(), DataKeySpec::Aes256);
        assert_eq!(OriginType::default(), OriginType::AwsKms);
    }

    #[test]
    fn test_should_rename_aws_account_id_field() {
        let meta = KeyMetadata {
            aws_account_id: Some("111122223333".to_owned()),
            key_id: "1234abcd-12ab-34cd-56ef-1234567890ab".to_owned(),
            ..Default::default()
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert!(json.contains(r#""AWSAccountId":"111122223333""#));
        assert!(json.contains(r#""KeyId":"1234abcd-12ab-34cd-56ef-1234567890ab""#));
    }

    #[test]
    fn test_should_skip_absent_key_metadata_fields() {
        let meta = KeyMetadata {
            key_id: "k".to_owned(),
            ..Default::default()
        };
        let json = serde_json::to_string(&meta).unwrap();
        assert_eq!(json, r#"{"KeyId":"k"}"#);
    }

    #[test]
    fn test_should_roundtrip_key_metadata() {
        let meta = KeyMetadata {
            key_id: "mrk-1234".to_owned(),
            enabled: Some(true),
            key_state: Some(KeyState::Enabled),
            key_spec: Some(KeySpec::EccNistP256),
            key_usage: Some(KeyUsageType::SignVerify),
            signing_algorithms: vec![
                SigningAlgorithmSpec::EcdsaSha256,
                SigningAlgorithmSpec::EcdsaSha384,
            ],
            multi_region: Some(true),
            multi_region_configuration: Some(MultiRegionConfiguration {
                multi_region_key_type: Some(MultiRegionKeyType::Primary),
                primary_key: Some(MultiRegionKey {
                    arn: Some("arn:aws:kms:us-east-1:111122223333:key/mrk-1234".to_owned()),
                    region: Some("us-east-1".to_owned()),
                }),
                replica_keys: vec![MultiRegionKey {
                    arn: Some("arn:aws:kms:eu-west-1:111122223333:key/mrk-1234".to_owned()),
                    region: Some("eu-west-1".to_owned()),
                }],
            }),
            ..Default::default()
        };
        let json = serde_json::to_string(&meta).unwrap();
        let parsed: KeyMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(meta, parsed);
    }

    #[test]
    fn test_should_serialize_custom_key_store_entry() {
        let entry = CustomKeyStoresListEntry {
            custom_key_store_id: Some("cks-1234567890abcdef0".to_owned()),
            custom_key_store_name: Some("ExampleXksStore".to_owned()),
            connection_state: Some(ConnectionStateType::Failed),
            connection_error_code: Some(ConnectionErrorCodeType::XksProxyNotReachable),
            custom_key_store_type: Some(CustomKeyStoreType::ExternalKeyStore),
            xks_proxy_configuration: Some(XksProxyConfigurationType {
                connectivity: Some(XksProxyConnectivityType::PublicEndpoint),
                uri_endpoint: Some("https://xks.example.com:6443".to_owned()),
                uri_path: Some("/example/kms/xks/v1".to_owned()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains(r#""ConnectionState":"FAILED""#));
        assert!(json.contains(r#""ConnectionErrorCode":"XKS_PROXY_NOT_REACHABLE""#));
        assert!(json.contains(r#""CustomKeyStoreType":"EXTERNAL_KEY_STORE""#));
        assert!(!json.contains("CloudHsmClusterId"));
    }

    #[test]
    fn test_should_redact_proxy_credential_secret_in_debug() {
        let cred = XksProxyAuthenticationCredentialType {
            access_key_id: "ABCDEFGHIJKLMNOPQRST".to_owned(),
            raw_secret_access_key: "kkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkkk".to_owned(),
        };
        let debug = format!("{cred:?}");
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("kkkk"));
    }

    #[test]
    fn test_should_serialize_grant_constraints_maps() {
        let mut subset = HashMap::new();
        subset.insert("Department".to_owned(), "IT".to_owned());
        let constraints = GrantConstraints {
            encryption_context_subset: subset,
            encryption_context_equals: HashMap::new(),
        };
        let json = serde_json::to_string(&constraints).unwrap();
        assert_eq!(
            json,
            r#"{"EncryptionContextSubset":{"Department":"IT"}}"#
        );
    }
}
