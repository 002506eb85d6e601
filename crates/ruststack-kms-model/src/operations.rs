//! KMS operation enum.
//!
//! KMS dispatches on the `X-Amz-Target` header with the `TrentService.`
//! service prefix (e.g. `TrentService.Encrypt`).

use std::fmt;

/// The `X-Amz-Target` service prefix used by the KMS JSON protocol.
pub const TARGET_PREFIX: &str = "TrentService";

/// All supported KMS operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KmsOperation {
    // Key lifecycle
    /// Create a new KMS key.
    CreateKey,
    /// Describe a key and its metadata.
    DescribeKey,
    /// List keys in the account and region.
    ListKeys,
    /// Enable a disabled key.
    EnableKey,
    /// Disable an enabled key.
    DisableKey,
    /// Schedule deletion of a key after a waiting period.
    ScheduleKeyDeletion,
    /// Cancel a previously scheduled key deletion.
    CancelKeyDeletion,
    /// Change the description of a key.
    UpdateKeyDescription,

    // Tagging
    /// Add or overwrite tags on a key.
    TagResource,
    /// Remove tags from a key.
    UntagResource,
    /// List the tags on a key.
    ListResourceTags,

    // Aliases
    /// Create an alias for a key.
    CreateAlias,
    /// Delete an alias.
    DeleteAlias,
    /// Point an existing alias at a different key.
    UpdateAlias,
    /// List aliases.
    ListAliases,

    // Key policies
    /// Attach a key policy to a key.
    PutKeyPolicy,
    /// Get a key policy document.
    GetKeyPolicy,
    /// List the key policy names for a key.
    ListKeyPolicies,

    // Rotation
    /// Enable automatic key rotation.
    EnableKeyRotation,
    /// Disable automatic key rotation.
    DisableKeyRotation,
    /// Get the rotation status of a key.
    GetKeyRotationStatus,
    /// List completed rotations for a key.
    ListKeyRotations,
    /// Trigger an immediate on-demand rotation.
    RotateKeyOnDemand,

    // Grants
    /// Create a grant on a key.
    CreateGrant,
    /// List grants on a key.
    ListGrants,
    /// List grants a principal may retire.
    ListRetirableGrants,
    /// Retire a grant.
    RetireGrant,
    /// Revoke a grant.
    RevokeGrant,

    // Cryptographic operations
    /// Encrypt plaintext under a key.
    Encrypt,
    /// Decrypt ciphertext.
    Decrypt,
    /// Re-encrypt ciphertext under a different key or context.
    ReEncrypt,
    /// Generate a symmetric data key (ciphertext + plaintext).
    GenerateDataKey,
    /// Generate a symmetric data key (ciphertext only).
    GenerateDataKeyWithoutPlaintext,
    /// Generate an asymmetric data key pair (with plaintext private key).
    GenerateDataKeyPair,
    /// Generate an asymmetric data key pair (ciphertext private key only).
    GenerateDataKeyPairWithoutPlaintext,
    /// Generate cryptographically secure random bytes.
    GenerateRandom,
    /// Sign a message or digest.
    Sign,
    /// Verify a signature.
    Verify,
    /// Compute an HMAC.
    GenerateMac,
    /// Verify an HMAC.
    VerifyMac,
    /// Derive a shared secret via key agreement.
    DeriveSharedSecret,
    /// Download the public half of an asymmetric key.
    GetPublicKey,

    // Key material import
    /// Get the wrapping key and import token for key material import.
    GetParametersForImport,
    /// Import wrapped key material into a key.
    ImportKeyMaterial,
    /// Delete previously imported key material.
    DeleteImportedKeyMaterial,

    // Custom key stores
    /// Create a custom key store.
    CreateCustomKeyStore,
    /// Describe custom key stores.
    DescribeCustomKeyStores,
    /// Update custom key store settings.
    UpdateCustomKeyStore,
    /// Delete a custom key store.
    DeleteCustomKeyStore,
    /// Connect a custom key store to its backing store.
    ConnectCustomKeyStore,
    /// Disconnect a custom key store.
    DisconnectCustomKeyStore,

    // Multi-region
    /// Replicate a multi-region primary key into another region.
    ReplicateKey,
    /// Change which region holds the primary key.
    UpdatePrimaryRegion,
}

impl KmsOperation {
    /// Returns the AWS operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateKey => "CreateKey",
            Self::DescribeKey => "DescribeKey",
            Self::ListKeys => "ListKeys",
            Self::EnableKey => "EnableKey",
            Self::DisableKey => "DisableKey",
            Self::ScheduleKeyDeletion => "ScheduleKeyDeletion",
            Self::CancelKeyDeletion => "CancelKeyDeletion",
            Self::UpdateKeyDescription => "UpdateKeyDescription",
            Self::TagResource => "TagResource",
            Self::UntagResource => "UntagResource",
            Self::ListResourceTags => "ListResourceTags",
            Self::CreateAlias => "CreateAlias",
            Self::DeleteAlias => "DeleteAlias",
            Self::UpdateAlias => "UpdateAlias",
            Self::ListAliases => "ListAliases",
            Self::PutKeyPolicy => "PutKeyPolicy",
            Self::GetKeyPolicy => "GetKeyPolicy",
            Self::ListKeyPolicies => "ListKeyPolicies",
            Self::EnableKeyRotation => "EnableKeyRotation",
            Self::DisableKeyRotation => "DisableKeyRotation",
            Self::GetKeyRotationStatus => "GetKeyRotationStatus",
            Self::ListKeyRotations => "ListKeyRotations",
            Self::RotateKeyOnDemand => "RotateKeyOnDemand",
            Self::CreateGrant => "CreateGrant",
            Self::ListGrants => "ListGrants",
            Self::ListRetirableGrants => "ListRetirableGrants",
            Self::RetireGrant => "RetireGrant",
            Self::RevokeGrant => "RevokeGrant",
            Self::Encrypt => "Encrypt",
            Self::Decrypt => "Decrypt",
            Self::ReEncrypt => "ReEncrypt",
            Self::GenerateDataKey => "GenerateDataKey",
            Self::GenerateDataKeyWithoutPlaintext => "GenerateDataKeyWithoutPlaintext",
            Self::GenerateDataKeyPair => "GenerateDataKeyPair",
            Self::GenerateDataKeyPairWithoutPlaintext => "GenerateDataKeyPairWithoutPlaintext",
            Self::GenerateRandom => "GenerateRandom",
            Self::Sign => "Sign",
            Self::Verify => "Verify",
            Self::GenerateMac => "GenerateMac",
            Self::VerifyMac => "VerifyMac",
            Self::DeriveSharedSecret => "DeriveSharedSecret",
            Self::GetPublicKey => "GetPublicKey",
            Self::GetParametersForImport => "GetParametersForImport",
            Self::ImportKeyMaterial => "ImportKeyMaterial",
            Self::DeleteImportedKeyMaterial => "DeleteImportedKeyMaterial",
            Self::CreateCustomKeyStore => "CreateCustomKeyStore",
            Self::DescribeCustomKeyStores => "DescribeCustomKeyStores",
            Self::UpdateCustomKeyStore => "UpdateCustomKeyStore",
            Self::DeleteCustomKeyStore => "DeleteCustomKeyStore",
            Self::ConnectCustomKeyStore => "ConnectCustomKeyStore",
            Self::DisconnectCustomKeyStore => "DisconnectCustomKeyStore",
            Self::ReplicateKey => "ReplicateKey",
            Self::UpdatePrimaryRegion => "UpdatePrimaryRegion",
        }
    }

    /// Parse an operation name string into a `KmsOperation`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "CreateKey" => Some(Self::CreateKey),
            "DescribeKey" => Some(Self::DescribeKey),
            "ListKeys" => Some(Self::ListKeys),
            "EnableKey" => Some(Self::EnableKey),
            "DisableKey" => Some(Self::DisableKey),
            "ScheduleKeyDeletion" => Some(Self::ScheduleKeyDeletion),
            "CancelKeyDeletion" => Some(Self::CancelKeyDeletion),
            "UpdateKeyDescription" => Some(Self::UpdateKeyDescription),
            "TagResource" => Some(Self::TagResource),
            "UntagResource" => Some(Self::UntagResource),
            "ListResourceTags" => Some(Self::ListResourceTags),
            "CreateAlias" => Some(Self::CreateAlias),
            "DeleteAlias" => Some(Self::DeleteAlias),
            "UpdateAlias" => Some(Self::UpdateAlias),
            "ListAliases" => Some(Self::ListAliases),
            "PutKeyPolicy" => Some(Self::PutKeyPolicy),
            "GetKeyPolicy" => Some(Self::GetKeyPolicy),
            "ListKeyPolicies" => Some(Self::ListKeyPolicies),
            "EnableKeyRotation" => Some(Self::EnableKeyRotation),
            "DisableKeyRotation" => Some(Self::DisableKeyRotation),
            "GetKeyRotationStatus" => Some(Self::GetKeyRotationStatus),
            "ListKeyRotations" => Some(Self::ListKeyRotations),
            "RotateKeyOnDemand" => Some(Self::RotateKeyOnDemand),
            "CreateGrant" => Some(Self::CreateGrant),
            "ListGrants" => Some(Self::ListGrants),
            "ListRetirableGrants" => Some(Self::ListRetirableGrants),
            "RetireGrant" => Some(Self::RetireGrant),
            "RevokeGrant" => Some(Self::RevokeGrant),
            "Encrypt" => Some(Self::Encrypt),
            "Decrypt" => Some(Self::Decrypt),
            "ReEncrypt" => Some(Self::ReEncrypt),
            "GenerateDataKey" => Some(Self::GenerateDataKey),
            "GenerateDataKeyWithoutPlaintext" => Some(Self::GenerateDataKeyWithoutPlaintext),
            "GenerateDataKeyPair" => Some(Self::GenerateDataKeyPair),
            "GenerateDataKeyPairWithoutPlaintext" => {
                Some(Self::GenerateDataKeyPairWithoutPlaintext)
            }
            "GenerateRandom" => Some(Self::GenerateRandom),
            "Sign" => Some(Self::Sign),
            "Verify" => Some(Self::Verify),
            "GenerateMac" => Some(Self::GenerateMac),
            "VerifyMac" => Some(Self::VerifyMac),
            "DeriveSharedSecret" => Some(Self::DeriveSharedSecret),
            "GetPublicKey" => Some(Self::GetPublicKey),
            "GetParametersForImport" => Some(Self::GetParametersForImport),
            "ImportKeyMaterial" => Some(Self::ImportKeyMaterial),
            "DeleteImportedKeyMaterial" => Some(Self::DeleteImportedKeyMaterial),
            "CreateCustomKeyStore" => Some(Self::CreateCustomKeyStore),
            "DescribeCustomKeyStores" => Some(Self::DescribeCustomKeyStores),
            "UpdateCustomKeyStore" => Some(Self::UpdateCustomKeyStore),
            "DeleteCustomKeyStore" => Some(Self::DeleteCustomKeyStore),
            "ConnectCustomKeyStore" => Some(Self::ConnectCustomKeyStore),
            "DisconnectCustomKeyStore" => Some(Self::DisconnectCustomKeyStore),
            "ReplicateKey" => Some(Self::ReplicateKey),
            "UpdatePrimaryRegion" => Some(Self::UpdatePrimaryRegion),
            _ => None,
        }
    }

    /// Parse an `X-Amz-Target` header value (`TrentService.<Operation>`).
    #[must_use]
    pub fn from_target(target: &str) -> Option<Self> {
        let name = target.strip_prefix(TARGET_PREFIX)?.strip_prefix('.')?;
        Self::from_name(name)
    }

    /// The full `X-Amz-Target` header value for this operation.
    #[must_use]
    pub fn target(&self) -> String {
        format!("{TARGET_PREFIX}.{}", self.as_str())
    }
}

impl fmt::Display for KmsOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_target_header() {
        assert_eq!(
            KmsOperation::from_target("TrentService.Sign"),
            Some(KmsOperation::Sign)
        );
        assert_eq!(
            KmsOperation::from_target("TrentService.GenerateDataKeyPairWithoutPlaintext"),
            Some(KmsOperation::GenerateDataKeyPairWithoutPlaintext)
        );
    }

    #[test]
    fn test_should_reject_unknown_target() {
        assert_eq!(KmsOperation::from_target("TrentService.MintCoins"), None);
        assert_eq!(KmsOperation::from_target("DynamoDB_20120810.GetItem"), None);
        assert_eq!(KmsOperation::from_target("Sign"), None);
    }

    #[test]
    fn test_should_roundtrip_every_operation_name() {
        let ops = [
            KmsOperation::CreateKey,
            KmsOperation::ReEncrypt,
            KmsOperation::DeriveSharedSecret,
            KmsOperation::CreateCustomKeyStore,
            KmsOperation::UpdatePrimaryRegion,
            KmsOperation::VerifyMac,
            KmsOperation::RotateKeyOnDemand,
        ];
        for op in ops {
            assert_eq!(KmsOperation::from_name(op.as_str()), Some(op));
            assert_eq!(KmsOperation::from_target(&op.target()), Some(op));
        }
    }
}
