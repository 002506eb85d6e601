//! KMS input types, one struct per operation request.
//!
//! All input structs use `PascalCase` JSON field naming to match the KMS
//! wire protocol (`awsJson1_1`). Optional fields are omitted when `None`,
//! empty `HashMap`s and `Vec`s are omitted to produce minimal JSON payloads.
//!
//! Length and pattern constraints quoted in doc comments (key ids up to
//! 2048 characters, `cluster-[2-7a-zA-Z]{11,16}` cluster ids, 1--6144-byte
//! ciphertexts, ...) are the service's contract; this crate does not
//! enforce them.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::blob::Blob;
use crate::error::KmsError;
use crate::timestamp::Timestamp;
use crate::types::{
    AlgorithmSpec, CustomKeyStoreType, DataKeyPairSpec, DataKeySpec, EncryptionAlgorithmSpec,
    ExpirationModelType, GrantConstraints, GrantOperation, KeyAgreementAlgorithmSpec, KeySpec,
    KeyUsageType, MacAlgorithmSpec, MessageType, OriginType, RecipientInfo, SigningAlgorithmSpec,
    Tag, WrappingKeySpec, XksProxyAuthenticationCredentialType, XksProxyConnectivityType,
};

// ---------------------------------------------------------------------------
// Key lifecycle
// ---------------------------------------------------------------------------

/// Input for the `CreateKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateKeyInput {
    /// The key policy document (1--32768 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// A description of the key (0--8192 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The cryptographic operations the key will support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<KeyUsageType>,

    /// The cryptographic configuration of the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<KeySpec>,

    /// Where the key material comes from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<OriginType>,

    /// The custom key store to create the key in.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_id: Option<String>,

    /// Skip the check that the policy leaves the key manageable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_policy_lockout_safety_check: Option<bool>,

    /// Tags to assign to the key.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Create a multi-region primary key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multi_region: Option<bool>,

    /// The external key to associate, for external key store keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_key_id: Option<String>,
}

/// Input for the `DescribeKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeKeyInput {
    /// The key id, key ARN, alias name, or alias ARN to describe.
    pub key_id: String,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,
}

/// Input for the `ListKeys` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListKeysInput {
    /// The maximum number of keys to return (1--1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The pagination marker from a previous truncated response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Input for the `EnableKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnableKeyInput {
    /// The key id or key ARN to enable.
    pub key_id: String,
}

/// Input for the `DisableKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisableKeyInput {
    /// The key id or key ARN to disable.
    pub key_id: String,
}

/// Input for the `ScheduleKeyDeletion` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleKeyDeletionInput {
    /// The key id or key ARN to schedule for deletion.
    pub key_id: String,

    /// The waiting period before deletion, in days (7--30, default 30).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_window_in_days: Option<i32>,
}

/// Input for the `CancelKeyDeletion` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelKeyDeletionInput {
    /// The key id or key ARN whose deletion to cancel.
    pub key_id: String,
}

/// Input for the `UpdateKeyDescription` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateKeyDescriptionInput {
    /// The key id or key ARN to update.
    pub key_id: String,

    /// The new description (0--8192 characters).
    pub description: String,
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Input for the `TagResource` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TagResourceInput {
    /// The key id or key ARN to tag.
    pub key_id: String,

    /// Tags to add or overwrite.
    pub tags: Vec<Tag>,
}

/// Input for the `UntagResource` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UntagResourceInput {
    /// The key id or key ARN to untag.
    pub key_id: String,

    /// The tag keys to remove.
    pub tag_keys: Vec<String>,
}

/// Input for the `ListResourceTags` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResourceTagsInput {
    /// The key id or key ARN whose tags to list.
    pub key_id: String,

    /// The maximum number of tags to return (1--50).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The pagination marker from a previous truncated response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

// ---------------------------------------------------------------------------
// Aliases
// ---------------------------------------------------------------------------

/// Input for the `CreateAlias` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateAliasInput {
    /// The alias name. Must begin with `alias/` and must not begin with
    /// `alias/aws/`.
    pub alias_name: String,

    /// The key id or key ARN the alias points to.
    pub target_key_id: String,
}

/// Input for the `DeleteAlias` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteAliasInput {
    /// The alias name to delete (including the `alias/` prefix).
    pub alias_name: String,
}

/// Input for the `UpdateAlias` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateAliasInput {
    /// The alias name to repoint (including the `alias/` prefix).
    pub alias_name: String,

    /// The key id or key ARN the alias should point to.
    pub target_key_id: String,
}

/// Input for the `ListAliases` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAliasesInput {
    /// Only list aliases pointing at this key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The maximum number of aliases to return (1--100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The pagination marker from a previous truncated response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

// ---------------------------------------------------------------------------
// Key policies
// ---------------------------------------------------------------------------

/// Input for the `PutKeyPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutKeyPolicyInput {
    /// The key id or key ARN to attach the policy to.
    pub key_id: String,

    /// The policy name. Only `default` is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,

    /// The key policy document (1--32768 characters).
    pub policy: String,

    /// Skip the check that the policy leaves the key manageable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_policy_lockout_safety_check: Option<bool>,
}

/// Input for the `GetKeyPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetKeyPolicyInput {
    /// The key id or key ARN whose policy to fetch.
    pub key_id: String,

    /// The policy name. Only `default` is supported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
}

/// Input for the `ListKeyPolicies` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListKeyPoliciesInput {
    /// The key id or key ARN whose policy names to list.
    pub key_id: String,

    /// The maximum number of names to return (1--1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The pagination marker from a previous truncated response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

// ---------------------------------------------------------------------------
// Rotation
// ---------------------------------------------------------------------------

/// Input for the `EnableKeyRotation` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EnableKeyRotationInput {
    /// The key id or key ARN to enable rotation for.
    pub key_id: String,

    /// Days between rotations (90--2560, default 365).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_period_in_days: Option<i32>,
}

/// Input for the `DisableKeyRotation` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisableKeyRotationInput {
    /// The key id or key ARN to disable rotation for.
    pub key_id: String,
}

/// Input for the `GetKeyRotationStatus` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetKeyRotationStatusInput {
    /// The key id or key ARN to query.
    pub key_id: String,
}

/// Input for the `ListKeyRotations` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListKeyRotationsInput {
    /// The key id or key ARN whose rotations to list.
    pub key_id: String,

    /// The maximum number of rotations to return (1--1000).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The pagination marker from a previous truncated response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Input for the `RotateKeyOnDemand` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RotateKeyOnDemandInput {
    /// The key id or key ARN to rotate.
    pub key_id: String,
}

// ---------------------------------------------------------------------------
// Grants
// ---------------------------------------------------------------------------

/// Input for the `CreateGrant` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGrantInput {
    /// The key id or key ARN the grant applies to.
    pub key_id: String,

    /// The principal that receives the grant's permissions.
    pub grantee_principal: String,

    /// The principal allowed to retire the grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retiring_principal: Option<String>,

    /// The operations the grant permits.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub operations: Vec<GrantOperation>,

    /// Encryption context constraints on the grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<GrantConstraints>,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// A friendly name; reusing the same name with identical parameters
    /// makes the call idempotent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Check permissions without creating the grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `ListGrants` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGrantsInput {
    /// The key id or key ARN whose grants to list.
    pub key_id: String,

    /// The maximum number of grants to return (1--100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The pagination marker from a previous truncated response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,

    /// Only return the grant with this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,

    /// Only return grants for this grantee principal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grantee_principal: Option<String>,
}

/// Input for the `ListRetirableGrants` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListRetirableGrantsInput {
    /// The retiring principal whose grants to list.
    pub retiring_principal: String,

    /// The maximum number of grants to return (1--100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The pagination marker from a previous truncated response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Input for the `RetireGrant` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RetireGrantInput {
    /// The grant token of the grant to retire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_token: Option<String>,

    /// The key ARN the grant applies to (used with `GrantId`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The grant id (used with `KeyId`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,

    /// Check permissions without retiring the grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `RevokeGrant` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RevokeGrantInput {
    /// The key id or key ARN the grant applies to.
    pub key_id: String,

    /// The id of the grant to revoke.
    pub grant_id: String,

    /// Check permissions without revoking the grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

// ---------------------------------------------------------------------------
// Cryptographic operations
// ---------------------------------------------------------------------------

/// Input for the `Encrypt` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptInput {
    /// The key id, key ARN, alias name, or alias ARN to encrypt under.
    pub key_id: String,

    /// The data to encrypt (1--4096 bytes).
    pub plaintext: Blob,

    /// Additional authenticated data bound to the ciphertext.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub encryption_context: HashMap<String, String>,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// The encryption algorithm (defaults to `SYMMETRIC_DEFAULT`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithmSpec>,

    /// Check permissions without encrypting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `Decrypt` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DecryptInput {
    /// The ciphertext to decrypt (1--6144 bytes).
    pub ciphertext_blob: Blob,

    /// The encryption context the ciphertext was encrypted with.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub encryption_context: HashMap<String, String>,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// The key to decrypt with. Required for asymmetric ciphertexts;
    /// optional for symmetric ones, whose ciphertext carries the key id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The algorithm the ciphertext was encrypted under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithmSpec>,

    /// Return the plaintext encrypted to a Nitro enclave instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<RecipientInfo>,

    /// Check permissions without decrypting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `ReEncrypt` operation.
///
/// Decrypts the ciphertext under its current key and context, then encrypts
/// it under the destination key and context, entirely server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReEncryptInput {
    /// The ciphertext to re-encrypt (1--6144 bytes).
    pub ciphertext_blob: Blob,

    /// The encryption context the ciphertext was encrypted with.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub source_encryption_context: HashMap<String, String>,

    /// The key the ciphertext is currently encrypted under. Required for
    /// asymmetric ciphertexts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_key_id: Option<String>,

    /// The key id, key ARN, alias name, or alias ARN to re-encrypt under.
    pub destination_key_id: String,

    /// The encryption context for the new ciphertext.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub destination_encryption_context: HashMap<String, String>,

    /// The algorithm the ciphertext was encrypted under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_encryption_algorithm: Option<EncryptionAlgorithmSpec>,

    /// The algorithm to encrypt the new ciphertext under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_encryption_algorithm: Option<EncryptionAlgorithmSpec>,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// Check permissions without re-encrypting.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

impl ReEncryptInput {
    /// Add one entry to the source encryption context.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationException` if the key is already present.
    pub fn add_source_encryption_context_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, KmsError> {
        let key = key.into();
        if self.source_encryption_context.contains_key(&key) {
            return Err(KmsError::validation(format!(
                "Duplicated keys ({key}) are provided."
            )));
        }
        self.source_encryption_context.insert(key, value.into());
        Ok(self)
    }

    /// Remove all source encryption context entries.
    pub fn clear_source_encryption_context_entries(&mut self) -> &mut Self {
        self.source_encryption_context = HashMap::new();
        self
    }

    /// Add one entry to the destination encryption context.
    ///
    /// # Errors
    ///
    /// Returns a `ValidationException` if the key is already present.
    pub fn add_destination_encryption_context_entry(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<&mut Self, KmsError> {
        let key = key.into();
        if self.destination_encryption_context.contains_key(&key) {
            return Err(KmsError::validation(format!(
                "Duplicated keys ({key}) are provided."
            )));
        }
        self.destination_encryption_context.insert(key, value.into());
        Ok(self)
    }

    /// Remove all destination encryption context entries.
    pub fn clear_destination_encryption_context_entries(&mut self) -> &mut Self {
        self.destination_encryption_context = HashMap::new();
        self
    }
}

/// Input for the `GenerateDataKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataKeyInput {
    /// The key id, key ARN, alias name, or alias ARN to wrap the data key.
    pub key_id: String,

    /// Additional authenticated data bound to the wrapped data key.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub encryption_context: HashMap<String, String>,

    /// The data key length in bytes (1--1024). Use `KeySpec` instead when
    /// asking for a standard AES key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_bytes: Option<i32>,

    /// The data key length as a named spec (`AES_256` or `AES_128`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<DataKeySpec>,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// Return the plaintext key encrypted to a Nitro enclave instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<RecipientInfo>,

    /// Check permissions without generating the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `GenerateDataKeyWithoutPlaintext` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataKeyWithoutPlaintextInput {
    /// The key id, key ARN, alias name, or alias ARN to wrap the data key.
    pub key_id: String,

    /// Additional authenticated data bound to the wrapped data key.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub encryption_context: HashMap<String, String>,

    /// The data key length as a named spec (`AES_256` or `AES_128`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<DataKeySpec>,

    /// The data key length in bytes (1--1024).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_bytes: Option<i32>,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// Check permissions without generating the key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `GenerateDataKeyPair` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataKeyPairInput {
    /// Additional authenticated data bound to the wrapped private key.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub encryption_context: HashMap<String, String>,

    /// The symmetric key that wraps the private key.
    pub key_id: String,

    /// The kind of key pair to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair_spec: Option<DataKeyPairSpec>,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// Return the private key encrypted to a Nitro enclave instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<RecipientInfo>,

    /// Check permissions without generating the pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `GenerateDataKeyPairWithoutPlaintext` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataKeyPairWithoutPlaintextInput {
    /// Additional authenticated data bound to the wrapped private key.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub encryption_context: HashMap<String, String>,

    /// The symmetric key that wraps the private key.
    pub key_id: String,

    /// The kind of key pair to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair_spec: Option<DataKeyPairSpec>,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// Check permissions without generating the pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `GenerateRandom` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateRandomInput {
    /// The number of random bytes to return (1--1024).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_bytes: Option<i32>,

    /// Generate the bytes in this custom key store's HSMs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_id: Option<String>,

    /// Return the bytes encrypted to a Nitro enclave instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<RecipientInfo>,
}

/// Input for the `Sign` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignInput {
    /// The asymmetric signing key to use.
    pub key_id: String,

    /// The message or message digest to sign (1--4096 bytes).
    pub message: Blob,

    /// Whether `Message` is the raw message or a precomputed digest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// The signing algorithm. Must be supported by the key's spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_algorithm: Option<SigningAlgorithmSpec>,

    /// Check permissions without signing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `Verify` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyInput {
    /// The asymmetric key the message was signed with.
    pub key_id: String,

    /// The message or message digest that was signed (1--4096 bytes).
    pub message: Blob,

    /// Whether `Message` is the raw message or a precomputed digest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,

    /// The signature to verify.
    pub signature: Blob,

    /// The algorithm the signature was produced with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_algorithm: Option<SigningAlgorithmSpec>,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// Check permissions without verifying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `GenerateMac` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateMacInput {
    /// The message to authenticate (1--4096 bytes).
    pub message: Blob,

    /// The HMAC key to use.
    pub key_id: String,

    /// The MAC algorithm. Must match the key's spec.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_algorithm: Option<MacAlgorithmSpec>,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// Check permissions without computing the MAC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `VerifyMac` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyMacInput {
    /// The message that was authenticated (1--4096 bytes).
    pub message: Blob,

    /// The HMAC key the MAC was computed with.
    pub key_id: String,

    /// The algorithm the MAC was computed with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_algorithm: Option<MacAlgorithmSpec>,

    /// The MAC to verify.
    pub mac: Blob,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// Check permissions without verifying.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,
}

/// Input for the `DeriveSharedSecret` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeriveSharedSecretInput {
    /// The `KEY_AGREEMENT` key whose private half is used.
    pub key_id: String,

    /// The key agreement algorithm (only `ECDH` is supported).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_agreement_algorithm: Option<KeyAgreementAlgorithmSpec>,

    /// The other party's DER-encoded public key (crafted on the same curve
    /// as `KeyId`).
    pub public_key: Blob,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,

    /// Check permissions without deriving.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dry_run: Option<bool>,

    /// Return the shared secret encrypted to a Nitro enclave instead.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient: Option<RecipientInfo>,
}

/// Input for the `GetPublicKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPublicKeyInput {
    /// The asymmetric key whose public half to download.
    pub key_id: String,

    /// Grant tokens for eventual-consistency permission checks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grant_tokens: Vec<String>,
}

// ---------------------------------------------------------------------------
// Key material import
// ---------------------------------------------------------------------------

/// Input for the `GetParametersForImport` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetParametersForImportInput {
    /// The `EXTERNAL`-origin key to import material into.
    pub key_id: String,

    /// The algorithm the caller will wrap the key material with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapping_algorithm: Option<AlgorithmSpec>,

    /// The spec of the wrapping key to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wrapping_key_spec: Option<WrappingKeySpec>,
}

/// Input for the `ImportKeyMaterial` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImportKeyMaterialInput {
    /// The key to import material into.
    pub key_id: String,

    /// The import token from `GetParametersForImport`.
    pub import_token: Blob,

    /// The key material, wrapped with the returned public key.
    pub encrypted_key_material: Blob,

    /// When the imported material expires. Required unless
    /// `ExpirationModel` is `KEY_MATERIAL_DOES_NOT_EXPIRE`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_to: Option<Timestamp>,

    /// Whether the imported material expires.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_model: Option<ExpirationModelType>,
}

/// Input for the `DeleteImportedKeyMaterial` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteImportedKeyMaterialInput {
    /// The key whose imported material to delete.
    pub key_id: String,
}

// ---------------------------------------------------------------------------
// Custom key stores
// ---------------------------------------------------------------------------

/// Input for the `CreateCustomKeyStore` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCustomKeyStoreInput {
    /// A unique name for the key store (1--256 characters).
    pub custom_key_store_name: String,

    /// The backing CloudHSM cluster id (pattern
    /// `cluster-[2-7a-zA-Z]{11,16}`). Required for CloudHSM key stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_hsm_cluster_id: Option<String>,

    /// The content of the cluster's trust anchor certificate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_anchor_certificate: Option<String>,

    /// The password of the cluster's `kmsuser` account (7--32 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_store_password: Option<String>,

    /// Whether the store is CloudHSM-backed or external.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_type: Option<CustomKeyStoreType>,

    /// The XKS proxy endpoint URI (must begin with `https://`). Required
    /// for external key stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_proxy_uri_endpoint: Option<String>,

    /// The XKS proxy base path (must match `/.../kms/xks/v1`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_proxy_uri_path: Option<String>,

    /// The VPC endpoint service name, for VPC connectivity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_proxy_vpc_endpoint_service_name: Option<String>,

    /// The SigV4 credential KMS presents to the proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_proxy_authentication_credential: Option<XksProxyAuthenticationCredentialType>,

    /// How KMS reaches the proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_proxy_connectivity: Option<XksProxyConnectivityType>,
}

/// Input for the `DescribeCustomKeyStores` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCustomKeyStoresInput {
    /// Only describe the key store with this id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_id: Option<String>,

    /// Only describe the key store with this name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_name: Option<String>,

    /// The maximum number of key stores to return (1--100).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i32>,

    /// The pagination marker from a previous truncated response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<String>,
}

/// Input for the `UpdateCustomKeyStore` operation.
///
/// All settings are independently optional; only the supplied ones change.
/// The key store must be disconnected first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateCustomKeyStoreInput {
    /// The key store to update.
    pub custom_key_store_id: String,

    /// A new name for the key store (1--256 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_custom_key_store_name: Option<String>,

    /// The current `kmsuser` password of the backing cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_store_password: Option<String>,

    /// A different backing cluster that shares a backup history with the
    /// original (pattern `cluster-[2-7a-zA-Z]{11,16}`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cloud_hsm_cluster_id: Option<String>,

    /// A new XKS proxy endpoint URI (must begin with `https://`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_proxy_uri_endpoint: Option<String>,

    /// A new XKS proxy base path (must match `/.../kms/xks/v1`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_proxy_uri_path: Option<String>,

    /// A new VPC endpoint service name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_proxy_vpc_endpoint_service_name: Option<String>,

    /// A replacement SigV4 proxy credential.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_proxy_authentication_credential: Option<XksProxyAuthenticationCredentialType>,

    /// A new connectivity mode for reaching the proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xks_proxy_connectivity: Option<XksProxyConnectivityType>,
}

/// Input for the `DeleteCustomKeyStore` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteCustomKeyStoreInput {
    /// The key store to delete. It must be disconnected and hold no keys.
    pub custom_key_store_id: String,
}

/// Input for the `ConnectCustomKeyStore` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectCustomKeyStoreInput {
    /// The key store to connect.
    pub custom_key_store_id: String,
}

/// Input for the `DisconnectCustomKeyStore` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DisconnectCustomKeyStoreInput {
    /// The key store to disconnect.
    pub custom_key_store_id: String,
}

// ---------------------------------------------------------------------------
// Multi-region
// ---------------------------------------------------------------------------

/// Input for the `ReplicateKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicateKeyInput {
    /// The multi-region primary key to replicate (key id or key ARN).
    pub key_id: String,

    /// The region to create the replica in.
    pub replica_region: String,

    /// The key policy for the replica (defaults to the default key policy).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// Skip the check that the policy leaves the replica manageable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bypass_policy_lockout_safety_check: Option<bool>,

    /// A description for the replica (0--8192 characters).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags to assign to the replica.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,
}

/// Input for the `UpdatePrimaryRegion` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdatePrimaryRegionInput {
    /// The current multi-region primary key (key id or key ARN).
    pub key_id: String,

    /// The region whose replica becomes the new primary.
    pub primary_region: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_sign_input() {
        let input = SignInput {
            key_id: "1234abcd-12ab-34cd-56ef-1234567890ab".to_owned(),
            message: Blob::from(b"hello".as_slice()),
            message_type: Some(MessageType::Digest),
            signing_algorithm: Some(SigningAlgorithmSpec::EcdsaSha256),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""KeyId":"1234abcd-12ab-34cd-56ef-1234567890ab""#));
        assert!(json.contains(r#""Message":"aGVsbG8=""#));
        assert!(json.contains(r#""MessageType":"DIGEST""#));
        assert!(json.contains(r#""SigningAlgorithm":"ECDSA_SHA_256""#));
        assert!(!json.contains("DryRun"));
        assert!(!json.contains("GrantTokens"));
    }

    #[test]
    fn test_should_deserialize_create_key_input() {
        let json = r#"{
            "KeySpec": "ECC_NIST_P256",
            "KeyUsage": "SIGN_VERIFY",
            "Description": "signing key",
            "Tags": [{"TagKey": "team", "TagValue": "payments"}]
        }"#;
        let input: CreateKeyInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.key_spec, Some(KeySpec::EccNistP256));
        assert_eq!(input.key_usage, Some(crate::types::KeyUsageType::SignVerify));
        assert_eq!(input.description.as_deref(), Some("signing key"));
        assert_eq!(input.tags.len(), 1);
        assert!(input.policy.is_none());
    }

    #[test]
    fn test_should_reject_duplicate_source_context_key() {
        let mut input = ReEncryptInput::default();
        input
            .add_source_encryption_context_entry("Purpose", "Test")
            .unwrap();
        let err = input
            .add_source_encryption_context_entry("Purpose", "Other")
            .unwrap_err();
        assert_eq!(err.code, crate::error::KmsErrorCode::ValidationException);
        // Original value is untouched.
        assert_eq!(
            input.source_encryption_context.get("Purpose").map(String::as_str),
            Some("Test")
        );
    }

    #[test]
    fn test_should_reject_duplicate_destination_context_key() {
        let mut input = ReEncryptInput::default();
        input
            .add_destination_encryption_context_entry("Dept", "IT")
            .unwrap();
        assert!(
            input
                .add_destination_encryption_context_entry("Dept", "IT")
                .is_err()
        );
    }

    #[test]
    fn test_should_allow_readd_after_clear() {
        let mut input = ReEncryptInput::default();
        input
            .add_source_encryption_context_entry("Purpose", "Test")
            .unwrap();
        input.clear_source_encryption_context_entries();
        assert!(input.source_encryption_context.is_empty());
        input
            .add_source_encryption_context_entry("Purpose", "Test")
            .unwrap();
        assert_eq!(input.source_encryption_context.len(), 1);
    }

    #[test]
    fn test_should_chain_context_entry_adds() {
        let mut input = ReEncryptInput::default();
        input
            .add_destination_encryption_context_entry("a", "1")
            .unwrap()
            .add_destination_encryption_context_entry("b", "2")
            .unwrap();
        assert_eq!(input.destination_encryption_context.len(), 2);
    }

    #[test]
    fn test_should_omit_empty_collections_in_re_encrypt() {
        let input = ReEncryptInput {
            ciphertext_blob: Blob::from(vec![1, 2, 3]),
            destination_key_id: "alias/target".to_owned(),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        assert_eq!(
            json,
            r#"{"CiphertextBlob":"AQID","DestinationKeyId":"alias/target"}"#
        );
    }

    #[test]
    fn test_should_serialize_create_custom_key_store_input() {
        let input = CreateCustomKeyStoreInput {
            custom_key_store_name: "ExampleKeyStore".to_owned(),
            cloud_hsm_cluster_id: Some("cluster-1a23b4cdefg".to_owned()),
            trust_anchor_certificate: Some("<certificate goes here>".to_owned()),
            key_store_password: Some("kms-pwd".to_owned()),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        assert!(json.contains(r#""CustomKeyStoreName":"ExampleKeyStore""#));
        assert!(json.contains(r#""CloudHsmClusterId":"cluster-1a23b4cdefg""#));
        assert!(!json.contains("XksProxyUriEndpoint"));
    }

    #[test]
    fn test_should_roundtrip_update_custom_key_store_input() {
        let input = UpdateCustomKeyStoreInput {
            custom_key_store_id: "cks-1234567890abcdef0".to_owned(),
            xks_proxy_uri_endpoint: Some("https://myproxy.xks.example.com".to_owned()),
            xks_proxy_uri_path: Some("/kms/xks/v1".to_owned()),
            ..Default::default()
        };
        let json = serde_json::to_string(&input).unwrap();
        let parsed: UpdateCustomKeyStoreInput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.custom_key_store_id, input.custom_key_store_id);
        assert_eq!(parsed.xks_proxy_uri_endpoint, input.xks_proxy_uri_endpoint);
        assert!(parsed.new_custom_key_store_name.is_none());
    }

    #[test]
    fn test_should_deserialize_decrypt_input_with_context() {
        let json = r#"{
            "CiphertextBlob": "AQIDBA==",
            "EncryptionContext": {"Purpose": "Test"},
            "KeyId": "arn:aws:kms:us-east-1:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab"
        }"#;
        let input: DecryptInput = serde_json::from_str(json).unwrap();
        assert_eq!(input.ciphertext_blob.as_bytes(), &[1, 2, 3, 4]);
        assert_eq!(
            input.encryption_context.get("Purpose").map(String::as_str),
            Some("Test")
        );
        assert!(input.grant_tokens.is_empty());
    }
}
