//! KMS output types, one struct per operation with a non-empty response.
//!
//! Operations that answer with an empty JSON body (`EnableKey`,
//! `CreateAlias`, `TagResource`, ...) have no output struct here.
//!
//! The service omits absent fields rather than sending `null`, so nearly
//! every field is optional. Paginated responses share the `NextMarker` /
//! `Truncated` pair.

use serde::{Deserialize, Serialize};

use crate::blob::Blob;
use crate::timestamp::Timestamp;
use crate::types::{
    AliasListEntry, CustomKeyStoresListEntry, DataKeyPairSpec, EncryptionAlgorithmSpec,
    GrantListEntry, KeyAgreementAlgorithmSpec, KeyListEntry, KeyMetadata, KeySpec, KeyState,
    KeyUsageType, MacAlgorithmSpec, OriginType, RotationsListEntry, SigningAlgorithmSpec, Tag,
};

// ---------------------------------------------------------------------------
// Key lifecycle
// ---------------------------------------------------------------------------

/// Output of the `CreateKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateKeyOutput {
    /// Metadata of the new key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_metadata: Option<KeyMetadata>,
}

/// Output of the `DescribeKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeKeyOutput {
    /// Metadata of the described key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_metadata: Option<KeyMetadata>,
}

/// Output of the `ListKeys` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListKeysOutput {
    /// One page of keys.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<KeyListEntry>,

    /// Marker to pass as `Marker` in the next request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,

    /// Whether more results remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

/// Output of the `ScheduleKeyDeletion` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ScheduleKeyDeletionOutput {
    /// The key ARN of the key whose deletion is scheduled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// When the key will be deleted.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_date: Option<Timestamp>,

    /// State of the key after scheduling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_state: Option<KeyState>,

    /// The waiting period in days.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pending_window_in_days: Option<i32>,
}

/// Output of the `CancelKeyDeletion` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CancelKeyDeletionOutput {
    /// The key ARN of the key whose deletion was cancelled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Tagging
// ---------------------------------------------------------------------------

/// Output of the `ListResourceTags` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListResourceTagsOutput {
    /// One page of tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<Tag>,

    /// Marker to pass as `Marker` in the next request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,

    /// Whether more results remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

// ---------------------------------------------------------------------------
// Aliases
// ---------------------------------------------------------------------------

/// Output of the `ListAliases` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListAliasesOutput {
    /// One page of aliases.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<AliasListEntry>,

    /// Marker to pass as `Marker` in the next request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,

    /// Whether more results remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

// ---------------------------------------------------------------------------
// Key policies
// ---------------------------------------------------------------------------

/// Output of the `GetKeyPolicy` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetKeyPolicyOutput {
    /// The policy document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<String>,

    /// The policy name (always `default`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_name: Option<String>,
}

/// Output of the `ListKeyPolicies` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListKeyPoliciesOutput {
    /// One page of policy names (always just `default`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub policy_names: Vec<String>,

    /// Marker to pass as `Marker` in the next request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,

    /// Whether more results remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

// ---------------------------------------------------------------------------
// Rotation
// ---------------------------------------------------------------------------

/// Output of the `GetKeyRotationStatus` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetKeyRotationStatusOutput {
    /// Whether automatic rotation is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_rotation_enabled: Option<bool>,

    /// The key ARN of the queried key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// Days between automatic rotations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation_period_in_days: Option<i32>,

    /// When the next automatic rotation happens.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_rotation_date: Option<Timestamp>,

    /// When an in-progress on-demand rotation started.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_rotation_start_date: Option<Timestamp>,
}

/// Output of the `ListKeyRotations` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListKeyRotationsOutput {
    /// One page of completed rotations.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub rotations: Vec<RotationsListEntry>,

    /// Marker to pass as `Marker` in the next request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,

    /// Whether more results remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

/// Output of the `RotateKeyOnDemand` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RotateKeyOnDemandOutput {
    /// The key ARN of the rotated key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Grants
// ---------------------------------------------------------------------------

/// Output of the `CreateGrant` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateGrantOutput {
    /// Token usable immediately, before the grant propagates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_token: Option<String>,

    /// The unique id of the new grant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grant_id: Option<String>,
}

/// Output of the `ListGrants` and `ListRetirableGrants` operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ListGrantsOutput {
    /// One page of grants.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub grants: Vec<GrantListEntry>,

    /// Marker to pass as `Marker` in the next request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,

    /// Whether more results remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

// ---------------------------------------------------------------------------
// Cryptographic operations
// ---------------------------------------------------------------------------

/// Output of the `Encrypt` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EncryptOutput {
    /// The encrypted plaintext.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphertext_blob: Option<Blob>,

    /// The key ARN of the key used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The algorithm used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithmSpec>,
}

/// Output of the `Decrypt` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DecryptOutput {
    /// The key ARN of the key used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The decrypted data. Absent when `Recipient` was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plaintext: Option<Blob>,

    /// The algorithm used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub encryption_algorithm: Option<EncryptionAlgorithmSpec>,

    /// The plaintext encrypted to the enclave's public key, when
    /// `Recipient` was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphertext_for_recipient: Option<Blob>,
}

/// Output of the `ReEncrypt` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReEncryptOutput {
    /// The re-encrypted data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphertext_blob: Option<Blob>,

    /// The key ARN the ciphertext was previously encrypted under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_key_id: Option<String>,

    /// The key ARN the ciphertext is now encrypted under.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The algorithm used for decryption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_encryption_algorithm: Option<EncryptionAlgorithmSpec>,

    /// The algorithm used for re-encryption.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination_encryption_algorithm: Option<EncryptionAlgorithmSpec>,
}

/// Output of the `GenerateDataKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataKeyOutput {
    /// The data key, encrypted under the KMS key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphertext_blob: Option<Blob>,

    /// The plaintext data key. Absent when `Recipient` was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plaintext: Option<Blob>,

    /// The key ARN of the wrapping key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The data key encrypted to the enclave's public key, when
    /// `Recipient` was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphertext_for_recipient: Option<Blob>,
}

/// Output of the `GenerateDataKeyWithoutPlaintext` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataKeyWithoutPlaintextOutput {
    /// The data key, encrypted under the KMS key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphertext_blob: Option<Blob>,

    /// The key ARN of the wrapping key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

/// Output of the `GenerateDataKeyPair` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataKeyPairOutput {
    /// The private key, encrypted under the KMS key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_ciphertext_blob: Option<Blob>,

    /// The plaintext private key (PKCS#8 DER). Absent when `Recipient`
    /// was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_plaintext: Option<Blob>,

    /// The public key (X.509 `SubjectPublicKeyInfo` DER).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<Blob>,

    /// The key ARN of the wrapping key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The kind of key pair generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair_spec: Option<DataKeyPairSpec>,

    /// The private key encrypted to the enclave's public key, when
    /// `Recipient` was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphertext_for_recipient: Option<Blob>,
}

/// Output of the `GenerateDataKeyPairWithoutPlaintext` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateDataKeyPairWithoutPlaintextOutput {
    /// The private key, encrypted under the KMS key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_key_ciphertext_blob: Option<Blob>,

    /// The public key (X.509 `SubjectPublicKeyInfo` DER).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<Blob>,

    /// The key ARN of the wrapping key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The kind of key pair generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_pair_spec: Option<DataKeyPairSpec>,
}

/// Output of the `GenerateRandom` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateRandomOutput {
    /// The random bytes. Absent when `Recipient` was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plaintext: Option<Blob>,

    /// The random bytes encrypted to the enclave's public key, when
    /// `Recipient` was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphertext_for_recipient: Option<Blob>,
}

/// Output of the `Sign` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignOutput {
    /// The key ARN of the signing key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The signature. Raw (r, s) for SM2, DER otherwise for ECDSA.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<Blob>,

    /// The algorithm used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_algorithm: Option<SigningAlgorithmSpec>,
}

/// Output of the `Verify` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyOutput {
    /// The key ARN of the verifying key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// Whether the signature verified. An invalid signature raises
    /// `KMSInvalidSignatureException` instead of returning `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_valid: Option<bool>,

    /// The algorithm used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signing_algorithm: Option<SigningAlgorithmSpec>,
}

/// Output of the `GenerateMac` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GenerateMacOutput {
    /// The computed MAC.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac: Option<Blob>,

    /// The algorithm used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_algorithm: Option<MacAlgorithmSpec>,

    /// The key ARN of the HMAC key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,
}

/// Output of the `VerifyMac` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct VerifyMacOutput {
    /// The key ARN of the HMAC key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// Whether the MAC verified. A mismatched MAC raises
    /// `KMSInvalidMacException` instead of returning `false`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_valid: Option<bool>,

    /// The algorithm used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mac_algorithm: Option<MacAlgorithmSpec>,
}

/// Output of the `DeriveSharedSecret` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeriveSharedSecretOutput {
    /// The key ARN of the key-agreement key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The raw ECDH shared secret. Absent when `Recipient` was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared_secret: Option<Blob>,

    /// The shared secret encrypted to the enclave's public key, when
    /// `Recipient` was supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ciphertext_for_recipient: Option<Blob>,

    /// The agreement algorithm used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_agreement_algorithm: Option<KeyAgreementAlgorithmSpec>,

    /// Where the key's material originates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_origin: Option<OriginType>,
}

/// Output of the `GetPublicKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetPublicKeyOutput {
    /// The key ARN of the asymmetric key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// The public key (X.509 `SubjectPublicKeyInfo` DER).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<Blob>,

    /// The spec of the key pair.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_spec: Option<KeySpec>,

    /// What the key pair may be used for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_usage: Option<KeyUsageType>,

    /// Encryption algorithms the key supports, for encryption keys.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub encryption_algorithms: Vec<EncryptionAlgorithmSpec>,

    /// Signing algorithms the key supports, for signing keys.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signing_algorithms: Vec<SigningAlgorithmSpec>,

    /// Agreement algorithms the key supports, for key-agreement keys.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_agreement_algorithms: Vec<KeyAgreementAlgorithmSpec>,
}

// ---------------------------------------------------------------------------
// Key material import
// ---------------------------------------------------------------------------

/// Output of the `GetParametersForImport` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetParametersForImportOutput {
    /// The key ARN of the key awaiting material.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_id: Option<String>,

    /// Opaque token to pass back to `ImportKeyMaterial`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_token: Option<Blob>,

    /// The public wrapping key to encrypt the key material with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_key: Option<Blob>,

    /// When the token and wrapping key expire.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters_valid_to: Option<Timestamp>,
}

// ---------------------------------------------------------------------------
// Custom key stores
// ---------------------------------------------------------------------------

/// Output of the `CreateCustomKeyStore` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateCustomKeyStoreOutput {
    /// The id of the new key store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_key_store_id: Option<String>,
}

/// Output of the `DescribeCustomKeyStores` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeCustomKeyStoresOutput {
    /// One page of key store descriptions.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub custom_key_stores: Vec<CustomKeyStoresListEntry>,

    /// Marker to pass as `Marker` in the next request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_marker: Option<String>,

    /// Whether more results remain.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub truncated: Option<bool>,
}

// ---------------------------------------------------------------------------
// Multi-region
// ---------------------------------------------------------------------------

/// Output of the `ReplicateKey` operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReplicateKeyOutput {
    /// Metadata of the new replica key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replica_key_metadata: Option<KeyMetadata>,

    /// The key policy attached to the replica.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replica_policy: Option<String>,

    /// The tags assigned to the replica.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub replica_tags: Vec<Tag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_deserialize_decrypt_output() {
        let json = r#"{
            "KeyId": "arn:aws:kms:us-east-1:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab",
            "Plaintext": "aGVsbG8=",
            "EncryptionAlgorithm": "SYMMETRIC_DEFAULT"
        }"#;
        let output: DecryptOutput = serde_json::from_str(json).unwrap();
        assert_eq!(
            output.plaintext.as_ref().map(Blob::as_bytes),
            Some(b"hello".as_slice())
        );
        assert_eq!(
            output.encryption_algorithm,
            Some(EncryptionAlgorithmSpec::SymmetricDefault)
        );
        assert!(output.ciphertext_for_recipient.is_none());
    }

    #[test]
    fn test_should_serialize_list_keys_output() {
        let output = ListKeysOutput {
            keys: vec![KeyListEntry {
                key_id: Some("1234abcd-12ab-34cd-56ef-1234567890ab".to_owned()),
                key_arn: Some(
                    "arn:aws:kms:us-east-1:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab"
                        .to_owned(),
                ),
            }],
            next_marker: Some("eyJlbmNyeXB0ZWQi".to_owned()),
            truncated: Some(true),
        };
        let json = serde_json::to_string(&output).unwrap();
        assert!(json.contains(r#""Keys":[{"#));
        assert!(json.contains(r#""Truncated":true"#));
        assert!(json.contains(r#""NextMarker":"eyJlbmNyeXB0ZWQi""#));
    }

    #[test]
    fn test_should_serialize_empty_list_output_as_empty_object() {
        let output = ListGrantsOutput::default();
        assert_eq!(serde_json::to_string(&output).unwrap(), "{}");
    }

    #[test]
    fn test_should_deserialize_verify_output() {
        let json = r#"{
            "KeyId": "arn:aws:kms:us-east-1:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab",
            "SignatureValid": true,
            "SigningAlgorithm": "ECDSA_SHA_256"
        }"#;
        let output: VerifyOutput = serde_json::from_str(json).unwrap();
        assert_eq!(output.signature_valid, Some(true));
        assert_eq!(
            output.signing_algorithm,
            Some(SigningAlgorithmSpec::EcdsaSha256)
        );
    }

    #[test]
    fn test_should_deserialize_get_parameters_for_import_output() {
        let json = r#"{
            "KeyId": "arn:aws:kms:us-east-1:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab",
            "ImportToken": "AQID",
            "PublicKey": "BAUG",
            "ParametersValidTo": 1568229069.0
        }"#;
        let output: GetParametersForImportOutput = serde_json::from_str(json).unwrap();
        assert_eq!(
            output.import_token.as_ref().map(Blob::as_bytes),
            Some([1, 2, 3].as_slice())
        );
        assert_eq!(
            output
                .parameters_valid_to
                .map(|t| t.as_datetime().timestamp()),
            Some(1_568_229_069)
        );
    }

    #[test]
    fn test_should_roundtrip_generate_data_key_pair_output() {
        let output = GenerateDataKeyPairOutput {
            private_key_ciphertext_blob: Some(Blob::from(vec![9, 9, 9])),
            public_key: Some(Blob::from(vec![4, 5, 6])),
            key_id: Some(
                "arn:aws:kms:us-east-1:111122223333:key/1234abcd-12ab-34cd-56ef-1234567890ab"
                    .to_owned(),
            ),
            key_pair_spec: Some(DataKeyPairSpec::EccNistP256),
            ..Default::default()
        };
        let json = serde_json::to_string(&output).unwrap();
        assert!(!json.contains("PrivateKeyPlaintext"));
        let parsed: GenerateDataKeyPairOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.key_pair_spec, Some(DataKeyPairSpec::EccNistP256));
        assert!(parsed.private_key_plaintext.is_none());
    }

    #[test]
    fn test_should_deserialize_describe_key_output() {
        let json = r#"{
            "KeyMetadata": {
                "AWSAccountId": "111122223333",
                "KeyId": "1234abcd-12ab-34cd-56ef-1234567890ab",
                "KeyState": "Enabled",
                "KeyUsage": "ENCRYPT_DECRYPT",
                "KeySpec": "SYMMETRIC_DEFAULT",
                "Origin": "AWS_KMS",
                "Enabled": true
            }
        }"#;
        let output: DescribeKeyOutput = serde_json::from_str(json).unwrap();
        let metadata = output.key_metadata.unwrap();
        assert_eq!(metadata.key_id, "1234abcd-12ab-34cd-56ef-1234567890ab");
        assert_eq!(metadata.key_state, Some(KeyState::Enabled));
        assert_eq!(metadata.origin, Some(OriginType::AwsKms));
    }
}
