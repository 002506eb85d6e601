//! KMS error types.
//!
//! KMS errors use JSON format with a `__type` field carrying the smithy
//! shape identifier (`com.amazonaws.kms#NotFoundException`).

use std::fmt;

/// Well-known KMS error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum KmsErrorCode {
    /// The specified key or alias was not found.
    NotFoundException,
    /// The specified key is disabled.
    DisabledException,
    /// The operation is not valid for the key's usage or spec.
    InvalidKeyUsageException,
    /// The specified key is not available for the operation.
    KeyUnavailableException,
    /// A dependency of the service timed out.
    DependencyTimeoutException,
    /// A supplied ARN is not valid.
    InvalidArnException,
    /// The ciphertext is corrupt, or the context/key does not match.
    InvalidCiphertextException,
    /// Internal service error.
    KmsInternalException,
    /// The key is in a state that forbids the operation.
    KmsInvalidStateException,
    /// The signature failed verification.
    KmsInvalidSignatureException,
    /// The HMAC failed verification.
    KmsInvalidMacException,
    /// The ciphertext was encrypted under a different key than specified.
    IncorrectKeyException,
    /// A resource quota was exceeded.
    LimitExceededException,
    /// The key policy document is malformed.
    MalformedPolicyDocumentException,
    /// An alias or custom key store with that name already exists.
    AlreadyExistsException,
    /// The alias name is not valid.
    InvalidAliasNameException,
    /// The operation is not supported for this key type.
    UnsupportedOperationException,
    /// A grant token is not valid.
    InvalidGrantTokenException,
    /// A grant id is not valid.
    InvalidGrantIdException,
    /// The import token has expired.
    ExpiredImportTokenException,
    /// The imported key material does not match the original.
    IncorrectKeyMaterialException,
    /// The import token is not valid for this key.
    InvalidImportTokenException,
    /// The CloudHSM cluster is already associated with a key store.
    CloudHsmClusterInUseException,
    /// The CloudHSM cluster configuration does not meet requirements.
    CloudHsmClusterInvalidConfigurationException,
    /// The CloudHSM cluster is not active.
    CloudHsmClusterNotActiveException,
    /// The CloudHSM cluster was not found.
    CloudHsmClusterNotFoundException,
    /// The CloudHSM cluster is not related to the original cluster.
    CloudHsmClusterNotRelatedException,
    /// The custom key store still contains keys.
    CustomKeyStoreHasCmKsException,
    /// The custom key store connection state forbids the operation.
    CustomKeyStoreInvalidStateException,
    /// A custom key store with that name already exists.
    CustomKeyStoreNameInUseException,
    /// The custom key store was not found.
    CustomKeyStoreNotFoundException,
    /// The trust anchor certificate does not match the cluster's.
    IncorrectTrustAnchorException,
    /// A tag operation failed.
    TagException,
    /// Request validation failed.
    #[default]
    ValidationException,
    /// The request would have succeeded but dry-run was set.
    DryRunOperationException,
    /// The request conflicts with the current state of the resource.
    ConflictException,
    /// The external key store proxy rejected the request.
    XksProxyInvalidResponseException,
    /// The external key store proxy URI is already in use.
    XksProxyUriInUseException,
    /// The external key store proxy endpoint is unreachable.
    XksProxyUriUnreachableException,
    /// The external key store proxy URI endpoint is not valid.
    XksProxyUriEndpointInUseException,
    /// The proxy authentication credential was rejected.
    XksProxyIncorrectAuthenticationCredentialException,
    /// The VPC endpoint service configuration is not valid.
    XksProxyVpcEndpointServiceInvalidConfigurationException,
    /// The VPC endpoint service was not found.
    XksProxyVpcEndpointServiceNotFoundException,
    /// The VPC endpoint service is already associated with a key store.
    XksProxyVpcEndpointServiceInUseException,
    /// The external key is already associated with a KMS key.
    XksKeyAlreadyInUseException,
    /// The external key was not found on the proxy.
    XksKeyNotFoundException,
    /// The external key configuration is not valid.
    XksKeyInvalidConfigurationException,
}

impl KmsErrorCode {
    /// Returns the smithy shape identifier for the JSON `__type` field.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        match self {
            Self::NotFoundException => "com.amazonaws.kms#NotFoundException",
            Self::DisabledException => "com.amazonaws.kms#DisabledException",
            Self::InvalidKeyUsageException => "com.amazonaws.kms#InvalidKeyUsageException",
            Self::KeyUnavailableException => "com.amazonaws.kms#KeyUnavailableException",
            Self::DependencyTimeoutException => "com.amazonaws.kms#DependencyTimeoutException",
            Self::InvalidArnException => "com.amazonaws.kms#InvalidArnException",
            Self::InvalidCiphertextException => "com.amazonaws.kms#InvalidCiphertextException",
            Self::KmsInternalException => "com.amazonaws.kms#KMSInternalException",
            Self::KmsInvalidStateException => "com.amazonaws.kms#KMSInvalidStateException",
            Self::KmsInvalidSignatureException => "com.amazonaws.kms#KMSInvalidSignatureException",
            Self::KmsInvalidMacException => "com.amazonaws.kms#KMSInvalidMacException",
            Self::IncorrectKeyException => "com.amazonaws.kms#IncorrectKeyException",
            Self::LimitExceededException => "com.amazonaws.kms#LimitExceededException",
            Self::MalformedPolicyDocumentException => {
                "com.amazonaws.kms#MalformedPolicyDocumentException"
            }
            Self::AlreadyExistsException => "com.amazonaws.kms#AlreadyExistsException",
            Self::InvalidAliasNameException => "com.amazonaws.kms#InvalidAliasNameException",
            Self::UnsupportedOperationException => {
                "com.amazonaws.kms#UnsupportedOperationException"
            }
            Self::InvalidGrantTokenException => "com.amazonaws.kms#InvalidGrantTokenException",
            Self::InvalidGrantIdException => "com.amazonaws.kms#InvalidGrantIdException",
            Self::ExpiredImportTokenException => "com.amazonaws.kms#ExpiredImportTokenException",
            Self::IncorrectKeyMaterialException => {
                "com.amazonaws.kms#IncorrectKeyMaterialException"
            }
            Self::InvalidImportTokenException => "com.amazonaws.kms#InvalidImportTokenException",
            Self::CloudHsmClusterInUseException => {
                "com.amazonaws.kms#CloudHsmClusterInUseException"
            }
            Self::CloudHsmClusterInvalidConfigurationException => {
                "com.amazonaws.kms#CloudHsmClusterInvalidConfigurationException"
            }
            Self::CloudHsmClusterNotActiveException => {
                "com.amazonaws.kms#CloudHsmClusterNotActiveException"
            }
            Self::CloudHsmClusterNotFoundException => {
                "com.amazonaws.kms#CloudHsmClusterNotFoundException"
            }
            Self::CloudHsmClusterNotRelatedException => {
                "com.amazonaws.kms#CloudHsmClusterNotRelatedException"
            }
            Self::CustomKeyStoreHasCmKsException => {
                "com.amazonaws.kms#CustomKeyStoreHasCMKsException"
            }
            Self::CustomKeyStoreInvalidStateException => {
                "com.amazonaws.kms#CustomKeyStoreInvalidStateException"
            }
            Self::CustomKeyStoreNameInUseException => {
                "com.amazonaws.kms#CustomKeyStoreNameInUseException"
            }
            Self::CustomKeyStoreNotFoundException => {
                "com.amazonaws.kms#CustomKeyStoreNotFoundException"
            }
            Self::IncorrectTrustAnchorException => {
                "com.amazonaws.kms#IncorrectTrustAnchorException"
            }
            Self::TagException => "com.amazonaws.kms#TagException",
            Self::ValidationException => "com.amazonaws.kms#ValidationException",
            Self::DryRunOperationException => "com.amazonaws.kms#DryRunOperationException",
            Self::ConflictException => "com.amazonaws.kms#ConflictException",
            Self::XksProxyInvalidResponseException => {
                "com.amazonaws.kms#XksProxyInvalidResponseException"
            }
            Self::XksProxyUriInUseException => "com.amazonaws.kms#XksProxyUriInUseException",
            Self::XksProxyUriUnreachableException => {
                "com.amazonaws.kms#XksProxyUriUnreachableException"
            }
            Self::XksProxyUriEndpointInUseException => {
                "com.amazonaws.kms#XksProxyUriEndpointInUseException"
            }
            Self::XksProxyIncorrectAuthenticationCredentialException => {
                "com.amazonaws.kms#XksProxyIncorrectAuthenticationCredentialException"
            }
            Self::XksProxyVpcEndpointServiceInvalidConfigurationException => {
                "com.amazonaws.kms#XksProxyVpcEndpointServiceInvalidConfigurationException"
            }
            Self::XksProxyVpcEndpointServiceNotFoundException => {
                "com.amazonaws.kms#XksProxyVpcEndpointServiceNotFoundException"
            }
            Self::XksProxyVpcEndpointServiceInUseException => {
                "com.amazonaws.kms#XksProxyVpcEndpointServiceInUseException"
            }
            Self::XksKeyAlreadyInUseException => "com.amazonaws.kms#XksKeyAlreadyInUseException",
            Self::XksKeyNotFoundException => "com.amazonaws.kms#XksKeyNotFoundException",
            Self::XksKeyInvalidConfigurationException => {
                "com.amazonaws.kms#XksKeyInvalidConfigurationException"
            }
        }
    }

    /// Returns the short error code string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        // The short code is the shape name after the `#`.
        let full = self.error_type();
        match full.rsplit_once('#') {
            Some((_, name)) => name,
            None => full,
        }
    }

    /// Returns the default HTTP status code for this error.
    #[must_use]
    pub fn default_status_code(&self) -> http::StatusCode {
        match self {
            Self::KmsInternalException | Self::DependencyTimeoutException => {
                http::StatusCode::INTERNAL_SERVER_ERROR
            }
            _ => http::StatusCode::BAD_REQUEST,
        }
    }
}

impl fmt::Display for KmsErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A KMS error response.
#[derive(Debug)]
pub struct KmsError {
    /// The error code.
    pub code: KmsErrorCode,
    /// A human-readable error message.
    pub message: String,
    /// The HTTP status code.
    pub status_code: http::StatusCode,
    /// The underlying source error, if any.
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for KmsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KmsError({}): {}", self.code, self.message)
    }
}

impl std::error::Error for KmsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl KmsError {
    /// Create a new `KmsError` from an error code.
    #[must_use]
    pub fn new(code: KmsErrorCode) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: code.as_str().to_owned(),
            code,
            source: None,
        }
    }

    /// Create a new `KmsError` with a custom message.
    #[must_use]
    pub fn with_message(code: KmsErrorCode, message: impl Into<String>) -> Self {
        Self {
            status_code: code.default_status_code(),
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Set the source error.
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Returns the `__type` string for the JSON error response.
    #[must_use]
    pub fn error_type(&self) -> &'static str {
        self.code.error_type()
    }

    // -- Convenience constructors --

    /// Key or alias not found.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_message(KmsErrorCode::NotFoundException, message)
    }

    /// Key is disabled.
    #[must_use]
    pub fn disabled(message: impl Into<String>) -> Self {
        Self::with_message(KmsErrorCode::DisabledException, message)
    }

    /// Operation not valid for the key's usage or spec.
    #[must_use]
    pub fn invalid_key_usage(message: impl Into<String>) -> Self {
        Self::with_message(KmsErrorCode::InvalidKeyUsageException, message)
    }

    /// Key state forbids the operation.
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::with_message(KmsErrorCode::KmsInvalidStateException, message)
    }

    /// Ciphertext corrupt or context mismatch.
    #[must_use]
    pub fn invalid_ciphertext(message: impl Into<String>) -> Self {
        Self::with_message(KmsErrorCode::InvalidCiphertextException, message)
    }

    /// Signature failed verification.
    #[must_use]
    pub fn invalid_signature(message: impl Into<String>) -> Self {
        Self::with_message(KmsErrorCode::KmsInvalidSignatureException, message)
    }

    /// Validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::with_message(KmsErrorCode::ValidationException, message)
    }

    /// Alias or key store name already taken.
    #[must_use]
    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::with_message(KmsErrorCode::AlreadyExistsException, message)
    }

    /// Dry-run request would have succeeded.
    #[must_use]
    pub fn dry_run(message: impl Into<String>) -> Self {
        Self::with_message(KmsErrorCode::DryRunOperationException, message)
    }

    /// Internal service error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::with_message(KmsErrorCode::KmsInternalException, message)
    }
}

/// Create a `KmsError` from an error code.
///
/// # Examples
///
/// ```
/// use ruststack_kms_model::kms_error;
/// use ruststack_kms_model::error::KmsErrorCode;
///
/// let err = kms_error!(ValidationException);
/// assert_eq!(err.code, KmsErrorCode::ValidationException);
///
/// let err = kms_error!(NotFoundException, "Key not found");
/// assert_eq!(err.message, "Key not found");
/// ```
#[macro_export]
macro_rules! kms_error {
    ($code:ident) => {
        $crate::error::KmsError::new($crate::error::KmsErrorCode::$code)
    };
    ($code:ident, $msg:expr) => {
        $crate::error::KmsError::with_message($crate::error::KmsErrorCode::$code, $msg)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_expose_smithy_error_type() {
        let err = KmsError::not_found("Key 'alias/missing' does not exist");
        assert_eq!(err.error_type(), "com.amazonaws.kms#NotFoundException");
        assert_eq!(err.code.as_str(), "NotFoundException");
    }

    #[test]
    fn test_should_keep_aws_casing_for_internal_exception() {
        // The wire name is KMSInternalException, not KmsInternalException.
        assert_eq!(
            KmsErrorCode::KmsInternalException.as_str(),
            "KMSInternalException"
        );
    }

    #[test]
    fn test_should_map_internal_errors_to_500() {
        assert_eq!(
            KmsErrorCode::KmsInternalException.default_status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            KmsErrorCode::DependencyTimeoutException.default_status_code(),
            http::StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            KmsErrorCode::NotFoundException.default_status_code(),
            http::StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_should_build_error_via_macro() {
        let err = kms_error!(DisabledException, "key is disabled");
        assert_eq!(err.code, KmsErrorCode::DisabledException);
        assert_eq!(err.message, "key is disabled");
        assert_eq!(err.status_code, http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_should_carry_source_error() {
        let io = std::io::Error::new(std::io::ErrorKind::TimedOut, "socket timeout");
        let err = KmsError::internal("dependency failure").with_source(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
