//! Binary blob type for KMS wire payloads.
//!
//! KMS transports all binary fields (ciphertext, plaintext data keys,
//! signatures, public keys, import tokens) as base64 strings in its JSON
//! protocol. `Blob` wraps [`bytes::Bytes`] and handles the base64
//! encode/decode in its serde implementations.

use std::fmt;

use base64::Engine;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A binary value, base64-encoded on the wire.
///
/// `Display` deliberately prints only the byte count: blobs routinely carry
/// plaintext key material that must not end up in log output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Blob(bytes::Bytes);

impl Blob {
    /// Create a blob from raw bytes.
    pub fn new(data: impl Into<bytes::Bytes>) -> Self {
        Self(data.into())
    }

    /// The number of bytes in the blob.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the blob contains no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The underlying bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume the blob, returning the underlying [`bytes::Bytes`].
    #[must_use]
    pub fn into_inner(self) -> bytes::Bytes {
        self.0
    }

    /// The base64 (standard alphabet, padded) encoding of the blob.
    #[must_use]
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }

    /// Decode a blob from its base64 wire representation.
    ///
    /// # Errors
    ///
    /// Returns a decode error if the input is not valid standard base64.
    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        base64::engine::general_purpose::STANDARD
            .decode(encoded)
            .map(|decoded| Self(bytes::Bytes::from(decoded)))
    }
}

impl From<Vec<u8>> for Blob {
    fn from(data: Vec<u8>) -> Self {
        Self(bytes::Bytes::from(data))
    }
}

impl From<bytes::Bytes> for Blob {
    fn from(data: bytes::Bytes) -> Self {
        Self(data)
    }
}

impl From<&'static [u8]> for Blob {
    fn from(data: &'static [u8]) -> Self {
        Self(bytes::Bytes::from_static(data))
    }
}

impl AsRef<[u8]> for Blob {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} bytes}}", self.0.len())
    }
}

impl Serialize for Blob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Blob {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(BlobVisitor)
    }
}

struct BlobVisitor;

impl Visitor<'_> for BlobVisitor {
    type Value = Blob;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a base64-encoded string")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Blob::from_base64(v).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_blob_as_base64() {
        let blob = Blob::from(b"hello kms".as_slice());
        let json = serde_json::to_string(&blob).unwrap();
        assert_eq!(json, r#""aGVsbG8ga21z""#);
    }

    #[test]
    fn test_should_roundtrip_blob() {
        let blob = Blob::from(vec![0u8, 1, 2, 255]);
        let json = serde_json::to_string(&blob).unwrap();
        let parsed: Blob = serde_json::from_str(&json).unwrap();
        assert_eq!(blob, parsed);
    }

    #[test]
    fn test_should_reject_invalid_base64() {
        let result: Result<Blob, _> = serde_json::from_str(r#""not@base64!""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_should_not_print_contents_in_display() {
        let blob = Blob::from(b"secret key material".as_slice());
        let shown = blob.to_string();
        assert_eq!(shown, "{19 bytes}");
        assert!(!shown.contains("secret"));
    }

    #[test]
    fn test_should_default_to_empty() {
        let blob = Blob::default();
        assert!(blob.is_empty());
        assert_eq!(blob.len(), 0);
    }
}
