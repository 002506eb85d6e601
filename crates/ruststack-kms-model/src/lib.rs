//! KMS model types for RustStack.
//!
//! This crate provides all KMS API types needed for the RustStack KMS
//! implementation. Unlike the S3 model crate which is auto-generated from
//! Smithy, these types are hand-written since KMS's JSON protocol makes serde
//! derives trivial.
//!
//! The wire protocol is `awsJson1_1`: every operation is a `POST /` with an
//! `X-Amz-Target: TrentService.<Operation>` header, `PascalCase` JSON fields,
//! base64-encoded binary blobs and epoch-seconds timestamps.
// "KMS" appears in virtually every doc comment in this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::module_name_repetitions)]

pub mod blob;
pub mod error;
pub mod input;
pub mod operations;
pub mod output;
pub mod timestamp;
pub mod types;

pub use blob::Blob;
pub use error::{KmsError, KmsErrorCode};
pub use operations::{KmsOperation, TARGET_PREFIX};
pub use timestamp::Timestamp;
