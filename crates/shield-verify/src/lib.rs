//! # shield-verify — Document Verification Engine
//!
//! Pure format and checksum validation for identity documents, and the
//! additive confidence model that decides whether an upload is
//! auto-verified or routed to manual review.
//!
//! No network calls, no OCR. Everything in this crate is a total function
//! over the document snapshot; persistence and status transitions belong
//! to the caller.
//!
//! ## Components
//!
//! - [`verhoeff`] — the Verhoeff checksum (Aadhaar integrity).
//! - [`format`] — per-kind document number rules.
//! - [`auto`] — confidence scoring over format, file integrity, and MIME.

pub mod auto;
pub mod format;
pub mod verhoeff;

pub use auto::{
    compute_auto_verification, AutoVerification, VerificationCheck, AUTO_VERIFY_THRESHOLD,
};
pub use format::{validate_document_number, validate_gstin, DocumentKind, FormatCheck, FormatVerdict};
