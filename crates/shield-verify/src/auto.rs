//! # Auto-Verification Confidence Scoring
//!
//! Combines the format check with file-integrity signals into a 0–100
//! confidence score. A document at or above [`AUTO_VERIFY_THRESHOLD`]
//! is auto-verified; everything else waits for a human.
//!
//! Pure function over the document snapshot — the caller persists the
//! result and performs the status transition.

use serde::{Deserialize, Serialize};

use crate::format::{validate_document_number, DocumentKind, FormatVerdict};

/// Minimum confidence for automatic verification.
pub const AUTO_VERIFY_THRESHOLD: u8 = 70;

/// Confidence credit for a passing format/checksum check.
const FORMAT_CREDIT: u8 = 50;
/// Partial credit when the kind has no machine-checkable format.
const UNSUPPORTED_CREDIT: u8 = 30;
/// Credit for a non-empty stored file.
const FILE_INTEGRITY_CREDIT: u8 = 20;
/// Credit for an allowed MIME type.
const MIME_CREDIT: u8 = 10;

/// MIME types accepted for document uploads.
const ALLOWED_MIME_TYPES: &[&str] = &["image/jpeg", "image/png", "application/pdf"];

/// One named check inside an auto-verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCheck {
    /// Check name (stable, shown in the verification report).
    pub name: String,
    /// Whether the check passed.
    pub passed: bool,
    /// Human-readable detail.
    pub detail: String,
}

impl VerificationCheck {
    fn new(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            passed,
            detail: detail.into(),
        }
    }
}

/// The outcome of an auto-verification run, persisted on the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutoVerification {
    /// Whether auto-verification ran for this document.
    pub attempted: bool,
    /// Whether confidence reached [`AUTO_VERIFY_THRESHOLD`].
    pub passed: bool,
    /// The individual checks that were run.
    pub checks: Vec<VerificationCheck>,
    /// Additive confidence score, 0–100.
    pub confidence: u8,
}

/// Run all auto-verification checks over a document snapshot.
///
/// Confidence is additive: format/checksum pass earns 50 points (30 when
/// the kind has no rule), a non-empty file earns 20, and an allowed MIME
/// type earns 10. A validator failure inside the engine is caught and
/// recorded as a failed "Verification Engine Error" check, earning nothing
/// and crashing nothing.
pub fn compute_auto_verification(
    kind: DocumentKind,
    number: &str,
    file_size: u64,
    mime_type: &str,
) -> AutoVerification {
    let mut checks = Vec::with_capacity(3);
    let mut confidence: u8 = 0;

    // Format/checksum. The validator is isolated so a defect in a format
    // rule degrades this one upload instead of aborting the request.
    match std::panic::catch_unwind(|| validate_document_number(kind, number)) {
        Ok(format) => {
            match format.verdict {
                FormatVerdict::Valid => confidence += FORMAT_CREDIT,
                FormatVerdict::Unsupported => confidence += UNSUPPORTED_CREDIT,
                FormatVerdict::Invalid => {}
            }
            checks.push(VerificationCheck::new(
                "Document Number Format",
                format.verdict == FormatVerdict::Valid,
                format.message,
            ));
        }
        Err(_) => {
            checks.push(VerificationCheck::new(
                "Verification Engine Error",
                false,
                format!("format validation aborted for kind {kind}"),
            ));
        }
    }

    let file_ok = file_size > 0;
    if file_ok {
        confidence += FILE_INTEGRITY_CREDIT;
    }
    checks.push(VerificationCheck::new(
        "File Integrity",
        file_ok,
        if file_ok {
            format!("stored file is {file_size} bytes")
        } else {
            "stored file is empty".to_string()
        },
    ));

    let mime_ok = ALLOWED_MIME_TYPES.contains(&mime_type);
    if mime_ok {
        confidence += MIME_CREDIT;
    }
    checks.push(VerificationCheck::new(
        "MIME Type",
        mime_ok,
        format!("{mime_type} {}", if mime_ok { "is allowed" } else { "is not an accepted upload type" }),
    ));

    AutoVerification {
        attempted: true,
        passed: confidence >= AUTO_VERIFY_THRESHOLD,
        checks,
        confidence,
    }
}

impl AutoVerification {
    /// An auto-verification record for a document that has not been
    /// through the engine (legacy rows, engine disabled).
    pub fn not_attempted() -> Self {
        Self {
            attempted: false,
            passed: false,
            checks: Vec::new(),
            confidence: 0,
        }
    }
}
