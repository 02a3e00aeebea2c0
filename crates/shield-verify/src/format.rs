//! # Document Number Format Rules
//!
//! Per-kind validation of identity document numbers. Character-class
//! checks are written out directly against the byte sequence; every rule
//! here is a fixed-width shape, so a pattern engine would add a dependency
//! without removing code.
//!
//! Kinds without a format rule (certificates, letters, proofs) are never
//! rejected — they produce an [`FormatVerdict::Unsupported`] outcome that
//! routes the document to manual review with partial confidence credit.

use serde::{Deserialize, Serialize};

use crate::verhoeff;

/// The kinds of documents an employee can attach to their profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Aadhaar number (12 digits, Verhoeff checksum).
    Aadhaar,
    /// Permanent Account Number (income tax).
    Pan,
    /// Passport number.
    Passport,
    /// Driving license number.
    DrivingLicense,
    /// Educational certificate (degree, diploma).
    EducationalCertificate,
    /// Experience or relieving letter from a previous employer.
    ExperienceLetter,
    /// Police verification certificate.
    PoliceVerification,
    /// Address proof (utility bill, rental agreement).
    AddressProof,
    /// Bank statement.
    BankStatement,
    /// Anything else.
    Other,
}

impl DocumentKind {
    /// The canonical string identifier for serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aadhaar => "aadhaar",
            Self::Pan => "pan",
            Self::Passport => "passport",
            Self::DrivingLicense => "driving_license",
            Self::EducationalCertificate => "educational_certificate",
            Self::ExperienceLetter => "experience_letter",
            Self::PoliceVerification => "police_verification",
            Self::AddressProof => "address_proof",
            Self::BankStatement => "bank_statement",
            Self::Other => "other",
        }
    }

    /// All document kinds as a slice.
    pub fn all() -> &'static [DocumentKind] {
        &[
            Self::Aadhaar,
            Self::Pan,
            Self::Passport,
            Self::DrivingLicense,
            Self::EducationalCertificate,
            Self::ExperienceLetter,
            Self::PoliceVerification,
            Self::AddressProof,
            Self::BankStatement,
            Self::Other,
        ]
    }

    /// Whether this kind carries a machine-checkable number format.
    pub fn has_format_rule(&self) -> bool {
        matches!(
            self,
            Self::Aadhaar | Self::Pan | Self::Passport | Self::DrivingLicense
        )
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Outcome ────────────────────────────────────────────────────────────

/// Three-way verdict of a format check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatVerdict {
    /// The number matches the kind's format (and checksum, where one exists).
    Valid,
    /// The number does not match the kind's format.
    Invalid,
    /// The kind has no machine-checkable format; manual review required.
    Unsupported,
}

/// Result of validating a document number against its kind's rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatCheck {
    /// The verdict.
    pub verdict: FormatVerdict,
    /// Human-readable explanation.
    pub message: String,
}

impl FormatCheck {
    fn valid(message: impl Into<String>) -> Self {
        Self {
            verdict: FormatVerdict::Valid,
            message: message.into(),
        }
    }

    fn invalid(message: impl Into<String>) -> Self {
        Self {
            verdict: FormatVerdict::Invalid,
            message: message.into(),
        }
    }

    fn unsupported(kind: DocumentKind) -> Self {
        Self {
            verdict: FormatVerdict::Unsupported,
            message: format!("no automated format rule for {kind}; manual review required"),
        }
    }

    /// Whether the verdict is [`FormatVerdict::Valid`].
    pub fn is_valid(&self) -> bool {
        self.verdict == FormatVerdict::Valid
    }
}

// ── Validators ─────────────────────────────────────────────────────────

/// Validate a document number against its kind's format rule.
///
/// Kinds without a rule return [`FormatVerdict::Unsupported`], never a
/// hard failure.
pub fn validate_document_number(kind: DocumentKind, raw: &str) -> FormatCheck {
    match kind {
        DocumentKind::Aadhaar => validate_aadhaar(raw),
        DocumentKind::Pan => validate_pan(raw),
        DocumentKind::Passport => validate_passport(raw),
        DocumentKind::DrivingLicense => validate_driving_license(raw),
        DocumentKind::EducationalCertificate
        | DocumentKind::ExperienceLetter
        | DocumentKind::PoliceVerification
        | DocumentKind::AddressProof
        | DocumentKind::BankStatement
        | DocumentKind::Other => FormatCheck::unsupported(kind),
    }
}

/// Aadhaar: 12 digits, first digit 2-9, Verhoeff checksum must hold.
fn validate_aadhaar(raw: &str) -> FormatCheck {
    let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

    if digits.len() != 12 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return FormatCheck::invalid("Aadhaar number must be exactly 12 digits");
    }
    if matches!(digits.as_bytes()[0], b'0' | b'1') {
        return FormatCheck::invalid("Aadhaar number cannot start with 0 or 1");
    }
    if !verhoeff::validate(&digits) {
        return FormatCheck::invalid("Aadhaar checksum verification failed");
    }

    FormatCheck::valid("Aadhaar number format and checksum valid")
}

/// Letters accepted as the fourth PAN character, encoding the holder's
/// entity type (individual, company, HUF, firm, AOP, trust, BOI, local
/// authority, government). Accepted as-is, not cross-checked against any
/// entity field.
const PAN_ENTITY_TYPES: &[u8] = b"PCHFATBLJG";

/// PAN: `AAA[entity]A0000A` — ten characters.
fn validate_pan(raw: &str) -> FormatCheck {
    let pan = raw.trim().to_ascii_uppercase();
    let b = pan.as_bytes();

    let shape_ok = b.len() == 10
        && b[..3].iter().all(u8::is_ascii_uppercase)
        && PAN_ENTITY_TYPES.contains(&b[3])
        && b[4].is_ascii_uppercase()
        && b[5..9].iter().all(u8::is_ascii_digit)
        && b[9].is_ascii_uppercase();

    if shape_ok {
        FormatCheck::valid("PAN format valid")
    } else {
        FormatCheck::invalid("PAN must be 5 letters (4th an entity-type code), 4 digits, 1 letter")
    }
}

/// Passport: one uppercase letter followed by seven digits.
fn validate_passport(raw: &str) -> FormatCheck {
    let number = raw.trim().to_ascii_uppercase();
    let b = number.as_bytes();

    let shape_ok =
        b.len() == 8 && b[0].is_ascii_uppercase() && b[1..].iter().all(u8::is_ascii_digit);

    if shape_ok {
        FormatCheck::valid("passport number format valid")
    } else {
        FormatCheck::invalid("passport number must be 1 letter followed by 7 digits")
    }
}

/// Driving license: 2-letter state code followed by 13 digits, with
/// hyphens and spaces tolerated in the input. The internal RTO/serial
/// split is not validated, only the aggregate shape.
fn validate_driving_license(raw: &str) -> FormatCheck {
    let number: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect::<String>()
        .to_ascii_uppercase();
    let b = number.as_bytes();

    let shape_ok =
        b.len() == 15 && b[..2].iter().all(u8::is_ascii_uppercase) && b[2..].iter().all(u8::is_ascii_digit);

    if shape_ok {
        FormatCheck::valid("driving license number format valid")
    } else {
        FormatCheck::invalid("driving license must be a 2-letter state code followed by 13 digits")
    }
}

/// GSTIN: 2-digit state code, 5 letters, 4 digits, 1 letter, 1 entity
/// code ([1-9A-Z]), a literal 'Z', and a check character ([0-9A-Z]).
///
/// GSTINs identify companies, not employees, so this is not a
/// [`DocumentKind`] — it is used when validating a company registration.
pub fn validate_gstin(raw: &str) -> FormatCheck {
    let gstin = raw.trim().to_ascii_uppercase();
    let b = gstin.as_bytes();

    let shape_ok = b.len() == 15
        && b[..2].iter().all(u8::is_ascii_digit)
        && b[2..7].iter().all(u8::is_ascii_uppercase)
        && b[7..11].iter().all(u8::is_ascii_digit)
        && b[11].is_ascii_uppercase()
        && (b[12].is_ascii_uppercase() || (b'1'..=b'9').contains(&b[12]))
        && b[13] == b'Z'
        && (b[14].is_ascii_uppercase() || b[14].is_ascii_digit());

    if shape_ok {
        FormatCheck::valid("GSTIN format valid")
    } else {
        FormatCheck::invalid("GSTIN must match the 15-character state/PAN/entity/Z/check layout")
    }
}
