//! Batch audit scan
//!
//! Pure function over the uploaded buffers: parse each file, classify its
//! issuer against the denylist, accumulate the summary. One file's failure
//! never aborts the batch; details keep the input order.

use rust_decimal::Decimal;
use serde::Serialize;

use super::cfdi::{self, CfdiError};
use super::denylist::IssuerLookup;

/// Maximum number of files accepted in one audit request
pub const MAX_FILES_PER_BATCH: usize = 20;
/// Maximum size of a single uploaded file (5 MiB)
pub const MAX_FILE_BYTES: usize = 5 * 1024 * 1024;

/// Risk reason reported for denylisted issuers
pub const REASON_DENYLISTED: &str = "issuer on denylist";
/// Risk reason reported for clean documents
pub const REASON_VALIDATED: &str = "validated";

/// One uploaded file, request-scoped.
#[derive(Debug)]
pub struct UploadedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// Risk classification for a parsed document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Critical,
}

/// Verdict for a file that parsed successfully.
#[derive(Debug, Serialize)]
pub struct ScoredFile {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub uuid: String,
    #[serde(rename = "rfcEmisor")]
    pub rfc_emisor: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    #[serde(rename = "riskReason")]
    pub risk_reason: &'static str,
}

/// Entry for a file that could not be parsed.
#[derive(Debug, Serialize)]
pub struct FailedFile {
    #[serde(rename = "fileName")]
    pub file_name: String,
    pub status: &'static str,
    pub reason: String,
}

/// Per-file audit outcome, in input order.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum AuditDetail {
    Scored(ScoredFile),
    Failed(FailedFile),
}

impl AuditDetail {
    fn failed(file_name: String, err: CfdiError) -> Self {
        Self::Failed(FailedFile {
            file_name,
            status: "error",
            reason: err.to_string(),
        })
    }
}

/// Aggregate counters over one batch.
#[derive(Debug, Serialize)]
pub struct AuditSummary {
    pub total_files_processed: usize,
    pub risks_detected: usize,
    #[serde(with = "rust_decimal::serde::float")]
    pub risk_amount: Decimal,
}

/// Full audit response body.
#[derive(Debug, Serialize)]
pub struct AuditReport {
    pub status: &'static str,
    pub summary: AuditSummary,
    pub details: Vec<AuditDetail>,
}

/// Scan a batch of uploaded files against the denylist.
///
/// Side-effect free; every file yields exactly one detail entry and
/// `total_files_processed` always equals the number of files submitted.
pub fn run_audit(files: Vec<UploadedFile>, denylist: &dyn IssuerLookup) -> AuditReport {
    let total_files_processed = files.len();
    let mut risks_detected = 0usize;
    let mut risk_amount = Decimal::ZERO;
    let mut details = Vec::with_capacity(total_files_processed);

    for file in files {
        match cfdi::parse_cfdi(&file.bytes) {
            Ok(doc) => {
                let (risk_level, risk_reason) = if denylist.is_denylisted(&doc.issuer_rfc) {
                    risks_detected += 1;
                    risk_amount += doc.total;
                    (RiskLevel::Critical, REASON_DENYLISTED)
                } else {
                    (RiskLevel::Low, REASON_VALIDATED)
                };

                details.push(AuditDetail::Scored(ScoredFile {
                    file_name: file.name,
                    uuid: doc.uuid,
                    rfc_emisor: doc.issuer_rfc,
                    total: doc.total,
                    risk_level,
                    risk_reason,
                }));
            }
            Err(err) => {
                tracing::debug!(file = %file.name, error = %err, "CFDI parse failed");
                details.push(AuditDetail::failed(file.name, err));
            }
        }
    }

    AuditReport {
        status: "success",
        summary: AuditSummary {
            total_files_processed,
            risks_detected,
            risk_amount,
        },
        details,
    }
}
