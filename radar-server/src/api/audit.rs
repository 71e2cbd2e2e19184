//! XML audit API
//!
//! POST /api/audit/xml — multipart upload of CFDI files → per-file risk
//! verdicts plus a batch summary. Request-level validation covers only the
//! batch bounds; malformed documents are reported per file.

use axum::Json;
use axum::extract::{Multipart, State};
use shared::error::{AppError, ErrorCode};

use super::ApiResult;
use crate::audit::service::{
    self, AuditReport, MAX_FILE_BYTES, MAX_FILES_PER_BATCH, UploadedFile,
};
use crate::state::AppState;

pub async fn audit_xml(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<AuditReport> {
    let mut files: Vec<UploadedFile> = Vec::new();

    while let Some(field) = multipart.next_field().await.map_err(|e| {
        AppError::with_message(ErrorCode::InvalidRequest, format!("Multipart error: {e}"))
    })? {
        // Non-file form fields are ignored
        let Some(file_name) = field.file_name().map(|s| s.to_string()) else {
            continue;
        };

        if files.len() >= MAX_FILES_PER_BATCH {
            return Err(AppError::with_message(
                ErrorCode::TooManyFiles,
                format!("At most {MAX_FILES_PER_BATCH} files per request"),
            ));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| {
                AppError::with_message(ErrorCode::InvalidRequest, format!("Read error: {e}"))
            })?
            .to_vec();

        if bytes.len() > MAX_FILE_BYTES {
            return Err(AppError::with_message(
                ErrorCode::FileTooLarge,
                format!(
                    "{file_name}: {} bytes (max {})",
                    bytes.len(),
                    MAX_FILE_BYTES
                ),
            ));
        }

        files.push(UploadedFile {
            name: file_name,
            bytes,
        });
    }

    if files.is_empty() {
        return Err(AppError::new(ErrorCode::NoFilesProvided));
    }

    let report = service::run_audit(files, state.denylist.as_ref());

    tracing::info!(
        files = report.summary.total_files_processed,
        risks = report.summary.risks_detected,
        "Audit batch processed"
    );

    Ok(Json(report))
}
