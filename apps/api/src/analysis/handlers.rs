//! Axum route handlers for the Analysis API.

use anyhow::anyhow;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use crate::analysis::models::AnalysisReport;
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field carrying the résumé file.
pub const RESUME_FIELD: &str = "resume";

struct Upload {
    filename: String,
    data: Bytes,
}

/// POST /api/analyze
pub async fn handle_analyze(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<AnalysisReport>, AppError> {
    // A body that is not multipart at all carries no file either.
    let mut multipart = multipart.map_err(|_| AppError::MissingInput)?;
    let upload = read_resume_field(&mut multipart)
        .await?
        .ok_or(AppError::MissingInput)?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        filename = %upload.filename,
        size = upload.data.len(),
        "Analyzing uploaded resume"
    );

    let analyzer = state.analyzer.clone();
    let report = tokio::task::spawn_blocking(move || {
        analyzer.analyze(&upload.filename, &upload.data)
    })
    .await
    .map_err(|e| AppError::Internal(anyhow!("analysis task failed: {e}")))??;

    info!(%request_id, total_score = report.total_score, "Analysis complete");
    Ok(Json(report))
}

/// Returns the first `resume` file part. Other fields, and a `resume` part
/// without a filename (a plain form value), are skipped.
async fn read_resume_field(multipart: &mut Multipart) -> Result<Option<Upload>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let Some(filename) = field.file_name().map(str::to_string) else {
            continue;
        };
        let data = field.bytes().await?;
        return Ok(Some(Upload { filename, data }));
    }
    Ok(None)
}
