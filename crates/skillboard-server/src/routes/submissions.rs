use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use skillboard_core::submission::{NewSubmission, Submission};

use crate::error::AppError;
use crate::state::{AppState, BoardEvent};

/// GET /api/submissions: all submissions, oldest first.
pub async fn list_submissions(
    State(app): State<AppState>,
) -> Result<Json<Vec<Submission>>, AppError> {
    let log = app.submissions.clone();
    let list = tokio::task::spawn_blocking(move || log.list())
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(list))
}

/// POST /api/submissions: record self-reported hours.
pub async fn create_submission(
    State(app): State<AppState>,
    Json(body): Json<NewSubmission>,
) -> Result<(StatusCode, Json<Submission>), AppError> {
    let log = app.submissions.clone();
    let created = tokio::task::spawn_blocking(move || log.add(body))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    tracing::info!(id = %created.id, play = %created.play, "hours submission recorded");
    let _ = app.event_tx.send(BoardEvent::Submissions);
    Ok((StatusCode::CREATED, Json(created)))
}

/// DELETE /api/submissions/{id}
pub async fn delete_submission(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let log = app.submissions.clone();
    let id_clone = id.clone();
    let deleted = tokio::task::spawn_blocking(move || log.delete(&id_clone))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    if !deleted {
        return Err(AppError::not_found(format!("submission '{id}' not found")));
    }
    tracing::info!(id = %id, "hours submission deleted");
    let _ = app.event_tx.send(BoardEvent::Submissions);
    Ok(Json(serde_json::json!({ "deleted": true })))
}
