use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use skillboard_core::{
    aggregate::{card_summary, CardSummary},
    catalog::{Industry, Region, SolutionArea, SolutionPlay},
    config::Config,
    consultant::{validate_contact, Consultant, SolutionPlayData},
    filter::ConsultantFilter,
    store::ConsultantStore,
};
use std::collections::BTreeMap;

use super::parse_csv;
use crate::error::AppError;
use crate::state::{AppState, BoardEvent};

// ---------------------------------------------------------------------------
// Request / response shapes
// ---------------------------------------------------------------------------

/// Query string for `GET /api/consultants`. Facets are comma-separated.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub industries: Option<String>,
    pub regions: Option<String>,
    pub plays: Option<String>,
    pub areas: Option<String>,
}

impl ListParams {
    fn to_filter(&self) -> Result<ConsultantFilter, AppError> {
        Ok(ConsultantFilter::new()
            .query(self.q.clone().unwrap_or_default())
            .industries(parse_csv::<Industry>(self.industries.as_deref())?)
            .regions(parse_csv::<Region>(self.regions.as_deref())?)
            .plays(parse_csv::<SolutionPlay>(self.plays.as_deref())?)
            .areas(parse_csv::<SolutionArea>(self.areas.as_deref())?))
    }
}

/// Body for create and full update. `solutionPlays` is kept as-is on update
/// when omitted.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultantBody {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub industries: Option<Vec<Industry>>,
    #[serde(default)]
    pub primary_industry: Option<Industry>,
    #[serde(default)]
    pub region: Option<Region>,
    #[serde(default)]
    pub solution_plays: Option<BTreeMap<String, SolutionPlayData>>,
}

impl ConsultantBody {
    fn apply(self, c: &mut Consultant) {
        c.name = self.name.trim().to_string();
        c.email = self.email.trim().to_string();
        c.avatar = self.avatar.filter(|a| !a.trim().is_empty());
        c.industries = self.industries.filter(|i| !i.is_empty());
        c.primary_industry = self.primary_industry;
        c.region = self.region;
        if let Some(plays) = self.solution_plays {
            c.solution_plays = plays;
        }
    }
}

/// A consultant record with its card summary alongside.
#[derive(Serialize)]
struct ConsultantCard<'a> {
    #[serde(flatten)]
    consultant: &'a Consultant,
    summary: CardSummary,
}

fn ensure_unique_email(
    store: &dyn ConsultantStore,
    email: &str,
    except_id: Option<&str>,
) -> Result<(), AppError> {
    let taken = store.read()?.iter().any(|c| {
        Some(c.id.as_str()) != except_id && c.email.trim().eq_ignore_ascii_case(email.trim())
    });
    if taken {
        return Err(AppError::conflict(format!(
            "a consultant with email '{}' already exists",
            email.trim()
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// List / get
// ---------------------------------------------------------------------------

/// GET /api/consultants: search and facet-filter, input order preserved.
pub async fn list_consultants(
    State(app): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let filter = params.to_filter()?;
    let store = app.store.clone();
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let consultants = store.read()?;
        let limit = Config::load_or_default(&root)?.card_preview_limit;
        let cards: Vec<ConsultantCard<'_>> = filter
            .apply(&consultants)
            .into_iter()
            .map(|c| ConsultantCard {
                consultant: c,
                summary: card_summary(c, limit),
            })
            .collect();
        Ok::<_, AppError>(serde_json::to_value(&cards)?)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(result))
}

/// GET /api/consultants/{id}
pub async fn get_consultant(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Consultant>, AppError> {
    let store = app.store.clone();
    let consultant = tokio::task::spawn_blocking(move || store.get(&id))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(consultant))
}

// ---------------------------------------------------------------------------
// Create / update / delete
// ---------------------------------------------------------------------------

/// POST /api/consultants: add a consultant with a fresh id.
pub async fn create_consultant(
    State(app): State<AppState>,
    Json(body): Json<ConsultantBody>,
) -> Result<(StatusCode, Json<Consultant>), AppError> {
    validate_contact(&body.name, &body.email)?;
    let store = app.store.clone();
    let consultant = tokio::task::spawn_blocking(move || {
        ensure_unique_email(&*store, &body.email, None)?;
        let mut consultant = Consultant::new("", "");
        body.apply(&mut consultant);
        store.save(consultant.clone())?;
        Ok::<_, AppError>(consultant)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!(id = %consultant.id, name = %consultant.name, "consultant added");
    let _ = app.event_tx.send(BoardEvent::Consultants);
    Ok((StatusCode::CREATED, Json(consultant)))
}

/// PUT /api/consultants/{id}: replace contact details and tags.
pub async fn update_consultant(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ConsultantBody>,
) -> Result<Json<Consultant>, AppError> {
    validate_contact(&body.name, &body.email)?;
    let store = app.store.clone();
    let updated = tokio::task::spawn_blocking(move || {
        store.get(&id)?;
        ensure_unique_email(&*store, &body.email, Some(&id))?;
        let updated = store.update(&id, |c| body.apply(c))?;
        Ok::<_, AppError>(updated)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!(id = %updated.id, "consultant updated");
    let _ = app.event_tx.send(BoardEvent::Consultants);
    Ok(Json(updated))
}

/// DELETE /api/consultants/{id}
pub async fn delete_consultant(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let store = app.store.clone();
    let id_clone = id.clone();
    let removed = tokio::task::spawn_blocking(move || store.remove(&id_clone))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    if !removed {
        return Err(AppError::not_found(format!("consultant '{id}' not found")));
    }
    tracing::info!(id = %id, "consultant deleted");
    let _ = app.event_tx.send(BoardEvent::Consultants);
    Ok(Json(serde_json::json!({ "deleted": true })))
}

/// PUT /api/consultants/{id}/plays/{play}: replace one play entry.
pub async fn set_play(
    State(app): State<AppState>,
    Path((id, play)): Path<(String, String)>,
    Json(data): Json<SolutionPlayData>,
) -> Result<Json<Consultant>, AppError> {
    let play: SolutionPlay = play.parse()?;
    let store = app.store.clone();
    let updated = tokio::task::spawn_blocking(move || {
        store.update(&id, |c| c.set_play(play, data))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    tracing::info!(id = %updated.id, play = %play, "play metrics updated");
    let _ = app.event_tx.send(BoardEvent::Consultants);
    Ok(Json(updated))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
