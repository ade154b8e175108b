//! Read-only aggregate views over the whole collection.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use skillboard_core::{
    aggregate::{analyze_play, overview},
    catalog::{Industry, Region, SolutionArea, SolutionPlay},
    config::Config,
    coverage::{assess, deep_dive},
    matrix::skills_matrix,
    store::ConsultantStore,
    tier::SkillTier,
};

use crate::error::AppError;
use crate::state::AppState;

/// GET /api/overview
pub async fn get_overview(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let store = app.store.clone();
    let result = tokio::task::spawn_blocking(move || {
        let consultants = store.read()?;
        Ok::<_, AppError>(serde_json::to_value(overview(&consultants))?)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(result))
}

/// GET /api/matrix
pub async fn get_matrix(State(app): State<AppState>) -> Result<Json<serde_json::Value>, AppError> {
    let store = app.store.clone();
    let result = tokio::task::spawn_blocking(move || {
        let consultants = store.read()?;
        Ok::<_, AppError>(serde_json::to_value(skills_matrix(&consultants))?)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// Analytics
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct AnalyticsParams {
    pub play: Option<String>,
}

/// GET /api/analytics?play=: qualified consultants for one play, falling
/// back to the configured default play.
pub async fn get_analytics(
    State(app): State<AppState>,
    Query(params): Query<AnalyticsParams>,
) -> Result<Json<serde_json::Value>, AppError> {
    let requested = params
        .play
        .as_deref()
        .filter(|p| !p.trim().is_empty())
        .map(str::parse::<SolutionPlay>)
        .transpose()?;
    let store = app.store.clone();
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let play = match requested {
            Some(play) => play,
            None => Config::load_or_default(&root)?.default_play,
        };
        let consultants = store.read()?;
        let analytics = analyze_play(&consultants, play);
        Ok::<_, AppError>(serde_json::json!({
            "play": analytics.play,
            "area": analytics.play.area(),
            "qualified_count": analytics.qualified_count(),
            "distribution": analytics.distribution,
            "total_hours": analytics.total_hours,
            "total_training": analytics.total_training,
            "qualified": analytics.qualified,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// Capabilities
// ---------------------------------------------------------------------------

/// GET /api/capabilities: coverage for every play plus the area roll-up.
pub async fn get_capabilities(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let store = app.store.clone();
    let result = tokio::task::spawn_blocking(move || {
        let consultants = store.read()?;
        let assessment = assess(&consultants);
        Ok::<_, AppError>(serde_json::json!({
            "consultant_count": assessment.consultant_count,
            "summary": {
                "strong": assessment.strong().len(),
                "growing": assessment.growing().len(),
                "missing": assessment.missing().len(),
            },
            "plays": assessment.plays,
            "areas": assessment.areas,
        }))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(result))
}

/// GET /api/capabilities/{play}: tier groups for one play.
pub async fn get_capability(
    State(app): State<AppState>,
    Path(play): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let play: SolutionPlay = play.parse()?;
    let store = app.store.clone();
    let result = tokio::task::spawn_blocking(move || {
        let consultants = store.read()?;
        Ok::<_, AppError>(serde_json::to_value(deep_dive(&consultants, play))?)
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;
    Ok(Json(result))
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// GET /api/catalog: the fixed vocabularies a client needs for forms and
/// filter chips.
pub async fn get_catalog() -> Json<serde_json::Value> {
    let areas: Vec<_> = SolutionArea::all()
        .iter()
        .map(|&area| {
            let plays: Vec<_> = area
                .plays()
                .iter()
                .map(|&p| serde_json::json!({ "name": p, "slug": p.slug() }))
                .collect();
            serde_json::json!({ "name": area, "slug": area.slug(), "plays": plays })
        })
        .collect();
    let tiers: Vec<_> = SkillTier::qualified()
        .iter()
        .map(|&t| serde_json::json!({ "name": t, "hours": t.hours_band() }))
        .collect();
    Json(serde_json::json!({
        "areas": areas,
        "industries": Industry::all(),
        "regions": Region::all(),
        "tiers": tiers,
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
