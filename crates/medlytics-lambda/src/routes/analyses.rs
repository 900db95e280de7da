use axum::Json;
use axum::extract::{Extension, Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use uuid::Uuid;

use medlytics_core::models::analysis::{AnalysisKind, AnalysisRecord};
use medlytics_core::models::risk::RiskLevel;
use medlytics_instruments::require_instrument;

use crate::audit::{AuditAction, AuditEvent};
use crate::error::ApiError;
use crate::middleware::auth::Caller;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct HistoryQuery {
    #[serde(rename = "riskLevel")]
    risk_level: Option<String>,
}

/// Validate, score and store a questionnaire.
pub async fn predict(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(kind): Path<String>,
    Json(body): Json<serde_json::Value>,
) -> Result<(StatusCode, Json<AnalysisRecord>), ApiError> {
    let kind: AnalysisKind = kind.parse()?;
    let assessment = require_instrument(kind.as_str())?.evaluate(body)?;
    let record = AnalysisRecord::new(
        kind,
        caller.owner_id().map(str::to_string),
        assessment.risk_level,
        assessment.input,
        assessment.result,
    );
    state.store.save(&record).await?;

    AuditEvent::new(AuditAction::Create, kind, caller.subject())
        .analysis(record.id)
        .risk_level(Some(record.risk_level))
        .emit();

    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn get_result(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path((kind, id)): Path<(String, Uuid)>,
) -> Result<Json<AnalysisRecord>, ApiError> {
    let kind: AnalysisKind = kind.parse()?;
    let record = state.store.get(kind, caller.owner_id(), id).await?;

    AuditEvent::new(AuditAction::Read, kind, caller.subject())
        .analysis(id)
        .emit();

    Ok(Json(record))
}

/// The caller's analyses of one kind, newest first.
pub async fn history(
    State(state): State<AppState>,
    Extension(caller): Extension<Caller>,
    Path(kind): Path<String>,
    Query(query): Query<HistoryQuery>,
) -> Result<Json<Vec<AnalysisRecord>>, ApiError> {
    let kind: AnalysisKind = kind.parse()?;
    let user = caller.require_user()?;
    let risk_level = query
        .risk_level
        .as_deref()
        .map(str::parse::<RiskLevel>)
        .transpose()?;

    let mut records = state.store.history(kind, Some(&user.sub)).await?;
    if let Some(level) = risk_level {
        records.retain(|r| r.risk_level == level);
    }

    AuditEvent::new(AuditAction::List, kind, &user.sub)
        .risk_level(risk_level)
        .count(records.len())
        .emit();

    Ok(Json(records))
}
