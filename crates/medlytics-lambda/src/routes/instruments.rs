use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use medlytics_core::models::analysis::AnalysisKind;
use medlytics_instruments::scoring::Section;
use medlytics_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
    kind: AnalysisKind,
}

#[derive(Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    kind: AnalysisKind,
    sections: Vec<Section>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
            kind: i.kind(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id)
        .ok_or_else(|| ApiError::NotFound(format!("instrument not found: {id}")))?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        kind: instrument.kind(),
        sections: instrument.sections().to_vec(),
    }))
}
