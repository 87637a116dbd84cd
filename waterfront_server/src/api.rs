//! Routes and handlers.
//!
//! Request bodies are the core input records and responses are the result
//! records, serialized as-is. Handlers hold no state.

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tracing::warn;

use waterfront_core::calculations::{
    berthing, corrosion, mooring, morison, pile_axial, scour, seawall, tides, waves, BerthingInput,
    BerthingResult, CalculationItem, CalculationOutput, CorrosionInputs, CorrosionResult, EnvironmentalLoadInputs,
    MooringResult, MorisonInput, MorisonResult, PileAxialInputs, PileAxialResult, ScourInput, ScourResult,
    SeawallInput, SeawallResult, TideSeries, TideSeriesInput, WaveInput, WaveResult,
};
use waterfront_core::equations::{Equation, EquationMetadata, ALL_EQUATIONS};
use waterfront_core::jurisdictions::{list_jurisdictions, JurisdictionProfile};
use waterfront_core::CalcResult;

use crate::error::ApiError;

type ApiResult<T> = Result<Json<T>, ApiError>;

/// Build the service router.
pub fn create_router() -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/states", get(states))
        .route("/equations", get(equations))
        .route("/waves", post(waves_handler))
        .route("/morison", post(morison_handler))
        .route("/berthing", post(berthing_handler))
        .route("/mooring", post(mooring_handler))
        .route("/pile-axial", post(pile_axial_handler))
        .route("/corrosion", post(corrosion_handler))
        .route("/seawall", post(seawall_handler))
        .route("/scour", post(scour_handler))
        .route("/tides", post(tides_handler))
        .route("/calculate", post(calculate_handler))
}

fn respond<T>(calc_type: &str, result: CalcResult<T>) -> ApiResult<T> {
    result.map(Json).map_err(|e| {
        warn!(calc_type, code = e.error_code(), error = %e, "calculation rejected");
        ApiError(e)
    })
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn states() -> Json<Vec<JurisdictionProfile>> {
    Json(list_jurisdictions())
}

#[derive(Debug, Serialize)]
pub struct EquationEntry {
    pub id: Equation,
    #[serde(flatten)]
    pub metadata: EquationMetadata,
    pub citation: String,
}

pub async fn equations() -> Json<Vec<EquationEntry>> {
    Json(
        ALL_EQUATIONS
            .iter()
            .map(|eq| {
                let metadata = eq.metadata();
                EquationEntry {
                    id: *eq,
                    citation: metadata.reference.citation(),
                    metadata,
                }
            })
            .collect(),
    )
}

pub async fn waves_handler(Json(input): Json<WaveInput>) -> ApiResult<WaveResult> {
    respond("Waves", waves::calculate(&input))
}

pub async fn morison_handler(Json(input): Json<MorisonInput>) -> ApiResult<MorisonResult> {
    respond("Morison", morison::calculate(&input))
}

pub async fn berthing_handler(Json(input): Json<BerthingInput>) -> ApiResult<BerthingResult> {
    respond("Berthing", berthing::calculate(&input))
}

pub async fn mooring_handler(Json(input): Json<EnvironmentalLoadInputs>) -> ApiResult<MooringResult> {
    respond("Mooring", mooring::calculate(&input))
}

pub async fn pile_axial_handler(Json(input): Json<PileAxialInputs>) -> ApiResult<PileAxialResult> {
    respond("PileAxial", pile_axial::calculate(&input))
}

pub async fn corrosion_handler(Json(input): Json<CorrosionInputs>) -> ApiResult<CorrosionResult> {
    respond("Corrosion", corrosion::calculate(&input))
}

pub async fn seawall_handler(Json(input): Json<SeawallInput>) -> ApiResult<SeawallResult> {
    respond("Seawall", seawall::calculate(&input))
}

pub async fn scour_handler(Json(input): Json<ScourInput>) -> ApiResult<ScourResult> {
    respond("Scour", scour::calculate(&input))
}

pub async fn tides_handler(Json(input): Json<TideSeriesInput>) -> ApiResult<TideSeries> {
    respond("Tides", tides::calculate(&input))
}

pub async fn calculate_handler(Json(item): Json<CalculationItem>) -> ApiResult<CalculationOutput> {
    respond(item.calc_type(), item.run())
}
