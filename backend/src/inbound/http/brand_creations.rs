//! Brand creation HTTP handlers.
//!
//! ```text
//! POST  /api/v1/brand-creations
//! GET   /api/v1/brand-creations
//! GET   /api/v1/brand-creations/{id}
//! PATCH /api/v1/brand-creations/{id}
//! ```
//!
//! Bodies deserialize into permissive DTOs through [`JsonBody`], which names
//! the path of any wrongly typed value. Every field is then parsed into
//! domain values with a [`FieldErrors`] accumulator so one response reports
//! all failing fields at once. Result fields are stored exactly as sent.

use actix_web::{HttpResponse, get, patch, post, web};
use serde::{Deserialize, Deserializer, Serialize};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::brand::{
    BrandCreation, BrandCreationId, BrandCreationPatch, BrandStatus, CompanyName,
    CreativeIdentity, GenerationMetadata, GenerationPhase, HexColour, LearningContribution,
    NewBrandCreation, Score, Sector, StyleMode, VisualUniverse, Watermark,
};
use crate::domain::Error;
use crate::domain::ports::{CreateBrandCreationRequest, UpdateBrandCreationRequest};
use crate::inbound::http::ApiResult;
use crate::inbound::http::json::JsonBody;
use crate::inbound::http::schemas::{BrandCreationSchema, ErrorSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldErrors, FieldName, parse_path_uuid};

const ID: FieldName = FieldName::new("id");
const COMPANY_NAME: FieldName = FieldName::new("companyName");
const STYLE_MODE: FieldName = FieldName::new("styleMode");
const STATUS: FieldName = FieldName::new("status");
const PHASE_NAME: FieldName = FieldName::new("phases.name");
const AI_ENGINE: FieldName = FieldName::new("aiMetadata.engine");
const LEARNING_ACCEPTED: FieldName = FieldName::new("learningContribution.accepted");

/// Request payload for creating a brand creation.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrandCreationRequestBody {
    #[schema(example = "Acme")]
    pub company_name: Option<String>,
    #[schema(example = "Fintech")]
    pub sector: Option<String>,
    /// `timeless` (default) or `futuristic`.
    #[schema(example = "futuristic")]
    pub style_mode: Option<String>,
    pub custom_watermark: Option<String>,
}

/// Partial update. Absent keys are left alone; `null` clears nullable fields.
///
/// Unknown keys, including `id` and `createdAt`, are rejected.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateBrandCreationRequestBody {
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub company_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, nullable)]
    pub sector: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>)]
    pub style_mode: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, nullable)]
    pub custom_watermark: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, example = "completed")]
    pub status: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<CreativeIdentityBody>, nullable)]
    pub creative_identity: Option<Option<CreativeIdentityBody>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<VisualUniverseBody>, nullable)]
    pub visual_universe: Option<Option<VisualUniverseBody>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>, nullable, minimum = 0.0, maximum = 1.0)]
    pub hypnotic_power_score: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>, nullable, minimum = 0.0, maximum = 1.0)]
    pub emotional_impact_score: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>, nullable, minimum = 0.0, maximum = 1.0)]
    pub memorability_score: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, nullable)]
    pub predicted_reaction: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<Vec<GenerationPhaseBody>>, nullable)]
    pub phases: Option<Option<Vec<GenerationPhaseBody>>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<String>, nullable)]
    pub quantum_signature: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<GenerationMetadataBody>, nullable)]
    pub ai_metadata: Option<Option<GenerationMetadataBody>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>, nullable, minimum = 0.0, maximum = 1.0)]
    pub coherence_score: Option<Option<f64>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<LearningContributionBody>, nullable)]
    pub learning_contribution: Option<Option<LearningContributionBody>>,
    #[serde(default, deserialize_with = "nullable")]
    #[schema(value_type = Option<f64>, nullable, minimum = 0.0, maximum = 1.0)]
    pub future_compatibility_score: Option<Option<f64>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreativeIdentityBody {
    pub tagline: Option<String>,
    pub brand_voice: Option<String>,
    pub core_values: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VisualUniverseBody {
    /// `#RRGGBB` colours.
    #[schema(example = json!(["#1A2B3C", "#FFAA00"]))]
    pub palette: Option<Vec<String>>,
    pub typography: Option<String>,
    pub logo_concept: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationPhaseBody {
    pub name: Option<String>,
    pub completed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadataBody {
    pub engine: Option<String>,
    pub model_version: Option<String>,
    pub duration_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LearningContributionBody {
    pub accepted: Option<bool>,
    pub notes: Option<String>,
}

/// Distinguish an explicit `null` (`Some(None)`) from an absent key (`None`,
/// via `#[serde(default)]`).
fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Trimmed text, with blank input treated as absent. Applied to the
/// optional sector and watermark labels only, never to result fields.
fn non_blank(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

fn parse_create(body: CreateBrandCreationRequestBody) -> Result<NewBrandCreation, Error> {
    let mut errors = FieldErrors::new();
    let company_name = errors
        .require(body.company_name, COMPANY_NAME)
        .and_then(|raw| errors.capture(CompanyName::new(raw)));
    let sector = non_blank(body.sector).and_then(|raw| errors.capture(Sector::new(raw)));
    let style_mode = match body.style_mode {
        None => Some(StyleMode::default()),
        Some(raw) => errors.capture(raw.parse::<StyleMode>()),
    };
    let custom_watermark =
        non_blank(body.custom_watermark).and_then(|raw| errors.capture(Watermark::new(raw)));
    errors.finish()?;

    match (company_name, style_mode) {
        (Some(company_name), Some(style_mode)) => Ok(NewBrandCreation {
            company_name,
            sector,
            style_mode,
            custom_watermark,
        }),
        _ => Err(Error::internal("validated brand creation fields missing")),
    }
}

/// Parse a nullable patch field. Returns `None` when the key was absent or
/// when parsing failed (the failure is recorded in `errors`).
fn nullable_field<R, T>(
    errors: &mut FieldErrors,
    raw: Option<Option<R>>,
    parse: impl FnOnce(&mut FieldErrors, R) -> Option<T>,
) -> Option<Option<T>> {
    match raw {
        None => None,
        Some(None) => Some(None),
        Some(Some(value)) => parse(errors, value).map(Some),
    }
}

/// Parse a patch field that may be replaced but never cleared.
fn required_field<R, T>(
    errors: &mut FieldErrors,
    raw: Option<Option<R>>,
    field: FieldName,
    parse: impl FnOnce(&mut FieldErrors, R) -> Option<T>,
) -> Option<T> {
    match raw {
        None => None,
        Some(None) => {
            errors.invalid(field, format!("{} cannot be null", field.as_str()));
            None
        }
        Some(Some(value)) => parse(errors, value),
    }
}

fn score(
    errors: &mut FieldErrors,
    raw: Option<Option<f64>>,
    field: &'static str,
) -> Option<Option<Score>> {
    nullable_field(errors, raw, |errors, value| errors.capture(Score::new(value, field)))
}

fn parse_creative_identity(body: CreativeIdentityBody) -> CreativeIdentity {
    CreativeIdentity {
        tagline: body.tagline,
        brand_voice: body.brand_voice,
        core_values: body.core_values.unwrap_or_default(),
    }
}

fn parse_visual_universe(
    errors: &mut FieldErrors,
    body: VisualUniverseBody,
) -> Option<VisualUniverse> {
    let mut palette = Vec::new();
    let mut valid = true;
    for raw in body.palette.unwrap_or_default() {
        match errors.capture(HexColour::new(raw)) {
            Some(colour) => palette.push(colour),
            None => valid = false,
        }
    }
    valid.then(|| VisualUniverse {
        palette,
        typography: body.typography,
        logo_concept: body.logo_concept,
    })
}

fn parse_phases(
    errors: &mut FieldErrors,
    bodies: Vec<GenerationPhaseBody>,
) -> Option<Vec<GenerationPhase>> {
    let mut phases = Vec::with_capacity(bodies.len());
    let mut valid = true;
    for body in bodies {
        let phase = errors
            .require(body.name, PHASE_NAME)
            .and_then(|name| {
                errors.capture(GenerationPhase::new(name, body.completed.unwrap_or(false)))
            });
        match phase {
            Some(phase) => phases.push(phase),
            None => valid = false,
        }
    }
    valid.then_some(phases)
}

fn parse_ai_metadata(
    errors: &mut FieldErrors,
    body: GenerationMetadataBody,
) -> Option<GenerationMetadata> {
    errors.require(body.engine, AI_ENGINE).and_then(|engine| {
        errors.capture(GenerationMetadata::new(
            engine,
            body.model_version,
            body.duration_ms,
        ))
    })
}

fn parse_learning_contribution(
    errors: &mut FieldErrors,
    body: LearningContributionBody,
) -> Option<LearningContribution> {
    errors
        .require(body.accepted, LEARNING_ACCEPTED)
        .map(|accepted| LearningContribution {
            accepted,
            notes: body.notes,
        })
}

fn parse_patch(body: UpdateBrandCreationRequestBody) -> Result<BrandCreationPatch, Error> {
    let mut errors = FieldErrors::new();
    let patch = BrandCreationPatch {
        company_name: required_field(&mut errors, body.company_name, COMPANY_NAME, |errors, raw| {
            errors.capture(CompanyName::new(raw))
        }),
        sector: body
            .sector
            .map(|raw| non_blank(raw).and_then(|value| errors.capture(Sector::new(value)))),
        style_mode: required_field(&mut errors, body.style_mode, STYLE_MODE, |errors, raw| {
            errors.capture(raw.parse::<StyleMode>())
        }),
        custom_watermark: body
            .custom_watermark
            .map(|raw| non_blank(raw).and_then(|value| errors.capture(Watermark::new(value)))),
        status: required_field(&mut errors, body.status, STATUS, |errors, raw| {
            errors.capture(raw.parse::<BrandStatus>())
        }),
        creative_identity: nullable_field(&mut errors, body.creative_identity, |_, raw| {
            Some(parse_creative_identity(raw))
        }),
        visual_universe: nullable_field(&mut errors, body.visual_universe, parse_visual_universe),
        hypnotic_power_score: score(&mut errors, body.hypnotic_power_score, "hypnoticPowerScore"),
        emotional_impact_score: score(
            &mut errors,
            body.emotional_impact_score,
            "emotionalImpactScore",
        ),
        memorability_score: score(&mut errors, body.memorability_score, "memorabilityScore"),
        predicted_reaction: body.predicted_reaction,
        phases: nullable_field(&mut errors, body.phases, parse_phases),
        quantum_signature: body.quantum_signature,
        ai_metadata: nullable_field(&mut errors, body.ai_metadata, parse_ai_metadata),
        coherence_score: score(&mut errors, body.coherence_score, "coherenceScore"),
        learning_contribution: nullable_field(
            &mut errors,
            body.learning_contribution,
            parse_learning_contribution,
        ),
        future_compatibility_score: score(
            &mut errors,
            body.future_compatibility_score,
            "futureCompatibilityScore",
        ),
    };
    errors.finish()?;
    Ok(patch)
}

fn parse_id(raw: &str) -> Result<BrandCreationId, Error> {
    parse_path_uuid(raw, ID).map(BrandCreationId::from_uuid)
}

pub(crate) fn brand_creation_not_found(id: &BrandCreationId) -> Error {
    Error::not_found(format!("brand creation {id} not found"))
}

/// Start a brand creation in the `creating` state.
///
/// # Examples
/// ```no_run
/// use actix_web::{HttpResponse, web};
/// use backend::inbound::http::brand_creations::{
///     CreateBrandCreationRequestBody, create_brand_creation,
/// };
/// use backend::inbound::http::json::JsonBody;
/// use backend::inbound::http::{ApiResult, state::HttpState};
///
/// async fn call_handler(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
///     let payload = JsonBody(CreateBrandCreationRequestBody {
///         company_name: Some("Acme".to_owned()),
///         sector: Some("Fintech".to_owned()),
///         ..CreateBrandCreationRequestBody::default()
///     });
///     create_brand_creation(state, payload).await
/// }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/brand-creations",
    request_body = CreateBrandCreationRequestBody,
    responses(
        (status = 201, description = "Brand creation stored", body = BrandCreationSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["brand-creations"],
    operation_id = "createBrandCreation"
)]
#[post("/brand-creations")]
pub async fn create_brand_creation(
    state: web::Data<HttpState>,
    payload: JsonBody<CreateBrandCreationRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = parse_create(payload.into_inner())?;
    let record = state
        .brand_creations
        .create_brand_creation(CreateBrandCreationRequest { draft })
        .await?;
    Ok(HttpResponse::Created().json(record))
}

/// List every brand creation in insertion order.
#[utoipa::path(
    get,
    path = "/api/v1/brand-creations",
    responses(
        (status = 200, description = "All brand creations", body = [BrandCreationSchema]),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["brand-creations"],
    operation_id = "listBrandCreations"
)]
#[get("/brand-creations")]
pub async fn list_brand_creations(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<BrandCreation>>> {
    let records = state.brand_creations_query.list_brand_creations().await?;
    Ok(web::Json(records))
}

/// Fetch a single brand creation.
#[utoipa::path(
    get,
    path = "/api/v1/brand-creations/{id}",
    params(("id" = uuid::Uuid, Path, description = "Brand creation identifier")),
    responses(
        (status = 200, description = "Brand creation", body = BrandCreationSchema),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Unknown brand creation", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["brand-creations"],
    operation_id = "getBrandCreation"
)]
#[get("/brand-creations/{id}")]
pub async fn get_brand_creation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BrandCreation>> {
    let id = parse_id(&path.into_inner())?;
    state
        .brand_creations_query
        .get_brand_creation(&id)
        .await?
        .map(web::Json)
        .ok_or_else(|| brand_creation_not_found(&id))
}

/// Merge a partial update into a brand creation.
///
/// Nested objects are replaced as a whole. An empty body returns the record
/// unchanged.
#[utoipa::path(
    patch,
    path = "/api/v1/brand-creations/{id}",
    params(("id" = uuid::Uuid, Path, description = "Brand creation identifier")),
    request_body = UpdateBrandCreationRequestBody,
    responses(
        (status = 200, description = "Merged brand creation", body = BrandCreationSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Unknown brand creation", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["brand-creations"],
    operation_id = "updateBrandCreation"
)]
#[patch("/brand-creations/{id}")]
pub async fn update_brand_creation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: JsonBody<UpdateBrandCreationRequestBody>,
) -> ApiResult<web::Json<BrandCreation>> {
    let id = parse_id(&path.into_inner())?;
    let patch = parse_patch(payload.into_inner())?;
    debug!(%id, fields = ?patch.touched_fields(), "parsed brand creation patch");
    state
        .brand_creations
        .update_brand_creation(UpdateBrandCreationRequest { id, patch })
        .await?
        .map(web::Json)
        .ok_or_else(|| brand_creation_not_found(&id))
}

#[cfg(test)]
#[path = "brand_creations_tests.rs"]
mod tests;
