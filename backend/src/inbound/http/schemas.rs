//! OpenAPI schema definitions for domain types.
//!
//! Domain types remain framework-agnostic by not deriving `ToSchema`. This
//! module provides the schema definitions required for OpenAPI documentation
//! using utoipa's external schema registration.
//!
//! The schema wrappers mirror the serialised shape of their corresponding
//! domain types but live in the inbound adapter layer where framework
//! concerns belong.

#![expect(
    dead_code,
    reason = "Schema wrappers are used only for OpenAPI generation via utoipa"
)]

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::ErrorCode`].
///
/// Stable machine-readable error codes returned in API error responses.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// The request is malformed or fails validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// The requested resource does not exist.
    #[schema(rename = "not_found")]
    NotFound,
    /// The record store is temporarily unusable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// An unexpected error occurred on the server.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// OpenAPI schema for [`crate::domain::Error`].
///
/// Validation failures carry `details.errors`, a list of
/// `{field, code, message}` objects.
#[derive(ToSchema)]
#[schema(as = crate::domain::Error, rename_all = "camelCase")]
pub struct ErrorSchema {
    /// Stable machine-readable error code.
    #[schema(example = "invalid_request")]
    code: ErrorCodeSchema,
    /// Human-readable message returned to clients.
    #[schema(example = "request failed validation: companyName")]
    message: String,
    /// Correlation identifier, also sent in the `trace-id` header.
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    trace_id: Option<String>,
    /// Supplementary error details for clients.
    #[schema(example = json!({
        "errors": [{
            "field": "companyName",
            "code": "missing_field",
            "message": "missing required field: companyName"
        }]
    }))]
    details: Option<serde_json::Value>,
}

/// OpenAPI schema for [`crate::domain::brand::CreativeIdentity`].
#[derive(ToSchema)]
#[schema(as = crate::domain::brand::CreativeIdentity, rename_all = "camelCase")]
pub struct CreativeIdentitySchema {
    tagline: Option<String>,
    brand_voice: Option<String>,
    core_values: Vec<String>,
}

/// OpenAPI schema for [`crate::domain::brand::VisualUniverse`].
#[derive(ToSchema)]
#[schema(as = crate::domain::brand::VisualUniverse, rename_all = "camelCase")]
pub struct VisualUniverseSchema {
    /// Upper-case `#RRGGBB` colours.
    #[schema(example = json!(["#1A2B3C"]))]
    palette: Vec<String>,
    typography: Option<String>,
    logo_concept: Option<String>,
}

/// OpenAPI schema for [`crate::domain::brand::GenerationPhase`].
#[derive(ToSchema)]
#[schema(as = crate::domain::brand::GenerationPhase)]
pub struct GenerationPhaseSchema {
    name: String,
    completed: bool,
}

/// OpenAPI schema for [`crate::domain::brand::GenerationMetadata`].
#[derive(ToSchema)]
#[schema(as = crate::domain::brand::GenerationMetadata, rename_all = "camelCase")]
pub struct GenerationMetadataSchema {
    engine: String,
    model_version: Option<String>,
    duration_ms: Option<u64>,
}

/// OpenAPI schema for [`crate::domain::brand::LearningContribution`].
#[derive(ToSchema)]
#[schema(as = crate::domain::brand::LearningContribution)]
pub struct LearningContributionSchema {
    accepted: bool,
    notes: Option<String>,
}

/// OpenAPI schema for [`crate::domain::brand::BrandCreation`].
///
/// Every result field is present in responses, `null` until set.
#[derive(ToSchema)]
#[schema(as = crate::domain::brand::BrandCreation, rename_all = "camelCase")]
pub struct BrandCreationSchema {
    #[schema(value_type = uuid::Uuid)]
    id: String,
    #[schema(example = "Acme")]
    company_name: String,
    #[schema(example = "Fintech")]
    sector: Option<String>,
    /// `timeless` or `futuristic`.
    #[schema(example = "timeless")]
    style_mode: String,
    custom_watermark: Option<String>,
    /// `creating`, `completed`, or `failed`.
    #[schema(example = "creating")]
    status: String,
    creative_identity: Option<CreativeIdentitySchema>,
    visual_universe: Option<VisualUniverseSchema>,
    #[schema(minimum = 0.0, maximum = 1.0)]
    hypnotic_power_score: Option<f64>,
    #[schema(minimum = 0.0, maximum = 1.0)]
    emotional_impact_score: Option<f64>,
    #[schema(minimum = 0.0, maximum = 1.0)]
    memorability_score: Option<f64>,
    predicted_reaction: Option<String>,
    phases: Option<Vec<GenerationPhaseSchema>>,
    quantum_signature: Option<String>,
    ai_metadata: Option<GenerationMetadataSchema>,
    #[schema(minimum = 0.0, maximum = 1.0)]
    coherence_score: Option<f64>,
    learning_contribution: Option<LearningContributionSchema>,
    #[schema(minimum = 0.0, maximum = 1.0)]
    future_compatibility_score: Option<f64>,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
    #[schema(value_type = String, format = DateTime)]
    updated_at: String,
}

/// OpenAPI schema for [`crate::domain::feedback::SentimentAnalysis`].
#[derive(ToSchema)]
#[schema(as = crate::domain::feedback::SentimentAnalysis)]
pub struct SentimentAnalysisSchema {
    label: String,
    confidence: f64,
}

/// OpenAPI schema for [`crate::domain::feedback::ImpactAnalysis`].
#[derive(ToSchema)]
#[schema(as = crate::domain::feedback::ImpactAnalysis)]
pub struct ImpactAnalysisSchema {
    summary: String,
}

/// OpenAPI schema for [`crate::domain::feedback::Feedback`].
#[derive(ToSchema)]
#[schema(as = crate::domain::feedback::Feedback, rename_all = "camelCase")]
pub struct FeedbackSchema {
    #[schema(value_type = uuid::Uuid)]
    id: String,
    #[schema(value_type = Option<uuid::Uuid>)]
    brand_creation_id: Option<String>,
    #[schema(minimum = 1, maximum = 5, example = 4)]
    rating: u8,
    comment: Option<String>,
    /// `design`, `functionality`, `creativity`, or `overall`.
    #[schema(example = "design")]
    category: String,
    is_anonymous: bool,
    contribute_to_learning: bool,
    sentiment_analysis: Option<SentimentAnalysisSchema>,
    impact_analysis: Option<ImpactAnalysisSchema>,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}
