//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every brand creation and feedback endpoint, the
//! health checks, and the schema wrappers from
//! [`crate::inbound::http::schemas`] that describe domain payloads without
//! coupling domain types to utoipa.
//!
//! The generated document is served by Swagger UI in debug builds and
//! exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::health::{HealthReport, LifecyclePhase};
use crate::inbound::http::schemas::{
    BrandCreationSchema, CreativeIdentitySchema, ErrorCodeSchema, ErrorSchema, FeedbackSchema,
    GenerationMetadataSchema, GenerationPhaseSchema, ImpactAnalysisSchema,
    LearningContributionSchema, SentimentAnalysisSchema, VisualUniverseSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Brand studio API",
        description = "Create and refine brand creations and collect feedback on them.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::brand_creations::create_brand_creation,
        crate::inbound::http::brand_creations::list_brand_creations,
        crate::inbound::http::brand_creations::get_brand_creation,
        crate::inbound::http::brand_creations::update_brand_creation,
        crate::inbound::http::feedback::submit_feedback,
        crate::inbound::http::feedback::list_feedback_for_brand_creation,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        BrandCreationSchema,
        CreativeIdentitySchema,
        VisualUniverseSchema,
        GenerationPhaseSchema,
        GenerationMetadataSchema,
        LearningContributionSchema,
        FeedbackSchema,
        SentimentAnalysisSchema,
        ImpactAnalysisSchema,
        ErrorSchema,
        ErrorCodeSchema,
        HealthReport,
        LifecyclePhase
    )),
    tags(
        (name = "brand-creations", description = "Brand creation records"),
        (name = "feedback", description = "Feedback on generated brands"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
