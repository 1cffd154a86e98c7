//! Feedback HTTP handlers.
//!
//! ```text
//! POST /api/v1/feedback
//! GET  /api/v1/brand-creations/{id}/feedback
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Error;
use crate::domain::brand::BrandCreationId;
use crate::domain::feedback::{Feedback, FeedbackCategory, FeedbackComment, NewFeedback, Rating};
use crate::domain::ports::SubmitFeedbackRequest;
use crate::inbound::http::ApiResult;
use crate::inbound::http::json::JsonBody;
use crate::inbound::http::schemas::{ErrorSchema, FeedbackSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldErrors, FieldName, parse_path_uuid};

const BRAND_CREATION_ID: FieldName = FieldName::new("brandCreationId");
const RATING: FieldName = FieldName::new("rating");
const CATEGORY: FieldName = FieldName::new("category");

/// Request payload for submitting feedback.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequestBody {
    /// Brand creation the feedback is about. Not checked for existence.
    #[schema(format = "uuid")]
    pub brand_creation_id: Option<String>,
    /// Whole number between 1 and 5.
    #[schema(value_type = Option<i64>, minimum = 1, maximum = 5, example = 4)]
    pub rating: Option<serde_json::Number>,
    pub comment: Option<String>,
    /// One of `design`, `functionality`, `creativity`, `overall`.
    #[schema(example = "design")]
    pub category: Option<String>,
    pub is_anonymous: Option<bool>,
    pub contribute_to_learning: Option<bool>,
}

fn parse_rating(errors: &mut FieldErrors, raw: serde_json::Number) -> Option<Rating> {
    match raw.as_i64() {
        Some(value) => errors.capture(Rating::new(value)),
        None => {
            errors.invalid(
                RATING,
                format!("rating must be an integer between 1 and 5 (got {raw})"),
            );
            None
        }
    }
}

fn parse_submission(body: SubmitFeedbackRequestBody) -> Result<NewFeedback, Error> {
    let mut errors = FieldErrors::new();
    let brand_creation_id = body
        .brand_creation_id
        .and_then(|raw| errors.uuid(&raw, BRAND_CREATION_ID))
        .map(BrandCreationId::from_uuid);
    let rating = errors
        .require(body.rating, RATING)
        .and_then(|raw| parse_rating(&mut errors, raw));
    let comment = body
        .comment
        .and_then(|raw| errors.capture(FeedbackComment::parse(&raw)))
        .flatten();
    let category = errors
        .require(body.category, CATEGORY)
        .and_then(|raw| errors.capture(raw.parse::<FeedbackCategory>()));
    errors.finish()?;

    match (rating, category) {
        (Some(rating), Some(category)) => Ok(NewFeedback {
            brand_creation_id,
            rating,
            comment,
            category,
            is_anonymous: body.is_anonymous,
            contribute_to_learning: body.contribute_to_learning,
        }),
        _ => Err(Error::internal("validated feedback fields missing")),
    }
}

/// Record feedback, optionally tied to a brand creation.
///
/// # Examples
/// ```no_run
/// use actix_web::{HttpResponse, web};
/// use backend::inbound::http::feedback::{SubmitFeedbackRequestBody, submit_feedback};
/// use backend::inbound::http::json::JsonBody;
/// use backend::inbound::http::{ApiResult, state::HttpState};
///
/// async fn call_handler(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
///     let payload = JsonBody(SubmitFeedbackRequestBody {
///         rating: Some(serde_json::Number::from(5)),
///         category: Some("overall".to_owned()),
///         ..SubmitFeedbackRequestBody::default()
///     });
///     submit_feedback(state, payload).await
/// }
/// ```
#[utoipa::path(
    post,
    path = "/api/v1/feedback",
    request_body = SubmitFeedbackRequestBody,
    responses(
        (status = 201, description = "Feedback recorded", body = FeedbackSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["feedback"],
    operation_id = "submitFeedback"
)]
#[post("/feedback")]
pub async fn submit_feedback(
    state: web::Data<HttpState>,
    payload: JsonBody<SubmitFeedbackRequestBody>,
) -> ApiResult<HttpResponse> {
    let draft = parse_submission(payload.into_inner())?;
    let feedback = state
        .feedback
        .submit_feedback(SubmitFeedbackRequest { draft })
        .await?;
    Ok(HttpResponse::Created().json(feedback))
}

/// List feedback referencing a brand creation, oldest first.
///
/// An unknown identifier yields an empty list rather than 404 because
/// feedback references are not checked on submission.
#[utoipa::path(
    get,
    path = "/api/v1/brand-creations/{id}/feedback",
    params(("id" = uuid::Uuid, Path, description = "Brand creation identifier")),
    responses(
        (status = 200, description = "Feedback for the brand creation", body = [FeedbackSchema]),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 503, description = "Service unavailable", body = ErrorSchema)
    ),
    tags = ["feedback"],
    operation_id = "listBrandCreationFeedback"
)]
#[get("/brand-creations/{id}/feedback")]
pub async fn list_feedback_for_brand_creation(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<Feedback>>> {
    let id = parse_path_uuid(&path.into_inner(), FieldName::new("id"))
        .map(BrandCreationId::from_uuid)?;
    let feedback = state
        .feedback_query
        .list_feedback_for_brand_creation(&id)
        .await?;
    Ok(web::Json(feedback))
}

#[cfg(test)]
#[path = "feedback_tests.rs"]
mod tests;
