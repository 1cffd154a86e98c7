//! User feedback, optionally tied to a brand creation.
//!
//! Feedback is immutable once recorded. The analysis fields exist in the
//! record shape for clients but nothing in the service populates them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::brand::BrandCreationId;

#[cfg(test)]
mod tests;

/// Maximum length of a feedback comment, in characters.
pub const COMMENT_MAX: usize = 2000;
/// Lowest accepted rating.
pub const RATING_MIN: u8 = 1;
/// Highest accepted rating.
pub const RATING_MAX: u8 = 5;
/// Applied when a submission omits `isAnonymous`.
pub const DEFAULT_IS_ANONYMOUS: bool = false;
/// Applied when a submission omits `contributeToLearning`.
pub const DEFAULT_CONTRIBUTE_TO_LEARNING: bool = true;

/// Validation errors raised by feedback constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FeedbackValidationError {
    #[error("rating must be an integer between 1 and 5 (got {value})")]
    RatingOutOfRange { value: i64 },
    #[error("comment must be at most 2000 characters")]
    CommentTooLong,
    #[error("category must be design, functionality, creativity, or overall (got {value})")]
    UnknownCategory { value: String },
}

impl FeedbackValidationError {
    /// Wire name of the field the error refers to.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::RatingOutOfRange { .. } => "rating",
            Self::CommentTooLong => "comment",
            Self::UnknownCategory { .. } => "category",
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::RatingOutOfRange { .. } => "out_of_range",
            Self::CommentTooLong => "too_long",
            Self::UnknownCategory { .. } => "invalid_value",
        }
    }
}

/// Server-generated feedback identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FeedbackId(Uuid);

impl FeedbackId {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Fixed identifier for snapshot tests.
    #[cfg(test)]
    pub(crate) const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Star rating between [`RATING_MIN`] and [`RATING_MAX`] inclusive.
///
/// # Examples
/// ```
/// use backend::domain::feedback::Rating;
///
/// assert_eq!(Rating::new(4).map(Rating::value), Ok(4));
/// assert!(Rating::new(6).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: i64) -> Result<Self, FeedbackValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|rating| (RATING_MIN..=RATING_MAX).contains(rating))
            .map(Self)
            .ok_or(FeedbackValidationError::RatingOutOfRange { value })
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Area of the product the feedback is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackCategory {
    Design,
    Functionality,
    Creativity,
    Overall,
}

impl FeedbackCategory {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Design => "design",
            Self::Functionality => "functionality",
            Self::Creativity => "creativity",
            Self::Overall => "overall",
        }
    }
}

impl fmt::Display for FeedbackCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FeedbackCategory {
    type Err = FeedbackValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "design" => Ok(Self::Design),
            "functionality" => Ok(Self::Functionality),
            "creativity" => Ok(Self::Creativity),
            "overall" => Ok(Self::Overall),
            other => Err(FeedbackValidationError::UnknownCategory {
                value: other.to_owned(),
            }),
        }
    }
}

/// Free-text comment. Blank input normalises to no comment at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeedbackComment(String);

impl FeedbackComment {
    /// Returns `Ok(None)` for blank input.
    pub fn parse(raw: &str) -> Result<Option<Self>, FeedbackValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if trimmed.chars().count() > COMMENT_MAX {
            return Err(FeedbackValidationError::CommentTooLong);
        }
        Ok(Some(Self(trimmed.to_owned())))
    }
}

impl AsRef<str> for FeedbackComment {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentimentAnalysis {
    pub label: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImpactAnalysis {
    pub summary: String,
}

/// Validated feedback submission.
///
/// The boolean flags stay optional here; [`Feedback::record`] applies
/// [`DEFAULT_IS_ANONYMOUS`] and [`DEFAULT_CONTRIBUTE_TO_LEARNING`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeedback {
    pub brand_creation_id: Option<BrandCreationId>,
    pub rating: Rating,
    pub comment: Option<FeedbackComment>,
    pub category: FeedbackCategory,
    pub is_anonymous: Option<bool>,
    pub contribute_to_learning: Option<bool>,
}

/// Recorded feedback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    id: FeedbackId,
    brand_creation_id: Option<BrandCreationId>,
    rating: Rating,
    comment: Option<FeedbackComment>,
    category: FeedbackCategory,
    is_anonymous: bool,
    contribute_to_learning: bool,
    sentiment_analysis: Option<SentimentAnalysis>,
    impact_analysis: Option<ImpactAnalysis>,
    created_at: DateTime<Utc>,
}

impl Feedback {
    /// Record a submission, resolving unset flags to their defaults.
    #[must_use]
    pub fn record(id: FeedbackId, draft: NewFeedback, now: DateTime<Utc>) -> Self {
        Self {
            id,
            brand_creation_id: draft.brand_creation_id,
            rating: draft.rating,
            comment: draft.comment,
            category: draft.category,
            is_anonymous: draft.is_anonymous.unwrap_or(DEFAULT_IS_ANONYMOUS),
            contribute_to_learning: draft
                .contribute_to_learning
                .unwrap_or(DEFAULT_CONTRIBUTE_TO_LEARNING),
            sentiment_analysis: None,
            impact_analysis: None,
            created_at: now,
        }
    }

    pub fn id(&self) -> &FeedbackId {
        &self.id
    }

    pub fn brand_creation_id(&self) -> Option<&BrandCreationId> {
        self.brand_creation_id.as_ref()
    }

    pub fn rating(&self) -> Rating {
        self.rating
    }

    pub fn comment(&self) -> Option<&FeedbackComment> {
        self.comment.as_ref()
    }

    pub fn category(&self) -> FeedbackCategory {
        self.category
    }

    pub fn is_anonymous(&self) -> bool {
        self.is_anonymous
    }

    pub fn contribute_to_learning(&self) -> bool {
        self.contribute_to_learning
    }

    pub fn sentiment_analysis(&self) -> Option<&SentimentAnalysis> {
        self.sentiment_analysis.as_ref()
    }

    pub fn impact_analysis(&self) -> Option<&ImpactAnalysis> {
        self.impact_analysis.as_ref()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
