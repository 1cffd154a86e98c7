//! Brand creation aggregate and its value objects.
//!
//! A brand creation captures one branding request (company name, sector,
//! style) together with the result fields a generation process may later
//! fill in. Records are created in [`BrandStatus::Creating`] with every
//! result field empty, and evolve only through [`BrandCreationPatch`]
//! merges.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

mod patch;
mod record;
mod results;

pub use patch::BrandCreationPatch;
pub use record::{BrandCreation, NewBrandCreation};
pub use results::{
    BrandResults, CreativeIdentity, GenerationMetadata, GenerationPhase, HexColour,
    LearningContribution, Score, VisualUniverse,
};

/// Maximum length of a company name, in characters.
pub const COMPANY_NAME_MAX: usize = 120;
/// Maximum length of the sector label, in characters.
pub const SECTOR_MAX: usize = 80;
/// Maximum length of a custom watermark, in characters.
pub const WATERMARK_MAX: usize = 80;

/// Validation errors raised by brand creation constructors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BrandValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be a finite number between 0 and 1 (got {value})")]
    ScoreOutOfRange { field: &'static str, value: f64 },
    #[error("palette colours must be #RRGGBB hex values (got {value})")]
    InvalidColour { value: String },
    #[error("styleMode must be timeless or futuristic (got {value})")]
    UnknownStyleMode { value: String },
    #[error("status must be creating, completed, or failed (got {value})")]
    UnknownStatus { value: String },
}

impl BrandValidationError {
    /// Wire name of the field the error refers to.
    #[must_use]
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field }
            | Self::TooLong { field, .. }
            | Self::ScoreOutOfRange { field, .. } => *field,
            Self::InvalidColour { .. } => "visualUniverse.palette",
            Self::UnknownStyleMode { .. } => "styleMode",
            Self::UnknownStatus { .. } => "status",
        }
    }

    /// Machine-readable code shared across adapters.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Empty { .. } => "empty_value",
            Self::TooLong { .. } => "too_long",
            Self::ScoreOutOfRange { .. } => "out_of_range",
            Self::InvalidColour { .. }
            | Self::UnknownStyleMode { .. }
            | Self::UnknownStatus { .. } => "invalid_value",
        }
    }
}

/// Trim `raw` and enforce non-emptiness plus a character limit.
pub(crate) fn bounded_text(
    raw: &str,
    field: &'static str,
    max: usize,
) -> Result<String, BrandValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(BrandValidationError::Empty { field });
    }
    if trimmed.chars().count() > max {
        return Err(BrandValidationError::TooLong { field, max });
    }
    Ok(trimmed.to_owned())
}

/// Server-generated brand creation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BrandCreationId(Uuid);

impl BrandCreationId {
    /// Generate a fresh random identifier.
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    #[must_use]
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for BrandCreationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for BrandCreationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

macro_rules! bounded_text_newtype {
    ($(#[$meta:meta])* $name:ident, $field:literal, $max:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        #[serde(into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the value; surrounding whitespace is trimmed.
            pub fn new(raw: impl AsRef<str>) -> Result<Self, BrandValidationError> {
                bounded_text(raw.as_ref(), $field, $max).map(Self)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

bounded_text_newtype!(
    /// Company name supplied by the requester; never blank.
    CompanyName,
    "companyName",
    COMPANY_NAME_MAX
);
bounded_text_newtype!(
    /// Free-text industry sector.
    Sector,
    "sector",
    SECTOR_MAX
);
bounded_text_newtype!(
    /// Custom watermark text rendered on generated assets.
    Watermark,
    "customWatermark",
    WATERMARK_MAX
);

/// Visual style requested for the brand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StyleMode {
    #[default]
    Timeless,
    Futuristic,
}

impl StyleMode {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Timeless => "timeless",
            Self::Futuristic => "futuristic",
        }
    }
}

impl fmt::Display for StyleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StyleMode {
    type Err = BrandValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "timeless" => Ok(Self::Timeless),
            "futuristic" => Ok(Self::Futuristic),
            other => Err(BrandValidationError::UnknownStyleMode {
                value: other.to_owned(),
            }),
        }
    }
}

/// Lifecycle state of a brand creation.
///
/// Records start in `Creating`; `Completed` and `Failed` are terminal states
/// a generation process reports through an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BrandStatus {
    Creating,
    Completed,
    Failed,
}

impl BrandStatus {
    /// Wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Creating => "creating",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for BrandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BrandStatus {
    type Err = BrandValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "creating" => Ok(Self::Creating),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(BrandValidationError::UnknownStatus {
                value: other.to_owned(),
            }),
        }
    }
}
