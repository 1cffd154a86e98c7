//! Result fields a generation process reports back onto a brand creation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::BrandValidationError;

/// Normalised score in the closed range `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Score(f64);

impl Score {
    /// Validate a score reported for `field`.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::brand::Score;
    ///
    /// assert!(Score::new(0.87, "hypnoticPowerScore").is_ok());
    /// assert!(Score::new(1.5, "hypnoticPowerScore").is_err());
    /// ```
    pub fn new(value: f64, field: &'static str) -> Result<Self, BrandValidationError> {
        if value.is_finite() && (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(BrandValidationError::ScoreOutOfRange { field, value })
        }
    }

    /// Raw score value.
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

static HEX_COLOUR_RE: OnceLock<Regex> = OnceLock::new();

fn hex_colour_regex() -> &'static Regex {
    HEX_COLOUR_RE.get_or_init(|| {
        Regex::new("^#[0-9A-Fa-f]{6}$")
            .unwrap_or_else(|error| panic!("hex colour regex failed to compile: {error}"))
    })
}

/// `#RRGGBB` palette entry, kept exactly as the client wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexColour(String);

impl HexColour {
    pub fn new(raw: impl Into<String>) -> Result<Self, BrandValidationError> {
        let raw = raw.into();
        if !hex_colour_regex().is_match(&raw) {
            return Err(BrandValidationError::InvalidColour { value: raw });
        }
        Ok(Self(raw))
    }
}

impl AsRef<str> for HexColour {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for HexColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Verbal identity of the generated brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreativeIdentity {
    pub tagline: Option<String>,
    pub brand_voice: Option<String>,
    pub core_values: Vec<String>,
}

/// Visual direction of the generated brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualUniverse {
    pub palette: Vec<HexColour>,
    pub typography: Option<String>,
    pub logo_concept: Option<String>,
}

/// One named step of the generation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationPhase {
    name: String,
    completed: bool,
}

impl GenerationPhase {
    /// Blank names are rejected; anything else is stored untouched.
    pub fn new(name: impl Into<String>, completed: bool) -> Result<Self, BrandValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(BrandValidationError::Empty {
                field: "phases.name",
            });
        }
        Ok(Self { name, completed })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    #[must_use]
    pub const fn completed(&self) -> bool {
        self.completed
    }
}

/// Provenance of a generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationMetadata {
    engine: String,
    model_version: Option<String>,
    duration_ms: Option<u64>,
}

impl GenerationMetadata {
    pub fn new(
        engine: impl Into<String>,
        model_version: Option<String>,
        duration_ms: Option<u64>,
    ) -> Result<Self, BrandValidationError> {
        let engine = engine.into();
        if engine.trim().is_empty() {
            return Err(BrandValidationError::Empty {
                field: "aiMetadata.engine",
            });
        }
        Ok(Self {
            engine,
            model_version,
            duration_ms,
        })
    }

    #[must_use]
    pub fn engine(&self) -> &str {
        self.engine.as_str()
    }

    #[must_use]
    pub fn model_version(&self) -> Option<&str> {
        self.model_version.as_deref()
    }

    #[must_use]
    pub const fn duration_ms(&self) -> Option<u64> {
        self.duration_ms
    }
}

/// Whether the user agreed to feed this result back into training.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningContribution {
    pub accepted: bool,
    pub notes: Option<String>,
}

/// Every result field of a brand creation.
///
/// All fields are empty when a record is created. They serialise as
/// explicit `null`s so clients always see the full record shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandResults {
    pub creative_identity: Option<CreativeIdentity>,
    pub visual_universe: Option<VisualUniverse>,
    pub hypnotic_power_score: Option<Score>,
    pub emotional_impact_score: Option<Score>,
    pub memorability_score: Option<Score>,
    pub predicted_reaction: Option<String>,
    pub phases: Option<Vec<GenerationPhase>>,
    pub quantum_signature: Option<String>,
    pub ai_metadata: Option<GenerationMetadata>,
    pub coherence_score: Option<Score>,
    pub learning_contribution: Option<LearningContribution>,
    pub future_compatibility_score: Option<Score>,
}

impl BrandResults {
    /// Whether no result field has been reported yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}
