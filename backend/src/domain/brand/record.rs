//! The stored brand creation record.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{
    BrandCreationId, BrandCreationPatch, BrandResults, BrandStatus, CompanyName, Sector,
    StyleMode, Watermark,
};

/// Validated input for a new brand creation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBrandCreation {
    pub company_name: CompanyName,
    pub sector: Option<Sector>,
    pub style_mode: StyleMode,
    pub custom_watermark: Option<Watermark>,
}

impl NewBrandCreation {
    /// Draft with only a company name; other fields take their defaults.
    #[must_use]
    pub fn named(company_name: CompanyName) -> Self {
        Self {
            company_name,
            sector: None,
            style_mode: StyleMode::default(),
            custom_watermark: None,
        }
    }
}

/// A brand creation as stored and returned to clients.
///
/// ## Invariants
/// - `id` and `created_at` never change after [`BrandCreation::create`].
/// - New records start in [`BrandStatus::Creating`] with empty results.
/// - `updated_at` is never earlier than `created_at` for a monotonic clock.
///
/// # Examples
/// ```
/// use backend::domain::brand::{
///     BrandCreation, BrandCreationId, BrandStatus, CompanyName, NewBrandCreation,
/// };
/// use chrono::Utc;
///
/// let name = CompanyName::new("Acme").expect("valid name");
/// let record = BrandCreation::create(
///     BrandCreationId::random(),
///     NewBrandCreation::named(name),
///     Utc::now(),
/// );
/// assert_eq!(record.status(), BrandStatus::Creating);
/// assert!(record.results().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandCreation {
    id: BrandCreationId,
    company_name: CompanyName,
    sector: Option<Sector>,
    style_mode: StyleMode,
    custom_watermark: Option<Watermark>,
    status: BrandStatus,
    #[serde(flatten)]
    results: BrandResults,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl BrandCreation {
    /// Build a fresh record in the `creating` state.
    #[must_use]
    pub fn create(id: BrandCreationId, draft: NewBrandCreation, now: DateTime<Utc>) -> Self {
        let NewBrandCreation {
            company_name,
            sector,
            style_mode,
            custom_watermark,
        } = draft;
        Self {
            id,
            company_name,
            sector,
            style_mode,
            custom_watermark,
            status: BrandStatus::Creating,
            results: BrandResults::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge `patch` into the record.
    ///
    /// An empty patch leaves the record, `updated_at` included, untouched.
    pub fn apply(&mut self, patch: BrandCreationPatch, now: DateTime<Utc>) {
        if patch.is_empty() {
            return;
        }
        let BrandCreationPatch {
            company_name,
            sector,
            style_mode,
            custom_watermark,
            status,
            creative_identity,
            visual_universe,
            hypnotic_power_score,
            emotional_impact_score,
            memorability_score,
            predicted_reaction,
            phases,
            quantum_signature,
            ai_metadata,
            coherence_score,
            learning_contribution,
            future_compatibility_score,
        } = patch;

        replace(&mut self.company_name, company_name);
        replace(&mut self.sector, sector);
        replace(&mut self.style_mode, style_mode);
        replace(&mut self.custom_watermark, custom_watermark);
        replace(&mut self.status, status);

        let results = &mut self.results;
        replace(&mut results.creative_identity, creative_identity);
        replace(&mut results.visual_universe, visual_universe);
        replace(&mut results.hypnotic_power_score, hypnotic_power_score);
        replace(&mut results.emotional_impact_score, emotional_impact_score);
        replace(&mut results.memorability_score, memorability_score);
        replace(&mut results.predicted_reaction, predicted_reaction);
        replace(&mut results.phases, phases);
        replace(&mut results.quantum_signature, quantum_signature);
        replace(&mut results.ai_metadata, ai_metadata);
        replace(&mut results.coherence_score, coherence_score);
        replace(&mut results.learning_contribution, learning_contribution);
        replace(
            &mut results.future_compatibility_score,
            future_compatibility_score,
        );

        self.updated_at = now;
    }

    pub fn id(&self) -> &BrandCreationId {
        &self.id
    }

    pub fn company_name(&self) -> &CompanyName {
        &self.company_name
    }

    pub fn sector(&self) -> Option<&Sector> {
        self.sector.as_ref()
    }

    pub fn style_mode(&self) -> StyleMode {
        self.style_mode
    }

    pub fn custom_watermark(&self) -> Option<&Watermark> {
        self.custom_watermark.as_ref()
    }

    pub fn status(&self) -> BrandStatus {
        self.status
    }

    pub fn results(&self) -> &BrandResults {
        &self.results
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}

fn replace<T>(slot: &mut T, update: Option<T>) {
    if let Some(value) = update {
        *slot = value;
    }
}
