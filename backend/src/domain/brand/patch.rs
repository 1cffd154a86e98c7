//! Partial update merged into a stored brand creation.

use super::{
    BrandStatus, CompanyName, CreativeIdentity, GenerationMetadata, GenerationPhase,
    LearningContribution, Score, Sector, StyleMode, VisualUniverse, Watermark,
};

/// Shallow, last-write-wins update of a brand creation.
///
/// Outer `None` leaves a field untouched. For nullable fields
/// `Some(None)` clears the stored value and `Some(Some(v))` replaces it.
/// Nested objects are replaced wholesale, never merged key by key.
/// The identifier and creation timestamp are not representable here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandCreationPatch {
    pub company_name: Option<CompanyName>,
    pub sector: Option<Option<Sector>>,
    pub style_mode: Option<StyleMode>,
    pub custom_watermark: Option<Option<Watermark>>,
    pub status: Option<BrandStatus>,
    pub creative_identity: Option<Option<CreativeIdentity>>,
    pub visual_universe: Option<Option<VisualUniverse>>,
    pub hypnotic_power_score: Option<Option<Score>>,
    pub emotional_impact_score: Option<Option<Score>>,
    pub memorability_score: Option<Option<Score>>,
    pub predicted_reaction: Option<Option<String>>,
    pub phases: Option<Option<Vec<GenerationPhase>>>,
    pub quantum_signature: Option<Option<String>>,
    pub ai_metadata: Option<Option<GenerationMetadata>>,
    pub coherence_score: Option<Option<Score>>,
    pub learning_contribution: Option<Option<LearningContribution>>,
    pub future_compatibility_score: Option<Option<Score>>,
}

impl BrandCreationPatch {
    /// Whether applying the patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Wire names of the fields this patch touches, for logging.
    #[must_use]
    pub fn touched_fields(&self) -> Vec<&'static str> {
        let flags = [
            ("companyName", self.company_name.is_some()),
            ("sector", self.sector.is_some()),
            ("styleMode", self.style_mode.is_some()),
            ("customWatermark", self.custom_watermark.is_some()),
            ("status", self.status.is_some()),
            ("creativeIdentity", self.creative_identity.is_some()),
            ("visualUniverse", self.visual_universe.is_some()),
            ("hypnoticPowerScore", self.hypnotic_power_score.is_some()),
            ("emotionalImpactScore", self.emotional_impact_score.is_some()),
            ("memorabilityScore", self.memorability_score.is_some()),
            ("predictedReaction", self.predicted_reaction.is_some()),
            ("phases", self.phases.is_some()),
            ("quantumSignature", self.quantum_signature.is_some()),
            ("aiMetadata", self.ai_metadata.is_some()),
            ("coherenceScore", self.coherence_score.is_some()),
            ("learningContribution", self.learning_contribution.is_some()),
            (
                "futureCompatibilityScore",
                self.future_compatibility_score.is_some(),
            ),
        ];
        flags
            .into_iter()
            .filter_map(|(name, touched)| touched.then_some(name))
            .collect()
    }
}
