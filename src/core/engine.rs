use crate::config::scoring::{ProfileConfig, ScoringConfig};
use crate::core::compatibility::score_compatibility;
use crate::core::profile::{derive_profile_with, derive_validated_profile};
use crate::domain::model::{CompatibilityResult, Derivation, Profile, SurveyAnswers};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::sync::Arc;

/// Entry point holding one read-only configuration. Cloning shares the
/// configuration, so a clone can be handed to each worker.
#[derive(Debug, Clone)]
pub struct CompatibilityEngine {
    scoring: Arc<ScoringConfig>,
    profile: ProfileConfig,
}

impl CompatibilityEngine {
    pub fn new(scoring: ScoringConfig, profile: ProfileConfig) -> Result<Self> {
        scoring.validate()?;
        profile.validate()?;
        Ok(Self {
            scoring: Arc::new(scoring),
            profile,
        })
    }

    pub fn with_preset(name: &str) -> Result<Self> {
        Self::new(ScoringConfig::preset(name)?, ProfileConfig::default())
    }

    pub fn scoring_config(&self) -> &ScoringConfig {
        &self.scoring
    }

    pub fn profile_config(&self) -> &ProfileConfig {
        &self.profile
    }

    pub fn derive_profile(&self, user_id: &str, answers: &SurveyAnswers) -> Derivation {
        derive_profile_with(user_id, answers, &self.profile)
    }

    pub fn derive_validated_profile(&self, user_id: &str, answers: &SurveyAnswers) -> Result<Profile> {
        derive_validated_profile(user_id, answers, &self.profile)
    }

    pub fn score(&self, a: &Profile, b: &Profile) -> Result<CompatibilityResult> {
        score_compatibility(a, b, &self.scoring)
    }

    /// Scores with a one-off override instead of the engine's configuration.
    pub fn score_with(
        &self,
        a: &Profile,
        b: &Profile,
        config: Option<&ScoringConfig>,
    ) -> Result<CompatibilityResult> {
        match config {
            Some(config) => {
                config.validate()?;
                score_compatibility(a, b, config)
            }
            None => self.score(a, b),
        }
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self {
            scoring: Arc::new(ScoringConfig::default()),
            profile: ProfileConfig::default(),
        }
    }
}
