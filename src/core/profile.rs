use crate::config::scoring::ProfileConfig;
use crate::core::activities::{
    collect_anatomy, collect_boundaries, derive_tags, tabulate_activities, tabulate_disclosure,
};
use crate::core::arousal::classify_arousal;
use crate::core::domains::aggregate_domains;
use crate::core::normalize::IssueSink;
use crate::core::power::power_from_answers;
use crate::domain::model::{Derivation, Profile, SurveyAnswers};
use crate::domain::schema::PROFILE_SCHEMA_VERSION;
use crate::utils::error::{EngineError, Result};
use tracing::debug;

/// Derives a profile with the default thresholds.
pub fn derive_profile(user_id: &str, answers: &SurveyAnswers) -> Derivation {
    derive_profile_with(user_id, answers, &ProfileConfig::default())
}

/// Always returns a full profile; malformed answers are normalized to 0 and
/// listed in `Derivation::issues`.
pub fn derive_profile_with(
    user_id: &str,
    answers: &SurveyAnswers,
    config: &ProfileConfig,
) -> Derivation {
    let mut sink = IssueSink::new();

    let arousal = classify_arousal(answers, &mut sink);
    let power = power_from_answers(answers, &config.power, &mut sink);
    let activities = tabulate_activities(answers, &mut sink);
    let disclosure = tabulate_disclosure(answers, &mut sink);
    let boundaries = collect_boundaries(answers, &mut sink);
    let anatomy = collect_anatomy(answers, &mut sink);
    let domain_scores = aggregate_domains(&activities, &disclosure);
    let tags = derive_tags(&activities, &boundaries);

    let issues = sink.into_issues();
    debug!(
        "Derived profile for {}: role={} confidence={:.2} issues={}",
        user_id,
        power.role,
        power.confidence,
        issues.len()
    );

    Derivation {
        profile: Profile {
            user_id: user_id.to_string(),
            schema_version: PROFILE_SCHEMA_VERSION.to_string(),
            arousal,
            power,
            domain_scores,
            activities,
            disclosure,
            boundaries,
            anatomy,
            tags,
        },
        issues,
    }
}

/// Rejects the submission if any answer was malformed.
pub fn derive_validated_profile(
    user_id: &str,
    answers: &SurveyAnswers,
    config: &ProfileConfig,
) -> Result<Profile> {
    let derivation = derive_profile_with(user_id, answers, config);
    if !derivation.is_clean() {
        return Err(EngineError::MalformedAnswers {
            issues: derivation.issues,
        });
    }
    Ok(derivation.profile)
}
