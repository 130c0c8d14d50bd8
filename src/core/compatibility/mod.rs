//! Compatibility Engine: four sub-scores, boundary conflicts and the
//! weighted composite.

pub mod activity;
pub mod boundary;
pub mod disclosure;
pub mod domain;
pub mod insights;
pub mod power;

use crate::config::scoring::{BandCutPoints, ScoringConfig};
use crate::domain::model::{
    CompatibilityBand, CompatibilityResult, PowerRole, Profile, ScoreBreakdown,
};
use crate::domain::schema::PROFILE_SCHEMA_VERSION;
use crate::utils::error::{EngineError, Result};
use tracing::debug;

/// How the two role labels relate; picks the activity matching strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    /// Top with Bottom.
    Complementary,
    /// Top with Top, or Bottom with Bottom.
    SamePole,
    Other,
}

impl PairKind {
    pub fn of(a: PowerRole, b: PowerRole) -> Self {
        if !(a.is_one_sided() && b.is_one_sided()) {
            PairKind::Other
        } else if a == b {
            PairKind::SamePole
        } else {
            PairKind::Complementary
        }
    }

    /// Orders a complementary pair as (Top, Bottom).
    pub fn top_first<'a>(a: &'a Profile, b: &'a Profile) -> (&'a Profile, &'a Profile) {
        if a.power.role == PowerRole::Top {
            (a, b)
        } else {
            (b, a)
        }
    }
}

/// Both profiles must come from this engine's schema version.
pub fn check_schema(a: &Profile, b: &Profile) -> Result<()> {
    if a.schema_version != b.schema_version {
        return Err(EngineError::SchemaMismatch {
            left: a.schema_version.clone(),
            right: b.schema_version.clone(),
        });
    }
    if a.schema_version != PROFILE_SCHEMA_VERSION {
        return Err(EngineError::UnsupportedSchema {
            version: a.schema_version.clone(),
        });
    }
    Ok(())
}

pub fn interpretation(score: u8, bands: &BandCutPoints) -> CompatibilityBand {
    let score = f64::from(score);
    if score >= bands.exceptional {
        CompatibilityBand::Exceptional
    } else if score >= bands.high {
        CompatibilityBand::High
    } else if score >= bands.moderate {
        CompatibilityBand::Moderate
    } else if score >= bands.lower {
        CompatibilityBand::Lower
    } else {
        CompatibilityBand::Challenging
    }
}

fn percent(unit: f64) -> u8 {
    (unit.clamp(0.0, 1.0) * 100.0).round() as u8
}

/// Scores two profiles. Pure: the same profiles and config always give the
/// same result.
pub fn score_compatibility(
    a: &Profile,
    b: &Profile,
    config: &ScoringConfig,
) -> Result<CompatibilityResult> {
    check_schema(a, b)?;

    let pair = PairKind::of(a.power.role, b.power.role);
    let threshold = config.activity.interest_threshold;

    let power = power::power_complement(&a.power, &b.power, &config.power_complement);
    let domain = domain::domain_similarity(
        &a.domain_scores,
        &b.domain_scores,
        pair == PairKind::Complementary,
        &config.domain,
    );
    let activity = activity::activity_overlap(a, b, pair, &config.activity);
    let disclosure = disclosure::disclosure_overlap(a, b, threshold);
    let conflicts = boundary::detect_conflicts(a, b, threshold);

    let w = config.weights.normalized();
    let weighted = w.power * power
        + w.domain * domain
        + w.activity * activity
        + w.disclosure * disclosure;
    let penalty = config.boundary_penalty * conflicts.len() as f64;
    let overall = percent((weighted - penalty).max(0.0));

    debug!(
        "Scored {} × {} ({:?}): power={:.3} domain={:.3} activity={:.3} disclosure={:.3} conflicts={} overall={}",
        a.user_id,
        b.user_id,
        pair,
        power,
        domain,
        activity,
        disclosure,
        conflicts.len(),
        overall
    );

    Ok(CompatibilityResult {
        compatibility_version: config.name.clone(),
        players: [a.user_id.clone(), b.user_id.clone()],
        overall_score: overall,
        interpretation: interpretation(overall, &config.bands),
        breakdown: ScoreBreakdown {
            power_complement: percent(power),
            domain_similarity: percent(domain),
            activity_overlap: percent(activity),
            disclosure_overlap: percent(disclosure),
        },
        boundary_conflicts: conflicts,
        insights: insights::build_insights(a, b, threshold),
    })
}
