mod common;

use attune_engine::domain::model::{CompatibilityBand, PowerRole};
use attune_engine::domain::schema::{ActivityCategory, BoundaryToken};
use attune_engine::{score_compatibility, CompatibilityEngine, EngineError, ScoringConfig};
use common::load_profile;

/// Top 對 Bottom 的實際使用者資料，應落在 85-95
#[test]
fn test_top_vs_bottom_reference_pair() {
    let top = load_profile("bbh_top");
    let bottom = load_profile("quick_check_bottom");
    assert_eq!(top.power.role, PowerRole::Top);
    assert_eq!(bottom.power.role, PowerRole::Bottom);

    let result = score_compatibility(&top, &bottom, &ScoringConfig::default()).unwrap();

    assert!(
        (85..=95).contains(&result.overall_score),
        "overall {}",
        result.overall_score
    );
    assert_eq!(result.breakdown.power_complement, 100);
    assert_eq!(result.breakdown.disclosure_overlap, 100);
    assert!((90..=98).contains(&result.breakdown.domain_similarity));
    assert_eq!(result.breakdown.domain_similarity, 94);
    assert_eq!(result.breakdown.activity_overlap, 92);
    assert_eq!(result.overall_score, 95);
    assert_eq!(result.interpretation, CompatibilityBand::Exceptional);
    // 雙方都設了 degradation_humiliation，但沒有對應項目
    assert!(result.boundary_conflicts.is_empty());
    assert_eq!(result.compatibility_version, "v0.5");
}

/// 參數順序不影響結果：角色決定誰是給予方
#[test]
fn test_one_sided_pair_is_symmetric() {
    let top = load_profile("bbh_top");
    let bottom = load_profile("quick_check_bottom");
    let config = ScoringConfig::default();

    let ab = score_compatibility(&top, &bottom, &config).unwrap();
    let ba = score_compatibility(&bottom, &top, &config).unwrap();

    assert_eq!(ab.overall_score, ba.overall_score);
    assert_eq!(ab.breakdown, ba.breakdown);
    assert_eq!(ab.interpretation, ba.interpretation);
    assert_eq!(ab.players[0], ba.players[1]);
}

#[test]
fn test_two_tops_score_low() {
    let a = load_profile("top_a");
    let b = load_profile("top_b");

    let result = score_compatibility(&a, &b, &ScoringConfig::default()).unwrap();

    assert_eq!(result.breakdown.power_complement, 40);
    assert!(
        (35..=50).contains(&result.overall_score),
        "overall {}",
        result.overall_score
    );
    assert_eq!(result.interpretation, CompatibilityBand::Lower);
}

#[test]
fn test_two_bottoms_score_low() {
    let a = load_profile("bottom_a");
    let b = load_profile("bottom_b");

    let result = score_compatibility(&a, &b, &ScoringConfig::default()).unwrap();

    assert_eq!(result.breakdown.power_complement, 40);
    assert!((35..=50).contains(&result.overall_score));
}

#[test]
fn test_switch_against_itself() {
    let switch = load_profile("switch_a");

    let result = score_compatibility(&switch, &switch, &ScoringConfig::default()).unwrap();

    assert_eq!(result.breakdown.power_complement, 90);
    assert_eq!(result.breakdown.domain_similarity, 100);
    assert_eq!(result.breakdown.activity_overlap, 100);
    assert!((85..=100).contains(&result.overall_score));
    assert!(result.insights.growth_opportunities.is_empty());
}

#[test]
fn test_switch_against_top_uses_mixed_power_score() {
    let top = load_profile("bbh_top");
    let switch = load_profile("switch_a");

    let result = score_compatibility(&top, &switch, &ScoringConfig::default()).unwrap();

    assert_eq!(result.breakdown.power_complement, 70);
    assert_eq!(result.interpretation, CompatibilityBand::High);
}

#[test]
fn test_legacy_preset_rescoring() {
    let engine = CompatibilityEngine::with_preset("v0.4").unwrap();
    let a = load_profile("top_a");
    let b = load_profile("top_b");

    let legacy = engine.score(&a, &b).unwrap();
    let current = score_compatibility(&a, &b, &ScoringConfig::default()).unwrap();

    assert_eq!(legacy.compatibility_version, "v0.4");
    // 舊版對同極配對比較寬鬆
    assert!(legacy.breakdown.activity_overlap > current.breakdown.activity_overlap);
    assert!(legacy.overall_score > current.overall_score);
}

#[test]
fn test_boundary_conflict_lowers_score() {
    let top = load_profile("bbh_top");
    let mut bottom = load_profile("quick_check_bottom");
    let baseline = score_compatibility(&top, &bottom, &ScoringConfig::default()).unwrap();

    bottom.boundaries.hard_limits.insert(BoundaryToken::BreathPlay);
    let result = score_compatibility(&top, &bottom, &ScoringConfig::default()).unwrap();

    assert_eq!(result.boundary_conflicts.len(), 1);
    let conflict = &result.boundary_conflicts[0];
    assert_eq!(conflict.user_id, bottom.user_id);
    assert_eq!(conflict.boundary, BoundaryToken::BreathPlay);
    assert_eq!(conflict.category, ActivityCategory::PhysicalTouch);
    assert_eq!(conflict.activity, "choking_give");
    assert_eq!(result.overall_score, baseline.overall_score - 20);
    assert!(result
        .insights
        .blocked_boundaries
        .contains(&BoundaryToken::BreathPlay));
}

#[test]
fn test_schema_mismatch_is_a_caller_error() {
    let top = load_profile("bbh_top");
    let mut bottom = load_profile("quick_check_bottom");
    bottom.schema_version = "0.5".to_string();

    let err = score_compatibility(&top, &bottom, &ScoringConfig::default()).unwrap_err();
    match err {
        EngineError::SchemaMismatch { left, right } => {
            assert_eq!(left, "0.4");
            assert_eq!(right, "0.5");
        }
        other => panic!("unexpected error {:?}", other),
    }
}
