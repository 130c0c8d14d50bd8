use crate::domain::model::{BoundaryConflict, PlayerSide, Profile};
use tracing::debug;

/// Conflicts where one side's hard limit meets the other side's interest.
///
/// Side A's limits come first, then side B's, each in token order. Items are
/// checked in their fixed list order and only the first hit is recorded, so
/// there is at most one entry per (side, boundary) and repeated runs give the
/// same list.
pub fn detect_conflicts(a: &Profile, b: &Profile, threshold: f64) -> Vec<BoundaryConflict> {
    let mut conflicts = Vec::new();
    for (side, holder, other) in [(PlayerSide::A, a, b), (PlayerSide::B, b, a)] {
        for token in &holder.boundaries.hard_limits {
            let hit = token
                .conflicting_items()
                .iter()
                .find(|item| other.interest(item) >= threshold);
            if let Some(item) = hit {
                debug!(
                    "Boundary conflict: {} refuses {:?}, {} wants {}",
                    holder.user_id, token, other.user_id, item.key
                );
                conflicts.push(BoundaryConflict {
                    side,
                    user_id: holder.user_id.clone(),
                    boundary: *token,
                    category: item.category,
                    activity: item.key.to_string(),
                });
            }
        }
    }
    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::derive_profile;
    use crate::domain::model::{RawAnswer, SurveyAnswers};
    use crate::domain::schema::{ActivityCategory, BoundaryToken};

    fn profile(user_id: &str, answers: &[(&str, &str)]) -> Profile {
        let answers: SurveyAnswers = answers
            .iter()
            .map(|(q, a)| (q.to_string(), RawAnswer::Text(a.to_string())))
            .collect();
        derive_profile(user_id, &answers).profile
    }

    #[test]
    fn test_one_entry_per_boundary() {
        let a = profile("a", &[("C1", "impact_play, breath_play")]);
        let b = profile("b", &[("B4b", "Y"), ("B6b", "Y"), ("B7a", "M")]);

        let conflicts = detect_conflicts(&a, &b, 0.5);

        assert_eq!(conflicts.len(), 1);
        let conflict = &conflicts[0];
        assert_eq!(conflict.side, PlayerSide::A);
        assert_eq!(conflict.user_id, "a");
        assert_eq!(conflict.boundary, BoundaryToken::ImpactPlay);
        assert_eq!(conflict.category, ActivityCategory::PhysicalTouch);
        assert_eq!(conflict.activity, "spanking_moderate_give");
    }

    #[test]
    fn test_both_sides_and_idempotent() {
        let a = profile("a", &[("C1", "watersports"), ("B13a", "Y")]);
        let b = profile("b", &[("C1", "anal_activities"), ("B10b", "M")]);

        let first = detect_conflicts(&a, &b, 0.5);
        let second = detect_conflicts(&a, &b, 0.5);

        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
        assert_eq!(first[0].side, PlayerSide::A);
        assert_eq!(first[0].boundary, BoundaryToken::Watersports);
        assert_eq!(first[1].side, PlayerSide::B);
        assert_eq!(first[1].activity, "anal_fingers_toys_receive");
    }

    #[test]
    fn test_begging_does_not_trigger_degradation() {
        let a = profile("a", &[("C1", "degradation_humiliation")]);
        let b = profile("b", &[("B23a", "Y"), ("B23b", "Y")]);
        assert!(detect_conflicts(&a, &b, 0.5).is_empty());
    }
}
