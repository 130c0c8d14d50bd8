use crate::core::compatibility::disclosure::mutual_topics;
use crate::domain::model::{CompatibilityInsights, GrowthOpportunity, PlayerSide, Profile};
use crate::domain::schema::ActivityCategory;

const YES: f64 = 1.0;
const MAYBE: f64 = 0.5;

/// Shared ground for the result document. Items are listed in schema order.
pub fn build_insights(a: &Profile, b: &Profile, threshold: f64) -> CompatibilityInsights {
    let mut insights = CompatibilityInsights::default();

    for category in ActivityCategory::ALL {
        let mut mutual = Vec::new();
        for item in category.items() {
            let x = a.activity(category, item.key).unwrap_or(0.0);
            let y = b.activity(category, item.key).unwrap_or(0.0);

            if x >= threshold && y >= threshold {
                mutual.push(item.key.to_string());
            }

            // 一方 yes，另一方 maybe
            let eager = if x == YES && y == MAYBE {
                Some(PlayerSide::A)
            } else if y == YES && x == MAYBE {
                Some(PlayerSide::B)
            } else {
                None
            };
            if let Some(eager) = eager {
                insights.growth_opportunities.push(GrowthOpportunity {
                    category,
                    activity: item.key.to_string(),
                    eager,
                });
            }
        }
        if !mutual.is_empty() {
            insights.mutual_activities.insert(category, mutual);
        }
    }

    insights.mutual_disclosure = mutual_topics(a, b, threshold);
    insights.blocked_boundaries = a
        .boundaries
        .hard_limits
        .union(&b.boundaries.hard_limits)
        .copied()
        .collect();

    insights
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::derive_profile;
    use crate::domain::model::{RawAnswer, SurveyAnswers};
    use crate::domain::schema::{BoundaryToken, DisclosureTopic};

    fn profile(answers: &[(&str, &str)]) -> Profile {
        let answers: SurveyAnswers = answers
            .iter()
            .map(|(q, a)| (q.to_string(), RawAnswer::Text(a.to_string())))
            .collect();
        derive_profile("p", &answers).profile
    }

    #[test]
    fn test_build_insights() {
        let a = profile(&[("B11a", "Y"), ("B19", "Y"), ("B30", "Y"), ("C1", "breath_play")]);
        let b = profile(&[("B11a", "Y"), ("B19", "M"), ("B30", "M"), ("C1", "watersports")]);

        let insights = build_insights(&a, &b, 0.5);

        assert_eq!(
            insights.mutual_activities[&ActivityCategory::Oral],
            vec!["oral_sex_receive".to_string()]
        );
        assert_eq!(insights.growth_opportunities.len(), 1);
        assert_eq!(insights.growth_opportunities[0].activity, "dirty_talk");
        assert_eq!(insights.growth_opportunities[0].eager, PlayerSide::A);
        assert_eq!(insights.mutual_disclosure, vec![DisclosureTopic::Fantasies]);
        assert!(insights.blocked_boundaries.contains(&BoundaryToken::BreathPlay));
        assert!(insights.blocked_boundaries.contains(&BoundaryToken::Watersports));
    }
}
