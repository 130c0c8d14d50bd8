use crate::config::scoring::DomainSettings;
use crate::domain::model::DomainScores;
use crate::domain::schema::Domain;

/// Mean per-domain similarity in [0, 1].
///
/// For a complementary pair, exploration and verbal use a floor rule instead
/// of distance: an eager partner with a measured one is fine as long as both
/// reach the floor.
pub fn domain_similarity(
    a: &DomainScores,
    b: &DomainScores,
    complementary: bool,
    settings: &DomainSettings,
) -> f64 {
    let total: f64 = Domain::ALL
        .iter()
        .map(|domain| {
            let (x, y) = (a.get(*domain), b.get(*domain));
            let floor_rule = complementary && matches!(domain, Domain::Exploration | Domain::Verbal);
            if floor_rule {
                let min = x.min(y);
                if min >= settings.complementary_floor {
                    1.0
                } else {
                    (min / settings.complementary_floor).max(0.0)
                }
            } else {
                1.0 - (x - y).abs() / 100.0
            }
        })
        .map(|s| s.clamp(0.0, 1.0))
        .sum();
    total / Domain::ALL.len() as f64
}
