use crate::domain::model::{ActivityTable, DisclosureProfile, DomainScores};
use crate::domain::schema::{Domain, DomainSource};
use crate::utils::numeric::mean;

/// Neutral score for a domain with no contributing items.
pub const NEUTRAL_DOMAIN_SCORE: f64 = 50.0;

/// Mean of the present contributors × 100, rounded. Absent items are left
/// out of the mean, not counted as 0.
pub fn domain_score(domain: Domain, activities: &ActivityTable, disclosure: &DisclosureProfile) -> f64 {
    let values: Vec<f64> = domain
        .sources()
        .iter()
        .filter_map(|source| match source {
            DomainSource::Activity(item) => activities
                .get(&item.category)
                .and_then(|items| items.get(item.key))
                .copied(),
            DomainSource::Topic(topic) => disclosure.topics.get(topic).copied(),
        })
        .collect();

    if values.is_empty() {
        return NEUTRAL_DOMAIN_SCORE;
    }
    (mean(&values) * 100.0).round().clamp(0.0, 100.0)
}

pub fn aggregate_domains(activities: &ActivityTable, disclosure: &DisclosureProfile) -> DomainScores {
    let mut scores = DomainScores::default();
    for domain in Domain::ALL {
        scores.set(domain, domain_score(domain, activities, disclosure));
    }
    scores
}
