use crate::domain::model::Profile;
use crate::domain::schema::DisclosureTopic;

/// Topics where both sides show interest, in schema order.
pub fn mutual_topics(a: &Profile, b: &Profile, threshold: f64) -> Vec<DisclosureTopic> {
    DisclosureTopic::ALL
        .iter()
        .copied()
        .filter(|topic| {
            a.topic(*topic).unwrap_or(0.0) >= threshold && b.topic(*topic).unwrap_or(0.0) >= threshold
        })
        .collect()
}

/// Share of the fixed topic list both sides are open to. Missing topics
/// count against the score, the denominator never shrinks.
pub fn disclosure_overlap(a: &Profile, b: &Profile, threshold: f64) -> f64 {
    mutual_topics(a, b, threshold).len() as f64 / DisclosureTopic::ALL.len() as f64
}
