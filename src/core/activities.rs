//! Activity Tabulator: interest tables, disclosure topics, gating tags and
//! hard limits.

use crate::core::normalize::{choice_answer, token_list, IssueSink};
use crate::domain::model::{
    ActivityTable, Anatomy, Boundaries, DisclosureProfile, IssueKind, RawAnswer, SurveyAnswers,
};
use crate::domain::schema::{
    is_any_anatomy, ActivityCategory, ActivityTag, AnatomyPart, BoundaryToken, DisclosureTopic,
    ANATOMY_PREFERENCE_QUESTION, ANATOMY_SELF_QUESTION, HARD_LIMITS_QUESTION, INTEREST_THRESHOLD,
    NOTES_QUESTION,
};
use crate::utils::numeric::mean;
use std::collections::{BTreeMap, BTreeSet};

/// Every schema item gets an entry; unasked items are 0.
pub fn tabulate_activities(answers: &SurveyAnswers, sink: &mut IssueSink) -> ActivityTable {
    ActivityCategory::ALL
        .iter()
        .map(|category| {
            let items: BTreeMap<String, f64> = category
                .items()
                .iter()
                .map(|item| {
                    let value = match item.question {
                        Some(q) => choice_answer(answers, q, sink),
                        None => 0.0,
                    };
                    (item.key.to_string(), value)
                })
                .collect();
            (*category, items)
        })
        .collect()
}

pub fn tabulate_disclosure(answers: &SurveyAnswers, sink: &mut IssueSink) -> DisclosureProfile {
    let topics: BTreeMap<DisclosureTopic, f64> = DisclosureTopic::ALL
        .iter()
        .map(|topic| (*topic, choice_answer(answers, topic.question(), sink)))
        .collect();
    let values: Vec<f64> = topics.values().copied().collect();
    let openness = (mean(&values) * 100.0).round();

    DisclosureProfile { topics, openness }
}

/// Hard limits (C1) and notes (C2). Both questions are optional.
pub fn collect_boundaries(answers: &SurveyAnswers, sink: &mut IssueSink) -> Boundaries {
    let mut hard_limits = BTreeSet::new();
    if let Some(raw) = answers.get(HARD_LIMITS_QUESTION) {
        for token in token_list(raw) {
            match BoundaryToken::parse(&token) {
                Some(parsed) => {
                    hard_limits.insert(parsed);
                }
                None => sink.report(
                    HARD_LIMITS_QUESTION,
                    IssueKind::UnknownBoundary,
                    Some(&RawAnswer::Text(token)),
                ),
            }
        }
    }

    let notes = match answers.get(NOTES_QUESTION) {
        Some(RawAnswer::Text(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        _ => None,
    };

    Boundaries { hard_limits, notes }
}

/// Own anatomy (D1) and partner preference (D2). Both questions are optional;
/// `any` or `all` in D2 selects every part.
pub fn collect_anatomy(answers: &SurveyAnswers, sink: &mut IssueSink) -> Anatomy {
    let own = anatomy_parts(answers, ANATOMY_SELF_QUESTION, false, sink);
    let preference = anatomy_parts(answers, ANATOMY_PREFERENCE_QUESTION, true, sink);
    Anatomy { own, preference }
}

fn anatomy_parts(
    answers: &SurveyAnswers,
    question_id: &str,
    allow_any: bool,
    sink: &mut IssueSink,
) -> BTreeSet<AnatomyPart> {
    let mut parts = BTreeSet::new();
    let Some(raw) = answers.get(question_id) else {
        return parts;
    };

    for token in token_list(raw) {
        if allow_any && is_any_anatomy(&token) {
            return AnatomyPart::ALL.into_iter().collect();
        }
        match AnatomyPart::parse(&token) {
            Some(part) => {
                parts.insert(part);
            }
            None => sink.report(
                question_id,
                IssueKind::UnknownAnatomy,
                Some(&RawAnswer::Text(token)),
            ),
        }
    }
    parts
}

pub fn derive_tags(activities: &ActivityTable, boundaries: &Boundaries) -> BTreeMap<ActivityTag, bool> {
    ActivityTag::ALL
        .iter()
        .map(|tag| {
            let open = match tag {
                ActivityTag::OpenToGroup => !boundaries.has_limit(BoundaryToken::MultiPartner),
                _ => tag.contributing_items().iter().any(|item| {
                    activities
                        .get(&item.category)
                        .and_then(|items| items.get(item.key))
                        .is_some_and(|v| *v >= INTEREST_THRESHOLD)
                }),
            };
            (*tag, open)
        })
        .collect()
}
