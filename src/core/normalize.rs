//! Answer Normalizer.
//!
//! Every function here is total: malformed input normalizes to 0 and is
//! reported through the issue sink instead of failing.

use crate::domain::model::{AnswerIssue, IssueKind, RawAnswer, SurveyAnswers};
use tracing::warn;

/// Collects answer problems while a profile is being derived.
#[derive(Debug, Default)]
pub struct IssueSink {
    issues: Vec<AnswerIssue>,
}

impl IssueSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn report(&mut self, question_id: &str, kind: IssueKind, raw: Option<&RawAnswer>) {
        let issue = AnswerIssue::new(question_id, kind, raw);
        warn!("Malformed answer {}", issue);
        self.issues.push(issue);
    }

    pub fn into_issues(self) -> Vec<AnswerIssue> {
        self.issues
    }
}

/// 7 點量表: (v-1)/6
pub fn normalize_agreement(value: f64) -> Option<f64> {
    if !value.is_finite() || !(1.0..=7.0).contains(&value) {
        return None;
    }
    Some(((value - 1.0) / 6.0).clamp(0.0, 1.0))
}

/// Yes / maybe / no
pub fn normalize_choice(token: &str) -> Option<f64> {
    match token.trim().to_ascii_uppercase().as_str() {
        "Y" | "YES" => Some(1.0),
        "M" | "MAYBE" => Some(0.5),
        "N" | "NO" => Some(0.0),
        _ => None,
    }
}

pub fn agreement_answer(answers: &SurveyAnswers, question_id: &str, sink: &mut IssueSink) -> f64 {
    let Some(raw) = answers.get(question_id) else {
        sink.report(question_id, IssueKind::Missing, None);
        return 0.0;
    };

    let value = match raw {
        RawAnswer::Number(n) => Some(*n),
        RawAnswer::Text(s) => s.trim().parse::<f64>().ok(),
        RawAnswer::List(_) => None,
    };

    match value {
        None => {
            sink.report(question_id, IssueKind::NotANumber, Some(raw));
            0.0
        }
        Some(v) => normalize_agreement(v).unwrap_or_else(|| {
            sink.report(question_id, IssueKind::OutOfRange, Some(raw));
            0.0
        }),
    }
}

pub fn choice_answer(answers: &SurveyAnswers, question_id: &str, sink: &mut IssueSink) -> f64 {
    let Some(raw) = answers.get(question_id) else {
        sink.report(question_id, IssueKind::Missing, None);
        return 0.0;
    };

    let normalized = match raw {
        RawAnswer::Text(s) => normalize_choice(s),
        _ => None,
    };

    normalized.unwrap_or_else(|| {
        sink.report(question_id, IssueKind::UnrecognizedChoice, Some(raw));
        0.0
    })
}

/// Splits a hard-limit answer into trimmed, non-empty tokens.
/// Accepts either a list or a comma separated string.
pub fn token_list(raw: &RawAnswer) -> Vec<String> {
    let parts: Vec<&str> = match raw {
        RawAnswer::List(items) => items.iter().map(String::as_str).collect(),
        RawAnswer::Text(s) => s.split(',').collect(),
        RawAnswer::Number(_) => Vec::new(),
    };
    parts
        .into_iter()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(&str, RawAnswer)]) -> SurveyAnswers {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_normalize_agreement() {
        assert_eq!(normalize_agreement(1.0), Some(0.0));
        assert_eq!(normalize_agreement(4.0), Some(0.5));
        assert_eq!(normalize_agreement(7.0), Some(1.0));
        assert_eq!(normalize_agreement(0.0), None);
        assert_eq!(normalize_agreement(8.0), None);
        assert_eq!(normalize_agreement(f64::NAN), None);
    }

    #[test]
    fn test_normalize_choice() {
        assert_eq!(normalize_choice("Y"), Some(1.0));
        assert_eq!(normalize_choice(" maybe "), Some(0.5));
        assert_eq!(normalize_choice("no"), Some(0.0));
        assert_eq!(normalize_choice("sometimes"), None);
    }

    #[test]
    fn test_agreement_answer_reports_issues() {
        let answers = answers(&[
            ("A1", RawAnswer::Number(7.0)),
            ("A2", RawAnswer::Text("4".to_string())),
            ("A3", RawAnswer::Number(9.0)),
            ("A4", RawAnswer::Text("lots".to_string())),
        ]);
        let mut sink = IssueSink::new();

        assert_eq!(agreement_answer(&answers, "A1", &mut sink), 1.0);
        assert_eq!(agreement_answer(&answers, "A2", &mut sink), 0.5);
        assert_eq!(agreement_answer(&answers, "A3", &mut sink), 0.0);
        assert_eq!(agreement_answer(&answers, "A4", &mut sink), 0.0);
        assert_eq!(agreement_answer(&answers, "A5", &mut sink), 0.0);

        let kinds: Vec<IssueKind> = sink.into_issues().into_iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![IssueKind::OutOfRange, IssueKind::NotANumber, IssueKind::Missing]
        );
    }

    #[test]
    fn test_choice_answer_never_guesses() {
        let answers = answers(&[
            ("B1a", RawAnswer::Text("M".to_string())),
            ("B1b", RawAnswer::Number(1.0)),
        ]);
        let mut sink = IssueSink::new();

        assert_eq!(choice_answer(&answers, "B1a", &mut sink), 0.5);
        assert_eq!(choice_answer(&answers, "B1b", &mut sink), 0.0);
        let issues = sink.into_issues();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::UnrecognizedChoice);
    }

    #[test]
    fn test_token_list() {
        let text = RawAnswer::Text("breath_play, watersports,,".to_string());
        assert_eq!(token_list(&text), vec!["breath_play", "watersports"]);

        let list = RawAnswer::List(vec![" anal_activities ".to_string()]);
        assert_eq!(token_list(&list), vec!["anal_activities"]);
    }
}
