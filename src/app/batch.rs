//! Scores every unordered pair of a profile set.
//!
//! Pairs are independent, so they run on blocking workers bounded by a
//! semaphore. The report is ordered by pair index no matter which worker
//! finishes first.

use crate::core::engine::CompatibilityEngine;
use crate::domain::model::{CompatibilityResult, Profile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PairOutcome {
    pub left: usize,
    pub right: usize,
    pub players: [String; 2],
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<CompatibilityResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    pub generated_at: DateTime<Utc>,
    pub compatibility_version: String,
    pub profile_count: usize,
    pub scored: usize,
    pub failed: usize,
    pub pairs: Vec<PairOutcome>,
}

impl BatchReport {
    /// Successful results, best match first.
    pub fn ranked(&self) -> Vec<&CompatibilityResult> {
        let mut results: Vec<&CompatibilityResult> =
            self.pairs.iter().filter_map(|p| p.result.as_ref()).collect();
        results.sort_by(|a, b| b.overall_score.cmp(&a.overall_score));
        results
    }
}

pub async fn score_all_pairs(
    engine: &CompatibilityEngine,
    profiles: Vec<Profile>,
    max_concurrency: usize,
) -> BatchReport {
    let profile_count = profiles.len();
    let profiles = Arc::new(profiles);
    let semaphore = Arc::new(Semaphore::new(max_concurrency.max(1)));
    let mut tasks = JoinSet::new();

    info!(
        "Scoring {} pairs from {} profiles with {} workers",
        profile_count * profile_count.saturating_sub(1) / 2,
        profile_count,
        max_concurrency.max(1)
    );

    for left in 0..profile_count {
        for right in (left + 1)..profile_count {
            let sem = Arc::clone(&semaphore);
            let profiles = Arc::clone(&profiles);
            let engine = engine.clone();

            tasks.spawn(async move {
                let players = [
                    profiles[left].user_id.clone(),
                    profiles[right].user_id.clone(),
                ];
                let _permit = match sem.acquire_owned().await {
                    Ok(p) => p,
                    Err(_) => {
                        error!("Semaphore closed for pair ({}, {})", left, right);
                        let outcome: Result<CompatibilityResult, String> =
                            Err("worker pool closed before scoring".to_string());
                        return (left, right, players, outcome);
                    }
                };
                let scored = tokio::task::spawn_blocking(move || {
                    engine
                        .score(&profiles[left], &profiles[right])
                        .map_err(|e| {
                            warn!("Pair ({}, {}) not scored: {}", left, right, e);
                            e.user_friendly_message()
                        })
                })
                .await;

                let outcome = scored.unwrap_or_else(|e| {
                    error!("Scoring task for pair ({}, {}) failed: {}", left, right, e);
                    Err(format!("scoring task failed: {}", e))
                });
                (left, right, players, outcome)
            });
        }
    }

    let mut pairs = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((left, right, players, outcome)) => {
                let (result, error) = match outcome {
                    Ok(result) => (Some(result), None),
                    Err(message) => (None, Some(message)),
                };
                pairs.push(PairOutcome {
                    left,
                    right,
                    players,
                    result,
                    error,
                });
            }
            Err(e) => error!("Task panicked: {}", e),
        }
    }

    report_missing_pairs(&mut pairs, &profiles);
    pairs.sort_by_key(|p| (p.left, p.right));

    let failed = pairs.iter().filter(|p| p.error.is_some()).count();
    BatchReport {
        generated_at: Utc::now(),
        compatibility_version: engine.scoring_config().name.clone(),
        profile_count,
        scored: pairs.len() - failed,
        failed,
        pairs,
    }
}

/// Adds a failed outcome for every pair whose task never reported back.
fn report_missing_pairs(pairs: &mut Vec<PairOutcome>, profiles: &[Profile]) {
    let reported: HashSet<(usize, usize)> = pairs.iter().map(|p| (p.left, p.right)).collect();
    for left in 0..profiles.len() {
        for right in (left + 1)..profiles.len() {
            if reported.contains(&(left, right)) {
                continue;
            }
            pairs.push(PairOutcome {
                left,
                right,
                players: [
                    profiles[left].user_id.clone(),
                    profiles[right].user_id.clone(),
                ],
                result: None,
                error: Some("scoring task did not complete".to_string()),
            });
        }
    }
}
