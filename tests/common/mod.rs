#![allow(dead_code)]

use attune_engine::{Profile, SurveyAnswers};
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_profile(name: &str) -> Profile {
    let content = std::fs::read_to_string(fixture_path(&format!("{}.json", name)))
        .unwrap_or_else(|e| panic!("fixture {} missing: {}", name, e));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("fixture {} invalid: {}", name, e))
}

pub fn load_answers(name: &str) -> SurveyAnswers {
    let content = std::fs::read_to_string(fixture_path(&format!("{}.json", name)))
        .unwrap_or_else(|e| panic!("fixture {} missing: {}", name, e));
    serde_json::from_str(&content).unwrap_or_else(|e| panic!("fixture {} invalid: {}", name, e))
}
