pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use app::batch::{score_all_pairs, BatchReport};
pub use config::scoring::{ProfileConfig, ScoringConfig};
pub use config::toml_config::EngineToml;
pub use core::compatibility::score_compatibility;
pub use core::engine::CompatibilityEngine;
pub use core::profile::{derive_profile, derive_validated_profile};
pub use domain::model::{CompatibilityResult, Derivation, Profile, SurveyAnswers};
pub use domain::schema::PROFILE_SCHEMA_VERSION;
pub use utils::error::{EngineError, Result};
