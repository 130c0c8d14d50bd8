pub mod activities;
pub mod arousal;
pub mod compatibility;
pub mod domains;
pub mod engine;
pub mod normalize;
pub mod power;
pub mod profile;

pub use crate::domain::model::{CompatibilityResult, Derivation, Profile, SurveyAnswers};
pub use crate::domain::ports::Storage;
pub use crate::utils::error::Result;
