use crate::config::scoring::{ProfileConfig, ScoringConfig, CURRENT_PRESET};
use crate::utils::error::{EngineError, Result};
use crate::utils::validation::{validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration file: a preset plus optional per-field overrides.
///
/// ```toml
/// [engine]
/// preset = "v0.5"
///
/// [weights]
/// activity = 0.40
/// disclosure = 0.15
///
/// [profile.power]
/// floor = 25.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineToml {
    #[serde(default)]
    pub engine: EngineSection,
    #[serde(default)]
    pub weights: WeightOverrides,
    #[serde(default)]
    pub power_complement: PowerComplementOverrides,
    #[serde(default)]
    pub domain: DomainOverrides,
    #[serde(default)]
    pub activity: ActivityOverrides,
    #[serde(default)]
    pub bands: BandOverrides,
    #[serde(default)]
    pub profile: ProfileSection,
    #[serde(default)]
    pub batch: BatchSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineSection {
    pub preset: Option<String>,
    /// Compatibility version stamped on results; defaults to the preset name.
    pub name: Option<String>,
    pub boundary_penalty: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightOverrides {
    pub power: Option<f64>,
    pub domain: Option<f64>,
    pub activity: Option<f64>,
    pub disclosure: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PowerComplementOverrides {
    pub both_switch: Option<f64>,
    pub complementary_base: Option<f64>,
    pub complementary_confidence_bonus: Option<f64>,
    pub mixed: Option<f64>,
    pub same_or_undefined: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainOverrides {
    pub complementary_floor: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActivityOverrides {
    pub interest_threshold: Option<f64>,
    pub primary_axis_weight: Option<f64>,
    pub secondary_axis_weight: Option<f64>,
    pub secondary_partial_credit: Option<f64>,
    pub same_pole_one_versatile: Option<f64>,
    pub same_pole_both_versatile: Option<f64>,
    pub same_pole_non_directional: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BandOverrides {
    pub exceptional: Option<f64>,
    pub high: Option<f64>,
    pub moderate: Option<f64>,
    pub lower: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSection {
    #[serde(default)]
    pub power: PowerThresholdOverrides,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PowerThresholdOverrides {
    pub floor: Option<f64>,
    pub dual_band: Option<f64>,
    pub opposing_penalty: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BatchSection {
    pub max_concurrency: Option<usize>,
}

fn apply(target: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *target = v;
    }
}

impl EngineToml {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EngineError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn preset_name(&self) -> &str {
        self.engine.preset.as_deref().unwrap_or(CURRENT_PRESET)
    }

    pub fn max_concurrency(&self) -> usize {
        self.batch.max_concurrency.unwrap_or(4)
    }

    /// 套用 preset 與覆寫值，並驗證結果
    pub fn resolve(&self) -> Result<(ScoringConfig, ProfileConfig)> {
        let mut scoring = ScoringConfig::preset(self.preset_name())?;

        if let Some(name) = &self.engine.name {
            scoring.name = name.clone();
        }
        apply(&mut scoring.boundary_penalty, self.engine.boundary_penalty);

        let w = &self.weights;
        apply(&mut scoring.weights.power, w.power);
        apply(&mut scoring.weights.domain, w.domain);
        apply(&mut scoring.weights.activity, w.activity);
        apply(&mut scoring.weights.disclosure, w.disclosure);

        let p = &self.power_complement;
        let table = &mut scoring.power_complement;
        apply(&mut table.both_switch, p.both_switch);
        apply(&mut table.complementary_base, p.complementary_base);
        apply(
            &mut table.complementary_confidence_bonus,
            p.complementary_confidence_bonus,
        );
        apply(&mut table.mixed, p.mixed);
        apply(&mut table.same_or_undefined, p.same_or_undefined);

        apply(
            &mut scoring.domain.complementary_floor,
            self.domain.complementary_floor,
        );

        let a = &self.activity;
        let settings = &mut scoring.activity;
        apply(&mut settings.interest_threshold, a.interest_threshold);
        apply(&mut settings.primary_axis_weight, a.primary_axis_weight);
        apply(&mut settings.secondary_axis_weight, a.secondary_axis_weight);
        apply(&mut settings.secondary_partial_credit, a.secondary_partial_credit);
        apply(&mut settings.same_pole_one_versatile, a.same_pole_one_versatile);
        apply(&mut settings.same_pole_both_versatile, a.same_pole_both_versatile);
        apply(&mut settings.same_pole_non_directional, a.same_pole_non_directional);

        let b = &self.bands;
        apply(&mut scoring.bands.exceptional, b.exceptional);
        apply(&mut scoring.bands.high, b.high);
        apply(&mut scoring.bands.moderate, b.moderate);
        apply(&mut scoring.bands.lower, b.lower);

        let mut profile = ProfileConfig::default();
        let t = &self.profile.power;
        apply(&mut profile.power.floor, t.floor);
        apply(&mut profile.power.dual_band, t.dual_band);
        apply(&mut profile.power.opposing_penalty, t.opposing_penalty);

        scoring.validate()?;
        profile.validate()?;
        Ok((scoring, profile))
    }
}

impl Validate for EngineToml {
    fn validate(&self) -> Result<()> {
        if let Some(workers) = self.batch.max_concurrency {
            validate_range("batch.max_concurrency", workers, 1, 256)?;
        }
        self.resolve().map(|_| ())
    }
}
