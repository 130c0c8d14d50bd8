//! Versioned scoring and profile configuration.
//!
//! A configuration is a plain value. Older weight sets survive only as named
//! presets so legacy profiles can be re-scored the way they were originally;
//! there is one scoring code path.

use crate::utils::error::{EngineError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_not_greater, validate_positive, validate_range,
    validate_strictly_descending, validate_sums_to_one, validate_unit_interval, Validate,
};
use serde::{Deserialize, Serialize};

pub const CURRENT_PRESET: &str = "v0.5";
pub const PRESET_NAMES: [&str; 2] = ["v0.4", "v0.5"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub power: f64,
    pub domain: f64,
    pub activity: f64,
    pub disclosure: f64,
}

impl ScoreWeights {
    fn as_array(&self) -> [f64; 4] {
        [self.power, self.domain, self.activity, self.disclosure]
    }

    /// Weights scaled to sum to 1. A validated config is already normalized;
    /// this guards hand-built values.
    pub fn normalized(&self) -> Self {
        let sum: f64 = self.as_array().iter().sum();
        if sum <= 0.0 {
            return *self;
        }
        Self {
            power: self.power / sum,
            domain: self.domain / sum,
            activity: self.activity / sum,
            disclosure: self.disclosure / sum,
        }
    }
}

/// Power complement table keyed by the pair of role labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerComplementTable {
    pub both_switch: f64,
    pub complementary_base: f64,
    pub complementary_confidence_bonus: f64,
    pub mixed: f64,
    pub same_or_undefined: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DomainSettings {
    /// Minimum both partners need on exploration and verbal for full credit
    /// in a complementary pair.
    pub complementary_floor: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivitySettings {
    pub interest_threshold: f64,
    pub primary_axis_weight: f64,
    pub secondary_axis_weight: f64,
    pub secondary_partial_credit: f64,
    pub same_pole_one_versatile: f64,
    pub same_pole_both_versatile: f64,
    pub same_pole_non_directional: f64,
}

/// Lower bounds (inclusive) of each band on the 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandCutPoints {
    pub exceptional: f64,
    pub high: f64,
    pub moderate: f64,
    pub lower: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Stamped on every result as the compatibility version.
    pub name: String,
    pub weights: ScoreWeights,
    pub power_complement: PowerComplementTable,
    pub domain: DomainSettings,
    pub activity: ActivitySettings,
    pub boundary_penalty: f64,
    pub bands: BandCutPoints,
}

impl ScoringConfig {
    pub fn preset(name: &str) -> Result<Self> {
        match name {
            "v0.4" => Ok(Self::v0_4()),
            "v0.5" => Ok(Self::v0_5()),
            _ => Err(EngineError::UnknownPreset {
                name: name.to_string(),
            }),
        }
    }

    /// Disclosure-heavy weights with generous same-pole credit.
    pub fn v0_4() -> Self {
        Self {
            name: "v0.4".to_string(),
            weights: ScoreWeights {
                power: 0.15,
                domain: 0.25,
                activity: 0.40,
                disclosure: 0.20,
            },
            activity: ActivitySettings {
                same_pole_one_versatile: 0.2,
                same_pole_both_versatile: 0.5,
                same_pole_non_directional: 1.0,
                ..shared_activity()
            },
            ..Self::v0_5()
        }
    }

    pub fn v0_5() -> Self {
        Self {
            name: "v0.5".to_string(),
            weights: ScoreWeights {
                power: 0.20,
                domain: 0.25,
                activity: 0.45,
                disclosure: 0.10,
            },
            power_complement: PowerComplementTable {
                both_switch: 0.90,
                complementary_base: 0.85,
                complementary_confidence_bonus: 0.15,
                mixed: 0.70,
                same_or_undefined: 0.40,
            },
            domain: DomainSettings {
                complementary_floor: 50.0,
            },
            activity: shared_activity(),
            boundary_penalty: 0.20,
            bands: BandCutPoints {
                exceptional: 85.0,
                high: 70.0,
                moderate: 55.0,
                lower: 40.0,
            },
        }
    }
}

fn shared_activity() -> ActivitySettings {
    ActivitySettings {
        interest_threshold: 0.5,
        primary_axis_weight: 0.8,
        secondary_axis_weight: 0.2,
        secondary_partial_credit: 0.5,
        same_pole_one_versatile: 0.1,
        same_pole_both_versatile: 0.2,
        same_pole_non_directional: 0.3,
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::v0_5()
    }
}

impl Validate for ScoringConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("name", &self.name)?;

        let w = &self.weights;
        validate_unit_interval("weights.power", w.power)?;
        validate_unit_interval("weights.domain", w.domain)?;
        validate_unit_interval("weights.activity", w.activity)?;
        validate_unit_interval("weights.disclosure", w.disclosure)?;
        validate_sums_to_one("weights", &w.as_array())?;

        let p = &self.power_complement;
        validate_unit_interval("power_complement.both_switch", p.both_switch)?;
        validate_unit_interval("power_complement.mixed", p.mixed)?;
        validate_unit_interval("power_complement.same_or_undefined", p.same_or_undefined)?;
        validate_unit_interval("power_complement.complementary_base", p.complementary_base)?;
        validate_unit_interval(
            "power_complement.complementary_confidence_bonus",
            p.complementary_confidence_bonus,
        )?;
        validate_not_greater(
            "power_complement",
            p.complementary_base + p.complementary_confidence_bonus,
            1.0,
            "1.0",
        )?;

        validate_positive("domain.complementary_floor", self.domain.complementary_floor)?;
        validate_range(
            "domain.complementary_floor",
            self.domain.complementary_floor,
            0.0,
            100.0,
        )?;

        let a = &self.activity;
        validate_positive("activity.interest_threshold", a.interest_threshold)?;
        validate_unit_interval("activity.interest_threshold", a.interest_threshold)?;
        validate_unit_interval("activity.primary_axis_weight", a.primary_axis_weight)?;
        validate_unit_interval("activity.secondary_axis_weight", a.secondary_axis_weight)?;
        validate_sums_to_one(
            "activity.axis_weights",
            &[a.primary_axis_weight, a.secondary_axis_weight],
        )?;
        validate_unit_interval("activity.secondary_partial_credit", a.secondary_partial_credit)?;
        validate_unit_interval("activity.same_pole_one_versatile", a.same_pole_one_versatile)?;
        validate_not_greater(
            "activity.same_pole_one_versatile",
            a.same_pole_one_versatile,
            a.same_pole_both_versatile,
            "same_pole_both_versatile",
        )?;
        validate_unit_interval("activity.same_pole_both_versatile", a.same_pole_both_versatile)?;
        // 同極配對不可高於互補配對
        validate_not_greater(
            "activity.same_pole_one_versatile",
            a.same_pole_one_versatile,
            a.primary_axis_weight.min(a.secondary_axis_weight),
            "the smaller axis weight",
        )?;
        validate_unit_interval(
            "activity.same_pole_non_directional",
            a.same_pole_non_directional,
        )?;

        if !(self.boundary_penalty >= 0.0) {
            return Err(EngineError::InvalidConfigValueError {
                field: "boundary_penalty".to_string(),
                value: self.boundary_penalty.to_string(),
                reason: "Penalty cannot be negative".to_string(),
            });
        }

        let b = &self.bands;
        let cuts = [b.exceptional, b.high, b.moderate, b.lower];
        for cut in cuts {
            validate_range("bands", cut, 0.0, 100.0)?;
        }
        validate_strictly_descending("bands", &cuts)?;

        Ok(())
    }
}

/// Thresholds of the power-role decision table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerThresholds {
    /// Both raw scores below this → Undefined.
    pub floor: f64,
    /// Both at or above the floor and this close → Switch.
    pub dual_band: f64,
    /// Share of the opposing score subtracted from confidence.
    pub opposing_penalty: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub power: PowerThresholds,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            power: PowerThresholds {
                floor: 30.0,
                dual_band: 15.0,
                opposing_penalty: 0.3,
            },
        }
    }
}

impl Validate for ProfileConfig {
    fn validate(&self) -> Result<()> {
        validate_range("power.floor", self.power.floor, 0.0, 100.0)?;
        validate_range("power.dual_band", self.power.dual_band, 0.0, 100.0)?;
        validate_unit_interval("power.opposing_penalty", self.power.opposing_penalty)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_are_valid() {
        for name in PRESET_NAMES {
            let config = ScoringConfig::preset(name).unwrap();
            assert_eq!(config.name, name);
            assert!(config.validate().is_ok(), "preset {} failed validation", name);
        }
        assert!(ProfileConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_is_current_preset() {
        assert_eq!(ScoringConfig::default().name, CURRENT_PRESET);
    }

    #[test]
    fn test_presets_differ_only_in_weights_and_same_pole_credit() {
        let old = ScoringConfig::v0_4();
        let new = ScoringConfig::v0_5();
        assert_eq!(old.power_complement, new.power_complement);
        assert_eq!(old.bands, new.bands);
        assert_eq!(old.activity.primary_axis_weight, new.activity.primary_axis_weight);
        assert_eq!(old.weights.disclosure, 0.20);
        assert_eq!(new.weights.activity, 0.45);
        assert!(old.activity.same_pole_non_directional > new.activity.same_pole_non_directional);
    }

    #[test]
    fn test_unknown_preset() {
        let err = ScoringConfig::preset("v0.3").unwrap_err();
        assert!(matches!(err, EngineError::UnknownPreset { .. }));
    }

    #[test]
    fn test_weights_normalized() {
        let weights = ScoreWeights {
            power: 2.0,
            domain: 2.0,
            activity: 4.0,
            disclosure: 2.0,
        }
        .normalized();
        assert!((weights.activity - 0.4).abs() < 1e-12);
        let sum = weights.power + weights.domain + weights.activity + weights.disclosure;
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = ScoringConfig::default();
        config.weights.activity = 0.9;
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.activity.same_pole_one_versatile = 0.5;
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.bands.high = 90.0;
        assert!(config.validate().is_err());

        let mut config = ScoringConfig::default();
        config.boundary_penalty = -0.1;
        assert!(config.validate().is_err());
    }
}
