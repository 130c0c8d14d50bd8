use crate::config::scoring::PowerComplementTable;
use crate::domain::model::{PowerProfile, PowerRole};

/// Coarse table over the two role labels, in [0, 1].
pub fn power_complement(a: &PowerProfile, b: &PowerProfile, table: &PowerComplementTable) -> f64 {
    use PowerRole::*;

    let score = match (a.role, b.role) {
        (Switch, Switch) => table.both_switch,
        (Top, Bottom) | (Bottom, Top) => {
            let avg_confidence = (a.confidence + b.confidence) / 2.0;
            table.complementary_base + table.complementary_confidence_bonus * avg_confidence
        }
        (Switch | Undefined, Top | Bottom) | (Top | Bottom, Switch | Undefined) => table.mixed,
        // 同極、兩者皆未定、Switch 對 Undefined
        (Top, Top) | (Bottom, Bottom) | (Undefined, Undefined) | (Switch, Undefined)
        | (Undefined, Switch) => table.same_or_undefined,
    };
    score.clamp(0.0, 1.0)
}
