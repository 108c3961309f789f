use crate::core::criteria::{rule, Pairing};
use crate::models::{Dimension, Tolerances};

/// Band within which an out-of-range ordinal deal-breaker stays relaxable.
/// Zero for every dimension without an ordinal scale.
#[inline]
pub fn band(dimension: Dimension, tolerances: &Tolerances) -> u16 {
    match dimension {
        Dimension::Age => u16::from(tolerances.age_years),
        Dimension::Height => u16::from(tolerances.height_steps),
        _ => 0,
    }
}

/// Decide whether a failed criterion is close enough to be relaxable
///
/// Only tolerance-eligible dimensions can qualify. An unmeasurable deviation
/// (unknown or malformed ordinal value) is conservatively not relaxable.
pub fn is_within_tolerance(dimension: Dimension, pairing: &Pairing, tolerances: &Tolerances) -> bool {
    let rule = rule(dimension);
    if !rule.is_tolerance_eligible() {
        return false;
    }

    match rule.deviation(pairing) {
        Some(deviation) => deviation <= band(dimension, tolerances),
        None => false,
    }
}
