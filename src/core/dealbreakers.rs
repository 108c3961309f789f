use crate::models::Dimension;

/// How a failing deal-breaker on a dimension may be relaxed for near matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relaxation {
    /// Inherently non-critical: fixable by adjusting preference even when flagged a deal-breaker
    Soft,
    /// Ordinal dimension: relaxable within the tolerance band
    Toleranced,
    /// Excusable when the relevant party is open to relocation
    Relocatable,
    /// Never relaxable when flagged a deal-breaker
    Critical,
}

/// Static classification table, indexed in `Dimension` declaration order
static CLASSIFICATION: [(Dimension, Relaxation); 14] = [
    (Dimension::Age, Relaxation::Toleranced),
    (Dimension::Height, Relaxation::Toleranced),
    (Dimension::Religion, Relaxation::Critical),
    (Dimension::MaritalStatus, Relaxation::Critical),
    (Dimension::Diet, Relaxation::Critical),
    (Dimension::Community, Relaxation::Critical),
    (Dimension::Gotra, Relaxation::Critical),
    (Dimension::Education, Relaxation::Soft),
    (Dimension::Income, Relaxation::Soft),
    (Dimension::Smoking, Relaxation::Soft),
    (Dimension::Drinking, Relaxation::Soft),
    (Dimension::Location, Relaxation::Relocatable),
    (Dimension::HasChildren, Relaxation::Critical),
    (Dimension::MotherTongue, Relaxation::Critical),
];

#[inline]
pub fn classify(dimension: Dimension) -> Relaxation {
    CLASSIFICATION[dimension as usize].1
}

/// True for dimensions a failure on which is fixable regardless of the deal-breaker flag
#[inline]
pub fn is_soft(dimension: Dimension) -> bool {
    classify(dimension) == Relaxation::Soft
}
