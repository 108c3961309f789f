//! Compat Engine - bidirectional compatibility engine for matrimony profiles
//!
//! This library decides, for a seeker and a candidate, whether they are a mutual
//! match, how well the candidate fits the seeker's preferences, and which
//! non-matching candidates are near matches the seeker could reach by loosening
//! their own preferences. All rules are deterministic and side-effect free.

pub mod config;
pub mod core;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use crate::core::CompatibilityEngine;
pub use error::EngineError;
pub use models::{
    Criterion, Dimension, FailedCriterion, FailureSide, Gender, MatchScore, NearMatchResult, Preferences,
    Profile, Tolerances,
};

/// Score a candidate against the seeker's preferences (one-directional)
pub fn calculate_match_score(seeker: &Profile, candidate: &Profile) -> MatchScore {
    crate::core::calculate_match_score(seeker, candidate)
}

/// True only if both sides pass each other's deal-breakers
pub fn is_mutual_match(a: &Profile, b: &Profile) -> bool {
    crate::core::is_mutual_match(a, b)
}

/// Candidate checked against the seeker's deal-breakers only
pub fn matches_seeker_preferences(seeker: &Profile, candidate: &Profile) -> bool {
    crate::core::matches_seeker_preferences(seeker, candidate)
}

/// Near matches with default tolerances; `max_failed_criteria` defaults to 2
pub fn find_near_matches(
    seeker: &Profile,
    candidates: &[Profile],
    max_failed_criteria: Option<usize>,
) -> Vec<NearMatchResult> {
    CompatibilityEngine::default().find_near_matches(seeker, candidates, max_failed_criteria)
}
