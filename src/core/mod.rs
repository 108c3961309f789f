// Core algorithm exports
pub mod criteria;
pub mod dealbreakers;
pub mod matcher;
pub mod mutual;
pub mod near_match;
pub mod ordinal;
pub mod relocation;
pub mod scoring;
pub mod tolerance;

pub use criteria::{evaluate, evaluate_all, Pairing, DimensionRule, RULES};
pub use dealbreakers::{classify, Relaxation};
pub use matcher::CompatibilityEngine;
pub use mutual::{is_mutual_match, matches_seeker_preferences};
pub use near_match::{find_near_matches, Assessment, Exclusion, DEFAULT_MAX_FAILED_CRITERIA};
pub use relocation::{can_excuse_location_mismatch, Party};
pub use scoring::calculate_match_score;
pub use tolerance::is_within_tolerance;
