// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    Gender, Profile, Preferences, RangePreference, ValuePreference, ListPreference, EducationPreference,
    Dimension, Criterion, FailedCriterion, FailureSide, MatchScore, NearMatchResult, Tolerances,
};
pub use requests::{EvaluationRequest, Operation};
pub use responses::{EvaluationResponse, CandidateOutcome};
