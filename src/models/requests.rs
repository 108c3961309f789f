use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::Profile;

/// Operation requested from the batch evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    Score,
    Mutual,
    SeekerPreferences,
    NearMatches,
}

/// Batch evaluation request: one seeker against a candidate pool
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationRequest {
    pub operation: Operation,
    #[validate(nested)]
    pub seeker: Profile,
    #[validate(length(min = 1))]
    pub candidates: Vec<Profile>,
    #[serde(default)]
    pub max_failed_criteria: Option<usize>,
}
