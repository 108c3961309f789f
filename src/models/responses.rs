use serde::{Deserialize, Serialize};
use crate::models::domain::{MatchScore, NearMatchResult};
use crate::models::requests::Operation;

/// Per-candidate outcome of a score, mutual or seeker-preference evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateOutcome {
    pub user_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<MatchScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<bool>,
}

/// Response for a batch evaluation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResponse {
    pub operation: Operation,
    pub seeker_id: String,
    pub total_candidates: usize,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcomes: Vec<CandidateOutcome>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub near_matches: Vec<NearMatchResult>,
}
