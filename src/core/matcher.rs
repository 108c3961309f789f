use crate::core::{
    mutual::{is_mutual_match, matches_seeker_preferences},
    near_match::{find_near_matches, DEFAULT_MAX_FAILED_CRITERIA},
    scoring::calculate_match_score,
};
use crate::models::{
    CandidateOutcome, EvaluationRequest, EvaluationResponse, MatchScore, NearMatchResult, Operation, Profile,
    Tolerances,
};

/// Main compatibility orchestrator - holds the tunables shared by every evaluation
///
/// # Operations
/// 1. One-directional match score
/// 2. One-directional deal-breaker check
/// 3. Bidirectional mutual match predicate
/// 4. Near-match search over a candidate pool
///
/// The engine owns no mutable state and is cheap to clone across threads.
#[derive(Debug, Clone, Copy)]
pub struct CompatibilityEngine {
    tolerances: Tolerances,
    max_failed_criteria: usize,
}

impl CompatibilityEngine {
    pub fn new(tolerances: Tolerances, max_failed_criteria: usize) -> Self {
        Self {
            tolerances,
            max_failed_criteria,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(Tolerances::default(), DEFAULT_MAX_FAILED_CRITERIA)
    }

    pub fn tolerances(&self) -> &Tolerances {
        &self.tolerances
    }

    pub fn max_failed_criteria(&self) -> usize {
        self.max_failed_criteria
    }

    /// Score a candidate against the seeker's preferences (display/ranking aid)
    pub fn calculate_match_score(&self, seeker: &Profile, candidate: &Profile) -> MatchScore {
        calculate_match_score(seeker, candidate)
    }

    /// Check the candidate against the seeker's deal-breakers only
    pub fn matches_seeker_preferences(&self, seeker: &Profile, candidate: &Profile) -> bool {
        matches_seeker_preferences(seeker, candidate)
    }

    /// Bidirectional deal-breaker check
    pub fn is_mutual_match(&self, a: &Profile, b: &Profile) -> bool {
        is_mutual_match(a, b)
    }

    /// Find near matches for a seeker
    ///
    /// # Arguments
    /// * `seeker` - The profile whose near matches are wanted
    /// * `candidates` - Pre-filtered candidate pool from the caller
    /// * `max_failed_criteria` - Failure budget; the engine default when `None`
    ///
    /// # Returns
    /// Near matches sorted by ascending failed-criteria count
    pub fn find_near_matches(
        &self,
        seeker: &Profile,
        candidates: &[Profile],
        max_failed_criteria: Option<usize>,
    ) -> Vec<NearMatchResult> {
        let budget = max_failed_criteria.unwrap_or(self.max_failed_criteria);
        find_near_matches(seeker, candidates, budget, &self.tolerances)
    }

    /// Run a batch request: the requested operation for the seeker against every candidate
    pub fn evaluate(&self, request: &EvaluationRequest) -> EvaluationResponse {
        let seeker = &request.seeker;

        tracing::info!(
            "Evaluating {:?} for {} against {} candidates",
            request.operation,
            seeker.user_id,
            request.candidates.len()
        );

        let mut response = EvaluationResponse {
            operation: request.operation,
            seeker_id: seeker.user_id.clone(),
            total_candidates: request.candidates.len(),
            outcomes: Vec::new(),
            near_matches: Vec::new(),
        };

        match request.operation {
            Operation::NearMatches => {
                response.near_matches =
                    self.find_near_matches(seeker, &request.candidates, request.max_failed_criteria);
            }
            Operation::Score => {
                response.outcomes = request
                    .candidates
                    .iter()
                    .map(|candidate| CandidateOutcome {
                        user_id: candidate.user_id.clone(),
                        score: Some(self.calculate_match_score(seeker, candidate)),
                        matched: None,
                    })
                    .collect();
            }
            Operation::Mutual | Operation::SeekerPreferences => {
                response.outcomes = request
                    .candidates
                    .iter()
                    .map(|candidate| {
                        let matched = if request.operation == Operation::Mutual {
                            self.is_mutual_match(seeker, candidate)
                        } else {
                            self.matches_seeker_preferences(seeker, candidate)
                        };
                        CandidateOutcome {
                            user_id: candidate.user_id.clone(),
                            score: None,
                            matched: Some(matched),
                        }
                    })
                    .collect();
            }
        }

        response
    }
}

impl Default for CompatibilityEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
