use crate::core::criteria::{evaluate_all, Pairing};
use crate::models::{Criterion, MatchScore, Profile};

/// Calculate a one-directional compatibility score (0-100) for a candidate
///
/// The candidate is judged against the seeker's preferences only:
/// percentage = round(matched_criteria / evaluated_criteria * 100)
///
/// Dimensions the seeker left unset are not evaluated. This is a display and
/// ranking aid; it does not decide mutuality.
pub fn calculate_match_score(seeker: &Profile, candidate: &Profile) -> MatchScore {
    score_pairing(&Pairing::new(seeker, candidate))
}

/// Score an explicit pairing (owner = seeker)
pub fn score_pairing(pairing: &Pairing) -> MatchScore {
    let criteria = evaluate_all(pairing);
    let percentage = calculate_percentage(&criteria);

    tracing::trace!(
        "Scored {} for {}: {}% over {} criteria",
        pairing.judged.user_id,
        pairing.owner.user_id,
        percentage,
        criteria.len()
    );

    MatchScore { percentage, criteria }
}

/// Percentage of matched criteria, rounded; 100 when nothing was evaluated
#[inline]
fn calculate_percentage(criteria: &[Criterion]) -> u8 {
    if criteria.is_empty() {
        return 100;
    }

    let matched = criteria.iter().filter(|c| c.matched).count() as f64;
    let ratio = matched / criteria.len() as f64;

    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}
