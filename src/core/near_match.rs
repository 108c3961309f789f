use std::collections::BTreeMap;

use chrono::{NaiveDate, Utc};
use tracing::instrument;

use crate::core::criteria::{evaluate_all, Pairing};
use crate::core::dealbreakers::{classify, is_soft, Relaxation};
use crate::core::mutual::is_mutual_pairing;
use crate::core::relocation::{can_excuse_location_mismatch, Party};
use crate::core::tolerance::is_within_tolerance;
use crate::models::{Criterion, FailedCriterion, FailureSide, NearMatchResult, Profile, Tolerances};

/// Default budget of relaxable failures a near match may carry
pub const DEFAULT_MAX_FAILED_CRITERIA: usize = 2;

/// Why a non-mutual candidate was left out of the near-match list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exclusion {
    /// The candidate rejects who the seeker is; no preference change can fix it
    RejectsSeeker(FailedCriterion),
    /// The seeker's own deal-breaker fails beyond what can be relaxed
    NotRelaxable(FailedCriterion),
    OverBudget(usize),
}

/// Outcome of assessing one seeker/candidate pair for near matching
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Assessment {
    /// Already a mutual match; belongs in the match list
    Mutual,
    Excluded(Exclusion),
    Near(Vec<FailedCriterion>),
}

/// Find candidates the seeker could match by loosening their own preferences
///
/// # Pipeline Stages
/// 1. Skip self and same-gender candidates
/// 2. Skip candidates that are already a mutual match
/// 3. Collect failing dimensions from both directions, deduplicated by name
/// 4. Decide relaxability per failure; any non-relaxable failure excludes
/// 5. Keep candidates within the failure budget, sorted by ascending failures
#[instrument(skip_all, fields(seeker = %seeker.user_id, candidates = candidates.len()))]
pub fn find_near_matches(
    seeker: &Profile,
    candidates: &[Profile],
    max_failed_criteria: usize,
    tolerances: &Tolerances,
) -> Vec<NearMatchResult> {
    find_near_matches_on(seeker, candidates, max_failed_criteria, tolerances, Utc::now().date_naive())
}

/// As [`find_near_matches`], with ages derived against an explicit date
pub fn find_near_matches_on(
    seeker: &Profile,
    candidates: &[Profile],
    max_failed_criteria: usize,
    tolerances: &Tolerances,
    today: NaiveDate,
) -> Vec<NearMatchResult> {
    let mut results: Vec<NearMatchResult> = candidates
        .iter()
        .filter(|candidate| candidate.user_id != seeker.user_id)
        .filter(|candidate| candidate.gender != seeker.gender)
        .filter_map(|candidate| {
            let pairing = Pairing::on(seeker, candidate, today);
            match assess(&pairing, max_failed_criteria, tolerances) {
                Assessment::Near(failed_criteria) => Some(NearMatchResult {
                    profile: candidate.clone(),
                    failed_criteria,
                }),
                Assessment::Mutual => {
                    tracing::trace!("Skipping {}: already a mutual match", candidate.user_id);
                    None
                }
                Assessment::Excluded(reason) => {
                    tracing::debug!("Excluding {} from near matches: {:?}", candidate.user_id, reason);
                    None
                }
            }
        })
        .collect();

    // Stable sort keeps candidate-pool order among ties
    results.sort_by_key(|r| r.failed_criteria.len());

    tracing::debug!("Found {} near matches", results.len());

    results
}

/// Assess a single pairing where `owner` is the seeker and `judged` the candidate
pub fn assess(pairing: &Pairing, max_failed_criteria: usize, tolerances: &Tolerances) -> Assessment {
    if is_mutual_pairing(pairing) {
        return Assessment::Mutual;
    }

    let failures = collect_failures(pairing, tolerances);
    if failures.is_empty() {
        return Assessment::Mutual;
    }

    if let Some(blocker) = failures.iter().find(|f| !f.relaxable) {
        let exclusion = if blocker.side == FailureSide::Seeker {
            Exclusion::NotRelaxable(*blocker)
        } else {
            Exclusion::RejectsSeeker(*blocker)
        };
        return Assessment::Excluded(exclusion);
    }

    if failures.len() > max_failed_criteria {
        return Assessment::Excluded(Exclusion::OverBudget(failures.len()));
    }

    Assessment::Near(failures)
}

/// Failing dimensions from both directions, one entry per dimension
///
/// A dimension failing in both directions is reported once with side `Both`,
/// and is relaxable only if both of its failures are.
pub fn collect_failures(pairing: &Pairing, tolerances: &Tolerances) -> Vec<FailedCriterion> {
    let mut failures: BTreeMap<_, FailedCriterion> = BTreeMap::new();

    let directions = [(FailureSide::Seeker, *pairing), (FailureSide::Candidate, pairing.reversed())];

    for (side, direction) in directions {
        for criterion in evaluate_all(&direction).into_iter().filter(|c| !c.matched) {
            let relaxable = is_relaxable(&criterion, side, pairing, tolerances);

            failures
                .entry(criterion.name)
                .and_modify(|existing| {
                    existing.side = existing.side.merge(side);
                    existing.is_dealbreaker |= criterion.is_dealbreaker;
                    existing.relaxable &= relaxable;
                })
                .or_insert(FailedCriterion {
                    name: criterion.name,
                    is_dealbreaker: criterion.is_dealbreaker,
                    side,
                    relaxable,
                });
        }
    }

    failures.into_values().collect()
}

/// Decide whether one directional failure is fixable from the seeker's side
///
/// `pairing` is always seeker-first; `side` says whose preference failed.
fn is_relaxable(criterion: &Criterion, side: FailureSide, pairing: &Pairing, tolerances: &Tolerances) -> bool {
    // Soft preferences never reject in either direction
    if !criterion.is_dealbreaker || is_soft(criterion.name) {
        return true;
    }

    let (seeker, candidate) = (pairing.owner, pairing.judged);

    match (classify(criterion.name), side) {
        (Relaxation::Toleranced, FailureSide::Seeker) => {
            is_within_tolerance(criterion.name, pairing, tolerances)
        }
        // The seeker can always widen their own location list
        (Relaxation::Relocatable, FailureSide::Seeker) => true,
        (Relaxation::Relocatable, FailureSide::Candidate) => {
            can_excuse_location_mismatch(seeker, candidate, Party::Candidate)
        }
        // The seeker cannot change the candidate's deal-breakers or their own
        // immutable attributes, nor relax critical preferences of their own
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Dimension, Gender};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn seeker() -> Profile {
        let mut p = Profile::new("seeker", Gender::Female);
        p.age = Some(24);
        p.religion = Some("Hindu".to_string());
        p.current_location = Some("California".to_string());
        p
    }

    fn candidate(id: &str, age: u8) -> Profile {
        let mut p = Profile::new(id, Gender::Male);
        p.age = Some(age);
        p.religion = Some("Hindu".to_string());
        p.current_location = Some("California".to_string());
        p
    }

    fn with_age_dealbreaker(mut p: Profile, min: u8, max: u8) -> Profile {
        p.preferences.age.min = Some(min);
        p.preferences.age.max = Some(max);
        p.preferences.age.is_dealbreaker = true;
        p
    }

    fn find(seeker: &Profile, candidates: &[Profile]) -> Vec<NearMatchResult> {
        find_near_matches_on(seeker, candidates, DEFAULT_MAX_FAILED_CRITERIA, &Tolerances::default(), today())
    }

    #[test]
    fn test_mutual_match_is_not_near() {
        let s = seeker();
        let pairing_candidate = candidate("c1", 26);
        let pairing = Pairing::on(&s, &pairing_candidate, today());

        assert_eq!(assess(&pairing, 2, &Tolerances::default()), Assessment::Mutual);
        assert!(find(&s, &[pairing_candidate]).is_empty());
    }

    #[test]
    fn test_dedup_across_directions() {
        let mut s = with_age_dealbreaker(seeker(), 30, 35);
        s.preferences.religion.values = vec!["Hindu".to_string()];
        let mut c = with_age_dealbreaker(candidate("c1", 28), 20, 22);
        c.religion = Some("Hindu".to_string());

        let failures = collect_failures(&Pairing::on(&s, &c, today()), &Tolerances::default());

        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].name, Dimension::Age);
        assert_eq!(failures[0].side, FailureSide::Both);
        assert!(!failures[0].relaxable);
    }

    #[test]
    fn test_candidate_side_age_rejection_excludes() {
        let s = seeker();
        let c = with_age_dealbreaker(candidate("c1", 28), 25, 30);

        let assessment = assess(&Pairing::on(&s, &c, today()), 5, &Tolerances::default());
        assert!(matches!(assessment, Assessment::Excluded(Exclusion::RejectsSeeker(f)) if f.name == Dimension::Age));
    }

    #[test]
    fn test_seeker_critical_dealbreaker_excludes() {
        let mut s = seeker();
        s.preferences.religion.values = vec!["Jain".to_string()];
        s.preferences.religion.is_dealbreaker = true;
        let c = candidate("c1", 26);

        let assessment = assess(&Pairing::on(&s, &c, today()), 5, &Tolerances::default());
        assert!(matches!(assessment, Assessment::Excluded(Exclusion::NotRelaxable(f)) if f.name == Dimension::Religion));
    }

    #[test]
    fn test_soft_dealbreaker_is_relaxable_from_either_side() {
        let mut s = seeker();
        s.smoking = Some("yes".to_string());
        s.preferences.drinking.value = Some("no".to_string());
        s.preferences.drinking.is_dealbreaker = true;
        let mut c = candidate("c1", 26);
        c.drinking = Some("socially".to_string());
        c.preferences.smoking.value = Some("no".to_string());
        c.preferences.smoking.is_dealbreaker = true;

        let results = find(&s, &[c]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].failed_criteria.len(), 2);
        assert!(results[0].failed_criteria.iter().all(|f| f.relaxable));
    }

    #[test]
    fn test_non_dealbreaker_failures_count_toward_budget() {
        let mut s = with_age_dealbreaker(seeker(), 25, 27);
        s.preferences.diet.value = Some("vegetarian".to_string());
        s.preferences.mother_tongue.value = Some("Tamil".to_string());
        let mut c = candidate("c1", 28);
        c.dietary_preference = Some("non_vegetarian".to_string());
        c.mother_tongue = Some("Hindi".to_string());

        let assessment = assess(&Pairing::on(&s, &c, today()), 2, &Tolerances::default());
        assert_eq!(assessment, Assessment::Excluded(Exclusion::OverBudget(3)));

        let assessment = assess(&Pairing::on(&s, &c, today()), 3, &Tolerances::default());
        assert!(matches!(assessment, Assessment::Near(ref f) if f.len() == 3));
    }

    #[test]
    fn test_seeker_location_relaxable_without_relocation() {
        let mut s = seeker();
        s.preferences.location.values = vec!["California".to_string()];
        s.preferences.location.is_dealbreaker = true;
        let mut c = candidate("c1", 26);
        c.current_location = Some("Illinois".to_string());

        let results = find(&s, &[c]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].failed_criteria[0].name, Dimension::Location);
        assert_eq!(results[0].failed_criteria[0].side, FailureSide::Seeker);
        assert!(results[0].failed_criteria[0].relaxable);
    }

    #[test]
    fn test_candidate_location_relaxable_when_candidate_relocates() {
        let mut s = seeker();
        s.current_location = Some("Texas".to_string());
        let mut c = candidate("c1", 26);
        c.preferences.location.values = vec!["California".to_string()];
        c.preferences.location.is_dealbreaker = true;

        assert!(find(&s, std::slice::from_ref(&c)).is_empty());

        c.open_to_relocation = Some("yes".to_string());
        let results = find(&s, &[c]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].failed_criteria[0].side, FailureSide::Candidate);
    }

    #[test]
    fn test_skips_self_and_same_gender() {
        let s = with_age_dealbreaker(seeker(), 25, 27);
        let mut me = candidate("seeker", 28);
        me.gender = Gender::Male;
        let mut same_gender = candidate("c2", 28);
        same_gender.gender = Gender::Female;

        assert!(find(&s, &[me, same_gender]).is_empty());
    }

    #[test]
    fn test_sorted_by_failure_count() {
        let mut s = with_age_dealbreaker(seeker(), 25, 27);
        s.preferences.smoking.value = Some("no".to_string());

        let mut two = candidate("two", 28);
        two.smoking = Some("yes".to_string());
        let one = candidate("one", 28);

        let results = find(&s, &[two, one]);
        let ids: Vec<&str> = results.iter().map(|r| r.profile.user_id.as_str()).collect();
        assert_eq!(ids, vec!["one", "two"]);
    }
}
